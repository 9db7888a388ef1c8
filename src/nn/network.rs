//! The layered unit graph and its two propagation algorithms.
//!
//! Units, layers and connections live in arenas owned by the [`Network`] and refer to each other
//! by index. A connection is stored exactly once, and both of its endpoints hold its
//! [`ConnectionId`], so a weight update is visible from either side without any syncing.
//!
//! Layers are strictly ordered: every connection runs from a unit in an earlier layer to a unit in
//! a later one, and the input layer never receives connections. Forward propagation walks the
//! layers in increasing order, backward propagation in decreasing order, and each layer is
//! finished before the next one starts.

use tracing::{debug, trace, warn};

use crate::error::{NetworkError, Result};
use crate::partitioner::Partitioner;

use super::activation::Activation;
use super::config::NetworkConfig;
use super::connection::{delta_rule, Connection, ConnectionId, ConnectionView};
use super::layer::{Layer, LayerId};
use super::learning_rate::LearningRate;
use super::unit::{Unit, UnitId};

#[derive(Debug, Clone, Default)]
pub struct Network {
    layers: Vec<Layer>,
    units: Vec<Unit>,
    connections: Vec<Connection>,
    config: NetworkConfig
}

impl Network {
    pub fn new() -> Self {
        Self::with_config(NetworkConfig::default())
    }

    pub fn with_config(config: NetworkConfig) -> Self {
        Self { layers: vec![], units: vec![], connections: vec![], config }
    }

    pub fn config(&self) -> &NetworkConfig { &self.config }

    pub fn layers(&self) -> &[Layer] { &self.layers }
    pub fn layer(&self, id: LayerId) -> Option<&Layer> { self.layers.get(id.0) }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> { self.units.get(id.0) }
    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> { self.units.get_mut(id.0) }
    pub fn unit_count(&self) -> usize { self.units.len() }

    pub fn connections(&self) -> &[Connection] { &self.connections }
    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> { self.connections.get(id.0) }
    pub fn connection_mut(&mut self, id: ConnectionId) -> Option<&mut Connection> {
        self.connections.get_mut(id.0)
    }

    /// Layer 0, fed directly with input data.
    pub fn input_layer(&self) -> Option<&Layer> {
        self.layers.first()
    }

    /// The last layer, once there is more than one.
    pub fn output_layer(&self) -> Option<&Layer> {
        if self.layers.len() > 1 { self.layers.last() } else { None }
    }

    /// Snapshot of every weight in connection creation order.
    pub fn weights(&self) -> Vec<f64> {
        self.connections.iter().map(Connection::weight).collect()
    }

    /// Appends an empty layer after the current tail and links the two.
    pub fn append_layer(&mut self) -> LayerId {
        let id = LayerId(self.layers.len());
        let previous = self.layers.len().checked_sub(1).map(LayerId);

        if let Some(tail) = self.layers.last_mut() {
            tail.link_next(id);
        }
        self.layers.push(Layer::new(previous));

        debug!(layer = id.0, "appended layer");
        id
    }

    /// Creates an unconnected unit at the end of `layer`.
    pub fn add_unit(&mut self, layer: LayerId, activation: Activation) -> Result<UnitId> {
        self.existing_layer(layer)?;

        let id = UnitId(self.units.len());
        self.layers[layer.0].push(id);
        self.units.push(Unit::new(layer, activation));

        Ok(id)
    }

    /// Creates a single connection with weight 0 and registers it on both endpoints.
    /// Does not check for an existing connection between the pair; see [`Network::connect_inputs`].
    pub fn connect(&mut self, from: UnitId, to: UnitId) -> Result<ConnectionId> {
        self.check_wiring(from, to)?;
        Ok(self.link(from, to))
    }

    /// Wires `unit`'s inputs from `sources`, skipping sources already connected to it.
    /// Every source is validated before any connection is created.
    /// Returns the connections created by this call.
    pub fn connect_inputs(
        &mut self,
        unit: UnitId,
        sources: &[UnitId]
    ) -> Result<Vec<ConnectionId>> {
        for &source in sources {
            self.check_wiring(source, unit)?;
        }

        let mut created = Vec::with_capacity(sources.len());
        for &source in sources {
            if !self.is_connected(source, unit) {
                created.push(self.link(source, unit));
            }
        }

        debug!(
            unit = unit.0,
            requested = sources.len(),
            created = created.len(),
            "wired unit inputs"
        );
        Ok(created)
    }

    pub fn is_connected(&self, from: UnitId, to: UnitId) -> bool {
        self.units.get(to.0).is_some_and(|unit| {
            unit.incoming().iter().any(|id| self.connections[id.0].from() == from)
        })
    }

    fn check_wiring(&self, from: UnitId, to: UnitId) -> Result<()> {
        let destination = self.existing_unit(to)?;
        let source = self.existing_unit(from)?;

        if destination.layer().0 == 0 {
            return Err(NetworkError::InvalidEndpoint(
                format!("unit {} is in the input layer and cannot receive connections", to.0)));
        }

        if source.layer() >= destination.layer() {
            return Err(NetworkError::InvalidEndpoint(format!(
                "unit {} in layer {} cannot feed unit {} in layer {}",
                from.0, source.layer().0, to.0, destination.layer().0)));
        }

        Ok(())
    }

    fn link(&mut self, from: UnitId, to: UnitId) -> ConnectionId {
        let id = ConnectionId(self.connections.len());
        self.connections.push(Connection::new(from, to));
        self.units[from.0].push_outgoing(id);
        self.units[to.0].push_incoming(id);

        id
    }

    fn existing_unit(&self, id: UnitId) -> Result<&Unit> {
        self.units.get(id.0).ok_or_else(|| {
            NetworkError::InvalidEndpoint(format!("unit {} is not part of this network", id.0))
        })
    }

    fn existing_layer(&self, id: LayerId) -> Result<&Layer> {
        self.layers
            .get(id.0)
            .ok_or_else(|| NetworkError::InvalidArgument(format!("layer {} does not exist", id.0)))
    }

    /// Sum of weight * source output over the unit's incoming connections.
    fn weighted_sum(&self, unit: &Unit) -> f64 {
        unit.incoming()
            .iter()
            .map(|id| {
                let connection = &self.connections[id.0];
                connection.weight() * self.units[connection.from().0].output()
            })
            .sum()
    }

    /// Recomputes and caches the unit's weighted input from its sources' current outputs.
    pub fn compute_input(&mut self, unit: UnitId) -> Result<f64> {
        let input = self.weighted_sum(self.existing_unit(unit)?);
        self.units[unit.0].set_input(input);

        Ok(input)
    }

    /// Computes input then output for every unit of the layer, in order.
    /// Reads only the outputs of earlier layers, so units are independent of each other.
    pub fn compute_outputs(&mut self, layer: LayerId) -> Result<Vec<f64>> {
        let units = self.existing_layer(layer)?.units().to_vec();
        let inputs = self.layer_inputs(&units);

        let outputs = units
            .iter()
            .zip(inputs)
            .map(|(id, input)| {
                let unit = &mut self.units[id.0];
                unit.set_input(input);
                unit.compute_output(input)
            })
            .collect();

        Ok(outputs)
    }

    fn layer_inputs(&self, units: &[UnitId]) -> Vec<f64> {
        if !self.config.runs_parallel(units.len()) {
            return units.iter().map(|id| self.weighted_sum(&self.units[id.0])).collect();
        }

        let partitioner = Partitioner::with_partitions(units.len(), self.config.parallelism);
        partitioner.parallelized(|partition| {
            units[partition.range()]
                .iter()
                .map(|id| self.weighted_sum(&self.units[id.0]))
                .collect()
        })
    }

    /// Error of a hidden unit: the weighted sum of the errors of the units it feeds,
    /// scaled by its activation's derivative when it has one.
    /// Every unit downstream must already hold its error for this cycle.
    pub fn compute_error(&mut self, unit: UnitId) -> Result<f64> {
        let downstream: f64 = self.existing_unit(unit)?
            .outgoing()
            .iter()
            .map(|id| {
                let connection = &self.connections[id.0];
                connection.weight() * self.units[connection.to().0].error()
            })
            .sum();

        Ok(self.units[unit.0].propagate_error(downstream))
    }

    fn view(&self, id: ConnectionId) -> ConnectionView {
        let connection = &self.connections[id.0];
        ConnectionView {
            weight: connection.weight(),
            source_output: self.units[connection.from().0].output(),
            target_error: self.units[connection.to().0].error()
        }
    }

    /// Replaces the weight of every incoming connection of the layer with `rule` applied to it.
    /// Each new weight depends only on its own connection,
    /// so all are computed before any is written.
    pub fn adapt_weights<F>(&mut self, layer: LayerId, rule: F) -> Result<()>
    where
        F: Fn(&ConnectionView) -> f64
    {
        let updates: Vec<(ConnectionId, f64)> = self.existing_layer(layer)?
            .units()
            .iter()
            .flat_map(|id| self.units[id.0].incoming().iter().copied())
            .map(|id| (id, rule(&self.view(id))))
            .collect();

        for (id, weight) in updates {
            self.connections[id.0].set_weight(weight);
        }

        Ok(())
    }

    /// Sets every incoming weight of every non-input layer from `generator`,
    /// one call per connection.
    /// All values are drawn first; if any is not finite nothing is written.
    pub fn initialize<G>(&mut self, mut generator: G) -> Result<()>
    where
        G: FnMut() -> f64
    {
        let eligible: Vec<ConnectionId> = self.layers
            .iter()
            .skip(1)
            .flat_map(|layer| layer.units())
            .flat_map(|id| self.units[id.0].incoming().iter().copied())
            .collect();

        let weights: Vec<f64> = eligible.iter().map(|_| generator()).collect();
        if let Some(bad) = weights.iter().find(|weight| !weight.is_finite()) {
            warn!(weight = bad, "weight generator produced a non-finite value");
            return Err(NetworkError::InvalidArgument(format!("weight generator produced {bad}")));
        }

        for (id, weight) in eligible.into_iter().zip(weights) {
            self.connections[id.0].set_weight(weight);
        }

        debug!(connections = self.connections.len(), "initialized weights");
        Ok(())
    }

    /// Feeds `input` to the input layer and propagates it through every later layer.
    /// Returns the outputs of the last layer.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.validate_input(input)?;
        self.propagate_forward(input)
    }

    /// Layer 0 and, when present, the last layer must both hold units.
    fn check_populated(&self) -> Result<&Layer> {
        let input_layer = self.input_layer()
            .ok_or_else(|| NetworkError::EmptyNetwork("network has no layers".to_string()))?;

        if input_layer.is_empty() {
            return Err(NetworkError::EmptyNetwork("input layer has no units".to_string()));
        }

        if self.output_layer().is_some_and(Layer::is_empty) {
            return Err(NetworkError::EmptyNetwork("output layer has no units".to_string()));
        }

        Ok(input_layer)
    }

    fn validate_input(&self, input: &[f64]) -> Result<()> {
        let expected = self.check_populated()?.len();
        if input.len() != expected {
            warn!(expected, actual = input.len(), "rejected input");
            return Err(NetworkError::DimensionMismatch { expected, actual: input.len() });
        }

        let out_of_range = input
            .iter()
            .enumerate()
            .find(|(_, value)| !(-1.0..=1.0).contains(*value));

        if let Some((index, &value)) = out_of_range {
            warn!(index, value, "rejected input");
            return Err(NetworkError::RangeViolation { index, value });
        }

        Ok(())
    }

    fn propagate_forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        for (id, &value) in self.layers[0].units().iter().zip(input) {
            self.units[id.0].feed(value);
        }

        let mut outputs = input.to_vec();
        for index in 1..self.layers.len() {
            outputs = self.compute_outputs(LayerId(index))?;
        }

        trace!(?outputs, "forward pass complete");
        Ok(outputs)
    }

    /// One forward pass followed by one backward pass with the delta rule at `rate`,
    /// which must be finite and positive like any [`LearningRate`].
    /// The output layer adapts first; each earlier layer then computes its errors against the
    /// already adapted weights above it and adapts its own incoming weights.
    pub fn train(&mut self, input: &[f64], target: &[f64], rate: f64) -> Result<()> {
        self.check_populated()?;
        let expected = self.output_layer()
            .map(Layer::len)
            .ok_or_else(|| NetworkError::EmptyNetwork("no output layer to train".to_string()))?;

        if target.len() != expected {
            warn!(expected, actual = target.len(), "rejected target");
            return Err(NetworkError::DimensionMismatch { expected, actual: target.len() });
        }

        let rate = LearningRate::new(rate)?.rate();

        if let Some(value) = target.iter().find(|value| !value.is_finite()) {
            return Err(NetworkError::InvalidArgument(
                format!("target values must be finite, found {value}")));
        }

        self.validate_input(input)?;
        self.propagate_forward(input)?;

        let last = self.layers.len() - 1;
        for (id, &wanted) in self.layers[last].units().iter().zip(target) {
            self.units[id.0].compute_output_error(wanted);
        }

        let rule = delta_rule(rate);
        self.adapt_weights(LayerId(last), &rule)?;

        for index in (1..last).rev() {
            let units = self.layers[index].units().to_vec();
            for id in units {
                self.compute_error(id)?;
            }
            self.adapt_weights(LayerId(index), &rule)?;
        }

        trace!(rate, "training cycle complete");
        Ok(())
    }
}
