use crate::error::Result;

use super::{activation::Activation, config::NetworkConfig, network::Network, unit::UnitId};

/// Builds a strictly layered network where every unit is wired to all units of the previous layer.
/// Input units are always Identity.
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    inputs: usize,
    layers: Vec<(usize, Activation)>,
    config: NetworkConfig
}

impl NetworkBuilder {
    pub fn new(inputs: usize) -> Self {
        Self { inputs, layers: vec![], config: NetworkConfig::default() }
    }

    /// Adds a fully connected layer of `units` units after the last one.
    pub fn layer(mut self, units: usize, activation: Activation) -> Self {
        self.layers.push((units, activation));
        self
    }

    pub fn config(mut self, config: NetworkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Network> {
        let mut network = Network::with_config(self.config);

        let input_layer = network.append_layer();
        let mut previous = (0..self.inputs)
            .map(|_| network.add_unit(input_layer, Activation::Identity))
            .collect::<Result<Vec<UnitId>>>()?;

        for (count, activation) in self.layers {
            let layer = network.append_layer();
            let mut current = Vec::with_capacity(count);
            for _ in 0..count {
                let unit = network.add_unit(layer, activation)?;
                network.connect_inputs(unit, &previous)?;
                current.push(unit);
            }
            previous = current;
        }

        Ok(network)
    }
}
