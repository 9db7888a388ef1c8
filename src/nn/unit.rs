use super::{activation::Activation, connection::ConnectionId, layer::LayerId};

/// Index of a unit in its network's unit arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub(crate) usize);

impl UnitId {
    pub fn index(&self) -> usize { self.0 }
}

/// A computational node.
/// `output` is meaningful once a forward pass has reached the unit,
/// `error` once a backward pass has.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    layer: LayerId,
    activation: Activation,
    incoming: Vec<ConnectionId>,
    outgoing: Vec<ConnectionId>,
    input: f64,
    output: f64,
    error: f64
}

impl Unit {
    pub(crate) fn new(layer: LayerId, activation: Activation) -> Self {
        Self {
            layer,
            activation,
            incoming: vec![],
            outgoing: vec![],
            input: 0.0,
            output: 0.0,
            error: 0.0
        }
    }

    pub fn layer(&self) -> LayerId { self.layer }
    pub fn activation(&self) -> Activation { self.activation }
    pub fn incoming(&self) -> &[ConnectionId] { &self.incoming }
    pub fn outgoing(&self) -> &[ConnectionId] { &self.outgoing }
    pub fn input(&self) -> f64 { self.input }
    pub fn output(&self) -> f64 { self.output }
    pub fn error(&self) -> f64 { self.error }

    /// Applies the activation to `input`, stores and returns the output.
    pub fn compute_output(&mut self, input: f64) -> f64 {
        self.output = self.activation.function(input);
        self.output
    }

    /// Error of an output-layer unit against its target.
    /// The stored value is the derivative-scaled one, which is what both the delta rule
    /// and the error propagation of earlier layers read.
    pub fn compute_output_error(&mut self, target: f64) -> f64 {
        self.error = self.activation.scale_error(target - self.output, self.output);
        self.error
    }

    /// Stores the error of a hidden unit given the weighted error sum of the units it feeds.
    pub(crate) fn propagate_error(&mut self, downstream: f64) -> f64 {
        self.error = self.activation.scale_error(downstream, self.output);
        self.error
    }

    pub(crate) fn set_input(&mut self, input: f64) {
        self.input = input;
    }

    /// Input-layer units are fed directly, without an activation.
    pub(crate) fn feed(&mut self, value: f64) {
        self.output = value;
    }

    pub(crate) fn push_incoming(&mut self, connection: ConnectionId) {
        self.incoming.push(connection);
    }

    pub(crate) fn push_outgoing(&mut self, connection: ConnectionId) {
        self.outgoing.push(connection);
    }
}
