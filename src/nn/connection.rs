use super::unit::UnitId;

/// Index of a connection in its network's connection arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub(crate) usize);

impl ConnectionId {
    pub fn index(&self) -> usize { self.0 }
}

/// A directed, weighted edge between two units.
/// Stored once by the network; the outgoing list of `from` and the incoming list of `to`
/// both hold its id, so a weight written through one side is read through the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    from: UnitId,
    to: UnitId,
    weight: f64
}

impl Connection {
    pub(crate) fn new(from: UnitId, to: UnitId) -> Self { Self { from, to, weight: 0.0 } }

    pub fn from(&self) -> UnitId { self.from }
    pub fn to(&self) -> UnitId { self.to }
    pub fn weight(&self) -> f64 { self.weight }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

/// Everything a weight rule may read about one connection while a layer adapts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionView {
    pub weight: f64,
    pub source_output: f64,
    pub target_error: f64
}

/// weight + rate * error(destination) * output(source)
pub fn delta_rule(rate: f64) -> impl Fn(&ConnectionView) -> f64 {
    move |view| view.weight + rate * view.target_error * view.source_output
}
