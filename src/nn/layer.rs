use super::unit::UnitId;

/// Index of a layer in its network. Insertion order is propagation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub(crate) usize);

impl LayerId {
    pub fn index(&self) -> usize { self.0 }
}

/// An ordered group of units with links to its neighbours in the network.
/// Only `Network::append_layer` creates layers, which keeps the links in step with the layer order.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    units: Vec<UnitId>,
    previous: Option<LayerId>,
    next: Option<LayerId>
}

impl Layer {
    pub(crate) fn new(previous: Option<LayerId>) -> Self {
        Self { units: vec![], previous, next: None }
    }

    pub fn units(&self) -> &[UnitId] { &self.units }
    pub fn previous(&self) -> Option<LayerId> { self.previous }
    pub fn next(&self) -> Option<LayerId> { self.next }
    pub fn len(&self) -> usize { self.units.len() }
    pub fn is_empty(&self) -> bool { self.units.is_empty() }

    pub(crate) fn push(&mut self, unit: UnitId) {
        self.units.push(unit);
    }

    pub(crate) fn link_next(&mut self, next: LayerId) {
        self.next = Some(next);
    }
}
