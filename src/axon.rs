//! Axon: broadcasts a neuron's signal into downstream dendrites.

use crate::dendrite::{DendriteId, DendriteStore};

/// Outgoing connections of one neuron.
///
/// Targets are ids into the shared [`DendriteStore`]; the axon does not own the
/// dendrites, which usually also appear in some other neuron's input list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Axon {
    targets: Vec<DendriteId>,
}

impl Axon {
    pub fn new(targets: &[DendriteId]) -> Self {
        Self {
            targets: targets.to_vec(),
        }
    }

    /// Axon with no targets. Propagating through it does nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn targets(&self) -> &[DendriteId] {
        &self.targets
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Write `signal` into the value of every target, in construction order.
    /// Weights are untouched.
    pub fn propagate(&self, store: &mut DendriteStore, signal: f64) {
        for &target in &self.targets {
            store.set_value(target, signal);
        }
    }
}
