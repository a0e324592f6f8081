//! Neuron: integrates weighted dendrite inputs and fires through its axon.
//!
//! `process()` is the whole lifecycle:
//!
//! ```text
//! raw    = Σ dendrite.value * dendrite.weight   (stored input order)
//! signal = sigmoid(raw)
//! axon.propagate(signal)
//! ```
//!
//! There is no refractory state or threshold. A neuron always carries the signal
//! from its most recent `process()`, or 0.0 before the first one.

use crate::activation::sigmoid;
use crate::axon::Axon;
use crate::dendrite::{DendriteId, DendriteStore};

/// Index of a neuron inside a [`Network`](crate::Network).
///
/// Limited to the `u32` range like [`DendriteId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeuronId(pub u32);

impl NeuronId {
    /// Id for slot `index`. Panics if `index` does not fit in a `u32`.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(i) => Self(i),
            Err(_) => panic!("neuron id space exhausted at index {index}"),
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Neuron {
    /// Input lines, shared with whichever upstream axons target them.
    dendrites: Vec<DendriteId>,
    /// Last computed output.
    signal: f64,
    /// Outgoing connections. Owned exclusively by this neuron.
    axon: Axon,
}

impl Neuron {
    pub fn new(axon: Axon, dendrites: &[DendriteId]) -> Self {
        Self {
            dendrites: dendrites.to_vec(),
            signal: 0.0,
            axon,
        }
    }

    #[inline]
    pub fn signal(&self) -> f64 {
        self.signal
    }

    #[inline]
    pub fn dendrites(&self) -> &[DendriteId] {
        &self.dendrites
    }

    #[inline]
    pub fn axon(&self) -> &Axon {
        &self.axon
    }

    /// Activation applied to the aggregated input.
    #[inline]
    pub fn activate(&self, x: f64) -> f64 {
        sigmoid(x)
    }

    /// Sum weighted inputs, activate, store the result and push it downstream.
    pub fn process(&mut self, store: &mut DendriteStore) {
        let raw: f64 = self.dendrites.iter().map(|&d| store.output(d)).sum();
        self.signal = self.activate(raw);
        log::trace!(
            "[PROCESS] {} inputs, raw={:.6} -> signal={:.6}, {} targets",
            self.dendrites.len(),
            raw,
            self.signal,
            self.axon.len()
        );
        self.axon.propagate(store, self.signal);
    }
}
