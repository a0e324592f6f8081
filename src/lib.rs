//! # neurowire
//!
//! Minimal sigmoid neuron signal propagation.
//!
//! Dendrites carry a mutable value and a fixed weight. A neuron sums the
//! weighted values of its dendrites, squashes the sum through a sigmoid, and
//! its axon writes the result into the dendrites of downstream neurons. All
//! dendrites live in one [`DendriteStore`] arena and are shared by id, so the
//! same dendrite can be one neuron's axon target and another neuron's input.
//!
//! There is no learning and no layer builder. [`Network`] is an optional
//! driver that steps every neuron once per tick.
//!
//! ```
//! use neurowire::{sigmoid, Axon, Dendrite, DendriteStore, Neuron};
//!
//! let mut store = DendriteStore::new();
//! let input = store.add(Dendrite::new(2.0, 1.0));
//! let link = store.add(Dendrite::new(0.0, 5.0));
//!
//! let mut upstream = Neuron::new(Axon::new(&[link]), &[input]);
//! let mut downstream = Neuron::new(Axon::empty(), &[link]);
//! upstream.process(&mut store);
//! downstream.process(&mut store);
//!
//! assert_eq!(upstream.signal(), sigmoid(2.0));
//! assert_eq!(downstream.signal(), sigmoid(upstream.signal() * 5.0));
//! ```

pub mod activation;
pub mod axon;
pub mod dendrite;
pub mod neuron;
pub mod network;
pub mod stats;

#[cfg(test)]
mod integration_test;

pub use activation::{sigmoid, sigmoid_prime};
pub use axon::Axon;
pub use dendrite::{Dendrite, DendriteId, DendriteStore};
pub use neuron::{Neuron, NeuronId};
pub use network::{Network, NetworkConfig, ProcessOrder};
pub use stats::NetworkStats;
