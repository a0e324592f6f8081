//! Network inspection and diagnostics.

use crate::network::Network;

/// Summary statistics for a network.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkStats {
    pub n_neurons: usize,
    pub n_dendrites: usize,
    /// Total axon targets across all neurons.
    pub n_edges: usize,
    pub tick_count: u64,
    pub mean_signal: f64,
    pub min_signal: f64,
    pub max_signal: f64,
}

impl std::fmt::Display for NetworkStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Network: {} neurons, {} dendrites, {} axon targets",
            self.n_neurons, self.n_dendrites, self.n_edges)?;
        writeln!(f, "  Tick: {}", self.tick_count)?;
        writeln!(f, "  Signal: mean={:.4} min={:.4} max={:.4}",
            self.mean_signal, self.min_signal, self.max_signal)?;
        Ok(())
    }
}

impl Network {
    /// Compute network statistics. Signal fields are 0.0 for an empty network.
    pub fn stats(&self) -> NetworkStats {
        let n = self.neurons.len();
        let n_edges = self.neurons.iter().map(|neuron| neuron.axon().len()).sum();

        let (sum, min, max) = self.neurons.iter().map(|neuron| neuron.signal()).fold(
            (0.0, f64::INFINITY, f64::NEG_INFINITY),
            |(s, lo, hi), x| (s + x, lo.min(x), hi.max(x)),
        );

        let (mean_signal, min_signal, max_signal) = if n > 0 {
            (sum / n as f64, min, max)
        } else {
            (0.0, 0.0, 0.0)
        };

        NetworkStats {
            n_neurons: n,
            n_dendrites: self.dendrites.len(),
            n_edges,
            tick_count: self.tick_count,
            mean_signal,
            min_signal,
            max_signal,
        }
    }
}
