//! Network driver: owns the dendrite arena and steps neurons one tick at a time.
//!
//! Neurons never schedule themselves. A tick processes every neuron exactly
//! once, either in the order they were added or in a topological order derived
//! from the wiring (upstream before downstream). Cyclic wiring is not an error:
//! neurons on a cycle read whatever their inputs held from the previous tick.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::axon::Axon;
use crate::dendrite::{Dendrite, DendriteId, DendriteStore};
use crate::neuron::{Neuron, NeuronId};

/// How `tick()` orders neuron processing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProcessOrder {
    /// Order of `add_neuron` calls. The caller is responsible for wiring
    /// upstream neurons before downstream ones.
    #[default]
    Insertion,
    /// Upstream neurons first, ties broken by insertion order.
    Topological,
}

/// Configuration for network execution.
#[derive(Clone, Debug, Default)]
pub struct NetworkConfig {
    /// Processing order used by `tick()`. Default: `Insertion`.
    pub order: ProcessOrder,
}

/// A set of neurons wired through a shared dendrite arena.
#[derive(Clone, Debug, Default)]
pub struct Network {
    /// Every dendrite referenced by any neuron or axon.
    pub(crate) dendrites: DendriteStore,
    pub(crate) neurons: Vec<Neuron>,
    pub(crate) tick_count: u64,
    pub config: NetworkConfig,
}

impl Network {
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Allocate a dendrite and return its id.
    pub fn add_dendrite(&mut self, value: f64, weight: f64) -> DendriteId {
        self.dendrites.add(Dendrite::new(value, weight))
    }

    /// Add a neuron. Ids are handed out sequentially from 0.
    pub fn add_neuron(&mut self, neuron: Neuron) -> NeuronId {
        let id = NeuronId::from_index(self.neurons.len());
        self.neurons.push(neuron);
        id
    }

    /// Convenience for `add_neuron(Neuron::new(Axon::new(targets), inputs))`.
    pub fn wire(&mut self, inputs: &[DendriteId], targets: &[DendriteId]) -> NeuronId {
        self.add_neuron(Neuron::new(Axon::new(targets), inputs))
    }

    /// Drive an input line from outside the network. Unknown ids are ignored.
    pub fn set_input(&mut self, id: DendriteId, value: f64) {
        self.dendrites.set_value(id, value);
    }

    #[inline]
    pub fn neuron(&self, id: NeuronId) -> Option<&Neuron> {
        self.neurons.get(id.index())
    }

    #[inline]
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    #[inline]
    pub fn dendrite(&self, id: DendriteId) -> Option<&Dendrite> {
        self.dendrites.get(id)
    }

    #[inline]
    pub fn dendrites(&self) -> &DendriteStore {
        &self.dendrites
    }

    /// Last signal of `id`, if the neuron exists.
    #[inline]
    pub fn signal(&self, id: NeuronId) -> Option<f64> {
        self.neuron(id).map(Neuron::signal)
    }

    #[inline]
    pub fn n_neurons(&self) -> usize {
        self.neurons.len()
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Process one neuron outside of a tick.
    pub fn process(&mut self, id: NeuronId) {
        if let Some(n) = self.neurons.get_mut(id.index()) {
            n.process(&mut self.dendrites);
        }
    }

    /// Order in which `tick()` will process neurons.
    pub fn processing_order(&self) -> Vec<NeuronId> {
        match self.config.order {
            ProcessOrder::Insertion => (0..self.neurons.len()).map(NeuronId::from_index).collect(),
            ProcessOrder::Topological => self.topological_order(),
        }
    }

    /// Process every neuron once.
    pub fn tick(&mut self) {
        let order = self.processing_order();
        for &id in &order {
            self.neurons[id.index()].process(&mut self.dendrites);
        }
        self.tick_count += 1;

        log::debug!(
            "[TICK] {}: processed {} neurons ({:?} order)",
            self.tick_count,
            order.len(),
            self.config.order
        );
    }

    /// Neuron A feeds B when one of A's axon targets is among B's dendrites.
    ///
    /// Neurons are grouped into strongly connected components, and the groups
    /// are ordered with Kahn's algorithm, so every edge that is not part of a
    /// cycle runs upstream first. Members of a cyclic group run in insertion
    /// order. Ready groups are taken lowest member index first.
    fn topological_order(&self) -> Vec<NeuronId> {
        let n = self.neurons.len();

        // dendrite -> neurons reading it
        let mut readers: HashMap<DendriteId, Vec<usize>> = HashMap::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for &d in neuron.dendrites() {
                readers.entry(d).or_default().push(i);
            }
        }

        let mut downstream: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (i, neuron) in self.neurons.iter().enumerate() {
            for target in neuron.axon().targets() {
                let Some(rs) = readers.get(target) else {
                    continue;
                };
                downstream[i].extend(rs.iter().copied().filter(|&r| r != i));
            }
        }

        let component = strongly_connected(&downstream);
        let n_groups = component.iter().max().map_or(0, |&c| c + 1);

        // Members ascend because neurons are visited in index order
        let mut members: Vec<Vec<usize>> = vec![Vec::new(); n_groups];
        for (i, &c) in component.iter().enumerate() {
            members[c].push(i);
        }

        let mut group_downstream: Vec<Vec<usize>> = vec![Vec::new(); n_groups];
        let mut in_degree = vec![0usize; n_groups];
        for (i, outs) in downstream.iter().enumerate() {
            for &r in outs {
                let (from, to) = (component[i], component[r]);
                if from != to {
                    group_downstream[from].push(to);
                    in_degree[to] += 1;
                }
            }
        }

        // Min-heap on the first member keeps ties in insertion order
        let mut ready: BinaryHeap<Reverse<(usize, usize)>> = (0..n_groups)
            .filter(|&c| in_degree[c] == 0)
            .map(|c| Reverse((members[c][0], c)))
            .collect();
        let mut order = Vec::with_capacity(n);
        let mut cyclic = 0usize;

        while let Some(Reverse((_, c))) = ready.pop() {
            if members[c].len() > 1 {
                cyclic += members[c].len();
            }
            order.extend(members[c].iter().map(|&i| NeuronId::from_index(i)));
            for &next in &group_downstream[c] {
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    ready.push(Reverse((members[next][0], next)));
                }
            }
        }

        if cyclic > 0 {
            log::debug!("[ORDER] {cyclic} neurons on cycles");
        }

        order
    }
}

/// Component index per node (Kosaraju, iterative). Self-edges are ignored by
/// the caller, so a component with one member is never cyclic.
fn strongly_connected(downstream: &[Vec<usize>]) -> Vec<usize> {
    let n = downstream.len();
    let mut upstream: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, outs) in downstream.iter().enumerate() {
        for &r in outs {
            upstream[r].push(i);
        }
    }

    // Post-order over the forward graph
    let mut seen = vec![false; n];
    let mut finished = Vec::with_capacity(n);
    for root in 0..n {
        if seen[root] {
            continue;
        }
        seen[root] = true;
        let mut stack = vec![(root, 0usize)];
        while let Some((node, next)) = stack.pop() {
            if let Some(&child) = downstream[node].get(next) {
                stack.push((node, next + 1));
                if !seen[child] {
                    seen[child] = true;
                    stack.push((child, 0));
                }
            } else {
                finished.push(node);
            }
        }
    }

    const UNASSIGNED: usize = usize::MAX;
    let mut component = vec![UNASSIGNED; n];
    let mut count = 0;
    for &root in finished.iter().rev() {
        if component[root] != UNASSIGNED {
            continue;
        }
        component[root] = count;
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            for &prev in &upstream[node] {
                if component[prev] == UNASSIGNED {
                    component[prev] = count;
                    stack.push(prev);
                }
            }
        }
        count += 1;
    }

    component
}
