//! Propagation demo: signals relayed through shared dendrites.
//!
//! Part 1 wires the two-neuron relay by hand: N0 reads d1 and fires into d2,
//! N1 reads d2. Processing N0 then N1 shows N1 seeing N0's fresh signal.
//!
//! Part 2 builds a small chain in reverse and ticks it through `Network`, once
//! in insertion order (one hop per tick) and once in topological order (settles
//! in a single tick).
//!
//! Run: RUST_LOG=debug cargo run --example propagation_demo

use neurowire::{
    sigmoid, Axon, Dendrite, DendriteStore, Network, NetworkConfig, Neuron, NeuronId, ProcessOrder,
};

const CHAIN_LEN: usize = 5;
const CHAIN_WEIGHT: f64 = 1.5;
const INPUT: f64 = 2.0;
const TICKS: usize = CHAIN_LEN + 1;

fn main() {
    env_logger::init();

    println!("=== Neurowire Propagation Demo ===\n");

    println!("--- Two-neuron relay ---");
    let mut store = DendriteStore::new();
    let d1 = store.add(Dendrite::new(2.0, 1.0));
    let d2 = store.add(Dendrite::new(0.0, 5.0));

    let mut n0 = Neuron::new(Axon::new(&[d2]), &[d1]);
    let mut n1 = Neuron::new(Axon::empty(), &[d2]);
    n0.process(&mut store);
    n1.process(&mut store);

    println!("  N0 signal: {:.6} (sigmoid(2.0) = {:.6})", n0.signal(), sigmoid(2.0));
    println!("  d2 value:  {:.6}, weight {:.1}", store[d2].value(), store[d2].weight());
    println!("  N1 signal: {:.6} (sigmoid({:.6}))\n", n1.signal(), store.output(d2));

    for order in [ProcessOrder::Insertion, ProcessOrder::Topological] {
        println!("--- {CHAIN_LEN}-neuron chain, {order:?} order ---");
        let (mut net, tail) = build_chain(order);

        for t in 1..=TICKS {
            net.tick();
            println!("  tick {t}: tail signal = {:.6}", net.signal(tail).unwrap_or_default());
        }
        print!("{}", net.stats());
        println!();
    }
}

/// Chain of `CHAIN_LEN` neurons, added tail first so insertion order runs
/// downstream before upstream.
fn build_chain(order: ProcessOrder) -> (Network, NeuronId) {
    let mut net = Network::new(NetworkConfig {
        order,
        ..NetworkConfig::default()
    });

    let input = net.add_dendrite(INPUT, 1.0);
    let links: Vec<_> = (1..CHAIN_LEN).map(|_| net.add_dendrite(0.0, CHAIN_WEIGHT)).collect();

    let tail = net.wire(&[links[CHAIN_LEN - 2]], &[]);
    for i in (1..CHAIN_LEN - 1).rev() {
        net.wire(&[links[i - 1]], &[links[i]]);
    }
    net.wire(&[input], &[links[0]]);

    (net, tail)
}
