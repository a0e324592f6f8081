//! End-to-end propagation scenarios.
//!
//! These drive neurons by hand through a bare `DendriteStore`, then repeat the
//! same wiring through `Network` to check both paths agree.

use crate::activation::sigmoid;
use crate::axon::Axon;
use crate::dendrite::{Dendrite, DendriteStore};
use crate::network::{Network, NetworkConfig, ProcessOrder};
use crate::neuron::Neuron;

#[test]
fn two_neuron_relay_by_hand() {
    let mut store = DendriteStore::new();
    let d1 = store.add(Dendrite::new(2.0, 1.0));
    let d2 = store.add(Dendrite::new(0.0, 5.0));
    let sink = store.add(Dendrite::default());

    let mut network = vec![
        Neuron::new(Axon::new(&[d2]), &[d1]),
        Neuron::new(Axon::new(&[sink]), &[d2]),
    ];
    for neuron in &mut network {
        neuron.process(&mut store);
    }

    assert_eq!(network[0].signal(), sigmoid(store.output(d1)));
    assert_eq!(network[0].signal(), sigmoid(2.0));
    assert_eq!(store[network[1].dendrites()[0]].value(), network[0].signal());
    assert_eq!(network[1].signal(), sigmoid(store.output(d2)));
    assert_eq!(store[d2].weight(), 5.0);
    assert_eq!(store[sink].value(), network[1].signal());
}

#[test]
fn two_neuron_relay_through_network() {
    let mut net = Network::new(NetworkConfig {
        order: ProcessOrder::Topological,
        ..NetworkConfig::default()
    });
    let d1 = net.add_dendrite(2.0, 1.0);
    let d2 = net.add_dendrite(0.0, 5.0);
    let sink = net.add_dendrite(0.0, 0.0);

    // Downstream added first; topological order still runs n0 before n1
    let n1 = net.wire(&[d2], &[sink]);
    let n0 = net.wire(&[d1], &[d2]);
    net.tick();

    let s0 = net.signal(n0).unwrap();
    assert_eq!(s0, sigmoid(2.0));
    assert_eq!(net.dendrite(d2).unwrap().value(), s0);
    assert_eq!(net.signal(n1), Some(sigmoid(s0 * 5.0)));
}

#[test]
fn chain_settles_after_depth_ticks_in_reverse_order() {
    // a -> b -> c added in reverse, processed in insertion order, so the
    // signal advances one hop per tick
    let mut net = Network::default();
    let input = net.add_dendrite(1.0, 2.0);
    let ab = net.add_dendrite(0.0, 1.5);
    let bc = net.add_dendrite(0.0, -1.0);
    let c = net.wire(&[bc], &[]);
    let b = net.wire(&[ab], &[bc]);
    let a = net.wire(&[input], &[ab]);

    let sa = sigmoid(2.0);
    let sb = sigmoid(sa * 1.5);
    let sc = sigmoid(-sb);

    net.tick();
    assert_eq!(net.signal(a), Some(sa));
    assert_eq!(net.signal(c), Some(0.5));

    net.tick();
    assert_eq!(net.signal(b), Some(sb));

    net.tick();
    assert_eq!(net.signal(c), Some(sc));

    // Steady state: further ticks change nothing
    net.tick();
    assert_eq!(net.signal(c), Some(sc));
    assert_eq!(net.tick_count(), 4);
}

#[test]
fn fan_out_broadcasts_to_every_reader() {
    let mut net = Network::new(NetworkConfig {
        order: ProcessOrder::Topological,
    });
    let input = net.add_dendrite(0.5, 4.0);
    let weights = [1.0, -2.0, 0.25];
    let taps: Vec<_> = weights.iter().map(|&w| net.add_dendrite(0.0, w)).collect();
    let readers: Vec<_> = taps.iter().map(|&t| net.wire(&[t], &[])).collect();
    let source = net.wire(&[input], &taps);

    net.tick();
    let s = net.signal(source).unwrap();
    assert_eq!(s, sigmoid(2.0));
    for (i, &r) in readers.iter().enumerate() {
        assert_eq!(net.dendrite(taps[i]).unwrap().weight(), weights[i]);
        assert_eq!(net.signal(r), Some(sigmoid(s * weights[i])));
    }
}

#[test]
fn repeated_ticks_are_stable_on_a_dag() {
    let mut net = Network::new(NetworkConfig {
        order: ProcessOrder::Topological,
    });
    let x = net.add_dendrite(0.3, 1.0);
    let y = net.add_dendrite(-0.7, 2.0);
    let h = net.add_dendrite(0.0, 0.9);
    let out = net.wire(&[h], &[]);
    net.wire(&[x, y], &[h]);

    net.tick();
    let first = net.signal(out);
    net.tick();
    assert_eq!(net.signal(out), first);
}

#[test]
fn extreme_inputs_saturate_without_failing() {
    let mut net = Network::default();
    let big = net.add_dendrite(f64::MAX, 2.0);
    let nan = net.add_dendrite(f64::NAN, 1.0);
    let hi = net.wire(&[big], &[]);
    let bad = net.wire(&[nan], &[]);

    net.tick();
    assert_eq!(net.signal(hi), Some(1.0));
    assert!(net.signal(bad).unwrap().is_nan());
}
