/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Properties of maximum flows on random networks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rs_flownet::maxflow::{edmondskarp, EdmondsKarp};
use rs_flownet::FlowNetwork;

const SEEDS: std::ops::Range<u64> = 0..200;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A random network on the vertices `0..n` with terminals `0` and `n-1`.
///
/// Parallel edges, antiparallel edges, loops and zero capacities all occur.
fn random_network(rng: &mut StdRng) -> (FlowNetwork<usize, i64>, usize, usize) {
    let n = rng.gen_range(2..9);
    let m = rng.gen_range(0..4 * n);
    let g = FlowNetwork::new_with(|b| {
        for u in 0..n {
            b.add_vertex(u);
        }
        for _ in 0..m {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            b.add_edge(u, v, rng.gen_range(0..20))?;
        }
        Ok(())
    })
    .unwrap();
    (g, 0, n - 1)
}

/// Minimum cut value by enumeration of all vertex sets separating the
/// terminals.
fn brute_force_mincut(g: &FlowNetwork<usize, i64>, s: usize, t: usize) -> i64 {
    let n = g.num_nodes();
    let inner: Vec<usize> = (0..n).filter(|&u| u != s && u != t).collect();
    let mut best = i64::MAX;
    for mask in 0u32..(1 << inner.len()) {
        let mut side = vec![false; n];
        side[s] = true;
        for (i, &u) in inner.iter().enumerate() {
            side[u] = mask & (1 << i) != 0;
        }
        let value: i64 = g
            .edges()
            .filter(|&e| {
                let (u, v) = g.endpoints(e);
                side[*u] && !side[*v]
            })
            .map(|e| g.upper(e))
            .sum();
        best = best.min(value);
    }
    best
}

#[test]
fn test_value_bounded_by_terminal_capacities() {
    init();
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (g, s, t) = random_network(&mut rng);
        let (value, _) = g.max_flow(&s, &t).unwrap();
        assert!(value <= g.out_capacity(g.node(&s).unwrap()), "seed {}", seed);
        assert!(value <= g.in_capacity(g.node(&t).unwrap()), "seed {}", seed);
    }
}

#[test]
fn test_capacity_bounds_and_conservation() {
    init();
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (g, s, t) = random_network(&mut rng);
        let (value, flow) = g.max_flow(&s, &t).unwrap();
        let (sn, tn) = (g.node(&s).unwrap(), g.node(&t).unwrap());

        assert!(flow.iter().all(|(e, f)| f >= 0 && f <= g.upper(e)), "seed {}", seed);
        assert!(
            g.nodes()
                .filter(|&u| u != sn && u != tn)
                .all(|u| flow.inflow(&g, u) == flow.outflow(&g, u)),
            "seed {}",
            seed
        );
        assert_eq!(flow.outflow(&g, sn) - flow.inflow(&g, sn), value, "seed {}", seed);
        assert_eq!(flow.inflow(&g, tn) - flow.outflow(&g, tn), value, "seed {}", seed);
        assert!(g.edges().filter(|&e| g.is_loop(e)).all(|e| flow.get(e) == 0));
    }
}

#[test]
fn test_duality() {
    init();
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (g, s, t) = random_network(&mut rng);
        let (value, flow, cut) = edmondskarp(&g, &s, &t).unwrap();

        assert_eq!(value, cut.value, "seed {}", seed);
        assert_eq!(value, brute_force_mincut(&g, s, t), "seed {}", seed);
        assert!(cut.contains(&s));
        assert!(!cut.contains(&t));

        for e in g.edges() {
            let (u, v) = g.endpoints(e);
            let crossing = cut.contains(u) && !cut.contains(v);
            assert_eq!(cut.edges.contains(&e), crossing, "seed {}", seed);
            if crossing {
                assert_eq!(flow.get(e), g.upper(e), "seed {}", seed);
            }
        }
    }
}

#[test]
fn test_determinism() {
    init();
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (g, s, t) = random_network(&mut rng);
        assert_eq!(g.max_flow(&s, &t).unwrap(), g.max_flow(&s, &t).unwrap(), "seed {}", seed);
        assert_eq!(g.min_cut(&s, &t).unwrap(), g.min_cut(&s, &t).unwrap(), "seed {}", seed);
    }
}

#[test]
fn test_augmentation_bound() {
    init();
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (g, s, t) = random_network(&mut rng);
        let mut ek = EdmondsKarp::new(&g);
        ek.max_augmentations = Some(g.num_nodes() * g.num_edges().max(1));
        ek.solve(&s, &t).unwrap();
        assert!(ek.num_augmentations() <= g.num_nodes() * g.num_edges().max(1));
    }
}

#[test]
fn test_parallel_runs_on_shared_network() {
    init();
    let mut rng = StdRng::seed_from_u64(42);
    let (g, _, _) = random_network(&mut rng);
    let pairs: Vec<(usize, usize)> = g
        .keys()
        .iter()
        .flat_map(|&u| g.keys().iter().map(move |&v| (u, v)))
        .collect();
    let sequential: Vec<_> = pairs.iter().map(|(s, t)| g.max_flow(s, t).unwrap()).collect();

    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = pairs
            .chunks(4)
            .map(|chunk| {
                let g = &g;
                scope.spawn(move || chunk.iter().map(|(s, t)| g.max_flow(s, t).unwrap()).collect::<Vec<_>>())
            })
            .collect();
        handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(parallel, sequential);
}
