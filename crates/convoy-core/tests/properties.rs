//! Property tests for the assignment pipeline on small random DAGs.
//!
//! Edges are generated with `from < to`, which guarantees acyclicity, so
//! every generated network admits a topological order and a plan. A naive
//! recursive route enumerator provides the ground truth.

use proptest::prelude::*;

use convoy_core::assign::{SweepBuffers, TruckPlan, sweep_from};
use convoy_core::graph::{NodeId, RouteNetwork, TopoOrder};

/// Brute-force route counter, independent of the sweep implementation.
fn brute_routes(edges: &[(NodeId, NodeId)], from: NodeId, to: NodeId) -> u64 {
    if from == to {
        return 1;
    }
    edges
        .iter()
        .filter(|&&(u, _)| u == from)
        .map(|&(_, v)| brute_routes(edges, v, to))
        .sum()
}

/// A small acyclic network: node count, forward-only edges (duplicates
/// allowed and meaningful), and a truck count.
fn small_dag() -> impl Strategy<Value = (NodeId, Vec<(NodeId, NodeId)>, i64)> {
    (2u32..8, 1i64..6).prop_flat_map(|(n, trucks)| {
        let edges = prop::collection::vec((1..=n, 1..=n), 0..12).prop_map(|raw| {
            raw.into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.min(b), a.max(b)))
                .collect::<Vec<_>>()
        });
        (Just(n), edges, Just(trucks))
    })
}

proptest! {
    /// The modular counter kept reduced per addition equals the true route
    /// count mod B, and reachability matches count > 0.
    #[test]
    fn modular_counts_match_brute_force((n, edges, trucks) in small_dag()) {
        let net = RouteNetwork::with_edges(n, &edges);
        let order = TopoOrder::compute(&net).expect("forward edges are acyclic");
        let b = u64::try_from(trucks).expect("strategy emits positive counts");
        let mut buf = SweepBuffers::new(n);

        for source in 1..=n {
            sweep_from(source, &net, &order, b, &mut buf);
            for dest in 1..=n {
                if dest == source {
                    continue;
                }
                let true_count = brute_routes(&edges, source, dest);
                prop_assert_eq!(buf.total(dest), true_count);
                prop_assert_eq!(buf.modular(dest), true_count % b);
                prop_assert_eq!(buf.is_reachable(dest), true_count > 0);
            }
        }
    }

    /// Every reachable non-self pair appears in exactly one truck, in the
    /// truck chosen by 1 + count mod B.
    #[test]
    fn plan_is_a_total_partition((n, edges, trucks) in small_dag()) {
        let net = RouteNetwork::with_edges(n, &edges);
        let order = TopoOrder::compute(&net).expect("acyclic");
        let plan = TruckPlan::build(&net, &order, trucks).expect("positive trucks");
        let b = u64::try_from(trucks).expect("positive");

        for source in 1..=n {
            for dest in 1..=n {
                if dest == source {
                    continue;
                }
                let count = brute_routes(&edges, source, dest);
                let expected_truck = if count > 0 { Some(1 + count % b) } else { None };

                let holders: Vec<u64> = (1..=b)
                    .filter(|&t| plan.pairs(t).contains(&(source, dest)))
                    .collect();

                match expected_truck {
                    Some(t) => prop_assert_eq!(holders, vec![t]),
                    None => prop_assert!(holders.is_empty()),
                }
            }
        }
    }

    /// Each truck's listing is strictly ascending by (source, destination).
    #[test]
    fn plan_listings_are_strictly_sorted((n, edges, trucks) in small_dag()) {
        let net = RouteNetwork::with_edges(n, &edges);
        let order = TopoOrder::compute(&net).expect("acyclic");
        let plan = TruckPlan::build(&net, &order, trucks).expect("positive trucks");

        for truck in 1..=u64::try_from(trucks).expect("positive") {
            let pairs = plan.pairs(truck);
            for window in pairs.windows(2) {
                prop_assert!(window[0] < window[1]);
            }
        }
    }

    /// Topological order covers all nodes and points every edge forward.
    #[test]
    fn topo_order_respects_edges((n, edges, _trucks) in small_dag()) {
        let net = RouteNetwork::with_edges(n, &edges);
        let order = TopoOrder::compute(&net).expect("acyclic");
        prop_assert_eq!(order.len(), n as usize);

        let position = |id: NodeId| {
            order.as_slice().iter().position(|&x| x == id).expect("present")
        };
        for &(u, v) in &edges {
            prop_assert!(position(u) < position(v), "edge {}→{} points backward", u, v);
        }
    }

    /// Building the plan twice yields identical results.
    #[test]
    fn plan_is_deterministic((n, edges, trucks) in small_dag()) {
        let net = RouteNetwork::with_edges(n, &edges);
        let order = TopoOrder::compute(&net).expect("acyclic");
        let a = TruckPlan::build(&net, &order, trucks).expect("positive trucks");
        let b = TruckPlan::build(&net, &order, trucks).expect("positive trucks");
        prop_assert_eq!(a, b);
    }
}
