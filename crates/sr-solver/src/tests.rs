//! Unit tests for sr-solver.

#[cfg(test)]
mod helpers {
    use std::collections::BTreeMap;

    use sr_core::{GeoPoint, LatencyModel, NodeId, Topology};
    use sr_graph::{GraphBuilder, LaplacianSystem, WeightedGraph};

    /// 1 ms of propagation per degree plus a 50 ms per-hop floor.
    pub fn unit_model() -> LatencyModel {
        LatencyModel { base_latency_ms: 50.0, km_per_degree: 299.792458, speed_of_light_km_s: 299_792.458 }
    }

    /// Graph from an undirected edge list; node `i` sits at latitude `i`.
    pub fn graph_with(n: u32, edges: &[(u32, u32)], model: LatencyModel) -> WeightedGraph {
        let positions = (0..n).map(|i| GeoPoint::new(i as f64, 0.0)).collect();
        let mut adjacency: BTreeMap<NodeId, Vec<NodeId>> =
            (0..n).map(|i| (NodeId(i), Vec::new())).collect();
        for &(a, b) in edges {
            adjacency.get_mut(&NodeId(a)).unwrap().push(NodeId(b));
            adjacency.get_mut(&NodeId(b)).unwrap().push(NodeId(a));
        }
        GraphBuilder::from_topology(&Topology::new(positions, adjacency), model).unwrap()
    }

    pub fn graph(n: u32, edges: &[(u32, u32)]) -> WeightedGraph {
        graph_with(n, edges, unit_model())
    }

    /// Reference solution of `L x = e_s - e_t` with `x[ground] = 0`, by
    /// Gaussian elimination on the reduced dense system.
    pub fn grounded_solve(system: &LaplacianSystem, s: usize, t: usize, ground: usize) -> Vec<f64> {
        let dense = system.matrix.to_dense();
        let n = system.dim();
        let keep: Vec<usize> = (0..n).filter(|&i| i != ground).collect();
        let m = keep.len();
        let mut a: Vec<Vec<f64>> = keep
            .iter()
            .map(|&i| {
                let mut row: Vec<f64> = keep.iter().map(|&j| dense[i][j]).collect();
                let rhs = if i == s { 1.0 } else if i == t { -1.0 } else { 0.0 };
                row.push(rhs);
                row
            })
            .collect();

        for col in 0..m {
            let pivot = (col..m)
                .max_by(|&x, &y| a[x][col].abs().total_cmp(&a[y][col].abs()))
                .unwrap();
            a.swap(col, pivot);
            let pivot_row = a[col].clone();
            for (r, row) in a.iter_mut().enumerate() {
                if r != col {
                    let f = row[col] / pivot_row[col];
                    for c in col..=m {
                        row[c] -= f * pivot_row[c];
                    }
                }
            }
        }

        let mut x = vec![0.0; n];
        for (k, &i) in keep.iter().enumerate() {
            x[i] = a[k][m] / a[k][k];
        }
        x
    }

    /// `max_i |(L x - b)_i|`.
    pub fn residual(system: &LaplacianSystem, x: &[f64], s: usize, t: usize) -> f64 {
        let mut lx = vec![0.0; system.dim()];
        system.matrix.spmv(x, &mut lx);
        lx.iter()
            .enumerate()
            .map(|(i, v)| {
                let b = if i == s { 1.0 } else if i == t { -1.0 } else { 0.0 };
                (v - b).abs()
            })
            .fold(0.0, f64::max)
    }

    pub fn rows(flow: &crate::FlowResult) -> Vec<f64> {
        flow.potentials.iter().map(|&(_, p)| p).collect()
    }
}

// ── Relaxation solvers ────────────────────────────────────────────────────────

#[cfg(test)]
mod relaxation {
    use approx::assert_relative_eq;
    use sr_core::NodeId;
    use sr_graph::LaplacianSystem;
    use sr_topology::{generate_constellation, GridSpec};

    use super::helpers::{graph, grounded_solve, residual, rows};
    use crate::{solve_gauss_seidel, solve_jacobi, RelaxationConfig, SolverError};

    const CYCLE: &[(u32, u32)] = &[(0, 1), (1, 2), (2, 3), (3, 0)];
    const PATH: &[(u32, u32)] = &[(0, 1), (1, 2), (2, 3)];

    #[test]
    fn jacobi_matches_direct_solve_on_cycle() {
        let sys = LaplacianSystem::from_graph(&graph(4, CYCLE));
        let flow = solve_jacobi(&sys, NodeId(0), NodeId(2), &RelaxationConfig::default()).unwrap();
        assert!(flow.converged);
        assert_eq!(flow.iterations, 2);

        let x = rows(&flow);
        let reference = grounded_solve(&sys, 0, 2, 3);
        for i in 0..4 {
            assert_relative_eq!(x[i] - x[3], reference[i], epsilon = 1e-3);
        }
        assert_relative_eq!(flow.total_flow, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn gauss_seidel_matches_direct_solve_on_cycle() {
        let sys = LaplacianSystem::from_graph(&graph(4, CYCLE));
        let flow =
            solve_gauss_seidel(&sys, NodeId(0), NodeId(2), &RelaxationConfig::default()).unwrap();
        assert!(flow.converged);

        let x = rows(&flow);
        let reference = grounded_solve(&sys, 0, 2, 3);
        for i in 0..4 {
            assert_relative_eq!(x[i] - x[3], reference[i], epsilon = 1e-3);
        }
        assert!(residual(&sys, &x, 0, 2) < 1e-3);
    }

    #[test]
    fn gauss_seidel_converges_on_path() {
        let sys = LaplacianSystem::from_graph(&graph(4, PATH));
        let flow =
            solve_gauss_seidel(&sys, NodeId(0), NodeId(3), &RelaxationConfig::default()).unwrap();
        assert!(flow.converged);
        let x = rows(&flow);
        assert_relative_eq!(x[0] - x[3], 3.0, epsilon = 1e-3);
        assert_relative_eq!(flow.total_flow, 4.0, epsilon = 1e-3);
    }

    #[test]
    fn jacobi_oscillates_on_bipartite_path() {
        // A path is bipartite: the period-2 error mode never decays.
        let sys = LaplacianSystem::from_graph(&graph(4, PATH));
        let cfg = RelaxationConfig::default();
        let flow = solve_jacobi(&sys, NodeId(0), NodeId(3), &cfg).unwrap();
        assert!(!flow.converged);
        assert_eq!(flow.iterations, cfg.max_iterations);

        let x = rows(&flow);
        assert!(flow.total_flow.is_finite());
        assert!((x[0] - x[3] - 3.0).abs() < 0.5);

        let again = solve_jacobi(&sys, NodeId(0), NodeId(3), &cfg).unwrap();
        assert_eq!(again, flow);
    }

    #[test]
    fn gauss_seidel_needs_fewer_sweeps_on_grid() {
        let topo = generate_constellation(&GridSpec::new(9, (30.0, 55.0), (-140.0, 160.0))).unwrap();
        let g = sr_graph::GraphBuilder::from_topology(&topo, Default::default()).unwrap();
        let sys = LaplacianSystem::from_graph(&g);
        let cfg = RelaxationConfig::default();

        let jacobi = solve_jacobi(&sys, NodeId(0), NodeId(8), &cfg).unwrap();
        let gs = solve_gauss_seidel(&sys, NodeId(0), NodeId(8), &cfg).unwrap();
        assert!(jacobi.converged && gs.converged);
        assert!(gs.iterations <= jacobi.iterations);
    }

    #[test]
    fn cap_reached_reports_not_converged() {
        let sys = LaplacianSystem::from_graph(&graph(4, CYCLE));
        let cfg = RelaxationConfig::new(1e-12, 1);
        let flow = solve_gauss_seidel(&sys, NodeId(0), NodeId(2), &cfg).unwrap();
        assert!(!flow.converged);
        assert_eq!(flow.iterations, 1);
    }

    #[test]
    fn same_source_and_target_runs_to_cap() {
        // Only the -1 survives the injection, so the field drifts every sweep.
        let sys = LaplacianSystem::from_graph(&graph(4, CYCLE));
        let cfg = RelaxationConfig::default();
        for flow in [
            solve_jacobi(&sys, NodeId(1), NodeId(1), &cfg).unwrap(),
            solve_gauss_seidel(&sys, NodeId(1), NodeId(1), &cfg).unwrap(),
        ] {
            assert!(!flow.converged);
            assert_eq!(flow.iterations, cfg.max_iterations);
            assert!(flow.total_flow > 0.0 && flow.total_flow.is_finite());
            assert_eq!(flow.potentials.len(), 4);
        }
    }

    #[test]
    fn jacobi_returns_iterate_within_tolerance_of_previous() {
        let topo = generate_constellation(&GridSpec::new(9, (30.0, 55.0), (-140.0, 160.0))).unwrap();
        let g = sr_graph::GraphBuilder::from_topology(&topo, Default::default()).unwrap();
        let sys = LaplacianSystem::from_graph(&g);
        let cfg = RelaxationConfig::default();

        let last = solve_jacobi(&sys, NodeId(0), NodeId(8), &cfg).unwrap();
        assert!(last.converged && last.iterations > 1);
        let capped = RelaxationConfig::new(cfg.tolerance, last.iterations - 1);
        let previous = solve_jacobi(&sys, NodeId(0), NodeId(8), &capped).unwrap();
        assert!(!previous.converged);

        let max_delta = last
            .potentials
            .iter()
            .zip(&previous.potentials)
            .map(|(&(a, xa), &(b, xb))| {
                assert_eq!(a, b);
                (xa - xb).abs()
            })
            .fold(0.0, f64::max);
        assert!(max_delta > 0.0 && max_delta < cfg.tolerance);
    }

    #[test]
    fn isolated_node_has_no_row() {
        // Node 4 has no links.
        let sys = LaplacianSystem::from_graph(&graph(5, CYCLE));
        let err = solve_jacobi(&sys, NodeId(0), NodeId(4), &RelaxationConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::NodeNotInSystem(NodeId(4))));
    }

    #[test]
    fn isolated_node_paired_with_itself_is_still() {
        let sys = LaplacianSystem::from_graph(&graph(5, CYCLE));
        let cfg = RelaxationConfig::default();
        for flow in [
            solve_jacobi(&sys, NodeId(4), NodeId(4), &cfg).unwrap(),
            solve_gauss_seidel(&sys, NodeId(4), NodeId(4), &cfg).unwrap(),
        ] {
            assert!(flow.converged);
            assert_eq!(flow.iterations, 1);
            assert_eq!(flow.total_flow, 0.0);
            assert_eq!(flow.potential(NodeId(4)), None);
        }
    }

    #[test]
    fn potential_lookup_by_node() {
        let sys = LaplacianSystem::from_graph(&graph(4, CYCLE));
        let flow = solve_jacobi(&sys, NodeId(0), NodeId(2), &RelaxationConfig::default()).unwrap();
        assert_relative_eq!(flow.potential(NodeId(0)).unwrap(), 0.5, epsilon = 1e-9);
        assert_relative_eq!(flow.potential(NodeId(2)).unwrap(), -0.5, epsilon = 1e-9);
        assert_eq!(flow.potential(NodeId(7)), None);
        assert_eq!(flow.significant(0.01).count(), 2);
    }

    #[test]
    fn config_validation() {
        assert!(RelaxationConfig::default().validate().is_ok());
        assert!(RelaxationConfig::new(0.0, 10).validate().is_err());
        assert!(RelaxationConfig::new(f64::NAN, 10).validate().is_err());
        assert!(RelaxationConfig::new(1e-4, 0).validate().is_err());
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dijkstra {
    use approx::assert_relative_eq;
    use sr_core::{LatencyModel, NodeId};

    use super::helpers::{graph, graph_with};
    use crate::{shortest_path, PathResult, SolverError};

    #[test]
    fn path_latency_is_hop_sum() {
        let g = graph(4, &[(0, 1), (1, 2), (2, 3)]);
        let p = shortest_path(&g, NodeId(0), NodeId(3)).unwrap();
        assert_eq!(p.nodes, vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]);
        assert_eq!(p.hop_count(), 3);
        assert_relative_eq!(p.total_latency_ms, 153.0, epsilon = 1e-6);
    }

    /// Every simple path from `from` to `to`, with its latency.
    fn all_paths(g: &sr_graph::WeightedGraph, from: NodeId, to: NodeId) -> Vec<(Vec<NodeId>, f64)> {
        fn walk(
            g: &sr_graph::WeightedGraph,
            cur: NodeId,
            to: NodeId,
            path: &mut Vec<NodeId>,
            cost: f64,
            out: &mut Vec<(Vec<NodeId>, f64)>,
        ) {
            if cur == to {
                out.push((path.clone(), cost));
                return;
            }
            for &nbr in g.neighbors(cur) {
                if !path.contains(&nbr) {
                    let w = g.link_latency(cur, nbr).unwrap();
                    path.push(nbr);
                    walk(g, nbr, to, path, cost + w, out);
                    path.pop();
                }
            }
        }
        let mut out = Vec::new();
        walk(g, from, to, &mut vec![from], 0.0, &mut out);
        out
    }

    #[test]
    fn matches_brute_force_enumeration() {
        let edges = [(0, 1), (0, 4), (1, 2), (1, 4), (2, 3), (3, 4), (2, 4)];
        let g = graph(5, &edges);
        for s in 0..5 {
            for t in 0..5 {
                if s == t {
                    continue;
                }
                let p = shortest_path(&g, NodeId(s), NodeId(t)).unwrap();
                let best = all_paths(&g, NodeId(s), NodeId(t))
                    .into_iter()
                    .map(|(_, c)| c)
                    .fold(f64::INFINITY, f64::min);
                assert_relative_eq!(p.total_latency_ms, best, epsilon = 1e-9);

                let summed: f64 =
                    p.nodes.windows(2).map(|w| g.link_latency(w[0], w[1]).unwrap()).sum();
                assert_relative_eq!(summed, p.total_latency_ms, epsilon = 1e-9);
                assert_eq!(p.nodes.first(), Some(&NodeId(s)));
                assert_eq!(p.nodes.last(), Some(&NodeId(t)));
            }
        }
    }

    #[test]
    fn equal_cost_ties_prefer_lower_predecessor() {
        // Flat cost: every hop is exactly 1 ms regardless of position.
        let flat = LatencyModel { base_latency_ms: 1.0, km_per_degree: 0.0, ..LatencyModel::default() };
        let g = graph_with(4, &[(0, 1), (1, 3), (0, 2), (2, 3)], flat);
        let forward = shortest_path(&g, NodeId(0), NodeId(3)).unwrap();
        assert_eq!(forward.nodes, vec![NodeId(0), NodeId(1), NodeId(3)]);
        let back = shortest_path(&g, NodeId(3), NodeId(0)).unwrap();
        assert_eq!(back.nodes, vec![NodeId(3), NodeId(1), NodeId(0)]);
    }

    #[test]
    fn same_node_is_trivial_path() {
        let g = graph(3, &[(0, 1)]);
        let p = shortest_path(&g, NodeId(2), NodeId(2)).unwrap();
        assert_eq!(p.nodes, vec![NodeId(2)]);
        assert_eq!(p.total_latency_ms, 0.0);
        assert!(p.is_reachable());
    }

    #[test]
    fn disconnected_returns_sentinel() {
        let g = graph(4, &[(0, 1), (2, 3)]);
        let p = shortest_path(&g, NodeId(0), NodeId(3)).unwrap();
        assert_eq!(p, PathResult::unreachable());
        assert!(!p.is_reachable());
        assert!(p.total_latency_ms.is_infinite());
    }

    #[test]
    fn out_of_range_is_error() {
        let g = graph(2, &[(0, 1)]);
        assert!(matches!(
            shortest_path(&g, NodeId(0), NodeId(9)),
            Err(SolverError::NodeNotInGraph(NodeId(9)))
        ));
    }
}

// ── Engine dispatch ───────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use approx::assert_relative_eq;
    use sr_core::NodeId;

    use super::helpers::graph;
    use crate::{EngineKind, PreparedEngine, RelaxationConfig, RouteOutcome};

    #[test]
    fn names_are_stable() {
        let names: Vec<&str> = EngineKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["jacobi", "gauss_seidel", "shortest_path"]);
        assert_eq!(EngineKind::GaussSeidel.to_string(), "gauss_seidel");
        assert!(EngineKind::Jacobi.is_relaxation());
        assert!(!EngineKind::ShortestPath.is_relaxation());
    }

    #[test]
    fn prepared_engines_route_one_pair() {
        let g = graph(4, &[(0, 1), (1, 2), (2, 3)]);
        for kind in EngineKind::ALL {
            let engine = PreparedEngine::prepare(kind, &g, RelaxationConfig::default()).unwrap();
            assert_eq!(engine.kind(), kind);
            let out = engine.route(NodeId(0), NodeId(3)).unwrap();
            assert!(out.is_reachable());
            assert!(out.metric().is_finite());
            match kind {
                EngineKind::ShortestPath => {
                    assert_relative_eq!(out.metric(), 153.0, epsilon = 1e-6);
                    assert!(out.path().is_some());
                }
                _ => assert!(out.flow().is_some()),
            }
        }
    }

    #[test]
    fn shortest_path_engine_reports_unreachable() {
        let g = graph(4, &[(0, 1), (2, 3)]);
        let engine =
            PreparedEngine::prepare(EngineKind::ShortestPath, &g, RelaxationConfig::default()).unwrap();
        let out = engine.route(NodeId(0), NodeId(2)).unwrap();
        assert_eq!(out, RouteOutcome::Unreachable);
        assert!(out.metric().is_infinite());
    }

    #[test]
    fn prepare_rejects_bad_config() {
        let g = graph(2, &[(0, 1)]);
        assert!(PreparedEngine::prepare(EngineKind::Jacobi, &g, RelaxationConfig::new(-1.0, 5)).is_err());
    }
}

// ── Node usage ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod usage {
    use sr_core::NodeId;

    use super::helpers::graph;
    use crate::{shortest_path, NodeUsage, PathResult};

    #[test]
    fn counts_every_node_on_each_path() {
        let g = graph(4, &[(0, 1), (1, 2), (2, 3)]);
        let mut usage = NodeUsage::new(g.node_count());
        usage.record(&shortest_path(&g, NodeId(0), NodeId(3)).unwrap());
        usage.record(&shortest_path(&g, NodeId(1), NodeId(2)).unwrap());
        usage.record(&PathResult::unreachable());

        assert_eq!(usage.get(NodeId(0)), 1);
        assert_eq!(usage.get(NodeId(1)), 2);
        assert_eq!(usage.get(NodeId(2)), 2);
        assert_eq!(usage.total(), 6);
        assert_eq!(usage.busiest(2), vec![(NodeId(1), 2), (NodeId(2), 2)]);
    }
}
