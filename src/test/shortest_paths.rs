use crate::net::{Algorithm, NetError, Network, NodeId, PathEdge};

fn network_with(n: usize) -> Network {
    let mut net = Network::new();
    for _ in 0..n {
        net.add_node();
    }
    net
}

fn ids(raw: &[usize]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId).collect()
}

fn pe(from: usize, to: usize, weight: i64) -> PathEdge {
    PathEdge {
        from: NodeId(from),
        to: NodeId(to),
        weight,
    }
}

/// 0 -5- 1 -3- 2，外加 0 -20- 2
fn triangle() -> Network {
    let mut net = Network::new();
    assert_eq!(net.add_node(), NodeId(0));
    assert_eq!(net.add_node(), NodeId(1));
    assert_eq!(net.add_node(), NodeId(2));
    assert!(net.add_edge(NodeId(0), NodeId(1), 5));
    assert!(net.add_edge(NodeId(1), NodeId(2), 3));
    assert!(net.add_edge(NodeId(0), NodeId(2), 20));
    net
}

#[test]
fn dijkstra_prefers_two_hop_route_over_expensive_direct_link() {
    let net = triangle();
    let res = net
        .shortest_path_dijkstra(NodeId(0), NodeId(2))
        .expect("path exists");

    assert_eq!(res.distance, 8);
    assert_eq!(res.path, ids(&[0, 1, 2]));
    assert_eq!(res.edges, vec![pe(0, 1, 5), pe(1, 2, 3)]);
    assert_eq!(res.algorithm, Algorithm::Dijkstra);
}

#[test]
fn dijkstra_picks_cheaper_parallel_edge() {
    let mut net = triangle();
    assert!(net.add_edge(NodeId(0), NodeId(2), 2));

    let res = net
        .shortest_path_dijkstra(NodeId(0), NodeId(2))
        .expect("path exists");
    assert_eq!(res.distance, 2);
    assert_eq!(res.path, ids(&[0, 2]));
    assert_eq!(res.edges, vec![pe(0, 2, 2)]);
}

#[test]
fn bellman_ford_handles_negative_directed_edge() {
    let mut net = network_with(3);
    assert!(net.add_directed_edge(NodeId(0), NodeId(1), 4));
    assert!(net.add_directed_edge(NodeId(1), NodeId(2), -2));
    assert!(net.add_directed_edge(NodeId(0), NodeId(2), 10));

    let res = net
        .shortest_path_bellman_ford(NodeId(0), NodeId(2))
        .expect("path exists");
    assert_eq!(res.distance, 2);
    assert_eq!(res.path, ids(&[0, 1, 2]));
    assert_eq!(res.edges, vec![pe(0, 1, 4), pe(1, 2, -2)]);
    assert_eq!(res.algorithm, Algorithm::BellmanFord);
}

#[test]
fn dijkstra_refuses_graphs_with_negative_weights() {
    let mut net = network_with(3);
    net.add_directed_edge(NodeId(0), NodeId(1), 4);
    net.add_directed_edge(NodeId(1), NodeId(2), -2);

    assert!(net.shortest_path_dijkstra(NodeId(0), NodeId(2)).is_none());
    assert_eq!(
        net.try_shortest_path_dijkstra(NodeId(0), NodeId(2)),
        Err(NetError::NegativeWeight)
    );
}

#[test]
fn bellman_ford_detects_reachable_negative_cycle() {
    let mut net = network_with(3);
    net.add_directed_edge(NodeId(0), NodeId(1), 1);
    net.add_directed_edge(NodeId(1), NodeId(2), -3);
    net.add_directed_edge(NodeId(2), NodeId(1), 1);

    assert!(net.shortest_path_bellman_ford(NodeId(0), NodeId(2)).is_none());
    match net.try_shortest_path_bellman_ford(NodeId(0), NodeId(2)) {
        Err(NetError::NegativeCycle { affected }) => {
            assert_eq!(affected, ids(&[1, 2]));
        }
        other => panic!("expected negative cycle, got {other:?}"),
    }
}

#[test]
fn bellman_ford_rejects_undirected_negative_link_as_cycle() {
    let mut net = network_with(2);
    net.add_directed_edge(NodeId(0), NodeId(1), -1);
    net.add_directed_edge(NodeId(1), NodeId(0), -1);

    assert!(matches!(
        net.try_shortest_path_bellman_ford(NodeId(0), NodeId(1)),
        Err(NetError::NegativeCycle { .. })
    ));
}

#[test]
fn bellman_ford_ignores_unreachable_negative_cycle() {
    let mut net = network_with(4);
    net.add_edge(NodeId(0), NodeId(1), 4);
    net.add_directed_edge(NodeId(2), NodeId(3), -1);
    net.add_directed_edge(NodeId(3), NodeId(2), -1);

    let res = net
        .shortest_path_bellman_ford(NodeId(0), NodeId(1))
        .expect("cycle is not reachable from 0");
    assert_eq!(res.distance, 4);
    assert_eq!(res.path, ids(&[0, 1]));
}

#[test]
fn both_algorithms_agree_on_positive_graphs() {
    // 最短路唯一的小网格
    let mut net = network_with(6);
    let links = [
        (0, 1, 7),
        (0, 2, 9),
        (0, 5, 14),
        (1, 2, 10),
        (1, 3, 16),
        (2, 3, 11),
        (2, 5, 2),
        (3, 4, 6),
        (4, 5, 9),
    ];
    for (a, b, w) in links {
        assert!(net.add_edge(NodeId(a), NodeId(b), w));
    }

    for start in 0..6 {
        for end in 0..6 {
            let d = net
                .shortest_path_dijkstra(NodeId(start), NodeId(end))
                .expect("connected");
            let b = net
                .shortest_path_bellman_ford(NodeId(start), NodeId(end))
                .expect("connected");
            assert_eq!(d.distance, b.distance, "{start} -> {end}");
            assert_eq!(d.path, b.path, "{start} -> {end}");
            assert_eq!(d.edges, b.edges, "{start} -> {end}");
        }
    }

    let res = net
        .shortest_path_dijkstra(NodeId(0), NodeId(4))
        .expect("connected");
    assert_eq!(res.distance, 20);
    assert_eq!(res.path, ids(&[0, 2, 5, 4]));
}

#[test]
fn dijkstra_tie_break_prefers_last_minimum() {
    // 0 -> {1, 2} -> 3，四条边权重都为 1
    let mut net = network_with(4);
    net.add_edge(NodeId(0), NodeId(1), 1);
    net.add_edge(NodeId(0), NodeId(2), 1);
    net.add_edge(NodeId(1), NodeId(3), 1);
    net.add_edge(NodeId(2), NodeId(3), 1);

    let res = net
        .shortest_path_dijkstra(NodeId(0), NodeId(3))
        .expect("connected");
    assert_eq!(res.distance, 2);
    assert_eq!(res.path, ids(&[0, 2, 3]));
}

#[test]
fn path_edges_line_up_with_path_nodes() {
    let net = triangle();
    for algorithm in [Algorithm::Dijkstra, Algorithm::BellmanFord] {
        let res = net
            .shortest_path(NodeId(2), NodeId(0), algorithm)
            .expect("connected");
        assert_eq!(res.algorithm, algorithm);
        assert_eq!(res.hops() + 1, res.path.len());
        for (edge, pair) in res.edges.iter().zip(res.path.windows(2)) {
            assert_eq!(edge.from, pair[0]);
            assert_eq!(edge.to, pair[1]);
        }
        assert_eq!(res.edges.iter().map(|e| e.weight).sum::<i64>(), res.distance);
    }
}

#[test]
fn start_equal_to_end_is_a_zero_length_path() {
    let net = triangle();
    for algorithm in [Algorithm::Dijkstra, Algorithm::BellmanFord] {
        let res = net
            .shortest_path(NodeId(1), NodeId(1), algorithm)
            .expect("trivial path");
        assert_eq!(res.distance, 0);
        assert_eq!(res.path, ids(&[1]));
        assert!(res.edges.is_empty());
    }

    let mut single = network_with(1);
    let res = single
        .shortest_path_bellman_ford(NodeId(0), NodeId(0))
        .expect("trivial path");
    assert_eq!(res.path, ids(&[0]));
    single.clear_network();
    assert!(single.shortest_path_dijkstra(NodeId(0), NodeId(0)).is_none());
}

#[test]
fn out_of_range_endpoints_yield_no_result() {
    let net = triangle();
    assert!(net.shortest_path_dijkstra(NodeId(0), NodeId(3)).is_none());
    assert!(net.shortest_path_bellman_ford(NodeId(3), NodeId(0)).is_none());
    assert_eq!(
        net.try_shortest_path_bellman_ford(NodeId(7), NodeId(0)),
        Err(NetError::InvalidNode {
            id: NodeId(7),
            count: 3
        })
    );
}

#[test]
fn unreachable_target_yields_no_path() {
    let mut net = network_with(4);
    net.add_edge(NodeId(0), NodeId(1), 1);
    net.add_edge(NodeId(2), NodeId(3), 1);

    for algorithm in [Algorithm::Dijkstra, Algorithm::BellmanFord] {
        assert_eq!(
            net.try_shortest_path(NodeId(0), NodeId(3), algorithm),
            Err(NetError::NoPath {
                start: NodeId(0),
                end: NodeId(3)
            })
        );
    }
}

#[test]
fn reachable_from_follows_half_links() {
    let mut net = network_with(4);
    net.add_directed_edge(NodeId(0), NodeId(1), 1);
    net.add_directed_edge(NodeId(1), NodeId(2), 1);
    net.add_directed_edge(NodeId(3), NodeId(0), 1);

    assert_eq!(net.reachable_from(NodeId(0)), ids(&[0, 1, 2]));
    assert_eq!(net.reachable_from(NodeId(2)), ids(&[2]));
    assert_eq!(net.reachable_from(NodeId(3)), ids(&[0, 1, 2, 3]));
    assert!(net.reachable_from(NodeId(9)).is_empty());
}

#[test]
fn path_result_display_is_readable() {
    let net = triangle();
    let res = net
        .shortest_path_dijkstra(NodeId(0), NodeId(2))
        .expect("connected");
    assert_eq!(res.to_string(), "8ms via 0 -> 1 -> 2 [dijkstra]");
}

#[test]
fn bellman_ford_reports_cycle_of_extreme_negative_weights() {
    // 两条 i64::MIN 的半链路相加会越过 i64 下界，不能被截断成有限距离
    let mut net = network_with(2);
    assert!(net.add_directed_edge(NodeId(0), NodeId(1), i64::MIN));
    assert!(net.add_directed_edge(NodeId(1), NodeId(0), i64::MIN));

    assert!(net.shortest_path_bellman_ford(NodeId(0), NodeId(1)).is_none());
    assert_eq!(
        net.try_shortest_path_bellman_ford(NodeId(0), NodeId(1)),
        Err(NetError::NegativeCycle {
            affected: ids(&[0, 1])
        })
    );
}

#[test]
fn distance_beyond_i64_is_an_error_not_a_clamped_value() {
    let mut net = network_with(3);
    assert!(net.add_edge(NodeId(0), NodeId(1), i64::MAX - 1));
    assert!(net.add_edge(NodeId(1), NodeId(2), 5));

    for algorithm in [Algorithm::Dijkstra, Algorithm::BellmanFord] {
        assert_eq!(
            net.try_shortest_path(NodeId(0), NodeId(2), algorithm),
            Err(NetError::DistanceOverflow {
                start: NodeId(0),
                end: NodeId(2)
            })
        );
        assert!(net.shortest_path(NodeId(0), NodeId(2), algorithm).is_none());

        let res = net
            .shortest_path(NodeId(0), NodeId(1), algorithm)
            .expect("single hop fits");
        assert_eq!(res.distance, i64::MAX - 1);
        assert_eq!(res.path, ids(&[0, 1]));
    }
}

#[test]
fn large_intermediate_sums_still_give_exact_distances() {
    // 中途和超过 i64::MAX，终点距离回到范围内
    let mut net = network_with(3);
    assert!(net.add_directed_edge(NodeId(0), NodeId(1), i64::MAX));
    assert!(net.add_directed_edge(NodeId(1), NodeId(2), 10));
    assert!(net.add_directed_edge(NodeId(0), NodeId(2), i64::MAX));

    let res = net
        .shortest_path_bellman_ford(NodeId(0), NodeId(2))
        .expect("direct link fits");
    assert_eq!(res.distance, i64::MAX);
    assert_eq!(res.path, ids(&[0, 2]));
}
