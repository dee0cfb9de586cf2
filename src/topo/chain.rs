//! 链式拓扑构建（线形、环形）

use crate::net::{Network, NodeId};

/// 构建 `n` 个节点的线形拓扑：0 - 1 - ... - (n-1)，每段时延相同
pub fn build_line(net: &mut Network, n: usize, latency: i64) -> Vec<NodeId> {
    let ids = (0..n).map(|_| net.add_node()).collect::<Vec<_>>();
    for pair in ids.windows(2) {
        net.add_edge(pair[0], pair[1], latency);
    }
    ids
}

/// 构建 `n` 个节点的环形拓扑；少于 3 个节点时退化为线形
pub fn build_ring(net: &mut Network, n: usize, latency: i64) -> Vec<NodeId> {
    let ids = build_line(net, n, latency);
    if n >= 3 {
        net.add_edge(ids[n - 1], ids[0], latency);
    }
    ids
}
