//! 单源最短路（Dijkstra / Bellman-Ford）
//!
//! 两种算法共享同一套松弛规则与回溯重建：
//! `dist[v]` 为 `None` 表示尚不可达；若 `dist[u] + w < dist[v]`，
//! 则更新 `dist[v]`、`prev[v] = u`，并记录所用的具体边 `(u, v, w)`。
//!
//! Dijkstra 为 `O(V²)` 线性选点：每轮在未访问且距离有限的节点中选最小者，
//! 比较用 “≤”，所以距离相同的节点里下标最大的胜出。
//! Bellman-Ford 最多做 `V-1` 轮全量松弛（无更新即提前停止），
//! 之后再做一轮校验，仍可松弛说明存在可达的负权环。
//!
//! 距离在 `i128` 中累加，不会饱和；结果超出 `i64` 时报告 `DistanceOverflow`。

use std::collections::VecDeque;

use super::error::{NetError, Result};
use super::id::NodeId;
use super::link::{Edge, PathEdge};
use super::network::Network;
use super::path::{Algorithm, PathResult};
use tracing::{debug, trace, warn};

/// 单次查询的工作数组
struct SearchState {
    dist: Vec<Option<i128>>,
    prev: Vec<Option<NodeId>>,
    edge_used: Vec<Option<PathEdge>>,
}

impl SearchState {
    fn new(n: usize, start: NodeId) -> Self {
        let mut dist = vec![None; n];
        dist[start.0] = Some(0);
        Self {
            dist,
            prev: vec![None; n],
            edge_used: vec![None; n],
        }
    }

    fn candidate(&self, u: NodeId, edge: &Edge) -> Option<i128> {
        let du = self.dist[u.0]?;
        let cand = du + i128::from(edge.weight);
        self.dist[edge.destination.0]
            .is_none_or(|dv| cand < dv)
            .then_some(cand)
    }

    /// 尝试经由 `u` 的半链路 `edge` 松弛目的节点，返回是否更新
    fn relax(&mut self, u: NodeId, edge: &Edge) -> bool {
        let Some(cand) = self.candidate(u, edge) else {
            return false;
        };
        let v = edge.destination;
        trace!(u = ?u, v = ?v, weight = edge.weight, dist = %cand, "松弛");
        self.dist[v.0] = Some(cand);
        self.prev[v.0] = Some(u);
        self.edge_used[v.0] = Some(PathEdge {
            from: u,
            to: v,
            weight: edge.weight,
        });
        true
    }

    /// 从 `end` 沿前驱回溯并反转，得到节点序列与边序列
    fn into_result(self, start: NodeId, end: NodeId, algorithm: Algorithm) -> Result<PathResult> {
        let Some(distance) = self.dist[end.0] else {
            return Err(NetError::NoPath { start, end });
        };
        let distance =
            i64::try_from(distance).map_err(|_| NetError::DistanceOverflow { start, end })?;

        let mut path = Vec::new();
        let mut edges = Vec::new();
        let mut current = Some(end);
        while let Some(node) = current {
            if path.len() >= self.prev.len() {
                return Err(NetError::PredecessorCycle { node });
            }
            path.push(node);
            if let Some(edge) = self.edge_used[node.0] {
                edges.push(edge);
            }
            current = self.prev[node.0];
        }
        if path.last() != Some(&start) {
            return Err(NetError::PredecessorCycle { node: end });
        }
        path.reverse();
        edges.reverse();

        Ok(PathResult {
            distance,
            path,
            edges,
            algorithm,
        })
    }
}

impl Network {
    /// Dijkstra 最短路；起终点越界、不可达或图中有负权时返回 None
    pub fn shortest_path_dijkstra(&self, start: NodeId, end: NodeId) -> Option<PathResult> {
        self.shortest_path(start, end, Algorithm::Dijkstra)
    }

    /// Bellman-Ford 最短路；起终点越界、不可达或存在负权环时返回 None
    pub fn shortest_path_bellman_ford(&self, start: NodeId, end: NodeId) -> Option<PathResult> {
        self.shortest_path(start, end, Algorithm::BellmanFord)
    }

    pub fn shortest_path(
        &self,
        start: NodeId,
        end: NodeId,
        algorithm: Algorithm,
    ) -> Option<PathResult> {
        match self.try_shortest_path(start, end, algorithm) {
            Ok(res) => Some(res),
            Err(err @ NetError::NegativeCycle { .. }) => {
                warn!(%err, %algorithm, "⚠️  最短路无定义");
                None
            }
            Err(err) => {
                debug!(%err, %algorithm, "未找到路径");
                None
            }
        }
    }

    pub fn try_shortest_path(
        &self,
        start: NodeId,
        end: NodeId,
        algorithm: Algorithm,
    ) -> Result<PathResult> {
        match algorithm {
            Algorithm::Dijkstra => self.try_shortest_path_dijkstra(start, end),
            Algorithm::BellmanFord => self.try_shortest_path_bellman_ford(start, end),
        }
    }

    #[tracing::instrument(skip(self), fields(nodes = self.node_count()))]
    pub fn try_shortest_path_dijkstra(&self, start: NodeId, end: NodeId) -> Result<PathResult> {
        self.check_node(start)?;
        self.check_node(end)?;
        if self.has_negative_weights() {
            return Err(NetError::NegativeWeight);
        }

        let nodes = self.nodes();
        let n = nodes.len();
        let mut state = SearchState::new(n, start);
        let mut visited = vec![false; n];

        for _ in 0..n.saturating_sub(1) {
            let mut selected: Option<(usize, i128)> = None;
            for v in 0..n {
                if visited[v] {
                    continue;
                }
                if let Some(dv) = state.dist[v] {
                    if selected.is_none_or(|(_, best)| dv <= best) {
                        selected = Some((v, dv));
                    }
                }
            }
            let Some((u, du)) = selected else {
                trace!("没有距离有限的未访问节点，提前结束");
                break;
            };
            visited[u] = true;
            trace!(u, dist = %du, "选中节点");

            let u = NodeId(u);
            for edge in &nodes[u.0].edges {
                if !visited[edge.destination.0] {
                    state.relax(u, edge);
                }
            }
        }

        let res = state.into_result(start, end, Algorithm::Dijkstra)?;
        debug!(distance = res.distance, hops = res.hops(), "✅ Dijkstra 找到路径");
        Ok(res)
    }

    #[tracing::instrument(skip(self), fields(nodes = self.node_count()))]
    pub fn try_shortest_path_bellman_ford(
        &self,
        start: NodeId,
        end: NodeId,
    ) -> Result<PathResult> {
        self.check_node(start)?;
        self.check_node(end)?;

        let nodes = self.nodes();
        let n = nodes.len();
        let mut state = SearchState::new(n, start);

        for pass in 0..n.saturating_sub(1) {
            let mut updated = false;
            for (u, node) in nodes.iter().enumerate() {
                for edge in &node.edges {
                    updated |= state.relax(NodeId(u), edge);
                }
            }
            if !updated {
                trace!(pass, "本轮无更新，提前结束");
                break;
            }
        }

        for (u, node) in nodes.iter().enumerate() {
            for edge in &node.edges {
                if state.candidate(NodeId(u), edge).is_some() {
                    let affected = self.reachable_from(edge.destination);
                    return Err(NetError::NegativeCycle { affected });
                }
            }
        }

        let res = state.into_result(start, end, Algorithm::BellmanFord)?;
        debug!(distance = res.distance, hops = res.hops(), "✅ Bellman-Ford 找到路径");
        Ok(res)
    }

    /// 沿半链路 BFS，返回从 `from` 出发可达的全部节点（含自身，升序）
    pub fn reachable_from(&self, from: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes();
        if from.0 >= nodes.len() {
            return Vec::new();
        }

        let mut seen = vec![false; nodes.len()];
        let mut q: VecDeque<NodeId> = VecDeque::new();
        seen[from.0] = true;
        q.push_back(from);

        while let Some(v) = q.pop_front() {
            for edge in &nodes[v.0].edges {
                let next = edge.destination;
                if !seen[next.0] {
                    seen[next.0] = true;
                    q.push_back(next);
                }
            }
        }

        seen.iter()
            .enumerate()
            .filter(|(_, s)| **s)
            .map(|(idx, _)| NodeId(idx))
            .collect()
    }
}
