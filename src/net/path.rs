//! 最短路查询结果

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::NodeId;
use super::link::PathEdge;

/// 产生结果的算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一次最短路查询的结果
///
/// `path` 为从起点到终点（含两端）的节点序列；`edges` 为依次使用的具体边，
/// 平行边存在时据此区分选中了哪一条。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    pub distance: i64,
    pub path: Vec<NodeId>,
    pub edges: Vec<PathEdge>,
    pub algorithm: Algorithm,
}

impl PathResult {
    pub fn hops(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.path.contains(&id)
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hops = self
            .path
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        write!(f, "{}ms via {} [{}]", self.distance, hops, self.algorithm)
    }
}
