//! 链路类型
//!
//! 无向链路由两条互为镜像的有向半链路表示，每条半链路存放在其源节点上。

use serde::{Deserialize, Serialize};

use super::id::NodeId;

/// 有向半链路：存放在源节点的关联列表中
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub destination: NodeId,
    /// 时延（ms）。经 `add_edge` 添加的总是正数。
    pub weight: i64,
}

impl Edge {
    pub fn new(destination: NodeId, weight: i64) -> Self {
        Self {
            destination,
            weight,
        }
    }
}

/// 路径上实际使用的一条边（区分同一对节点之间的平行边）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: i64,
}

impl PathEdge {
    /// 是否与 `(a, b, weight)` 表示同一条无向链路（方向不敏感）
    pub fn matches_undirected(&self, a: NodeId, b: NodeId, weight: i64) -> bool {
        self.weight == weight
            && ((self.from == a && self.to == b) || (self.from == b && self.to == a))
    }
}
