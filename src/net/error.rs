//! 错误类型
//!
//! 对外接口以 bool / Option 报告失败；内部用 `NetError` 保留失败原因，
//! 以便日志区分“不可达”和“负权环”。

use thiserror::Error;

use super::id::NodeId;

pub type Result<T> = std::result::Result<T, NetError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetError {
    #[error("invalid node {id} (node count {count})")]
    InvalidNode { id: NodeId, count: usize },

    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(NodeId),

    #[error("link weight must be positive, got {0}")]
    NonPositiveWeight(i64),

    #[error("half-link weight must be non-zero")]
    ZeroWeight,

    #[error("no link {from} <-> {to} with weight {weight}")]
    NoMatchingEdge {
        from: NodeId,
        to: NodeId,
        weight: i64,
    },

    #[error("no path from {start} to {end}")]
    NoPath { start: NodeId, end: NodeId },

    #[error("negative weight cycle detected, affected nodes {affected:?}")]
    NegativeCycle { affected: Vec<NodeId> },

    #[error("distance from {start} to {end} does not fit in i64")]
    DistanceOverflow { start: NodeId, end: NodeId },

    #[error("predecessor chain through {node} does not lead back to the start")]
    PredecessorCycle { node: NodeId },

    #[error("dijkstra cannot run on a graph with negative weights")]
    NegativeWeight,
}
