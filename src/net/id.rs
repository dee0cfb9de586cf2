//! 标识符类型
//!
//! 节点标识符是位置性的：即节点在节点集合中的下标。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 节点标识符（`[0, node_count)` 内的连续下标）
///
/// 删除节点会让所有更大的下标减一，因此 `NodeId` 在删除操作之间不稳定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(idx: usize) -> Self {
        NodeId(idx)
    }
}
