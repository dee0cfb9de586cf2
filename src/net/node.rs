//! 节点类型
//!
//! 一个节点即一台模拟主机：持有有序的关联半链路列表以及收发包计数。

use serde::{Deserialize, Serialize};

use super::id::NodeId;
use super::link::Edge;

/// 网络节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub edges: Vec<Edge>,
    pub sent_packets: i64,
    pub received_packets: i64,
}

impl Node {
    /// 创建新节点（空关联列表，计数为零）
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            edges: Vec::new(),
            sent_packets: 0,
            received_packets: 0,
        }
    }

    /// 第一条指向 `to` 且权重为 `weight` 的半链路位置
    pub(crate) fn find_edge(&self, to: NodeId, weight: i64) -> Option<usize> {
        self.edges
            .iter()
            .position(|e| e.destination == to && e.weight == weight)
    }
}
