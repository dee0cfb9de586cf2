//! 网络拓扑管理
//!
//! 持有全部节点及其关联半链路，提供增删节点/链路、收发包计数与批量查询。
//! 节点标识是位置性的：删除节点会对其后的节点及指向它们的半链路重新编号。

use std::fmt;

use super::error::{NetError, Result};
use super::id::NodeId;
use super::link::Edge;
use super::node::Node;
use super::stats::Stats;
use tracing::{debug, trace, warn};

/// 网络拓扑（图模型 + 路径引擎）
#[derive(Debug, Default, Clone)]
pub struct Network {
    nodes: Vec<Node>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个新节点，返回其下标（总是等于之前的节点数）
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id));
        debug!(id = ?id, "🖥️  添加节点");
        id
    }

    /// 删除节点；下标越界时返回 false
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        self.try_remove_node(id)
            .map_err(|err| debug!(%err, "删除节点失败"))
            .is_ok()
    }

    #[tracing::instrument(skip(self), fields(count = self.nodes.len()))]
    pub fn try_remove_node(&mut self, id: NodeId) -> Result<()> {
        self.check_node(id)?;

        // 先去掉所有指向被删节点的半链路
        let mut dropped = 0usize;
        for node in &mut self.nodes {
            let before = node.edges.len();
            node.edges.retain(|e| e.destination != id);
            dropped += before - node.edges.len();
        }
        self.nodes.remove(id.0);

        // 之后的节点整体前移一位，目的下标同步减一
        for (idx, node) in self.nodes.iter_mut().enumerate() {
            node.id = NodeId(idx);
            for edge in &mut node.edges {
                if edge.destination > id {
                    edge.destination = NodeId(edge.destination.0 - 1);
                }
            }
        }

        debug!(dropped_half_links = dropped, remaining = self.nodes.len(), "🗑️  删除节点");
        Ok(())
    }

    /// 添加无向链路（两条镜像半链路）；允许平行边
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> bool {
        self.try_add_edge(from, to, weight)
            .map_err(|err| debug!(%err, "添加链路失败"))
            .is_ok()
    }

    pub fn try_add_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        if from == to {
            return Err(NetError::SelfLoop(from));
        }
        if weight <= 0 {
            return Err(NetError::NonPositiveWeight(weight));
        }

        self.nodes[from.0].edges.push(Edge::new(to, weight));
        self.nodes[to.0].edges.push(Edge::new(from, weight));
        debug!(from = ?from, to = ?to, weight, "🔗 添加链路");
        Ok(())
    }

    /// 只在 `from` 上添加一条有向半链路，不做镜像。
    ///
    /// 权重可以为负（用于 Bellman-Ford 输入），但不能为零。
    /// 通过这里加入的半链路不受镜像不变式约束。
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> bool {
        self.try_add_directed_edge(from, to, weight)
            .map_err(|err| debug!(%err, "添加有向半链路失败"))
            .is_ok()
    }

    pub fn try_add_directed_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        if from == to {
            return Err(NetError::SelfLoop(from));
        }
        if weight == 0 {
            return Err(NetError::ZeroWeight);
        }

        self.nodes[from.0].edges.push(Edge::new(to, weight));
        debug!(from = ?from, to = ?to, weight, "➡️  添加有向半链路");
        Ok(())
    }

    /// 删除一条链路（按权重精确匹配，两侧各只删第一条匹配）。
    ///
    /// 只要任意一侧删除成功即返回 true。
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> bool {
        self.try_remove_edge(from, to, weight)
            .map_err(|err| debug!(%err, "删除链路失败"))
            .is_ok()
    }

    pub fn try_remove_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;

        let forward = self.nodes[from.0].find_edge(to, weight);
        if let Some(idx) = forward {
            self.nodes[from.0].edges.remove(idx);
        }
        let reverse = self.nodes[to.0].find_edge(from, weight);
        if let Some(idx) = reverse {
            self.nodes[to.0].edges.remove(idx);
        }

        match (forward.is_some(), reverse.is_some()) {
            (false, false) => Err(NetError::NoMatchingEdge { from, to, weight }),
            (true, true) => {
                debug!(from = ?from, to = ?to, weight, "✂️  删除链路");
                Ok(())
            }
            (forward, reverse) => {
                warn!(
                    from = ?from,
                    to = ?to,
                    weight,
                    forward,
                    reverse,
                    "只删除了一侧半链路，图不再对称"
                );
                Ok(())
            }
        }
    }

    /// 记账：`from` 的发送计数与 `to` 的接收计数各加 `packets`。
    ///
    /// 不要求两点之间存在链路，也不校验 `packets` 的符号。
    pub fn transfer_data(&mut self, from: NodeId, to: NodeId, packets: i64) -> bool {
        self.try_transfer_data(from, to, packets)
            .map_err(|err| debug!(%err, "数据传输失败"))
            .is_ok()
    }

    pub fn try_transfer_data(&mut self, from: NodeId, to: NodeId, packets: i64) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;

        let sender = &mut self.nodes[from.0];
        sender.sent_packets = sender.sent_packets.saturating_add(packets);
        let receiver = &mut self.nodes[to.0];
        receiver.received_packets = receiver.received_packets.saturating_add(packets);

        trace!(
            from = ?from,
            to = ?to,
            packets,
            sent = self.nodes[from.0].sent_packets,
            received = self.nodes[to.0].received_packets,
            "📦 更新收发计数"
        );
        Ok(())
    }

    /// 当前节点集合（只读视图）
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 清空整个网络
    pub fn clear_network(&mut self) {
        debug!(nodes = self.nodes.len(), "🧹 清空网络");
        self.nodes.clear();
    }

    /// 是否存在负权半链路
    pub fn has_negative_weights(&self) -> bool {
        self.nodes
            .iter()
            .flat_map(|n| n.edges.iter())
            .any(|e| e.weight < 0)
    }

    pub fn stats(&self) -> Stats {
        let half_links = self.nodes.iter().map(|n| n.edges.len()).sum::<usize>();
        Stats {
            nodes: self.nodes.len(),
            half_links,
            links: half_links / 2,
            sent_packets: self.nodes.iter().map(|n| n.sent_packets).sum(),
            received_packets: self.nodes.iter().map(|n| n.received_packets).sum(),
        }
    }

    pub(crate) fn check_node(&self, id: NodeId) -> Result<()> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(NetError::InvalidNode {
                id,
                count: self.nodes.len(),
            })
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "Computer {} -> ", node.id)?;
            for edge in &node.edges {
                write!(f, "{}({}ms) ", edge.destination, edge.weight)?;
            }
            writeln!(
                f,
                "| Sent: {} | Received: {}",
                node.sent_packets, node.received_packets
            )?;
        }
        Ok(())
    }
}
