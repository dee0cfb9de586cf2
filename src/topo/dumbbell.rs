//! Dumbbell 拓扑构建

use crate::net::{Network, NodeId};

/// Dumbbell 拓扑配置选项
#[derive(Debug, Clone)]
pub struct DumbbellOpts {
    /// 主机到交换机的链路时延（ms）
    pub host_link_latency: i64,
    /// 两台交换机之间的瓶颈链路时延（ms）
    pub bottleneck_latency: i64,
}

impl Default for DumbbellOpts {
    fn default() -> Self {
        Self {
            host_link_latency: 1,
            bottleneck_latency: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DumbbellTopology {
    pub h0: NodeId,
    pub h1: NodeId,
    pub s0: NodeId,
    pub s1: NodeId,
}

impl DumbbellTopology {
    /// h0 到 h1 的预期路径
    pub fn route(&self) -> Vec<NodeId> {
        vec![self.h0, self.s0, self.s1, self.h1]
    }
}

/// 构建 dumbbell 拓扑
///
/// 拓扑结构：h0 <-> s0 <-> s1 <-> h1
/// 时延非正时相应链路不会被添加。
pub fn build_dumbbell(net: &mut Network, opts: &DumbbellOpts) -> DumbbellTopology {
    let h0 = net.add_node();
    let h1 = net.add_node();
    let s0 = net.add_node();
    let s1 = net.add_node();

    // h0 <-> s0
    net.add_edge(h0, s0, opts.host_link_latency);
    // s0 <-> s1 (bottleneck)
    net.add_edge(s0, s1, opts.bottleneck_latency);
    // s1 <-> h1
    net.add_edge(s1, h1, opts.host_link_latency);

    DumbbellTopology { h0, h1, s0, s1 }
}
