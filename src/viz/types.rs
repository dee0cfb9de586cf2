use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::net::{Network, NodeId, PathResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizNodeInfo {
    pub id: usize,
    pub sent_packets: i64,
    pub received_packets: i64,
    /// 出边（半链路）数
    pub degree: usize,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizLinkInfo {
    pub from: usize,
    pub to: usize,
    /// 时延（ms）
    pub weight: i64,
    /// 没有镜像半链路（有向链路）
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub directed: bool,
    pub highlighted: bool,
}

/// 一次可渲染的网络快照（JSON）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizSnapshot {
    pub nodes: Vec<VizNodeInfo>,
    pub links: Vec<VizLinkInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathResult>,
}

impl VizSnapshot {
    /// 由当前网络与（可选的）路径结果生成快照。
    ///
    /// 互为镜像的一对半链路只输出一次（取自下标较小的一侧）；
    /// 找不到镜像的半链路按有向链路原样输出。
    pub fn capture(net: &Network, path: Option<&PathResult>) -> Self {
        let link_highlighted = |a: NodeId, b: NodeId, weight: i64| {
            path.is_some_and(|p| p.edges.iter().any(|e| e.matches_undirected(a, b, weight)))
        };
        let node_highlighted = |id: NodeId| path.is_some_and(|p| p.contains_node(id));

        let nodes = net
            .nodes()
            .iter()
            .map(|n| VizNodeInfo {
                id: n.id.0,
                sent_packets: n.sent_packets,
                received_packets: n.received_packets,
                degree: n.edges.len(),
                highlighted: node_highlighted(n.id),
            })
            .collect::<Vec<_>>();

        // 每个 (to, weight) 还剩多少条镜像可被配对
        let mut mirrors: Vec<Vec<(NodeId, i64)>> = net
            .nodes()
            .iter()
            .map(|n| n.edges.iter().map(|e| (e.destination, e.weight)).collect())
            .collect();

        let mut links = Vec::new();
        for node in net.nodes() {
            for edge in &node.edges {
                let (a, b) = (node.id, edge.destination);
                if a > b {
                    continue;
                }
                let mirror = mirrors[b.0]
                    .iter()
                    .position(|&(dst, w)| dst == a && w == edge.weight);
                let directed = match mirror {
                    Some(pos) => {
                        mirrors[b.0].swap_remove(pos);
                        false
                    }
                    None => true,
                };
                links.push(VizLinkInfo {
                    from: a.0,
                    to: b.0,
                    weight: edge.weight,
                    directed,
                    highlighted: link_highlighted(a, b, edge.weight),
                });
            }
        }

        // 高下标一侧未被配对的半链路即为反向的有向链路
        for node in net.nodes() {
            for &(dst, weight) in &mirrors[node.id.0] {
                if node.id > dst {
                    links.push(VizLinkInfo {
                        from: node.id.0,
                        to: dst.0,
                        weight,
                        directed: true,
                        highlighted: link_highlighted(node.id, dst, weight),
                    });
                }
            }
        }

        Self {
            nodes,
            links,
            path: path.cloned(),
        }
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let raw = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, raw)
    }
}
