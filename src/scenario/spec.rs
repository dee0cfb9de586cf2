use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ScenarioError;
use crate::net::{Algorithm, NodeId};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub schema_version: u32,
    #[serde(default)]
    pub meta: Option<ScenarioMeta>,
    /// 预置拓扑，先于 `nodes`/`links` 构建
    #[serde(default)]
    pub topology: Option<TopologySpec>,
    /// 额外追加的空节点数
    #[serde(default)]
    pub nodes: usize,
    #[serde(default)]
    pub links: Vec<LinkSpec>,
    #[serde(default)]
    pub steps: Vec<StepSpec>,
}

impl ScenarioSpec {
    pub fn from_json_str(raw: &str) -> Result<Self, ScenarioError> {
        let spec: ScenarioSpec = serde_json::from_str(raw)?;
        if spec.schema_version != SCHEMA_VERSION {
            return Err(ScenarioError::UnsupportedSchema {
                found: spec.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(spec)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopologySpec {
    Line {
        n: usize,
        #[serde(default)]
        latency_ms: Option<i64>,
    },
    Ring {
        n: usize,
        #[serde(default)]
        latency_ms: Option<i64>,
    },
    Dumbbell {
        #[serde(default)]
        host_link_latency_ms: Option<i64>,
        #[serde(default)]
        bottleneck_latency_ms: Option<i64>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: i64,
    /// 只添加 from -> to 的单条半链路（允许负权）
    #[serde(default)]
    pub directed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepSpec {
    AddNode,
    RemoveNode {
        id: NodeId,
    },
    AddEdge {
        from: NodeId,
        to: NodeId,
        weight: i64,
        #[serde(default)]
        directed: bool,
    },
    RemoveEdge {
        from: NodeId,
        to: NodeId,
        weight: i64,
    },
    Transfer {
        from: NodeId,
        to: NodeId,
        packets: i64,
    },
    /// 未指定算法时使用 Dijkstra
    ShortestPath {
        from: NodeId,
        to: NodeId,
        #[serde(default)]
        algorithm: Option<Algorithm>,
    },
    Clear,
}

impl StepSpec {
    pub fn kind_name(&self) -> &'static str {
        match self {
            StepSpec::AddNode => "add_node",
            StepSpec::RemoveNode { .. } => "remove_node",
            StepSpec::AddEdge { .. } => "add_edge",
            StepSpec::RemoveEdge { .. } => "remove_edge",
            StepSpec::Transfer { .. } => "transfer",
            StepSpec::ShortestPath { .. } => "shortest_path",
            StepSpec::Clear => "clear",
        }
    }
}
