use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::ScenarioError;
use super::spec::{ScenarioSpec, StepSpec, TopologySpec};
use crate::net::{Algorithm, NetError, Network, NodeId, PathResult, Stats};
use crate::topo::chain::{build_line, build_ring};
use crate::topo::dumbbell::{DumbbellOpts, build_dumbbell};

const DEFAULT_LATENCY_MS: i64 = 1;

/// 单步执行结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutcome {
    pub index: usize,
    pub step: StepSpec,
    pub ok: bool,
    /// `add_node` 分配到的下标
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// 失败是否源于负权环（与普通不可达区分）
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub negative_cycle: bool,
}

impl StepOutcome {
    fn new(index: usize, step: &StepSpec) -> Self {
        Self {
            index,
            step: step.clone(),
            ok: true,
            node: None,
            path: None,
            error: None,
            negative_cycle: false,
        }
    }

    fn fail(mut self, err: NetError) -> Self {
        self.ok = false;
        self.negative_cycle = matches!(err, NetError::NegativeCycle { .. });
        self.error = Some(err.to_string());
        self
    }
}

/// 场景回放报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    #[serde(default)]
    pub name: Option<String>,
    pub outcomes: Vec<StepOutcome>,
    pub stats: Stats,
}

impl ScenarioReport {
    /// 最近一次成功的最短路结果（供可视化高亮）
    pub fn last_path(&self) -> Option<&PathResult> {
        self.outcomes.iter().rev().find_map(|o| o.path.as_ref())
    }
}

/// 按场景描述构建初始网络：先预置拓扑，再追加节点，最后添加链路
pub fn build_network(spec: &ScenarioSpec) -> Result<Network, ScenarioError> {
    let mut net = Network::new();

    match &spec.topology {
        Some(TopologySpec::Line { n, latency_ms }) => {
            build_line(&mut net, *n, latency_ms.unwrap_or(DEFAULT_LATENCY_MS));
        }
        Some(TopologySpec::Ring { n, latency_ms }) => {
            build_ring(&mut net, *n, latency_ms.unwrap_or(DEFAULT_LATENCY_MS));
        }
        Some(TopologySpec::Dumbbell {
            host_link_latency_ms,
            bottleneck_latency_ms,
        }) => {
            let defaults = DumbbellOpts::default();
            let opts = DumbbellOpts {
                host_link_latency: host_link_latency_ms.unwrap_or(defaults.host_link_latency),
                bottleneck_latency: bottleneck_latency_ms.unwrap_or(defaults.bottleneck_latency),
            };
            build_dumbbell(&mut net, &opts);
        }
        None => {}
    }

    for _ in 0..spec.nodes {
        net.add_node();
    }

    for (index, link) in spec.links.iter().enumerate() {
        let res = if link.directed {
            net.try_add_directed_edge(link.from, link.to, link.weight)
        } else {
            net.try_add_edge(link.from, link.to, link.weight)
        };
        res.map_err(|source| ScenarioError::Link { index, source })?;
    }

    info!(
        nodes = net.node_count(),
        links = spec.links.len(),
        "🌐 场景网络构建完成"
    );
    Ok(net)
}

/// 在给定网络上依次执行操作，失败的步骤记录原因后继续
pub fn run_steps(net: &mut Network, steps: &[StepSpec]) -> Vec<StepOutcome> {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let outcome = run_step(net, index, step);
            if outcome.negative_cycle {
                warn!(index, error = ?outcome.error, "步骤遇到负权环");
            } else {
                debug!(index, ok = outcome.ok, error = ?outcome.error, "步骤完成");
            }
            outcome
        })
        .collect()
}

fn run_step(net: &mut Network, index: usize, step: &StepSpec) -> StepOutcome {
    let outcome = StepOutcome::new(index, step);
    let res = match *step {
        StepSpec::AddNode => {
            let id = net.add_node();
            return StepOutcome {
                node: Some(id),
                ..outcome
            };
        }
        StepSpec::RemoveNode { id } => net.try_remove_node(id),
        StepSpec::AddEdge {
            from,
            to,
            weight,
            directed,
        } => {
            if directed {
                net.try_add_directed_edge(from, to, weight)
            } else {
                net.try_add_edge(from, to, weight)
            }
        }
        StepSpec::RemoveEdge { from, to, weight } => net.try_remove_edge(from, to, weight),
        StepSpec::Transfer { from, to, packets } => net.try_transfer_data(from, to, packets),
        StepSpec::ShortestPath {
            from,
            to,
            algorithm,
        } => {
            let algorithm = algorithm.unwrap_or(Algorithm::Dijkstra);
            match net.try_shortest_path(from, to, algorithm) {
                Ok(path) => {
                    return StepOutcome {
                        path: Some(path),
                        ..outcome
                    };
                }
                Err(err) => Err(err),
            }
        }
        StepSpec::Clear => {
            net.clear_network();
            Ok(())
        }
    };

    match res {
        Ok(()) => outcome,
        Err(err) => outcome.fail(err),
    }
}

/// 构建网络并回放全部步骤
pub fn run_scenario(spec: &ScenarioSpec) -> Result<(Network, ScenarioReport), ScenarioError> {
    let mut net = build_network(spec)?;
    let outcomes = run_steps(&mut net, &spec.steps);
    let failed = outcomes.iter().filter(|o| !o.ok).count();

    let report = ScenarioReport {
        name: spec.meta.as_ref().and_then(|m| m.name.clone()),
        outcomes,
        stats: net.stats(),
    };
    info!(
        steps = report.outcomes.len(),
        failed,
        nodes = report.stats.nodes,
        links = report.stats.links,
        "✅ 场景回放完成"
    );
    Ok((net, report))
}
