//! 场景模块
//!
//! 以 JSON 描述一个网络场景（初始拓扑 + 操作序列），并在 `Network` 上回放。

mod error;
mod runner;
mod spec;

pub use error::ScenarioError;
pub use runner::{ScenarioReport, StepOutcome, build_network, run_scenario, run_steps};
pub use spec::{LinkSpec, ScenarioMeta, ScenarioSpec, StepSpec, TopologySpec, SCHEMA_VERSION};
