//! 网络模型模块
//!
//! 此模块包含图模型与路径引擎：节点、半链路、拓扑变更以及两种最短路算法。

// 子模块声明
mod error;
mod id;
mod link;
mod network;
mod node;
mod path;
mod routing;
mod stats;

// 重新导出公共接口
pub use error::{NetError, Result};
pub use id::NodeId;
pub use link::{Edge, PathEdge};
pub use network::Network;
pub use node::Node;
pub use path::{Algorithm, PathResult};
pub use stats::Stats;
