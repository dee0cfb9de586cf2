//! 统计信息
//!
//! 网络的聚合统计（供展示层直接使用）。

use serde::{Deserialize, Serialize};

/// 网络统计信息
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub nodes: usize,
    pub half_links: usize,
    /// 无向链路数（`half_links / 2`）
    pub links: usize,
    pub sent_packets: i64,
    pub received_packets: i64,
}
