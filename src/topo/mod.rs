//! 拓扑构建
//!
//! 常用小拓扑的构建函数，供场景文件与测试复用。

pub mod chain;
pub mod dumbbell;
