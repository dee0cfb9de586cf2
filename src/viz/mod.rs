//! 可视化快照（交给外部渲染器）
//!
//! 渲染本身不在本 crate 内；这里只导出渲染器需要的结构化数据：
//! - **节点**：下标、收发计数、是否位于高亮路径上
//! - **链路**：按无序节点对分组，每条平行边一项，并标记是否被路径使用

mod types;

pub use types::{VizLinkInfo, VizNodeInfo, VizSnapshot};
