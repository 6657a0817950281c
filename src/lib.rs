//! folder-builder - 文件夹结构编辑与历史引擎
//!
//! 模块结构：
//! - models: 数据模型（TreeNode, TreeHistory, FolderPreset）
//! - kernel: 结构操作、命名、Store（state/action/effect）
//! - kernel::services: 端口与适配器（持久化、预设、导出、配置）

pub mod kernel;
pub mod models;
