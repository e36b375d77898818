//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 列表 + 状态栏，以及浮层
//!         mod pages;          // 页面（域名列表）
//!         mod components;     // 组件（侧边面板、帮助弹窗、状态栏）
//!         pub mod theme;      // 主题和样式
//!
//!
//!     渲染顺序（后渲染的覆盖先渲染的）：
//!         标题栏 → 域名列表 → 状态栏 → 侧边面板 → 帮助弹窗
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
