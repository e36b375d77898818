//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 列表、排序、分页以及面板/删除状态机来自 domain-console-core 的 `TableState`，
//! 表单来自 `DomainForm`；这里只补充终端界面特有的状态。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod drawer;         // 侧边面板状态（表单 + 字段焦点）
//!         mod toast;          // 通知队列
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub table: TableState,              // 列表状态（含面板/删除状态机）
//!             pub drawer: Option<DrawerState>,    // 侧边面板，仅在状态机处于 PanelOpen 时存在
//!             pub search_active: bool,            // 是否正在输入搜索关键字
//!             pub help_open: bool,                // 帮助弹窗
//!             pub toasts: ToastQueue,             // 通知
//!             pub status_message: Option<String>, // 状态栏消息
//!             pub commands: Vec<Command>,         // 待执行的副作用
//!         }
//!
//!     `drawer` 与 `table.phase()` 必须保持一致：
//!         - Phase::PanelOpen(_)  ⇔  drawer.is_some()
//!     所有开关面板的操作都先经过状态机，状态机拒绝时不修改 drawer。
//!

mod app;
mod drawer;
mod toast;

pub use app::App;
pub use drawer::{DrawerField, DrawerState};
pub use toast::{Toast, ToastQueue};
