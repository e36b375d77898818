//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!         pub mod clipboard;  // OSC 52 剪贴板
//!         mod logging;        // 文件日志
//!
//!
//!     终端：
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显，捕获 Ctrl+C、箭头键等特殊键
//!         · Alternate Screen（备用屏幕）
//!             - 退出后自动恢复主屏幕内容，类似 vim、htop
//!
//!         注意：无论程序是正常退出、返回错误还是 panic，都必须恢复终端！
//!               main.rs 在 app::run 之后立即调用 restore_terminal()，
//!               panic 时由 install_panic_hook() 安装的钩子负责恢复。
//!
//!
//!     剪贴板：
//!         终端程序无法直接访问系统剪贴板，这里向终端写入 OSC 52 转义序列，
//!         由终端模拟器（以及 tmux 等）代为写入剪贴板。
//!
//!
//!     日志：
//!         标准输出归 TUI 所有，日志写入按天滚动的文件。
//!         库代码通过 `log` 门面输出，由 tracing-subscriber 统一收集。
//!

pub mod clipboard;
mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{Term, init_terminal, install_panic_hook, restore_terminal};
