//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!         · handle_event    将原始事件翻译为 AppMessage
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 按键分发的优先级
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     1. Ctrl+C           → 任何时候都退出
//!     2. 帮助弹窗打开      → 只响应 Esc / ? 关闭
//!     3. 侧边面板打开      → handle_drawer_keys()
//!             Esc         → DrawerMessage::Close
//!             Tab         → DrawerMessage::NextField
//!             Shift+Tab   → DrawerMessage::PreviousField
//!             Enter       → DrawerMessage::Submit
//!             空格         → 焦点在开关上时 ToggleActive，否则作为字符输入
//!             字符输入     → DrawerMessage::Input(c)
//!             Backspace   → DrawerMessage::Backspace
//!     4. 正在输入搜索      → handle_search_keys()
//!     5. 其余             → handle_list_keys()（见 keymap.rs）
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
