//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│   ┌─────────┐          ┌────────────┐          ┌──────────┐                │
//！│   │  Event  │ ───────▶ │  Message   │ ───────▶ │  Update  │                │
//！│   │   层    │   翻译    │    层      │   消费    │    层    │                │
//！│   └─────────┘          │ AppMessage │          └────┬─────┘                │
//！│        ▲               │ TableMsg   │               │ 修改 + 推入 Command   │
//！│        │               │ DrawerMsg  │               ▼                      │
//！│   ┌─────────┐          │ BackendMsg │          ┌──────────┐                │
//！│   │  View   │ ◀─ 读取 ─└────────────┘───────── │  Model   │                │
//！│   └─────────┘                                  └────┬─────┘                │
//！│                                                     │ Command              │
//！│                                                     ▼                      │
//！│                 BackendMessage (mpsc)          ┌──────────┐                │
//！│           ◀─────────────────────────────────── │ Backend  │                │
//！│                                                └──────────┘                │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁，也是 Update —→ Backend 之间的桥梁。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage：主消息
//!         mod table;          // TableMessage：列表页操作
//!         mod drawer;         // DrawerMessage：侧边面板（表单）操作
//!         mod backend;        // BackendMessage：异步请求的结果
//!         mod command;        // Command：Update 层请求 Backend 执行的副作用
//!
//!
//!     消息的两个方向：
//!         · 输入方向：handle_event() 把按键翻译为 AppMessage，交给 update()
//!         · 回流方向：Backend 完成请求后，把 BackendMessage 经 mpsc 通道送回主循环，
//!           主循环将其包装为 AppMessage::Backend(..) 再交给 update()
//!
//!     Update 层本身不做任何 I/O：需要请求服务端时，只往 app.commands 推入一个 Command，
//!     由主循环统一取出并交给 Backend::dispatch()。
//!     这样 update() 可以在测试中被同步驱动。
//!

mod app;
mod backend;
mod command;
mod drawer;
mod table;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use command::Command;
pub use drawer::DrawerMessage;
pub use table::TableMessage;
