//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     step(Tick)                                      // 过期通知
//!     while let Ok(msg) = backend_rx.try_recv() {     // 取出所有已完成的后台请求
//!         step(AppMessage::Backend(msg))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         step(handle_event(event , &app))
//!     }
//! }
//!
//! 其中 step(msg) 为：
//!     update::update(&mut app , msg)                  // 更新状态
//!     for cmd in app.take_commands() {                // update 推入的副作用
//!         backend.dispatch(cmd)                       // 交给 Backend 执行
//!     }

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Backend;
use crate::event;
use crate::message::{AppMessage, BackendMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 输入轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &Backend,
    mut backend_rx: UnboundedReceiver<BackendMessage>,
) -> Result<()> {
    // 启动前已排队的命令（首次加载列表）
    dispatch_commands(app, backend);

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 心跳
        step(app, backend, AppMessage::Tick);

        // 4. 处理已完成的后台请求
        while let Ok(msg) = backend_rx.try_recv() {
            step(app, backend, AppMessage::Backend(msg));
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            step(app, backend, msg);
        }
    }

    Ok(())
}

fn step(app: &mut App, backend: &Backend, msg: AppMessage) {
    update::update(app, msg);
    dispatch_commands(app, backend);
}

fn dispatch_commands(app: &mut App, backend: &Backend) {
    for command in app.take_commands() {
        backend.dispatch(command);
    }
}
