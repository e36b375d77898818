//! Domain Console TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! Domain Console TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     LocalConfigService::load()  // 读取配置文件与环境变量
//!     init_logging()              // 安装文件日志（stdout 归 TUI 所有）
//!     set_language / set_theme    // 应用界面语言与主题
//!     tokio Runtime + Backend     // 后台请求的运行时
//!     init_terminal()             // 初始化终端
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use domain_console_api::RestDomainApi;
use domain_console_core::DomainService;

use backend::{Backend, ConfigService, LocalConfigService};
use i18n::Language;
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

fn main() -> Result<()> {
    // 1. 加载配置
    let config = LocalConfigService::new().load()?;

    // 2. 初始化日志（guard 必须存活到退出）
    let _log_guard = init_logging(&config)?;

    let language = Language::from_code(&config.language).unwrap_or_else(|| {
        tracing::warn!(language = %config.language, "Unsupported language, falling back to en-US");
        Language::default()
    });
    i18n::set_language(language);
    view::theme::set_theme(config.theme);

    tracing::info!(
        api_base_url = %config.api_base_url,
        page_size = config.page_size,
        language = language.code(),
        "Starting Domain Console"
    );

    // 3. 后台运行时与服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let api = RestDomainApi::new(config.api_base_url.clone())
        .with_context(|| format!("Invalid api_base_url {:?}", config.api_base_url))?;
    let service = Arc::new(DomainService::new(Arc::new(api)));
    let (backend, backend_rx) = Backend::new(runtime.handle().clone(), service);

    // 4. 创建应用实例，排队首次加载
    let mut app = model::App::new(config.api_base_url.clone(), config.page_size);
    app.request_list();

    // 5. 初始化终端并运行主循环
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &backend, backend_rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!("Domain Console exited with error: {e:#}");
    } else {
        tracing::info!("Domain Console exited");
    }
    result
}
