//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层负责连接 domain-console-core，在 tokio 运行时上执行请求，
//! 并把结果送回主循环。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件加载
//!         mod dispatcher;         // Command → 异步任务 → BackendMessage
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：~/.config/domain-console/config.toml（由 dirs 决定）
//!
//!         api_base_url = "https://example.mockapi.io/domain"
//!         page_size = 10
//!         language = "zh-CN"
//!         theme = "light"
//!         log_level = "debug"
//!         log_dir = "/tmp/domain-console"
//!
//!     所有键都可省略；文件不存在时使用默认值。
//!     环境变量 DOMAIN_CONSOLE_API_URL 优先于文件中的 api_base_url。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、任务分发（Backend）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Update 层推入 Command
//!         ↓
//!     主循环调用 Backend::dispatch(command)
//!         ↓
//!     在 tokio 运行时上 spawn 一个任务，调用 DomainService
//!         ↓
//!     DomainService 调用 RestDomainApi（HTTP），按缓存标签重新获取失效的查询
//!         ↓
//!     任务把结果包装成 BackendMessage，经 mpsc 通道送回
//!         ↓
//!     主循环 try_recv() 取出，交给 update()
//!
//!     多个请求可以同时进行（例如一行在验证、另一行在删除）。
//!     请求不可取消：面板关闭后才到达的结果只产生通知，不再影响面板。
//!

mod config_service;
mod dispatcher;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use dispatcher::Backend;
