//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod table;              // 列表页消息
//!         mod drawer;             // 侧边面板消息
//!         mod backend;            // 异步请求结果
//!
//!
//!     Update 层不直接发起请求。需要访问服务端时，向 `app.commands` 推入 Command，
//!     主循环在本轮 update 之后把它们交给 Backend。请求结果以
//!     `AppMessage::Backend(..)` 的形式回到这里。
//!
//!     一次完整的编辑流程：
//!         Table(Edit)          → 状态机 Idle → PanelOpen(Edit)，打开预填的面板
//!         Drawer(Submit)       → 表单校验通过，推入 Command::Update
//!         Backend(Updated)     → 凭据与面板一致时：状态机 SubmitOk → Idle，关闭面板，推入 Command::Refetch
//!         Backend(ListLoaded)  → 列表替换为服务端的最新快照
//!

mod backend;
mod drawer;
mod table;

use std::time::Instant;

use crate::i18n::t;
use crate::message::{AppMessage, Command};
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Refresh => {
            app.table.set_loading(true);
            app.set_status(t().status_bar.refreshing);
            app.commands.push(Command::Refetch);
        }

        AppMessage::ShowHelp => {
            app.help_open = true;
        }

        AppMessage::CloseHelp => {
            app.help_open = false;
        }

        AppMessage::Tick => {
            if !app.toasts.is_empty() {
                app.toasts.expire(Instant::now());
            }
        }

        AppMessage::Table(table_msg) => {
            table::update(app, table_msg);
        }

        AppMessage::Drawer(drawer_msg) => {
            drawer::update(app, drawer_msg);
        }

        AppMessage::Backend(backend_msg) => {
            backend::update(app, backend_msg);
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{BackendMessage, DrawerMessage, TableMessage};
    use crate::model::DrawerField;
    use domain_console_api::{ApiError, Domain, VerificationStatus};
    use domain_console_core::{
        CoreError, DomainFormValues, Notification, PanelMode, Phase, ValidationError,
    };

    fn domain(id: &str, name: &str, status: VerificationStatus) -> Domain {
        Domain {
            id: id.to_string(),
            domain: name.to_string(),
            is_active: true,
            status,
            created_date: 1_738_000_000,
        }
    }

    fn app_with(domains: Vec<Domain>) -> App {
        let mut app = App::new("http://localhost/domain", 10);
        app.table.set_domains(domains);
        app
    }

    fn send(app: &mut App, msg: AppMessage) {
        update(app, msg);
    }

    fn type_domain(app: &mut App, text: &str) {
        for c in text.chars() {
            send(app, AppMessage::Drawer(DrawerMessage::Input(c)));
        }
    }

    fn server_error() -> CoreError {
        CoreError::RequestFailed(ApiError::RequestFailed {
            status: 500,
            body: "boom".to_string(),
        })
    }

    fn latest_toast(app: &App) -> Option<&str> {
        app.toasts.latest().map(|toast| toast.text.as_str())
    }

    #[test]
    fn add_flow_validates_then_creates_and_closes() {
        let mut app = app_with(Vec::new());

        send(&mut app, AppMessage::Table(TableMessage::Add));
        assert_eq!(app.table.phase(), &Phase::PanelOpen(PanelMode::Add));
        assert!(app.drawer.as_ref().is_some_and(|d| d.form.is_active()));

        type_domain(&mut app, "not a url");
        send(&mut app, AppMessage::Drawer(DrawerMessage::Submit));
        assert!(app.commands.is_empty());
        assert_eq!(
            app.drawer.as_ref().and_then(|d| d.form.error()),
            Some(ValidationError::InvalidPattern)
        );

        for _ in 0.."not a url".len() {
            send(&mut app, AppMessage::Drawer(DrawerMessage::Backspace));
        }
        type_domain(&mut app, "https://example.com");
        send(&mut app, AppMessage::Drawer(DrawerMessage::Submit));
        assert_eq!(
            app.take_commands(),
            vec![Command::Create {
                ticket: 1,
                values: DomainFormValues {
                    domain: "https://example.com".to_string(),
                    is_active: true,
                },
            }]
        );

        // A second Enter while the request is in flight is ignored.
        send(&mut app, AppMessage::Drawer(DrawerMessage::Submit));
        assert!(app.commands.is_empty());

        let created = domain("101", "https://example.com", VerificationStatus::Pending);
        send(
            &mut app,
            AppMessage::Backend(BackendMessage::Created {
                ticket: 1,
                result: Ok(created),
            }),
        );
        assert!(app.drawer.is_none());
        assert_eq!(app.table.phase(), &Phase::Idle);
        assert_eq!(latest_toast(&app), Some(Notification::Added.message()));
        // The refreshed list arrives through the backend's cache subscription.
        assert!(app.take_commands().is_empty());
    }

    #[test]
    fn failed_create_keeps_panel_and_values() {
        let mut app = app_with(Vec::new());
        send(&mut app, AppMessage::Table(TableMessage::Add));
        type_domain(&mut app, "example.com");
        send(&mut app, AppMessage::Drawer(DrawerMessage::Submit));
        app.take_commands();

        send(
            &mut app,
            AppMessage::Backend(BackendMessage::Created {
                ticket: 1,
                result: Err(server_error()),
            }),
        );

        let drawer = app.drawer.as_ref();
        assert!(drawer.is_some_and(|d| !d.is_submitting()));
        assert_eq!(drawer.map(|d| d.form.domain()), Some("example.com"));
        assert_eq!(app.table.phase(), &Phase::PanelOpen(PanelMode::Add));
        assert_eq!(latest_toast(&app), Some(Notification::AddFailed.message()));
        assert!(app.commands.is_empty());
    }

    #[test]
    fn edit_flow_delegates_update_and_refetches() {
        let record = domain("1", "https://google.com", VerificationStatus::Pending);
        let mut app = app_with(vec![record.clone()]);

        send(&mut app, AppMessage::Table(TableMessage::Edit));
        assert_eq!(app.table.phase(), &Phase::PanelOpen(PanelMode::Edit(record)));
        assert!(app.drawer.as_ref().is_some_and(|d| d.is_edit()));
        assert_eq!(
            app.drawer.as_ref().map(|d| d.form.domain()),
            Some("https://google.com")
        );

        send(&mut app, AppMessage::Drawer(DrawerMessage::NextField));
        assert_eq!(
            app.drawer.as_ref().map(|d| d.focus),
            Some(DrawerField::Active)
        );
        send(&mut app, AppMessage::Drawer(DrawerMessage::ToggleActive));
        send(&mut app, AppMessage::Drawer(DrawerMessage::Submit));
        assert_eq!(
            app.take_commands(),
            vec![Command::Update {
                ticket: 1,
                id: Some("1".to_string()),
                values: DomainFormValues {
                    domain: "https://google.com".to_string(),
                    is_active: false,
                },
            }]
        );

        let mut saved = domain("1", "https://google.com", VerificationStatus::Pending);
        saved.is_active = false;
        send(
            &mut app,
            AppMessage::Backend(BackendMessage::Updated {
                ticket: 1,
                result: Ok(saved),
            }),
        );
        assert!(app.drawer.is_none());
        assert_eq!(app.table.phase(), &Phase::Idle);
        assert_eq!(latest_toast(&app), Some(Notification::Updated.message()));
        assert_eq!(app.take_commands(), vec![Command::Refetch]);
    }

    #[test]
    fn update_without_identifier_reports_missing_id() {
        let mut app = app_with(vec![domain("1", "google.com", VerificationStatus::Pending)]);
        send(&mut app, AppMessage::Table(TableMessage::Edit));
        send(&mut app, AppMessage::Drawer(DrawerMessage::Submit));
        app.take_commands();

        send(
            &mut app,
            AppMessage::Backend(BackendMessage::Updated {
                ticket: 1,
                result: Err(CoreError::MissingIdentifier),
            }),
        );
        assert_eq!(
            latest_toast(&app),
            Some(Notification::MissingIdentifier.message())
        );
        assert!(app.drawer.is_some());
    }

    #[test]
    fn delete_is_guarded_while_in_flight() {
        let mut app = app_with(vec![
            domain("1", "a.com", VerificationStatus::Pending),
            domain("2", "b.com", VerificationStatus::Pending),
        ]);

        send(&mut app, AppMessage::Table(TableMessage::Delete));
        assert_eq!(app.table.deleting_id(), Some("1"));
        assert_eq!(app.take_commands(), vec![Command::Delete("1".to_string())]);

        send(&mut app, AppMessage::Table(TableMessage::SelectNext));
        send(&mut app, AppMessage::Table(TableMessage::Delete));
        send(&mut app, AppMessage::Table(TableMessage::Add));
        send(&mut app, AppMessage::Table(TableMessage::Edit));
        assert!(app.commands.is_empty());
        assert!(app.drawer.is_none());
        assert_eq!(app.table.deleting_id(), Some("1"));
        assert_eq!(
            app.status_message.as_deref(),
            Some(t().status_bar.busy_deleting)
        );

        send(
            &mut app,
            AppMessage::Backend(BackendMessage::Deleted {
                id: "1".to_string(),
                result: Ok("deleted".to_string()),
            }),
        );
        assert_eq!(app.table.phase(), &Phase::Idle);
        assert_eq!(latest_toast(&app), Some(Notification::Deleted.message()));
        assert!(app.take_commands().is_empty());
    }

    #[test]
    fn failed_delete_clears_guard() {
        let mut app = app_with(vec![domain("1", "a.com", VerificationStatus::Pending)]);
        send(&mut app, AppMessage::Table(TableMessage::Delete));
        app.take_commands();

        send(
            &mut app,
            AppMessage::Backend(BackendMessage::Deleted {
                id: "1".to_string(),
                result: Err(server_error()),
            }),
        );
        assert_eq!(app.table.phase(), &Phase::Idle);
        assert_eq!(latest_toast(&app), Some(Notification::DeleteFailed.message()));
    }

    #[test]
    fn verify_skips_verified_records() {
        let mut app = app_with(vec![
            domain("1", "a.com", VerificationStatus::Verified),
            domain("2", "b.com", VerificationStatus::Pending),
        ]);

        send(&mut app, AppMessage::Table(TableMessage::Verify));
        assert!(app.commands.is_empty());

        send(&mut app, AppMessage::Table(TableMessage::SelectNext));
        send(&mut app, AppMessage::Table(TableMessage::Verify));
        assert_eq!(app.take_commands(), vec![Command::Verify("2".to_string())]);

        send(
            &mut app,
            AppMessage::Backend(BackendMessage::Verified {
                id: "2".to_string(),
                result: Ok(domain("2", "b.com", VerificationStatus::Verified)),
            }),
        );
        assert_eq!(latest_toast(&app), Some(Notification::Verified.message()));
        assert_eq!(app.take_commands(), vec![Command::Refetch]);
    }

    #[test]
    fn search_filters_case_insensitively() {
        let mut app = app_with(vec![
            domain("1", "https://google.com", VerificationStatus::Pending),
            domain("2", "https://rust-lang.org", VerificationStatus::Pending),
        ]);

        send(&mut app, AppMessage::Table(TableMessage::StartSearch));
        for c in "GOOGLE".chars() {
            send(&mut app, AppMessage::Table(TableMessage::SearchInput(c)));
        }
        assert!(app.search_active);
        assert_eq!(app.table.filtered().len(), 1);

        send(&mut app, AppMessage::Table(TableMessage::ClearSearch));
        assert!(!app.search_active);
        assert_eq!(app.table.filtered().len(), 2);
    }

    #[test]
    fn late_result_for_closed_panel_is_dropped() {
        let mut app = app_with(Vec::new());
        send(&mut app, AppMessage::Table(TableMessage::Add));
        type_domain(&mut app, "example.com");
        send(&mut app, AppMessage::Drawer(DrawerMessage::Submit));
        send(&mut app, AppMessage::Drawer(DrawerMessage::Close));
        send(&mut app, AppMessage::Drawer(DrawerMessage::Close));
        assert_eq!(app.table.phase(), &Phase::Idle);

        send(&mut app, AppMessage::Table(TableMessage::Edit));
        send(
            &mut app,
            AppMessage::Backend(BackendMessage::Created {
                ticket: 1,
                result: Err(server_error()),
            }),
        );
        assert_eq!(app.table.phase(), &Phase::Idle);
        assert!(app.drawer.is_none());
        assert_eq!(latest_toast(&app), Some(Notification::AddFailed.message()));
    }

    #[test]
    fn earlier_edit_result_does_not_settle_newer_panel() {
        let mut app = app_with(vec![
            domain("1", "https://one.com", VerificationStatus::Pending),
            domain("2", "https://two.com", VerificationStatus::Pending),
        ]);

        // Edit record 1, submit, then close before the response arrives.
        send(&mut app, AppMessage::Table(TableMessage::Edit));
        send(&mut app, AppMessage::Drawer(DrawerMessage::Submit));
        app.take_commands();
        send(&mut app, AppMessage::Drawer(DrawerMessage::Close));

        // Edit record 2 and submit it too.
        send(&mut app, AppMessage::Table(TableMessage::SelectNext));
        send(&mut app, AppMessage::Table(TableMessage::Edit));
        type_domain(&mut app, "/path");
        send(&mut app, AppMessage::Drawer(DrawerMessage::Submit));
        assert!(matches!(
            app.take_commands().as_slice(),
            [Command::Update { ticket: 2, .. }]
        ));

        // Record 1's success only toasts.
        send(
            &mut app,
            AppMessage::Backend(BackendMessage::Updated {
                ticket: 1,
                result: Ok(domain("1", "https://one.com", VerificationStatus::Pending)),
            }),
        );
        assert!(app.drawer.as_ref().is_some_and(|d| d.is_submitting()));
        assert!(matches!(app.table.phase(), Phase::PanelOpen(PanelMode::Edit(r)) if r.id == "2"));

        // Record 2's failure keeps its panel and the typed value.
        send(
            &mut app,
            AppMessage::Backend(BackendMessage::Updated {
                ticket: 2,
                result: Err(server_error()),
            }),
        );
        let drawer = app.drawer.as_ref();
        assert!(drawer.is_some_and(|d| !d.is_submitting()));
        assert_eq!(drawer.map(|d| d.form.domain()), Some("https://two.com/path"));
        assert_eq!(latest_toast(&app), Some(Notification::UpdateFailed.message()));
    }

    #[test]
    fn overlapping_adds_settle_their_own_panel() {
        let mut app = app_with(Vec::new());

        send(&mut app, AppMessage::Table(TableMessage::Add));
        type_domain(&mut app, "https://first.com");
        send(&mut app, AppMessage::Drawer(DrawerMessage::Submit));
        send(&mut app, AppMessage::Drawer(DrawerMessage::Close));

        send(&mut app, AppMessage::Table(TableMessage::Add));
        type_domain(&mut app, "https://second.com");
        send(&mut app, AppMessage::Drawer(DrawerMessage::Submit));
        app.take_commands();

        send(
            &mut app,
            AppMessage::Backend(BackendMessage::Created {
                ticket: 1,
                result: Ok(domain("101", "https://first.com", VerificationStatus::Pending)),
            }),
        );
        assert_eq!(app.table.phase(), &Phase::PanelOpen(PanelMode::Add));
        assert_eq!(
            app.drawer.as_ref().map(|d| d.form.domain()),
            Some("https://second.com")
        );

        send(
            &mut app,
            AppMessage::Backend(BackendMessage::Created {
                ticket: 2,
                result: Ok(domain("102", "https://second.com", VerificationStatus::Pending)),
            }),
        );
        assert!(app.drawer.is_none());
        assert_eq!(app.table.phase(), &Phase::Idle);
    }

    #[test]
    fn list_load_failure_is_reported() {
        let mut app = app_with(Vec::new());
        send(&mut app, AppMessage::Refresh);
        assert!(app.table.is_loading());
        assert_eq!(app.take_commands(), vec![Command::Refetch]);

        send(
            &mut app,
            AppMessage::Backend(BackendMessage::ListLoaded(Err(server_error()))),
        );
        assert!(!app.table.is_loading());
        assert!(app.toasts.latest().is_some_and(|toast| toast.is_error()));
        assert_eq!(latest_toast(&app), Some(t().toast.load_failed));
    }

    #[test]
    fn copy_reports_outcome() {
        let mut app = app_with(vec![domain("1", "a.com", VerificationStatus::Pending)]);
        send(&mut app, AppMessage::Table(TableMessage::Copy));
        assert_eq!(app.take_commands(), vec![Command::Copy("a.com".to_string())]);

        send(&mut app, AppMessage::Backend(BackendMessage::Copied(Ok(()))));
        assert_eq!(latest_toast(&app), Some(Notification::Copied.message()));
    }
}
