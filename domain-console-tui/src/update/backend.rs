//! 异步请求结果处理

use domain_console_api::Domain;
use domain_console_core::{CoreError, CoreResult, Notification, NotificationLevel, PanelEvent, Phase};

use crate::i18n::t;
use crate::message::{BackendMessage, Command};
use crate::model::App;

/// 处理后台请求结果
pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        BackendMessage::ListLoaded(result) => list_loaded(app, result),
        BackendMessage::Created { ticket, result } => created(app, ticket, result),
        BackendMessage::Updated { ticket, result } => updated(app, ticket, result),
        BackendMessage::Verified { id, result } => verified(app, &id, result),
        BackendMessage::Deleted { id, result } => deleted(app, &id, result),
        BackendMessage::Copied(result) => copied(app, result),
    }
}

fn list_loaded(app: &mut App, result: CoreResult<Vec<Domain>>) {
    app.table.set_loading(false);
    app.clear_status();
    match result {
        Ok(domains) => app.table.set_domains(domains),
        Err(e) => {
            log::warn!("Failed to load domains: {e}");
            app.toasts
                .push(NotificationLevel::Error, t().toast.load_failed);
        }
    }
}

/// 面板是否仍在等待 `ticket` 对应的结果
///
/// 面板关闭后又打开的新面板持有不同的凭据，旧结果只产生通知。
fn awaited_by_drawer(app: &App, ticket: u64) -> bool {
    app.drawer
        .as_ref()
        .is_some_and(|drawer| drawer.awaits(ticket))
}

fn created(app: &mut App, ticket: u64, result: CoreResult<Domain>) {
    let awaiting = awaited_by_drawer(app, ticket);

    match result {
        Ok(domain) => {
            log::info!("Domain {} added", domain.id);
            app.toasts.notify(Notification::Added);
            if awaiting {
                if let Some(drawer) = app.drawer.as_mut() {
                    drawer.form.reset();
                }
                finish_submit(app, PanelEvent::SubmitOk);
            }
            // 列表由 Backend 的缓存订阅送回
        }
        Err(e) => {
            app.toasts
                .notify(failure_notice(&e, Notification::AddFailed));
            if awaiting {
                finish_submit(app, PanelEvent::SubmitFail);
            }
        }
    }
}

fn updated(app: &mut App, ticket: u64, result: CoreResult<Domain>) {
    let awaiting = awaited_by_drawer(app, ticket);

    match result {
        Ok(domain) => {
            log::info!("Domain {} updated", domain.id);
            app.toasts.notify(Notification::Updated);
            if awaiting {
                finish_submit(app, PanelEvent::SubmitOk);
            }
            // 编辑只使单条记录失效，列表需要显式刷新
            app.commands.push(Command::Refetch);
        }
        Err(e) => {
            app.toasts
                .notify(failure_notice(&e, Notification::UpdateFailed));
            if awaiting {
                finish_submit(app, PanelEvent::SubmitFail);
            }
        }
    }
}

fn verified(app: &mut App, id: &str, result: CoreResult<Domain>) {
    match result {
        Ok(_) => {
            log::info!("Domain {id} verified");
            app.toasts.notify(Notification::Verified);
            app.commands.push(Command::Refetch);
        }
        Err(e) => app
            .toasts
            .notify(failure_notice(&e, Notification::VerifyFailed)),
    }
}

fn deleted(app: &mut App, id: &str, result: CoreResult<String>) {
    if app.table.deleting_id() == Some(id) {
        if let Err(e) = app.table.apply(PanelEvent::DeleteDone) {
            log::warn!("{e}");
        }
        app.clear_status();
    }

    match result {
        Ok(_) => {
            log::info!("Domain {id} deleted");
            app.toasts.notify(Notification::Deleted);
        }
        Err(e) => app
            .toasts
            .notify(failure_notice(&e, Notification::DeleteFailed)),
    }
}

fn copied(app: &mut App, result: Result<(), String>) {
    match result {
        Ok(()) => app.toasts.notify(Notification::Copied),
        Err(e) => {
            log::warn!("Failed to copy domain: {e}");
            app.toasts
                .push(NotificationLevel::Error, t().toast.copy_failed);
        }
    }
}

/// 面板请求结束：成功关闭面板，失败保留输入
fn finish_submit(app: &mut App, event: PanelEvent) {
    match app.table.apply(event) {
        Ok(Phase::Idle) => app.drawer = None,
        Ok(_) => {
            if let Some(drawer) = app.drawer.as_mut() {
                drawer.pending = None;
            }
        }
        Err(e) => log::warn!("{e}"),
    }
}

fn failure_notice(err: &CoreError, fallback: Notification) -> Notification {
    match err {
        CoreError::MissingIdentifier => Notification::MissingIdentifier,
        _ => fallback,
    }
}
