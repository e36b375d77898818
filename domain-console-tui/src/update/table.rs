//! 列表页消息处理

use domain_console_core::{PanelEvent, RowAction, TransitionError};

use crate::i18n::t;
use crate::message::{Command, TableMessage};
use crate::model::{App, DrawerState};

/// 处理列表页消息
pub fn update(app: &mut App, msg: TableMessage) {
    match msg {
        TableMessage::SelectNext => app.table.select_next(),
        TableMessage::SelectPrevious => app.table.select_prev(),
        TableMessage::NextPage => app.table.next_page(),
        TableMessage::PreviousPage => app.table.prev_page(),

        TableMessage::Add => open_panel(app, PanelEvent::OpenAdd, DrawerState::add()),

        TableMessage::Edit => {
            if let Some(record) = app.table.selected().cloned() {
                let drawer = DrawerState::edit(&record);
                open_panel(app, PanelEvent::OpenEdit(record), drawer);
            }
        }

        TableMessage::Verify => verify_selected(app),
        TableMessage::Delete => delete_selected(app),

        TableMessage::Copy => {
            if let Some(record) = app.table.selected() {
                app.commands.push(Command::Copy(record.domain.clone()));
            }
        }

        TableMessage::ToggleSort => app.table.toggle_sort(),

        TableMessage::StartSearch => app.search_active = true,
        TableMessage::EndSearch => app.search_active = false,
        TableMessage::ClearSearch => {
            app.table.set_search("");
            app.search_active = false;
        }
        TableMessage::SearchInput(c) => app.table.push_search_char(c),
        TableMessage::SearchBackspace => app.table.pop_search_char(),
    }
}

/// 经状态机打开面板，被拒绝时面板保持关闭
fn open_panel(app: &mut App, event: PanelEvent, drawer: DrawerState) {
    match app.table.apply(event) {
        Ok(_) => {
            app.drawer = Some(drawer);
            app.clear_status();
        }
        Err(e) => reject(app, &e),
    }
}

fn verify_selected(app: &mut App) {
    let Some(record) = app.table.selected() else {
        return;
    };
    if app.table.is_action_enabled(RowAction::Verify, record) {
        app.commands.push(Command::Verify(record.id.clone()));
    }
}

fn delete_selected(app: &mut App) {
    let Some(id) = app.table.selected().map(|record| record.id.clone()) else {
        return;
    };
    match app.table.apply(PanelEvent::DeleteStart(id.clone())) {
        Ok(_) => app.commands.push(Command::Delete(id)),
        Err(e) => reject(app, &e),
    }
}

fn reject(app: &mut App, err: &TransitionError) {
    if app.table.is_deleting() {
        app.set_status(t().status_bar.busy_deleting);
    } else {
        app.set_status(err.to_string());
    }
}
