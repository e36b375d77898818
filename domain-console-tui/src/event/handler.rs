//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, DrawerMessage, TableMessage};
use crate::model::{App, DrawerField, DrawerState};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变等，下一轮自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 帮助弹窗打开时，只允许关闭
    if app.help_open {
        if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::HELP.matches(&key) {
            return AppMessage::CloseHelp;
        }
        return AppMessage::Noop;
    }

    // 如果侧边面板打开，优先处理面板输入
    if let Some(drawer) = &app.drawer {
        return handle_drawer_keys(key, drawer);
    }

    if app.search_active {
        return handle_search_keys(key);
    }

    handle_list_keys(key, app)
}

/// 处理侧边面板的按键
fn handle_drawer_keys(key: KeyEvent, drawer: &DrawerState) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Drawer(DrawerMessage::Close);
    }
    if DefaultKeymap::NEXT_FIELD.matches(&key) {
        return AppMessage::Drawer(DrawerMessage::NextField);
    }
    if DefaultKeymap::PREV_FIELD.matches(&key) {
        return AppMessage::Drawer(DrawerMessage::PreviousField);
    }
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Drawer(DrawerMessage::Submit);
    }

    match (drawer.focus, key.code) {
        (DrawerField::Active, KeyCode::Char(' ')) => {
            AppMessage::Drawer(DrawerMessage::ToggleActive)
        }
        (DrawerField::Domain, KeyCode::Char(c)) if is_text_input(&key) => {
            AppMessage::Drawer(DrawerMessage::Input(c))
        }
        (DrawerField::Domain, KeyCode::Backspace) => {
            AppMessage::Drawer(DrawerMessage::Backspace)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理搜索输入的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Table(TableMessage::ClearSearch),
        KeyCode::Enter => AppMessage::Table(TableMessage::EndSearch),
        KeyCode::Backspace => AppMessage::Table(TableMessage::SearchBackspace),
        KeyCode::Up => AppMessage::Table(TableMessage::SelectPrevious),
        KeyCode::Down => AppMessage::Table(TableMessage::SelectNext),
        KeyCode::Char(c) if is_text_input(&key) => {
            AppMessage::Table(TableMessage::SearchInput(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理列表页的按键
fn handle_list_keys(key: KeyEvent, app: &App) -> AppMessage {
    let table = AppMessage::Table;

    if DefaultKeymap::QUIT.matches(&key) {
        AppMessage::Quit
    } else if DefaultKeymap::HELP.matches(&key) {
        AppMessage::ShowHelp
    } else if DefaultKeymap::REFRESH.matches(&key) {
        AppMessage::Refresh
    } else if DefaultKeymap::NAV_UP.matches(&key) || DefaultKeymap::NAV_UP_VIM.matches(&key) {
        table(TableMessage::SelectPrevious)
    } else if DefaultKeymap::NAV_DOWN.matches(&key) || DefaultKeymap::NAV_DOWN_VIM.matches(&key) {
        table(TableMessage::SelectNext)
    } else if DefaultKeymap::PAGE_PREV.matches(&key) {
        table(TableMessage::PreviousPage)
    } else if DefaultKeymap::PAGE_NEXT.matches(&key) {
        table(TableMessage::NextPage)
    } else if DefaultKeymap::ACTION_ADD.matches(&key) {
        table(TableMessage::Add)
    } else if DefaultKeymap::ACTION_EDIT.matches(&key) || DefaultKeymap::NAV_CONFIRM.matches(&key) {
        table(TableMessage::Edit)
    } else if DefaultKeymap::ACTION_VERIFY.matches(&key) {
        table(TableMessage::Verify)
    } else if DefaultKeymap::ACTION_DELETE.matches(&key) {
        table(TableMessage::Delete)
    } else if DefaultKeymap::ACTION_COPY.matches(&key) {
        table(TableMessage::Copy)
    } else if DefaultKeymap::SEARCH.matches(&key) {
        table(TableMessage::StartSearch)
    } else if DefaultKeymap::SORT.matches(&key) {
        table(TableMessage::ToggleSort)
    } else if DefaultKeymap::BACK.matches(&key) && !app.table.search().is_empty() {
        table(TableMessage::ClearSearch)
    } else {
        AppMessage::Noop
    }
}

/// 不带 Ctrl / Alt 的字符按键
fn is_text_input(key: &KeyEvent) -> bool {
    !key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
