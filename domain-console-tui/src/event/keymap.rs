//! 快捷键配置
//!
//! 定义列表页的快捷键映射（未来可支持用户自定义）

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符按键与 BackTab 忽略 Shift（终端对 `?` 之类的字符会附带 Shift 修饰）。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = match key.code {
            KeyCode::Char(_) | KeyCode::BackTab => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 导航
    pub const NAV_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NAV_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const NAV_UP_VIM: KeyBinding = KeyBinding::key(KeyCode::Char('k'));
    pub const NAV_DOWN_VIM: KeyBinding = KeyBinding::key(KeyCode::Char('j'));
    pub const PAGE_PREV: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const PAGE_NEXT: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 操作
    pub const ACTION_ADD: KeyBinding = KeyBinding::key(KeyCode::Char('a'));
    pub const ACTION_EDIT: KeyBinding = KeyBinding::key(KeyCode::Char('e'));
    pub const ACTION_VERIFY: KeyBinding = KeyBinding::key(KeyCode::Char('v'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::key(KeyCode::Char('d'));
    pub const ACTION_COPY: KeyBinding = KeyBinding::key(KeyCode::Char('c'));
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const SORT: KeyBinding = KeyBinding::key(KeyCode::Char('s'));

    // 表单
    pub const NEXT_FIELD: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const PREV_FIELD: KeyBinding = KeyBinding::key(KeyCode::BackTab);
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);
}
