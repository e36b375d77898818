//! UI 组件

pub mod drawer;
pub mod help;
pub mod statusbar;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// 在 `area` 中居中的矩形
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
