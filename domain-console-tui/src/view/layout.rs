//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{Styles, colors};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    // 三层布局：标题栏 + 主内容区 + 状态栏
    let [title_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(1), // 标题栏
        Constraint::Min(1),    // 主内容区
        Constraint::Length(1), // 状态栏
    ])
    .areas(frame.area());

    render_title_bar(app, frame, title_area);
    render_page_content(app, frame, content_area);
    components::statusbar::render(app, frame, status_area);

    // 浮层（在最上层）
    if let Some(drawer) = &app.drawer {
        components::drawer::render(drawer, frame, content_area);
    }
    if app.help_open {
        components::help::render(frame, frame.area());
    }
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Line::from(vec![
        Span::styled(
            format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION")),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(app.api_base_url.as_str()),
    ]);
    let bar = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(bar, area);
}

/// 渲染域名列表
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    // 面板或弹窗打开时列表失去焦点
    let focused = app.drawer.is_none() && !app.help_open;
    let border_style = if focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let c = colors();
    let block = Block::default()
        .style(Style::default().bg(c.bg).fg(c.fg))
        .title(format!(" {} ", t().table.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::domains::render(app, frame, inner_area);
}
