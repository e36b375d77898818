//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前状态生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 通知优先于状态消息
    if let Some(toast) = app.toasts.latest() {
        let c = colors();
        let color = if toast.is_error() { c.error } else { c.success };
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            toast.text.as_str(),
            Style::default().fg(Color::Black).bg(color),
        ));
        if app.toasts.len() > 1 {
            spans.push(Span::raw(format!(" (+{})", app.toasts.len() - 1)));
        }
    } else if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;

    if app.help_open {
        return vec![(keys.esc, actions.cancel)];
    }

    if app.drawer.is_some() {
        return vec![
            (keys.tab, actions.next_field),
            (keys.space, actions.toggle),
            (keys.enter, actions.submit),
            (keys.esc, actions.cancel),
        ];
    }

    if app.search_active {
        return vec![(keys.enter, actions.done), (keys.esc, actions.clear)];
    }

    vec![
        (keys.arrows_ud, actions.select),
        (keys.arrows_lr, actions.page),
        ("a", actions.add),
        ("e", actions.edit),
        ("/", actions.search),
        ("r", actions.refresh),
        ("?", actions.help),
        ("q", actions.quit),
    ]
}
