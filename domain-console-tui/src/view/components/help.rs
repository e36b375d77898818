//! 帮助弹窗

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;
use crate::i18n::t;
use crate::view::theme::Styles;

/// 渲染快捷键帮助
pub fn render(frame: &mut Frame, area: Rect) {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    let list_keys = [
        (keys.arrows_ud.to_string(), actions.select),
        (keys.arrows_lr.to_string(), actions.page),
        ("a".to_string(), actions.add),
        (format!("e / {}", keys.enter), actions.edit),
        ("v".to_string(), actions.verify),
        ("d".to_string(), actions.delete),
        ("c".to_string(), actions.copy),
        ("/".to_string(), actions.search),
        ("s".to_string(), actions.sort),
        ("r".to_string(), actions.refresh),
        ("?".to_string(), actions.help),
        ("q".to_string(), actions.quit),
    ];
    let drawer_keys = [
        (format!("{} / Shift+{}", keys.tab, keys.tab), actions.next_field),
        (keys.space.to_string(), actions.toggle),
        (keys.enter.to_string(), actions.submit),
        (keys.esc.to_string(), actions.cancel),
    ];

    let mut lines = vec![Line::styled(texts.help.list_section, Styles::title())];
    lines.extend(list_keys.iter().map(|(key, desc)| key_line(key, desc)));
    lines.push(Line::from(""));
    lines.push(Line::styled(texts.help.drawer_section, Styles::title()));
    lines.extend(drawer_keys.iter().map(|(key, desc)| key_line(key, desc)));
    lines.push(Line::from(""));
    lines.push(Line::styled(texts.help.close_hint, Styles::muted()));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = centered_rect(48, height, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn key_line<'a>(key: &str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {key:<14}"), Styles::hint_key()),
        Span::styled(desc, Styles::hint_desc()),
    ])
}
