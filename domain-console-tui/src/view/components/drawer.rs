//! 侧边面板（添加 / 编辑表单）

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::{t, validation_text};
use crate::model::{DrawerField, DrawerState};
use crate::view::theme::{Styles, colors};

/// 面板占内容区的宽度百分比
const DRAWER_WIDTH_PERCENT: u16 = 45;

/// 面板贴靠内容区左边缘
fn drawer_area(area: Rect) -> Rect {
    let [drawer_area, _] = Layout::horizontal([
        Constraint::Percentage(DRAWER_WIDTH_PERCENT),
        Constraint::Percentage(100 - DRAWER_WIDTH_PERCENT),
    ])
    .areas(area);
    drawer_area
}

/// 在 `area` 的左侧渲染面板
pub fn render(drawer: &DrawerState, frame: &mut Frame, area: Rect) {
    let texts = &t().drawer;
    let c = colors();

    let drawer_area = drawer_area(area);

    let title = if drawer.is_edit() {
        texts.edit_title
    } else {
        texts.add_title
    };
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused())
        .style(Style::default().bg(c.bg).fg(c.fg));

    let inner = block.inner(drawer_area);
    frame.render_widget(Clear, drawer_area);
    frame.render_widget(block, drawer_area);

    let [
        domain_label_area,
        input_area,
        error_area,
        active_label_area,
        switch_area,
        _,
        buttons_area,
    ] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    // 域名
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("* ", Style::default().fg(c.error)),
            Span::raw(texts.domain_label),
        ])),
        domain_label_area,
    );
    render_domain_input(drawer, frame, input_area);

    if let Some(error) = drawer.form.error() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                validation_text(error),
                Style::default().fg(c.error),
            )),
            error_area,
        );
    }

    // 启用状态
    frame.render_widget(Paragraph::new(texts.active_label), active_label_area);
    render_active_switch(drawer, frame, switch_area);

    render_buttons(drawer, frame, buttons_area);
}

fn render_domain_input(drawer: &DrawerState, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = drawer.focus == DrawerField::Domain;
    let border_style = if drawer.form.error().is_some() {
        Style::default().fg(c.error)
    } else if focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let value = drawer.form.domain();
    let content = if value.is_empty() {
        Span::styled(t().drawer.domain_placeholder, Styles::muted())
    } else {
        Span::raw(value)
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);

    if focused && !drawer.is_submitting() {
        let offset = u16::try_from(value.width()).unwrap_or(u16::MAX);
        let max_x = area.right().saturating_sub(2);
        let x = area.x.saturating_add(1).saturating_add(offset).min(max_x);
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_active_switch(drawer: &DrawerState, frame: &mut Frame, area: Rect) {
    let c = colors();
    let common = &t().common;
    let focused = drawer.focus == DrawerField::Active;

    let (mark, label, color) = if drawer.form.is_active() {
        ("[●]", common.yes, c.success)
    } else {
        ("[ ]", common.no, c.muted)
    };
    let mut style = Style::default().fg(color);
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let line = Line::from(vec![
        Span::styled(format!("{mark} {label}"), style),
        Span::styled(
            format!("  ({} {})", t().hints.keys.space, t().hints.actions.toggle),
            Styles::muted(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_buttons(drawer: &DrawerState, frame: &mut Frame, area: Rect) {
    let texts = &t().drawer;
    let keys = &t().hints.keys;

    let line = if drawer.is_submitting() {
        Line::styled(texts.submitting, Styles::muted())
    } else {
        let submit = if drawer.is_edit() {
            texts.update_button
        } else {
            texts.add_button
        };
        Line::from(vec![
            Span::styled(format!("[ {} {submit} ]", keys.enter), Styles::selected()),
            Span::raw("  "),
            Span::styled(
                format!("[ {} {} ]", keys.esc, texts.cancel_button),
                Styles::muted(),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawer_docks_to_left_edge() {
        let content = Rect::new(4, 2, 100, 30);
        let area = drawer_area(content);

        assert_eq!(area.x, content.x);
        assert_eq!(area.y, content.y);
        assert_eq!(area.height, content.height);
        assert_eq!(area.width, 45);
    }
}
