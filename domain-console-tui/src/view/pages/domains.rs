//! 域名列表页面视图

use chrono::DateTime;
use domain_console_api::{Domain, VerificationStatus};
use domain_console_core::{RowAction, RowView, SortOrder};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState as WidgetState},
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 渲染域名列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let [toolbar_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_toolbar(app, frame, toolbar_area);

    let rows = app.table.rows();
    if rows.is_empty() {
        render_empty(app, frame, table_area);
    } else {
        render_table(app, &rows, frame, table_area);
    }

    render_footer(app, frame, footer_area);
}

/// 搜索框、排序方向、添加按钮
fn render_toolbar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let search = app.table.search();
    let search_span = if search.is_empty() && !app.search_active {
        Span::styled(texts.table.search_placeholder, Styles::muted())
    } else if app.search_active {
        Span::styled(format!("{search}▏"), Style::default().fg(c.fg))
    } else {
        Span::styled(search.to_string(), Style::default().fg(c.fg))
    };
    let search_label_style = if app.search_active {
        Styles::hint_key()
    } else {
        Styles::muted()
    };

    let sort_label = match app.table.sort_order() {
        SortOrder::Ascending => texts.table.sort_asc,
        SortOrder::Descending => texts.table.sort_desc,
    };

    let line = Line::from(vec![
        Span::styled(format!(" / {}: ", texts.table.search), search_label_style),
        search_span,
        Span::raw("   "),
        Span::styled("s ", Styles::hint_key()),
        Span::raw(sort_label),
        Span::raw("   "),
        Span::styled("a ", Styles::hint_key()),
        Span::styled(
            format!("+ {}", texts.table.add_domain),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let message = if app.table.is_loading() {
        texts.common.loading
    } else if app.table.domains().is_empty() {
        texts.table.no_domains
    } else {
        texts.table.no_matches
    };

    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染域名表格
fn render_table(app: &App, rows: &[RowView<'_>], frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let header = Row::new(vec![
        Cell::from(texts.table.col_domain),
        Cell::from(texts.table.col_active),
        Cell::from(texts.table.col_status),
        Cell::from(texts.table.col_created),
    ])
    .style(Styles::title())
    .bottom_margin(1);

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            let domain_cell = if row.deleting {
                Line::from(vec![
                    Span::raw(row.record.domain.as_str()),
                    Span::styled(format!("  {}", texts.table.deleting), Styles::muted()),
                ])
            } else {
                Line::from(row.record.domain.as_str())
            };

            let active_label = if row.record.is_active {
                texts.table.active
            } else {
                texts.table.not_active
            };
            let active_cell = Line::from(vec![
                Span::styled("● ", Style::default().fg(c.tone(row.active_tone))),
                Span::raw(active_label),
            ]);

            let status_cell = Line::from(Span::styled(
                format!(" {} ", status_label(row.record.status)),
                Styles::tag(row.status_tone),
            ));

            let mut table_row = Row::new(vec![
                Cell::from(domain_cell),
                Cell::from(active_cell),
                Cell::from(status_cell),
                Cell::from(format_created(row.record)),
            ]);
            if row.deleting {
                table_row = table_row.style(Styles::muted());
            }
            table_row
        })
        .collect();

    let widths = [
        Constraint::Percentage(45),
        Constraint::Percentage(18),
        Constraint::Percentage(17),
        Constraint::Percentage(20),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = WidgetState::default();
    state.select(Some(app.table.selected_index()));

    frame.render_stateful_widget(table, area, &mut state);
}

/// 分页信息与选中行可用的操作
fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let total = app.table.filtered().len();

    let mut spans = vec![Span::styled(
        format!(
            " {} {}/{} · {total} {}",
            texts.table.page,
            app.table.page(),
            app.table.page_count(),
            texts.status_bar.records
        ),
        Styles::muted(),
    )];

    if let Some(record) = app.table.selected() {
        spans.push(Span::raw("   "));
        for (action, enabled) in app.table.row_actions(record) {
            let (key, label) = action_hint(action);
            let (key_style, label_style) = if enabled {
                (Styles::hint_key(), Style::default())
            } else {
                (Styles::muted(), Styles::muted().add_modifier(Modifier::CROSSED_OUT))
            };
            spans.push(Span::styled(format!("{key} "), key_style));
            spans.push(Span::styled(label, label_style));
            spans.push(Span::raw("  "));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn action_hint(action: RowAction) -> (&'static str, &'static str) {
    let actions = &t().hints.actions;
    match action {
        RowAction::Edit => ("e", actions.edit),
        RowAction::Verify => ("v", actions.verify),
        RowAction::Delete => ("d", actions.delete),
        RowAction::CopyDomain => ("c", actions.copy),
    }
}

fn status_label(status: VerificationStatus) -> &'static str {
    let table = &t().table;
    match status {
        VerificationStatus::Pending => table.status_pending,
        VerificationStatus::Verified => table.status_verified,
        VerificationStatus::Rejected => table.status_rejected,
    }
}

/// 创建时间（本地时区）；缺失时显示 `-`
fn format_created(record: &Domain) -> String {
    if record.created_date <= 0 {
        return "-".to_string();
    }
    DateTime::from_timestamp(record.created_date, 0).map_or_else(
        || "-".to_string(),
        |utc| {
            utc.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(created_date: i64) -> Domain {
        Domain {
            id: "1".to_string(),
            domain: "https://google.com".to_string(),
            is_active: true,
            status: VerificationStatus::Pending,
            created_date,
        }
    }

    #[test]
    fn missing_timestamp_renders_dash() {
        assert_eq!(format_created(&record(0)), "-");
    }

    #[test]
    fn timestamp_renders_as_date() {
        let text = format_created(&record(1_738_000_000));
        // 2025-01-27 in every time zone within ±14 h of UTC.
        assert!(text.starts_with("2025-01-2"), "{text}");
        assert_eq!(text.len(), "2025-01-27 17:46".len());
    }
}
