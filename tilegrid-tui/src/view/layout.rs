//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::model::{App, GridState};

use super::components;
use super::theme::{Styles, colors};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 网格 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 网格
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_grid(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗（在最上层）
    if let Some(session) = app.grid.session() {
        components::detail::render(session, frame);
    }
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let text = format!(
        " {} v{} │ {}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION"),
        app.catalog.label()
    );
    let title = Paragraph::new(text).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染网格区域
fn render_grid(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let border_style = if app.modal_open() {
        Style::default().fg(c.border)
    } else {
        Style::default().fg(c.border_focused)
    };

    let block = Block::default()
        .title(format!(" {} ", t().grid.title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(c.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.grid {
        GridState::Loading => render_notice(frame, inner, t().grid.loading_catalog, Styles::muted()),
        GridState::Failed(detail) => {
            let lines = vec![
                Line::styled(t().grid.catalog_failed, Styles::error()),
                Line::from(""),
                Line::styled(detail.as_str(), Styles::muted()),
            ];
            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, centered_band(inner, 3));
        }
        GridState::Ready(session) if session.grid().row_count() == 0 => {
            render_notice(frame, inner, t().grid.no_rows, Styles::muted());
        }
        GridState::Ready(session) => components::grid::render(app, session, frame, inner),
    }
}

fn render_notice(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let paragraph = Paragraph::new(Line::styled(text, style)).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_band(area, 1));
}

/// 垂直居中的一条区域
fn centered_band(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect::new(
        area.x,
        area.y + (area.height - height) / 2,
        area.width,
        height,
    )
}
