//! 瓦片详情弹窗

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use tilegrid_core::NavigationSession;
use tilegrid_core::types::TileDetailView;

use super::modal::centered_rect;
use crate::i18n::t;
use crate::view::theme::Styles;

const WIDTH: u16 = 64;
const HEIGHT: u16 = 16;

/// 渲染详情弹窗（如果打开）
pub fn render(session: &NavigationSession, frame: &mut Frame) {
    let Some(details) = session.modal().content() else {
        return;
    };

    let area = centered_rect(WIDTH, HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", details.title))
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = Rect::new(
        inner.x + 1,
        inner.y + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    );
    let paragraph = Paragraph::new(lines(details)).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, content);
}

fn lines(details: &TileDetailView) -> Vec<Line<'_>> {
    let texts = t();
    let image = details
        .image_url
        .as_deref()
        .unwrap_or(texts.detail.no_image);

    let mut lines = vec![
        Line::styled(details.description.as_str(), Style::default().fg(Color::White)),
        Line::from(""),
    ];
    for (label, value) in [
        (texts.detail.release_date, details.release_date.as_str()),
        (texts.detail.rating, details.rating.as_str()),
        (texts.detail.content_type, details.content_type.as_str()),
        (texts.detail.reference_id, details.ref_id.as_str()),
        (texts.detail.image, image),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(Color::Yellow)),
            Span::styled(value, Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{}/{}", texts.hints.keys.esc, texts.hints.keys.backspace),
            Styles::hint_key(),
        ),
        Span::raw(" "),
        Span::styled(texts.hints.close, Styles::hint_desc()),
    ]));
    lines
}
