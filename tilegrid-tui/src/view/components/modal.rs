//! 应用层弹窗：帮助与错误

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::model::{App, Overlay};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref overlay) = app.overlay.active else {
        return;
    };

    match overlay {
        Overlay::Help => render_help(frame),
        Overlay::Error { title, message } => render_error(frame, title, message),
    }
}

/// 计算居中弹窗区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn shell(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    Rect::new(
        inner.x + 1,
        inner.y + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    )
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(56, 9, frame.area());
    let inner = shell(frame, area, t().common.error, Color::Red);

    let keys = &t().hints.keys;
    let lines = vec![
        Line::styled(title, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Line::styled(message, Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(
            format!("{}/{} {}", keys.esc, keys.q, t().hints.close),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let keys = &texts.hints.keys;
    let area = centered_rect(52, 11, frame.area());
    let inner = shell(frame, area, texts.help.title, Color::Cyan);

    let entry = |key: String, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<18}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    };
    let lines = vec![
        entry(format!("{} {}", keys.arrows, keys.vim), texts.help.move_focus),
        entry(keys.enter.to_string(), texts.help.open_details),
        entry(
            format!("{}/{}/{}", keys.esc, keys.backspace, keys.ctrl_c),
            texts.help.close_details,
        ),
        entry(keys.question.to_string(), texts.help.toggle_help),
        entry(format!("{}/Alt+q/{}", keys.q, keys.ctrl_c), texts.help.quit),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
