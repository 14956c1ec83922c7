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
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(key.clone(), Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(String, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;

    if app.modal_open() {
        return vec![(
            format!("{}/{}", keys.esc, keys.backspace),
            texts.hints.close,
        )];
    }

    vec![
        (format!("{} {}", keys.arrows, keys.vim), texts.hints.move_focus),
        (keys.enter.to_string(), texts.hints.select),
        (keys.question.to_string(), texts.hints.help),
        (keys.q.to_string(), texts.hints.quit),
    ]
}
