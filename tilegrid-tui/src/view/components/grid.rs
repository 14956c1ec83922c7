//! 网格组件：行标题 + 水平瓦片条

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use tilegrid_core::NavigationSession;
use tilegrid_core::types::{FocusPosition, LoadState, Row, Tile};

use crate::i18n::t;
use crate::model::{App, ROW_HEIGHT, ROW_TITLE_HEIGHT, TILE_GAP, TILE_HEIGHT, TILE_WIDTH};
use crate::util::text::{pad_to_width, truncate_to_width};
use crate::view::theme::{Styles, colors};

/// 有图片时的纹理
const IMAGE_FILL: &str = "░";

/// 渲染视口内的行
pub fn render(app: &App, session: &NavigationSession, frame: &mut Frame, area: Rect) {
    let grid = session.grid();
    let focus = session.focus();

    let mut y = area.y;
    for row_index in app.viewport.visible_rows(grid.row_count()) {
        if y >= area.bottom() {
            break;
        }
        let Some(row) = grid.row(row_index) else {
            continue;
        };
        let height = ROW_HEIGHT.min(area.bottom() - y);
        let row_area = Rect::new(area.x, y, area.width, height);
        render_row(app, row_index, row, focus, frame, row_area);
        y = y.saturating_add(ROW_HEIGHT);
    }
}

fn render_row(
    app: &App,
    row_index: usize,
    row: &Row,
    focus: FocusPosition,
    frame: &mut Frame,
    area: Rect,
) {
    let focused_row = focus.row_index == row_index;

    // 行标题
    let marker = if focused_row { "▸ " } else { "  " };
    let title_style = if focused_row {
        Styles::title().fg(colors().highlight)
    } else {
        Styles::title()
    };
    let mut spans = vec![Span::styled(format!("{marker}{}", row.title()), title_style)];
    if row.load_state() == LoadState::Loaded && !row.tiles().is_empty() {
        spans.push(Span::styled(format!("  ({})", row.tiles().len()), Styles::muted()));
    }
    let title_area = Rect::new(area.x, area.y, area.width, ROW_TITLE_HEIGHT.min(area.height));
    frame.render_widget(Paragraph::new(Line::from(spans)), title_area);

    if area.height <= ROW_TITLE_HEIGHT {
        return;
    }
    let strip = Rect::new(
        area.x,
        area.y + ROW_TITLE_HEIGHT,
        area.width,
        TILE_HEIGHT.min(area.height - ROW_TITLE_HEIGHT),
    );

    match row.load_state() {
        LoadState::Loaded if row.tiles().is_empty() => {
            render_row_notice(frame, strip, t().grid.row_empty, Styles::muted());
        }
        LoadState::Loaded => {
            let focused_tile = focused_row.then_some(focus.tile_index);
            render_strip(app, row_index, row.tiles(), focused_tile, frame, strip);
        }
        LoadState::Unloaded if row.is_fetching() => {
            render_row_notice(
                frame,
                strip,
                t().grid.row_loading,
                Style::default().fg(colors().warning),
            );
        }
        LoadState::Unloaded => render_row_notice(frame, strip, t().grid.row_pending, Styles::muted()),
        LoadState::LoadFailed => render_row_notice(frame, strip, t().grid.row_failed, Styles::error()),
    }
}

fn render_row_notice(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let line = Rect::new(area.x, area.y, area.width, 1.min(area.height));
    frame.render_widget(Paragraph::new(Line::styled(format!("  {text}"), style)), line);
}

fn render_strip(
    app: &App,
    row_index: usize,
    tiles: &[Tile],
    focused_tile: Option<usize>,
    frame: &mut Frame,
    area: Rect,
) {
    let mut x = area.x;
    for tile_index in app.viewport.visible_tiles(row_index, tiles.len()) {
        if x.saturating_add(TILE_WIDTH) > area.right() {
            break;
        }
        let tile_area = Rect::new(x, area.y, TILE_WIDTH, area.height);
        render_tile(&tiles[tile_index], focused_tile == Some(tile_index), frame, tile_area);
        x = x.saturating_add(TILE_WIDTH + TILE_GAP);
    }
}

fn render_tile(tile: &Tile, focused: bool, frame: &mut Frame, area: Rect) {
    let c = colors();
    let border_style = if focused {
        Styles::tile_border_focused()
    } else {
        Styles::tile_border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let width = usize::from(inner.width);
    // 最后两行留给标题与类型
    let image_rows = inner.height.saturating_sub(2);
    let mut lines: Vec<Line> = Vec::new();
    for i in 0..image_rows {
        let line = if tile.image_url.is_some() {
            Line::styled(IMAGE_FILL.repeat(width), Style::default().fg(c.muted))
        } else if i == image_rows / 2 {
            Line::styled(
                pad_to_width(&center(t().grid.no_image, width), width),
                Style::default().bg(c.placeholder).fg(c.muted),
            )
        } else {
            Line::styled(" ".repeat(width), Style::default().bg(c.placeholder))
        };
        lines.push(line);
    }

    let title = pad_to_width(&truncate_to_width(&tile.title, width), width);
    let title_style = if focused {
        Styles::selected()
    } else {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    };
    lines.push(Line::styled(title, title_style));
    lines.push(Line::styled(
        truncate_to_width(&tile.content_type, width),
        Styles::muted(),
    ));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

/// 左侧补空格使文本居中
fn center(text: &str, width: usize) -> String {
    let text = truncate_to_width(text, width);
    let pad = width.saturating_sub(unicode_width::UnicodeWidthStr::width(text.as_str())) / 2;
    format!("{}{text}", " ".repeat(pad))
}
