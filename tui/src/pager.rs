//! Page rendering and the horizontal slide between pages.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use onboard_engine::{OnboardPage, PageDeck, PagerView};

use crate::effects::slide_offsets;
use crate::images::art_for;
use crate::theme::{Palette, styles};

/// Horizontal breathing room around the description.
const DESCRIPTION_PADDING: u16 = 4;
/// Rows above the image.
const TOP_PADDING: u16 = 1;

/// Draw the pager for this frame.
///
/// The view holds no page index of its own; `view` comes from the state holder.
pub(crate) fn render_pager(
    view: PagerView,
    deck: &PageDeck,
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
) {
    match view {
        PagerView::Settled { page } => render_page(deck.clamped(page), area, buf, palette),
        PagerView::Sliding {
            from,
            to,
            direction,
            progress,
        } => {
            let (out_x, in_x) = slide_offsets(area.width, direction, progress);
            let outgoing = offscreen(deck.clamped(from), area, palette);
            let incoming = offscreen(deck.clamped(to), area, palette);
            blit(&outgoing, buf, area, out_x);
            blit(&incoming, buf, area, in_x);
        }
    }
}

fn offscreen(page: &OnboardPage, area: Rect, palette: &Palette) -> Buffer {
    let local = Rect::new(0, 0, area.width, area.height);
    let mut scratch = Buffer::empty(local);
    scratch.set_style(local, styles::screen(palette));
    render_page(page, local, &mut scratch, palette);
    scratch
}

/// Copy `src` into `dst` shifted horizontally by `offset`, clipped to `area`.
fn blit(src: &Buffer, dst: &mut Buffer, area: Rect, offset: i32) {
    for y in 0..area.height {
        for x in 0..area.width {
            let dest_x = i32::from(area.x) + i32::from(x) + offset;
            if dest_x < i32::from(area.x) || dest_x >= i32::from(area.x) + i32::from(area.width) {
                continue;
            }
            let Some(cell) = src.cell(Position::new(x, y)) else {
                continue;
            };
            if let Some(target) = dst.cell_mut(Position::new(dest_x as u16, area.y + y)) {
                *target = cell.clone();
            }
        }
    }
}

/// Lay out one page: image, title, description, top to bottom.
pub(crate) fn render_page(page: &OnboardPage, area: Rect, buf: &mut Buffer, palette: &Palette) {
    let art = art_for(page.image.as_str());
    let art_height = u16::try_from(art.height()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TOP_PADDING),
            Constraint::Length(art_height), // Image
            Constraint::Length(1),
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Min(0), // Description
        ])
        .split(area);

    let art_style = Style::default().fg(palette.art);
    let art_lines: Vec<Line> = art
        .lines()
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), art_style)))
        .collect();
    Paragraph::new(art_lines)
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    Paragraph::new(Line::from(Span::styled(
        page.title.clone(),
        styles::title(palette),
    )))
    .alignment(Alignment::Center)
    .render(chunks[3], buf);

    let description_area = chunks[5].inner(Margin {
        horizontal: DESCRIPTION_PADDING,
        vertical: 0,
    });
    Paragraph::new(Span::styled(
        page.description.clone(),
        styles::description(palette),
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .render(description_area, buf);
}
