//! TUI rendering for the onboarding screen using ratatui.

mod effects;
mod images;
mod input;
mod pager;
mod theme;

pub use images::{Art, art_for};
pub use input::{InputPump, action_for_key, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use onboard_engine::{App, ControlKind, HitRegion, IndicatorMarker, NavControls};

use self::pager::render_pager;

/// Rows used by the bottom control row.
pub const CONTROLS_HEIGHT: u16 = 3;
/// Cells between the screen edge and the Skip/Next labels.
const CONTROL_EDGE_PADDING: u16 = 2;
/// Horizontal padding inside the Get Started button.
const BUTTON_PADDING: u16 = 4;

#[must_use]
pub fn control_label(control: ControlKind) -> &'static str {
    match control {
        ControlKind::Skip => "Skip",
        ControlKind::Next => "Next",
        ControlKind::GetStarted => "Get Started",
    }
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(styles::screen(&palette));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),                  // Pager
            Constraint::Length(1),               // Indicator
            Constraint::Length(1),               // Spacer
            Constraint::Length(CONTROLS_HEIGHT), // Controls
            Constraint::Length(1),               // Key hints
        ])
        .split(frame.area());

    let screen = frame.area();
    let buf = frame.buffer_mut();
    render_pager(app.pager_view(), app.deck(), chunks[0], buf, &palette);
    draw_indicator(&app.indicator(), chunks[1], buf, &palette, &glyphs);
    let regions = draw_controls(app.nav_controls(), chunks[3], buf, &palette);
    draw_key_hints(app.nav_controls(), chunks[4], buf, &palette, &glyphs);

    if let Some(toast) = app.toast() {
        draw_toast(toast.message(), screen, chunks[3], buf, &palette);
    }

    app.set_hit_regions(regions);
}

fn draw_indicator(
    markers: &[IndicatorMarker],
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let mut spans = Vec::with_capacity(markers.len() * 2);
    for (i, marker) in markers.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let glyph = if marker.selected {
            glyphs.marker_selected
        } else {
            glyphs.marker_idle
        };
        spans.push(Span::styled(
            glyph.repeat(usize::from(marker.cells())),
            styles::marker(palette, marker.selected),
        ));
    }
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}

/// Draw the bottom controls and report where they landed.
fn draw_controls(
    controls: NavControls,
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
) -> Vec<HitRegion> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    match controls {
        NavControls::SkipAndNext => {
            let row = area.y + area.height / 2;
            let skip = control_label(ControlKind::Skip);
            let next = control_label(ControlKind::Next);
            let skip_width = skip.width() as u16;
            let next_width = next.width() as u16;

            let skip_x = area.x.saturating_add(CONTROL_EDGE_PADDING);
            let next_x = (area.x + area.width)
                .saturating_sub(CONTROL_EDGE_PADDING + next_width)
                .max(skip_x + skip_width + 1);

            let style = styles::text_control(palette);
            buf.set_stringn(skip_x, row, skip, usize::from(area.width), style);
            if next_x + next_width <= area.x + area.width {
                buf.set_string(next_x, row, next, style);
            }

            vec![
                label_region(ControlKind::Skip, skip_x, row, skip_width),
                label_region(ControlKind::Next, next_x, row, next_width),
            ]
        }
        NavControls::GetStarted => {
            let label = control_label(ControlKind::GetStarted);
            let width = (label.width() as u16 + 2 * BUTTON_PADDING + 2).min(area.width);
            let rect = Rect {
                x: area.x + (area.width - width) / 2,
                y: area.y,
                width,
                height: area.height,
            };

            let button = Paragraph::new(Line::from(label))
                .alignment(Alignment::Center)
                .style(styles::button(palette))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .style(styles::button(palette)),
                );
            button.render(rect, buf);

            vec![HitRegion {
                control: ControlKind::GetStarted,
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
            }]
        }
    }
}

/// Text controls get one extra cell each side so they are easier to hit.
fn label_region(control: ControlKind, x: u16, y: u16, width: u16) -> HitRegion {
    HitRegion {
        control,
        x: x.saturating_sub(1),
        y,
        width: width + 2,
        height: 1,
    }
}

fn draw_key_hints(
    controls: NavControls,
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let key = styles::key_highlight(palette);
    let hint = styles::key_hint(palette);
    let sep = Span::styled(format!(" {} ", glyphs.separator), hint);

    let mut spans = vec![
        Span::styled(format!("{}/{}", glyphs.arrow_left, glyphs.arrow_right), key),
        Span::styled(" swipe", hint),
        sep.clone(),
        Span::styled("Enter", key),
    ];
    match controls {
        NavControls::SkipAndNext => {
            spans.push(Span::styled(" next", hint));
            spans.push(sep.clone());
            spans.push(Span::styled("s", key));
            spans.push(Span::styled(" skip", hint));
        }
        NavControls::GetStarted => {
            spans.push(Span::styled(" get started", hint));
        }
    }
    spans.push(sep);
    spans.push(Span::styled("q", key));
    spans.push(Span::styled(" quit", hint));

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn draw_toast(message: &str, screen: Rect, controls: Rect, buf: &mut Buffer, palette: &Palette) {
    let width = (message.width() as u16 + 4).min(screen.width);
    let height = 3.min(screen.height);
    let y = controls.y.saturating_sub(height).max(screen.y);
    let rect = Rect {
        x: screen.x + (screen.width - width) / 2,
        y,
        width,
        height,
    };

    Clear.render(rect, buf);
    Paragraph::new(Line::from(message.to_string()))
        .alignment(Alignment::Center)
        .style(styles::toast(palette))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(styles::toast(palette)),
        )
        .render(rect, buf);
}
