//! Virtual terminal backend for render tests.
//!
//! Frames are encoded as ANSI and fed through a `vt100::Parser`, so tests
//! read back what a real terminal would display.

use std::fmt;
use std::io::{self, Write};

use crossterm::{Command, cursor, style, terminal};
use ratatui::backend::{Backend, ClearType, WindowSize};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Size};
use ratatui::style::{Color, Modifier, Style};

pub struct VT100Backend {
    parser: vt100::Parser,
    width: u16,
    height: u16,
}

impl VT100Backend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            parser: vt100::Parser::new(height, width, 0),
            width,
            height,
        }
    }

    /// Whole screen, rows joined by newlines, trailing blanks trimmed.
    pub fn contents(&self) -> String {
        self.parser.screen().contents()
    }

    /// One screen row with trailing blanks trimmed.
    #[allow(dead_code)]
    pub fn row(&self, row: u16) -> String {
        self.parser
            .screen()
            .rows(0, self.width)
            .nth(usize::from(row))
            .unwrap_or_default()
            .trim_end()
            .to_string()
    }

    /// First row containing `needle`.
    #[allow(dead_code)]
    pub fn find_row(&self, needle: &str) -> Option<u16> {
        (0..self.height).find(|&row| self.row(row).contains(needle))
    }

    #[allow(dead_code)]
    pub fn fg(&self, column: u16, row: u16) -> Option<vt100::Color> {
        self.parser
            .screen()
            .cell(row, column)
            .map(vt100::Cell::fgcolor)
    }

    #[allow(dead_code)]
    pub fn is_bold(&self, column: u16, row: u16) -> bool {
        self.parser
            .screen()
            .cell(row, column)
            .is_some_and(vt100::Cell::bold)
    }

    fn emit(&mut self, command: impl Command) {
        let mut buf = String::new();
        let _ = command.write_ansi(&mut buf);
        self.parser.process(buf.as_bytes());
    }
}

impl Write for VT100Backend {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.parser.process(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Display for VT100Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.contents())
    }
}

fn push_style(buf: &mut String, cell_style: Style) {
    let _ = style::SetAttribute(style::Attribute::Reset).write_ansi(buf);
    if let Some(fg) = to_crossterm_color(cell_style.fg) {
        let _ = style::SetForegroundColor(fg).write_ansi(buf);
    }
    if let Some(bg) = to_crossterm_color(cell_style.bg) {
        let _ = style::SetBackgroundColor(bg).write_ansi(buf);
    }
    if cell_style.add_modifier.contains(Modifier::BOLD) {
        let _ = style::SetAttribute(style::Attribute::Bold).write_ansi(buf);
    }
}

impl Backend for VT100Backend {
    type Error = io::Error;

    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        let mut buf = String::new();
        let mut cursor_at: Option<(u16, u16)> = None;
        let mut current: Option<Style> = None;

        for (x, y, cell) in content {
            if cursor_at != Some((x, y)) {
                let _ = cursor::MoveTo(x, y).write_ansi(&mut buf);
            }
            let cell_style = cell.style();
            if current != Some(cell_style) {
                push_style(&mut buf, cell_style);
                current = Some(cell_style);
            }
            buf.push_str(cell.symbol());
            cursor_at = Some((x + 1, y));
        }

        self.parser.process(buf.as_bytes());
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        let (row, col) = self.parser.screen().cursor_position();
        Ok(Position::new(col, row))
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        let pos = position.into();
        self.emit(cursor::MoveTo(pos.x, pos.y));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.emit(terminal::Clear(terminal::ClearType::All));
        Ok(())
    }

    fn clear_region(&mut self, _clear_type: ClearType) -> io::Result<()> {
        self.clear()
    }

    fn size(&self) -> io::Result<Size> {
        Ok(Size::new(self.width, self.height))
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        Ok(WindowSize {
            columns_rows: Size::new(self.width, self.height),
            pixels: Size::new(self.width * 8, self.height * 16),
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn to_crossterm_color(color: Option<Color>) -> Option<style::Color> {
    use style::Color as C;

    let mapped = match color? {
        Color::Reset => return None,
        Color::Black => C::Black,
        Color::Red => C::DarkRed,
        Color::Green => C::DarkGreen,
        Color::Yellow => C::DarkYellow,
        Color::Blue => C::DarkBlue,
        Color::Magenta => C::DarkMagenta,
        Color::Cyan => C::DarkCyan,
        Color::Gray => C::Grey,
        Color::DarkGray => C::DarkGrey,
        Color::LightRed => C::Red,
        Color::LightGreen => C::Green,
        Color::LightYellow => C::Yellow,
        Color::LightBlue => C::Blue,
        Color::LightMagenta => C::Magenta,
        Color::LightCyan => C::Cyan,
        Color::White => C::White,
        Color::Rgb(r, g, b) => C::Rgb { r, g, b },
        Color::Indexed(i) => C::AnsiValue(i),
    };
    Some(mapped)
}
