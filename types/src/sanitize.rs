//! Terminal-safe text for page content loaded from configuration.
//!
//! Page titles and descriptions are drawn straight into the terminal buffer, so
//! escape sequences and control characters in user-supplied content are removed
//! before the text ever reaches a [`crate::PageDeck`].

use std::borrow::Cow;

const ESC: char = '\x1b';
const BEL: char = '\x07';
const C1_CSI: char = '\u{009b}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Text,
    /// Just saw ESC.
    Escape,
    /// Inside `ESC [` or C1 CSI, waiting for the final byte.
    Csi,
    /// Inside OSC/DCS/PM/APC, waiting for BEL or `ESC \`.
    Str,
    /// Saw ESC inside a string sequence; `\` terminates it.
    StrEscape,
    /// Two-byte designator (`ESC (` etc.); drop the next char.
    Designator,
}

/// Strip escape sequences and control characters.
///
/// Newlines are kept. Tabs and carriage returns become plain spaces so that
/// width calculations in the view stay exact.
///
/// ```
/// use onboard_types::sanitize_terminal_text;
///
/// assert_eq!(sanitize_terminal_text("plain"), "plain");
/// assert_eq!(sanitize_terminal_text("a\x1b[31mb"), "ab");
/// ```
#[must_use]
pub fn sanitize_terminal_text(input: &str) -> Cow<'_, str> {
    if !input.chars().any(needs_work) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut state = Scan::Text;
    for c in input.chars() {
        state = match state {
            Scan::Text => match c {
                ESC => Scan::Escape,
                C1_CSI => Scan::Csi,
                '\n' => {
                    out.push('\n');
                    Scan::Text
                }
                '\t' | '\r' => {
                    out.push(' ');
                    Scan::Text
                }
                c if is_control(c) => Scan::Text,
                c => {
                    out.push(c);
                    Scan::Text
                }
            },
            Scan::Escape => match c {
                '[' => Scan::Csi,
                ']' | 'P' | '^' | '_' => Scan::Str,
                '(' | ')' | '*' | '+' | '#' | ' ' => Scan::Designator,
                // Unknown or single-char command: drop both.
                _ => Scan::Text,
            },
            Scan::Csi => match c {
                '\x40'..='\x7e' => Scan::Text,
                '\x20'..='\x3f' => Scan::Csi,
                // Malformed: abandon the sequence and keep the char.
                c => {
                    if !is_control(c) {
                        out.push(c);
                    }
                    Scan::Text
                }
            },
            Scan::Str => match c {
                BEL => Scan::Text,
                ESC => Scan::StrEscape,
                _ => Scan::Str,
            },
            Scan::StrEscape => match c {
                '\\' => Scan::Text,
                ESC => Scan::StrEscape,
                _ => Scan::Str,
            },
            Scan::Designator => Scan::Text,
        };
    }

    Cow::Owned(out)
}

fn needs_work(c: char) -> bool {
    c != '\n' && is_control(c)
}

fn is_control(c: char) -> bool {
    c <= '\x1f' || c == '\x7f' || ('\u{0080}'..='\u{009f}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::sanitize_terminal_text;
    use std::borrow::Cow;

    #[test]
    fn clean_text_is_borrowed() {
        let input = "Make it Easy One";
        assert!(matches!(sanitize_terminal_text(input), Cow::Borrowed(s) if s == input));
    }

    #[test]
    fn newlines_survive_and_tabs_become_spaces() {
        assert_eq!(sanitize_terminal_text("a\tb\r\nc"), "a b \nc");
    }

    #[test]
    fn csi_sequences_removed() {
        assert_eq!(sanitize_terminal_text("\x1b[31mRed\x1b[0m ok"), "Red ok");
        assert_eq!(sanitize_terminal_text("x\x1b[10;20Hy"), "xy");
        assert_eq!(sanitize_terminal_text("x\u{009b}31my"), "xy");
    }

    #[test]
    fn osc_terminated_by_bel_or_st() {
        assert_eq!(sanitize_terminal_text("a\x1b]0;title\x07b"), "ab");
        assert_eq!(sanitize_terminal_text("a\x1b]52;c;Zm9v\x1b\\b"), "ab");
    }

    #[test]
    fn dcs_and_designators_removed() {
        assert_eq!(sanitize_terminal_text("a\x1bPdata\x1b\\b"), "ab");
        assert_eq!(sanitize_terminal_text("a\x1b(Bb"), "ab");
    }

    #[test]
    fn stray_controls_dropped() {
        assert_eq!(sanitize_terminal_text("A\x00B\x7fC\u{0085}D"), "ABCD");
    }

    #[test]
    fn unterminated_sequences_swallow_the_tail() {
        assert_eq!(sanitize_terminal_text("Text\x1b"), "Text");
        assert_eq!(sanitize_terminal_text("Text\x1b[31"), "Text");
        assert_eq!(sanitize_terminal_text("Text\x1b]52;data"), "Text");
    }

    #[test]
    fn unicode_preserved() {
        let input = "Hola 👋 世界";
        assert_eq!(sanitize_terminal_text(input), input);
    }
}
