//! Terminal art for page images.
//!
//! Image references are resolved against art embedded at build time. Unknown
//! references get a framed placeholder so a misconfigured deck still renders.

use unicode_width::UnicodeWidthStr;

const ONBOARD1: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/onboard1.txt"));
const ONBOARD2: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/onboard2.txt"));
const ONBOARD3: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/onboard3.txt"));

/// Art lines padded to a common display width so centering keeps the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Art {
    lines: Vec<String>,
    width: usize,
}

impl Art {
    fn from_raw(raw: &str) -> Self {
        let rows: Vec<&str> = raw.lines().map(str::trim_end).collect();
        let width = rows.iter().map(|row| row.width()).max().unwrap_or(0);
        let lines = rows
            .into_iter()
            .map(|row| {
                let pad = width - row.width();
                format!("{row}{}", " ".repeat(pad))
            })
            .collect();
        Self { lines, width }
    }

    fn placeholder(key: &str) -> Self {
        let label = format!(" {key} ");
        let inner = label.width().max(12);
        let pad_left = (inner - label.width()) / 2;
        let pad_right = inner - label.width() - pad_left;
        let edge = format!("+{}+", "-".repeat(inner));
        let blank = format!("|{}|", " ".repeat(inner));
        let middle = format!(
            "|{}{label}{}|",
            " ".repeat(pad_left),
            " ".repeat(pad_right)
        );
        Self {
            lines: vec![edge.clone(), blank.clone(), middle, blank, edge],
            width: inner + 2,
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// Art for a page image key.
#[must_use]
pub fn art_for(key: &str) -> Art {
    match key {
        "onboard1" => Art::from_raw(ONBOARD1),
        "onboard2" => Art::from_raw(ONBOARD2),
        "onboard3" => Art::from_raw(ONBOARD3),
        other => {
            tracing::debug!(image = other, "No art for image; using placeholder");
            Art::placeholder(other)
        }
    }
}
