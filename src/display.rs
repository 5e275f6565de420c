//! Rendering of finder rows and the preview block.
//!
//! Column padding is computed on uncolored text and color is applied to the
//! cell text only, so rows line up the same with or without a palette.

use anyhow::{Context, Result};
use colored::{Color, Colorize};

use crate::models::{Session, SessionRow};
use crate::sessions::session_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Session,
    Path,
    Window,
}

const ANSI_COLORS: &[(Role, Color)] = &[
    (Role::Session, Color::Blue),
    (Role::Path, Color::Red),
    (Role::Window, Color::Green),
];

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    colors: &'static [(Role, Color)],
}

impl Palette {
    pub const ANSI: Palette = Palette {
        colors: ANSI_COLORS,
    };
    pub const PLAIN: Palette = Palette { colors: &[] };

    pub fn new(color: bool) -> Self {
        if color {
            Self::ANSI
        } else {
            Self::PLAIN
        }
    }

    pub fn paint(&self, role: Role, text: &str) -> String {
        match self.colors.iter().find(|(r, _)| *r == role) {
            Some((_, color)) => text.color(*color).to_string(),
            None => text.to_string(),
        }
    }
}

/// Renders one line per row, each column padded to its widest cell plus one
/// space.
pub fn render_rows(rows: &[SessionRow], palette: &Palette) -> String {
    let cells: Vec<[(Role, &str); 3]> = rows
        .iter()
        .map(|row| {
            [
                (Role::Session, row.label.as_str()),
                (Role::Path, row.paths.as_str()),
                (Role::Window, row.windows.as_str()),
            ]
        })
        .collect();

    let mut widths = [0usize; 3];
    for line in &cells {
        for (width, (_, text)) in widths.iter_mut().zip(line) {
            *width = (*width).max(text.chars().count());
        }
    }

    let mut out = String::new();
    for line in &cells {
        for (width, (role, text)) in widths.iter().zip(line) {
            out.push_str(&palette.paint(*role, text));
            let padding = width + 1 - text.chars().count();
            out.extend(std::iter::repeat(' ').take(padding));
        }
        out.push('\n');
    }
    out
}

pub fn render_preview(session: &Session, palette: &Palette) -> String {
    let mut out = format!("{}\n\n", palette.paint(Role::Session, &session_label(session)));
    for pane in &session.panes {
        out.push_str(&format!(
            "{} {}\n",
            palette.paint(Role::Window, &pane.window_name),
            palette.paint(Role::Path, &pane.path)
        ));
    }
    out.trim_end().to_string()
}

/// Session id from the leading token of a rendered row. Escape sequences
/// are ignored, so both raw and colored rows parse.
pub fn parse_session_id(line: &str) -> Result<u32> {
    let line = strip_ansi_escapes::strip_str(line);
    let token = line
        .split_whitespace()
        .next()
        .context("Selected line is empty")?;
    token
        .parse()
        .with_context(|| format!("Selected line does not start with a session id: {token:?}"))
}
