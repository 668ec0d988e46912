//! # Showcase Rendering
//!
//! Projects the selection onto the item store. [`render`] is pure and only
//! derives data: the active record and one indicator per position. The ASCII
//! helpers lay that data out as a text card for terminal output, the way the
//! landing page lays it out as a glass card with a row of slide dots.

use crate::{selection::SelectionState, DisplayRecord, ItemStore, ShowcaseError};

/// Indicator glyph for the active position.
const ACTIVE_DOT: &str = "━━";
/// Indicator glyph for every other position.
const INACTIVE_DOT: &str = "──";
/// Narrowest card that still fits the borders and some text.
const MIN_WIDTH: usize = 24;

/// One position in the rotation, clickable to jump there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub is_active: bool,
}

impl Indicator {
    /// Accessible label, numbered from 1.
    pub fn label(&self) -> String {
        format!("Go to slide {}", self.index + 1)
    }
}

/// Everything a presentation layer needs to draw the showcase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub active: DisplayRecord,
    pub indicators: Vec<Indicator>,
}

impl Frame {
    /// Index of the active indicator.
    pub fn active_index(&self) -> Option<usize> {
        self.indicators
            .iter()
            .find(|indicator| indicator.is_active)
            .map(|indicator| indicator.index)
    }
}

/// Derive the displayed frame for `state` over `store`.
///
/// # Example
/// ```
/// use showcase_lib::{fallback, renderer::render, selection::SelectionState};
///
/// let store = fallback::case_studies();
/// let frame = render(&SelectionState::new(), &store).unwrap();
/// assert_eq!(frame.active.label, "Apex Fintech");
/// assert_eq!(frame.indicators.len(), 3);
/// assert_eq!(frame.active_index(), Some(0));
/// ```
pub fn render(state: &SelectionState, store: &ItemStore) -> Result<Frame, ShowcaseError> {
    let current = state.current();
    let active = store.at(current)?.clone();
    let indicators = (0..store.len())
        .map(|index| Indicator {
            index,
            is_active: index == current,
        })
        .collect();

    Ok(Frame { active, indicators })
}

/// Greedy word wrap; words longer than `width` get a line of their own.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Pad or truncate `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

/// Lay out `frame` as a boxed text card `width` columns wide.
///
/// Layout, top to bottom: the client badge, the wrapped quote, the metric in
/// brackets followed by the detail, and the centred indicator row below the card.
pub fn format_ascii(frame: &Frame, width: usize) -> String {
    let width = width.max(MIN_WIDTH);
    let inner = width - 4;
    let mut out = String::new();

    let border = "─".repeat(width - 2);
    out.push_str(&format!("╭{border}╮\n"));

    let mut body = vec![format!("[ {} ]", frame.active.label), String::new()];
    let mut quoted = wrap_words(&frame.active.quote, inner.saturating_sub(2)).into_iter();
    if let Some(first) = quoted.next() {
        body.push(format!("“ {first}"));
    }
    body.extend(quoted.map(|line| format!("  {line}")));
    body.push(String::new());
    body.extend(wrap_words(
        &format!("({}) {}", frame.active.metric, frame.active.detail),
        inner,
    ));

    for line in body {
        out.push_str(&format!("│ {} │\n", fit(&line, inner)));
    }
    out.push_str(&format!("╰{border}╯\n"));

    let dots: Vec<&str> = frame
        .indicators
        .iter()
        .map(|indicator| {
            if indicator.is_active {
                ACTIVE_DOT
            } else {
                INACTIVE_DOT
            }
        })
        .collect();
    let row = dots.join(" ");
    let pad = width.saturating_sub(row.chars().count()) / 2;
    out.push_str(&format!("{}{}\n", " ".repeat(pad), row));

    out
}

/// Print `frame` to stdout.
pub fn draw_ascii(frame: &Frame, width: usize) {
    print!("{}", format_ascii(frame, width));
}
