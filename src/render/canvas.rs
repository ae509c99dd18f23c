//! The page canvas seam and a fixed-pitch text reference backend.

use crate::error::{Error, Result};

/// Text drawing style passed to the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawStyle {
    /// Font size in canvas units (points)
    pub font_size: f32,

    /// Bold weight
    pub bold: bool,

    /// Italic slant
    pub italic: bool,

    /// Underlined
    pub underline: bool,

    /// RGB text color
    pub color: (u8, u8, u8),
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            font_size: 11.0,
            bold: false,
            italic: false,
            underline: false,
            color: (0, 0, 0),
        }
    }
}

impl DrawStyle {
    /// Create a style with a font size.
    pub fn sized(font_size: f32) -> Self {
        Self {
            font_size,
            ..Default::default()
        }
    }

    /// Builder: bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: color.
    pub fn colored(mut self, color: (u8, u8, u8)) -> Self {
        self.color = color;
        self
    }
}

/// The external measurement and drawing surface the renderer targets.
///
/// The renderer is agnostic to what realizes this contract: vector
/// graphics, word-processing markup, or plain text all work as long as
/// measurements are finite and non-negative. Coordinates grow rightward
/// and downward from the page's top-left corner.
pub trait PageCanvas {
    /// Page width in canvas units.
    fn width(&self) -> f32;

    /// Page height in canvas units.
    fn height(&self) -> f32;

    /// Width of `text` when drawn with `style`.
    fn measure_text(&self, text: &str, style: &DrawStyle) -> f32;

    /// Split `text` into lines no wider than `max_width`.
    fn wrap_text(&self, text: &str, max_width: f32, style: &DrawStyle) -> Vec<String>;

    /// Draw a line of text with its left edge at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &DrawStyle);

    /// Draw a straight line between two points.
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Start a new page; subsequent draws land on it.
    fn new_page(&mut self);
}

/// Reject a canvas measurement that breaks the contract.
///
/// Zero is degenerate but legal and propagates into wrap calculations;
/// negative or non-finite values abort the render.
pub(crate) fn ensure_measured(value: f32, what: &str) -> Result<f32> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::Canvas(format!("{} returned {}", what, value)));
    }
    Ok(value)
}

/// A fixed-pitch text backend.
///
/// Pages are character grids: one grid cell per `cell_width` horizontal
/// units and `cell_height` vertical units. Used by the CLI and as a
/// test double; font size and weight do not affect metrics.
#[derive(Debug)]
pub struct TextCanvas {
    width: f32,
    height: f32,
    cell_width: f32,
    cell_height: f32,
    pages: Vec<Vec<Vec<char>>>,
}

impl TextCanvas {
    /// Create a canvas with A4-like proportions (210 x 297 units).
    pub fn a4() -> Self {
        Self::new(210.0, 297.0)
    }

    /// Create a canvas with the given page size, 2-unit columns and
    /// 5-unit rows.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            cell_width: 2.0,
            cell_height: 5.0,
            pages: vec![Vec::new()],
        }
    }

    fn col(&self, x: f32) -> usize {
        (x / self.cell_width).round().max(0.0) as usize
    }

    fn row(&self, y: f32) -> usize {
        (y / self.cell_height).round().max(0.0) as usize
    }

    fn put(&mut self, row: usize, col: usize, c: char) {
        let page = self.pages.last_mut().expect("at least one page");
        while page.len() <= row {
            page.push(Vec::new());
        }
        let line = &mut page[row];
        while line.len() <= col {
            line.push(' ');
        }
        line[col] = c;
    }

    /// Number of pages produced so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Realize the pages as strings, one per page, trailing whitespace
    /// trimmed.
    pub fn pages(&self) -> Vec<String> {
        self.pages
            .iter()
            .map(|page| {
                page.iter()
                    .map(|line| {
                        line.iter().collect::<String>().trim_end().to_string()
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect()
    }
}

impl Default for TextCanvas {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageCanvas for TextCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn measure_text(&self, text: &str, _style: &DrawStyle) -> f32 {
        text.chars().count() as f32 * self.cell_width
    }

    fn wrap_text(&self, text: &str, max_width: f32, _style: &DrawStyle) -> Vec<String> {
        let max_chars = (max_width / self.cell_width).floor().max(1.0) as usize;
        wrap_words(text, max_chars)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, _style: &DrawStyle) {
        let row = self.row(y);
        let start = self.col(x);
        for (i, c) in text.chars().enumerate() {
            self.put(row, start + i, c);
        }
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, _y2: f32) {
        let row = self.row(y1);
        let from = self.col(x1.min(x2));
        let to = self.col(x1.max(x2));
        for col in from..=to {
            self.put(row, col, '-');
        }
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
    }
}

/// Greedy word wrap to a column limit. Words longer than the limit are
/// hard-split rather than overflowed.
fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        // Hard-split oversized words.
        let mut rest: Vec<char> = word.chars().collect();
        while rest.len() > max_chars {
            lines.push(rest.drain(..max_chars).collect());
        }
        current = rest.into_iter().collect();
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
