//! Layout options for the pagination renderer.

use chrono::NaiveDate;

/// Geometry and typography settings for paginating a letter.
///
/// Defaults follow the A4 formal-letter convention: 25-unit margins,
/// 5-unit line height, 8-unit paragraph spacing, 11 pt body text.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Margin on all four page edges
    pub margin: f32,

    /// Vertical advance per wrapped line
    pub line_height: f32,

    /// Extra vertical space after a paragraph
    pub paragraph_spacing: f32,

    /// Body font size
    pub font_size: f32,

    /// Minimum free vertical space required before starting a block
    pub block_space: f32,

    /// Minimum free vertical space required before a separator rule
    pub rule_space: f32,

    /// Extra gap after a heading
    pub heading_gap: f32,

    /// Horizontal indent for list items
    pub list_indent: f32,

    /// Footer font size
    pub footer_font_size: f32,

    /// Footer baseline distance from the page bottom
    pub footer_offset: f32,

    /// Product name shown in the footer
    pub product: String,

    /// Fixed footer date; `None` uses today's local date
    pub footer_date: Option<NaiveDate>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            margin: 25.0,
            line_height: 5.0,
            paragraph_spacing: 8.0,
            font_size: 11.0,
            block_space: 20.0,
            rule_space: 10.0,
            heading_gap: 4.0,
            list_indent: 5.0,
            footer_font_size: 8.0,
            footer_offset: 12.0,
            product: "suratfmt".to_string(),
            footer_date: None,
        }
    }
}

impl LayoutOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page margin.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the line height.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set the inter-paragraph spacing.
    pub fn with_paragraph_spacing(mut self, spacing: f32) -> Self {
        self.paragraph_spacing = spacing;
        self
    }

    /// Set the body font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the footer product name.
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = product.into();
        self
    }

    /// Pin the footer date (for reproducible output).
    pub fn with_footer_date(mut self, date: NaiveDate) -> Self {
        self.footer_date = Some(date);
        self
    }

    /// Font size for a heading level; levels past 6 use the smallest.
    pub fn heading_size(&self, level: u8) -> f32 {
        match level {
            1 => 16.0,
            2 => 14.0,
            3 => 13.0,
            4 => 12.0,
            5 => 11.0,
            _ => 10.0,
        }
    }
}
