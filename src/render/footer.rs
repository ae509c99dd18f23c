//! Fixed-format page footer.

use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::model::LetterMetadata;

use super::canvas::{ensure_measured, DrawStyle, PageCanvas};
use super::LayoutOptions;

/// Stamps the generation footer onto pages.
///
/// Format, fixed:
/// `Generated by <product> • <LetterTypeDisplay> • <LanguageDisplay> • <ShortDate>`,
/// centered, small and muted, near the page bottom.
#[derive(Debug, Clone)]
pub struct FooterStamper {
    product: String,
    font_size: f32,
    offset: f32,
    date: Option<NaiveDate>,
}

impl FooterStamper {
    /// Create a stamper from layout options.
    pub fn from_options(options: &LayoutOptions) -> Self {
        Self {
            product: options.product.clone(),
            font_size: options.footer_font_size,
            offset: options.footer_offset,
            date: options.footer_date,
        }
    }

    /// Create a stamper with default geometry.
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            font_size: 8.0,
            offset: 12.0,
            date: None,
        }
    }

    /// Pin the footer date (for reproducible output).
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// The footer text for the given metadata.
    pub fn footer_text(&self, metadata: &LetterMetadata) -> String {
        let date = self
            .date
            .unwrap_or_else(|| Local::now().date_naive())
            .format("%-d %b %Y");
        format!(
            "Generated by {} • {} • {} • {}",
            self.product,
            metadata.letter_type_display(),
            metadata.language_display(),
            date
        )
    }

    /// Stamp the footer onto the canvas's current page.
    pub fn stamp<C: PageCanvas>(&self, canvas: &mut C, metadata: &LetterMetadata) -> Result<()> {
        let text = self.footer_text(metadata);
        let style = DrawStyle::sized(self.font_size).colored((120, 120, 120));

        let page_width = ensure_measured(canvas.width(), "width")?;
        let page_height = ensure_measured(canvas.height(), "height")?;
        let text_width = ensure_measured(canvas.measure_text(&text, &style), "measure_text")?;

        let x = (page_width - text_width) / 2.0;
        let y = page_height - self.offset;
        canvas.draw_text(&text, x, y, &style);
        Ok(())
    }
}
