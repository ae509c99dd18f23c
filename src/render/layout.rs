//! The pagination renderer: walks a document tree and produces
//! positioned, wrapped, style-preserving lines on fixed-size pages.

use log::debug;

use crate::error::Result;
use crate::model::{Alignment, DocumentNode, InlineRun, LetterMetadata, Paragraph};

use super::canvas::{ensure_measured, DrawStyle, PageCanvas};
use super::footer::FooterStamper;
use super::LayoutOptions;

/// Render a document tree onto a canvas, stamping the footer on every
/// page.
pub fn render<C: PageCanvas>(
    tree: &[DocumentNode],
    canvas: &mut C,
    metadata: &LetterMetadata,
    options: &LayoutOptions,
) -> Result<()> {
    PageRenderer::new(canvas, metadata, options)?.render_tree(tree)
}

/// Walks the tree with a monotonically increasing vertical cursor,
/// breaking to a new page when a block would not fit.
///
/// Not reentrant: one renderer per canvas per letter.
pub struct PageRenderer<'a, C: PageCanvas> {
    canvas: &'a mut C,
    options: &'a LayoutOptions,
    footer: FooterStamper,
    metadata: &'a LetterMetadata,
    page_width: f32,
    page_height: f32,
    y: f32,
    page: u32,
}

impl<'a, C: PageCanvas> PageRenderer<'a, C> {
    /// Create a renderer positioned at the top margin of the first page.
    pub fn new(
        canvas: &'a mut C,
        metadata: &'a LetterMetadata,
        options: &'a LayoutOptions,
    ) -> Result<Self> {
        let page_width = ensure_measured(canvas.width(), "width")?;
        let page_height = ensure_measured(canvas.height(), "height")?;
        Ok(Self {
            canvas,
            options,
            footer: FooterStamper::from_options(options),
            metadata,
            page_width,
            page_height,
            y: options.margin,
            page: 1,
        })
    }

    /// Render the whole tree and stamp the final page's footer.
    pub fn render_tree(mut self, tree: &[DocumentNode]) -> Result<()> {
        for node in tree {
            self.render_node(node)?;
        }
        self.footer.stamp(self.canvas, self.metadata)?;
        debug!("rendered {} page(s)", self.page);
        Ok(())
    }

    fn render_node(&mut self, node: &DocumentNode) -> Result<()> {
        match node {
            DocumentNode::Paragraph(p) => self.render_paragraph(p),
            DocumentNode::PairedLine { left, right } => self.render_paired(left, right),
            DocumentNode::Separator => self.render_separator(),
            DocumentNode::LineBreak => {
                self.y += self.options.line_height;
                Ok(())
            }
            DocumentNode::List { ordered, items } => self.render_list(*ordered, items),
            DocumentNode::Heading { level, runs } => self.render_heading(*level, runs),
        }
    }

    fn render_paragraph(&mut self, p: &Paragraph) -> Result<()> {
        if p.has_float_right() {
            // Trees rendered without normalization still pair correctly.
            let (left, right) = p.split_float();
            return self.render_paired(&left, &right);
        }

        if p.is_empty() {
            // An empty paragraph advances one line, nothing more.
            self.y += self.options.line_height;
            return Ok(());
        }

        self.ensure_space(self.options.block_space)?;

        // Soft breaks inside the paragraph stay separate lines.
        let style = run_style(&p.runs, self.options.font_size);
        for segment in p.plain_text().split('\n') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            self.draw_wrapped(segment, &style, p.effective_align())?;
        }
        self.y += self.options.paragraph_spacing;
        Ok(())
    }

    fn render_paired(&mut self, left: &Paragraph, right: &Paragraph) -> Result<()> {
        self.ensure_space(self.options.block_space)?;

        let style = DrawStyle::sized(self.options.font_size);
        let content_width = self.content_width();

        // Soft-break lines of the left content, each wrapped.
        let mut lines: Vec<String> = Vec::new();
        for segment in left.plain_text().split('\n') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            lines.extend(self.canvas.wrap_text(segment, content_width, &style));
        }
        if lines.is_empty() {
            lines.push(String::new());
        }

        let right_text = flatten(&right.plain_text());
        let last = lines.len() - 1;
        for (i, line) in lines.iter().enumerate() {
            if !line.is_empty() {
                self.canvas.draw_text(line, self.options.margin, self.y, &style);
            }
            if i == last && !right_text.is_empty() {
                // The floated text shares the final line's baseline,
                // anchored against the right margin.
                let width = self.measure(&right_text, &style)?;
                let x = self.page_width - self.options.margin - width;
                self.canvas.draw_text(&right_text, x, self.y, &style);
            }
            self.y += self.options.line_height;
        }

        self.y += self.options.paragraph_spacing;
        Ok(())
    }

    fn render_separator(&mut self) -> Result<()> {
        self.ensure_space(self.options.rule_space)?;
        self.canvas.draw_line(
            self.options.margin,
            self.y,
            self.page_width - self.options.margin,
            self.y,
        );
        self.y += self.options.paragraph_spacing / 2.0;
        Ok(())
    }

    fn render_list(&mut self, ordered: bool, items: &[Vec<InlineRun>]) -> Result<()> {
        let style = DrawStyle::sized(self.options.font_size);
        let indent = self.options.list_indent;
        let item_width = self.content_width() - indent;

        for (i, runs) in items.iter().enumerate() {
            self.ensure_space(self.options.block_space)?;

            let text: String = runs.iter().map(|r| r.text.as_str()).collect();
            let marker = if ordered {
                format!("{}. ", i + 1)
            } else {
                "• ".to_string()
            };
            let full = format!("{}{}", marker, flatten(text.trim()));

            for line in self.canvas.wrap_text(&full, item_width, &style) {
                self.canvas
                    .draw_text(&line, self.options.margin + indent, self.y, &style);
                self.y += self.options.line_height;
            }
        }

        self.y += self.options.paragraph_spacing;
        Ok(())
    }

    fn render_heading(&mut self, level: u8, runs: &[InlineRun]) -> Result<()> {
        let text: String = runs.iter().map(|r| r.text.as_str()).collect();
        let text = flatten(text.trim());
        if text.is_empty() {
            return Ok(());
        }

        self.ensure_space(self.options.block_space)?;

        let style = DrawStyle::sized(self.options.heading_size(level)).bold();
        self.draw_wrapped(&text, &style, Alignment::Left)?;
        self.y += self.options.heading_gap;
        Ok(())
    }

    /// Wrap and draw `text` to the content width, advancing the cursor
    /// one line height per wrapped line.
    fn draw_wrapped(&mut self, text: &str, style: &DrawStyle, align: Alignment) -> Result<()> {
        let lines = self.canvas.wrap_text(text, self.content_width(), style);
        for line in lines {
            let line_width = self.measure(&line, style)?;
            let x = match align {
                Alignment::Left | Alignment::Justify => self.options.margin,
                Alignment::Center => (self.page_width - line_width) / 2.0,
                Alignment::Right => self.page_width - self.options.margin - line_width,
            };
            self.canvas.draw_text(&line, x, self.y, style);
            if style.underline {
                self.canvas
                    .draw_line(x, self.y + 1.0, x + line_width, self.y + 1.0);
            }
            self.y += self.options.line_height;
        }
        Ok(())
    }

    /// Break to a new page unless `required` vertical units still fit.
    ///
    /// Checked once per block, not per wrapped line, so an over-tall
    /// block may overflow the bottom margin rather than split.
    fn ensure_space(&mut self, required: f32) -> Result<()> {
        if self.y + required > self.page_height - self.options.margin {
            self.footer.stamp(self.canvas, self.metadata)?;
            self.canvas.new_page();
            self.y = self.options.margin;
            self.page += 1;
            debug!("page break -> page {}", self.page);
        }
        Ok(())
    }

    fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.options.margin
    }

    fn measure(&self, text: &str, style: &DrawStyle) -> Result<f32> {
        ensure_measured(self.canvas.measure_text(text, style), "measure_text")
    }
}

/// Collapse soft breaks for the accumulated consumed-text wrap.
fn flatten(text: &str) -> String {
    text.replace('\n', " ")
}

/// Style for a whole paragraph, taken from its first non-empty run.
fn run_style(runs: &[InlineRun], font_size: f32) -> DrawStyle {
    let first = runs.iter().find(|r| !r.text.trim().is_empty());
    match first {
        Some(run) => DrawStyle {
            font_size,
            bold: run.bold,
            italic: run.italic,
            underline: run.underline,
            color: (0, 0, 0),
        },
        None => DrawStyle::sized(font_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{tree_from_text, DocumentNode};
    use crate::render::TextCanvas;

    fn render_text(tree: &[DocumentNode]) -> TextCanvas {
        let mut canvas = TextCanvas::a4();
        let options = LayoutOptions::default()
            .with_footer_date(chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        render(tree, &mut canvas, &LetterMetadata::default(), &options).unwrap();
        canvas
    }

    #[test]
    fn test_single_paragraph_single_page() {
        let canvas = render_text(&[DocumentNode::paragraph("Hello world.")]);
        assert_eq!(canvas.page_count(), 1);
        assert!(canvas.pages()[0].contains("Hello world."));
    }

    #[test]
    fn test_long_document_breaks_pages() {
        let tree: Vec<DocumentNode> = (0..40)
            .map(|i| DocumentNode::paragraph(format!("Paragraph number {} of the letter body.", i)))
            .collect();
        let canvas = render_text(&tree);
        assert!(canvas.page_count() >= 2);
    }

    #[test]
    fn test_footer_on_every_page() {
        let tree: Vec<DocumentNode> = (0..40)
            .map(|i| DocumentNode::paragraph(format!("Paragraph {}.", i)))
            .collect();
        let canvas = render_text(&tree);
        for page in canvas.pages() {
            assert!(page.contains("Generated by suratfmt"), "page missing footer");
        }
    }

    #[test]
    fn test_right_aligned_paragraph() {
        let tree = vec![DocumentNode::Paragraph(Paragraph::aligned(
            "15 January 2025",
            Alignment::Right,
        ))];
        let canvas = render_text(&tree);
        let page = &canvas.pages()[0];
        let line = page.lines().find(|l| l.contains("15 January 2025")).unwrap();
        // Right-anchored: text ends near column (210 - 25) / 2 = 92.
        assert!(line.len() > 80, "line not right-aligned: {:?}", line);
    }

    #[test]
    fn test_paired_line_shares_baseline() {
        let tree = vec![DocumentNode::PairedLine {
            left: Paragraph::with_text("DBKL\nJalan Raja Laut"),
            right: Paragraph::aligned("15 January 2025", Alignment::Right),
        }];
        let canvas = render_text(&tree);
        let page = &canvas.pages()[0];
        let last_left = page
            .lines()
            .find(|l| l.contains("Jalan Raja Laut"))
            .unwrap();
        assert!(
            last_left.contains("15 January 2025"),
            "date not on the final left line: {:?}",
            last_left
        );
    }

    #[test]
    fn test_separator_is_drawn() {
        let tree = tree_from_text("Sender\n\n---\n\nRecipient");
        let canvas = render_text(&tree);
        assert!(canvas.pages()[0].lines().any(|l| l.trim_start().starts_with("----")));
    }

    #[test]
    fn test_ordered_list_markers() {
        let tree = vec![DocumentNode::List {
            ordered: true,
            items: vec![
                vec![InlineRun::new("first item")],
                vec![InlineRun::new("second item")],
            ],
        }];
        let canvas = render_text(&tree);
        let page = &canvas.pages()[0];
        assert!(page.contains("1. first item"));
        assert!(page.contains("2. second item"));
    }

    #[test]
    fn test_heading_rendered() {
        let tree = vec![DocumentNode::Heading {
            level: 1,
            runs: vec![InlineRun::new("NOTICE")],
        }];
        let canvas = render_text(&tree);
        assert!(canvas.pages()[0].contains("NOTICE"));
    }

    #[test]
    fn test_empty_paragraph_draws_nothing() {
        let canvas = render_text(&[DocumentNode::paragraph("   ")]);
        let page = &canvas.pages()[0];
        let body: Vec<&str> = page
            .lines()
            .filter(|l| !l.is_empty() && !l.contains("Generated by"))
            .collect();
        assert!(body.is_empty(), "unexpected content: {:?}", body);
    }

    #[test]
    fn test_zero_width_canvas_is_not_fatal() {
        struct ZeroCanvas(TextCanvas);
        impl PageCanvas for ZeroCanvas {
            fn width(&self) -> f32 {
                0.0
            }
            fn height(&self) -> f32 {
                297.0
            }
            fn measure_text(&self, _t: &str, _s: &DrawStyle) -> f32 {
                0.0
            }
            fn wrap_text(&self, text: &str, w: f32, s: &DrawStyle) -> Vec<String> {
                self.0.wrap_text(text, w, s)
            }
            fn draw_text(&mut self, t: &str, x: f32, y: f32, s: &DrawStyle) {
                self.0.draw_text(t, x, y, s)
            }
            fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
                self.0.draw_line(x1, y1, x2, y2)
            }
            fn new_page(&mut self) {
                self.0.new_page()
            }
        }

        let mut canvas = ZeroCanvas(TextCanvas::a4());
        let result = render(
            &[DocumentNode::paragraph("degenerate but legal")],
            &mut canvas,
            &LetterMetadata::default(),
            &LayoutOptions::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_nan_measurement_is_fatal() {
        struct BrokenCanvas;
        impl PageCanvas for BrokenCanvas {
            fn width(&self) -> f32 {
                210.0
            }
            fn height(&self) -> f32 {
                297.0
            }
            fn measure_text(&self, _t: &str, _s: &DrawStyle) -> f32 {
                f32::NAN
            }
            fn wrap_text(&self, text: &str, _w: f32, _s: &DrawStyle) -> Vec<String> {
                vec![text.to_string()]
            }
            fn draw_text(&mut self, _t: &str, _x: f32, _y: f32, _s: &DrawStyle) {}
            fn draw_line(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32) {}
            fn new_page(&mut self) {}
        }

        let result = render(
            &[DocumentNode::paragraph("text")],
            &mut BrokenCanvas,
            &LetterMetadata::default(),
            &LayoutOptions::default(),
        );
        assert!(matches!(result, Err(crate::error::Error::Canvas(_))));
    }
}
