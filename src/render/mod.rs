//! Pagination rendering onto an abstract page canvas.

mod canvas;
mod footer;
mod layout;
mod options;

pub use canvas::{DrawStyle, PageCanvas, TextCanvas};
pub use footer::FooterStamper;
pub use layout::{render, PageRenderer};
pub use options::LayoutOptions;
