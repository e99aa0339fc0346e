//! Rendering of parsed chat messages into output artifacts.
//!
//! HTML is always produced; PDF conversion is layered on top of the
//! written HTML file by driving an external headless browser.

pub mod html;
pub mod pdf;

pub use html::{render_document, RenderRules};
