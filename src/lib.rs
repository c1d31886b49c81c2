//! # tableau-vis
//!
//! Renders signed linear combinations of partition tuples, written as
//!
//! ```text
//! S1[3] S2[1, 1] S3[2, 2] S4[1] - S1[3] S2[0] S3[1, 1] S4[1]
//! ```
//!
//! either as aligned Young-diagram-like text glyphs or as LaTeX tableau
//! markup.
//!
//! ## Core Systems
//!
//! - **[`encoding`]** — logos tokenizer, parser, empty-group validation
//! - **[`render`]** — text blocks with greedy wrapping, LaTeX markup
//! - **[`config`]** — rendering options and report detail
//! - **[`display`]** — parse → validate → render pipeline for one unit
//! - **[`driver`]** — batch and interactive I/O, terminal width probing

// Front end
pub mod encoding;

// Rendering
pub mod config;
pub mod render;

// Pipeline and I/O
pub mod display;
pub mod driver;

pub use config::{OutputFormat, RenderConfig, ReportDetail};
pub use display::{display, DisplayError};
pub use encoding::{parse, DecodeError, EmptyGroupError, Encoding};
pub use render::RenderError;
