//! Rendering: text blocks with wrapping, and LaTeX markup.

pub mod block;
pub mod markup;
pub mod text;
pub mod wrap;

pub use block::{group_to_block, Block, Boundary};
pub use markup::{partition_to_markup, render_markup};
pub use text::render_text;
pub use wrap::{join_blocks, pack_chunks, pad_blocks, WRAP_SAFETY_FACTOR};

/// Most cells a single partition entry, or one rendered line, may span.
///
/// Entries are only bounded by `usize` when parsed, so both renderers check
/// widths against this before allocating.
pub const MAX_WIDTH: usize = 10_000;

/// Failures while laying out an encoding that parsed and validated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("encoding has no groups")]
    EmptyEncoding,
    #[error("partition {partition} of group {group} has no values")]
    EmptyPartition { group: usize, partition: usize },
    #[error("line {line} of group {group} is {found} characters wide, expected {expected}")]
    RaggedBlock {
        group: usize,
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error(
        "partition {partition} of group {group} is {width} cells wide, at most {max} allowed",
        max = MAX_WIDTH
    )]
    TooWide {
        group: usize,
        partition: usize,
        width: usize,
    },
}

/// Add `extra` cells to `width`, failing once the total passes [`MAX_WIDTH`].
pub(crate) fn widen(
    width: usize,
    extra: usize,
    group: usize,
    partition: usize,
) -> Result<usize, RenderError> {
    match width.checked_add(extra) {
        Some(total) if total <= MAX_WIDTH => Ok(total),
        total => Err(RenderError::TooWide {
            group,
            partition,
            width: total.unwrap_or(usize::MAX),
        }),
    }
}
