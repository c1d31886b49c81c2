//! Plain-text rendering of a whole encoding.

use tracing::debug;

use super::block::{group_to_block, Block, Boundary};
use super::wrap::{join_blocks, pad_blocks};
use super::RenderError;
use crate::encoding::model::Encoding;

/// Render an encoding as aligned text glyphs.
///
/// `separator` goes between the partitions of a group, `max_width` enables
/// wrapping, and `tall` extends the parentheses to the full block height.
/// The encoding must already have passed
/// [`check_groups`](crate::encoding::validate::check_groups).
pub fn render_text(
    encoding: &Encoding,
    separator: &str,
    max_width: Option<usize>,
    tall: bool,
) -> Result<String, RenderError> {
    if encoding.is_empty() {
        return Err(RenderError::EmptyEncoding);
    }

    let boundary = Boundary::new(tall);
    let mut blocks = encoding
        .iter()
        .enumerate()
        .map(|(i, group)| group_to_block(group, i, separator, boundary))
        .collect::<Result<Vec<Block>, _>>()?;

    pad_blocks(&mut blocks);
    debug!(groups = blocks.len(), ?max_width, tall, "rendering text");
    Ok(join_blocks(&blocks, max_width))
}
