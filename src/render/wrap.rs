//! Side-by-side placement of blocks, with optional wrapping.
//!
//! Blocks are first padded to a common height, then packed greedily into
//! chunks that fit a maximum width. Each chunk is printed row by row with one
//! space between blocks; chunks are separated by a blank line.

use std::ops::Range;

use tracing::debug;

use super::block::Block;

/// Fraction of the maximum width a chunk may fill.
///
/// Empirical margin so near-exact fits still wrap; output compatibility
/// depends on the exact value.
pub const WRAP_SAFETY_FACTOR: f64 = 0.9;

/// Pad every block with blank lines to the height of the tallest.
pub fn pad_blocks(blocks: &mut [Block]) {
    let height = blocks.iter().map(Block::height).max().unwrap_or(0);
    for block in blocks.iter_mut() {
        block.pad_to(height);
    }
}

/// Greedily pack block widths into chunks.
///
/// A chunk keeps taking the next block while the summed widths, including
/// the candidate, stay strictly below `floor(max_width * WRAP_SAFETY_FACTOR)`.
/// Every chunk holds at least one block.
pub fn pack_chunks(widths: &[usize], max_width: usize) -> Vec<Range<usize>> {
    let limit = (max_width as f64 * WRAP_SAFETY_FACTOR) as usize;
    let mut chunks = Vec::new();
    let mut idx = 0;

    while idx < widths.len() {
        let start = idx;
        let mut used = widths[idx];
        idx += 1;
        while idx < widths.len() && used + widths[idx] < limit {
            used += widths[idx];
            idx += 1;
        }
        chunks.push(start..idx);
    }

    chunks
}

/// Join one chunk of equal-height blocks row by row.
fn join_chunk(chunk: &[Block]) -> String {
    let height = chunk.first().map_or(0, Block::height);
    (0..height)
        .map(|row| {
            chunk
                .iter()
                .map(|b| b.line(row).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Place padded blocks side by side, wrapping at `max_width` if given.
pub fn join_blocks(blocks: &[Block], max_width: Option<usize>) -> String {
    let Some(max_width) = max_width else {
        return join_chunk(blocks);
    };

    let widths: Vec<usize> = blocks.iter().map(Block::width).collect();
    let chunks = pack_chunks(&widths, max_width);
    debug!(blocks = blocks.len(), chunks = chunks.len(), max_width, "wrapped blocks");

    chunks
        .into_iter()
        .map(|range| join_chunk(&blocks[range]))
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(lines: &[&str]) -> Block {
        Block::from_lines(0, lines.iter().map(|l| l.to_string()).collect()).unwrap()
    }

    #[test]
    fn pack_two_per_chunk() {
        // limit 22: 10 + 10 = 20 fits, a third block would reach 30.
        assert_eq!(pack_chunks(&[10, 10, 10], 25), vec![0..2, 2..3]);
    }

    #[test]
    fn pack_comparison_is_strict() {
        // limit 18: 9 + 9 = 18 is not below it.
        assert_eq!(pack_chunks(&[9, 9], 20), vec![0..1, 1..2]);
    }

    #[test]
    fn pack_oversized_block_gets_own_chunk() {
        assert_eq!(pack_chunks(&[50, 2, 2], 20), vec![0..1, 1..3]);
    }

    #[test]
    fn pack_empty() {
        assert!(pack_chunks(&[], 80).is_empty());
    }

    #[test]
    fn pad_blocks_to_tallest() {
        let mut blocks = vec![block(&["aa"]), block(&["b", "b", "b"])];
        pad_blocks(&mut blocks);
        assert_eq!(blocks[0].lines(), &["aa", "  ", "  "]);
        assert_eq!(blocks[1].height(), 3);
    }

    #[test]
    fn join_without_width_is_single_chunk() {
        let mut blocks = vec![block(&["aaa", "aa "]), block(&["bb"]), block(&["c"])];
        pad_blocks(&mut blocks);
        assert_eq!(join_blocks(&blocks, None), "aaa bb c\naa      ");
    }

    #[test]
    fn join_wraps_into_chunks() {
        let mut blocks = vec![
            block(&["aaaaaaaaaa", "a         "]),
            block(&["bbbbbbbbbb"]),
            block(&["cccccccccc"]),
        ];
        pad_blocks(&mut blocks);
        assert_eq!(
            join_blocks(&blocks, Some(25)),
            "aaaaaaaaaa bbbbbbbbbb\na                    \n\ncccccccccc\n          "
        );
    }
}
