//! Block: the equal-width text glyph for one group.
//!
//! A `Block` is the fundamental text-layout primitive. `group_to_block` turns
//! one [`Group`] into a block whose first line reads `sign coef(p1, p2, ...)`
//! and whose remaining lines hang the deeper rows of each partition under
//! their first row. The wrapper in [`super::wrap`] then places blocks side by
//! side.

use tracing::trace;

use super::{widen, RenderError};
use crate::encoding::model::{Group, Partition, Sign};

/// Filled cell of a row.
const CELL: char = 'x';

/// Glyph for the `[0]` partition.
const UNIT: &str = "1";

// ---------------------------------------------------------------------------
// Boundary
// ---------------------------------------------------------------------------

/// Glyphs framing the rows below the first line of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub open: char,
    pub close: char,
}

impl Boundary {
    /// Parentheses extended to the full block height.
    pub const TALL: Boundary = Boundary {
        open: '(',
        close: ')',
    };

    /// Blank frame; only the first line carries parentheses.
    pub const FLAT: Boundary = Boundary {
        open: ' ',
        close: ' ',
    };

    pub fn new(tall: bool) -> Self {
        if tall {
            Self::TALL
        } else {
            Self::FLAT
        }
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self::FLAT
    }
}

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// Lines of identical character width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
    width: usize,
}

impl Block {
    /// Build a block for group `group`, failing if any line differs in width
    /// from the first.
    pub fn from_lines(group: usize, lines: Vec<String>) -> Result<Self, RenderError> {
        let width = lines.first().map_or(0, |l| l.chars().count());
        for (line, text) in lines.iter().enumerate() {
            let found = text.chars().count();
            if found != width {
                return Err(RenderError::RaggedBlock {
                    group,
                    line,
                    expected: width,
                    found,
                });
            }
        }
        Ok(Self { lines, width })
    }

    /// Character width shared by every line.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The line at `row`, or `None` past the bottom.
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Append blank lines of the block's width until it is `height` tall.
    pub fn pad_to(&mut self, height: usize) {
        if self.lines.len() < height {
            self.lines.resize(height, " ".repeat(self.width));
        }
    }
}

// ---------------------------------------------------------------------------
// group_to_block
// ---------------------------------------------------------------------------

/// `CELL` repeated `filled` times, then spaces up to `width`.
fn row_cells(filled: usize, width: usize) -> String {
    let mut s = String::with_capacity(width.max(filled));
    s.extend(std::iter::repeat(CELL).take(filled));
    s.extend(std::iter::repeat(' ').take(width.saturating_sub(filled)));
    s
}

/// Column width of a partition: its largest entry, at least 1 and at most
/// [`MAX_WIDTH`](super::MAX_WIDTH).
fn column_width(group: usize, index: usize, partition: &Partition) -> Result<usize, RenderError> {
    let largest = partition.largest().ok_or(RenderError::EmptyPartition {
        group,
        partition: index,
    })?;
    widen(0, largest.max(1), group, index)
}

/// Lay out one group as a block.
///
/// `index` is the group's position in the encoding; the leading `"+ "` of a
/// positive group at index 0 is dropped from every line.
///
/// ```text
/// + (xxx, xx, x)
///    xx   x
///    xx
/// ```
pub fn group_to_block(
    group: &Group,
    index: usize,
    separator: &str,
    boundary: Boundary,
) -> Result<Block, RenderError> {
    let widths = group
        .partitions
        .iter()
        .enumerate()
        .map(|(j, p)| column_width(index, j, p))
        .collect::<Result<Vec<_>, _>>()?;
    widths
        .iter()
        .enumerate()
        .try_fold(0, |total, (j, &w)| widen(total, w, index, j))?;

    let prefix = group.prefix();
    let first_row: Vec<String> = group
        .partitions
        .iter()
        .zip(&widths)
        .map(|(p, &w)| {
            if p.is_unit() {
                UNIT.to_string()
            } else {
                row_cells(p.row(0), w)
            }
        })
        .collect();

    let mut lines = Vec::with_capacity(group.depth().max(1));
    lines.push(format!("{prefix}({})", first_row.join(separator)));

    let margin = " ".repeat(prefix.chars().count());
    let gap = " ".repeat(separator.chars().count());
    for row in 1..group.depth() {
        let mut line = margin.clone();
        line.push(boundary.open);
        for (j, (p, &w)) in group.partitions.iter().zip(&widths).enumerate() {
            if j > 0 {
                line.push_str(&gap);
            }
            line.push_str(&row_cells(p.row(row), w));
        }
        line.push(boundary.close);
        lines.push(line);
    }

    if index == 0 && group.sign == Sign::Plus {
        lines = lines
            .into_iter()
            .map(|line| line.chars().skip(2).collect())
            .collect();
    }

    trace!(group = index, lines = lines.len(), "laid out group");
    Block::from_lines(index, lines)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MAX_WIDTH;
    use pretty_assertions::assert_eq;

    fn group(sign: Sign, coefficient: &str, partitions: &[&[usize]]) -> Group {
        Group::new(
            sign,
            coefficient,
            partitions.iter().map(|p| Partition::new(p.to_vec())).collect(),
        )
    }

    fn lines(block: &Block) -> Vec<&str> {
        block.lines().iter().map(String::as_str).collect()
    }

    // -----------------------------------------------------------------------
    // Block
    // -----------------------------------------------------------------------

    #[test]
    fn block_rejects_ragged_lines() {
        let err = Block::from_lines(3, vec!["abc".into(), "ab".into()]).unwrap_err();
        assert_eq!(
            err,
            RenderError::RaggedBlock {
                group: 3,
                line: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn block_width_counts_chars() {
        let block = Block::from_lines(0, vec!["é·x".into(), "abc".into()]).unwrap();
        assert_eq!(block.width(), 3);
    }

    #[test]
    fn block_pad_to_adds_blank_lines() {
        let mut block = Block::from_lines(0, vec!["ab".into()]).unwrap();
        block.pad_to(3);
        assert_eq!(lines(&block), vec!["ab", "  ", "  "]);
        block.pad_to(1);
        assert_eq!(block.height(), 3);
    }

    #[test]
    fn block_line_past_bottom_is_none() {
        let block = Block::from_lines(0, vec!["ab".into()]).unwrap();
        assert_eq!(block.line(0), Some("ab"));
        assert_eq!(block.line(1), None);
    }

    // -----------------------------------------------------------------------
    // group_to_block
    // -----------------------------------------------------------------------

    #[test]
    fn hanging_rows_align_under_bracket() {
        let g = group(Sign::Plus, "", &[&[3, 2, 2], &[2, 1], &[1]]);
        let block = group_to_block(&g, 1, ", ", Boundary::FLAT).unwrap();
        assert_eq!(
            lines(&block),
            vec![
                "+ (xxx, xx, x)",
                "   xx   x     ",
                "   xx         ",
            ]
        );
    }

    #[test]
    fn leading_plus_is_dropped_at_index_zero() {
        let g = group(Sign::Plus, "", &[&[3, 2, 2], &[2, 1], &[1]]);
        let block = group_to_block(&g, 0, ", ", Boundary::FLAT).unwrap();
        assert_eq!(
            lines(&block),
            vec!["(xxx, xx, x)", " xx   x     ", " xx         "]
        );
    }

    #[test]
    fn leading_minus_is_kept_at_index_zero() {
        let g = group(Sign::Minus, "", &[&[1]]);
        let block = group_to_block(&g, 0, ", ", Boundary::FLAT).unwrap();
        assert_eq!(lines(&block), vec!["- (x)"]);
    }

    #[test]
    fn tall_boundary_frames_every_row() {
        let g = group(Sign::Minus, "", &[&[2, 1], &[1, 1]]);
        let block = group_to_block(&g, 1, ", ", Boundary::TALL).unwrap();
        assert_eq!(lines(&block), vec!["- (xx, x)", "  (x   x)"]);
    }

    #[test]
    fn coefficient_widens_margin() {
        let g = group(Sign::Minus, "12", &[&[2, 1]]);
        let block = group_to_block(&g, 1, ", ", Boundary::TALL).unwrap();
        assert_eq!(lines(&block), vec!["- 12(xx)", "    (x )"]);
    }

    #[test]
    fn unit_partition_renders_as_one() {
        let g = group(Sign::Minus, "", &[&[3], &[0], &[1, 1]]);
        let block = group_to_block(&g, 1, ", ", Boundary::FLAT).unwrap();
        assert_eq!(lines(&block), vec!["- (xxx, 1, x)", "           x "]);
    }

    #[test]
    fn zero_rows_pad_to_column_width() {
        let g = group(Sign::Minus, "", &[&[0, 2]]);
        let block = group_to_block(&g, 1, ", ", Boundary::FLAT).unwrap();
        assert_eq!(lines(&block), vec!["- (  )", "   xx "]);
    }

    #[test]
    fn custom_separator_sets_gap_width() {
        let g = group(Sign::Minus, "", &[&[1, 1], &[1, 1]]);
        let block = group_to_block(&g, 1, " | ", Boundary::FLAT).unwrap();
        assert_eq!(lines(&block), vec!["- (x | x)", "   x   x "]);
    }

    #[test]
    fn every_line_has_same_width() {
        let g = group(Sign::Minus, "3", &[&[4, 1, 1, 1], &[0], &[2, 2, 2], &[5]]);
        let block = group_to_block(&g, 2, ", ", Boundary::TALL).unwrap();
        let width = block.width();
        assert!(block.lines().iter().all(|l| l.chars().count() == width));
        assert_eq!(block.height(), 4);
    }

    #[test]
    fn empty_partition_is_render_error() {
        let g = group(Sign::Minus, "", &[&[1], &[]]);
        assert_eq!(
            group_to_block(&g, 4, ", ", Boundary::FLAT),
            Err(RenderError::EmptyPartition {
                group: 4,
                partition: 1
            })
        );
    }

    #[test]
    fn huge_entry_is_too_wide() {
        let g = group(Sign::Minus, "", &[&[1], &[usize::MAX, 1]]);
        assert_eq!(
            group_to_block(&g, 2, ", ", Boundary::FLAT),
            Err(RenderError::TooWide {
                group: 2,
                partition: 1,
                width: usize::MAX
            })
        );
    }

    #[test]
    fn columns_summing_past_ceiling_are_too_wide() {
        let half = MAX_WIDTH / 2 + 1;
        let g = group(Sign::Minus, "", &[&[half], &[half]]);
        assert_eq!(
            group_to_block(&g, 1, ", ", Boundary::FLAT),
            Err(RenderError::TooWide {
                group: 1,
                partition: 1,
                width: 2 * half
            })
        );
    }

    #[test]
    fn boundary_new_picks_glyphs() {
        assert_eq!(Boundary::new(true), Boundary::TALL);
        assert_eq!(Boundary::new(false), Boundary::FLAT);
    }
}
