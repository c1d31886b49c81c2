//! LaTeX markup rendering.
//!
//! Each partition becomes a tableau command (or environment) whose rows hold
//! one `~` cell per box:
//!
//! ```text
//! [3, 2, 2, 1] -> \tableau{~ & ~ & ~ \\ ~ & ~ \\ ~ & ~ \\ ~}
//! ```
//!
//! Markup output is never wrapped.

use tracing::debug;

use super::{widen, RenderError};
use crate::encoding::model::{Encoding, Partition};

const CELL: &str = "~";
const COLUMN_DELIMITER: &str = " & ";
const ROW_DELIMITER: &str = " \\\\ ";
const UNIT: &str = "1";

/// Markup for a single partition. Zero rows are dropped; `[0]` becomes `1`.
///
/// With `environment` set the rows are wrapped in
/// `\begin{command} ...\end{command}` instead of `\command{...}`.
pub fn partition_to_markup(partition: &Partition, command: &str, environment: bool) -> String {
    if partition.is_unit() {
        return UNIT.to_string();
    }

    let rows = partition
        .parts
        .iter()
        .filter(|&&p| p > 0)
        .map(|&p| vec![CELL; p].join(COLUMN_DELIMITER))
        .collect::<Vec<_>>()
        .join(ROW_DELIMITER);

    if environment {
        format!("\\begin{{{command}}} {rows}\\end{{{command}}}")
    } else {
        format!("\\{command}{{{rows}}}")
    }
}

/// Render an encoding as markup, one group per line.
///
/// Groups read `sign coef\left(p1 sep p2 ...\right)`; the `+` of a leading
/// positive group is omitted. A group may hold at most
/// [`MAX_WIDTH`](super::MAX_WIDTH) cells in total.
pub fn render_markup(
    encoding: &Encoding,
    separator: &str,
    command: &str,
    environment: bool,
) -> Result<String, RenderError> {
    if encoding.is_empty() {
        return Err(RenderError::EmptyEncoding);
    }

    let mut lines = Vec::with_capacity(encoding.len());
    for (i, group) in encoding.iter().enumerate() {
        let mut partitions = Vec::with_capacity(group.partitions.len());
        let mut cells = 0;
        for (j, partition) in group.partitions.iter().enumerate() {
            if partition.is_empty() {
                return Err(RenderError::EmptyPartition {
                    group: i,
                    partition: j,
                });
            }
            for &p in &partition.parts {
                cells = widen(cells, p, i, j)?;
            }
            partitions.push(partition_to_markup(partition, command, environment));
        }
        lines.push(format!(
            "{}\\left({}\\right)",
            group.prefix(),
            partitions.join(separator)
        ));
    }

    let output = lines.join("\n");
    let output = output.strip_prefix('+').unwrap_or(&output);
    debug!(groups = encoding.len(), command, environment, "rendering markup");
    Ok(output.trim().to_string())
}
