//! Empty-group validation, run before any rendering.

use std::fmt;

use crate::encoding::model::Encoding;

/// Example input shown alongside empty-group reports.
pub const USAGE_EXAMPLE: &str = "S1[3] S2[1, 1] S3[2, 2] S4[1] - S1[3] S2[0] S3[1, 1] S4[1]";

/// One or more groups parsed with zero partitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.indices))]
pub struct EmptyGroupError {
    /// 0-based indices of every empty group, ascending.
    pub indices: Vec<usize>,
}

/// `zero length group at index 1` or `zero length groups at indices [1, 3]`.
fn describe(indices: &[usize]) -> String {
    match indices {
        [single] => format!("zero length group at index {single}"),
        many => format!("zero length groups at indices {}", IndexList(many)),
    }
}

/// Formats indices as `[1, 3]`.
struct IndexList<'a>(&'a [usize]);

impl fmt::Display for IndexList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{index}")?;
        }
        f.write_str("]")
    }
}

/// Reject an encoding containing any group without partitions.
pub fn check_groups(encoding: &Encoding) -> Result<(), EmptyGroupError> {
    let indices: Vec<usize> = encoding
        .iter()
        .enumerate()
        .filter(|(_, group)| group.is_empty())
        .map(|(i, _)| i)
        .collect();

    if indices.is_empty() {
        Ok(())
    } else {
        Err(EmptyGroupError { indices })
    }
}
