//! Encoding model: Sign, Partition, Group, Encoding.

use std::fmt;

/// Sign of one term of the combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    #[default]
    Plus,
    Minus,
}

impl Sign {
    /// The glyph rendered for this sign.
    pub fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A row-length profile. Monotonicity is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    pub parts: Vec<usize>,
}

impl Partition {
    pub fn new(parts: Vec<usize>) -> Self {
        Self { parts }
    }

    /// `[0]`: the empty partition, rendered as the literal `1`.
    pub fn is_unit(&self) -> bool {
        self.parts == [0]
    }

    /// Largest entry, or `None` for an empty value list.
    pub fn largest(&self) -> Option<usize> {
        self.parts.iter().copied().max()
    }

    /// Entry in `row`, zero past the end.
    pub fn row(&self, row: usize) -> usize {
        self.parts.get(row).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl From<Vec<usize>> for Partition {
    fn from(parts: Vec<usize>) -> Self {
        Self::new(parts)
    }
}

/// One signed, coefficiented term holding its partitions in label order.
///
/// `coefficient` is opaque source text; empty means an implicit 1.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    pub sign: Sign,
    pub coefficient: String,
    pub partitions: Vec<Partition>,
}

impl Group {
    pub fn new(sign: Sign, coefficient: impl Into<String>, partitions: Vec<Partition>) -> Self {
        Self {
            sign,
            coefficient: coefficient.into(),
            partitions,
        }
    }

    /// A group with no partitions is malformed and must not be rendered.
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// `sign " " coefficient`, the text in front of the opening bracket.
    pub fn prefix(&self) -> String {
        format!("{} {}", self.sign, self.coefficient)
    }

    /// Number of text rows the group spans (its longest partition).
    pub fn depth(&self) -> usize {
        self.partitions.iter().map(Partition::len).max().unwrap_or(0)
    }
}

/// A full parsed input line: a sum of signed terms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Encoding {
    pub groups: Vec<Group>,
}

impl Encoding {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a Encoding {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
