//! Encoding front end: tokenizer, model, parser, empty-group validation.

pub mod model;
pub mod parser;
pub mod tokenizer;
pub mod validate;

pub use model::{Encoding, Group, Partition, Sign};
pub use parser::{parse, DecodeError};
pub use validate::{check_groups, EmptyGroupError};
