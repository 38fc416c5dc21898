//! vCard serialization.
//!
//! - Fold: content line folding at 75 octets, with quoted-printable soft breaks
//! - Serializer: card framing, parameter and value rendering

mod fold;
mod serializer;

pub use fold::{fold_line, fold_quoted_printable};
pub use serializer::{
    SerializeOptions, serialize, serialize_line, serialize_single, serialize_with, value_text,
};
