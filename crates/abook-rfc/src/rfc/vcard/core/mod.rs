//! Generic card model: cards, lines, parameters and values.

mod card;
mod line;
mod parameter;
mod value;

pub use card::{VCard, VCardVersion};
pub use line::VCardLine;
pub use parameter::{VCardParameter, names};
pub use value::VCardValue;
