//! Value objects for display-ready derived data.

mod flavor_text;
mod measurements;
mod type_color;

pub use flavor_text::normalize_flavor_text;
pub use measurements::{Height, ImperialHeight, Weight};
pub use type_color::TypeColor;
