pub mod markers;
pub mod syllable;
pub mod token;

pub use syllable::*;
pub use token::*;
