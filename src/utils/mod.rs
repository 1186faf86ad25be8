pub mod error;
pub mod formatting;
