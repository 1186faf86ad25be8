//! The packing engine: token normalization, the length model, and the
//! greedy grouping walk that turns a fixed/floating token pair into
//! length-bounded bracketed constructs.

pub mod group;
pub mod length;
pub mod normalize;

pub use group::{PackRequest, pack};
pub use length::{char_len, construct_length};
pub use normalize::normalize_tokens;
