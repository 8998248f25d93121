//! Materialises generation output as a datapack tree: function files,
//! function-tag declarations, pack metadata, and the mapping artifacts.

mod layout;
mod writer;

pub use layout::PackLayout;
pub use writer::{FunctionTag, PackReport, PackWriter};
