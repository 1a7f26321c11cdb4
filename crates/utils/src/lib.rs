//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, finding the bin a value belongs to or expanding environment
//! placeholders in a dataset path are useful everywhere.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod slice_ext;
mod string_ext;

// Flatten
pub use slice_ext::BinExt;
pub use string_ext::StringExt;
