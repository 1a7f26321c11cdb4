//! `nutools` is a semi-modular toolkit of libraries for atmospheric neutrino
//! oscillation analysis
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use nutools_utils as utils;

#[cfg(feature = "aeff")]
#[cfg_attr(docsrs, doc(cfg(feature = "aeff")))]
#[doc(inline)]
pub use nutools_aeff as aeff;
