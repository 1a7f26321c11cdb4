//! Effective-area tables from Monte-Carlo simulation files
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod config;
mod error;
mod histogram;
mod particle;
mod service;

pub mod reader;

// inline the important modules for a nice public API
#[doc(inline)]
pub use reader::{read_simfile, EventSample, SimFile};

#[doc(inline)]
pub use service::{AeffDict, AeffService, AeffTable};

#[doc(inline)]
pub use particle::{Flavor, IntType};

#[doc(inline)]
pub use config::AeffConfig;

#[doc(inline)]
pub use histogram::histogram2d_weighted;

#[doc(inline)]
pub use error::{Error, Result};
