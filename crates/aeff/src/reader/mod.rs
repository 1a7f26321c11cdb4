//! Logic for reading Monte-Carlo simulation files
//!
//! All functions are re-exported to the crate root for easy access.
//!
//! # Quickstart
//!
//! The simplest way to load a simulation file is the convenience function:
//!
//! ```rust, no_run
//! # use nutools_aeff::{read_simfile, Flavor, IntType};
//! // Read the full set of per-event records into memory
//! let simfile = read_simfile("/path/to/aeff_mc.json").unwrap();
//!
//! // Pull out the records for one flavor/interaction group
//! let sample = simfile.sample(Flavor::Nue, IntType::CC).unwrap();
//! ```
//!
//! # File format
//!
//! A simulation file is a JSON document with one group per flavor and
//! interaction type. Each group holds three equal-length arrays of per-event
//! records:
//!
//! - `true_energy` - generated event energy
//! - `true_coszen` - generated cosine of the zenith angle
//! - `weighted_aeff` - per-event effective-area weight
//!
//! The path given to [read_simfile] may contain environment-style
//! placeholders such as `$NU_DATA/aeff_mc.json`, which are expanded before
//! the file is opened.
//!
//! # Failure behaviour
//!
//! An unreadable or unparseable file is logged and returned as an error, and
//! accessing a group that the file does not carry is a
//! [GroupNotFound](crate::Error::GroupNotFound) error. Validating the deeper
//! physics content of the records is not this module's concern.

// reader modules
mod simfile;

// re-exports for clean API + documentation
#[doc(inline)]
pub use simfile::{EventSample, SimFile};

// library imports
use crate::error::Result;
use nutools_utils::StringExt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// external crates
use log::{error, info};

/// Read all event records from a simulation file
///
/// Returns a result containing the [SimFile] parsed from the file at `path`.
/// Environment placeholders in the path are expanded first.
///
/// - `path` - Path to the simulation file, can be [&str], [String], [Path], etc...
///
/// Example
/// ```rust, no_run
/// # use nutools_aeff::{read_simfile, SimFile};
/// // Read every event group contained in the file
/// let simfile: SimFile = read_simfile("$NU_DATA/aeff_mc.json").unwrap();
/// ```
pub fn read_simfile<P: AsRef<Path>>(path: P) -> Result<SimFile> {
    let path = path.as_ref().to_string_lossy().expand_vars();
    info!("Opening file: {path}");

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) => {
            error!("Unable to open simulation file {path}");
            error!("{e}");
            return Err(e.into());
        }
    };

    match serde_json::from_reader(BufReader::new(file)) {
        Ok(simfile) => Ok(simfile),
        Err(e) => {
            error!("Unable to parse simulation file {path}");
            error!("{e}");
            Err(e.into())
        }
    }
}
