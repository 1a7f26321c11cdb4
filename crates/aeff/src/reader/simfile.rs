// crate modules
use crate::error::{Error, Result};
use crate::particle::{Flavor, IntType};

// nutools modules
use nutools_utils::f;

// standard library
use std::collections::HashMap;

// external crates
use serde::Deserialize;

/// Per-event Monte-Carlo records for one (flavor, interaction type) group
///
/// Three equal-length sequences with one entry per simulated event. The
/// ordering of events carries no meaning, only the alignment between the
/// sequences does.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventSample {
    /// True (generated) event energy \[GeV\]
    pub true_energy: Vec<f64>,
    /// True cosine of the event zenith angle
    pub true_coszen: Vec<f64>,
    /// Per-event weighted effective area \[m^2\]
    pub weighted_aeff: Vec<f64>,
}

impl EventSample {
    /// Number of events, checking that the three sequences agree
    ///
    /// Misaligned sequences mean the file was produced incorrectly and any
    /// histogram built from them would be meaningless, so this is a hard
    /// error rather than a truncation.
    pub fn checked_len(&self, group: &str) -> Result<usize> {
        let n = self.true_energy.len();

        if self.true_coszen.len() == n && self.weighted_aeff.len() == n {
            Ok(n)
        } else {
            Err(Error::MismatchedSampleLengths {
                group: group.to_string(),
                energy: n,
                coszen: self.true_coszen.len(),
                weights: self.weighted_aeff.len(),
            })
        }
    }
}

/// In-memory view of a simulation file
///
/// Groups are keyed by flavor tag and then interaction type tag, mirroring
/// the `flavor/int_type/field` layout of the file itself. A complete file
/// carries all 12 combinations; [SimFile] does not check this up front, but
/// any access to a missing group fails fast.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct SimFile {
    groups: HashMap<String, HashMap<String, EventSample>>,
}

impl SimFile {
    /// Event records for one (flavor, interaction type) group
    ///
    /// ```rust, no_run
    /// # use nutools_aeff::{read_simfile, Flavor, IntType};
    /// let simfile = read_simfile("path/to/aeff_mc.json").unwrap();
    /// let sample = simfile.sample(Flavor::Numu, IntType::CC).unwrap();
    /// ```
    pub fn sample(&self, flavor: Flavor, int_type: IntType) -> Result<&EventSample> {
        self.groups
            .get(flavor.tag())
            .and_then(|flavor_group| flavor_group.get(int_type.tag()))
            .ok_or_else(|| Error::GroupNotFound(f!("{flavor}/{int_type}")))
    }
}
