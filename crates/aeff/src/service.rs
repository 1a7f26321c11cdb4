//! Module for building and storing effective-area tables

// crate modules
use crate::config::AeffConfig;
use crate::error::Result;
use crate::histogram::histogram2d_weighted;
use crate::particle::{Flavor, IntType};
use crate::reader::read_simfile;

// nutools modules
use nutools_utils::{f, BinExt};

// standard library
use std::f64::consts::TAU;
use std::path::Path;

// external crates
use itertools::iproduct;
use log::{debug, info};

/// A 2-D effective-area grid over (energy, coszen) bins
///
/// Cell `(i, j)` holds the effective area in m² attributed to events whose
/// true energy falls in energy bin `i` and true coszen in coszen bin `j`.
/// Values are stored flat in row-major (energy-major) order.
#[derive(Debug, Clone, PartialEq)]
pub struct AeffTable {
    values: Vec<f64>,
    n_ebins: usize,
    n_czbins: usize,
}

impl AeffTable {
    fn new(values: Vec<f64>, n_ebins: usize, n_czbins: usize) -> Self {
        Self {
            values,
            n_ebins,
            n_czbins,
        }
    }

    /// Effective area of the cell at (energy bin, coszen bin)
    pub fn get(&self, ebin: usize, czbin: usize) -> f64 {
        self.values[ebin * self.n_czbins + czbin]
    }

    /// Number of (energy, coszen) bins
    pub fn shape(&self) -> (usize, usize) {
        (self.n_ebins, self.n_czbins)
    }

    /// Flat row-major view of every cell value
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Effective-area tables for every flavor and interaction type
///
/// A fixed-size two-level lookup covering all 12 (flavor, interaction type)
/// combinations. Presence of every combination is guaranteed by construction
/// rather than checked at access time, so [AeffDict::table] cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct AeffDict {
    tables: [[AeffTable; 2]; 6],
}

impl AeffDict {
    /// The table for one (flavor, interaction type) combination
    pub fn table(&self, flavor: Flavor, int_type: IntType) -> &AeffTable {
        &self.tables[flavor as usize][int_type as usize]
    }
}

/// Builds effective-area tables from a simulation file
///
/// Takes the weighted effective-area records of a simulation file and creates
/// a dictionary of the 2-D effective area in terms of energy and coszen, for
/// each flavor (nue, nue_bar, numu, ...) and interaction type (CC, NC).
///
/// The final table for each flavor is in units of m² in each energy/coszen
/// bin: event weights are histogrammed over the binning and each cell is
/// rescaled by its true geometric bin size, the energy width times the solid
/// angle `2π Δcosθ` swept by the azimuth for a zenith-symmetric flux.
///
/// A service is either fully built or not built at all. The factory functions
/// only return a value once every one of the 12 tables exists, so no caller
/// can observe a partially populated dictionary.
///
/// ```rust, no_run
/// # use nutools_aeff::{AeffService, Flavor, IntType};
/// let ebins = vec![1.0, 2.0, 3.0, 5.0, 10.0];
/// let czbins = vec![-1.0, -0.5, 0.0, 0.5, 1.0];
///
/// let service = AeffService::from_simfile(&ebins, &czbins, "$NU_DATA/aeff_mc.json").unwrap();
/// let table = service.aeff().table(Flavor::Numu, IntType::CC);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AeffService {
    ebins: Vec<f64>,
    czbins: Vec<f64>,
    aeff_dict: AeffDict,
}

impl AeffService {
    /// Build the effective-area dictionary from a simulation file
    ///
    /// - `ebins` - energy bin edges, ascending, at least 2 entries
    /// - `czbins` - coszen bin edges, ascending, at least 2 entries
    /// - `path` - simulation file path, may contain `$VAR` placeholders
    ///
    /// Fails if the file cannot be opened or parsed, if any of the 12
    /// flavor/interaction groups is missing or misaligned, or if either axis
    /// has fewer than 2 edges.
    ///
    /// Bin edges must be strictly increasing. A zero-width bin is not
    /// rejected here but makes the geometric normalization singular, leaving
    /// non-finite values in the affected cells.
    pub fn from_simfile<P: AsRef<Path>>(ebins: &[f64], czbins: &[f64], path: P) -> Result<Self> {
        let simfile = read_simfile(path)?;

        // per-cell geometric normalization, with the coszen width converted
        // to a solid angle by integrating over the azimuth
        let ebin_sizes = ebins.widths();
        let czbin_sizes: Vec<f64> = czbins.widths().iter().map(|w| TAU * w).collect();

        let group_table = |flavor: Flavor, int_type: IntType| -> Result<AeffTable> {
            let sample = simfile.sample(flavor, int_type)?;
            sample.checked_len(&f!("{flavor}/{int_type}"))?;

            let mut hist = histogram2d_weighted(
                &sample.true_energy,
                &sample.true_coszen,
                &sample.weighted_aeff,
                ebins,
                czbins,
            )?;

            // divide by the bin sizes to convert the weighted counts to aeff
            for (cell, (esize, czsize)) in hist.iter_mut().zip(iproduct!(&ebin_sizes, &czbin_sizes))
            {
                *cell /= (esize * czsize).abs();
            }

            Ok(AeffTable::new(hist, ebin_sizes.len(), czbin_sizes.len()))
        };

        info!("Creating effective area dict...");
        let mut pairs = Vec::with_capacity(Flavor::ALL.len());

        for flavor in Flavor::ALL {
            debug!("Working on {flavor} effective areas");
            pairs.push([
                group_table(flavor, IntType::CC)?,
                group_table(flavor, IntType::NC)?,
            ]);
        }

        // one pair was pushed for each of the six flavors above
        let tables: [[AeffTable; 2]; 6] = pairs.try_into().expect("a table pair per flavor");

        Ok(Self {
            ebins: ebins.to_vec(),
            czbins: czbins.to_vec(),
            aeff_dict: AeffDict { tables },
        })
    }

    /// Build the effective-area dictionary from a settings block
    ///
    /// Identical to [AeffService::from_simfile] with the binning and file
    /// path taken from an [AeffConfig].
    pub fn from_config(config: &AeffConfig) -> Result<Self> {
        Self::from_simfile(&config.ebins, &config.czbins, &config.aeff_file)
    }

    /// The complete effective-area dictionary
    ///
    /// Pure accessor over the dictionary built at construction, so repeated
    /// calls always return the same tables.
    pub fn aeff(&self) -> &AeffDict {
        &self.aeff_dict
    }

    /// Energy bin edges the tables were built with
    pub fn ebins(&self) -> &[f64] {
        &self.ebins
    }

    /// Coszen bin edges the tables were built with
    pub fn czbins(&self) -> &[f64] {
        &self.czbins
    }
}
