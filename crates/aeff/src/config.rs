//! Construction settings for the effective-area service

// external crates
use serde::Deserialize;

/// Settings block selecting the binning and simulation dataset
///
/// The fields are exactly the options [AeffService](crate::AeffService)
/// recognises. Unknown fields are rejected when deserializing, so a typo in
/// an analysis settings file fails loudly instead of being ignored.
///
/// ```rust
/// # use nutools_aeff::AeffConfig;
/// let config: AeffConfig = serde_json::from_str(
///     r#"{
///         "ebins": [1.0, 2.0, 3.0],
///         "czbins": [-1.0, 0.0, 1.0],
///         "aeff_file": "$NU_DATA/aeff_mc.json"
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.ebins.len(), 3);
///
/// // unrecognised options are an error, not silently dropped
/// assert!(serde_json::from_str::<AeffConfig>(r#"{"ebins": [], "czbins": [], "aeff_file": "", "oversample": 5}"#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AeffConfig {
    /// Energy bin edges \[GeV\]
    pub ebins: Vec<f64>,
    /// Cosine-zenith bin edges
    pub czbins: Vec<f64>,
    /// Path to the simulation file, may contain `$VAR` placeholders
    pub aeff_file: String,
}
