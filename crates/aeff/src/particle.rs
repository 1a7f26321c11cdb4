//! Neutrino flavor and interaction type designators

// crate modules
use crate::error::Error;

// nutools modules
use nutools_utils::f;

/// The six neutrino flavors tracked by an oscillation analysis
///
/// Simulation files key their groups by the short tag, and [Flavor] implements
/// `TryFrom<&str>` for the tags and a few common aliases so the failing case
/// is handled.
///
/// ```rust
/// # use nutools_aeff::Flavor;
/// // From the group tag
/// assert_eq!(Flavor::NumuBar, Flavor::try_from("numu_bar").unwrap());
///
/// // From the PDG-style name
/// assert_eq!(Flavor::NumuBar, Flavor::try_from("nu_mu_bar").unwrap());
///
/// // From the full name
/// assert_eq!(Flavor::NumuBar, Flavor::try_from("muon antineutrino").unwrap());
/// ```
///
/// For reference, the full list of identifiers:
///
/// | Tag       | Alias      | Name                  |
/// | --------- | ---------- | --------------------- |
/// | nue       | nu_e       | electron neutrino     |
/// | nue_bar   | nu_e_bar   | electron antineutrino |
/// | numu      | nu_mu      | muon neutrino         |
/// | numu_bar  | nu_mu_bar  | muon antineutrino     |
/// | nutau     | nu_tau     | tau neutrino          |
/// | nutau_bar | nu_tau_bar | tau antineutrino      |
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flavor {
    Nue,
    NueBar,
    Numu,
    NumuBar,
    Nutau,
    NutauBar,
}

impl Flavor {
    /// Every flavor, in the canonical dictionary order
    pub const ALL: [Self; 6] = [
        Self::Nue,
        Self::NueBar,
        Self::Numu,
        Self::NumuBar,
        Self::Nutau,
        Self::NutauBar,
    ];

    /// Group tag used in simulation files
    ///
    /// ```rust
    /// # use nutools_aeff::Flavor;
    /// assert_eq!(Flavor::Nutau.tag(), "nutau");
    /// assert_eq!(Flavor::NueBar.tag(), "nue_bar");
    /// ```
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Nue => "nue",
            Self::NueBar => "nue_bar",
            Self::Numu => "numu",
            Self::NumuBar => "numu_bar",
            Self::Nutau => "nutau",
            Self::NutauBar => "nutau_bar",
        }
    }
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{}", self.tag())
    }
}

/// Convert from any valid tag, alias, or full name
impl TryFrom<&str> for Flavor {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.to_lowercase();

        match s.trim() {
            "nue" | "nu_e" | "electron neutrino" => Ok(Self::Nue),
            "nue_bar" | "nu_e_bar" | "electron antineutrino" => Ok(Self::NueBar),
            "numu" | "nu_mu" | "muon neutrino" => Ok(Self::Numu),
            "numu_bar" | "nu_mu_bar" | "muon antineutrino" => Ok(Self::NumuBar),
            "nutau" | "nu_tau" | "tau neutrino" => Ok(Self::Nutau),
            "nutau_bar" | "nu_tau_bar" | "tau antineutrino" => Ok(Self::NutauBar),
            _ => Err(Error::FailedToInferFlavor(f!("{s}"))),
        }
    }
}

/// Physics interaction classification of a simulated event
///
/// ```rust
/// # use nutools_aeff::IntType;
/// assert_eq!(IntType::CC, IntType::try_from("cc").unwrap());
/// assert_eq!(IntType::NC, IntType::try_from("neutral-current").unwrap());
/// assert!(IntType::try_from("elastic").is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntType {
    /// Charged-current interaction
    CC,
    /// Neutral-current interaction
    NC,
}

impl IntType {
    /// Both interaction types, in the canonical dictionary order
    pub const ALL: [Self; 2] = [Self::CC, Self::NC];

    /// Group tag used in simulation files
    pub fn tag(&self) -> &'static str {
        match self {
            Self::CC => "cc",
            Self::NC => "nc",
        }
    }
}

impl std::fmt::Display for IntType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{}", self.tag())
    }
}

/// Convert from any valid tag or full name
impl TryFrom<&str> for IntType {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.to_lowercase();

        match s.trim() {
            "cc" | "charged-current" | "charged current" => Ok(Self::CC),
            "nc" | "neutral-current" | "neutral current" => Ok(Self::NC),
            _ => Err(Error::FailedToInferIntType(f!("{s}"))),
        }
    }
}
