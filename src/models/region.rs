use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CovidError, Result};

// ---------------------------------------------------------------------------
// Region — Ontario or one of its public health units
// ---------------------------------------------------------------------------

/// A public-health jurisdiction accepted as the `loc` query parameter.
///
/// [`Region::Ontario`] is the province-wide aggregate (`"ON"`); every other
/// variant is a public health unit identified by its numeric HR_UID.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    #[default]
    Ontario,
    Algoma,
    Brant,
    ChathamKent,
    Durham,
    Eastern,
    GreyBruce,
    HaldimandNorfolk,
    HaliburtonKawarthaPineRidge,
    Halton,
    Hamilton,
    HastingsPrinceEdward,
    HuronPerth,
    Kingston,
    Lambton,
    LeedsGrenvilleLanark,
    MiddlesexLondon,
    Niagara,
    NorthBayParrySound,
    Northwestern,
    Ottawa,
    Peel,
    Peterborough,
    Porcupine,
    Renfrew,
    SimcoeMuskoka,
    Southwestern,
    Sudbury,
    ThunderBay,
    Timiskaming,
    Toronto,
    Waterloo,
    WellingtonDufferinGuelph,
    WindsorEssex,
    York,
}

/// `(region, identifier, display name)` in declaration order of [`Region`].
const REGION_TABLE: [(Region, &str, &str); 35] = [
    (Region::Ontario, "ON", "Ontario"),
    (Region::Algoma, "3526", "Algoma"),
    (Region::Brant, "3527", "Brant"),
    (Region::ChathamKent, "3540", "Chatham-Kent"),
    (Region::Durham, "3530", "Durham"),
    (Region::Eastern, "3558", "Eastern Ontario"),
    (Region::GreyBruce, "3533", "Grey Bruce"),
    (Region::HaldimandNorfolk, "3534", "Haldimand-Norfolk"),
    (
        Region::HaliburtonKawarthaPineRidge,
        "3535",
        "Haliburton Kawartha Pineridge",
    ),
    (Region::Halton, "3536", "Halton"),
    (Region::Hamilton, "3537", "Hamilton"),
    (Region::HastingsPrinceEdward, "3538", "Hastings Prince Edward"),
    (Region::HuronPerth, "3539", "Huron Perth"),
    (
        Region::Kingston,
        "3541",
        "Kingston Frontenac Lennox & Addington",
    ),
    (Region::Lambton, "3542", "Lambton"),
    (
        Region::LeedsGrenvilleLanark,
        "3543",
        "Leeds Grenville and Lanark",
    ),
    (Region::MiddlesexLondon, "3544", "Middlesex-London"),
    (Region::Niagara, "3546", "Niagara"),
    (Region::NorthBayParrySound, "3547", "North Bay Parry Sound"),
    (Region::Northwestern, "3549", "Northwestern"),
    (Region::Ottawa, "3551", "Ottawa"),
    (Region::Peel, "3553", "Peel"),
    (Region::Peterborough, "3555", "Peterborough"),
    (Region::Porcupine, "3556", "Porcupine"),
    (Region::Renfrew, "3557", "Renfrew"),
    (Region::SimcoeMuskoka, "3560", "Simcoe Muskoka"),
    (Region::Southwestern, "3575", "Southwestern"),
    (Region::Sudbury, "3561", "Sudbury"),
    (Region::ThunderBay, "3562", "Thunder Bay"),
    (Region::Timiskaming, "3563", "Timiskaming"),
    (Region::Toronto, "3595", "Toronto"),
    (Region::Waterloo, "3565", "Waterloo"),
    (
        Region::WellingtonDufferinGuelph,
        "3566",
        "Wellington Dufferin Guelph",
    ),
    (Region::WindsorEssex, "3568", "Windsor-Essex"),
    (Region::York, "3570", "York"),
];

impl Region {
    /// Every region, province-wide aggregate first.
    pub const ALL: [Region; 35] = {
        let mut all = [Region::Ontario; 35];
        let mut i = 0;
        while i < REGION_TABLE.len() {
            all[i] = REGION_TABLE[i].0;
            i += 1;
        }
        all
    };

    /// The code sent as the `loc` query parameter.
    pub fn identifier(self) -> &'static str {
        REGION_TABLE[self as usize].1
    }

    /// Human-readable name for pickers and headings.
    pub fn display_name(self) -> &'static str {
        REGION_TABLE[self as usize].2
    }

    /// Whether this is the province-wide aggregate, whose records carry the
    /// vaccination, testing and recovery fields.
    pub fn is_province_wide(self) -> bool {
        self == Region::Ontario
    }

    /// Look up a region by its API identifier (e.g. `"ON"`, `"3595"`).
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    pub fn from_identifier(identifier: &str) -> Result<Region> {
        let wanted = identifier.trim();
        REGION_TABLE
            .iter()
            .find(|(_, id, _)| id.eq_ignore_ascii_case(wanted))
            .map(|(region, _, _)| *region)
            .ok_or_else(|| CovidError::InvalidArgument(format!("Unknown region: {}", identifier)))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Region {
    type Err = CovidError;

    fn from_str(s: &str) -> Result<Self> {
        Region::from_identifier(s)
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.identifier())
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Region::from_identifier(&raw).map_err(serde::de::Error::custom)
    }
}
