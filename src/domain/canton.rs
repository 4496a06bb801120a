//! Swiss canton codes
//!
//! geodienste.ch addresses every dataset by the two-letter canton code of
//! the publishing canton. The full set is fixed at the 26 Swiss cantons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::LandexError;

/// One of the 26 Swiss cantons, by official two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Canton {
    AG,
    AI,
    AR,
    BE,
    BL,
    BS,
    FR,
    GE,
    GL,
    GR,
    JU,
    LU,
    NE,
    NW,
    OW,
    SG,
    SH,
    SO,
    SZ,
    TG,
    TI,
    UR,
    VD,
    VS,
    ZG,
    ZH,
}

impl Canton {
    /// All cantons, in the order used for catalog queries.
    pub const ALL: [Canton; 26] = [
        Canton::AG,
        Canton::AI,
        Canton::AR,
        Canton::BE,
        Canton::BL,
        Canton::BS,
        Canton::FR,
        Canton::GE,
        Canton::GL,
        Canton::GR,
        Canton::JU,
        Canton::LU,
        Canton::NE,
        Canton::NW,
        Canton::OW,
        Canton::SG,
        Canton::SH,
        Canton::SO,
        Canton::SZ,
        Canton::TG,
        Canton::TI,
        Canton::UR,
        Canton::VD,
        Canton::VS,
        Canton::ZG,
        Canton::ZH,
    ];

    /// Returns the two-letter canton code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Canton::AG => "AG",
            Canton::AI => "AI",
            Canton::AR => "AR",
            Canton::BE => "BE",
            Canton::BL => "BL",
            Canton::BS => "BS",
            Canton::FR => "FR",
            Canton::GE => "GE",
            Canton::GL => "GL",
            Canton::GR => "GR",
            Canton::JU => "JU",
            Canton::LU => "LU",
            Canton::NE => "NE",
            Canton::NW => "NW",
            Canton::OW => "OW",
            Canton::SG => "SG",
            Canton::SH => "SH",
            Canton::SO => "SO",
            Canton::SZ => "SZ",
            Canton::TG => "TG",
            Canton::TI => "TI",
            Canton::UR => "UR",
            Canton::VD => "VD",
            Canton::VS => "VS",
            Canton::ZG => "ZG",
            Canton::ZH => "ZH",
        }
    }
}

impl fmt::Display for Canton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Canton {
    type Err = LandexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Canton::ALL
            .iter()
            .find(|canton| canton.as_str() == code)
            .copied()
            .ok_or_else(|| LandexError::Configuration(format!("Unknown canton code: {s}")))
    }
}
