//! Component kinds that can be dragged onto the board, and the lab variants.

use core::fmt;
use core::str::FromStr;

use crate::ClError;

/// Physical component a draggable represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ComponentKind {
    Battery,
    Resistor,
    Led,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 3] = [Self::Battery, Self::Resistor, Self::Led];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Battery => "battery",
            Self::Resistor => "resistor",
            Self::Led => "led",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = ClError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ClError::UnknownName {
                what: "component type",
                name: s.to_string(),
            })
    }
}

/// Which quantity a lab computes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Variant {
    /// Battery, resistor and LED in one loop; shows dissipated power.
    OhmPower,
    /// Two sources, three resistors, two meshes; shows the shared-branch current.
    MeshCurrent,
}

impl Variant {
    /// Parameter ids the evaluator reads, in evaluation order.
    pub fn required_parameters(self) -> &'static [&'static str] {
        match self {
            Self::OhmPower => &["v", "r"],
            Self::MeshCurrent => &["v1", "v2", "r1", "r2", "r3"],
        }
    }

    /// Decimal places of the result readout.
    pub fn decimals(self) -> usize {
        match self {
            Self::OhmPower => 2,
            Self::MeshCurrent => 4,
        }
    }

    /// Readout shown whenever there is no valid result.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::OhmPower => "0.00",
            Self::MeshCurrent => "0.000",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OhmPower => "ohm_power",
            Self::MeshCurrent => "mesh_current",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ClError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ohm" | "ohm_power" => Ok(Self::OhmPower),
            "mesh" | "mesh_current" => Ok(Self::MeshCurrent),
            other => Err(ClError::UnknownName {
                what: "lab variant",
                name: other.to_string(),
            }),
        }
    }
}
