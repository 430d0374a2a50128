//! Identifier types shared by the aisbee crates.

use std::{
    fmt::{
        Debug,
        Display,
    },
    str::FromStr,
};

/// Maritime Mobile Service Identity
///
/// AIS transmits the MMSI as a 30 bit unsigned integer. Semantically it is a 9
/// digit number whose leading digits encode the kind of station (see
/// [`MmsiKind`]) and the country (maritime identification digits, MID).
///
/// - [ITU-R M.585][1]
///
/// [1]: https://www.itu.int/rec/R-REC-M.585/en
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Mmsi(u32);

impl Mmsi {
    /// Number of bits an MMSI occupies in an AIS message.
    pub const BITS: usize = 30;

    pub const fn from_u32_unchecked(mmsi: u32) -> Self {
        Self(mmsi)
    }

    pub fn from_u32(mmsi: u32) -> Option<Self> {
        (mmsi < 1 << Self::BITS).then(|| Self::from_u32_unchecked(mmsi))
    }

    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Classifies the MMSI by its leading digits.
    pub fn kind(&self) -> MmsiKind {
        let mmsi = self.0;
        if mmsi >= 1_000_000_000 {
            return MmsiKind::Unknown;
        }

        let digits = |n: u32| mmsi / 10u32.pow(9 - n);

        match digits(1) {
            0 => {
                if digits(2) == 0 {
                    MmsiKind::BaseStation
                }
                else {
                    MmsiKind::GroupShipStation
                }
            }
            1 => {
                if digits(3) == 111 {
                    MmsiKind::SarAircraft
                }
                else {
                    MmsiKind::Unknown
                }
            }
            2..=7 => MmsiKind::ShipStation,
            8 => MmsiKind::DiverRadio,
            _ => {
                match digits(3) {
                    970 => MmsiKind::AisSart,
                    972 => MmsiKind::ManOverboard,
                    974 => MmsiKind::Epirb,
                    _ => {
                        match digits(2) {
                            98 => MmsiKind::AuxiliaryCraft,
                            99 => MmsiKind::AidToNavigation,
                            _ => MmsiKind::Unknown,
                        }
                    }
                }
            }
        }
    }

    /// Maritime identification digits, if the kind of MMSI carries them.
    pub fn mid(&self) -> Option<u16> {
        let mmsi = self.0;
        // position of the MID counted in digits from the left
        let skip = match self.kind() {
            MmsiKind::ShipStation => 0,
            MmsiKind::GroupShipStation
            | MmsiKind::DiverRadio => 1,
            MmsiKind::BaseStation
            | MmsiKind::AuxiliaryCraft
            | MmsiKind::AidToNavigation => 2,
            MmsiKind::SarAircraft => 3,
            MmsiKind::AisSart
            | MmsiKind::ManOverboard
            | MmsiKind::Epirb
            | MmsiKind::Unknown => return None,
        };
        Some(((mmsi / 10u32.pow(6 - skip)) % 1000) as u16)
    }

    /// Auxiliary craft (`98MIDXXXX`) don't report their own dimensions, but
    /// their mothership's MMSI.
    pub fn is_auxiliary_craft(&self) -> bool {
        self.kind() == MmsiKind::AuxiliaryCraft
    }
}

impl Display for Mmsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:09}", self.0)
    }
}

impl Debug for Mmsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mmsi({self})")
    }
}

impl FromStr for Mmsi {
    type Err = MmsiFromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || {
            MmsiFromStrError {
                input: s.to_owned(),
            }
        };
        let mmsi = s.parse::<u32>().map_err(|_| err())?;
        Self::from_u32(mmsi).ok_or_else(err)
    }
}

#[derive(Clone, Debug, thiserror::Error)]
#[error("Invalid MMSI: {input}")]
pub struct MmsiFromStrError {
    pub input: String,
}

impl From<Mmsi> for u32 {
    fn from(value: Mmsi) -> Self {
        value.0
    }
}

impl TryFrom<u32> for Mmsi {
    type Error = MmsiOutOfRange;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_u32(value).ok_or(MmsiOutOfRange { value })
    }
}

#[derive(Clone, Copy, Debug, thiserror::Error)]
#[error("MMSI doesn't fit into 30 bits: {value}")]
pub struct MmsiOutOfRange {
    pub value: u32,
}

/// Kind of station, as identified by the leading digits of its [`Mmsi`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MmsiKind {
    /// `MIDXXXXXX`
    ShipStation,
    /// `0MIDXXXXX`
    GroupShipStation,
    /// `00MIDXXXX`, coast and base stations
    BaseStation,
    /// `111MIDXXX`
    SarAircraft,
    /// `8MIDXXXXX`, handheld VHF transceivers
    DiverRadio,
    /// `98MIDXXXX`, craft associated with a parent ship
    AuxiliaryCraft,
    /// `99MIDXXXX`
    AidToNavigation,
    /// `970XXYYYY`
    AisSart,
    /// `972XXYYYY`
    ManOverboard,
    /// `974XXYYYY`
    Epirb,
    Unknown,
}
