//! Field types shared by several messages.
//!
//! Enumerated fields are newtypes over the raw value with associated
//! constants for the documented values. Reserved and undocumented values are
//! kept as-is, since transmitters in the wild do send them.

use std::fmt::Debug;

use crate::{
    DecodeError,
    EncodeError,
    layout::Field,
    payload::Payload,
};

macro_rules! code {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
        $(
            $(#[$constant_meta:meta])*
            $constant:ident = $value:literal,
        )*
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(pub u8);

        impl $name {
            $(
                $(#[$constant_meta])*
                pub const $constant: Self = Self($value);
            )*

            /// Returns the name of the value, if it is a documented one.
            pub fn name(&self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some(stringify!($constant)),)*
                    _ => None,
                }
            }

            pub fn as_u8(&self) -> u8 {
                self.0
            }
        }

        impl From<u8> for $name {
            fn from(value: u8) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.name() {
                    Some(name) => write!(f, "{}::{}", stringify!($name), name),
                    None => write!(f, "{}({})", stringify!($name), self.0),
                }
            }
        }
    };
}

code! {
    /// Message ID, the first 6 bits of every message.
    pub struct MessageType;
    POSITION_REPORT_CLASS_A = 1,
    POSITION_REPORT_CLASS_A_ASSIGNED_SCHEDULE = 2,
    POSITION_REPORT_CLASS_A_RESPONSE_TO_INTERROGATION = 3,
    BASE_STATION_REPORT = 4,
    STATIC_AND_VOYAGE_RELATED_DATA = 5,
    BINARY_ADDRESSED_MESSAGE = 6,
    BINARY_ACKNOWLEDGE = 7,
    BINARY_BROADCAST_MESSAGE = 8,
    STANDARD_SAR_AIRCRAFT_POSITION_REPORT = 9,
    UTC_AND_DATE_INQUIRY = 10,
    UTC_AND_DATE_RESPONSE = 11,
    ADDRESSED_SAFETY_RELATED_MESSAGE = 12,
    SAFETY_RELATED_ACKNOWLEDGEMENT = 13,
    SAFETY_RELATED_BROADCAST_MESSAGE = 14,
    INTERROGATION = 15,
    ASSIGNMENT_MODE_COMMAND = 16,
    DGNSS_BINARY_BROADCAST_MESSAGE = 17,
    STANDARD_CLASS_B_CS_POSITION_REPORT = 18,
    EXTENDED_CLASS_B_CS_POSITION_REPORT = 19,
    DATA_LINK_MANAGEMENT = 20,
    AID_TO_NAVIGATION_REPORT = 21,
    CHANNEL_MANAGEMENT = 22,
    GROUP_ASSIGNMENT_COMMAND = 23,
    STATIC_DATA_REPORT = 24,
    SINGLE_SLOT_BINARY_MESSAGE = 25,
    MULTIPLE_SLOT_BINARY_MESSAGE = 26,
    POSITION_REPORT_FOR_LONG_RANGE_APPLICATIONS = 27,
}

impl MessageType {
    pub fn is_known(&self) -> bool {
        self.name().is_some()
    }
}

code! {
    pub struct NavigationStatus;
    UNDER_WAY_USING_ENGINE = 0,
    AT_ANCHOR = 1,
    NOT_UNDER_COMMAND = 2,
    RESTRICTED_MANOEUVRABILITY = 3,
    CONSTRAINED_BY_DRAUGHT = 4,
    MOORED = 5,
    AGROUND = 6,
    ENGAGED_IN_FISHING = 7,
    UNDER_WAY_SAILING = 8,
    /// Reserved for high speed craft
    RESERVED_HSC = 9,
    /// Reserved for wing in ground craft
    RESERVED_WIG = 10,
    POWER_DRIVEN_VESSEL_TOWING_ASTERN = 11,
    POWER_DRIVEN_VESSEL_PUSHING_AHEAD = 12,
    RESERVED = 13,
    AIS_SART_ACTIVE = 14,
    NOT_DEFINED = 15,
}

code! {
    pub struct ManeuverIndicator;
    NOT_AVAILABLE = 0,
    NO_SPECIAL_MANEUVER = 1,
    SPECIAL_MANEUVER = 2,
}

code! {
    /// Type of electronic position fixing device (EPFD)
    pub struct PositionFixType;
    UNDEFINED = 0,
    GPS = 1,
    GLONASS = 2,
    COMBINED_GPS_GLONASS = 3,
    LORAN_C = 4,
    CHAYKA = 5,
    INTEGRATED_NAVIGATION_SYSTEM = 6,
    SURVEYED = 7,
    GALILEO = 8,
    INTERNAL_GNSS = 15,
}

code! {
    /// Type of ship and cargo
    ///
    /// The tens digit is the category, the ones digit the cargo type or a
    /// sub-category.
    pub struct ShipType;
    NOT_AVAILABLE = 0,
    WING_IN_GROUND = 20,
    WING_IN_GROUND_HAZARDOUS_CATEGORY_A = 21,
    WING_IN_GROUND_HAZARDOUS_CATEGORY_B = 22,
    WING_IN_GROUND_HAZARDOUS_CATEGORY_C = 23,
    WING_IN_GROUND_HAZARDOUS_CATEGORY_D = 24,
    WING_IN_GROUND_RESERVED_1 = 25,
    WING_IN_GROUND_RESERVED_2 = 26,
    WING_IN_GROUND_RESERVED_3 = 27,
    WING_IN_GROUND_RESERVED_4 = 28,
    WING_IN_GROUND_RESERVED_5 = 29,
    FISHING = 30,
    TOW = 31,
    /// Towing, length exceeds 200 m or breadth exceeds 25 m
    TOW_LARGE = 32,
    DREDGER = 33,
    DIVING_OPS = 34,
    MILITARY_OPS = 35,
    SAILING = 36,
    PLEASURE_CRAFT = 37,
    RESERVED_1 = 38,
    RESERVED_2 = 39,
    HIGH_SPEED_CRAFT = 40,
    HIGH_SPEED_CRAFT_HAZARDOUS_CATEGORY_A = 41,
    HIGH_SPEED_CRAFT_HAZARDOUS_CATEGORY_B = 42,
    HIGH_SPEED_CRAFT_HAZARDOUS_CATEGORY_C = 43,
    HIGH_SPEED_CRAFT_HAZARDOUS_CATEGORY_D = 44,
    HIGH_SPEED_CRAFT_RESERVED_1 = 45,
    HIGH_SPEED_CRAFT_RESERVED_2 = 46,
    HIGH_SPEED_CRAFT_RESERVED_3 = 47,
    HIGH_SPEED_CRAFT_RESERVED_4 = 48,
    HIGH_SPEED_CRAFT_NO_ADDITIONAL_INFORMATION = 49,
    PILOT_VESSEL = 50,
    SEARCH_AND_RESCUE_VESSEL = 51,
    TUG = 52,
    PORT_TENDER = 53,
    ANTI_POLLUTION_EQUIPMENT = 54,
    LAW_ENFORCEMENT = 55,
    SPARE_LOCAL_VESSEL_1 = 56,
    SPARE_LOCAL_VESSEL_2 = 57,
    MEDICAL_TRANSPORT = 58,
    NON_COMBATANT_SHIP = 59,
    PASSENGER = 60,
    PASSENGER_HAZARDOUS_CATEGORY_A = 61,
    PASSENGER_HAZARDOUS_CATEGORY_B = 62,
    PASSENGER_HAZARDOUS_CATEGORY_C = 63,
    PASSENGER_HAZARDOUS_CATEGORY_D = 64,
    PASSENGER_RESERVED_1 = 65,
    PASSENGER_RESERVED_2 = 66,
    PASSENGER_RESERVED_3 = 67,
    PASSENGER_RESERVED_4 = 68,
    PASSENGER_NO_ADDITIONAL_INFORMATION = 69,
    CARGO = 70,
    CARGO_HAZARDOUS_CATEGORY_A = 71,
    CARGO_HAZARDOUS_CATEGORY_B = 72,
    CARGO_HAZARDOUS_CATEGORY_C = 73,
    CARGO_HAZARDOUS_CATEGORY_D = 74,
    CARGO_RESERVED_1 = 75,
    CARGO_RESERVED_2 = 76,
    CARGO_RESERVED_3 = 77,
    CARGO_RESERVED_4 = 78,
    CARGO_NO_ADDITIONAL_INFORMATION = 79,
    TANKER = 80,
    TANKER_HAZARDOUS_CATEGORY_A = 81,
    TANKER_HAZARDOUS_CATEGORY_B = 82,
    TANKER_HAZARDOUS_CATEGORY_C = 83,
    TANKER_HAZARDOUS_CATEGORY_D = 84,
    TANKER_RESERVED_1 = 85,
    TANKER_RESERVED_2 = 86,
    TANKER_RESERVED_3 = 87,
    TANKER_RESERVED_4 = 88,
    TANKER_NO_ADDITIONAL_INFORMATION = 89,
    OTHER_TYPE = 90,
    OTHER_TYPE_HAZARDOUS_CATEGORY_A = 91,
    OTHER_TYPE_HAZARDOUS_CATEGORY_B = 92,
    OTHER_TYPE_HAZARDOUS_CATEGORY_C = 93,
    OTHER_TYPE_HAZARDOUS_CATEGORY_D = 94,
    OTHER_TYPE_RESERVED_1 = 95,
    OTHER_TYPE_RESERVED_2 = 96,
    OTHER_TYPE_RESERVED_3 = 97,
    OTHER_TYPE_RESERVED_4 = 98,
    OTHER_TYPE_NO_ADDITIONAL_INFORMATION = 99,
}

code! {
    pub struct AidToNavigationType;
    NOT_SPECIFIED = 0,
    REFERENCE_POINT = 1,
    RACON = 2,
    FIXED_STRUCTURE_OFF_SHORE = 3,
    SPARE = 4,
    LIGHT_WITHOUT_SECTORS = 5,
    LIGHT_WITH_SECTORS = 6,
    LEADING_LIGHT_FRONT = 7,
    LEADING_LIGHT_REAR = 8,
    BEACON_CARDINAL_NORTH = 9,
    BEACON_CARDINAL_EAST = 10,
    BEACON_CARDINAL_SOUTH = 11,
    BEACON_CARDINAL_WEST = 12,
    BEACON_PORT_HAND = 13,
    BEACON_STARBOARD_HAND = 14,
    BEACON_PREFERRED_CHANNEL_PORT_HAND = 15,
    BEACON_PREFERRED_CHANNEL_STARBOARD_HAND = 16,
    BEACON_ISOLATED_DANGER = 17,
    BEACON_SAFE_WATER = 18,
    BEACON_SPECIAL_MARK = 19,
    CARDINAL_MARK_NORTH = 20,
    CARDINAL_MARK_EAST = 21,
    CARDINAL_MARK_SOUTH = 22,
    CARDINAL_MARK_WEST = 23,
    PORT_HAND_MARK = 24,
    STARBOARD_HAND_MARK = 25,
    PREFERRED_CHANNEL_PORT_HAND = 26,
    PREFERRED_CHANNEL_STARBOARD_HAND = 27,
    ISOLATED_DANGER = 28,
    SAFE_WATER = 29,
    SPECIAL_MARK = 30,
    LIGHT_VESSEL = 31,
}

code! {
    /// Station types addressed by a group assignment command.
    pub struct StationType;
    ALL_TYPES_OF_MOBILES = 0,
    CLASS_A_MOBILE_STATIONS_ONLY = 1,
    ALL_CLASS_B_MOBILE_STATIONS = 2,
    SAR_AIRBORNE_MOBILE_STATION = 3,
    CLASS_B_SO_MOBILE_STATIONS_ONLY = 4,
    CLASS_B_CS_SHIPBORNE_MOBILE_STATION_ONLY = 5,
    INLAND_WATERWAYS = 6,
    BASE_STATION_COVERAGE_AREA = 10,
}

code! {
    pub struct TxRxMode;
    TX_A_TX_B_RX_A_RX_B = 0,
    TX_A_RX_A_RX_B = 1,
    TX_B_RX_A_RX_B = 2,
}

/// Class of the transmitting AIS transceiver.
///
/// This is not transmitted, but implied by the message type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransceiverType {
    ClassA,
    ClassB,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionAccuracy {
    /// Accuracy worse than 10 m
    #[default]
    Low,
    /// Accuracy better than 10 m, e.g. DGNSS
    High,
}

impl From<bool> for PositionAccuracy {
    fn from(value: bool) -> Self {
        if value { Self::High } else { Self::Low }
    }
}

impl From<PositionAccuracy> for bool {
    fn from(value: PositionAccuracy) -> Self {
        value == PositionAccuracy::High
    }
}

/// Receiver autonomous integrity monitoring
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Raim {
    #[default]
    NotInUse,
    InUse,
}

impl From<bool> for Raim {
    fn from(value: bool) -> Self {
        if value { Self::InUse } else { Self::NotInUse }
    }
}

impl From<Raim> for bool {
    fn from(value: Raim) -> Self {
        value == Raim::InUse
    }
}

/// Rate of turn, as transmitted.
///
/// The value is encoded non-linearly as `ROT_AIS = 4.733 * sqrt(ROT_sensor)`,
/// with `ROT_sensor` in degrees per minute, positive turning right. The raw
/// value is kept to make encoding lossless. Use
/// [`as_degrees_per_minute`][Self::as_degrees_per_minute] for the physical
/// value.
///
/// The "not available" value -128 is represented as `None` by the messages.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct RateOfTurn(pub i8);

impl RateOfTurn {
    /// Raw value signalling that no rate of turn is available.
    pub const NOT_AVAILABLE: i8 = -128;

    /// Turning right at more than 5 degrees per 30 s, no turn indicator
    /// available.
    pub const FAST_RIGHT: Self = Self(127);

    /// Turning left at more than 5 degrees per 30 s, no turn indicator
    /// available.
    pub const FAST_LEFT: Self = Self(-127);

    const FACTOR: f64 = 4.733;

    /// Converts the rate of turn to degrees per minute.
    ///
    /// Returns `None` for [`FAST_RIGHT`][Self::FAST_RIGHT] and
    /// [`FAST_LEFT`][Self::FAST_LEFT], which don't carry a rate.
    pub fn as_degrees_per_minute(&self) -> Option<f64> {
        match self.0 {
            -127 | 127 | Self::NOT_AVAILABLE => None,
            raw => {
                let rate = (f64::from(raw) / Self::FACTOR).powi(2);
                Some(if raw < 0 { -rate } else { rate })
            }
        }
    }

    /// Encodes a rate of turn in degrees per minute.
    ///
    /// Rates beyond what can be encoded saturate at +/-126, which corresponds
    /// to about 708 degrees per minute.
    pub fn from_degrees_per_minute(rate: f64) -> Self {
        let raw = (Self::FACTOR * rate.abs().sqrt()).round().min(126.0) as i8;
        if rate < 0.0 { Self(-raw) } else { Self(raw) }
    }
}

impl Debug for RateOfTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_degrees_per_minute() {
            Some(rate) => write!(f, "RateOfTurn({}, {rate:.1} deg/min)", self.0),
            None => write!(f, "RateOfTurn({})", self.0),
        }
    }
}

/// Dimensions of a ship relative to the reference point of its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Meters, 9 bits, 511 means 511 m or more
    pub to_bow: u16,
    /// Meters, 9 bits
    pub to_stern: u16,
    /// Meters, 6 bits, 63 means 63 m or more
    pub to_port: u8,
    /// Meters, 6 bits
    pub to_starboard: u8,
}

impl Dimensions {
    /// Number of bits occupied by the dimensions.
    pub const BITS: usize = 30;

    /// Fields of the dimensions, when they start at bit `start`.
    pub const fn fields(start: usize) -> [Field; 4] {
        [
            Field::new("dimension_to_bow", start, 9),
            Field::new("dimension_to_stern", start + 9, 9),
            Field::new("dimension_to_port", start + 18, 6),
            Field::new("dimension_to_starboard", start + 24, 6),
        ]
    }

    pub fn decode(payload: &Payload, fields: &[Field; 4]) -> Result<Self, DecodeError> {
        Ok(Self {
            to_bow: payload.read_u32(fields[0])? as u16,
            to_stern: payload.read_u32(fields[1])? as u16,
            to_port: payload.read_u32(fields[2])? as u8,
            to_starboard: payload.read_u32(fields[3])? as u8,
        })
    }

    pub fn encode(&self, payload: &mut Payload, fields: &[Field; 4]) -> Result<(), EncodeError> {
        payload.write_u32(fields[0], self.to_bow.into())?;
        payload.write_u32(fields[1], self.to_stern.into())?;
        payload.write_u32(fields[2], self.to_port.into())?;
        payload.write_u32(fields[3], self.to_starboard.into())?;
        Ok(())
    }

    /// Overall length in meters
    pub fn length(&self) -> u16 {
        self.to_bow + self.to_stern
    }

    /// Overall beam in meters
    pub fn beam(&self) -> u16 {
        u16::from(self.to_port) + u16::from(self.to_starboard)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::types::{
        MessageType,
        NavigationStatus,
        RateOfTurn,
        ShipType,
    };

    #[test]
    fn it_keeps_undocumented_values() {
        let status = NavigationStatus::from(13);
        assert_eq!(status, NavigationStatus::RESERVED);

        let ship_type = ShipType::from(7);
        assert_eq!(ship_type.name(), None);
        assert_eq!(u8::from(ship_type), 7);
        assert_eq!(format!("{ship_type:?}"), "ShipType(7)");
        assert_eq!(format!("{:?}", ShipType::PORT_TENDER), "ShipType::PORT_TENDER");

        assert!(MessageType::STATIC_DATA_REPORT.is_known());
        assert!(!MessageType(0).is_known());
        assert!(!MessageType(28).is_known());
    }

    #[test]
    fn it_converts_rate_of_turn() {
        assert_eq!(RateOfTurn(0).as_degrees_per_minute(), Some(0.0));
        assert_abs_diff_eq!(
            RateOfTurn(14).as_degrees_per_minute().unwrap(),
            8.749,
            epsilon = 0.001
        );
        assert_abs_diff_eq!(
            RateOfTurn(-14).as_degrees_per_minute().unwrap(),
            -8.749,
            epsilon = 0.001
        );
        assert_eq!(RateOfTurn::FAST_RIGHT.as_degrees_per_minute(), None);
        assert_eq!(RateOfTurn::FAST_LEFT.as_degrees_per_minute(), None);

        assert_eq!(RateOfTurn::from_degrees_per_minute(8.75), RateOfTurn(14));
        assert_eq!(RateOfTurn::from_degrees_per_minute(-8.75), RateOfTurn(-14));
        assert_eq!(RateOfTurn::from_degrees_per_minute(10_000.0), RateOfTurn(126));
    }
}
