//! Position reports

use crate::{
    DecodeError,
    EncodeError,
    layout::{
        Field,
        Layout,
        fields,
    },
    message::Header,
    payload::{
        CoordinateResolution,
        Payload,
    },
    types::{
        Dimensions,
        ManeuverIndicator,
        MessageType,
        NavigationStatus,
        PositionAccuracy,
        PositionFixType,
        Raim,
        RateOfTurn,
        ShipType,
    },
};

/// Message types 1, 2 and 3
///
/// Scheduled (1), assigned scheduled (2) and special (3, response to
/// interrogation) position reports of class A transceivers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionReportClassA {
    pub header: Header,
    pub navigation_status: NavigationStatus,
    /// `None` if not available
    pub rate_of_turn: Option<RateOfTurn>,
    /// Knots. 102.3 means "not available", 102.2 means 102.2 knots or more.
    pub speed_over_ground: f64,
    pub position_accuracy: PositionAccuracy,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    /// Degrees. 360 means "not available".
    pub course_over_ground: f64,
    pub true_heading: Option<u16>,
    /// Second of the UTC minute the report was generated. 60 and above mean
    /// "not available" or that the positioning system is in a special mode.
    pub timestamp_second: u8,
    pub maneuver_indicator: ManeuverIndicator,
    pub spare: u8,
    pub raim: Raim,
    /// SOTDMA or ITDMA communication state
    pub radio_status: u32,
}

impl PositionReportClassA {
    pub const NAVIGATION_STATUS: Field = Field::new("navigation_status", 38, 4);
    pub const RATE_OF_TURN: Field = Field::new("rate_of_turn", 42, 8);
    pub const SPEED_OVER_GROUND: Field = Field::new("speed_over_ground", 50, 10);
    pub const POSITION_ACCURACY: Field = Field::new("position_accuracy", 60, 1);
    pub const LONGITUDE: Field = Field::new("longitude", 61, 28);
    pub const LATITUDE: Field = Field::new("latitude", 89, 27);
    pub const COURSE_OVER_GROUND: Field = Field::new("course_over_ground", 116, 12);
    pub const TRUE_HEADING: Field = Field::new("true_heading", 128, 9);
    pub const TIMESTAMP_SECOND: Field = Field::new("timestamp_second", 137, 6);
    pub const MANEUVER_INDICATOR: Field = Field::new("maneuver_indicator", 143, 2);
    pub const SPARE: Field = Field::new("spare", 145, 3);
    pub const RAIM: Field = Field::new("raim", 148, 1);
    pub const RADIO_STATUS: Field = Field::new("radio_status", 149, 19);

    pub const MESSAGE_TYPES: &[MessageType] = &[
        MessageType::POSITION_REPORT_CLASS_A,
        MessageType::POSITION_REPORT_CLASS_A_ASSIGNED_SCHEDULE,
        MessageType::POSITION_REPORT_CLASS_A_RESPONSE_TO_INTERROGATION,
    ];

    pub const LAYOUT: Layout = Layout {
        name: "PositionReportClassA",
        fields: fields![
            Self::NAVIGATION_STATUS,
            Self::RATE_OF_TURN,
            Self::SPEED_OVER_GROUND,
            Self::POSITION_ACCURACY,
            Self::LONGITUDE,
            Self::LATITUDE,
            Self::COURSE_OVER_GROUND,
            Self::TRUE_HEADING,
            Self::TIMESTAMP_SECOND,
            Self::MANEUVER_INDICATOR,
            Self::SPARE,
            Self::RAIM,
            Self::RADIO_STATUS,
        ],
        max_bits: 168,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            header: Header::decode(payload)?,
            navigation_status: payload.read_enum(Self::NAVIGATION_STATUS)?,
            rate_of_turn: payload.read_rate_of_turn(Self::RATE_OF_TURN)?,
            speed_over_ground: payload.read_speed_over_ground(Self::SPEED_OVER_GROUND)?,
            position_accuracy: payload.read_bool(Self::POSITION_ACCURACY)?.into(),
            longitude: payload
                .read_longitude(Self::LONGITUDE, CoordinateResolution::TenThousandthMinute)?,
            latitude: payload
                .read_latitude(Self::LATITUDE, CoordinateResolution::TenThousandthMinute)?,
            course_over_ground: payload.read_course_over_ground(Self::COURSE_OVER_GROUND)?,
            true_heading: payload.read_true_heading(Self::TRUE_HEADING)?,
            timestamp_second: payload.read_u32(Self::TIMESTAMP_SECOND)? as u8,
            maneuver_indicator: payload.read_enum(Self::MANEUVER_INDICATOR)?,
            spare: payload.read_u32(Self::SPARE)? as u8,
            raim: payload.read_bool(Self::RAIM)?.into(),
            radio_status: payload.read_u32(Self::RADIO_STATUS)?,
        })
    }

    pub fn encode(&self, payload: &mut Payload) -> Result<(), EncodeError> {
        self.header.encode(payload, Self::MESSAGE_TYPES)?;
        payload.write_enum(Self::NAVIGATION_STATUS, self.navigation_status)?;
        payload.write_rate_of_turn(Self::RATE_OF_TURN, self.rate_of_turn)?;
        payload.write_speed_over_ground(Self::SPEED_OVER_GROUND, self.speed_over_ground)?;
        payload.write_bool(Self::POSITION_ACCURACY, self.position_accuracy.into())?;
        payload.write_longitude(
            Self::LONGITUDE,
            CoordinateResolution::TenThousandthMinute,
            self.longitude,
        )?;
        payload.write_latitude(
            Self::LATITUDE,
            CoordinateResolution::TenThousandthMinute,
            self.latitude,
        )?;
        payload.write_course_over_ground(Self::COURSE_OVER_GROUND, self.course_over_ground)?;
        payload.write_true_heading(Self::TRUE_HEADING, self.true_heading)?;
        payload.write_u32(Self::TIMESTAMP_SECOND, self.timestamp_second.into())?;
        payload.write_enum(Self::MANEUVER_INDICATOR, self.maneuver_indicator)?;
        payload.write_u32(Self::SPARE, self.spare.into())?;
        payload.write_bool(Self::RAIM, self.raim.into())?;
        payload.write_u32(Self::RADIO_STATUS, self.radio_status)?;
        Ok(())
    }
}

/// Message type 9
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardSarAircraftPositionReport {
    pub header: Header,
    /// Meters. 4095 means "not available", 4094 means 4094 m or higher.
    pub altitude: u16,
    /// Knots, in steps of 1 knot. 1023 means "not available".
    pub speed_over_ground: u16,
    pub position_accuracy: PositionAccuracy,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub course_over_ground: f64,
    pub timestamp_second: u8,
    pub regional_reserved: u8,
    pub data_terminal_ready: bool,
    pub spare: u8,
    pub assigned_mode: bool,
    pub raim: Raim,
    /// Communication state, including the selector flag
    pub radio_status: u32,
}

impl StandardSarAircraftPositionReport {
    pub const ALTITUDE: Field = Field::new("altitude", 38, 12);
    pub const SPEED_OVER_GROUND: Field = Field::new("speed_over_ground", 50, 10);
    pub const POSITION_ACCURACY: Field = Field::new("position_accuracy", 60, 1);
    pub const LONGITUDE: Field = Field::new("longitude", 61, 28);
    pub const LATITUDE: Field = Field::new("latitude", 89, 27);
    pub const COURSE_OVER_GROUND: Field = Field::new("course_over_ground", 116, 12);
    pub const TIMESTAMP_SECOND: Field = Field::new("timestamp_second", 128, 6);
    pub const REGIONAL_RESERVED: Field = Field::new("regional_reserved", 134, 8);
    pub const DATA_TERMINAL: Field = Field::new("data_terminal", 142, 1);
    pub const SPARE: Field = Field::new("spare", 143, 3);
    pub const ASSIGNED_MODE: Field = Field::new("assigned_mode", 146, 1);
    pub const RAIM: Field = Field::new("raim", 147, 1);
    pub const RADIO_STATUS: Field = Field::new("radio_status", 148, 20);

    pub const LAYOUT: Layout = Layout {
        name: "StandardSarAircraftPositionReport",
        fields: fields![
            Self::ALTITUDE,
            Self::SPEED_OVER_GROUND,
            Self::POSITION_ACCURACY,
            Self::LONGITUDE,
            Self::LATITUDE,
            Self::COURSE_OVER_GROUND,
            Self::TIMESTAMP_SECOND,
            Self::REGIONAL_RESERVED,
            Self::DATA_TERMINAL,
            Self::SPARE,
            Self::ASSIGNED_MODE,
            Self::RAIM,
            Self::RADIO_STATUS,
        ],
        max_bits: 168,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            header: Header::decode(payload)?,
            altitude: payload.read_u32(Self::ALTITUDE)? as u16,
            speed_over_ground: payload.read_u32(Self::SPEED_OVER_GROUND)? as u16,
            position_accuracy: payload.read_bool(Self::POSITION_ACCURACY)?.into(),
            longitude: payload
                .read_longitude(Self::LONGITUDE, CoordinateResolution::TenThousandthMinute)?,
            latitude: payload
                .read_latitude(Self::LATITUDE, CoordinateResolution::TenThousandthMinute)?,
            course_over_ground: payload.read_course_over_ground(Self::COURSE_OVER_GROUND)?,
            timestamp_second: payload.read_u32(Self::TIMESTAMP_SECOND)? as u8,
            regional_reserved: payload.read_u32(Self::REGIONAL_RESERVED)? as u8,
            // 0 = available
            data_terminal_ready: !payload.read_bool(Self::DATA_TERMINAL)?,
            spare: payload.read_u32(Self::SPARE)? as u8,
            assigned_mode: payload.read_bool(Self::ASSIGNED_MODE)?,
            raim: payload.read_bool(Self::RAIM)?.into(),
            radio_status: payload.read_u32(Self::RADIO_STATUS)?,
        })
    }
}

/// Message type 18
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardClassBCsPositionReport {
    pub header: Header,
    pub reserved: u8,
    pub speed_over_ground: f64,
    pub position_accuracy: PositionAccuracy,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub course_over_ground: f64,
    pub true_heading: Option<u16>,
    pub timestamp_second: u8,
    pub regional_reserved: u8,
    /// Carrier sense unit. `false` means SOTDMA unit.
    pub cs_unit: bool,
    /// Unit has a display for message 12 and 14
    pub display: bool,
    /// Unit is attached to a VHF radio with DSC capability
    pub dsc: bool,
    /// Unit can operate over the whole marine band
    pub band: bool,
    /// Unit can accept channel assignments via message 22
    pub message_22: bool,
    pub assigned_mode: bool,
    pub raim: Raim,
    /// Communication state, including the selector flag
    pub radio_status: u32,
}

impl StandardClassBCsPositionReport {
    pub const RESERVED: Field = Field::new("reserved", 38, 8);
    pub const SPEED_OVER_GROUND: Field = Field::new("speed_over_ground", 46, 10);
    pub const POSITION_ACCURACY: Field = Field::new("position_accuracy", 56, 1);
    pub const LONGITUDE: Field = Field::new("longitude", 57, 28);
    pub const LATITUDE: Field = Field::new("latitude", 85, 27);
    pub const COURSE_OVER_GROUND: Field = Field::new("course_over_ground", 112, 12);
    pub const TRUE_HEADING: Field = Field::new("true_heading", 124, 9);
    pub const TIMESTAMP_SECOND: Field = Field::new("timestamp_second", 133, 6);
    pub const REGIONAL_RESERVED: Field = Field::new("regional_reserved", 139, 2);
    pub const CS_UNIT: Field = Field::new("cs_unit", 141, 1);
    pub const DISPLAY: Field = Field::new("display", 142, 1);
    pub const DSC: Field = Field::new("dsc", 143, 1);
    pub const BAND: Field = Field::new("band", 144, 1);
    pub const MESSAGE_22: Field = Field::new("message_22", 145, 1);
    pub const ASSIGNED_MODE: Field = Field::new("assigned_mode", 146, 1);
    pub const RAIM: Field = Field::new("raim", 147, 1);
    pub const RADIO_STATUS: Field = Field::new("radio_status", 148, 20);

    pub const LAYOUT: Layout = Layout {
        name: "StandardClassBCsPositionReport",
        fields: fields![
            Self::RESERVED,
            Self::SPEED_OVER_GROUND,
            Self::POSITION_ACCURACY,
            Self::LONGITUDE,
            Self::LATITUDE,
            Self::COURSE_OVER_GROUND,
            Self::TRUE_HEADING,
            Self::TIMESTAMP_SECOND,
            Self::REGIONAL_RESERVED,
            Self::CS_UNIT,
            Self::DISPLAY,
            Self::DSC,
            Self::BAND,
            Self::MESSAGE_22,
            Self::ASSIGNED_MODE,
            Self::RAIM,
            Self::RADIO_STATUS,
        ],
        max_bits: 168,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            header: Header::decode(payload)?,
            reserved: payload.read_u32(Self::RESERVED)? as u8,
            speed_over_ground: payload.read_speed_over_ground(Self::SPEED_OVER_GROUND)?,
            position_accuracy: payload.read_bool(Self::POSITION_ACCURACY)?.into(),
            longitude: payload
                .read_longitude(Self::LONGITUDE, CoordinateResolution::TenThousandthMinute)?,
            latitude: payload
                .read_latitude(Self::LATITUDE, CoordinateResolution::TenThousandthMinute)?,
            course_over_ground: payload.read_course_over_ground(Self::COURSE_OVER_GROUND)?,
            true_heading: payload.read_true_heading(Self::TRUE_HEADING)?,
            timestamp_second: payload.read_u32(Self::TIMESTAMP_SECOND)? as u8,
            regional_reserved: payload.read_u32(Self::REGIONAL_RESERVED)? as u8,
            cs_unit: payload.read_bool(Self::CS_UNIT)?,
            display: payload.read_bool(Self::DISPLAY)?,
            dsc: payload.read_bool(Self::DSC)?,
            band: payload.read_bool(Self::BAND)?,
            message_22: payload.read_bool(Self::MESSAGE_22)?,
            assigned_mode: payload.read_bool(Self::ASSIGNED_MODE)?,
            raim: payload.read_bool(Self::RAIM)?.into(),
            radio_status: payload.read_u32(Self::RADIO_STATUS)?,
        })
    }

    pub fn encode(&self, payload: &mut Payload) -> Result<(), EncodeError> {
        self.header
            .encode(payload, &[MessageType::STANDARD_CLASS_B_CS_POSITION_REPORT])?;
        payload.write_u32(Self::RESERVED, self.reserved.into())?;
        payload.write_speed_over_ground(Self::SPEED_OVER_GROUND, self.speed_over_ground)?;
        payload.write_bool(Self::POSITION_ACCURACY, self.position_accuracy.into())?;
        payload.write_longitude(
            Self::LONGITUDE,
            CoordinateResolution::TenThousandthMinute,
            self.longitude,
        )?;
        payload.write_latitude(
            Self::LATITUDE,
            CoordinateResolution::TenThousandthMinute,
            self.latitude,
        )?;
        payload.write_course_over_ground(Self::COURSE_OVER_GROUND, self.course_over_ground)?;
        payload.write_true_heading(Self::TRUE_HEADING, self.true_heading)?;
        payload.write_u32(Self::TIMESTAMP_SECOND, self.timestamp_second.into())?;
        payload.write_u32(Self::REGIONAL_RESERVED, self.regional_reserved.into())?;
        payload.write_bool(Self::CS_UNIT, self.cs_unit)?;
        payload.write_bool(Self::DISPLAY, self.display)?;
        payload.write_bool(Self::DSC, self.dsc)?;
        payload.write_bool(Self::BAND, self.band)?;
        payload.write_bool(Self::MESSAGE_22, self.message_22)?;
        payload.write_bool(Self::ASSIGNED_MODE, self.assigned_mode)?;
        payload.write_bool(Self::RAIM, self.raim.into())?;
        payload.write_u32(Self::RADIO_STATUS, self.radio_status)?;
        Ok(())
    }
}

/// Message type 19
///
/// Legacy class B report that combines the position with the static data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtendedClassBCsPositionReport {
    pub header: Header,
    pub reserved: u8,
    pub speed_over_ground: f64,
    pub position_accuracy: PositionAccuracy,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub course_over_ground: f64,
    pub true_heading: Option<u16>,
    pub timestamp_second: u8,
    pub regional_reserved: u8,
    pub ship_name: String,
    pub ship_type: ShipType,
    pub dimensions: Dimensions,
    pub position_fix_type: PositionFixType,
    pub raim: Raim,
    pub data_terminal_ready: bool,
    pub assigned_mode: bool,
    pub spare: u8,
}

impl ExtendedClassBCsPositionReport {
    pub const RESERVED: Field = Field::new("reserved", 38, 8);
    pub const SPEED_OVER_GROUND: Field = Field::new("speed_over_ground", 46, 10);
    pub const POSITION_ACCURACY: Field = Field::new("position_accuracy", 56, 1);
    pub const LONGITUDE: Field = Field::new("longitude", 57, 28);
    pub const LATITUDE: Field = Field::new("latitude", 85, 27);
    pub const COURSE_OVER_GROUND: Field = Field::new("course_over_ground", 112, 12);
    pub const TRUE_HEADING: Field = Field::new("true_heading", 124, 9);
    pub const TIMESTAMP_SECOND: Field = Field::new("timestamp_second", 133, 6);
    pub const REGIONAL_RESERVED: Field = Field::new("regional_reserved", 139, 4);
    pub const SHIP_NAME: Field = Field::new("ship_name", 143, 120);
    pub const SHIP_TYPE: Field = Field::new("ship_type", 263, 8);
    pub const DIMENSIONS: [Field; 4] = Dimensions::fields(271);
    pub const POSITION_FIX_TYPE: Field = Field::new("position_fix_type", 301, 4);
    pub const RAIM: Field = Field::new("raim", 305, 1);
    pub const DATA_TERMINAL: Field = Field::new("data_terminal", 306, 1);
    pub const ASSIGNED_MODE: Field = Field::new("assigned_mode", 307, 1);
    pub const SPARE: Field = Field::new("spare", 308, 4);

    pub const LAYOUT: Layout = Layout {
        name: "ExtendedClassBCsPositionReport",
        fields: fields![
            Self::RESERVED,
            Self::SPEED_OVER_GROUND,
            Self::POSITION_ACCURACY,
            Self::LONGITUDE,
            Self::LATITUDE,
            Self::COURSE_OVER_GROUND,
            Self::TRUE_HEADING,
            Self::TIMESTAMP_SECOND,
            Self::REGIONAL_RESERVED,
            Self::SHIP_NAME,
            Self::SHIP_TYPE,
            Self::DIMENSIONS[0],
            Self::DIMENSIONS[1],
            Self::DIMENSIONS[2],
            Self::DIMENSIONS[3],
            Self::POSITION_FIX_TYPE,
            Self::RAIM,
            Self::DATA_TERMINAL,
            Self::ASSIGNED_MODE,
            Self::SPARE,
        ],
        max_bits: 312,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            header: Header::decode(payload)?,
            reserved: payload.read_u32(Self::RESERVED)? as u8,
            speed_over_ground: payload.read_speed_over_ground(Self::SPEED_OVER_GROUND)?,
            position_accuracy: payload.read_bool(Self::POSITION_ACCURACY)?.into(),
            longitude: payload
                .read_longitude(Self::LONGITUDE, CoordinateResolution::TenThousandthMinute)?,
            latitude: payload
                .read_latitude(Self::LATITUDE, CoordinateResolution::TenThousandthMinute)?,
            course_over_ground: payload.read_course_over_ground(Self::COURSE_OVER_GROUND)?,
            true_heading: payload.read_true_heading(Self::TRUE_HEADING)?,
            timestamp_second: payload.read_u32(Self::TIMESTAMP_SECOND)? as u8,
            regional_reserved: payload.read_u32(Self::REGIONAL_RESERVED)? as u8,
            ship_name: payload.read_string(Self::SHIP_NAME)?,
            ship_type: payload.read_enum(Self::SHIP_TYPE)?,
            dimensions: Dimensions::decode(payload, &Self::DIMENSIONS)?,
            position_fix_type: payload.read_enum(Self::POSITION_FIX_TYPE)?,
            raim: payload.read_bool(Self::RAIM)?.into(),
            data_terminal_ready: !payload.read_bool(Self::DATA_TERMINAL)?,
            assigned_mode: payload.read_bool(Self::ASSIGNED_MODE)?,
            spare: payload.read_u32(Self::SPARE)? as u8,
        })
    }
}

/// Message type 27
///
/// Compact position report for reception by satellites.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionReportForLongRangeApplications {
    pub header: Header,
    pub position_accuracy: PositionAccuracy,
    pub raim: Raim,
    pub navigation_status: NavigationStatus,
    /// 1/10 minute resolution
    pub longitude: Option<f64>,
    /// 1/10 minute resolution
    pub latitude: Option<f64>,
    /// Knots, in steps of 1 knot. 63 means "not available".
    pub speed_over_ground: u8,
    /// Degrees, in steps of 1 degree. 511 means "not available".
    pub course_over_ground: u16,
    /// Position is older than 5 seconds
    pub position_latency: bool,
    pub spare: u8,
}

impl PositionReportForLongRangeApplications {
    pub const POSITION_ACCURACY: Field = Field::new("position_accuracy", 38, 1);
    pub const RAIM: Field = Field::new("raim", 39, 1);
    pub const NAVIGATION_STATUS: Field = Field::new("navigation_status", 40, 4);
    pub const LONGITUDE: Field = Field::new("longitude", 44, 18);
    pub const LATITUDE: Field = Field::new("latitude", 62, 17);
    pub const SPEED_OVER_GROUND: Field = Field::new("speed_over_ground", 79, 6);
    pub const COURSE_OVER_GROUND: Field = Field::new("course_over_ground", 85, 9);
    pub const POSITION_LATENCY: Field = Field::new("position_latency", 94, 1);
    pub const SPARE: Field = Field::new("spare", 95, 1);

    pub const LAYOUT: Layout = Layout {
        name: "PositionReportForLongRangeApplications",
        fields: fields![
            Self::POSITION_ACCURACY,
            Self::RAIM,
            Self::NAVIGATION_STATUS,
            Self::LONGITUDE,
            Self::LATITUDE,
            Self::SPEED_OVER_GROUND,
            Self::COURSE_OVER_GROUND,
            Self::POSITION_LATENCY,
            Self::SPARE,
        ],
        max_bits: 96,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            header: Header::decode(payload)?,
            position_accuracy: payload.read_bool(Self::POSITION_ACCURACY)?.into(),
            raim: payload.read_bool(Self::RAIM)?.into(),
            navigation_status: payload.read_enum(Self::NAVIGATION_STATUS)?,
            longitude: payload.read_longitude(Self::LONGITUDE, CoordinateResolution::TenthMinute)?,
            latitude: payload.read_latitude(Self::LATITUDE, CoordinateResolution::TenthMinute)?,
            speed_over_ground: payload.read_u32(Self::SPEED_OVER_GROUND)? as u8,
            course_over_ground: payload.read_u32(Self::COURSE_OVER_GROUND)? as u16,
            position_latency: payload.read_bool(Self::POSITION_LATENCY)?,
            spare: payload.read_u32(Self::SPARE)? as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use aisbee_types::Mmsi;
    use approx::assert_abs_diff_eq;

    use crate::{
        DecodeError,
        message::{
            Header,
            Message,
            PositionReportClassA,
            PositionReportForLongRangeApplications,
            StandardClassBCsPositionReport,
        },
        payload::Payload,
        types::{
            ManeuverIndicator,
            MessageType,
            NavigationStatus,
            PositionAccuracy,
            Raim,
            RateOfTurn,
        },
    };

    fn decode(armored: &str) -> Message {
        Message::decode(&Payload::from_armored(armored).unwrap()).unwrap()
    }

    fn position_report() -> PositionReportClassA {
        PositionReportClassA {
            header: Header::new(
                MessageType::POSITION_REPORT_CLASS_A,
                Mmsi::from_u32(226318000).unwrap(),
            ),
            navigation_status: NavigationStatus::MOORED,
            rate_of_turn: Some(RateOfTurn(-14)),
            speed_over_ground: 12.3,
            position_accuracy: PositionAccuracy::High,
            longitude: Some(-1.15435),
            latitude: Some(50.4755),
            course_over_ground: 216.0,
            true_heading: Some(220),
            timestamp_second: 59,
            maneuver_indicator: ManeuverIndicator::NO_SPECIAL_MANEUVER,
            spare: 0,
            raim: Raim::InUse,
            radio_status: 0x26e00,
        }
    }

    #[test]
    fn it_decodes_a_position_report() {
        let Message::PositionReportClassA(report) = decode("13GmFd002pwrel@LpMu8L6qn8Vp0")
        else {
            panic!("expected a position report");
        };

        assert_eq!(report.header.mmsi.as_u32(), 226318000);
        assert_eq!(report.header.repeat, 0);
        assert_eq!(report.navigation_status, NavigationStatus::UNDER_WAY_USING_ENGINE);
        assert_eq!(report.rate_of_turn, Some(RateOfTurn(0)));
        assert_abs_diff_eq!(report.speed_over_ground, 18.4);
        assert_eq!(report.position_accuracy, PositionAccuracy::High);
        assert_abs_diff_eq!(report.longitude.unwrap(), -1.154333, epsilon = 1e-6);
        assert_abs_diff_eq!(report.latitude.unwrap(), 50.4755, epsilon = 1e-6);
        assert_abs_diff_eq!(report.course_over_ground, 216.0);
        assert_eq!(report.true_heading, Some(220));
        assert_eq!(report.timestamp_second, 59);
        assert_eq!(report.maneuver_indicator, ManeuverIndicator::NOT_AVAILABLE);
        assert_eq!(report.spare, 2);
        assert_eq!(report.raim, Raim::NotInUse);
        assert_eq!(report.radio_status, 0x26e00);
    }

    #[test]
    fn it_decodes_unavailable_rate_of_turn_and_heading() {
        let Message::PositionReportClassA(report) = decode("15Mw1U?P00qNGTP@v`0@9wwn26sd")
        else {
            panic!("expected a position report");
        };

        assert_eq!(report.rate_of_turn, None);
        assert_eq!(report.true_heading, None);
        assert_abs_diff_eq!(report.course_over_ground, 3.9);
    }

    #[test]
    fn it_reencodes_a_position_report_bit_exact() {
        let payload = Payload::from_armored("13GmFd002pwrel@LpMu8L6qn8Vp0").unwrap();
        let message = Message::decode(&payload).unwrap();
        let encoded = message.encode().unwrap();
        assert_eq!(encoded, payload);
        assert_eq!(
            encoded.to_armored(),
            ("13GmFd002pwrel@LpMu8L6qn8Vp0".to_owned(), 0)
        );
    }

    #[test]
    fn it_round_trips_position_reports() {
        for message_type in PositionReportClassA::MESSAGE_TYPES {
            let mut report = position_report();
            report.header.message_type = *message_type;
            let message = Message::PositionReportClassA(report);
            let payload = message.encode().unwrap();
            assert_eq!(payload.len(), 168);
            assert_eq!(Message::decode(&payload).unwrap(), message);
        }
    }

    #[test]
    fn it_writes_unavailable_values_as_sentinels() {
        let mut report = position_report();
        report.true_heading = None;
        report.longitude = None;
        report.latitude = None;
        report.rate_of_turn = None;

        let mut payload = Payload::new();
        report.encode(&mut payload).unwrap();
        assert_eq!(payload.read_u32(PositionReportClassA::TRUE_HEADING).unwrap(), 511);
        assert_eq!(
            payload.read_u32(PositionReportClassA::LONGITUDE).unwrap(),
            0x6791AC0
        );
        assert_eq!(
            payload.read_u32(PositionReportClassA::LATITUDE).unwrap(),
            0x3412140
        );
        assert_eq!(payload.read_u32(PositionReportClassA::RATE_OF_TURN).unwrap(), 0x80);
        assert_eq!(PositionReportClassA::decode(&payload).unwrap(), report);
    }

    #[test]
    fn it_fails_on_truncated_position_reports() {
        let payload = Payload::from_armored("13GmFd002pwrel@LpMu8L6qn8V").unwrap();
        assert!(matches!(
            Message::decode(&payload),
            Err(DecodeError::Truncated {
                field: "radio_status",
                expected_length: 168,
                payload_length: 156
            })
        ));
    }

    #[test]
    fn it_round_trips_class_b_position_reports() {
        let report = StandardClassBCsPositionReport {
            header: Header::new(
                MessageType::STANDARD_CLASS_B_CS_POSITION_REPORT,
                Mmsi::from_u32(338087471).unwrap(),
            ),
            reserved: 0,
            speed_over_ground: 0.1,
            position_accuracy: PositionAccuracy::Low,
            longitude: Some(-74.0721),
            latitude: Some(40.684540),
            course_over_ground: 79.6,
            true_heading: None,
            timestamp_second: 49,
            regional_reserved: 0,
            cs_unit: true,
            display: false,
            dsc: true,
            band: true,
            message_22: true,
            assigned_mode: false,
            raim: Raim::NotInUse,
            radio_status: 0b1100000000000000110,
        };
        let message = Message::StandardClassBCsPositionReport(report);
        let payload = message.encode().unwrap();
        assert_eq!(payload.len(), 168);
        assert_eq!(Message::decode(&payload).unwrap(), message);
    }

    #[test]
    fn it_decodes_tenth_minute_positions() {
        let mut payload = Payload::new();
        Header::new(
            MessageType::POSITION_REPORT_FOR_LONG_RANGE_APPLICATIONS,
            Mmsi::from_u32(206914217).unwrap(),
        )
        .encode(&mut payload, &[MessageType::POSITION_REPORT_FOR_LONG_RANGE_APPLICATIONS])
        .unwrap();
        payload
            .write_i32(PositionReportForLongRangeApplications::LONGITUDE, 137 * 6)
            .unwrap();
        payload
            .write_i32(PositionReportForLongRangeApplications::LATITUDE, -(4 * 600 + 3))
            .unwrap();
        payload
            .write_u32(PositionReportForLongRangeApplications::SPARE, 0)
            .unwrap();

        let Message::PositionReportForLongRangeApplications(report) =
            Message::decode(&payload).unwrap()
        else {
            panic!("expected a long range position report");
        };
        assert_abs_diff_eq!(report.longitude.unwrap(), 1.37, epsilon = 1e-9);
        assert_abs_diff_eq!(report.latitude.unwrap(), -4.005, epsilon = 1e-9);
        assert_eq!(report.speed_over_ground, 0);
    }
}
