//! Static and voyage related data

use aisbee_types::Mmsi;

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
        AidToNavigationType,
        Dimensions,
        MessageType,
        PositionAccuracy,
        PositionFixType,
        Raim,
        ShipType,
    },
};

/// Message type 5
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticAndVoyageRelatedData {
    pub header: Header,
    /// 0 = ITU-R M.1371-1, 1 = M.1371-3, 2 = M.1371-5
    pub ais_version: u8,
    /// 0 means "not available"
    pub imo_number: u32,
    /// 7 characters. Leading spaces are removed.
    pub call_sign: String,
    /// 20 characters
    pub ship_name: String,
    pub ship_type: ShipType,
    pub dimensions: Dimensions,
    pub position_fix_type: PositionFixType,
    /// 0 means "not available"
    pub eta_month: u8,
    /// 0 means "not available"
    pub eta_day: u8,
    /// 24 means "not available"
    pub eta_hour: u8,
    /// 60 means "not available"
    pub eta_minute: u8,
    /// Meters. 25.5 means 25.5 m or more, 0 means "not available"
    pub draught: f64,
    /// 20 characters
    pub destination: String,
    pub data_terminal_ready: bool,
    pub spare: u8,
}

impl StaticAndVoyageRelatedData {
    pub const AIS_VERSION: Field = Field::new("ais_version", 38, 2);
    pub const IMO_NUMBER: Field = Field::new("imo_number", 40, 30);
    pub const CALL_SIGN: Field = Field::new("call_sign", 70, 42);
    pub const SHIP_NAME: Field = Field::new("ship_name", 112, 120);
    pub const SHIP_TYPE: Field = Field::new("ship_type", 232, 8);
    pub const DIMENSIONS: [Field; 4] = Dimensions::fields(240);
    pub const POSITION_FIX_TYPE: Field = Field::new("position_fix_type", 270, 4);
    pub const ETA_MONTH: Field = Field::new("eta_month", 274, 4);
    pub const ETA_DAY: Field = Field::new("eta_day", 278, 5);
    pub const ETA_HOUR: Field = Field::new("eta_hour", 283, 5);
    pub const ETA_MINUTE: Field = Field::new("eta_minute", 288, 6);
    pub const DRAUGHT: Field = Field::new("draught", 294, 8);
    pub const DESTINATION: Field = Field::new("destination", 302, 120);
    pub const DATA_TERMINAL: Field = Field::new("data_terminal", 422, 1);
    pub const SPARE: Field = Field::new("spare", 423, 1);

    pub const LAYOUT: Layout = Layout {
        name: "StaticAndVoyageRelatedData",
        fields: fields![
            Self::AIS_VERSION,
            Self::IMO_NUMBER,
            Self::CALL_SIGN,
            Self::SHIP_NAME,
            Self::SHIP_TYPE,
            Self::DIMENSIONS[0],
            Self::DIMENSIONS[1],
            Self::DIMENSIONS[2],
            Self::DIMENSIONS[3],
            Self::POSITION_FIX_TYPE,
            Self::ETA_MONTH,
            Self::ETA_DAY,
            Self::ETA_HOUR,
            Self::ETA_MINUTE,
            Self::DRAUGHT,
            Self::DESTINATION,
            Self::DATA_TERMINAL,
            Self::SPARE,
        ],
        max_bits: 424,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            header: Header::decode(payload)?,
            ais_version: payload.read_u32(Self::AIS_VERSION)? as u8,
            imo_number: payload.read_u32(Self::IMO_NUMBER)?,
            call_sign: payload.read_string(Self::CALL_SIGN)?,
            ship_name: payload.read_string(Self::SHIP_NAME)?,
            ship_type: payload.read_enum(Self::SHIP_TYPE)?,
            dimensions: Dimensions::decode(payload, &Self::DIMENSIONS)?,
            position_fix_type: payload.read_enum(Self::POSITION_FIX_TYPE)?,
            eta_month: payload.read_u32(Self::ETA_MONTH)? as u8,
            eta_day: payload.read_u32(Self::ETA_DAY)? as u8,
            eta_hour: payload.read_u32(Self::ETA_HOUR)? as u8,
            eta_minute: payload.read_u32(Self::ETA_MINUTE)? as u8,
            draught: payload.read_draught(Self::DRAUGHT)?,
            destination: payload.read_string(Self::DESTINATION)?,
            // 0 = available
            data_terminal_ready: !payload.read_bool(Self::DATA_TERMINAL)?,
            spare: payload.read_u32(Self::SPARE)? as u8,
        })
    }

    pub fn encode(&self, payload: &mut Payload) -> Result<(), EncodeError> {
        self.header
            .encode(payload, &[MessageType::STATIC_AND_VOYAGE_RELATED_DATA])?;
        payload.write_u32(Self::AIS_VERSION, self.ais_version.into())?;
        payload.write_u32(Self::IMO_NUMBER, self.imo_number)?;
        payload.write_string(Self::CALL_SIGN, &self.call_sign)?;
        payload.write_string(Self::SHIP_NAME, &self.ship_name)?;
        payload.write_enum(Self::SHIP_TYPE, self.ship_type)?;
        self.dimensions.encode(payload, &Self::DIMENSIONS)?;
        payload.write_enum(Self::POSITION_FIX_TYPE, self.position_fix_type)?;
        payload.write_u32(Self::ETA_MONTH, self.eta_month.into())?;
        payload.write_u32(Self::ETA_DAY, self.eta_day.into())?;
        payload.write_u32(Self::ETA_HOUR, self.eta_hour.into())?;
        payload.write_u32(Self::ETA_MINUTE, self.eta_minute.into())?;
        payload.write_draught(Self::DRAUGHT, self.draught)?;
        payload.write_string(Self::DESTINATION, &self.destination)?;
        payload.write_bool(Self::DATA_TERMINAL, !self.data_terminal_ready)?;
        payload.write_u32(Self::SPARE, self.spare.into())?;
        Ok(())
    }

    /// Whether the ETA is a valid point in time.
    ///
    /// This is not checked when decoding, since "not available" values are
    /// common.
    pub fn is_eta_valid(&self) -> bool {
        (1..=12).contains(&self.eta_month)
            && (1..=31).contains(&self.eta_day)
            && self.eta_hour <= 23
            && self.eta_minute <= 59
    }
}

/// Message type 21
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AidToNavigationReport {
    pub header: Header,
    pub aid_type: AidToNavigationType,
    pub name: String,
    pub position_accuracy: PositionAccuracy,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub dimensions: Dimensions,
    pub position_fix_type: PositionFixType,
    pub timestamp_second: u8,
    pub off_position: bool,
    pub regional_reserved: u8,
    pub raim: Raim,
    /// The aid doesn't exist physically, but is only broadcast.
    pub virtual_aid: bool,
    pub assigned_mode: bool,
    pub spare: u8,
    /// Continuation of the name, if it is longer than 20 characters.
    pub name_extension: String,
}

impl AidToNavigationReport {
    pub const AID_TYPE: Field = Field::new("aid_type", 38, 5);
    pub const NAME: Field = Field::new("name", 43, 120);
    pub const POSITION_ACCURACY: Field = Field::new("position_accuracy", 163, 1);
    pub const LONGITUDE: Field = Field::new("longitude", 164, 28);
    pub const LATITUDE: Field = Field::new("latitude", 192, 27);
    pub const DIMENSIONS: [Field; 4] = Dimensions::fields(219);
    pub const POSITION_FIX_TYPE: Field = Field::new("position_fix_type", 249, 4);
    pub const TIMESTAMP_SECOND: Field = Field::new("timestamp_second", 253, 6);
    pub const OFF_POSITION: Field = Field::new("off_position", 259, 1);
    pub const REGIONAL_RESERVED: Field = Field::new("regional_reserved", 260, 8);
    pub const RAIM: Field = Field::new("raim", 268, 1);
    pub const VIRTUAL_AID: Field = Field::new("virtual_aid", 269, 1);
    pub const ASSIGNED_MODE: Field = Field::new("assigned_mode", 270, 1);
    pub const SPARE: Field = Field::new("spare", 271, 1);
    /// Up to 14 characters
    pub const NAME_EXTENSION: Field = Field::new("name_extension", 272, 88);

    pub const LAYOUT: Layout = Layout {
        name: "AidToNavigationReport",
        fields: fields![
            Self::AID_TYPE,
            Self::NAME,
            Self::POSITION_ACCURACY,
            Self::LONGITUDE,
            Self::LATITUDE,
            Self::DIMENSIONS[0],
            Self::DIMENSIONS[1],
            Self::DIMENSIONS[2],
            Self::DIMENSIONS[3],
            Self::POSITION_FIX_TYPE,
            Self::TIMESTAMP_SECOND,
            Self::OFF_POSITION,
            Self::REGIONAL_RESERVED,
            Self::RAIM,
            Self::VIRTUAL_AID,
            Self::ASSIGNED_MODE,
            Self::SPARE,
            Self::NAME_EXTENSION,
        ],
        max_bits: 360,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            header: Header::decode(payload)?,
            aid_type: payload.read_enum(Self::AID_TYPE)?,
            name: payload.read_string(Self::NAME)?,
            position_accuracy: payload.read_bool(Self::POSITION_ACCURACY)?.into(),
            longitude: payload
                .read_longitude(Self::LONGITUDE, CoordinateResolution::TenThousandthMinute)?,
            latitude: payload
                .read_latitude(Self::LATITUDE, CoordinateResolution::TenThousandthMinute)?,
            dimensions: Dimensions::decode(payload, &Self::DIMENSIONS)?,
            position_fix_type: payload.read_enum(Self::POSITION_FIX_TYPE)?,
            timestamp_second: payload.read_u32(Self::TIMESTAMP_SECOND)? as u8,
            off_position: payload.read_bool(Self::OFF_POSITION)?,
            regional_reserved: payload.read_u32(Self::REGIONAL_RESERVED)? as u8,
            raim: payload.read_bool(Self::RAIM)?.into(),
            virtual_aid: payload.read_bool(Self::VIRTUAL_AID)?,
            assigned_mode: payload.read_bool(Self::ASSIGNED_MODE)?,
            spare: payload.read_u32(Self::SPARE)? as u8,
            name_extension: payload.read_text(Self::NAME_EXTENSION),
        })
    }

    /// Name including the extension.
    pub fn full_name(&self) -> String {
        format!("{}{}", self.name, self.name_extension)
    }
}

/// Message type 24
///
/// Class B transceivers send their static data in two parts. Part A has part
/// number 0, everything else is treated as part B.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StaticDataReport {
    PartA(StaticDataReportPartA),
    PartB(StaticDataReportPartB),
}

impl StaticDataReport {
    pub const PART_NUMBER: Field = Field::new("part_number", 38, 2);

    pub const LAYOUT_PART_A: Layout = Layout {
        name: "StaticDataReport (part A)",
        fields: fields![
            Self::PART_NUMBER,
            StaticDataReportPartA::SHIP_NAME,
            StaticDataReportPartA::SPARE,
        ],
        max_bits: 168,
    };

    pub const LAYOUT_PART_B: Layout = Layout {
        name: "StaticDataReport (part B)",
        fields: fields![
            Self::PART_NUMBER,
            StaticDataReportPartB::SHIP_TYPE,
            StaticDataReportPartB::VENDOR_ID,
            StaticDataReportPartB::UNIT_MODEL_CODE,
            StaticDataReportPartB::SERIAL_NUMBER,
            StaticDataReportPartB::CALL_SIGN,
            StaticDataReportPartB::DIMENSIONS[0],
            StaticDataReportPartB::DIMENSIONS[1],
            StaticDataReportPartB::DIMENSIONS[2],
            StaticDataReportPartB::DIMENSIONS[3],
            StaticDataReportPartB::SPARE,
        ],
        max_bits: 168,
    };

    pub const LAYOUT_PART_B_AUXILIARY_CRAFT: Layout = Layout {
        name: "StaticDataReport (part B, auxiliary craft)",
        fields: fields![
            Self::PART_NUMBER,
            StaticDataReportPartB::SHIP_TYPE,
            StaticDataReportPartB::VENDOR_ID,
            StaticDataReportPartB::UNIT_MODEL_CODE,
            StaticDataReportPartB::SERIAL_NUMBER,
            StaticDataReportPartB::CALL_SIGN,
            StaticDataReportPartB::MOTHERSHIP_MMSI,
            StaticDataReportPartB::SPARE,
        ],
        max_bits: 168,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        let header = Header::decode(payload)?;
        let part_number = payload.read_u32(Self::PART_NUMBER)? as u8;

        if part_number == 0 {
            Ok(Self::PartA(StaticDataReportPartA::decode(payload, header)?))
        }
        else {
            Ok(Self::PartB(StaticDataReportPartB::decode(
                payload,
                header,
                part_number,
            )?))
        }
    }

    pub fn encode(&self, payload: &mut Payload) -> Result<(), EncodeError> {
        self.header()
            .encode(payload, &[MessageType::STATIC_DATA_REPORT])?;
        match self {
            Self::PartA(part) => part.encode(payload),
            Self::PartB(part) => part.encode(payload),
        }
    }

    pub fn header(&self) -> &Header {
        match self {
            Self::PartA(part) => &part.header,
            Self::PartB(part) => &part.header,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticDataReportPartA {
    pub header: Header,
    pub ship_name: String,
    /// Not sent by all transceivers. 0 if missing.
    pub spare: u8,
}

impl StaticDataReportPartA {
    pub const SHIP_NAME: Field = Field::new("ship_name", 40, 120);
    pub const SPARE: Field = Field::new("spare", 160, 8);

    fn decode(payload: &Payload, header: Header) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            ship_name: payload.read_string(Self::SHIP_NAME)?,
            spare: payload.read_optional_u32(Self::SPARE).unwrap_or_default() as u8,
        })
    }

    fn encode(&self, payload: &mut Payload) -> Result<(), EncodeError> {
        payload.write_u32(StaticDataReport::PART_NUMBER, 0)?;
        payload.write_string(Self::SHIP_NAME, &self.ship_name)?;
        payload.write_u32(Self::SPARE, self.spare.into())?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticDataReportPartB {
    pub header: Header,
    /// 1, unless the sender is broken
    pub part_number: u8,
    pub ship_type: ShipType,
    /// Manufacturer, 3 characters
    pub vendor_id: String,
    pub unit_model_code: u8,
    pub serial_number: u32,
    pub call_sign: String,
    /// Depends on whether the MMSI is one of an auxiliary craft.
    pub tail: PartBTail,
    pub spare: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartBTail {
    Dimensions(Dimensions),
    /// Sent by auxiliary craft instead of their dimensions
    MothershipMmsi(Mmsi),
}

impl StaticDataReportPartB {
    pub const SHIP_TYPE: Field = Field::new("ship_type", 40, 8);
    pub const VENDOR_ID: Field = Field::new("vendor_id", 48, 18);
    pub const UNIT_MODEL_CODE: Field = Field::new("unit_model_code", 66, 4);
    pub const SERIAL_NUMBER: Field = Field::new("serial_number", 70, 20);
    pub const CALL_SIGN: Field = Field::new("call_sign", 90, 42);
    pub const DIMENSIONS: [Field; 4] = Dimensions::fields(132);
    pub const MOTHERSHIP_MMSI: Field = Field::new("mothership_mmsi", 132, 30);
    pub const SPARE: Field = Field::new("spare", 162, 6);

    fn decode(payload: &Payload, header: Header, part_number: u8) -> Result<Self, DecodeError> {
        Ok(Self {
            header,
            part_number,
            ship_type: payload.read_enum(Self::SHIP_TYPE)?,
            vendor_id: payload.read_string(Self::VENDOR_ID)?,
            unit_model_code: payload.read_u32(Self::UNIT_MODEL_CODE)? as u8,
            serial_number: payload.read_u32(Self::SERIAL_NUMBER)?,
            call_sign: payload.read_string(Self::CALL_SIGN)?,
            tail: if header.mmsi.is_auxiliary_craft() {
                PartBTail::MothershipMmsi(payload.read_mmsi(Self::MOTHERSHIP_MMSI)?)
            }
            else {
                PartBTail::Dimensions(Dimensions::decode(payload, &Self::DIMENSIONS)?)
            },
            spare: payload.read_u32(Self::SPARE)? as u8,
        })
    }

    /// Auxiliary craft must send a mothership MMSI, all other stations their
    /// dimensions.
    fn encode(&self, payload: &mut Payload) -> Result<(), EncodeError> {
        if self.part_number == 0 {
            return Err(EncodeError::ValueOutOfRange {
                field: StaticDataReport::PART_NUMBER.name,
                value: 0,
            });
        }
        let mothership_tail = matches!(self.tail, PartBTail::MothershipMmsi(_));
        if mothership_tail != self.header.mmsi.is_auxiliary_craft() {
            return Err(EncodeError::MismatchedPartBTail {
                mmsi: self.header.mmsi,
            });
        }
        payload.write_u32(StaticDataReport::PART_NUMBER, self.part_number.into())?;
        payload.write_enum(Self::SHIP_TYPE, self.ship_type)?;
        payload.write_string(Self::VENDOR_ID, &self.vendor_id)?;
        payload.write_u32(Self::UNIT_MODEL_CODE, self.unit_model_code.into())?;
        payload.write_u32(Self::SERIAL_NUMBER, self.serial_number)?;
        payload.write_string(Self::CALL_SIGN, &self.call_sign)?;
        match &self.tail {
            PartBTail::Dimensions(dimensions) => dimensions.encode(payload, &Self::DIMENSIONS)?,
            PartBTail::MothershipMmsi(mmsi) => payload.write_mmsi(Self::MOTHERSHIP_MMSI, *mmsi)?,
        }
        payload.write_u32(Self::SPARE, self.spare.into())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use aisbee_types::Mmsi;
    use approx::assert_abs_diff_eq;

    use crate::{
        DecodeError,
        EncodeError,
        layout::Field,
        message::{
            AidToNavigationReport,
            Header,
            Message,
            PartBTail,
            StaticAndVoyageRelatedData,
            StaticDataReport,
            StaticDataReportPartA,
            StaticDataReportPartB,
        },
        payload::Payload,
        types::{
            AidToNavigationType,
            Dimensions,
            MessageType,
            PositionFixType,
            ShipType,
        },
    };

    fn decode_static_data(armored: &str, fill_bits: u8) -> StaticAndVoyageRelatedData {
        let payload = Payload::from_armored_with_fill_bits(armored, fill_bits).unwrap();
        match Message::decode(&payload).unwrap() {
            Message::StaticAndVoyageRelatedData(message) => message,
            message => panic!("unexpected message: {message:?}"),
        }
    }

    fn static_data() -> StaticAndVoyageRelatedData {
        StaticAndVoyageRelatedData {
            header: Header::new(
                MessageType::STATIC_AND_VOYAGE_RELATED_DATA,
                Mmsi::from_u32(235083598).unwrap(),
            ),
            ais_version: 2,
            imo_number: 9732319,
            call_sign: "2EAZ3".to_owned(),
            ship_name: "WILLSUPPLY".to_owned(),
            ship_type: ShipType::PORT_TENDER,
            dimensions: Dimensions {
                to_bow: 12,
                to_stern: 8,
                to_port: 3,
                to_starboard: 4,
            },
            position_fix_type: PositionFixType::GPS,
            eta_month: 8,
            eta_day: 4,
            eta_hour: 16,
            eta_minute: 0,
            draught: 1.6,
            destination: "SOUTHAMPTON".to_owned(),
            data_terminal_ready: true,
            spare: 0,
        }
    }

    #[test]
    fn it_decodes_static_and_voyage_related_data() {
        let message = decode_static_data(
            "53P<GC`000038D5c>01LThi=E10iV2222222220m1P834v2@044kmE20CD53k`888000000",
            2,
        );

        assert_eq!(message.header.mmsi.as_u32(), 235083598);
        assert_eq!(message.ais_version, 2);
        assert_eq!(message.imo_number, 0);
        assert_eq!(message.call_sign, "2EAZ3");
        assert_eq!(message.ship_name, "WILLSUPPLY");
        assert_eq!(message.ship_type, ShipType::PORT_TENDER);
        assert_eq!(
            message.dimensions,
            Dimensions {
                to_bow: 12,
                to_stern: 8,
                to_port: 3,
                to_starboard: 4
            }
        );
        assert_eq!(message.dimensions.length(), 20);
        assert_eq!(message.dimensions.beam(), 7);
        assert_eq!(message.position_fix_type, PositionFixType::INTERNAL_GNSS);
        assert_eq!(
            (
                message.eta_month,
                message.eta_day,
                message.eta_hour,
                message.eta_minute
            ),
            (8, 4, 16, 0)
        );
        assert!(message.is_eta_valid());
        assert_abs_diff_eq!(message.draught, 1.6);
        assert_eq!(message.destination, "SOUTHAMPTON");
        assert!(message.data_terminal_ready);
        assert_eq!(message.spare, 0);
    }

    #[test]
    fn it_keeps_leading_spaces_in_names() {
        let message = decode_static_data(
            "58wt8Ui`g??r21`7S=:22058<v05Htp000000015>8OA;0skeQ8823mDm3kP00000000000",
            2,
        );
        assert_eq!(message.imo_number, 439303422);
        assert_eq!(message.call_sign, "  ZA83R");
        assert_eq!(message.ship_name, "   ARCO AVON");
        assert_eq!(message.ship_type, ShipType::PASSENGER_NO_ADDITIONAL_INFORMATION);
        assert_eq!(message.destination, "  HOUSTON");
        assert_abs_diff_eq!(message.draught, 13.2);

        let message = decode_static_data(
            "539I@g400000@;W3;B0@EA@lE:1@4pf3G5v0001I9P963t000011@TUL<><<13hjn<<<==@",
            2,
        );
        assert_eq!(message.ship_name, "DETTMER TANK 51_");
        assert_eq!(message.destination, "DEBRU00800DOCKX00045");
    }

    #[test]
    fn it_decodes_unavailable_eta() {
        let message = decode_static_data(
            "539`vQ400000@SGKGP0P4q<D5@000000000000150@@23t0Ht0B0C@UDQh0000000000000",
            2,
        );
        assert_eq!(message.call_sign, "DH5658");
        assert_eq!(message.ship_name, "HANSEAT");
        assert_eq!(
            (
                message.eta_month,
                message.eta_day,
                message.eta_hour,
                message.eta_minute
            ),
            (0, 0, 24, 60)
        );
        assert!(!message.is_eta_valid());
        assert_abs_diff_eq!(message.draught, 0.1);
        assert_eq!(message.destination, "HAMBURG");
    }

    #[test]
    fn it_fails_on_incomplete_static_data() {
        let payload =
            Payload::from_armored_with_fill_bits("5815AE82DP=uKLPkT004j0l5<Q84800000000017AcS?T0", 4)
                .unwrap();
        assert_eq!(payload.len(), 272);
        assert!(matches!(
            Message::decode(&payload),
            Err(DecodeError::Truncated {
                field: "position_fix_type",
                expected_length: 274,
                payload_length: 272
            })
        ));
    }

    #[test]
    fn it_round_trips_static_and_voyage_related_data() {
        let message = Message::StaticAndVoyageRelatedData(static_data());
        let payload = message.encode().unwrap();
        assert_eq!(payload.len(), 424);
        assert_eq!(Message::decode(&payload).unwrap(), message);

        let mut unavailable = static_data();
        unavailable.call_sign = String::new();
        unavailable.ship_name = String::new();
        unavailable.destination = String::new();
        unavailable.eta_hour = 24;
        unavailable.eta_minute = 60;
        unavailable.data_terminal_ready = false;
        let message = Message::StaticAndVoyageRelatedData(unavailable);
        assert_eq!(Message::decode(&message.encode().unwrap()).unwrap(), message);
    }

    #[test]
    fn it_reencodes_space_padded_strings_with_padding() {
        let payload = Payload::from_armored_with_fill_bits(
            "53P<GC`000038D5c>01LThi=E10iV2222222220m1P834v2@044kmE20CD53k`888000000",
            2,
        )
        .unwrap();
        let message = Message::decode(&payload).unwrap();
        let encoded = message.encode().unwrap();

        // the sender padded the ship name with spaces
        assert_ne!(encoded, payload);
        assert_eq!(encoded.len(), payload.len());
        assert_eq!(Message::decode(&encoded).unwrap(), message);
    }

    #[test]
    fn it_decodes_padding_only_names_as_empty() {
        let mut payload = Payload::new();
        static_data().encode(&mut payload).unwrap();
        for i in 0..4 {
            payload
                .write_u32(Field::new("ship_name", 112 + i * 30, 30), 0)
                .unwrap();
        }

        let message = StaticAndVoyageRelatedData::decode(&payload).unwrap();
        assert_eq!(message.ship_name, "");
    }

    #[test]
    fn it_round_trips_static_data_reports() {
        let mmsi = Mmsi::from_u32(338085237).unwrap();
        let part_a = Message::StaticDataReport(StaticDataReport::PartA(StaticDataReportPartA {
            header: Header::new(MessageType::STATIC_DATA_REPORT, mmsi),
            ship_name: "SEA ROVER".to_owned(),
            spare: 0,
        }));
        let payload = part_a.encode().unwrap();
        assert_eq!(payload.len(), 168);
        assert_eq!(Message::decode(&payload).unwrap(), part_a);

        let part_b = Message::StaticDataReport(StaticDataReport::PartB(StaticDataReportPartB {
            header: Header::new(MessageType::STATIC_DATA_REPORT, mmsi),
            part_number: 1,
            ship_type: ShipType::SAILING,
            vendor_id: "SRT".to_owned(),
            unit_model_code: 2,
            serial_number: 123456,
            call_sign: "WDE5433".to_owned(),
            tail: PartBTail::Dimensions(Dimensions {
                to_bow: 7,
                to_stern: 5,
                to_port: 2,
                to_starboard: 2,
            }),
            spare: 0,
        }));
        let payload = part_b.encode().unwrap();
        assert_eq!(payload.len(), 168);
        assert_eq!(Message::decode(&payload).unwrap(), part_b);
    }

    #[test]
    fn it_reads_the_mothership_of_auxiliary_craft() {
        let part_b = StaticDataReportPartB {
            header: Header::new(
                MessageType::STATIC_DATA_REPORT,
                Mmsi::from_u32(982265001).unwrap(),
            ),
            part_number: 1,
            ship_type: ShipType::OTHER_TYPE,
            vendor_id: String::new(),
            unit_model_code: 0,
            serial_number: 0,
            call_sign: String::new(),
            tail: PartBTail::MothershipMmsi(Mmsi::from_u32(226318000).unwrap()),
            spare: 0,
        };
        let message = Message::StaticDataReport(StaticDataReport::PartB(part_b));
        let payload = message.encode().unwrap();
        assert_eq!(Message::decode(&payload).unwrap(), message);
    }

    #[test]
    fn it_rejects_a_mismatched_part_b_tail() {
        let mut part_b = StaticDataReportPartB {
            header: Header::new(
                MessageType::STATIC_DATA_REPORT,
                Mmsi::from_u32(123456789).unwrap(),
            ),
            part_number: 1,
            ship_type: ShipType::OTHER_TYPE,
            vendor_id: String::new(),
            unit_model_code: 0,
            serial_number: 0,
            call_sign: String::new(),
            tail: PartBTail::MothershipMmsi(Mmsi::from_u32(987654321).unwrap()),
            spare: 0,
        };
        let message = Message::StaticDataReport(StaticDataReport::PartB(part_b.clone()));
        assert!(matches!(
            message.encode(),
            Err(EncodeError::MismatchedPartBTail { mmsi }) if mmsi.as_u32() == 123456789
        ));

        part_b.header.mmsi = Mmsi::from_u32(982265001).unwrap();
        part_b.tail = PartBTail::Dimensions(Dimensions::default());
        let message = Message::StaticDataReport(StaticDataReport::PartB(part_b));
        assert!(matches!(
            message.encode(),
            Err(EncodeError::MismatchedPartBTail { mmsi }) if mmsi.as_u32() == 982265001
        ));
    }

    #[test]
    fn it_round_trips_leading_spaces_in_call_signs() {
        let mut message = static_data();
        message.call_sign = "  ZA83R".to_owned();
        let message = Message::StaticAndVoyageRelatedData(message);
        let payload = message.encode().unwrap();
        assert_eq!(Message::decode(&payload).unwrap(), message);
    }

    #[test]
    fn it_accepts_part_a_without_spare() {
        let mut payload = Payload::new();
        StaticDataReportPartA {
            header: Header::new(
                MessageType::STATIC_DATA_REPORT,
                Mmsi::from_u32(338085237).unwrap(),
            ),
            ship_name: "SEA ROVER".to_owned(),
            spare: 0,
        }
        .encode(&mut payload)
        .unwrap();
        let (armored, _) = payload.to_armored();
        // 160 bits
        let payload = Payload::from_armored_with_fill_bits(&armored[..27], 2).unwrap();
        assert_eq!(payload.len(), 160);
        let Message::StaticDataReport(StaticDataReport::PartA(part_a)) =
            Message::decode(&payload).unwrap()
        else {
            panic!("expected part A");
        };
        assert_eq!(part_a.ship_name, "SEA ROVER");
    }

    #[test]
    fn it_decodes_aid_to_navigation_reports_with_name_extension() {
        let mut payload = Payload::new();
        Header::new(
            MessageType::AID_TO_NAVIGATION_REPORT,
            Mmsi::from_u32(993672072).unwrap(),
        )
        .encode(&mut payload, &[MessageType::AID_TO_NAVIGATION_REPORT])
        .unwrap();
        payload
            .write_enum(
                AidToNavigationReport::AID_TYPE,
                AidToNavigationType::CARDINAL_MARK_NORTH,
            )
            .unwrap();
        payload
            .write_string(AidToNavigationReport::NAME, "NORTH FAIRWAY BUOY N")
            .unwrap();
        payload
            .write_longitude(
                AidToNavigationReport::LONGITUDE,
                crate::payload::CoordinateResolution::TenThousandthMinute,
                None,
            )
            .unwrap();
        payload
            .write_latitude(
                AidToNavigationReport::LATITUDE,
                crate::payload::CoordinateResolution::TenThousandthMinute,
                None,
            )
            .unwrap();
        payload
            .write_bool(AidToNavigationReport::VIRTUAL_AID, true)
            .unwrap();
        payload
            .write_text(AidToNavigationReport::NAME_EXTENSION, "O 2")
            .unwrap();

        let Message::AidToNavigationReport(report) = Message::decode(&payload).unwrap()
        else {
            panic!("expected an aid to navigation report");
        };
        assert_eq!(report.aid_type, AidToNavigationType::CARDINAL_MARK_NORTH);
        assert_eq!(report.longitude, None);
        assert!(report.virtual_aid);
        assert_eq!(report.full_name(), "NORTH FAIRWAY BUOY NO 2");
    }
}
