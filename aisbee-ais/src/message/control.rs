//! Link management and commands sent by base stations

use aisbee_types::Mmsi;

use crate::{
    DecodeError,
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
        MessageType,
        ShipType,
        StationType,
        TxRxMode,
    },
};

/// Message type 15
///
/// Requests up to two message types from one station, or one message type
/// each from two stations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interrogation {
    pub header: Header,
    pub spare: u8,
    pub interrogated_mmsi: Mmsi,
    pub first_message_type: MessageType,
    pub first_slot_offset: u16,
    pub second_message_type: Option<MessageType>,
    pub second_slot_offset: Option<u16>,
    pub second_station_mmsi: Option<Mmsi>,
    pub second_station_message_type: Option<MessageType>,
    pub second_station_slot_offset: Option<u16>,
}

impl Interrogation {
    pub const SPARE: Field = Field::new("spare", 38, 2);
    pub const INTERROGATED_MMSI: Field = Field::new("interrogated_mmsi", 40, 30);
    pub const FIRST_MESSAGE_TYPE: Field = Field::new("first_message_type", 70, 6);
    pub const FIRST_SLOT_OFFSET: Field = Field::new("first_slot_offset", 76, 12);
    pub const SPARE_2: Field = Field::new("spare_2", 88, 2);
    pub const SECOND_MESSAGE_TYPE: Field = Field::new("second_message_type", 90, 6);
    pub const SECOND_SLOT_OFFSET: Field = Field::new("second_slot_offset", 96, 12);
    pub const SPARE_3: Field = Field::new("spare_3", 108, 2);
    pub const SECOND_STATION_MMSI: Field = Field::new("second_station_mmsi", 110, 30);
    pub const SECOND_STATION_MESSAGE_TYPE: Field =
        Field::new("second_station_message_type", 140, 6);
    pub const SECOND_STATION_SLOT_OFFSET: Field = Field::new("second_station_slot_offset", 146, 12);
    pub const SPARE_4: Field = Field::new("spare_4", 158, 2);

    pub const LAYOUT: Layout = Layout {
        name: "Interrogation",
        fields: fields![
            Self::SPARE,
            Self::INTERROGATED_MMSI,
            Self::FIRST_MESSAGE_TYPE,
            Self::FIRST_SLOT_OFFSET,
            Self::SPARE_2,
            Self::SECOND_MESSAGE_TYPE,
            Self::SECOND_SLOT_OFFSET,
            Self::SPARE_3,
            Self::SECOND_STATION_MMSI,
            Self::SECOND_STATION_MESSAGE_TYPE,
            Self::SECOND_STATION_SLOT_OFFSET,
            Self::SPARE_4,
        ],
        max_bits: 160,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            header: Header::decode(payload)?,
            spare: payload.read_u32(Self::SPARE)? as u8,
            interrogated_mmsi: payload.read_mmsi(Self::INTERROGATED_MMSI)?,
            first_message_type: payload.read_enum(Self::FIRST_MESSAGE_TYPE)?,
            first_slot_offset: payload.read_u32(Self::FIRST_SLOT_OFFSET)? as u16,
            second_message_type: payload.read_optional_message_type(Self::SECOND_MESSAGE_TYPE),
            second_slot_offset: payload
                .read_optional_u32(Self::SECOND_SLOT_OFFSET)
                .map(|offset| offset as u16),
            second_station_mmsi: payload.read_optional_mmsi(Self::SECOND_STATION_MMSI),
            second_station_message_type: payload
                .read_optional_message_type(Self::SECOND_STATION_MESSAGE_TYPE),
            second_station_slot_offset: payload
                .read_optional_u32(Self::SECOND_STATION_SLOT_OFFSET)
                .map(|offset| offset as u16),
        })
    }
}

/// Slot assignment for one station.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotAssignment {
    pub mmsi: Mmsi,
    pub offset: u16,
    pub increment: u16,
}

impl SlotAssignment {
    fn decode(payload: &Payload, fields: &[Field; 3]) -> Result<Self, DecodeError> {
        Ok(Self {
            mmsi: payload.read_mmsi(fields[0])?,
            offset: payload.read_u32(fields[1])? as u16,
            increment: payload.read_u32(fields[2])? as u16,
        })
    }
}

/// Message type 16
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentModeCommand {
    pub header: Header,
    pub spare: u8,
    pub first: SlotAssignment,
    /// Only present in the 144 bit form of the message.
    pub second: Option<SlotAssignment>,
}

impl AssignmentModeCommand {
    pub const SPARE: Field = Field::new("spare", 38, 2);
    pub const FIRST: [Field; 3] = [
        Field::new("first_mmsi", 40, 30),
        Field::new("first_offset", 70, 12),
        Field::new("first_increment", 82, 10),
    ];
    pub const SECOND: [Field; 3] = [
        Field::new("second_mmsi", 92, 30),
        Field::new("second_offset", 122, 12),
        Field::new("second_increment", 134, 10),
    ];

    pub const LAYOUT: Layout = Layout {
        name: "AssignmentModeCommand",
        fields: fields![
            Self::SPARE,
            Self::FIRST[0],
            Self::FIRST[1],
            Self::FIRST[2],
            Self::SECOND[0],
            Self::SECOND[1],
            Self::SECOND[2],
        ],
        max_bits: 144,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        let header = Header::decode(payload)?;
        let spare = payload.read_u32(Self::SPARE)? as u8;
        let first = SlotAssignment::decode(payload, &Self::FIRST)?;
        let second = if payload.contains(Self::SECOND[2]) {
            Some(SlotAssignment::decode(payload, &Self::SECOND)?)
        }
        else {
            None
        };

        Ok(Self {
            header,
            spare,
            first,
            second,
        })
    }
}

/// Reservation of a block of slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotReservation {
    pub offset: u16,
    pub number_of_slots: u8,
    /// Minutes
    pub timeout: u8,
    pub increment: u16,
}

impl SlotReservation {
    fn decode(payload: &Payload, fields: &[Field; 4]) -> Result<Self, DecodeError> {
        Ok(Self {
            offset: payload.read_u32(fields[0])? as u16,
            number_of_slots: payload.read_u32(fields[1])? as u8,
            timeout: payload.read_u32(fields[2])? as u8,
            increment: payload.read_u32(fields[3])? as u16,
        })
    }
}

/// Message type 20
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataLinkManagement {
    pub header: Header,
    pub spare: u8,
    /// At least one, at most 4
    pub reservations: Vec<SlotReservation>,
}

impl DataLinkManagement {
    pub const SPARE: Field = Field::new("spare", 38, 2);
    pub const RESERVATIONS: [[Field; 4]; 4] = [
        [
            Field::new("offset_1", 40, 12),
            Field::new("number_of_slots_1", 52, 4),
            Field::new("timeout_1", 56, 3),
            Field::new("increment_1", 59, 11),
        ],
        [
            Field::new("offset_2", 70, 12),
            Field::new("number_of_slots_2", 82, 4),
            Field::new("timeout_2", 86, 3),
            Field::new("increment_2", 89, 11),
        ],
        [
            Field::new("offset_3", 100, 12),
            Field::new("number_of_slots_3", 112, 4),
            Field::new("timeout_3", 116, 3),
            Field::new("increment_3", 119, 11),
        ],
        [
            Field::new("offset_4", 130, 12),
            Field::new("number_of_slots_4", 142, 4),
            Field::new("timeout_4", 146, 3),
            Field::new("increment_4", 149, 11),
        ],
    ];

    pub const LAYOUT: Layout = Layout {
        name: "DataLinkManagement",
        fields: fields![
            Self::SPARE,
            Self::RESERVATIONS[0][0],
            Self::RESERVATIONS[0][1],
            Self::RESERVATIONS[0][2],
            Self::RESERVATIONS[0][3],
            Self::RESERVATIONS[1][0],
            Self::RESERVATIONS[1][1],
            Self::RESERVATIONS[1][2],
            Self::RESERVATIONS[1][3],
            Self::RESERVATIONS[2][0],
            Self::RESERVATIONS[2][1],
            Self::RESERVATIONS[2][2],
            Self::RESERVATIONS[2][3],
            Self::RESERVATIONS[3][0],
            Self::RESERVATIONS[3][1],
            Self::RESERVATIONS[3][2],
            Self::RESERVATIONS[3][3],
        ],
        max_bits: 160,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        let header = Header::decode(payload)?;
        let spare = payload.read_u32(Self::SPARE)? as u8;

        let mut reservations = Vec::with_capacity(Self::RESERVATIONS.len());
        reservations.push(SlotReservation::decode(payload, &Self::RESERVATIONS[0])?);
        for fields in &Self::RESERVATIONS[1..] {
            if !payload.contains(fields[3]) {
                break;
            }
            reservations.push(SlotReservation::decode(payload, fields)?);
        }

        Ok(Self {
            header,
            spare,
            reservations,
        })
    }
}

/// A rectangular area given by its north-east and south-west corners, with a
/// resolution of 1/10 minute.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeographicArea {
    pub northeast_longitude: Option<f64>,
    pub northeast_latitude: Option<f64>,
    pub southwest_longitude: Option<f64>,
    pub southwest_latitude: Option<f64>,
}

impl GeographicArea {
    pub const BITS: usize = 70;

    pub const fn fields(start: usize) -> [Field; 4] {
        [
            Field::new("northeast_longitude", start, 18),
            Field::new("northeast_latitude", start + 18, 17),
            Field::new("southwest_longitude", start + 35, 18),
            Field::new("southwest_latitude", start + 53, 17),
        ]
    }

    pub fn decode(payload: &Payload, fields: &[Field; 4]) -> Result<Self, DecodeError> {
        let resolution = CoordinateResolution::TenthMinute;
        Ok(Self {
            northeast_longitude: payload.read_longitude(fields[0], resolution)?,
            northeast_latitude: payload.read_latitude(fields[1], resolution)?,
            southwest_longitude: payload.read_longitude(fields[2], resolution)?,
            southwest_latitude: payload.read_latitude(fields[3], resolution)?,
        })
    }
}

/// Area to which a channel management message applies.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelManagementArea {
    /// Addressed to up to two stations.
    Addressed {
        first_mmsi: Mmsi,
        second_mmsi: Mmsi,
    },
    /// Broadcast to all stations in the area.
    Geographic(GeographicArea),
}

/// Message type 22
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelManagement {
    pub header: Header,
    pub spare: u8,
    pub channel_a: u16,
    pub channel_b: u16,
    pub tx_rx_mode: TxRxMode,
    pub low_power: bool,
    pub area: ChannelManagementArea,
    /// Channel A uses 12.5 kHz bandwidth
    pub channel_a_reduced_bandwidth: bool,
    /// Channel B uses 12.5 kHz bandwidth
    pub channel_b_reduced_bandwidth: bool,
    /// Size of the transitional zone in nautical miles, minus 1.
    pub transitional_zone_size: u8,
    pub spare_2: u32,
}

impl ChannelManagement {
    pub const SPARE: Field = Field::new("spare", 38, 2);
    pub const CHANNEL_A: Field = Field::new("channel_a", 40, 12);
    pub const CHANNEL_B: Field = Field::new("channel_b", 52, 12);
    pub const TX_RX_MODE: Field = Field::new("tx_rx_mode", 64, 4);
    pub const LOW_POWER: Field = Field::new("low_power", 68, 1);
    pub const FIRST_MMSI: Field = Field::new("first_mmsi", 69, 30);
    pub const FIRST_MMSI_SPARE: Field = Field::new("first_mmsi_spare", 99, 5);
    pub const SECOND_MMSI: Field = Field::new("second_mmsi", 104, 30);
    pub const SECOND_MMSI_SPARE: Field = Field::new("second_mmsi_spare", 134, 5);
    pub const AREA: [Field; 4] = GeographicArea::fields(69);
    pub const ADDRESSED: Field = Field::new("addressed", 139, 1);
    pub const CHANNEL_A_BANDWIDTH: Field = Field::new("channel_a_bandwidth", 140, 1);
    pub const CHANNEL_B_BANDWIDTH: Field = Field::new("channel_b_bandwidth", 141, 1);
    pub const TRANSITIONAL_ZONE_SIZE: Field = Field::new("transitional_zone_size", 142, 3);
    pub const SPARE_2: Field = Field::new("spare_2", 145, 23);

    pub const LAYOUT_ADDRESSED: Layout = Layout {
        name: "ChannelManagement (addressed)",
        fields: fields![
            Self::SPARE,
            Self::CHANNEL_A,
            Self::CHANNEL_B,
            Self::TX_RX_MODE,
            Self::LOW_POWER,
            Self::FIRST_MMSI,
            Self::FIRST_MMSI_SPARE,
            Self::SECOND_MMSI,
            Self::SECOND_MMSI_SPARE,
            Self::ADDRESSED,
            Self::CHANNEL_A_BANDWIDTH,
            Self::CHANNEL_B_BANDWIDTH,
            Self::TRANSITIONAL_ZONE_SIZE,
            Self::SPARE_2,
        ],
        max_bits: 168,
    };

    pub const LAYOUT_GEOGRAPHIC: Layout = Layout {
        name: "ChannelManagement (geographic)",
        fields: fields![
            Self::SPARE,
            Self::CHANNEL_A,
            Self::CHANNEL_B,
            Self::TX_RX_MODE,
            Self::LOW_POWER,
            Self::AREA[0],
            Self::AREA[1],
            Self::AREA[2],
            Self::AREA[3],
            Self::ADDRESSED,
            Self::CHANNEL_A_BANDWIDTH,
            Self::CHANNEL_B_BANDWIDTH,
            Self::TRANSITIONAL_ZONE_SIZE,
            Self::SPARE_2,
        ],
        max_bits: 168,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        let header = Header::decode(payload)?;
        let spare = payload.read_u32(Self::SPARE)? as u8;
        let channel_a = payload.read_u32(Self::CHANNEL_A)? as u16;
        let channel_b = payload.read_u32(Self::CHANNEL_B)? as u16;
        let tx_rx_mode = payload.read_enum(Self::TX_RX_MODE)?;
        let low_power = payload.read_bool(Self::LOW_POWER)?;

        // the area is selected by a flag behind it
        let area = if payload.read_bool(Self::ADDRESSED)? {
            ChannelManagementArea::Addressed {
                first_mmsi: payload.read_mmsi(Self::FIRST_MMSI)?,
                second_mmsi: payload.read_mmsi(Self::SECOND_MMSI)?,
            }
        }
        else {
            ChannelManagementArea::Geographic(GeographicArea::decode(payload, &Self::AREA)?)
        };

        Ok(Self {
            header,
            spare,
            channel_a,
            channel_b,
            tx_rx_mode,
            low_power,
            area,
            channel_a_reduced_bandwidth: payload.read_bool(Self::CHANNEL_A_BANDWIDTH)?,
            channel_b_reduced_bandwidth: payload.read_bool(Self::CHANNEL_B_BANDWIDTH)?,
            transitional_zone_size: payload.read_u32(Self::TRANSITIONAL_ZONE_SIZE)? as u8,
            spare_2: payload.read_u32(Self::SPARE_2)?,
        })
    }
}

/// Message type 23
///
/// Assigns reporting parameters to all stations of a type within an area.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupAssignmentCommand {
    pub header: Header,
    pub spare: u8,
    pub area: GeographicArea,
    pub station_type: StationType,
    pub ship_type: ShipType,
    pub spare_2: u32,
    pub tx_rx_mode: TxRxMode,
    /// Index into the table of reporting intervals, not a duration.
    pub reporting_interval: u8,
    /// Minutes. 0 means no quiet time.
    pub quiet_time: u8,
    pub spare_3: u8,
}

impl GroupAssignmentCommand {
    pub const SPARE: Field = Field::new("spare", 38, 2);
    pub const AREA: [Field; 4] = GeographicArea::fields(40);
    pub const STATION_TYPE: Field = Field::new("station_type", 110, 4);
    pub const SHIP_TYPE: Field = Field::new("ship_type", 114, 8);
    pub const SPARE_2: Field = Field::new("spare_2", 122, 22);
    pub const TX_RX_MODE: Field = Field::new("tx_rx_mode", 144, 2);
    pub const REPORTING_INTERVAL: Field = Field::new("reporting_interval", 146, 4);
    pub const QUIET_TIME: Field = Field::new("quiet_time", 150, 4);
    pub const SPARE_3: Field = Field::new("spare_3", 154, 6);

    pub const LAYOUT: Layout = Layout {
        name: "GroupAssignmentCommand",
        fields: fields![
            Self::SPARE,
            Self::AREA[0],
            Self::AREA[1],
            Self::AREA[2],
            Self::AREA[3],
            Self::STATION_TYPE,
            Self::SHIP_TYPE,
            Self::SPARE_2,
            Self::TX_RX_MODE,
            Self::REPORTING_INTERVAL,
            Self::QUIET_TIME,
            Self::SPARE_3,
        ],
        max_bits: 160,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            header: Header::decode(payload)?,
            spare: payload.read_u32(Self::SPARE)? as u8,
            area: GeographicArea::decode(payload, &Self::AREA)?,
            station_type: payload.read_enum(Self::STATION_TYPE)?,
            ship_type: payload.read_enum(Self::SHIP_TYPE)?,
            spare_2: payload.read_u32(Self::SPARE_2)?,
            tx_rx_mode: payload.read_enum(Self::TX_RX_MODE)?,
            reporting_interval: payload.read_u32(Self::REPORTING_INTERVAL)? as u8,
            quiet_time: payload.read_u32(Self::QUIET_TIME)? as u8,
            spare_3: payload.read_u32(Self::SPARE_3)? as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{
        DecodeError,
        message::{
            ChannelManagement,
            ChannelManagementArea,
            Message,
            SlotReservation,
        },
        payload::Payload,
        types::{
            MessageType,
            ShipType,
            StationType,
            TxRxMode,
        },
    };

    fn decode(armored: &str, fill_bits: u8) -> Message {
        let payload = Payload::from_armored_with_fill_bits(armored, fill_bits).unwrap();
        Message::decode(&payload).unwrap()
    }

    #[test]
    fn it_decodes_a_short_interrogation() {
        let payload = Payload::from_armored_with_fill_bits("?5OP=l00052HD00", 2).unwrap();
        assert_eq!(payload.len(), 88);
        let Message::Interrogation(interrogation) = Message::decode(&payload).unwrap()
        else {
            panic!("expected an interrogation");
        };
        assert_eq!(interrogation.header.mmsi.as_u32(), 368578000);
        assert_eq!(interrogation.interrogated_mmsi.as_u32(), 5158);
        assert_eq!(
            interrogation.first_message_type,
            MessageType::STATIC_AND_VOYAGE_RELATED_DATA
        );
        assert_eq!(interrogation.first_slot_offset, 0);
        assert_eq!(interrogation.second_message_type, None);
        assert_eq!(interrogation.second_slot_offset, None);
        assert_eq!(interrogation.second_station_mmsi, None);
        assert_eq!(interrogation.second_station_message_type, None);
        assert_eq!(interrogation.second_station_slot_offset, None);
    }

    #[test]
    fn it_fails_on_interrogations_without_a_first_request() {
        let payload = Payload::from_armored("?5OP=l00052HD").unwrap();
        assert!(matches!(
            Message::decode(&payload),
            Err(DecodeError::Truncated {
                field: "first_slot_offset",
                expected_length: 88,
                payload_length: 78
            })
        ));
    }

    #[test]
    fn it_decodes_a_short_assignment_mode_command() {
        let Message::AssignmentModeCommand(command) = decode("@01uEO@mMk7P<P00", 0)
        else {
            panic!("expected an assignment mode command");
        };
        assert_eq!(command.header.mmsi.as_u32(), 2053501);
        assert_eq!(command.first.mmsi.as_u32(), 224251000);
        assert_eq!(command.first.offset, 200);
        assert_eq!(command.first.increment, 0);
        assert_eq!(command.second, None);
    }

    #[test]
    fn it_decodes_data_link_management() {
        let Message::DataLinkManagement(message) = decode("D028rqP<QNfp000000000000000", 2)
        else {
            panic!("expected a data link management message");
        };
        assert_eq!(message.header.mmsi.as_u32(), 2243302);
        assert_eq!(message.reservations.len(), 4);
        assert_eq!(
            message.reservations[0],
            SlotReservation {
                offset: 200,
                number_of_slots: 5,
                timeout: 7,
                increment: 750,
            }
        );
        assert_eq!(message.reservations[3].offset, 0);
    }

    #[test]
    fn it_decodes_only_present_reservations() {
        let payload = Payload::from_armored("D028rqP<QNfp0000").unwrap();
        assert_eq!(payload.len(), 96);
        let Message::DataLinkManagement(message) = Message::decode(&payload).unwrap()
        else {
            panic!("expected a data link management message");
        };
        assert_eq!(message.reservations.len(), 1);
    }

    #[test]
    fn it_decodes_geographic_channel_management() {
        let Message::ChannelManagement(message) = decode("F030p:j2N2P5aJR0r;6f3rj10000", 0)
        else {
            panic!("expected a channel management message");
        };
        assert_eq!(message.header.mmsi.as_u32(), 3160107);
        assert_eq!(message.channel_a, 2087);
        assert_eq!(message.channel_b, 2088);
        assert_eq!(message.tx_rx_mode, TxRxMode::TX_A_TX_B_RX_A_RX_B);
        assert!(!message.low_power);
        assert_eq!(message.transitional_zone_size, 2);

        let ChannelManagementArea::Geographic(area) = message.area
        else {
            panic!("expected a geographic area");
        };
        assert_abs_diff_eq!(area.northeast_longitude.unwrap(), -128.5);
        assert_abs_diff_eq!(area.northeast_latitude.unwrap(), 55.0);
        assert_abs_diff_eq!(
            area.southwest_longitude.unwrap(),
            -133.666667,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(area.southwest_latitude.unwrap(), 53.5);
    }

    #[test]
    fn it_decodes_addressed_channel_management() {
        let mut payload = Payload::from_armored("F030p:j2N2P5aJR0r;6f3rj10000").unwrap();
        payload
            .write_bool(ChannelManagement::ADDRESSED, true)
            .unwrap();
        payload
            .write_u32(ChannelManagement::FIRST_MMSI, 227006760)
            .unwrap();
        payload
            .write_u32(ChannelManagement::SECOND_MMSI, 366999712)
            .unwrap();

        let Message::ChannelManagement(message) = Message::decode(&payload).unwrap()
        else {
            panic!("expected a channel management message");
        };
        let ChannelManagementArea::Addressed {
            first_mmsi,
            second_mmsi,
        } = message.area
        else {
            panic!("expected an addressed message");
        };
        assert_eq!(first_mmsi.as_u32(), 227006760);
        assert_eq!(second_mmsi.as_u32(), 366999712);
        assert_eq!(message.channel_a, 2087);
    }

    #[test]
    fn it_decodes_a_group_assignment_command() {
        let Message::GroupAssignmentCommand(command) = decode("G02:Kn01R`sn@291nj600000900", 2)
        else {
            panic!("expected a group assignment command");
        };
        assert_eq!(command.header.mmsi.as_u32(), 2268120);
        assert_abs_diff_eq!(command.area.northeast_longitude.unwrap(), 2.63, epsilon = 1e-9);
        assert_abs_diff_eq!(command.area.northeast_latitude.unwrap(), 51.07, epsilon = 1e-9);
        assert_abs_diff_eq!(
            command.area.southwest_longitude.unwrap(),
            1.826667,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(command.area.southwest_latitude.unwrap(), 50.68, epsilon = 1e-9);
        assert_eq!(command.station_type, StationType::INLAND_WATERWAYS);
        assert_eq!(command.ship_type, ShipType::NOT_AVAILABLE);
        assert_eq!(command.tx_rx_mode, TxRxMode::TX_A_TX_B_RX_A_RX_B);
        assert_eq!(command.reporting_interval, 9);
        assert_eq!(command.quiet_time, 0);
    }
}
