//! Binary messages and acknowledgements
//!
//! The application data is kept as [`BinaryData`]. Its interpretation depends
//! on the [`ApplicationId`] and is not done here.

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
        BinaryData,
        CoordinateResolution,
        Payload,
    },
};

/// Identifies the application of binary data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplicationId {
    /// DAC, 10 bits. 1 is international, otherwise the MID of the region.
    pub designated_area_code: u16,
    /// FI, 6 bits
    pub function_id: u8,
}

impl ApplicationId {
    pub const BITS: usize = 16;

    pub const fn fields(start: usize) -> [Field; 2] {
        [
            Field::new("designated_area_code", start, 10),
            Field::new("function_id", start + 10, 6),
        ]
    }

    pub fn decode(payload: &Payload, fields: &[Field; 2]) -> Result<Self, DecodeError> {
        Ok(Self {
            designated_area_code: payload.read_u32(fields[0])? as u16,
            function_id: payload.read_u32(fields[1])? as u8,
        })
    }
}

/// Message type 6
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryAddressedMessage {
    pub header: Header,
    pub sequence_number: u8,
    pub destination_mmsi: Mmsi,
    pub retransmitted: bool,
    pub spare: u8,
    pub application_id: ApplicationId,
    pub data: BinaryData,
}

impl BinaryAddressedMessage {
    pub const SEQUENCE_NUMBER: Field = Field::new("sequence_number", 38, 2);
    pub const DESTINATION_MMSI: Field = Field::new("destination_mmsi", 40, 30);
    pub const RETRANSMITTED: Field = Field::new("retransmitted", 70, 1);
    pub const SPARE: Field = Field::new("spare", 71, 1);
    pub const APPLICATION_ID: [Field; 2] = ApplicationId::fields(72);
    pub const DATA: Field = Field::new("data", 88, 920);

    pub const LAYOUT: Layout = Layout {
        name: "BinaryAddressedMessage",
        fields: fields![
            Self::SEQUENCE_NUMBER,
            Self::DESTINATION_MMSI,
            Self::RETRANSMITTED,
            Self::SPARE,
            Self::APPLICATION_ID[0],
            Self::APPLICATION_ID[1],
            Self::DATA,
        ],
        max_bits: 1008,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            header: Header::decode(payload)?,
            sequence_number: payload.read_u32(Self::SEQUENCE_NUMBER)? as u8,
            destination_mmsi: payload.read_mmsi(Self::DESTINATION_MMSI)?,
            retransmitted: payload.read_bool(Self::RETRANSMITTED)?,
            spare: payload.read_u32(Self::SPARE)? as u8,
            application_id: ApplicationId::decode(payload, &Self::APPLICATION_ID)?,
            data: payload.read_data(Self::DATA),
        })
    }
}

/// One acknowledged message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Acknowledgement {
    pub mmsi: Mmsi,
    pub sequence_number: u8,
}

impl Acknowledgement {
    fn decode(payload: &Payload, fields: &[Field; 2]) -> Result<Self, DecodeError> {
        Ok(Self {
            mmsi: payload.read_mmsi(fields[0])?,
            sequence_number: payload.read_u32(fields[1])? as u8,
        })
    }
}

/// Message types 7 and 13
///
/// Binary acknowledge (7) and safety related acknowledgement (13). Both
/// acknowledge up to 4 addressed messages.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Acknowledge {
    pub header: Header,
    pub spare: u8,
    /// At least one, at most 4
    pub acknowledgements: Vec<Acknowledgement>,
}

impl Acknowledge {
    pub const SPARE: Field = Field::new("spare", 38, 2);
    pub const ACKNOWLEDGEMENTS: [[Field; 2]; 4] = [
        [
            Field::new("mmsi_1", 40, 30),
            Field::new("sequence_number_1", 70, 2),
        ],
        [
            Field::new("mmsi_2", 72, 30),
            Field::new("sequence_number_2", 102, 2),
        ],
        [
            Field::new("mmsi_3", 104, 30),
            Field::new("sequence_number_3", 134, 2),
        ],
        [
            Field::new("mmsi_4", 136, 30),
            Field::new("sequence_number_4", 166, 2),
        ],
    ];

    pub const LAYOUT: Layout = Layout {
        name: "Acknowledge",
        fields: fields![
            Self::SPARE,
            Self::ACKNOWLEDGEMENTS[0][0],
            Self::ACKNOWLEDGEMENTS[0][1],
            Self::ACKNOWLEDGEMENTS[1][0],
            Self::ACKNOWLEDGEMENTS[1][1],
            Self::ACKNOWLEDGEMENTS[2][0],
            Self::ACKNOWLEDGEMENTS[2][1],
            Self::ACKNOWLEDGEMENTS[3][0],
            Self::ACKNOWLEDGEMENTS[3][1],
        ],
        max_bits: 168,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        let header = Header::decode(payload)?;
        let spare = payload.read_u32(Self::SPARE)? as u8;

        let mut acknowledgements = Vec::with_capacity(Self::ACKNOWLEDGEMENTS.len());
        acknowledgements.push(Acknowledgement::decode(
            payload,
            &Self::ACKNOWLEDGEMENTS[0],
        )?);
        for fields in &Self::ACKNOWLEDGEMENTS[1..] {
            if !payload.contains(fields[1]) {
                break;
            }
            acknowledgements.push(Acknowledgement::decode(payload, fields)?);
        }

        Ok(Self {
            header,
            spare,
            acknowledgements,
        })
    }
}

/// Message type 8
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryBroadcastMessage {
    pub header: Header,
    pub spare: u8,
    pub application_id: ApplicationId,
    pub data: BinaryData,
}

impl BinaryBroadcastMessage {
    pub const SPARE: Field = Field::new("spare", 38, 2);
    pub const APPLICATION_ID: [Field; 2] = ApplicationId::fields(40);
    pub const DATA: Field = Field::new("data", 56, 952);

    pub const LAYOUT: Layout = Layout {
        name: "BinaryBroadcastMessage",
        fields: fields![
            Self::SPARE,
            Self::APPLICATION_ID[0],
            Self::APPLICATION_ID[1],
            Self::DATA,
        ],
        max_bits: 1008,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            header: Header::decode(payload)?,
            spare: payload.read_u32(Self::SPARE)? as u8,
            application_id: ApplicationId::decode(payload, &Self::APPLICATION_ID)?,
            data: payload.read_data(Self::DATA),
        })
    }
}

/// Message type 17
///
/// DGNSS corrections broadcast by a base station. The position is that of the
/// reference station, with a resolution of 1/10 minute.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DgnssBinaryBroadcastMessage {
    pub header: Header,
    pub spare: u8,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub spare_2: u8,
    pub data: BinaryData,
}

impl DgnssBinaryBroadcastMessage {
    pub const SPARE: Field = Field::new("spare", 38, 2);
    pub const LONGITUDE: Field = Field::new("longitude", 40, 18);
    pub const LATITUDE: Field = Field::new("latitude", 58, 17);
    pub const SPARE_2: Field = Field::new("spare_2", 75, 5);
    pub const DATA: Field = Field::new("data", 80, 736);

    pub const LAYOUT: Layout = Layout {
        name: "DgnssBinaryBroadcastMessage",
        fields: fields![
            Self::SPARE,
            Self::LONGITUDE,
            Self::LATITUDE,
            Self::SPARE_2,
            Self::DATA,
        ],
        max_bits: 816,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            header: Header::decode(payload)?,
            spare: payload.read_u32(Self::SPARE)? as u8,
            longitude: payload.read_longitude(Self::LONGITUDE, CoordinateResolution::TenthMinute)?,
            latitude: payload.read_latitude(Self::LATITUDE, CoordinateResolution::TenthMinute)?,
            spare_2: payload.read_u32(Self::SPARE_2)? as u8,
            data: payload.read_data(Self::DATA),
        })
    }
}

/// Flags and optional fields at the start of message types 25 and 26.
struct SlotBinaryPrefix {
    destination_mmsi: Option<Mmsi>,
    application_id: Option<ApplicationId>,
    data_start: usize,
}

impl SlotBinaryPrefix {
    const ADDRESSED: Field = Field::new("addressed", 38, 1);
    const STRUCTURED: Field = Field::new("structured", 39, 1);
    const DESTINATION_MMSI: Field = Field::new("destination_mmsi", 40, 30);
    const APPLICATION_ID_BROADCAST: [Field; 2] = ApplicationId::fields(40);
    const APPLICATION_ID_ADDRESSED: [Field; 2] = ApplicationId::fields(70);

    fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        let addressed = payload.read_bool(Self::ADDRESSED)?;
        let structured = payload.read_bool(Self::STRUCTURED)?;

        let (destination_mmsi, application_id_fields) = if addressed {
            (
                Some(payload.read_mmsi(Self::DESTINATION_MMSI)?),
                &Self::APPLICATION_ID_ADDRESSED,
            )
        }
        else {
            (None, &Self::APPLICATION_ID_BROADCAST)
        };

        let application_id = structured
            .then(|| ApplicationId::decode(payload, application_id_fields))
            .transpose()?;

        let data_start = if structured {
            application_id_fields[1].end()
        }
        else {
            application_id_fields[0].start
        };

        Ok(Self {
            destination_mmsi,
            application_id,
            data_start,
        })
    }
}

/// Message type 25
///
/// Binary data of at most one slot, either broadcast or addressed, optionally
/// with an [`ApplicationId`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleSlotBinaryMessage {
    pub header: Header,
    /// `Some` if the message is addressed
    pub destination_mmsi: Option<Mmsi>,
    /// `Some` if the data is structured
    pub application_id: Option<ApplicationId>,
    pub data: BinaryData,
}

impl SingleSlotBinaryMessage {
    pub const ADDRESSED: Field = SlotBinaryPrefix::ADDRESSED;
    pub const STRUCTURED: Field = SlotBinaryPrefix::STRUCTURED;
    pub const DESTINATION_MMSI: Field = SlotBinaryPrefix::DESTINATION_MMSI;

    const MAX_BITS: usize = 168;

    pub const LAYOUT_BROADCAST: Layout = Layout {
        name: "SingleSlotBinaryMessage (broadcast)",
        fields: fields![
            Self::ADDRESSED,
            Self::STRUCTURED,
            Field::new("data", 40, Self::MAX_BITS - 40),
        ],
        max_bits: Self::MAX_BITS,
    };

    pub const LAYOUT_BROADCAST_STRUCTURED: Layout = Layout {
        name: "SingleSlotBinaryMessage (broadcast, structured)",
        fields: fields![
            Self::ADDRESSED,
            Self::STRUCTURED,
            SlotBinaryPrefix::APPLICATION_ID_BROADCAST[0],
            SlotBinaryPrefix::APPLICATION_ID_BROADCAST[1],
            Field::new("data", 56, Self::MAX_BITS - 56),
        ],
        max_bits: Self::MAX_BITS,
    };

    pub const LAYOUT_ADDRESSED: Layout = Layout {
        name: "SingleSlotBinaryMessage (addressed)",
        fields: fields![
            Self::ADDRESSED,
            Self::STRUCTURED,
            Self::DESTINATION_MMSI,
            Field::new("data", 70, Self::MAX_BITS - 70),
        ],
        max_bits: Self::MAX_BITS,
    };

    pub const LAYOUT_ADDRESSED_STRUCTURED: Layout = Layout {
        name: "SingleSlotBinaryMessage (addressed, structured)",
        fields: fields![
            Self::ADDRESSED,
            Self::STRUCTURED,
            Self::DESTINATION_MMSI,
            SlotBinaryPrefix::APPLICATION_ID_ADDRESSED[0],
            SlotBinaryPrefix::APPLICATION_ID_ADDRESSED[1],
            Field::new("data", 86, Self::MAX_BITS - 86),
        ],
        max_bits: Self::MAX_BITS,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        let header = Header::decode(payload)?;
        let prefix = SlotBinaryPrefix::decode(payload)?;
        let data = payload.read_data(Field::new(
            "data",
            prefix.data_start,
            Self::MAX_BITS.saturating_sub(prefix.data_start),
        ));

        Ok(Self {
            header,
            destination_mmsi: prefix.destination_mmsi,
            application_id: prefix.application_id,
            data,
        })
    }

    pub fn is_addressed(&self) -> bool {
        self.destination_mmsi.is_some()
    }
}

/// Message type 26
///
/// Like [`SingleSlotBinaryMessage`], but spanning up to 5 slots and followed
/// by the communication state of the sender.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultipleSlotBinaryMessage {
    pub header: Header,
    /// `Some` if the message is addressed
    pub destination_mmsi: Option<Mmsi>,
    /// `Some` if the data is structured
    pub application_id: Option<ApplicationId>,
    pub data: BinaryData,
    /// Communication state selector flag and SOTDMA or ITDMA state.
    pub radio_status: u32,
}

impl MultipleSlotBinaryMessage {
    pub const ADDRESSED: Field = SlotBinaryPrefix::ADDRESSED;
    pub const STRUCTURED: Field = SlotBinaryPrefix::STRUCTURED;
    pub const DESTINATION_MMSI: Field = SlotBinaryPrefix::DESTINATION_MMSI;

    /// Number of bits of the radio status at the end of the message.
    pub const RADIO_STATUS_BITS: usize = 20;

    const MAX_BITS: usize = 1064;
    const RADIO_STATUS_START: usize = Self::MAX_BITS - Self::RADIO_STATUS_BITS;

    // The layouts are those of a message of maximum length. In shorter
    // messages the radio status directly follows the data.

    pub const LAYOUT_BROADCAST: Layout = Layout {
        name: "MultipleSlotBinaryMessage (broadcast)",
        fields: fields![
            Self::ADDRESSED,
            Self::STRUCTURED,
            Field::new("data", 40, Self::RADIO_STATUS_START - 40),
            Field::new(
                "radio_status",
                Self::RADIO_STATUS_START,
                Self::RADIO_STATUS_BITS
            ),
        ],
        max_bits: Self::MAX_BITS,
    };

    pub const LAYOUT_BROADCAST_STRUCTURED: Layout = Layout {
        name: "MultipleSlotBinaryMessage (broadcast, structured)",
        fields: fields![
            Self::ADDRESSED,
            Self::STRUCTURED,
            SlotBinaryPrefix::APPLICATION_ID_BROADCAST[0],
            SlotBinaryPrefix::APPLICATION_ID_BROADCAST[1],
            Field::new("data", 56, Self::RADIO_STATUS_START - 56),
            Field::new(
                "radio_status",
                Self::RADIO_STATUS_START,
                Self::RADIO_STATUS_BITS
            ),
        ],
        max_bits: Self::MAX_BITS,
    };

    pub const LAYOUT_ADDRESSED: Layout = Layout {
        name: "MultipleSlotBinaryMessage (addressed)",
        fields: fields![
            Self::ADDRESSED,
            Self::STRUCTURED,
            Self::DESTINATION_MMSI,
            Field::new("data", 70, Self::RADIO_STATUS_START - 70),
            Field::new(
                "radio_status",
                Self::RADIO_STATUS_START,
                Self::RADIO_STATUS_BITS
            ),
        ],
        max_bits: Self::MAX_BITS,
    };

    pub const LAYOUT_ADDRESSED_STRUCTURED: Layout = Layout {
        name: "MultipleSlotBinaryMessage (addressed, structured)",
        fields: fields![
            Self::ADDRESSED,
            Self::STRUCTURED,
            Self::DESTINATION_MMSI,
            SlotBinaryPrefix::APPLICATION_ID_ADDRESSED[0],
            SlotBinaryPrefix::APPLICATION_ID_ADDRESSED[1],
            Field::new("data", 86, Self::RADIO_STATUS_START - 86),
            Field::new(
                "radio_status",
                Self::RADIO_STATUS_START,
                Self::RADIO_STATUS_BITS
            ),
        ],
        max_bits: Self::MAX_BITS,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        let header = Header::decode(payload)?;
        let prefix = SlotBinaryPrefix::decode(payload)?;

        // the radio status takes the last 20 bits. if there is no room for it
        // after the prefix, reading it fails with the expected minimum length.
        let radio_status_start = payload
            .len()
            .saturating_sub(Self::RADIO_STATUS_BITS)
            .max(prefix.data_start);
        let radio_status = payload.read_u32(Field::new(
            "radio_status",
            radio_status_start,
            Self::RADIO_STATUS_BITS,
        ))?;
        let data = payload.read_data(Field::new(
            "data",
            prefix.data_start,
            radio_status_start - prefix.data_start,
        ));

        Ok(Self {
            header,
            destination_mmsi: prefix.destination_mmsi,
            application_id: prefix.application_id,
            data,
            radio_status,
        })
    }

    pub fn is_addressed(&self) -> bool {
        self.destination_mmsi.is_some()
    }
}
