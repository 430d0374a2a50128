//! AIS messages
//!
//! [`Message::decode`] dispatches on the message type to the decoder of the
//! variant. Message types that share a layout share a record type:
//!
//! - 1, 2 and 3: [`PositionReportClassA`]
//! - 4 and 11: [`BaseStationReport`]
//! - 7 and 13: [`Acknowledge`]
//!
//! The message type is kept in the [`Header`] of every record.

mod binary;
mod control;
mod position;
mod safety;
mod static_data;
mod station;

use aisbee_types::Mmsi;

pub use self::{
    binary::{
        Acknowledge,
        Acknowledgement,
        ApplicationId,
        BinaryAddressedMessage,
        BinaryBroadcastMessage,
        DgnssBinaryBroadcastMessage,
        MultipleSlotBinaryMessage,
        SingleSlotBinaryMessage,
    },
    control::{
        AssignmentModeCommand,
        ChannelManagement,
        ChannelManagementArea,
        DataLinkManagement,
        GeographicArea,
        GroupAssignmentCommand,
        Interrogation,
        SlotAssignment,
        SlotReservation,
    },
    position::{
        ExtendedClassBCsPositionReport,
        PositionReportClassA,
        PositionReportForLongRangeApplications,
        StandardClassBCsPositionReport,
        StandardSarAircraftPositionReport,
    },
    safety::{
        AddressedSafetyRelatedMessage,
        SafetyRelatedBroadcastMessage,
    },
    static_data::{
        AidToNavigationReport,
        PartBTail,
        StaticAndVoyageRelatedData,
        StaticDataReport,
        StaticDataReportPartA,
        StaticDataReportPartB,
    },
    station::{
        BaseStationReport,
        UtcAndDateInquiry,
    },
};
use crate::{
    DecodeError,
    EncodeError,
    layout::Field,
    payload::Payload,
    types::{
        MessageType,
        TransceiverType,
    },
};

/// Fields common to all messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    pub message_type: MessageType,
    /// Number of times the message has been repeated. 3 means "do not
    /// repeat".
    pub repeat: u8,
    pub mmsi: Mmsi,
}

impl Header {
    pub const MESSAGE_TYPE: Field = Field::new("message_type", 0, 6);
    pub const REPEAT: Field = Field::new("repeat", 6, 2);
    pub const MMSI: Field = Field::new("mmsi", 8, 30);

    /// Number of bits occupied by the header.
    pub const BITS: usize = 38;

    pub fn new(message_type: MessageType, mmsi: Mmsi) -> Self {
        Self {
            message_type,
            repeat: 0,
            mmsi,
        }
    }

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            message_type: payload.read_enum(Self::MESSAGE_TYPE)?,
            repeat: payload.read_u32(Self::REPEAT)? as u8,
            mmsi: payload.read_mmsi(Self::MMSI)?,
        })
    }

    /// Encodes the header. The message type must be one of `message_types`,
    /// i.e. one that shares the layout of the record being encoded.
    pub fn encode(
        &self,
        payload: &mut Payload,
        message_types: &[MessageType],
    ) -> Result<(), EncodeError> {
        if !message_types.contains(&self.message_type) {
            return Err(EncodeError::ValueOutOfRange {
                field: Self::MESSAGE_TYPE.name,
                value: self.message_type.as_u8().into(),
            });
        }
        payload.write_enum(Self::MESSAGE_TYPE, self.message_type)?;
        payload.write_u32(Self::REPEAT, self.repeat.into())?;
        payload.write_mmsi(Self::MMSI, self.mmsi)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    PositionReportClassA(PositionReportClassA),
    BaseStationReport(BaseStationReport),
    StaticAndVoyageRelatedData(StaticAndVoyageRelatedData),
    BinaryAddressedMessage(BinaryAddressedMessage),
    Acknowledge(Acknowledge),
    BinaryBroadcastMessage(BinaryBroadcastMessage),
    StandardSarAircraftPositionReport(StandardSarAircraftPositionReport),
    UtcAndDateInquiry(UtcAndDateInquiry),
    AddressedSafetyRelatedMessage(AddressedSafetyRelatedMessage),
    SafetyRelatedBroadcastMessage(SafetyRelatedBroadcastMessage),
    Interrogation(Interrogation),
    AssignmentModeCommand(AssignmentModeCommand),
    DgnssBinaryBroadcastMessage(DgnssBinaryBroadcastMessage),
    StandardClassBCsPositionReport(StandardClassBCsPositionReport),
    ExtendedClassBCsPositionReport(ExtendedClassBCsPositionReport),
    DataLinkManagement(DataLinkManagement),
    AidToNavigationReport(AidToNavigationReport),
    ChannelManagement(ChannelManagement),
    GroupAssignmentCommand(GroupAssignmentCommand),
    StaticDataReport(StaticDataReport),
    SingleSlotBinaryMessage(SingleSlotBinaryMessage),
    MultipleSlotBinaryMessage(MultipleSlotBinaryMessage),
    PositionReportForLongRangeApplications(PositionReportForLongRangeApplications),
}

impl Message {
    /// Decodes a message.
    ///
    /// Optional trailing fields of variable length messages are `None` or
    /// empty if the payload ends before them. Required fields that are cut
    /// off result in [`DecodeError::Truncated`].
    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        let message_type = payload.message_type()?;

        let message = match message_type {
            MessageType::POSITION_REPORT_CLASS_A
            | MessageType::POSITION_REPORT_CLASS_A_ASSIGNED_SCHEDULE
            | MessageType::POSITION_REPORT_CLASS_A_RESPONSE_TO_INTERROGATION => {
                Self::PositionReportClassA(PositionReportClassA::decode(payload)?)
            }
            MessageType::BASE_STATION_REPORT | MessageType::UTC_AND_DATE_RESPONSE => {
                Self::BaseStationReport(BaseStationReport::decode(payload)?)
            }
            MessageType::STATIC_AND_VOYAGE_RELATED_DATA => {
                Self::StaticAndVoyageRelatedData(StaticAndVoyageRelatedData::decode(payload)?)
            }
            MessageType::BINARY_ADDRESSED_MESSAGE => {
                Self::BinaryAddressedMessage(BinaryAddressedMessage::decode(payload)?)
            }
            MessageType::BINARY_ACKNOWLEDGE | MessageType::SAFETY_RELATED_ACKNOWLEDGEMENT => {
                Self::Acknowledge(Acknowledge::decode(payload)?)
            }
            MessageType::BINARY_BROADCAST_MESSAGE => {
                Self::BinaryBroadcastMessage(BinaryBroadcastMessage::decode(payload)?)
            }
            MessageType::STANDARD_SAR_AIRCRAFT_POSITION_REPORT => {
                Self::StandardSarAircraftPositionReport(
                    StandardSarAircraftPositionReport::decode(payload)?,
                )
            }
            MessageType::UTC_AND_DATE_INQUIRY => {
                Self::UtcAndDateInquiry(UtcAndDateInquiry::decode(payload)?)
            }
            MessageType::ADDRESSED_SAFETY_RELATED_MESSAGE => {
                Self::AddressedSafetyRelatedMessage(AddressedSafetyRelatedMessage::decode(
                    payload,
                )?)
            }
            MessageType::SAFETY_RELATED_BROADCAST_MESSAGE => {
                Self::SafetyRelatedBroadcastMessage(SafetyRelatedBroadcastMessage::decode(
                    payload,
                )?)
            }
            MessageType::INTERROGATION => Self::Interrogation(Interrogation::decode(payload)?),
            MessageType::ASSIGNMENT_MODE_COMMAND => {
                Self::AssignmentModeCommand(AssignmentModeCommand::decode(payload)?)
            }
            MessageType::DGNSS_BINARY_BROADCAST_MESSAGE => {
                Self::DgnssBinaryBroadcastMessage(DgnssBinaryBroadcastMessage::decode(payload)?)
            }
            MessageType::STANDARD_CLASS_B_CS_POSITION_REPORT => {
                Self::StandardClassBCsPositionReport(StandardClassBCsPositionReport::decode(
                    payload,
                )?)
            }
            MessageType::EXTENDED_CLASS_B_CS_POSITION_REPORT => {
                Self::ExtendedClassBCsPositionReport(ExtendedClassBCsPositionReport::decode(
                    payload,
                )?)
            }
            MessageType::DATA_LINK_MANAGEMENT => {
                Self::DataLinkManagement(DataLinkManagement::decode(payload)?)
            }
            MessageType::AID_TO_NAVIGATION_REPORT => {
                Self::AidToNavigationReport(AidToNavigationReport::decode(payload)?)
            }
            MessageType::CHANNEL_MANAGEMENT => {
                Self::ChannelManagement(ChannelManagement::decode(payload)?)
            }
            MessageType::GROUP_ASSIGNMENT_COMMAND => {
                Self::GroupAssignmentCommand(GroupAssignmentCommand::decode(payload)?)
            }
            MessageType::STATIC_DATA_REPORT => {
                Self::StaticDataReport(StaticDataReport::decode(payload)?)
            }
            MessageType::SINGLE_SLOT_BINARY_MESSAGE => {
                Self::SingleSlotBinaryMessage(SingleSlotBinaryMessage::decode(payload)?)
            }
            MessageType::MULTIPLE_SLOT_BINARY_MESSAGE => {
                Self::MultipleSlotBinaryMessage(MultipleSlotBinaryMessage::decode(payload)?)
            }
            MessageType::POSITION_REPORT_FOR_LONG_RANGE_APPLICATIONS => {
                Self::PositionReportForLongRangeApplications(
                    PositionReportForLongRangeApplications::decode(payload)?,
                )
            }
            MessageType(value) => return Err(DecodeError::UnknownMessageType { value }),
        };

        tracing::trace!(?message, "decoded message");

        Ok(message)
    }

    /// Encodes the message into a new payload.
    ///
    /// Supported are position reports of class A (1, 2, 3) and class B (18),
    /// base station reports (4, 11), static and voyage related data (5),
    /// safety related messages (12, 14) and static data reports (24).
    pub fn encode(&self) -> Result<Payload, EncodeError> {
        let mut payload = Payload::new();

        match self {
            Self::PositionReportClassA(message) => message.encode(&mut payload)?,
            Self::BaseStationReport(message) => message.encode(&mut payload)?,
            Self::StaticAndVoyageRelatedData(message) => message.encode(&mut payload)?,
            Self::AddressedSafetyRelatedMessage(message) => message.encode(&mut payload)?,
            Self::SafetyRelatedBroadcastMessage(message) => message.encode(&mut payload)?,
            Self::StandardClassBCsPositionReport(message) => message.encode(&mut payload)?,
            Self::StaticDataReport(message) => message.encode(&mut payload)?,
            _ => {
                return Err(EncodeError::Unsupported {
                    message_type: self.message_type(),
                });
            }
        }

        Ok(payload)
    }

    pub fn header(&self) -> &Header {
        match self {
            Self::PositionReportClassA(message) => &message.header,
            Self::BaseStationReport(message) => &message.header,
            Self::StaticAndVoyageRelatedData(message) => &message.header,
            Self::BinaryAddressedMessage(message) => &message.header,
            Self::Acknowledge(message) => &message.header,
            Self::BinaryBroadcastMessage(message) => &message.header,
            Self::StandardSarAircraftPositionReport(message) => &message.header,
            Self::UtcAndDateInquiry(message) => &message.header,
            Self::AddressedSafetyRelatedMessage(message) => &message.header,
            Self::SafetyRelatedBroadcastMessage(message) => &message.header,
            Self::Interrogation(message) => &message.header,
            Self::AssignmentModeCommand(message) => &message.header,
            Self::DgnssBinaryBroadcastMessage(message) => &message.header,
            Self::StandardClassBCsPositionReport(message) => &message.header,
            Self::ExtendedClassBCsPositionReport(message) => &message.header,
            Self::DataLinkManagement(message) => &message.header,
            Self::AidToNavigationReport(message) => &message.header,
            Self::ChannelManagement(message) => &message.header,
            Self::GroupAssignmentCommand(message) => &message.header,
            Self::StaticDataReport(message) => message.header(),
            Self::SingleSlotBinaryMessage(message) => &message.header,
            Self::MultipleSlotBinaryMessage(message) => &message.header,
            Self::PositionReportForLongRangeApplications(message) => &message.header,
        }
    }

    pub fn message_type(&self) -> MessageType {
        self.header().message_type
    }

    pub fn mmsi(&self) -> Mmsi {
        self.header().mmsi
    }

    /// Class of the transmitter, as implied by the message type.
    pub fn transceiver_type(&self) -> TransceiverType {
        match self {
            Self::StandardClassBCsPositionReport(_)
            | Self::ExtendedClassBCsPositionReport(_)
            | Self::StaticDataReport(_) => TransceiverType::ClassB,
            _ => TransceiverType::ClassA,
        }
    }

    /// Position as `(latitude, longitude)` in degrees, if the message
    /// carries one and it is available.
    pub fn position(&self) -> Option<(f64, f64)> {
        let (latitude, longitude) = match self {
            Self::PositionReportClassA(message) => (message.latitude, message.longitude),
            Self::BaseStationReport(message) => (message.latitude, message.longitude),
            Self::StandardSarAircraftPositionReport(message) => {
                (message.latitude, message.longitude)
            }
            Self::DgnssBinaryBroadcastMessage(message) => (message.latitude, message.longitude),
            Self::StandardClassBCsPositionReport(message) => {
                (message.latitude, message.longitude)
            }
            Self::ExtendedClassBCsPositionReport(message) => {
                (message.latitude, message.longitude)
            }
            Self::AidToNavigationReport(message) => (message.latitude, message.longitude),
            Self::PositionReportForLongRangeApplications(message) => {
                (message.latitude, message.longitude)
            }
            _ => return None,
        };
        Some((latitude?, longitude?))
    }
}
