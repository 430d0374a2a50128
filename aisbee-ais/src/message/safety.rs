//! Safety related text messages

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
    payload::Payload,
    types::MessageType,
};

/// Message type 12
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressedSafetyRelatedMessage {
    pub header: Header,
    pub sequence_number: u8,
    pub destination_mmsi: Mmsi,
    pub retransmitted: bool,
    pub spare: u8,
    /// Up to 156 characters
    pub text: String,
}

impl AddressedSafetyRelatedMessage {
    pub const SEQUENCE_NUMBER: Field = Field::new("sequence_number", 38, 2);
    pub const DESTINATION_MMSI: Field = Field::new("destination_mmsi", 40, 30);
    pub const RETRANSMITTED: Field = Field::new("retransmitted", 70, 1);
    pub const SPARE: Field = Field::new("spare", 71, 1);
    pub const TEXT: Field = Field::new("text", 72, 936);

    pub const LAYOUT: Layout = Layout {
        name: "AddressedSafetyRelatedMessage",
        fields: fields![
            Self::SEQUENCE_NUMBER,
            Self::DESTINATION_MMSI,
            Self::RETRANSMITTED,
            Self::SPARE,
            Self::TEXT,
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
            text: payload.read_text(Self::TEXT),
        })
    }

    pub fn encode(&self, payload: &mut Payload) -> Result<(), EncodeError> {
        self.header
            .encode(payload, &[MessageType::ADDRESSED_SAFETY_RELATED_MESSAGE])?;
        payload.write_u32(Self::SEQUENCE_NUMBER, self.sequence_number.into())?;
        payload.write_mmsi(Self::DESTINATION_MMSI, self.destination_mmsi)?;
        payload.write_bool(Self::RETRANSMITTED, self.retransmitted)?;
        payload.write_u32(Self::SPARE, self.spare.into())?;
        payload.write_text(Self::TEXT, &self.text)?;
        Ok(())
    }
}

/// Message type 14
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafetyRelatedBroadcastMessage {
    pub header: Header,
    pub spare: u8,
    /// Up to 161 characters
    pub text: String,
}

impl SafetyRelatedBroadcastMessage {
    pub const SPARE: Field = Field::new("spare", 38, 2);
    pub const TEXT: Field = Field::new("text", 40, 968);

    pub const LAYOUT: Layout = Layout {
        name: "SafetyRelatedBroadcastMessage",
        fields: fields![Self::SPARE, Self::TEXT],
        max_bits: 1008,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            header: Header::decode(payload)?,
            spare: payload.read_u32(Self::SPARE)? as u8,
            text: payload.read_text(Self::TEXT),
        })
    }

    pub fn encode(&self, payload: &mut Payload) -> Result<(), EncodeError> {
        self.header
            .encode(payload, &[MessageType::SAFETY_RELATED_BROADCAST_MESSAGE])?;
        payload.write_u32(Self::SPARE, self.spare.into())?;
        payload.write_text(Self::TEXT, &self.text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use aisbee_types::Mmsi;

    use crate::{
        EncodeError,
        message::{
            AddressedSafetyRelatedMessage,
            Header,
            Message,
            SafetyRelatedBroadcastMessage,
        },
        payload::Payload,
        types::MessageType,
    };

    #[test]
    fn it_decodes_a_safety_related_broadcast() {
        let payload = Payload::from_armored_with_fill_bits(">5?Per18=HB1U:1@E=B0m<L", 2).unwrap();
        let message = Message::decode(&payload).unwrap();
        let Message::SafetyRelatedBroadcastMessage(broadcast) = &message
        else {
            panic!("expected a safety related broadcast");
        };
        assert_eq!(broadcast.header.mmsi.as_u32(), 351809000);
        assert_eq!(broadcast.text, "RCVD YR TEST MSG");

        let encoded = message.encode().unwrap();
        assert_eq!(encoded, payload);
        assert_eq!(
            encoded.to_armored(),
            (">5?Per18=HB1U:1@E=B0m<L".to_owned(), 2)
        );
    }

    #[test]
    fn it_round_trips_safety_related_broadcasts() {
        for text in ["", "SECURITE", "NAVAREA I 123/26. GALE WARNING. FORCE 8?"] {
            let message = Message::SafetyRelatedBroadcastMessage(SafetyRelatedBroadcastMessage {
                header: Header::new(
                    MessageType::SAFETY_RELATED_BROADCAST_MESSAGE,
                    Mmsi::from_u32(2579999).unwrap(),
                ),
                spare: 0,
                text: text.to_owned(),
            });
            let payload = message.encode().unwrap();
            assert_eq!(payload.len(), 40 + text.len() * 6);
            assert_eq!(Message::decode(&payload).unwrap(), message);
        }
    }

    #[test]
    fn it_truncates_overlong_broadcasts() {
        let message = SafetyRelatedBroadcastMessage {
            header: Header::new(
                MessageType::SAFETY_RELATED_BROADCAST_MESSAGE,
                Mmsi::from_u32(2579999).unwrap(),
            ),
            spare: 0,
            text: "A".repeat(200),
        };
        let mut payload = Payload::new();
        message.encode(&mut payload).unwrap();
        assert_eq!(payload.len(), 1008);
        let decoded = SafetyRelatedBroadcastMessage::decode(&payload).unwrap();
        assert_eq!(decoded.text.len(), 161);
    }

    #[test]
    fn it_decodes_an_addressed_safety_related_message() {
        let payload = Payload::from_armored("<5?SIj1;GbD07??4").unwrap();
        let Message::AddressedSafetyRelatedMessage(message) = Message::decode(&payload).unwrap()
        else {
            panic!("expected an addressed safety related message");
        };
        assert_eq!(message.header.mmsi.as_u32(), 351853000);
        assert_eq!(message.destination_mmsi.as_u32(), 316123456);
        assert_eq!(message.sequence_number, 0);
        assert!(!message.retransmitted);
        assert_eq!(message.text, "GOOD");

        let mut encoded = Payload::new();
        message.encode(&mut encoded).unwrap();
        assert_eq!(encoded, payload);
    }

    #[test]
    fn it_rejects_characters_outside_the_text_charset() {
        let message = Message::AddressedSafetyRelatedMessage(AddressedSafetyRelatedMessage {
            header: Header::new(
                MessageType::ADDRESSED_SAFETY_RELATED_MESSAGE,
                Mmsi::from_u32(351853000).unwrap(),
            ),
            sequence_number: 1,
            destination_mmsi: Mmsi::from_u32(316123456).unwrap(),
            retransmitted: false,
            spare: 0,
            text: "50°N".to_owned(),
        });
        assert!(matches!(
            message.encode(),
            Err(EncodeError::InvalidCharacter {
                field: "text",
                character: '°'
            })
        ));
    }

    #[test]
    fn it_rejects_text_with_a_trailing_space() {
        let message = Message::SafetyRelatedBroadcastMessage(SafetyRelatedBroadcastMessage {
            header: Header::new(
                MessageType::SAFETY_RELATED_BROADCAST_MESSAGE,
                Mmsi::from_u32(2579999).unwrap(),
            ),
            spare: 0,
            text: "SECURITE ".to_owned(),
        });
        assert!(matches!(
            message.encode(),
            Err(EncodeError::TrailingSpace { field: "text" })
        ));
    }
}
