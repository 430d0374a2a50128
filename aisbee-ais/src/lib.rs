//! AIS message decoder and encoder
//!
//! Decodes the 6 bit armored payload of AIS messages (the 5th field of a
//! `!AIVDM` sentence) into typed messages, and encodes some of them back.
//!
//! ```
//! # use aisbee_ais::{Message, Payload};
//! let payload = Payload::from_armored("13GmFd002pwrel@LpMu8L6qn8Vp0").unwrap();
//! let message = Message::decode(&payload).unwrap();
//! assert_eq!(message.mmsi().as_u32(), 226318000);
//! ```
//!
//! Sentence framing, checksums and reassembly of multi-sentence messages are
//! handled by `aisbee-nmea`.
//!
//! - [ITU-R M.1371-5][1]
//! - [AIVDM/AIVDO protocol decoding][2]
//!
//! [1]: https://www.itu.int/rec/R-REC-M.1371-5-201402-I/en
//! [2]: https://gpsd.gitlab.io/gpsd/AIVDM.html

pub mod layout;
pub mod message;
pub mod payload;
pub mod sixbit;
pub mod types;

pub use aisbee_types::{
    Mmsi,
    MmsiKind,
};

pub use crate::{
    layout::{
        Field,
        LAYOUTS,
        Layout,
    },
    message::{
        Header,
        Message,
    },
    payload::{
        BinaryData,
        CoordinateResolution,
        Payload,
    },
    types::MessageType,
};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid armor character {character:?} at position {position}")]
    InvalidArmorCharacter { character: char, position: usize },

    #[error("invalid number of fill bits: {fill_bits}")]
    InvalidFillBits { fill_bits: u8 },

    #[error("unknown message type: {value}")]
    UnknownMessageType { value: u8 },

    #[error(
        "field {field} needs {expected_length} bits, but payload is only {payload_length} bits long"
    )]
    Truncated {
        field: &'static str,
        expected_length: usize,
        payload_length: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("encoding of message type {message_type:?} is not supported")]
    Unsupported { message_type: MessageType },

    #[error("value {value} doesn't fit into field {field}")]
    ValueOutOfRange { field: &'static str, value: i64 },

    #[error("value for field {field} is not a finite number")]
    NotFinite { field: &'static str },

    #[error("character {character:?} can't be encoded in field {field}")]
    InvalidCharacter { field: &'static str, character: char },

    #[error("text in field {field} ends with a space")]
    TrailingSpace { field: &'static str },

    #[error("static data report part B tail doesn't match the kind of MMSI {mmsi}")]
    MismatchedPartBTail { mmsi: Mmsi },
}
