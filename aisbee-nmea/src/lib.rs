//! NMEA 0183 framing of AIS payloads
//!
//! AIS payloads are transported in `!AIVDM` (received from other stations) and
//! `!AIVDO` (own station) sentences. Payloads longer than fit into one
//! sentence are split into up to 9 fragments, which [`Reassembler`] joins
//! again.
//!
//! ```text
//! !AIVDM,1,1,,B,13GmFd002pwrel@LpMu8L6qn8Vp0,0*56
//!  ^     ^ ^ ^ ^ ^                            ^ ^
//!  |     | | | | payload                      | checksum
//!  |     | | | channel                       fill bits
//!  |     | | sequential message id
//!  |     | fragment number
//!  |     number of fragments
//!  talker and sentence formatter
//! ```
//!
//! - [AIVDM/AIVDO protocol decoding][1]
//!
//! [1]: https://gpsd.gitlab.io/gpsd/AIVDM.html

mod reader;

use std::{
    collections::HashMap,
    fmt::Display,
    str::{
        FromStr,
        Utf8Error,
    },
};

use aisbee_ais::{
    DecodeError,
    EncodeError,
    Payload,
};

pub use crate::reader::Reader;

/// Maximum number of payload characters per sentence.
pub const MAX_PAYLOAD_LENGTH: usize = 60;

/// Maximum number of fragments of one message.
pub const MAX_FRAGMENTS: u8 = 9;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("sentence doesn't start with '!'")]
    MissingStart,

    #[error("sentence has no checksum")]
    MissingChecksum,

    #[error("checksum mismatch: expected {expected:02X}, calculated {calculated:02X}")]
    ChecksumMismatch { expected: u8, calculated: u8 },

    #[error("truncated sentence")]
    Truncated,

    #[error("invalid {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("not an AIS sentence: {header}")]
    NotAis { header: String },

    #[error("message needs {num_fragments} fragments, but at most 9 are allowed")]
    TooManyFragments { num_fragments: usize },

    #[error("maximum line length exceeded")]
    MaxLineLengthExceeded,

    #[error("invalid encoding")]
    InvalidEncoding(#[from] Utf8Error),

    #[error("io error")]
    Io(#[from] std::io::Error),

    #[error("payload decode error")]
    Decode(#[from] DecodeError),

    #[error("payload encode error")]
    Encode(#[from] EncodeError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SentenceKind {
    /// `VDM`, message received from another station
    Vdm,
    /// `VDO`, message sent by the own station
    Vdo,
}

impl SentenceKind {
    pub fn formatter(&self) -> &'static str {
        match self {
            Self::Vdm => "VDM",
            Self::Vdo => "VDO",
        }
    }
}

/// One AIVDM or AIVDO sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
    /// Talker ID, usually `AI`
    pub talker: String,
    pub kind: SentenceKind,
    pub num_fragments: u8,
    /// 1 based
    pub fragment_number: u8,
    /// Groups the fragments of a multi-sentence message.
    pub sequential_id: Option<u8>,
    /// Radio channel, `A` or `B`
    pub channel: Option<char>,
    /// Armored payload (fragment)
    pub payload: String,
    pub fill_bits: u8,
}

impl Sentence {
    pub fn is_fragmented(&self) -> bool {
        self.num_fragments > 1
    }

    fn body(&self) -> String {
        let mut body = format!(
            "{}{},{},{},",
            self.talker,
            self.kind.formatter(),
            self.num_fragments,
            self.fragment_number
        );
        if let Some(sequential_id) = self.sequential_id {
            body.push_str(&sequential_id.to_string());
        }
        body.push(',');
        if let Some(channel) = self.channel {
            body.push(channel);
        }
        body.push(',');
        body.push_str(&self.payload);
        body.push(',');
        body.push_str(&self.fill_bits.to_string());
        body
    }
}

/// XOR of all bytes between `!` and `*`.
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0, |checksum, byte| checksum ^ byte)
}

impl Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self.body();
        write!(f, "!{body}*{:02X}", checksum(&body))
    }
}

fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, Error> {
    value.parse().map_err(|_| {
        Error::InvalidField {
            field,
            value: value.to_owned(),
        }
    })
}

impl FromStr for Sentence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('!').ok_or(Error::MissingStart)?;
        let (body, expected) = s.split_once('*').ok_or(Error::MissingChecksum)?;

        let expected = u8::from_str_radix(expected, 16).map_err(|_| {
            Error::InvalidField {
                field: "checksum",
                value: expected.to_owned(),
            }
        })?;
        let calculated = checksum(body);
        if expected != calculated {
            return Err(Error::ChecksumMismatch {
                expected,
                calculated,
            });
        }

        let mut fields = body.split(',');

        // all fields are always present, but some might be empty
        let header = fields.next().ok_or(Error::Truncated)?;
        let num_fragments = fields.next().ok_or(Error::Truncated)?;
        let fragment_number = fields.next().ok_or(Error::Truncated)?;
        let sequential_id = fields.next().ok_or(Error::Truncated)?;
        let channel = fields.next().ok_or(Error::Truncated)?;
        let payload = fields.next().ok_or(Error::Truncated)?;
        let fill_bits = fields.next().ok_or(Error::Truncated)?;

        let (talker, kind) = match header.split_at_checked(2) {
            Some((talker, "VDM")) => (talker.to_owned(), SentenceKind::Vdm),
            Some((talker, "VDO")) => (talker.to_owned(), SentenceKind::Vdo),
            _ => {
                return Err(Error::NotAis {
                    header: header.to_owned(),
                });
            }
        };

        let num_fragments: u8 = parse_number("number of fragments", num_fragments)?;
        if num_fragments == 0 {
            return Err(Error::InvalidField {
                field: "number of fragments",
                value: num_fragments.to_string(),
            });
        }
        if num_fragments > MAX_FRAGMENTS {
            return Err(Error::TooManyFragments {
                num_fragments: num_fragments.into(),
            });
        }

        let fragment_number: u8 = parse_number("fragment number", fragment_number)?;
        if fragment_number == 0 || fragment_number > num_fragments {
            return Err(Error::InvalidField {
                field: "fragment number",
                value: fragment_number.to_string(),
            });
        }

        let sequential_id = if sequential_id.is_empty() {
            None
        }
        else {
            Some(parse_number("sequential message id", sequential_id)?)
        };

        let mut channel_chars = channel.chars();
        let channel = match (channel_chars.next(), channel_chars.next()) {
            (None, _) => None,
            (Some(channel), None) => Some(channel),
            _ => {
                return Err(Error::InvalidField {
                    field: "channel",
                    value: channel.to_owned(),
                });
            }
        };

        let fill_bits: u8 = parse_number("fill bits", fill_bits)?;

        Ok(Self {
            talker,
            kind,
            num_fragments,
            fragment_number,
            sequential_id,
            channel,
            payload: payload.to_owned(),
            fill_bits,
        })
    }
}

#[derive(Debug)]
struct PartialMessage {
    num_fragments: u8,
    num_received: u8,
    payload: String,
}

/// Joins the fragments of multi-sentence messages.
///
/// Fragments are grouped by their sequential message id. A first fragment
/// always starts a new group. Fragments that arrive out of order, and groups
/// with missing fragments, are dropped.
#[derive(Debug, Default)]
pub struct Reassembler {
    partial: HashMap<Option<u8>, PartialMessage>,
}

impl Reassembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sentence. Returns the payload once the message is complete.
    pub fn push(&mut self, sentence: &Sentence) -> Result<Option<Payload>, Error> {
        if !sentence.is_fragmented() {
            let payload = Payload::from_armored_with_fill_bits(&sentence.payload, sentence.fill_bits)?;
            return Ok(Some(payload));
        }

        let key = sentence.sequential_id;

        if sentence.fragment_number == 1 {
            let previous = self.partial.insert(
                key,
                PartialMessage {
                    num_fragments: sentence.num_fragments,
                    num_received: 1,
                    payload: sentence.payload.clone(),
                },
            );
            if previous.is_some() {
                tracing::debug!(sequential_id = ?key, "dropping incomplete message");
            }
            return Ok(None);
        }

        let Some(partial) = self.partial.get_mut(&key)
        else {
            tracing::debug!(
                sequential_id = ?key,
                fragment_number = sentence.fragment_number,
                "dropping fragment without a start"
            );
            return Ok(None);
        };

        if partial.num_fragments != sentence.num_fragments
            || partial.num_received + 1 != sentence.fragment_number
        {
            tracing::debug!(
                sequential_id = ?key,
                fragment_number = sentence.fragment_number,
                expected = partial.num_received + 1,
                "dropping message with missing or reordered fragments"
            );
            self.partial.remove(&key);
            return Ok(None);
        }

        partial.payload.push_str(&sentence.payload);
        partial.num_received += 1;

        if partial.num_received < partial.num_fragments {
            return Ok(None);
        }

        let Some(complete) = self.partial.remove(&key)
        else {
            return Ok(None);
        };
        let payload = Payload::from_armored_with_fill_bits(&complete.payload, sentence.fill_bits)?;
        Ok(Some(payload))
    }

    /// Number of messages waiting for more fragments.
    pub fn num_pending(&self) -> usize {
        self.partial.len()
    }
}

/// Splits a payload into sentences.
///
/// Each sentence carries at most [`MAX_PAYLOAD_LENGTH`] characters of the
/// armored payload. The fill bits are carried by the last sentence. The
/// `sequential_id` is only used if more than one sentence is needed.
pub fn to_sentences(
    payload: &Payload,
    kind: SentenceKind,
    sequential_id: Option<u8>,
) -> Result<Vec<Sentence>, Error> {
    let (armored, fill_bits) = payload.to_armored();
    let chars = armored.chars().collect::<Vec<_>>();

    let num_fragments = chars.len().div_ceil(MAX_PAYLOAD_LENGTH).max(1);
    if num_fragments > MAX_FRAGMENTS.into() {
        return Err(Error::TooManyFragments { num_fragments });
    }
    let num_fragments = num_fragments as u8;
    let sequential_id = if num_fragments > 1 {
        sequential_id
    }
    else {
        None
    };

    let mut sentences = Vec::with_capacity(num_fragments.into());
    for fragment_number in 1..=num_fragments {
        let start = usize::from(fragment_number - 1) * MAX_PAYLOAD_LENGTH;
        let end = (start + MAX_PAYLOAD_LENGTH).min(chars.len());
        sentences.push(Sentence {
            talker: "AI".to_owned(),
            kind,
            num_fragments,
            fragment_number,
            sequential_id,
            channel: Some('A'),
            payload: chars[start..end].iter().collect(),
            fill_bits: if fragment_number == num_fragments {
                fill_bits
            }
            else {
                0
            },
        });
    }

    Ok(sentences)
}

#[cfg(test)]
mod tests {
    use aisbee_ais::{
        Message,
        Payload,
    };

    use crate::{
        Error,
        Reassembler,
        Sentence,
        SentenceKind,
        to_sentences,
    };

    const TYPE_5_FRAGMENT_1: &str = "!AIVDM,2,1,1,B,53P<GC`000038D5c>01LThi=E10iV2222222220m1P834v2@044kmE20CD53,0*25";
    const TYPE_5_FRAGMENT_2: &str = "!AIVDM,2,2,1,B,k`888000000,2*25";

    #[test]
    fn it_parses_a_sentence() {
        let sentence: Sentence = "!AIVDM,1,1,,B,13GmFd002pwrel@LpMu8L6qn8Vp0,0*56"
            .parse()
            .unwrap();
        assert_eq!(sentence.talker, "AI");
        assert_eq!(sentence.kind, SentenceKind::Vdm);
        assert_eq!(sentence.num_fragments, 1);
        assert_eq!(sentence.fragment_number, 1);
        assert_eq!(sentence.sequential_id, None);
        assert_eq!(sentence.channel, Some('B'));
        assert_eq!(sentence.payload, "13GmFd002pwrel@LpMu8L6qn8Vp0");
        assert_eq!(sentence.fill_bits, 0);
        assert_eq!(
            sentence.to_string(),
            "!AIVDM,1,1,,B,13GmFd002pwrel@LpMu8L6qn8Vp0,0*56"
        );
    }

    #[test]
    fn it_accepts_trailing_line_endings() {
        let sentence: Sentence = "!AIVDM,2,2,1,B,k`888000000,2*25\r\n".parse().unwrap();
        assert_eq!(sentence.sequential_id, Some(1));
        assert_eq!(sentence.fill_bits, 2);
    }

    #[test]
    fn it_rejects_malformed_sentences() {
        assert!(matches!(
            "$GPGGA,1,2*00".parse::<Sentence>(),
            Err(Error::MissingStart)
        ));
        assert!(matches!(
            "!AIVDM,1,1,,B,13GmFd002pwrel@LpMu8L6qn8Vp0,0".parse::<Sentence>(),
            Err(Error::MissingChecksum)
        ));
        assert!(matches!(
            "!AIVDM,1,1,,B,13GmFd002pwrel@LpMu8L6qn8Vp0,0*57".parse::<Sentence>(),
            Err(Error::ChecksumMismatch {
                expected: 0x57,
                calculated: 0x56
            })
        ));
        assert!(matches!(
            "!AIVDM,1,1,,B*15".parse::<Sentence>(),
            Err(Error::Truncated)
        ));
    }

    #[test]
    fn it_rejects_other_sentence_types() {
        let body = "GPVTG,1,1,,B,13GmFd002pwrel@LpMu8L6qn8Vp0,0";
        let line = format!("!{body}*{:02X}", crate::checksum(body));
        assert!(matches!(
            line.parse::<Sentence>(),
            Err(Error::NotAis { header }) if header == "GPVTG"
        ));
    }

    #[test]
    fn it_passes_single_sentences_through() {
        let mut reassembler = Reassembler::new();
        let sentence = "!AIVDM,1,1,,B,13GmFd002pwrel@LpMu8L6qn8Vp0,0*56"
            .parse()
            .unwrap();
        let payload = reassembler.push(&sentence).unwrap().unwrap();
        assert_eq!(payload.len(), 168);
        let message = Message::decode(&payload).unwrap();
        assert_eq!(message.mmsi().as_u32(), 226318000);
    }

    #[test]
    fn it_reassembles_fragments() {
        let mut reassembler = Reassembler::new();
        let first = TYPE_5_FRAGMENT_1.parse().unwrap();
        let second = TYPE_5_FRAGMENT_2.parse().unwrap();

        assert!(reassembler.push(&first).unwrap().is_none());
        assert_eq!(reassembler.num_pending(), 1);
        let payload = reassembler.push(&second).unwrap().unwrap();
        assert_eq!(reassembler.num_pending(), 0);
        assert_eq!(payload.len(), 424);

        let Message::StaticAndVoyageRelatedData(data) = Message::decode(&payload).unwrap()
        else {
            panic!("expected static and voyage related data");
        };
        assert_eq!(data.header.mmsi.as_u32(), 235083598);
        assert_eq!(data.ship_name, "WILLSUPPLY");
        assert_eq!(data.call_sign, "2EAZ3");
    }

    #[test]
    fn it_drops_fragments_out_of_order() {
        let mut reassembler = Reassembler::new();
        let first = TYPE_5_FRAGMENT_1.parse().unwrap();
        let second = TYPE_5_FRAGMENT_2.parse().unwrap();

        assert!(reassembler.push(&second).unwrap().is_none());
        assert_eq!(reassembler.num_pending(), 0);

        // a new first fragment restarts the message
        assert!(reassembler.push(&first).unwrap().is_none());
        assert!(reassembler.push(&first).unwrap().is_none());
        assert!(reassembler.push(&second).unwrap().is_some());
    }

    #[test]
    fn it_splits_payloads_into_sentences() {
        let payload = Payload::from_armored("13GmFd002pwrel@LpMu8L6qn8Vp0").unwrap();
        let sentences = to_sentences(&payload, SentenceKind::Vdo, Some(3)).unwrap();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].sequential_id, None);
        assert_eq!(
            sentences[0].to_string(),
            "!AIVDO,1,1,,A,13GmFd002pwrel@LpMu8L6qn8Vp0,0*57"
        );

        let mut reassembler = Reassembler::new();
        let first = TYPE_5_FRAGMENT_1.parse().unwrap();
        let second = TYPE_5_FRAGMENT_2.parse().unwrap();
        reassembler.push(&first).unwrap();
        let payload = reassembler.push(&second).unwrap().unwrap();

        let sentences = to_sentences(&payload, SentenceKind::Vdm, Some(1)).unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].payload.len(), 60);
        assert_eq!(sentences[0].fill_bits, 0);
        assert_eq!(sentences[1].payload, "k`888000000");
        assert_eq!(sentences[1].fill_bits, 2);
        assert!(
            sentences
                .iter()
                .all(|sentence| sentence.sequential_id == Some(1))
        );

        let mut reassembler = Reassembler::new();
        let mut reassembled = None;
        for sentence in &sentences {
            let line = sentence.to_string();
            reassembled = reassembler.push(&line.parse().unwrap()).unwrap();
        }
        assert_eq!(reassembled, Some(payload));
    }
}
