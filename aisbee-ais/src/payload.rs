//! Bit addressable payload
//!
//! All read and write primitives take a [`Field`], so the bit range of a value
//! is declared in exactly one place. The scale and "not available" value of
//! every semantic type is handled by exactly one read/write pair here.

use std::fmt::{
    Debug,
    Display,
};

use aisbee_types::Mmsi;
use bytes::{
    BufMut,
    Bytes,
    BytesMut,
};

use crate::{
    DecodeError,
    EncodeError,
    layout::Field,
    message::Header,
    sixbit,
    types::{
        MessageType,
        RateOfTurn,
    },
};

/// Resolution of a latitude or longitude field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinateResolution {
    /// 1/10000 minute, 28 bits longitude and 27 bits latitude
    TenThousandthMinute,
    /// 1/10 minute, 18 bits longitude and 17 bits latitude
    TenthMinute,
}

impl CoordinateResolution {
    pub const fn units_per_degree(&self) -> f64 {
        match self {
            Self::TenThousandthMinute => 600_000.0,
            Self::TenthMinute => 600.0,
        }
    }
}

const LONGITUDE_NOT_AVAILABLE: f64 = 181.0;
const LATITUDE_NOT_AVAILABLE: f64 = 91.0;
const TRUE_HEADING_NOT_AVAILABLE: u32 = 511;

/// Variable length binary data, e.g. the application data of a binary
/// message.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryData {
    /// Bits packed MSB first. Unused bits of the last byte are 0.
    pub data: Bytes,
    pub bit_length: usize,
}

impl BinaryData {
    /// Creates binary data from whole bytes.
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        let data = data.into();
        let bit_length = data.len() * 8;
        Self { data, bit_length }
    }

    pub fn is_empty(&self) -> bool {
        self.bit_length == 0
    }
}

impl Debug for BinaryData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BinaryData({} bits, ", self.bit_length)?;
        for byte in &self.data {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// The binary content of an AIS message.
///
/// Bits are stored MSB first. Bits beyond [`len`][Self::len] are always 0.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Payload {
    bits: BytesMut,
    length: usize,
}

impl Payload {
    /// Creates an empty payload for encoding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dearmors a payload without fill bits.
    pub fn from_armored(armored: &str) -> Result<Self, DecodeError> {
        Self::from_armored_with_fill_bits(armored, 0)
    }

    /// Dearmors a payload whose last `fill_bits` bits are padding.
    pub fn from_armored_with_fill_bits(armored: &str, fill_bits: u8) -> Result<Self, DecodeError> {
        let mut payload = Self {
            bits: BytesMut::with_capacity((armored.len() * 6).div_ceil(8)),
            length: 0,
        };

        for (position, character) in armored.chars().enumerate() {
            let value = sixbit::dearmor(character).ok_or(DecodeError::InvalidArmorCharacter {
                character,
                position,
            })?;
            payload.set_bits(payload.length, 6, value.into());
        }

        if fill_bits > 5 || usize::from(fill_bits) > payload.length {
            return Err(DecodeError::InvalidFillBits { fill_bits });
        }
        payload.truncate(payload.length - usize::from(fill_bits));

        tracing::trace!(length = payload.length, "dearmored payload");

        Ok(payload)
    }

    /// Armors the payload.
    ///
    /// Returns the armored string and the number of fill bits that were
    /// appended to make the length a multiple of 6.
    pub fn to_armored(&self) -> (String, u8) {
        let num_chars = self.length.div_ceil(6);
        let armored = (0..num_chars)
            .map(|i| {
                let start = i * 6;
                let available = (self.length - start).min(6);
                let value = self.get_bits(start, available) << (6 - available);
                sixbit::armor(value as u8)
            })
            .collect();
        let fill_bits = (num_chars * 6 - self.length) as u8;
        (armored, fill_bits)
    }

    /// Length in bits
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns whether the payload is long enough to contain `field`.
    pub fn contains(&self, field: Field) -> bool {
        field.end() <= self.length
    }

    /// The message type in the first 6 bits.
    pub fn message_type(&self) -> Result<MessageType, DecodeError> {
        self.read_enum(Header::MESSAGE_TYPE)
    }

    fn bit(&self, index: usize) -> bool {
        self.bits[index / 8] & (0x80 >> (index % 8)) != 0
    }

    fn set_bit(&mut self, index: usize, value: bool) {
        let mask = 0x80 >> (index % 8);
        if value {
            self.bits[index / 8] |= mask;
        }
        else {
            self.bits[index / 8] &= !mask;
        }
    }

    /// Reads up to 64 bits. The range must be within the payload.
    fn get_bits(&self, start: usize, width: usize) -> u64 {
        debug_assert!(width <= 64);
        debug_assert!(start + width <= self.length);
        (start..start + width).fold(0, |value, index| (value << 1) | u64::from(self.bit(index)))
    }

    /// Writes the lower `width` bits of `value`, growing the payload if
    /// necessary.
    fn set_bits(&mut self, start: usize, width: usize, value: u64) {
        debug_assert!(width <= 64);
        let end = start + width;
        if end > self.length {
            let num_bytes = end.div_ceil(8);
            if num_bytes > self.bits.len() {
                self.bits.resize(num_bytes, 0);
            }
            self.length = end;
        }
        for i in 0..width {
            self.set_bit(start + i, (value >> (width - 1 - i)) & 1 != 0);
        }
    }

    fn truncate(&mut self, length: usize) {
        for index in length..self.length {
            self.set_bit(index, false);
        }
        self.bits.truncate(length.div_ceil(8));
        self.length = length;
    }

    fn check(&self, field: Field) -> Result<(), DecodeError> {
        if self.contains(field) {
            Ok(())
        }
        else {
            Err(DecodeError::Truncated {
                field: field.name,
                expected_length: field.end(),
                payload_length: self.length,
            })
        }
    }

    pub fn read_u32(&self, field: Field) -> Result<u32, DecodeError> {
        debug_assert!(field.width <= 32);
        self.check(field)?;
        Ok(self.get_bits(field.start, field.width) as u32)
    }

    /// Reads a two's complement integer.
    pub fn read_i32(&self, field: Field) -> Result<i32, DecodeError> {
        debug_assert!(field.width > 0 && field.width <= 32);
        self.check(field)?;
        let shift = 64 - field.width;
        let raw = self.get_bits(field.start, field.width);
        Ok(((raw << shift) as i64 >> shift) as i32)
    }

    pub fn read_bool(&self, field: Field) -> Result<bool, DecodeError> {
        self.check(field)?;
        Ok(self.bit(field.start))
    }

    /// Reads an enumerated field. Any bit pattern is accepted.
    pub fn read_enum<T: From<u8>>(&self, field: Field) -> Result<T, DecodeError> {
        debug_assert!(field.width <= 8);
        Ok(T::from(self.read_u32(field)? as u8))
    }

    pub fn read_mmsi(&self, field: Field) -> Result<Mmsi, DecodeError> {
        debug_assert_eq!(field.width, Mmsi::BITS);
        // 30 bits always fit
        Ok(Mmsi::from_u32_unchecked(self.read_u32(field)?))
    }

    /// Reads a fixed length 6 bit string.
    ///
    /// The string ends at the first `@`. Trailing spaces are removed.
    pub fn read_string(&self, field: Field) -> Result<String, DecodeError> {
        self.check(field)?;
        Ok(self.decode_text(field.start, field.width / 6))
    }

    /// Reads a variable length 6 bit string. It starts at the start of
    /// `field` and is at most as long as the field, but may end early.
    ///
    /// A partial character at the end is ignored.
    pub fn read_text(&self, field: Field) -> String {
        let available = self.length.saturating_sub(field.start).min(field.width);
        self.decode_text(field.start, available / 6)
    }

    fn decode_text(&self, start: usize, num_chars: usize) -> String {
        let mut text = (0..num_chars)
            .map(|i| sixbit::decode_text_char(self.get_bits(start + i * 6, 6) as u8))
            .take_while(|character| *character != sixbit::TEXT_PADDING)
            .collect::<String>();
        text.truncate(text.trim_end().len());
        text
    }

    /// Reads variable length binary data. Like [`read_text`][Self::read_text]
    /// the width of `field` is the maximum length.
    pub fn read_data(&self, field: Field) -> BinaryData {
        let start = field.start;
        let bit_length = self.length.saturating_sub(start).min(field.width);
        let mut data = BytesMut::with_capacity(bit_length.div_ceil(8));
        let mut offset = 0;
        while offset < bit_length {
            let width = (bit_length - offset).min(8);
            let byte = self.get_bits(start + offset, width) << (8 - width);
            data.put_u8(byte as u8);
            offset += width;
        }
        BinaryData {
            data: data.freeze(),
            bit_length,
        }
    }

    fn read_coordinate(
        &self,
        field: Field,
        resolution: CoordinateResolution,
        not_available: f64,
    ) -> Result<Option<f64>, DecodeError> {
        let raw = self.read_i32(field)?;
        let scale = resolution.units_per_degree();
        let not_available = (not_available * scale) as i32;
        Ok((raw != not_available).then(|| f64::from(raw) / scale))
    }

    /// Reads a latitude in degrees. Returns `None` for "not available" (91°).
    pub fn read_latitude(
        &self,
        field: Field,
        resolution: CoordinateResolution,
    ) -> Result<Option<f64>, DecodeError> {
        self.read_coordinate(field, resolution, LATITUDE_NOT_AVAILABLE)
    }

    /// Reads a longitude in degrees. Returns `None` for "not available"
    /// (181°).
    pub fn read_longitude(
        &self,
        field: Field,
        resolution: CoordinateResolution,
    ) -> Result<Option<f64>, DecodeError> {
        self.read_coordinate(field, resolution, LONGITUDE_NOT_AVAILABLE)
    }

    fn read_tenths(&self, field: Field) -> Result<f64, DecodeError> {
        Ok(f64::from(self.read_u32(field)?) / 10.0)
    }

    /// Knots
    pub fn read_speed_over_ground(&self, field: Field) -> Result<f64, DecodeError> {
        self.read_tenths(field)
    }

    /// Degrees
    pub fn read_course_over_ground(&self, field: Field) -> Result<f64, DecodeError> {
        self.read_tenths(field)
    }

    /// Meters
    pub fn read_draught(&self, field: Field) -> Result<f64, DecodeError> {
        self.read_tenths(field)
    }

    /// Degrees. Returns `None` for "not available" (511).
    pub fn read_true_heading(&self, field: Field) -> Result<Option<u16>, DecodeError> {
        let raw = self.read_u32(field)?;
        Ok((raw != TRUE_HEADING_NOT_AVAILABLE).then_some(raw as u16))
    }

    /// Returns `None` for "not available" (-128).
    pub fn read_rate_of_turn(&self, field: Field) -> Result<Option<RateOfTurn>, DecodeError> {
        debug_assert_eq!(field.width, 8);
        let raw = self.read_i32(field)? as i8;
        Ok((raw != RateOfTurn::NOT_AVAILABLE).then_some(RateOfTurn(raw)))
    }

    /// Reads an optional trailing field. Returns `None` if the payload ends
    /// before the field does.
    pub fn read_optional_u32(&self, field: Field) -> Option<u32> {
        self.read_u32(field).ok()
    }

    pub fn read_optional_mmsi(&self, field: Field) -> Option<Mmsi> {
        self.read_mmsi(field).ok()
    }

    pub fn read_optional_message_type(&self, field: Field) -> Option<MessageType> {
        self.read_enum(field).ok()
    }

    pub fn write_u32(&mut self, field: Field, value: u32) -> Result<(), EncodeError> {
        debug_assert!(field.width <= 32);
        if field.width < 32 && value >> field.width != 0 {
            return Err(EncodeError::ValueOutOfRange {
                field: field.name,
                value: value.into(),
            });
        }
        self.set_bits(field.start, field.width, value.into());
        Ok(())
    }

    /// Writes a two's complement integer.
    pub fn write_i32(&mut self, field: Field, value: i32) -> Result<(), EncodeError> {
        debug_assert!(field.width > 0 && field.width <= 32);
        let min = -(1i64 << (field.width - 1));
        let max = (1i64 << (field.width - 1)) - 1;
        let value = i64::from(value);
        if value < min || value > max {
            return Err(EncodeError::ValueOutOfRange {
                field: field.name,
                value,
            });
        }
        let mask = (1u64 << field.width) - 1;
        self.set_bits(field.start, field.width, value as u64 & mask);
        Ok(())
    }

    pub fn write_bool(&mut self, field: Field, value: bool) -> Result<(), EncodeError> {
        self.write_u32(field, value.into())
    }

    pub fn write_enum<T: Into<u8>>(&mut self, field: Field, value: T) -> Result<(), EncodeError> {
        self.write_u32(field, value.into().into())
    }

    pub fn write_mmsi(&mut self, field: Field, mmsi: Mmsi) -> Result<(), EncodeError> {
        self.write_u32(field, mmsi.as_u32())
    }

    /// Writes a fixed length 6 bit string.
    ///
    /// Lower case letters are converted to upper case. Longer strings are
    /// truncated, shorter ones are padded with `@`. `@` itself and a
    /// trailing space can't be read back and are rejected.
    pub fn write_string(&mut self, field: Field, value: &str) -> Result<(), EncodeError> {
        let num_chars = field.width / 6;
        let written = self.encode_text(field, num_chars, value)?;
        for i in written..num_chars {
            self.set_bits(field.start + i * 6, 6, 0);
        }
        Ok(())
    }

    /// Writes a variable length 6 bit string at the start of `field`. The
    /// string is not padded, but truncated to the width of the field.
    /// Characters are checked as in [`write_string`][Self::write_string].
    ///
    /// Returns the number of bits written.
    pub fn write_text(&mut self, field: Field, value: &str) -> Result<usize, EncodeError> {
        let written = self.encode_text(field, field.width / 6, value)?;
        Ok(written * 6)
    }

    /// Only the characters that fit are checked. Nothing is written if one of
    /// them is rejected.
    fn encode_text(
        &mut self,
        field: Field,
        max_chars: usize,
        value: &str,
    ) -> Result<usize, EncodeError> {
        let mut characters = value.chars();
        let mut encoded = Vec::with_capacity(max_chars.min(value.len()));
        let mut last = None;

        for character in characters.by_ref().take(max_chars) {
            let code = if character == sixbit::TEXT_PADDING {
                None
            }
            else {
                sixbit::encode_text_char(character)
            };
            let code = code.ok_or(EncodeError::InvalidCharacter {
                field: field.name,
                character,
            })?;
            encoded.push(code);
            last = Some(character);
        }

        if characters.next().is_some() {
            tracing::debug!(field = field.name, value, max_chars, "truncating string");
        }
        if last == Some(' ') {
            return Err(EncodeError::TrailingSpace { field: field.name });
        }

        for (i, code) in encoded.iter().enumerate() {
            self.set_bits(field.start + i * 6, 6, (*code).into());
        }
        Ok(encoded.len())
    }

    /// Writes variable length binary data at the start of `field`. The width
    /// of the field is the maximum length.
    pub fn write_data(&mut self, field: Field, data: &BinaryData) -> Result<(), EncodeError> {
        if data.bit_length > field.width || data.bit_length > data.data.len() * 8 {
            return Err(EncodeError::ValueOutOfRange {
                field: field.name,
                value: data.bit_length as i64,
            });
        }
        let mut offset = 0;
        for byte in &data.data {
            let width = (data.bit_length - offset).min(8);
            if width == 0 {
                break;
            }
            self.set_bits(field.start + offset, width, u64::from(*byte >> (8 - width)));
            offset += width;
        }
        Ok(())
    }

    fn scale(field: Field, value: f64, scale: f64) -> Result<i64, EncodeError> {
        if !value.is_finite() {
            return Err(EncodeError::NotFinite { field: field.name });
        }
        let raw = (value * scale).round();
        if raw < i64::MIN as f64 || raw > i64::MAX as f64 {
            return Err(EncodeError::ValueOutOfRange {
                field: field.name,
                value: if raw < 0.0 { i64::MIN } else { i64::MAX },
            });
        }
        Ok(raw as i64)
    }

    fn write_scaled_i32(&mut self, field: Field, raw: i64) -> Result<(), EncodeError> {
        let value = i32::try_from(raw).map_err(|_| {
            EncodeError::ValueOutOfRange {
                field: field.name,
                value: raw,
            }
        })?;
        self.write_i32(field, value)
    }

    fn write_scaled_u32(&mut self, field: Field, raw: i64) -> Result<(), EncodeError> {
        let value = u32::try_from(raw).map_err(|_| {
            EncodeError::ValueOutOfRange {
                field: field.name,
                value: raw,
            }
        })?;
        self.write_u32(field, value)
    }

    fn write_coordinate(
        &mut self,
        field: Field,
        resolution: CoordinateResolution,
        value: Option<f64>,
        not_available: f64,
    ) -> Result<(), EncodeError> {
        let scale = resolution.units_per_degree();
        let raw = Self::scale(field, value.unwrap_or(not_available), scale)?;
        self.write_scaled_i32(field, raw)
    }

    /// Writes a latitude in degrees. `None` is written as 91°.
    pub fn write_latitude(
        &mut self,
        field: Field,
        resolution: CoordinateResolution,
        value: Option<f64>,
    ) -> Result<(), EncodeError> {
        self.write_coordinate(field, resolution, value, LATITUDE_NOT_AVAILABLE)
    }

    /// Writes a longitude in degrees. `None` is written as 181°.
    pub fn write_longitude(
        &mut self,
        field: Field,
        resolution: CoordinateResolution,
        value: Option<f64>,
    ) -> Result<(), EncodeError> {
        self.write_coordinate(field, resolution, value, LONGITUDE_NOT_AVAILABLE)
    }

    fn write_tenths(&mut self, field: Field, value: f64) -> Result<(), EncodeError> {
        let raw = Self::scale(field, value, 10.0)?;
        self.write_scaled_u32(field, raw)
    }

    pub fn write_speed_over_ground(&mut self, field: Field, knots: f64) -> Result<(), EncodeError> {
        self.write_tenths(field, knots)
    }

    pub fn write_course_over_ground(
        &mut self,
        field: Field,
        degrees: f64,
    ) -> Result<(), EncodeError> {
        self.write_tenths(field, degrees)
    }

    pub fn write_draught(&mut self, field: Field, meters: f64) -> Result<(), EncodeError> {
        self.write_tenths(field, meters)
    }

    /// `None` is written as 511.
    pub fn write_true_heading(
        &mut self,
        field: Field,
        degrees: Option<u16>,
    ) -> Result<(), EncodeError> {
        self.write_u32(
            field,
            degrees.map_or(TRUE_HEADING_NOT_AVAILABLE, u32::from),
        )
    }

    /// `None` is written as -128.
    pub fn write_rate_of_turn(
        &mut self,
        field: Field,
        rate_of_turn: Option<RateOfTurn>,
    ) -> Result<(), EncodeError> {
        let raw = rate_of_turn.map_or(RateOfTurn::NOT_AVAILABLE, |rate_of_turn| rate_of_turn.0);
        self.write_i32(field, raw.into())
    }
}

impl Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (armored, _fill_bits) = self.to_armored();
        write!(f, "{armored}")
    }
}

impl Debug for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (armored, fill_bits) = self.to_armored();
        write!(f, "Payload({armored:?}, {} bits, fill bits: {fill_bits})", self.length)
    }
}
