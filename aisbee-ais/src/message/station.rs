//! Base station reports and UTC inquiries

use aisbee_types::Mmsi;
use chrono::{
    DateTime,
    NaiveDate,
    Utc,
};

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
        MessageType,
        PositionAccuracy,
        PositionFixType,
        Raim,
    },
};

/// Message types 4 and 11
///
/// Base station report (4), and UTC and date response (11) sent by mobile
/// stations. Both report the UTC time of the sender.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStationReport {
    pub header: Header,
    /// 0 means "not available"
    pub year: u16,
    /// 0 means "not available"
    pub month: u8,
    /// 0 means "not available"
    pub day: u8,
    /// 24 means "not available"
    pub hour: u8,
    /// 60 means "not available"
    pub minute: u8,
    /// 60 means "not available"
    pub second: u8,
    pub position_accuracy: PositionAccuracy,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub position_fix_type: PositionFixType,
    pub spare: u16,
    pub raim: Raim,
    pub radio_status: u32,
}

impl BaseStationReport {
    pub const YEAR: Field = Field::new("year", 38, 14);
    pub const MONTH: Field = Field::new("month", 52, 4);
    pub const DAY: Field = Field::new("day", 56, 5);
    pub const HOUR: Field = Field::new("hour", 61, 5);
    pub const MINUTE: Field = Field::new("minute", 66, 6);
    pub const SECOND: Field = Field::new("second", 72, 6);
    pub const POSITION_ACCURACY: Field = Field::new("position_accuracy", 78, 1);
    pub const LONGITUDE: Field = Field::new("longitude", 79, 28);
    pub const LATITUDE: Field = Field::new("latitude", 107, 27);
    pub const POSITION_FIX_TYPE: Field = Field::new("position_fix_type", 134, 4);
    pub const SPARE: Field = Field::new("spare", 138, 10);
    pub const RAIM: Field = Field::new("raim", 148, 1);
    pub const RADIO_STATUS: Field = Field::new("radio_status", 149, 19);

    pub const MESSAGE_TYPES: &[MessageType] = &[
        MessageType::BASE_STATION_REPORT,
        MessageType::UTC_AND_DATE_RESPONSE,
    ];

    pub const LAYOUT: Layout = Layout {
        name: "BaseStationReport",
        fields: fields![
            Self::YEAR,
            Self::MONTH,
            Self::DAY,
            Self::HOUR,
            Self::MINUTE,
            Self::SECOND,
            Self::POSITION_ACCURACY,
            Self::LONGITUDE,
            Self::LATITUDE,
            Self::POSITION_FIX_TYPE,
            Self::SPARE,
            Self::RAIM,
            Self::RADIO_STATUS,
        ],
        max_bits: 168,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            header: Header::decode(payload)?,
            year: payload.read_u32(Self::YEAR)? as u16,
            month: payload.read_u32(Self::MONTH)? as u8,
            day: payload.read_u32(Self::DAY)? as u8,
            hour: payload.read_u32(Self::HOUR)? as u8,
            minute: payload.read_u32(Self::MINUTE)? as u8,
            second: payload.read_u32(Self::SECOND)? as u8,
            position_accuracy: payload.read_bool(Self::POSITION_ACCURACY)?.into(),
            longitude: payload
                .read_longitude(Self::LONGITUDE, CoordinateResolution::TenThousandthMinute)?,
            latitude: payload
                .read_latitude(Self::LATITUDE, CoordinateResolution::TenThousandthMinute)?,
            position_fix_type: payload.read_enum(Self::POSITION_FIX_TYPE)?,
            spare: payload.read_u32(Self::SPARE)? as u16,
            raim: payload.read_bool(Self::RAIM)?.into(),
            radio_status: payload.read_u32(Self::RADIO_STATUS)?,
        })
    }

    pub fn encode(&self, payload: &mut Payload) -> Result<(), EncodeError> {
        self.header.encode(payload, Self::MESSAGE_TYPES)?;
        payload.write_u32(Self::YEAR, self.year.into())?;
        payload.write_u32(Self::MONTH, self.month.into())?;
        payload.write_u32(Self::DAY, self.day.into())?;
        payload.write_u32(Self::HOUR, self.hour.into())?;
        payload.write_u32(Self::MINUTE, self.minute.into())?;
        payload.write_u32(Self::SECOND, self.second.into())?;
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
        payload.write_enum(Self::POSITION_FIX_TYPE, self.position_fix_type)?;
        payload.write_u32(Self::SPARE, self.spare.into())?;
        payload.write_bool(Self::RAIM, self.raim.into())?;
        payload.write_u32(Self::RADIO_STATUS, self.radio_status)?;
        Ok(())
    }

    /// The reported UTC time, if all of its components are available and
    /// form a valid date and time.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        if self.year == 0 {
            return None;
        }
        let timestamp = NaiveDate::from_ymd_opt(
            self.year.into(),
            self.month.into(),
            self.day.into(),
        )?
        .and_hms_opt(
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
        )?
        .and_utc();
        Some(timestamp)
    }
}

/// Message type 10
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtcAndDateInquiry {
    pub header: Header,
    pub spare: u8,
    pub destination_mmsi: Mmsi,
    pub spare_2: u8,
}

impl UtcAndDateInquiry {
    pub const SPARE: Field = Field::new("spare", 38, 2);
    pub const DESTINATION_MMSI: Field = Field::new("destination_mmsi", 40, 30);
    pub const SPARE_2: Field = Field::new("spare_2", 70, 2);

    pub const LAYOUT: Layout = Layout {
        name: "UtcAndDateInquiry",
        fields: fields![Self::SPARE, Self::DESTINATION_MMSI, Self::SPARE_2],
        max_bits: 72,
    };

    pub fn decode(payload: &Payload) -> Result<Self, DecodeError> {
        Ok(Self {
            header: Header::decode(payload)?,
            spare: payload.read_u32(Self::SPARE)? as u8,
            destination_mmsi: payload.read_mmsi(Self::DESTINATION_MMSI)?,
            spare_2: payload.read_u32(Self::SPARE_2)? as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use aisbee_types::Mmsi;
    use chrono::{
        TimeZone,
        Utc,
    };

    use crate::{
        message::{
            BaseStationReport,
            Header,
            Message,
        },
        payload::Payload,
        types::{
            MessageType,
            PositionAccuracy,
            PositionFixType,
            Raim,
        },
    };

    fn base_station_report() -> BaseStationReport {
        BaseStationReport {
            header: Header::new(
                MessageType::BASE_STATION_REPORT,
                Mmsi::from_u32(3669702).unwrap(),
            ),
            year: 2007,
            month: 5,
            day: 14,
            hour: 19,
            minute: 57,
            second: 39,
            position_accuracy: PositionAccuracy::High,
            longitude: Some(-76.35236166666667),
            latitude: Some(36.883766666666666),
            position_fix_type: PositionFixType::SURVEYED,
            spare: 0,
            raim: Raim::NotInUse,
            radio_status: 67039,
        }
    }

    #[test]
    fn it_round_trips_base_station_reports() {
        let message = Message::BaseStationReport(base_station_report());
        let payload = message.encode().unwrap();
        assert_eq!(payload.len(), 168);
        assert_eq!(Message::decode(&payload).unwrap(), message);

        let mut report = base_station_report();
        report.header.message_type = MessageType::UTC_AND_DATE_RESPONSE;
        let message = Message::BaseStationReport(report);
        assert_eq!(Message::decode(&message.encode().unwrap()).unwrap(), message);
    }

    #[test]
    fn it_decodes_a_base_station_report() {
        let payload = Payload::from_armored("403OviQuMGCqWrRO9>E6fE700@GO").unwrap();
        let Message::BaseStationReport(report) = Message::decode(&payload).unwrap()
        else {
            panic!("expected a base station report");
        };
        assert_eq!(report.header.mmsi.as_u32(), 3669702);
        assert_eq!(report.position_fix_type, PositionFixType::SURVEYED);
        assert_eq!(
            report.timestamp(),
            Some(Utc.with_ymd_and_hms(2007, 5, 14, 19, 57, 39).unwrap())
        );
        assert_eq!(report, base_station_report());
        assert_eq!(
            Message::BaseStationReport(report).encode().unwrap(),
            payload
        );
    }

    #[test]
    fn it_has_no_timestamp_when_not_available() {
        let mut report = base_station_report();
        report.year = 0;
        assert_eq!(report.timestamp(), None);

        let mut report = base_station_report();
        report.hour = 24;
        assert_eq!(report.timestamp(), None);

        let mut report = base_station_report();
        report.month = 0;
        assert_eq!(report.timestamp(), None);
    }
}
