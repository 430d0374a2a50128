//! Declarative bit layouts.
//!
//! Every message declares its fields as [`Field`] constants. Decoders and
//! encoders use the same constants, and [`LAYOUTS`] lists them for
//! inspection.

use crate::message::{
    Acknowledge,
    AddressedSafetyRelatedMessage,
    AidToNavigationReport,
    AssignmentModeCommand,
    BaseStationReport,
    BinaryAddressedMessage,
    BinaryBroadcastMessage,
    ChannelManagement,
    DataLinkManagement,
    DgnssBinaryBroadcastMessage,
    ExtendedClassBCsPositionReport,
    GroupAssignmentCommand,
    Header,
    Interrogation,
    MultipleSlotBinaryMessage,
    PositionReportClassA,
    PositionReportForLongRangeApplications,
    SafetyRelatedBroadcastMessage,
    SingleSlotBinaryMessage,
    StandardClassBCsPositionReport,
    StandardSarAircraftPositionReport,
    StaticAndVoyageRelatedData,
    StaticDataReport,
    UtcAndDateInquiry,
};

/// A named range of bits in a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: &'static str,
    /// Offset of the first bit
    pub start: usize,
    /// Number of bits
    pub width: usize,
}

impl Field {
    pub const fn new(name: &'static str, start: usize, width: usize) -> Self {
        Self { name, start, width }
    }

    /// Offset of the first bit after the field.
    pub const fn end(&self) -> usize {
        self.start + self.width
    }

    pub const fn overlaps(&self, other: &Field) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// Layout of one message type, or one variant of it.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub name: &'static str,
    /// Fields in ascending bit order. Variable length fields carry their
    /// maximum width.
    pub fields: &'static [Field],
    /// Maximum number of bits a message with this layout occupies.
    pub max_bits: usize,
}

impl Layout {
    /// Returns the first pair of fields that share bits.
    pub fn find_overlap(&self) -> Option<(Field, Field)> {
        self.fields.iter().enumerate().find_map(|(i, a)| {
            self.fields[i + 1..]
                .iter()
                .find(|b| a.overlaps(b))
                .map(|b| (*a, *b))
        })
    }

    /// Total number of bits covered by the fields.
    pub fn covered_bits(&self) -> usize {
        self.fields.iter().map(|field| field.width).sum()
    }

    pub fn field(&self, name: &str) -> Option<Field> {
        self.fields.iter().find(|field| field.name == name).copied()
    }
}

/// Layouts of all known messages.
pub const LAYOUTS: &[Layout] = &[
    PositionReportClassA::LAYOUT,
    BaseStationReport::LAYOUT,
    StaticAndVoyageRelatedData::LAYOUT,
    BinaryAddressedMessage::LAYOUT,
    Acknowledge::LAYOUT,
    BinaryBroadcastMessage::LAYOUT,
    StandardSarAircraftPositionReport::LAYOUT,
    UtcAndDateInquiry::LAYOUT,
    AddressedSafetyRelatedMessage::LAYOUT,
    SafetyRelatedBroadcastMessage::LAYOUT,
    Interrogation::LAYOUT,
    AssignmentModeCommand::LAYOUT,
    DgnssBinaryBroadcastMessage::LAYOUT,
    StandardClassBCsPositionReport::LAYOUT,
    ExtendedClassBCsPositionReport::LAYOUT,
    DataLinkManagement::LAYOUT,
    AidToNavigationReport::LAYOUT,
    ChannelManagement::LAYOUT_ADDRESSED,
    ChannelManagement::LAYOUT_GEOGRAPHIC,
    GroupAssignmentCommand::LAYOUT,
    StaticDataReport::LAYOUT_PART_A,
    StaticDataReport::LAYOUT_PART_B,
    StaticDataReport::LAYOUT_PART_B_AUXILIARY_CRAFT,
    SingleSlotBinaryMessage::LAYOUT_BROADCAST,
    SingleSlotBinaryMessage::LAYOUT_BROADCAST_STRUCTURED,
    SingleSlotBinaryMessage::LAYOUT_ADDRESSED,
    SingleSlotBinaryMessage::LAYOUT_ADDRESSED_STRUCTURED,
    MultipleSlotBinaryMessage::LAYOUT_BROADCAST,
    MultipleSlotBinaryMessage::LAYOUT_BROADCAST_STRUCTURED,
    MultipleSlotBinaryMessage::LAYOUT_ADDRESSED,
    MultipleSlotBinaryMessage::LAYOUT_ADDRESSED_STRUCTURED,
    PositionReportForLongRangeApplications::LAYOUT,
];

/// Shorthand used by the message modules to prefix a layout with the header.
macro_rules! fields {
    ($($field:expr),* $(,)?) => {
        &[
            $crate::message::Header::MESSAGE_TYPE,
            $crate::message::Header::REPEAT,
            $crate::message::Header::MMSI,
            $($field,)*
        ]
    };
}

pub(crate) use fields;

#[cfg(test)]
mod tests {
    use crate::{
        layout::{
            Field,
            LAYOUTS,
        },
        message::Header,
    };

    #[test]
    fn it_has_no_overlapping_fields() {
        for layout in LAYOUTS {
            assert_eq!(
                layout.find_overlap(),
                None,
                "overlapping fields in {}",
                layout.name
            );
        }
    }

    #[test]
    fn it_keeps_fields_within_max_bits() {
        for layout in LAYOUTS {
            for field in layout.fields {
                assert!(
                    field.end() <= layout.max_bits,
                    "{}.{} ends at {}, max is {}",
                    layout.name,
                    field.name,
                    field.end(),
                    layout.max_bits
                );
            }
        }
    }

    #[test]
    fn it_lists_fields_in_ascending_order() {
        for layout in LAYOUTS {
            for pair in layout.fields.windows(2) {
                assert!(
                    pair[0].end() <= pair[1].start,
                    "{}.{} is not before {}",
                    layout.name,
                    pair[0].name,
                    pair[1].name
                );
            }
        }
    }

    #[test]
    fn it_starts_every_layout_with_the_header() {
        for layout in LAYOUTS {
            assert_eq!(
                &layout.fields[..3],
                &[Header::MESSAGE_TYPE, Header::REPEAT, Header::MMSI],
                "{}",
                layout.name
            );
        }
    }

    #[test]
    fn it_covers_fixed_size_messages_completely() {
        let fixed = [
            ("PositionReportClassA", 168),
            ("BaseStationReport", 168),
            ("StaticAndVoyageRelatedData", 424),
            ("StandardSarAircraftPositionReport", 168),
            ("UtcAndDateInquiry", 72),
            ("StandardClassBCsPositionReport", 168),
            ("ExtendedClassBCsPositionReport", 312),
            ("ChannelManagement (addressed)", 168),
            ("ChannelManagement (geographic)", 168),
            ("GroupAssignmentCommand", 160),
            ("PositionReportForLongRangeApplications", 96),
        ];

        for (name, bits) in fixed {
            let layout = LAYOUTS
                .iter()
                .find(|layout| layout.name == name)
                .unwrap_or_else(|| panic!("no layout named {name}"));
            assert_eq!(layout.max_bits, bits, "{name}");
            assert_eq!(layout.covered_bits(), bits, "{name}");
        }
    }

    #[test]
    fn it_detects_overlaps() {
        let a = Field::new("a", 10, 4);
        let b = Field::new("b", 13, 2);
        let c = Field::new("c", 14, 2);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }
}
