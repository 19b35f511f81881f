//! Field-level decoding of armored AIS payloads.
//!
//! The unit of work here is a single semantic field, not a whole message:
//! every decoder takes a borrowed payload plus a [`MsgClass`] and returns a
//! [`Decoded`](crate::errors::Decoded) value/status pair. Passing
//! [`MsgClass::Unknown`] asks the decoder to resolve the class itself from
//! the leading message id; [`Payload`] does that resolution once and exposes
//! one method per field.

pub mod meta;
pub mod sixbit;

mod decode;

pub use decode::*;
pub use sixbit::FieldText;

use crate::errors::Decoded;

/// Message id as transmitted: the printable tag in the payload's first
/// character. Ids 1..=9 armor to `'1'..'9'`, 10..=28 to `':'..'L'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MsgId {
    Type1,
    Type2,
    Type3,
    Type4,
    Type5,
    Type6,
    Type7,
    Type8,
    Type9,
    Type10,
    Type11,
    Type12,
    Type13,
    Type14,
    Type15,
    Type16,
    Type17,
    Type18,
    Type19,
    Type20,
    Type21,
    Type22,
    Type23,
    Type24,
    Type25,
    Type26,
    Type27,
    Type28,
    Unknown,
}

impl From<u8> for MsgId {
    fn from(tag: u8) -> Self {
        match tag {
            b'1' => Self::Type1,
            b'2' => Self::Type2,
            b'3' => Self::Type3,
            b'4' => Self::Type4,
            b'5' => Self::Type5,
            b'6' => Self::Type6,
            b'7' => Self::Type7,
            b'8' => Self::Type8,
            b'9' => Self::Type9,
            b':' => Self::Type10,
            b';' => Self::Type11,
            b'<' => Self::Type12,
            b'=' => Self::Type13,
            b'>' => Self::Type14,
            b'?' => Self::Type15,
            b'@' => Self::Type16,
            b'A' => Self::Type17,
            b'B' => Self::Type18,
            b'C' => Self::Type19,
            b'D' => Self::Type20,
            b'E' => Self::Type21,
            b'F' => Self::Type22,
            b'G' => Self::Type23,
            b'H' => Self::Type24,
            b'I' => Self::Type25,
            b'J' => Self::Type26,
            b'K' => Self::Type27,
            b'L' => Self::Type28,
            _ => Self::Unknown,
        }
    }
}

/// Message types grouped by shared field layout.
///
/// Types whose leading fields occupy identical bit positions share a class
/// (1, 2 and 3; 4 and 11; 7 and 13); every other type has a class of its
/// own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum MsgClass {
    M1_2_3,
    M4_11,
    M5,
    M6,
    M7_13,
    M8,
    M9,
    M10,
    M12,
    M14,
    M15,
    M16,
    M17,
    M18,
    M19,
    M20,
    M21,
    M22,
    M23,
    M24,
    M25,
    M26,
    M27,
    M28,
    Unknown,
}

impl From<MsgId> for MsgClass {
    fn from(id: MsgId) -> Self {
        match id {
            MsgId::Type1 | MsgId::Type2 | MsgId::Type3 => Self::M1_2_3,
            MsgId::Type4 | MsgId::Type11 => Self::M4_11,
            MsgId::Type5 => Self::M5,
            MsgId::Type6 => Self::M6,
            MsgId::Type7 | MsgId::Type13 => Self::M7_13,
            MsgId::Type8 => Self::M8,
            MsgId::Type9 => Self::M9,
            MsgId::Type10 => Self::M10,
            MsgId::Type12 => Self::M12,
            MsgId::Type14 => Self::M14,
            MsgId::Type15 => Self::M15,
            MsgId::Type16 => Self::M16,
            MsgId::Type17 => Self::M17,
            MsgId::Type18 => Self::M18,
            MsgId::Type19 => Self::M19,
            MsgId::Type20 => Self::M20,
            MsgId::Type21 => Self::M21,
            MsgId::Type22 => Self::M22,
            MsgId::Type23 => Self::M23,
            MsgId::Type24 => Self::M24,
            MsgId::Type25 => Self::M25,
            MsgId::Type26 => Self::M26,
            MsgId::Type27 => Self::M27,
            MsgId::Type28 => Self::M28,
            MsgId::Unknown => Self::Unknown,
        }
    }
}

/// Message id tag of a payload, read from its first character.
#[inline]
pub fn msg_id_of(payload: &[u8]) -> MsgId {
    payload.first().copied().map_or(MsgId::Unknown, MsgId::from)
}

/// Layout class of a payload, read from its first character.
#[inline]
pub fn class_of(payload: &[u8]) -> MsgClass {
    MsgClass::from(msg_id_of(payload))
}

/// Identity of a semantic field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    MsgId,
    RepeatIndicator,
    Mmsi,
    NavStatus,
    RateOfTurn,
    SpeedOverGround,
    PositionAccuracy,
    Longitude,
    Latitude,
    CourseOverGround,
    TrueHeading,
    Timestamp,
    SpecialManeuver,
    Spare,
    Spare2,
    Spare3,
    Spare4,
    Raim,
    SyncState,
    SlotTimeout,
    SlotOffset,
    DesignatedAreaCode,
    FunctionalId,
    Text,
    Callsign,
    ShipName,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Self::MsgId => "msg_id",
            Self::RepeatIndicator => "repeat_indicator",
            Self::Mmsi => "mmsi",
            Self::NavStatus => "nav_status",
            Self::RateOfTurn => "rate_of_turn",
            Self::SpeedOverGround => "speed_over_ground",
            Self::PositionAccuracy => "position_accuracy",
            Self::Longitude => "longitude",
            Self::Latitude => "latitude",
            Self::CourseOverGround => "course_over_ground",
            Self::TrueHeading => "true_heading",
            Self::Timestamp => "timestamp",
            Self::SpecialManeuver => "special_maneuver",
            Self::Spare => "spare",
            Self::Spare2 => "spare2",
            Self::Spare3 => "spare3",
            Self::Spare4 => "spare4",
            Self::Raim => "raim",
            Self::SyncState => "sync_state",
            Self::SlotTimeout => "slot_timeout",
            Self::SlotOffset => "slot_offset",
            Self::DesignatedAreaCode => "designated_area_code",
            Self::FunctionalId => "functional_id",
            Self::Text => "text",
            Self::Callsign => "callsign",
            Self::ShipName => "ship_name",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A borrowed armored payload with its layout class resolved up front.
///
/// Wraps the sixth comma-separated field of an `!AIVDM`/`!AIVDO` sentence.
/// Construction never fails; a payload whose first character is not a valid
/// message id simply resolves to [`MsgClass::Unknown`] and every field
/// method reports that status.
#[derive(Clone, Copy, Debug)]
pub struct Payload<'a> {
    data: &'a [u8],
    class: MsgClass,
}

impl<'a> Payload<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            class: class_of(data),
        }
    }

    /// Wraps a payload whose class the caller already knows, skipping
    /// resolution.
    pub fn with_class(data: &'a [u8], class: MsgClass) -> Self {
        Self { data, class }
    }

    pub fn class(&self) -> MsgClass {
        self.class
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn msg_id(&self) -> Decoded<u32> {
        decode::msg_id(self.data, self.class)
    }

    pub fn repeat_indicator(&self) -> Decoded<u32> {
        decode::repeat_indicator(self.data, self.class)
    }

    pub fn mmsi(&self) -> Decoded<u32> {
        decode::mmsi(self.data, self.class)
    }

    pub fn nav_status(&self) -> Decoded<u32> {
        decode::nav_status(self.data, self.class)
    }

    pub fn rate_of_turn(&self) -> Decoded<f64> {
        decode::rate_of_turn(self.data, self.class)
    }

    pub fn speed_over_ground(&self) -> Decoded<f64> {
        decode::speed_over_ground(self.data, self.class)
    }

    pub fn position_accuracy(&self) -> Decoded<bool> {
        decode::position_accuracy(self.data, self.class)
    }

    pub fn longitude(&self) -> Decoded<f64> {
        decode::longitude(self.data, self.class)
    }

    pub fn latitude(&self) -> Decoded<f64> {
        decode::latitude(self.data, self.class)
    }

    pub fn course_over_ground(&self) -> Decoded<f64> {
        decode::course_over_ground(self.data, self.class)
    }

    pub fn true_heading(&self) -> Decoded<u32> {
        decode::true_heading(self.data, self.class)
    }

    pub fn timestamp(&self) -> Decoded<u32> {
        decode::timestamp(self.data, self.class)
    }

    pub fn special_maneuver(&self) -> Decoded<u32> {
        decode::special_maneuver(self.data, self.class)
    }

    pub fn spare(&self) -> Decoded<u32> {
        decode::spare(self.data, self.class)
    }

    pub fn spare2(&self) -> Decoded<u32> {
        decode::spare2(self.data, self.class)
    }

    pub fn spare3(&self) -> Decoded<u32> {
        decode::spare3(self.data, self.class)
    }

    pub fn spare4(&self) -> Decoded<u32> {
        decode::spare4(self.data, self.class)
    }

    pub fn raim(&self) -> Decoded<bool> {
        decode::raim(self.data, self.class)
    }

    pub fn sync_state(&self) -> Decoded<u32> {
        decode::sync_state(self.data, self.class)
    }

    pub fn slot_timeout(&self) -> Decoded<u32> {
        decode::slot_timeout(self.data, self.class)
    }

    pub fn slot_offset(&self) -> Decoded<u32> {
        decode::slot_offset(self.data, self.class)
    }

    pub fn designated_area_code(&self) -> Decoded<u32> {
        decode::designated_area_code(self.data, self.class)
    }

    pub fn functional_id(&self) -> Decoded<u32> {
        decode::functional_id(self.data, self.class)
    }

    pub fn text(&self) -> Decoded<FieldText> {
        decode::text(self.data, self.class)
    }

    pub fn callsign(&self) -> Decoded<FieldText> {
        decode::callsign(self.data, self.class)
    }

    pub fn ship_name(&self) -> Decoded<FieldText> {
        decode::ship_name(self.data, self.class)
    }
}
