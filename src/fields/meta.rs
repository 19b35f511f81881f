//! Bit layout metadata per (message class, field).
//!
//! One row per `(MsgClass, Field)` pair, bit-exact with ITU-R M.1371. A row
//! with `n_bits == 0` is the single source for the "field absent in this
//! class" predicate. `msg_id`, `repeat_indicator` and `mmsi` occupy the same
//! bits in every message type and are defined for every class, including
//! [`MsgClass::Unknown`].

use super::{Field, MsgClass};

/// Layout and validity bounds of one field within one message class.
///
/// `min_val` and `max_val` are inclusive and apply after two's-complement
/// interpretation for signed fields; `na_val` is the raw "not available"
/// sentinel when `has_na_val` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldMeta {
    pub first_bit: usize,
    pub n_bits: usize,
    pub min_val: i64,
    pub max_val: i64,
    pub has_na_val: bool,
    pub na_val: i64,
}

impl FieldMeta {
    /// Row for a field the class does not carry.
    pub const ABSENT: FieldMeta = FieldMeta {
        first_bit: 0,
        n_bits: 0,
        min_val: 0,
        max_val: 0,
        has_na_val: false,
        na_val: i64::MIN,
    };

    const fn plain(first_bit: usize, n_bits: usize, min_val: i64, max_val: i64) -> Self {
        Self {
            first_bit,
            n_bits,
            min_val,
            max_val,
            has_na_val: false,
            na_val: i64::MIN,
        }
    }

    const fn with_na(
        first_bit: usize,
        n_bits: usize,
        min_val: i64,
        max_val: i64,
        na_val: i64,
    ) -> Self {
        Self {
            first_bit,
            n_bits,
            min_val,
            max_val,
            has_na_val: true,
            na_val,
        }
    }

    /// Reserved regions have no defined values, so their bound is simply
    /// everything the bits can hold.
    const fn reserved(first_bit: usize, n_bits: usize) -> Self {
        Self::plain(first_bit, n_bits, 0, 1 << n_bits)
    }

    pub const fn defined(&self) -> bool {
        self.n_bits != 0
    }
}

/// Whether `class` carries `field`.
pub const fn has(class: MsgClass, field: Field) -> bool {
    lookup(class, field).defined()
}

/// The metadata row for `(class, field)`; [`FieldMeta::ABSENT`] when the
/// class does not carry the field.
pub const fn lookup(class: MsgClass, field: Field) -> FieldMeta {
    use Field::*;
    use MsgClass::*;
    match field {
        MsgId => FieldMeta::plain(0, 6, 1, 28),
        RepeatIndicator => FieldMeta::plain(6, 2, 0, 3),
        Mmsi => FieldMeta::plain(8, 30, 0, 999_999_999),
        NavStatus => match class {
            M1_2_3 => FieldMeta::plain(38, 4, 0, 15),
            M27 => FieldMeta::plain(40, 4, 0, 15),
            _ => FieldMeta::ABSENT,
        },
        RateOfTurn => match class {
            M1_2_3 => FieldMeta::with_na(42, 8, -127, 127, -0x80),
            _ => FieldMeta::ABSENT,
        },
        SpeedOverGround => match class {
            M1_2_3 => FieldMeta::with_na(50, 10, 0, 1023, 1022),
            M18 | M19 => FieldMeta::with_na(46, 10, 0, 1023, 1022),
            M27 => FieldMeta::with_na(79, 6, 0, 63, 63),
            _ => FieldMeta::ABSENT,
        },
        PositionAccuracy => match class {
            M1_2_3 => FieldMeta::plain(60, 1, 0, 1),
            _ => FieldMeta::ABSENT,
        },
        Longitude => {
            let divisor = lon_lat_divisor(class);
            let (first_bit, n_bits) = match class {
                M1_2_3 | M9 => (61, 28),
                M4_11 => (79, 28),
                M17 => (40, 18),
                M18 | M19 => (57, 28),
                M21 => (164, 28),
                M27 => (44, 18),
                _ => return FieldMeta::ABSENT,
            };
            FieldMeta::with_na(first_bit, n_bits, -180 * divisor, 180 * divisor, 181 * divisor)
        }
        Latitude => {
            let divisor = lon_lat_divisor(class);
            let (first_bit, n_bits) = match class {
                M1_2_3 | M9 => (89, 27),
                M4_11 => (107, 27),
                M17 => (58, 17),
                M18 | M19 => (85, 27),
                M21 => (192, 27),
                M27 => (62, 17),
                _ => return FieldMeta::ABSENT,
            };
            FieldMeta::with_na(first_bit, n_bits, -90 * divisor, 90 * divisor, 91 * divisor)
        }
        CourseOverGround => match class {
            M1_2_3 => FieldMeta::with_na(116, 12, 0, 3599, 3600),
            M18 | M19 => FieldMeta::plain(112, 12, 0, 3599),
            M27 => FieldMeta::with_na(85, 9, 0, 359, 511),
            _ => FieldMeta::ABSENT,
        },
        TrueHeading => match class {
            M1_2_3 => FieldMeta::with_na(128, 9, 0, 359, 511),
            M18 | M19 => FieldMeta::with_na(124, 9, 0, 359, 511),
            _ => FieldMeta::ABSENT,
        },
        Timestamp => match class {
            M1_2_3 => FieldMeta::with_na(137, 6, 0, 59, 60),
            M9 => FieldMeta::with_na(128, 6, 0, 59, 60),
            M18 | M19 => FieldMeta::plain(133, 6, 0, 59),
            _ => FieldMeta::ABSENT,
        },
        SpecialManeuver => match class {
            M1_2_3 => FieldMeta::with_na(143, 2, 0, 2, 0),
            _ => FieldMeta::ABSENT,
        },
        Spare => match class {
            M1_2_3 => FieldMeta::reserved(145, 3),
            M4_11 => FieldMeta::reserved(138, 10),
            M5 => FieldMeta::reserved(423, 1),
            M6 | M12 => FieldMeta::reserved(71, 1),
            M7_13 | M8 | M10 | M14 | M15 | M16 | M17 | M20 | M22 | M23 => {
                FieldMeta::reserved(38, 2)
            }
            M9 => FieldMeta::reserved(135, 7),
            M18 | M19 => FieldMeta::reserved(38, 8),
            M21 => FieldMeta::reserved(271, 1),
            M24 => FieldMeta::reserved(160, 8),
            M27 => FieldMeta::reserved(95, 1),
            _ => FieldMeta::ABSENT,
        },
        Spare2 => match class {
            M9 => FieldMeta::reserved(143, 3),
            M10 => FieldMeta::reserved(70, 2),
            M15 => FieldMeta::reserved(88, 2),
            M16 | M17 => FieldMeta::reserved(75, 5),
            M19 => FieldMeta::reserved(139, 4),
            M22 => FieldMeta::reserved(145, 23),
            M23 => FieldMeta::reserved(122, 22),
            M24 => FieldMeta::reserved(162, 6),
            _ => FieldMeta::ABSENT,
        },
        Spare3 => match class {
            M15 => FieldMeta::reserved(108, 2),
            M23 => FieldMeta::reserved(154, 6),
            _ => FieldMeta::ABSENT,
        },
        Spare4 => match class {
            M15 => FieldMeta::reserved(158, 2),
            _ => FieldMeta::ABSENT,
        },
        Raim => match class {
            M1_2_3 | M4_11 => FieldMeta::plain(148, 1, 0, 1),
            M9 | M18 => FieldMeta::plain(147, 1, 0, 1),
            M19 => FieldMeta::plain(305, 1, 0, 1),
            M21 => FieldMeta::plain(268, 1, 0, 1),
            M27 => FieldMeta::plain(39, 1, 0, 1),
            _ => FieldMeta::ABSENT,
        },
        SyncState => match class {
            M1_2_3 | M18 => FieldMeta::plain(149, 2, 0, 3),
            _ => FieldMeta::ABSENT,
        },
        SlotTimeout => match class {
            M1_2_3 | M4_11 | M18 => FieldMeta::plain(151, 3, 0, 7),
            _ => FieldMeta::ABSENT,
        },
        SlotOffset => match class {
            M1_2_3 | M4_11 | M18 => FieldMeta::reserved(154, 14),
            _ => FieldMeta::ABSENT,
        },
        DesignatedAreaCode => match class {
            M6 => FieldMeta::plain(72, 10, 0, 1023),
            M8 => FieldMeta::plain(40, 10, 0, 1023),
            _ => FieldMeta::ABSENT,
        },
        FunctionalId => match class {
            M6 => FieldMeta::plain(82, 6, 0, 63),
            M8 => FieldMeta::plain(50, 6, 0, 63),
            _ => FieldMeta::ABSENT,
        },
        Text => match class {
            M12 => FieldMeta::plain(72, 936, 0, 0),
            M14 => FieldMeta::plain(40, 966, 0, 0),
            _ => FieldMeta::ABSENT,
        },
        Callsign => match class {
            M5 => FieldMeta::plain(70, 42, 0, 0),
            M24 => FieldMeta::plain(90, 42, 0, 0),
            _ => FieldMeta::ABSENT,
        },
        ShipName => match class {
            M5 => FieldMeta::plain(112, 120, 0, 0),
            M19 => FieldMeta::plain(143, 120, 0, 0),
            M24 => FieldMeta::plain(40, 120, 0, 0),
            _ => FieldMeta::ABSENT,
        },
    }
}

/// Minutes scaling: types 17 and 27 carry coarse 1/10-minute positions,
/// everything else 1/10000-minute.
pub const fn lon_lat_divisor(class: MsgClass) -> i64 {
    match class {
        MsgClass::M17 | MsgClass::M27 => 600,
        _ => 600_000,
    }
}
