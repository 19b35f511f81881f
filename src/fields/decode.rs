//! Per-field decoders.
//!
//! Every decoder shares the same routine: resolve the message class (when
//! the caller passes [`MsgClass::Unknown`] it is read from the payload's
//! first character), look up the metadata row, extract the raw bits, check
//! the "not available" sentinel before the defined range, then apply the
//! field's scaling. Decoders never panic on short or garbled payloads; they
//! report through the status instead.

use super::meta::{self, FieldMeta};
use super::sixbit::{self, FieldText};
use super::{class_of, msg_id_of, Field, MsgClass, MsgId};
use crate::errors::{Decoded, Status};

/// Picks the concrete class a decode will run under, or the status to
/// report without decoding. Universal fields carry a class-independent row
/// and skip resolution entirely.
fn resolve(s: &[u8], class: MsgClass, field: Field) -> Result<MsgClass, Status> {
    let class = match class {
        MsgClass::Unknown => {
            if meta::has(MsgClass::Unknown, field) {
                return Ok(MsgClass::Unknown);
            }
            match class_of(s) {
                MsgClass::Unknown => return Err(Status::UnknownMsgType),
                resolved => resolved,
            }
        }
        given => given,
    };
    if meta::has(class, field) {
        Ok(class)
    } else {
        Err(Status::NoSuchField)
    }
}

/// Sentinel first, then the inclusive range, in raw units.
fn check(raw: i64, md: &FieldMeta) -> Status {
    if md.has_na_val && raw == md.na_val {
        Status::NotAvailable
    } else if raw < md.min_val || raw > md.max_val {
        Status::NotDefined
    } else {
        Status::Success
    }
}

fn decode_u32(s: &[u8], class: MsgClass, field: Field) -> Decoded<u32> {
    let class = match resolve(s, class, field) {
        Ok(class) => class,
        Err(status) => return Decoded::status_only(status),
    };
    let md = meta::lookup(class, field);
    let raw = sixbit::unsigned(s, md.first_bit, md.n_bits);
    Decoded::new(raw as u32, check(raw as i64, &md))
}

fn decode_i64(s: &[u8], class: MsgClass, field: Field) -> Decoded<i64> {
    let class = match resolve(s, class, field) {
        Ok(class) => class,
        Err(status) => return Decoded::status_only(status),
    };
    let md = meta::lookup(class, field);
    let raw = sixbit::signed(s, md.first_bit, md.n_bits);
    Decoded::new(raw, check(raw, &md))
}

pub fn msg_id(s: &[u8], class: MsgClass) -> Decoded<u32> {
    decode_u32(s, class, Field::MsgId)
}

pub fn repeat_indicator(s: &[u8], class: MsgClass) -> Decoded<u32> {
    decode_u32(s, class, Field::RepeatIndicator)
}

pub fn mmsi(s: &[u8], class: MsgClass) -> Decoded<u32> {
    decode_u32(s, class, Field::Mmsi)
}

pub fn nav_status(s: &[u8], class: MsgClass) -> Decoded<u32> {
    decode_u32(s, class, Field::NavStatus)
}

/// Degrees per minute. The 8-bit raw value encodes `4.733 * sqrt(rot)`,
/// so the scaled value is squared with its sign preserved.
pub fn rate_of_turn(s: &[u8], class: MsgClass) -> Decoded<f64> {
    let raw = decode_i64(s, class, Field::RateOfTurn);
    let scaled = raw.value as f64 / 4.733;
    let magnitude = if scaled < 0.0 { -scaled } else { scaled };
    Decoded::new(scaled * magnitude, raw.status)
}

/// Knots. All classes report tenths of a knot except type 27, which packs
/// whole knots into six bits. Raw 1023 means the vessel is beyond the
/// 102.2-knot scale; the value is still reported, under a warning status.
pub fn speed_over_ground(s: &[u8], class: MsgClass) -> Decoded<f64> {
    const EXCEEDS_SCALE: u64 = 1023;
    let class = match resolve(s, class, Field::SpeedOverGround) {
        Ok(class) => class,
        Err(status) => return Decoded::status_only(status),
    };
    let md = meta::lookup(class, Field::SpeedOverGround);
    let raw = sixbit::unsigned(s, md.first_bit, md.n_bits);
    let status = check(raw as i64, &md);
    if matches!(class, MsgClass::M27) {
        return Decoded::new(raw as f64, status);
    }
    let status = if raw == EXCEEDS_SCALE {
        Status::SogExceedsScale
    } else {
        status
    };
    Decoded::new(raw as f64 / 10.0, status)
}

pub fn position_accuracy(s: &[u8], class: MsgClass) -> Decoded<bool> {
    let raw = decode_u32(s, class, Field::PositionAccuracy);
    Decoded::new(raw.value != 0, raw.status)
}

/// Degrees east of Greenwich. Range checked in raw units, so an
/// out-of-range transmission reports `NotDefined` before scaling.
pub fn longitude(s: &[u8], class: MsgClass) -> Decoded<f64> {
    scaled_position(s, class, Field::Longitude)
}

/// Degrees north of the equator.
pub fn latitude(s: &[u8], class: MsgClass) -> Decoded<f64> {
    scaled_position(s, class, Field::Latitude)
}

fn scaled_position(s: &[u8], class: MsgClass, field: Field) -> Decoded<f64> {
    let class = match resolve(s, class, field) {
        Ok(class) => class,
        Err(status) => return Decoded::status_only(status),
    };
    let md = meta::lookup(class, field);
    let raw = sixbit::signed(s, md.first_bit, md.n_bits);
    Decoded::new(
        raw as f64 / meta::lon_lat_divisor(class) as f64,
        check(raw, &md),
    )
}

/// Degrees true. Tenths of a degree except type 27, which reports whole
/// degrees.
pub fn course_over_ground(s: &[u8], class: MsgClass) -> Decoded<f64> {
    let class = match resolve(s, class, Field::CourseOverGround) {
        Ok(class) => class,
        Err(status) => return Decoded::status_only(status),
    };
    let md = meta::lookup(class, Field::CourseOverGround);
    let raw = sixbit::unsigned(s, md.first_bit, md.n_bits);
    let status = check(raw as i64, &md);
    if matches!(class, MsgClass::M27) {
        Decoded::new(raw as f64, status)
    } else {
        Decoded::new(raw as f64 / 10.0, status)
    }
}

pub fn true_heading(s: &[u8], class: MsgClass) -> Decoded<u32> {
    decode_u32(s, class, Field::TrueHeading)
}

/// UTC second of transmission. 61, 62 and 63 are in-band reports about the
/// positioning system and override the status with the matching warning.
pub fn timestamp(s: &[u8], class: MsgClass) -> Decoded<u32> {
    let raw = decode_u32(s, class, Field::Timestamp);
    let status = match raw.value {
        61 => Status::ManualInputMode,
        62 => Status::EstimatedMode,
        63 => Status::PositioningInoperative,
        _ => raw.status,
    };
    Decoded::new(raw.value, status)
}

pub fn special_maneuver(s: &[u8], class: MsgClass) -> Decoded<u32> {
    decode_u32(s, class, Field::SpecialManeuver)
}

pub fn spare(s: &[u8], class: MsgClass) -> Decoded<u32> {
    decode_u32(s, class, Field::Spare)
}

pub fn spare2(s: &[u8], class: MsgClass) -> Decoded<u32> {
    decode_u32(s, class, Field::Spare2)
}

pub fn spare3(s: &[u8], class: MsgClass) -> Decoded<u32> {
    decode_u32(s, class, Field::Spare3)
}

/// Trailing spare of the type 15 interrogation. Type 15 transmissions come
/// in 88, 110/112 and 160 bit forms and only the longest reaches this
/// field, so payloads shorter than 26 characters report `NotAvailable`.
pub fn spare4(s: &[u8], class: MsgClass) -> Decoded<u32> {
    const MD: FieldMeta = meta::lookup(MsgClass::M15, Field::Spare4);
    const MIN_CHARS: usize = (MD.first_bit + MD.n_bits) / sixbit::CHAR_BITS;
    let class = match resolve(s, class, Field::Spare4) {
        Ok(class) => class,
        Err(status) => return Decoded::status_only(status),
    };
    if s.len() < MIN_CHARS {
        return Decoded::status_only(Status::NotAvailable);
    }
    decode_u32(s, class, Field::Spare4)
}

pub fn raim(s: &[u8], class: MsgClass) -> Decoded<bool> {
    let raw = decode_u32(s, class, Field::Raim);
    Decoded::new(raw.value != 0, raw.status)
}

pub fn sync_state(s: &[u8], class: MsgClass) -> Decoded<u32> {
    decode_u32(s, class, Field::SyncState)
}

pub fn slot_timeout(s: &[u8], class: MsgClass) -> Decoded<u32> {
    match slot_class(s, class, Field::SlotTimeout) {
        Ok(class) => decode_u32(s, class, Field::SlotTimeout),
        Err(status) => Decoded::status_only(status),
    }
}

/// The 14-bit SOTDMA sub-message carries a slot offset only while
/// `slot_timeout` is 0; under any other timeout those bits hold a different
/// sub-message and the offset reports `NotAvailable`.
pub fn slot_offset(s: &[u8], class: MsgClass) -> Decoded<u32> {
    let class = match slot_class(s, class, Field::SlotOffset) {
        Ok(class) => class,
        Err(status) => return Decoded::status_only(status),
    };
    let timeout = decode_u32(s, class, Field::SlotTimeout);
    if !timeout.status.is_success() || timeout.value != 0 {
        return Decoded::status_only(Status::NotAvailable);
    }
    decode_u32(s, class, Field::SlotOffset)
}

/// The SOTDMA communication-state region is defined for ids 1 and 2 within
/// the 1/2/3 class; id 3 closes with an ITDMA state instead and reports the
/// region as absent.
fn slot_class(s: &[u8], class: MsgClass, field: Field) -> Result<MsgClass, Status> {
    let class = resolve(s, class, field)?;
    if matches!(class, MsgClass::M1_2_3) && msg_id_of(s) == MsgId::Type3 {
        return Err(Status::NoSuchField);
    }
    Ok(class)
}

pub fn designated_area_code(s: &[u8], class: MsgClass) -> Decoded<u32> {
    decode_u32(s, class, Field::DesignatedAreaCode)
}

pub fn functional_id(s: &[u8], class: MsgClass) -> Decoded<u32> {
    decode_u32(s, class, Field::FunctionalId)
}

pub fn text(s: &[u8], class: MsgClass) -> Decoded<FieldText> {
    text_field(s, class, Field::Text)
}

pub fn callsign(s: &[u8], class: MsgClass) -> Decoded<FieldText> {
    text_field(s, class, Field::Callsign)
}

pub fn ship_name(s: &[u8], class: MsgClass) -> Decoded<FieldText> {
    text_field(s, class, Field::ShipName)
}

/// An all-padding region decodes to nothing and reports `NotAvailable`.
fn text_field(s: &[u8], class: MsgClass, field: Field) -> Decoded<FieldText> {
    let class = match resolve(s, class, field) {
        Ok(class) => class,
        Err(status) => return Decoded::status_only(status),
    };
    let md = meta::lookup(class, field);
    let out = sixbit::text(s, md.first_bit, md.n_bits);
    if out.is_empty() {
        Decoded::new(out, Status::NotAvailable)
    } else {
        Decoded::ok(out)
    }
}


#[cfg(all(test, feature = "static-tests"))]
mod vector_tests {
    use super::*;
    use crate::fixtures::*;

    #[cfg(feature = "static-tests-fp")]
    fn f64_near(left: f64, right: f64) {
        assert!((left - right).abs() < 1e-9, "{} != {}", left, right);
    }

    #[test]
    fn msg_id_across_all_types() {
        let cases: &[(&[u8], u32)] = &[
            (PL_1_A, 1),
            (PL_1_B, 1),
            (PL_2_A, 2),
            (PL_3_A, 3),
            (PL_4_A, 4),
            (PL_5_A, 5),
            (PL_6_A, 6),
            (PL_7_A, 7),
            (PL_8_A, 8),
            (PL_9_A, 9),
            (PL_10_A, 10),
            (PL_11_A, 11),
            (PL_12_A, 12),
            (PL_13_A, 13),
            (PL_14_A, 14),
            (PL_15_A, 15),
            (PL_16_A, 16),
            (PL_17_A, 17),
            (PL_18_A, 18),
            (PL_19_A, 19),
            (PL_20_A, 20),
            (PL_21_A, 21),
            (PL_22_A, 22),
            (PL_23_A, 23),
            (PL_24_A, 24),
            (PL_25_A, 25),
            (PL_26_A, 26),
            (PL_27_A, 27),
            (PL_27_B, 27),
            (PL_27_C, 27),
        ];
        for &(payload, expected) in cases {
            let d = msg_id(payload, MsgClass::Unknown);
            assert_eq!(d.status, Status::Success);
            assert_eq!(d.value, expected);
            assert_eq!(d.value, crate::fields::sixbit::ascii6(payload[0]));
        }
    }

    #[test]
    fn repeat_indicator_across_all_types() {
        let cases: &[(&[u8], u32)] = &[
            (PL_1_A, 0),
            (PL_1_B, 0),
            (PL_2_A, 2),
            (PL_3_A, 0),
            (PL_4_A, 0),
            (PL_9_A, 3),
            (PL_12_A, 3),
            (PL_14_A, 1),
            (PL_16_A, 3),
            (PL_17_A, 3),
            (PL_18_A, 1),
            (PL_26_A, 1),
            (PL_27_A, 3),
        ];
        for &(payload, expected) in cases {
            let d = repeat_indicator(payload, MsgClass::Unknown);
            assert_eq!((d.value, d.status), (expected, Status::Success));
        }
    }

    #[test]
    fn mmsi_across_all_types() {
        let cases: &[(&[u8], u32)] = &[
            (PL_1_A, 477553000),
            (PL_1_B, 367033650),
            (PL_2_A, 277315048),
            (PL_3_A, 366268061),
            (PL_4_A, 3669713),
            (PL_5_A, 249190000),
            (PL_6_A, 3669971),
            (PL_7_A, 85876707),
            (PL_8_A, 3669739),
            (PL_9_A, 400214919),
            (PL_10_A, 355696000),
            (PL_11_A, 563716000),
            (PL_12_A, 704636231),
            (PL_13_A, 538003422),
            (PL_14_A, 259038701),
            (PL_15_A, 367036840),
            (PL_16_A, 557529062),
            (PL_17_A, 788513886),
            (PL_18_A, 338085238),
            (PL_19_A, 366943250),
            (PL_20_A, 3100051),
            (PL_21_A, 316011284),
            (PL_22_A, 3160075),
            (PL_23_A, 161024507),
            (PL_24_A, 367399570),
            (PL_25_A, 366999601),
            (PL_26_A, 424664312),
            (PL_27_A, 974291422),
            (PL_27_B, 980900281),
            (PL_27_C, 606631198),
        ];
        for &(payload, expected) in cases {
            let d = mmsi(payload, MsgClass::Unknown);
            assert_eq!((d.value, d.status), (expected, Status::Success));
        }
    }

    #[test]
    fn nav_status_values_and_presence() {
        let cases: &[(&[u8], u32)] = &[
            (PL_1_A, 5),
            (PL_1_B, 0),
            (PL_2_A, 14),
            (PL_3_A, 0),
            (PL_27_A, 0),
            (PL_27_B, 13),
            (PL_27_C, 8),
        ];
        for &(payload, expected) in cases {
            let d = nav_status(payload, MsgClass::Unknown);
            assert_eq!((d.value, d.status), (expected, Status::Success));
        }
        for payload in [PL_4_A, PL_5_A, PL_9_A, PL_18_A, PL_21_A] {
            assert_eq!(
                nav_status(payload, MsgClass::Unknown).status,
                Status::NoSuchField
            );
        }
    }

    #[test]
    fn rate_of_turn_statuses() {
        assert_eq!(rate_of_turn(PL_1_A, MsgClass::Unknown).status, Status::Success);
        assert_eq!(
            rate_of_turn(PL_1_B, MsgClass::Unknown).status,
            Status::NotAvailable
        );
        assert_eq!(rate_of_turn(PL_2_A, MsgClass::Unknown).status, Status::Success);
        assert_eq!(rate_of_turn(PL_3_A, MsgClass::Unknown).status, Status::Success);
        for payload in [PL_4_A, PL_9_A, PL_18_A, PL_19_A, PL_27_A] {
            assert_eq!(
                rate_of_turn(payload, MsgClass::Unknown).status,
                Status::NoSuchField
            );
        }
    }

    #[test]
    #[cfg(feature = "static-tests-fp")]
    fn rate_of_turn_values() {
        f64_near(rate_of_turn(PL_1_A, MsgClass::Unknown).value, 0.0);
        f64_near(
            rate_of_turn(PL_2_A, MsgClass::Unknown).value,
            -(31.0 / 4.733 * (31.0 / 4.733)),
        );
        f64_near(rate_of_turn(PL_3_A, MsgClass::Unknown).value, 0.0);
        // sentinel still scales as a best-effort value
        f64_near(
            rate_of_turn(PL_1_B, MsgClass::Unknown).value,
            -(128.0 / 4.733 * (128.0 / 4.733)),
        );
    }

    #[test]
    #[cfg(feature = "static-tests-fp")]
    fn speed_over_ground_values() {
        f64_near(speed_over_ground(PL_1_A, MsgClass::Unknown).value, 0.0);
        f64_near(speed_over_ground(PL_1_B, MsgClass::Unknown).value, 8.6);
        f64_near(speed_over_ground(PL_18_A, MsgClass::Unknown).value, 0.0);
        f64_near(speed_over_ground(PL_19_A, MsgClass::Unknown).value, 0.1);
        // type 27 reports whole knots
        f64_near(speed_over_ground(PL_27_A, MsgClass::Unknown).value, 16.0);
        f64_near(speed_over_ground(PL_27_B, MsgClass::Unknown).value, 35.0);
        f64_near(speed_over_ground(PL_27_C, MsgClass::Unknown).value, 50.0);
        f64_near(speed_over_ground(PL_27_A, MsgClass::M27).value, 16.0);
    }

    #[test]
    fn position_accuracy_presence() {
        for payload in [PL_1_A, PL_1_B, PL_3_A] {
            let d = position_accuracy(payload, MsgClass::Unknown);
            assert_eq!((d.value, d.status), (false, Status::Success));
        }
        assert_eq!(
            position_accuracy(PL_18_A, MsgClass::Unknown).status,
            Status::NoSuchField
        );
    }

    #[test]
    fn longitude_statuses() {
        assert_eq!(
            longitude(PL_4_A, MsgClass::Unknown).status,
            Status::NotAvailable
        );
        assert_eq!(
            longitude(PL_27_A, MsgClass::Unknown).status,
            Status::NotDefined
        );
        for payload in [PL_1_A, PL_1_B, PL_3_A, PL_9_A, PL_11_A, PL_17_A, PL_18_A, PL_19_A,
            PL_21_A, PL_27_B, PL_27_C]
        {
            assert_eq!(longitude(payload, MsgClass::Unknown).status, Status::Success);
        }
        assert_eq!(
            longitude(PL_5_A, MsgClass::Unknown).status,
            Status::NoSuchField
        );
    }

    #[test]
    #[cfg(feature = "static-tests-fp")]
    fn longitude_values() {
        f64_near(
            longitude(PL_1_A, MsgClass::Unknown).value,
            -73407500.0 / 600_000.0,
        );
        f64_near(
            longitude(PL_1_B, MsgClass::Unknown).value,
            -42208143.0 / 600_000.0,
        );
        f64_near(longitude(PL_2_A, MsgClass::Unknown).value, -12.425178333333333);
        f64_near(longitude(PL_3_A, MsgClass::Unknown).value, -93.96876833333333);
        // the sentinel scales to exactly 181 degrees
        f64_near(longitude(PL_4_A, MsgClass::Unknown).value, 181.0);
        f64_near(longitude(PL_9_A, MsgClass::Unknown).value, 60.96993666666667);
        f64_near(
            longitude(PL_11_A, MsgClass::Unknown).value,
            -55601170.0 / 600_000.0,
        );
        // coarse 1/10-minute scaling for types 17 and 27
        f64_near(longitude(PL_17_A, MsgClass::Unknown).value, -91.91833333333334);
        f64_near(
            longitude(PL_18_A, MsgClass::Unknown).value,
            -73677745.0 / 600_000.0,
        );
        f64_near(
            longitude(PL_19_A, MsgClass::Unknown).value,
            -52826080.0 / 600_000.0,
        );
        f64_near(
            longitude(PL_21_A, MsgClass::Unknown).value,
            -73823231.0 / 600_000.0,
        );
        f64_near(longitude(PL_27_A, MsgClass::Unknown).value, 120139.0 / 600.0);
        f64_near(longitude(PL_27_B, MsgClass::Unknown).value, -16675.0 / 600.0);
        f64_near(longitude(PL_27_C, MsgClass::Unknown).value, 39547.0 / 600.0);
    }

    #[test]
    fn latitude_statuses() {
        assert_eq!(
            latitude(PL_4_A, MsgClass::Unknown).status,
            Status::NotAvailable
        );
        assert_eq!(
            latitude(PL_9_A, MsgClass::Unknown).status,
            Status::NotDefined
        );
        for payload in [PL_1_A, PL_1_B, PL_3_A, PL_11_A, PL_17_A, PL_18_A, PL_19_A, PL_21_A,
            PL_27_A, PL_27_B, PL_27_C]
        {
            assert_eq!(latitude(payload, MsgClass::Unknown).status, Status::Success);
        }
    }

    #[test]
    #[cfg(feature = "static-tests-fp")]
    fn latitude_values() {
        f64_near(
            latitude(PL_1_A, MsgClass::Unknown).value,
            28_549_700.0 / 600_000.0,
        );
        f64_near(
            latitude(PL_1_B, MsgClass::Unknown).value,
            25679130.0 / 600_000.0,
        );
        f64_near(latitude(PL_2_A, MsgClass::Unknown).value, -101.54704166666667);
        f64_near(latitude(PL_3_A, MsgClass::Unknown).value, 29.841335);
        f64_near(latitude(PL_4_A, MsgClass::Unknown).value, 91.0);
        f64_near(latitude(PL_9_A, MsgClass::Unknown).value, -99.42364666666667);
        f64_near(latitude(PL_11_A, MsgClass::Unknown).value, 27.5552);
        f64_near(latitude(PL_17_A, MsgClass::Unknown).value, 38.501666666666665);
        f64_near(latitude(PL_18_A, MsgClass::Unknown).value, 45.86612);
        f64_near(latitude(PL_19_A, MsgClass::Unknown).value, 30.708233333333332);
        f64_near(latitude(PL_21_A, MsgClass::Unknown).value, 49.148651666666666);
        f64_near(latitude(PL_27_A, MsgClass::Unknown).value, -77.96833333333333);
        f64_near(latitude(PL_27_B, MsgClass::Unknown).value, -15.033333333333333);
        f64_near(latitude(PL_27_C, MsgClass::Unknown).value, -43.818333333333335);
    }

    #[test]
    fn course_over_ground_statuses_and_values() {
        assert_eq!(
            course_over_ground(PL_27_B, MsgClass::Unknown).status,
            Status::NotDefined
        );
        for payload in [PL_1_A, PL_1_B, PL_3_A, PL_18_A, PL_19_A, PL_27_A, PL_27_C] {
            assert_eq!(
                course_over_ground(payload, MsgClass::Unknown).status,
                Status::Success
            );
        }
        #[cfg(feature = "static-tests-fp")]
        {
            f64_near(course_over_ground(PL_1_A, MsgClass::Unknown).value, 51.0);
            f64_near(course_over_ground(PL_1_B, MsgClass::Unknown).value, 35.9);
            f64_near(course_over_ground(PL_18_A, MsgClass::Unknown).value, 0.0);
            f64_near(course_over_ground(PL_19_A, MsgClass::Unknown).value, 37.8);
            // type 27 reports whole degrees
            f64_near(course_over_ground(PL_27_A, MsgClass::Unknown).value, 255.0);
            f64_near(course_over_ground(PL_27_B, MsgClass::Unknown).value, 444.0);
            f64_near(course_over_ground(PL_27_C, MsgClass::Unknown).value, 80.0);
        }
    }

    #[test]
    fn true_heading_values() {
        let d = true_heading(PL_1_A, MsgClass::Unknown);
        assert_eq!((d.value, d.status), (181, Status::Success));
        let d = true_heading(PL_1_B, MsgClass::Unknown);
        assert_eq!((d.value, d.status), (511, Status::NotAvailable));
        let d = true_heading(PL_3_A, MsgClass::Unknown);
        assert_eq!((d.value, d.status), (359, Status::Success));
        let d = true_heading(PL_18_A, MsgClass::Unknown);
        assert_eq!((d.value, d.status), (511, Status::NotAvailable));
        let d = true_heading(PL_19_A, MsgClass::Unknown);
        assert_eq!((d.value, d.status), (123, Status::Success));
    }

    #[test]
    fn timestamp_values() {
        let cases: &[(&[u8], u32)] = &[
            (PL_1_A, 15),
            (PL_1_B, 56),
            (PL_3_A, 0),
            (PL_9_A, 31),
            (PL_18_A, 20),
            (PL_19_A, 52),
        ];
        for &(payload, expected) in cases {
            let d = timestamp(payload, MsgClass::Unknown);
            assert_eq!((d.value, d.status), (expected, Status::Success));
        }
    }

    #[test]
    fn special_maneuver_zero_is_the_sentinel() {
        let d = special_maneuver(PL_1_A, MsgClass::Unknown);
        assert_eq!((d.value, d.status), (0, Status::NotAvailable));
        let d = special_maneuver(PL_2_A, MsgClass::Unknown);
        assert_eq!((d.value, d.status), (2, Status::Success));
    }

    #[test]
    fn spare_regions() {
        let cases: &[(&[u8], u32)] = &[
            (PL_1_A, 0),
            (PL_4_A, 0),
            (PL_5_A, 0),
            (PL_7_A, 3),
            (PL_9_A, 83),
            (PL_14_A, 1),
            (PL_16_A, 3),
            (PL_17_A, 3),
            (PL_19_A, 216),
            (PL_23_A, 3),
            (PL_27_A, 1),
        ];
        for &(payload, expected) in cases {
            let d = spare(payload, MsgClass::Unknown);
            assert_eq!((d.value, d.status), (expected, Status::Success));
        }
        for payload in [PL_25_A, PL_26_A] {
            assert_eq!(spare(payload, MsgClass::Unknown).status, Status::NoSuchField);
        }

        let cases: &[(&[u8], u32)] = &[
            (PL_9_A, 1),
            (PL_15_A, 0),
            (PL_16_A, 2),
            (PL_17_A, 23),
            (PL_19_A, 12),
            (PL_22_A, 0),
            (PL_23_A, 939898),
            (PL_24_A, 0),
        ];
        for &(payload, expected) in cases {
            let d = spare2(payload, MsgClass::Unknown);
            assert_eq!((d.value, d.status), (expected, Status::Success));
        }

        let d = spare3(PL_15_A, MsgClass::Unknown);
        assert_eq!((d.value, d.status), (0, Status::Success));
        let d = spare3(PL_23_A, MsgClass::Unknown);
        assert_eq!((d.value, d.status), (55, Status::Success));
        assert_eq!(spare3(PL_1_A, MsgClass::Unknown).status, Status::NoSuchField);
    }

    #[test]
    fn raim_flags() {
        let set: &[u8] = PL_18_A;
        let d = raim(set, MsgClass::Unknown);
        assert_eq!((d.value, d.status), (true, Status::Success));
        for payload in [PL_1_A, PL_1_B, PL_3_A, PL_4_A, PL_9_A, PL_11_A, PL_19_A, PL_21_A,
            PL_27_A, PL_27_B, PL_27_C]
        {
            let d = raim(payload, MsgClass::Unknown);
            assert_eq!((d.value, d.status), (false, Status::Success));
        }
        assert_eq!(raim(PL_5_A, MsgClass::Unknown).status, Status::NoSuchField);
    }

    #[test]
    fn sync_state_values() {
        let cases: &[(&[u8], u32)] = &[(PL_1_A, 1), (PL_1_B, 0), (PL_3_A, 0), (PL_18_A, 3)];
        for &(payload, expected) in cases {
            let d = sync_state(payload, MsgClass::Unknown);
            assert_eq!((d.value, d.status), (expected, Status::Success));
        }
        assert_eq!(sync_state(PL_4_A, MsgClass::Unknown).status, Status::NoSuchField);
    }

    #[test]
    fn slot_timeout_values() {
        let cases: &[(&[u8], u32)] = &[
            (PL_1_A, 1),
            (PL_1_B, 6),
            (PL_4_A, 2),
            (PL_11_A, 0),
            (PL_18_A, 0),
        ];
        for &(payload, expected) in cases {
            let d = slot_timeout(payload, MsgClass::Unknown);
            assert_eq!((d.value, d.status), (expected, Status::Success));
        }
        assert_eq!(
            slot_timeout(PL_3_A, MsgClass::Unknown).status,
            Status::NoSuchField
        );
        assert_eq!(
            slot_timeout(PL_27_A, MsgClass::Unknown).status,
            Status::NoSuchField
        );
    }

    #[test]
    fn slot_offset_follows_the_sub_message() {
        // nonzero timeouts put a different sub-message in those bits
        for payload in [PL_1_A, PL_1_B, PL_4_A] {
            assert_eq!(
                slot_offset(payload, MsgClass::Unknown).status,
                Status::NotAvailable
            );
        }
        for payload in [PL_11_A, PL_18_A] {
            let d = slot_offset(payload, MsgClass::Unknown);
            assert_eq!((d.value, d.status), (0, Status::Success));
        }
        assert_eq!(
            slot_offset(PL_3_A, MsgClass::Unknown).status,
            Status::NoSuchField
        );
        assert_eq!(
            slot_offset(PL_5_A, MsgClass::Unknown).status,
            Status::NoSuchField
        );
    }

    #[test]
    fn application_identifiers() {
        let d = designated_area_code(PL_6_A, MsgClass::Unknown);
        assert_eq!((d.value, d.status), (1, Status::Success));
        let d = functional_id(PL_6_A, MsgClass::Unknown);
        assert_eq!((d.value, d.status), (0, Status::Success));
        let d = designated_area_code(PL_8_A, MsgClass::Unknown);
        assert_eq!((d.value, d.status), (1, Status::Success));
        let d = functional_id(PL_8_A, MsgClass::Unknown);
        assert_eq!((d.value, d.status), (22, Status::Success));
        assert_eq!(
            designated_area_code(PL_1_A, MsgClass::Unknown).status,
            Status::NoSuchField
        );
    }

    #[test]
    fn text_regions() {
        let d = callsign(PL_5_A, MsgClass::Unknown);
        assert_eq!(d.status, Status::Success);
        assert_eq!(d.value, "9HMQ9");

        let d = ship_name(PL_5_A, MsgClass::Unknown);
        assert_eq!(d.status, Status::Success);
        assert_eq!(d.value, "RUTH THERESA");

        let d = text(PL_12_TEXT, MsgClass::Unknown);
        assert_eq!(d.status, Status::Success);
        assert_eq!(d.value, "MSG FROM 366999707");

        assert_eq!(text(PL_1_A, MsgClass::Unknown).status, Status::NoSuchField);
        assert_eq!(callsign(PL_12_A, MsgClass::Unknown).status, Status::NoSuchField);
    }

    #[test]
    fn dispatched_and_known_class_shapes_agree() {
        let pairs: &[(&[u8], MsgClass)] = &[
            (PL_1_A, MsgClass::M1_2_3),
            (PL_4_A, MsgClass::M4_11),
            (PL_18_A, MsgClass::M18),
            (PL_27_A, MsgClass::M27),
        ];
        for &(payload, class) in pairs {
            assert_eq!(
                mmsi(payload, MsgClass::Unknown),
                mmsi(payload, class)
            );
            assert_eq!(
                speed_over_ground(payload, MsgClass::Unknown),
                speed_over_ground(payload, class)
            );
            assert_eq!(
                longitude(payload, MsgClass::Unknown),
                longitude(payload, class)
            );
            assert_eq!(raim(payload, MsgClass::Unknown), raim(payload, class));
        }
    }

    #[test]
    fn success_positions_stay_on_the_globe() {
        for payload in [PL_1_A, PL_1_B, PL_3_A, PL_11_A, PL_17_A, PL_18_A, PL_19_A, PL_21_A,
            PL_27_B, PL_27_C]
        {
            let lon = longitude(payload, MsgClass::Unknown);
            let lat = latitude(payload, MsgClass::Unknown);
            if lon.status.is_success() {
                assert!(lon.value >= -180.0 && lon.value <= 180.0);
            }
            if lat.status.is_success() {
                assert!(lat.value >= -90.0 && lat.value <= 90.0);
            }
        }
    }
}
