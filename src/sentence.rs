//! Helpers for the NMEA 0183 envelope around armored AIS payloads.
//!
//! Production callers hand the armored payload to [`crate::fields`]
//! directly; these helpers exist for fixtures and the line-oriented feed
//! tools, and assume single-fragment sentences.

use crate::errors::{Result, Status};
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::combinator::verify;
use nom::number::complete::hex_u32;
use nom::IResult;

pub const MAX_SENTENCE_SIZE_BYTES: usize = 384;

/// Returns the armored payload of `line`: the field closed by the
/// `,<digit>*` fill-bits/checksum terminator, which real receivers may
/// follow with further annotations.
///
/// The terminator must close the sixth comma-separated field and its digit
/// must be a valid fill-bit count (0..=5).
pub fn extract_payload(line: &[u8]) -> Result<&[u8]> {
    let mut commas = 0usize;
    let mut field_start = 0usize;
    for (i, &b) in line.iter().enumerate() {
        if b != b',' {
            continue;
        }
        commas += 1;
        if line.get(i + 2) == Some(&b'*') && line[i + 1].is_ascii_digit() {
            if line[i + 1] > b'5' {
                return Err(Status::FillBitsInvalid);
            }
            if commas < 6 {
                return Err(Status::TooFewCommas);
            }
            let payload = &line[field_start..i];
            if payload.is_empty() {
                return Err(Status::FieldEmpty);
            }
            return Ok(payload);
        }
        field_start = i + 1;
    }
    Err(Status::TooFewCommas)
}

/// Splits `line` into its checksum scope (everything between the leading
/// `!`/`$` and the `*`) and the transmitted checksum byte.
fn checksum_parts(line: &[u8]) -> IResult<&[u8], (&[u8], u32)> {
    let (rest, _) = alt((tag("!"), tag("$")))(line)?;
    let (rest, scope) = take_until("*")(rest)?;
    let (rest, _) = tag("*")(rest)?;
    let (rest, sum) = verify(hex_u32, |val| val <= &0xff)(rest)?;
    Ok((rest, (scope, sum)))
}

/// Verifies the sentence checksum: the XOR fold of the scope must equal the
/// transmitted hex byte.
pub fn verify_checksum(line: &[u8]) -> Result<u8> {
    let (_, (scope, expected)) =
        checksum_parts(line).map_err(|_| Status::ChecksumTargetInvalid)?;
    let received = scope.iter().fold(0u8, |acc, &item| acc ^ item);
    if received == expected as u8 {
        Ok(received)
    } else {
        Err(Status::ChecksumMismatch)
    }
}
