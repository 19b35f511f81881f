//! Status codes and result types used by this crate

use core::fmt;

/// Custom `Result` to prepopulate the error type for the envelope helpers
pub type Result<T> = core::result::Result<T, Status>;

/// Outcome of a single field decode.
///
/// Codes are bucketed by sign: negative codes are informational warnings
/// (the value is meaningful but the data source is degraded), zero is
/// success, and positive codes are errors (the value must not be consulted).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(i8)]
pub enum Status {
    /// Speed over ground at or beyond the 102.2 knot scale limit
    SogExceedsScale = -4,
    /// Positioning system is in manual input mode
    ManualInputMode = -3,
    /// Electronic position fixing system is in estimated (dead reckoning) mode
    EstimatedMode = -2,
    /// Positioning system is inoperative
    PositioningInoperative = -1,
    Success = 0,
    /// The in-band "not available" sentinel was decoded
    NotAvailable = 1,
    /// Raw value is outside the field's defined range
    NotDefined = 2,
    /// The message class does not carry the requested field
    NoSuchField = 3,
    /// The leading character is not a recognized message id
    UnknownMsgType = 4,
    Uninitialized = 5,
    ChecksumTargetInvalid = 6,
    ChecksumMismatch = 7,
    MsgTooShort = 8,
    MsgTooLong = 9,
    InvalidFirstChar = 10,
    FillBitsInvalid = 11,
    TooFewCommas = 12,
    FieldEmpty = 13,
    MemberNotPresent = 14,
}

impl Status {
    /// Numeric code; the sign determines the bucket.
    pub const fn code(self) -> i8 {
        self as i8
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Informational warning: the decoded value is still meaningful.
    pub const fn is_warning(self) -> bool {
        (self as i8) < 0
    }

    pub const fn is_error(self) -> bool {
        (self as i8) > 0
    }

    /// Success or warning; the paired value may be consulted.
    pub const fn is_usable(self) -> bool {
        (self as i8) <= 0
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::SogExceedsScale => "speed over ground exceeds 102.2 knots",
            Self::ManualInputMode => "positioning system in manual input mode",
            Self::EstimatedMode => "position fixing system in estimated mode",
            Self::PositioningInoperative => "positioning system inoperative",
            Self::Success => "success",
            Self::NotAvailable => "value not available",
            Self::NotDefined => "value outside defined range",
            Self::NoSuchField => "message type has no such field",
            Self::UnknownMsgType => "unknown message type",
            Self::Uninitialized => "uninitialized",
            Self::ChecksumTargetInvalid => "checksum target invalid",
            Self::ChecksumMismatch => "checksum mismatch",
            Self::MsgTooShort => "message too short",
            Self::MsgTooLong => "message too long",
            Self::InvalidFirstChar => "invalid first character",
            Self::FillBitsInvalid => "fill bits invalid",
            Self::TooFewCommas => "fewer than 6 commas",
            Self::FieldEmpty => "field is empty",
            Self::MemberNotPresent => "member not present",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Status {}

/// A decoded field value paired with its status.
///
/// `value` holds a best-effort decode even when `status` is an error code;
/// it is only meaningful when `status.is_usable()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub status: Status,
}

impl<T> Decoded<T> {
    pub const fn new(value: T, status: Status) -> Self {
        Self { value, status }
    }

    pub const fn ok(value: T) -> Self {
        Self::new(value, Status::Success)
    }

    pub fn usable(&self) -> bool {
        self.status.is_usable()
    }

    /// The value, if the status permits consulting it.
    pub fn into_option(self) -> Option<T> {
        if self.status.is_usable() {
            Some(self.value)
        } else {
            None
        }
    }
}

impl<T: Default> Decoded<T> {
    /// A don't-care value carrying only a status.
    pub fn status_only(status: Status) -> Self {
        Self::new(T::default(), status)
    }
}

impl<T: Default> Default for Decoded<T> {
    fn default() -> Self {
        Self::status_only(Status::Uninitialized)
    }
}
