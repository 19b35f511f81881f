//! Field-level decoder for AIS (ITU-R M.1371) armored payloads.
//!
//! AIS messages travel as bit-packed records armored into printable
//! characters inside `!AIVDM`/`!AIVDO` NMEA 0183 sentences. Rather than
//! materializing one struct per message type, this crate decodes individual
//! semantic fields straight out of the armored payload: each decoder knows
//! where its bits live in each message class, applies the field's scaling,
//! and reports a value together with a status (success, an in-band
//! "not available" sentinel, out-of-range, field absent, and so on).
//!
//! ```
//! use aisfield::{MsgClass, Payload, Status};
//!
//! let report = Payload::new(b"177KQJ5000G?tO`K>RA1wUbN0TKH");
//! assert_eq!(report.class(), MsgClass::M1_2_3);
//! assert_eq!(report.mmsi().value, 477553000);
//! assert_eq!(report.nav_status().value, 5);
//! assert_eq!(report.true_heading().value, 181);
//! assert_eq!(report.speed_over_ground().status, Status::Success);
//! ```
//!
//! Decoding is pure and allocation-free except for text fields; any number
//! of threads may decode concurrently. The envelope (checksum framing,
//! fragment reassembly) is a collaborator's job — [`sentence`] only carries
//! the helpers the fixtures and feed tools need.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

pub mod errors;
pub mod fields;
pub mod sentence;

#[cfg(feature = "std")]
pub mod stream;

#[cfg(feature = "static-tests")]
pub mod fixtures;

pub use errors::{Decoded, Status};
pub use fields::{class_of, msg_id_of, Field, FieldText, MsgClass, MsgId, Payload};
