//! # Arbitrary precision integers for JSON and CBOR
//!
//! JSON puts no limit on the size of an integer literal and CBOR carries big
//! numbers as tagged byte strings (tag 2 for positive, tag 3 for negative
//! bignums). This crate provides the signed integer type that decoders and
//! encoders of both formats fall back to once a value no longer fits a native
//! 64-bit integer.
//!
//! ```
//! use json_bigint::BigInt;
//!
//! # fn main() -> json_bigint::Result<()> {
//! // 2^64 does not fit any native 64-bit integer.
//! let n = BigInt::parse("18446744073709551616")?;
//! assert_eq!(n.to_string(), "18446744073709551616");
//! assert_eq!(n.to_string_hex(), "10000000000000000");
//!
//! let doubled = &n * 2u32;
//! assert_eq!(doubled, BigInt::parse("36893488147419103232")?);
//! # Ok(())
//! # }
//! ```
//!
//! # Wire format
//!
//! Binary codecs exchange the magnitude as big-endian bytes and carry the sign
//! in the surrounding tag.
//!
//! ```
//! use json_bigint::{BigInt, Sign};
//!
//! let n = BigInt::from(256);
//! let (sign, bytes) = n.to_bytes_be();
//! assert_eq!(sign, Sign::Plus);
//! assert_eq!(bytes, [0x01, 0x00]);
//! assert_eq!(BigInt::from_bytes_be(sign, &bytes), n);
//! ```
//!
//! # Representation
//!
//! A `BigInt` stores a sign flag and a magnitude made of machine words, least
//! significant word first. Magnitudes up to 128 bits live inline in the value
//! and never touch the heap; larger ones spill into a heap buffer that grows in
//! small bursts.
//!
//! Every operation leaves the value in reduced form: there are no high zero
//! words, and zero is never negative.

#![doc(html_root_url = "https://docs.rs/json_bigint/0.1.0")]
// Ignored clippy lints
#![allow(
    clippy::comparison_chain,
    clippy::many_single_char_names,
    clippy::needless_doctest_main,
    clippy::suspicious_arithmetic_impl,
    clippy::suspicious_op_assign_impl
)]
// Ignored clippy_pedantic lints
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal
)]
#![deny(missing_docs)]
#![no_std]

#[cfg(not(any(feature = "std", feature = "alloc")))]
mod features_check;

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Not public API. Used from macro-generated code.
extern crate serde_core as serde;

#[doc(inline)]
pub use crate::bigint::{BigInt, Sign, Word};
#[doc(inline)]
pub use crate::error::{Error, Result};

pub mod error;

mod bigint;
mod de;
mod ser;
