//! Error types for point decoding, multi-exponentiation and hashing.

use thiserror::Error;

/// Errors surfaced by deserialization, multi-exponentiation and the
/// hash-to-curve entry points.
///
/// Validation failures are terminal for the call that produced them; no
/// partial result is returned. Plain group arithmetic never fails.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input buffer is shorter (or, for compressed form, not exactly
    /// equal to) the length the requested encoding needs.
    #[error("input should be {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// The flag bits of byte 0 are inconsistent with the requested form,
    /// or the infinity flag is set over a non-zero body.
    #[error("invalid serialization flags")]
    InvalidFlags,

    /// A 48-byte field encoding is out of canonical range.
    #[error("field element is not canonical")]
    NonCanonical,

    /// During compressed decoding, x^3 + b is a non-residue so no y exists.
    #[error("x coordinate is not on the curve")]
    NoSquareRoot,

    /// The decoded coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,

    /// The point is on the curve but outside the prime-order subgroup.
    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,

    /// Multi-exponentiation input vectors differ in length.
    #[error("point and scalar vectors must be the same length: {points} vs {scalars}")]
    LengthMismatch { points: usize, scalars: usize },

    /// A hash-to-curve message or domain separation tag exceeds its bound.
    #[error("input longer than the {limit} byte limit")]
    InputTooLong { limit: usize },
}
