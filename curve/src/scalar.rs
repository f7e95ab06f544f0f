//! Scalar handling for the group.
//!
//! Scalars are arbitrary-precision non-negative integers; every consuming
//! operation reduces them modulo the prime group order on entry.

use num_bigint::BigUint;

// Group order r, 255 bits:
// 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001
const ORDER: [u64; 4] = [
    0xffffffff00000001,
    0x53bda402fffe5bfe,
    0x3339d80809a1d805,
    0x73eda753299d7d48,
];

// Effective cofactor 1 - z for the BLS parameter z; multiplying by it
// lands any curve point in the prime-order subgroup.
const COFACTOR_EFF: u64 = 0xd201000000010001;

/// The prime order r of the group as a `BigUint`.
pub fn group_order() -> BigUint {
    let mut bytes = Vec::with_capacity(32);
    for &limb in &ORDER {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

/// The effective cofactor used by cofactor clearing.
pub(crate) fn cofactor_eff() -> BigUint {
    BigUint::from(COFACTOR_EFF)
}

/// Reduce a scalar into the canonical range [0, r).
pub(crate) fn reduce(e: &BigUint) -> BigUint {
    e % group_order()
}
