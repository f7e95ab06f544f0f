//! G1 group arithmetic for the BLS12-381 pairing-friendly curve.
//!
//! This crate provides the prime-order subgroup of E(F_p): y^2 = x^3 + 4 in
//! Jacobian coordinates, together with constant-time scalar multiplication,
//! Pippenger multi-exponentiation, zcash-convention serialization, and the
//! XMD/SWU hash-to-curve suites. The base field implementation and the
//! curve constants are fixed to BLS12-381.

mod basefield;
mod encoding;
mod errors;
mod hash_to_curve;
mod hash_to_field;
mod isogeny;
mod msm;
mod point;
mod random;
mod scalar;
mod swu;


pub use basefield::Fp;
pub use errors::Error;
pub use hash_to_field::{expand_message_xmd, hash_to_fp, MAX_DST_LEN, MAX_MSG_LEN};
pub use msm::multi_exp;
pub use point::PointG1;
pub use random::RandomField;
pub use scalar::group_order;
