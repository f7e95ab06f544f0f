//! Point serialization.
//!
//! The compressed (48 byte) and uncompressed (96 byte) forms follow the
//! zcash flag convention: the top three bits of byte 0 are the compression
//! flag (0x80), the infinity flag (0x40) and the sign flag (0x20). A third,
//! flagless 96-byte form carries plain `x || y` coordinates and encodes
//! infinity as (0, 0).
//!
//! Every decoder rejects non-canonical field encodings, points outside the
//! curve, and points outside the prime-order subgroup.

use crate::basefield::Fp;
use crate::errors::Error;
use crate::point::{PointG1, CURVE_B};

const FLAG_COMPRESSED: u8 = 1 << 7;
const FLAG_INFINITY: u8 = 1 << 6;
const FLAG_SIGN: u8 = 1 << 5;
const FLAG_MASK: u8 = 0x1f;

impl PointG1 {
    /// Serialize into the 48-byte compressed form.
    ///
    /// The sign flag is set exactly when the y coordinate is the
    /// lexicographically larger of the two candidate roots.
    pub fn to_compressed(&self) -> [u8; 48] {
        let mut out = [0u8; 48];
        let p = self.affine();

        if p.is_infinity() {
            out[0] |= FLAG_INFINITY;
        } else {
            out.copy_from_slice(&p.x.to_bytes());
            if !p.y.sign_be() {
                out[0] |= FLAG_SIGN;
            }
        }
        out[0] |= FLAG_COMPRESSED;
        out
    }

    /// Deserialize the 48-byte compressed form, solving the curve equation
    /// for y and picking the root selected by the sign flag.
    pub fn from_compressed(input: &[u8]) -> Result<Self, Error> {
        if input.len() != 48 {
            return Err(Error::InvalidLength {
                expected: 48,
                got: input.len(),
            });
        }
        let mut buf = [0u8; 48];
        buf.copy_from_slice(input);

        if buf[0] & FLAG_COMPRESSED == 0 {
            return Err(Error::InvalidFlags);
        }
        if buf[0] & FLAG_INFINITY != 0 {
            if buf[0] != FLAG_COMPRESSED | FLAG_INFINITY || buf[1..].iter().any(|&b| b != 0) {
                return Err(Error::InvalidFlags);
            }
            return Ok(PointG1::INFINITY);
        }

        let sign = buf[0] & FLAG_SIGN != 0;
        buf[0] &= FLAG_MASK;
        let x = Fp::from_bytes(&buf).ok_or(Error::NonCanonical)?;

        // solve y^2 = x^3 + b
        let y2 = x.square() * x + CURVE_B;
        let mut y = y2.sqrt().ok_or(Error::NoSquareRoot)?;
        if y.sign_be() == sign {
            y = -y;
        }

        validate(PointG1::new(x, y, Fp::ONE))
    }

    /// Serialize into the 96-byte uncompressed form.
    pub fn to_uncompressed(&self) -> [u8; 96] {
        let mut out = [0u8; 96];
        let p = self.affine();

        if p.is_infinity() {
            out[0] |= FLAG_INFINITY;
        } else {
            out[..48].copy_from_slice(&p.x.to_bytes());
            out[48..].copy_from_slice(&p.y.to_bytes());
        }
        out
    }

    /// Deserialize the 96-byte uncompressed form. Longer inputs are
    /// accepted; only the first 96 bytes are read.
    pub fn from_uncompressed(input: &[u8]) -> Result<Self, Error> {
        if input.len() < 96 {
            return Err(Error::InvalidLength {
                expected: 96,
                got: input.len(),
            });
        }
        let mut buf = [0u8; 96];
        buf.copy_from_slice(&input[..96]);

        if buf[0] & FLAG_COMPRESSED != 0 || buf[0] & FLAG_SIGN != 0 {
            return Err(Error::InvalidFlags);
        }
        if buf[0] & FLAG_INFINITY != 0 {
            if buf[0] != FLAG_INFINITY || buf[1..].iter().any(|&b| b != 0) {
                return Err(Error::InvalidFlags);
            }
            return Ok(PointG1::INFINITY);
        }

        let x = Fp::from_bytes(buf[..48].try_into().expect("48-byte x"))
            .ok_or(Error::NonCanonical)?;
        let y = Fp::from_bytes(buf[48..].try_into().expect("48-byte y"))
            .ok_or(Error::NonCanonical)?;

        validate(PointG1::new(x, y, Fp::ONE))
    }

    /// Serialize into the flagless 96-byte `x || y` form; infinity encodes
    /// as all zeroes.
    pub fn to_bytes(&self) -> [u8; 96] {
        let mut out = [0u8; 96];
        let p = self.affine();

        if p.is_infinity() {
            return out;
        }
        out[..48].copy_from_slice(&p.x.to_bytes());
        out[48..].copy_from_slice(&p.y.to_bytes());
        out
    }

    /// Deserialize the flagless 96-byte form. Longer inputs are accepted;
    /// only the first 96 bytes are read. (0, 0) decodes to infinity even
    /// though it does not satisfy the curve equation.
    pub fn from_bytes(input: &[u8]) -> Result<Self, Error> {
        if input.len() < 96 {
            return Err(Error::InvalidLength {
                expected: 96,
                got: input.len(),
            });
        }

        let x = Fp::from_bytes(input[..48].try_into().expect("48-byte x"))
            .ok_or(Error::NonCanonical)?;
        let y = Fp::from_bytes(input[48..96].try_into().expect("48-byte y"))
            .ok_or(Error::NonCanonical)?;

        if x.is_zero() && y.is_zero() {
            return Ok(PointG1::INFINITY);
        }

        validate(PointG1::new(x, y, Fp::ONE))
    }
}

/// Shared decoder tail: on-curve and subgroup checks.
fn validate(p: PointG1) -> Result<PointG1, Error> {
    if !p.is_on_curve() {
        return Err(Error::NotOnCurve);
    }
    if !p.is_in_subgroup() {
        return Err(Error::NotInSubgroup);
    }
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_compressed_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..4 {
            let p = PointG1::random(&mut rng);
            let bytes = p.to_compressed();
            assert_eq!(bytes[0] & FLAG_COMPRESSED, FLAG_COMPRESSED);
            assert_eq!(PointG1::from_compressed(&bytes).expect("round trip"), p);
        }
    }

    #[test]
    fn test_uncompressed_round_trip() {
        let mut rng = StdRng::seed_from_u64(43);
        for _ in 0..4 {
            let p = PointG1::random(&mut rng);
            let bytes = p.to_uncompressed();
            assert_eq!(bytes[0] & FLAG_COMPRESSED, 0);
            assert_eq!(PointG1::from_uncompressed(&bytes).expect("round trip"), p);
        }
    }

    #[test]
    fn test_flagless_round_trip() {
        let mut rng = StdRng::seed_from_u64(44);
        for _ in 0..4 {
            let p = PointG1::random(&mut rng);
            assert_eq!(PointG1::from_bytes(&p.to_bytes()).expect("round trip"), p);
        }
    }

    #[test]
    fn test_infinity_encodings() {
        let inf = PointG1::INFINITY;

        let mut compressed = [0u8; 48];
        compressed[0] = 0xc0;
        assert_eq!(inf.to_compressed(), compressed);
        assert_eq!(PointG1::from_compressed(&compressed).expect("infinity"), inf);

        let mut uncompressed = [0u8; 96];
        uncompressed[0] = 0x40;
        assert_eq!(inf.to_uncompressed(), uncompressed);
        assert_eq!(
            PointG1::from_uncompressed(&uncompressed).expect("infinity"),
            inf
        );

        assert_eq!(inf.to_bytes(), [0u8; 96]);
        assert_eq!(PointG1::from_bytes(&[0u8; 96]).expect("infinity"), inf);
    }

    #[test]
    fn test_infinity_flag_with_nonzero_body() {
        let mut compressed = PointG1::generator().to_compressed();
        compressed[0] |= FLAG_INFINITY;
        assert_eq!(PointG1::from_compressed(&compressed), Err(Error::InvalidFlags));

        let mut uncompressed = PointG1::generator().to_uncompressed();
        uncompressed[0] |= FLAG_INFINITY;
        assert_eq!(
            PointG1::from_uncompressed(&uncompressed),
            Err(Error::InvalidFlags)
        );
    }

    #[test]
    fn test_compression_flag_required() {
        let mut bytes = PointG1::generator().to_compressed();
        bytes[0] &= !FLAG_COMPRESSED;
        assert_eq!(PointG1::from_compressed(&bytes), Err(Error::InvalidFlags));
    }

    #[test]
    fn test_uncompressed_rejects_compression_flag() {
        let mut bytes = PointG1::generator().to_uncompressed();
        bytes[0] |= FLAG_COMPRESSED;
        assert_eq!(PointG1::from_uncompressed(&bytes), Err(Error::InvalidFlags));
    }

    #[test]
    fn test_length_errors() {
        assert_eq!(
            PointG1::from_compressed(&[0u8; 47]),
            Err(Error::InvalidLength {
                expected: 48,
                got: 47
            })
        );
        assert_eq!(
            PointG1::from_compressed(&[0u8; 49]),
            Err(Error::InvalidLength {
                expected: 48,
                got: 49
            })
        );
        assert_eq!(
            PointG1::from_uncompressed(&[0u8; 95]),
            Err(Error::InvalidLength {
                expected: 96,
                got: 95
            })
        );
        assert_eq!(
            PointG1::from_bytes(&[0u8; 12]),
            Err(Error::InvalidLength {
                expected: 96,
                got: 12
            })
        );
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let p = PointG1::generator().double();
        let mut long = p.to_uncompressed().to_vec();
        long.extend_from_slice(&[0xaa; 7]);
        assert_eq!(PointG1::from_uncompressed(&long).expect("decode"), p);
    }

    #[test]
    fn test_off_curve_rejected() {
        let g = PointG1::generator();
        let mut bytes = g.to_uncompressed();
        // perturb y
        bytes[95] ^= 1;
        assert_eq!(PointG1::from_uncompressed(&bytes), Err(Error::NotOnCurve));
    }

    #[test]
    fn test_non_canonical_rejected() {
        let mut bytes = [0xffu8; 48];
        bytes[0] = FLAG_COMPRESSED | 0x1f;
        assert_eq!(PointG1::from_compressed(&bytes), Err(Error::NonCanonical));
    }

    #[test]
    fn test_sign_flag_selects_root() {
        let mut rng = StdRng::seed_from_u64(45);
        let p = PointG1::random(&mut rng);
        let q = p.negate();

        let pc = p.to_compressed();
        let qc = q.to_compressed();
        assert_eq!(pc[1..], qc[1..]);
        assert_eq!(pc[0] ^ qc[0], FLAG_SIGN);
        assert_eq!(PointG1::from_compressed(&qc).expect("decode"), q);
    }
}
