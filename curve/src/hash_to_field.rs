//! Hashing byte strings to base field elements with expand_message_xmd
//! (RFC 9380, section 5.3.1).

use crate::basefield::Fp;
use crate::errors::Error;
use digest::core_api::BlockSizeUser;
use digest::Digest;
use num_bigint::BigUint;

/// Longest accepted domain separation tag.
pub const MAX_DST_LEN: usize = 255;
/// Longest accepted message.
pub const MAX_MSG_LEN: usize = 65535;

// Bytes drawn per field element: ceil((381 + 128) / 8), giving 2^-128
// bias after reduction.
const L: usize = 64;

/// expand_message_xmd: stretch `msg` into `len` uniform bytes under the
/// domain separation tag `dst`, using the hash function `D`.
pub fn expand_message_xmd<D: Digest + BlockSizeUser>(msg: &[u8], dst: &[u8], len: usize) -> Vec<u8> {
    let b_len = <D as Digest>::output_size();
    let ell = len.div_ceil(b_len);
    debug_assert!(ell <= 255 && dst.len() <= MAX_DST_LEN);

    // b_0 = H(Z_pad || msg || l_i_b_str || 0x00 || DST_prime)
    let mut hasher = D::new();
    hasher.update(vec![0u8; <D as BlockSizeUser>::block_size()]);
    hasher.update(msg);
    hasher.update([(len >> 8) as u8, len as u8, 0u8]);
    hasher.update(dst);
    hasher.update([dst.len() as u8]);
    let b0 = hasher.finalize();

    // b_1 = H(b_0 || 0x01 || DST_prime)
    let mut hasher = D::new();
    hasher.update(&b0);
    hasher.update([1u8]);
    hasher.update(dst);
    hasher.update([dst.len() as u8]);
    let mut bi = hasher.finalize();

    let mut out = Vec::with_capacity(ell * b_len);
    out.extend_from_slice(&bi);

    // b_i = H((b_0 ^ b_{i-1}) || i || DST_prime)
    for i in 2..=ell {
        let mut hasher = D::new();
        let mixed: Vec<u8> = b0.iter().zip(bi.iter()).map(|(a, b)| a ^ b).collect();
        hasher.update(&mixed);
        hasher.update([i as u8]);
        hasher.update(dst);
        hasher.update([dst.len() as u8]);
        bi = hasher.finalize();
        out.extend_from_slice(&bi);
    }

    out.truncate(len);
    out
}

/// Hash a message to `count` base field elements.
///
/// Each element is the big-endian integer of an L-byte block reduced modulo
/// p, as in hash_to_field of RFC 9380 with m = 1.
pub fn hash_to_fp<D: Digest + BlockSizeUser>(
    msg: &[u8],
    dst: &[u8],
    count: usize,
) -> Result<Vec<Fp>, Error> {
    if msg.len() > MAX_MSG_LEN {
        return Err(Error::InputTooLong { limit: MAX_MSG_LEN });
    }
    if dst.len() > MAX_DST_LEN {
        return Err(Error::InputTooLong { limit: MAX_DST_LEN });
    }

    let modulus = Fp::modulus();
    let okm = expand_message_xmd::<D>(msg, dst, count * L);
    let out = okm
        .chunks(L)
        .map(|block| {
            let reduced = BigUint::from_bytes_be(block) % &modulus;
            let bytes = reduced.to_bytes_be();
            let mut buf = [0u8; 48];
            buf[48 - bytes.len()..].copy_from_slice(&bytes);
            Fp::from_bytes(&buf).expect("reduced below the modulus")
        })
        .collect();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::Sha256;

    // expand_message_xmd test vectors from RFC 9380, K.1 (SHA-256, 32 and
    // 128 byte outputs).
    const XMD_DST: &[u8] = b"QUUX-V01-CS02-with-expander-SHA256-128";

    #[test]
    fn test_expand_message_xmd_empty_msg() {
        let out = expand_message_xmd::<Sha256>(b"", XMD_DST, 32);
        assert_eq!(
            hex::encode(out),
            "68a985b87eb6b46952128911f2a4412bbc302a9d759667f87f7a21d803f07235"
        );
    }

    #[test]
    fn test_expand_message_xmd_abc() {
        let out = expand_message_xmd::<Sha256>(b"abc", XMD_DST, 32);
        assert_eq!(
            hex::encode(out),
            "d8ccab23b5985ccea865c6c97b6e5b8350e794e603b4b97902f53a8a0d605615"
        );
    }

    #[test]
    fn test_expand_message_xmd_long_output() {
        let out = expand_message_xmd::<Sha256>(b"abc", XMD_DST, 0x80);
        assert_eq!(
            hex::encode(out),
            "abba86a6129e366fc877aab32fc4ffc70120d8996c88aee2fe4b32d6c7b6437a647e6c3163d40b76a73cf6a5674ef1d890f95b664ee0afa5359a5c4e07985635bbecbac65d747d3d2da7ec2b8221b17b0ca9dc8a1ac1c07ea6a1e60583e2cb00058e77b7b72a298425cd1b941ad4ec65e8afc50303a22c0f99b0509b4c895f40"
        );
    }

    #[test]
    fn test_hash_to_fp_deterministic() {
        let a = hash_to_fp::<Sha256>(b"message", b"DST", 2).expect("hash");
        let b = hash_to_fp::<Sha256>(b"message", b"DST", 2).expect("hash");
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert_ne!(a[0], a[1]);
    }

    #[test]
    fn test_hash_to_fp_rejects_long_dst() {
        let dst = [0x41u8; 256];
        assert_eq!(
            hash_to_fp::<Sha256>(b"msg", &dst, 1),
            Err(Error::InputTooLong { limit: MAX_DST_LEN })
        );
    }

    #[test]
    fn test_hash_to_fp_rejects_long_msg() {
        let msg = vec![0u8; MAX_MSG_LEN + 1];
        assert_eq!(
            hash_to_fp::<Sha256>(&msg, b"DST", 1),
            Err(Error::InputTooLong { limit: MAX_MSG_LEN })
        );
    }
}
