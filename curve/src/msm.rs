//! Multi-exponentiation over batches of (point, scalar) pairs using the
//! windowed Pippenger bucket method.

use crate::errors::Error;
use crate::point::PointG1;
use crate::scalar::{group_order, reduce};
use num_bigint::BigUint;

/// Compute sum of scalars[i] * points[i].
///
/// Scalars are reduced modulo the group order. The two slices must have the
/// same length. This routine is not constant time.
pub fn multi_exp(points: &[PointG1], scalars: &[BigUint]) -> Result<PointG1, Error> {
    if points.len() != scalars.len() {
        return Err(Error::LengthMismatch {
            points: points.len(),
            scalars: scalars.len(),
        });
    }
    if points.is_empty() {
        return Ok(PointG1::INFINITY);
    }

    let c = window_size(points.len());
    let mask = (1u64 << c) - 1;
    let num_bits = group_order().bits() as u32;
    let mut scalars: Vec<BigUint> = scalars.iter().map(reduce).collect();

    // low-to-high windows of c bits each
    let mut windows = Vec::with_capacity(num_bits.div_ceil(c) as usize);
    let mut cur = 0;
    while cur < num_bits {
        let mut buckets = vec![PointG1::INFINITY; 1 << c];
        for (point, scalar) in points.iter().zip(scalars.iter_mut()) {
            let index = (scalar.iter_u64_digits().next().unwrap_or(0) & mask) as usize;
            if index != 0 {
                buckets[index] += *point;
            }
            *scalar >>= c as usize;
        }

        // running-sum trick: one pass yields sum of k * buckets[k]
        let mut sum = PointG1::INFINITY;
        let mut acc = PointG1::INFINITY;
        for bucket in buckets.iter().skip(1).rev() {
            sum += *bucket;
            acc += sum;
        }
        windows.push(acc);
        cur += c;
    }

    // combine windows high to low
    let mut acc = PointG1::INFINITY;
    for window in windows.iter().rev() {
        for _ in 0..c {
            acc = acc.double();
        }
        acc += *window;
    }
    Ok(acc)
}

/// Window width: 3 bits for small batches, otherwise ceil(log2(n)).
fn window_size(n: usize) -> u32 {
    if n < 32 {
        3
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}
