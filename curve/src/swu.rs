//! Simplified Shallue-van de Woestijne-Ulas map onto the 11-isogenous
//! curve E': y^2 = x^3 + A'x + B'.
//!
//! The curve itself has j-invariant 0, so the map targets E' and the result
//! is pulled back through the isogeny. Parameters are the BLS12-381 G1
//! constants of RFC 9380, section 8.8.1.

use crate::basefield::Fp;

// A' = 0x144698a3b8e9433d693a02c96d4982b0ea985383ee66a8d8e8981aefd881ac98936f8da0e0f97f5cf428082d584c1d
const SWU_A: Fp = Fp::from_raw([
    0x2f65aa0e9af5aa51,
    0x86464c2d1e8416c3,
    0xb85ce591b7bd31e2,
    0x27e11c91b5f24e7c,
    0x28376eda6bfc1835,
    0x155455c3e5071d85,
]);

// B' = 0x12e2908d11688030018b12e8753eee3b2016c1f0f24f4070a0b9c14fcef35ef55a23215a316ceaa5d1cc48e98e172be0
const SWU_B: Fp = Fp::from_raw([
    0xfb996971fe22a1e0,
    0x9aa93eb35b742d6f,
    0x8c476013de99c5c4,
    0x873e27c3a221e571,
    0xca72b5e45a52d888,
    0x06824061418a386b,
]);

// Z = 11, the smallest non-square that keeps the map exception-free.
const SWU_Z: Fp = Fp::from_raw([
    0x886c00000023ffdc,
    0x0f70008d3090001d,
    0x77672417ed5828c3,
    0x9dac23e943dc1740,
    0x50553f1b9c131521,
    0x078c712fbe0ab6e8,
]);

/// Map a field element to a point on E'. Not constant time.
pub(crate) fn swu_map(u: &Fp) -> (Fp, Fp) {
    // tv1 = Z * u^2, the denominator term reused throughout
    let tv1 = SWU_Z * u.square();
    let tv2 = tv1.square() + tv1;

    // x1 = (-B'/A') * (1 + 1/(Z^2 u^4 + Z u^2)); the exceptional case
    // tv2 = 0 takes x1 = B'/(Z A')
    let x1 = if tv2.is_zero() {
        SWU_B / (SWU_Z * SWU_A)
    } else {
        (-SWU_B / SWU_A) * (Fp::ONE + tv2.inverse())
    };
    let gx1 = (x1.square() + SWU_A) * x1 + SWU_B;

    let x2 = tv1 * x1;
    let gx2 = (x2.square() + SWU_A) * x2 + SWU_B;

    // exactly one of gx1, gx2 is guaranteed square
    let (x, mut y) = match gx1.sqrt() {
        Some(root) => (x1, root),
        None => (x2, gx2.sqrt().expect("gx2 is a square when gx1 is not")),
    };

    if u.sgn0() != y.sgn0() {
        y = -y;
    }
    (x, y)
}

/// The E' curve equation, used to sanity-check map output in tests.
#[cfg(test)]
pub(crate) fn is_on_iso_curve(x: &Fp, y: &Fp) -> bool {
    y.square() == (x.square() + SWU_A) * *x + SWU_B
}
