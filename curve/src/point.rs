// E(F_p) : y^2 = x^3 + 4
// Generator (x, y):
//   x = 0x17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb
//   y = 0x08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1
// Prime subgroup order r (255 bits):
//   0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001
// Effective cofactor for subgroup clearing: 0xd201000000010001

use crate::basefield::Fp;
use crate::scalar::{cofactor_eff, group_order, reduce};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConditionallySelectable};

/// Point on the curve in Jacobian coordinates (X : Y : Z), where the affine
/// coordinates are (X/Z^2, Y/Z^3). Z = 1 means the point is in affine form;
/// Z = 0 means the point at infinity.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct PointG1 {
    pub x: Fp,
    pub y: Fp,
    pub z: Fp,
}

// Curve coefficient b = 4, Montgomery form.
pub(crate) const CURVE_B: Fp = Fp::from_raw([
    0xaa270000000cfff3,
    0x53cc0032fc34000a,
    0x478fe97a6b0a807f,
    0xb1d37ebee6ba24d7,
    0x8ec9733bbf78ab2f,
    0x09d645513d83de7e,
]);

impl PointG1 {
    /// The point at infinity (identity element): (0 : 1 : 0)
    pub const INFINITY: Self = PointG1 {
        x: Fp::ZERO,
        y: Fp::ONE,
        z: Fp::ZERO,
    };

    /// Create a new point from Jacobian coordinates.
    pub fn new(x: Fp, y: Fp, z: Fp) -> Self {
        PointG1 { x, y, z }
    }

    /// The fixed group generator.
    pub fn generator() -> Self {
        let x = Fp::from_raw([
            0x5cb38790fd530c16,
            0x7817fc679976fff5,
            0x154f95c7143ba1c1,
            0xf0ae6acdf3d0e747,
            0xedce6ecc21dbf440,
            0x120177419e0bfb75,
        ]);
        let y = Fp::from_raw([
            0xbaac93d50ce72271,
            0x8c22631a7918fd8e,
            0xdd595f13570725ce,
            0x51ac582950405194,
            0x0e1c8c3fad0059c0,
            0x0bbc3efc5008a26a,
        ]);
        PointG1 { x, y, z: Fp::ONE }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Check if this point is in affine form (Z = 1).
    #[inline]
    pub fn is_affine(&self) -> bool {
        self.z.is_one()
    }

    /// Check the Jacobian curve equation Y^2 = X^3 + b Z^6.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return true;
        }

        let z2 = self.z.square();
        let z6 = z2.square() * z2;
        self.y.square() == self.x.square() * self.x + CURVE_B * z6
    }

    /// The affine representative of this point: X/Z^2, Y/Z^3, Z = 1.
    /// Infinity and already-affine points are returned unchanged.
    pub fn affine(&self) -> Self {
        if self.is_infinity() || self.is_affine() {
            return *self;
        }

        let z_inv = self.z.inverse();
        let z_inv2 = z_inv.square();
        PointG1 {
            x: self.x * z_inv2,
            y: self.y * z_inv2 * z_inv,
            z: Fp::ONE,
        }
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        // dbl-2009-l
        if self.is_infinity() {
            return *self;
        }

        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x3 = f - d.double();
        let y3 = e * (d - x3) - c.double().double().double();
        let z3 = (self.y * self.z).double();

        PointG1 {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Negate a point. Infinity stays infinity since Z is untouched.
    pub fn negate(&self) -> Self {
        PointG1 {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Multiply by an arbitrary-precision scalar, reduced modulo the group
    /// order on entry.
    ///
    /// The ladder runs one unconditional addition, a branchless selection
    /// over all three coordinates, and one doubling per bit, so timing and
    /// memory access do not depend on the scalar bits.
    pub fn mul_scalar(&self, e: &BigUint) -> Self {
        self.mul_bits(&reduce(e))
    }

    /// Double-and-add ladder over the bits of `e` exactly as given.
    ///
    /// Callers that must observe multiples of the group order (the subgroup
    /// check) rely on `e` not being reduced here.
    fn mul_bits(&self, e: &BigUint) -> Self {
        let mut acc = PointG1::INFINITY;
        let mut base = *self;

        for i in 0..e.bits() {
            let sum = acc + base;
            acc = PointG1::conditional_select(&acc, &sum, Choice::from(e.bit(i) as u8));
            base = base.double();
        }

        acc
    }

    /// Map this point into the prime-order subgroup by multiplying with the
    /// effective cofactor.
    pub fn clear_cofactor(&self) -> Self {
        self.mul_bits(&cofactor_eff())
    }

    /// Check that [r]P = O, i.e. the point lies in the prime-order subgroup.
    pub fn is_in_subgroup(&self) -> bool {
        self.mul_bits(&group_order()).is_infinity()
    }
}

impl PartialEq for PointG1 {
    /// Projective equality: compares the affine points the two triples
    /// represent, without normalizing either side.
    fn eq(&self, other: &Self) -> bool {
        if self.is_infinity() {
            return other.is_infinity();
        }
        if other.is_infinity() {
            return false;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * z2z2;
        let u2 = other.x * z1z1;
        let s1 = self.y * z2z2 * other.z;
        let s2 = other.y * z1z1 * self.z;
        u1 == u2 && s1 == s2
    }
}

impl Eq for PointG1 {}

impl ConditionallySelectable for PointG1 {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        PointG1 {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            z: Fp::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl Add for PointG1 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        // add-2007-bl
        if self.is_infinity() {
            return other;
        }
        if other.is_infinity() {
            return self;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * z2z2;
        let u2 = other.x * z1z1;
        let s1 = self.y * z2z2 * other.z;
        let s2 = other.y * z1z1 * self.z;

        if u1 == u2 {
            if s1 == s2 {
                // same point
                return self.double();
            }
            // opposite points
            return Self::INFINITY;
        }

        let h = u2 - u1;
        let i = h.double().square();
        let j = h * i;
        let r = (s2 - s1).double();
        let v = u1 * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        let z3 = ((self.z + other.z).square() - z1z1 - z2z2) * h;

        PointG1 {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}

impl AddAssign for PointG1 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for PointG1 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for PointG1 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for PointG1 {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<&BigUint> for PointG1 {
    type Output = Self;

    fn mul(self, scalar: &BigUint) -> Self {
        self.mul_scalar(scalar)
    }
}

impl Mul<&BigUint> for &PointG1 {
    type Output = PointG1;

    fn mul(self, scalar: &BigUint) -> PointG1 {
        self.mul_scalar(scalar)
    }
}
