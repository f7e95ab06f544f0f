//! Base field of the curve.
//! p = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab
//!
//! This implementation uses Montgomery form for efficient modular arithmetic.
//! The field element is represented as [u64; 6] in little-endian order.

use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConditionallySelectable};

/// Base field element of BLS12-381.
/// Represented in Montgomery form with [u64; 6].
#[derive(Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fp {
    /// Montgomery form: value * R mod p, where R = 2^384
    limbs: [u64; 6],
}

// Field modulus, 381 bits.
const MODULUS: [u64; 6] = [
    0xb9feffffffffaaab,
    0x1eabfffeb153ffff,
    0x6730d2a0f6b0f624,
    0x64774b84f38512bf,
    0x4b1ba7b6434bacd7,
    0x1a0111ea397fe69a,
];

// R = 2^384 mod p (Montgomery parameter)
const R: [u64; 6] = [
    0x760900000002fffd,
    0xebf4000bc40c0002,
    0x5f48985753c758ba,
    0x77ce585370525745,
    0x5c071a97a256ec6d,
    0x15f65ec3fa80e493,
];

// R^2 = 2^768 mod p (for Montgomery conversion)
const R2: [u64; 6] = [
    0xf4df1f341c341746,
    0x0a76e6a609d104f1,
    0x8de5476c4c95b6d5,
    0x67eb88a9939d83c0,
    0x9a793e85b519952d,
    0x11988fe592cae3aa,
];

// -p^{-1} mod 2^64 (Montgomery parameter mu)
const MU: u64 = 0x89f3fffcfffcfffd;

// (p + 1) / 4; p = 3 mod 4, so a^((p+1)/4) is a square root of a when one exists.
const SQRT_EXP: [u64; 6] = [
    0xee7fbfffffffeaab,
    0x07aaffffac54ffff,
    0xd9cc34a83dac3d89,
    0xd91dd2e13ce144af,
    0x92c6e9ed90d2eb35,
    0x0680447a8e5ff9a6,
];

impl Fp {
    /// Zero element (in Montgomery form)
    pub const ZERO: Self = Fp {
        limbs: [0, 0, 0, 0, 0, 0],
    };

    /// One element (in Montgomery form: R mod p)
    pub const ONE: Self = Fp { limbs: R };

    /// Create a field element from raw Montgomery-form limbs.
    ///
    /// Used for hard-coded curve constants; the caller is responsible for
    /// the limbs being a canonical Montgomery residue.
    #[inline]
    pub(crate) const fn from_raw(limbs: [u64; 6]) -> Self {
        Fp { limbs }
    }

    /// Create a new field element from a u64 value.
    #[inline]
    pub fn from_u64(val: u64) -> Self {
        // Convert to Montgomery form: val * R^2 * R^{-1} = val * R
        let result = Fp {
            limbs: [val, 0, 0, 0, 0, 0],
        };
        montgomery_mul(result, Fp { limbs: R2 })
    }

    /// Convert from Montgomery form to canonical limbs.
    #[inline]
    fn canonical_limbs(&self) -> [u64; 6] {
        // Multiply by 1 to get out of Montgomery form
        let one = Fp {
            limbs: [1, 0, 0, 0, 0, 0],
        };
        montgomery_mul(*self, one).limbs
    }

    /// Decode a canonical 48-byte big-endian encoding.
    ///
    /// Returns `None` when the value is not below the field modulus.
    pub fn from_bytes(bytes: &[u8; 48]) -> Option<Self> {
        let mut limbs = [0u64; 6];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let at = 48 - 8 * (i + 1);
            *limb = u64::from_be_bytes(bytes[at..at + 8].try_into().expect("8-byte chunk"));
        }
        if !is_canonical(limbs) {
            return None;
        }
        Some(montgomery_mul(Fp { limbs }, Fp { limbs: R2 }))
    }

    /// Canonical 48-byte big-endian encoding.
    pub fn to_bytes(&self) -> [u8; 48] {
        let canonical = self.canonical_limbs();
        let mut out = [0u8; 48];
        for (i, limb) in canonical.iter().enumerate() {
            let at = 48 - 8 * (i + 1);
            out[at..at + 8].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// The field modulus as a `BigUint`.
    pub fn modulus() -> BigUint {
        let mut bytes = Vec::with_capacity(48);
        for &limb in &MODULUS {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        BigUint::from_bytes_le(&bytes)
    }

    /// Check if this field element is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0, 0, 0]
    }

    /// Check if this field element is one.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.limbs == R
    }

    /// Doubling, a + a.
    #[inline]
    pub fn double(&self) -> Self {
        *self + *self
    }

    /// Squaring, a * a.
    #[inline]
    pub fn square(&self) -> Self {
        montgomery_mul(*self, *self)
    }

    /// Compute the multiplicative inverse using Fermat's little theorem:
    /// a^{-1} = a^{p-2}. The inverse of zero is defined as zero.
    pub fn inverse(&self) -> Self {
        let exp = sub_mod(MODULUS, [2, 0, 0, 0, 0, 0]);
        self.pow_vartime(exp)
    }

    /// Square root for p = 3 mod 4: a^((p+1)/4), checked by squaring back.
    pub fn sqrt(&self) -> Option<Self> {
        let root = self.pow_vartime(SQRT_EXP);
        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }

    /// Variable-time exponentiation.
    fn pow_vartime(&self, exp: [u64; 6]) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }

        let mut result = Self::ONE;
        let mut base = *self;

        // Process bits from least significant to most significant
        for &limb in exp.iter() {
            let mut remaining = limb;
            for _ in 0..64 {
                if remaining & 1 == 1 {
                    result = result * base;
                }
                base = base * base;
                remaining >>= 1;
            }
        }

        result
    }

    /// Big-endian sign: true when the element is the lexicographically
    /// smaller of {a, p - a}. Drives the compressed-serialization sign flag.
    pub fn sign_be(&self) -> bool {
        let canonical = self.canonical_limbs();
        let negated = neg_mod(canonical);
        let (_, mut borrow) = negated[0].overflowing_sub(canonical[0]);
        for i in 1..6 {
            let (_, b) = borrowing_sub(negated[i], canonical[i], borrow);
            borrow = b;
        }
        // borrow means p - a < a, so a is the larger representative
        !borrow
    }

    /// Parity sign of the canonical value, the sgn0 predicate of RFC 9380.
    pub fn sgn0(&self) -> bool {
        self.canonical_limbs()[0] & 1 == 1
    }
}

#[inline]
const fn is_canonical(limbs: [u64; 6]) -> bool {
    let (_, borrow) = limbs[0].overflowing_sub(MODULUS[0]);
    let (_, borrow) = borrowing_sub(limbs[1], MODULUS[1], borrow);
    let (_, borrow) = borrowing_sub(limbs[2], MODULUS[2], borrow);
    let (_, borrow) = borrowing_sub(limbs[3], MODULUS[3], borrow);
    let (_, borrow) = borrowing_sub(limbs[4], MODULUS[4], borrow);
    let (_, borrow) = borrowing_sub(limbs[5], MODULUS[5], borrow);
    borrow
}

/// Helper: Add two 384-bit numbers mod p
#[inline]
const fn add_mod(a: [u64; 6], b: [u64; 6]) -> [u64; 6] {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);
    let (r4, carry) = carrying_add(a[4], b[4], carry);
    let (r5, carry) = carrying_add(a[5], b[5], carry);

    // Subtract modulus if we overflowed or result >= p
    let (s0, borrow) = r0.overflowing_sub(MODULUS[0]);
    let (s1, borrow) = borrowing_sub(r1, MODULUS[1], borrow);
    let (s2, borrow) = borrowing_sub(r2, MODULUS[2], borrow);
    let (s3, borrow) = borrowing_sub(r3, MODULUS[3], borrow);
    let (s4, borrow) = borrowing_sub(r4, MODULUS[4], borrow);
    let (s5, borrow) = borrowing_sub(r5, MODULUS[5], borrow);

    if carry || !borrow {
        [s0, s1, s2, s3, s4, s5]
    } else {
        [r0, r1, r2, r3, r4, r5]
    }
}

/// Helper: Subtract two 384-bit numbers mod p
#[inline]
const fn sub_mod(a: [u64; 6], b: [u64; 6]) -> [u64; 6] {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);
    let (r4, borrow) = borrowing_sub(a[4], b[4], borrow);
    let (r5, borrow) = borrowing_sub(a[5], b[5], borrow);

    // Add modulus back if we underflowed
    if borrow {
        let (r0, carry) = r0.overflowing_add(MODULUS[0]);
        let (r1, carry) = carrying_add(r1, MODULUS[1], carry);
        let (r2, carry) = carrying_add(r2, MODULUS[2], carry);
        let (r3, carry) = carrying_add(r3, MODULUS[3], carry);
        let (r4, carry) = carrying_add(r4, MODULUS[4], carry);
        let (r5, _) = carrying_add(r5, MODULUS[5], carry);
        [r0, r1, r2, r3, r4, r5]
    } else {
        [r0, r1, r2, r3, r4, r5]
    }
}

/// Helper: Negate a 384-bit number mod p
#[inline]
const fn neg_mod(a: [u64; 6]) -> [u64; 6] {
    if a[0] == 0 && a[1] == 0 && a[2] == 0 && a[3] == 0 && a[4] == 0 && a[5] == 0 {
        return [0, 0, 0, 0, 0, 0];
    }
    sub_mod(MODULUS, a)
}

/// Helper: Carrying addition
#[inline]
const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

/// Helper: Borrowing subtraction
#[inline]
const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Montgomery multiplication: (a * b * R^{-1}) mod p
#[inline]
fn montgomery_mul(a: Fp, b: Fp) -> Fp {
    // Compute a * b
    let mut t = [0u64; 12];

    for i in 0..6 {
        let mut carry = 0u128;
        for j in 0..6 {
            let product = (a.limbs[i] as u128) * (b.limbs[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }
        t[i + 6] = carry as u64;
    }

    // Montgomery reduction
    for i in 0..6 {
        let k = t[i].wrapping_mul(MU);
        let mut carry = 0u128;

        for j in 0..6 {
            let product = (k as u128) * (MODULUS[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }

        for j in 6..12 - i {
            let sum = (t[i + j] as u128) + carry;
            t[i + j] = sum as u64;
            carry = sum >> 64;
        }
    }

    // Extract high half and conditionally subtract p
    let result = [t[6], t[7], t[8], t[9], t[10], t[11]];

    if is_canonical(result) {
        Fp { limbs: result }
    } else {
        Fp {
            limbs: sub_mod(result, MODULUS),
        }
    }
}

impl Distribution<Fp> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp {
        loop {
            let mut limbs: [u64; 6] = rng.random();
            // p is 381 bits; mask the excess so most draws are canonical
            limbs[5] &= (1 << 61) - 1;

            if is_canonical(limbs) {
                return montgomery_mul(Fp { limbs }, Fp { limbs: R2 });
            }
        }
    }
}

// Arithmetic operations
impl Add for Fp {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Fp {
            limbs: add_mod(self.limbs, rhs.limbs),
        }
    }
}

impl AddAssign for Fp {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Fp {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Fp {
            limbs: sub_mod(self.limbs, rhs.limbs),
        }
    }
}

impl SubAssign for Fp {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Fp {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fp {
            limbs: neg_mod(self.limbs),
        }
    }
}

impl Mul for Fp {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        montgomery_mul(self, rhs)
    }
}

impl MulAssign for Fp {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for Fp {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl DivAssign for Fp {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl ConditionallySelectable for Fp {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u64; 6];
        for i in 0..6 {
            limbs[i] = u64::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }
        Fp { limbs }
    }
}

// Display and Debug
impl Display for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let canonical = self.canonical_limbs();
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}{:016x}{:016x}",
            canonical[5], canonical[4], canonical[3], canonical[2], canonical[1], canonical[0]
        )
    }
}

impl Debug for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fp({})", self)
    }
}

impl Hash for Fp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs.hash(state);
    }
}
