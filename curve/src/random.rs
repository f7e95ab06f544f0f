use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::basefield::Fp;
use crate::point::{PointG1, CURVE_B};

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl RandomField for Fp {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

impl PointG1 {
    /// Sample a uniformly random subgroup point: pick x until x^3 + b is a
    /// square, pick a root at random, then clear the cofactor.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let x = Fp::random(rng);
            let y2 = x.square() * x + CURVE_B;
            let Some(mut y) = y2.sqrt() else {
                continue;
            };
            if rng.random() {
                y = -y;
            }

            let p = PointG1::new(x, y, Fp::ONE).clear_cofactor();
            if !p.is_infinity() {
                return p.affine();
            }
        }
    }
}
