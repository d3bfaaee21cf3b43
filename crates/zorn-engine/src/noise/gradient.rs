//! Lattice gradient noise over a seeded permutation table.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{lerp, quintic, Noise2D};
use crate::rng::derive_noise_seed;

/// 2D gradient noise with quintic fade.
#[derive(Clone, PartialEq, Eq)]
pub struct GradientNoise {
    /// Permutation table (256 values, doubled for wrapping).
    perm: [u8; 512],
}

impl std::fmt::Debug for GradientNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradientNoise")
            .field("perm", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

impl GradientNoise {
    /// Create a noise table shuffled from `seed`.
    pub fn new(seed: u32) -> Self {
        // Expand 32-bit seed to 64-bit for PCG32 state
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        let mut rng = Pcg32::seed_from_u64(seed64);

        let mut source: Vec<u8> = (0..=255).collect();

        // Fisher-Yates shuffle
        for i in (1..256).rev() {
            let j = rng.gen_range(0..=i);
            source.swap(i, j);
        }

        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&source);
        perm[256..].copy_from_slice(&source);

        Self { perm }
    }

    /// Create the noise table for a render run.
    pub fn for_run(run_seed: u32) -> Self {
        Self::new(derive_noise_seed(run_seed))
    }

    #[inline]
    fn p(&self, index: usize) -> usize {
        self.perm[index] as usize
    }

    /// Dot product with one of 16 hashed gradient directions.
    #[inline]
    fn grad(hash: usize, x: f64, y: f64) -> f64 {
        let h = hash & 15;
        let u = if h < 8 { x } else { y };
        let v = if h < 4 { y } else { x };
        let u = if h & 1 == 0 { u } else { -u };
        let v = if h & 2 == 0 { v } else { -v };
        u + v
    }
}

impl Noise2D for GradientNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let x_floor = x.floor();
        let y_floor = y.floor();

        // Lattice cell, wrapped into the table
        let xi = (x_floor as i64 & 255) as usize;
        let yi = (y_floor as i64 & 255) as usize;

        let fx = x - x_floor;
        let fy = y - y_floor;

        let u = quintic(fx);
        let v = quintic(fy);

        let a = self.p(xi) + yi;
        let aa = self.p(a);
        let ab = self.p(a + 1);
        let b = self.p(xi + 1) + yi;
        let ba = self.p(b);
        let bb = self.p(b + 1);

        let n00 = Self::grad(self.p(aa), fx, fy);
        let n10 = Self::grad(self.p(ba), fx - 1.0, fy);
        let n01 = Self::grad(self.p(ab), fx, fy - 1.0);
        let n11 = Self::grad(self.p(bb), fx - 1.0, fy - 1.0);

        lerp(lerp(n00, n10, u), lerp(n01, n11, u), v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_deterministic() {
        let noise1 = GradientNoise::new(42);
        let noise2 = GradientNoise::new(42);

        for i in 0..100 {
            let x = i as f64 * 0.1;
            let y = i as f64 * 0.13;
            assert_eq!(noise1.sample(x, y), noise2.sample(x, y));
        }
    }

    #[test]
    fn test_permutation_is_a_permutation() {
        let noise = GradientNoise::new(99);
        let mut seen = [false; 256];
        for &v in &noise.perm[..256] {
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(noise.perm[..256], noise.perm[256..]);
    }

    #[test]
    fn test_zero_at_lattice_points() {
        let noise = GradientNoise::for_run(42);
        for i in -5..5 {
            assert_eq!(noise.sample(i as f64, (i * 3) as f64), 0.0);
        }
    }

    #[test]
    fn test_gradient_range() {
        let noise = GradientNoise::new(42);
        for i in 0..300 {
            for j in 0..300 {
                let v = noise.sample(i as f64 * 0.037 - 5.0, j as f64 * 0.041 - 5.0);
                assert!((-2.0..=2.0).contains(&v));
            }
        }
    }
}
