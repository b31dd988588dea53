//! Random point sets (uniform integer grid + replay tokens).
//!
//! Purpose
//! - Feed the wrapper the same kind of input the interactive demo generated:
//!   `count` integer points drawn uniformly from `[lo, hi]²`.
//! - Determinism via a replay token `(seed, index)` mixed into one RNG, so a
//!   drawn set can be reproduced from two integers.
//!
//! Output always satisfies `validate`: counts are clamped to
//! `[MIN_POINTS, MAX_POINTS]` and bounds to `[COORD_MIN, COORD_MAX]`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::{Point, PointSet, COORD_MAX, COORD_MIN, MAX_POINTS, MIN_POINTS};

/// Point count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n.clamp(MIN_POINTS, MAX_POINTS),
            PointCount::Uniform { min, max } => {
                let lo = min.clamp(MIN_POINTS, MAX_POINTS);
                let hi = max.clamp(lo, MAX_POINTS);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomCfg {
    pub count: PointCount,
    /// Inclusive lower coordinate bound, clamped to `COORD_MIN`.
    pub lo: i32,
    /// Inclusive upper coordinate bound, clamped to `COORD_MAX`.
    pub hi: i32,
}

impl Default for RandomCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(10),
            lo: COORD_MIN,
            hi: COORD_MAX,
        }
    }
}

impl RandomCfg {
    /// Count drawn uniformly from `2..=20`, full coordinate range.
    pub fn uniform_count() -> Self {
        Self {
            count: PointCount::Uniform {
                min: 2,
                max: MAX_POINTS,
            },
            ..Self::default()
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw in the same series.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw a random point set. Duplicates are possible, as with any uniform draw.
pub fn random_points(cfg: RandomCfg, tok: ReplayToken) -> PointSet {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let lo = cfg.lo.clamp(COORD_MIN, COORD_MAX);
    let hi = cfg.hi.clamp(lo, COORD_MAX);
    let points = (0..n)
        .map(|_| Point::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi)))
        .collect();
    PointSet::new_unchecked(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::validate;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = random_points(RandomCfg::default(), tok);
        let b = random_points(RandomCfg::default(), tok);
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
        assert_ne!(a, random_points(RandomCfg::default(), tok.next()));
    }

    #[test]
    fn draws_always_validate() {
        let mut tok = ReplayToken { seed: 3, index: 0 };
        for _ in 0..200 {
            let set = random_points(RandomCfg::uniform_count(), tok);
            assert!((2..=MAX_POINTS).contains(&set.len()));
            assert!(validate(&set).is_ok());
            tok = tok.next();
        }
    }

    #[test]
    fn out_of_range_config_is_clamped() {
        let cfg = RandomCfg {
            count: PointCount::Fixed(500),
            lo: -1000,
            hi: 1000,
        };
        let set = random_points(cfg, ReplayToken::default());
        assert_eq!(set.len(), MAX_POINTS);
        assert!(set.iter().all(Point::in_bounds));

        let empty = RandomCfg {
            count: PointCount::Fixed(0),
            ..RandomCfg::default()
        };
        assert_eq!(random_points(empty, ReplayToken::default()).len(), MIN_POINTS);
    }

    #[test]
    fn degenerate_range_yields_identical_points() {
        let cfg = RandomCfg {
            count: PointCount::Fixed(5),
            lo: 7,
            hi: 7,
        };
        let set = random_points(cfg, ReplayToken { seed: 1, index: 1 });
        assert!(set.iter().all(|p| *p == Point::new(7, 7)));
    }
}
