//! Seeded Mulberry32 generator
//!
//! Daily boards are identified by their seed alone, so this generator is frozen:
//! 32-bit wrapping arithmetic with fixed constants, producing the same stream on
//! every platform. Do not swap it for a library RNG.

/// Mulberry32 pseudo-random stream
///
/// # Determinism Guarantee
///
/// The same seed yields the same sequence forever. Seeds are reduced to their
/// low 32 bits (two's complement), so `-1` and `4294967295` are the same seed.
///
/// # Example
///
/// ```
/// use boggle_solver::dice::Mulberry32;
///
/// let mut rng = Mulberry32::new(1);
/// assert_eq!(rng.next_u32(), 2_693_262_067);
/// ```
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Golden-ratio derived increment applied before every draw
    const INCREMENT: u32 = 0x6D2B_79F5;

    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self { state: seed as u32 }
    }

    /// Next raw 32-bit value
    #[inline]
    pub const fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let s = self.state;

        let mut t = (s ^ (s >> 15)).wrapping_mul(1 | s);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform index in `[0, bound)`
    ///
    /// Equal to `floor(next_f64() * bound)`, computed in integers so no float
    /// rounding can creep in.
    #[inline]
    pub fn below(&mut self, bound: usize) -> usize {
        ((u64::from(self.next_u32()) * bound as u64) >> 32) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_stream_seed_one() {
        let mut rng = Mulberry32::new(1);
        let values: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
        assert_eq!(values, vec![2_693_262_067, 11_749_833, 2_265_367_787, 4_213_581_821]);
    }

    #[test]
    fn known_stream_seed_zero() {
        let mut rng = Mulberry32::new(0);
        let values: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
        assert_eq!(values, vec![1_144_304_738, 1_416_247, 958_946_056, 627_933_444]);
    }

    #[test]
    fn seeds_wrap_to_32_bits() {
        let mut a = Mulberry32::new(1);
        let mut b = Mulberry32::new(4_294_967_297);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }

        let mut neg = Mulberry32::new(-1);
        let mut max = Mulberry32::new(i64::from(u32::MAX));
        assert_eq!(neg.next_u32(), max.next_u32());
    }

    #[test]
    fn below_matches_float_scaling() {
        let mut ints = Mulberry32::new(12345);
        let mut floats = Mulberry32::new(12345);
        for bound in (1..=16).cycle().take(200) {
            let expected = (floats.next_f64() * bound as f64).floor() as usize;
            assert_eq!(ints.below(bound), expected);
        }
    }

    #[test]
    fn next_f64_in_unit_interval() {
        let mut rng = Mulberry32::new(99);
        for _ in 0..1000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }
}
