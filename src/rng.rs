//! Uniform random streams.

use crate::common::*;
use crate::geometry::*;
use hexf::hexf32;

/// 32-bit precision value for 1 - epsilon.
pub const FLOAT_ONE_MINUS_EPSILON: f32 = hexf32!("0x1.fffffep-1"); // 0.99999994

/// 1 - epsilon in the precision we've selected for `Float`.
pub const ONE_MINUS_EPSILON: Float = FLOAT_ONE_MINUS_EPSILON;

const PCG32_DEFAULT_STATE: u64 = 0x853c49e6748fea9b;
const PCG32_DEFAULT_STREAM: u64 = 0xda3e39cb94b95bdb;
const PCG32_MULT: u64 = 0x5851f42d4c957f2d;

/// A source of independent, identically distributed uniform values in [0, 1),
/// advanced by exactly one draw per call.
///
/// Implementations must be deterministic for a given starting state so that
/// consumers can reproduce sampling sequences exactly.
pub trait UniformSource {
    /// Returns the next uniformly distributed value in [0, 1).
    fn next_float(&mut self) -> Float;

    /// Bundles the next two draws into a point. The x-coordinate is drawn
    /// first.
    fn next_2d(&mut self) -> Point2f {
        let x = self.next_float();
        let y = self.next_float();
        Point2f::new(x, y)
    }

    /// Bundles the next three draws into a point. Coordinates are drawn in
    /// x, y, z order.
    fn next_3d(&mut self) -> Point3f {
        let x = self.next_float();
        let y = self.next_float();
        let z = self.next_float();
        Point3f::new(x, y, z)
    }
}

/// Caller-owned uniform stream state implemented with the PCG-32 generator.
///
/// The stream is deterministic per sequence index and advances its position
/// by one per 32-bit draw; cloning a stream yields an independent copy that
/// continues from the same position.
#[derive(Clone)]
pub struct RandomStream {
    state: u64,
    inc: u64,
}

impl Default for RandomStream {
    /// Return a new instance of `RandomStream` with default state and stream.
    fn default() -> Self {
        Self {
            state: PCG32_DEFAULT_STATE,
            inc: PCG32_DEFAULT_STREAM,
        }
    }
}

impl RandomStream {
    /// Create a new `RandomStream` by seeding it with the given starting
    /// sequence.
    ///
    /// * `sequence_index` - The starting sequence to seed with.
    pub fn new(sequence_index: u64) -> Self {
        let mut ret = Self { state: 0, inc: 0 };
        ret.set_sequence(sequence_index);
        ret
    }

    /// Initialize the stream to the start of the given sequence.
    ///
    /// * `init_seq` - The starting sequence to seed with.
    #[inline(always)]
    fn set_sequence(&mut self, init_seq: u64) {
        self.state = 0;
        self.inc = init_seq.wrapping_shl(1) | 1;
        let _ = self.uniform_u32();

        self.state = self.state.wrapping_add(PCG32_DEFAULT_STATE);
        let _ = self.uniform_u32();
    }

    /// Returns a uniformly distributed u32 value.
    #[inline(always)]
    pub fn uniform_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.state = old_state.wrapping_mul(PCG32_MULT).wrapping_add(self.inc);

        let xor_shifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;

        xor_shifted.rotate_right(rot)
    }

    /// Returns a uniformly distributed value over the half open interval
    /// [0.0, 1.0).
    pub fn uniform_float(&mut self) -> Float {
        min(
            self.uniform_u32() as Float * hexf32!("0x1.0p-32") as Float,
            FLOAT_ONE_MINUS_EPSILON,
        )
    }
}

impl UniformSource for RandomStream {
    /// Returns the next uniformly distributed value in [0, 1).
    fn next_float(&mut self) -> Float {
        self.uniform_float()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_minus_epsilon_is_largest_float_below_one() {
        assert!(ONE_MINUS_EPSILON < 1.0);
        assert_eq!(FLOAT_ONE_MINUS_EPSILON.to_bits(), 0x3f7f_ffff);
    }

    #[test]
    fn uniform_float_range() {
        let mut stream = RandomStream::new(123);
        for _ in 0..10_000 {
            let u = stream.next_float();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn same_sequence_reproduces() {
        let mut a = RandomStream::new(42);
        let mut b = RandomStream::new(42);
        for _ in 0..64 {
            assert_eq!(a.uniform_u32(), b.uniform_u32());
        }
    }

    #[test]
    fn distinct_sequences_diverge() {
        let mut a = RandomStream::new(1);
        let mut b = RandomStream::new(2);
        let differs = (0..64).any(|_| a.uniform_u32() != b.uniform_u32());
        assert!(differs);
    }

    #[test]
    fn clone_continues_from_same_position() {
        let mut a = RandomStream::new(7);
        for _ in 0..10 {
            let _ = a.uniform_u32();
        }

        let mut b = a.clone();
        for _ in 0..64 {
            assert_eq!(a.uniform_u32(), b.uniform_u32());
        }
    }

    #[test]
    fn default_differs_from_seeded() {
        let mut a = RandomStream::default();
        let mut b = RandomStream::new(0);
        let differs = (0..64).any(|_| a.uniform_u32() != b.uniform_u32());
        assert!(differs);
    }

    #[test]
    fn next_2d_draws_in_order() {
        let mut a = RandomStream::new(11);
        let mut b = RandomStream::new(11);

        let p = a.next_2d();
        assert_eq!(p.x, b.next_float());
        assert_eq!(p.y, b.next_float());
    }

    #[test]
    fn next_3d_draws_in_order() {
        let mut a = RandomStream::new(11);
        let mut b = RandomStream::new(11);

        let p = a.next_3d();
        assert_eq!(p.x, b.next_float());
        assert_eq!(p.y, b.next_float());
        assert_eq!(p.z, b.next_float());
    }
}
