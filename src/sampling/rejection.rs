//! Rejection sampling.
//!
//! Candidates are drawn uniformly from the bounding square/cube `[-1, 1)^n`
//! and the first one satisfying the domain predicate is returned. Acceptance
//! probability is π/4 for the unit disk and π/6 for the unit ball, so the
//! expected cost per sample is low; the attempt ceiling exists only to
//! guarantee termination when the underlying stream is defective.

use crate::common::*;
use crate::geometry::*;
use crate::rng::UniformSource;
use std::error::Error;
use std::fmt;

/// Attempts allowed per sample when the caller does not choose a ceiling.
///
/// The worst acceptance probability among the unit regions is π/6, so the
/// probability of 64 consecutive rejections from a healthy stream is below
/// 1e-20.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 64;

/// Returned when every candidate within the attempt ceiling was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GeneratorExhausted {
    /// Number of attempts consumed before giving up.
    pub attempts: u32,
}

impl fmt::Display for GeneratorExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rejection sampling exhausted after {} attempts",
            self.attempts
        )
    }
}

impl Error for GeneratorExhausted {}

/// The result of a sampling operation.
pub type SamplingResult<T> = Result<T, GeneratorExhausted>;

/// Returns true if the point lies strictly inside the unit disk.
///
/// * `p` - The candidate point.
#[inline]
pub fn inside_unit_disk(p: &Point2f) -> bool {
    p.x * p.x + p.y * p.y < 1.0
}

/// Returns true if the point lies strictly inside the unit ball.
///
/// * `p` - The candidate point.
#[inline]
pub fn inside_unit_ball(p: &Point3f) -> bool {
    p.x * p.x + p.y * p.y + p.z * p.z < 1.0
}

/// Draws candidate points uniformly from the square [-1, 1)^2 until one
/// satisfies the predicate, redrawing both coordinates on each rejection.
///
/// Each attempt consumes exactly 2 draws from the stream. Fails with
/// `GeneratorExhausted` after `max_attempts` consecutive rejections.
///
/// * `src`          - The uniform stream to draw from.
/// * `max_attempts` - Attempt ceiling; must be reached before giving up.
/// * `accept`       - The domain predicate.
pub fn rejection_sample_2d<S, P>(
    src: &mut S,
    max_attempts: u32,
    accept: P,
) -> SamplingResult<Point2f>
where
    S: UniformSource,
    P: Fn(&Point2f) -> bool,
{
    for _ in 0..max_attempts {
        let u = src.next_2d();
        let p = Point2f::new(2.0 * u.x - 1.0, 2.0 * u.y - 1.0);
        if accept(&p) {
            return Ok(p);
        }
    }

    Err(GeneratorExhausted {
        attempts: max_attempts,
    })
}

/// Draws candidate points uniformly from the cube [-1, 1)^3 until one
/// satisfies the predicate, redrawing all three coordinates on each
/// rejection.
///
/// Each attempt consumes exactly 3 draws from the stream. Fails with
/// `GeneratorExhausted` after `max_attempts` consecutive rejections.
///
/// * `src`          - The uniform stream to draw from.
/// * `max_attempts` - Attempt ceiling; must be reached before giving up.
/// * `accept`       - The domain predicate.
pub fn rejection_sample_3d<S, P>(
    src: &mut S,
    max_attempts: u32,
    accept: P,
) -> SamplingResult<Point3f>
where
    S: UniformSource,
    P: Fn(&Point3f) -> bool,
{
    for _ in 0..max_attempts {
        let u = src.next_3d();
        let p = Point3f::new(2.0 * u.x - 1.0, 2.0 * u.y - 1.0, 2.0 * u.z - 1.0);
        if accept(&p) {
            return Ok(p);
        }
    }

    Err(GeneratorExhausted {
        attempts: max_attempts,
    })
}

/// Sample a point uniformly distributed over the interior of the unit disk.
///
/// * `src` - The uniform stream to draw from.
pub fn sample_unit_disk<S: UniformSource>(src: &mut S) -> SamplingResult<Point2f> {
    rejection_sample_2d(src, DEFAULT_MAX_ATTEMPTS, inside_unit_disk)
}

/// Sample a point uniformly distributed over the interior of the unit disk
/// with a caller-chosen attempt ceiling.
///
/// * `src`          - The uniform stream to draw from.
/// * `max_attempts` - Attempt ceiling.
pub fn sample_unit_disk_capped<S: UniformSource>(
    src: &mut S,
    max_attempts: u32,
) -> SamplingResult<Point2f> {
    rejection_sample_2d(src, max_attempts, inside_unit_disk)
}

/// Sample a point uniformly distributed over the interior of the unit ball.
///
/// * `src` - The uniform stream to draw from.
pub fn sample_unit_ball<S: UniformSource>(src: &mut S) -> SamplingResult<Point3f> {
    rejection_sample_3d(src, DEFAULT_MAX_ATTEMPTS, inside_unit_ball)
}

/// Sample a point uniformly distributed over the interior of the unit ball
/// with a caller-chosen attempt ceiling.
///
/// * `src`          - The uniform stream to draw from.
/// * `max_attempts` - Attempt ceiling.
pub fn sample_unit_ball_capped<S: UniformSource>(
    src: &mut S,
    max_attempts: u32,
) -> SamplingResult<Point3f> {
    rejection_sample_3d(src, max_attempts, inside_unit_ball)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
