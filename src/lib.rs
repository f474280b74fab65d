//! Rejection sampling over bounded domains.
//!
//! Draws points uniformly distributed over the interior of the unit disk and
//! unit ball by drawing candidates from the enclosing square/cube and keeping
//! the first one that lands inside the region. The uniform scalar stream is a
//! caller-owned collaborator behind the [`rng::UniformSource`] trait;
//! [`rng::RandomStream`] is the canonical deterministic implementation.

// Re-export.
pub mod common;
pub mod geometry;
pub mod rng;
pub mod sampling;
