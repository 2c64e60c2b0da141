use std::fmt::Display;
use std::ops::Neg;

use ordered_float::OrderedFloat;

use crate::error::{Error, Result};

/// An angle in the voxel world's heading convention: degrees normalized to
/// [-180, 180), with 0 facing south (+z) and values increasing clockwise
/// viewed from above.
///
/// Construction always normalizes, so two `Angle`s compare equal whenever
/// they denote the same facing direction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f64);

impl Angle {
    pub const NORTH: Angle = Angle(-180.0);
    pub const WEST: Angle = Angle(90.0);
    pub const SOUTH: Angle = Angle(0.0);
    pub const EAST: Angle = Angle(-90.0);
    pub const ZERO: Angle = Angle(0.0);

    /// Normalize `degrees` into [-180, 180).
    pub fn new(degrees: f64) -> Angle {
        let mut normalized = (degrees + 180.0).rem_euclid(360.0) - 180.0;
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if normalized >= 180.0 {
            normalized = -180.0;
        }
        Angle(normalized)
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    /// The signed angle to add to `self` to reach `other`, in [-180, 180).
    pub fn angular_dist(self, other: Angle) -> Angle {
        Angle::new(other.0 - self.0)
    }

    /// Indices of the `n` candidates closest to `self`, in non-decreasing
    /// order of absolute angular distance. Candidates at equal distance
    /// resolve to the lower index. `n` of -1 returns every candidate; other
    /// valid counts are 1 through 256, capped at the candidate count.
    pub fn nearest_of(self, candidates: &[Angle], n: i32) -> Result<Vec<usize>> {
        let count = match n {
            -1 => candidates.len(),
            1..=256 => (n as usize).min(candidates.len()),
            _ => return Err(Error::InvalidHeadingCount(n)),
        };
        let mut order: Vec<usize> = (0..candidates.len()).collect();
        order.sort_by_key(|&index| {
            let dist = self.angular_dist(candidates[index]).degrees().abs();
            (OrderedFloat(dist), index)
        });
        order.truncate(count);
        Ok(order)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::new(-self.0)
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} deg", self.0)
    }
}
