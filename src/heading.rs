use lazy_static::lazy_static;

use crate::angle::Angle;
use crate::error::Result;

/// Number of distinct directions a boat can face.
pub const HEADING_COUNT: usize = 256;

/// Angular spacing between adjacent boat headings, in degrees.
pub const HEADING_STEP: f64 = 360.0 / HEADING_COUNT as f64;

lazy_static! {
    /// All 256 boat headings' angles, indexed by heading index.
    static ref HEADING_ANGLES: [Angle; HEADING_COUNT] = {
        let mut angles = [Angle::ZERO; HEADING_COUNT];
        for (index, slot) in angles.iter_mut().enumerate() {
            *slot = Angle::new(index as f64 * HEADING_STEP);
        }
        angles
    };
}

/// One of the 256 directions a boat can face.
///
/// A heading is a lookup result, not a free angular value: no arithmetic is
/// defined on it. Convert through [`BoatHeading::angle`] before doing any
/// angle math, so the discrete set can never be mutated by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoatHeading {
    index: u8,
}

impl BoatHeading {
    pub fn from_index(index: u8) -> BoatHeading {
        BoatHeading { index }
    }

    pub fn index(self) -> u8 {
        self.index
    }

    pub fn angle(self) -> Angle {
        HEADING_ANGLES[self.index as usize]
    }

    /// The heading whose angle is closest to `angle`. A tie (possible only
    /// exactly halfway between two headings) resolves to the lower index.
    pub fn nearest(angle: Angle) -> BoatHeading {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (index, &candidate) in HEADING_ANGLES.iter().enumerate() {
            let dist = angle.angular_dist(candidate).degrees().abs();
            if dist < best_dist {
                best = index;
                best_dist = dist;
            }
        }
        BoatHeading { index: best as u8 }
    }

    /// The `n` headings closest to `angle`, ordered by ascending absolute
    /// angular distance (ties to the lower index). `n` of -1 returns all 256.
    pub fn nearest_n(angle: Angle, n: i32) -> Result<Vec<BoatHeading>> {
        let order = angle.nearest_of(&HEADING_ANGLES[..], n)?;
        Ok(order
            .into_iter()
            .map(|index| BoatHeading { index: index as u8 })
            .collect())
    }
}

impl Angle {
    /// The angular range a player may face while placing a boat so the boat
    /// snaps to the heading nearest this angle, in ascending order.
    ///
    /// Returns None when the nearest heading is due north (-180), where the
    /// wraparound makes the window ambiguous.
    pub fn placement_range(self) -> Option<(Angle, Angle)> {
        let snap = BoatHeading::nearest(self).angle();
        if snap == Angle::NORTH {
            return None;
        }
        if snap.degrees() < 0.0 {
            Some((Angle::new(snap.degrees() - HEADING_STEP), self))
        } else if snap.degrees() > 0.0 {
            Some((self, Angle::new(snap.degrees() + HEADING_STEP)))
        } else {
            Some((Angle::new(-HEADING_STEP), Angle::new(HEADING_STEP)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_table_evenly_spaced() {
        for index in 0..HEADING_COUNT {
            let here = BoatHeading::from_index(index as u8).angle();
            let next = BoatHeading::from_index(((index + 1) % HEADING_COUNT) as u8).angle();
            assert_relative_eq!(
                here.angular_dist(next).degrees(),
                HEADING_STEP,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_table_distinct() {
        for index in 0..HEADING_COUNT {
            for other in (index + 1)..HEADING_COUNT {
                assert_ne!(
                    BoatHeading::from_index(index as u8).angle(),
                    BoatHeading::from_index(other as u8).angle()
                );
            }
        }
    }

    #[test]
    fn test_index_angle_roundtrip() {
        for index in 0..HEADING_COUNT {
            let heading = BoatHeading::from_index(index as u8);
            assert_eq!(BoatHeading::nearest(heading.angle()), heading);
        }
    }

    #[test]
    fn test_known_angles() {
        assert_relative_eq!(BoatHeading::from_index(0).angle().degrees(), 0.0);
        assert_relative_eq!(BoatHeading::from_index(1).angle().degrees(), 1.40625);
        assert_relative_eq!(BoatHeading::from_index(64).angle().degrees(), 90.0);
        assert_relative_eq!(BoatHeading::from_index(128).angle().degrees(), -180.0);
        assert_relative_eq!(BoatHeading::from_index(192).angle().degrees(), -90.0);
        assert_relative_eq!(BoatHeading::from_index(255).angle().degrees(), -1.40625);
    }

    #[test]
    fn test_nearest_within_half_step() {
        // 0.5 is inside heading 0's half-step window, 1.0 is not
        assert_eq!(BoatHeading::nearest(Angle::new(0.5)).index(), 0);
        assert_eq!(BoatHeading::nearest(Angle::new(1.0)).index(), 1);
        assert_eq!(BoatHeading::nearest(Angle::new(-1.0)).index(), 255);
    }

    #[test]
    fn test_nearest_half_step_tie_takes_lower_index() {
        // Exactly between headings 0 and 1 (the step is exactly representable)
        assert_eq!(BoatHeading::nearest(Angle::new(HEADING_STEP / 2.0)).index(), 0);
    }

    #[test]
    fn test_nearest_n_ordering() {
        let facing = Angle::new(1.0);
        let nearest = BoatHeading::nearest_n(facing, 4).unwrap();
        assert_eq!(nearest.len(), 4);
        assert_eq!(nearest[0], BoatHeading::nearest(facing));
        let dists: Vec<f64> = nearest
            .iter()
            .map(|h| facing.angular_dist(h.angle()).degrees().abs())
            .collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_nearest_n_all() {
        let all = BoatHeading::nearest_n(Angle::new(37.0), -1).unwrap();
        assert_eq!(all.len(), HEADING_COUNT);
    }

    #[test]
    fn test_nearest_n_invalid_count() {
        assert!(BoatHeading::nearest_n(Angle::ZERO, 0).is_err());
        assert!(BoatHeading::nearest_n(Angle::ZERO, 300).is_err());
    }

    #[test]
    fn test_placement_range_south() {
        let (low, high) = Angle::new(0.5).placement_range().unwrap();
        assert_relative_eq!(low.degrees(), -HEADING_STEP);
        assert_relative_eq!(high.degrees(), HEADING_STEP);
    }

    #[test]
    fn test_placement_range_positive() {
        // Nearest heading to 45.3 is 32 * 1.40625 = 45.0
        let facing = Angle::new(45.3);
        let (low, high) = facing.placement_range().unwrap();
        assert_eq!(low, facing);
        assert_relative_eq!(high.degrees(), 45.0 + HEADING_STEP);
    }

    #[test]
    fn test_placement_range_negative() {
        let facing = Angle::new(-45.3);
        let (low, high) = facing.placement_range().unwrap();
        assert_relative_eq!(low.degrees(), -45.0 - HEADING_STEP);
        assert_eq!(high, facing);
    }

    #[test]
    fn test_placement_range_none_at_north() {
        assert_eq!(Angle::new(-179.9).placement_range(), None);
        assert_eq!(Angle::NORTH.placement_range(), None);
    }
}
