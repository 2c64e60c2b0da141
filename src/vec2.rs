use std::fmt::Display;
use std::ops::{Add, Mul, Neg, Sub};

use crate::angle::Angle;
use crate::error::{Error, Result};

/// An integer offset in the voxel world's ground plane (block units).
///
/// The lattice domain of the plane: adding, subtracting, or scaling block
/// vectors stays on the lattice. Mixing with a [`WorldVec`] promotes to the
/// continuous domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockVec {
    pub x: i64,
    pub z: i64,
}

/// A continuous offset in the same plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldVec {
    pub x: f64,
    pub z: f64,
}

impl BlockVec {
    pub const ORIGIN: BlockVec = BlockVec { x: 0, z: 0 };

    pub fn new(x: i64, z: i64) -> BlockVec {
        BlockVec { x, z }
    }

    /// Euclidean norm, in blocks.
    pub fn length(self) -> f64 {
        WorldVec::from(self).length()
    }

    /// The heading-convention angle this offset points toward.
    pub fn angle_facing(self) -> Result<Angle> {
        WorldVec::from(self).angle_facing()
    }

    /// Componentwise floor division (rounds toward negative infinity).
    pub fn div_floor(self, divisor: i64) -> Result<BlockVec> {
        if divisor == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(BlockVec::new(
            self.x.div_euclid(divisor),
            self.z.div_euclid(divisor),
        ))
    }

    /// Lattice points of the segment from the origin to this offset. See
    /// [`WorldVec::rasterize`].
    pub fn rasterize(self) -> Vec<BlockVec> {
        WorldVec::from(self).rasterize()
    }
}

impl WorldVec {
    pub fn new(x: f64, z: f64) -> WorldVec {
        WorldVec { x, z }
    }

    /// The offset reached by travelling `distance` along `angle`. Angle 0
    /// runs south along (0, +1); angles increase clockwise from above.
    pub fn from_polar(distance: f64, angle: Angle) -> WorldVec {
        let theta = angle.degrees().to_radians();
        WorldVec::new(-distance * theta.sin(), distance * theta.cos())
    }

    /// Euclidean norm, in blocks.
    pub fn length(self) -> f64 {
        self.x.hypot(self.z)
    }

    pub fn dot(self, other: WorldVec) -> f64 {
        self.x * other.x + self.z * other.z
    }

    /// The heading-convention angle this offset points toward, i.e.
    /// `-degrees(atan2(x, z))`: 0 along (0, +1), clockwise from above.
    pub fn angle_facing(self) -> Result<Angle> {
        if self.x == 0.0 && self.z == 0.0 {
            return Err(Error::ZeroVector);
        }
        Ok(Angle::new(-self.x.atan2(self.z).to_degrees()))
    }

    /// This offset rotated by `angle` (standard 2D rotation).
    pub fn rotated_by(self, angle: Angle) -> WorldVec {
        let (sin, cos) = angle.degrees().to_radians().sin_cos();
        WorldVec::new(self.x * cos - self.z * sin, self.x * sin + self.z * cos)
    }

    /// The component of this offset lying along `other`'s direction.
    pub fn project_onto(self, other: WorldVec) -> Result<WorldVec> {
        let denom = other.dot(other);
        if denom == 0.0 {
            return Err(Error::ZeroVector);
        }
        Ok(other * (self.dot(other) / denom))
    }

    /// Scalar division.
    pub fn divided_by(self, divisor: f64) -> Result<WorldVec> {
        if divisor == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(WorldVec::new(self.x / divisor, self.z / divisor))
    }

    /// Componentwise round to the nearest block. Halves round away from zero.
    pub fn round(self) -> BlockVec {
        BlockVec::new(self.x.round() as i64, self.z.round() as i64)
    }

    /// Componentwise round to `decimals` fractional digits. Halves round
    /// away from zero.
    pub fn rounded_to(self, decimals: u32) -> WorldVec {
        let scale = 10f64.powi(decimals as i32);
        WorldVec::new((self.x * scale).round() / scale, (self.z * scale).round() / scale)
    }

    /// The ordered lattice points a straight segment from the origin to this
    /// offset passes through, both endpoints included.
    ///
    /// The ideal line is sampled once per unit of its dominant axis and each
    /// sample rounds to the nearest lattice point, so every step advances by
    /// one unit in x, in z, or in both, and the walk is monotone toward the
    /// target. The final point is the nearest lattice point to the endpoint
    /// (the endpoint itself when it is integral). A sample landing exactly on
    /// a cell boundary rounds away from zero, so a line through a lattice
    /// corner takes the diagonal step early.
    pub fn rasterize(self) -> Vec<BlockVec> {
        let steps = self.x.abs().max(self.z.abs()).ceil() as i64;
        if steps == 0 {
            return vec![BlockVec::ORIGIN];
        }
        let mut points = Vec::with_capacity(steps as usize + 1);
        for step in 0..=steps {
            let point = (self * (step as f64 / steps as f64)).round();
            if points.last() != Some(&point) {
                points.push(point);
            }
        }
        points
    }
}

impl From<BlockVec> for WorldVec {
    fn from(v: BlockVec) -> WorldVec {
        WorldVec::new(v.x as f64, v.z as f64)
    }
}

impl Add for BlockVec {
    type Output = BlockVec;

    fn add(self, other: BlockVec) -> BlockVec {
        BlockVec::new(self.x + other.x, self.z + other.z)
    }
}

impl Sub for BlockVec {
    type Output = BlockVec;

    fn sub(self, other: BlockVec) -> BlockVec {
        BlockVec::new(self.x - other.x, self.z - other.z)
    }
}

impl Neg for BlockVec {
    type Output = BlockVec;

    fn neg(self) -> BlockVec {
        BlockVec::new(-self.x, -self.z)
    }
}

impl Mul<i64> for BlockVec {
    type Output = BlockVec;

    fn mul(self, scalar: i64) -> BlockVec {
        BlockVec::new(self.x * scalar, self.z * scalar)
    }
}

impl Add for WorldVec {
    type Output = WorldVec;

    fn add(self, other: WorldVec) -> WorldVec {
        WorldVec::new(self.x + other.x, self.z + other.z)
    }
}

impl Sub for WorldVec {
    type Output = WorldVec;

    fn sub(self, other: WorldVec) -> WorldVec {
        WorldVec::new(self.x - other.x, self.z - other.z)
    }
}

impl Neg for WorldVec {
    type Output = WorldVec;

    fn neg(self) -> WorldVec {
        WorldVec::new(-self.x, -self.z)
    }
}

impl Mul<f64> for WorldVec {
    type Output = WorldVec;

    fn mul(self, scalar: f64) -> WorldVec {
        WorldVec::new(self.x * scalar, self.z * scalar)
    }
}

// Mixing the lattice and continuous domains promotes to the continuous one.

impl Add<WorldVec> for BlockVec {
    type Output = WorldVec;

    fn add(self, other: WorldVec) -> WorldVec {
        WorldVec::from(self) + other
    }
}

impl Add<BlockVec> for WorldVec {
    type Output = WorldVec;

    fn add(self, other: BlockVec) -> WorldVec {
        self + WorldVec::from(other)
    }
}

impl Sub<WorldVec> for BlockVec {
    type Output = WorldVec;

    fn sub(self, other: WorldVec) -> WorldVec {
        WorldVec::from(self) - other
    }
}

impl Sub<BlockVec> for WorldVec {
    type Output = WorldVec;

    fn sub(self, other: BlockVec) -> WorldVec {
        self - WorldVec::from(other)
    }
}

impl Display for BlockVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl Display for WorldVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
