use std::fmt::Display;

use fxhash::FxHashSet;
use ordered_float::OrderedFloat;

use crate::error::{Error, Result};
use crate::pareto::{pareto_indices, F64};
use crate::vec2::{BlockVec, WorldVec};

/// A repeatable unit of relative block placements approximating travel
/// toward a target offset.
///
/// The points are a contiguous prefix of a raster starting at the origin;
/// repeating the prefix's moves end-to-end tiles a road in the direction of
/// its last point. Two patterns are equal when their point sequences are
/// equal; the target they were generated for is context, not identity.
#[derive(Debug, Clone)]
pub struct Pattern {
    points: Vec<BlockVec>,
    target: WorldVec,
}

impl Pattern {
    /// A pattern over the given raster prefix. At least two points are
    /// required; a single point has no direction.
    pub fn new(points: Vec<BlockVec>, target: WorldVec) -> Result<Pattern> {
        if points.len() < 2 {
            return Err(Error::InsufficientPoints(points.len()));
        }
        Ok(Pattern { points, target })
    }

    pub fn points(&self) -> &[BlockVec] {
        &self.points
    }

    pub fn target(&self) -> WorldVec {
        self.target
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Block moves per repetition (one fewer than the point count).
    pub fn moves(&self) -> usize {
        self.points.len() - 1
    }

    pub fn last_point(&self) -> BlockVec {
        self.points[self.points.len() - 1]
    }

    /// The drift, in blocks, between where repeating this pattern points and
    /// where the target lies: the target minus its projection onto the
    /// pattern's end offset. Zero exactly when the last point sits on the
    /// ray through the target.
    pub fn deviation(&self) -> Result<f64> {
        let along = self.target.project_onto(WorldVec::from(self.last_point()))?;
        Ok((self.target - along).length())
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Pattern) -> bool {
        self.points == other.points
    }
}

impl Eq for Pattern {}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, point) in self.points.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", point)?;
        }
        write!(f, "]")
    }
}

/// Keep the first pattern for each distinct point sequence.
pub(crate) fn retain_first_by_points(patterns: impl IntoIterator<Item = Pattern>) -> Vec<Pattern> {
    let mut seen: FxHashSet<Vec<BlockVec>> = FxHashSet::default();
    let mut kept = Vec::new();
    for pattern in patterns {
        if seen.insert(pattern.points().to_vec()) {
            kept.push(pattern);
        }
    }
    kept
}

/// Generates every candidate pattern for a target offset, together with the
/// Pareto-optimal subset trading pattern length against deviation.
///
/// The raster, the candidates, their deviations, and the front are all
/// computed once at construction; a built generator is immutable and freely
/// shareable.
#[derive(Debug, Clone)]
pub struct PatternGenerator {
    target: WorldVec,
    max_pattern_len: usize,
    raster: Vec<BlockVec>,
    patterns: Vec<Pattern>,
    deviations: Vec<f64>,
    pareto_front: Vec<Pattern>,
}

impl PatternGenerator {
    pub const DEFAULT_MAX_PATTERN_LEN: usize = 64;

    pub fn new(target: WorldVec) -> Result<PatternGenerator> {
        Self::with_max_len(target, Self::DEFAULT_MAX_PATTERN_LEN)
    }

    /// Build the generator for `target`, slicing candidate prefixes of up to
    /// `max_pattern_len` block moves from its raster.
    pub fn with_max_len(target: WorldVec, max_pattern_len: usize) -> Result<PatternGenerator> {
        let raster = target.rasterize();

        // One candidate per prefix length, the full raster included
        let longest = raster.len().min(max_pattern_len + 1);
        let mut patterns = Vec::new();
        for length in 2..=longest {
            patterns.push(Pattern::new(raster[..length].to_vec(), target)?);
        }

        let mut deviations = Vec::with_capacity(patterns.len());
        for pattern in &patterns {
            deviations.push(pattern.deviation()?);
        }

        let scores: Vec<Vec<F64>> = patterns
            .iter()
            .zip(&deviations)
            .map(|(pattern, &deviation)| {
                vec![
                    OrderedFloat(-deviation),
                    OrderedFloat(-(pattern.len() as f64)),
                ]
            })
            .collect();
        let front = pareto_indices(&scores)?;
        let pareto_front =
            retain_first_by_points(front.into_iter().map(|index| patterns[index].clone()));

        Ok(PatternGenerator {
            target,
            max_pattern_len,
            raster,
            patterns,
            deviations,
            pareto_front,
        })
    }

    pub fn target(&self) -> WorldVec {
        self.target
    }

    pub fn max_pattern_len(&self) -> usize {
        self.max_pattern_len
    }

    /// The full raster the candidates are sliced from.
    pub fn raster(&self) -> &[BlockVec] {
        &self.raster
    }

    /// Every candidate pattern, shortest first.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// The non-dominated candidates under (deviation, length), both
    /// minimized, with duplicate point sequences removed.
    pub fn pareto_front(&self) -> &[Pattern] {
        &self.pareto_front
    }

    /// All candidates ordered by point count.
    pub fn len_sorted(&self, ascending: bool) -> Vec<&Pattern> {
        let mut sorted: Vec<&Pattern> = self.patterns.iter().collect();
        sorted.sort_by_key(|pattern| pattern.len());
        if !ascending {
            sorted.reverse();
        }
        sorted
    }

    /// All candidates ordered by deviation.
    pub fn deviation_sorted(&self, ascending: bool) -> Vec<&Pattern> {
        let mut order: Vec<usize> = (0..self.patterns.len()).collect();
        order.sort_by_key(|&index| OrderedFloat(self.deviations[index]));
        if !ascending {
            order.reverse();
        }
        order.into_iter().map(|index| &self.patterns[index]).collect()
    }
}
