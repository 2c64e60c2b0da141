use ordered_float::OrderedFloat;

use crate::error::Result;
use crate::heading::BoatHeading;
use crate::pareto::{pareto_indices, F64};
use crate::pattern::{retain_first_by_points, Pattern, PatternGenerator};
use crate::vec2::{BlockVec, WorldVec};

/// The achievable target offsets for a true offset: its projection onto the
/// unit vector of each of the `n` boat headings nearest its direction.
pub fn achievable_offsets(offset: BlockVec, n: i32) -> Result<Vec<WorldVec>> {
    let facing = offset.angle_facing()?;
    let mut offsets = Vec::new();
    for heading in BoatHeading::nearest_n(facing, n)? {
        let direction = WorldVec::from_polar(1.0, heading.angle());
        offsets.push(WorldVec::from(offset).project_onto(direction)?);
    }
    Ok(offsets)
}

/// Every candidate pattern across all achievable offsets, pooled.
pub fn candidate_patterns(
    offsets: &[WorldVec],
    max_pattern_len: usize,
) -> Result<Vec<Pattern>> {
    let mut pooled = Vec::new();
    for &offset in offsets {
        let generator = PatternGenerator::with_max_len(offset, max_pattern_len)?;
        pooled.extend(generator.patterns().iter().cloned());
    }
    Ok(pooled)
}

/// The Pareto-optimal pooled candidates under three minimized attributes:
/// distance from the true destination, travel deviation, and pattern length.
/// Patterns whose point sequence duplicates an earlier survivor are dropped.
pub fn pareto_patterns(offset: BlockVec, patterns: Vec<Pattern>) -> Result<Vec<Pattern>> {
    let mut scores: Vec<Vec<F64>> = Vec::with_capacity(patterns.len());
    for pattern in &patterns {
        scores.push(vec![
            OrderedFloat(-(offset - pattern.target()).length()),
            OrderedFloat(-pattern.deviation()?),
            OrderedFloat(-(pattern.len() as f64)),
        ]);
    }
    let front = pareto_indices(&scores)?;
    Ok(retain_first_by_points(
        front.into_iter().map(|index| patterns[index].clone()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_achievable_offset_on_cardinal() {
        // Due east lies exactly on a boat heading, so the projection is exact
        let offsets = achievable_offsets(BlockVec::new(100, 0), 1).unwrap();
        assert_eq!(offsets.len(), 1);
        assert_relative_eq!(offsets[0].x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(offsets[0].z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_achievable_offsets_near_true_direction() {
        let offset = BlockVec::new(2000, -592);
        let offsets = achievable_offsets(offset, 4).unwrap();
        assert_eq!(offsets.len(), 4);
        let distance = offset.length();
        for achievable in offsets {
            // A projection never exceeds the true distance, and a heading
            // within a couple of steps stays close to it
            assert!(achievable.length() <= distance + 1e-9);
            assert!((offset - achievable).length() < distance * 0.1);
        }
    }

    #[test]
    fn test_achievable_offsets_zero_offset() {
        assert!(achievable_offsets(BlockVec::ORIGIN, 4).is_err());
    }

    #[test]
    fn test_candidate_patterns_pooled() {
        let offsets = achievable_offsets(BlockVec::new(30, 7), 2).unwrap();
        let pooled = candidate_patterns(&offsets, 16).unwrap();
        assert!(!pooled.is_empty());
        assert!(pooled.iter().all(|p| p.moves() <= 16));
        // Both headings contributed a shortest candidate
        assert_eq!(pooled.iter().filter(|p| p.len() == 2).count(), 2);
    }

    #[test]
    fn test_pareto_patterns_no_duplicates() {
        let offset = BlockVec::new(30, 7);
        let offsets = achievable_offsets(offset, 4).unwrap();
        let pooled = candidate_patterns(&offsets, 32).unwrap();
        let front = pareto_patterns(offset, pooled).unwrap();
        assert!(!front.is_empty());
        for (index, pattern) in front.iter().enumerate() {
            assert!(!front[..index].iter().any(|earlier| earlier == pattern));
        }
    }

    #[test]
    fn test_pareto_patterns_prefers_short_exact_on_cardinal() {
        // Due east sits exactly on a boat heading: the two-point pattern
        // already tracks it with no drift and dominates every longer
        // candidate from the same heading
        let offset = BlockVec::new(16, 0);
        let offsets = achievable_offsets(offset, 2).unwrap();
        let pooled = candidate_patterns(&offsets, 32).unwrap();
        let front = pareto_patterns(offset, pooled).unwrap();
        assert!(front
            .iter()
            .any(|pattern| pattern.len() == 2 && pattern.deviation().unwrap() < 1e-9));
        assert!(!front
            .iter()
            .any(|pattern| pattern.len() > 2 && pattern.deviation().unwrap() < 1e-9));
    }
}
