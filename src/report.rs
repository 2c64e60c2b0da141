use std::fmt::Display;

use crate::angle::Angle;
use crate::error::{Error, Result};

/// Column alignment for [`aligned_rows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

/// Format the rows as index-aligned strings: each column is padded to the
/// width of its widest cell so subsequent lines line up when printed.
/// Rows of unequal length are rejected.
pub fn aligned_rows(rows: &[Vec<String>], align: Align, separator: &str) -> Result<Vec<String>> {
    let arity = match rows.first() {
        Some(first) => first.len(),
        None => return Ok(Vec::new()),
    };
    for row in rows {
        if row.len() != arity {
            return Err(Error::ArityMismatch {
                expected: arity,
                got: row.len(),
            });
        }
    }
    let mut widths = vec![0usize; arity];
    for row in rows {
        for (column, cell) in row.iter().enumerate() {
            widths[column] = widths[column].max(cell.len());
        }
    }
    Ok(rows
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(column, cell)| pad(cell, widths[column], align))
                .collect::<Vec<String>>()
                .join(separator)
        })
        .collect())
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{cell:<width$}"),
        Align::Right => format!("{cell:>width$}"),
        Align::Center => format!("{cell:^width$}"),
    }
}

/// Render an angle alongside its antipode, the way the in-game debug screen
/// is read from either end of a road.
pub fn format_angles(angle: Angle, decimals: usize) -> String {
    let degrees = angle.degrees();
    let antipode = if degrees == 0.0 {
        180.0
    } else if degrees < 0.0 {
        degrees + 180.0
    } else {
        degrees - 180.0
    };
    format!("{degrees:.decimals$} deg | (antipode: {antipode:.decimals$} deg)")
}

/// Drift metrics for holding an angular error over a travelled distance.
#[derive(Debug, Clone, Copy)]
pub struct TravelError {
    /// Angular error in degrees
    pub angle: f64,
    /// Blocks of drift per block travelled
    pub per_block: f64,
    /// Total drift over the full distance, in blocks
    pub total: f64,
}

impl TravelError {
    /// The chord drift of `angle_error` sustained over `distance` blocks:
    /// `|2 sin(error / 2)|` per block.
    pub fn new(angle_error: Angle, distance: f64) -> TravelError {
        let per_block = (2.0 * (angle_error.degrees() / 2.0).to_radians().sin()).abs();
        TravelError {
            angle: angle_error.degrees(),
            per_block,
            total: per_block * distance,
        }
    }
}

impl Display for TravelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ 'ANGLE': {:.3} deg, 'PER BLOCK': {:.3} blocks, 'TOTAL': {:.2} blocks }}",
            self.angle, self.per_block, self.total
        )
    }
}
