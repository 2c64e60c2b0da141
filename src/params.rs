use std::fmt::Display;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref DEFAULT_PARAMS: Params = Params {
        // Longest pattern worth building by hand
        max_pattern_len: 64,

        // Nearby headings to try besides the closest one
        n_headings: 4,

        // Significant digits in reported block distances
        sig_figs: 4,
    };
}

/// Pattern search parameters.
#[derive(Copy, Clone, Debug)]
pub struct Params {
    /// Longest candidate pattern, in block moves per repetition
    pub max_pattern_len: usize,

    /// How many of the nearest boat headings to generate candidates for
    pub n_headings: usize,

    /// Significant digits when reporting distances
    pub sig_figs: usize,
}

impl Display for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "===== Pattern Search Parameters =====")?;
        writeln!(
            f,
            "\t - max_pattern_len (longest pattern in moves): {}",
            self.max_pattern_len
        )?;
        writeln!(
            f,
            "\t - n_headings (nearest headings to try): {}",
            self.n_headings
        )?;
        writeln!(f, "\t - sig_figs (reported digits): {}", self.sig_figs)
    }
}
