pub mod angle;
pub mod error;
pub mod heading;
pub mod params;
pub mod pareto;
pub mod pattern;
pub mod planner;
pub mod report;
pub mod vec2;

use clap::Parser;
use ordered_float::OrderedFloat;

use crate::heading::BoatHeading;
use crate::params::DEFAULT_PARAMS;
use crate::pattern::Pattern;
use crate::report::{aligned_rows, format_angles, Align, TravelError};
use crate::vec2::BlockVec;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Boat road build patterns for diagonal travel.")]
pub struct Args {
    /// Origin x coordinate
    #[arg(allow_hyphen_values = true)]
    pub origin_x: i64,
    /// Origin z coordinate
    #[arg(allow_hyphen_values = true)]
    pub origin_z: i64,
    /// Destination x coordinate
    #[arg(allow_hyphen_values = true)]
    pub dest_x: i64,
    /// Destination z coordinate
    #[arg(allow_hyphen_values = true)]
    pub dest_z: i64,

    /// Index of the pattern to pick from the deviation-sorted results
    #[arg(short, long, default_value_t = 0)]
    pub choice: usize,

    /// How many of the nearest boat headings to try
    #[arg(long)]
    pub headings: Option<usize>,

    /// Longest candidate pattern, in block moves per repetition
    #[arg(long)]
    pub max_pattern_len: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    log::set_max_level(log::LevelFilter::Trace);
    env_logger::builder()
        .filter(None, log::LevelFilter::Info)
        .init();

    let mut params = *DEFAULT_PARAMS;
    if let Some(headings) = args.headings {
        params.n_headings = headings;
    }
    if let Some(max_pattern_len) = args.max_pattern_len {
        params.max_pattern_len = max_pattern_len;
    }
    log::debug!("{}", params);

    let origin = BlockVec::new(args.origin_x, args.origin_z);
    let destination = BlockVec::new(args.dest_x, args.dest_z);
    let offset = destination - origin;
    anyhow::ensure!(
        offset != BlockVec::ORIGIN,
        "origin and destination are the same block"
    );

    let distance = offset.length();
    let facing = offset.angle_facing()?;
    log::info!("Destination offset: {}, distance: {:.1} blocks", offset, distance);
    log::info!("True angle: {}", format_angles(facing, 5));

    let achievable = planner::achievable_offsets(offset, params.n_headings as i32)?;
    for (index, achievable_offset) in achievable.iter().enumerate() {
        log::debug!("Heading {} achievable offset: {}", index, achievable_offset);
    }
    let pooled = planner::candidate_patterns(&achievable, params.max_pattern_len)?;
    log::info!(
        "{} candidate patterns across {} headings",
        pooled.len(),
        achievable.len()
    );
    let front = planner::pareto_patterns(offset, pooled)?;
    anyhow::ensure!(
        !front.is_empty(),
        "no suitable pattern within {} blocks",
        params.max_pattern_len
    );

    // Deviation-sorted results, best tracking first
    let mut results: Vec<(Pattern, f64)> = Vec::with_capacity(front.len());
    for pattern in front {
        let deviation = pattern.deviation()?;
        results.push((pattern, deviation));
    }
    results.sort_by_key(|(_, deviation)| OrderedFloat(*deviation));

    println!("\nOffset: {}, distance: {:.2} blocks", offset, distance);
    println!("Patterns:");
    let mut rows = vec![vec![
        "#".to_string(),
        "destination".to_string(),
        "dest_error".to_string(),
        "blocks".to_string(),
        "travel_error".to_string(),
    ]];
    for (index, (pattern, deviation)) in results.iter().enumerate() {
        rows.push(vec![
            index.to_string(),
            (origin + pattern.target().round()).to_string(),
            format!("{:.prec$} blocks", (offset - pattern.target()).length(), prec = params.sig_figs),
            pattern.moves().to_string(),
            format!("{:.prec$} blocks", deviation, prec = params.sig_figs),
        ]);
    }
    for line in aligned_rows(&rows, Align::Left, "  ")? {
        println!("    {}", line);
    }

    anyhow::ensure!(
        args.choice < results.len(),
        "choice {} out of range: {} patterns found",
        args.choice,
        results.len()
    );
    let (chosen, deviation) = &results[args.choice];

    let pattern_facing = chosen.target().angle_facing()?;
    let heading = BoatHeading::nearest(pattern_facing);
    let angle_error = heading.angle().angular_dist(facing);

    println!("\nChosen pattern ({} moves): {}", chosen.moves(), chosen);
    println!("    Iterations are offset by {} blocks", chosen.last_point());
    println!(
        "    Travel error (from boat direction): {:.prec$} blocks",
        deviation,
        prec = params.sig_figs
    );
    println!("    Boat angle: {}", format_angles(heading.angle(), 5));
    println!("    Errors: {}", TravelError::new(angle_error, distance));
    match pattern_facing.placement_range() {
        Some((low, high)) => println!(
            "    Boat placement angle range: ({:.5}, {:.5}) deg",
            low.degrees(),
            high.degrees()
        ),
        None => println!("    Boat placement angle range: none (due-north wraparound)"),
    }
    println!(
        "    F3 angle while in boat: {:.1}",
        heading.angle().degrees()
    );

    Ok(())
}
