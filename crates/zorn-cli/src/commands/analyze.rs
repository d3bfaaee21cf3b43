//! Analyze command implementation
//!
//! Prints the musical analysis that drives technique selection.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;
use zorn_engine::{total_frames, Contour, Layout, MusicalAnalysis};

use super::write_output;
use crate::input::RunInput;

/// JSON report for the analyze command.
#[derive(Debug, Serialize)]
pub struct AnalyzeOutput {
    pub note_count: usize,
    pub total_duration: f64,
    pub total_frames: usize,
    pub analysis: MusicalAnalysis,
}

/// Build the analysis report for a run.
pub fn analyze(input: &RunInput) -> Result<AnalyzeOutput> {
    let analysis = MusicalAnalysis::new(&input.notes).context("Cannot analyze note list")?;
    let layout = Layout::new(&input.notes, input.config.width, input.config.height);

    Ok(AnalyzeOutput {
        note_count: input.notes.len(),
        total_duration: layout.total_duration,
        total_frames: total_frames(&input.notes, input.config.fps),
        analysis,
    })
}

/// Run the analyze command
///
/// # Arguments
/// * `input` - Loaded notes and configuration
/// * `output` - Output file path (default: stdout)
/// * `json_output` - Output machine-readable JSON instead of a summary
///
/// # Returns
/// Exit code: 0 on success
pub fn run(input: RunInput, output: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let report = analyze(&input)?;

    if json_output {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize analysis")?;
        write_output(&json, output)?;
        return Ok(ExitCode::SUCCESS);
    }

    let dynamics = &report.analysis.dynamics;
    println!("{}", "Analysis".cyan().bold());
    println!(
        "  {} {} ({:.2}s, {} frames)",
        "Notes:".dimmed(),
        report.note_count,
        report.total_duration,
        report.total_frames
    );
    println!(
        "  {} avg {:.2}, min {:.2}, max {:.2}, range {:.2}",
        "Velocity:".dimmed(),
        dynamics.avg,
        dynamics.min,
        dynamics.max,
        dynamics.range
    );
    println!("  {} note {}", "Climax:".dimmed(), dynamics.climax_idx);
    println!(
        "  {} crescendo {}, decrescendo {}",
        "Trends:".dimmed(),
        yes_no(dynamics.has_crescendo),
        yes_no(dynamics.has_decrescendo)
    );

    let count = |label: Contour| report.analysis.contour.iter().filter(|c| **c == label).count();
    println!(
        "  {} {} ascending, {} descending, {} static",
        "Contour:".dimmed(),
        count(Contour::Ascending),
        count(Contour::Descending),
        count(Contour::Static)
    );

    let fast = report
        .analysis
        .features
        .iter()
        .filter(|f| f.rhythm.is_fast())
        .count();
    let slow = report
        .analysis
        .features
        .iter()
        .filter(|f| f.rhythm.is_slow())
        .count();
    println!("  {} {} fast, {} slow", "Rhythm:".dimmed(), fast, slow);

    Ok(ExitCode::SUCCESS)
}

fn yes_no(flag: bool) -> colored::ColoredString {
    if flag {
        "yes".green()
    } else {
        "no".dimmed()
    }
}
