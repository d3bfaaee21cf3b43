//! Validate command implementation
//!
//! Checks a note list and render configuration without rendering.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use std::time::Instant;
use zorn_spec::{validate_config, validate_notes, ValidationResult};

use crate::input::RunInput;

/// Validate notes and configuration together.
pub fn validate(input: &RunInput) -> ValidationResult {
    let mut result = validate_notes(&input.notes);
    result.merge(validate_config(&input.config));
    result
}

/// Run the validate command
///
/// # Arguments
/// * `input` - Loaded notes and configuration
/// * `notes_path` - Path shown in the report header
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(input: RunInput, notes_path: &str) -> Result<ExitCode> {
    let start = Instant::now();
    println!("{} {}", "Validating:".cyan().bold(), notes_path);

    let result = validate(&input);
    let duration_ms = start.elapsed().as_millis();

    print_validation_results(&result);

    if result.is_ok() {
        println!(
            "\n{} {} note(s) are valid ({}ms)",
            "SUCCESS".green().bold(),
            input.notes.len(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Found {} error(s) ({}ms)",
            "FAILED".red().bold(),
            result.errors.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zorn_spec::{ErrorCode, Note, RenderConfig, WarningCode};

    #[test]
    fn test_validate_collects_notes_and_config() {
        let input = RunInput {
            notes: vec![Note::new(60, 1.0, 0.5, 1.4), Note::new(62, 0.0, -0.5, 0.5)],
            config: RenderConfig {
                fps: 0,
                ..RenderConfig::default()
            },
        };
        let result = validate(&input);
        assert!(!result.is_ok());

        let errors: Vec<ErrorCode> = result.errors.iter().map(|e| e.code).collect();
        assert_eq!(errors, vec![ErrorCode::InvalidDuration, ErrorCode::InvalidFps]);

        let warnings: Vec<WarningCode> = result.warnings.iter().map(|w| w.code).collect();
        assert!(warnings.contains(&WarningCode::VelocityOutOfRange));
        assert!(warnings.contains(&WarningCode::UnsortedNotes));
    }

    #[test]
    fn test_run_exit_codes() {
        let good = RunInput {
            notes: vec![Note::new(60, 0.0, 0.5, 0.5)],
            config: RenderConfig::default(),
        };
        assert_eq!(run(good, "notes.json").unwrap(), ExitCode::SUCCESS);

        let bad = RunInput {
            notes: Vec::new(),
            config: RenderConfig::default(),
        };
        assert_eq!(run(bad, "notes.json").unwrap(), ExitCode::from(1));
    }
}
