//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//!
//! - parses CLI arguments
//! - runs the fit pipeline (or synthetic data generation)
//! - prints the run summary/plot
//! - writes the coefficient file and optional JSON export

use clap::Parser;

use crate::cli::{Command, FitArgs, GenArgs};
use crate::domain::{FitConfig, GenConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `ols` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `ols` (and `ols --intercept ...`) to behave like
    // `ols fit ...`. Clap requires a subcommand name, so we do a small,
    // explicit rewrite of the argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Gen(args) => handle_gen(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(&run.dataset, &run.theta, &run.quality, &config)
    );

    if config.plot {
        if run.dataset.stats.n_features == 1 {
            let xs = run.dataset.first_feature();
            let points: Vec<(f64, f64)> = xs
                .iter()
                .zip(run.dataset.y.iter())
                .map(|(&x, &y)| (x, y))
                .collect();

            let slope = run.theta[0];
            let offset = if run.dataset.intercept {
                run.theta[run.theta.len() - 1]
            } else {
                0.0
            };
            let (x_min, x_max) = feature_range(&xs);
            let line = crate::plot::sample_line(slope, offset, x_min, x_max, config.plot_width);
            let plot =
                crate::plot::render_ascii_plot(&points, Some(&line), config.plot_width, config.plot_height);
            println!("{plot}");
        } else {
            eprintln!("Plot skipped: only single-feature fits can be plotted.");
        }
    }

    crate::io::export::write_coefficients(&config.output_path, &run.theta)?;

    if let Some(path) = &config.export_json {
        crate::io::export::write_fit_json(path, &run.theta, config.intercept, &run.quality)?;
    }

    Ok(())
}

fn handle_gen(args: GenArgs) -> Result<(), AppError> {
    let config = gen_config_from_args(&args);
    let sample = crate::data::generate_sample(&config)?;
    crate::data::write_sample(&config, &sample)?;

    println!(
        "Wrote {} samples to '{}' and '{}'.",
        config.count,
        config.data_path.display(),
        config.target_path.display()
    );
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        data_path: args.data.clone(),
        target_path: args.target.clone(),
        output_path: args.output.clone(),
        rows: args.rows,
        cols: args.cols,
        intercept: args.intercept,
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
        export_json: args.export_json.clone(),
    }
}

pub fn gen_config_from_args(args: &GenArgs) -> GenConfig {
    GenConfig {
        count: args.count,
        seed: args.seed,
        slope: args.slope,
        offset: args.offset,
        noise_sigma: args.noise_sigma,
        data_path: args.data.clone(),
        target_path: args.target.clone(),
    }
}

fn feature_range(xs: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &x in xs {
        if x.is_finite() {
            min = min.min(x);
            max = max.max(x);
        }
    }
    if min.is_finite() && max.is_finite() && max > min {
        (min, max)
    } else {
        (0.0, 1.0)
    }
}

/// Rewrite argv so `ols` defaults to `ols fit`.
///
/// Rules:
/// - `ols`                     -> `ols fit`
/// - `ols --intercept ...`     -> `ols fit --intercept ...`
/// - `ols --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("fit".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "gen");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "fit flags".
    if arg1.starts_with('-') {
        argv.insert(1, "fit".to_string());
        return argv;
    }

    // Otherwise, leave as-is (clap will produce the usage error).
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_fit() {
        assert_eq!(rewrite_args(argv(&["ols"])), argv(&["ols", "fit"]));
    }

    #[test]
    fn leading_flag_defaults_to_fit() {
        assert_eq!(
            rewrite_args(argv(&["ols", "--intercept"])),
            argv(&["ols", "fit", "--intercept"])
        );
    }

    #[test]
    fn explicit_subcommands_pass_through() {
        assert_eq!(rewrite_args(argv(&["ols", "gen"])), argv(&["ols", "gen"]));
        assert_eq!(
            rewrite_args(argv(&["ols", "fit", "--plot"])),
            argv(&["ols", "fit", "--plot"])
        );
    }

    #[test]
    fn help_and_version_pass_through() {
        assert_eq!(rewrite_args(argv(&["ols", "--help"])), argv(&["ols", "--help"]));
        assert_eq!(rewrite_args(argv(&["ols", "-V"])), argv(&["ols", "-V"]));
    }
}
