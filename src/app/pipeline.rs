//! Shared fit-pipeline logic.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load -> Gram matrix -> inversion -> projection -> coefficients -> residuals
//!
//! The CLI front-end can then focus on presentation (printing, plotting,
//! exports). Nothing downstream of loading runs unless loading succeeded.

use nalgebra::DVector;

use crate::domain::{Dataset, FitConfig, FitQuality, FitResidual};
use crate::error::AppError;
use crate::fit::solve_normal_equations;
use crate::io::ingest::load_dataset;
use crate::report::{compute_quality, compute_residuals};

/// All computed outputs of a single `ols fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub dataset: Dataset,
    pub theta: DVector<f64>,
    pub residuals: Vec<FitResidual>,
    pub quality: FitQuality,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    let dataset = load_dataset(config)?;
    let theta = solve_normal_equations(&dataset.x, &dataset.y)?;
    let residuals = compute_residuals(&dataset, &theta)?;
    let quality = compute_quality(&residuals);

    Ok(RunOutput {
        dataset,
        theta,
        residuals,
        quality,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{generate_sample, write_sample};
    use crate::domain::GenConfig;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("ols-fit-pipe-{}-{name}", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn fit_config(data: PathBuf, target: PathBuf, intercept: bool) -> FitConfig {
        FitConfig {
            data_path: data,
            target_path: target,
            output_path: PathBuf::from("unused.txt"),
            rows: None,
            cols: 1,
            intercept,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            export_json: None,
        }
    }

    #[test]
    fn perfect_linear_fit_with_intercept() {
        // y = 2x exactly; expect theta ~ [2.0, 0.0].
        let data = temp_file("lin-x.txt", "1.0\n2.0\n3.0\n");
        let target = temp_file("lin-y.txt", "2.0\n4.0\n6.0\n");
        let config = fit_config(data, target, true);

        let run = run_fit(&config).unwrap();
        assert_eq!(run.theta.len(), 2);
        assert!((run.theta[0] - 2.0).abs() < 1e-4);
        assert!(run.theta[1].abs() < 1e-4);
        assert!(run.quality.rmse < 1e-6);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let data = temp_file("idem-x.txt", "1.0\n2.0\n3.0\n4.0\n");
        let target = temp_file("idem-y.txt", "1.2\n1.9\n3.1\n4.2\n");
        let config = fit_config(data, target, true);

        let a = run_fit(&config).unwrap();
        let b = run_fit(&config).unwrap();
        assert_eq!(a.theta, b.theta);
        assert_eq!(a.quality.sse, b.quality.sse);
    }

    #[test]
    fn generate_then_fit_recovers_the_line() {
        // Noiseless generation: the fit must recover slope/offset exactly
        // (up to float tolerance).
        let data = std::env::temp_dir().join(format!("ols-fit-gen-{}-X.txt", std::process::id()));
        let target = std::env::temp_dir().join(format!("ols-fit-gen-{}-y.txt", std::process::id()));
        let gen_config = GenConfig {
            count: 20,
            seed: 42,
            slope: 2.5,
            offset: 10.0,
            noise_sigma: 0.0,
            data_path: data.clone(),
            target_path: target.clone(),
        };
        let sample = generate_sample(&gen_config).unwrap();
        write_sample(&gen_config, &sample).unwrap();

        let run = run_fit(&fit_config(data, target, true)).unwrap();
        assert!((run.theta[0] - 2.5).abs() < 1e-6, "slope: {}", run.theta[0]);
        assert!((run.theta[1] - 10.0).abs() < 1e-5, "offset: {}", run.theta[1]);
    }

    #[test]
    fn load_failure_stops_the_pipeline() {
        let config = fit_config(
            PathBuf::from("/no/such/X.txt"),
            PathBuf::from("/no/such/y.txt"),
            false,
        );
        let err = run_fit(&config).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
