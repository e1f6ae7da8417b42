//! Formatted terminal output for a fit run.

use nalgebra::DVector;

use crate::domain::{Dataset, FitConfig, FitQuality};

/// Format the full run summary (dataset stats + coefficients + diagnostics).
pub fn format_run_summary(
    dataset: &Dataset,
    theta: &DVector<f64>,
    quality: &FitQuality,
    config: &FitConfig,
) -> String {
    let mut out = String::new();

    out.push_str("=== ols - normal-equation OLS fit ===\n");
    out.push_str(&format!(
        "Data: '{}' + '{}'\n",
        config.data_path.display(),
        config.target_path.display()
    ));
    out.push_str(&format!(
        "Samples: n={} | features={} | parameters={} | y=[{:.4}, {:.4}]\n",
        dataset.stats.n_samples,
        dataset.stats.n_features,
        dataset.stats.n_params,
        dataset.stats.y_min,
        dataset.stats.y_max
    ));

    out.push_str("\nCoefficients:\n");
    for (i, v) in theta.iter().enumerate() {
        if dataset.intercept && i == theta.len() - 1 {
            out.push_str(&format!("  intercept = {v:.6}\n"));
        } else {
            out.push_str(&format!("  theta[{i}]  = {v:.6}\n"));
        }
    }

    out.push_str(&format!(
        "\nFit: sse={:.6} | rmse={:.6} | n={}\n",
        quality.sse, quality.rmse, quality.n
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DatasetStats;
    use nalgebra::DMatrix;
    use std::path::PathBuf;

    #[test]
    fn summary_labels_the_intercept() {
        let x = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 2.0, 1.0]);
        let y = DVector::from_row_slice(&[2.0, 4.0]);
        let dataset = Dataset {
            stats: DatasetStats {
                n_samples: 2,
                n_features: 1,
                n_params: 2,
                y_min: 2.0,
                y_max: 4.0,
            },
            x,
            y,
            intercept: true,
        };
        let theta = DVector::from_row_slice(&[2.0, 0.0]);
        let quality = FitQuality {
            sse: 0.0,
            rmse: 0.0,
            n: 2,
        };
        let config = FitConfig {
            data_path: PathBuf::from("X.txt"),
            target_path: PathBuf::from("y.txt"),
            output_path: PathBuf::from("output.txt"),
            rows: None,
            cols: 1,
            intercept: true,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            export_json: None,
        };

        let summary = format_run_summary(&dataset, &theta, &quality, &config);
        assert!(summary.contains("intercept ="));
        assert!(summary.contains("theta[0]"));
        assert!(summary.contains("n=2"));
    }
}
