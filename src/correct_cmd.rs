//! Correct command: bias-correct one simulated series.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use deltaq_correct::{bias_correct, CorrectConfig};
use deltaq_io::{read_series, write_series, TextFormat};
use deltaq_series::{water_year_volumes, TimeSeries};

use crate::cli::CorrectArgs;
use crate::config::DeltaqConfig;

/// Inserts the output marker before the format extension:
/// `flow.month` -> `flow.HD.txt`.
pub fn derive_output_path(future: &Path, marker: &str, format: TextFormat) -> PathBuf {
    let stem = future
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "corrected".to_string());
    future.with_file_name(format!("{stem}.{marker}.{}", format.extension()))
}

/// Corrects one future series against an already loaded observed and
/// baseline pair and writes the result.
pub fn correct_one(
    observed: &TimeSeries,
    baseline: &TimeSeries,
    future_path: &Path,
    output_path: &Path,
    input_format: TextFormat,
    output_format: TextFormat,
    config: &CorrectConfig,
) -> Result<()> {
    info!(path = %future_path.display(), "reading future series");
    let future = read_series(future_path, input_format)
        .with_context(|| format!("failed to read future series: {}", future_path.display()))?;

    let result = bias_correct(observed, baseline, &future, config)
        .with_context(|| format!("bias correction failed for {}", future_path.display()))?;

    for (wy, factor) in result.annual_factors() {
        debug!(water_year = wy, factor, "annual rescale factor");
    }
    let volumes = water_year_volumes(result.corrected())
        .context("failed to compute corrected water-year volumes")?;
    for (wy, volume) in &volumes {
        debug!(water_year = wy, volume, "corrected water-year volume");
    }

    let water_years = result.annual_factors().len();
    let corrected = result.into_corrected();
    write_series(output_path, &corrected, output_format)
        .with_context(|| format!("failed to write output: {}", output_path.display()))?;
    info!(
        path = %output_path.display(),
        points = corrected.len(),
        water_years,
        "corrected series written"
    );

    Ok(())
}

/// Run the single-series correction pipeline.
pub fn run(args: CorrectArgs) -> Result<()> {
    let _cmd = info_span!("correct").entered();

    let config = DeltaqConfig::load(args.config.as_deref())?;
    let engine = config.to_correct_config();
    let output_format = args.output_format.unwrap_or(args.input_format);

    info!(path = %args.observed.display(), "reading observed series");
    let observed = read_series(&args.observed, args.input_format)
        .with_context(|| format!("failed to read observed series: {}", args.observed.display()))?;

    info!(path = %args.baseline.display(), "reading baseline series");
    let baseline = read_series(&args.baseline, args.input_format)
        .with_context(|| format!("failed to read baseline series: {}", args.baseline.display()))?;

    let output_path = args.output.clone().unwrap_or_else(|| {
        derive_output_path(&args.future, &config.output.suffix, output_format)
    });

    correct_one(
        &observed,
        &baseline,
        &args.future,
        &output_path,
        args.input_format,
        output_format,
        &engine,
    )
}
