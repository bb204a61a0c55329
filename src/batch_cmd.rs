//! Batch command: bias-correct every matching series in a directory.

use anyhow::{bail, Context, Result};
use tracing::{info, info_span, warn};

use deltaq_io::read_series;

use crate::cli::BatchArgs;
use crate::config::DeltaqConfig;
use crate::correct_cmd::{correct_one, derive_output_path};

/// Run the batch correction pipeline.
///
/// Each matching file is corrected independently; a failure is logged
/// and the batch continues with the remaining files.
pub fn run(args: BatchArgs) -> Result<()> {
    let _cmd = info_span!("batch").entered();

    let config = DeltaqConfig::load(args.config.as_deref())?;
    let engine = config.to_correct_config();
    let output_format = args.output_format.unwrap_or(args.input_format);

    info!(path = %args.observed.display(), "reading observed series");
    let observed = read_series(&args.observed, args.input_format)
        .with_context(|| format!("failed to read observed series: {}", args.observed.display()))?;

    info!(path = %args.baseline.display(), "reading baseline series");
    let baseline = read_series(&args.baseline, args.input_format)
        .with_context(|| format!("failed to read baseline series: {}", args.baseline.display()))?;

    let entries = std::fs::read_dir(&args.dir)
        .with_context(|| format!("failed to read directory: {}", args.dir.display()))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| {
            format!("failed to read directory entry in {}", args.dir.display())
        })?;
        let path = entry.path();
        let name = entry.file_name();
        if path.is_file() && name.to_string_lossy().ends_with(&args.suffix) {
            candidates.push(path);
        }
    }
    candidates.sort();

    if candidates.is_empty() {
        bail!(
            "no files matching suffix '{}' in {}",
            args.suffix,
            args.dir.display()
        );
    }
    info!(files = candidates.len(), suffix = %args.suffix, "batch starting");

    let mut failed = 0usize;
    for path in &candidates {
        let output_path = derive_output_path(path, &config.output.suffix, output_format);
        let outcome = correct_one(
            &observed,
            &baseline,
            path,
            &output_path,
            args.input_format,
            output_format,
            &engine,
        );
        if let Err(e) = outcome {
            warn!(path = %path.display(), error = %format!("{e:#}"), "file skipped");
            failed += 1;
        }
    }

    info!(
        corrected = candidates.len() - failed,
        failed,
        "batch complete"
    );
    if failed == candidates.len() {
        bail!("all {} files in the batch failed", failed);
    }
    Ok(())
}
