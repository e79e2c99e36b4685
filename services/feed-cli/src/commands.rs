use clap::Args;
use listing_feeds::batch::{normalize_batch, parse_records, write_report, ReportRow};
use listing_feeds::config::FeedConfig;
use listing_feeds::error::AppError;
use listing_feeds::feeds::{adapter_for, select_adapter, Adapter, Vendor};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct NormalizeArgs {
    /// Feed vendor id (property-finder, propspace). Defaults to FEED_DEFAULT_VENDOR.
    #[arg(long)]
    pub(crate) vendor: Option<String>,
    /// JSON file holding one raw record or an array of them
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Where to write accepted records (stdout when omitted)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Optional CSV report with one line per input record
    #[arg(long)]
    pub(crate) report: Option<PathBuf>,
    /// Skip records that needed default substitutions
    #[arg(long)]
    pub(crate) strict: bool,
}

fn resolve_adapter(
    requested: Option<&str>,
    fallback: Option<Vendor>,
) -> Result<&'static Adapter, AppError> {
    match (requested, fallback) {
        (Some(id), _) => Ok(select_adapter(id)?),
        (None, Some(vendor)) => Ok(adapter_for(vendor)),
        (None, None) => Err(AppError::NoVendor),
    }
}

pub(crate) fn run_normalize(args: NormalizeArgs, config: &FeedConfig) -> Result<(), AppError> {
    let NormalizeArgs {
        vendor,
        input,
        output,
        report,
        strict,
    } = args;

    let adapter = resolve_adapter(vendor.as_deref(), config.feeds.default_vendor)?;
    let strict = strict || config.feeds.strict;

    let records = parse_records(&fs::read_to_string(&input)?)?;
    info!(
        vendor = %adapter.vendor,
        input = %input.display(),
        records = records.len(),
        strict,
        "normalizing feed export"
    );
    let outcome = normalize_batch(adapter, &records, strict);

    match output {
        Some(path) => write_json(BufWriter::new(File::create(&path)?), &outcome.accepted)?,
        None => write_json(io::stdout().lock(), &outcome.accepted)?,
    }

    if let Some(path) = report {
        write_report_file(&path, &outcome.rows)?;
    }

    Ok(())
}

fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn write_report_file(
    path: &Path,
    rows: &[ReportRow],
) -> Result<(), AppError> {
    write_report(BufWriter::new(File::create(path)?), rows)?;
    info!(report = %path.display(), rows = rows.len(), "report written");
    Ok(())
}

pub(crate) fn run_vendors() {
    for vendor in Vendor::ordered() {
        let adapter = adapter_for(vendor);
        println!("{}", vendor.id());
        for binding in adapter.keys {
            println!("  {:<32} {}", binding.field, binding.raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_vendor_wins_over_configured_default() {
        let adapter =
            resolve_adapter(Some("pf"), Some(Vendor::PropSpace)).expect("known vendor");
        assert_eq!(adapter.vendor, Vendor::PropertyFinder);

        let adapter = resolve_adapter(None, Some(Vendor::PropSpace)).expect("default vendor");
        assert_eq!(adapter.vendor, Vendor::PropSpace);
    }

    #[test]
    fn missing_or_unknown_vendor_is_an_error() {
        assert!(matches!(resolve_adapter(None, None), Err(AppError::NoVendor)));
        assert!(matches!(
            resolve_adapter(Some("bayut"), None),
            Err(AppError::Adapter(_))
        ));
    }
}
