use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use kdb_cli::decode::decode_notation;
use kdb_ingest::{
    CsvRecordSource, ErrorPolicy, JsonLinesSink, NormalizeOptions, NormalizeSummary,
    normalize_catalog,
};
use tracing::{debug, info_span};

use crate::cli::{DecodeArgs, ErrorPolicyArg, NormalizeArgs};

pub fn run_decode(args: &DecodeArgs) -> Result<()> {
    let value = decode_notation(args.kind, &args.text)
        .with_context(|| format!("decode {:?} notation", args.kind))?;
    let rendered = serde_json::to_string(&value).context("render decoded value")?;
    println!("{rendered}");
    Ok(())
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<NormalizeSummary> {
    let span = info_span!("catalog", input = %args.input.display());
    let _guard = span.enter();

    let options = resolve_options(args)?;
    debug!(?options, "resolved normalization options");

    let mut source = CsvRecordSource::from_path(&args.input).context("open catalog export")?;
    let writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut sink = JsonLinesSink::new(writer);

    normalize_catalog(&mut source, &mut sink, &options).context("normalize catalog")
}

/// Config file first, then explicit flags on top.
fn resolve_options(args: &NormalizeArgs) -> Result<NormalizeOptions> {
    let mut options = match &args.config {
        Some(path) => NormalizeOptions::from_toml_path(path).context("load options")?,
        None => NormalizeOptions::default(),
    };
    if let Some(year) = args.year {
        options = options.with_academic_year(Some(year));
    }
    if let Some(policy) = args.on_error {
        options = options.with_error_policy(match policy {
            ErrorPolicyArg::Abort => ErrorPolicy::Abort,
            ErrorPolicyArg::Skip => ErrorPolicy::Skip,
        });
    }
    if let Some(workers) = args.workers {
        options = options.with_workers(workers);
    }
    Ok(options)
}
