use std::fs;

use anyhow::{Context, Result};
use tracing::{error, info, info_span};

use sets_cli::config::AppConfig;
use sets_cli::pipeline::Pipeline;
use sets_cli::transport::{DirectoryTransport, Transport};
use sets_ingest::SheetSource;
use sets_xml::write_document_file;

use crate::cli::{ConvertArgs, InputArgs};
use crate::types::{CheckReport, RunReport};

fn load_config(input: &InputArgs) -> Result<AppConfig> {
    let mut config =
        AppConfig::load_or_default(input.config.as_deref()).context("load configuration")?;
    if let Some(min_length) = input.min_length {
        config.validation.min_length = min_length;
    }
    Ok(config)
}

fn sheet_source(input: &InputArgs) -> SheetSource {
    SheetSource::new(&input.file).with_sheet(input.sheet.clone())
}

pub fn run_convert(args: &ConvertArgs) -> Result<RunReport> {
    let mut config = load_config(&args.input)?;
    if let Some(name) = &args.output_name {
        config.output.file_name.clone_from(name);
    }
    if let Some(dir) = &args.output_dir {
        config.output.dir = Some(dir.clone());
    }
    if let Some(dir) = &args.deliver_to {
        config.transport.target_dir = Some(dir.clone());
    }
    config.validate().context("invalid options")?;

    let source = sheet_source(&args.input);
    let span = info_span!("convert", file = %source.path.display());
    let _guard = span.enter();

    let pipeline = Pipeline::new(config.pipeline_options());
    let output = pipeline.run(&source).inspect_err(|error| {
        error!(error = %error, "conversion failed");
    })?;

    let mut report = RunReport {
        source: source.path.clone(),
        output: None,
        min_length: config.validation.min_length,
        rows_read: output.rows_read,
        rows_dropped: output.rows_dropped,
        set_count: output.document.set_count(),
        barcode_count: output.document.barcode_count(),
        diagnostics: output.diagnostics.clone(),
        delivery: None,
        message: output.outcome_message(),
    };

    if args.stdout {
        print!("{}", output.xml);
        return Ok(report);
    }
    if args.dry_run {
        info!("dry run, nothing written");
        return Ok(report);
    }

    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let output_path = config.output_path();
    write_document_file(&output.document, &output_path)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(path = %output_path.display(), "document written");
    report.output = Some(output_path.clone());

    if let Some(target_dir) = &config.transport.target_dir {
        let transport = DirectoryTransport::new(target_dir);
        let delivery = transport
            .deliver(&output_path, &config.output.file_name)
            .inspect_err(|error| {
                error!(
                    error = %error,
                    destination = %transport.describe(),
                    "delivery failed"
                );
            })
            .with_context(|| {
                format!(
                    "document written to {} but not delivered",
                    output_path.display()
                )
            })?;
        report.delivery = Some(delivery);
    }

    info!(message = %report.message, "conversion finished");
    Ok(report)
}

pub fn run_check(args: &InputArgs) -> Result<CheckReport> {
    let config = load_config(args)?;
    config.validate().context("invalid options")?;
    let source = sheet_source(args);
    let pipeline = Pipeline::new(config.pipeline_options());
    let validated = pipeline.check(&source).inspect_err(|error| {
        error!(error = %error, "check failed");
    })?;
    Ok(CheckReport {
        source: source.path,
        min_length: config.validation.min_length,
        rows_checked: validated.rows_seen,
        rows_dropped: validated.rows_dropped,
        set_count: validated.sets.len(),
        diagnostics: validated.diagnostics,
    })
}
