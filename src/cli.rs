use std::{
    io::{BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use epc_qr_config::Config;
use epc_qr_sepa::{load_consumer_template, Record};

use crate::{prompt, render::QrRenderer, version_info::VersionInfo};

/// Create EPC-compliant QR codes for wire transfers.
#[derive(Parser, Debug)]
#[command(name = "epc-qr", version)]
pub struct Cli {
    /// Config file to use instead of the one in the user config directory
    #[arg(long, global = true, value_name = "TOML")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create EPC-compliant QR code for IBAN-based wire transfer within European economic area.
    Create(CreateArgs),
    /// Show version and exit.
    Version,
}

#[derive(Args, Debug)]
struct CreateArgs {
    /// Name of generated qr png file
    #[arg(long)]
    out: Option<PathBuf>,

    /// TOML template from which to create the qr
    #[arg(long, value_name = "TOML")]
    from_template: Option<PathBuf>,

    /// Also write the record text, encoded in its declared character set
    #[arg(long)]
    text: Option<PathBuf>,
}

impl Cli {
    pub fn run<R: BufRead, W: Write>(self, input: &mut R, out: &mut W) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Version => {
                writeln!(out, "{}", VersionInfo::new()?)?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Create(args) => {
                let config = match &self.config {
                    Some(path) => Config::load(path)?,
                    None => Config::load_from_file()?,
                };
                let errors = config.config_errors();
                if !errors.is_empty() {
                    bail!("invalid configuration: {}", errors.join(", "));
                }
                if config.needs_upgrade() {
                    log::warn!("config file uses an older format");
                }
                create(args, &config, input, out)
            }
        }
    }
}

fn create<R: BufRead, W: Write>(
    args: CreateArgs,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<ExitCode> {
    let record = match &args.from_template {
        Some(path) => {
            writeln!(out, "creating qr code from template...")?;
            load_consumer_template(path)
                .with_context(|| format!("could not create qr code from {}", path.display()))?
        }
        None => match prompt::ask_consumer_record(input, out)? {
            Ok(record) => record,
            Err(rejected) => {
                if let Some(reason) = &rejected.reason {
                    log::info!("{reason}");
                }
                writeln!(out, "{}", rejected.field.rejection())?;
                return Ok(ExitCode::FAILURE);
            }
        },
    };

    let qr_file = args
        .out
        .unwrap_or_else(|| PathBuf::from(&config.output().qr_file));
    let text_file = args
        .text
        .or_else(|| config.output().text_file.as_ref().map(PathBuf::from));
    // encode before touching the file system so an unencodable record writes nothing
    let text = text_file
        .map(|path| record_bytes(&record).map(|bytes| (path, bytes)))
        .transpose()?;

    QrRenderer::from_config(config.qr()).save_png(&record.serialize(), &qr_file)?;
    if let Some((path, bytes)) = text {
        std::fs::write(&path, bytes)
            .with_context(|| format!("could not write {}", path.display()))?;
        log::info!("wrote record text to {}", path.display());
    }

    writeln!(out, "🎉🎉🎉 You may view your png {} 🎉🎉🎉", qr_file.display())?;
    Ok(ExitCode::SUCCESS)
}

fn record_bytes(record: &Record) -> anyhow::Result<Vec<u8>> {
    record
        .serialize_to_bytes()
        .with_context(|| format!("could not encode record as {}", record.resolve_encoding()))
}
