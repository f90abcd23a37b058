//! CLI module for the cartridge mapper

mod args;

pub use args::{Args, Command};

use crate::config::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::logging::{self, Logger, TracingLogger};
use crate::mapping::Mapper;
use crate::output::{ReportConfig, ReportGenerator};
use std::path::Path;
use std::process::ExitCode;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "cartridgemapper.toml";

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Map {
            path,
            output,
            config,
            format,
            debug,
            disable_color,
            verbose,
        } => {
            // An explicit config file must load; the default one is optional
            let mut cfg = match &config {
                Some(config_path) => Config::load(config_path)?,
                None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
            };

            let format = format.as_deref().map(OutputFormat::parse).transpose()?;
            cfg.merge_cli(output, format, debug, disable_color);

            logging::init(cfg.logging.debug, cfg.logging.color);
            let logger = TracingLogger;

            if !path.exists() {
                return Err(Error::PathNotFound(path));
            }

            logger.debug(&format!("Mapping application at {}", path.display()));
            logger.debug(&format!("Output: {}", cfg.output.directory.display()));
            logger.debug(&format!("Format: {:?}", cfg.output.format));

            let mapper = Mapper::new(cfg.application.clone(), &logger).with_progress(verbose);
            let result = mapper.map(&path)?;

            for (name, err) in &result.failed_templates {
                logger.warn(&format!("Skipped template {}: {}", name, err));
            }

            let generator = ReportGenerator::new(ReportConfig {
                output_dir: cfg.output.directory.clone(),
                format: cfg.output.format,
                ..Default::default()
            })?;
            let report = generator.generate(&result)?;

            logger.info(&report.summary());
            Ok(())
        }

        Command::Version => {
            println!("cartridgemapper {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
