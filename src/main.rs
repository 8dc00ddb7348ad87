use anyhow::Result;
use asismap::cli::{Cli, Commands};
use asismap::commands::{self, ExtractConfig, LinkConfig};
use asismap::config::{load_config, AsismapConfig};
use asismap::formatting::FormattingConfig;
use clap::Parser;
use std::path::PathBuf;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = load_config(cli.config.as_deref());
    let formatting_config = create_formatting_config(cli.plain);
    formatting_config.apply_color_override();

    match cli.command {
        Commands::Extract { path } => {
            let extract = build_extract_config(path, &config, formatting_config);
            commands::handle_extract(&extract, &mut std::io::stdout().lock())?;
        }
        Commands::Link { path } => {
            let link = LinkConfig {
                input_dir: path,
                linked_file_name: config.output().linked_file_name,
            };
            let output = commands::handle_link(&link)?;
            println!("{}", output.display());
        }
        Commands::Run { path } => {
            let extract = build_extract_config(path, &config, formatting_config);
            let output = commands::handle_run(
                &extract,
                &config.output().linked_file_name,
                &mut std::io::stdout().lock(),
            )?;
            println!("{}", output.display());
        }
        Commands::Init { force } => {
            commands::init_config(&std::env::current_dir()?, force)?;
            println!("Created {} configuration file", asismap::config::CONFIG_FILE_NAME);
        }
    }

    Ok(())
}

// Side effect function for logger setup (I/O at edges); RUST_LOG wins when set
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

// Pure function to build extract configuration
fn build_extract_config(
    path: PathBuf,
    config: &AsismapConfig,
    formatting_config: FormattingConfig,
) -> ExtractConfig {
    ExtractConfig {
        input_dir: path,
        report_prefix: config.output().report_prefix,
        scratch_root: config.scratch_root(),
        formatting_config,
    }
}
