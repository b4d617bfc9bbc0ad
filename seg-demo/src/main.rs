//! Command line front end of the mock segmentation showcase.
//!
//! Reads an image, applies one of the canned segmentation recipes and writes
//! the highlighted result as PNG, optionally next to the original.

mod config;
mod logic;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use logic::RunArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Image detection and segmentation showcase")]
struct Cli {
    /// Config file, defaults to the platform config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available analysis types
    Categories,

    /// Show size and color mode of an image
    Info {
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Run an analysis and save the result
    Run(RunArgs),
}

/// Sets up env_logger with a `[time level file line] message` format.
/// `RUST_LOG` overrides the default `info` filter.
fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Command::Categories => println!("{}", logic::categories()),
        Command::Info { input } => println!("{}", logic::info(&input)?),
        Command::Run(args) => {
            let config = Config::init(cli.config)?;
            if config.is_first_run {
                log::info!("Wrote default config to {}", config.config_path.display());
            }

            let report = logic::run(&config, &args)?;
            println!("{}: {}", args.input.display(), report.info);
            println!(
                "{} done: {}",
                report.category.title(),
                report.result_path.display()
            );

            if let Some(path) = report.comparison_path {
                println!("comparison: {}", path.display());
            }
        }
    }

    Ok(())
}
