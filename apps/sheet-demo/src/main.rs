use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sheet_demo::simulate::{self, SimulateOptions};
use sheet_demo::trips;

#[derive(Parser)]
#[command(name = "sheet-demo")]
#[command(about = "Drive a headless bottom sheet or list trips from JSON documents")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a sheet, run each drag as press/move/release, print the timeline
    Simulate {
        /// Measured panel height in px
        #[arg(long, default_value_t = 700.0)]
        height: f32,
        /// Bottom safe-area inset in px
        #[arg(long, default_value_t = 0.0)]
        inset: f32,
        /// Drag distances in px, positive downward; repeatable
        #[arg(long = "drag", allow_negative_numbers = true)]
        drags: Vec<f32>,
        /// Release threshold in px past OPEN
        #[arg(long)]
        threshold: Option<f32>,
        /// Release velocity (px/s) above which a fling decides the snap
        #[arg(long)]
        fling_velocity: Option<f32>,
        /// Frames per second
        #[arg(long, default_value_t = 60)]
        fps: u32,
        /// Also print every n-th frame
        #[arg(long, default_value_t = 0)]
        every: usize,
    },
    /// Join trips with their companies and print the listing
    Trips {
        /// JSON array of trip documents
        #[arg(long)]
        trips: PathBuf,
        /// JSON array of company documents
        #[arg(long)]
        companies: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let filter = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp_millis()
        .init();

    match cli.command {
        Commands::Simulate {
            height,
            inset,
            drags,
            threshold,
            fling_velocity,
            fps,
            every,
        } => {
            let options = SimulateOptions {
                height,
                inset,
                drags,
                threshold,
                fling_velocity,
                fps,
                every,
            };
            let steps = simulate::run(&options).context("sheet simulation failed")?;
            print!("{}", simulate::render(&steps, options.every));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Trips { trips, companies } => match trips::load(&trips, &companies) {
            Ok(listings) => {
                print!("{}", trips::render(&listings));
                Ok(ExitCode::SUCCESS)
            }
            Err(alert) => {
                eprintln!("{}\n{}", alert.title, alert.message);
                Ok(ExitCode::FAILURE)
            }
        },
    }
}
