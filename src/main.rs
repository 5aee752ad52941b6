use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use cantor_explorer::{
    AppConfig, DeadlineTimer, ExportController, Interval, PlaybackController, PpmFilePresenter,
    TerminalPresenter, generate_construction, logging, statistics_table,
};
use clap::{Parser, Subcommand};
use tracing::{error, info};

const TERMINAL_COLUMNS: usize = 81;

#[derive(Parser)]
#[command(name = "cantor_explorer")]
#[command(version = "0.1")]
#[command(about = "Step through the construction of the Cantor set")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of construction levels, overriding the config
    #[arg(long, global = true)]
    depth: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the statistics of every level
    Stats,

    /// Write the construction view as a binary PPM image
    Export {
        /// Number of levels to draw (1-based)
        #[arg(short, long)]
        iteration: Option<usize>,

        #[arg(short, long, default_value = "output/cantor.ppm")]
        output: PathBuf,

        #[arg(long)]
        width: Option<u32>,

        #[arg(long)]
        height: Option<u32>,
    },

    /// Animate the construction in the terminal
    Play {
        /// Full passes through every level before stopping
        #[arg(long, default_value_t = 1)]
        cycles: usize,

        #[arg(long)]
        speed: Option<u32>,
    },
}

fn load_config(cli: &Cli) -> Result<AppConfig, Box<dyn Error>> {
    let mut config = AppConfig::load(cli.config.as_deref())?;

    if let Some(depth) = cli.depth {
        config.max_iterations = depth;
        config.validate()?;
    }

    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            logging::init("info");
            error!(error = %err, "invalid configuration");
            return Err(err);
        }
    };

    logging::init(&config.log_level);

    let result = run(cli.command, &config);
    if let Err(err) = &result {
        error!(error = %err, "command failed");
    }
    result
}

fn run(command: Commands, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let history = generate_construction(Interval::UNIT, config.max_iterations)?;
    info!(levels = history.depth(), "construction generated");

    match command {
        Commands::Stats => {
            println!("{}", statistics_table(&history));
            Ok(())
        }
        Commands::Export {
            iteration,
            output,
            width,
            height,
        } => {
            ensure_parent_dir(&output)?;

            let mut controller = ExportController::new(PpmFilePresenter::new());
            controller.generate(
                &history,
                iteration.unwrap_or(history.depth()),
                width.unwrap_or(config.window_width),
                height.unwrap_or(config.window_height),
            )?;
            controller.write(&output)?;
            Ok(())
        }
        Commands::Play { cycles, speed } => {
            let presenter = TerminalPresenter::new(io::stdout(), TERMINAL_COLUMNS);
            let mut controller = PlaybackController::new(
                history,
                config.speed,
                config.speed_range()?,
                presenter,
                DeadlineTimer::new(),
            );

            if let Some(speed) = speed {
                controller.set_speed(speed);
            }

            play(&mut controller, cycles);
            Ok(())
        }
    }
}

/// Runs the animation until `cycles` full passes have been shown.
fn play<W: io::Write>(
    controller: &mut PlaybackController<TerminalPresenter<W>, DeadlineTimer>,
    cycles: usize,
) {
    let frames = cycles.max(1) * controller.state().max_iterations();
    let mut shown = 1;

    controller.play();

    while shown < frames {
        let Some(deadline) = controller.timer().next_deadline() else {
            break;
        };

        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }

        while let Some(handle) = controller.timer_mut().take_due(Instant::now()) {
            if controller.on_timer_fired(handle) {
                shown += 1;
            }
        }
    }

    controller.pause();
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_depth_overrides_config() {
        let cli = Cli::try_parse_from(["cantor_explorer", "stats", "--depth", "5"]).unwrap();

        assert_eq!(load_config(&cli).unwrap().max_iterations, 5);
    }

    #[test]
    fn test_depth_out_of_range_is_rejected() {
        let cli = Cli::try_parse_from(["cantor_explorer", "--depth", "40", "stats"]).unwrap();

        assert!(load_config(&cli).is_err());
    }

    #[test]
    fn test_export_defaults() {
        let cli = Cli::try_parse_from(["cantor_explorer", "export"]).unwrap();

        match cli.command {
            Commands::Export {
                iteration, output, ..
            } => {
                assert_eq!(iteration, None);
                assert_eq!(output, PathBuf::from("output/cantor.ppm"));
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_play_stops_after_one_cycle() {
        let history = generate_construction(Interval::UNIT, 3).unwrap();
        let config = AppConfig::default();
        let presenter = TerminalPresenter::new(Vec::new(), 27);
        let mut controller = PlaybackController::new(
            history,
            10,
            config.speed_range().unwrap(),
            presenter,
            DeadlineTimer::new(),
        );

        play(&mut controller, 1);

        assert!(!controller.state().is_animating());
        assert_eq!(controller.timer().pending_count(), 0);

        let output = String::from_utf8(controller.presenter().get_ref().clone()).unwrap();
        assert!(output.contains("Cantor Set Construction - Iteration 2"));
    }
}
