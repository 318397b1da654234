use anyhow::Result;
use clap::Parser;
use lifegrid_lib::app::{self, Simulation};
use lifegrid_lib::model::config::AppConfig;
use lifegrid_lib::model::{patterns, Board};
use lifegrid_lib::ui::{ConsoleRenderer, NullRenderer};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "console")]
    mode: Mode,

    /// Start from a built-in preset instead of the config file
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Board width
    #[arg(long)]
    width: Option<u16>,

    /// Board height
    #[arg(long)]
    height: Option<u16>,

    /// Number of random cells to set alive (duplicates allowed)
    #[arg(long)]
    seed_count: Option<usize>,

    /// RNG seed for reproducible boards
    #[arg(long)]
    seed: Option<u64>,

    /// Seed with a named pattern (block, blinker, toad, beacon, glider) instead of random cells
    #[arg(short, long)]
    pattern: Option<String>,

    /// Milliseconds between generations
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Stop after this many generations
    #[arg(short, long)]
    generations: Option<u64>,

    /// Keep running after the board becomes stable
    #[arg(long)]
    keep_running: bool,

    /// Read commands (toggle X Y, pause, resume, step, quit, ...) from stdin
    #[arg(long)]
    interactive: bool,

    /// Start paused; send `start` (or `resume`) to begin stepping
    #[arg(long)]
    paused: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Console,
    Headless,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Preset {
    /// 10x10 board, one generation per second
    Standard,
    /// 5x5 board, one generation every 500 ms
    Compact,
}

impl Args {
    fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match self.preset {
            Some(Preset::Standard) => AppConfig::default(),
            Some(Preset::Compact) => AppConfig::compact(),
            None => app::load_config(&self.config),
        };

        if let Some(width) = self.width {
            config.board.width = width;
        }
        if let Some(height) = self.height {
            config.board.height = height;
        }
        if let Some(count) = self.seed_count {
            config.board.seed_count = count;
        }
        if self.seed.is_some() {
            config.board.seed = self.seed;
        }
        if let Some(interval) = self.interval_ms {
            config.run.interval_ms = interval;
        }
        if self.generations.is_some() {
            config.run.max_generations = self.generations;
        }
        if self.keep_running {
            config.run.stop_when_stable = false;
        }

        config.validate()?;
        Ok(config)
    }

    fn build_board(&self, config: &AppConfig) -> Result<Board> {
        match &self.pattern {
            Some(name) => {
                let pattern = patterns::find_pattern(name)
                    .ok_or_else(|| anyhow::anyhow!("unknown pattern '{name}'"))?;
                let mut board = config.board.build();
                board.apply_pattern_centered(pattern)?;
                Ok(board)
            }
            None => Ok(config.board.build_seeded()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    lifegrid_lib::model::metrics::init_logging();
    let args = Args::parse();

    let config = args.resolve_config()?;
    let board = args.build_board(&config)?;
    tracing::info!(
        width = board.width(),
        height = board.height(),
        population = board.population(),
        "Board ready"
    );

    let sim = Simulation::new(board, config.run.clone());
    let controller = sim.controller();
    controller.shutdown().listen_for_ctrl_c();
    if args.paused {
        if !args.interactive {
            tracing::warn!("Starting paused without --interactive; only Ctrl-C will end the run");
        }
        controller.pause();
    }
    if args.interactive {
        app::spawn_stdin_commands(controller.clone());
    }

    match args.mode {
        Mode::Headless => {
            let summary = sim.run(&mut NullRenderer).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "Finished after {} generations ({:?}), population {}",
                    summary.generations, summary.stop_reason, summary.population
                );
            }
        }
        Mode::Console => {
            let mut renderer = ConsoleRenderer::stdout(&config.render);
            let summary = sim.run(&mut renderer).await?;
            println!(
                "Finished after {} generations ({:?})",
                summary.generations, summary.stop_reason
            );
        }
    }

    Ok(())
}
