use anyhow::{Context, Result};
use clap::Parser;
use petpals_core::{init_logging, EngineConfig};
use petpals_lib::app::App;
use petpals_lib::ui::Renderer;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, IsTerminal};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// How to run the session
    #[arg(short, long, value_enum, default_value = "interactive")]
    mode: Mode,

    /// Config file path
    #[arg(short, long, default_value = "petpals.toml")]
    config: String,

    /// RNG seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of interactions in demo mode
    #[arg(short, long, default_value_t = 10)]
    rounds: usize,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Interactive,
    Demo,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    });

    let mut config = EngineConfig::load(&args.config)
        .with_context(|| format!("loading config from {}", args.config))?;
    if args.seed.is_some() {
        config.session.seed = args.seed;
    }
    let demo_seed = config.session.seed;

    let stdout = io::stdout();
    let renderer = Renderer::new(stdout.is_terminal());
    let mut app = App::new(config)?.with_renderer(renderer);
    let mut out = stdout.lock();

    match args.mode {
        Mode::Interactive => app.run(io::stdin().lock(), &mut out)?,
        Mode::Demo => {
            let mut rng = match demo_seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
                None => ChaCha8Rng::from_entropy(),
            };
            app.run_demo(args.rounds, &mut rng, &mut out)?;
        }
    }
    Ok(())
}
