use anyhow::{bail, Context};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use floppy_fish::build_info;
use floppy_fish::clock::{FrameClock, SystemClock};
use floppy_fish::config::GameConfig;
use floppy_fish::game::GameState;
use floppy_fish::game_loop::GameLoop;
use floppy_fish::input::TerminalInput;
use floppy_fish::ui::TerminalRenderer;
use floppy_fish::SpriteSet;
use ratatui::backend::CrosstermBackend;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    sprites: Option<PathBuf>,
    seed: Option<u64>,
    log_file: Option<PathBuf>,
}

enum Command {
    Play(CliArgs),
    Version,
    Help,
}

fn print_help() {
    println!("Floppy Fish - Flappy Bird in your terminal\n");
    println!("Usage: floppy-fish [options]\n");
    println!("Options:");
    println!("  --config PATH   Load tuning from a JSON file (default: ~/.floppy-fish/config.json)");
    println!("  --sprites PATH  Load sprite sizes and glyphs from a JSON manifest");
    println!("  --seed N        Seed the pipe generator for a reproducible run");
    println!("  --log FILE      Write log output to FILE (RUST_LOG level, default info)");
    println!("  --version       Show version information");
    println!("  --help          Show this help message\n");
    println!("Controls: Space/Up/Enter/click to flap, R to restart, Esc/Q to quit");
}

fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .with_context(|| format!("{} needs a value", flag))
        };
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--config" => cli.config = Some(PathBuf::from(value("--config")?)),
            "--sprites" => cli.sprites = Some(PathBuf::from(value("--sprites")?)),
            "--log" => cli.log_file = Some(PathBuf::from(value("--log")?)),
            "--seed" => {
                let raw = value("--seed")?;
                let seed = raw
                    .parse()
                    .with_context(|| format!("invalid seed `{}`", raw))?;
                cli.seed = Some(seed);
            }
            other => bail!("unknown argument: {}", other),
        }
    }

    Ok(Command::Play(cli))
}

/// Logs only ever go to a file: the game owns the terminal while it runs.
/// Without `--log` logging is off.
fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        log::set_max_level(log::LevelFilter::Off);
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_config(explicit: Option<&PathBuf>) -> anyhow::Result<GameConfig> {
    if let Some(path) = explicit {
        return GameConfig::load(path).context("rejected configuration");
    }
    match GameConfig::default_path() {
        Some(path) if path.exists() => {
            log::info!("using config {}", path.display());
            return GameConfig::load(&path).context("rejected configuration");
        }
        Some(path) => log::info!("no config at {}; using defaults", path.display()),
        None => log::warn!("no home directory found; using default configuration"),
    }
    let config = GameConfig::default();
    config.validate().context("rejected built-in configuration")?;
    Ok(config)
}

fn load_sprites(path: Option<&PathBuf>) -> anyhow::Result<SpriteSet> {
    match path {
        Some(path) => SpriteSet::load(path).context("could not load sprites"),
        None => Ok(SpriteSet::default()),
    }
}

/// Restores the terminal on every exit path, including errors and panics
/// unwinding through `play`.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)
            .context("failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn play(cli: CliArgs) -> anyhow::Result<()> {
    init_logging(cli.log_file.as_ref())?;

    // Everything that can reject startup happens before the terminal is taken over
    let config = load_config(cli.config.as_ref())?;
    let sprites = load_sprites(cli.sprites.as_ref())?;
    let clock = SystemClock::new(config.fps);
    let state = GameState::new(config, sprites.dimensions(), clock.now_ms())
        .context("rejected configuration")?;

    let _guard = TerminalGuard::enter()?;
    let renderer = TerminalRenderer::new(CrosstermBackend::new(io::stdout()), sprites)
        .context("failed to initialize terminal")?;
    let mut game_loop = GameLoop::new(state, renderer, TerminalInput::new(), clock, cli.seed);
    game_loop.run().context("game loop failed")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let cli = match parse_args(&args) {
        Ok(Command::Play(cli)) => cli,
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(Command::Help) => {
            print_help();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{:#}", err);
            eprintln!("Run 'floppy-fish --help' for usage.");
            std::process::exit(1);
        }
    };

    play(cli)
}
