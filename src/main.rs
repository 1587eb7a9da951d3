mod shell;

use braini_games::games;
use braini_games::{FileStore, MemoryStore, ProfileStore, USER_NAME_KEY};
use shell::config::{CommandLine, ShellConfig};
use shell::TerminalGuard;
use std::env;
use tracing::{info, warn};

fn main()
{
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String>
{
    let args: Vec<String> = env::args().skip(1).collect();
    let line = CommandLine::from_args(&args)?;
    if let Some(path) = shell::logging::init()? {
        eprintln!("Logging to {}", path.display());
    }

    match line.command.as_deref() {
        None => interactive(&line.config),
        Some("list") => {
            list_games();
            Ok(())
        }
        Some("help") => {
            print_help();
            Ok(())
        }
        Some(name) => match games::find(name) {
            Some(game) => run_game(game.name, &line.config),
            None => Err(format!("Unknown command '{name}'. Run with --help.")),
        },
    }
}

fn open_store(config: &ShellConfig) -> Box<dyn ProfileStore>
{
    match FileStore::open(&config.profile_path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            eprintln!("Warning: couldn't open profile ({err}). Your name won't be remembered.");
            warn!(error = %err, "falling back to in-memory profile");
            Box::new(MemoryStore::new())
        }
    }
}

fn interactive(config: &ShellConfig) -> Result<(), String>
{
    let mut store = open_store(config);
    let mut rng = braini_games::seeded(config.seed);
    info!(seed = ?config.seed, "starting lobby");
    let mut term = TerminalGuard::enter().map_err(|err| err.to_string())?;
    shell::lobby::run(&mut term, &mut rng, store.as_mut())
}

fn run_game(name: &str, config: &ShellConfig) -> Result<(), String>
{
    let store = open_store(config);
    let player = store.get(USER_NAME_KEY).unwrap_or_default();
    let mut rng = braini_games::seeded(config.seed);
    info!(game = name, seed = ?config.seed, "starting game directly");
    let mut term = TerminalGuard::enter().map_err(|err| err.to_string())?;
    match name {
        "memory" => shell::memory::run(&mut term, &mut rng, &player),
        "color" => shell::color::run(&mut term, &mut rng, &player),
        _ => Err(format!("Unknown game '{name}'. Run with --help.")),
    }
}

fn list_games()
{
    println!("Available games:");
    for game in games::registry() {
        println!("  {:<10} - {}", game.name, game.description);
    }
}

fn print_help()
{
    println!("braini-games");
    println!("\nUsage:");
    println!("  braini-games [--seed=N] [--profile=PATH]");
    println!("  braini-games list");
    println!("  braini-games memory");
    println!("  braini-games color");
    println!("\nNotes:");
    println!("  Without a command, the lobby asks for your name and lets you pick a game.");
    println!("  Your name is kept in ~/.braini-games.toml (override with BRAINI_PROFILE).");
    println!("  BRAINI_SEED replays the same shuffles; BRAINI_LOG=debug writes a log to the temp dir.");
}
