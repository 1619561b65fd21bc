//! Mudline CLI entry point.

use mudline_foundation::Player;
use mudline_runtime::{BufReadEditor, LineEditor, Repl};
use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info_span;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    name: Option<String>,
    batch_mode: bool,
    plain: bool,
    quiet: bool,
    show_help: bool,
    show_version: bool,
    verbosity: u8,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-p" | "--plain" => config.plain = true,
            "-q" | "--quiet" => config.quiet = true,
            "-v" | "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            "-vv" => config.verbosity = config.verbosity.saturating_add(2),
            "-n" | "--name" => {
                i += 1;
                if i >= args.len() {
                    return Err("--name requires a value".into());
                }
                config.name = Some(args[i].clone());
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Logs go to stderr; stdout belongs to the game.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("mudline {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.verbosity);

    let player = config.name.as_deref().map_or_else(Player::default, Player::new);
    let span = info_span!("session", player = %player);
    let _entered = span.enter();

    let interactive = !config.plain && io::stdin().is_terminal();
    if interactive {
        play(Repl::new(player)?, &config, true)
    } else {
        play(Repl::with_editor(BufReadEditor::stdin(), player), &config, false)
    }
}

fn play<E: LineEditor>(
    mut repl: Repl<E>,
    config: &CliConfig,
    interactive: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Run any specified scripts
    for file in &config.files {
        repl.run_script(file)?;
        if !repl.controller().is_running() {
            return Ok(());
        }
    }

    // If batch mode, exit now
    if config.batch_mode {
        return Ok(());
    }

    // Scripts and piped input establish their own context
    if config.quiet || !config.files.is_empty() || !interactive {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mMudline\x1b[0m - A tiny text adventure command interpreter

\x1b[1mUSAGE:\x1b[0m
    mudline [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Command scripts to play before the prompt

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -n, --name NAME    Player name (default: adventurer)
    -p, --plain        Read plain lines from stdin instead of the line editor
    -b, --batch        Play scripts and exit (no prompt)
    -q, --quiet        Do not print the welcome banner
    -v, --verbose      Log more to stderr (repeat for trace output)

\x1b[1mEXAMPLES:\x1b[0m
    mudline                        Start playing
    mudline -n Ada                 Play as Ada
    mudline -b walkthrough.txt     Play a script and exit
    echo 'look' | mudline          Pipe commands in

\x1b[1mCOMMANDS:\x1b[0m
    look               Examine the current room
    move [direction]   Move forward, back, left, or right
    pick up [item]     Pick up an item
    inventory          Check your inventory
    help               List commands
    quit               Exit the game (Ctrl+D works too)

Logging honors RUST_LOG."
    );
}
