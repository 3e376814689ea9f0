//! Delve CLI entry point.

use std::env;
use std::io;
use std::process::ExitCode;

use delve_parser::Interpreter;
use delve_runtime::{Config, Repl, ScriptEditor, logging};
use delve_world::starter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_args(env::args())?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("delve {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(config.log_filter.as_deref())?;

    let world = starter::world()?;
    let interpreter = if config.aliases {
        Interpreter::with_aliases()
    } else {
        Interpreter::standard()
    };

    if config.batch_mode {
        let stdin = io::stdin();
        let mut repl = Repl::with_editor(ScriptEditor::new(stdin.lock()), world, interpreter)
            .without_banner()
            .with_prompt("");
        repl.run()?;
        return Ok(());
    }

    let mut repl = Repl::new(world, interpreter)?;
    if !config.show_banner {
        repl = repl.without_banner();
    }
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mDelve\x1b[0m - A small text adventure

\x1b[1mUSAGE:\x1b[0m
    delve [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Read commands from stdin, no prompt or banner
    --no-banner        Skip the welcome banner
    --aliases          Also accept shorthands ('n', 'get', 'i', ...) and any case
    --log FILTER       Log filter when RUST_LOG is unset (default: warn)

\x1b[1mEXAMPLES:\x1b[0m
    delve                                 Play interactively
    delve --aliases                       Play with shorthand commands
    printf 'look\\ngo north\\n' | delve -b   Run a scripted session
    RUST_LOG=delve_parser=debug delve     Play with per-turn logging on stderr

\x1b[1mIN GAME:\x1b[0m
    help                 List commands
    quit                 Leave the game
    Ctrl+D               Leave the game
    Ctrl+C               Cancel current input"
    );
}
