mod cli;
mod helper;
use cli::Parser;
use helper::ReplHelper;
use helper::DESCRIBE_SIGIL;

use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustyline::error::ReadlineError;
use rustyline::CompletionType;
use rustyline::Config;
use rustyline::EditMode;
use rustyline::Editor;
use std::process::ExitCode;
use termimad::crossterm::style::Color;
use termimad::MadSkin;
use tracing::Level;

/// Roll or describe one line of input, `false` if it was not valid notation
fn eval_line(line: &str, rng: &mut StdRng, skin: &MadSkin, explain: bool) -> bool {
    if let Some(notation) = line.strip_prefix(DESCRIBE_SIGIL) {
        return match (
            miniroll_lib::describe(notation),
            miniroll_lib::describe_short(notation),
        ) {
            (Ok(long), Ok(short)) => {
                println!("{}", skin.inline(&format!("`{short}` {long}")));
                true
            }
            (Err(error), _) | (_, Err(error)) => {
                eprintln!("{}", format!("{}", error).bold().red());
                false
            }
        };
    }
    match miniroll_lib::execute_with(line, rng) {
        Ok(result) => {
            println!("{}", skin.inline(&format!("{}", result).magenta()));
            if explain {
                let description = miniroll_lib::describe(result.get_spec()).unwrap_or_default();
                println!("{}", description.dimmed());
            }
            true
        }
        Err(error) => {
            eprintln!("{}", format!("{}", error).bold().red());
            false
        }
    }
}

fn repl(args: &cli::Args, rng: &mut StdRng, skin: &MadSkin) -> rustyline::Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let helper = ReplHelper {
        colored: "".to_owned(),
    };
    let mut rline = Editor::with_config(config)?;
    rline.set_helper(Some(helper));
    if rline.load_history(&args.history).is_err() {
        eprintln!("{}", "repl: warn: no previous history".bold().yellow());
    }
    let mut count = 1u64;
    loop {
        let prompt = format!("miniroll: {}> ", count);
        if let Some(helper) = rline.helper_mut() {
            helper.colored = prompt.bold().green().to_string();
        }
        match rline.readline(&prompt) {
            Ok(line) => {
                rline.add_history_entry(line.as_str())?;
                let line = line.trim();
                if !line.is_empty() {
                    eval_line(line, rng, skin, args.explain);
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", "repl: signal: CTRL-C".bold().yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                eprintln!("{}", "repl: signal: CTRL-D".bold().yellow());
                break;
            }
            Err(error) => {
                eprintln!("{}", format!("repl: error: `{:?}`", error).bold().red());
                break;
            }
        }
        count += 1;
    }
    rline.append_history(&args.history)
}

fn main() -> ExitCode {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::debug!(seed = ?args.seed, "dice ready");

    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.inline_code.set_fg(Color::Magenta);

    if !args.notation.is_empty() {
        let all_valid = args
            .notation
            .iter()
            .fold(true, |valid, notation| {
                eval_line(notation, &mut rng, &skin, args.explain) && valid
            });
        return if all_valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    match repl(&args, &mut rng, &skin) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "repl failed");
            ExitCode::FAILURE
        }
    }
}
