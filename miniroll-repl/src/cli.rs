use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;
use std::path::PathBuf;

const MINIROLL_AUTHOR: &str = crate_authors!();
const MINIROLL_VERSION: &str = crate_version!();
const MINIROLL_ABOUT: &str = crate_description!();
const MINIROLL_FLAG_D_SHORT: char = 'd';
const MINIROLL_FLAG_D_HELP: &str = "Enable Debug logging";
const MINIROLL_FLAG_S_SHORT: char = 's';
const MINIROLL_FLAG_S_HELP: &str = "Seed the dice for reproducible rolls";
const MINIROLL_FLAG_E_SHORT: char = 'e';
const MINIROLL_FLAG_E_HELP: &str = "Print the plain words description of each roll";
const MINIROLL_FLAG_HISTORY_HELP: &str = "History file of the interactive mode";
const MINIROLL_ARG_NOTATION_HELP: &str = "Roll these notations and exit, e.g. `4d6kH3`";

#[derive(Parser, Debug)]
#[command(author = MINIROLL_AUTHOR, version = MINIROLL_VERSION, about = MINIROLL_ABOUT)]
pub struct Args {
    #[arg(short = MINIROLL_FLAG_D_SHORT, long, help = MINIROLL_FLAG_D_HELP, action)]
    pub debug: bool,
    #[arg(short = MINIROLL_FLAG_S_SHORT, long, help = MINIROLL_FLAG_S_HELP)]
    pub seed: Option<u64>,
    #[arg(short = MINIROLL_FLAG_E_SHORT, long, help = MINIROLL_FLAG_E_HELP, action)]
    pub explain: bool,
    #[arg(long, default_value = "history", help = MINIROLL_FLAG_HISTORY_HELP)]
    pub history: PathBuf,
    #[arg(help = MINIROLL_ARG_NOTATION_HELP)]
    pub notation: Vec<String>,
}
