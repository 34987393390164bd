use std::process;

use guess_scorer::cli::{execute_command, parse_cli};
use guess_scorer::logging::init_logging;

fn main() {
    let cli = parse_cli();
    init_logging(cli.verbosity());

    if let Err(e) = execute_command(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
