//! rWorklog main entrypoint.

use clap::Parser;
use rworklog::cli::Cli;
use rworklog::run;
use rworklog::ui::messages::{ConsoleSink, Sink};

fn main() {
    let mut sink = ConsoleSink::new();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            sink.error(e.to_string().trim_end());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &mut sink) {
        sink.error(&format!("Error: {}", e));
        std::process::exit(1);
    }
}
