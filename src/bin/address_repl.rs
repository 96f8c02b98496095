//! Small interactive demo: reads one address per line from stdin, prints its parsed JSON
//! representation (or `invalid address`), and exits on a blank line or EOF. A thin consumer of
//! the library facade, not part of its public surface.

use ar_address_parser::Parser;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let parser = Parser::new().expect("the embedded grammar is valid");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };

        if line.trim().is_empty() {
            break;
        }

        match parser.parse(&line) {
            Some(data) => {
                let json = serde_json::to_string_pretty(&data).expect("AddressData always serializes");
                println!("{json}");
            }
            None => println!("invalid address"),
        }

        let _ = stdout.flush();
    }
}
