use clap::Parser;
use std::process;

use hashlit_core::{hash_literal, parse_digest};

#[derive(Debug, Parser)]
#[command(
    name = "hashlit",
    version,
    about = "Format hex hash digests as C++ hash_t initializer literals"
)]
struct Cli {
    /// Hex hash digests; one literal is printed per digest, in order.
    digests: Vec<String>,

    /// Identifier to use in the emitted literal.
    #[arg(long, default_value = "FIXME")]
    name: String,

    /// Require each digest to be exactly 64 hex characters (32 bytes).
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    for digest in &cli.digests {
        if cli.strict {
            if let Err(msg) = parse_digest(digest) {
                // Exact error string, stable for CI / integrations.
                eprintln!("{msg}");
                process::exit(2);
            }
        }

        println!("{}", hash_literal(digest, &cli.name));
    }

    Ok(())
}
