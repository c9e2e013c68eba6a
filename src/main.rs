mod cli;
mod engine;
mod metrics;
mod model;
mod text_summary;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(_) => {
            // Usage errors go to stdout with a controlled exit code; only
            // unhandled failures reach stderr.
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| "bench-eval".to_string());
            println!("usage: {program} <target>");
            std::process::exit(1);
        }
    };

    cli::run(args).await
}
