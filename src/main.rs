use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use hilite::{run, ExchangeConfig};

#[derive(Parser, Debug)]
#[command(version, author, about)]
struct Cli {
    /// Server hostname
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Port to use
    #[arg(short, long, default_value = "9595")]
    port: u16,

    /// File to send
    #[arg(short, long, default_value = "index.html")]
    input: PathBuf,

    /// File the response payload is written to
    #[arg(short, long, default_value = "highlight.html")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = ExchangeConfig {
        host: cli.host,
        port: cli.port,
        input: cli.input,
        output: cli.output,
    };

    match run(&config).await {
        Ok(written) => {
            info!("wrote {} bytes to {}", written, config.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
