//! RDT CLI - Command line tool for the roadside drug testing data exports.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rdt-cli",
    version,
    about = "Australian roadside drug testing data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: rdt_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    rdt_cmd::run(cli.command).await
}
