use authsvc_server::{run, write_default_config};
use clap::Parser;

/// Command line interface for the auth service
#[derive(Parser, Debug)]
#[command(name = "authsvc")]
#[command(about = "Authentication service - registration, login, tokens and verification codes over gRPC")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Write the default configuration to this path and exit
    #[arg(long, value_name = "PATH")]
    pub write_default_config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = cli.write_default_config.as_deref() {
        return write_default_config(path);
    }
    run(cli.config.as_deref()).await
}
