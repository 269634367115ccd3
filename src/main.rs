//! cfctl - main entry point

use clap::Parser;
use log::{debug, info};

use cfctl::{
    run_curl_command, run_get_command, run_list_command, run_metrics_command, CfClient, Cli,
    Command, ConfigResolver,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides --log-level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> cfctl::Result<()> {
    info!("Starting cfctl v{}", env!("CARGO_PKG_VERSION"));

    let mut config = ConfigResolver::resolve(cli.config.as_deref())?;
    if cli.insecure {
        config.allow_insecure_tls = true;
    }
    debug!("Resolved config: {:?}", config);

    let client = CfClient::new(config)?;

    match &cli.command {
        Command::Get { resource } => run_get_command(&client, cli, resource).await,
        Command::List(args) => run_list_command(&client, cli, args).await,
        Command::Curl(args) => run_curl_command(&client, args).await,
        Command::Metrics(args) => run_metrics_command(&client, cli, args).await,
    }
}
