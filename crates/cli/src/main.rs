use clap::Parser;
use dnsnative_domain::{CliOverrides, HostCommand, LogFormat, MultiAddressStyle, ResolverBackend};
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dnsnative")]
#[command(version)]
#[command(about = "Resolve hostnames to IPs and IPs to hostnames, one reply per argument")]
struct Cli {
    /// Hostnames and/or IP addresses to look up
    #[arg(value_name = "TOKEN")]
    tokens: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Per-lookup timeout in seconds
    #[arg(short = 't', long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Resolver backend (system, hickory)
    #[arg(long)]
    backend: Option<ResolverBackend>,

    /// Drop repeated addresses from forward lookups
    #[arg(long)]
    dedupe: bool,

    /// Multi-address reply style (inline, bulleted)
    #[arg(long)]
    style: Option<MultiAddressStyle>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (text, json)
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Read one `host` command per line from stdin (`!host` alone prints help)
    #[arg(long, conflicts_with = "tokens")]
    stdin: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        timeout_secs: cli.timeout,
        backend: cli.backend,
        dedupe_addresses: cli.dedupe.then_some(true),
        multi_address_style: cli.style,
        log_level: cli.log_level.clone(),
        log_format: cli.log_format,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    if cli.dump_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    bootstrap::init_logging(&config.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = %config.resolver.backend,
        timeout_secs = config.resolver.timeout_secs,
        style = %config.reply.multi_address_style,
        "Starting dnsnative"
    );

    let use_cases = di::UseCases::new(&config);

    if cli.stdin {
        let input = BufReader::new(tokio::io::stdin());
        server::run_console(use_cases.host_command, input, tokio::io::stdout()).await?;
        return Ok(());
    }

    let command = HostCommand::from_tokens(&cli.tokens);
    let mut stdout = tokio::io::stdout();
    for reply in use_cases.host_command.execute_command(&command).await {
        stdout.write_all(reply.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;

    Ok(())
}
