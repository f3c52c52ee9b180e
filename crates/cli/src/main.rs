use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use wilddns_application::services::ResolverConfig;
use wilddns_application::use_cases::{FetchFallbackAddressesUseCase, HandleDnsQueryUseCase};
use wilddns_domain::CliOverrides;
use wilddns_infrastructure::dns::DnsServerHandler;
use wilddns_infrastructure::system::HttpEchoAddressSource;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "wilddns")]
#[command(version)]
#[command(about = "wilddns - wildcard DNS that answers with the address embedded in the hostname")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Static IPv4 fallback address (skips the lookup)
    #[arg(long, value_name = "ADDR")]
    external_ipv4: Option<String>,

    /// Static IPv6 fallback address (skips the lookup)
    #[arg(long, value_name = "ADDR")]
    external_ipv6: Option<String>,

    /// Do not start the documentation web server
    #[arg(long)]
    no_web: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind,
        external_ipv4: cli.external_ipv4,
        external_ipv6: cli.external_ipv6,
        no_web: cli.no_web,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting wilddns v{}", env!("CARGO_PKG_VERSION"));

    // Fallback addresses are fixed for the lifetime of the process
    let address_source = Arc::new(HttpEchoAddressSource::new(config.fallback.clone())?);
    let fallback = FetchFallbackAddressesUseCase::new(address_source, config.fallback.clone())
        .execute()
        .await;

    let resolver = Arc::new(ResolverConfig::new(fallback)?);
    let handle_query = Arc::new(HandleDnsQueryUseCase::new(resolver));
    let dns_handler = DnsServerHandler::new(handle_query);

    if config.web.enabled {
        let web_addr: SocketAddr = config.server.socket_addr(config.web.port).parse()?;
        let static_dir = config.web.static_dir.clone();

        tokio::spawn(async move {
            if let Err(e) = server::start_web_server(web_addr, static_dir).await {
                error!(error = %e, "Web server error");
            }
        });
    } else {
        info!("Web server disabled");
    }

    server::start_dns_server(config.server.dns_socket_addr(), dns_handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
