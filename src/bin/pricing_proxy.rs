use texas_energy_partner::observability;
use texas_energy_partner::proxy::{self, ProxyConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_tracing();

    let config = ProxyConfig::from_env();
    proxy::serve(config).await
}
