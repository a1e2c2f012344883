use clap::Parser;
use triaxial_lib::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    triaxial_lib::run(ServerConfig::parse()).await
}
