use anyhow::Context;
use clap::Parser;
use prod_order_confirmation_client::ProdOrderConfirmationClient;
use prod_order_confirmation_reader::{
    accepter::resolve_accepter,
    config::{Args, Config},
    dispatch::dispatch,
    input::read_sdc,
};
use sap_entrypoint::SapEntrypoint;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let entrypoint = SapEntrypoint::default().init();

    let args = Args::parse();
    let config = Config::from_env(args, entrypoint.environment())
        .context("all necessary env vars should be available")?;

    tracing::trace!(config=?config, "initialized config");

    let sdc = read_sdc(&config.input)?;

    let client = ProdOrderConfirmationClient::new(&config.api_key, &config.base_url)
        .context("could not build production order confirmation client")?;

    let chains = resolve_accepter(&sdc.accepter);
    if chains.is_empty() {
        tracing::warn!(accepter=?sdc.accepter, "no known call chains selected");
        return Ok(());
    }

    let report = dispatch(&client, &sdc.production_order_confirmation, &chains).await;

    tracing::info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "finished reading production order confirmations"
    );

    Ok(())
}
