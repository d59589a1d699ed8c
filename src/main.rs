// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::info;

use pixie_addon::apply::{Applier, HelmCli};
use pixie_addon::config::Config;
use pixie_addon::{GraphContext, PixieAddOn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let addon = PixieAddOn::new(config.load_props()?);
    info!(
        "Options loaded: namespace={}, chart version={}, deploy key from Secrets Manager={}",
        addon.options().namespace,
        addon.options().version,
        addon.options().uses_secret_manager()
    );

    let mut ctx = GraphContext::new();
    let release = addon.deploy(&mut ctx)?;
    let graph = ctx.into_graph();
    info!("Declared {} resources for Helm release '{}'", graph.len(), release);

    if config.dry_run {
        print!("{}", serde_yaml::to_string(&graph.plan()?)?);
        return Ok(());
    }

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    Applier::new(client, HelmCli::new(config.helm_binary))
        .apply(&graph)
        .await?;

    info!("Pixie add-on applied");
    Ok(())
}
