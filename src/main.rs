// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hello_kube::config::Config;
use hello_kube::constants::defaults;
use hello_kube::demo::Demo;
use hello_kube::kubernetes::create_client;
use hello_kube::output::banner;
use hello_kube::types::LabelFilter;

#[derive(Parser)]
#[command(name = "hello-kube")]
#[command(version, about = "Walks a Kubernetes cluster through a namespace and pod lifecycle", long_about = None)]
struct Cli {
    /// Path to the kubeconfig file (defaults to ~/.kube/config)
    #[arg(long)]
    kubeconfig: Option<PathBuf>,

    /// Namespace used to run this program
    #[arg(long, default_value = defaults::NAMESPACE)]
    namespace: String,

    /// Name of the pod to be created
    #[arg(long = "podname", alias = "pod-name", default_value = defaults::POD_NAME)]
    pod_name: String,

    /// Label to filter on when listing pods, in key=value form
    #[arg(long = "filterLabel", alias = "filter-label", default_value = defaults::FILTER_LABEL)]
    filter_label: LabelFilter,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("{}", banner());

    let cli = Cli::parse();
    let config = Config::new(cli.kubeconfig, cli.namespace, cli.pod_name, cli.filter_label)?;
    info!(
        "Configuration loaded: namespace={}, pod={}, filter={}",
        config.namespace, config.pod_name, config.filter_label
    );

    let client = create_client(config.kubeconfig.as_deref()).await?;
    info!("Connected to Kubernetes cluster");

    let mut demo = Demo::new(client, config, std::io::stdout());
    if let Err(e) = demo.run().await {
        error!("Demo aborted: {}", e);
        return Err(e.into());
    }

    Ok(())
}
