// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from a kubeconfig file or the inferred environment

use crate::error::{DemoError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client, from `kubeconfig` when given, otherwise inferred
#[instrument]
pub async fn create_client(kubeconfig: Option<&Path>) -> Result<Client> {
    let client_config = match kubeconfig {
        Some(path) => {
            info!("Loading kubeconfig from {}", path.display());
            config_from_file(path).await?
        }
        None => {
            debug!("No kubeconfig path given, inferring client configuration");
            KConfig::infer()
                .await
                .map_err(|e| DemoError::KubeconfigError(format!("Failed to infer config: {}", e)))?
        }
    };

    debug!("Connecting to {}", client_config.cluster_url);
    Client::try_from(client_config)
        .map_err(|e| DemoError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Build a client configuration from a kubeconfig file, using its current context.
/// Relative certificate and key paths resolve against the file's own directory.
async fn config_from_file(path: &Path) -> Result<KConfig> {
    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        DemoError::KubeconfigError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| DemoError::KubeconfigError(format!("Failed to create config: {}", e)))
}
