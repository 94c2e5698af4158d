// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Readiness polling used between demo steps

use crate::constants::wait::{POLL_INTERVAL_MS, POLL_MAX_INTERVAL_MS};
use crate::error::{DemoError, Result};
use crate::kubernetes::namespaces::{get_namespace, is_namespace_active};
use crate::kubernetes::pods::get_pod;
use kube::Client;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument};

/// Poll `check` until it reports true or `timeout` elapses.
/// This uses exponential backoff starting at POLL_INTERVAL_MS milliseconds.
/// An error from `check` ends the wait immediately.
pub async fn poll_until<F, Fut>(what: &str, timeout: Duration, mut check: F) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let poll = async {
        let mut interval = POLL_INTERVAL_MS;

        loop {
            if check().await? {
                return Ok::<(), DemoError>(());
            }
            debug!("Still waiting for {}, checking again in {}ms", what, interval);

            sleep(Duration::from_millis(interval)).await;

            // Exponential backoff with max cap
            interval = (interval * 2).min(POLL_MAX_INTERVAL_MS);
        }
    };

    tokio::time::timeout(timeout, poll).await.map_err(|_| {
        DemoError::Timeout(format!("{} after {}s", what, timeout.as_secs()))
    })?
}

/// Wait until the namespace exists and is active
#[instrument(skip(client))]
pub async fn wait_for_namespace_active(
    client: &Client,
    namespace: &str,
    timeout: Duration,
) -> Result<()> {
    poll_until(
        &format!("namespace {} to become active", namespace),
        timeout,
        move || async move {
            Ok(get_namespace(client, namespace)
                .await?
                .is_some_and(|ns| is_namespace_active(&ns)))
        },
    )
    .await
}

/// Wait until the namespace has been removed entirely
#[instrument(skip(client))]
pub async fn wait_for_namespace_deleted(
    client: &Client,
    namespace: &str,
    timeout: Duration,
) -> Result<()> {
    poll_until(
        &format!("namespace {} to be deleted", namespace),
        timeout,
        move || async move { Ok(get_namespace(client, namespace).await?.is_none()) },
    )
    .await
}

/// Wait until the pod is visible through the API
#[instrument(skip(client))]
pub async fn wait_for_pod_present(
    client: &Client,
    name: &str,
    namespace: &str,
    timeout: Duration,
) -> Result<()> {
    poll_until(
        &format!("pod {}/{} to appear", namespace, name),
        timeout,
        move || async move { Ok(get_pod(client, name, namespace).await?.is_some()) },
    )
    .await
}

/// Wait until the pod has been removed
#[instrument(skip(client))]
pub async fn wait_for_pod_deleted(
    client: &Client,
    name: &str,
    namespace: &str,
    timeout: Duration,
) -> Result<()> {
    poll_until(
        &format!("pod {}/{} to be deleted", namespace, name),
        timeout,
        move || async move { Ok(get_pod(client, name, namespace).await?.is_none()) },
    )
    .await
}
