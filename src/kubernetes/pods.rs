// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod management

use crate::constants::container;
use crate::error::Result;
use crate::types::LabelFilter;
use k8s_openapi::api::core::v1::{Container, Pod, PodSpec};
use kube::{
    api::{DeleteParams, ListParams, ObjectMeta, PostParams},
    Api, Client,
};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Build the single-container demo pod
pub fn build_pod(name: &str, namespace: &str, labels: BTreeMap<String, String>) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            labels: Some(labels),
            ..Default::default()
        },
        spec: Some(PodSpec {
            containers: vec![Container {
                name: container::NAME.to_string(),
                image: Some(container::IMAGE.to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Create the demo pod in `namespace`
#[instrument(skip(client, labels))]
pub async fn create_pod(
    client: &Client,
    name: &str,
    namespace: &str,
    labels: BTreeMap<String, String>,
) -> Result<Pod> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let created = pods
        .create(&PostParams::default(), &build_pod(name, namespace, labels))
        .await?;
    info!("Pod {}/{} created", namespace, name);
    Ok(created)
}

/// List pods in all namespaces matching the label filter
#[instrument(skip(client), fields(selector = %filter))]
pub async fn list_pods_with_labels(client: &Client, filter: &LabelFilter) -> Result<Vec<Pod>> {
    let pods: Api<Pod> = Api::all(client.clone());
    let lp = ListParams::default().labels(&filter.selector());
    let list = pods.list(&lp).await?;
    debug!("Listed {} pods", list.items.len());
    Ok(list.items)
}

/// Fetch a pod, `None` when it does not exist
pub async fn get_pod(client: &Client, name: &str, namespace: &str) -> Result<Option<Pod>> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    Ok(pods.get_opt(name).await?)
}

/// Delete a pod by name
#[instrument(skip(client))]
pub async fn delete_pod(client: &Client, name: &str, namespace: &str) -> Result<()> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    pods.delete(name, &DeleteParams::default()).await?;
    info!("Pod {}/{} deletion requested", namespace, name);
    Ok(())
}
