// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management

use crate::error::Result;
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{DeleteParams, ListParams, ObjectMeta, PostParams},
    Api, Client,
};
use tracing::{debug, info, instrument};

/// List every namespace in the cluster
#[instrument(skip(client))]
pub async fn list_namespaces(client: &Client) -> Result<Vec<Namespace>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let list = namespaces.list(&ListParams::default()).await?;
    debug!("Listed {} namespaces", list.items.len());
    Ok(list.items)
}

/// Create a namespace, failing if it already exists
#[instrument(skip(client))]
pub async fn create_namespace(client: &Client, namespace: &str) -> Result<Namespace> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let ns = Namespace {
        metadata: ObjectMeta {
            name: Some(namespace.to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    let created = namespaces.create(&PostParams::default(), &ns).await?;
    info!("Namespace {} created", namespace);
    Ok(created)
}

/// Fetch a namespace, `None` when it does not exist
pub async fn get_namespace(client: &Client, namespace: &str) -> Result<Option<Namespace>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    Ok(namespaces.get_opt(namespace).await?)
}

/// Request deletion of a namespace and everything in it
#[instrument(skip(client))]
pub async fn delete_namespace(client: &Client, namespace: &str) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    namespaces.delete(namespace, &DeleteParams::default()).await?;
    info!("Namespace {} deletion requested", namespace);
    Ok(())
}

/// True when the namespace exists and is not being torn down
pub fn is_namespace_active(namespace: &Namespace) -> bool {
    namespace.metadata.deletion_timestamp.is_none()
        && namespace
            .status
            .as_ref()
            .and_then(|s| s.phase.as_deref())
            .map_or(true, |phase| phase == "Active")
}
