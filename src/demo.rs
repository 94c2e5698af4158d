// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The fixed sequence of API calls the program walks through.
//!
//! Every step runs to completion before the next starts and the first
//! failure ends the run. Nothing created earlier is cleaned up on failure.

use crate::config::{Config, WaitMode};
use crate::error::Result;
use crate::kubernetes::{namespaces, pods, wait};
use crate::output::{heading, timestamp};
use kube::{Client, ResourceExt};
use std::io::Write;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Conditions the demo waits for after mutating the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settle {
    NamespaceActive,
    PodPresent,
    PodDeleted,
    NamespaceDeleted,
}

/// Runs the demo against a cluster, writing progress lines to `out`
pub struct Demo<W: Write> {
    client: Client,
    config: Config,
    out: W,
}

impl<W: Write> Demo<W> {
    pub fn new(client: Client, config: Config, out: W) -> Self {
        Self {
            client,
            config,
            out,
        }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    #[instrument(skip(self), fields(namespace = %self.config.namespace, pod = %self.config.pod_name))]
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting demo with wait mode {:?}", self.config.wait_mode);

        self.list_namespaces().await?;
        self.create_namespace().await?;
        self.settle(Settle::NamespaceActive).await?;
        self.create_pod().await?;
        self.settle(Settle::PodPresent).await?;
        self.list_pods_with_labels().await?;
        self.delete_pod().await?;
        self.settle(Settle::PodDeleted).await?;
        self.delete_namespace().await?;
        self.settle(Settle::NamespaceDeleted).await?;
        self.list_namespaces().await?;

        info!("Demo finished");
        Ok(())
    }

    async fn list_namespaces(&mut self) -> Result<()> {
        let namespaces = namespaces::list_namespaces(&self.client).await?;
        writeln!(
            self.out,
            "{}",
            heading(&format!("Found {} namespaces", namespaces.len()))
        )?;
        for ns in &namespaces {
            writeln!(self.out, "{}", ns.name_any())?;
        }
        Ok(())
    }

    async fn create_namespace(&mut self) -> Result<()> {
        let name = &self.config.namespace;
        writeln!(
            self.out,
            "{}",
            heading(&format!("Creating new namespace {} in the cluster", name))
        )?;
        let ns = namespaces::create_namespace(&self.client, name).await?;
        writeln!(
            self.out,
            "{}",
            heading(&format!(
                "Namespace {} created on {}",
                ns.name_any(),
                timestamp(ns.metadata.creation_timestamp.as_ref())
            ))
        )?;
        Ok(())
    }

    async fn create_pod(&mut self) -> Result<()> {
        let (name, namespace) = (&self.config.pod_name, &self.config.namespace);
        writeln!(
            self.out,
            "{}",
            heading(&format!("Creating {} pod in namespace {}", name, namespace))
        )?;
        let labels = self.config.filter_label.labels();
        let pod = pods::create_pod(&self.client, name, namespace, labels).await?;
        writeln!(
            self.out,
            "{}",
            heading(&format!(
                "Pod {} created on {}",
                pod.name_any(),
                timestamp(pod.metadata.creation_timestamp.as_ref())
            ))
        )?;
        Ok(())
    }

    async fn list_pods_with_labels(&mut self) -> Result<()> {
        let filter = &self.config.filter_label;
        writeln!(
            self.out,
            "{}",
            heading(&format!(
                "Listing pods in all namespaces with label {}",
                filter
            ))
        )?;
        for pod in pods::list_pods_with_labels(&self.client, filter).await? {
            writeln!(
                self.out,
                "Pod {} in namespace {}",
                pod.name_any(),
                pod.namespace().unwrap_or_default()
            )?;
        }
        Ok(())
    }

    async fn delete_pod(&mut self) -> Result<()> {
        let (name, namespace) = (&self.config.pod_name, &self.config.namespace);
        writeln!(
            self.out,
            "{}",
            heading(&format!("Deleting {} pod in namespace {}", name, namespace))
        )?;
        pods::delete_pod(&self.client, name, namespace).await?;
        writeln!(self.out, "{}", heading("Pod deleted"))?;
        Ok(())
    }

    async fn delete_namespace(&mut self) -> Result<()> {
        let name = &self.config.namespace;
        writeln!(self.out, "{}", heading(&format!("Deleting namespace {}", name)))?;
        namespaces::delete_namespace(&self.client, name).await?;
        writeln!(self.out, "{}", heading(&format!("Namespace {} deleted", name)))?;
        Ok(())
    }

    async fn settle(&self, settle: Settle) -> Result<()> {
        let timeout = match self.config.wait_mode {
            WaitMode::Fixed { delay } => {
                debug!("Sleeping {:?} after {:?}", delay, settle);
                sleep(delay).await;
                return Ok(());
            }
            WaitMode::Readiness { timeout } => timeout,
        };

        let client = &self.client;
        let (name, namespace) = (&self.config.pod_name, &self.config.namespace);
        match settle {
            Settle::NamespaceActive => {
                wait::wait_for_namespace_active(client, namespace, timeout).await
            }
            Settle::PodPresent => wait::wait_for_pod_present(client, name, namespace, timeout).await,
            Settle::PodDeleted => wait::wait_for_pod_deleted(client, name, namespace, timeout).await,
            Settle::NamespaceDeleted => {
                wait::wait_for_namespace_deleted(client, namespace, timeout).await
            }
        }
    }
}
