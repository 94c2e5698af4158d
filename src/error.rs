// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Invalid label filter: {0}")]
    InvalidLabelFilter(String),

    #[error("Timed out waiting: {0}")]
    Timeout(String),

    #[error("Failed to write output: {0}")]
    OutputError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;
