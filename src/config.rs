// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as env_keys, wait};
use crate::types::LabelFilter;
use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// How the demo waits after each mutating step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitMode {
    /// Poll the API until the change is observable, giving up after `timeout`
    Readiness { timeout: Duration },
    /// Sleep for a fixed delay without checking anything
    Fixed { delay: Duration },
}

impl Default for WaitMode {
    fn default() -> Self {
        WaitMode::Readiness {
            timeout: Duration::from_secs(wait::TIMEOUT_SECS),
        }
    }
}

impl WaitMode {
    /// Load the wait mode from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            env::var(env_keys::WAIT_MODE).ok().as_deref(),
            env::var(env_keys::STEP_DELAY_SECS).ok().as_deref(),
            env::var(env_keys::WAIT_TIMEOUT_SECS).ok().as_deref(),
        )
    }

    fn from_values(mode: Option<&str>, delay: Option<&str>, timeout: Option<&str>) -> Result<Self> {
        match mode.map(str::trim).unwrap_or("readiness") {
            "readiness" => {
                let secs = parse_secs(timeout, env_keys::WAIT_TIMEOUT_SECS, wait::TIMEOUT_SECS)?;
                Ok(WaitMode::Readiness {
                    timeout: Duration::from_secs(secs),
                })
            }
            "fixed" => {
                let secs = parse_secs(delay, env_keys::STEP_DELAY_SECS, wait::STEP_DELAY_SECS)?;
                Ok(WaitMode::Fixed {
                    delay: Duration::from_secs(secs),
                })
            }
            other => bail!(
                "{} must be 'readiness' or 'fixed', got '{}'",
                env_keys::WAIT_MODE,
                other
            ),
        }
    }
}

fn parse_secs(value: Option<&str>, name: &str, default: u64) -> Result<u64> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{} must be a whole number of seconds, got '{}'", name, v)),
        None => Ok(default),
    }
}

/// Resolved configuration for one demo run
#[derive(Debug, Clone)]
pub struct Config {
    /// Kubeconfig to load; `None` infers the client configuration
    pub kubeconfig: Option<PathBuf>,
    pub namespace: String,
    pub pod_name: String,
    pub filter_label: LabelFilter,
    pub wait_mode: WaitMode,
}

impl Config {
    /// Combine the command line values with the wait mode from the environment
    pub fn new(
        kubeconfig: Option<PathBuf>,
        namespace: String,
        pod_name: String,
        filter_label: LabelFilter,
    ) -> Result<Self> {
        Ok(Config {
            kubeconfig: kubeconfig.or_else(default_kubeconfig_path),
            namespace,
            pod_name,
            filter_label,
            wait_mode: WaitMode::from_env()?,
        })
    }
}

/// `$HOME/.kube/config`, if a home directory can be determined
pub fn default_kubeconfig_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".kube").join("config"))
}
