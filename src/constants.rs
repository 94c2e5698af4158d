// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Command line defaults
pub mod defaults {
    pub const NAMESPACE: &str = "samples";
    pub const POD_NAME: &str = "helloworld";
    pub const FILTER_LABEL: &str = "k8s-app=kube-dns";
}

/// The single container every demo pod runs
pub mod container {
    pub const NAME: &str = "helloworld";
    pub const IMAGE: &str = "k8s.gcr.io/echoserver:1.4";
}

/// Environment variables controlling how the demo waits between steps
pub mod env {
    /// `readiness` (default) or `fixed`
    pub const WAIT_MODE: &str = "HELLO_KUBE_WAIT_MODE";
    pub const STEP_DELAY_SECS: &str = "HELLO_KUBE_STEP_DELAY_SECS";
    pub const WAIT_TIMEOUT_SECS: &str = "HELLO_KUBE_WAIT_TIMEOUT_SECS";
}

/// Timing for the settle points between steps
pub mod wait {
    /// Delay used at each settle point in fixed mode
    pub const STEP_DELAY_SECS: u64 = 3;
    /// Upper bound for a single readiness wait
    pub const TIMEOUT_SECS: u64 = 120;
    /// Initial polling interval in milliseconds
    pub const POLL_INTERVAL_MS: u64 = 500;
    /// Maximum polling interval in milliseconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_MS: u64 = 4_000;
}
