// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, namespace and pod management,
//! and readiness polling.

pub mod client;
pub mod namespaces;
pub mod pods;
pub mod wait;

pub use client::create_client;
