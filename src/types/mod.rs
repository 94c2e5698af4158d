// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

pub mod label_filter;

pub use label_filter::LabelFilter;
