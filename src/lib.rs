// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod addon;
pub mod apply;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod graph;
pub mod kubernetes;
pub mod manifests;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use addon::PixieAddOn;
pub use context::{ClusterContext, GraphContext};
