// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource declarations and the dependency graph between them.

pub mod dag;
pub mod plan;
pub mod resource;

pub use dag::ResourceGraph;
pub use plan::{Plan, PlanStep};
pub use resource::{Manifest, Resource, ResourceId, ResourceKind};
