// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The cluster capabilities an add-on declares its resources through.

use crate::error::Result;
use crate::graph::{Manifest, Resource, ResourceGraph, ResourceId};
use crate::manifests::{self, HelmRelease};
use tracing::debug;

/// Declaration-time view of the target cluster.
///
/// Nothing is applied here: implementations only record what should exist and
/// in which order. Applying is left to the caller.
pub trait ClusterContext {
    /// Declare the namespace `name`, reusing an earlier declaration of it
    fn create_namespace(&mut self, name: &str) -> Result<ResourceId>;

    /// Declare a service account, optionally bound to an IAM role (IRSA)
    fn add_service_account(
        &mut self,
        name: &str,
        namespace: &str,
        role_arn: Option<&str>,
    ) -> Result<ResourceId>;

    fn add_manifest(&mut self, id: &str, manifest: Manifest) -> Result<ResourceId>;

    fn add_helm_chart(&mut self, id: &str, release: HelmRelease) -> Result<ResourceId>;

    /// Require `dependent` to be applied after `dependency`
    fn add_dependency(&mut self, dependent: &ResourceId, dependency: &ResourceId) -> Result<()>;
}

/// Context that records every declaration into a [`ResourceGraph`]
#[derive(Debug, Default)]
pub struct GraphContext {
    graph: ResourceGraph,
}

impl GraphContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &ResourceGraph {
        &self.graph
    }

    pub fn into_graph(self) -> ResourceGraph {
        self.graph
    }
}

impl ClusterContext for GraphContext {
    fn create_namespace(&mut self, name: &str) -> Result<ResourceId> {
        let id = ResourceId::namespace(name);
        if self.graph.contains(&id) {
            debug!("Namespace {} already declared, reusing it", name);
            return Ok(id);
        }
        self.graph
            .add_resource(id, Resource::Namespace(manifests::namespace(name)))
    }

    fn add_service_account(
        &mut self,
        name: &str,
        namespace: &str,
        role_arn: Option<&str>,
    ) -> Result<ResourceId> {
        let sa = manifests::service_account(name, namespace, role_arn);
        self.graph.add_resource(name, Resource::ServiceAccount(sa))
    }

    fn add_manifest(&mut self, id: &str, manifest: Manifest) -> Result<ResourceId> {
        self.graph.add_resource(id, manifest.into())
    }

    fn add_helm_chart(&mut self, id: &str, release: HelmRelease) -> Result<ResourceId> {
        self.graph.add_resource(id, Resource::HelmRelease(release))
    }

    fn add_dependency(&mut self, dependent: &ResourceId, dependency: &ResourceId) -> Result<()> {
        self.graph.add_dependency(dependent, dependency)
    }
}
