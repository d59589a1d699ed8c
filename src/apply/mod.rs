// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Applies a declared resource graph to a cluster.

pub mod helm;

pub use helm::{HelmCli, HelmInstaller};

use crate::error::{AddonError, Result};
use crate::graph::{Resource, ResourceGraph};
use crate::kubernetes::{apply_namespaced, ensure_namespace_exists};
use kube::Client;
use tracing::{info, instrument};

/// Walks a [`ResourceGraph`] in dependency order and applies every resource.
///
/// The first failure stops the walk; nothing is retried or rolled back.
pub struct Applier<H> {
    client: Client,
    helm: H,
}

impl<H: HelmInstaller> Applier<H> {
    pub fn new(client: Client, helm: H) -> Self {
        Self { client, helm }
    }

    #[instrument(skip(self, graph), fields(resources = graph.len()))]
    pub async fn apply(&self, graph: &ResourceGraph) -> Result<()> {
        for id in graph.topological_order() {
            let resource = graph
                .get(id)
                .ok_or_else(|| AddonError::UnknownResource(id.to_string()))?;

            info!("Applying {} '{}'", resource.kind(), id);
            self.apply_resource(resource)
                .await
                .map_err(|e| AddonError::ApplyError {
                    resource: id.to_string(),
                    source: Box::new(e),
                })?;
        }

        info!("Applied {} resources", graph.len());
        Ok(())
    }

    async fn apply_resource(&self, resource: &Resource) -> Result<()> {
        match resource {
            Resource::Namespace(ns) => {
                ensure_namespace_exists(&self.client, ns).await?;
                Ok(())
            }
            Resource::ServiceAccount(sa) => apply_namespaced(&self.client, sa).await,
            Resource::SecretProviderClass(spc) => {
                apply_namespaced(&self.client, spc.as_ref()).await
            }
            Resource::Deployment(deployment) => {
                apply_namespaced(&self.client, deployment.as_ref()).await
            }
            Resource::HelmRelease(release) => self.helm.upgrade_install(release).await,
        }
    }
}
