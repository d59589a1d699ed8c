// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource declarations that make up an add-on.

use crate::error::Result;
use crate::manifests::HelmRelease;
use crate::types::SecretProviderClass;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Namespace, ServiceAccount};
use kube::ResourceExt;
use serde::Serialize;
use std::fmt;

/// Stable id of a declared resource
#[derive(Serialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the namespace `name`. Namespace names are DNS labels, so the
    /// `namespace/` prefix keeps them apart from every other id.
    pub fn namespace(name: &str) -> Self {
        Self(format!("namespace/{}", name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Namespace,
    ServiceAccount,
    SecretProviderClass,
    Deployment,
    HelmRelease,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Raw Kubernetes manifests the add-on applies to the cluster
#[derive(Clone, Debug, PartialEq)]
pub enum Manifest {
    SecretProviderClass(Box<SecretProviderClass>),
    Deployment(Box<Deployment>),
}

impl From<SecretProviderClass> for Manifest {
    fn from(spc: SecretProviderClass) -> Self {
        Manifest::SecretProviderClass(Box::new(spc))
    }
}

impl From<Deployment> for Manifest {
    fn from(deployment: Deployment) -> Self {
        Manifest::Deployment(Box::new(deployment))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Resource {
    Namespace(Namespace),
    ServiceAccount(ServiceAccount),
    SecretProviderClass(Box<SecretProviderClass>),
    Deployment(Box<Deployment>),
    HelmRelease(HelmRelease),
}

impl From<Manifest> for Resource {
    fn from(manifest: Manifest) -> Self {
        match manifest {
            Manifest::SecretProviderClass(spc) => Resource::SecretProviderClass(spc),
            Manifest::Deployment(deployment) => Resource::Deployment(deployment),
        }
    }
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Namespace(_) => ResourceKind::Namespace,
            Resource::ServiceAccount(_) => ResourceKind::ServiceAccount,
            Resource::SecretProviderClass(_) => ResourceKind::SecretProviderClass,
            Resource::Deployment(_) => ResourceKind::Deployment,
            Resource::HelmRelease(_) => ResourceKind::HelmRelease,
        }
    }

    /// Name of the object in the cluster (release name for Helm releases)
    pub fn name(&self) -> String {
        match self {
            Resource::Namespace(ns) => ns.name_any(),
            Resource::ServiceAccount(sa) => sa.name_any(),
            Resource::SecretProviderClass(spc) => spc.name_any(),
            Resource::Deployment(deployment) => deployment.name_any(),
            Resource::HelmRelease(release) => release.release.clone(),
        }
    }

    /// Render the declaration as it will be handed to the apply engine
    pub fn to_manifest(&self) -> Result<serde_json::Value> {
        let value = match self {
            Resource::Namespace(ns) => serde_json::to_value(ns)?,
            Resource::ServiceAccount(sa) => serde_json::to_value(sa)?,
            Resource::SecretProviderClass(spc) => serde_json::to_value(spc)?,
            Resource::Deployment(deployment) => serde_json::to_value(deployment)?,
            Resource::HelmRelease(release) => serde_json::to_value(release)?,
        };
        Ok(value)
    }
}
