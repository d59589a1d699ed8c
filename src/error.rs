// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddonError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid manifest: {0}")]
    ManifestError(String),

    #[error("Resource '{0}' is already declared")]
    DuplicateResource(String),

    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Dependency '{dependent}' -> '{dependency}' would create a cycle")]
    DependencyCycle { dependent: String, dependency: String },

    #[error("Namespace creation failed: {0}")]
    NamespaceError(String),

    #[error("Helm release failed: {0}")]
    HelmError(String),

    #[error("Applying '{resource}' failed: {source}")]
    ApplyError {
        resource: String,
        #[source]
        source: Box<AddonError>,
    },
}

pub type Result<T> = std::result::Result<T, AddonError>;
