// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use crate::error::{AddonError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{api::PostParams, Api, Client, ResourceExt};
use tracing::{debug, info, instrument};

/// Create `namespace` unless it already exists.
///
/// Returns whether the namespace was created.
#[instrument(skip(client, namespace), fields(namespace = %namespace.name_any()))]
pub async fn ensure_namespace_exists(client: &Client, namespace: &Namespace) -> Result<bool> {
    let name = namespace.name_any();
    let namespaces: Api<Namespace> = Api::all(client.clone());

    match namespaces.get(&name).await {
        Ok(_) => {
            debug!("Namespace {} already exists", name);
            Ok(false)
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!("Creating namespace {}", name);
            namespaces.create(&PostParams::default(), namespace).await?;
            Ok(true)
        }
        Err(e) => Err(AddonError::NamespaceError(format!(
            "Failed to check namespace {}: {}",
            name, e
        ))),
    }
}
