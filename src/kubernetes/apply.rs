// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::FIELD_MANAGER;
use crate::error::{AddonError, Result};
use k8s_openapi::NamespaceResourceScope;
use kube::{
    api::{Patch, PatchParams},
    Api, Client, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{info, instrument};

/// Create or update a namespaced object with server-side apply
#[instrument(skip(client, object), fields(name = %object.name_any()))]
pub async fn apply_namespaced<K>(client: &Client, object: &K) -> Result<()>
where
    K: Resource<Scope = NamespaceResourceScope> + Clone + Debug + Serialize + DeserializeOwned,
    K::DynamicType: Default,
{
    let dt = K::DynamicType::default();
    let kind = K::kind(&dt);
    let name = object
        .meta()
        .name
        .clone()
        .ok_or_else(|| AddonError::ManifestError(format!("{} has no name", kind)))?;
    let namespace = object
        .meta()
        .namespace
        .clone()
        .ok_or_else(|| AddonError::ManifestError(format!("{} has no namespace", name)))?;

    let api: Api<K> = Api::namespaced(client.clone(), &namespace);
    let pp = PatchParams::apply(FIELD_MANAGER).force();
    api.patch(&name, &pp, &Patch::Apply(object)).await?;

    info!("Applied {} {}/{}", kind, namespace, name);
    Ok(())
}
