// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[kube(
    group = "secrets-store.csi.x-k8s.io",
    version = "v1",
    kind = "SecretProviderClass",
    derive = "PartialEq"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct SecretProviderClassSpec {
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_objects: Option<Vec<SecretObject>>,
}

/// Kubernetes Secret synced from the mounted provider objects
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretObject {
    pub secret_name: String,
    #[serde(rename = "type")]
    pub secret_type: String,
    pub data: Vec<SecretObjectData>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretObjectData {
    pub object_name: String,
    pub key: String,
}

/// Entry of the AWS provider `objects` parameter
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderObject {
    pub object_name: String,
    pub object_type: String,
}
