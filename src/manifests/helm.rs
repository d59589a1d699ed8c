// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Helm release declaration for the Pixie operator chart.

use crate::types::{AddonOptions, DeployKeySource};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HelmRelease {
    pub chart: String,
    pub release: String,
    pub repository: String,
    pub namespace: String,
    pub version: String,
    pub values: Map<String, Value>,
}

impl HelmRelease {
    pub fn from_options(options: &AddonOptions) -> Self {
        Self {
            chart: options.chart.clone(),
            release: options.release.clone(),
            repository: options.repository.clone(),
            namespace: options.namespace.clone(),
            version: options.version.clone(),
            values: helm_values(options),
        }
    }
}

/// Build the values payload for the chart.
///
/// Options left unset are omitted so the chart defaults apply. The deploy key
/// is only passed when it is a literal; otherwise the chart reads it from the
/// synced Kubernetes secret.
pub fn helm_values(options: &AddonOptions) -> Map<String, Value> {
    let mut values = options.values.clone();

    if let DeployKeySource::Literal(key) = &options.deploy_key {
        values.insert("deployKey".to_string(), Value::from(key.as_str()));
    }
    values.insert(
        "cloudAddr".to_string(),
        Value::from(options.cloud_addr.as_str()),
    );
    values.insert(
        "useEtcdOperator".to_string(),
        Value::Bool(options.use_etcd_operator),
    );
    if let Some(cluster_name) = &options.cluster_name {
        values.insert(
            "clusterName".to_string(),
            Value::from(cluster_name.as_str()),
        );
    }
    if let Some(dev_cloud_namespace) = &options.dev_cloud_namespace {
        values.insert(
            "devCloudNamespace".to_string(),
            Value::from(dev_cloud_namespace.as_str()),
        );
    }
    if let Some(patches) = &options.patches {
        let patches = patches
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
            .collect();
        values.insert("patches".to_string(), Value::Object(patches));
    }
    values.insert(
        "pemMemoryLimit".to_string(),
        Value::from(options.pem_memory_limit.as_str()),
    );
    values.insert(
        "dataAccess".to_string(),
        Value::from(options.data_access.to_string()),
    );

    values
}
