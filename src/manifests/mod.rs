// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Builders for the Kubernetes objects and Helm release the add-on declares.

pub mod helm;
pub mod secret_pod;
pub mod secret_provider;

pub use helm::{helm_values, HelmRelease};
pub use secret_pod::secret_pod_deployment;
pub use secret_provider::deploy_key_provider_class;

use crate::constants::annotations;
use k8s_openapi::api::core::v1::{Namespace, ServiceAccount};
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

pub fn namespace(name: &str) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Service account in `namespace`. With `role_arn` set, EKS binds it to that
/// IAM role (IRSA).
pub fn service_account(name: &str, namespace: &str, role_arn: Option<&str>) -> ServiceAccount {
    let annotations = role_arn.map(|arn| {
        BTreeMap::from([(annotations::IRSA_ROLE_ARN.to_string(), arn.to_string())])
    });

    ServiceAccount {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            annotations,
            ..Default::default()
        },
        ..Default::default()
    }
}
