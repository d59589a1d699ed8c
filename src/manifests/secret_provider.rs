// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::secret;
use crate::error::{AddonError, Result};
use crate::types::secret_provider_class::{
    ProviderObject, SecretObject, SecretObjectData, SecretProviderClass, SecretProviderClassSpec,
};
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

/// Build the SecretProviderClass that syncs the Secrets Manager secret named
/// `secret_name` into the `pl-deploy-secrets` Kubernetes secret.
///
/// The secret is looked up by name, without a version pin. Its value must be
/// the bare deploy key.
pub fn deploy_key_provider_class(
    namespace: &str,
    secret_name: &str,
) -> Result<SecretProviderClass> {
    let objects = vec![ProviderObject {
        object_name: secret_name.to_string(),
        object_type: "secretsmanager".to_string(),
    }];
    let objects = serde_yaml::to_string(&objects).map_err(|e| {
        AddonError::ManifestError(format!("Failed to render provider objects: {}", e))
    })?;

    let spec = SecretProviderClassSpec {
        provider: "aws".to_string(),
        parameters: Some(BTreeMap::from([("objects".to_string(), objects)])),
        secret_objects: Some(vec![SecretObject {
            secret_name: secret::KUBERNETES_SECRET.to_string(),
            secret_type: "Opaque".to_string(),
            data: vec![SecretObjectData {
                object_name: secret_name.to_string(),
                key: secret::DEPLOY_KEY.to_string(),
            }],
        }]),
    };

    Ok(SecretProviderClass {
        metadata: ObjectMeta {
            name: Some(secret::PROVIDER_CLASS.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec,
    })
}
