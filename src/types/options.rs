// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! User-facing add-on options and their merge over the documented defaults.

use crate::constants::defaults;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Level of data that scripts executed on the cluster may access
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataAccess {
    #[default]
    Full,
    Restricted,
    #[serde(rename = "PIIRestricted")]
    PiiRestricted,
}

impl fmt::Display for DataAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataAccess::Full => write!(f, "Full"),
            DataAccess::Restricted => write!(f, "Restricted"),
            DataAccess::PiiRestricted => write!(f, "PIIRestricted"),
        }
    }
}

/// Where the Pixie deploy key comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeployKeySource {
    /// Key passed to the chart as a plain value
    Literal(String),
    /// Key held in AWS Secrets Manager, looked up by name
    SecretManager { secret_name: String },
}

impl DeployKeySource {
    /// The Secrets Manager secret name, if the key is sourced from there
    pub fn secret_name(&self) -> Option<&str> {
        match self {
            DeployKeySource::SecretManager { secret_name } => Some(secret_name),
            DeployKeySource::Literal(_) => None,
        }
    }
}

/// Partial add-on options as supplied by the caller
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddonProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Address of the Pixie Cloud instance to connect to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_addr: Option<String>,
    /// Deploy key from Pixie Cloud, links the deployment to an org
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_key: Option<String>,
    /// Name of a Secrets Manager secret holding the deploy key. Takes
    /// precedence over `deploy_key` when non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_key_secret_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    /// Namespace of a self-hosted cloud without DNS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_cloud_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_etcd_operator: Option<bool>,
    /// Patches keyed by the name of the Kubernetes resource they apply to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patches: Option<BTreeMap<String, String>>,
    /// Memory limit of the PEMs (data collectors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pem_memory_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access: Option<DataAccess>,
    /// Image of the pod that keeps the deploy key secret mounted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_pod_image: Option<String>,
    /// IAM role allowed to read the deploy key secret, bound to the secret
    /// pod's service account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_role_arn: Option<String>,
    /// Extra Helm values, overridden by the typed options above
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Fully merged add-on options
#[derive(Clone, Debug, PartialEq)]
pub struct AddonOptions {
    pub repository: String,
    pub release: String,
    pub chart: String,
    pub version: String,
    pub namespace: String,
    pub cloud_addr: String,
    pub deploy_key: DeployKeySource,
    pub cluster_name: Option<String>,
    pub dev_cloud_namespace: Option<String>,
    pub use_etcd_operator: bool,
    pub patches: Option<BTreeMap<String, String>>,
    pub pem_memory_limit: String,
    pub data_access: DataAccess,
    pub secret_pod_image: String,
    pub service_account_role_arn: Option<String>,
    pub values: serde_json::Map<String, serde_json::Value>,
}

impl Default for AddonOptions {
    fn default() -> Self {
        Self {
            repository: defaults::REPOSITORY.to_string(),
            release: defaults::RELEASE.to_string(),
            chart: defaults::CHART.to_string(),
            version: defaults::VERSION.to_string(),
            namespace: defaults::NAMESPACE.to_string(),
            cloud_addr: defaults::CLOUD_ADDR.to_string(),
            deploy_key: DeployKeySource::Literal(String::new()),
            cluster_name: None,
            dev_cloud_namespace: None,
            use_etcd_operator: false,
            patches: None,
            pem_memory_limit: defaults::PEM_MEMORY_LIMIT.to_string(),
            data_access: DataAccess::Full,
            secret_pod_image: defaults::SECRET_POD_IMAGE.to_string(),
            service_account_role_arn: None,
            values: serde_json::Map::new(),
        }
    }
}

impl AddonOptions {
    /// Merge the given props over the documented defaults
    pub fn from_props(props: AddonProps) -> Self {
        merge(&AddonOptions::default(), props)
    }

    /// Whether the deploy key has to be materialized from Secrets Manager
    pub fn uses_secret_manager(&self) -> bool {
        self.deploy_key.secret_name().is_some()
    }
}

/// Overlay `overrides` onto `defaults`, field by field.
///
/// A non-empty `deploy_key_secret_name` wins over any literal key. An empty
/// one is treated as absent.
pub fn merge(defaults: &AddonOptions, overrides: AddonProps) -> AddonOptions {
    let deploy_key = match (overrides.deploy_key_secret_name, overrides.deploy_key) {
        (Some(secret_name), _) if !secret_name.is_empty() => {
            DeployKeySource::SecretManager { secret_name }
        }
        (_, Some(key)) => DeployKeySource::Literal(key),
        (_, None) => defaults.deploy_key.clone(),
    };

    AddonOptions {
        repository: overrides
            .repository
            .unwrap_or_else(|| defaults.repository.clone()),
        release: overrides.release.unwrap_or_else(|| defaults.release.clone()),
        chart: overrides.chart.unwrap_or_else(|| defaults.chart.clone()),
        version: overrides.version.unwrap_or_else(|| defaults.version.clone()),
        namespace: overrides
            .namespace
            .unwrap_or_else(|| defaults.namespace.clone()),
        cloud_addr: overrides
            .cloud_addr
            .unwrap_or_else(|| defaults.cloud_addr.clone()),
        deploy_key,
        cluster_name: overrides
            .cluster_name
            .or_else(|| defaults.cluster_name.clone()),
        dev_cloud_namespace: overrides
            .dev_cloud_namespace
            .or_else(|| defaults.dev_cloud_namespace.clone()),
        use_etcd_operator: overrides
            .use_etcd_operator
            .unwrap_or(defaults.use_etcd_operator),
        patches: overrides.patches.or_else(|| defaults.patches.clone()),
        pem_memory_limit: overrides
            .pem_memory_limit
            .unwrap_or_else(|| defaults.pem_memory_limit.clone()),
        data_access: overrides.data_access.unwrap_or(defaults.data_access),
        secret_pod_image: overrides
            .secret_pod_image
            .unwrap_or_else(|| defaults.secret_pod_image.clone()),
        service_account_role_arn: overrides
            .service_account_role_arn
            .or_else(|| defaults.service_account_role_arn.clone()),
        values: overrides.values.unwrap_or_else(|| defaults.values.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_empty_props_yields_defaults() {
        let options = AddonOptions::from_props(AddonProps::default());

        assert_eq!(options, AddonOptions::default());
        assert_eq!(options.namespace, "pl");
        assert_eq!(options.cloud_addr, "withpixie.ai:443");
        assert_eq!(options.pem_memory_limit, "2Gi");
        assert_eq!(options.data_access, DataAccess::Full);
        assert_eq!(options.deploy_key, DeployKeySource::Literal(String::new()));
        assert!(!options.use_etcd_operator);
    }

    #[test]
    fn test_merge_overrides_version_only() {
        let props = AddonProps {
            version: Some("0.0.22".to_string()),
            ..Default::default()
        };

        let options = AddonOptions::from_props(props);

        assert_eq!(options.version, "0.0.22");
        assert_eq!(
            options,
            AddonOptions {
                version: "0.0.22".to_string(),
                ..AddonOptions::default()
            }
        );
    }

    #[test]
    fn test_merge_keeps_optional_fields_unset() {
        let options = AddonOptions::from_props(AddonProps::default());

        assert!(options.cluster_name.is_none());
        assert!(options.dev_cloud_namespace.is_none());
        assert!(options.patches.is_none());
        assert!(options.service_account_role_arn.is_none());
    }

    #[test]
    fn test_merge_over_custom_defaults() {
        let defaults = AddonOptions {
            namespace: "observability".to_string(),
            cluster_name: Some("base".to_string()),
            ..AddonOptions::default()
        };
        let props = AddonProps {
            cluster_name: Some("prod".to_string()),
            ..Default::default()
        };

        let options = merge(&defaults, props);

        assert_eq!(options.namespace, "observability");
        assert_eq!(options.cluster_name.as_deref(), Some("prod"));
    }

    #[test]
    fn test_secret_name_takes_precedence_over_literal_key() {
        let props = AddonProps {
            deploy_key: Some("px-dep-literal".to_string()),
            deploy_key_secret_name: Some("pixie-deploy-key".to_string()),
            ..Default::default()
        };

        let options = AddonOptions::from_props(props);

        assert_eq!(
            options.deploy_key,
            DeployKeySource::SecretManager {
                secret_name: "pixie-deploy-key".to_string()
            }
        );
        assert!(options.uses_secret_manager());
    }

    #[test]
    fn test_empty_secret_name_falls_back_to_literal_key() {
        let props = AddonProps {
            deploy_key: Some("px-dep-literal".to_string()),
            deploy_key_secret_name: Some(String::new()),
            ..Default::default()
        };

        let options = AddonOptions::from_props(props);

        assert_eq!(
            options.deploy_key,
            DeployKeySource::Literal("px-dep-literal".to_string())
        );
        assert!(!options.uses_secret_manager());
    }

    #[test]
    fn test_props_deserialize_from_camel_case_yaml() {
        let yaml = r#"
version: 0.0.22
cloudAddr: dev.withpixie.dev:443
deployKeySecretName: pixie-deploy-key
useEtcdOperator: true
dataAccess: PIIRestricted
serviceAccountRoleArn: arn:aws:iam::123456789012:role/pixie-deploy-key
patches:
  vizier-pem: '{"spec":{"template":{"spec":{"nodeSelector":{"pixie":"allowed"}}}}}'
"#;

        let props: AddonProps = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(props.version.as_deref(), Some("0.0.22"));
        assert_eq!(props.cloud_addr.as_deref(), Some("dev.withpixie.dev:443"));
        assert_eq!(props.use_etcd_operator, Some(true));
        assert_eq!(props.data_access, Some(DataAccess::PiiRestricted));
        assert_eq!(
            props.service_account_role_arn.as_deref(),
            Some("arn:aws:iam::123456789012:role/pixie-deploy-key")
        );
        assert!(props.patches.unwrap().contains_key("vizier-pem"));
    }

    #[test]
    fn test_props_reject_unknown_fields() {
        let result: Result<AddonProps, _> = serde_yaml::from_str("deployKeyName: typo\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_data_access_display_matches_wire_format() {
        assert_eq!(DataAccess::Full.to_string(), "Full");
        assert_eq!(DataAccess::Restricted.to_string(), "Restricted");
        assert_eq!(DataAccess::PiiRestricted.to_string(), "PIIRestricted");
        assert_eq!(
            serde_json::to_value(DataAccess::PiiRestricted).unwrap(),
            serde_json::json!("PIIRestricted")
        );
    }
}
