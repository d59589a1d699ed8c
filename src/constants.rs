// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Name of the add-on, used for logging
pub const ADDON_NAME: &str = "pixie-eks-blueprint-addon";

/// The field manager name used for server-side apply
pub const FIELD_MANAGER: &str = "pixie-addon";

/// Kubernetes annotation keys
pub mod annotations {
    /// IAM role an EKS service account assumes (IRSA)
    pub const IRSA_ROLE_ARN: &str = "eks.amazonaws.com/role-arn";
}

/// Documented defaults for the add-on options
pub mod defaults {
    pub const REPOSITORY: &str = "https://pixie-operator-charts.storage.googleapis.com";
    pub const RELEASE: &str = "pixie";
    pub const CHART: &str = "pixie-operator-chart";
    pub const VERSION: &str = "0.0.21";
    pub const NAMESPACE: &str = "pl";
    pub const CLOUD_ADDR: &str = "withpixie.ai:443";
    pub const PEM_MEMORY_LIMIT: &str = "2Gi";
    pub const SECRET_POD_IMAGE: &str = "busybox";
}

/// Resource ids as declared in the dependency graph
pub mod ids {
    /// Id of the Pixie Helm release
    pub const HELM_RELEASE: &str = "pixie";
}

/// Names used when the deploy key comes from Secrets Manager
pub mod secret {
    pub const SERVICE_ACCOUNT: &str = "pixie-addon-secret-sa";
    pub const PROVIDER_CLASS: &str = "pixie-deploy-key-secret-class";
    pub const POD: &str = "pixie-secret-pod";
    /// Kubernetes secret the chart reads the deploy key from
    pub const KUBERNETES_SECRET: &str = "pl-deploy-secrets";
    pub const DEPLOY_KEY: &str = "deploy-key";
    pub const CSI_DRIVER: &str = "secrets-store.csi.k8s.io";
    pub const VOLUME: &str = "secrets-store";
    pub const MOUNT_PATH: &str = "/mnt/secrets-store";
    /// Placeholder sleep, roughly 24 days per iteration
    pub const SLEEP_SECS: u64 = 2_073_600;
}
