// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The Pixie add-on: declares the namespace, the optional deploy key secret
//! plumbing and the Pixie Helm release, together with their ordering.

use crate::constants::{ids, secret, ADDON_NAME};
use crate::context::ClusterContext;
use crate::error::Result;
use crate::graph::ResourceId;
use crate::manifests::{deploy_key_provider_class, secret_pod_deployment, HelmRelease};
use crate::types::{AddonOptions, AddonProps, DeployKeySource};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct PixieAddOn {
    options: AddonOptions,
}

impl Default for PixieAddOn {
    fn default() -> Self {
        Self::new(AddonProps::default())
    }
}

impl PixieAddOn {
    /// Create the add-on with `props` merged over the documented defaults
    pub fn new(props: AddonProps) -> Self {
        Self {
            options: AddonOptions::from_props(props),
        }
    }

    pub fn options(&self) -> &AddonOptions {
        &self.options
    }

    /// Declare the SecretProviderClass that exposes the Secrets Manager secret
    /// `secret_name` as the `pl-deploy-secrets` Kubernetes secret, readable by
    /// `service_account`.
    pub fn setup_secret<C: ClusterContext>(
        &self,
        ctx: &mut C,
        service_account: &ResourceId,
        secret_name: &str,
    ) -> Result<ResourceId> {
        let provider_class = deploy_key_provider_class(&self.options.namespace, secret_name)?;
        let id = ctx.add_manifest(secret::PROVIDER_CLASS, provider_class.into())?;
        ctx.add_dependency(&id, service_account)?;
        Ok(id)
    }

    /// Declare every resource of the add-on and return the Helm release id
    #[instrument(
        skip(self, ctx),
        fields(addon = ADDON_NAME, namespace = %self.options.namespace)
    )]
    pub fn deploy<C: ClusterContext>(&self, ctx: &mut C) -> Result<ResourceId> {
        let options = &self.options;

        let namespace = ctx.create_namespace(&options.namespace)?;
        info!("Declared namespace {}", options.namespace);

        let secret_pod = match &options.deploy_key {
            DeployKeySource::SecretManager { secret_name } => {
                Some(self.deploy_secret_pod(ctx, &namespace, secret_name)?)
            }
            DeployKeySource::Literal(_) => None,
        };

        let release = HelmRelease::from_options(options);
        let release = ctx.add_helm_chart(ids::HELM_RELEASE, release)?;
        info!(
            "Declared Helm release {} ({} {})",
            options.release, options.chart, options.version
        );

        ctx.add_dependency(&release, &namespace)?;
        if let Some(secret_pod) = secret_pod {
            ctx.add_dependency(&release, &secret_pod)?;
            ctx.add_dependency(&secret_pod, &namespace)?;
        }

        Ok(release)
    }

    fn deploy_secret_pod<C: ClusterContext>(
        &self,
        ctx: &mut C,
        namespace: &ResourceId,
        secret_name: &str,
    ) -> Result<ResourceId> {
        let options = &self.options;

        let service_account = ctx.add_service_account(
            secret::SERVICE_ACCOUNT,
            &options.namespace,
            options.service_account_role_arn.as_deref(),
        )?;
        ctx.add_dependency(&service_account, namespace)?;

        let provider_class = self.setup_secret(ctx, &service_account, secret_name)?;
        info!(
            "Declared secret provider class for Secrets Manager secret {}",
            secret_name
        );

        let pod = secret_pod_deployment(
            &options.secret_pod_image,
            &options.namespace,
            secret::SERVICE_ACCOUNT,
            secret::PROVIDER_CLASS,
        );
        let pod = ctx.add_manifest(secret::POD, pod.into())?;
        ctx.add_dependency(&pod, &provider_class)?;
        info!("Declared secret pod {}", secret::POD);

        Ok(pod)
    }
}
