// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Helm release installation through the `helm` CLI.

use crate::error::{AddonError, Result};
use crate::manifests::HelmRelease;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, instrument};

#[async_trait]
pub trait HelmInstaller: Send + Sync {
    /// Install the release, or upgrade it if it already exists
    async fn upgrade_install(&self, release: &HelmRelease) -> Result<()>;
}

/// Runs `helm upgrade --install` with the values fed on stdin
#[derive(Debug, Clone)]
pub struct HelmCli {
    binary: String,
}

impl HelmCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for HelmCli {
    fn default() -> Self {
        Self::new("helm")
    }
}

/// Command line arguments for installing `release`
pub fn helm_args(release: &HelmRelease) -> Vec<String> {
    [
        "upgrade",
        "--install",
        release.release.as_str(),
        release.chart.as_str(),
        "--repo",
        release.repository.as_str(),
        "--version",
        release.version.as_str(),
        "--namespace",
        release.namespace.as_str(),
        "--values",
        "-",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[async_trait]
impl HelmInstaller for HelmCli {
    #[instrument(
        skip(self, release),
        fields(release = %release.release, version = %release.version)
    )]
    async fn upgrade_install(&self, release: &HelmRelease) -> Result<()> {
        let values = serde_yaml::to_string(&release.values)
            .map_err(|e| AddonError::HelmError(format!("Failed to render values: {}", e)))?;
        debug!("Helm values for {}:\n{}", release.release, values);

        let mut child = Command::new(&self.binary)
            .args(helm_args(release))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                AddonError::HelmError(format!("Failed to run {}: {}", self.binary, e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(values.as_bytes())
                .await
                .map_err(|e| AddonError::HelmError(format!("Failed to pass values: {}", e)))?;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| AddonError::HelmError(format!("Failed to wait for helm: {}", e)))?;

        if !output.status.success() {
            return Err(AddonError::HelmError(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        info!(
            "Helm release {} installed in namespace {}",
            release.release, release.namespace
        );
        Ok(())
    }
}
