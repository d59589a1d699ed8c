// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Long-running pod that keeps the deploy key secret mounted.
//!
//! The CSI secrets-store driver only syncs the Kubernetes Secret while a pod
//! mounts the volume, so this pod has to keep running for as long as the
//! secret should exist.

use crate::constants::secret;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    CSIVolumeSource, Container, PodSpec, PodTemplateSpec, Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

pub fn secret_pod_deployment(
    image: &str,
    namespace: &str,
    service_account: &str,
    secret_provider_class: &str,
) -> Deployment {
    let name = secret::POD;
    let labels = BTreeMap::from([("name".to_string(), name.to_string())]);

    let container = Container {
        name: name.to_string(),
        image: Some(image.to_string()),
        command: Some(vec![
            "sh".to_string(),
            "-c".to_string(),
            format!("while :; do sleep {}; done", secret::SLEEP_SECS),
        ]),
        volume_mounts: Some(vec![VolumeMount {
            name: secret::VOLUME.to_string(),
            mount_path: secret::MOUNT_PATH.to_string(),
            read_only: Some(true),
            ..Default::default()
        }]),
        ..Default::default()
    };

    let volume = Volume {
        name: secret::VOLUME.to_string(),
        csi: Some(CSIVolumeSource {
            driver: secret::CSI_DRIVER.to_string(),
            read_only: Some(true),
            volume_attributes: Some(BTreeMap::from([(
                "secretProviderClass".to_string(),
                secret_provider_class.to_string(),
            )])),
            ..Default::default()
        }),
        ..Default::default()
    };

    Deployment {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(1),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    service_account_name: Some(service_account.to_string()),
                    containers: vec![container],
                    volumes: Some(vec![volume]),
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}
