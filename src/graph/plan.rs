// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{AddonError, Result};
use crate::graph::dag::ResourceGraph;
use crate::graph::resource::{ResourceId, ResourceKind};
use serde::Serialize;

/// Ordered, serializable view of a resource graph
#[derive(Serialize, Debug, PartialEq)]
pub struct Plan {
    pub steps: Vec<PlanStep>,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanStep {
    pub id: ResourceId,
    pub kind: ResourceKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<ResourceId>,
    pub manifest: serde_json::Value,
}

impl ResourceGraph {
    /// Render the graph as apply steps in topological order
    pub fn plan(&self) -> Result<Plan> {
        let steps = self
            .topological_order()
            .into_iter()
            .map(|id| -> Result<PlanStep> {
                let resource = self
                    .get(id)
                    .ok_or_else(|| AddonError::UnknownResource(id.to_string()))?;
                Ok(PlanStep {
                    id: id.clone(),
                    kind: resource.kind(),
                    depends_on: self.dependencies_of(id).to_vec(),
                    manifest: resource.to_manifest()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Plan { steps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::resource::Resource;
    use k8s_openapi::api::core::v1::{Namespace, ServiceAccount};
    use kube::api::ObjectMeta;

    #[test]
    fn test_plan_lists_dependencies_after_their_targets() {
        let mut graph = ResourceGraph::new();
        let sa = graph
            .add_resource(
                "sa",
                Resource::ServiceAccount(ServiceAccount {
                    metadata: ObjectMeta {
                        name: Some("sa".to_string()),
                        namespace: Some("pl".to_string()),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
            )
            .unwrap();
        let ns = graph
            .add_resource(
                "pl",
                Resource::Namespace(Namespace {
                    metadata: ObjectMeta {
                        name: Some("pl".to_string()),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
            )
            .unwrap();
        graph.add_dependency(&sa, &ns).unwrap();

        let plan = graph.plan().unwrap();

        assert_eq!(plan.steps.len(), 2);
        assert_eq!(plan.steps[0].id, ns);
        assert_eq!(plan.steps[1].kind, ResourceKind::ServiceAccount);
        assert_eq!(plan.steps[1].depends_on, vec![ns]);

        let yaml = serde_yaml::to_string(&plan).unwrap();
        assert!(yaml.contains("dependsOn"));
        assert!(yaml.contains("kind: ServiceAccount"));
    }
}
