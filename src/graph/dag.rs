// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Directed acyclic graph of resource declarations.
//!
//! An edge `dependent -> dependency` means the dependent must be applied
//! after the dependency. Nodes keep their insertion order, which makes the
//! topological order deterministic for identical input.

use crate::error::{AddonError, Result};
use crate::graph::resource::{Resource, ResourceId};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
struct Node {
    id: ResourceId,
    resource: Resource,
    dependencies: Vec<ResourceId>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceGraph {
    nodes: Vec<Node>,
    index: BTreeMap<ResourceId, usize>,
}

impl ResourceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &ResourceId) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &ResourceId) -> Option<&Resource> {
        self.node(id).map(|n| &n.resource)
    }

    /// Iterate over all resources in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&ResourceId, &Resource)> {
        self.nodes.iter().map(|n| (&n.id, &n.resource))
    }

    /// Declare a new resource under `id`
    pub fn add_resource(
        &mut self,
        id: impl Into<ResourceId>,
        resource: Resource,
    ) -> Result<ResourceId> {
        let id = id.into();
        if self.contains(&id) {
            return Err(AddonError::DuplicateResource(id.to_string()));
        }

        self.index.insert(id.clone(), self.nodes.len());
        self.nodes.push(Node {
            id: id.clone(),
            resource,
            dependencies: Vec::new(),
        });
        Ok(id)
    }

    /// Require `dependent` to be applied after `dependency`.
    ///
    /// Adding an existing edge again is a no-op.
    pub fn add_dependency(
        &mut self,
        dependent: &ResourceId,
        dependency: &ResourceId,
    ) -> Result<()> {
        if !self.contains(dependency) {
            return Err(AddonError::UnknownResource(dependency.to_string()));
        }
        if dependent == dependency || self.depends_on(dependency, dependent) {
            return Err(AddonError::DependencyCycle {
                dependent: dependent.to_string(),
                dependency: dependency.to_string(),
            });
        }

        let node = self
            .node_mut(dependent)
            .ok_or_else(|| AddonError::UnknownResource(dependent.to_string()))?;
        if !node.dependencies.contains(dependency) {
            node.dependencies.push(dependency.clone());
        }
        Ok(())
    }

    /// Direct dependencies of `id`, in the order they were declared
    pub fn dependencies_of(&self, id: &ResourceId) -> &[ResourceId] {
        self.node(id)
            .map(|n| n.dependencies.as_slice())
            .unwrap_or(&[])
    }

    /// Resources that directly depend on `id`
    pub fn dependents_of(&self, id: &ResourceId) -> Vec<&ResourceId> {
        self.nodes
            .iter()
            .filter(|n| n.dependencies.contains(id))
            .map(|n| &n.id)
            .collect()
    }

    /// Resources without dependencies
    pub fn roots(&self) -> Vec<&ResourceId> {
        self.nodes
            .iter()
            .filter(|n| n.dependencies.is_empty())
            .map(|n| &n.id)
            .collect()
    }

    /// All edges as `(dependent, dependency)` pairs
    pub fn edges(&self) -> Vec<(&ResourceId, &ResourceId)> {
        self.nodes
            .iter()
            .flat_map(|n| n.dependencies.iter().map(move |d| (&n.id, d)))
            .collect()
    }

    /// Whether `dependent` depends on `dependency`, directly or transitively
    pub fn depends_on(&self, dependent: &ResourceId, dependency: &ResourceId) -> bool {
        let mut stack: Vec<&ResourceId> = self.dependencies_of(dependent).iter().collect();
        let mut seen: Vec<&ResourceId> = Vec::new();

        while let Some(current) = stack.pop() {
            if current == dependency {
                return true;
            }
            if seen.contains(&current) {
                continue;
            }
            seen.push(current);
            stack.extend(self.dependencies_of(current));
        }

        false
    }

    /// Resource ids in an order where every resource comes after its
    /// dependencies. Ties are broken by declaration order.
    pub fn topological_order(&self) -> Vec<&ResourceId> {
        let mut order: Vec<&ResourceId> = Vec::with_capacity(self.nodes.len());

        while order.len() < self.nodes.len() {
            let next = self.nodes.iter().find(|n| {
                !order.contains(&&n.id) && n.dependencies.iter().all(|d| order.contains(&d))
            });
            match next {
                Some(node) => order.push(&node.id),
                // Unreachable: add_dependency rejects cycles
                None => break,
            }
        }

        order
    }

    fn node(&self, id: &ResourceId) -> Option<&Node> {
        self.index.get(id).and_then(|&i| self.nodes.get(i))
    }

    fn node_mut(&mut self, id: &ResourceId) -> Option<&mut Node> {
        match self.index.get(id) {
            Some(&i) => self.nodes.get_mut(i),
            None => None,
        }
    }
}
