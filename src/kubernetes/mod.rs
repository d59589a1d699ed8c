// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes API helpers for namespace management and server-side apply.

pub mod apply;
pub mod namespaces;

pub use apply::apply_namespaced;
pub use namespaces::ensure_namespace_exists;
