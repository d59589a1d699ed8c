// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Add-on option types and custom resources.

pub mod options;
pub mod secret_provider_class;

pub use options::{merge, AddonOptions, AddonProps, DataAccess, DeployKeySource};
pub use secret_provider_class::{SecretProviderClass, SecretProviderClassSpec};
