/*
 * SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

// src/field.rs
// This file defines a single power field: one configurable parameter
// of a power type (e.g. the BMC address, a username, a VM name), along
// with the scope it applies to and the kind of value it takes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::params::PowerParamValue;

// PowerFieldScope classifies a field as belonging to the controller
// (the BMC) or to the managed node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerFieldScope {
    Bmc,
    Node,
}

impl PowerFieldScope {
    // ALL is the default scope set: every field of a power type.
    pub const ALL: [PowerFieldScope; 2] = [PowerFieldScope::Bmc, PowerFieldScope::Node];

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerFieldScope::Bmc => "bmc",
            PowerFieldScope::Node => "node",
        }
    }
}

impl fmt::Display for PowerFieldScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Power field scope '{0}' is not valid, expected one of: bmc, node")]
pub struct InvalidPowerFieldScope(pub String);

impl FromStr for PowerFieldScope {
    type Err = InvalidPowerFieldScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bmc" => Ok(PowerFieldScope::Bmc),
            "node" => Ok(PowerFieldScope::Node),
            _ => Err(InvalidPowerFieldScope(s.to_string())),
        }
    }
}

// PowerFieldType is the kind of value a field takes, as reported
// by the power type catalog. It drives which validation rule
// gets generated for the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerFieldType {
    String,
    MacAddress,
    Choice,
    MultipleChoice,
    Password,
    IpAddress,
    VirshAddress,
    LxdAddress,
    // Anything the catalog sends that we don't know about. It is
    // validated like a plain string.
    #[serde(other)]
    Unknown,
}

impl PowerFieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerFieldType::String => "string",
            PowerFieldType::MacAddress => "mac_address",
            PowerFieldType::Choice => "choice",
            PowerFieldType::MultipleChoice => "multiple_choice",
            PowerFieldType::Password => "password",
            PowerFieldType::IpAddress => "ip_address",
            PowerFieldType::VirshAddress => "virsh_address",
            PowerFieldType::LxdAddress => "lxd_address",
            PowerFieldType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PowerFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// PowerFieldChoice is a single [value, label] option of a
// choice or multiple_choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerFieldChoice(pub String, pub String);

impl PowerFieldChoice {
    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn label(&self) -> &str {
        &self.1
    }
}

// PowerField describes one parameter of a power type. Instances are
// supplied by the power type catalog and are not modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerField {
    pub name: String,
    pub label: String,
    pub field_type: PowerFieldType,
    pub scope: PowerFieldScope,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: PowerParamValue,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<PowerFieldChoice>,
}

impl PowerField {
    // new creates an optional field with no default and no choices.
    pub fn new<N: Into<String>, L: Into<String>>(
        name: N,
        label: L,
        field_type: PowerFieldType,
        scope: PowerFieldScope,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            scope,
            required: false,
            default: PowerParamValue::Null,
            choices: Vec::new(),
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_default<V: Into<PowerParamValue>>(mut self, default: V) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_choices<I, V, L>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        self.choices = choices
            .into_iter()
            .map(|(value, label)| PowerFieldChoice(value.into(), label.into()))
            .collect();
        self
    }

    pub fn in_scopes(&self, scopes: &[PowerFieldScope]) -> bool {
        scopes.contains(&self.scope)
    }
}
