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

// src/power_type.rs
// A PowerType is a named catalog entry describing which fields are
// needed to remotely control a machine's power state (ipmi, redfish,
// virsh, etc). This also holds the two lookup helpers that only need
// a power type: filtering its fields by scope, and finding a power
// type by name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::{PowerField, PowerFieldScope};

// PowerDriverType distinguishes plain power drivers from pod
// (VM host) drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerDriverType {
    #[default]
    Power,
    Pod,
}

impl fmt::Display for PowerDriverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerDriverType::Power => write!(f, "power"),
            PowerDriverType::Pod => write!(f, "pod"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerType {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<PowerField>,
    #[serde(default)]
    pub driver_type: PowerDriverType,
    // chassis is set for power types which can be used to
    // add a whole chassis of machines at once.
    #[serde(default)]
    pub chassis: bool,
    #[serde(default)]
    pub can_probe: bool,
    #[serde(default)]
    pub queryable: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_packages: Vec<String>,
}

impl PowerType {
    pub fn new<N: Into<String>, D: Into<String>>(name: N, description: D) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            fields: Vec::new(),
            driver_type: PowerDriverType::Power,
            chassis: false,
            can_probe: false,
            queryable: false,
            missing_packages: Vec::new(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<PowerField>) -> Self {
        self.fields = fields;
        self
    }

    pub fn add_field(mut self, field: PowerField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_driver_type(mut self, driver_type: PowerDriverType) -> Self {
        self.driver_type = driver_type;
        self
    }

    pub fn with_chassis(mut self, chassis: bool) -> Self {
        self.chassis = chassis;
        self
    }

    pub fn with_can_probe(mut self, can_probe: bool) -> Self {
        self.can_probe = can_probe;
        self
    }

    pub fn with_queryable(mut self, queryable: bool) -> Self {
        self.queryable = queryable;
        self
    }

    pub fn with_missing_packages<T: Into<Vec<String>>>(mut self, packages: T) -> Self {
        self.missing_packages = packages.into();
        self
    }

    // field returns the field with the given name, if this
    // power type has one.
    pub fn field(&self, name: &str) -> Option<&PowerField> {
        self.fields.iter().find(|field| field.name == name)
    }

    // fields_in_scope returns the fields of this power type whose
    // scope is one of `scopes`, keeping their catalog order.
    pub fn fields_in_scope(&self, scopes: &[PowerFieldScope]) -> Vec<&PowerField> {
        self.fields
            .iter()
            .filter(|field| field.in_scopes(scopes))
            .collect()
    }
}

/// Returns the fields of `power_type` that are included in the given scopes,
/// in the order the power type lists them. No power type selected means no
/// fields.
pub fn fields_in_scope<'a>(
    power_type: Option<&'a PowerType>,
    scopes: &[PowerFieldScope],
) -> Vec<&'a PowerField> {
    power_type
        .map(|power_type| power_type.fields_in_scope(scopes))
        .unwrap_or_default()
}

/// Finds the first power type called `name`. An absent name, or a name no
/// power type has, both give `None`.
pub fn power_type_from_name<'a>(
    power_types: &'a [PowerType],
    name: Option<&str>,
) -> Option<&'a PowerType> {
    let name = name?;
    power_types.iter().find(|power_type| power_type.name == name)
}
