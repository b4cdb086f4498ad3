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

// src/params.rs
// Power parameters are the values entered for the fields of a power
// type. Forms are pre-populated with every field of every power type,
// so before parameters are sent anywhere they are trimmed down to the
// fields of the selected power type (and renamed, for chassis).

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use crate::field::{PowerFieldScope, PowerFieldType};
use crate::power_type::PowerType;

// PowerParamValue is a single parameter value. It is untagged so
// that a plain JSON object of parameters deserializes directly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PowerParamValue {
    Bool(bool),
    Text(String),
    List(Vec<String>),
    #[default]
    Null,
}

impl PowerParamValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PowerParamValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PowerParamValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PowerParamValue::List(list) => Some(list),
            _ => None,
        }
    }
}

impl From<&str> for PowerParamValue {
    fn from(value: &str) -> Self {
        PowerParamValue::Text(value.to_string())
    }
}

impl From<String> for PowerParamValue {
    fn from(value: String) -> Self {
        PowerParamValue::Text(value)
    }
}

impl From<bool> for PowerParamValue {
    fn from(value: bool) -> Self {
        PowerParamValue::Bool(value)
    }
}

impl From<Vec<String>> for PowerParamValue {
    fn from(value: Vec<String>) -> Self {
        PowerParamValue::List(value)
    }
}

impl From<Vec<&str>> for PowerParamValue {
    fn from(value: Vec<&str>) -> Self {
        PowerParamValue::List(value.into_iter().map(str::to_string).collect())
    }
}

// PowerParameters maps a field name to its value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PowerParameters(BTreeMap<String, PowerParamValue>);

impl PowerParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<K: Into<String>, V: Into<PowerParamValue>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert<K: Into<String>, V: Into<PowerParamValue>>(
        &mut self,
        key: K,
        value: V,
    ) -> Option<PowerParamValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&PowerParamValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, PowerParamValue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<PowerParamValue>> FromIterator<(K, V)> for PowerParameters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for PowerParameters {
    type Item = (String, PowerParamValue);
    type IntoIter = btree_map::IntoIter<String, PowerParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PowerParameters {
    type Item = (&'a String, &'a PowerParamValue);
    type IntoIter = btree_map::Iter<'a, String, PowerParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// The add chassis API expects different names than the ones
// power type fields use.
pub const CHASSIS_PARAMETER_MAP: [(&str, &str); 8] = [
    ("power_address", "hostname"),
    ("power_pass", "password"),
    ("power_port", "port"),
    ("power_protocol", "protocol"),
    ("power_token_name", "token_name"),
    ("power_token_secret", "token_secret"),
    ("power_user", "username"),
    ("power_verify_ssl", "verify_ssl"),
];

/// Returns the name the add chassis API uses for `field_name`, which is
/// `field_name` itself for anything not in [`CHASSIS_PARAMETER_MAP`].
pub fn chassis_parameter_name(field_name: &str) -> &str {
    CHASSIS_PARAMETER_MAP
        .iter()
        .find(|(name, _)| *name == field_name)
        .map(|(_, chassis_name)| *chassis_name)
        .unwrap_or(field_name)
}

// ParameterTarget is who the formatted parameters are for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterTarget {
    #[default]
    Machine,
    Chassis,
}

/// Trims `power_parameters` down to the fields of `power_type` within
/// `scopes`.
///
/// Every in-scope field gets an entry, holding `Null` when no value was
/// entered for it. For [`ParameterTarget::Chassis`] keys are renamed using
/// [`CHASSIS_PARAMETER_MAP`]. No power type selected gives an empty map.
pub fn format_power_parameters(
    power_type: Option<&PowerType>,
    power_parameters: &PowerParameters,
    scopes: &[PowerFieldScope],
    target: ParameterTarget,
) -> PowerParameters {
    let Some(power_type) = power_type else {
        return PowerParameters::new();
    };

    power_type
        .fields_in_scope(scopes)
        .into_iter()
        .map(|field| {
            let key = match target {
                ParameterTarget::Machine => field.name.as_str(),
                ParameterTarget::Chassis => chassis_parameter_name(&field.name),
            };
            let value = power_parameters
                .get(&field.name)
                .cloned()
                .unwrap_or_default();
            (key.to_string(), value)
        })
        .collect()
}

/// Builds the parameters a power form starts out with: one entry for every
/// field of every power type, set to the field's default. When two power
/// types share a field name the first one wins.
pub fn initial_power_parameters(power_types: &[PowerType]) -> PowerParameters {
    let mut params = PowerParameters::new();
    for field in power_types.iter().flat_map(|power_type| &power_type.fields) {
        if params.contains_key(&field.name) {
            continue;
        }
        let value = match (&field.default, field.field_type) {
            (PowerParamValue::Null, PowerFieldType::MultipleChoice) => {
                PowerParamValue::List(Vec::new())
            }
            (PowerParamValue::Null, _) => PowerParamValue::Text(String::new()),
            (default, _) => default.clone(),
        };
        params.insert(field.name.clone(), value);
    }
    params
}
