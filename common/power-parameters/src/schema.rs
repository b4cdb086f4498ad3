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

// src/schema.rs
// Generates per-field validation rules for the power parameters of
// a power type, and validates a set of parameters against them.

use std::collections::BTreeMap;

use crate::field::{PowerField, PowerFieldScope, PowerFieldType};
use crate::ip_address::{BareIpv6Policy, INVALID_IP_ADDRESS_MESSAGE, parse_power_address};
use crate::params::{PowerParamValue, PowerParameters};
use crate::power_type::PowerType;

// FieldRuleKind is the value check applied to a field, selected
// by the field's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRuleKind {
    // Any string.
    Text,
    // A list of strings.
    StringList,
    // A string that passes the ip_address format check.
    IpAddress(BareIpv6Policy),
}

impl FieldRuleKind {
    pub fn for_field_type(field_type: PowerFieldType, policy: BareIpv6Policy) -> Self {
        match field_type {
            PowerFieldType::MultipleChoice => FieldRuleKind::StringList,
            PowerFieldType::IpAddress => FieldRuleKind::IpAddress(policy),
            _ => FieldRuleKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    // Holds the full "<label> required" message.
    #[error("{0}")]
    Required(String),
    #[error("{}", INVALID_IP_ADDRESS_MESSAGE)]
    InvalidIpAddress,
    #[error("{field} must be a `{expected}` type")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },
}

// FieldRule is the validation rule for a single power field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub name: String,
    pub kind: FieldRuleKind,
    // The failure message when the field is required.
    pub required: Option<String>,
}

impl FieldRule {
    pub fn for_field(field: &PowerField, policy: BareIpv6Policy) -> Self {
        Self {
            name: field.name.clone(),
            kind: FieldRuleKind::for_field_type(field.field_type, policy),
            required: field.required.then(|| format!("{} required", field.label)),
        }
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    // validate checks a single value. `None` means the field
    // wasn't supplied at all, which is treated the same as null.
    pub fn validate(&self, value: Option<&PowerParamValue>) -> Result<(), FieldError> {
        let value = value.unwrap_or(&PowerParamValue::Null);

        if let Some(message) = &self.required {
            let missing = match value {
                PowerParamValue::Null => true,
                PowerParamValue::Text(text) => text.is_empty(),
                PowerParamValue::Bool(_) | PowerParamValue::List(_) => false,
            };
            if missing {
                return Err(FieldError::Required(message.clone()));
            }
        }

        match (self.kind, value) {
            (FieldRuleKind::Text, PowerParamValue::List(_)) => Err(FieldError::TypeMismatch {
                field: self.name.clone(),
                expected: "string",
            }),
            (FieldRuleKind::Text, _) => Ok(()),
            (FieldRuleKind::StringList, PowerParamValue::Text(_) | PowerParamValue::Bool(_)) => {
                Err(FieldError::TypeMismatch {
                    field: self.name.clone(),
                    expected: "array",
                })
            }
            (FieldRuleKind::StringList, _) => Ok(()),
            // An ip_address field has to hold an address even when it
            // isn't required.
            (FieldRuleKind::IpAddress(policy), PowerParamValue::Text(text)) => {
                parse_power_address(text, policy)
                    .map(|_| ())
                    .map_err(|_| FieldError::InvalidIpAddress)
            }
            (FieldRuleKind::IpAddress(_), _) => Err(FieldError::InvalidIpAddress),
        }
    }
}

// SchemaValidationResult is the outcome of validating a full set
// of power parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaValidationResult {
    Valid,
    // Invalid holds an error for every failing field, keyed
    // by field name.
    Invalid { errors: BTreeMap<String, FieldError> },
}

impl SchemaValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, SchemaValidationResult::Valid)
    }

    pub fn errors(&self) -> Option<&BTreeMap<String, FieldError>> {
        match self {
            SchemaValidationResult::Invalid { errors } => Some(errors),
            SchemaValidationResult::Valid => None,
        }
    }

    // error_messages returns the user facing message of each
    // failing field.
    pub fn error_messages(&self) -> BTreeMap<String, String> {
        self.errors()
            .into_iter()
            .flatten()
            .map(|(name, error)| (name.clone(), error.to_string()))
            .collect()
    }
}

// PowerParametersSchema holds one rule per power field in scope.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PowerParametersSchema {
    rules: BTreeMap<String, FieldRule>,
}

impl PowerParametersSchema {
    // generate builds the rules for the fields of `power_type` within
    // `scopes`. No power type (or no fields in scope) gives an empty
    // schema, which accepts anything.
    pub fn generate(
        power_type: Option<&PowerType>,
        scopes: &[PowerFieldScope],
        policy: BareIpv6Policy,
    ) -> Self {
        let Some(power_type) = power_type else {
            return Self::default();
        };

        let rules: BTreeMap<String, FieldRule> = power_type
            .fields_in_scope(scopes)
            .into_iter()
            .map(|field| (field.name.clone(), FieldRule::for_field(field, policy)))
            .collect();

        tracing::debug!(
            power_type = %power_type.name,
            rules = rules.len(),
            "Generated power parameters schema"
        );

        Self { rules }
    }

    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.rules.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn rules(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    // validate checks every rule against `params`, collecting all
    // failures rather than stopping at the first. Parameters with
    // no rule are ignored.
    pub fn validate(&self, params: &PowerParameters) -> SchemaValidationResult {
        let errors: BTreeMap<String, FieldError> = self
            .rules
            .iter()
            .filter_map(|(name, rule)| {
                rule.validate(params.get(name))
                    .err()
                    .map(|error| (name.clone(), error))
            })
            .collect();

        if errors.is_empty() {
            SchemaValidationResult::Valid
        } else {
            SchemaValidationResult::Invalid { errors }
        }
    }
}

/// Generates the validation schema for the power parameters of the selected
/// power type, limited to fields in `scopes`, using the default
/// [`BareIpv6Policy`].
pub fn generate_power_parameters_schema(
    power_type: Option<&PowerType>,
    scopes: &[PowerFieldScope],
) -> PowerParametersSchema {
    PowerParametersSchema::generate(power_type, scopes, BareIpv6Policy::default())
}
