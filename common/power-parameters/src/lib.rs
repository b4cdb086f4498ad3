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

//! Power types and power parameters.
//!
//! A power type (ipmi, redfish, virsh, ...) lists the fields needed to
//! remotely control a machine's power. This crate formats the parameters
//! entered for those fields into what the API expects, and generates
//! validation rules for them.

pub mod catalog;
pub mod config;
pub mod field;
pub mod ip_address;
pub mod params;
pub mod power_type;
pub mod schema;

pub use catalog::{CatalogError, PowerTypeCatalog};
pub use config::PowerParametersConfig;
pub use field::{
    InvalidPowerFieldScope, PowerField, PowerFieldChoice, PowerFieldScope, PowerFieldType,
};
pub use ip_address::{
    BareIpv6Policy, INVALID_IP_ADDRESS_MESSAGE, InvalidPowerAddress, PowerAddress,
    is_valid_port_number, is_valid_power_address, parse_power_address,
};
pub use params::{
    CHASSIS_PARAMETER_MAP, ParameterTarget, PowerParamValue, PowerParameters,
    chassis_parameter_name, format_power_parameters, initial_power_parameters,
};
pub use power_type::{PowerDriverType, PowerType, fields_in_scope, power_type_from_name};
pub use schema::{
    FieldError, FieldRule, FieldRuleKind, PowerParametersSchema, SchemaValidationResult,
    generate_power_parameters_schema,
};
