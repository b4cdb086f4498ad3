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

#![allow(dead_code)]

use power_parameters::{
    PowerField, PowerFieldScope, PowerFieldType, PowerType, PowerTypeCatalog,
};

pub const TEST_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data");

pub fn load_catalog() -> PowerTypeCatalog {
    PowerTypeCatalog::from_path(format!("{}/power_types.json", TEST_DATA_DIR))
        .expect("Failed to load test catalog")
}

// mixed_scope_power_type has bmc and node fields interleaved, so
// ordering is checked rather than assumed.
pub fn mixed_scope_power_type() -> PowerType {
    PowerType::new("mixed", "Mixed scopes").with_fields(vec![
        PowerField::new(
            "power_address",
            "IP address",
            PowerFieldType::IpAddress,
            PowerFieldScope::Bmc,
        )
        .with_required(true),
        PowerField::new(
            "node_id",
            "Node ID",
            PowerFieldType::String,
            PowerFieldScope::Node,
        ),
        PowerField::new(
            "power_user",
            "Username",
            PowerFieldType::String,
            PowerFieldScope::Bmc,
        ),
        PowerField::new(
            "power_boot_order",
            "Boot order",
            PowerFieldType::MultipleChoice,
            PowerFieldScope::Node,
        ),
        PowerField::new(
            "power_pass",
            "Password",
            PowerFieldType::Password,
            PowerFieldScope::Bmc,
        )
        .with_required(true),
    ])
}
