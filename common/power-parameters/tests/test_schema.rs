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

mod common;

use power_parameters::{
    BareIpv6Policy, FieldError, FieldRuleKind, PowerField, PowerFieldScope, PowerFieldType,
    PowerParamValue, PowerParameters, PowerParametersSchema, PowerType, SchemaValidationResult,
    fields_in_scope, generate_power_parameters_schema,
};

#[test]
fn test_schema_rule_kinds_follow_field_types() {
    let power_type = common::mixed_scope_power_type();
    let schema = generate_power_parameters_schema(Some(&power_type), &PowerFieldScope::ALL);

    assert_eq!(schema.len(), 5);
    assert_eq!(
        schema.get("power_address").map(|rule| rule.kind),
        Some(FieldRuleKind::IpAddress(BareIpv6Policy::Reject))
    );
    assert_eq!(
        schema.get("power_boot_order").map(|rule| rule.kind),
        Some(FieldRuleKind::StringList)
    );
    assert_eq!(
        schema.get("power_user").map(|rule| rule.kind),
        Some(FieldRuleKind::Text)
    );
    assert_eq!(
        schema.get("power_pass").map(|rule| rule.kind),
        Some(FieldRuleKind::Text)
    );
}

#[test]
fn test_schema_keys_match_fields_in_scope() {
    let catalog = common::load_catalog();
    let scope_sets: [&[PowerFieldScope]; 3] = [
        &PowerFieldScope::ALL,
        &[PowerFieldScope::Bmc],
        &[PowerFieldScope::Node],
    ];

    for power_type in catalog.iter() {
        for scopes in scope_sets {
            let schema = generate_power_parameters_schema(Some(power_type), scopes);
            let mut expected: Vec<&str> = fields_in_scope(Some(power_type), scopes)
                .iter()
                .map(|field| field.name.as_str())
                .collect();
            expected.sort_unstable();
            assert_eq!(schema.field_names().collect::<Vec<_>>(), expected);
        }
    }
}

#[test]
fn test_required_message_uses_label() {
    let power_type = common::mixed_scope_power_type();
    let schema = generate_power_parameters_schema(Some(&power_type), &PowerFieldScope::ALL);

    let password = schema.get("power_pass").expect("power_pass rule missing");
    assert!(password.is_required());
    assert_eq!(password.required.as_deref(), Some("Password required"));

    let user = schema.get("power_user").expect("power_user rule missing");
    assert!(!user.is_required());

    // Still required with nothing supplied at all.
    let result = schema.validate(&PowerParameters::new());
    let messages = result.error_messages();
    assert_eq!(
        messages.get("power_pass").map(String::as_str),
        Some("Password required")
    );
    assert_eq!(
        messages.get("power_address").map(String::as_str),
        Some("IP address required")
    );
}

#[test]
fn test_schema_no_power_type_is_empty() {
    let schema = generate_power_parameters_schema(None, &PowerFieldScope::ALL);
    assert!(schema.is_empty());
    assert!(schema.validate(&PowerParameters::new()).is_valid());
}

#[test]
fn test_schema_no_fields_in_scope_is_empty() {
    let power_type = PowerType::new("bmc_only", "").with_fields(vec![PowerField::new(
        "power_address",
        "Address",
        PowerFieldType::IpAddress,
        PowerFieldScope::Bmc,
    )
    .with_required(true)]);

    let schema = generate_power_parameters_schema(Some(&power_type), &[PowerFieldScope::Node]);
    assert!(schema.is_empty());
    assert_eq!(
        schema.validate(&PowerParameters::new()),
        SchemaValidationResult::Valid
    );
}

#[test]
fn test_validate_valid_parameters() {
    let catalog = common::load_catalog();
    let ipmi = catalog.find(Some("ipmi"));
    let schema = generate_power_parameters_schema(ipmi, &PowerFieldScope::ALL);

    let params = PowerParameters::new()
        .with("power_driver", "LAN_2_0")
        .with("power_address", "192.168.1.1:623")
        .with("power_user", "")
        .with("power_pass", "")
        .with("mac_address", "");
    let result = schema.validate(&params);
    assert!(result.is_valid(), "{:?}", result.errors());
    assert!(result.errors().is_none());
    assert!(result.error_messages().is_empty());
}

#[test]
fn test_validate_collects_every_error() {
    let catalog = common::load_catalog();
    let redfish = catalog.find(Some("redfish"));
    let schema = generate_power_parameters_schema(redfish, &PowerFieldScope::ALL);

    let params = PowerParameters::new()
        .with("power_address", "192.168.1.1 ")
        .with("power_user", "")
        .with("node_id", vec!["a"]);
    let result = schema.validate(&params);

    assert!(!result.is_valid());
    let errors = result.errors().expect("invalid result should carry errors");
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get("power_address"), Some(&FieldError::InvalidIpAddress));
    assert_eq!(
        errors.get("power_user"),
        Some(&FieldError::Required("Redfish user required".to_string()))
    );
    assert_eq!(
        errors.get("power_pass"),
        Some(&FieldError::Required("Redfish password required".to_string()))
    );
    assert_eq!(
        errors.get("node_id"),
        Some(&FieldError::TypeMismatch {
            field: "node_id".to_string(),
            expected: "string",
        })
    );
}

#[test]
fn test_ip_address_error_message() {
    let catalog = common::load_catalog();
    let hmcz = catalog.find(Some("hmcz"));
    let schema = generate_power_parameters_schema(hmcz, &[PowerFieldScope::Bmc]);

    for address in ["192.168.1.1:99999", "2001:db8::1", "hmc.example.com"] {
        let params = PowerParameters::new()
            .with("power_address", address)
            .with("power_user", "admin")
            .with("power_pass", "secret");
        let messages = schema.validate(&params).error_messages();
        assert_eq!(
            messages.get("power_address").map(String::as_str),
            Some("Please enter a valid IP address."),
            "{address}"
        );
    }
}

#[test]
fn test_ip_address_bare_ipv6_policy() {
    let catalog = common::load_catalog();
    let hmcz = catalog.find(Some("hmcz"));
    let schema =
        PowerParametersSchema::generate(hmcz, &[PowerFieldScope::Bmc], BareIpv6Policy::Accept);

    let params = PowerParameters::new()
        .with("power_address", "2001:db8::1")
        .with("power_user", "admin")
        .with("power_pass", "secret");
    assert!(schema.validate(&params).is_valid());
}

#[test]
fn test_optional_ip_address_must_still_be_an_address() {
    let power_type = PowerType::new("optional_ip", "").with_fields(vec![PowerField::new(
        "power_address",
        "Address",
        PowerFieldType::IpAddress,
        PowerFieldScope::Bmc,
    )]);
    let schema = generate_power_parameters_schema(Some(&power_type), &PowerFieldScope::ALL);
    let rule = schema.get("power_address").expect("power_address rule missing");

    assert_eq!(rule.validate(None), Err(FieldError::InvalidIpAddress));
    assert_eq!(
        rule.validate(Some(&PowerParamValue::from(""))),
        Err(FieldError::InvalidIpAddress)
    );
    assert_eq!(
        rule.validate(Some(&PowerParamValue::from("10.0.0.1"))),
        Ok(())
    );
}

#[test]
fn test_multiple_choice_rule() {
    let power_type = common::mixed_scope_power_type();
    let schema = generate_power_parameters_schema(Some(&power_type), &[PowerFieldScope::Node]);
    let rule = schema
        .get("power_boot_order")
        .expect("power_boot_order rule missing");

    assert_eq!(
        rule.validate(Some(&PowerParamValue::from(vec!["network", "storage"]))),
        Ok(())
    );
    assert_eq!(rule.validate(Some(&PowerParamValue::List(Vec::new()))), Ok(()));
    assert_eq!(rule.validate(None), Ok(()));
    assert_eq!(
        rule.validate(Some(&PowerParamValue::from("network"))),
        Err(FieldError::TypeMismatch {
            field: "power_boot_order".to_string(),
            expected: "array",
        })
    );
}

#[test]
fn test_text_rule_accepts_booleans() {
    let power_type = common::mixed_scope_power_type();
    let schema = generate_power_parameters_schema(Some(&power_type), &[PowerFieldScope::Bmc]);
    let rule = schema.get("power_pass").expect("power_pass rule missing");

    assert_eq!(rule.validate(Some(&PowerParamValue::Bool(false))), Ok(()));
    assert_eq!(
        rule.validate(Some(&PowerParamValue::Null)),
        Err(FieldError::Required("Password required".to_string()))
    );
}

#[test]
fn test_field_error_display() {
    assert_eq!(
        FieldError::Required("Power user required".to_string()).to_string(),
        "Power user required"
    );
    assert_eq!(
        FieldError::InvalidIpAddress.to_string(),
        "Please enter a valid IP address."
    );
    assert_eq!(
        FieldError::TypeMismatch {
            field: "node_id".to_string(),
            expected: "string"
        }
        .to_string(),
        "node_id must be a `string` type"
    );
}
