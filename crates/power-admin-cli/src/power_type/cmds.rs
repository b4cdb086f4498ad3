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

use color_eyre::Result;
use color_eyre::eyre::eyre;
use power_parameters::{PowerField, PowerParamValue, PowerType};
use prettytable::{Table, row};

use super::args::{List, Show};
use crate::cfg::runtime::RuntimeContext;
use crate::output::print_serialized;

pub fn list_power_types(list_opts: &List, ctx: &RuntimeContext) -> Result<()> {
    let power_types: Vec<&PowerType> = if list_opts.chassis {
        ctx.catalog.chassis_types()
    } else {
        ctx.catalog.iter().collect()
    };

    if print_serialized(&power_types, ctx.format)? {
        return Ok(());
    }
    if power_types.is_empty() {
        println!("No power types found");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_titles(row!["Name", "Description", "Driver", "Chassis", "Queryable", "Fields"]);
    for power_type in power_types {
        table.add_row(row![
            power_type.name,
            power_type.description,
            power_type.driver_type,
            power_type.chassis,
            power_type.queryable,
            power_type.fields.len(),
        ]);
    }
    table.printstd();
    Ok(())
}

pub fn show_power_type(show_opts: &Show, ctx: &RuntimeContext) -> Result<()> {
    let power_type = ctx
        .catalog
        .find(Some(show_opts.name.as_str()))
        .ok_or_else(|| eyre!("Power type {} not found in catalog", show_opts.name))?;
    let fields = power_type.fields_in_scope(ctx.scopes(&show_opts.scope));

    if print_serialized(&fields, ctx.format)? {
        return Ok(());
    }

    println!("Name: {}", power_type.name);
    println!("Description: {}", power_type.description);
    if !power_type.missing_packages.is_empty() {
        println!("Missing packages: {}", power_type.missing_packages.join(", "));
    }

    let mut table = Table::new();
    table.set_titles(row!["Field", "Label", "Type", "Scope", "Required", "Default", "Choices"]);
    for field in fields {
        table.add_row(row![
            field.name,
            field.label,
            field.field_type,
            field.scope,
            field.required,
            display_value(&field.default),
            display_choices(field),
        ]);
    }
    table.printstd();
    Ok(())
}

pub fn display_value(value: &PowerParamValue) -> String {
    match value {
        PowerParamValue::Bool(value) => value.to_string(),
        PowerParamValue::Text(text) => text.clone(),
        PowerParamValue::List(list) => list.join(", "),
        PowerParamValue::Null => String::new(),
    }
}

fn display_choices(field: &PowerField) -> String {
    field
        .choices
        .iter()
        .map(|choice| choice.value())
        .collect::<Vec<_>>()
        .join("\n")
}
