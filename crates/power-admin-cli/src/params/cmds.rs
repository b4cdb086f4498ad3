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

use std::fs;
use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, bail, eyre};
use power_parameters::{
    ParameterTarget, PowerParameters, PowerParametersSchema, PowerType, format_power_parameters,
    initial_power_parameters,
};
use prettytable::{Table, row};

use super::args::{Format, Validate};
use crate::cfg::runtime::RuntimeContext;
use crate::output::print_serialized;
use crate::power_type::cmds::display_value;

// read_params loads entered power parameters from a JSON or
// YAML file.
fn read_params(path: &Path) -> Result<PowerParameters> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read power parameters from {}", path.display()))?;
    let params = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(&contents)?,
        _ => serde_json::from_str(&contents)?,
    };
    Ok(params)
}

fn find_power_type<'a>(ctx: &'a RuntimeContext, name: &str) -> Result<&'a PowerType> {
    ctx.catalog
        .find(Some(name))
        .ok_or_else(|| eyre!("Power type {name} not found in catalog"))
}

fn print_params(params: &PowerParameters, ctx: &RuntimeContext) -> Result<()> {
    if print_serialized(params, ctx.format)? {
        return Ok(());
    }
    let mut table = Table::new();
    table.set_titles(row!["Parameter", "Value"]);
    for (name, value) in params {
        table.add_row(row![name, display_value(value)]);
    }
    table.printstd();
    Ok(())
}

// formatted_params projects the entered parameters onto the
// selected power type.
fn formatted_params(format_opts: &Format, ctx: &RuntimeContext) -> Result<PowerParameters> {
    let power_type = find_power_type(ctx, &format_opts.power_type)?;
    let params = read_params(&format_opts.params)?;
    let target = if format_opts.chassis {
        if !power_type.chassis {
            tracing::warn!(
                power_type = %power_type.name,
                "Power type is not usually used to add a chassis"
            );
        }
        ParameterTarget::Chassis
    } else {
        ParameterTarget::Machine
    };

    let formatted = format_power_parameters(
        Some(power_type),
        &params,
        ctx.scopes(&format_opts.scope),
        target,
    );
    tracing::debug!(
        entered = params.len(),
        kept = formatted.len(),
        "Formatted power parameters"
    );
    Ok(formatted)
}

pub fn format_params(format_opts: &Format, ctx: &RuntimeContext) -> Result<()> {
    let formatted = formatted_params(format_opts, ctx)?;
    print_params(&formatted, ctx)
}

pub fn validate_params(validate_opts: &Validate, ctx: &RuntimeContext) -> Result<()> {
    let power_type = find_power_type(ctx, &validate_opts.power_type)?;
    let params = read_params(&validate_opts.params)?;
    let schema = PowerParametersSchema::generate(
        Some(power_type),
        ctx.scopes(&validate_opts.scope),
        ctx.config.bare_ipv6,
    );

    let messages = schema.validate(&params).error_messages();
    if messages.is_empty() {
        println!(
            "Power parameters are valid for power type {}",
            power_type.name
        );
        return Ok(());
    }

    if !print_serialized(&messages, ctx.format)? {
        let mut table = Table::new();
        table.set_titles(row!["Parameter", "Error"]);
        for (name, message) in &messages {
            table.add_row(row![name, message]);
        }
        table.printstd();
    }
    bail!(
        "{} power parameter(s) failed validation for power type {}",
        messages.len(),
        power_type.name
    )
}

pub fn initial_params(ctx: &RuntimeContext) -> Result<()> {
    let params = initial_power_parameters(ctx.catalog.power_types());
    print_params(&params, ctx)
}
