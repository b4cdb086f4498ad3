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

use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint};

use crate::{params, power_type};

#[derive(Parser, Debug)]
#[clap(name = "power-admin-cli")]
#[clap(about = "Inspect power types and check power parameters")]
pub struct CliOptions {
    #[clap(long, env = "POWER_PARAMS_CONFIG", value_hint = ValueHint::FilePath)]
    #[clap(help = "TOML config file. Settings can also come from POWER_PARAMS_* variables.")]
    pub config: Option<PathBuf>,

    #[clap(long, env = "POWER_PARAMS_CATALOG_PATH", value_hint = ValueHint::FilePath)]
    #[clap(help = "Power type catalog (JSON or YAML). Overrides catalog_path from the config file.")]
    pub catalog: Option<PathBuf>,

    #[clap(short, long, value_enum, default_value = "ascii-table")]
    pub format: OutputFormat,

    #[clap(short, long, action = clap::ArgAction::Count)]
    #[clap(help = "Increase log verbosity. Repeat for trace level.")]
    pub debug: u8,

    #[clap(subcommand)]
    pub commands: Option<CliCommand>,
}

impl CliOptions {
    pub fn load() -> Self {
        Self::parse()
    }
}

#[derive(PartialEq, Eq, ValueEnum, Clone, Copy, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum OutputFormat {
    Json,
    AsciiTable,
    Yaml,
}

#[derive(Parser, Debug)]
pub enum CliCommand {
    #[clap(about = "Power type catalog handling", subcommand, visible_alias = "pt")]
    PowerType(power_type::Cmd),
    #[clap(about = "Power parameter handling", subcommand, visible_alias = "p")]
    Params(params::Cmd),
}
