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

use clap::{Parser, ValueHint};
use power_parameters::PowerFieldScope;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(
        about = "Trim power parameters down to the fields of a power type.",
        visible_alias = "f"
    )]
    Format(Format),

    #[clap(
        about = "Validate power parameters against a power type.",
        visible_alias = "v"
    )]
    Validate(Validate),

    #[clap(about = "Print the initial power parameters for every power type in the catalog.")]
    Initial,
}

#[derive(Parser, Debug)]
pub struct Format {
    #[clap(long, help = "Name of the selected power type.")]
    pub power_type: String,

    #[clap(long, value_hint = ValueHint::FilePath)]
    #[clap(help = "JSON or YAML file holding the entered power parameters.")]
    pub params: PathBuf,

    #[clap(long, value_delimiter = ',')]
    #[clap(help = "Only keep fields in these scopes (bmc, node). Defaults to the configured scopes.")]
    pub scope: Vec<PowerFieldScope>,

    #[clap(long, help = "Use the parameter names the add chassis API expects.")]
    pub chassis: bool,
}

#[derive(Parser, Debug)]
pub struct Validate {
    #[clap(long, help = "Name of the selected power type.")]
    pub power_type: String,

    #[clap(long, value_hint = ValueHint::FilePath)]
    #[clap(help = "JSON or YAML file holding the entered power parameters.")]
    pub params: PathBuf,

    #[clap(long, value_delimiter = ',')]
    #[clap(help = "Only validate fields in these scopes (bmc, node). Defaults to the configured scopes.")]
    pub scope: Vec<PowerFieldScope>,
}
