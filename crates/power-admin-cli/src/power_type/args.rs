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

use clap::Parser;
use power_parameters::PowerFieldScope;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "List power types in the catalog.", visible_alias = "l")]
    List(List),

    #[clap(about = "Show the fields of a power type.", visible_alias = "s")]
    Show(Show),
}

#[derive(Parser, Debug)]
pub struct List {
    #[clap(long, help = "Only list power types that can add a chassis.")]
    pub chassis: bool,
}

#[derive(Parser, Debug)]
pub struct Show {
    #[clap(help = "Name of the power type, e.g. ipmi.")]
    pub name: String,

    #[clap(long, value_delimiter = ',')]
    #[clap(help = "Only show fields in these scopes (bmc, node). Defaults to the configured scopes.")]
    pub scope: Vec<PowerFieldScope>,
}
