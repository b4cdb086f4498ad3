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

use clap::CommandFactory;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::cfg::cli_options::{CliCommand, CliOptions};
use crate::cfg::runtime::RuntimeContext;

mod cfg;
mod output;
mod params;
mod power_type;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let mut options = CliOptions::load();

    // Log level is set from, in order of preference:
    // 1. `--debug` on cmd line
    // 2. RUST_LOG environment variable
    // 3. Level::Info
    let mut env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    if options.debug != 0 {
        env_filter = env_filter.add_directive(
            match options.debug {
                1 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
            .into(),
        );
    }
    tracing_subscriber::registry()
        .with(fmt::Layer::default().compact().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init()?;

    let Some(command) = options.commands.take() else {
        return Ok(CliOptions::command().print_long_help()?);
    };

    let ctx = RuntimeContext::build(&options)?;
    match command {
        CliCommand::PowerType(cmd) => power_type::dispatch(cmd, &ctx),
        CliCommand::Params(cmd) => params::dispatch(cmd, &ctx),
    }
}
