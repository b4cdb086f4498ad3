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

use color_eyre::eyre::{WrapErr, eyre};
use power_parameters::{PowerFieldScope, PowerParametersConfig, PowerTypeCatalog};

use super::cli_options::{CliOptions, OutputFormat};

// RuntimeContext is everything a command handler needs: the merged
// config, the loaded catalog and the output format.
pub struct RuntimeContext {
    pub config: PowerParametersConfig,
    pub catalog: PowerTypeCatalog,
    pub format: OutputFormat,
}

impl RuntimeContext {
    // build loads the config file (if any), lets --catalog win over
    // the configured catalog_path, then loads the catalog.
    pub fn build(options: &CliOptions) -> color_eyre::Result<Self> {
        let mut config = PowerParametersConfig::load(options.config.as_deref())
            .wrap_err("Failed to load power parameters config")?;
        if let Some(catalog) = &options.catalog {
            config.catalog_path = Some(catalog.clone());
        }

        let catalog_path: PathBuf = config.catalog_path.clone().ok_or_else(|| {
            eyre!(
                "No power type catalog given, use --catalog, POWER_PARAMS_CATALOG_PATH \
                 or catalog_path in the config file"
            )
        })?;
        let catalog = PowerTypeCatalog::from_path(&catalog_path)?;
        tracing::info!(
            catalog = %catalog_path.display(),
            power_types = catalog.len(),
            "Using power type catalog"
        );

        Ok(Self {
            config,
            catalog,
            format: options.format,
        })
    }

    // scopes returns the scopes given on the command line, falling
    // back to the configured ones.
    pub fn scopes<'a>(&'a self, requested: &'a [PowerFieldScope]) -> &'a [PowerFieldScope] {
        if requested.is_empty() {
            &self.config.scopes
        } else {
            requested
        }
    }
}
