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

use std::path::{Path, PathBuf};
use std::str::FromStr;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};

use crate::field::PowerFieldScope;
use crate::ip_address::BareIpv6Policy;

pub const ENV_PREFIX: &str = "POWER_PARAMS_";

/// Settings shared by everything that formats or validates power parameters.
///
/// Values are layered: built-in defaults, then the optional TOML file, then
/// `POWER_PARAMS_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerParametersConfig {
    /// Power type catalog to load (JSON or YAML).
    pub catalog_path: Option<PathBuf>,
    /// Field scopes used when none are given explicitly. Either a list
    /// (`scopes = ["bmc"]`, `POWER_PARAMS_SCOPES=[bmc]`) or a comma
    /// separated string (`POWER_PARAMS_SCOPES=bmc,node`).
    #[serde(deserialize_with = "deserialize_scopes")]
    pub scopes: Vec<PowerFieldScope>,
    /// Whether ip_address fields accept IPv6 without brackets and port.
    pub bare_ipv6: BareIpv6Policy,
}

impl Default for PowerParametersConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            scopes: PowerFieldScope::ALL.to_vec(),
            bare_ipv6: BareIpv6Policy::default(),
        }
    }
}

impl PowerParametersConfig {
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(config_file) = config_file {
            figment = figment.merge(Toml::file_exact(config_file));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    // load fails if an explicitly named config file is missing,
    // rather than quietly running on defaults.
    pub fn load(config_file: Option<&Path>) -> Result<Self, figment::Error> {
        if let Some(config_file) = config_file {
            if !config_file.is_file() {
                return Err(figment::Error::from(format!(
                    "Power parameters config file {} does not exist",
                    config_file.display()
                )));
            }
        }
        let config: Self = Self::figment(config_file).extract()?;
        tracing::debug!(?config, "Loaded power parameters config");
        Ok(config)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScopeList {
    List(Vec<PowerFieldScope>),
    Text(String),
}

fn deserialize_scopes<'de, D>(deserializer: D) -> Result<Vec<PowerFieldScope>, D::Error>
where
    D: Deserializer<'de>,
{
    match ScopeList::deserialize(deserializer)? {
        ScopeList::List(scopes) => Ok(scopes),
        ScopeList::Text(text) => text
            .split(',')
            .map(|scope| PowerFieldScope::from_str(scope.trim()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| Error::custom(err.to_string())),
    }
}
