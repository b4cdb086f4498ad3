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

use power_parameters::{BareIpv6Policy, PowerFieldScope, PowerParametersConfig};

#[test]
fn test_default_config() {
    figment::Jail::expect_with(|_jail| {
        let config = PowerParametersConfig::load(None)?;
        assert_eq!(config, PowerParametersConfig::default());
        assert_eq!(config.scopes, PowerFieldScope::ALL.to_vec());
        assert_eq!(config.bare_ipv6, BareIpv6Policy::Reject);
        assert!(config.catalog_path.is_none());
        Ok(())
    });
}

#[test]
fn test_config_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "power.toml",
            r#"
                catalog_path = "/etc/power/power_types.json"
                scopes = ["bmc"]
                bare_ipv6 = "accept"
            "#,
        )?;

        let config = PowerParametersConfig::load(Some(Path::new("power.toml")))?;
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/power/power_types.json"))
        );
        assert_eq!(config.scopes, vec![PowerFieldScope::Bmc]);
        assert_eq!(config.bare_ipv6, BareIpv6Policy::Accept);
        Ok(())
    });
}

#[test]
fn test_env_overrides_config_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "power.toml",
            r#"
                catalog_path = "/etc/power/power_types.json"
                bare_ipv6 = "accept"
            "#,
        )?;
        jail.set_env("POWER_PARAMS_BARE_IPV6", "reject");
        jail.set_env("POWER_PARAMS_CATALOG_PATH", "/tmp/catalog.yaml");

        let config = PowerParametersConfig::load(Some(Path::new("power.toml")))?;
        assert_eq!(config.bare_ipv6, BareIpv6Policy::Reject);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.yaml")));
        assert_eq!(config.scopes, PowerFieldScope::ALL.to_vec());
        Ok(())
    });
}

#[test]
fn test_invalid_config_value() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("power.toml", r#"scopes = ["chassis"]"#)?;
        assert!(PowerParametersConfig::load(Some(Path::new("power.toml"))).is_err());
        Ok(())
    });
}

#[test]
fn test_missing_config_file() {
    figment::Jail::expect_with(|_jail| {
        let err = PowerParametersConfig::load(Some(Path::new("missing.toml")))
            .expect_err("a named config file has to exist");
        assert!(err.to_string().contains("missing.toml"), "{err}");
        assert!(PowerParametersConfig::load(Some(Path::new("/nonexistent/typo.toml"))).is_err());
        Ok(())
    });
}

#[test]
fn test_scopes_from_env() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("POWER_PARAMS_SCOPES", "bmc");
        let config = PowerParametersConfig::load(None)?;
        assert_eq!(config.scopes, vec![PowerFieldScope::Bmc]);

        jail.set_env("POWER_PARAMS_SCOPES", "node, bmc");
        let config = PowerParametersConfig::load(None)?;
        assert_eq!(
            config.scopes,
            vec![PowerFieldScope::Node, PowerFieldScope::Bmc]
        );

        jail.set_env("POWER_PARAMS_SCOPES", "[bmc]");
        let config = PowerParametersConfig::load(None)?;
        assert_eq!(config.scopes, vec![PowerFieldScope::Bmc]);

        jail.set_env("POWER_PARAMS_SCOPES", "bmc,chassis");
        assert!(PowerParametersConfig::load(None).is_err());
        Ok(())
    });
}
