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

// src/catalog.rs
// The power type catalog is the list of power types a site supports,
// as published by the region controller. It can be loaded from a JSON
// or YAML document containing a list of power types.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::power_type::{PowerType, power_type_from_name};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read power type catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Power type catalog {0} has no .json, .yaml or .yml extension")]
    UnknownFormat(PathBuf),
    #[error("Invalid JSON power type catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid YAML power type catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Power type {0} is defined more than once")]
    DuplicatePowerType(String),
    #[error("Power type {power_type} defines field {field} more than once")]
    DuplicateField { power_type: String, field: String },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct PowerTypeCatalog {
    power_types: Vec<PowerType>,
}

impl PowerTypeCatalog {
    // new builds a catalog, checking that power type names are
    // unique and that field names are unique within a power type.
    pub fn new(power_types: Vec<PowerType>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        for power_type in &power_types {
            if !names.insert(power_type.name.as_str()) {
                return Err(CatalogError::DuplicatePowerType(power_type.name.clone()));
            }
            let mut field_names = HashSet::new();
            for field in &power_type.fields {
                if !field_names.insert(field.name.as_str()) {
                    return Err(CatalogError::DuplicateField {
                        power_type: power_type.name.clone(),
                        field: field.name.clone(),
                    });
                }
            }
        }
        Ok(Self { power_types })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        Self::new(serde_yaml::from_str(yaml)?)
    }

    // from_path loads a catalog file, picking the format
    // from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents)?,
            Some("yaml" | "yml") => Self::from_yaml_str(&contents)?,
            _ => return Err(CatalogError::UnknownFormat(path.to_path_buf())),
        };

        tracing::debug!(
            path = %path.display(),
            power_types = catalog.len(),
            "Loaded power type catalog"
        );
        for power_type in catalog
            .iter()
            .filter(|power_type| !power_type.missing_packages.is_empty())
        {
            tracing::warn!(
                power_type = %power_type.name,
                missing_packages = ?power_type.missing_packages,
                "Power type is missing packages on the region controller"
            );
        }

        Ok(catalog)
    }

    pub fn find(&self, name: Option<&str>) -> Option<&PowerType> {
        power_type_from_name(&self.power_types, name)
    }

    // chassis_types returns the power types that can be used
    // for adding a chassis.
    pub fn chassis_types(&self) -> Vec<&PowerType> {
        self.power_types
            .iter()
            .filter(|power_type| power_type.chassis)
            .collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.power_types
            .iter()
            .map(|power_type| power_type.name.as_str())
            .collect()
    }

    pub fn power_types(&self) -> &[PowerType] {
        &self.power_types
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PowerType> {
        self.power_types.iter()
    }

    pub fn len(&self) -> usize {
        self.power_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.power_types.is_empty()
    }
}
