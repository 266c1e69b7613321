//! Runtime configuration: which catalog to check against and how submissions are gated.
use crate::catalog::{Catalog, CatalogError};
use crate::submission::{SubmissionPolicy, UnknownPolicy};
use std::path::PathBuf;
use thiserror::Error;

pub const CATALOG_PATH_VAR: &str = "FORMULA_CATALOG_PATH";
pub const SUBMISSION_POLICY_VAR: &str = "FORMULA_SUBMISSION_POLICY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {source}")]
    InvalidVar {
        var: &'static str,
        #[source]
        source: UnknownPolicy,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// JSON catalog table. `None` uses the compiled-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub submission_policy: SubmissionPolicy,
}

impl Config {
    /// Reads `FORMULA_CATALOG_PATH` and `FORMULA_SUBMISSION_POLICY`.
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = lookup(CATALOG_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let submission_policy = match lookup(SUBMISSION_POLICY_VAR) {
            Some(raw) => raw
                .parse::<SubmissionPolicy>()
                .map_err(|source| ConfigError::InvalidVar { var: SUBMISSION_POLICY_VAR, source })?,
            None => SubmissionPolicy::default(),
        };

        Ok(Self { catalog_path, submission_policy })
    }

    /// Loads the configured catalog.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => Ok(Catalog::load(path)?),
            None => {
                tracing::debug!("using built-in catalog");
                Ok(Catalog::builtin())
            }
        }
    }
}
