use std::env::VarError;
use thiserror::Error;

const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Selects the log format. Read from `ENVIRONMENT` as `prod`, `dev` or `local`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::EnumString)]
pub enum Environment {
    /// a real S/4HANA tenant
    #[default]
    #[strum(serialize = "prod")]
    Production,
    /// a development tenant or the SAP API hub sandbox
    #[strum(serialize = "dev")]
    Develop,
    /// a developer machine
    #[strum(serialize = "local")]
    Local,
}

/// Why `ENVIRONMENT` did not yield an [Environment]
#[derive(Debug, Error)]
pub enum EnvironmentErr {
    /// the variable is unset or not unicode
    #[error("unable to read ENVIRONMENT: {0}")]
    VarErr(#[from] VarError),
    /// the value is none of `prod`, `dev`, `local`
    #[error("unrecognized ENVIRONMENT value: {0}")]
    InvalidValue(#[from] strum::ParseError),
}

impl Environment {
    /// read `ENVIRONMENT` from the process environment
    pub fn from_env() -> Result<Self, EnvironmentErr> {
        Self::from_var(std::env::var(ENVIRONMENT_VAR))
    }

    fn from_var(var: Result<String, VarError>) -> Result<Self, EnvironmentErr> {
        Ok(var?.trim().parse()?)
    }
}
