#![deny(missing_docs)]
//! Standardized initialization for the binaries in this workspace.
//! Loads `.env`, installs the panic hook and picks the tracing output format from the [Environment].

use tracing_subscriber::EnvFilter;

mod environment;

pub use environment::{Environment, EnvironmentErr};

/// defines how the process is initialized
#[derive(Debug)]
pub struct SapEntrypoint {
    env: Environment,
}

impl Default for SapEntrypoint {
    fn default() -> Self {
        // `ENVIRONMENT` may live in `.env`
        dotenv::dotenv().ok();
        SapEntrypoint {
            env: Environment::from_env().unwrap_or_default(),
        }
    }
}

/// sentinel struct which guarantees that we called [SapEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(Environment);

impl InitializedEntrypoint {
    /// the environment the process was initialized for
    pub fn environment(&self) -> Environment {
        self.0
    }
}

impl SapEntrypoint {
    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint(self.env)
    }
}
