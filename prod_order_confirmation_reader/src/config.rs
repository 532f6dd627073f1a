use anyhow::Context;
use prod_order_confirmation_client::SANDBOX_BASE_URL;
pub use sap_entrypoint::Environment;
use std::path::PathBuf;

pub static DEFAULT_INPUT_PATH: &str =
    "./Inputs/SDC_Production_Order_Confirmation_Conf_By_OrderID_Seq_Op_sample.json";

pub static API_KEY_VAR: &str = "SAP_API_KEY";

/// Read production order confirmations for the keys in an SDC input document.
///
/// Required environment variables:
/// - SAP_API_KEY
#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct Args {
    /// path of the SDC input document
    #[arg(long, short, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// base url the OData service is mounted under
    #[arg(long, env = "SAP_API_BASE_URL", default_value = SANDBOX_BASE_URL)]
    pub base_url: String,
}

/// The configuration parameters for the reader
pub struct Config {
    /// sent as the `APIKey` header
    pub api_key: String,
    pub base_url: String,
    pub input: PathBuf,
    /// The environment we are in
    pub environment: Environment,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("input", &self.input)
            .field("environment", &self.environment)
            .finish()
    }
}

impl Config {
    pub fn from_env(args: Args, environment: Environment) -> anyhow::Result<Self> {
        Self::new(args, environment, std::env::var(API_KEY_VAR))
    }

    fn new(
        args: Args,
        environment: Environment,
        api_key: Result<String, std::env::VarError>,
    ) -> anyhow::Result<Self> {
        let api_key = api_key.context("SAP_API_KEY must be provided")?;
        if api_key.trim().is_empty() {
            anyhow::bail!("SAP_API_KEY must not be empty");
        }

        Ok(Config {
            api_key,
            base_url: args.base_url,
            input: args.input,
            environment,
        })
    }
}
