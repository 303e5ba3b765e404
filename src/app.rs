use std::time::Duration;

use crate::cli::colors::ColorSupport;
use crate::cli::output::Console;
use crate::client::HospitalClient;
use crate::config::Config;
use crate::error::Result;

pub struct AppContext {
    pub config: Config,
    pub client: HospitalClient,
    pub console: Console,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = Config::load(cli.config.as_deref())?;
        if let Some(base_url) = &cli.base_url {
            config.target.base_url.clone_from(base_url);
        }
        config.validate()?;

        let client = HospitalClient::new(
            config.base_url(),
            Duration::from_secs(config.target.timeout_secs),
        )?;

        Ok(Self {
            config,
            client,
            console: Console::new(ColorSupport::detect()),
        })
    }
}
