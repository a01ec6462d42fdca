use kanto_config::Config;

/// Strategy for displaying the effective configuration.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::config_path()?;
        let config = Config::load()?;

        println!("=== kanto Configuration ===\n");

        println!("Config file:");
        if path.exists() {
            println!("  {}", path.display());
        } else {
            println!("  {} (not found, using defaults)", path.display());
        }
        println!();

        println!("API:");
        println!("  Base URL: {}", config.api.base_url);
        println!("  Listing Limit: {}", config.api.limit);
        println!("  User Agent: {}", config.api.user_agent);

        Ok(())
    }
}
