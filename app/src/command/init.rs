use kanto_config::Config;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/kanto/config.json`.
///
/// # Errors
/// Fails if the home directory cannot be found or the file already exists;
/// an existing config is never overwritten.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::create_config()?;

        println!("Created config file at: {}", path.display());
        println!();
        println!("Configuration options:");
        println!("   - api.base_url: catalog API root (default https://pokeapi.co/api/v2)");
        println!("   - api.limit: number of entries requested from the listing");
        println!("   - api.user_agent: User-Agent header sent with every request");
        println!();
        Ok(())
    }
}
