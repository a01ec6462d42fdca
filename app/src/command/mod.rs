//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is its own strategy type with its own input, dispatched
//! statically from `main`.

use kanto_api::PokeApiLoader;
use kanto_config::Config;
use kanto_core::{CatalogSource, Entity};
use tracing::{error, info};

mod browse;
mod info;
mod init;
mod list;
mod render;
mod types;
mod version;

pub use browse::BrowseStrategy;
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use list::{ListInput, ListStrategy};
pub use types::TypesStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Design
/// - **Static dispatch**: `main` calls each strategy by its concrete type
/// - **Typed input**: each strategy declares its own `Input`, so parameters
///   are passed without runtime casting or boxing
/// - **Extensibility**: a new subcommand is a new type implementing this trait
///
/// # Example
/// ```rust
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if the config cannot be read, the catalog fails to
    /// load, or writing to the terminal fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

fn build_loader(config: &Config) -> anyhow::Result<PokeApiLoader> {
    let loader = PokeApiLoader::new(config.api.base_url.clone(), config.api.limit)
        .with_user_agent(&config.api.user_agent)?;
    Ok(loader)
}

/// Runs the one-shot load. On failure the detail goes to the log and the
/// caller only sees the user-facing message.
async fn load_catalog(source: &impl CatalogSource) -> anyhow::Result<Vec<Entity>> {
    info!("Loading catalog");
    match source.load().await {
        Ok(entities) => Ok(entities),
        Err(e) => {
            error!("Catalog load failed: {e}");
            anyhow::bail!(e.user_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanto_core::LoadError;
    use kanto_core::error::Result;

    struct FailingSource;

    #[async_trait::async_trait]
    impl CatalogSource for FailingSource {
        async fn load(&self) -> Result<Vec<Entity>> {
            Err(LoadError::parse("listing body had no results"))
        }
    }

    #[tokio::test]
    async fn load_failure_surfaces_only_the_user_message() {
        let Err(err) = load_catalog(&FailingSource).await else {
            panic!("load should fail");
        };
        assert_eq!(err.to_string(), LoadError::USER_MESSAGE);
    }

    #[test]
    fn loader_uses_configured_endpoint() {
        let mut config = Config::default();
        config.api.base_url = "http://localhost:9999/api".to_string();
        config.api.limit = 12;

        let Ok(loader) = build_loader(&config) else {
            panic!("loader should build");
        };
        assert_eq!(loader.base_url(), "http://localhost:9999/api");
        assert_eq!(loader.limit(), 12);
    }
}
