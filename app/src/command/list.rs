use kanto_config::Config;
use kanto_core::display::is_known_category;
use kanto_core::{FilterState, apply};
use tracing::{info, warn};

use super::{build_loader, load_catalog, render};

/// Input parameters for the List command strategy.
#[derive(Debug, Clone, Default)]
pub struct ListInput {
    pub filter: FilterState,
    /// Emit the visible entities as a JSON array instead of cards.
    pub json: bool,
}

/// Strategy for a one-shot load, filter and print.
///
/// # Design
/// - Loads the catalog once, applies `ListInput::filter`, prints and exits
/// - Unknown types are only warned about; the filter still runs as given
/// - `--json` serializes the visible entities instead of rendering cards
#[derive(Debug, Clone, Copy)]
pub struct ListStrategy;

impl super::CommandStrategy for ListStrategy {
    type Input = ListInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let loader = build_loader(&config)?;

        let category = &input.filter.selected_category;
        if !category.is_empty() && !is_known_category(category) {
            warn!("Unknown type '{category}', results will likely be empty");
        }

        let entities = load_catalog(&loader).await?;
        info!("Applying filter: {:?}", input.filter);

        if input.json {
            let visible = apply(&entities, &input.filter);
            println!("{}", serde_json::to_string_pretty(&visible)?);
        } else {
            print!("{}", render::results(&entities, &input.filter));
        }

        Ok(())
    }
}
