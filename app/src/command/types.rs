use kanto_core::{CATEGORIES, capitalize};

/// Strategy for listing the selectable types.
#[derive(Debug, Clone, Copy)]
pub struct TypesStrategy;

impl super::CommandStrategy for TypesStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        for category in CATEGORIES {
            println!("{category:<10} {}", capitalize(category));
        }
        Ok(())
    }
}
