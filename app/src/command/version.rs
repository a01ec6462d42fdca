/// Strategy for displaying version information.
///
/// # Design
/// - Stateless: no config, no network
#[derive(Debug, Clone, Copy)]
pub struct VersionStrategy;

impl super::CommandStrategy for VersionStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        println!("kanto {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}
