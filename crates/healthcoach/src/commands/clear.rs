use super::open_store;
use healthcoach_core::Config;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config)?;
    store.clear()?;
    println!("Cleared health memory at {}", store.path().display());
    Ok(())
}
