pub fn run() -> anyhow::Result<()> {
    println!("healthcoach {}", env!("CARGO_PKG_VERSION"));
    println!("Budget-aware health log compression with explainable retention");
    Ok(())
}
