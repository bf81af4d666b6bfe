pub fn run() -> anyhow::Result<()> {
    println!("mantra {}", env!("CARGO_PKG_VERSION"));
    println!("Periodic context refresh for Claude Code");
    Ok(())
}
