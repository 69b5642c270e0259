use autosignup_demo::demo_cli;

fn main() -> anyhow::Result<()> {
    demo_cli::run()?;
    Ok(())
}
