use userdeck::logging;
use userdeck::ui;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    ui::runtime::run()?;
    Ok(())
}
