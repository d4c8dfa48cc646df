use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let overlay_path = std::env::args().nth(1).map(PathBuf::from);

    set_viewer::run(overlay_path)?;

    Ok(())
}
