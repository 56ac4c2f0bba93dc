use std::path::Path;
use std::process;

use log::{error, info};

use robot_footprint::prelude::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("robot_footprint v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = try_main() {
        error!("{}", e);
        process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let config = InputConfig::load(Path::new(DEFAULT_INPUT_PATH))?;
    let mut canvas = BitMapCanvas::default();
    run(&config, &mut canvas)
}
