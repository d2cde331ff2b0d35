use std::path::Path;

use curio::options::Options;
use curio::Viewer;

fn main() {
    env_logger::init();

    // Sole optional argument: a TOML options preset.
    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => Some(options),
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let mut builder = Viewer::builder().with_title("Curio");
    if let Some(options) = options {
        builder = builder.with_options(options);
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
