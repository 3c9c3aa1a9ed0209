use gpkg_fixtures::{GeneratorConfig, generate_fixtures};
use log::{error, info};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    match generate_fixtures(&GeneratorConfig::default()) {
        Ok(paths) => info!("Generated {} fixtures", paths.len()),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
