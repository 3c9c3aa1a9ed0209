use std::path::PathBuf;

use log::{error, info};
use rayon::prelude::*;

use crate::generation::catalog::{FixtureSpec, catalog};
use crate::generation::fixture::write_fixture;
use crate::utils::error::Result;

/// Where and how the catalog is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    /// Write fixtures on the rayon pool instead of one after another.
    pub parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            parallel: false,
        }
    }
}

/// Regenerate every catalog fixture and return the written paths in
/// catalog order.
///
/// Sequential runs stop at the first failure. Parallel runs attempt every
/// fixture and report the first failure in catalog order.
pub fn generate_fixtures(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    let specs = catalog();
    info!(
        "Generating {} fixtures into {}",
        specs.len(),
        config.output_dir.display()
    );

    if !config.parallel {
        return specs.iter().map(|spec| write_spec(config, spec)).collect();
    }

    let results: Vec<Result<PathBuf>> = specs
        .par_iter()
        .map(|spec| write_spec(config, spec))
        .collect();

    let mut paths = Vec::with_capacity(results.len());
    let mut first_error = None;
    for result in results {
        match result {
            Ok(path) => paths.push(path),
            Err(e) if first_error.is_none() => first_error = Some(e),
            Err(_) => {}
        }
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(paths),
    }
}

fn write_spec(config: &GeneratorConfig, spec: &FixtureSpec) -> Result<PathBuf> {
    write_fixture(&config.output_dir, spec.name, spec.kind, &spec.features).inspect_err(|e| {
        error!("{}", e);
    })
}
