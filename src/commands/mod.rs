//! Command implementations for the fpl-season CLI

pub mod analyze;
pub mod common;
pub mod fixtures;
pub mod players;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use crate::{
    cli::SourceArgs,
    core::{cache::cache_root, DEFAULT_BASE_URL},
    dataset::DataSource,
    DATA_DIR_ENV_VAR, DATA_URL_ENV_VAR,
};

/// Resolve where dataset files come from.
///
/// Explicit flags win over environment variables: `--data-dir`, then
/// `--base-url`, then `FPL_DATA_DIR`, then `FPL_DATA_URL`, and finally the
/// public repository.
pub fn resolve_source(args: &SourceArgs) -> DataSource {
    let env = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

    if let Some(root) = &args.data_dir {
        return DataSource::Local { root: root.clone() };
    }
    if let Some(url) = &args.base_url {
        return remote(url.clone(), args.refresh);
    }
    if let Some(root) = env(DATA_DIR_ENV_VAR) {
        return DataSource::Local {
            root: PathBuf::from(root),
        };
    }
    let base_url = env(DATA_URL_ENV_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    remote(base_url, args.refresh)
}

fn remote(base_url: String, refresh: bool) -> DataSource {
    DataSource::Remote {
        base_url,
        cache_dir: Some(cache_root()),
        refresh,
    }
}
