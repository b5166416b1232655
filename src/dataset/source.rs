// Dataset file sources and the season loader.

use std::path::{Path, PathBuf};

use reqwest::Client;
use tracing::{debug, info, warn};

use super::{
    raw::{parse_fixtures, parse_performances, parse_players, parse_teams},
    Dataset, PerformanceRecord,
};
use crate::cli::types::{Gameweek, Season};
use crate::core::{
    cache::cached_file_path, fetch_text, http_client, try_read_to_string, write_string,
};
use crate::{FplError, Result};

pub const PLAYERS_FILE: &str = "players_raw.csv";
pub const TEAMS_FILE: &str = "teams.csv";
pub const FIXTURES_FILE: &str = "fixtures.csv";
pub const MERGED_GW_FILE: &str = "gws/merged_gw.csv";

/// Where dataset files are read from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Download `<base_url>/<season>/<file>`, caching files below `cache_dir`
    /// when set. `refresh` ignores existing cached copies.
    Remote {
        base_url: String,
        cache_dir: Option<PathBuf>,
        refresh: bool,
    },
    /// Read `<root>/<season>/<file>` from a local checkout.
    Local { root: PathBuf },
}

impl DataSource {
    pub fn describe(&self, season: Season) -> String {
        match self {
            DataSource::Remote { base_url, .. } => {
                format!("{}/{}", base_url.trim_end_matches('/'), season.dir_name())
            }
            DataSource::Local { root } => root.join(season.dir_name()).display().to_string(),
        }
    }
}

/// Reads the season's tables from a [`DataSource`].
pub struct DatasetLoader {
    source: DataSource,
    season: Season,
    client: Option<Client>,
}

impl DatasetLoader {
    pub fn new(source: DataSource, season: Season) -> Result<Self> {
        let client = match source {
            DataSource::Remote { .. } => Some(http_client()?),
            DataSource::Local { .. } => None,
        };
        Ok(Self {
            source,
            season,
            client,
        })
    }

    /// Read one file of the season, e.g. `fixtures.csv` or `gws/gw3.csv`.
    ///
    /// Any failure is reported as [`FplError::MissingTable`] naming the file.
    pub async fn read_file(&self, relative: &str) -> Result<String> {
        let missing = |reason: String| FplError::MissingTable {
            table: relative.to_string(),
            reason,
        };

        match &self.source {
            DataSource::Local { root } => {
                let path = root.join(self.season.dir_name()).join(relative);
                read_lossy(&path).map_err(|e| missing(format!("{}: {}", path.display(), e)))
            }
            DataSource::Remote {
                base_url,
                cache_dir,
                refresh,
            } => {
                let cache_path = cache_dir
                    .as_deref()
                    .map(|dir| cached_file_path(dir, self.season, relative));

                if let (Some(path), false) = (&cache_path, *refresh) {
                    if let Some(s) = try_read_to_string(path) {
                        debug!(file = relative, "using cached copy");
                        return Ok(s);
                    }
                }

                let url = format!(
                    "{}/{}/{}",
                    base_url.trim_end_matches('/'),
                    self.season.dir_name(),
                    relative
                );
                let client = match &self.client {
                    Some(c) => c,
                    None => return Err(missing("no HTTP client".to_string())),
                };
                let body = fetch_text(client, &url)
                    .await
                    .map_err(|e| missing(e.to_string()))?;

                if let Some(path) = &cache_path {
                    if let Err(e) = write_string(path, &body) {
                        warn!("could not cache {}: {}", path.display(), e);
                    }
                }
                Ok(body)
            }
        }
    }

    /// Load every table and build the [`Dataset`].
    ///
    /// Players, fixtures and gameweek data are required; teams are optional
    /// and only affect how team names are displayed.
    pub async fn load(&self) -> Result<Dataset> {
        let players = parse_players(self.read_file(PLAYERS_FILE).await?.as_bytes())?;
        info!(count = players.len(), "players loaded");

        let teams = match self.read_file(TEAMS_FILE).await {
            Ok(text) => parse_teams(text.as_bytes())?,
            Err(e) => {
                warn!("continuing without team names: {}", e);
                Vec::new()
            }
        };

        let fixtures = parse_fixtures(self.read_file(FIXTURES_FILE).await?.as_bytes())?;
        info!(count = fixtures.len(), "fixtures loaded");

        let performances = self.load_performances().await?;
        info!(count = performances.len(), "gameweek rows loaded");

        Ok(Dataset::new(
            self.season,
            players,
            teams,
            fixtures,
            performances,
        ))
    }

    /// `gws/merged_gw.csv`, or the individual `gws/gwN.csv` files up to the
    /// first one that is missing.
    async fn load_performances(&self) -> Result<Vec<PerformanceRecord>> {
        let merged_err = match self.read_file(MERGED_GW_FILE).await {
            Ok(text) => return parse_performances(text.as_bytes()),
            Err(e) => e,
        };
        warn!("{}; trying individual gameweek files", merged_err);

        let mut records = Vec::new();
        for gw in 1..=Gameweek::MAX {
            let file = format!("gws/gw{}.csv", gw);
            match self.read_file(&file).await {
                Ok(text) => records.extend(parse_performances(text.as_bytes())?),
                Err(e) => {
                    debug!("stopping at gameweek {}: {}", gw, e);
                    break;
                }
            }
        }

        if records.is_empty() {
            return Err(merged_err);
        }
        Ok(records)
    }
}

fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
