use crate::api::{Access, OppApi};
use crate::config::OppConfig;
use crate::error::{OppError, Result};
use crate::store::sqlite::SqliteStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "OPPDB_HOME";

pub struct OppContext {
    pub api: OppApi<SqliteStore>,
    pub config: OppConfig,
    pub db_path: PathBuf,
}

/// Where config and the default database live: `$OPPDB_HOME` if set, otherwise
/// the platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "oppdb", "oppdb")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| OppError::Schema("Could not determine a data directory".to_string()))
}

/// Resolve the database file: an explicit override wins, then the configured name.
pub fn resolve_db_path(data_dir: &Path, config: &OppConfig, db_override: Option<&Path>) -> PathBuf {
    match db_override {
        Some(path) => path.to_path_buf(),
        None => config.database_path(data_dir),
    }
}

/// Open the store for this process. The connection lives as long as the context.
///
/// Opening always brings the schema up to date, in either access mode. `Public`
/// only restricts the operations the returned API exposes; it does not open the
/// file read-only.
pub fn initialize(db_override: Option<&Path>, access: Access) -> Result<OppContext> {
    let dir = data_dir()?;
    let config = OppConfig::load(&dir)?;
    let db_path = resolve_db_path(&dir, &config, db_override);

    let store = SqliteStore::open(&db_path)?;
    let api = OppApi::new(store, dir).with_access(access);

    Ok(OppContext {
        api,
        config,
        db_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_beats_config() {
        let dir = Path::new("/data");
        let config = OppConfig::default();
        assert_eq!(
            resolve_db_path(dir, &config, Some(Path::new("/tmp/x.db"))),
            PathBuf::from("/tmp/x.db")
        );
        assert_eq!(
            resolve_db_path(dir, &config, None),
            PathBuf::from("/data/opportunities.db")
        );
    }

    #[test]
    fn configured_database_is_relative_to_data_dir() {
        let dir = Path::new("/data");
        let config = OppConfig {
            database: "boards/main.db".into(),
            ..Default::default()
        };
        assert_eq!(
            resolve_db_path(dir, &config, None),
            PathBuf::from("/data/boards/main.db")
        );
    }
}
