//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Directory of static files served for every non-card path.
    pub static_dir: PathBuf,

    /// Path to the JSON card catalog loaded at startup.
    pub catalog_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `DECKVIEW_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `DECKVIEW_STATIC_DIR`: Static file directory (default: "./web/static")
    /// - `DECKVIEW_CATALOG`: Card catalog path (default: "./data/cards.json")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("DECKVIEW_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let static_dir = PathBuf::from(
            std::env::var("DECKVIEW_STATIC_DIR").unwrap_or_else(|_| "./web/static".to_string()),
        );

        let catalog_path = PathBuf::from(
            std::env::var("DECKVIEW_CATALOG").unwrap_or_else(|_| "./data/cards.json".to_string()),
        );

        tracing::info!(
            bind_addr = %bind_addr,
            static_dir = %static_dir.display(),
            catalog_path = %catalog_path.display(),
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            static_dir,
            catalog_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "DECKVIEW_BIND_ADDR",
        "DECKVIEW_STATIC_DIR",
        "DECKVIEW_CATALOG",
    ];

    /// Helper to run config tests with isolated env vars.
    /// Uses a mutex to prevent concurrent env var races.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8080");
            assert_eq!(config.static_dir, PathBuf::from("./web/static"));
            assert_eq!(config.catalog_path, PathBuf::from("./data/cards.json"));
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("DECKVIEW_BIND_ADDR", "127.0.0.1:9090"),
                ("DECKVIEW_STATIC_DIR", "/srv/deckview/static"),
                ("DECKVIEW_CATALOG", "/srv/deckview/cards.json"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "127.0.0.1:9090");
                assert_eq!(config.static_dir, PathBuf::from("/srv/deckview/static"));
                assert_eq!(config.catalog_path, PathBuf::from("/srv/deckview/cards.json"));
            },
        );
    }
}
