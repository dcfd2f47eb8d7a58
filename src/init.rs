use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::http::Templates;
use crate::models::{Config, DEFAULT_ADDRESS, DEFAULT_DATASET};

const SAMPLE_CONFIG: &str = include_str!("../config.sample.toml");

/// Config file read when `--config` is not given. It may be absent.
pub const DEFAULT_CONFIG: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] toml::de::Error),

    #[error("config file already exists")]
    Exists,
}

/// Initialize logger.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            use std::io::Write;
            let level = if record.level() != log::Level::Info {
                format!("[{}] ", record.level())
            } else {
                String::new()
            };
            writeln!(
                buf,
                "{} {}:{} {}{}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                level,
                record.args()
            )
        })
        .init();
}

/// Load and merge one or more config files. Only the default config file may be
/// missing; any other path that doesn't exist is an error. Built-in defaults fill
/// whatever is left empty.
pub fn init_config(paths: &[PathBuf]) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    for path in paths {
        if !path.exists() && path.as_path() == Path::new(DEFAULT_CONFIG) {
            log::warn!("config '{}' not found, using defaults", path.display());
            continue;
        }

        log::info!("loading config: {}", path.display());
        let c = read_config(path)?;
        merge_config(&mut config, c);
    }

    if config.app.address.is_empty() {
        config.app.address = DEFAULT_ADDRESS.to_string();
    }
    if config.app.dataset.is_empty() {
        config.app.dataset = DEFAULT_DATASET.to_string();
    }

    Ok(config)
}

/// Load configuration from TOML file.
fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merge the given src config into the dest config struct.
fn merge_config(dest: &mut Config, src: Config) {
    if !src.app.address.is_empty() {
        dest.app.address = src.app.address;
    }
    if !src.app.root_url.is_empty() {
        dest.app.root_url = src.app.root_url;
    }
    if !src.app.dataset.is_empty() {
        dest.app.dataset = src.app.dataset;
    }
    if src.app.max_results > 0 {
        dest.app.max_results = src.app.max_results;
    }
}

/// Generate sample config file.
pub fn generate_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::Exists);
    }
    std::fs::write(path, SAMPLE_CONFIG)?;
    Ok(())
}

/// Initialize site templates from embedded files.
pub fn init_templates() -> Result<tera::Tera, tera::Error> {
    let mut tera = tera::Tera::default();
    tera.autoescape_on(vec![".html"]);

    // Added in one go so that `extends` resolves regardless of iteration order.
    let mut raw = Vec::new();
    for file in Templates::iter() {
        let path = file.as_ref();
        if !path.ends_with(".html") {
            continue;
        }
        if let Some(content) = Templates::get(path) {
            if let Ok(s) = std::str::from_utf8(&content.data) {
                raw.push((path.to_string(), s.to_string()));
            }
        }
    }
    tera.add_raw_templates(raw)?;

    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_files() {
        let cfg = init_config(&[]).unwrap();
        assert_eq!(cfg.app.address, DEFAULT_ADDRESS);
        assert_eq!(cfg.app.dataset, DEFAULT_DATASET);
        assert_eq!(cfg.app.max_results, 0);

        // The default file is optional (the test cwd has none).
        assert!(!Path::new(DEFAULT_CONFIG).exists());
        let cfg = init_config(&[PathBuf::from(DEFAULT_CONFIG)]).unwrap();
        assert_eq!(cfg.app.dataset, DEFAULT_DATASET);
    }

    #[test]
    fn explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.toml");
        std::fs::write(&a, "[app]\ndataset = \"a.json\"\n").unwrap();
        let missing = dir.path().join("missing.toml");

        let err = init_config(&[a, missing]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound
        ));

        // A missing file named like the default but elsewhere is still explicit.
        let elsewhere = dir.path().join(DEFAULT_CONFIG);
        assert!(init_config(&[elsewhere]).is_err());
    }

    #[test]
    fn merge_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.toml");
        let b = dir.path().join("b.toml");
        std::fs::write(&a, "[app]\naddress = \":8000\"\ndataset = \"a.json\"\n").unwrap();
        std::fs::write(&b, "[app]\ndataset = \"https://x.org/b.json\"\nmax_results = 50\n")
            .unwrap();

        let cfg = init_config(&[a, b]).unwrap();
        assert_eq!(cfg.app.address, ":8000");
        assert_eq!(cfg.app.dataset, "https://x.org/b.json");
        assert_eq!(cfg.app.max_results, 50);
    }

    #[test]
    fn bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.toml");
        std::fs::write(&a, "[app\n").unwrap();
        assert!(matches!(init_config(&[a]), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn sample_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        generate_config(&path).unwrap();
        assert!(matches!(generate_config(&path), Err(ConfigError::Exists)));

        let cfg = init_config(&[path]).unwrap();
        assert_eq!(cfg.app.address, DEFAULT_ADDRESS);
        assert_eq!(cfg.app.dataset, DEFAULT_DATASET);
    }

    #[test]
    fn templates_load() {
        let tpl = init_templates().unwrap();
        let names: Vec<_> = tpl.get_template_names().collect();
        assert!(names.contains(&"index.html"));
        assert!(names.contains(&"error.html"));
    }
}
