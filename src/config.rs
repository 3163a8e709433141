use std::path::{Path, PathBuf};

use t9suggest::models::Config;

const SAMPLE_CONFIG: &str = include_str!("../config.sample.toml");

/// Config file picked up when no --config flag is given.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// Load and merge one or more config files. With no paths, the default config
/// file is loaded if it exists, otherwise built-in defaults are used.
pub fn load_all(paths: &[PathBuf]) -> Result<Config, Box<dyn std::error::Error>> {
    if paths.is_empty() {
        let path = Path::new(DEFAULT_CONFIG);
        if !path.exists() {
            log::info!("no config file found, using defaults");
            return Ok(Config::default());
        }
        return load_all(&[path.to_path_buf()]);
    }

    let mut config: Option<Config> = None;
    for path in paths {
        log::info!("loading config: {}", path.display());
        let c = read_file(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        if let Some(ref mut existing) = config {
            merge(existing, c);
        } else {
            config = Some(c);
        }
    }

    Ok(config.unwrap_or_default())
}

/// Generate sample config file.
pub fn generate_sample(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        return Err("config file already exists".into());
    }
    std::fs::write(path, SAMPLE_CONFIG)?;
    Ok(())
}

/// Load configuration from a given TOML file.
fn read_file(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

/// Merge the given src config into the dest config struct.
fn merge(dest: &mut Config, src: Config) {
    if !src.app.address.is_empty() {
        dest.app.address = src.app.address;
    }
    if !src.corpus.path.is_empty() {
        dest.corpus.path = src.corpus.path;
    }
    if src.api.max_exact > 0 {
        dest.api.max_exact = src.api.max_exact;
    }
    if src.api.max_completions > 0 {
        dest.api.max_completions = src.api.max_completions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let p = dir.join(name);
        std::fs::write(&p, body).unwrap();
        p
    }

    #[test]
    fn sample_config_parses() {
        let cfg: Config = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(cfg.app.address(), "127.0.0.1:9000");
        assert_eq!(cfg.corpus.path, "corpus.txt");
        assert_eq!(cfg.api.max_exact, 0);
    }

    #[test]
    fn later_files_override_earlier_ones() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(
            dir.path(),
            "a.toml",
            "[app]\naddress = \"0.0.0.0:80\"\n[corpus]\npath = \"a.txt\"\n[api]\nmax_exact = 3\n",
        );
        let b = write(dir.path(), "b.toml", "[corpus]\npath = \"b.txt\"\n");

        let cfg = load_all(&[a, b]).unwrap();
        assert_eq!(cfg.app.address(), "0.0.0.0:80");
        assert_eq!(cfg.corpus.path, "b.txt");
        assert_eq!(cfg.api.max_exact, 3);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_all(&[dir.path().join("nope.toml")]).is_err());
    }

    #[test]
    fn refuses_to_overwrite_config() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        generate_sample(&p).unwrap();
        assert!(generate_sample(&p).is_err());
        assert_eq!(std::fs::read_to_string(&p).unwrap(), SAMPLE_CONFIG);
    }
}
