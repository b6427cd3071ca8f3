use std::{
    collections::HashMap,
    env, fs,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use directories::BaseDirs;

use crate::execution::litex::DEFAULT_PROGRAM;

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self::load_from(default_config_path())
    }

    /// Defaults, then `path` if it exists, then `LITEX_*` environment
    /// variables.
    pub fn load_from(config_path: PathBuf) -> Self {
        let mut map = default_map();
        map.extend(read_rc_file(&config_path));

        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self {
            inner: map,
            config_path,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).cloned()
    }

    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|v| v.trim().parse::<usize>().ok())
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.inner.insert(key.to_string(), value.into());
    }

    pub fn litex_path(&self) -> PathBuf {
        self.get("LITEX_PATH")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM))
    }

    /// Configured worker count; unparsable or zero values fall back to 1.
    pub fn max_workers(&self) -> usize {
        match self.get_usize("LITEX_MAX_WORKERS") {
            Some(n) if n > 0 => n,
            _ => 1,
        }
    }
}

/// `KEY=VALUE` pairs from an rc file; a missing or unreadable file is empty.
fn read_rc_file(path: &Path) -> HashMap<String, String> {
    let Ok(file) = fs::File::open(path) else {
        return HashMap::new();
    };
    tracing::debug!(path = %path.display(), "reading config file");
    BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .filter_map(|line| parse_line(&line))
        .collect()
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (k, v) = line.split_once('=')?;
    Some((k.trim().to_string(), v.trim().to_string()))
}

fn is_config_key(k: &str) -> bool {
    k.starts_with("LITEX_")
}

pub fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("litex").join(".litexrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();
    m.insert("LITEX_PATH".into(), DEFAULT_PROGRAM.into());
    m.insert("LITEX_MAX_WORKERS".into(), "1".into());
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rc_lines() {
        assert_eq!(parse_line("# comment"), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("no equals sign"), None);
        assert_eq!(
            parse_line(" LITEX_PATH = /opt/litex/bin/litex "),
            Some(("LITEX_PATH".into(), "/opt/litex/bin/litex".into()))
        );
    }

    #[test]
    fn rc_file_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".litexrc");
        fs::write(
            &path,
            "# litex\nLITEX_MAX_WORKERS=4\n\nLITEX_PATH = /opt/litex\nOTHER=1\n",
        )
        .unwrap();

        let map = read_rc_file(&path);
        assert_eq!(map.len(), 3);
        assert_eq!(map["LITEX_MAX_WORKERS"], "4");
        assert_eq!(map["LITEX_PATH"], "/opt/litex");
        assert_eq!(map["OTHER"], "1");

        assert!(read_rc_file(&dir.path().join("missing")).is_empty());
    }

    #[test]
    fn rc_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".litexrc");
        fs::write(&path, "OTHER=1\n").unwrap();

        let cfg = Config::load_from(path);
        assert_eq!(cfg.get("OTHER").as_deref(), Some("1"));
        assert!(cfg.get("LITEX_PATH").is_some());
    }

    #[test]
    fn max_workers_falls_back_to_one() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = Config::load_from(dir.path().join("missing"));
        cfg.set("LITEX_MAX_WORKERS", "0");
        assert_eq!(cfg.max_workers(), 1);
        cfg.set("LITEX_MAX_WORKERS", "many");
        assert_eq!(cfg.max_workers(), 1);
        cfg.set("LITEX_MAX_WORKERS", "3");
        assert_eq!(cfg.max_workers(), 3);
    }

    #[test]
    fn empty_path_means_default_program() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = Config::load_from(dir.path().join("missing"));
        cfg.set("LITEX_PATH", "");
        assert_eq!(cfg.litex_path(), PathBuf::from("litex"));
    }
}
