use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_TICK_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: LevelFilter,
    /// Where the Export tab and `--export` write files.
    pub export_dir: PathBuf,
    /// Simulator seed. A fresh random seed is used when unset.
    pub seed: Option<u64>,
    /// Wall-clock time per simulated game second.
    pub tick: Duration,
    pub notifications: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            log_level: LevelFilter::Info,
            export_dir: PathBuf::from("."),
            seed: None,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            notifications: true,
        }
    }
}

impl AppSettings {
    /// Read settings from `AEBL_*` environment variables.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let log_level = var("AEBL_LOG_LEVEL")
            .and_then(|v| v.parse::<LevelFilter>().ok())
            .unwrap_or(defaults.log_level);

        let export_dir = var("AEBL_EXPORT_DIR").map(PathBuf::from).unwrap_or_else(|| {
            if let Some(data) = var("XDG_DATA_HOME") {
                PathBuf::from(data).join("aebl")
            } else if let Some(home) = var("HOME") {
                PathBuf::from(home).join(".local").join("share").join("aebl")
            } else {
                defaults.export_dir.clone()
            }
        });

        let seed = var("AEBL_SEED").and_then(|v| v.parse().ok());

        let tick = var("AEBL_TICK_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick);

        let notifications = !matches!(
            var("AEBL_NOTIFICATIONS").as_deref().map(str::to_lowercase).as_deref(),
            Some("off" | "0" | "false")
        );

        Self {
            log_level,
            export_dir,
            seed,
            tick,
            notifications,
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> AppSettings {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppSettings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let s = settings(&[]);
        assert_eq!(s.log_level, LevelFilter::Info);
        assert_eq!(s.export_dir, PathBuf::from("."));
        assert_eq!(s.seed, None);
        assert_eq!(s.tick, Duration::from_secs(1));
        assert!(s.notifications);
    }

    #[test]
    fn export_dir_falls_back_through_xdg_and_home() {
        let s = settings(&[("HOME", "/home/fan")]);
        assert_eq!(s.export_dir, PathBuf::from("/home/fan/.local/share/aebl"));
        let s = settings(&[("HOME", "/home/fan"), ("XDG_DATA_HOME", "/data")]);
        assert_eq!(s.export_dir, PathBuf::from("/data/aebl"));
        let s = settings(&[("XDG_DATA_HOME", "/data"), ("AEBL_EXPORT_DIR", "/tmp/out")]);
        assert_eq!(s.export_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn parses_overrides() {
        let s = settings(&[
            ("AEBL_LOG_LEVEL", "debug"),
            ("AEBL_SEED", "42"),
            ("AEBL_TICK_MS", "250"),
            ("AEBL_NOTIFICATIONS", "OFF"),
        ]);
        assert_eq!(s.log_level, LevelFilter::Debug);
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.tick, Duration::from_millis(250));
        assert!(!s.notifications);
    }

    #[test]
    fn invalid_values_are_ignored() {
        let s = settings(&[
            ("AEBL_LOG_LEVEL", "loud"),
            ("AEBL_SEED", "abc"),
            ("AEBL_TICK_MS", "0"),
        ]);
        assert_eq!(s.log_level, LevelFilter::Info);
        assert_eq!(s.seed, None);
        assert_eq!(s.tick, Duration::from_secs(1));
    }
}
