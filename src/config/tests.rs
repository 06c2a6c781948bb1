use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_tonearm_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("TONEARM_CONFIG_PATH", "/tmp/tonearm-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/tonearm-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("tonearm")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("tonearm")
            .join("config.toml")
    );
}

#[test]
fn defaults_are_sane_and_validate() {
    let s = Settings::default();
    assert_eq!(s.clock.tick_ms, 1000);
    assert_eq!(s.clock.refresh_ms, 200);
    assert!(!s.clock.use_engine_position);
    assert_eq!(
        s.library.extensions,
        vec![
            "mp3".to_string(),
            "flac".to_string(),
            "wav".to_string(),
            "ogg".to_string()
        ]
    );
    assert!(s.validate().is_ok());
}

#[test]
fn validate_rejects_zero_intervals() {
    let mut s = Settings::default();
    s.clock.tick_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.clock.refresh_ms = 0;
    assert!(s.validate().is_err());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
extensions = ["mp3"]
follow_links = false

[clock]
tick_ms = 500
refresh_ms = 100
use_engine_position = true
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TONEARM_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("TONEARM__CLOCK__TICK_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.follow_links);
    assert_eq!(s.clock.tick_ms, 500);
    assert_eq!(s.clock.refresh_ms, 100);
    assert!(s.clock.use_engine_position);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[clock]
tick_ms = 1000
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TONEARM_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("TONEARM__CLOCK__TICK_MS", "250");

    let s = Settings::load().unwrap();
    assert_eq!(s.clock.tick_ms, 250);
}
