use std::path::PathBuf;

pub const CONFIG_ENV: &str = "ROSTER_CONFIG";

fn home_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
}

pub fn get_config_dir() -> PathBuf {
    home_dir().join(".config").join("roster")
}

pub fn get_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => get_config_dir().join("config.toml"),
    }
}

pub fn get_data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join("roster")
}

pub fn get_default_store_path() -> PathBuf {
    get_data_dir().join("users.json")
}
