use std::path::PathBuf;

/// Default path of the configuration file
pub fn get_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("inovaview")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_ends_with_expected_components() {
        let path = get_config_path();
        assert!(path.ends_with("inovaview/config.toml"));
    }
}
