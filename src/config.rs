use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Supabase project connection settings
    pub supabase: SupabaseConfig,
}

/// Supabase project connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseConfig {
    /// Project base URL (e.g. `https://xyzcompany.supabase.co`)
    pub url: String,
    /// Project anon (public) API key, sent as the `apikey` header
    pub anon_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            supabase: SupabaseConfig {
                url: String::new(),
                anon_key: String::new(),
            },
        }
    }
}

impl Config {
    /// Load configuration from file or create a default one
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // The anon key is a credential; keep the file owner-only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)?;
        }

        Ok(())
    }

    /// Whether the Supabase connection settings are filled in
    pub fn is_configured(&self) -> bool {
        !self.supabase.url.trim().is_empty() && !self.supabase.anon_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_default_config_when_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_or_create(&path).unwrap();
        assert!(path.exists());
        assert!(!config.is_configured());
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            supabase: SupabaseConfig {
                url: "https://example.supabase.co".to_string(),
                anon_key: "anon-key".to_string(),
            },
        };
        config.save(&path).unwrap();

        let loaded = Config::load_or_create(&path).unwrap();
        assert_eq!(loaded.supabase.url, "https://example.supabase.co");
        assert_eq!(loaded.supabase.anon_key, "anon-key");
        assert!(loaded.is_configured());
    }

    #[cfg(unix)]
    #[test]
    fn saved_config_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        Config::default().save(&path).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
