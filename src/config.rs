use anyhow::{Context, Result};
use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Category;

pub const CONFIG_FILE: &str = "whatshallimake.toml";

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    pub default_category: Category,
    pub data_dir: Option<String>,
    pub flash_millis: u64,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_category: Category::Writing,
            data_dir: None,
            flash_millis: 1500,
            log_level: None,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self> {
        let blueprint_path = match std::env::var("CARGO_MANIFEST_DIR") {
            Ok(manifest_dir) => {
                let mut path = PathBuf::from(manifest_dir);
                path.push(CONFIG_FILE);
                path
            }
            // Release builds: look next to the working directory.
            Err(_) => PathBuf::from(CONFIG_FILE),
        };

        let user_config_path = get_user_config_path()?;
        Self::load(&blueprint_path, &user_config_path, Path::new(CONFIG_FILE))
    }

    /// Layers blueprint, user file and an optional local override, in that order.
    /// The user file is seeded from the blueprint the first time.
    pub fn load(blueprint_path: &Path, user_config_path: &Path, local_path: &Path) -> Result<Self> {
        if !user_config_path.exists() {
            if let Ok(blueprint_content) = fs::read_to_string(blueprint_path) {
                if let Some(parent) = user_config_path.parent() {
                    fs::create_dir_all(parent).context("Could not create config directory")?;
                }
                fs::write(user_config_path, blueprint_content)
                    .context("Could not write user config file from blueprint")?;
            }
        }

        let s = Config::builder()
            .add_source(File::from(blueprint_path).required(true))
            .add_source(File::from(user_config_path).required(false))
            .add_source(File::from(local_path).required(false))
            .build()?;

        Ok(s.try_deserialize()?)
    }

    /// Directory holding the favorites file and logs.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) if !dir.trim().is_empty() => {
                Ok(PathBuf::from(shellexpand::tilde(dir).into_owned()))
            }
            _ => {
                let mut path = dirs::data_dir().context("Failed to get data directory")?;
                path.push("whatshallimake");
                Ok(path)
            }
        }
    }
}

pub fn get_user_config_path() -> Result<PathBuf> {
    let mut path = dirs::home_dir().context("Failed to get home directory")?;
    path.push(".config");
    path.push("whatshallimake");
    path.push(CONFIG_FILE);
    Ok(path)
}

/// Remember the last selected tab for the next start.
pub fn save_default_category(category: Category) -> Result<()> {
    save_default_category_to(&get_user_config_path()?, category)
}

pub fn save_default_category_to(user_config_path: &Path, category: Category) -> Result<()> {
    let config_str = fs::read_to_string(user_config_path).unwrap_or_default();
    let mut doc = config_str.parse::<toml::Table>()?;

    doc.insert(
        "default_category".to_string(),
        toml::Value::String(category.as_str().to_string()),
    );

    if let Some(parent) = user_config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(user_config_path, doc.to_string())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const BLUEPRINT: &str = r#"
default_category = "writing"
flash_millis = 1500
"#;

    #[test]
    fn user_file_is_seeded_from_blueprint() {
        let dir = tempdir().unwrap();
        let blueprint = dir.path().join("blueprint.toml");
        fs::write(&blueprint, BLUEPRINT).unwrap();
        let user = dir.path().join("home/.config/whatshallimake/whatshallimake.toml");

        let settings = Settings::load(&blueprint, &user, &dir.path().join("none.toml")).unwrap();
        assert_eq!(settings.default_category, Category::Writing);
        assert_eq!(settings.flash_millis, 1500);
        assert!(settings.data_dir.is_none());
        assert!(user.exists());
    }

    #[test]
    fn later_layers_override_earlier_ones() {
        let dir = tempdir().unwrap();
        let blueprint = dir.path().join("blueprint.toml");
        fs::write(&blueprint, BLUEPRINT).unwrap();
        let user = dir.path().join("user.toml");
        fs::write(&user, "default_category = \"coding\"\n").unwrap();
        let local = dir.path().join("local.toml");
        fs::write(&local, "flash_millis = 10\ndata_dir = \"/tmp/ideas\"\n").unwrap();

        let settings = Settings::load(&blueprint, &user, &local).unwrap();
        assert_eq!(settings.default_category, Category::Coding);
        assert_eq!(settings.flash_millis, 10);
        assert_eq!(settings.data_dir().unwrap(), PathBuf::from("/tmp/ideas"));
    }

    #[test]
    fn missing_blueprint_is_an_error() {
        let dir = tempdir().unwrap();
        let result = Settings::load(
            &dir.path().join("absent.toml"),
            &dir.path().join("user.toml"),
            &dir.path().join("local.toml"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn saving_category_keeps_other_keys() {
        let dir = tempdir().unwrap();
        let user = dir.path().join("user.toml");
        fs::write(&user, "flash_millis = 900\n").unwrap();

        save_default_category_to(&user, Category::Business).unwrap();

        let doc = fs::read_to_string(&user).unwrap().parse::<toml::Table>().unwrap();
        assert_eq!(doc["default_category"].as_str(), Some("business"));
        assert_eq!(doc["flash_millis"].as_integer(), Some(900));
    }
}
