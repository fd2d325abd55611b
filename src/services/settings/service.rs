use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by the per-user config directory.
    pub fn at_default_location() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "MoodCalendar", "MoodCalendar") {
            proj_dirs.config_dir().join(SETTINGS_FILE)
        } else {
            PathBuf::from(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!(
                "No settings at {}; using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings = toml::from_str(&data)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calendar::{CalendarDate, GridPolicy};
    use tempfile::TempDir;

    fn setup() -> (TempDir, SettingsService) {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(SETTINGS_FILE));
        (dir, service)
    }

    #[test]
    fn test_get_default_settings() {
        let (_dir, service) = setup();
        let settings = service.get().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_update_settings() {
        let (_dir, service) = setup();

        let mut settings = service.get().unwrap();
        settings.first_day_of_week = 2;
        settings.grid_policy = GridPolicy::SixWeeks;
        settings.max_date = CalendarDate::from_ymd(2030, 12, 31);
        service.update(&settings).unwrap();

        let updated = service.get().unwrap();
        assert_eq!(updated.first_day_of_week, 2);
        assert_eq!(updated.grid_policy, GridPolicy::SixWeeks);
        assert_eq!(updated.max_date, CalendarDate::from_ymd(2030, 12, 31));
    }

    #[test]
    fn test_update_invalid_settings() {
        let (_dir, service) = setup();

        let mut settings = service.get().unwrap();
        settings.first_day_of_week = 9;

        assert!(service.update(&settings).is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_reset_settings() {
        let (_dir, service) = setup();

        let mut settings = service.get().unwrap();
        settings.locale = "de_DE".to_string();
        service.update(&settings).unwrap();

        service.reset().unwrap();
        assert_eq!(service.get().unwrap(), Settings::default());
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let (_dir, service) = setup();
        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), "first_day_of_week = \"monday\"").unwrap();

        let err = service.get().unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse settings"));
    }
}
