use crate::theme::ThemeMode;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub theme: ThemeMode,
    // Open the debug pane on startup (F12 toggles it at runtime)
    #[serde(default)]
    pub show_debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            theme: ThemeMode::default(),
            show_debug: false,
        }
    }
}

fn default_title() -> String {
    "Sample Summary".to_string()
}

pub(crate) fn validate_app_config(cfg: &AppConfig) -> Result<(), String> {
    if cfg.title.trim().is_empty() {
        return Err("title must not be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_uses_defaults() {
        let cfg: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg.title, "Sample Summary");
        assert_eq!(cfg.theme, ThemeMode::Dark);
        assert!(!cfg.show_debug);
    }

    #[test]
    fn parses_all_keys() {
        let cfg: AppConfig =
            serde_yaml::from_str("title: Lab 3\ntheme: light\nshow_debug: true\n").unwrap();
        assert_eq!(cfg.title, "Lab 3");
        assert_eq!(cfg.theme, ThemeMode::Light);
        assert!(cfg.show_debug);
        assert!(validate_app_config(&cfg).is_ok());
    }

    #[test]
    fn unknown_theme_is_an_error() {
        assert!(serde_yaml::from_str::<AppConfig>("theme: neon\n").is_err());
    }

    #[test]
    fn blank_title_is_rejected() {
        let cfg: AppConfig = serde_yaml::from_str("title: '  '\n").unwrap();
        assert!(validate_app_config(&cfg).is_err());
    }
}
