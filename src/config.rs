use crate::pages::SiteOptions;
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Site
    pub base_path: String,
    pub show_default_language: bool,
    pub client_script: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .map(|v| v.parse().context("PORT must be a port number"))
                .transpose()?
                .unwrap_or(8080),

            base_path: normalize_base_path(
                &std::env::var("BASE_PATH").unwrap_or_else(|_| "/".to_string()),
            ),
            show_default_language: std::env::var("SHOW_DEFAULT_LANGUAGE")
                .ok()
                .map(|v| parse_bool(&v).context("SHOW_DEFAULT_LANGUAGE must be true or false"))
                .transpose()?
                .unwrap_or(true),
            client_script: std::env::var("CLIENT_SCRIPT")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        })
    }

    pub fn site_options(&self) -> SiteOptions {
        SiteOptions {
            base_path: self.base_path.clone(),
            show_default_language: self.show_default_language,
            client_script: self.client_script.clone(),
        }
    }
}

/// `"portfolio"`, `"/portfolio"` and `"/portfolio/"` all become `"/portfolio/"`.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("invalid boolean '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["PORT", "BASE_PATH", "SHOW_DEFAULT_LANGUAGE", "CLIENT_SCRIPT"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "/");
        assert_eq!(normalize_base_path("/"), "/");
        assert_eq!(normalize_base_path("portfolio"), "/portfolio/");
        assert_eq!(normalize_base_path("/portfolio"), "/portfolio/");
        assert_eq!(normalize_base_path("//portfolio//"), "/portfolio/");
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(!parse_bool(" 0 ").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.base_path, "/");
        assert!(config.show_default_language);
        assert_eq!(config.client_script, None);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("PORT", "3000");
        std::env::set_var("BASE_PATH", "portfolio");
        std::env::set_var("SHOW_DEFAULT_LANGUAGE", "false");
        std::env::set_var("CLIENT_SCRIPT", "/pkg/switcher.js");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.base_path, "/portfolio/");
        assert!(!config.show_default_language);
        assert_eq!(config.site_options().client_script.as_deref(), Some("/pkg/switcher.js"));
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "eighty");
        let result = Config::from_env();
        clear_env();

        assert!(result.unwrap_err().to_string().contains("PORT"));
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_bool() {
        clear_env();
        std::env::set_var("SHOW_DEFAULT_LANGUAGE", "sometimes");
        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }
}
