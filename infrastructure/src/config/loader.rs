//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROJECT_FILENAMES: [&str; 2] = ["collapse-tools.toml", ".collapse-tools.toml"];
const ENV_PREFIX: &str = "COLLAPSE_TOOLS_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `COLLAPSE_TOOLS_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./collapse-tools.toml` or `./.collapse-tools.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/collapse-tools/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path();
        let project = Self::project_config_path();
        Self::load_from(
            global.as_deref(),
            project.as_deref(),
            config_path.map(PathBuf::as_path),
        )
    }

    /// Merge the given files over the defaults, then environment overrides.
    ///
    /// Missing global/project files are skipped; a missing explicit file is
    /// an error.
    pub fn load_from(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_with_env(global, project, explicit, ENV_PREFIX)
    }

    fn load_with_env(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
        env_prefix: &str,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                debug!(path = %path.display(), "Merging config file");
                figment = figment.merge(Toml::file(path));
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            debug!(path = %path.display(), "Merging explicit config file");
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(env_prefix).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/collapse-tools/config.toml if set,
    /// otherwise the platform config directory equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("collapse-tools").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILENAMES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}*", ENV_PREFIX);

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./collapse-tools.toml or ./.collapse-tools.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collapse_domain::StyleToken;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.notice.enabled);
        assert_eq!(config.render.running_indicator, "Running...");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("collapse-tools"));
    }

    #[test]
    fn test_load_from_missing_optional_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_from(
            Some(&dir.path().join("global.toml")),
            Some(&dir.path().join("project.toml")),
            None,
        )
        .unwrap();
        assert_eq!(config.render.running_indicator, "Running...");
    }

    #[test]
    fn test_project_overrides_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("project.toml");
        fs::write(
            &global,
            "[render]\nrunning_indicator = \"global\"\n[notice]\nlevel = \"error\"\n",
        )
        .unwrap();
        fs::write(&project, "[render]\nrunning_indicator = \"project\"\n").unwrap();

        let config = ConfigLoader::load_from(Some(&global), Some(&project), None).unwrap();
        assert_eq!(config.render.running_indicator, "project");
        // untouched keys keep the lower-priority value
        assert_eq!(config.notice.level, "error");
    }

    #[test]
    fn test_explicit_overrides_project() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("project.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(&project, "[theme]\ncolor = true\n").unwrap();
        fs::write(&explicit, "[theme]\ncolor = false\n").unwrap();

        let config = ConfigLoader::load_from(None, Some(&project), Some(&explicit)).unwrap();
        assert!(!config.theme.color);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigLoader::load_from(None, None, Some(&dir.path().join("nope.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_theme_color() {
        let prefix = "COLLAPSE_TOOLS_TEST_THEME_";
        unsafe {
            std::env::set_var(format!("{prefix}THEME__COLORS__TOOLTITLE"), "red");
        }

        let config = ConfigLoader::load_with_env(None, None, None, prefix).unwrap();
        let (colors, issues) = config.theme.parse_colors();
        assert!(issues.is_empty());
        assert_eq!(colors.get(&StyleToken::ToolTitle).map(String::as_str), Some("red"));
    }

    #[test]
    fn test_env_overrides_files() {
        let prefix = "COLLAPSE_TOOLS_TEST_FILES_";
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("explicit.toml");
        fs::write(&explicit, "[render]\nrunning_indicator = \"file\"\n").unwrap();
        unsafe {
            std::env::set_var(format!("{prefix}RENDER__RUNNING_INDICATOR"), "Working");
        }

        let config = ConfigLoader::load_with_env(None, None, Some(&explicit), prefix).unwrap();
        assert_eq!(config.render.running_indicator, "Working");
    }

    #[test]
    fn test_numeric_env_value_stays_text() {
        let prefix = "COLLAPSE_TOOLS_TEST_NUMERIC_";
        unsafe {
            std::env::set_var(format!("{prefix}RENDER__RUNNING_INDICATOR"), "5");
            std::env::set_var(format!("{prefix}NOTICE__MESSAGE"), "true");
        }

        let config = ConfigLoader::load_with_env(None, None, None, prefix).unwrap();
        assert_eq!(config.render.running_indicator, "5");
        assert_eq!(config.notice.message, "true");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("bad.toml");
        fs::write(&explicit, "[render\nrunning_indicator = ").unwrap();

        assert!(ConfigLoader::load_from(None, None, Some(&explicit)).is_err());
    }
}
