//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "bender";
const PROJECT_FILES: [&str; 2] = ["bender.toml", ".bender.toml"];
const ENV_PREFIX: &str = "BENDER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `BENDER_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./bender.toml` or `./.bender.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/bender/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Build the provider chain without extracting it.
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/bender/config.toml if set,
    /// otherwise falls back to ~/.config/bender/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Default location of the REPL history file
    pub fn default_history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join("history.txt"))
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./bender.toml or ./.bender.toml");
        }

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
    use bender_domain::OutputFormat;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.output.color);
        assert!(config.quiz.transcript.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("bender"));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.create_file(
                "bender.toml",
                r#"
[output]
color = false
"#,
            )?;

            let config: FileConfig = ConfigLoader::figment(None).extract()?;
            assert!(!config.output.color);
            assert_eq!(config.output.format, None);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_beats_project_file() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.create_file(".bender.toml", "[repl]\nprompt = \"project\"\n")?;
            jail.create_file("custom.toml", "[repl]\nprompt = \"explicit\"\n")?;

            let config: FileConfig = ConfigLoader::figment(Some(Path::new("custom.toml"))).extract()?;
            assert_eq!(config.repl.prompt, "explicit");
            Ok(())
        });
    }

    #[test]
    fn test_env_beats_files() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.create_file("bender.toml", "[output]\nformat = \"text\"\n")?;
            jail.set_env("BENDER_OUTPUT__FORMAT", "json");
            jail.set_env("BENDER_QUIZ__TRANSCRIPT", "run.jsonl");

            let config: FileConfig = ConfigLoader::figment(None).extract()?;
            assert_eq!(config.output.format, Some(OutputFormat::Json));
            assert_eq!(config.quiz.transcript.as_deref(), Some("run.jsonl"));
            Ok(())
        });
    }

    #[test]
    fn test_global_file_is_lowest_file_priority() {
        Jail::expect_with(|jail| {
            let xdg = jail.directory().join("xdg");
            jail.set_env("XDG_CONFIG_HOME", xdg.display());
            std::fs::create_dir_all(xdg.join("bender")).map_err(|e| e.to_string())?;
            jail.create_file(
                "xdg/bender/config.toml",
                "[repl]\nprompt = \"global\"\n[output]\ncolor = false\n",
            )?;
            jail.create_file("bender.toml", "[repl]\nprompt = \"project\"\n")?;

            let config: FileConfig = ConfigLoader::figment(None).extract()?;
            assert_eq!(config.repl.prompt, "project");
            assert!(!config.output.color);
            Ok(())
        });
    }
}
