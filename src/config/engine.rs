use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use rhai::{Array, Dynamic, Engine, EvalAltResult, Scope};

use super::Settings;
use crate::error::{ConfigError, Result};
use crate::theme;

const CONFIG_FILE_NAME: &str = "init.rhai";

/// The Rhai scripting engine for configuration
pub struct ConfigEngine {
    engine: Engine,
    settings: Arc<RwLock<Settings>>,
}

impl ConfigEngine {
    pub fn new() -> Self {
        let settings = Arc::new(RwLock::new(Settings::default()));
        let engine = Self::create_engine(Arc::clone(&settings));

        Self { engine, settings }
    }

    fn create_engine(settings: Arc<RwLock<Settings>>) -> Engine {
        let mut engine = Engine::new();

        // Limit script execution for safety
        engine.set_max_expr_depths(64, 64);
        engine.set_max_operations(100_000);

        engine.on_print(|msg| tracing::info!(target: "smarttext::config", "{msg}"));

        {
            let s = Arc::clone(&settings);
            engine.register_fn("set_theme", move |name: &str| {
                if theme::find_palette(name).is_none() {
                    tracing::debug!(theme = name, "config selects unknown theme");
                }
                if let Ok(mut settings) = s.write() {
                    settings.theme = name.to_string();
                }
            });
        }

        {
            let s = Arc::clone(&settings);
            engine.register_fn("get_theme", move || -> String {
                s.read().map(|s| s.theme.clone()).unwrap_or_default()
            });
        }

        engine.register_fn("themes", || -> Array {
            theme::list_builtin_themes()
                .into_iter()
                .map(|name| Dynamic::from(name.to_string()))
                .collect()
        });

        {
            let s = Arc::clone(&settings);
            engine.register_fn("set_font_size", move |size: i64| {
                if let Ok(mut settings) = s.write() {
                    settings.font_size = size.clamp(6, 72) as u32;
                }
            });
        }

        {
            let s = Arc::clone(&settings);
            engine.register_fn("get_font_size", move || -> i64 {
                s.read().map(|s| s.font_size as i64).unwrap_or(11)
            });
        }

        {
            let s = Arc::clone(&settings);
            engine.register_fn(
                "set_shortcut",
                move |action: &str, sequence: &str| -> std::result::Result<(), Box<EvalAltResult>> {
                    let mut settings = s
                        .write()
                        .map_err(|_| format!("settings unavailable, shortcut '{action}' not set"))?;
                    if settings.shortcuts.set(action, sequence) {
                        Ok(())
                    } else {
                        Err(format!("unknown shortcut action '{action}'").into())
                    }
                },
            );
        }

        engine
    }

    /// Load and execute a config file
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loading config");
        self.eval(&content)
    }

    /// Evaluate a Rhai script string
    pub fn eval(&mut self, script: &str) -> Result<()> {
        let ast = self
            .engine
            .compile(script)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        let mut scope = Scope::new();
        self.engine
            .run_ast_with_scope(&mut scope, &ast)
            .map_err(|e| ConfigError::Eval(e.to_string()))?;

        Ok(())
    }

    /// Get the current settings (cloned)
    pub fn settings(&self) -> Settings {
        self.settings.read().map(|s| s.clone()).unwrap_or_default()
    }

    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("smarttext"))
    }

    /// Get the default config file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join(CONFIG_FILE_NAME))
    }

    /// Load the default config file if it exists
    pub fn load_default(&mut self) -> Result<()> {
        match Self::config_dir() {
            Some(dir) => self.load_from_dir(&dir),
            None => Ok(()),
        }
    }

    /// Load `init.rhai` from `dir` if it exists
    pub fn load_from_dir(&mut self, dir: &Path) -> Result<()> {
        let config_file = dir.join(CONFIG_FILE_NAME);
        if config_file.exists() {
            return self.load_file(&config_file);
        }
        Ok(()) // No config file is fine
    }
}

impl Default for ConfigEngine {
    fn default() -> Self {
        Self::new()
    }
}
