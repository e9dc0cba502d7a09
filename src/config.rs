// ============================================================================
// Configuration
// ============================================================================
// Lue depuis le fichier TOML de l'utilisateur, puis surchargée par
// l'environnement :
//
// - Linux   : ~/.config/lendboard/config.toml
// - macOS   : ~/Library/Application Support/lendboard/config.toml
// - Windows : C:\Users\<user>\AppData\Roaming\lendboard\config.toml
//
// Variables d'environnement (prioritaires sur le fichier) :
// - LENDBOARD_API_URL   : URL de base de l'API
// - LENDBOARD_TOKEN     : jeton d'accès (envoyé en "Authorization: Bearer")
// - LENDBOARD_LOG_DIR   : répertoire des fichiers de logs
//
// Exemple de fichier :
//
//   [api]
//   base_url = "https://lending.example.com/api"
//   token = "eyJhbGciOi..."
//   timeout_secs = 15
//
//   [logging]
//   directory = "/var/log/lendboard"
// ============================================================================

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_LOG_FILTER: &str = "lendboard=debug,info";

const APP_DIR: &str = "lendboard";

/// Configuration complète de l'application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

/// Connexion à l'API distante
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,

    /// Jeton d'accès ; None = requêtes anonymes
    pub token: Option<String>,

    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Destination et niveau des logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// None = répertoire de données de l'utilisateur
    pub directory: Option<PathBuf>,

    /// Filtre par défaut si RUST_LOG n'est pas défini
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Charge la configuration : fichier (s'il existe) puis environnement
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Charge un fichier TOML ; valeurs par défaut s'il est absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Échec de la lecture de {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Fichier de configuration invalide : {}", path.display()))
    }

    /// Applique les surcharges d'environnement
    ///
    /// CONCEPT RUST : closure en paramètre
    /// - `lookup` remplace std::env::var, ce qui rend la fonction testable
    ///   sans toucher à l'environnement du processus
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("LENDBOARD_API_URL").filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(token) = lookup("LENDBOARD_TOKEN").filter(|v| !v.trim().is_empty()) {
            self.api.token = Some(token);
        }
        if let Some(dir) = lookup("LENDBOARD_LOG_DIR").filter(|v| !v.trim().is_empty()) {
            self.logging.directory = Some(PathBuf::from(dir));
        }
    }

    /// Chemin du fichier de configuration selon l'OS
    pub fn config_file_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Impossible de trouver le répertoire de configuration"))?;

        path.push(APP_DIR);
        path.push("config.toml");
        Ok(path)
    }

    /// Répertoire des logs : configuré, sinon ~/.local/share/lendboard/logs,
    /// sinon ./logs
    pub fn log_directory(&self) -> PathBuf {
        if let Some(dir) = &self.logging.directory {
            return dir.clone();
        }

        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR).join("logs"))
            .unwrap_or_else(|| PathBuf::from("./logs"))
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
