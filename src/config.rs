//! # Configuración del Servidor
//! src/config.rs
//!
//! La configuración viene de dos lados:
//!
//! - **CLI** (clap): la ruta del archivo de configuración y el host.
//! - **Archivo**: exactamente cuatro líneas `key = value`.
//!
//! ## Ejemplo de archivo
//!
//! ```text
//! staticfiles = ./files
//! cgibin = ./files/cgibin
//! port = 8080
//! exec = /usr/bin/python3
//! ```
//!
//! ### CLI
//! ```bash
//! ./webserv config.cfg
//! WEBSERV_HOST=0.0.0.0 ./webserv config.cfg
//! ```

use clap::Parser;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Cantidad exacta de líneas que debe tener el archivo
pub const REQUIRED_FIELDS: usize = 4;

/// Clave y valor de una línea; el valor termina en el siguiente `=`
const LINE_PATTERN: &str = r"^([^=]*)=([^=]*)";

/// Argumentos de línea de comandos
#[derive(Debug, Clone, Parser)]
#[command(name = "webserv")]
#[command(about = "Servidor HTTP/1.1 de archivos estáticos y programas CGI")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Archivo de configuración (`key = value`)
    pub config: PathBuf,

    /// Host/IP en el que escucha (también se pasa como SERVER_ADDR)
    #[arg(long, default_value = "127.0.0.1", env = "WEBSERV_HOST")]
    pub host: String,
}

/// Configuración del servidor, inmutable después del arranque
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Raíz de los archivos estáticos
    pub staticfiles: String,

    /// Directorio de los scripts CGI
    pub cgibin: String,

    /// Puerto en el que escucha el servidor
    #[serde(deserialize_with = "port_from_str")]
    pub port: u16,

    /// Intérprete con el que se ejecutan los scripts CGI
    pub exec: String,

    #[serde(skip_deserializing, default = "default_host")]
    pub host: String,
}

/// Errores fatales de configuración
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No se pudo leer el archivo
    Unreadable(String),

    /// El archivo no tiene exactamente cuatro líneas
    MissingField(usize),

    /// Línea sin `=`
    MalformedLine(String),

    /// Falta una clave o un valor no es válido
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Unreadable(_) => write!(f, "Unable To Load Configuration Argument"),
            ConfigError::MissingField(_) => write!(f, "Missing Field From Configuration File"),
            ConfigError::MalformedLine(l) => write!(f, "Malformed configuration line: {}", l),
            ConfigError::Invalid(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn port_from_str<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

impl Config {
    /// Carga la configuración a partir de los argumentos CLI
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = Self::load(&cli.config)?;
        config.host = cli.host.clone();
        Ok(config)
    }

    /// Lee y parsea el archivo de configuración
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::Unreadable(format!("{}: {}", path.display(), e)))?;
        Self::parse(&contents)
    }

    /// Parsea el contenido del archivo
    ///
    /// # Ejemplo
    /// ```
    /// use webserv::config::Config;
    ///
    /// let config = Config::parse("staticfiles = ./files\ncgibin = ./files/cgibin\nport = 8070\nexec = /bin/sh\n").unwrap();
    /// assert_eq!(config.port, 8070);
    /// assert_eq!(config.address(), "127.0.0.1:8070");
    /// ```
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let line_re = Regex::new(LINE_PATTERN).map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let mut fields = Map::new();
        let mut counter = 0;

        for line in contents.lines() {
            counter += 1;
            let caps = line_re
                .captures(line)
                .ok_or_else(|| ConfigError::MalformedLine(line.to_string()))?;
            fields.insert(caps[1].trim().to_string(), Value::String(caps[2].trim().to_string()));
        }

        if counter != REQUIRED_FIELDS {
            return Err(ConfigError::MissingField(counter));
        }

        serde_json::from_value(Value::Object(fields)).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Obtiene la dirección completa para bind (host:port)
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("⚙️  Configuración:");
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("   ❌ No se pudo serializar la configuración: {}", e),
        }
        println!();
    }
}
