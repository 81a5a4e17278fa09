//! # webserv
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo que sirve archivos estáticos desde un directorio
//! raíz y delega los requests dinámicos a programas CGI externos.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `config`: CLI y archivo de configuración `key = value`
//! - `http`: request crudo, respuesta en tres partes, gzip y envío
//! - `router`: decide si un request es estático o CGI
//! - `static_files`: índice de archivos, tipos de contenido y respuestas 200/404
//! - `cgi`: entorno del programa, ejecución y parseo de su salida
//! - `server`: accept loop con un proceso por conexión
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use webserv::config::Config;
//! use webserv::server::Server;
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("config.cfg")).expect("configuración inválida");
//! let server = Server::new(config).expect("no se pudo indexar staticfiles");
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod cgi;
pub mod config;
pub mod http;
pub mod router;
pub mod server;
pub mod static_files;
