//! # Módulo HTTP
//! src/http/mod.rs
//!
//! Las piezas del protocolo que usa el servidor:
//!
//! - Request crudo con acceso ingenuo a sus partes
//! - Respuesta en tres partes (status, headers, body)
//! - Códigos de estado propios del servidor
//! - Envío de la respuesta con gzip opcional
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\n
//! Content-Type: text/html\n
//! \n
//! <html>...</html>
//! ```

pub mod encoder;   // gzip + escritura en el socket
pub mod request;   // Request crudo
pub mod response;  // Construcción de responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use request::Request;
pub use response::Response;
pub use status::StatusCode;
