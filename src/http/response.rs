//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! Una respuesta se envía en tres partes: status line, fragmento de headers
//! y body. El único header que el servidor escribe es `Content-Type`.
//!
//! ## Formato en el cable
//!
//! ```text
//! HTTP/1.1 200 OK\n
//! Content-Type: text/html\n
//! \n
//! <html>...
//! ```
//!
//! No se envía `Content-Length`: el cliente detecta el fin del body cuando
//! el servidor cierra la conexión.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use webserv::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_content_type("text/plain")
//!     .with_body_bytes(b"hola".to_vec());
//!
//! assert_eq!(response.status_bytes(), b"HTTP/1.1 200 OK\n");
//! assert_eq!(response.header_bytes(), b"Content-Type: text/plain\n\n");
//! ```

use super::StatusCode;

/// Página que acompaña a todo 404
pub const NOT_FOUND_PAGE: &str = "<html>\n<head>\n\t<title>404 Not Found</title>\n</head>\n<body bgcolor=\"white\">\n<center>\n\t<h1>404 Not Found</h1>\n</center>\n</body>\n</html>\n";

/// Respuesta HTTP lista para codificar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Código y razón, sin el prefijo `HTTP/1.1` (ej: "301 Moved")
    status: String,

    /// `None` cuando el fragmento de headers va vacío
    content_type: Option<String>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta con un código conocido, sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self::with_status_line(&status.to_string())
    }

    /// Crea una respuesta con un status arbitrario (ej: el que manda un CGI)
    pub fn with_status_line(status: &str) -> Self {
        Self {
            status: status.to_string(),
            content_type: None,
            body: Vec::new(),
        }
    }

    /// Establece el `Content-Type`; un string vacío igual genera el header
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    /// Establece el cuerpo de la respuesta desde bytes
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Respuesta 404 con la página HTML fija
    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound)
            .with_content_type("text/html")
            .with_body_bytes(NOT_FOUND_PAGE.as_bytes().to_vec())
    }

    /// Respuesta 500 sin headers ni body
    pub fn internal_error() -> Self {
        Self::new(StatusCode::InternalServerError)
    }

    /// Status line completa: `HTTP/1.1 <status>\n`
    pub fn status_bytes(&self) -> Vec<u8> {
        format!("HTTP/1.1 {}\n", self.status).into_bytes()
    }

    /// Fragmento de headers: `Content-Type: <tipo>\n\n` o vacío
    pub fn header_bytes(&self) -> Vec<u8> {
        match &self.content_type {
            Some(content_type) => format!("Content-Type: {}\n\n", content_type).into_bytes(),
            None => Vec::new(),
        }
    }

    /// Obtiene el status sin el prefijo de protocolo
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Obtiene el `Content-Type`, si la respuesta lo genera
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Reemplaza el body (lo usa el encoder al comprimir)
    pub fn set_body(&mut self, body: Vec<u8>) {
        self.body = body;
    }
}
