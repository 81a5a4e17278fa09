//! # Códigos de Estado HTTP
//! src/http/status.rs
//!
//! Códigos que el servidor genera por sí mismo. Los programas CGI pueden
//! devolver cualquier otro status con una línea `Status:`; esos se guardan
//! tal cual en la respuesta (ver `cgi::parser`).
//!
//! - **2xx**: Éxito (200 OK)
//! - **4xx**: Archivo estático no encontrado (404)
//! - **5xx**: Programa CGI fallido (500)

/// Representa los códigos de estado HTTP que genera nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 404 File not found - El archivo estático no está en el índice
    NotFound = 404,

    /// 500 Internal Server Error - El programa CGI no pudo ejecutarse
    InternalServerError = 500,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use webserv::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// El 404 conserva la frase "File not found" que esperan los clientes
    /// de este servidor, no la del RFC.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "File not found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
