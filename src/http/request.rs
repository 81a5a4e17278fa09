//! # Requests HTTP
//! src/http/request.rs
//!
//! El servidor no valida el request: guarda el texto crudo y lo parte de
//! forma ingenua cuando alguien necesita una pieza. Un request malformado no
//! produce error, solo valores vacíos o basura en las piezas.
//!
//! ## Formato esperado
//!
//! ```text
//! GET /cgi/hello.py?name=ana HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! Accept-Encoding: gzip\r\n
//! \r\n
//! ```
//!
//! 1. **Request Line**: `METHOD /path?query PROTO` (tokens separados por un espacio)
//! 2. **Headers**: `Name: value`, una por línea

/// Request HTTP tal como llegó por el socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    raw: String,
}

impl Request {
    /// Construye el request desde los bytes leídos del socket
    ///
    /// Los bytes que no son UTF-8 se reemplazan por `U+FFFD`.
    ///
    /// # Ejemplo
    /// ```
    /// use webserv::http::Request;
    ///
    /// let request = Request::from_bytes(b"GET /about.html HTTP/1.1\r\n\r\n");
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.target(), "/about.html");
    /// ```
    pub fn from_bytes(buffer: &[u8]) -> Self {
        Self {
            raw: String::from_utf8_lossy(buffer).into_owned(),
        }
    }

    /// Texto completo del request
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Primera línea del request (sin el `\r\n`)
    pub fn request_line(&self) -> &str {
        self.raw.lines().next().unwrap_or("")
    }

    /// Líneas que siguen a la request line
    ///
    /// `str::lines` corta en `\n` y quita el `\r` final, así que los valores
    /// de los headers nunca terminan en `\r`.
    pub fn header_lines(&self) -> impl Iterator<Item = &str> {
        self.raw.lines().skip(1)
    }

    /// Primer token de la request line
    pub fn method(&self) -> &str {
        self.request_token(0)
    }

    /// Segundo token de la request line, con query incluida
    pub fn target(&self) -> &str {
        self.request_token(1)
    }

    /// Texto entre el primer `?` de la request line y el siguiente espacio
    ///
    /// # Ejemplo
    /// ```
    /// use webserv::http::Request;
    ///
    /// let request = Request::from_bytes(b"GET /cgi/a.py?x=1&y=2 HTTP/1.1\r\n\r\n");
    /// assert_eq!(request.query_string(), Some("x=1&y=2"));
    /// ```
    pub fn query_string(&self) -> Option<&str> {
        let (_, rest) = self.request_line().split_once('?')?;
        rest.split(' ').next()
    }

    /// Verifica si el cliente acepta respuestas comprimidas con gzip
    ///
    /// Busca el texto literal `Accept-Encoding: gzip` en todo el request.
    pub fn accepts_gzip(&self) -> bool {
        self.raw.contains("Accept-Encoding: gzip")
    }

    fn request_token(&self, index: usize) -> &str {
        self.request_line().split(' ').nth(index).unwrap_or("")
    }
}
