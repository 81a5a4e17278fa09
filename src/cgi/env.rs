//! # Entorno CGI
//! src/cgi/env.rs
//!
//! Traduce un request HTTP al conjunto de variables de entorno que recibe el
//! programa CGI. El resultado es un mapa propio de cada request que se pasa
//! directo al spawn; el entorno del proceso servidor no se toca.
//!
//! ## Variables
//!
//! | Variable               | Origen                                     |
//! |------------------------|--------------------------------------------|
//! | `REQUEST_METHOD`       | primer token de la request line            |
//! | `REQUEST_URI`          | segundo token de la request line           |
//! | `QUERY_STRING`         | texto después del `?` (si hay)             |
//! | `REMOTE_ADDRESS`/`PORT`| peer del socket                            |
//! | `SERVER_ADDR`/`PORT`   | dirección de escucha                       |
//! | `HTTP_*`, `CONTENT_*`  | headers de la lista `HEADER_VARIABLES`     |

use crate::http::Request;
use std::collections::BTreeMap;

/// Headers que se traducen, con el nombre de su variable
pub const HEADER_VARIABLES: [(&str, &str); 7] = [
    ("Accept", "HTTP_ACCEPT"),
    ("Host", "HTTP_HOST"),
    ("User-Agent", "HTTP_USER_AGENT"),
    ("Accept-Encoding", "HTTP_ACCEPT_ENCODING"),
    ("Remote-Address", "REMOTE_ADDRESS"),
    ("Content-Type", "CONTENT_TYPE"),
    ("Content-Length", "CONTENT_LENGTH"),
];

/// Datos de la conexión que no vienen en el texto del request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub remote_addr: String,
    pub remote_port: u16,
    pub server_addr: String,
    pub server_port: u16,
}

/// Variables de entorno de un request CGI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CgiEnvironment {
    vars: BTreeMap<String, String>,
}

impl CgiEnvironment {
    /// Construye el entorno y extrae el nombre del programa pedido
    ///
    /// Los headers se aplican después de los datos de la conexión, así que
    /// un header `Remote-Address` pisa la dirección del peer. El valor de un
    /// header es todo lo que sigue al primer `:`, con el espacio inicial
    /// incluido.
    ///
    /// # Ejemplo
    /// ```
    /// use webserv::cgi::env::{CgiEnvironment, ConnectionInfo};
    /// use webserv::http::Request;
    ///
    /// let connection = ConnectionInfo {
    ///     remote_addr: "127.0.0.1".to_string(),
    ///     remote_port: 50000,
    ///     server_addr: "127.0.0.1".to_string(),
    ///     server_port: 8080,
    /// };
    /// let request = Request::from_bytes(b"GET /cgibin/hello.py?name=ana HTTP/1.1\r\nHost: localhost:8080\r\n\r\n");
    /// let (program, env) = CgiEnvironment::build(&request, &connection);
    ///
    /// assert_eq!(program, "hello.py");
    /// assert_eq!(env.get("QUERY_STRING"), Some("name=ana"));
    /// assert_eq!(env.get("HTTP_HOST"), Some(" localhost:8080"));
    /// ```
    pub fn build(request: &Request, connection: &ConnectionInfo) -> (String, Self) {
        let mut env = Self::default();

        env.set("REMOTE_ADDRESS", &connection.remote_addr);
        env.set("REMOTE_PORT", &connection.remote_port.to_string());
        env.set("SERVER_ADDR", &connection.server_addr);
        env.set("SERVER_PORT", &connection.server_port.to_string());

        if let Some(query) = request.query_string() {
            env.set("QUERY_STRING", query);
        }

        for line in request.header_lines() {
            let Some((name, value)) = line.split_once(':') else {
                continue;
            };
            if let Some((_, variable)) = HEADER_VARIABLES.iter().find(|(header, _)| *header == name) {
                env.set(variable, value);
            }
        }

        env.set("REQUEST_METHOD", request.method());
        env.set("REQUEST_URI", request.target());

        (program_name(request.target()).to_string(), env)
    }

    fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    /// Obtiene el valor de una variable
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|s| s.as_str())
    }

    /// Itera las variables en orden alfabético
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.vars.iter()
    }
}

/// Último segmento del target, sin la query
///
/// `/cgibin/hello.py?x=1` → `hello.py`
pub fn program_name(target: &str) -> &str {
    let last_segment = target.rsplit('/').next().unwrap_or("");
    last_segment.split('?').next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection() -> ConnectionInfo {
        ConnectionInfo {
            remote_addr: "10.0.0.7".to_string(),
            remote_port: 51234,
            server_addr: "127.0.0.1".to_string(),
            server_port: 8080,
        }
    }

    fn build(raw: &str) -> (String, CgiEnvironment) {
        CgiEnvironment::build(&Request::from_bytes(raw.as_bytes()), &connection())
    }

    #[test]
    fn test_always_set_variables() {
        let (program, env) = build("GET /cgi/hello.py HTTP/1.1\r\n\r\n");

        assert_eq!(program, "hello.py");
        assert_eq!(env.get("REQUEST_METHOD"), Some("GET"));
        assert_eq!(env.get("REQUEST_URI"), Some("/cgi/hello.py"));
        assert_eq!(env.get("REMOTE_ADDRESS"), Some("10.0.0.7"));
        assert_eq!(env.get("REMOTE_PORT"), Some("51234"));
        assert_eq!(env.get("SERVER_ADDR"), Some("127.0.0.1"));
        assert_eq!(env.get("SERVER_PORT"), Some("8080"));
        assert_eq!(env.get("QUERY_STRING"), None);
        assert_eq!(env.iter().count(), 6);
    }

    #[test]
    fn test_query_string() {
        let (program, env) = build("GET /cgi/sum.py?a=1&b=2 HTTP/1.1\r\n\r\n");

        assert_eq!(program, "sum.py");
        assert_eq!(env.get("QUERY_STRING"), Some("a=1&b=2"));
        assert_eq!(env.get("REQUEST_URI"), Some("/cgi/sum.py?a=1&b=2"));
    }

    #[test]
    fn test_allowed_headers() {
        let raw = "GET /cgi/a.py HTTP/1.1\r\n\
                   Accept: text/html\r\n\
                   Host: localhost:8080\r\n\
                   User-Agent: curl/8.0\r\n\
                   Accept-Encoding: gzip\r\n\
                   Content-Type: text/plain\r\n\
                   Content-Length: 12\r\n\r\n";
        let (_, env) = build(raw);

        assert_eq!(env.get("HTTP_ACCEPT"), Some(" text/html"));
        assert_eq!(env.get("HTTP_HOST"), Some(" localhost:8080"));
        assert_eq!(env.get("HTTP_USER_AGENT"), Some(" curl/8.0"));
        assert_eq!(env.get("HTTP_ACCEPT_ENCODING"), Some(" gzip"));
        assert_eq!(env.get("CONTENT_TYPE"), Some(" text/plain"));
        assert_eq!(env.get("CONTENT_LENGTH"), Some(" 12"));
    }

    #[test]
    fn test_unlisted_headers_are_ignored() {
        let (_, env) = build("GET /cgi/a.py HTTP/1.1\r\nCookie: a=b\r\nhost: lower\r\n\r\n");

        assert_eq!(env.get("HTTP_COOKIE"), None);
        assert_eq!(env.get("HTTP_HOST"), None);
        assert_eq!(env.iter().count(), 6);
    }

    #[test]
    fn test_remote_address_header_overrides_peer() {
        let (_, env) = build("GET /cgi/a.py HTTP/1.1\r\nRemote-Address: 1.2.3.4\r\n\r\n");
        assert_eq!(env.get("REMOTE_ADDRESS"), Some(" 1.2.3.4"));
    }

    #[test]
    fn test_crlf_not_in_header_values() {
        let (_, env) = build("GET /cgi/a.py HTTP/1.1\r\nHost: localhost\r\nAccept: */*\r\n\r\n");

        assert_eq!(env.get("HTTP_HOST"), Some(" localhost"));
        assert_eq!(env.get("HTTP_ACCEPT"), Some(" */*"));
        assert!(env.iter().all(|(_, value)| !value.ends_with('\r')));
    }

    // ==================== Requests malformados ====================

    #[test]
    fn test_header_without_colon_is_skipped() {
        let (_, env) = build("GET /cgi/a.py HTTP/1.1\r\nHost\r\n\r\n");
        assert_eq!(env.get("HTTP_HOST"), None);
    }

    #[test]
    fn test_missing_target() {
        let (program, env) = build("GET\r\n\r\n");

        assert_eq!(program, "");
        assert_eq!(env.get("REQUEST_URI"), Some(""));
    }

    #[test]
    fn test_program_name() {
        assert_eq!(program_name("/cgibin/hello.py"), "hello.py");
        assert_eq!(program_name("/cgibin/hello.py?x=1"), "hello.py");
        assert_eq!(program_name("/cgibin/"), "");
        assert_eq!(program_name("hello.py"), "hello.py");
        // La query puede tener `/`: se toma el último segmento igual
        assert_eq!(program_name("/cgibin/a.py?next=/b"), "b");
    }
}
