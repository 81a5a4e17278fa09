//! # Clasificación de Requests
//! src/router/mod.rs
//!
//! Decide si un request va al directorio CGI o a los archivos estáticos.
//!
//! ```text
//! Request → Router → Static(path) → static_files::resolve
//!                  → Cgi(path)    → cgi::env + cgi::executor
//! ```
//!
//! La decisión es por substring: si el nombre del directorio CGI (último
//! segmento de `cgibin`) aparece en cualquier parte del request, headers
//! incluidos, el request es CGI. Un archivo estático cuyo nombre contenga ese
//! texto termina en el CGI.

use crate::http::Request;

/// Destino de un request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Archivo estático; lleva el target sin el `/` inicial
    Static(String),

    /// Programa CGI; lleva el target completo de la request line
    Cgi(String),
}

/// Router que separa requests estáticos de CGI
#[derive(Debug, Clone)]
pub struct Router {
    /// Último segmento de `cgibin` (ej: "cgibin" para "./files/cgibin")
    cgi_dir_name: String,
}

impl Router {
    /// Crea un router para el directorio CGI configurado
    ///
    /// # Ejemplo
    /// ```
    /// use webserv::router::{Route, Router};
    /// use webserv::http::Request;
    ///
    /// let router = Router::new("./files/cgibin");
    /// let request = Request::from_bytes(b"GET /cgibin/hello.py HTTP/1.1\r\n\r\n");
    /// assert_eq!(router.classify(&request), Route::Cgi("/cgibin/hello.py".to_string()));
    /// ```
    pub fn new(cgibin: &str) -> Self {
        Self {
            cgi_dir_name: cgibin.rsplit('/').next().unwrap_or("").to_string(),
        }
    }

    /// Clasifica el request
    pub fn classify(&self, request: &Request) -> Route {
        if request.raw().contains(&self.cgi_dir_name) {
            Route::Cgi(request.target().to_string())
        } else {
            Route::Static(parse_static_request(request).to_string())
        }
    }

    /// Nombre del directorio CGI que busca el router
    pub fn cgi_dir_name(&self) -> &str {
        &self.cgi_dir_name
    }
}

/// Nombre del archivo pedido: el target sin los `/` iniciales
pub fn parse_static_request(request: &Request) -> &str {
    request.target().trim_start_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(raw: &str) -> Request {
        Request::from_bytes(raw.as_bytes())
    }

    #[test]
    fn test_router_creation() {
        assert_eq!(Router::new("/srv/cgi").cgi_dir_name(), "cgi");
        assert_eq!(Router::new("cgibin").cgi_dir_name(), "cgibin");
    }

    #[test]
    fn test_static_route() {
        let router = Router::new("/srv/cgi");
        let route = router.classify(&request("GET /about.html HTTP/1.1\r\n\r\n"));
        assert_eq!(route, Route::Static("about.html".to_string()));
    }

    #[test]
    fn test_cgi_route() {
        let router = Router::new("/srv/cgi");
        let route = router.classify(&request("GET /cgi/hello.py?x=1 HTTP/1.1\r\n\r\n"));
        assert_eq!(route, Route::Cgi("/cgi/hello.py?x=1".to_string()));
    }

    #[test]
    fn test_empty_target_is_static() {
        let router = Router::new("/srv/cgibin");
        let route = router.classify(&request("GET / HTTP/1.1\r\n\r\n"));
        assert_eq!(route, Route::Static(String::new()));
    }

    // ==================== Substring matching ====================

    #[test]
    fn test_static_file_containing_cgi_name_is_cgi() {
        let router = Router::new("/srv/cgi");
        let route = router.classify(&request("GET /magiccgi.html HTTP/1.1\r\n\r\n"));
        assert!(matches!(route, Route::Cgi(_)));
    }

    #[test]
    fn test_cgi_name_in_header_is_cgi() {
        let router = Router::new("/srv/cgibin");
        let route = router.classify(&request("GET /index.html HTTP/1.1\r\nReferer: /cgibin/\r\n\r\n"));
        assert!(matches!(route, Route::Cgi(_)));
    }

    #[test]
    fn test_trailing_slash_routes_everything_to_cgi() {
        let router = Router::new("/srv/cgi/");
        assert_eq!(router.cgi_dir_name(), "");
        let route = router.classify(&request("GET /about.html HTTP/1.1\r\n\r\n"));
        assert!(matches!(route, Route::Cgi(_)));
    }
}
