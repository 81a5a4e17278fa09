//! # Envío de Respuestas
//! src/http/encoder.rs
//!
//! Comprime el body con gzip cuando el cliente lo pide y escribe la
//! respuesta en el socket en dos escrituras: primero la status line, después
//! headers + body juntos.

use super::Response;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Write};

/// Comprime el body si el cliente acepta gzip
///
/// La status line y los headers nunca se comprimen.
pub fn encode_body(body: &[u8], accepts_gzip: bool) -> io::Result<Vec<u8>> {
    if !accepts_gzip {
        return Ok(body.to_vec());
    }

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(body)?;
    encoder.finish()
}

/// Escribe la respuesta completa en `writer`
///
/// No se agrega `Content-Length` ni `Content-Encoding`.
///
/// # Ejemplo
/// ```
/// use webserv::http::{encoder, Response, StatusCode};
///
/// let response = Response::new(StatusCode::Ok)
///     .with_content_type("text/plain")
///     .with_body_bytes(b"hola".to_vec());
///
/// let mut wire = Vec::new();
/// encoder::send_response(&mut wire, response, false).unwrap();
/// assert_eq!(wire, b"HTTP/1.1 200 OK\nContent-Type: text/plain\n\nhola");
/// ```
pub fn send_response<W: Write>(writer: &mut W, mut response: Response, accepts_gzip: bool) -> io::Result<()> {
    // El body se comprime cuando status y header ya están definidos
    let body = encode_body(response.body(), accepts_gzip)?;
    response.set_body(body);

    writer.write_all(&response.status_bytes())?;

    let mut rest = response.header_bytes();
    rest.extend_from_slice(response.body());
    writer.write_all(&rest)?;

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn gunzip(bytes: &[u8]) -> Vec<u8> {
        let mut decoder = GzDecoder::new(bytes);
        let mut out = Vec::new();
        decoder.read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_encode_body_plain() {
        let body = encode_body(b"hello", false).unwrap();
        assert_eq!(body, b"hello");
    }

    #[test]
    fn test_encode_body_gzip() {
        let body = encode_body(b"hello hello hello", true).unwrap();

        // Magic number de gzip
        assert_eq!(&body[..2], &[0x1f, 0x8b]);
        assert_eq!(gunzip(&body), b"hello hello hello");
    }

    #[test]
    fn test_encode_empty_body_gzip() {
        let body = encode_body(b"", true).unwrap();
        assert!(gunzip(&body).is_empty());
    }

    // ==================== Wire format ====================

    #[test]
    fn test_send_plain_response() {
        let response = Response::not_found();
        let mut wire = Vec::new();
        send_response(&mut wire, response.clone(), false).unwrap();

        let mut expected = response.status_bytes();
        expected.extend_from_slice(&response.header_bytes());
        expected.extend_from_slice(response.body());
        assert_eq!(wire, expected);
    }

    #[test]
    fn test_send_gzip_keeps_status_and_header_plain() {
        let response = Response::new(StatusCode::Ok)
            .with_content_type("text/html")
            .with_body_bytes(b"<p>hola</p>".to_vec());

        let mut wire = Vec::new();
        send_response(&mut wire, response, true).unwrap();

        let prefix = b"HTTP/1.1 200 OK\nContent-Type: text/html\n\n";
        assert!(wire.starts_with(prefix));
        assert_eq!(gunzip(&wire[prefix.len()..]), b"<p>hola</p>");
    }

    #[test]
    fn test_send_never_writes_content_length() {
        let response = Response::new(StatusCode::Ok)
            .with_content_type("text/plain")
            .with_body_bytes(b"abc".to_vec());

        let mut wire = Vec::new();
        send_response(&mut wire, response, false).unwrap();

        let text = String::from_utf8(wire).unwrap();
        assert!(!text.contains("Content-Length"));
    }
}
