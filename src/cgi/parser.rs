//! # Salida de Programas CGI
//! src/cgi/parser.rs
//!
//! Reconstruye una respuesta HTTP a partir de lo que el programa CGI escribió
//! en su stdout.
//!
//! - Una línea con `Status` se convierte en la status line y no va al body.
//!   Si hay varias, gana la última.
//! - Una línea con `Content` indica que el programa ya escribió su propio
//!   `Content-Type`. La línea queda en el body tal cual y el servidor no
//!   agrega el header por defecto.
//! - Todo lo demás es body, en orden.

use crate::http::{Response, StatusCode};
use std::io::{self, BufRead};
use std::process::ExitStatus;

/// `Content-Type` que se agrega si el programa no manda uno
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// Convierte el resultado de un programa CGI en respuesta
///
/// Si el programa terminó con error no se mira su salida: la respuesta es un
/// 500 sin headers ni body.
pub fn process_child_output(status: ExitStatus, output: &[u8]) -> Response {
    if !status.success() {
        return Response::internal_error();
    }

    match parse_child_output(output) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("   ❌ Error leyendo salida CGI: {}", e);
            Response::internal_error()
        }
    }
}

/// Parsea la salida de un programa CGI que terminó bien
///
/// # Ejemplo
/// ```
/// use webserv::cgi::parser::parse_child_output;
///
/// let response = parse_child_output(&b"Status: 301 Moved\n\nbye"[..]).unwrap();
/// assert_eq!(response.status_bytes(), b"HTTP/1.1 301 Moved\n");
/// assert_eq!(response.body(), b"\nbye");
/// ```
pub fn parse_child_output<R: BufRead>(mut reader: R) -> io::Result<Response> {
    let mut status = None;
    let mut content_type_exists = false;
    let mut body = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        let text = String::from_utf8_lossy(&line);
        if text.contains("Content") {
            content_type_exists = true;
        }
        if text.contains("Status") {
            if let Some(value) = status_value(&text) {
                status = Some(value);
                continue;
            }
        }
        body.extend_from_slice(&line);
    }

    let status = status.unwrap_or_else(|| StatusCode::Ok.to_string());
    let mut response = Response::with_status_line(&status).with_body_bytes(body);
    if !content_type_exists {
        response = response.with_content_type(DEFAULT_CONTENT_TYPE);
    }

    Ok(response)
}

/// Texto entre el primer `": "` y el siguiente (o el fin de línea)
fn status_value(line: &str) -> Option<String> {
    let (_, rest) = line.split_once(": ")?;
    let value = rest.split(": ").next().unwrap_or(rest);
    Some(value.trim_end_matches(['\r', '\n']).to_string())
}
