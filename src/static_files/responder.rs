//! # Respuestas Estáticas
//! src/static_files/responder.rs
//!
//! Busca el archivo pedido en el índice, lo lee entero y arma la respuesta.
//! Cualquier falla (no está en el índice, no existe, sin permisos, es un
//! directorio) termina en el mismo 404.

use super::{get_filetype, StaticIndex};
use crate::config::Config;
use crate::http::{Response, StatusCode};
use std::fs;

/// Archivo que se sirve cuando el target es `/`
pub const DEFAULT_FILE: &str = "index.html";

/// Arma la respuesta para `requested_name`
///
/// El archivo se considera encontrado si su nombre es substring de alguna
/// ruta del índice; después se lee desde `staticfiles/<nombre>`.
pub fn resolve(requested_name: &str, index: &StaticIndex, config: &Config) -> Response {
    let filename = if requested_name.is_empty() {
        DEFAULT_FILE
    } else {
        requested_name
    };

    if !index.contains_name(filename) {
        return Response::not_found();
    }

    let filepath = format!("{}/{}", config.staticfiles, filename);
    match fs::read(&filepath) {
        Ok(contents) => Response::new(StatusCode::Ok)
            .with_content_type(get_filetype(filename))
            .with_body_bytes(contents),
        Err(_) => Response::not_found(),
    }
}
