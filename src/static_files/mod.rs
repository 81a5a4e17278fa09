//! # Archivos Estáticos
//! src/static_files/mod.rs
//!
//! - `index`: índice de archivos servibles, construido una vez al arrancar
//! - `mime`: tabla de extensiones a `Content-Type`
//! - `responder`: arma la respuesta 200 o 404 para un archivo pedido

pub mod index;
pub mod mime;
pub mod responder;

pub use index::StaticIndex;
pub use mime::get_filetype;
pub use responder::resolve;
