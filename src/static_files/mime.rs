//! # Tipos de Contenido
//! src/static_files/mime.rs

/// Extensiones que el servidor sirve como archivos estáticos
pub const STATIC_EXTENSIONS: [&str; 8] = ["txt", "html", "js", "css", "png", "jpg", "jpeg", "xml"];

/// Sufijo → `Content-Type`, en orden de búsqueda
const FILE_TYPES: [(&str, &str); 8] = [
    (".txt", "text/plain"),
    (".html", "text/html"),
    (".js", "application/javascript"),
    (".css", "text/css"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".xml", "text/xml"),
];

/// Determina el `Content-Type` de un archivo por su sufijo
///
/// Las extensiones desconocidas dan un string vacío.
///
/// # Ejemplo
/// ```
/// use webserv::static_files::get_filetype;
///
/// assert_eq!(get_filetype("index.html"), "text/html");
/// assert_eq!(get_filetype("notes.md"), "");
/// ```
pub fn get_filetype(filename: &str) -> &'static str {
    FILE_TYPES
        .iter()
        .find(|(suffix, _)| filename.ends_with(suffix))
        .map(|(_, content_type)| *content_type)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(get_filetype("a.txt"), "text/plain");
        assert_eq!(get_filetype("a.html"), "text/html");
        assert_eq!(get_filetype("a.js"), "application/javascript");
        assert_eq!(get_filetype("a.css"), "text/css");
        assert_eq!(get_filetype("a.png"), "image/png");
        assert_eq!(get_filetype("a.jpg"), "image/jpeg");
        assert_eq!(get_filetype("a.jpeg"), "image/jpeg");
        assert_eq!(get_filetype("a.xml"), "text/xml");
    }

    #[test]
    fn test_unknown_extensions() {
        assert_eq!(get_filetype("a.py"), "");
        assert_eq!(get_filetype("a.htm"), "");
        assert_eq!(get_filetype("README"), "");
        assert_eq!(get_filetype(""), "");
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        assert_eq!(get_filetype("A.HTML"), "");
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(get_filetype("css/site.min.css"), "text/css");
    }
}
