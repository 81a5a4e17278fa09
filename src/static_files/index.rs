//! # Índice de Archivos Estáticos
//! src/static_files/index.rs
//!
//! Recorre `staticfiles` una sola vez al arrancar y guarda las rutas de los
//! archivos con extensión servible. El índice no se refresca: un archivo
//! agregado después del arranque no se sirve hasta reiniciar.

use super::mime::STATIC_EXTENSIONS;
use std::fs;
use std::io;
use std::path::Path;

/// Rutas servibles bajo la raíz estática (con la raíz como prefijo)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticIndex {
    files: Vec<String>,
}

impl StaticIndex {
    /// Recorre `root` recursivamente y filtra por extensión
    ///
    /// Falla si `root` o algún subdirectorio no se puede leer.
    pub fn scan(root: &str) -> io::Result<Self> {
        let mut files = Vec::new();
        collect_files(Path::new(root), &mut files)?;
        files.retain(|file| is_servable(file));
        Ok(Self { files })
    }

    /// Construye un índice a partir de rutas ya conocidas
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Verifica si `name` aparece como substring de alguna ruta del índice
    ///
    /// No es una comparación exacta: `bout.html` coincide con `/srv/about.html`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.files.iter().any(|file| file.contains(name))
    }

    /// Rutas del índice
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn collect_files(dir: &Path, files: &mut Vec<String>) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_files(&path, files)?;
        } else {
            files.push(path.to_string_lossy().into_owned());
        }
    }

    Ok(())
}

/// La "extensión" es lo que sigue al último `.` de la ruta completa
fn is_servable(file: &str) -> bool {
    let extension = file.rsplit('.').next().unwrap_or("");
    STATIC_EXTENSIONS.contains(&extension)
}
