use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

/// Escribe en `<path>.tmp` y renombra, para no dejar nunca un fichero a medias.
/// Crea el directorio padre si falta.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)?;
  }

  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  tracing::trace!(path = %path.display(), bytes = contents.len(), "file written");
  Ok(())
}

/// Lee el fichero como texto; `None` si no existe.
pub fn read_optional(path: &Path) -> io::Result<Option<String>> {
  match fs::read_to_string(path) {
    Ok(content) => Ok(Some(content)),
    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
    Err(e) => Err(e),
  }
}
