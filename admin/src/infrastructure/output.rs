use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use dino_export::ExportFile;

/// Where finished export payloads are delivered: the CLI's "download" shell.
pub enum Delivery {
  Directory(PathBuf),
  /// Printed for manual copy; stands in for the clipboard.
  Stdout,
}

impl Delivery {
  pub fn deliver<W: Write>(&self, files: &[ExportFile], out: &mut W) -> anyhow::Result<()> {
    match self {
      Delivery::Directory(dir) => {
        for file in files {
          let path = file.write_into(dir).with_context(|| format!("writing {}", file.file_name))?;
          writeln!(out, "wrote {} ({})", path.display(), file.mime)?;
        }
      }
      Delivery::Stdout => {
        let multiple = files.len() > 1;
        for file in files {
          if multiple {
            writeln!(out, "==> {} <==", file.file_name)?;
          }
          write!(out, "{}", file.contents)?;
          if !file.contents.ends_with('\n') {
            writeln!(out)?;
          }
        }
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use dino_core::domain::{Song, SongId};
  use dino_export::{ExportFormat, files::set_files};
  use tempfile::tempdir;

  fn files(format: ExportFormat) -> Vec<ExportFile> {
    set_files(&[Song { id: SongId::new(1), ..Default::default() }], format).unwrap()
  }

  #[test]
  fn stdout_prints_headers_only_for_multiple_files() {
    let mut buf = Vec::new();
    Delivery::Stdout.deliver(&files(ExportFormat::Json), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("[\n"));
    assert!(!text.contains("==>"));

    let mut buf = Vec::new();
    Delivery::Stdout.deliver(&files(ExportFormat::Csv), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("==> songs_all.csv <=="));
    assert!(text.contains("==> lyrics_all.csv <=="));
  }

  #[test]
  fn directory_delivery_writes_every_file() {
    let tmp = tempdir().unwrap();
    let mut buf = Vec::new();
    Delivery::Directory(tmp.path().to_path_buf()).deliver(&files(ExportFormat::Csv), &mut buf).unwrap();

    for name in ["songs_all.csv", "tasks_all.csv", "lyrics_all.csv"] {
      assert!(tmp.path().join(name).exists());
    }
  }
}
