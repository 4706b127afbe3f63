use std::io::Write;

use dino_core::domain::Song;
use dino_core::validation::ValidationIssue;

/// Renders validation issues with the form fields to mark as invalid.
pub fn render_issues<W: Write>(issues: &[ValidationIssue], out: &mut W) -> std::io::Result<()> {
  writeln!(out, "Needs fixing:")?;
  for issue in issues {
    let fields: Vec<&str> = issue.fields().iter().map(|f| f.as_str()).collect();
    writeln!(out, "  • {} [invalid: {}]", issue, fields.join(", "))?;
  }
  Ok(())
}

pub fn render_listing<W: Write>(songs: &[Song], out: &mut W) -> std::io::Result<()> {
  if songs.is_empty() {
    return writeln!(out, "The local set is empty. Use `dino add --form <FILE>` to add a song.");
  }

  for song in songs {
    let artist = if song.artist.is_empty() { "—" } else { song.artist.as_str() };
    let level = if song.level.is_empty() { "level —".to_string() } else { song.level.join(", ") };
    writeln!(out, "{:>5}  {} — {} • {}", song.id, song.display_title(), artist, level)?;
  }
  writeln!(out, "{} song(s)", songs.len())
}
