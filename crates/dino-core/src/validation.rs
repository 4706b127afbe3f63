use crate::domain::Song;
use std::fmt;

/// Campo del formulario que la capa de presentación debe marcar como inválido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
  Youtube,
  Artist,
  TitleRu,
  TitleEs,
}

impl FormField {
  pub fn as_str(&self) -> &'static str {
    match self {
      FormField::Youtube => "youtube",
      FormField::Artist => "artist",
      FormField::TitleRu => "title_ru",
      FormField::TitleEs => "title_es",
    }
  }
}

/// Problema corregible por el usuario. Son exactamente estas tres condiciones
/// las que deciden si una canción es válida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationIssue {
  MissingYoutube,
  MissingArtist,
  MissingTitle,
}

impl ValidationIssue {
  pub fn message(&self) -> &'static str {
    match self {
      ValidationIssue::MissingYoutube => "YouTube reference required.",
      ValidationIssue::MissingArtist => "Artist required.",
      ValidationIssue::MissingTitle => "Title required (ru or es).",
    }
  }

  pub fn fields(&self) -> &'static [FormField] {
    match self {
      ValidationIssue::MissingYoutube => &[FormField::Youtube],
      ValidationIssue::MissingArtist => &[FormField::Artist],
      ValidationIssue::MissingTitle => &[FormField::TitleRu, FormField::TitleEs],
    }
  }
}

impl fmt::Display for ValidationIssue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.message())
  }
}

/// Lista vacía = canción válida.
pub fn validate(song: &Song) -> Vec<ValidationIssue> {
  let mut issues = Vec::new();

  if song.youtube_id.trim().chars().count() < 6 {
    issues.push(ValidationIssue::MissingYoutube);
  }
  if song.artist.trim().is_empty() {
    issues.push(ValidationIssue::MissingArtist);
  }
  if song.title.is_blank() {
    issues.push(ValidationIssue::MissingTitle);
  }

  issues
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Bilingual;

  fn valid_song() -> Song {
    Song {
      title: Bilingual::new("Песня", "Canción"),
      artist: "Rosalía".into(),
      youtube_id: "dQw4w9WgXcQ".into(),
      ..Default::default()
    }
  }

  #[test]
  fn accepts_complete_song() {
    assert!(validate(&valid_song()).is_empty());
  }

  #[test]
  fn accepts_only_spanish_title() {
    let song = Song { title: Bilingual::new("", "Despacito"), ..valid_song() };
    assert!(validate(&song).is_empty());
  }

  #[test]
  fn each_rule_rejects_independently() {
    let no_artist = Song { artist: "   ".into(), ..valid_song() };
    assert_eq!(validate(&no_artist), vec![ValidationIssue::MissingArtist]);

    let short_id = Song { youtube_id: "abc12".into(), ..valid_song() };
    assert_eq!(validate(&short_id), vec![ValidationIssue::MissingYoutube]);

    let no_title = Song { title: Bilingual::new(" ", ""), ..valid_song() };
    assert_eq!(validate(&no_title), vec![ValidationIssue::MissingTitle]);
  }

  #[test]
  fn empty_song_reports_all_three_in_order() {
    let issues = validate(&Song::default());
    let messages: Vec<&str> = issues.iter().map(ValidationIssue::message).collect();
    assert_eq!(messages, vec!["YouTube reference required.", "Artist required.", "Title required (ru or es)."]);
    assert_eq!(issues[2].fields(), &[FormField::TitleRu, FormField::TitleEs]);
  }
}
