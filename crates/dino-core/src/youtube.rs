//! Resolución de referencias de YouTube (URL o ID suelto) a un ID de vídeo.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static BARE_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]{6,20}$").expect("valid regex"));
static V_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"v=([a-zA-Z0-9_-]{6,20})").expect("valid regex"));

/// Extrae el ID de vídeo de lo que el usuario haya pegado.
///
/// Orden de reglas:
/// 1. ID suelto (6–20 caracteres `[A-Za-z0-9_-]`, sin `http`) → tal cual.
/// 2. URL: parámetro `v`, host `youtu.be`, o segmento tras `shorts`/`embed`.
/// 3. Búsqueda de `v=<token>` en cualquier parte del texto.
/// 4. Si nada encaja, se devuelve la entrada recortada sin cambios; la
///    validación posterior es la que rechaza IDs demasiado cortos.
///
/// Nunca falla: una URL mal formada simplemente pasa al paso 3.
pub fn resolve(raw_input: &str) -> String {
  let raw = raw_input.trim();
  if raw.is_empty() {
    return String::new();
  }

  if BARE_ID.is_match(raw) && !raw.contains("http") {
    return raw.to_string();
  }

  if let Some(id) = Url::parse(raw).ok().and_then(|url| id_from_url(&url)) {
    return id;
  }

  if let Some(caps) = V_PARAM.captures(raw) {
    return caps[1].to_string();
  }

  raw.to_string()
}

fn id_from_url(url: &Url) -> Option<String> {
  if let Some((_, v)) = url.query_pairs().find(|(k, _)| k == "v") {
    if !v.is_empty() {
      return Some(v.into_owned());
    }
  }

  if url.host_str().is_some_and(|h| h.contains("youtu.be")) {
    let id = url.path().strip_prefix('/').unwrap_or(url.path());
    if !id.is_empty() {
      return Some(id.to_string());
    }
  }

  let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
  ["shorts", "embed"].into_iter().find_map(|marker| {
    let idx = segments.iter().position(|s| *s == marker)?;
    segments.get(idx + 1).map(|s| s.to_string())
  })
}

pub fn watch_url(id: &str) -> String {
  if id.is_empty() { "#".to_string() } else { format!("https://www.youtube.com/watch?v={id}") }
}

pub fn embed_url(id: &str) -> String {
  if id.is_empty() { String::new() } else { format!("https://www.youtube.com/embed/{id}") }
}

/// Miniatura que se guarda como `cover` de la canción.
pub fn cover_url(id: &str) -> String {
  if id.is_empty() { String::new() } else { format!("https://img.youtube.com/vi/{id}/mqdefault.jpg") }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bare_ids_pass_through() {
    for id in ["abc123", "dQw4w9WgXcQ", "a_b-c_d-e_f", "ABCDEFGHIJKLMNOPQRST"] {
      assert_eq!(resolve(id), id);
    }
    assert_eq!(resolve("  dQw4w9WgXcQ \n"), "dQw4w9WgXcQ");
  }

  #[test]
  fn short_links() {
    assert_eq!(resolve("https://youtu.be/abc123"), "abc123");
    assert_eq!(resolve("https://youtu.be/abc123?t=42"), "abc123");
  }

  #[test]
  fn watch_links() {
    assert_eq!(resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    assert_eq!(resolve("https://www.youtube.com/watch?list=PL1&v=dQw4w9WgXcQ&t=3"), "dQw4w9WgXcQ");
  }

  #[test]
  fn shorts_and_embed_links() {
    assert_eq!(resolve("https://www.youtube.com/shorts/xyz789"), "xyz789");
    assert_eq!(resolve("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1"), "dQw4w9WgXcQ");
  }

  #[test]
  fn scheme_less_input_uses_v_param_search() {
    assert_eq!(resolve("youtube.com/watch?v=dQw4w9WgXcQ"), "dQw4w9WgXcQ");
  }

  #[test]
  fn unresolvable_input_is_returned_trimmed() {
    assert_eq!(resolve("  not a video  "), "not a video");
    assert_eq!(resolve("https://example.com/page"), "https://example.com/page");
    assert_eq!(resolve("abc"), "abc");
    assert_eq!(resolve("   "), "");
  }

  #[test]
  fn derived_urls() {
    assert_eq!(cover_url("abc123"), "https://img.youtube.com/vi/abc123/mqdefault.jpg");
    assert_eq!(watch_url(""), "#");
    assert_eq!(embed_url(""), "");
  }
}
