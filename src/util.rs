//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
/// Braces that do not name a provided key are left untouched, so JSON
/// examples inside prompts survive.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge model responses.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut cut = max;
  while !s.is_char_boundary(cut) {
    cut -= 1;
  }
  format!("{}… ({} bytes total)", &s[..cut], s.len())
}

/// Last path segment of a URL, without query string or fragment.
pub fn file_name_from_url(url: &str) -> String {
  let path = url.split(['?', '#']).next().unwrap_or(url);
  path.trim_end_matches('/').rsplit('/').next().unwrap_or(path).to_string()
}

/// Lower-cased extension of a file name, if any.
pub fn file_extension(name: &str) -> Option<String> {
  let (stem, ext) = name.rsplit_once('.')?;
  if stem.is_empty() || ext.is_empty() {
    return None;
  }
  Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fill_template_replaces_known_keys_only() {
    let out = fill_template("{\"unitTitle\": \"{unit_title}\"} in {subject}", &[("unit_title", "Loops"), ("subject", "Go")]);
    assert_eq!(out, "{\"unitTitle\": \"Loops\"} in Go");
  }

  #[test]
  fn fill_template_replaces_every_occurrence() {
    assert_eq!(fill_template("{a}-{a}", &[("a", "x")]), "x-x");
  }

  #[test]
  fn trunc_for_log_respects_char_boundaries() {
    assert_eq!(trunc_for_log("short", 10), "short");
    let s = "ééééé"; // 10 bytes
    let t = trunc_for_log(s, 3);
    assert!(t.starts_with("é…"));
    assert!(t.ends_with("(10 bytes total)"));
  }

  #[test]
  fn file_name_from_url_strips_query_and_fragment() {
    assert_eq!(file_name_from_url("https://host/a/b/notes.PDF?sig=1#p2"), "notes.PDF");
    assert_eq!(file_name_from_url("https://host/dir/slides.pptx"), "slides.pptx");
    assert_eq!(file_name_from_url("plain.docx"), "plain.docx");
  }

  #[test]
  fn file_extension_is_lowercased() {
    assert_eq!(file_extension("notes.PDF").as_deref(), Some("pdf"));
    assert_eq!(file_extension("archive.tar.gz").as_deref(), Some("gz"));
    assert_eq!(file_extension("README"), None);
    assert_eq!(file_extension(".hidden"), None);
  }
}
