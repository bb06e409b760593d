pub mod launcher;

use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;

pub const DOCUMENT_FILE: &str = "player.html";

/// Self-contained HTML page hosting a native audio element for one playback address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSurface {
    address: String,
    document: String,
}

impl PlayerSurface {
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        let document = render_document(&address);
        Self { address, document }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        let address = address.into();
        if address != self.address {
            self.document = render_document(&address);
            self.address = address;
        }
    }

    pub fn write_to(&self, dir: &Path) -> color_eyre::Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .wrap_err_with(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join(DOCUMENT_FILE);
        std::fs::write(&path, &self.document)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

fn render_document(address: &str) -> String {
    let src = escape_attr(address);
    format!(
        r#"<!doctype html>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<body style="margin:0;background:#0b0b0b;color:#fff;font:16px -apple-system,system-ui">
  <div style="padding:16px">
    <h3 style="margin:0 0 12px">Mixterious — Player</h3>
    <audio controls autoplay src="{src}" style="width:100%"></audio>
    <p style="opacity:.75;margin-top:12px">
      If audio doesn't start, press play. You can also
      <a href="{src}" target="_blank" style="color:#7fb0ff">open it directly</a>.
    </p>
  </div>
</body>
"#
    )
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_embeds_autoplaying_audio() {
        let surface = PlayerSurface::new("http://h:8000/files/abc.mp3");
        let doc = surface.document();

        assert!(doc.starts_with("<!doctype html>"));
        assert!(doc.contains(r#"<audio controls autoplay src="http://h:8000/files/abc.mp3""#));
        assert!(doc.contains(r#"<a href="http://h:8000/files/abc.mp3""#));
    }

    #[test]
    fn test_document_regenerated_on_address_change() {
        let mut surface = PlayerSurface::new("http://h:8000/files/a.mp3");
        surface.set_address("http://h:8000/files/b.mp3");

        assert_eq!(surface.address(), "http://h:8000/files/b.mp3");
        assert!(surface.document().contains("files/b.mp3"));
        assert!(!surface.document().contains("files/a.mp3"));
        assert_eq!(surface, PlayerSurface::new("http://h:8000/files/b.mp3"));
    }

    #[test]
    fn test_address_is_attribute_escaped() {
        let surface = PlayerSurface::new(r#"http://h/x.mp3?a=1&b="<x>""#);
        assert!(
            surface
                .document()
                .contains(r#"src="http://h/x.mp3?a=1&amp;b=&quot;&lt;x&gt;&quot;""#)
        );
    }

    #[test]
    fn test_write_to_directory() {
        let dir = std::env::temp_dir().join(format!("mixterious-player-{}", std::process::id()));
        let surface = PlayerSurface::new("http://h:8000/files/abc.mp3");

        let path = surface.write_to(&dir).unwrap();
        assert_eq!(path.file_name().unwrap(), DOCUMENT_FILE);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), surface.document());

        std::fs::remove_dir_all(dir).unwrap();
    }
}
