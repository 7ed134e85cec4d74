//! Output filename normalization

use std::path::PathBuf;

/// Base name used when the user provides no filename
pub const DEFAULT_STEM: &str = "qr_code";

/// Normalize a user-supplied filename into an output path.
///
/// Surrounding whitespace is trimmed, an empty name falls back to
/// `fallback_stem`, and the `.png` extension is forced on the result,
/// replacing whatever extension the user typed.
pub fn normalize(raw: &str, fallback_stem: &str) -> PathBuf {
    let trimmed = raw.trim();
    let name = if trimmed.is_empty() {
        fallback_stem
    } else {
        trimmed
    };
    PathBuf::from(name).with_extension("png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_falls_back_to_default_stem() {
        assert_eq!(normalize("", DEFAULT_STEM), PathBuf::from("qr_code.png"));
        assert_eq!(normalize("   ", DEFAULT_STEM), PathBuf::from("qr_code.png"));
    }

    #[test]
    fn bare_name_gains_the_extension() {
        assert_eq!(normalize("my_qr", DEFAULT_STEM), PathBuf::from("my_qr.png"));
        assert_eq!(
            normalize("  my_qr  ", DEFAULT_STEM),
            PathBuf::from("my_qr.png")
        );
    }

    #[test]
    fn foreign_extension_is_replaced() {
        assert_eq!(
            normalize("report.txt", DEFAULT_STEM),
            PathBuf::from("report.png")
        );
        assert_eq!(
            normalize("photo.png", DEFAULT_STEM),
            PathBuf::from("photo.png")
        );
    }

    #[test]
    fn only_the_last_extension_is_replaced() {
        assert_eq!(
            normalize("archive.tar.gz", DEFAULT_STEM),
            PathBuf::from("archive.tar.png")
        );
    }

    #[test]
    fn directory_components_are_preserved() {
        assert_eq!(
            normalize("out/batch", DEFAULT_STEM),
            PathBuf::from("out/batch.png")
        );
    }
}
