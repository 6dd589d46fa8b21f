//! Per-tag payload validation

use std::fmt;
use std::path::{Path, PathBuf};

/// Length of a YouTube video ID
pub const VIDEO_ID_LEN: usize = 11;

/// Extension an audio payload must carry (compared case-insensitively)
pub const AUDIO_EXTENSION: &str = "mp3";

/// Why a matched tag was left untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Audio payload does not end in `.mp3`; `found` is the extension seen (may be empty)
    WrongExtension { found: String },
    /// Audio payload does not name a file under the site root
    MissingFile { path: PathBuf },
    /// Video payload is not 11 characters of `[A-Za-z0-9_-]`
    MalformedVideoId,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::WrongExtension { found } if found.is_empty() => {
                write!(f, "missing .{} extension", AUDIO_EXTENSION)
            }
            RejectReason::WrongExtension { found } => {
                write!(f, "extension '{}' is not {}", found, AUDIO_EXTENSION)
            }
            RejectReason::MissingFile { path } => {
                write!(f, "file not found: {}", path.display())
            }
            RejectReason::MalformedVideoId => {
                write!(
                    f,
                    "video ID must be {} characters of A-Z, a-z, 0-9, _ or -",
                    VIDEO_ID_LEN
                )
            }
        }
    }
}

/// Outcome of validating a single payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Accepted,
    Rejected(RejectReason),
}

impl Validation {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Validation::Accepted)
    }
}

/// Inputs a validator may consult besides the payload itself
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    /// Document root that audio paths are resolved against
    pub site_root: &'a Path,
}

impl<'a> ValidationContext<'a> {
    pub fn new(site_root: &'a Path) -> Self {
        ValidationContext { site_root }
    }
}

/// Extension of the last path component, text after its final `.`
///
/// Dot-files such as `.mp3` count as having the extension `mp3`.
fn extension(payload: &str) -> &str {
    let name = payload
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    match name.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => "",
    }
}

/// Resolve an audio payload against the site root
///
/// Leading slashes are dropped so the payload always stays relative to the root.
pub fn resolve_audio_path(payload: &str, site_root: &Path) -> PathBuf {
    site_root.join(payload.trim_start_matches('/'))
}

/// Validate an `{mp3}` payload: `.mp3` extension and an existing file
pub fn validate_audio(payload: &str, ctx: &ValidationContext<'_>) -> Validation {
    let ext = extension(payload);
    if !ext.eq_ignore_ascii_case(AUDIO_EXTENSION) {
        return Validation::Rejected(RejectReason::WrongExtension {
            found: ext.to_string(),
        });
    }

    let path = resolve_audio_path(payload, ctx.site_root);
    if !path.is_file() {
        return Validation::Rejected(RejectReason::MissingFile { path });
    }

    Validation::Accepted
}

/// Validate a `{youtube}` payload: exactly 11 of `[A-Za-z0-9_-]`
pub fn validate_video(payload: &str) -> Validation {
    let well_formed = payload.len() == VIDEO_ID_LEN
        && payload
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');

    if well_formed {
        Validation::Accepted
    } else {
        Validation::Rejected(RejectReason::MalformedVideoId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site_with(file: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"ID3").unwrap();
        temp
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("music/song.mp3"), "mp3");
        assert_eq!(extension("music/song.tar.MP3"), "MP3");
        assert_eq!(extension("music.d/song"), "");
        assert_eq!(extension("song."), "");
        assert_eq!(extension(".mp3"), "mp3");
    }

    #[test]
    fn test_audio_accepts_existing_mp3() {
        let site = site_with("music/song.mp3");
        let ctx = ValidationContext::new(site.path());
        assert_eq!(validate_audio("music/song.mp3", &ctx), Validation::Accepted);
    }

    #[test]
    fn test_audio_extension_case_insensitive() {
        let site = site_with("music/SONG.MP3");
        let ctx = ValidationContext::new(site.path());
        assert!(validate_audio("music/SONG.MP3", &ctx).is_accepted());
    }

    #[test]
    fn test_audio_rejects_wrong_extension_even_if_file_exists() {
        let site = site_with("music/song.wav");
        let ctx = ValidationContext::new(site.path());
        assert_eq!(
            validate_audio("music/song.wav", &ctx),
            Validation::Rejected(RejectReason::WrongExtension {
                found: "wav".to_string()
            })
        );
    }

    #[test]
    fn test_audio_rejects_missing_file() {
        let site = TempDir::new().unwrap();
        let ctx = ValidationContext::new(site.path());
        match validate_audio("music/missing.mp3", &ctx) {
            Validation::Rejected(RejectReason::MissingFile { path }) => {
                assert_eq!(path, site.path().join("music/missing.mp3"));
            }
            other => panic!("Expected MissingFile, got {:?}", other),
        }
    }

    #[test]
    fn test_audio_rejects_directory() {
        let site = TempDir::new().unwrap();
        fs::create_dir(site.path().join("album.mp3")).unwrap();
        let ctx = ValidationContext::new(site.path());
        assert!(!validate_audio("album.mp3", &ctx).is_accepted());
    }

    #[test]
    fn test_audio_leading_slash_stays_under_root() {
        let site = site_with("music/song.mp3");
        let ctx = ValidationContext::new(site.path());
        assert!(validate_audio("/music/song.mp3", &ctx).is_accepted());
    }

    #[test]
    fn test_video_ids() {
        assert!(validate_video("dQw4w9WgXcQ").is_accepted());
        assert!(validate_video("a-b_c-d_e-f").is_accepted());
        assert_eq!(
            validate_video("dQw4w9WgXc"),
            Validation::Rejected(RejectReason::MalformedVideoId)
        );
        assert!(!validate_video("dQw4w9WgXcQQ").is_accepted());
        assert!(!validate_video("dQw4w9WgX.Q").is_accepted());
        assert!(!validate_video(" dQw4w9WgXc").is_accepted());
        assert!(!validate_video("").is_accepted());
    }

    #[test]
    fn test_reason_display() {
        let reason = RejectReason::WrongExtension {
            found: "wav".to_string(),
        };
        assert_eq!(reason.to_string(), "extension 'wav' is not mp3");
        let reason = RejectReason::WrongExtension {
            found: String::new(),
        };
        assert_eq!(reason.to_string(), "missing .mp3 extension");
        assert!(RejectReason::MalformedVideoId.to_string().contains("11"));
    }
}
