//! Safe-name derivation for client-supplied file names.

use crate::traits::{StorageError, StorageResult};

/// Reduce a client-supplied name to its final path component.
///
/// Both `/` and `\` count as separators, so `../../evil.mp4` and
/// `C:\fakepath\evil.mp4` both become `evil.mp4`.
pub fn safe_file_name(name: &str) -> StorageResult<&str> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    if base.is_empty() || base == "." || base == ".." || base.contains('\0') {
        return Err(StorageError::InvalidName(name.to_string()));
    }

    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_parent_segments() {
        assert_eq!(safe_file_name("../../evil.mp4").unwrap(), "evil.mp4");
    }

    #[test]
    fn strips_absolute_paths() {
        assert_eq!(safe_file_name("/etc/clip.mp4").unwrap(), "clip.mp4");
        assert_eq!(safe_file_name("C:\\fakepath\\clip.mp4").unwrap(), "clip.mp4");
    }

    #[test]
    fn keeps_plain_names() {
        assert_eq!(safe_file_name("my video (1).mp4").unwrap(), "my video (1).mp4");
    }

    #[test]
    fn rejects_names_without_a_final_component() {
        assert!(safe_file_name("").is_err());
        assert!(safe_file_name("videos/").is_err());
        assert!(safe_file_name("..").is_err());
        assert!(safe_file_name("a/.").is_err());
    }
}
