//! Object key derivation.

use crate::enums::AudioFormat;

/// Derive the object key for a source file.
///
/// `{prefix}/{file_name}.{ext}`, or `{file_name}.{ext}` when `prefix` is empty.
/// A trailing `/` on the prefix is not doubled. The same inputs always produce
/// the same key, so reruns overwrite earlier objects.
#[must_use]
pub fn object_key(prefix: &str, file_name: &str, format: AudioFormat) -> String {
    let ext = format.extension();
    if prefix.is_empty() {
        format!("{file_name}.{ext}")
    } else if prefix.ends_with('/') {
        format!("{prefix}{file_name}.{ext}")
    } else {
        format!("{prefix}/{file_name}.{ext}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_prefix_uses_bare_name() {
        assert_eq!(object_key("", "a.txt", AudioFormat::Mp3), "a.txt.mp3");
    }

    #[test]
    fn prefix_joined_with_slash() {
        assert_eq!(
            object_key("prefix", "a.txt", AudioFormat::Mp3),
            "prefix/a.txt.mp3"
        );
    }

    #[test]
    fn trailing_slash_not_doubled() {
        assert_eq!(
            object_key("audio/2024/", "notes", AudioFormat::Mp3),
            "audio/2024/notes.mp3"
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let first = object_key("p", "b.txt", AudioFormat::Mp3);
        let second = object_key("p", "b.txt", AudioFormat::Mp3);
        assert_eq!(first, second);
    }
}
