use std::path::Path;

use serde::Serialize;

use super::lines::ResponseBlock;
use crate::error::{RemoteError, Result};

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// Snapshot of the daemon's playback state, replaced wholesale on every poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    /// True iff the daemon reported `status playing`
    pub playing: bool,
    /// Path of the loaded track, empty when nothing is loaded
    pub file: String,
    /// Track length in seconds
    pub duration: i64,
    /// Playback position in seconds; may exceed `duration`
    pub position: i64,
    pub artist: String,
    pub album: String,
    pub title: String,
    pub date: String,
}

impl Status {
    /// Build a status from a framed `status` response.
    ///
    /// A malformed `duration` or `position` fails the whole block.
    pub fn from_block(block: &ResponseBlock) -> Result<Self> {
        let mut playing = false;
        let mut file = String::new();
        let mut duration = 0;
        let mut position = 0;
        let mut artist = String::new();
        let mut album = String::new();
        let mut title = String::new();
        let mut date = String::new();

        for (key, value) in block.entries() {
            match key {
                "status" => playing = value == "playing",
                "file" => file = value.to_string(),
                "duration" => duration = parse_seconds(key, value)?,
                "position" => position = parse_seconds(key, value)?,
                "artist" => artist = value.to_string(),
                "album" => album = value.to_string(),
                "title" => title = value.to_string(),
                "date" => date = value.to_string(),
                _ => {}
            }
        }

        if artist.is_empty() {
            artist = UNKNOWN_ARTIST.to_string();
        }
        if album.is_empty() {
            album = UNKNOWN_ALBUM.to_string();
        }
        if title.is_empty() {
            title = file_base_name(&file);
        }
        if date.is_empty() {
            date = UNKNOWN_DATE.to_string();
        }

        Ok(Status {
            playing,
            file,
            duration,
            position,
            artist,
            album,
            title,
            date,
        })
    }

    /// Parse captured response text (the blank-line terminator is required)
    pub fn parse(text: &str) -> Result<Self> {
        let block = ResponseBlock::from_text(text)?;
        Self::from_block(&block)
    }

    /// Played fraction of the track in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        if self.duration <= 0 {
            return 0.0;
        }
        (self.position as f64 / self.duration as f64).clamp(0.0, 1.0)
    }
}

fn parse_seconds(key: &str, value: &str) -> Result<i64> {
    value.parse::<i64>().map_err(|source| RemoteError::Parse {
        key: key.to_string(),
        value: value.to_string(),
        source,
    })
}

/// Last path component, or the path itself when it has none
fn file_base_name(file: &str) -> String {
    Path::new(file)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BLOCK: &str = "status playing\n\
        file /m/a.mp3\n\
        duration 180\n\
        position 42\n\
        tag artist Bob\n\
        tag album X\n\
        tag title Y\n\
        \n";

    #[test]
    fn parses_tagged_block_and_defaults_date() {
        let status = Status::parse(FULL_BLOCK).unwrap();
        insta::assert_debug_snapshot!(status, @r#"
        Status {
            playing: true,
            file: "/m/a.mp3",
            duration: 180,
            position: 42,
            artist: "Bob",
            album: "X",
            title: "Y",
            date: "Unknown Date",
        }
        "#);
    }

    #[test]
    fn all_recognized_keys_are_taken_verbatim() {
        let text = "status paused\n\
            file /music/Abbey Road/Come Together.flac\n\
            duration 259\n\
            position 260\n\
            tag artist The Beatles\n\
            tag album Abbey Road\n\
            tag title Come Together\n\
            tag date 1969\n\
            \n";
        let status = Status::parse(text).unwrap();

        assert_eq!(
            status,
            Status {
                playing: false,
                file: "/music/Abbey Road/Come Together.flac".to_string(),
                duration: 259,
                position: 260,
                artist: "The Beatles".to_string(),
                album: "Abbey Road".to_string(),
                title: "Come Together".to_string(),
                date: "1969".to_string(),
            }
        );
    }

    #[test]
    fn missing_tags_fall_back_to_placeholders() {
        let status = Status::parse("status stopped\nfile /m/song.mp3\n\n").unwrap();
        assert_eq!(status.title, "song.mp3");
        assert_eq!(status.artist, UNKNOWN_ARTIST);
        assert_eq!(status.album, UNKNOWN_ALBUM);
        assert_eq!(status.date, UNKNOWN_DATE);
        assert!(!status.playing);
    }

    #[test]
    fn empty_file_gives_empty_title() {
        let status = Status::parse("status stopped\n\n").unwrap();
        assert_eq!(status.file, "");
        assert_eq!(status.title, "");
        assert_eq!(status.duration, 0);
        assert_eq!(status.position, 0);
    }

    #[test]
    fn set_and_tag_prefixes_parse_identically() {
        let prefixed = Status::parse("set duration 180\ntag artist Bob\n\n").unwrap();
        let bare = Status::parse("duration 180\nartist Bob\n\n").unwrap();
        assert_eq!(prefixed, bare);
        assert_eq!(prefixed.duration, 180);
        assert_eq!(prefixed.artist, "Bob");
    }

    #[test]
    fn unknown_keys_and_settings_are_ignored() {
        let text = "status playing\n\
            set repeat false\n\
            set vol_left 80\n\
            tag tracknumber 3\n\
            position 7\n\
            \n";
        let status = Status::parse(text).unwrap();
        assert!(status.playing);
        assert_eq!(status.position, 7);
    }

    #[test]
    fn non_numeric_duration_fails_the_whole_block() {
        let err = Status::parse("status playing\nduration abc\nposition 4\n\n").unwrap_err();
        match err {
            RemoteError::Parse { key, value, .. } => {
                assert_eq!(key, "duration");
                assert_eq!(value, "abc");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_position_fails_the_whole_block() {
        let err = Status::parse("position 4.5\n\n").unwrap_err();
        assert!(matches!(err, RemoteError::Parse { ref key, .. } if key == "position"));
    }

    #[test]
    fn unterminated_block_is_a_transport_error() {
        let err = Status::parse("status playing\nfile /m/a.mp3\n").unwrap_err();
        assert!(matches!(err, RemoteError::Transport(_)));
    }

    #[test]
    fn progress_is_clamped_and_safe_for_zero_duration() {
        let mut status = Status::parse("duration 200\nposition 50\n\n").unwrap();
        assert_eq!(status.progress(), 0.25);

        status.position = 300;
        assert_eq!(status.progress(), 1.0);

        status.duration = 0;
        assert_eq!(status.progress(), 0.0);
    }
}
