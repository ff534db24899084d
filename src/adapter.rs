// Adapter Pattern - Format Dispatch onto Incompatible Players
// Existing players expose their own methods; adapters re-expose them through
// the single `MediaPlayer` interface, and `AudioPlayer` picks one by suffix.

use crate::console::Console;
use crate::error::Result;
use tracing::{debug, info};

/// Volume used for every file routed to the legacy audio player.
pub const DEFAULT_VOLUME: u8 = 75;

// ============================================================================
// Target interface
// ============================================================================

pub trait MediaPlayer {
    fn play(&self, filename: &str, console: &mut Console) -> Result<()>;
}

// ============================================================================
// Adaptees: existing players with incompatible interfaces
// ============================================================================

pub struct VlcPlayer;

impl VlcPlayer {
    pub fn play_vlc(&self, filename: &str, console: &mut Console) -> Result<()> {
        console.line(format!("Playing VLC file: {filename}"))?;
        Ok(())
    }
}

pub struct Mp4Player;

impl Mp4Player {
    pub fn play_mp4(&self, filename: &str, console: &mut Console) -> Result<()> {
        console.line(format!("Playing MP4 file: {filename}"))?;
        Ok(())
    }
}

pub struct LegacyAudioPlayer;

impl LegacyAudioPlayer {
    pub fn play_audio(&self, filename: &str, volume: u8, console: &mut Console) -> Result<()> {
        console.line(format!(
            "Playing audio file: {filename} at volume: {volume}"
        ))?;
        Ok(())
    }
}

// ============================================================================
// Adapters
// ============================================================================

pub struct VlcAdapter {
    player: VlcPlayer,
}

impl VlcAdapter {
    pub fn new() -> Self {
        Self { player: VlcPlayer }
    }
}

impl Default for VlcAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaPlayer for VlcAdapter {
    fn play(&self, filename: &str, console: &mut Console) -> Result<()> {
        self.player.play_vlc(filename, console)
    }
}

pub struct Mp4Adapter {
    player: Mp4Player,
}

impl Mp4Adapter {
    pub fn new() -> Self {
        Self { player: Mp4Player }
    }
}

impl Default for Mp4Adapter {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaPlayer for Mp4Adapter {
    fn play(&self, filename: &str, console: &mut Console) -> Result<()> {
        self.player.play_mp4(filename, console)
    }
}

/// Supplies the volume argument the legacy player needs and the target
/// interface lacks.
pub struct LegacyAudioAdapter {
    player: LegacyAudioPlayer,
    volume: u8,
}

impl LegacyAudioAdapter {
    pub fn new(volume: u8) -> Self {
        Self {
            player: LegacyAudioPlayer,
            volume,
        }
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }
}

impl MediaPlayer for LegacyAudioAdapter {
    fn play(&self, filename: &str, console: &mut Console) -> Result<()> {
        self.player.play_audio(filename, self.volume, console)
    }
}

// ============================================================================
// Dispatch by suffix
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Vlc,
    Mp4,
    LegacyAudio,
}

/// Checked top to bottom; the first matching suffix wins.
const SUFFIXES: &[(&str, Format)] = &[
    (".vlc", Format::Vlc),
    (".mp4", Format::Mp4),
    (".wav", Format::LegacyAudio),
    (".mp3", Format::LegacyAudio),
];

impl Format {
    /// Case-sensitive suffix match. `None` means the format is unsupported.
    pub fn detect(filename: &str) -> Option<Format> {
        SUFFIXES
            .iter()
            .find(|(suffix, _)| filename.ends_with(suffix))
            .map(|&(_, format)| format)
    }

    pub fn adapter(self) -> Box<dyn MediaPlayer> {
        match self {
            Format::Vlc => Box::new(VlcAdapter::new()),
            Format::Mp4 => Box::new(Mp4Adapter::new()),
            Format::LegacyAudio => Box::new(LegacyAudioAdapter::new(DEFAULT_VOLUME)),
        }
    }
}

/// Client-facing player that builds the right adapter for each file.
#[derive(Default)]
pub struct AudioPlayer;

impl AudioPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl MediaPlayer for AudioPlayer {
    fn play(&self, filename: &str, console: &mut Console) -> Result<()> {
        let Some(format) = Format::detect(filename) else {
            info!(filename, "unsupported media format");
            console.line(format!("Unsupported format: {filename}"))?;
            return Ok(());
        };

        debug!(filename, ?format, "routing to adapter");
        format.adapter().play(filename, console)
    }
}

pub fn demo(console: &mut Console) -> Result<()> {
    let player = AudioPlayer::new();

    console.heading("Media Player with Adapters")?;
    for file in ["movie.vlc", "video.mp4", "song.mp3", "sound.wav", "document.pdf"] {
        player.play(file, console)?;
    }
    console.blank()?;

    console.heading("Using Adapters Directly")?;
    let vlc: Box<dyn MediaPlayer> = Box::new(VlcAdapter::new());
    vlc.play("another_movie.vlc", console)?;
    let mp4: Box<dyn MediaPlayer> = Box::new(Mp4Adapter::new());
    mp4.play("another_video.mp4", console)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn play(filename: &str) -> Vec<String> {
        let mut console = Console::memory();
        AudioPlayer::new().play(filename, &mut console).unwrap();
        console.transcript().to_vec()
    }

    #[test]
    fn test_detect_known_suffixes() {
        assert_eq!(Format::detect("movie.vlc"), Some(Format::Vlc));
        assert_eq!(Format::detect("video.mp4"), Some(Format::Mp4));
        assert_eq!(Format::detect("sound.wav"), Some(Format::LegacyAudio));
        assert_eq!(Format::detect("song.mp3"), Some(Format::LegacyAudio));
    }

    #[test]
    fn test_detect_unsupported() {
        assert_eq!(Format::detect("doc.pdf"), None);
        assert_eq!(Format::detect(""), None);
        assert_eq!(Format::detect("mp3"), None);
        assert_eq!(Format::detect("SONG.MP3"), None);
    }

    #[test]
    fn test_only_the_last_suffix_counts() {
        assert_eq!(Format::detect("clip.mp4.vlc"), Some(Format::Vlc));
        assert_eq!(Format::detect("clip.vlc.mp4"), Some(Format::Mp4));
        assert_eq!(Format::detect("song.mp3.pdf"), None);
    }

    #[test]
    fn test_mp3_uses_legacy_player_at_default_volume() {
        assert_eq!(
            play("song.mp3"),
            ["Playing audio file: song.mp3 at volume: 75"]
        );
    }

    #[test]
    fn test_wav_shares_the_legacy_adapter() {
        assert_eq!(
            play("sound.wav"),
            ["Playing audio file: sound.wav at volume: 75"]
        );
    }

    #[test]
    fn test_vlc_dispatch() {
        assert_eq!(play("movie.vlc"), ["Playing VLC file: movie.vlc"]);
    }

    #[test]
    fn test_mp4_dispatch() {
        assert_eq!(play("video.mp4"), ["Playing MP4 file: video.mp4"]);
    }

    #[test]
    fn test_unsupported_prints_one_diagnostic() {
        assert_eq!(play("doc.pdf"), ["Unsupported format: doc.pdf"]);
        assert_eq!(play(""), ["Unsupported format: "]);
    }

    #[test]
    fn test_full_path_passed_unmodified() {
        let name = "/media/Summer Hits/track 01.mp3";
        let lines = play(name);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            format!("Playing audio file: {name} at volume: {DEFAULT_VOLUME}")
        );
    }

    #[test]
    fn test_legacy_adapter_custom_volume() {
        let mut console = Console::memory();
        let adapter = LegacyAudioAdapter::new(20);
        assert_eq!(adapter.volume(), 20);
        adapter.play("quiet.wav", &mut console).unwrap();
        assert_eq!(
            console.transcript(),
            ["Playing audio file: quiet.wav at volume: 20"]
        );
    }

    #[test]
    fn test_adapters_are_substitutable() {
        let players: Vec<Box<dyn MediaPlayer>> = vec![
            Box::new(VlcAdapter::new()),
            Box::new(Mp4Adapter::new()),
            Box::new(LegacyAudioAdapter::new(DEFAULT_VOLUME)),
            Box::new(AudioPlayer::new()),
        ];

        let mut console = Console::memory();
        for player in &players {
            player.play("clip.vlc", &mut console).unwrap();
        }
        assert_eq!(console.transcript().len(), players.len());
        assert!(console
            .transcript()
            .iter()
            .all(|line| line.contains("clip.vlc")));
    }

    #[test]
    fn test_demo_output() {
        let mut console = Console::memory();
        demo(&mut console).unwrap();

        let lines = console.transcript();
        assert!(lines.contains(&"Playing VLC file: movie.vlc".to_string()));
        assert!(lines.contains(&"Unsupported format: document.pdf".to_string()));
        assert!(lines.contains(&"Playing MP4 file: another_video.mp4".to_string()));
    }
}
