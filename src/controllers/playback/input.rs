/// Keyboard shortcuts understood by the playback controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackKey {
    TogglePlay,
    Reset,
    StepForward,
    StepBack,
}

impl PlaybackKey {
    /// Maps a typed character: space toggles, `r`/`R` resets.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Self::TogglePlay),
            'r' | 'R' => Some(Self::Reset),
            _ => None,
        }
    }

    pub const SHORTCUTS: &'static [(&'static str, &'static str)] = &[
        ("Space", "Play/Pause animation"),
        ("R", "Reset to beginning"),
        ("Left/Right", "Navigate iterations manually"),
    ];
}
