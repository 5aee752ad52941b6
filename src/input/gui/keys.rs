use winit::keyboard::KeyCode;

use crate::controllers::playback::PlaybackKey;

#[must_use]
pub fn playback_key(code: KeyCode) -> Option<PlaybackKey> {
    match code {
        KeyCode::Space => Some(PlaybackKey::TogglePlay),
        KeyCode::KeyR => Some(PlaybackKey::Reset),
        KeyCode::ArrowRight => Some(PlaybackKey::StepForward),
        KeyCode::ArrowLeft => Some(PlaybackKey::StepBack),
        _ => None,
    }
}
