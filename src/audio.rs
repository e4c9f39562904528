//! Background music using an HTML audio element
//!
//! One looping track. Playback is best effort: browsers may refuse to play
//! before a user gesture, which is logged and otherwise ignored.

use web_sys::HtmlAudioElement;

pub struct BackgroundMusic {
    track: Option<HtmlAudioElement>,
}

impl BackgroundMusic {
    pub fn new(src: &str, volume: f32) -> Self {
        let track = HtmlAudioElement::new_with_src(src).ok();
        match &track {
            Some(track) => {
                track.set_loop(true);
                track.set_volume(volume.clamp(0.0, 1.0) as f64);
            }
            None => log::warn!("Failed to create audio element - music disabled"),
        }
        Self { track }
    }

    pub fn is_playing(&self) -> bool {
        self.track.as_ref().is_some_and(|t| !t.paused())
    }

    pub fn play(&self) {
        let Some(track) = &self.track else { return };
        match track.play() {
            // The returned promise may still reject (autoplay policy); not awaited
            Ok(_) => {}
            Err(e) => log::warn!("Music playback failed: {:?}", e),
        }
    }

    pub fn pause(&self) {
        if let Some(track) = &self.track {
            let _ = track.pause();
        }
    }

    pub fn toggle(&self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Pause and rewind (used on restart)
    pub fn stop(&self) {
        if let Some(track) = &self.track {
            let _ = track.pause();
            track.set_current_time(0.0);
        }
    }
}
