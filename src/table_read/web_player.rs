//! Browser speech synthesis player
//!
//! `SpeechPlayer` implementation over the Web Speech API. Utterance
//! completion and error events both feed a single continuation supplied
//! by the caller; voice lookup is best-effort and falls back to the
//! default voice.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    SpeechSynthesis, SpeechSynthesisErrorEvent, SpeechSynthesisUtterance, SpeechSynthesisVoice,
};

use super::{ReadingPair, SpeechPlayer, VoiceHint};

const FEMALE_VOICE_NAMES: &[&str] = &["samantha", "victoria", "zira", "karen", "moira"];
const MALE_VOICE_NAMES: &[&str] = &["daniel", "david", "alex", "fred", "oliver"];

/// Speech playback through `window.speechSynthesis`
pub struct WebSpeechPlayer {
    on_complete: Rc<dyn Fn()>,
}

impl WebSpeechPlayer {
    /// Create a player; `on_complete` fires once per utterance, on
    /// either its end or its error event
    pub fn new(on_complete: impl Fn() + 'static) -> Self {
        Self {
            on_complete: Rc::new(on_complete),
        }
    }

    fn synthesis() -> Option<SpeechSynthesis> {
        web_sys::window().and_then(|w| w.speech_synthesis().ok())
    }

    /// Pick a voice matching the hint, if the platform offers one
    fn pick_voice(synth: &SpeechSynthesis, hint: VoiceHint) -> Option<SpeechSynthesisVoice> {
        if hint == VoiceHint::Neutral {
            return None;
        }
        let voices = synth.get_voices();
        let mut fallback = None;

        for voice in voices.iter() {
            let Ok(voice) = voice.dyn_into::<SpeechSynthesisVoice>() else {
                continue;
            };
            let name = voice.name().to_lowercase();
            let is_female =
                name.contains("female") || FEMALE_VOICE_NAMES.iter().any(|n| name.contains(n));
            let is_male = !is_female
                && (name.contains("male") || MALE_VOICE_NAMES.iter().any(|n| name.contains(n)));

            let matches = match hint {
                VoiceHint::Female => is_female,
                VoiceHint::Male => is_male,
                VoiceHint::Neutral => false,
            };
            if matches {
                if voice.lang().starts_with("en") {
                    return Some(voice);
                }
                fallback.get_or_insert(voice);
            }
        }
        fallback
    }

    /// Report a failed utterance as completed on the next task, never
    /// synchronously from inside `speak` (callers may hold state the
    /// continuation needs)
    fn defer_complete(&self) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window, dropping utterance completion");
            return;
        };
        let complete = Rc::clone(&self.on_complete);
        let callback = Closure::once_into_js(move || (*complete)());
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0)
            .is_err()
        {
            log::warn!("failed to defer utterance completion");
        }
    }
}

impl SpeechPlayer for WebSpeechPlayer {
    fn speak(&mut self, pair: &ReadingPair, hint: VoiceHint) {
        let Some(synth) = Self::synthesis() else {
            log::warn!("speech synthesis unavailable, skipping utterance");
            self.defer_complete();
            return;
        };
        let utterance = match SpeechSynthesisUtterance::new_with_text(&pair.dialogue) {
            Ok(u) => u,
            Err(_) => {
                log::warn!("could not create utterance for line {}", pair.line_id);
                self.defer_complete();
                return;
            }
        };

        if let Some(voice) = Self::pick_voice(&synth, hint) {
            utterance.set_voice(Some(&voice));
        }

        let on_end = {
            let complete = Rc::clone(&self.on_complete);
            Closure::<dyn FnMut()>::new(move || (*complete)())
        };
        utterance.set_onend(Some(on_end.as_ref().unchecked_ref()));
        on_end.forget();

        let on_error = {
            let complete = Rc::clone(&self.on_complete);
            Closure::<dyn FnMut(SpeechSynthesisErrorEvent)>::new(move |event: SpeechSynthesisErrorEvent| {
                log::warn!("utterance error: {:?}", event.error());
                (*complete)();
            })
        };
        utterance.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();

        synth.speak(&utterance);
    }

    fn cancel_all(&mut self) {
        if let Some(synth) = Self::synthesis() {
            synth.cancel();
        }
    }
}
