//! Table-read playback API
//!
//! Drives the sequencer against the browser speech player. Utterance
//! completions arrive through the player's continuation; the fixed
//! inter-line pause is a host timeout that is cleared on stop so a
//! cancelled read never speaks its next pair.

use lazy_static::lazy_static;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::table_read::{Advance, WebSpeechPlayer};
use crate::{wasm_log, wasm_warn};

use super::core::with_session;
use super::helpers::to_js_err;

lazy_static! {
    static ref PAUSE_TIMER: Mutex<Option<i32>> = Mutex::new(None);
}

fn player() -> WebSpeechPlayer {
    WebSpeechPlayer::new(on_utterance_complete)
}

/// Halt any running read (used when the document is replaced)
pub(crate) fn halt_playback(session: &mut super::core::Session) {
    clear_pause_timer();
    let mut player = player();
    session.sequencer.stop(&mut player);
}

/// Start reading the script aloud
///
/// Errors with a user-visible message when the script has no dialogue.
#[wasm_bindgen(js_name = startTableRead)]
pub fn start_table_read() -> Result<(), JsValue> {
    with_session(|session| {
        let mut player = player();
        session
            .sequencer
            .start(&session.state.document, &mut player)
            .map_err(to_js_err)
    })
}

/// Stop playback, cancelling the in-flight utterance and any pending
/// inter-line pause
#[wasm_bindgen(js_name = stopTableRead)]
pub fn stop_table_read() -> Result<(), JsValue> {
    clear_pause_timer();
    with_session(|session| {
        let mut player = player();
        session.sequencer.stop(&mut player);
        Ok(())
    })
}

/// Id of the line currently being spoken, for highlighting
#[wasm_bindgen(js_name = currentSpeakingLine)]
pub fn current_speaking_line() -> Result<Option<String>, JsValue> {
    with_session(|session| {
        Ok(session
            .sequencer
            .current_line()
            .map(|id| id.as_str().to_string()))
    })
}

/// Continuation fired by the player on utterance end or error
fn on_utterance_complete() {
    let advance = with_session(|session| Ok(session.sequencer.utterance_finished()));
    match advance {
        Ok(Advance::Pause(ms)) => schedule_resume(ms),
        Ok(Advance::Finished) => wasm_log!("table read complete"),
        Ok(Advance::Halted) => {}
        Err(_) => wasm_warn!("utterance completion lost: no session"),
    }
}

/// Speak the next pair once the pause elapses
fn resume_playback() {
    clear_pause_timer();
    let _ = with_session(|session| {
        let mut player = player();
        session.sequencer.resume(&mut player);
        Ok(())
    });
}

fn schedule_resume(ms: u32) {
    let Some(window) = web_sys::window() else {
        wasm_warn!("no window, cannot schedule table read pause");
        return;
    };
    let callback = Closure::once_into_js(resume_playback);
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        ms as i32,
    ) {
        Ok(handle) => {
            if let Ok(mut timer) = PAUSE_TIMER.lock() {
                *timer = Some(handle);
            }
        }
        Err(_) => wasm_warn!("failed to schedule table read pause"),
    }
}

fn clear_pause_timer() {
    let handle = PAUSE_TIMER.lock().ok().and_then(|mut t| t.take());
    if let (Some(handle), Some(window)) = (handle, web_sys::window()) {
        window.clear_timeout_with_handle(handle);
    }
}
