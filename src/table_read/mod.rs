//! Table-read sequencer
//!
//! Extracts ordered (character, dialogue) pairs from the document and
//! drives sequential speech playback through a `SpeechPlayer`
//! collaborator as an explicit state machine with a cancellation flag.

pub mod voices;
pub mod web_player;

use thiserror::Error;

use crate::models::core::{Document, LineId, LineStyle};

pub use voices::{infer_voice_hint, VoiceHint};
pub use web_player::WebSpeechPlayer;

/// Fixed pause between consecutive utterances, in milliseconds
pub const INTER_LINE_PAUSE_MS: u32 = 800;

/// One spoken unit: a character name and a dialogue line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadingPair {
    pub character: String,
    pub dialogue: String,
    pub line_id: LineId,
}

/// External speech playback capability
///
/// `speak` begins one utterance; its completion (or error) is reported
/// back to the sequencer by the host. `cancel_all` must actively cancel
/// any in-flight utterance, not merely ignore it.
pub trait SpeechPlayer {
    fn speak(&mut self, pair: &ReadingPair, hint: VoiceHint);
    fn cancel_all(&mut self);
}

/// Scan the document for (character, dialogue) pairs in reading order
///
/// A `character` line sets the current speaker. Parentheticals and
/// consecutive dialogue keep the speaker; a line of any other style
/// clears it. Every non-empty dialogue line spoken while a speaker is
/// set yields a pair.
pub fn extract_pairs(doc: &Document) -> Vec<ReadingPair> {
    let mut pairs = Vec::new();
    let mut speaker: Option<String> = None;

    for line in &doc.lines {
        match line.style {
            LineStyle::Character => {
                let name = line.text.trim();
                speaker = if name.is_empty() {
                    None
                } else {
                    Some(name.to_string())
                };
            }
            LineStyle::Dialogue => {
                if let Some(character) = &speaker {
                    if !line.text.trim().is_empty() {
                        pairs.push(ReadingPair {
                            character: character.clone(),
                            dialogue: line.text.clone(),
                            line_id: line.id.clone(),
                        });
                    }
                }
            }
            LineStyle::Parenthetical => {}
            _ => speaker = None,
        }
    }
    pairs
}

/// Playback states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Not reading; also reached naturally at the end of the pair list
    Idle,

    /// Reading pairs sequentially
    Playing,

    /// Halted by an explicit `stop()`
    Stopped,
}

/// What the host should do after an utterance completes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Wait the fixed inter-line pause, then call `resume`
    Pause(u32),

    /// The pair list is exhausted; playback returned to Idle
    Finished,

    /// Playback was cancelled; do not advance
    Halted,
}

/// Table-read errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableReadError {
    /// No (character, dialogue) pairs in the document
    #[error("nothing to read: the script has no dialogue")]
    NothingToRead,

    /// `start` called while already playing
    #[error("a table read is already playing")]
    AlreadyPlaying,
}

/// Sequential playback state machine
///
/// The pair list is computed once at `start`. Completion events and the
/// inter-line pause are delivered by the host (`utterance_finished`,
/// then `resume` after the pause); `stop` raises the cancellation flag
/// and actively cancels the in-flight utterance.
#[derive(Debug)]
pub struct Sequencer {
    state: PlaybackState,
    pairs: Vec<ReadingPair>,
    position: usize,
    cancelled: bool,
    current: Option<LineId>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            state: PlaybackState::Idle,
            pairs: Vec::new(),
            position: 0,
            cancelled: false,
            current: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Line currently being spoken, for highlighting
    ///
    /// Cleared on every transition out of Playing.
    pub fn current_line(&self) -> Option<&LineId> {
        self.current.as_ref()
    }

    /// Begin playback from the top of the document
    ///
    /// Computes the pair list once; an empty list reports
    /// `NothingToRead` and the sequencer stays Idle.
    pub fn start(
        &mut self,
        doc: &Document,
        player: &mut dyn SpeechPlayer,
    ) -> Result<(), TableReadError> {
        if self.state == PlaybackState::Playing {
            return Err(TableReadError::AlreadyPlaying);
        }

        let pairs = extract_pairs(doc);
        if pairs.is_empty() {
            return Err(TableReadError::NothingToRead);
        }

        log::info!("table read started: {} pairs", pairs.len());
        self.pairs = pairs;
        self.position = 0;
        self.cancelled = false;
        self.state = PlaybackState::Playing;
        self.speak_current(player);
        Ok(())
    }

    /// The in-flight utterance completed (or errored)
    pub fn utterance_finished(&mut self) -> Advance {
        if self.state != PlaybackState::Playing || self.cancelled {
            return Advance::Halted;
        }

        self.position += 1;
        if self.position >= self.pairs.len() {
            log::info!("table read finished");
            self.state = PlaybackState::Idle;
            self.current = None;
            return Advance::Finished;
        }
        Advance::Pause(INTER_LINE_PAUSE_MS)
    }

    /// Speak the next pair after the inter-line pause
    ///
    /// A no-op when playback was stopped during the pause.
    pub fn resume(&mut self, player: &mut dyn SpeechPlayer) -> bool {
        if self.state != PlaybackState::Playing || self.cancelled {
            return false;
        }
        self.speak_current(player);
        true
    }

    /// Halt playback, cancelling any in-flight utterance
    pub fn stop(&mut self, player: &mut dyn SpeechPlayer) {
        if self.state != PlaybackState::Playing {
            return;
        }
        log::info!("table read stopped at pair {}", self.position);
        self.cancelled = true;
        player.cancel_all();
        self.state = PlaybackState::Stopped;
        self.current = None;
    }

    fn speak_current(&mut self, player: &mut dyn SpeechPlayer) {
        let pair = &self.pairs[self.position];
        self.current = Some(pair.line_id.clone());
        let hint = infer_voice_hint(&pair.character);
        player.speak(pair, hint);
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::core::Line;

    /// Records utterances instead of speaking them
    #[derive(Default)]
    struct RecordingPlayer {
        spoken: Vec<(String, String)>,
        cancels: usize,
    }

    impl SpeechPlayer for RecordingPlayer {
        fn speak(&mut self, pair: &ReadingPair, _hint: VoiceHint) {
            self.spoken.push((pair.character.clone(), pair.dialogue.clone()));
        }

        fn cancel_all(&mut self) {
            self.cancels += 1;
        }
    }

    fn script(entries: &[(LineStyle, &str)]) -> Document {
        let lines = entries
            .iter()
            .enumerate()
            .map(|(i, (style, text))| {
                Line::new(LineId::from_counter(i as u64 + 1), *text, *style)
            })
            .collect();
        Document::new("Read Through", lines)
    }

    #[test]
    fn test_extract_pairs_basic() {
        let doc = script(&[
            (LineStyle::Character, "JOHN"),
            (LineStyle::Parenthetical, "(muttering)"),
            (LineStyle::Dialogue, "I'm late again."),
            (LineStyle::Action, "He leaves."),
        ]);

        let pairs = extract_pairs(&doc);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].character, "JOHN");
        assert_eq!(pairs[0].dialogue, "I'm late again.");
    }

    #[test]
    fn test_consecutive_dialogue_keeps_speaker() {
        let doc = script(&[
            (LineStyle::Character, "MAYA"),
            (LineStyle::Dialogue, "Wait."),
            (LineStyle::Dialogue, "Don't go."),
        ]);

        let pairs = extract_pairs(&doc);
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|p| p.character == "MAYA"));
    }

    #[test]
    fn test_non_dialogue_clears_speaker() {
        let doc = script(&[
            (LineStyle::Character, "MAYA"),
            (LineStyle::Action, "She turns away."),
            (LineStyle::Dialogue, "Orphaned line."),
        ]);

        assert!(extract_pairs(&doc).is_empty());
    }

    #[test]
    fn test_new_character_replaces_speaker() {
        let doc = script(&[
            (LineStyle::Character, "JOHN"),
            (LineStyle::Dialogue, "Hello?"),
            (LineStyle::Character, "MAYA"),
            (LineStyle::Dialogue, "In here."),
        ]);

        let pairs = extract_pairs(&doc);
        assert_eq!(pairs[0].character, "JOHN");
        assert_eq!(pairs[1].character, "MAYA");
    }

    #[test]
    fn test_empty_dialogue_skipped() {
        let doc = script(&[
            (LineStyle::Character, "JOHN"),
            (LineStyle::Dialogue, "   "),
            (LineStyle::Dialogue, "Actual words."),
        ]);

        let pairs = extract_pairs(&doc);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].dialogue, "Actual words.");
    }

    #[test]
    fn test_start_with_no_dialogue_stays_idle() {
        let doc = script(&[(LineStyle::Action, "Silence.")]);
        let mut seq = Sequencer::new();
        let mut player = RecordingPlayer::default();

        assert_eq!(
            seq.start(&doc, &mut player),
            Err(TableReadError::NothingToRead)
        );
        assert_eq!(seq.state(), PlaybackState::Idle);
        assert!(player.spoken.is_empty());
    }

    #[test]
    fn test_sequential_playback_to_completion() {
        let doc = script(&[
            (LineStyle::Character, "JOHN"),
            (LineStyle::Dialogue, "One."),
            (LineStyle::Dialogue, "Two."),
        ]);
        let mut seq = Sequencer::new();
        let mut player = RecordingPlayer::default();

        seq.start(&doc, &mut player).unwrap();
        assert_eq!(seq.state(), PlaybackState::Playing);
        assert_eq!(player.spoken.len(), 1);
        assert!(seq.current_line().is_some());

        assert_eq!(seq.utterance_finished(), Advance::Pause(INTER_LINE_PAUSE_MS));
        assert!(seq.resume(&mut player));
        assert_eq!(player.spoken.len(), 2);

        assert_eq!(seq.utterance_finished(), Advance::Finished);
        assert_eq!(seq.state(), PlaybackState::Idle);
        assert_eq!(seq.current_line(), None);
    }

    #[test]
    fn test_stop_cancels_inflight_and_clears_highlight() {
        let doc = script(&[
            (LineStyle::Character, "JOHN"),
            (LineStyle::Dialogue, "One."),
            (LineStyle::Dialogue, "Two."),
        ]);
        let mut seq = Sequencer::new();
        let mut player = RecordingPlayer::default();

        seq.start(&doc, &mut player).unwrap();
        seq.stop(&mut player);

        assert_eq!(seq.state(), PlaybackState::Stopped);
        assert_eq!(player.cancels, 1);
        assert_eq!(seq.current_line(), None);

        // The cancelled utterance's late completion event must not advance
        assert_eq!(seq.utterance_finished(), Advance::Halted);
        assert_eq!(player.spoken.len(), 1);
    }

    #[test]
    fn test_stop_during_pause_suppresses_resume() {
        let doc = script(&[
            (LineStyle::Character, "JOHN"),
            (LineStyle::Dialogue, "One."),
            (LineStyle::Dialogue, "Two."),
        ]);
        let mut seq = Sequencer::new();
        let mut player = RecordingPlayer::default();

        seq.start(&doc, &mut player).unwrap();
        assert_eq!(seq.utterance_finished(), Advance::Pause(INTER_LINE_PAUSE_MS));

        seq.stop(&mut player);
        assert!(!seq.resume(&mut player));
        assert_eq!(player.spoken.len(), 1);
    }

    #[test]
    fn test_restart_after_stop() {
        let doc = script(&[
            (LineStyle::Character, "JOHN"),
            (LineStyle::Dialogue, "Again."),
        ]);
        let mut seq = Sequencer::new();
        let mut player = RecordingPlayer::default();

        seq.start(&doc, &mut player).unwrap();
        seq.stop(&mut player);
        seq.start(&doc, &mut player).unwrap();

        assert_eq!(seq.state(), PlaybackState::Playing);
        assert_eq!(player.spoken.len(), 2);
    }

    #[test]
    fn test_start_while_playing_rejected() {
        let doc = script(&[
            (LineStyle::Character, "JOHN"),
            (LineStyle::Dialogue, "Busy."),
        ]);
        let mut seq = Sequencer::new();
        let mut player = RecordingPlayer::default();

        seq.start(&doc, &mut player).unwrap();
        assert_eq!(
            seq.start(&doc, &mut player),
            Err(TableReadError::AlreadyPlaying)
        );
    }
}
