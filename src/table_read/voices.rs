//! Voice selection heuristic
//!
//! Best-effort first-name to voice-gender inference for table reads.
//! Not part of the sequencing contract: a wrong or missing hint must
//! never block playback, it only biases which synthesis voice gets
//! picked.

/// Preferred voice gender for a character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceHint {
    Female,
    Male,
    Neutral,
}

const FEMALE_NAMES: &[&str] = &[
    "alice", "anna", "claire", "elena", "emily", "emma", "grace", "jane", "julia", "karen",
    "laura", "lily", "lucy", "maria", "mary", "maya", "mia", "nina", "olivia", "rachel", "rose",
    "sarah", "sofia", "sophia", "susan", "zoe",
];

const MALE_NAMES: &[&str] = &[
    "adam", "alex", "andrew", "ben", "carlos", "daniel", "david", "frank", "george", "henry",
    "jack", "james", "john", "luke", "marcus", "mark", "michael", "mike", "nathan", "oliver",
    "paul", "peter", "robert", "sam", "thomas", "tom", "victor", "william",
];

/// Infer a voice hint from a character cue
///
/// Uses the first word of the cue (cues like "JOHN (O.S.)" carry
/// extensions), matched against a small name table with a vowel-ending
/// fallback. Unknown names resolve to `Neutral`.
pub fn infer_voice_hint(character: &str) -> VoiceHint {
    let first = character
        .split_whitespace()
        .next()
        .unwrap_or("")
        .trim_matches(|c: char| !c.is_alphabetic())
        .to_lowercase();

    if first.is_empty() {
        return VoiceHint::Neutral;
    }
    if FEMALE_NAMES.contains(&first.as_str()) {
        return VoiceHint::Female;
    }
    if MALE_NAMES.contains(&first.as_str()) {
        return VoiceHint::Male;
    }
    if first.ends_with('a') {
        return VoiceHint::Female;
    }
    VoiceHint::Neutral
}
