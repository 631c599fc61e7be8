//! Element types and enumerations for screenplay lines
//!
//! This module defines the closed set of semantic line styles used
//! throughout the line-based screenplay document model, together with
//! the industry-format presentation mapping each style implies.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Enumeration of all semantic roles a screenplay line can carry
///
/// The style determines rendering layout only (alignment, indentation,
/// casing); the core editing model treats it as an opaque tag.
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Scene heading (e.g., "EXT. CITY STREET - DAY") - bold, left aligned
    Location = 0,

    /// Action / scene description - left aligned
    Action = 1,

    /// Character cue above dialogue - 4.2" from left margin
    Character = 2,

    /// Spoken dialogue - 2.9" from left edge
    Dialogue = 3,

    /// Parenthetical direction inside dialogue - 3.7" from left margin
    Parenthetical = 4,

    /// Scene transition (e.g., "CUT TO:") - right aligned
    Transition = 5,

    /// General text - same layout as action
    General = 6,
}

/// All styles in toolbar order
pub const ALL_STYLES: [LineStyle; 7] = [
    LineStyle::Location,
    LineStyle::Action,
    LineStyle::Character,
    LineStyle::Dialogue,
    LineStyle::Parenthetical,
    LineStyle::Transition,
    LineStyle::General,
];

impl LineStyle {
    /// Parse a style from its wire name (the lowercase serialized form)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "location" => Some(LineStyle::Location),
            "action" => Some(LineStyle::Action),
            "character" => Some(LineStyle::Character),
            "dialogue" => Some(LineStyle::Dialogue),
            "parenthetical" => Some(LineStyle::Parenthetical),
            "transition" => Some(LineStyle::Transition),
            "general" => Some(LineStyle::General),
            _ => None,
        }
    }

    /// Get the wire name for this style (lowercase, matches serialization)
    pub fn name(&self) -> &'static str {
        match self {
            LineStyle::Location => "location",
            LineStyle::Action => "action",
            LineStyle::Character => "character",
            LineStyle::Dialogue => "dialogue",
            LineStyle::Parenthetical => "parenthetical",
            LineStyle::Transition => "transition",
            LineStyle::General => "general",
        }
    }

    /// Get CSS class name for this style
    pub fn css_class(&self) -> &'static str {
        match self {
            LineStyle::Location => "screenplay-location",
            LineStyle::Action => "screenplay-action",
            LineStyle::Character => "screenplay-character",
            LineStyle::Dialogue => "screenplay-dialogue",
            LineStyle::Parenthetical => "screenplay-parenthetical",
            LineStyle::Transition => "screenplay-transition",
            LineStyle::General => "screenplay-general",
        }
    }

    /// Get the industry-format layout for this style
    pub fn layout(&self) -> LineLayout {
        match self {
            LineStyle::Location => LineLayout {
                alignment: Alignment::Left,
                indent_in: 0.0,
                uppercase: true,
                bold: true,
            },
            LineStyle::Action | LineStyle::General => LineLayout {
                alignment: Alignment::Left,
                indent_in: 0.0,
                uppercase: false,
                bold: false,
            },
            LineStyle::Character => LineLayout {
                alignment: Alignment::Left,
                indent_in: 4.2,
                uppercase: true,
                bold: false,
            },
            LineStyle::Dialogue => LineLayout {
                alignment: Alignment::Left,
                indent_in: 2.9,
                uppercase: false,
                bold: false,
            },
            LineStyle::Parenthetical => LineLayout {
                alignment: Alignment::Left,
                indent_in: 3.7,
                uppercase: false,
                bold: false,
            },
            LineStyle::Transition => LineLayout {
                alignment: Alignment::Right,
                indent_in: 0.0,
                uppercase: true,
                bold: false,
            },
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle::Action
    }
}

/// Horizontal alignment for a rendered line
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left = 0,
    Right = 1,
}

/// Presentation mapping derived from a line style
///
/// Pure layout data for the rendering host; indentation is expressed in
/// inches from the left page margin per screenwriting format.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LineLayout {
    /// Horizontal alignment
    pub alignment: Alignment,

    /// Left indent in inches from the page margin
    pub indent_in: f32,

    /// Whether the text is displayed in uppercase
    pub uppercase: bool,

    /// Whether the text is displayed bold
    pub bold: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_name_round_trip() {
        for style in ALL_STYLES {
            assert_eq!(LineStyle::from_name(style.name()), Some(style));
        }
    }

    #[test]
    fn test_unknown_style_name() {
        assert_eq!(LineStyle::from_name("montage"), None);
        assert_eq!(LineStyle::from_name(""), None);
        // Wire format is lowercase only
        assert_eq!(LineStyle::from_name("Action"), None);
    }

    #[test]
    fn test_wire_serialization_is_lowercase() {
        let json = serde_json::to_string(&LineStyle::Parenthetical).unwrap();
        assert_eq!(json, "\"parenthetical\"");

        let style: LineStyle = serde_json::from_str("\"transition\"").unwrap();
        assert_eq!(style, LineStyle::Transition);
    }

    #[test]
    fn test_layout_mapping() {
        assert!(LineStyle::Location.layout().bold);
        assert_eq!(LineStyle::Transition.layout().alignment, Alignment::Right);
        assert_eq!(LineStyle::Dialogue.layout().indent_in, 2.9);
        // General renders exactly like action
        assert_eq!(LineStyle::General.layout(), LineStyle::Action.layout());
    }
}
