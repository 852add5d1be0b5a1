//! Text statistics for the editor status bar.

use serde::Serialize;

/// Line, character, and word counts for a text buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub lines: usize,
    pub characters: usize,
    pub words: usize,
}

/// Count lines, characters (Unicode scalar values), and whitespace-separated
/// words. Empty input yields all zeros.
pub fn text_stats(text: &str) -> TextStats {
    if text.is_empty() {
        return TextStats::default();
    }
    TextStats {
        lines: text.split('\n').count(),
        characters: text.chars().count(),
        words: text.split_whitespace().count(),
    }
}
