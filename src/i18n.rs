//! Static per-language UI string tables.
//!
//! Screens and the feedback templates look up fixed phrases here; item and
//! bin names come from their own catalogs. No logic beyond the lookup.

use crate::model::Language;

/// Keys for the fixed UI phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    CorrectHeadline,
    IncorrectHeadline,
    TimesUpHeadline,
    ScoreLabel,
    LevelLabel,
    TimeLabel,
    DragPrompt,
    LevelCompleteHeadline,
    PlayAgain,
    NextLevel,
}

/// Look up a phrase in the given language. Total over both enums, so screens
/// can never render an empty label.
pub fn phrase(language: Language, key: Phrase) -> &'static str {
    match language {
        Language::En => match key {
            Phrase::CorrectHeadline => "Well sorted!",
            Phrase::IncorrectHeadline => "Not quite!",
            Phrase::TimesUpHeadline => "Time's up!",
            Phrase::ScoreLabel => "Score",
            Phrase::LevelLabel => "Level",
            Phrase::TimeLabel => "Time",
            Phrase::DragPrompt => "Drag the item into the right bin",
            Phrase::LevelCompleteHeadline => "Level complete!",
            Phrase::PlayAgain => "Play again",
            Phrase::NextLevel => "Next level",
        },
        Language::De => match key {
            Phrase::CorrectHeadline => "Richtig sortiert!",
            Phrase::IncorrectHeadline => "Leider falsch!",
            Phrase::TimesUpHeadline => "Zeit abgelaufen!",
            Phrase::ScoreLabel => "Punkte",
            Phrase::LevelLabel => "Level",
            Phrase::TimeLabel => "Zeit",
            Phrase::DragPrompt => "Ziehe den Gegenstand in die richtige Tonne",
            Phrase::LevelCompleteHeadline => "Level geschafft!",
            Phrase::PlayAgain => "Nochmal spielen",
            Phrase::NextLevel => "Nächstes Level",
        },
    }
}
