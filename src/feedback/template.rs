use crate::i18n::{Phrase, phrase};
use crate::model::{Bin, Language, Resolution, WasteItem};

/// Compose the deterministic local feedback message.
///
/// Always available and never empty; this is both the immediate message shown
/// with the feedback card and the guaranteed fallback when enrichment fails.
pub fn local_message(item: &WasteItem, resolution: Resolution, language: Language) -> String {
    let name = item.name.get(language);
    let description = item.description.get(language);
    let correct_bin = Bin::get(item.correct_bin).name(language);

    let mut message = match resolution {
        Resolution::Drop { bin } if bin == item.correct_bin => match language {
            Language::En => format!(
                "{} {name} belongs in {correct_bin}.",
                phrase(language, Phrase::CorrectHeadline)
            ),
            Language::De => format!(
                "{} {name} gehört in die Tonne {correct_bin}.",
                phrase(language, Phrase::CorrectHeadline)
            ),
        },
        Resolution::Drop { bin } => {
            let chosen_bin = Bin::get(bin).name(language);
            match language {
                Language::En => format!(
                    "{} {name} does not go in {chosen_bin}. It belongs in {correct_bin}.",
                    phrase(language, Phrase::IncorrectHeadline)
                ),
                Language::De => format!(
                    "{} {name} gehört nicht in die Tonne {chosen_bin}, sondern in {correct_bin}.",
                    phrase(language, Phrase::IncorrectHeadline)
                ),
            }
        }
        Resolution::Timeout => match language {
            Language::En => format!(
                "{} {name} belongs in {correct_bin}.",
                phrase(language, Phrase::TimesUpHeadline)
            ),
            Language::De => format!(
                "{} {name} gehört in die Tonne {correct_bin}.",
                phrase(language, Phrase::TimesUpHeadline)
            ),
        },
    };

    if !description.is_empty() {
        message.push(' ');
        message.push_str(description);
    }
    message
}
