// Copyright 2026 The flashdeck developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Serialize;

use crate::study::stopwatch::Millis;
use crate::types::id::CardId;

/// A question/answer unit. Immutable once created; `time_spent` is only
/// ever populated transiently inside a study session and is never written
/// back onto the stored card.
#[derive(Clone, Debug, Serialize)]
pub struct Flashcard {
    id: CardId,
    question: String,
    answer: String,
    category: Option<String>,
    image_url: Option<String>,
    time_spent: Option<Millis>,
}

/// The caller-supplied fields of a card, before validation and identifier
/// assignment.
#[derive(Clone, Default, Debug)]
pub struct CardDraft {
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl Flashcard {
    /// Build a card from a draft whose `question` and `answer` have already
    /// been validated as non-blank. Text is stored trimmed; empty optional
    /// fields normalize to `None`.
    pub fn new(draft: CardDraft) -> Self {
        Self {
            id: CardId::fresh(),
            question: draft.question.trim().to_string(),
            answer: draft.answer.trim().to_string(),
            category: normalize(draft.category),
            image_url: normalize(draft.image_url),
            time_spent: None,
        }
    }

    pub fn id(&self) -> &CardId {
        &self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn time_spent(&self) -> Option<Millis> {
        self.time_spent
    }
}

fn normalize(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_text() {
        let card = Flashcard::new(CardDraft {
            question: "  What does \"Ciao\" mean?  ".to_string(),
            answer: " Hello / Goodbye\n".to_string(),
            category: None,
            image_url: None,
        });
        assert_eq!(card.question(), "What does \"Ciao\" mean?");
        assert_eq!(card.answer(), "Hello / Goodbye");
        assert!(card.time_spent().is_none());
    }

    #[test]
    fn test_empty_optional_fields_normalize_to_none() {
        let card = Flashcard::new(CardDraft {
            question: "q".to_string(),
            answer: "a".to_string(),
            category: Some("  ".to_string()),
            image_url: Some("".to_string()),
        });
        assert!(card.category().is_none());
        assert!(card.image_url().is_none());
    }

    #[test]
    fn test_optional_fields_are_kept() {
        let card = Flashcard::new(CardDraft {
            question: "q".to_string(),
            answer: "a".to_string(),
            category: Some("Greetings".to_string()),
            image_url: Some("img/ciao.png".to_string()),
        });
        assert_eq!(card.category(), Some("Greetings"));
        assert_eq!(card.image_url(), Some("img/ciao.png"));
    }
}
