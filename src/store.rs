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

use crate::error::Error;
use crate::error::Fallible;
use crate::error::FieldErrors;
use crate::types::card::CardDraft;
use crate::types::card::Flashcard;
use crate::types::deck::FlashcardDeck;
use crate::types::id::DeckId;

/// Owns every deck and card for the lifetime of the process, plus the list
/// of categories seen so far. The presentation layer holds the single
/// instance and passes it around explicitly; nothing here is global.
/// Everything lives in memory and dies with the process.
pub struct Store {
    decks: Vec<FlashcardDeck>,
    categories: Vec<String>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            decks: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Create an empty deck with a fresh identifier. Without a name it is
    /// called "New Deck N", N counting from one.
    pub fn create_deck(&mut self, name: Option<&str>) -> &FlashcardDeck {
        let name = match name {
            Some(name) => name.to_string(),
            None => format!("New Deck {}", self.decks.len() + 1),
        };
        log::debug!("Creating deck {name:?}");
        self.decks.push(FlashcardDeck::new(name));
        self.decks.last().unwrap()
    }

    /// Validate and append a card to a deck. A blank question or answer
    /// (after trimming) aborts with per-field flags and no state change.
    /// A new non-empty category becomes visible through [Self::categories].
    pub fn add_card(&mut self, deck_id: &DeckId, draft: CardDraft) -> Fallible<&Flashcard> {
        let flags = FieldErrors {
            question: draft.question.trim().is_empty(),
            answer: draft.answer.trim().is_empty(),
        };
        if flags.any() {
            return Err(Error::Validation(flags));
        }
        let deck = self
            .decks
            .iter_mut()
            .find(|deck| deck.id() == deck_id)
            .ok_or_else(|| Error::UnknownDeck(deck_id.clone()))?;
        let card = Flashcard::new(draft);
        log::debug!("Adding card {} to deck {}", card.id(), deck_id);
        if let Some(category) = card.category() {
            if !self.categories.iter().any(|c| c == category) {
                self.categories.push(category.to_string());
            }
        }
        Ok(deck.push_card(card))
    }

    pub fn deck(&self, deck_id: &DeckId) -> Option<&FlashcardDeck> {
        self.decks.iter().find(|deck| deck.id() == deck_id)
    }

    pub fn decks(&self) -> &[FlashcardDeck] {
        &self.decks
    }

    /// Categories in first-seen order, without duplicates.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Pre-populate a small vocabulary deck, for trying the program out
    /// without authoring cards first. Returns the deck's id.
    pub fn seed_sample_deck(&mut self) -> DeckId {
        let deck_id = self.create_deck(Some("Italian Vocabulary")).id().clone();
        let cards = [
            ("What does \"Ciao\" mean?", "Hello / Goodbye", "Greetings"),
            (
                "How do you say \"Thank you\" in Italian?",
                "Grazie",
                "Common phrases",
            ),
            (
                "What does \"Buongiorno\" mean?",
                "Good morning / Good day",
                "Greetings",
            ),
        ];
        for (question, answer, category) in cards {
            self.add_card(
                &deck_id,
                CardDraft {
                    question: question.to_string(),
                    answer: answer.to_string(),
                    category: Some(category.to_string()),
                    image_url: None,
                },
            )
            .expect("sample cards are valid");
        }
        deck_id
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
