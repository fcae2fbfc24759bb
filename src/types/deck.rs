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

use crate::types::card::Flashcard;
use crate::types::id::DeckId;
use crate::types::timestamp::Timestamp;

/// A named, ordered, append-only collection of flashcards.
#[derive(Clone, Debug)]
pub struct FlashcardDeck {
    id: DeckId,
    name: String,
    cards: Vec<Flashcard>,
    created_at: Timestamp,
    last_modified: Timestamp,
}

impl FlashcardDeck {
    pub fn new(name: String) -> Self {
        let now = Timestamp::now();
        Self {
            id: DeckId::fresh(),
            name,
            cards: Vec::new(),
            created_at: now,
            last_modified: now,
        }
    }

    pub fn id(&self) -> &DeckId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn last_modified(&self) -> Timestamp {
        self.last_modified
    }

    /// Append a card and bump `last_modified`.
    pub fn push_card(&mut self, card: Flashcard) -> &Flashcard {
        self.cards.push(card);
        self.last_modified = Timestamp::now();
        self.cards.last().unwrap()
    }
}
