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

use std::collections::HashMap;

use crate::error::Error;
use crate::error::Fallible;
use crate::study::stopwatch::Millis;
use crate::study::stopwatch::Stopwatch;
use crate::types::card::Flashcard;
use crate::types::deck::FlashcardDeck;
use crate::types::id::CardId;
use crate::types::id::DeckId;
use crate::types::outcome::CardOutcome;
use crate::types::session::StudySession;
use crate::types::timestamp::Timestamp;

/// Where the current card stands within the session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CardPhase {
    /// The question is showing and the stopwatch is running.
    Unseen,
    /// The answer has been revealed; the stopwatch is frozen.
    Flipped,
    /// The card has been graded. Terminal for this card within the session.
    Answered,
}

impl CardPhase {
    fn name(self) -> &'static str {
        match self {
            CardPhase::Unseen => "unseen",
            CardPhase::Flipped => "flipped",
            CardPhase::Answered => "answered",
        }
    }
}

/// One timed pass through a deck's cards.
///
/// Constructed directly in progress: the first card is showing and its
/// stopwatch running the instant `start` returns. Completes exactly once,
/// either by advancing past the last card or by `finalize_early`, and every
/// operation after that fails with an invalid-transition error.
///
/// The engine borrows nothing from the store: it works on a snapshot of the
/// deck's cards and owns the per-card outcome records, which die with it.
/// Recorded times are never written back onto the stored cards.
pub struct StudyEngine {
    deck_id: DeckId,
    cards: Vec<Flashcard>,
    index: usize,
    phase: CardPhase,
    completed: bool,
    stopwatch: Stopwatch,
    outcomes: HashMap<CardId, CardOutcome>,
    started_at: Timestamp,
}

impl StudyEngine {
    /// Start a session over a snapshot of the deck. Fails on an empty deck
    /// rather than leaving the current card undefined.
    pub fn start(deck: &FlashcardDeck) -> Fallible<Self> {
        if deck.cards().is_empty() {
            return Err(Error::EmptyDeck);
        }
        log::debug!(
            "Starting session over deck {} ({} cards)",
            deck.id(),
            deck.cards().len()
        );
        let mut stopwatch = Stopwatch::new();
        stopwatch.start();
        Ok(Self {
            deck_id: deck.id().clone(),
            cards: deck.cards().to_vec(),
            index: 0,
            phase: CardPhase::Unseen,
            completed: false,
            stopwatch,
            outcomes: HashMap::new(),
            started_at: Timestamp::now(),
        })
    }

    pub fn current_card(&self) -> &Flashcard {
        &self.cards[self.index]
    }

    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_last_card(&self) -> bool {
        self.index == self.cards.len() - 1
    }

    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn answered_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn correct_count(&self) -> usize {
        self.outcomes.values().filter(|o| o.is_correct).count()
    }

    pub fn progress_percent(&self) -> f64 {
        100.0 * self.answered_count() as f64 / self.total_cards() as f64
    }

    /// Mean recorded time over the answered cards; 0 when nothing has been
    /// answered yet.
    pub fn average_time_spent(&self) -> Millis {
        let answered = self.answered_count() as Millis;
        if answered == 0 {
            return 0;
        }
        let total: Millis = self.outcomes.values().map(|o| o.time_spent).sum();
        total / answered
    }

    /// The live stopwatch reading for the current card.
    pub fn elapsed(&self) -> Millis {
        self.stopwatch.elapsed_millis()
    }

    /// Reveal the current card's answer, freezing its stopwatch. Valid only
    /// while the card is unseen; a repeat reveal fails and leaves both the
    /// frozen reading and the phase untouched.
    pub fn reveal_answer(&mut self) -> Fallible<()> {
        self.check_transition("reveal the answer", CardPhase::Unseen)?;
        self.stopwatch.stop();
        self.phase = CardPhase::Flipped;
        Ok(())
    }

    /// Grade the current card, recording the time it spent unseen. Valid
    /// only once the answer has been revealed. Returns the outcome event
    /// for the caller's display.
    pub fn record_answer(&mut self, is_correct: bool) -> Fallible<CardOutcome> {
        self.check_transition("record an answer", CardPhase::Flipped)?;
        let outcome = CardOutcome {
            card_id: self.current_card().id().clone(),
            is_correct,
            time_spent: self.stopwatch.elapsed_millis(),
        };
        self.outcomes.insert(outcome.card_id.clone(), outcome.clone());
        self.phase = CardPhase::Answered;
        Ok(outcome)
    }

    /// Move past the current card once it has been graded. On the last card
    /// this completes the session and yields the summary; otherwise the
    /// next card comes up unseen with a fresh, running stopwatch.
    pub fn advance(&mut self) -> Fallible<Option<StudySession>> {
        self.check_transition("advance", CardPhase::Answered)?;
        if self.is_last_card() {
            return Ok(Some(self.complete()));
        }
        self.index += 1;
        self.phase = CardPhase::Unseen;
        self.stopwatch.restart();
        Ok(None)
    }

    /// Complete the session now, using the outcomes accumulated so far.
    /// Valid at any point after at least one card has been answered.
    pub fn finalize_early(&mut self) -> Fallible<StudySession> {
        if self.completed {
            return Err(Error::InvalidTransition {
                action: "finalize the session",
                state: "completed",
            });
        }
        if self.outcomes.is_empty() {
            return Err(Error::InvalidTransition {
                action: "finalize the session",
                state: "unanswered",
            });
        }
        Ok(self.complete())
    }

    fn complete(&mut self) -> StudySession {
        // The stopwatch must be halted on every exit path so a stale timer
        // cannot leak into a later reading.
        self.stopwatch.reset();
        self.completed = true;
        log::debug!(
            "Session completed: {}/{} correct",
            self.correct_count(),
            self.answered_count()
        );
        StudySession {
            deck_id: self.deck_id.clone(),
            started_at: self.started_at,
            ended_at: Some(Timestamp::now()),
            cards_studied: self.outcomes.len(),
            correct_answers: self.correct_count(),
        }
    }

    fn check_transition(&self, action: &'static str, expected: CardPhase) -> Fallible<()> {
        if self.completed {
            return Err(Error::InvalidTransition {
                action,
                state: "completed",
            });
        }
        if self.phase != expected {
            return Err(Error::InvalidTransition {
                action,
                state: self.phase.name(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::card::CardDraft;

    fn deck(cards: &[(&str, &str)]) -> FlashcardDeck {
        let mut deck = FlashcardDeck::new("test".to_string());
        for (q, a) in cards {
            deck.push_card(Flashcard::new(CardDraft {
                question: q.to_string(),
                answer: a.to_string(),
                category: None,
                image_url: None,
            }));
        }
        deck
    }

    #[test]
    fn test_empty_deck_is_an_error() {
        let deck = FlashcardDeck::new("empty".to_string());
        let result = StudyEngine::start(&deck);
        assert!(matches!(result, Err(Error::EmptyDeck)));
    }

    #[test]
    fn test_two_card_walkthrough() -> Fallible<()> {
        let deck = deck(&[("Q1", "A1"), ("Q2", "A2")]);
        let mut engine = StudyEngine::start(&deck)?;

        assert_eq!(engine.current_card().question(), "Q1");
        assert_eq!(engine.phase(), CardPhase::Unseen);
        assert_eq!(engine.average_time_spent(), 0);
        assert_eq!(engine.progress_percent(), 0.0);

        engine.reveal_answer()?;
        assert_eq!(engine.phase(), CardPhase::Flipped);
        let outcome = engine.record_answer(true)?;
        assert_eq!(&outcome.card_id, deck.cards()[0].id());
        assert!(outcome.is_correct);
        assert_eq!(engine.phase(), CardPhase::Answered);
        assert_eq!(engine.progress_percent(), 50.0);

        assert!(engine.advance()?.is_none());
        assert_eq!(engine.current_card().question(), "Q2");
        assert_eq!(engine.phase(), CardPhase::Unseen);

        engine.reveal_answer()?;
        engine.record_answer(false)?;
        let session = engine.advance()?.expect("last advance completes");
        assert!(engine.is_completed());
        assert_eq!(session.cards_studied, 2);
        assert_eq!(session.correct_answers, 1);
        assert_eq!(&session.deck_id, deck.id());
        assert!(session.started_at <= session.ended_at.unwrap());
        Ok(())
    }

    #[test]
    fn test_repeat_reveal_fails_without_changing_anything() -> Fallible<()> {
        let deck = deck(&[("Q", "A")]);
        let mut engine = StudyEngine::start(&deck)?;
        engine.reveal_answer()?;
        let frozen = engine.elapsed();
        let result = engine.reveal_answer();
        assert!(matches!(result, Err(Error::InvalidTransition { .. })));
        assert_eq!(engine.phase(), CardPhase::Flipped);
        assert_eq!(engine.elapsed(), frozen);
        Ok(())
    }

    #[test]
    fn test_record_before_reveal_is_loud() -> Fallible<()> {
        let deck = deck(&[("Q", "A")]);
        let mut engine = StudyEngine::start(&deck)?;
        let err = engine.record_answer(true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid transition: cannot record an answer in the unseen state"
        );
        assert_eq!(engine.answered_count(), 0);
        Ok(())
    }

    #[test]
    fn test_advance_before_answer_is_loud() -> Fallible<()> {
        let deck = deck(&[("Q", "A")]);
        let mut engine = StudyEngine::start(&deck)?;
        assert!(matches!(
            engine.advance(),
            Err(Error::InvalidTransition { .. })
        ));
        engine.reveal_answer()?;
        assert!(matches!(
            engine.advance(),
            Err(Error::InvalidTransition { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_finalize_early_needs_an_answered_card() -> Fallible<()> {
        let deck = deck(&[("Q1", "A1"), ("Q2", "A2")]);
        let mut engine = StudyEngine::start(&deck)?;
        assert!(matches!(
            engine.finalize_early(),
            Err(Error::InvalidTransition { .. })
        ));
        engine.reveal_answer()?;
        engine.record_answer(true)?;
        let session = engine.finalize_early()?;
        assert_eq!(session.cards_studied, 1);
        assert_eq!(session.correct_answers, 1);
        assert!(session.ended_at.is_some());
        assert!(engine.is_completed());
        Ok(())
    }

    #[test]
    fn test_completed_session_rejects_everything() -> Fallible<()> {
        let deck = deck(&[("Q", "A")]);
        let mut engine = StudyEngine::start(&deck)?;
        engine.reveal_answer()?;
        engine.record_answer(false)?;
        engine.advance()?;
        assert!(engine.is_completed());
        for result in [
            engine.reveal_answer(),
            engine.record_answer(true).map(|_| ()),
            engine.advance().map(|_| ()),
            engine.finalize_early().map(|_| ()),
        ] {
            let err = result.unwrap_err();
            assert!(err.to_string().contains("in the completed state"));
        }
        Ok(())
    }

    #[test]
    fn test_counts_respect_the_invariant() -> Fallible<()> {
        let deck = deck(&[("Q1", "A1"), ("Q2", "A2"), ("Q3", "A3")]);
        let mut engine = StudyEngine::start(&deck)?;
        engine.reveal_answer()?;
        engine.record_answer(true)?;
        engine.advance()?;
        engine.reveal_answer()?;
        engine.record_answer(true)?;
        let session = engine.finalize_early()?;
        assert!(session.correct_answers <= session.cards_studied);
        assert!(session.cards_studied <= deck.cards().len());
        Ok(())
    }

    #[test]
    fn test_average_is_recomputed_per_answer() -> Fallible<()> {
        let deck = deck(&[("Q1", "A1"), ("Q2", "A2")]);
        let mut engine = StudyEngine::start(&deck)?;
        assert_eq!(engine.average_time_spent(), 0);
        engine.reveal_answer()?;
        let first = engine.record_answer(true)?;
        assert_eq!(engine.average_time_spent(), first.time_spent);
        engine.advance()?;
        engine.reveal_answer()?;
        let second = engine.record_answer(false)?;
        assert_eq!(
            engine.average_time_spent(),
            (first.time_spent + second.time_spent) / 2
        );
        Ok(())
    }

    #[test]
    fn test_recorded_time_never_reaches_the_stored_cards() -> Fallible<()> {
        let deck = deck(&[("Q", "A")]);
        let mut engine = StudyEngine::start(&deck)?;
        engine.reveal_answer()?;
        engine.record_answer(true)?;
        engine.advance()?;
        assert!(deck.cards()[0].time_spent().is_none());
        Ok(())
    }
}
