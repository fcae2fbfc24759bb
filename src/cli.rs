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

use std::io::Write;
use std::io::stdin;
use std::io::stdout;

use clap::Parser;

use crate::error::Error;
use crate::error::Fallible;
use crate::store::Store;
use crate::study::engine::StudyEngine;
use crate::study::stopwatch::format_clock;
use crate::study::stopwatch::format_minutes;
use crate::types::card::CardDraft;
use crate::types::deck::FlashcardDeck;
use crate::types::id::DeckId;
use crate::types::session::StudySession;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Build a deck at the terminal and study it.
    Study {
        /// Optional name for the new deck.
        name: Option<String>,
        /// Study the built-in sample deck instead of authoring cards.
        #[arg(long)]
        sample: bool,
        /// Also print the session summary as a JSON line.
        #[arg(long)]
        json: bool,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Study { name, sample, json } => study(name.as_deref(), sample, json),
    }
}

fn study(name: Option<&str>, sample: bool, json: bool) -> Fallible<()> {
    let mut store = Store::new();
    let deck_id = if sample {
        store.seed_sample_deck()
    } else {
        let deck_id = store.create_deck(name).id().clone();
        author_cards(&mut store, &deck_id)?;
        deck_id
    };
    let deck = store
        .deck(&deck_id)
        .ok_or_else(|| Error::UnknownDeck(deck_id.clone()))?;
    let session = run_session(deck)?;
    print_summary(deck, &session);
    if json {
        println!("{}", serde_json::to_string(&session)?);
    }
    Ok(())
}

fn author_cards(store: &mut Store, deck_id: &DeckId) -> Fallible<()> {
    let name = store
        .deck(deck_id)
        .ok_or_else(|| Error::UnknownDeck(deck_id.clone()))?
        .name()
        .to_string();
    println!("Adding cards to \"{name}\". Leave the question blank to finish.");
    loop {
        let question = prompt("Question")?;
        if question.trim().is_empty() {
            break;
        }
        let answer = prompt("Answer")?;
        let category = {
            let known = store.categories().join(", ");
            if known.is_empty() {
                prompt("Category (optional)")?
            } else {
                prompt(&format!("Category (optional; known: {known})"))?
            }
        };
        let draft = CardDraft {
            question,
            answer,
            category: Some(category),
            image_url: None,
        };
        let result = store.add_card(deck_id, draft).map(|_| ());
        match result {
            Ok(()) => println!("Saved. {} card(s) so far.", count_cards(store, deck_id)?),
            Err(Error::Validation(flags)) => {
                if flags.question {
                    println!("The question is required.");
                }
                if flags.answer {
                    println!("The answer is required.");
                }
                println!("Card not saved.");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn count_cards(store: &Store, deck_id: &DeckId) -> Fallible<usize> {
    let deck = store
        .deck(deck_id)
        .ok_or_else(|| Error::UnknownDeck(deck_id.clone()))?;
    Ok(deck.cards().len())
}

fn run_session(deck: &FlashcardDeck) -> Fallible<StudySession> {
    let mut engine = StudyEngine::start(deck)?;
    println!();
    println!(
        "Studying \"{}\" ({} cards).",
        deck.name(),
        engine.total_cards()
    );
    loop {
        let card = engine.current_card();
        println!();
        match card.category() {
            Some(category) => println!("Q: {} [{category}]", card.question()),
            None => println!("Q: {}", card.question()),
        }
        if let Some(url) = card.image_url() {
            println!("(image: {url})");
        }
        println!("[press Enter to reveal]");
        read_line()?;
        engine.reveal_answer()?;
        println!("A: {}", engine.current_card().answer());
        println!("Time: {}", format_clock(engine.elapsed()));
        loop {
            match read_verdict()? {
                Verdict::End => match engine.finalize_early() {
                    Ok(session) => return Ok(session),
                    Err(_) => {
                        println!("Nothing has been answered yet; grade this card first.");
                    }
                },
                verdict => {
                    let outcome = engine.record_answer(verdict == Verdict::Correct)?;
                    if outcome.is_correct {
                        println!("Correct!");
                    } else {
                        println!("Incorrect.");
                    }
                    print_progress(&engine);
                    if let Some(session) = engine.advance()? {
                        return Ok(session);
                    }
                    break;
                }
            }
        }
    }
}

fn print_progress(engine: &StudyEngine) {
    let answered = engine.answered_count();
    let correct = engine.correct_count();
    println!(
        "{} of {} cards ({:.0}%), correct: {}, incorrect: {}, average time: {}",
        answered,
        engine.total_cards(),
        engine.progress_percent(),
        correct,
        answered - correct,
        format_minutes(engine.average_time_spent())
    );
}

fn print_summary(deck: &FlashcardDeck, session: &StudySession) {
    println!();
    println!("Session completed.");
    println!("Deck: {}", deck.name());
    println!(
        "Cards studied: {} of {}",
        session.cards_studied,
        deck.cards().len()
    );
    println!("Correct answers: {}", session.correct_answers);
    println!("Started: {}", session.started_at);
    if let Some(ended_at) = session.ended_at {
        println!("Ended: {ended_at}");
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Verdict {
    Correct,
    Incorrect,
    End,
}

fn read_verdict() -> Fallible<Verdict> {
    loop {
        println!("Did you know it? (y = yes, n = no, e = end session)");
        let input = read_line()?;
        match parse_verdict(&input) {
            Some(verdict) => return Ok(verdict),
            None => println!("Invalid input. Please enter y, n, or e."),
        }
    }
}

fn parse_verdict(input: &str) -> Option<Verdict> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(Verdict::Correct),
        "n" | "no" => Some(Verdict::Incorrect),
        "e" | "end" => Some(Verdict::End),
        _ => None,
    }
}

fn prompt(label: &str) -> Fallible<String> {
    print!("{label}: ");
    stdout().flush()?;
    read_line()
}

fn read_line() -> Fallible<String> {
    let mut input = String::new();
    stdin().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}
