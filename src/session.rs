use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::bank::QuestionBankEntry;

/// Number of questions drawn for each attempt.
pub const SESSION_SIZE: usize = 45;

/// A bank question as presented in one session, with its options reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Position of the correct option within `options`, when it is known.
    pub correct_index: Option<usize>,
}

impl SessionQuestion {
    pub fn correct_option(&self) -> Option<&str> {
        self.correct_index
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }
}

/// Draws a session from an eligible bank. The same bank and seed always
/// give the same questions, order and option shuffles.
pub struct SessionBuilder<'a> {
    bank: &'a [QuestionBankEntry],
    size: usize,
}

impl<'a> SessionBuilder<'a> {
    pub fn new(bank: &'a [QuestionBankEntry]) -> Self {
        Self {
            bank,
            size: SESSION_SIZE,
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn build(self, seed: i64) -> Vec<SessionQuestion> {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let mut picked: Vec<&QuestionBankEntry> = self.bank.iter().collect();
        picked.shuffle(&mut rng);
        picked.truncate(self.size);

        picked
            .into_iter()
            .map(|entry| present(entry, seed))
            .collect()
    }
}

/// Draws a session of the default size.
#[allow(dead_code)]
pub fn build_session(bank: &[QuestionBankEntry], seed: i64) -> Vec<SessionQuestion> {
    SessionBuilder::new(bank).build(seed)
}

// Option order depends only on the session seed and the question text, so it
// does not change with whichever other questions were drawn.
fn present(entry: &QuestionBankEntry, seed: i64) -> SessionQuestion {
    let option_seed = seed.wrapping_add(i64::from(question_hash(&entry.question)));
    let mut rng = StdRng::seed_from_u64(option_seed as u64);
    let mut options = entry.options.clone();
    options.shuffle(&mut rng);

    // First match wins when two options share the same text.
    let correct_index = entry
        .correct_index
        .and_then(|i| entry.options.get(i))
        .and_then(|text| options.iter().position(|o| o == text));

    SessionQuestion {
        question: entry.question.clone(),
        options,
        correct_index,
    }
}

/// 32-bit polynomial hash over UTF-16 code units.
pub fn question_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}
