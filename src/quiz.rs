use crate::session::SessionQuestion;

/// One attempt: the drawn questions plus the answers given so far.
#[derive(Debug, Clone)]
pub struct Quiz {
    pub questions: Vec<SessionQuestion>,
    pub answers: Vec<Option<usize>>,
    pub current_index: usize,
    pub seed: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome<'a> {
    pub question: &'a SessionQuestion,
    pub selected: Option<usize>,
    pub is_correct: bool,
}

impl QuestionOutcome<'_> {
    pub fn selected_option(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.question.options.get(i))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults<'a> {
    pub total: usize,
    pub correct: usize,
    pub outcomes: Vec<QuestionOutcome<'a>>,
}

impl QuizResults<'_> {
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            (self.correct as f32 / self.total as f32) * 100.0
        }
    }
}

impl Quiz {
    pub fn new(questions: Vec<SessionQuestion>, seed: i64) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            answers,
            current_index: 0,
            seed,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_question(&self) -> Option<&SessionQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn current_answer(&self) -> Option<usize> {
        self.answers.get(self.current_index).copied().flatten()
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn next_question(&mut self) -> bool {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_question(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Records `option` as the answer to the current question, replacing any
    /// earlier choice. Indices outside the current options are ignored.
    pub fn select_option(&mut self, option: usize) -> bool {
        let in_range = self
            .current_question()
            .is_some_and(|q| option < q.options.len());
        if in_range {
            self.answers[self.current_index] = Some(option);
        }
        in_range
    }

    pub fn results(&self) -> QuizResults<'_> {
        let outcomes: Vec<_> = self
            .questions
            .iter()
            .zip(&self.answers)
            .map(|(question, &selected)| QuestionOutcome {
                question,
                selected,
                is_correct: selected.is_some() && selected == question.correct_index,
            })
            .collect();
        let correct = outcomes.iter().filter(|o| o.is_correct).count();

        QuizResults {
            total: self.questions.len(),
            correct,
            outcomes,
        }
    }
}
