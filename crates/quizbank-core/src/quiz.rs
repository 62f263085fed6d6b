// Copyright 2025 Fernando Borretti
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

use serde::Deserialize;
use serde::Serialize;

use crate::rng::TinyRng;
use crate::rng::shuffle;
use crate::types::question::Bilingual;
use crate::types::question::Question;

/// The number of answers shown per quiz question.
pub const CHOICES_PER_QUESTION: usize = 4;

/// A single quiz item: one question with its four answers in presentation
/// order, and the position of the correct one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizItem {
    question: Question,
    choices: Vec<Bilingual>,
    answer_index: usize,
}

impl QuizItem {
    /// Build an item with the answers in shuffled order.
    pub fn shuffled(question: Question, rng: &mut TinyRng) -> Self {
        let order: Vec<usize> = shuffle((0..CHOICES_PER_QUESTION).collect(), rng);
        Self::with_order(question, &order)
    }

    /// Build an item with the correct answer first. Used when sessions are
    /// configured to be deterministic.
    pub fn ordered(question: Question) -> Self {
        let order: Vec<usize> = (0..CHOICES_PER_QUESTION).collect();
        Self::with_order(question, &order)
    }

    fn with_order(question: Question, order: &[usize]) -> Self {
        // Position 0 is the correct answer, 1..=3 are the distractors.
        let pool: [&Bilingual; CHOICES_PER_QUESTION] = [
            question.answer(),
            &question.distractors()[0],
            &question.distractors()[1],
            &question.distractors()[2],
        ];
        let choices: Vec<Bilingual> = order.iter().map(|&i| pool[i].clone()).collect();
        let answer_index = order.iter().position(|&i| i == 0).unwrap();
        QuizItem {
            question,
            choices,
            answer_index,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn choices(&self) -> &[Bilingual] {
        &self.choices
    }

    pub fn answer_index(&self) -> usize {
        self.answer_index
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.answer_index
    }
}

/// Running score for a quiz session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    pub answered: usize,
    pub correct: usize,
}

impl QuizScore {
    pub fn record(&mut self, correct: bool) {
        self.answered += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn percent(&self) -> u32 {
        if self.answered == 0 {
            return 0;
        }
        (self.correct * 100 / self.answered) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::question::QuestionId;

    fn make_question() -> Question {
        Question::new(
            QuestionId::new("1.01"),
            Bilingual::new("q", "q"),
            Bilingual::new("right", "right"),
            [
                Bilingual::new("w1", "w1"),
                Bilingual::new("w2", "w2"),
                Bilingual::new("w3", "w3"),
            ],
        )
    }

    #[test]
    fn test_ordered_item() {
        let item = QuizItem::ordered(make_question());
        assert_eq!(item.answer_index(), 0);
        assert_eq!(item.choices()[0].primary, "right");
        assert!(item.is_correct(0));
        assert!(!item.is_correct(1));
    }

    #[test]
    fn test_shuffled_item_tracks_answer() {
        for seed in 0..32 {
            let mut rng = TinyRng::from_seed(seed);
            let item = QuizItem::shuffled(make_question(), &mut rng);
            assert_eq!(item.choices().len(), CHOICES_PER_QUESTION);
            assert_eq!(item.choices()[item.answer_index()].primary, "right");
        }
    }

    #[test]
    fn test_shuffled_item_keeps_all_choices() {
        let mut rng = TinyRng::from_seed(9);
        let item = QuizItem::shuffled(make_question(), &mut rng);
        let mut texts: Vec<&str> = item.choices().iter().map(|c| c.primary.as_str()).collect();
        texts.sort();
        assert_eq!(texts, vec!["right", "w1", "w2", "w3"]);
    }

    #[test]
    fn test_score() {
        let mut score = QuizScore::default();
        assert_eq!(score.percent(), 0);
        score.record(true);
        score.record(false);
        score.record(true);
        assert_eq!(score.answered, 3);
        assert_eq!(score.correct, 2);
        assert_eq!(score.percent(), 66);
    }
}
