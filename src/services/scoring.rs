use std::collections::{HashMap, HashSet};

use crate::catalog::models::Answer;
use crate::repositories::questions::QuestionBank;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TopicStat {
    pub(crate) topic: String,
    pub(crate) attempted: usize,
    pub(crate) correct: usize,
    pub(crate) accuracy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreReport {
    pub(crate) score: usize,
    pub(crate) total_questions: usize,
    pub(crate) accuracy: f64,
    pub(crate) total_time: u64,
    /// Weakest topic first; equal accuracies keep first-seen order.
    pub(crate) weak_areas: Vec<TopicStat>,
}

#[derive(Debug, Default)]
struct Tally {
    attempted: usize,
    correct: usize,
}

/// Scores one submitted batch against the whole catalog.
///
/// Answers naming an id that is not in the catalog are counted in
/// `total_questions` but contribute to no other statistic. `question_ids` is the
/// set the client says it presented; it is only used for diagnostics. An empty
/// batch scores as zero everywhere, with `accuracy == 0.0`.
pub(crate) fn score(bank: &QuestionBank, answers: &[Answer], question_ids: &[i64]) -> ScoreReport {
    let mut correct = 0usize;
    let mut total_time = 0u64;
    let mut unresolved = 0usize;
    let mut topic_order: Vec<&str> = Vec::new();
    let mut tallies: HashMap<&str, Tally> = HashMap::new();

    for answer in answers {
        let Some(question) = bank.get(answer.question_id) else {
            unresolved += 1;
            continue;
        };

        let is_correct = question.is_correct(answer.selected_index);
        if is_correct {
            correct += 1;
        }
        total_time = total_time.saturating_add(answer.time_spent);

        let tally = tallies.entry(question.topic.as_str()).or_insert_with(|| {
            topic_order.push(question.topic.as_str());
            Tally::default()
        });
        tally.attempted += 1;
        if is_correct {
            tally.correct += 1;
        }
    }

    let presented = question_ids.iter().copied().collect::<HashSet<_>>();
    let outside_session =
        answers.iter().filter(|answer| !presented.contains(&answer.question_id)).count();
    if unresolved > 0 || outside_session > 0 {
        tracing::debug!(unresolved, outside_session, "answers not matching the presented session");
    }

    let mut weak_areas = topic_order
        .into_iter()
        .map(|topic| {
            let tally = &tallies[topic];
            TopicStat {
                topic: topic.to_string(),
                attempted: tally.attempted,
                correct: tally.correct,
                accuracy: percentage(tally.correct, tally.attempted),
            }
        })
        .collect::<Vec<_>>();
    weak_areas.sort_by(|a, b| a.accuracy.total_cmp(&b.accuracy));

    ScoreReport {
        score: correct,
        total_questions: answers.len(),
        accuracy: percentage(correct, answers.len()),
        total_time,
        weak_areas,
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_bank;

    fn answer(question_id: i64, selected_index: i64, time_spent: u64) -> Answer {
        Answer { question_id, selected_index, time_spent }
    }

    fn correct_index(bank: &QuestionBank, id: i64) -> i64 {
        bank.get(id).expect("question").correct_index as i64
    }

    #[test]
    fn scores_mixed_batch_with_weak_areas() {
        let bank = sample_bank();
        let wrong = (correct_index(&bank, 2) + 1) % 4;
        let answers = vec![
            answer(1, correct_index(&bank, 1), 10),
            answer(2, wrong, 20),
            answer(3, correct_index(&bank, 3), 15),
        ];

        let report = score(&bank, &answers, &[1, 2, 3]);

        assert_eq!(report.score, 2);
        assert_eq!(report.total_questions, 3);
        assert!((report.accuracy - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(report.total_time, 45);
        assert_eq!(
            report.weak_areas,
            vec![
                TopicStat {
                    topic: "Percentages".to_string(),
                    attempted: 2,
                    correct: 1,
                    accuracy: 50.0
                },
                TopicStat { topic: "Patterns".to_string(), attempted: 1, correct: 1, accuracy: 100.0 },
            ]
        );
    }

    #[test]
    fn empty_batch_scores_zero() {
        let bank = sample_bank();
        let report = score(&bank, &[], &[]);
        assert_eq!(
            report,
            ScoreReport {
                score: 0,
                total_questions: 0,
                accuracy: 0.0,
                total_time: 0,
                weak_areas: Vec::new()
            }
        );
    }

    #[test]
    fn unknown_question_ids_are_skipped() {
        let bank = sample_bank();
        let answers = vec![answer(1, correct_index(&bank, 1), 12), answer(4_040, 0, 30)];

        let report = score(&bank, &answers, &[1, 4_040]);

        assert_eq!(report.score, 1);
        assert_eq!(report.total_questions, 2);
        assert!((report.accuracy - 50.0).abs() < 1e-9);
        assert_eq!(report.total_time, 12);
        assert_eq!(report.weak_areas.len(), 1);
    }

    #[test]
    fn out_of_range_selection_is_incorrect() {
        let bank = sample_bank();
        let answers = vec![answer(3, -1, 5), answer(3, 17, 5), answer(3, i64::MAX, 5)];

        let report = score(&bank, &answers, &[3]);

        assert_eq!(report.score, 0);
        assert_eq!(report.weak_areas[0].attempted, 3);
        assert_eq!(report.weak_areas[0].accuracy, 0.0);
    }

    #[test]
    fn score_counts_exact_index_matches() {
        let bank = sample_bank();
        let answers = bank
            .all()
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let selected = if i % 2 == 0 { q.correct_index as i64 } else { -1 };
                answer(q.id, selected, 1)
            })
            .collect::<Vec<_>>();

        let expected = answers
            .iter()
            .filter(|a| bank.get(a.question_id).is_some_and(|q| q.is_correct(a.selected_index)))
            .count();
        let report = score(&bank, &answers, &[]);

        assert_eq!(report.score, expected);
        assert!((report.accuracy - expected as f64 / answers.len() as f64 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn equal_accuracy_topics_keep_first_seen_order() {
        let bank = sample_bank();
        // Synonyms (6), Patterns (3), Data Structures (8): all answered wrong once.
        let answers = vec![answer(6, -1, 1), answer(3, -1, 1), answer(8, -1, 1), answer(1, 9, 1)];

        let report = score(&bank, &answers, &[]);
        let topics = report.weak_areas.iter().map(|s| s.topic.as_str()).collect::<Vec<_>>();

        assert_eq!(topics, vec!["Synonyms", "Patterns", "Data Structures", "Percentages"]);
    }

    #[test]
    fn weak_areas_ascend_by_accuracy() {
        let bank = sample_bank();
        // Patterns is seen first and is the stronger topic.
        let answers = vec![
            answer(3, correct_index(&bank, 3), 15),
            answer(1, correct_index(&bank, 1), 10),
            answer(2, (correct_index(&bank, 2) + 1) % 4, 20),
        ];

        let report = score(&bank, &answers, &[3, 1, 2]);

        assert_eq!(
            report.weak_areas,
            vec![
                TopicStat {
                    topic: "Percentages".to_string(),
                    attempted: 2,
                    correct: 1,
                    accuracy: 50.0
                },
                TopicStat { topic: "Patterns".to_string(), attempted: 1, correct: 1, accuracy: 100.0 },
            ]
        );
    }

    #[test]
    fn weakest_topic_leads_regardless_of_arrival() {
        let bank = sample_bank();
        // Synonyms 100, Ratios 0, Percentages 50, in that arrival order.
        let answers = vec![
            answer(6, correct_index(&bank, 6), 1),
            answer(4, -1, 1),
            answer(1, correct_index(&bank, 1), 1),
            answer(12, -1, 1),
        ];

        let report = score(&bank, &answers, &[]);
        let order = report
            .weak_areas
            .iter()
            .map(|s| (s.topic.as_str(), s.accuracy))
            .collect::<Vec<_>>();

        assert_eq!(order, vec![("Ratios", 0.0), ("Percentages", 50.0), ("Synonyms", 100.0)]);
    }

    #[test]
    fn repeated_scoring_is_identical() {
        let bank = sample_bank();
        let answers = vec![answer(5, 1, 7), answer(9, 0, 3), answer(1, 1, 2)];
        assert_eq!(score(&bank, &answers, &[5, 9, 1]), score(&bank, &answers, &[5, 9, 1]));
    }
}
