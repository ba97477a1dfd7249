use std::collections::{BTreeSet, HashMap};

use crate::catalog::models::Question;
use crate::catalog::types::Category;
use crate::catalog::CatalogError;

/// Read-only question catalog. Built once at startup and shared by every request.
#[derive(Debug)]
pub(crate) struct QuestionBank {
    questions: Vec<Question>,
    index_by_id: HashMap<i64, usize>,
}

impl QuestionBank {
    pub(crate) fn from_questions(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index_by_id = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            validate_question(question)?;
            if index_by_id.insert(question.id, position).is_some() {
                return Err(CatalogError::DuplicateId(question.id));
            }
        }

        Ok(Self { questions, index_by_id })
    }

    pub(crate) fn all(&self) -> &[Question] {
        &self.questions
    }

    pub(crate) fn get(&self, id: i64) -> Option<&Question> {
        self.index_by_id.get(&id).map(|&position| &self.questions[position])
    }

    pub(crate) fn len(&self) -> usize {
        self.questions.len()
    }

    pub(crate) fn list_categories(&self) -> Vec<Category> {
        let mut categories = self.questions.iter().map(|q| q.category).collect::<Vec<_>>();
        categories.sort_by_key(|category| category.as_str());
        categories.dedup();
        categories
    }

    pub(crate) fn list_topics(&self, category: Option<Category>) -> Vec<String> {
        self.questions
            .iter()
            .filter(|q| category.map_or(true, |wanted| q.category == wanted))
            .map(|q| q.topic.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(ToOwned::to_owned)
            .collect()
    }

    pub(crate) fn questions_in_category_ignore_case(&self, name: &str) -> Vec<&Question> {
        match Category::parse_ignore_case(name.trim()) {
            Some(category) => self.questions.iter().filter(|q| q.category == category).collect(),
            None => Vec::new(),
        }
    }
}

fn validate_question(question: &Question) -> Result<(), CatalogError> {
    let id = question.id;
    if question.topic.trim().is_empty() {
        return Err(CatalogError::BlankField { id, field: "topic" });
    }
    if question.prompt.trim().is_empty() {
        return Err(CatalogError::BlankField { id, field: "question" });
    }
    if question.choices.is_empty() {
        return Err(CatalogError::NoChoices(id));
    }
    if question.correct_index >= question.choices.len() {
        return Err(CatalogError::AnswerOutOfRange {
            id,
            index: question.correct_index,
            choices: question.choices.len(),
        });
    }
    if question.time_limit_seconds == 0 {
        return Err(CatalogError::ZeroTimeLimit(id));
    }
    Ok(())
}
