use crate::db::models::Question;

/// Questions whose text contains `term`, ignoring case, in id order.
pub fn search<'a>(term: &str, questions: &'a [Question]) -> Vec<&'a Question> {
    let needle = term.to_lowercase();
    questions
        .iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect()
}
