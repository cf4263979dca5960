use serde::{de, Deserialize, Deserializer};

use crate::db::models::Category;

/// Deserialize a value that may be either a JSON number or a string containing a number.
/// HTML forms always send values as strings.
pub(crate) fn deserialize_string_or_i64<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    struct Vis;
    impl<'de> de::Visitor<'de> for Vis {
        type Value = i64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("integer or numeric string")
        }
        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }
        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(E::custom)
        }
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            // Whole numbers only; the cast saturates, so check the range first
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }
        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            v.trim().parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}

/// A question as submitted for insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "deserialize_string_or_i64")]
    pub category: i64,
    #[serde(deserialize_with = "deserialize_string_or_i64")]
    pub difficulty: i64,
}

/// Body of `POST /questions`: either a search or a new question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSubmission {
    Search(String),
    Create(NewQuestion),
}

impl QuestionSubmission {
    /// Decode a raw request body. Returns `None` for anything that is neither a
    /// string search term nor a complete question. Blank text is left for the
    /// service to reject.
    pub fn from_slice(body: &[u8]) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_slice(body).ok()?;
        let object = value.as_object()?;

        match object.get("searchTerm") {
            Some(serde_json::Value::Null) | None => {}
            Some(term) => return term.as_str().map(|t| QuestionSubmission::Search(t.to_string())),
        }

        NewQuestion::deserialize(&value)
            .ok()
            .map(QuestionSubmission::Create)
    }
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_string_or_i64")]
    pub id: i64,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
}

impl QuizRequest {
    pub fn previous_questions(&self) -> &[i64] {
        self.previous_questions.as_deref().unwrap_or_default()
    }
}

/// Contents of a seed file loaded at startup.
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<NewQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_term_is_a_search() {
        let submission = QuestionSubmission::from_slice(br#"{"searchTerm": "title"}"#);
        assert_eq!(
            submission,
            Some(QuestionSubmission::Search("title".to_string()))
        );
    }

    #[test]
    fn empty_search_term_still_decodes_as_search() {
        assert_eq!(
            QuestionSubmission::from_slice(br#"{"searchTerm": ""}"#),
            Some(QuestionSubmission::Search(String::new()))
        );
    }

    #[test]
    fn non_string_search_term_is_rejected() {
        assert_eq!(QuestionSubmission::from_slice(br#"{"searchTerm": 42}"#), None);
    }

    #[test]
    fn question_with_string_category_is_created() {
        let body = br#"{
            "question": "what is the second rarest skin in LOL?",
            "answer": "Black Alistar",
            "category": "5",
            "difficulty": 3
        }"#;

        let submission = QuestionSubmission::from_slice(body);
        assert_eq!(
            submission,
            Some(QuestionSubmission::Create(NewQuestion {
                question: "what is the second rarest skin in LOL?".to_string(),
                answer: "Black Alistar".to_string(),
                category: 5,
                difficulty: 3,
            }))
        );
    }

    #[test]
    fn null_search_term_falls_through_to_creation() {
        let body = br#"{"searchTerm": null, "question": "Q", "answer": "A", "category": 1, "difficulty": 1}"#;
        assert!(matches!(
            QuestionSubmission::from_slice(body),
            Some(QuestionSubmission::Create(_))
        ));
    }

    #[test]
    fn missing_or_malformed_fields_are_rejected() {
        let cases: [&[u8]; 5] = [
            b"",
            b"[]",
            br#"{"question": "Q", "answer": "A", "category": 1}"#,
            br#"{"question": "Q", "answer": "A", "category": "x", "difficulty": 1}"#,
            br#"{"question": "Q", "answer": null, "category": 1, "difficulty": 1}"#,
        ];

        for body in cases {
            assert_eq!(
                QuestionSubmission::from_slice(body),
                None,
                "expected rejection for {}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn quiz_request_accepts_missing_previous_questions() {
        let request: QuizRequest =
            serde_json::from_str(r#"{"quiz_category": {"id": 6, "type": "Sports"}}"#).unwrap();
        assert_eq!(request.quiz_category.id, 6);
        assert!(request.previous_questions().is_empty());
    }

    #[test]
    fn quiz_request_rejects_non_list_previous_questions() {
        let result = serde_json::from_str::<QuizRequest>(
            r#"{"quiz_category": {"id": 9}, "previous_questions": {}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn whole_number_floats_are_accepted() {
        let body = br#"{"question": "Q", "answer": "A", "category": 5.0, "difficulty": 2}"#;
        assert!(matches!(
            QuestionSubmission::from_slice(body),
            Some(QuestionSubmission::Create(NewQuestion { category: 5, .. }))
        ));

        let request: QuizRequest =
            serde_json::from_str(r#"{"quiz_category": {"id": 6.0}}"#).unwrap();
        assert_eq!(request.quiz_category.id, 6);

        let fractional = br#"{"question": "Q", "answer": "A", "category": 5.5, "difficulty": 2}"#;
        assert_eq!(QuestionSubmission::from_slice(fractional), None);
    }

    #[test]
    fn quiz_category_id_may_be_a_string() {
        let request: QuizRequest = serde_json::from_str(
            r#"{"quiz_category": {"id": "0"}, "previous_questions": [1, 2]}"#,
        )
        .unwrap();
        assert_eq!(request.quiz_category.id, 0);
        assert_eq!(request.previous_questions(), &[1, 2]);
    }
}
