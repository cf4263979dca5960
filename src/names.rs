pub const CATEGORIES_URL: &str = "/categories";
pub const CATEGORY_QUESTIONS_URL: &str = "/categories/{id}/questions";
pub const QUESTIONS_URL: &str = "/questions";
pub const QUESTION_URL: &str = "/questions/{id}";
pub const QUIZZES_URL: &str = "/quizzes";

// Pagination
pub const PAGE_SIZE: usize = 10;

// Quiz
/// `quiz_category.id` value that draws from every category.
pub const ALL_CATEGORIES_ID: i64 = 0;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://trivia.db?mode=rwc";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_LOG_FILTER: &str = "trivia=debug,tower_http=info,axum=info";
