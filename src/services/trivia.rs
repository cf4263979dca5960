use std::collections::BTreeMap;
use std::future::Future;

use color_eyre::Result;
use rand::Rng;

use crate::db::models::{format_categories, Category, Question};
use crate::db::Db;
use crate::models::{NewQuestion, QuestionSubmission};
use crate::pagination::{paginate, Page};
use crate::quiz::{self, CategoryScope};
use crate::search::search;

// ---------------------------------------------------------------------------
// TriviaRepository trait (DIP: service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait TriviaRepository: Send + Sync {
    fn categories(&self) -> impl Future<Output = Result<Vec<Category>>> + Send;

    fn category(&self, category_id: i64) -> impl Future<Output = Result<Option<Category>>> + Send;

    /// All questions, ascending by id.
    fn questions(&self) -> impl Future<Output = Result<Vec<Question>>> + Send;

    /// Questions of one category, ascending by id.
    fn category_questions(
        &self,
        category_id: i64,
    ) -> impl Future<Output = Result<Vec<Question>>> + Send;

    fn create_question(&self, question: &NewQuestion) -> impl Future<Output = Result<i64>> + Send;

    /// Resolves to `false` when nothing was deleted.
    fn delete_question(&self, question_id: i64) -> impl Future<Output = Result<bool>> + Send;
}

impl TriviaRepository for Db {
    fn categories(&self) -> impl Future<Output = Result<Vec<Category>>> + Send {
        Db::categories(self)
    }

    fn category(&self, category_id: i64) -> impl Future<Output = Result<Option<Category>>> + Send {
        Db::category(self, category_id)
    }

    fn questions(&self) -> impl Future<Output = Result<Vec<Question>>> + Send {
        Db::questions(self)
    }

    fn category_questions(
        &self,
        category_id: i64,
    ) -> impl Future<Output = Result<Vec<Question>>> + Send {
        Db::category_questions(self, category_id)
    }

    fn create_question(&self, question: &NewQuestion) -> impl Future<Output = Result<i64>> + Send {
        Db::create_question(self, question)
    }

    fn delete_question(&self, question_id: i64) -> impl Future<Output = Result<bool>> + Send {
        Db::delete_question(self, question_id)
    }
}

// ---------------------------------------------------------------------------
// Outcome enums
// ---------------------------------------------------------------------------

/// One page of questions plus the size of the whole result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

pub enum ListQuestionsOutcome {
    Listed {
        page: QuestionPage,
        categories: BTreeMap<i64, String>,
    },
    /// The requested page has no questions.
    EmptyPage,
}

pub enum DeleteQuestionOutcome {
    Deleted(i64),
    NotFound,
}

pub enum SubmitQuestionOutcome {
    Created(i64),
    /// Search results; an empty page is still a success.
    Searched(QuestionPage),
    /// Blank search term or blank question text.
    Unprocessable,
}

pub enum CategoryQuestionsOutcome {
    Listed {
        page: QuestionPage,
        category: Category,
    },
    CategoryNotFound,
}

pub enum QuizOutcome {
    Question(Question),
    /// Every question in scope has already been asked.
    Exhausted,
    /// The scope has no questions at all.
    EmptyCategory,
}

// ---------------------------------------------------------------------------
// TriviaService
// ---------------------------------------------------------------------------

pub struct TriviaService<R: TriviaRepository = Db> {
    repo: R,
}

impl<R: TriviaRepository + Clone> Clone for TriviaService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<R: TriviaRepository> TriviaService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn categories(&self) -> Result<BTreeMap<i64, String>> {
        let categories = self.repo.categories().await?;
        Ok(format_categories(&categories))
    }

    pub async fn list_questions(&self, page: Page) -> Result<ListQuestionsOutcome> {
        let questions = self.repo.questions().await?;
        let current = paginate(&questions, page);

        if current.is_empty() {
            return Ok(ListQuestionsOutcome::EmptyPage);
        }

        let categories = self.categories().await?;

        Ok(ListQuestionsOutcome::Listed {
            page: QuestionPage {
                questions: current.to_vec(),
                total_questions: questions.len(),
            },
            categories,
        })
    }

    pub async fn delete_question(&self, question_id: i64) -> Result<DeleteQuestionOutcome> {
        if self.repo.delete_question(question_id).await? {
            Ok(DeleteQuestionOutcome::Deleted(question_id))
        } else {
            Ok(DeleteQuestionOutcome::NotFound)
        }
    }

    pub async fn submit_question(
        &self,
        submission: QuestionSubmission,
        page: Page,
    ) -> Result<SubmitQuestionOutcome> {
        match submission {
            QuestionSubmission::Search(term) => {
                if term.trim().is_empty() {
                    return Ok(SubmitQuestionOutcome::Unprocessable);
                }

                let questions = self.repo.questions().await?;
                let matches = search(&term, &questions);
                let current = paginate(&matches, page);

                Ok(SubmitQuestionOutcome::Searched(QuestionPage {
                    questions: current.iter().map(|&q| q.clone()).collect(),
                    total_questions: matches.len(),
                }))
            }
            QuestionSubmission::Create(question) => {
                if question.question.trim().is_empty() {
                    return Ok(SubmitQuestionOutcome::Unprocessable);
                }

                let id = self.repo.create_question(&question).await?;
                Ok(SubmitQuestionOutcome::Created(id))
            }
        }
    }

    pub async fn category_questions(
        &self,
        category_id: i64,
        page: Page,
    ) -> Result<CategoryQuestionsOutcome> {
        let Some(category) = self.repo.category(category_id).await? else {
            return Ok(CategoryQuestionsOutcome::CategoryNotFound);
        };

        let questions = self.repo.category_questions(category_id).await?;

        Ok(CategoryQuestionsOutcome::Listed {
            page: QuestionPage {
                questions: paginate(&questions, page).to_vec(),
                total_questions: questions.len(),
            },
            category,
        })
    }

    pub async fn draw_quiz_question<G: Rng + ?Sized>(
        &self,
        scope: CategoryScope,
        previous_questions: &[i64],
        rng: &mut G,
    ) -> Result<QuizOutcome> {
        let pool = match scope {
            CategoryScope::All => self.repo.questions().await?,
            CategoryScope::Category(id) => self.repo.category_questions(id).await?,
        };

        Ok(match quiz::select(&pool, previous_questions, rng) {
            Ok(Some(question)) => QuizOutcome::Question(question.clone()),
            Ok(None) => QuizOutcome::Exhausted,
            Err(quiz::EmptyPool) => QuizOutcome::EmptyCategory,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
