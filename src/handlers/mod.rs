pub mod categories;
pub mod questions;
pub mod quizzes;

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use crate::pagination::Page;

/// The first `page` query parameter. Never rejects: a missing or junk value
/// falls back to the first page.
pub(crate) struct PageQuery(pub Page);

impl<S: Send + Sync> FromRequestParts<S> for PageQuery {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        let value = pairs
            .iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.as_str());
        Ok(PageQuery(Page::parse(value)))
    }
}
