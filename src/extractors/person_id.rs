//! Extract the `{id}` path segment of /people/{id}. Only ASCII digits route; anything else is a 404.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonId(pub i64);

/// Parse a digit-only id that fits in i64.
pub fn parse_person_id(segment: &str) -> Option<i64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[async_trait]
impl<S> FromRequestParts<S> for PersonId
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;
        parse_person_id(&segment).map(PersonId).ok_or(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only() {
        assert_eq!(parse_person_id("42"), Some(42));
        assert_eq!(parse_person_id("007"), Some(7));
        assert_eq!(parse_person_id(""), None);
        assert_eq!(parse_person_id("-1"), None);
        assert_eq!(parse_person_id("+1"), None);
        assert_eq!(parse_person_id("1a"), None);
        assert_eq!(parse_person_id("abc"), None);
    }

    #[test]
    fn overflowing_id_does_not_route() {
        assert_eq!(parse_person_id("99999999999999999999"), None);
    }
}
