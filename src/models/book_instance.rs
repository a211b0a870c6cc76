//! BookInstance (physical copy) model and related types.
//!
//! Each instance is one loanable physical copy of a book, identified by an
//! opaque UUID generated at creation time.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::enums::LoanStatus;

/// Permission name gating the transition of a copy away from `OnLoan`.
/// Declared here; enforcement belongs to the external auth subsystem.
pub const PERM_CAN_MARK_RETURNED: &str = "can_mark_returned";

/// Full book-instance model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookInstance {
    pub id: Uuid,
    pub book_id: Option<i32>,
    /// Edition / printing information
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    pub status: i16, // LoanStatus code
    pub borrower_id: Option<i32>,
    // Computed field (populated when queried with a JOIN, None otherwise)
    #[sqlx(default)]
    #[serde(default)]
    pub book_title: Option<String>,
}

impl BookInstance {
    /// Typed loan status for the stored code
    pub fn loan_status(&self) -> LoanStatus {
        LoanStatus::from(self.status)
    }

    /// Whether this copy is past its due date. Pure function of
    /// `due_back` and the current date, recomputed on every call.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_on(Utc::now().date_naive())
    }

    /// Overdue check against an explicit "today"
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        match self.due_back {
            Some(due) => due < today,
            None => false,
        }
    }
}

impl std::fmt::Display for BookInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({})",
            self.id,
            self.book_title.as_deref().unwrap_or("no book")
        )
    }
}

/// Create book-instance request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookInstance {
    pub book_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    /// Defaults to `Maintenance` when omitted
    pub status: Option<LoanStatus>,
    pub borrower_id: Option<i32>,
}

/// Update book-instance request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBookInstance {
    /// Absent leaves the book untouched; explicit null clears it
    #[serde(default, deserialize_with = "crate::models::deserialize_some")]
    pub book_id: Option<Option<i32>>,
    #[validate(length(min = 1, max = 200))]
    pub imprint: Option<String>,
    #[serde(default, deserialize_with = "crate::models::deserialize_some")]
    pub due_back: Option<Option<NaiveDate>>,
    pub status: Option<LoanStatus>,
    #[serde(default, deserialize_with = "crate::models::deserialize_some")]
    pub borrower_id: Option<Option<i32>>,
}

/// Book-instance list query parameters (the admin list_filter surface)
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BookInstanceQuery {
    /// Filter by loan status code
    pub status: Option<i16>,
    /// Only instances due on or before this date
    pub due_before: Option<NaiveDate>,
    /// Only instances due on or after this date
    pub due_after: Option<NaiveDate>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn instance(due_back: Option<NaiveDate>) -> BookInstance {
        BookInstance {
            id: Uuid::nil(),
            book_id: Some(1),
            imprint: "Folio Society, 2nd printing".to_string(),
            due_back,
            status: LoanStatus::OnLoan as i16,
            borrower_id: None,
            book_title: Some("Dune".to_string()),
        }
    }

    #[test]
    fn no_due_date_is_never_overdue() {
        assert!(!instance(None).is_overdue());
    }

    #[test]
    fn due_yesterday_is_overdue() {
        let yesterday = Utc::now().date_naive() - Duration::days(1);
        assert!(instance(Some(yesterday)).is_overdue());
    }

    #[test]
    fn due_tomorrow_is_not_overdue() {
        let tomorrow = Utc::now().date_naive() + Duration::days(1);
        assert!(!instance(Some(tomorrow)).is_overdue());
    }

    #[test]
    fn due_today_is_not_overdue() {
        // Strictly earlier than today, not "earlier or equal"
        let today = Utc::now().date_naive();
        assert!(!instance(Some(today)).is_overdue_on(today));
    }

    #[test]
    fn display_is_id_and_book_title() {
        let inst = instance(None);
        assert_eq!(
            inst.to_string(),
            format!("{} (Dune)", Uuid::nil())
        );
    }

    #[test]
    fn stored_status_maps_to_enum() {
        assert_eq!(instance(None).loan_status(), LoanStatus::OnLoan);
    }
}
