//! Declarative admin-site configuration.
//!
//! Each record type carries one [`ModelAdmin`] declaration: list columns,
//! list filters, edit-form fieldsets and inline-editable relations. The
//! external admin UI consumes these (via `GET /admin/config`) to render its
//! list and edit screens; nothing here performs rendering or enforcement.

use serde::Serialize;
use utoipa::ToSchema;

/// A named group of fields on an edit form. Fields listed in `rows` render
/// one row per entry; an entry with several fields shares a single row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Fieldset {
    /// Section title; `None` renders an untitled section
    pub title: Option<&'static str>,
    pub rows: &'static [&'static [&'static str]],
}

/// A related record type editable inline from the parent's edit screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct InlineRelation {
    pub model: &'static str,
    /// Number of extra blank rows offered for new records
    pub extra: usize,
}

/// Admin declaration for one record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ModelAdmin {
    pub model: &'static str,
    /// Columns of the list view. Empty means the default presentation:
    /// a single column with the record's string representation.
    pub list_display: &'static [&'static str],
    /// Fields offered as list-view filters
    pub list_filter: &'static [&'static str],
    /// Edit-form sections. Empty means all fields in declaration order.
    pub fieldsets: &'static [Fieldset],
    /// Related record types editable inline
    pub inlines: &'static [InlineRelation],
}

impl ModelAdmin {
    /// Default (unconfigured) presentation for a record type
    pub const fn unconfigured(model: &'static str) -> Self {
        Self {
            model,
            list_display: &[],
            list_filter: &[],
            fieldsets: &[],
            inlines: &[],
        }
    }
}

/// Admin declaration for books
pub const BOOK_ADMIN: ModelAdmin = ModelAdmin {
    model: "book",
    list_display: &["title", "author", "display_genre"],
    list_filter: &[],
    fieldsets: &[],
    inlines: &[InlineRelation {
        model: "book_instance",
        extra: 0,
    }],
};

/// Admin declaration for authors
pub const AUTHOR_ADMIN: ModelAdmin = ModelAdmin {
    model: "author",
    list_display: &["last_name", "first_name", "date_of_birth", "date_of_death"],
    list_filter: &[],
    fieldsets: &[Fieldset {
        title: None,
        rows: &[
            &["first_name"],
            &["last_name"],
            &["date_of_birth", "date_of_death"],
        ],
    }],
    inlines: &[InlineRelation {
        model: "book",
        extra: 0,
    }],
};

/// Admin declaration for book instances
pub const BOOK_INSTANCE_ADMIN: ModelAdmin = ModelAdmin {
    model: "book_instance",
    list_display: &["imprint", "status", "due_back", "id"],
    list_filter: &["status", "due_back"],
    fieldsets: &[
        Fieldset {
            title: None,
            rows: &[&["book"], &["imprint"], &["id"]],
        },
        Fieldset {
            title: Some("Availability"),
            rows: &[&["status"], &["due_back"]],
        },
    ],
    inlines: &[],
};

/// Admin declaration for genres (default presentation)
pub const GENRE_ADMIN: ModelAdmin = ModelAdmin::unconfigured("genre");

/// Admin declaration for languages (default presentation)
pub const LANGUAGE_ADMIN: ModelAdmin = ModelAdmin::unconfigured("language");

/// All admin declarations, one per record type
pub fn site() -> Vec<ModelAdmin> {
    vec![
        GENRE_ADMIN,
        LANGUAGE_ADMIN,
        AUTHOR_ADMIN,
        BOOK_ADMIN,
        BOOK_INSTANCE_ADMIN,
    ]
}
