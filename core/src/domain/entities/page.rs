//! Dashboard page entity managed from the admin console.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of content a subpage embeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubPageKind {
    /// Embedded Power BI report
    PowerBi,
    /// Embedded spreadsheet view
    Excel,
}

/// Subpage of a dashboard page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubPage {
    /// Opaque identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Content kind
    #[serde(rename = "type")]
    pub kind: SubPageKind,

    /// External embed URL, when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,

    /// Inline HTML content, when configured instead of an embed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_html: Option<String>,
}

impl SubPage {
    /// Creates a new subpage without content configured yet
    pub fn new(name: impl Into<String>, kind: SubPageKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            kind,
            embed_url: None,
            custom_html: None,
        }
    }

    /// Sets the embed URL
    pub fn with_embed_url(mut self, url: impl Into<String>) -> Self {
        self.embed_url = Some(url.into());
        self
    }

    /// Checks if any content has been configured
    pub fn has_content(&self) -> bool {
        self.embed_url.is_some() || self.custom_html.is_some()
    }
}

/// Page entity stored in the `adminPages` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Opaque identifier, referenced by `User::assigned_pages`
    pub id: String,

    /// Display title
    pub title: String,

    /// Short description shown in listings
    pub description: String,

    /// External embed URL for single-report pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,

    /// Free-form classification label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,

    /// Inline HTML content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_html: Option<String>,

    /// Subpages for multi-report pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_pages: Option<Vec<SubPage>>,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,
}

impl Page {
    /// Creates a new Page record with a fresh identifier
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            embed_url: None,
            classification: None,
            custom_html: None,
            sub_pages: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the embed URL
    pub fn with_embed_url(mut self, url: impl Into<String>) -> Self {
        self.embed_url = Some(url.into());
        self
    }

    /// Sets the subpages
    pub fn with_sub_pages(mut self, sub_pages: Vec<SubPage>) -> Self {
        self.sub_pages = Some(sub_pages);
        self
    }

    /// Checks if the page carries any subpages
    pub fn has_sub_pages(&self) -> bool {
        self.sub_pages
            .as_ref()
            .map(|pages| !pages.is_empty())
            .unwrap_or(false)
    }
}
