//! Search request model.

use serde::{Deserialize, Serialize};

/// Creator filter: a single maker or several makers combined with `OR`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Creator {
    One(String),
    Many(Vec<String>),
}

impl Creator {
    /// Render the creator filter as a single free-text term.
    ///
    /// Returns `None` when nothing would be searched for (empty string or
    /// empty list), so the caller can omit the parameter entirely.
    pub fn to_term(&self) -> Option<String> {
        let term = match self {
            Creator::One(name) => name.clone(),
            Creator::Many(names) => names.join(" OR "),
        };
        if term.is_empty() {
            None
        } else {
            Some(term)
        }
    }
}

impl From<&str> for Creator {
    fn from(name: &str) -> Self {
        Creator::One(name.to_string())
    }
}

impl From<String> for Creator {
    fn from(name: String) -> Self {
        Creator::One(name)
    }
}

impl From<Vec<String>> for Creator {
    fn from(names: Vec<String>) -> Self {
        Creator::Many(names)
    }
}

/// Search query parameters for the collection search.
///
/// Only `title`, `creator`, `page` and `limit` are transmitted today. The
/// remaining filters are accepted so callers can already pass them along.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Free-text title term
    pub title: Option<String>,

    /// Object number, e.g. "SK-C-5"
    pub object_number: Option<String>,

    /// One or more makers
    pub creator: Option<Creator>,

    /// Creation date filter
    pub creation_date: Option<String>,

    /// Object type, e.g. "painting"
    #[serde(rename = "type")]
    pub object_type: Option<String>,

    /// Techniques
    #[serde(default)]
    pub technique: Vec<String>,

    /// Materials
    #[serde(default)]
    pub material: Vec<String>,

    /// Only objects with an image
    pub image_available: Option<bool>,

    /// Opaque continuation token from a previous page
    pub page_token: Option<String>,

    /// 1-based page number
    pub page: Option<u32>,

    /// Page size
    pub limit: Option<u32>,
}

impl SearchQuery {
    /// Create an empty query (the default collection listing)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title term
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the creator filter
    pub fn creator(mut self, creator: impl Into<Creator>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the object number filter
    pub fn object_number(mut self, number: impl Into<String>) -> Self {
        self.object_number = Some(number.into());
        self
    }

    /// Set the creation date filter
    pub fn creation_date(mut self, date: impl Into<String>) -> Self {
        self.creation_date = Some(date.into());
        self
    }

    /// Set the object type filter
    pub fn object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Some(object_type.into());
        self
    }

    /// Add a technique filter
    pub fn technique(mut self, technique: impl Into<String>) -> Self {
        self.technique.push(technique.into());
        self
    }

    /// Add a material filter
    pub fn material(mut self, material: impl Into<String>) -> Self {
        self.material.push(material.into());
        self
    }

    /// Restrict to objects with an image
    pub fn image_available(mut self, available: bool) -> Self {
        self.image_available = Some(available);
        self
    }

    /// Set the page number
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query parameters sent to the search endpoint, in order.
    ///
    /// Absent or empty values are left out. Title and creator both map to
    /// `q`, so a query carrying both sends `q` twice (title first); which
    /// one the service honors is up to the service.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            params.push(("q", title.to_string()));
        }
        if let Some(term) = self.creator.as_ref().and_then(Creator::to_term) {
            params.push(("q", term));
        }

        // A zero page or limit counts as unset
        if let Some(page) = self.page.filter(|p| *p > 0) {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            params.push(("limit", limit.to_string()));
        }

        params
    }
}
