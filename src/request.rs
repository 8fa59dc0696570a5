//! Grid request data model.
//!
//! These are the shapes a wire decoder (out of scope for this crate)
//! produces from the client's parameter set. Serde defaulting fills
//! absent fields; unknown wire fields are ignored.

use serde::Deserialize;

use crate::sql::SortDir;

/// A search box: the term plus the client's regex flag.
///
/// The regex flag is carried for wire fidelity but never honored -
/// matching is always case-insensitive contains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchTerm {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub regex: bool,
}

impl SearchTerm {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.into(),
            regex: false,
        }
    }

    /// The term, or `None` when the box is empty.
    pub fn term(&self) -> Option<&str> {
        if self.value.is_empty() {
            None
        } else {
            Some(&self.value)
        }
    }
}

/// One requested grid column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ColumnSpec {
    /// Dotted data path, or `None` for columns with no backing field
    /// (action columns and the like). Those never filter or order.
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub orderable: bool,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub search: SearchTerm,
}

impl ColumnSpec {
    /// The data path, with `None` and `""` both treated as "no data".
    pub fn data(&self) -> Option<&str> {
        match self.data.as_deref() {
            None | Some("") => None,
            Some(path) => Some(path),
        }
    }
}

/// Sort direction as sent by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl From<SortOrder> for SortDir {
    fn from(dir: SortOrder) -> Self {
        match dir {
            SortOrder::Asc => SortDir::Asc,
            SortOrder::Desc => SortDir::Desc,
        }
    }
}

/// One ordering instruction: an index into the request's column list plus
/// a direction. Earlier entries take sort precedence over later ones.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderSpec {
    pub column: usize,
    #[serde(default)]
    pub dir: SortOrder,
}

impl OrderSpec {
    pub fn new(column: usize, dir: SortOrder) -> Self {
        Self { column, dir }
    }
}

/// A full grid request: columns, search, order, pagination, and the
/// opaque `draw` echo token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub draw: u64,
    /// Row offset of the requested page.
    #[serde(default)]
    pub start: u64,
    /// Page size.
    #[serde(default = "default_length")]
    pub length: u64,
    /// The global search box, applied across all searchable columns.
    #[serde(default)]
    pub search: SearchTerm,
    #[serde(default)]
    pub order: Vec<OrderSpec>,
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            draw: 0,
            start: 0,
            length: default_length(),
            search: SearchTerm::default(),
            order: Vec::new(),
            columns: Vec::new(),
        }
    }
}

fn default_length() -> u64 {
    10
}
