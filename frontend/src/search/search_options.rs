use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SortOption {
    /// Keep the combination order untouched.
    Relevance,
    /// Newest upload first.
    Date,
    /// Highest view count first.
    Views,
    /// Highest like count first.
    Rating,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::Date => "date",
            SortOption::Views => "views",
            SortOption::Rating => "rating",
        }
    }

    pub fn from_param(param: &str) -> Self {
        match param {
            "date" => SortOption::Date,
            "views" => SortOption::Views,
            "rating" => SortOption::Rating,
            _ => SortOption::Relevance,
        }
    }
}
