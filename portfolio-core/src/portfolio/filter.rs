use constants::category::is_known_category;
use constants::portfolio::FILTER_ALL;

use crate::catalog::ProjectRecord;

/// Active portfolio filter.
///
/// Any tag other than `all` is a category filter; tags naming no known
/// category are kept as-is and simply match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn from_tag(tag: &str) -> Self {
        if tag == FILTER_ALL {
            Self::All
        } else {
            Self::Category(tag.to_string())
        }
    }

    /// Tag as it appears in `data-filter` attributes.
    pub fn tag(&self) -> &str {
        match self {
            Self::All => FILTER_ALL,
            Self::Category(tag) => tag,
        }
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => record.category == *tag,
        }
    }

    pub fn is_known(&self) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => is_known_category(tag),
        }
    }
}
