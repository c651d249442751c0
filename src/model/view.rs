use std::cmp::Ordering;
use std::fmt;

use super::fields::Name;
use super::person::{Buyer, Seller};

/// Read access to the fields that filters and sort orders look at.
pub trait Viewable {
    fn name(&self) -> &Name;
    fn sort_value(&self, key: SortKey) -> &str;
}

impl Viewable for Buyer {
    fn name(&self) -> &Name {
        &self.name
    }

    fn sort_value(&self, key: SortKey) -> &str {
        match key {
            SortKey::Name => self.name.as_str(),
            SortKey::Phone => self.phone.as_str(),
            SortKey::Email => self.email.as_str(),
            SortKey::Address => self.address.as_str(),
            SortKey::HouseInfo => self.role.house_info.as_str(),
        }
    }
}

impl Viewable for Seller {
    fn name(&self) -> &Name {
        &self.name
    }

    fn sort_value(&self, key: SortKey) -> &str {
        match key {
            SortKey::Name => self.name.as_str(),
            SortKey::Phone => self.phone.as_str(),
            SortKey::Email => self.email.as_str(),
            SortKey::Address => self.address.as_str(),
            SortKey::HouseInfo => self.role.house_info.as_str(),
        }
    }
}

/// Which entries of a list are shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    ShowAll,
    /// Name contains any of the keywords as a whole word, ignoring case.
    NameKeywords(Vec<String>),
}

impl Filter {
    pub fn name_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::NameKeywords(keywords.into_iter().map(Into::into).collect())
    }

    pub fn matches<T: Viewable>(&self, item: &T) -> bool {
        match self {
            Filter::ShowAll => true,
            Filter::NameKeywords(keywords) => {
                let words = item.name().words();
                keywords
                    .iter()
                    .any(|k| words.iter().any(|w| *w == k.to_lowercase()))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Phone,
    Email,
    Address,
    HouseInfo,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Name,
        SortKey::Phone,
        SortKey::Email,
        SortKey::Address,
        SortKey::HouseInfo,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Phone => "phone",
            SortKey::Email => "email",
            SortKey::Address => "address",
            SortKey::HouseInfo => "info",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.keyword().eq_ignore_ascii_case(s.trim()))
    }

    fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            // digits only, so shorter means smaller
            SortKey::Phone => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            _ => a.to_lowercase().cmp(&b.to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// How the filtered entries are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Order in which entries were added.
    #[default]
    Insertion,
    By { key: SortKey, direction: Direction },
}

impl SortOrder {
    pub fn compare<T: Viewable>(&self, a: &T, b: &T) -> Ordering {
        match *self {
            SortOrder::Insertion => Ordering::Equal,
            SortOrder::By { key, direction } => {
                let ord = key.compare(a.sort_value(key), b.sort_value(key));
                match direction {
                    Direction::Ascending => ord,
                    Direction::Descending => ord.reverse(),
                }
            }
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Insertion => f.write_str("default order"),
            SortOrder::By { key, direction } => {
                let dir = match direction {
                    Direction::Ascending => "ascending",
                    Direction::Descending => "descending",
                };
                write!(f, "{} ({})", key.keyword(), dir)
            }
        }
    }
}

/// Filter stage feeding a sort stage over one list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListView {
    pub filter: Filter,
    pub order: SortOrder,
}

impl ListView {
    pub fn apply<'a, T: Viewable>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut shown: Vec<&T> = items.iter().filter(|i| self.filter.matches(*i)).collect();
        // stable, so Insertion keeps the original order
        shown.sort_by(|a, b| self.order.compare(*a, *b));
        shown
    }
}
