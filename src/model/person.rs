use std::collections::BTreeSet;
use std::fmt;

use super::fields::{Address, Email, HouseInfo, Name, Phone, Tag};

/// Fuzzy-duplicate check, weaker than `PartialEq`.
pub trait Similar {
    fn is_similar(&self, other: &Self) -> bool;
}

/// What a buyer is looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyerProfile {
    pub house_info: HouseInfo,
}

/// The property a seller has on the market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerProfile {
    pub selling_address: Address,
    pub house_info: HouseInfo,
}

/// A contact in the address book: the shared identity fields plus a role payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person<R> {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub tags: BTreeSet<Tag>,
    pub role: R,
}

pub type Buyer = Person<BuyerProfile>;
pub type Seller = Person<SellerProfile>;

impl<R> Person<R> {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
        role: R,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
            role,
        }
    }

    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(Tag::as_str).collect()
    }
}

impl<R> Similar for Person<R> {
    /// Same name (ignoring case and spacing), same phone and same email.
    fn is_similar(&self, other: &Self) -> bool {
        self.name.matches_ignoring_case(&other.name)
            && self.phone == other.phone
            && self.email == other.email
    }
}

impl Buyer {
    pub fn house_info(&self) -> &HouseInfo {
        &self.role.house_info
    }
}

impl Seller {
    pub fn selling_address(&self) -> &Address {
        &self.role.selling_address
    }

    pub fn house_info(&self) -> &HouseInfo {
        &self.role.house_info
    }
}

/// Either kind of contact, for code that handles both lists the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contact {
    Buyer(Buyer),
    Seller(Seller),
}

impl Contact {
    pub fn name(&self) -> &Name {
        match self {
            Contact::Buyer(b) => &b.name,
            Contact::Seller(s) => &s.name,
        }
    }

    /// One-line card shown in list output, prefixed with the one-based index.
    pub fn display(&self, index: usize) -> String {
        format!("{}. {}", index, self)
    }
}

impl Similar for Contact {
    fn is_similar(&self, other: &Self) -> bool {
        match (self, other) {
            (Contact::Buyer(a), Contact::Buyer(b)) => a.is_similar(b),
            (Contact::Seller(a), Contact::Seller(b)) => a.is_similar(b),
            _ => false,
        }
    }
}

impl From<Buyer> for Contact {
    fn from(buyer: Buyer) -> Self {
        Contact::Buyer(buyer)
    }
}

impl From<Seller> for Contact {
    fn from(seller: Seller) -> Self {
        Contact::Seller(seller)
    }
}

fn write_tags(f: &mut fmt::Formatter<'_>, tags: &BTreeSet<Tag>) -> fmt::Result {
    if tags.is_empty() {
        return Ok(());
    }
    let names: Vec<String> = tags.iter().map(|t| format!("[{}]", t)).collect();
    write!(f, " {}", names.join(" "))
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contact::Buyer(b) => {
                write!(
                    f,
                    "{}; Phone: {}; Email: {}; Address: {}; Wants: {}",
                    b.name, b.phone, b.email, b.address, b.role.house_info
                )?;
                write_tags(f, &b.tags)
            }
            Contact::Seller(s) => {
                write!(
                    f,
                    "{}; Phone: {}; Email: {}; Address: {}; Selling: {}; House: {}",
                    s.name, s.phone, s.email, s.address, s.role.selling_address, s.role.house_info
                )?;
                write_tags(f, &s.tags)
            }
        }
    }
}
