use crate::error::EstateResult;

use super::person::{Buyer, Seller};
use super::unique_list::UniqueList;

/// The persisted data: one list of buyers and one of sellers, each free of similar entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBook {
    buyers: UniqueList<Buyer>,
    sellers: UniqueList<Seller>,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self {
            buyers: UniqueList::new("buyer"),
            sellers: UniqueList::new("seller"),
        }
    }

    /// Builds an address book from loaded lists. Fails if either list holds similar entries.
    pub fn from_lists(buyers: Vec<Buyer>, sellers: Vec<Seller>) -> EstateResult<Self> {
        let mut book = Self::new();
        book.set_buyers(buyers)?;
        book.set_sellers(sellers)?;
        Ok(book)
    }

    pub fn reset_data(&mut self, other: &AddressBook) {
        self.buyers = other.buyers.clone();
        self.sellers = other.sellers.clone();
    }

    pub fn set_buyers(&mut self, buyers: Vec<Buyer>) -> EstateResult<()> {
        self.buyers.set_all(buyers)
    }

    pub fn set_sellers(&mut self, sellers: Vec<Seller>) -> EstateResult<()> {
        self.sellers.set_all(sellers)
    }

    // buyers

    pub fn has_buyer(&self, buyer: &Buyer) -> bool {
        self.buyers.contains(buyer)
    }

    pub fn has_similar_buyer(&self, buyer: &Buyer) -> bool {
        self.buyers.contains_similar(buyer)
    }

    pub fn add_buyer(&mut self, buyer: Buyer) -> EstateResult<()> {
        self.buyers.add(buyer)
    }

    pub fn remove_buyer(&mut self, buyer: &Buyer) -> EstateResult<()> {
        self.buyers.remove(buyer)
    }

    pub fn set_buyer(&mut self, target: &Buyer, edited: Buyer) -> EstateResult<()> {
        self.buyers.set(target, edited)
    }

    pub fn buyers(&self) -> &[Buyer] {
        self.buyers.as_slice()
    }

    // sellers

    pub fn has_seller(&self, seller: &Seller) -> bool {
        self.sellers.contains(seller)
    }

    pub fn has_similar_seller(&self, seller: &Seller) -> bool {
        self.sellers.contains_similar(seller)
    }

    pub fn add_seller(&mut self, seller: Seller) -> EstateResult<()> {
        self.sellers.add(seller)
    }

    pub fn remove_seller(&mut self, seller: &Seller) -> EstateResult<()> {
        self.sellers.remove(seller)
    }

    pub fn set_seller(&mut self, target: &Seller, edited: Seller) -> EstateResult<()> {
        self.sellers.set(target, edited)
    }

    pub fn sellers(&self) -> &[Seller] {
        self.sellers.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.buyers.is_empty() && self.sellers.is_empty()
    }
}
