use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::EstateResult;

use super::address_book::AddressBook;
use super::person::{Buyer, Seller};
use super::user_prefs::{GuiSettings, UserPrefs};
use super::view::{Filter, ListView, SortOrder};

/// Receives the visible lists after every change to the data or to a view.
pub trait ModelListener {
    fn buyers_changed(&self, _buyers: &[&Buyer]) {}
    fn sellers_changed(&self, _sellers: &[&Seller]) {}
}

/// In-memory model: the address book, user prefs, and one filtered+sorted view per list.
pub struct ModelManager {
    address_book: AddressBook,
    user_prefs: UserPrefs,
    buyer_view: ListView,
    seller_view: ListView,
    listeners: Vec<Box<dyn ModelListener>>,
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(AddressBook::new(), UserPrefs::default())
    }
}

impl ModelManager {
    pub fn new(address_book: AddressBook, user_prefs: UserPrefs) -> Self {
        debug!(
            buyers = address_book.buyers().len(),
            sellers = address_book.sellers().len(),
            file = %user_prefs.address_book_file_path.display(),
            "initializing model"
        );
        Self {
            address_book,
            user_prefs,
            buyer_view: ListView::default(),
            seller_view: ListView::default(),
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn ModelListener>) {
        self.listeners.push(listener);
    }

    // ---- user prefs ----

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn set_user_prefs(&mut self, prefs: &UserPrefs) {
        self.user_prefs.reset_data(prefs);
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        &self.user_prefs.gui_settings
    }

    pub fn set_gui_settings(&mut self, settings: GuiSettings) {
        self.user_prefs.gui_settings = settings;
    }

    pub fn address_book_file_path(&self) -> &Path {
        self.user_prefs.address_book_file_path()
    }

    pub fn set_address_book_file_path(&mut self, path: PathBuf) {
        self.user_prefs.address_book_file_path = path;
    }

    // ---- address book ----

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    pub fn set_address_book(&mut self, address_book: &AddressBook) {
        self.address_book.reset_data(address_book);
        self.notify_all();
    }

    pub fn has_buyer(&self, buyer: &Buyer) -> bool {
        self.address_book.has_buyer(buyer)
    }

    pub fn has_similar_buyer(&self, buyer: &Buyer) -> bool {
        self.address_book.has_similar_buyer(buyer)
    }

    pub fn has_seller(&self, seller: &Seller) -> bool {
        self.address_book.has_seller(seller)
    }

    pub fn has_similar_seller(&self, seller: &Seller) -> bool {
        self.address_book.has_similar_seller(seller)
    }

    pub fn add_buyer(&mut self, buyer: Buyer) -> EstateResult<()> {
        self.address_book.add_buyer(buyer)?;
        self.update_filtered_buyer_list(Filter::ShowAll);
        Ok(())
    }

    pub fn add_seller(&mut self, seller: Seller) -> EstateResult<()> {
        self.address_book.add_seller(seller)?;
        self.update_filtered_seller_list(Filter::ShowAll);
        Ok(())
    }

    pub fn delete_buyer(&mut self, target: &Buyer) -> EstateResult<()> {
        self.address_book.remove_buyer(target)?;
        self.notify_buyers();
        Ok(())
    }

    pub fn delete_seller(&mut self, target: &Seller) -> EstateResult<()> {
        self.address_book.remove_seller(target)?;
        self.notify_sellers();
        Ok(())
    }

    pub fn set_buyer(&mut self, target: &Buyer, edited: Buyer) -> EstateResult<()> {
        self.address_book.set_buyer(target, edited)?;
        self.notify_buyers();
        Ok(())
    }

    pub fn set_seller(&mut self, target: &Seller, edited: Seller) -> EstateResult<()> {
        self.address_book.set_seller(target, edited)?;
        self.notify_sellers();
        Ok(())
    }

    // ---- views ----

    /// Buyers that pass the current filter, in the current sort order.
    pub fn filtered_buyers(&self) -> Vec<&Buyer> {
        self.buyer_view.apply(self.address_book.buyers())
    }

    pub fn filtered_sellers(&self) -> Vec<&Seller> {
        self.seller_view.apply(self.address_book.sellers())
    }

    pub fn buyer_view(&self) -> &ListView {
        &self.buyer_view
    }

    pub fn seller_view(&self) -> &ListView {
        &self.seller_view
    }

    pub fn update_filtered_buyer_list(&mut self, filter: Filter) {
        debug!(?filter, "buyer filter changed");
        self.buyer_view.filter = filter;
        self.notify_buyers();
    }

    pub fn update_filtered_seller_list(&mut self, filter: Filter) {
        debug!(?filter, "seller filter changed");
        self.seller_view.filter = filter;
        self.notify_sellers();
    }

    pub fn update_filtered_sorted_buyer_list(&mut self, order: SortOrder) {
        debug!(%order, "buyer sort order changed");
        self.buyer_view.order = order;
        self.notify_buyers();
    }

    pub fn update_filtered_sorted_seller_list(&mut self, order: SortOrder) {
        debug!(%order, "seller sort order changed");
        self.seller_view.order = order;
        self.notify_sellers();
    }

    fn notify_buyers(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let shown = self.filtered_buyers();
        for listener in &self.listeners {
            listener.buyers_changed(&shown);
        }
    }

    fn notify_sellers(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let shown = self.filtered_sellers();
        for listener in &self.listeners {
            listener.sellers_changed(&shown);
        }
    }

    fn notify_all(&self) {
        self.notify_buyers();
        self.notify_sellers();
    }
}

impl PartialEq for ModelManager {
    fn eq(&self, other: &Self) -> bool {
        self.address_book == other.address_book
            && self.user_prefs == other.user_prefs
            && self.buyer_view == other.buyer_view
            && self.seller_view == other.seller_view
    }
}

impl fmt::Debug for ModelManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelManager")
            .field("address_book", &self.address_book)
            .field("user_prefs", &self.user_prefs)
            .field("buyer_view", &self.buyer_view)
            .field("seller_view", &self.seller_view)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
