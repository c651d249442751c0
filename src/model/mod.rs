pub mod fields;
pub mod person;
pub mod unique_list;
pub mod address_book;
pub mod user_prefs;
pub mod view;
pub mod manager;
pub mod sample_data;

// Re-exports for convenience
pub use fields::{Address, Email, HouseInfo, Name, Phone, Tag};
pub use person::{Buyer, BuyerProfile, Contact, Person, Seller, SellerProfile, Similar};
pub use unique_list::UniqueList;
pub use address_book::AddressBook;
pub use user_prefs::{GuiSettings, UserPrefs};
pub use view::{Direction, Filter, ListView, SortKey, SortOrder, Viewable};
pub use manager::{ModelListener, ModelManager};
