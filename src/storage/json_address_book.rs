use serde::{Deserialize, Serialize};

use crate::error::{EstateError, EstateResult};
use crate::model::{
    Address, AddressBook, Buyer, BuyerProfile, Email, HouseInfo, Name, Person, Phone, Seller,
    SellerProfile, Tag,
};

/// On-disk form of a buyer. Fields are plain strings and are validated on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedBuyer {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub house_info: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedSeller {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub selling_address: String,
    pub house_info: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonSerializableAddressBook {
    #[serde(default)]
    pub buyers: Vec<JsonAdaptedBuyer>,
    #[serde(default)]
    pub sellers: Vec<JsonAdaptedSeller>,
}

fn tag_strings<R>(person: &Person<R>) -> Vec<String> {
    person.tag_names().into_iter().map(str::to_string).collect()
}

fn field<T>(kind: &str, raw: &str, parse: fn(&str) -> EstateResult<T>) -> EstateResult<T> {
    parse(raw).map_err(|e| EstateError::DataLoading(format!("invalid {}: {}", kind, e)))
}

impl From<&Buyer> for JsonAdaptedBuyer {
    fn from(buyer: &Buyer) -> Self {
        Self {
            name: buyer.name.to_string(),
            phone: buyer.phone.to_string(),
            email: buyer.email.to_string(),
            address: buyer.address.to_string(),
            house_info: buyer.role.house_info.to_string(),
            tags: tag_strings(buyer),
        }
    }
}

impl JsonAdaptedBuyer {
    pub fn to_model(&self) -> EstateResult<Buyer> {
        let tags = self
            .tags
            .iter()
            .map(|t| field("tag", t, Tag::parse))
            .collect::<EstateResult<_>>()?;
        Ok(Person::new(
            field("name", &self.name, Name::parse)?,
            field("phone", &self.phone, Phone::parse)?,
            field("email", &self.email, Email::parse)?,
            field("address", &self.address, Address::parse)?,
            tags,
            BuyerProfile {
                house_info: field("houseInfo", &self.house_info, HouseInfo::parse)?,
            },
        ))
    }
}

impl From<&Seller> for JsonAdaptedSeller {
    fn from(seller: &Seller) -> Self {
        Self {
            name: seller.name.to_string(),
            phone: seller.phone.to_string(),
            email: seller.email.to_string(),
            address: seller.address.to_string(),
            selling_address: seller.role.selling_address.to_string(),
            house_info: seller.role.house_info.to_string(),
            tags: tag_strings(seller),
        }
    }
}

impl JsonAdaptedSeller {
    pub fn to_model(&self) -> EstateResult<Seller> {
        let tags = self
            .tags
            .iter()
            .map(|t| field("tag", t, Tag::parse))
            .collect::<EstateResult<_>>()?;
        Ok(Person::new(
            field("name", &self.name, Name::parse)?,
            field("phone", &self.phone, Phone::parse)?,
            field("email", &self.email, Email::parse)?,
            field("address", &self.address, Address::parse)?,
            tags,
            SellerProfile {
                selling_address: field("sellingAddress", &self.selling_address, Address::parse)?,
                house_info: field("houseInfo", &self.house_info, HouseInfo::parse)?,
            },
        ))
    }
}

impl From<&AddressBook> for JsonSerializableAddressBook {
    fn from(book: &AddressBook) -> Self {
        Self {
            buyers: book.buyers().iter().map(JsonAdaptedBuyer::from).collect(),
            sellers: book.sellers().iter().map(JsonAdaptedSeller::from).collect(),
        }
    }
}

impl JsonSerializableAddressBook {
    /// Validates every record and rebuilds the address book. Similar entries fail the whole load.
    pub fn to_model(&self) -> EstateResult<AddressBook> {
        let buyers = self
            .buyers
            .iter()
            .map(JsonAdaptedBuyer::to_model)
            .collect::<EstateResult<Vec<_>>>()?;
        let sellers = self
            .sellers
            .iter()
            .map(JsonAdaptedSeller::to_model)
            .collect::<EstateResult<Vec<_>>>()?;
        AddressBook::from_lists(buyers, sellers)
    }
}
