use std::collections::BTreeSet;

use crate::model::{Address, BuyerProfile, Email, HouseInfo, Name, Person, Phone, SellerProfile, Tag};

/// Fields to overwrite on an existing contact. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    /// `Some(empty)` clears all tags.
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.tags.is_none()
    }

    fn apply<R>(&self, person: &Person<R>, role: R) -> Person<R> {
        Person::new(
            self.name.clone().unwrap_or_else(|| person.name.clone()),
            self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            self.email.clone().unwrap_or_else(|| person.email.clone()),
            self.address.clone().unwrap_or_else(|| person.address.clone()),
            self.tags.clone().unwrap_or_else(|| person.tags.clone()),
            role,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuyerDescriptor {
    pub person: EditPersonDescriptor,
    pub house_info: Option<HouseInfo>,
}

impl EditBuyerDescriptor {
    pub fn is_empty(&self) -> bool {
        self.person.is_empty() && self.house_info.is_none()
    }

    pub fn apply(&self, buyer: &Person<BuyerProfile>) -> Person<BuyerProfile> {
        let role = BuyerProfile {
            house_info: self
                .house_info
                .clone()
                .unwrap_or_else(|| buyer.role.house_info.clone()),
        };
        self.person.apply(buyer, role)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSellerDescriptor {
    pub person: EditPersonDescriptor,
    pub selling_address: Option<Address>,
    pub house_info: Option<HouseInfo>,
}

impl EditSellerDescriptor {
    pub fn is_empty(&self) -> bool {
        self.person.is_empty() && self.selling_address.is_none() && self.house_info.is_none()
    }

    pub fn apply(&self, seller: &Person<SellerProfile>) -> Person<SellerProfile> {
        let role = SellerProfile {
            selling_address: self
                .selling_address
                .clone()
                .unwrap_or_else(|| seller.role.selling_address.clone()),
            house_info: self
                .house_info
                .clone()
                .unwrap_or_else(|| seller.role.house_info.clone()),
        };
        self.person.apply(seller, role)
    }
}
