use std::collections::BTreeSet;

use crate::error::EstateResult;

use super::address_book::AddressBook;
use super::fields::{Address, Email, HouseInfo, Name, Phone, Tag};
use super::person::{Buyer, BuyerProfile, Person, Seller, SellerProfile};

const BUYERS: &[(&str, &str, &str, &str, &str, &[&str])] = &[
    ("Alex Yeoh", "87438807", "alexyeoh@example.com", "Blk 30 Geylang Street 29, #06-40", "3-room flat near an MRT station", &["firsttime"]),
    ("Bernice Yu", "99272758", "berniceyu@example.com", "Blk 30 Lorong 3 Serangoon Gardens, #07-18", "Landed property with a garden", &["upsizing", "family"]),
    ("Charlotte Oliveiro", "93210283", "charlotte@example.com", "Blk 11 Ang Mo Kio Street 74, #11-04", "Condo with a pool, budget 1.2M", &[]),
];

const SELLERS: &[(&str, &str, &str, &str, &str, &str, &[&str])] = &[
    ("David Li", "91031282", "lidavid@example.com", "Blk 436 Serangoon Gardens Street 26, #16-43", "Blk 12 Bedok North Ave 3, #04-22", "4-room HDB, renovated 2021", &["urgent"]),
    ("Irfan Ibrahim", "92492021", "irfan@example.com", "Blk 47 Tampines Street 20, #17-35", "28 Jalan Kembangan", "Semi-detached, 5 bedrooms", &[]),
];

fn tags(names: &[&str]) -> EstateResult<BTreeSet<Tag>> {
    names.iter().map(|t| Tag::parse(t)).collect()
}

/// Address book shown on first launch, when no data file exists yet.
pub fn sample_address_book() -> EstateResult<AddressBook> {
    let buyers = BUYERS
        .iter()
        .map(|(name, phone, email, address, info, tag_names)| -> EstateResult<Buyer> {
            Ok(Person::new(
                Name::parse(name)?,
                Phone::parse(phone)?,
                Email::parse(email)?,
                Address::parse(address)?,
                tags(tag_names)?,
                BuyerProfile {
                    house_info: HouseInfo::parse(info)?,
                },
            ))
        })
        .collect::<EstateResult<Vec<_>>>()?;

    let sellers = SELLERS
        .iter()
        .map(|(name, phone, email, address, selling, info, tag_names)| -> EstateResult<Seller> {
            Ok(Person::new(
                Name::parse(name)?,
                Phone::parse(phone)?,
                Email::parse(email)?,
                Address::parse(address)?,
                tags(tag_names)?,
                SellerProfile {
                    selling_address: Address::parse(selling)?,
                    house_info: HouseInfo::parse(info)?,
                },
            ))
        })
        .collect::<EstateResult<Vec<_>>>()?;

    AddressBook::from_lists(buyers, sellers)
}
