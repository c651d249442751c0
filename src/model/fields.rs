use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EstateError, EstateResult};
use crate::validation;

/// Declares a validated string newtype. `parse` trims the raw input and checks it
/// against `$check`; the only other way in is deserialization, which storage re-validates.
macro_rules! field_type {
    ($(#[$meta:meta])* $name:ident, $constraints:expr, $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const MESSAGE_CONSTRAINTS: &'static str = $constraints;

            pub fn parse(raw: &str) -> EstateResult<Self> {
                let trimmed = raw.trim();
                let check: fn(&str) -> bool = $check;
                if check(trimmed) {
                    Ok(Self(trimmed.to_string()))
                } else {
                    Err(EstateError::constraint(Self::MESSAGE_CONSTRAINTS))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

field_type!(
    /// A contact's full name.
    Name,
    "Names should only contain alphanumeric characters and spaces, and it should not be blank",
    validation::is_valid_name
);

field_type!(
    Phone,
    "Phone numbers should only contain numbers, and it should be at least 3 digits long",
    validation::is_valid_phone
);

field_type!(
    /// An email address of the form `local-part@domain`.
    Email,
    "Emails should be of the format local-part@domain. The local-part should only contain \
     alphanumeric characters and the special characters +_.- and may not start or end with \
     a special character. The domain is made of labels separated by periods, each label \
     starts and ends with an alphanumeric character, and the last label is at least 2 characters long",
    validation::is_valid_email
);

field_type!(
    /// A postal address. Used both for where a contact lives and for the property on sale.
    Address,
    "Addresses can take any values, and it should not be blank",
    validation::is_non_blank
);

field_type!(
    /// Free-text description of a house: what a buyer wants, or what a seller offers.
    HouseInfo,
    "House info can take any values, and it should not be blank",
    validation::is_non_blank
);

field_type!(
    Tag,
    "Tag names should be alphanumeric",
    validation::is_valid_tag
);

impl Name {
    /// Lowercased words, used for similarity and keyword search.
    pub fn words(&self) -> Vec<String> {
        self.0.split_whitespace().map(str::to_lowercase).collect()
    }

    pub fn matches_ignoring_case(&self, other: &Name) -> bool {
        self.words() == other.words()
    }
}
