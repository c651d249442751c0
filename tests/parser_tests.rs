use std::collections::BTreeSet;

use estatebook::commands::buyer_commands::{ADD_BUYER_USAGE, DELETE_BUYER_USAGE, EDIT_BUYER_USAGE};
use estatebook::commands::list_commands::{
    CLEAR_USAGE, FIND_SELLER_USAGE, LIST_USAGE, SORT_BUYER_USAGE,
};
use estatebook::commands::seller_commands::{ADD_SELLER_USAGE, EDIT_SELLER_USAGE};
use estatebook::commands::{
    Command, EditBuyerDescriptor, EditPersonDescriptor, EXIT_USAGE, HELP_USAGE,
};
use estatebook::error::{MESSAGE_INVALID_COMMAND_FORMAT, MESSAGE_UNKNOWN_COMMAND};
use estatebook::model::*;
use estatebook::parser::{buyer_parsers, list_parsers, parse_command, seller_parsers};

const BROKEN_INPUT: &str = "ALASDKJDL";
const PARTIAL_INPUT: &str = "n/adam p/3094 e/email@com ah/homeaddress";
const BAD_FIELDS_INPUT: &str = "n/adam p/badnumber e/email@com ah/homeaddress i/info";
const VALID_INPUT: &str = "n/adam p/3094 e/email@com ah/homeaddress i/info";

fn invalid_format(usage: &str) -> String {
    format!("{}{}", MESSAGE_INVALID_COMMAND_FORMAT, usage)
}

fn assert_parse_failure(result: estatebook::error::EstateResult<Command>, expected: &str) {
    match result {
        Ok(cmd) => panic!("expected failure, parsed {:?}", cmd),
        Err(e) => assert_eq!(e.to_string(), expected),
    }
}

fn adam() -> Buyer {
    Person::new(
        Name::parse("adam").unwrap(),
        Phone::parse("3094").unwrap(),
        Email::parse("email@com").unwrap(),
        Address::parse("homeaddress").unwrap(),
        BTreeSet::new(),
        BuyerProfile {
            house_info: HouseInfo::parse("info").unwrap(),
        },
    )
}

// ==========================================================================
// ADD BUYER
// ==========================================================================

#[test]
fn add_buyer_broken_input_fails() {
    assert_parse_failure(
        buyer_parsers::parse_add(BROKEN_INPUT),
        &invalid_format(ADD_BUYER_USAGE),
    );
}

#[test]
fn add_buyer_partial_input_fails() {
    assert_parse_failure(
        buyer_parsers::parse_add(PARTIAL_INPUT),
        &invalid_format(ADD_BUYER_USAGE),
    );
}

#[test]
fn add_buyer_bad_fields_fail() {
    assert_parse_failure(
        buyer_parsers::parse_add(BAD_FIELDS_INPUT),
        &invalid_format(ADD_BUYER_USAGE),
    );
}

#[test]
fn add_buyer_valid_input_parses() {
    let cmd = buyer_parsers::parse_add(VALID_INPUT).unwrap();
    assert_eq!(cmd, Command::AddBuyer(adam()));
    if let Command::AddBuyer(buyer) = cmd {
        assert_eq!(buyer.name.as_str(), "adam");
        assert_eq!(buyer.phone.as_str(), "3094");
    }
}

#[test]
fn add_buyer_collects_tags_and_trims() {
    let cmd = buyer_parsers::parse_add("  n/adam  p/3094 e/email@com ah/homeaddress i/info t/vip t/firsttime ")
        .unwrap();
    let Command::AddBuyer(buyer) = cmd else {
        panic!("expected add buyer");
    };
    assert_eq!(buyer.tag_names(), vec!["firsttime", "vip"]);
    assert_eq!(buyer.name.as_str(), "adam");
}

#[test]
fn add_buyer_prefix_order_does_not_matter() {
    let cmd = buyer_parsers::parse_add("i/info ah/homeaddress e/email@com p/3094 n/adam").unwrap();
    assert_eq!(cmd, Command::AddBuyer(adam()));
}

#[test]
fn add_buyer_repeated_field_fails() {
    assert_parse_failure(
        buyer_parsers::parse_add("n/adam n/eve p/3094 e/email@com ah/homeaddress i/info"),
        &invalid_format(ADD_BUYER_USAGE),
    );
}

#[test]
fn add_buyer_non_ascii_digits_fail() {
    assert_parse_failure(
        buyer_parsers::parse_add("n/adam p/٣٠٩٤ e/email@com ah/homeaddress i/info"),
        &invalid_format(ADD_BUYER_USAGE),
    );
    assert_parse_failure(
        parse_command("addbuyer n/adam p/３０９４ e/email@com ah/homeaddress i/info"),
        &invalid_format(ADD_BUYER_USAGE),
    );
}

#[test]
fn add_buyer_bad_tag_fails() {
    assert_parse_failure(
        buyer_parsers::parse_add("n/adam p/3094 e/email@com ah/homeaddress i/info t/not*ok"),
        &invalid_format(ADD_BUYER_USAGE),
    );
}

#[test]
fn add_buyer_preamble_fails() {
    assert_parse_failure(
        buyer_parsers::parse_add("extra n/adam p/3094 e/email@com ah/homeaddress i/info"),
        &invalid_format(ADD_BUYER_USAGE),
    );
}

// ==========================================================================
// ADD SELLER
// ==========================================================================

#[test]
fn add_seller_valid_input_parses() {
    let cmd = seller_parsers::parse_add(
        "n/David Li p/91031282 e/lidavid@example.com ah/12 Holland Road as/88 Toa Payoh i/4-room HDB",
    )
    .unwrap();
    let Command::AddSeller(seller) = cmd else {
        panic!("expected add seller");
    };
    assert_eq!(seller.selling_address().as_str(), "88 Toa Payoh");
    assert_eq!(seller.house_info().as_str(), "4-room HDB");
    assert_eq!(seller.address.as_str(), "12 Holland Road");
}

#[test]
fn add_seller_without_selling_address_fails() {
    assert_parse_failure(
        seller_parsers::parse_add("n/adam p/3094 e/email@com ah/homeaddress i/info"),
        &invalid_format(ADD_SELLER_USAGE),
    );
}

#[test]
fn add_seller_bad_email_fails() {
    assert_parse_failure(
        seller_parsers::parse_add("n/adam p/3094 e/not-an-email ah/home as/sell i/info"),
        &invalid_format(ADD_SELLER_USAGE),
    );
}

// ==========================================================================
// EDIT / DELETE
// ==========================================================================

#[test]
fn edit_buyer_parses_changed_fields() {
    let cmd = buyer_parsers::parse_edit("2 p/91234567 t/").unwrap();
    let expected = EditBuyerDescriptor {
        person: EditPersonDescriptor {
            phone: Some(Phone::parse("91234567").unwrap()),
            tags: Some(BTreeSet::new()),
            ..Default::default()
        },
        house_info: None,
    };
    assert_eq!(cmd, Command::EditBuyer { index: 2, changes: expected });
}

#[test]
fn edit_buyer_without_fields_fails() {
    assert_parse_failure(buyer_parsers::parse_edit("1"), &invalid_format(EDIT_BUYER_USAGE));
}

#[test]
fn edit_buyer_without_index_fails() {
    assert_parse_failure(
        buyer_parsers::parse_edit("n/adam"),
        &invalid_format(EDIT_BUYER_USAGE),
    );
    assert_parse_failure(
        buyer_parsers::parse_edit("0 n/adam"),
        &invalid_format(EDIT_BUYER_USAGE),
    );
}

#[test]
fn edit_seller_parses_selling_address() {
    let cmd = seller_parsers::parse_edit("1 as/5 Orchard Road").unwrap();
    let Command::EditSeller { index, changes } = cmd else {
        panic!("expected edit seller");
    };
    assert_eq!(index, 1);
    assert_eq!(changes.selling_address, Some(Address::parse("5 Orchard Road").unwrap()));
    assert!(changes.person.is_empty());
}

#[test]
fn edit_seller_invalid_phone_fails() {
    assert_parse_failure(
        seller_parsers::parse_edit("1 p/12"),
        &invalid_format(EDIT_SELLER_USAGE),
    );
}

#[test]
fn delete_buyer_parses_index() {
    assert_eq!(buyer_parsers::parse_delete("3").unwrap(), Command::DeleteBuyer(3));
    assert_parse_failure(buyer_parsers::parse_delete("a"), &invalid_format(DELETE_BUYER_USAGE));
}

// ==========================================================================
// FIND / SORT
// ==========================================================================

#[test]
fn find_seller_splits_keywords() {
    assert_eq!(
        list_parsers::parse_find_seller("  Alice \t Bob ").unwrap(),
        Command::FindSeller(vec!["Alice".into(), "Bob".into()])
    );
    assert_parse_failure(list_parsers::parse_find_seller("  "), &invalid_format(FIND_SELLER_USAGE));
}

#[test]
fn sort_buyer_parses_key_and_order() {
    assert_eq!(
        list_parsers::parse_sort_buyer("by/name o/desc").unwrap(),
        Command::SortBuyer(SortOrder::By {
            key: SortKey::Name,
            direction: Direction::Descending,
        })
    );
    assert_eq!(
        list_parsers::parse_sort_buyer("by/phone").unwrap(),
        Command::SortBuyer(SortOrder::By {
            key: SortKey::Phone,
            direction: Direction::Ascending,
        })
    );
    assert_eq!(
        list_parsers::parse_sort_buyer("by/default").unwrap(),
        Command::SortBuyer(SortOrder::Insertion)
    );
}

#[test]
fn sort_buyer_rejects_unknown_key_or_order() {
    for input in ["by/height", "by/name o/sideways", "o/asc", "name", "by/default o/asc"] {
        assert_parse_failure(list_parsers::parse_sort_buyer(input), &invalid_format(SORT_BUYER_USAGE));
    }
}

// ==========================================================================
// DISPATCH
// ==========================================================================

#[test]
fn dispatch_routes_command_words() {
    assert_eq!(
        parse_command(&format!("addbuyer {}", VALID_INPUT)).unwrap(),
        Command::AddBuyer(adam())
    );
    assert_eq!(parse_command("deleteseller 1").unwrap(), Command::DeleteSeller(1));
    assert_eq!(parse_command("list").unwrap(), Command::List);
    assert_eq!(parse_command("  clear ").unwrap(), Command::Clear);
    assert_eq!(parse_command("help").unwrap(), Command::Help);
    assert_eq!(parse_command("exit").unwrap(), Command::Exit);
}

#[test]
fn dispatch_unknown_word_fails() {
    assert_parse_failure(parse_command("sell 1"), MESSAGE_UNKNOWN_COMMAND);
    assert_parse_failure(parse_command("   "), &invalid_format(HELP_USAGE));
}

#[test]
fn commands_without_arguments_reject_extra_text() {
    assert_parse_failure(parse_command("list all"), &invalid_format(LIST_USAGE));
    assert_parse_failure(
        parse_command("clear everything now"),
        &invalid_format(CLEAR_USAGE),
    );
    assert_parse_failure(parse_command("help addbuyer"), &invalid_format(HELP_USAGE));
    assert_parse_failure(parse_command("exit 0"), &invalid_format(EXIT_USAGE));
}

#[test]
fn parse_errors_are_classified() {
    assert!(parse_command("unknown").unwrap_err().is_parse_error());
    assert!(parse_command("addbuyer").unwrap_err().is_parse_error());
}
