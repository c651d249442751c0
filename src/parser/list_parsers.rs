use crate::commands::list_commands::{
    FIND_BUYER_USAGE, FIND_SELLER_USAGE, SORT_BUYER_USAGE, SORT_SELLER_USAGE,
};
use crate::commands::Command;
use crate::error::{EstateError, EstateResult};
use crate::model::{Direction, SortKey, SortOrder};

use super::tokenizer::{tokenize, PREFIX_SORT_KEY, PREFIX_SORT_ORDER};
use super::{no_duplicates, rejected};

const DEFAULT_ORDER_KEYWORD: &str = "default";

pub fn parse_find_buyer(args: &str) -> EstateResult<Command> {
    keywords(args, FIND_BUYER_USAGE).map(Command::FindBuyer)
}

pub fn parse_find_seller(args: &str) -> EstateResult<Command> {
    keywords(args, FIND_SELLER_USAGE).map(Command::FindSeller)
}

pub fn parse_sort_buyer(args: &str) -> EstateResult<Command> {
    sort_order(args, SORT_BUYER_USAGE).map(Command::SortBuyer)
}

pub fn parse_sort_seller(args: &str) -> EstateResult<Command> {
    sort_order(args, SORT_SELLER_USAGE).map(Command::SortSeller)
}

fn keywords(args: &str, usage: &str) -> EstateResult<Vec<String>> {
    let words: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if words.is_empty() {
        return Err(EstateError::invalid_format(usage));
    }
    Ok(words)
}

/// `by/KEY [o/asc|desc]`, or `by/default` to restore insertion order.
fn sort_order(args: &str, usage: &str) -> EstateResult<SortOrder> {
    let prefixes = [PREFIX_SORT_KEY, PREFIX_SORT_ORDER];
    let map = tokenize(args, &prefixes);
    if !map.preamble().is_empty() {
        return Err(EstateError::invalid_format(usage));
    }
    no_duplicates(&map, &prefixes, usage)?;

    let key = map
        .value(PREFIX_SORT_KEY)
        .ok_or_else(|| EstateError::invalid_format(usage))?;

    if key.eq_ignore_ascii_case(DEFAULT_ORDER_KEYWORD) {
        if map.is_present(PREFIX_SORT_ORDER) {
            return Err(rejected(
                EstateError::constraint("default order takes no direction"),
                usage,
            ));
        }
        return Ok(SortOrder::Insertion);
    }

    let key = SortKey::from_keyword(key).ok_or_else(|| {
        rejected(
            EstateError::constraint(&format!("unknown sort key '{}'", key)),
            usage,
        )
    })?;

    let direction = match map.value(PREFIX_SORT_ORDER).map(str::to_ascii_lowercase).as_deref() {
        None | Some("asc") => Direction::Ascending,
        Some("desc") => Direction::Descending,
        Some(other) => {
            return Err(rejected(
                EstateError::constraint(&format!("unknown sort order '{}'", other)),
                usage,
            ))
        }
    };

    Ok(SortOrder::By { key, direction })
}
