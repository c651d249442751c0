pub mod tokenizer;
pub mod buyer_parsers;
pub mod seller_parsers;
pub mod list_parsers;

use std::collections::BTreeSet;

use tracing::debug;

use crate::commands::buyer_commands::{ADD_BUYER_WORD, DELETE_BUYER_WORD, EDIT_BUYER_WORD};
use crate::commands::list_commands::{
    CLEAR_USAGE, CLEAR_WORD, FIND_BUYER_WORD, FIND_SELLER_WORD, LIST_USAGE, LIST_WORD,
    SORT_BUYER_WORD, SORT_SELLER_WORD,
};
use crate::commands::seller_commands::{ADD_SELLER_WORD, DELETE_SELLER_WORD, EDIT_SELLER_WORD};
use crate::commands::{Command, EXIT_USAGE, EXIT_WORD, HELP_USAGE, HELP_WORD};
use crate::error::{EstateError, EstateResult};
use crate::model::Tag;
use crate::validation;

use tokenizer::{ArgumentMultimap, Prefix};

/// Parses one line of user input into a command.
pub fn parse_command(input: &str) -> EstateResult<Command> {
    let (word, args) = split_command(input);
    match word {
        "" => Err(EstateError::invalid_format(HELP_USAGE)),
        ADD_BUYER_WORD => buyer_parsers::parse_add(args),
        DELETE_BUYER_WORD => buyer_parsers::parse_delete(args),
        EDIT_BUYER_WORD => buyer_parsers::parse_edit(args),
        ADD_SELLER_WORD => seller_parsers::parse_add(args),
        DELETE_SELLER_WORD => seller_parsers::parse_delete(args),
        EDIT_SELLER_WORD => seller_parsers::parse_edit(args),
        FIND_BUYER_WORD => list_parsers::parse_find_buyer(args),
        FIND_SELLER_WORD => list_parsers::parse_find_seller(args),
        SORT_BUYER_WORD => list_parsers::parse_sort_buyer(args),
        SORT_SELLER_WORD => list_parsers::parse_sort_seller(args),
        LIST_WORD => no_arguments(args, Command::List, LIST_USAGE),
        CLEAR_WORD => no_arguments(args, Command::Clear, CLEAR_USAGE),
        HELP_WORD => no_arguments(args, Command::Help, HELP_USAGE),
        EXIT_WORD => no_arguments(args, Command::Exit, EXIT_USAGE),
        _ => Err(EstateError::UnknownCommand),
    }
}

/// Split input into command word and args.
fn split_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(char::is_whitespace) {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

/// Commands that take nothing after the command word.
fn no_arguments(args: &str, command: Command, usage: &str) -> EstateResult<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(rejected(
            EstateError::constraint("command takes no arguments"),
            usage,
        ))
    }
}

/// Maps a field validation failure to the command's format error.
fn rejected(err: EstateError, usage: &str) -> EstateError {
    debug!(reason = %err, "command arguments rejected");
    EstateError::invalid_format(usage)
}

/// Checks that every required prefix is present exactly once and that there is no preamble.
fn require_exact(map: &ArgumentMultimap, required: &[Prefix], usage: &str) -> EstateResult<()> {
    if !map.preamble().is_empty() {
        return Err(rejected(
            EstateError::constraint("unexpected text before the first field"),
            usage,
        ));
    }
    if !map.has_all(required) {
        return Err(EstateError::invalid_format(usage));
    }
    no_duplicates(map, required, usage)
}

fn no_duplicates(map: &ArgumentMultimap, single: &[Prefix], usage: &str) -> EstateResult<()> {
    let repeated = map.duplicated(single);
    if repeated.is_empty() {
        Ok(())
    } else {
        let names: Vec<&str> = repeated.iter().map(Prefix::as_str).collect();
        Err(rejected(
            EstateError::constraint(&format!("multiple values for {}", names.join(" "))),
            usage,
        ))
    }
}

/// Value of a prefix that `require_exact` has already checked for.
fn required<'a>(map: &'a ArgumentMultimap, prefix: Prefix) -> &'a str {
    map.value(prefix).unwrap_or_default()
}

fn optional<T>(
    map: &ArgumentMultimap,
    prefix: Prefix,
    parse: fn(&str) -> EstateResult<T>,
) -> EstateResult<Option<T>> {
    map.value(prefix).map(parse).transpose()
}

fn parse_tags(values: &[String]) -> EstateResult<BTreeSet<Tag>> {
    values.iter().map(|v| Tag::parse(v)).collect()
}

/// Tags for an edit: absent keeps the current tags, a single empty `t/` clears them.
fn parse_edit_tags(values: &[String]) -> EstateResult<Option<BTreeSet<Tag>>> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(values).map(Some),
    }
}

fn parse_index(raw: &str, usage: &str) -> EstateResult<usize> {
    validation::one_based_index(raw).ok_or_else(|| EstateError::invalid_format(usage))
}
