use std::collections::HashMap;

/// A `tag/` marker that starts an argument value, e.g. `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(pub &'static str);

impl Prefix {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_PHONE: Prefix = Prefix("p/");
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
pub const PREFIX_HOME_ADDRESS: Prefix = Prefix("ah/");
pub const PREFIX_SELLING_ADDRESS: Prefix = Prefix("as/");
pub const PREFIX_INFO: Prefix = Prefix("i/");
pub const PREFIX_TAG: Prefix = Prefix("t/");
pub const PREFIX_SORT_KEY: Prefix = Prefix("by/");
pub const PREFIX_SORT_ORDER: Prefix = Prefix("o/");

/// Values collected per prefix, in the order they appeared.
#[derive(Debug, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn has_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.is_present(*p))
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Returns the prefixes among `prefixes` that were given more than once.
    pub fn duplicated(&self, prefixes: &[Prefix]) -> Vec<Prefix> {
        prefixes
            .iter()
            .copied()
            .filter(|p| self.values.get(p).map(|v| v.len() > 1).unwrap_or(false))
            .collect()
    }
}

/// Splits `args` at every occurrence of one of `prefixes` that starts the input or
/// follows whitespace. Everything before the first prefix is the preamble.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for prefix in prefixes {
        let needle = prefix.as_str();
        let mut from = 0;
        while let Some(found) = args[from..].find(needle) {
            let at = from + found;
            let boundary = args[..at]
                .chars()
                .next_back()
                .map(char::is_whitespace)
                .unwrap_or(true);
            if boundary {
                positions.push((at, *prefix));
            }
            from = at + needle.len();
        }
    }
    positions.sort_by_key(|(at, _)| *at);

    let mut map = ArgumentMultimap::default();
    let first = positions.first().map(|(at, _)| *at).unwrap_or(args.len());
    map.preamble = args[..first].trim().to_string();

    for (i, (at, prefix)) in positions.iter().enumerate() {
        let start = at + prefix.as_str().len();
        let end = positions.get(i + 1).map(|(next, _)| *next).unwrap_or(args.len());
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }
    map
}
