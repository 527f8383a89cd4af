use serde::Deserialize;
use std::collections::HashSet;

/// Names whose A/AAAA queries are sent upstream instead of answered locally.
///
/// Entries are stored fully qualified (trailing `.`) and compared verbatim:
/// no case folding and no suffix matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct ForwardNames {
    names: HashSet<String>,
}

impl ForwardNames {
    /// Parse a comma separated list such as `"a.example, b.example."`.
    pub fn parse(list: &str) -> Self {
        list.split(',').collect()
    }

    /// Trim surrounding whitespace and append the root label if missing.
    /// Blank entries yield `None`.
    pub fn normalize(name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        if name.ends_with('.') {
            Some(name.to_string())
        } else {
            Some(format!("{}.", name))
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ForwardNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .filter_map(|name| Self::normalize(name.as_ref()))
                .collect(),
        }
    }
}

impl From<Vec<String>> for ForwardNames {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}
