use std::collections::BTreeMap;

/// Module parameters and, when available, their one-line descriptions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tunables {
    values: BTreeMap<String, String>,
    descriptions: BTreeMap<String, String>,
}

impl Tunables {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self {
            values,
            descriptions: BTreeMap::new(),
        }
    }

    pub fn with_descriptions(mut self, descriptions: BTreeMap<String, String>) -> Self {
        self.descriptions = descriptions;
        self
    }

    /// (name, value) pairs sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[cfg(test)]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn description(&self, name: &str) -> Option<&str> {
        self.descriptions.get(name).map(String::as_str)
    }

    pub fn has_descriptions(&self) -> bool {
        !self.descriptions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse `modinfo -F parm zfs` output, one "name:description (type)" per line.
/// Wrapped continuation lines do not start with a parameter name and are skipped.
pub fn parse_parameter_descriptions(output: &str) -> BTreeMap<String, String> {
    output
        .lines()
        .filter_map(|line| line.split_once(':'))
        .filter(|(name, _)| is_parameter_name(name))
        .map(|(name, description)| (name.to_string(), description.trim().to_string()))
        .collect()
}

fn is_parameter_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
