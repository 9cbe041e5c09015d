use std::fmt;

use url::Url;

use crate::error::{CatalogError, Result};
use crate::model::ParameterLocation;

#[cfg(test)]
mod tests;

/// A parameter's current value as entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterValue {
    pub name: String,
    pub value: String,
    pub location: ParameterLocation,
}

impl ParameterValue {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        location: ParameterLocation,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            location,
        }
    }

    pub fn path(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, ParameterLocation::Path)
    }

    pub fn query(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, ParameterLocation::Query)
    }
}

/// Request URI produced by [`resolve`].
///
/// `as_str` is the assembled text exactly as built (values verbatim,
/// unresolved placeholders kept); `url` is its parsed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUri {
    text: String,
    url: Url,
}

impl ResolvedUri {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn into_url(self) -> Url {
        self.url
    }
}

impl fmt::Display for ResolvedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Build a request URI from a `{name}` template and parameter values.
///
/// Path and query parameters replace every `{name}` occurrence in `base`.
/// Query parameters with a non-empty value are then appended as
/// `name=value` pairs in declaration order. Other locations are ignored.
pub fn resolve(base: &str, parameters: &[ParameterValue]) -> Result<ResolvedUri> {
    let mut address = base.to_string();

    for param in parameters.iter().filter(|p| takes_part(p.location)) {
        if address.contains('{') {
            let placeholder = format!("{{{}}}", param.name);
            address = address.replace(&placeholder, &param.value);
        }
    }

    let query = parameters
        .iter()
        .filter(|p| p.location == ParameterLocation::Query && !p.value.is_empty())
        .map(|p| format!("{}={}", p.name, p.value))
        .collect::<Vec<_>>()
        .join("&");

    if !query.is_empty() {
        address.push('?');
        address.push_str(&query);
    }

    let url = Url::parse(&address).map_err(|source| CatalogError::InvalidUri {
        uri: address.clone(),
        source,
    })?;

    Ok(ResolvedUri { text: address, url })
}

fn takes_part(location: ParameterLocation) -> bool {
    matches!(location, ParameterLocation::Path | ParameterLocation::Query)
}
