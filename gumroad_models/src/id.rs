use serde::Serialize;
use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Identifier of a product in the Gumroad catalog.
///
/// Products created on or after Jan 9, 2023 must be verified by `product_id`
/// rather than by permalink. The inner string is never empty.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct ProductId(String);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmptyProductId;

impl ProductId {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyProductId> {
        let value = value.into();
        if value.is_empty() {
            return Err(EmptyProductId);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ProductId {
    type Error = EmptyProductId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for ProductId {
    type Error = EmptyProductId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for EmptyProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "product id must not be empty")
    }
}

impl StdError for EmptyProductId {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_rejected() {
        assert_eq!(ProductId::new(""), Err(EmptyProductId));
        assert_eq!(ProductId::try_from(String::new()), Err(EmptyProductId));
    }

    #[test]
    fn non_empty_is_kept_verbatim() {
        let id = ProductId::try_from(" SDGgCnivv6gTTHfVRfUBxQ== ").unwrap();
        assert_eq!(id.as_str(), " SDGgCnivv6gTTHfVRfUBxQ== ");
        assert_eq!(id.to_string(), " SDGgCnivv6gTTHfVRfUBxQ== ");
    }
}
