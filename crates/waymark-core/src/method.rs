//! HTTP method set.

use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;

/// HTTP methods a route can be bound to.
///
/// The set is closed: the per-node method table allocates exactly one
/// handler slot per variant, so no dynamic growth is ever needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP PATCH.
    Patch,
    /// HTTP DELETE.
    Delete,
    /// HTTP HEAD.
    Head,
    /// HTTP OPTIONS.
    Options,
}

impl Method {
    /// Number of supported methods.
    pub const COUNT: usize = 7;

    /// All supported methods, in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Patch,
        Self::Delete,
        Self::Head,
        Self::Options,
    ];

    /// Stable slot index used for method-table addressing.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Get => 0,
            Self::Post => 1,
            Self::Put => 2,
            Self::Patch => 3,
            Self::Delete => 4,
            Self::Head => 5,
            Self::Options => 6,
        }
    }

    /// Canonical uppercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = RouteError;

    /// Parses a canonical uppercase method name.
    ///
    /// Anything outside the supported set, including lowercase spellings,
    /// fails with [`RouteError::UnknownMethod`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            other => Err(RouteError::UnknownMethod(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_methods() {
        for method in Method::ALL {
            assert_eq!(method.as_str().parse::<Method>(), Ok(method));
        }
    }

    #[test]
    fn test_index_is_unique_and_in_range() {
        let mut seen = [false; Method::COUNT];
        for method in Method::ALL {
            assert!(!seen[method.index()]);
            seen[method.index()] = true;
        }
    }

    #[test]
    fn test_unknown_method_rejected() {
        assert_eq!(
            "TRACE".parse::<Method>(),
            Err(RouteError::UnknownMethod("TRACE".to_owned()))
        );
        assert!("get".parse::<Method>().is_err());
        assert!("".parse::<Method>().is_err());
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Options.to_string(), "OPTIONS");
    }
}
