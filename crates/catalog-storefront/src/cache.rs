//! Cache-Control policies for storefront responses.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Who may cache a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheScope {
    /// Shared caches and browsers.
    Public,
    /// Browser only.
    Private,
    /// Not cached.
    #[default]
    None,
}

impl CacheScope {
    pub fn cache_control_directive(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::None => "no-store",
        }
    }
}

/// Cache policy attached to an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CachePolicy {
    pub scope: CacheScope,
    pub ttl: Duration,
}

impl CachePolicy {
    /// Prefetched image lists change with the catalog only.
    pub const PREFETCH: CachePolicy = CachePolicy::public(Duration::from_secs(3600));

    /// Search results.
    pub const SEARCH: CachePolicy = CachePolicy::public(Duration::from_secs(600));

    /// No caching.
    pub const fn none() -> Self {
        Self {
            scope: CacheScope::None,
            ttl: Duration::ZERO,
        }
    }

    pub const fn public(ttl: Duration) -> Self {
        Self {
            scope: CacheScope::Public,
            ttl,
        }
    }

    pub const fn private(ttl: Duration) -> Self {
        Self {
            scope: CacheScope::Private,
            ttl,
        }
    }

    /// Value for the `Cache-Control` header, `None` when the response
    /// should carry no caching directive.
    pub fn cache_control_header(&self) -> Option<String> {
        match self.scope {
            CacheScope::None => None,
            scope => Some(format!(
                "{}, max-age={}",
                scope.cache_control_directive(),
                self.ttl.as_secs()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_control_header() {
        assert_eq!(
            CachePolicy::PREFETCH.cache_control_header().as_deref(),
            Some("public, max-age=3600")
        );
        assert_eq!(
            CachePolicy::SEARCH.cache_control_header().as_deref(),
            Some("public, max-age=600")
        );
        assert_eq!(
            CachePolicy::private(Duration::from_secs(5))
                .cache_control_header()
                .as_deref(),
            Some("private, max-age=5")
        );
        assert_eq!(CachePolicy::none().cache_control_header(), None);
    }
}
