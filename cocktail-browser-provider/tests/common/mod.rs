//! Shared helpers for the live provider tests

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use cocktail_browser_provider::{CatalogProvider, ProviderConfig, create_provider};

/// Environment variable that opts into tests against the live service.
pub const LIVE_TEST_ENV: &str = "COCKTAILDB_LIVE_TESTS";

/// Optional override for the API base URL (e.g. a local mirror).
pub const BASE_URL_ENV: &str = "COCKTAILDB_BASE_URL";

/// Skip the test when any of the given environment variables is missing.
#[macro_export]
macro_rules! skip_unless_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: environment variable {} not set", $var);
                return;
            }
        )+
    };
}

/// Assert that an `Option` is `Some` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got Err({:?})", res.as_ref().err());
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: Err({:?})",
            format_args!($($msg)+),
            res.as_ref().err()
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Test context wrapping the provider under test
pub struct TestContext {
    pub provider: Arc<dyn CatalogProvider>,
}

impl TestContext {
    /// Creates a TheCocktailDB context, honoring [`BASE_URL_ENV`].
    pub fn cocktaildb() -> Option<Self> {
        let base_url = env::var(BASE_URL_ENV).ok();
        let provider = create_provider(ProviderConfig::CocktailDb { base_url }).ok()?;
        Some(Self { provider })
    }
}
