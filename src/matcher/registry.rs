//! Process-wide registry of matcher implementations, keyed by name.

use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::error::{MatcherError, Result};
use crate::matcher::base_matcher::Matcher;
use crate::matcher::hm_matcher::HmMatcher;

/// Constructor for an unconfigured matcher.
pub type MatcherFactory = fn() -> Box<dyn Matcher>;

static REGISTRY: OnceLock<RwLock<HashMap<String, MatcherFactory>>> = OnceLock::new();

fn create_hm_matcher() -> Box<dyn Matcher> {
    Box::new(HmMatcher::default())
}

fn registry() -> &'static RwLock<HashMap<String, MatcherFactory>> {
    REGISTRY.get_or_init(|| {
        let mut factories: HashMap<String, MatcherFactory> = HashMap::new();
        factories.insert(HmMatcher::NAME.to_string(), create_hm_matcher);
        RwLock::new(factories)
    })
}

/// Register `factory` under `name`, replacing any previous entry.
pub fn register_matcher(name: impl Into<String>, factory: MatcherFactory) {
    registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name.into(), factory);
}

/// Build a fresh matcher registered under `name`.
///
/// The returned matcher still needs [`Matcher::init`].
pub fn create_matcher(name: &str) -> Result<Box<dyn Matcher>> {
    let factories = registry().read().unwrap_or_else(PoisonError::into_inner);
    factories
        .get(name)
        .map(|factory| factory())
        .ok_or_else(|| MatcherError::UnknownMatcher(name.to_string()))
}

/// Names of all registered matchers, sorted.
pub fn registered_matchers() -> Vec<String> {
    let factories = registry().read().unwrap_or_else(PoisonError::into_inner);
    let mut names: Vec<String> = factories.keys().cloned().collect();
    names.sort();
    names
}
