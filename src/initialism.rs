//! Registries of known initialisms.
//!
//! An initialism registry is an ordered set of uppercase acronyms such as `HTTP` or `UUID`.
//! The camel join style consults one when rejoining words so that an acronym at the start or
//! the end of an identifier keeps its uppercase spelling. Registries are immutable once built
//! and are shared through [`Arc`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::error::{Error, Result};

const COMMON_INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
    "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS",
    "TTL", "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF", "XSS",
];

const HTTP_HEADER_ACRONYMS: &[&str] = &[
    "XSS", "SSL", "HTTP", "MD5", "TE", "DNT", "UIDH", "P3P", "WWW", "CSP", "UA",
];

lazy_static! {
    static ref INITIALISM_RE: Regex = Regex::new(r"^[A-Z][A-Z0-9]+$").unwrap();

    /// Common initialisms found in program identifiers. Used by the default camel join style.
    pub static ref COMMON: Arc<InitialismRegistry> =
        Arc::new(InitialismRegistry::from_trusted(COMMON_INITIALISMS));

    /// Acronyms that stay fully uppercase in HTTP header names, e.g. `WWW-Authenticate`.
    pub static ref HTTP_ACRONYMS: Arc<InitialismRegistry> =
        Arc::new(InitialismRegistry::from_trusted(HTTP_HEADER_ACRONYMS));
}

/// An ordered set of uppercase initialisms.
///
/// Iteration order is registration order. Acronym restoration picks the first matching entry,
/// so the order is part of a registry's behavior: with the default registry `HTTP` is tried
/// before `HTTPS`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct InitialismRegistry {
    entries: Vec<String>,
    lookup: HashSet<String>,
}

impl InitialismRegistry {
    /// Builds a registry from caller-supplied entries.
    ///
    /// Entries are trimmed and must consist of an uppercase ASCII letter followed by one or more
    /// uppercase ASCII letters or digits. Repeated entries keep their first position.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::default();
        for entry in entries {
            registry.insert(entry.as_ref())?;
        }
        debug!("built initialism registry with {} entries", registry.len());
        Ok(registry)
    }

    /// Returns a copy of this registry with `entries` appended after the existing ones.
    pub fn with<I, S>(&self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = self.clone();
        let before = registry.len();
        for entry in entries {
            registry.insert(entry.as_ref())?;
        }
        debug!(
            "extended initialism registry from {} to {} entries",
            before,
            registry.len()
        );
        Ok(registry)
    }

    // Only for the compile-time lists above, which are known to be valid.
    fn from_trusted(entries: &[&str]) -> Self {
        let mut registry = Self::default();
        for entry in entries {
            if registry.lookup.insert((*entry).to_owned()) {
                registry.entries.push((*entry).to_owned());
            }
        }
        registry
    }

    fn insert(&mut self, entry: &str) -> Result<()> {
        let entry = entry.trim();
        if !INITIALISM_RE.is_match(entry) {
            return Err(Error::InvalidInitialism(entry.to_owned()));
        }
        if self.lookup.insert(entry.to_owned()) {
            self.entries.push(entry.to_owned());
        }
        Ok(())
    }

    /// Whether `candidate`, uppercased, is one of the registered initialisms.
    pub fn is_known(&self, candidate: &str) -> bool {
        self.lookup.contains(&candidate.to_ascii_uppercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for InitialismRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.entries).finish()
    }
}

/// Parses a comma separated list such as `"API, HTTP,URL"`. Empty items are skipped.
impl FromStr for InitialismRegistry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.split(',').filter(|item| !item.trim().is_empty()))
    }
}
