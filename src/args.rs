//! Ordered nmap argument list with bookkeeping for options that may only
//! be given once.

use crate::{Result, ScanError};
use std::collections::HashMap;

/// Categories of nmap options where at most one member may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exclusive {
    ScanTechnique,
    TargetInput,
    RandomTargets,
    TargetExclusion,
    DnsResolution,
    PortSelection,
    VersionIntensity,
    TimingTemplate,
    ScriptArguments,
}

#[derive(Debug, Clone, Default)]
pub struct ArgumentSet {
    tokens: Vec<String>,
    claimed: HashMap<Exclusive, &'static str>,
}

impl ArgumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    pub fn push_pair(&mut self, flag: &str, value: impl Into<String>) {
        self.tokens.push(flag.to_string());
        self.tokens.push(value.into());
    }

    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokens.extend(tokens.into_iter().map(Into::into));
    }

    /// Records that `option` selected a member of `category`. Fails when
    /// another option already did.
    pub fn claim(&mut self, category: Exclusive, option: &'static str) -> Result<()> {
        if let Some(&previous) = self.claimed.get(&category) {
            return Err(ScanError::ConflictingOptions {
                option,
                previous,
            });
        }
        self.claimed.insert(category, option);
        Ok(())
    }

    pub fn claimed_by(&self, category: Exclusive) -> Option<&'static str> {
        self.claimed.get(&category).copied()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}
