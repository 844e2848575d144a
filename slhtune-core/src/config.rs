//! Search configuration and input validation.

use crate::error::{Error, Result};
use crate::limits::{
    MAX_FORS_HEIGHT, MAX_LOG_SIGNATURES, MAX_MERKLE_HEIGHT, MAX_SECURITY_LEVEL,
    MAX_SUBTREE_COUNT, MIN_MERKLE_HEIGHT,
};

/// Secondary security level used for overuse scoring when none is given:
/// 32 bits below the primary level, or half of it for levels under 32 bits.
#[must_use]
pub const fn default_overuse_target(security_level_bits: u32) -> u32 {
    match security_level_bits.checked_sub(32) {
        Some(bits) => bits,
        None => security_level_bits / 2,
    }
}

/// Exact-match filters on the structure of admitted parameter sets.
///
/// Useful for studying the overuse curve of one particular set that would not
/// otherwise rank among the best.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restrictions {
    /// Only consider hypertrees with this many subtree layers.
    pub subtree_count: Option<u32>,
    /// Only consider this Merkle subtree height.
    pub merkle_height: Option<u32>,
    /// Only consider this FORS tree height.
    pub fors_height: Option<u32>,
}

impl Restrictions {
    fn validate(&self) -> Result<()> {
        check_range("subtree count", self.subtree_count, 1, MAX_SUBTREE_COUNT)?;
        check_range("merkle height", self.merkle_height, MIN_MERKLE_HEIGHT, MAX_MERKLE_HEIGHT)?;
        check_range("fors height", self.fors_height, 1, MAX_FORS_HEIGHT)
    }
}

fn check_range(name: &'static str, value: Option<u32>, min: u32, max: u32) -> Result<()> {
    match value {
        Some(value) if !(min..=max).contains(&value) => Err(Error::InvalidRestriction {
            name,
            value,
            min,
            max,
        }),
        _ => Ok(()),
    }
}

/// Everything the search needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Primary security level in bits; also fixes the hash size.
    pub security_level_bits: u32,
    /// log2 of the number of signatures that must keep the primary level.
    pub log_signatures: u32,
    /// Secondary level used to score overuse resilience.
    pub overuse_target_bits: u32,
    /// Largest acceptable number of hashes per signature.
    pub sign_budget: u64,
    /// Stop listing a class once its overuse exponent reaches this value.
    pub overuse_ceiling: Option<u32>,
    /// Label prefixed to report rows and curve file names.
    pub label: Option<String>,
    /// Structural filters.
    pub restrictions: Restrictions,
}

impl SearchConfig {
    /// Create a configuration with the default overuse target and no filters.
    #[must_use]
    pub fn new(security_level_bits: u32, log_signatures: u32, sign_budget: u64) -> Self {
        Self {
            security_level_bits,
            log_signatures,
            overuse_target_bits: default_overuse_target(security_level_bits),
            sign_budget,
            overuse_ceiling: None,
            label: None,
            restrictions: Restrictions::default(),
        }
    }

    /// Override the overuse scoring level.
    #[must_use]
    pub fn with_overuse_target(mut self, bits: u32) -> Self {
        self.overuse_target_bits = bits;
        self
    }

    /// Set the overuse exponent past which a class stops being listed.
    #[must_use]
    pub fn with_overuse_ceiling(mut self, exponent: u32) -> Self {
        self.overuse_ceiling = Some(exponent);
        self
    }

    /// Set the report label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the structural filters.
    #[must_use]
    pub fn with_restrictions(mut self, restrictions: Restrictions) -> Self {
        self.restrictions = restrictions;
        self
    }

    /// Reject degenerate inputs before any search work is done.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SECURITY_LEVEL).contains(&self.security_level_bits) {
            return Err(Error::InvalidSecurityLevel {
                bits: self.security_level_bits,
                max: MAX_SECURITY_LEVEL,
            });
        }
        if !(1..=MAX_LOG_SIGNATURES).contains(&self.log_signatures) {
            return Err(Error::InvalidSignatureCount {
                log_signatures: self.log_signatures,
                max: MAX_LOG_SIGNATURES,
            });
        }
        if self.sign_budget == 0 {
            return Err(Error::InvalidSignBudget(self.sign_budget));
        }
        self.restrictions.validate()
    }
}
