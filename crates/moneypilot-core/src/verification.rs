//! Verification code store
//!
//! Short-lived alphanumeric codes keyed by an identifier (usually an email
//! address). Each code has an explicit expiry and a limited number of attempts,
//! and is consumed by the first successful check.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use subtle::ConstantTimeEq;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::VerificationSettings;

/// Characters used in generated codes
const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Why a verification attempt was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("no verification code pending")]
    NotFound,

    #[error("verification code expired")]
    Expired,

    #[error("verification code does not match ({remaining_attempts} attempts left)")]
    Mismatch { remaining_attempts: u32 },

    #[error("too many failed attempts")]
    TooManyAttempts,
}

#[derive(Debug, Clone)]
struct PendingCode {
    code: String,
    expires_at: DateTime<Utc>,
    failed_attempts: u32,
}

impl PendingCode {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// In-memory keyed store of pending verification codes
#[derive(Debug)]
pub struct VerificationCodeStore {
    codes: RwLock<HashMap<String, PendingCode>>,
    code_length: usize,
    ttl: Duration,
    max_attempts: u32,
}

impl Default for VerificationCodeStore {
    fn default() -> Self {
        Self::new(&VerificationSettings::default())
    }
}

impl VerificationCodeStore {
    pub fn new(settings: &VerificationSettings) -> Self {
        Self {
            codes: RwLock::new(HashMap::new()),
            code_length: settings.code_length,
            ttl: settings.ttl(),
            max_attempts: settings.max_attempts,
        }
    }

    /// Issue a fresh code for `key`, replacing any pending one
    pub fn issue(&self, key: &str) -> String {
        self.issue_at(key, Utc::now())
    }

    /// Issue a code as of `now`
    pub fn issue_at(&self, key: &str, now: DateTime<Utc>) -> String {
        let code = generate_code(self.code_length);
        let mut codes = self.codes.write().unwrap_or_else(|e| e.into_inner());

        // Clean up expired codes while we're here
        codes.retain(|_, pending| !pending.is_expired(now));

        codes.insert(
            normalize_key(key),
            PendingCode {
                code: code.clone(),
                expires_at: now + self.ttl,
                failed_attempts: 0,
            },
        );

        info!(pending = codes.len(), "Verification code issued");
        code
    }

    /// Check a submitted code; a match consumes it
    pub fn verify(&self, key: &str, code: &str) -> Result<(), VerificationError> {
        self.verify_at(key, code, Utc::now())
    }

    /// Check a submitted code as of `now`
    pub fn verify_at(
        &self,
        key: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<(), VerificationError> {
        let key = normalize_key(key);
        let mut codes = self.codes.write().unwrap_or_else(|e| e.into_inner());

        let pending = codes.get_mut(&key).ok_or(VerificationError::NotFound)?;

        if pending.is_expired(now) {
            codes.remove(&key);
            debug!("Verification code expired");
            return Err(VerificationError::Expired);
        }

        let submitted = code.trim().to_ascii_uppercase();
        if bool::from(submitted.as_bytes().ct_eq(pending.code.as_bytes())) {
            codes.remove(&key);
            return Ok(());
        }

        pending.failed_attempts += 1;
        if pending.failed_attempts >= self.max_attempts {
            codes.remove(&key);
            warn!("Verification code discarded after too many failed attempts");
            return Err(VerificationError::TooManyAttempts);
        }

        Err(VerificationError::Mismatch {
            remaining_attempts: self.max_attempts - pending.failed_attempts,
        })
    }

    /// Drop expired codes, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    pub fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut codes = self.codes.write().unwrap_or_else(|e| e.into_inner());
        let before = codes.len();
        codes.retain(|_, pending| !pending.is_expired(now));
        before - codes.len()
    }

    /// Number of codes currently held (including not-yet-purged expired ones)
    pub fn len(&self) -> usize {
        self.codes.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keys are compared case-insensitively, ignoring surrounding whitespace
fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Generate a random code from `A-Z0-9`
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
        .collect()
}
