use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation and modification timestamps carried by every entity.
///
/// `created_at` is set once at construction; `updated_at` is refreshed
/// by [`Stamps::touch`] whenever a mutator succeeds. Both are UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Stamps {
    /// Stamps for a freshly constructed entity (both set to now).
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at` to the current time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Stamps {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_sets_both_fields_equal() {
        let stamps = Stamps::now();
        assert_eq!(stamps.created_at, stamps.updated_at);
    }

    #[test]
    fn touch_advances_updated_at_only() {
        let mut stamps = Stamps::now();
        let created = stamps.created_at;
        stamps.touch();
        assert_eq!(stamps.created_at, created);
        assert!(stamps.updated_at >= created);
    }

    #[test]
    fn serde_roundtrip() {
        let stamps = Stamps::now();
        let json = serde_json::to_string(&stamps).unwrap();
        let parsed: Stamps = serde_json::from_str(&json).unwrap();
        assert_eq!(stamps, parsed);
    }
}
