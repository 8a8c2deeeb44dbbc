//! User record.
//!
//! Users are not stored anywhere: every record is synthesized from its id, so
//! repeated calls within one process produce identical values.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

/// Ids served by the list endpoint, ascending.
pub const ROSTER_IDS: [i64; 3] = [1, 2, 3];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    /// Synthesize the record for a numeric id.
    pub fn synthesize(id: i64) -> Self {
        Self::with_label(id, &id.to_string())
    }

    /// Build a record from a raw path segment.
    ///
    /// Legacy contract kept for client compatibility: a segment that does not
    /// parse as `i64` yields `id = 0`, while `name`/`email` still embed the raw
    /// segment verbatim (`"abc"` -> `0`, `"User abc"`, `"userabc@example.com"`).
    /// Out-of-range numbers saturate to `i64::MAX` / `i64::MIN`.
    pub fn from_raw_id(raw: &str) -> Self {
        Self::with_label(parse_id_lossy(raw), raw)
    }

    /// The fixed list returned by the users endpoint.
    pub fn roster() -> Vec<Self> {
        ROSTER_IDS.iter().copied().map(Self::synthesize).collect()
    }

    fn with_label(id: i64, label: &str) -> Self {
        Self {
            id,
            name: format!("User {label}"),
            email: format!("user{label}@example.com"),
        }
    }
}

fn parse_id_lossy(raw: &str) -> i64 {
    match raw.parse::<i64>() {
        Ok(id) => id,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id_parses() {
        let u = User::from_raw_id("42");
        assert_eq!(u.id, 42);
        assert_eq!(u.name, "User 42");
        assert_eq!(u.email, "user42@example.com");
    }

    #[test]
    fn non_numeric_id_degrades_to_zero() {
        let u = User::from_raw_id("abc");
        assert_eq!(u.id, 0);
        assert_eq!(u.name, "User abc");
        assert_eq!(u.email, "userabc@example.com");
    }

    #[test]
    fn raw_label_survives_leading_zeros() {
        let u = User::from_raw_id("007");
        assert_eq!(u.id, 7);
        assert_eq!(u.name, "User 007");
    }

    #[test]
    fn overflowing_id_saturates() {
        let u = User::from_raw_id("99999999999999999999");
        assert_eq!(u.id, i64::MAX);
        assert_eq!(u.email, "user99999999999999999999@example.com");

        let u = User::from_raw_id("-99999999999999999999");
        assert_eq!(u.id, i64::MIN);
        assert_eq!(u.name, "User -99999999999999999999");
    }

    #[test]
    fn malformed_numbers_degrade_to_zero() {
        for raw in ["", "+", "-", "12a", "1.5", " 7"] {
            assert_eq!(User::from_raw_id(raw).id, 0, "{raw:?}");
        }
        assert_eq!(User::from_raw_id("-12").id, -12);
    }

    #[test]
    fn roster_is_stable_and_ascending() {
        let a = User::roster();
        assert_eq!(a, User::roster());
        let ids: Vec<i64> = a.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(a[2].name, "User 3");
        assert_eq!(a[2].email, "user3@example.com");
    }
}
