//! ID prefixes for every stored entity.
//!
//! IDs have the form `<prefix>-<8 hex chars>`, for example `alr-3fa9c01b`.
//! The hex part is generated by the database (see `ApisDb::generate_id`).

pub const PREFIX_USER: &str = "usr";
pub const PREFIX_APIARY: &str = "api";
pub const PREFIX_HIVE: &str = "hiv";
pub const PREFIX_INSPECTION: &str = "ins";
pub const PREFIX_TASK: &str = "tsk";
pub const PREFIX_ALERT: &str = "alr";
pub const PREFIX_RECOMMENDATION: &str = "rec";

pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_USER,
    PREFIX_APIARY,
    PREFIX_HIVE,
    PREFIX_INSPECTION,
    PREFIX_TASK,
    PREFIX_ALERT,
    PREFIX_RECOMMENDATION,
];

/// Whether `id` looks like `<prefix>-<8 lowercase hex>`.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|hex| {
            hex.len() == 8
                && hex
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn prefixes_are_unique_and_three_chars() {
        let unique: HashSet<_> = ALL_PREFIXES.iter().collect();
        assert_eq!(unique.len(), ALL_PREFIXES.len());
        assert!(ALL_PREFIXES.iter().all(|p| p.len() == 3));
    }

    #[test]
    fn has_prefix_checks_shape() {
        assert!(has_prefix("alr-0a1b2c3d", PREFIX_ALERT));
        assert!(!has_prefix("alr-0A1B2C3D", PREFIX_ALERT));
        assert!(!has_prefix("alr-0a1b", PREFIX_ALERT));
        assert!(!has_prefix("hiv-0a1b2c3d", PREFIX_ALERT));
        assert!(!has_prefix("alr0a1b2c3d", PREFIX_ALERT));
    }
}
