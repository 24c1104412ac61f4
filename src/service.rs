//! Service definitions and the override merge policy.
//!
//! A [`ServiceDefinition`] is one manageable unit of the local dev
//! environment: a long-running helper container or a one-shot helper action.
//! Engine-specific fields (image, command, mounts, env, and anything the
//! engine adds beyond those) are opaque payload carried through unchanged;
//! the core only looks at them through the merge policy.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Start-order priority of a service. Lower starts earlier.
///
/// Compared numerically. The configuration file historically encoded weights
/// as fixed-width numeral strings sorted lexically; that encoding is still
/// accepted, and a string-encoded weight remembers its character width so the
/// order resolver can warn when a registry mixes widths (see
/// [`crate::order`]). Width plays no part in equality or ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct Weight {
    value: i64,
    legacy_width: Option<usize>,
}

impl Weight {
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            legacy_width: None,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Character width of the original string encoding, if the weight came
    /// from a legacy string-valued configuration entry.
    pub fn legacy_width(&self) -> Option<usize> {
        self.legacy_width
    }
}

impl From<i64> for Weight {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WeightVisitor;

        impl Visitor<'_> for WeightVisitor {
            type Value = Weight;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer weight or a legacy numeral string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Weight, E> {
                Ok(Weight::new(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Weight, E> {
                let value = i64::try_from(v)
                    .map_err(|_| E::custom(format!("weight {} out of range", v)))?;
                Ok(Weight::new(value))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Weight, E> {
                let value: i64 = v
                    .parse()
                    .map_err(|_| E::custom(format!("invalid weight string {:?}", v)))?;
                Ok(Weight {
                    value,
                    legacy_width: Some(v.len()),
                })
            }
        }

        deserializer.deserialize_any(WeightVisitor)
    }
}

/// One manageable unit in the local dev environment.
///
/// Constructed by the default catalog, replaced or patched only by the
/// registry builder, immutable for the rest of the orchestration run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Human-readable label, used in warnings.
    #[serde(default)]
    pub name: String,

    /// Start-order priority.
    #[serde(default)]
    pub weight: Weight,

    /// Container port (e.g. `"80/tcp"`) to host port. `None` means "not
    /// yet configured", which is distinct from an explicit empty map: only
    /// `None` triggers the registry builder's default-port backfill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_bindings: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mounts: Vec<String>,

    /// Any further engine fields, passed through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ServiceDefinition {
    /// Whether this definition is the zero value. A user entry that
    /// deserialized to the zero value (e.g. an empty table) counts as absent
    /// for merge purposes.
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

/// Merge a catalog default with a possibly-absent user override for the same
/// logical service name.
///
/// The policy is whole-value replacement per logical key, never a deep field
/// merge: a non-empty user override wins entirely, an absent or zero-value
/// override yields the catalog default. The registry builder separately
/// re-applies one narrower default (port bindings) afterwards; see
/// [`crate::registry::RegistryBuilder::build`].
pub fn merge_with_default(
    default: &ServiceDefinition,
    user: Option<&ServiceDefinition>,
) -> ServiceDefinition {
    match user {
        Some(over) if !over.is_unset() => over.clone(),
        _ => default.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, weight: i64) -> ServiceDefinition {
        ServiceDefinition {
            name: name.to_string(),
            weight: Weight::new(weight),
            image: format!("example/{}", name),
            ..Default::default()
        }
    }

    #[test]
    fn merge_is_idempotent() {
        let d = sample("proxy", 14);
        assert_eq!(merge_with_default(&d, Some(&d)), d);
    }

    #[test]
    fn merge_passes_default_through_on_absence() {
        let d = sample("proxy", 14);
        assert_eq!(merge_with_default(&d, None), d);
    }

    #[test]
    fn merge_treats_zero_value_override_as_absent() {
        let d = sample("proxy", 14);
        let empty = ServiceDefinition::default();
        assert_eq!(merge_with_default(&d, Some(&empty)), d);
    }

    #[test]
    fn merge_replaces_whole_value() {
        let d = sample("proxy", 14);
        let mut over = sample("custom-proxy", 20);
        over.env = vec!["FOO=bar".to_string()];
        let merged = merge_with_default(&d, Some(&over));
        assert_eq!(merged, over);
        // No field leaks through from the default.
        assert_eq!(merged.image, "example/custom-proxy");
    }

    #[test]
    fn weight_deserializes_from_integer() {
        let def: ServiceDefinition = toml::from_str("weight = 20").unwrap();
        assert_eq!(def.weight.value(), 20);
        assert_eq!(def.weight.legacy_width(), None);
    }

    #[test]
    fn weight_deserializes_from_legacy_string() {
        let def: ServiceDefinition = toml::from_str("weight = \"105\"").unwrap();
        assert_eq!(def.weight.value(), 105);
        assert_eq!(def.weight.legacy_width(), Some(3));
    }

    #[test]
    fn weight_equality_ignores_legacy_width() {
        let from_string: ServiceDefinition = toml::from_str("weight = \"20\"").unwrap();
        assert_eq!(from_string.weight, Weight::new(20));
    }

    #[test]
    fn extra_fields_round_trip_untouched() {
        let def: ServiceDefinition = toml::from_str(
            r#"
image = "example/mail"
restart = "unless-stopped"
labels = { purpose = "mail-capture" }
"#,
        )
        .unwrap();
        assert_eq!(def.extra["restart"], serde_json::json!("unless-stopped"));
        assert_eq!(
            def.extra["labels"],
            serde_json::json!({ "purpose": "mail-capture" })
        );
    }

    #[test]
    fn explicit_empty_port_bindings_differ_from_absent() {
        let absent: ServiceDefinition = toml::from_str("image = \"a\"").unwrap();
        let explicit: ServiceDefinition =
            toml::from_str("image = \"a\"\nport_bindings = {}").unwrap();
        assert!(absent.port_bindings.is_none());
        assert_eq!(explicit.port_bindings, Some(BTreeMap::new()));
    }
}
