//! Weighted start-order resolution.
//!
//! Interdependent containers are started in weight order, lowest first, with
//! the logical service name as the deterministic tie-break. Weights are
//! compared numerically; the legacy configuration format compared them as
//! strings, which silently misorders a registry that mixes weight-string
//! widths, so string-encoded weights of unequal width still produce a
//! warning. Warnings are data for the caller to print, escalate, or ignore;
//! nothing here is an error.

use crate::service::ServiceDefinition;
use std::collections::HashMap;
use std::fmt;

/// A configuration-inconsistency warning from order resolution.
///
/// Execution continues; under the legacy string comparison the reported
/// service's start position would have been wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderWarning {
    /// Display name of the offending service.
    pub service: String,
}

impl fmt::Display for OrderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "please check the weight attribute of the {} container configuration, ordering may not work correctly",
            self.service
        )
    }
}

/// Compute the start order for a set of service definitions.
///
/// Returns every key of `services` exactly once, sorted by `(weight, name)`,
/// together with any legacy-width warnings. Output depends only on the map's
/// contents, never on its iteration order.
pub fn resolve(
    services: &HashMap<String, ServiceDefinition>,
) -> (Vec<String>, Vec<OrderWarning>) {
    let mut entries: Vec<(&String, &ServiceDefinition)> = services.iter().collect();
    entries.sort_by(|(a_key, a), (b_key, b)| {
        a.weight.cmp(&b.weight).then_with(|| a_key.cmp(b_key))
    });

    let ordered = entries.iter().map(|(key, _)| (*key).clone()).collect();

    // Legacy string-encoded weights must all share one width to sort
    // correctly under the old lexical comparison. Warn per offender against
    // the narrowest width observed, scanning in key order so repeated runs
    // agree. Integer-encoded weights carry no width and never warn.
    let mut warnings = Vec::new();
    if let Some(min_width) = services
        .values()
        .filter_map(|s| s.weight.legacy_width())
        .min()
    {
        let mut by_key: Vec<(&String, &ServiceDefinition)> = services.iter().collect();
        by_key.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (key, service) in by_key {
            let wider = service
                .weight
                .legacy_width()
                .map_or(false, |w| w > min_width);
            if wider {
                let label = if service.name.is_empty() {
                    key.clone()
                } else {
                    service.name.clone()
                };
                warnings.push(OrderWarning { service: label });
            }
        }
    }

    (ordered, warnings)
}
