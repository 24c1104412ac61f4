//! End-to-end tests for the resolution pipeline: user config in, ordered
//! start plan out.

use bantam::catalog::{self, Catalog};
use bantam::{ConfigLoader, Platform, StartPlan, UserConfig};
use std::collections::HashSet;
use std::io::Write;
use tempfile::NamedTempFile;

fn load_config(body: &str) -> UserConfig {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", body).unwrap();
    ConfigLoader::load_from_file(file.path()).unwrap()
}

#[test]
fn empty_config_resolves_to_full_default_plan() {
    let config = load_config("");
    let plan = StartPlan::resolve(Platform::Darwin, config);

    assert_eq!(plan.registry.len(), 6);
    for name in Catalog::service_names() {
        assert!(plan.registry.get(name).is_some(), "missing {}", name);
    }
    assert_eq!(plan.resolvers.len(), 1);
    assert_eq!(plan.resolvers[0].folder, "/etc/resolver");
    assert_eq!(plan.networks.len(), 1);
    assert!(plan.warnings.is_empty());
}

#[test]
fn sorted_services_always_cover_the_registry() {
    let config = load_config(
        r#"
[services."extra-helper"]
name = "extra-helper"
image = "custom/helper"
weight = 5
"#,
    );
    let plan = StartPlan::resolve(Platform::Linux, config);

    assert_eq!(plan.registry.sorted_services.len(), plan.registry.len());
    let ordered: HashSet<&String> = plan.registry.sorted_services.iter().collect();
    let keys: HashSet<&String> = plan.registry.services.keys().collect();
    assert_eq!(ordered, keys);
    // Weight 5 beats every default weight, so the extra helper starts first.
    assert_eq!(plan.registry.sorted_services[0], "extra-helper");
}

#[test]
fn partial_override_keeps_defaults_for_untouched_services() {
    let config = load_config(
        r#"
[services."amazeeio-haproxy"]
name = "my-proxy"
image = "custom/haproxy"
weight = 14
"#,
    );
    let plan = StartPlan::resolve(Platform::Linux, config);

    let proxy = plan.registry.get(catalog::HAPROXY).unwrap();
    assert_eq!(proxy.image, "custom/haproxy");
    // The override said nothing about ports, so the default bindings are
    // patched in.
    assert!(proxy.port_bindings.is_some());

    let dns = plan.registry.get(catalog::DNSMASQ).unwrap();
    assert_eq!(dns.image, "andyshinn/dnsmasq:2.78");
}

#[test]
fn mail_capture_backfill_matches_default_ports_variant() {
    let config = load_config(
        r#"
[services."mailhog.docker.amazee.io"]
name = "my-mail"
image = "custom/mailhog"
weight = 15
"#,
    );
    let plan = StartPlan::resolve(Platform::Linux, config);

    let mail = plan.registry.get(catalog::MAILHOG).unwrap();
    let variant = Catalog::default_ports_variant(catalog::MAILHOG).unwrap();
    assert_eq!(mail.port_bindings, variant.port_bindings);
    assert_eq!(mail.image, "custom/mailhog");
}

#[test]
fn defaults_off_runs_exactly_the_user_services() {
    let config = load_config(
        r#"
defaults = false

[services."only-service"]
name = "only-service"
image = "custom/only"
weight = 1
"#,
    );
    let plan = StartPlan::resolve(Platform::Linux, config);

    assert_eq!(plan.registry.len(), 1);
    assert!(plan.registry.get("only-service").is_some());
    assert!(plan.registry.get(catalog::HAPROXY).is_none());
    assert_eq!(plan.registry.sorted_services, vec!["only-service"]);
    assert!(plan.networks.is_empty());
}

#[test]
fn legacy_mixed_width_weights_surface_one_warning() {
    let config = load_config(
        r#"
defaults = false

[services."first"]
name = "first"
image = "custom/a"
weight = "1"

[services."second"]
name = "second"
image = "custom/b"
weight = "2"

[services."third"]
name = "third-service"
image = "custom/c"
weight = "30"
"#,
    );
    let plan = StartPlan::resolve(Platform::Linux, config);

    assert_eq!(plan.warnings.len(), 1);
    assert_eq!(plan.warnings[0].service, "third-service");
    // Ordering itself is numeric and unaffected by the width mismatch.
    assert_eq!(
        plan.registry.sorted_services,
        vec!["first", "second", "third"]
    );
}

#[test]
fn platform_resolver_selection_matches_host_branch() {
    let darwin = StartPlan::resolve(Platform::Darwin, UserConfig::default());
    assert_eq!(darwin.resolvers.len(), 1);
    assert_eq!(darwin.resolvers[0].folder, "/etc/resolver");

    let linux = StartPlan::resolve(Platform::Linux, UserConfig::default());
    assert_eq!(linux.resolvers.len(), 1);
    assert_eq!(linux.resolvers[0].folder, "/etc");

    let other = StartPlan::resolve(Platform::Other, UserConfig::default());
    assert!(other.resolvers.is_empty());
}

#[test]
fn weights_accept_integer_and_legacy_string_forms_together() {
    let config = load_config(
        r#"
[services."amazeeio-haproxy"]
name = "my-proxy"
image = "custom/haproxy"
weight = "14"
"#,
    );
    let plan = StartPlan::resolve(Platform::Linux, config);

    // One legacy string weight among integer defaults: no width comparison
    // is possible against integer weights, so no warning fires.
    assert!(plan.warnings.is_empty());
    let proxy = plan.registry.get(catalog::HAPROXY).unwrap();
    assert_eq!(proxy.weight.value(), 14);
}
