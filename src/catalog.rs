//! Built-in default catalog.
//!
//! Baseline definitions for the six known services, the per-platform resolver
//! stubs, and the default network. Pure data keyed off the host platform; no
//! I/O and no side effects. The registry builder decides which of these
//! actually make it into a run's registry.

use crate::network::NetworkDefinition;
use crate::platform::Platform;
use crate::resolver::ResolverDefinition;
use crate::service::{ServiceDefinition, Weight};
use std::collections::{BTreeMap, HashMap};

pub const SSH_AGENT: &str = "amazeeio-ssh-agent";
pub const SSH_AGENT_ADD_KEY: &str = "amazeeio-ssh-agent-add-key";
pub const SSH_AGENT_SHOW_KEYS: &str = "amazeeio-ssh-agent-show-keys";
pub const DNSMASQ: &str = "amazeeio-dnsmasq";
pub const HAPROXY: &str = "amazeeio-haproxy";
pub const MAILHOG: &str = "mailhog.docker.amazee.io";

pub const DEFAULT_NETWORK: &str = "amazeeio-network";

/// Development domain the resolver stubs redirect to the local nameserver.
pub const DEV_DOMAIN: &str = "docker.amazee.io";

/// The built-in defaults for one platform.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub resolvers: Vec<ResolverDefinition>,
    pub services: HashMap<String, ServiceDefinition>,
    pub default_network: NetworkDefinition,
}

impl Catalog {
    /// Build the defaults for the given platform. Exactly one resolver branch
    /// fires; unsupported platforms get an empty resolver set rather than an
    /// error.
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            resolvers: resolvers_for(platform),
            services: HashMap::from([
                (SSH_AGENT_SHOW_KEYS.to_string(), ssh_key_lister()),
                (SSH_AGENT_ADD_KEY.to_string(), ssh_key_adder()),
                (DNSMASQ.to_string(), dnsmasq()),
                (HAPROXY.to_string(), haproxy()),
                (MAILHOG.to_string(), mailhog()),
                (SSH_AGENT.to_string(), ssh_agent()),
            ]),
            default_network: NetworkDefinition {
                name: DEFAULT_NETWORK.to_string(),
                services: vec![HAPROXY.to_string()],
            },
        }
    }

    /// The logical names the catalog always provides, in no particular order.
    pub fn service_names() -> [&'static str; 6] {
        [
            SSH_AGENT_SHOW_KEYS,
            SSH_AGENT_ADD_KEY,
            DNSMASQ,
            HAPROXY,
            MAILHOG,
            SSH_AGENT,
        ]
    }

    /// The "default ports" variant for services that must always expose a
    /// usable port. `None` for every other service.
    pub fn default_ports_variant(name: &str) -> Option<ServiceDefinition> {
        match name {
            HAPROXY => Some(haproxy_with_default_ports()),
            MAILHOG => Some(mailhog_with_default_ports()),
            _ => None,
        }
    }
}

fn resolvers_for(platform: Platform) -> Vec<ResolverDefinition> {
    match platform {
        Platform::Darwin => vec![ResolverDefinition {
            data: "# Generated by bantam\nnameserver 127.0.0.1\nport 6053\n".to_string(),
            file: DEV_DOMAIN.to_string(),
            folder: "/etc/resolver".to_string(),
            name: "MacOS Resolver".to_string(),
        }],
        Platform::Linux => vec![ResolverDefinition {
            data: "nameserver 127.0.0.1 # added by bantam".to_string(),
            file: "resolv.conf".to_string(),
            folder: "/etc".to_string(),
            name: "Linux Resolver".to_string(),
        }],
        Platform::Other => Vec::new(),
    }
}

fn ssh_agent() -> ServiceDefinition {
    ServiceDefinition {
        name: "amazeeio-ssh-agent".to_string(),
        weight: Weight::new(10),
        image: "amazeeio/ssh-agent".to_string(),
        ..Default::default()
    }
}

// One-shot action, not a long-running container. The execution engine reads
// that classification out of the opaque payload; the core does not.
fn ssh_key_adder() -> ServiceDefinition {
    ServiceDefinition {
        name: "amazeeio-ssh-agent-add-key".to_string(),
        weight: Weight::new(31),
        image: "amazeeio/ssh-agent".to_string(),
        command: vec!["ssh-add".to_string(), "/root/.ssh/id_rsa".to_string()],
        extra: BTreeMap::from([("one_shot".to_string(), serde_json::json!(true))]),
        ..Default::default()
    }
}

fn ssh_key_lister() -> ServiceDefinition {
    ServiceDefinition {
        name: "amazeeio-ssh-agent-show-keys".to_string(),
        weight: Weight::new(32),
        image: "amazeeio/ssh-agent".to_string(),
        command: vec!["ssh-add".to_string(), "-l".to_string()],
        extra: BTreeMap::from([("one_shot".to_string(), serde_json::json!(true))]),
        ..Default::default()
    }
}

fn dnsmasq() -> ServiceDefinition {
    ServiceDefinition {
        name: "amazeeio-dnsmasq".to_string(),
        weight: Weight::new(13),
        image: "andyshinn/dnsmasq:2.78".to_string(),
        command: vec![
            "-A".to_string(),
            format!("/{}/127.0.0.1", DEV_DOMAIN),
        ],
        port_bindings: Some(BTreeMap::from([(
            "53/udp".to_string(),
            "6053".to_string(),
        )])),
        ..Default::default()
    }
}

fn haproxy() -> ServiceDefinition {
    ServiceDefinition {
        name: "amazeeio-haproxy".to_string(),
        weight: Weight::new(14),
        image: "amazeeio/haproxy".to_string(),
        mounts: vec!["/var/run/docker.sock:/tmp/docker.sock".to_string()],
        ..Default::default()
    }
}

fn haproxy_with_default_ports() -> ServiceDefinition {
    ServiceDefinition {
        port_bindings: Some(BTreeMap::from([("80/tcp".to_string(), "80".to_string())])),
        ..haproxy()
    }
}

fn mailhog() -> ServiceDefinition {
    ServiceDefinition {
        name: "mailhog.docker.amazee.io".to_string(),
        weight: Weight::new(15),
        image: "mailhog/mailhog".to_string(),
        env: vec![
            "MH_UI_BIND_ADDR=0.0.0.0:80".to_string(),
            "MH_API_BIND_ADDR=0.0.0.0:80".to_string(),
        ],
        ..Default::default()
    }
}

fn mailhog_with_default_ports() -> ServiceDefinition {
    ServiceDefinition {
        port_bindings: Some(BTreeMap::from([(
            "1025/tcp".to_string(),
            "1025".to_string(),
        )])),
        ..mailhog()
    }
}
