//! Built-in presets, one per standalone greeting service this binary replaces.

use crate::error::{GreeterError, GreeterResult};

pub const DEFAULT_VARIANT: &str = "redington";

const HELLO: &str = "Hello Redington!";

/// A named bundle of port, greeting and routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub name: &'static str,
    pub default_port: u16,
    /// Whether `PORT` from the environment may override `default_port`
    pub port_from_env: bool,
    pub greeting: &'static str,
    pub health_route: bool,
    /// First line logged once the listener is bound
    pub banner: &'static str,
}

const PRESETS: &[Variant] = &[
    Variant {
        name: "redington",
        default_port: 3000,
        port_from_env: false,
        greeting: "Hello Redington application working fine!!!",
        health_route: false,
        banner: "My Sample Application",
    },
    Variant {
        name: "hello",
        default_port: 3000,
        port_from_env: false,
        greeting: HELLO,
        health_route: false,
        banner: "Hello application",
    },
    Variant {
        name: "env",
        default_port: 3009,
        port_from_env: true,
        greeting: "Node.js Buvanesh process!",
        health_route: false,
        banner: "Node.js process",
    },
    Variant {
        name: "health",
        default_port: 3000,
        port_from_env: false,
        greeting: HELLO,
        health_route: true,
        banner: "Health check application",
    },
    Variant {
        name: "port-3001",
        default_port: 3001,
        port_from_env: false,
        greeting: HELLO,
        health_route: false,
        banner: "Hello application",
    },
    Variant {
        name: "port-3002",
        default_port: 3002,
        port_from_env: false,
        greeting: HELLO,
        health_route: false,
        banner: "Hello application",
    },
    Variant {
        name: "port-8081",
        default_port: 8081,
        port_from_env: false,
        greeting: HELLO,
        health_route: false,
        banner: "Hello application",
    },
    Variant {
        name: "port-8082",
        default_port: 8082,
        port_from_env: false,
        greeting: HELLO,
        health_route: false,
        banner: "Hello application",
    },
    Variant {
        name: "empty",
        default_port: 3000,
        port_from_env: false,
        greeting: "",
        health_route: false,
        banner: "My Sample Application",
    },
];

impl Variant {
    pub fn all() -> &'static [Variant] {
        PRESETS
    }

    /// Case-insensitive lookup by preset name
    pub fn lookup(name: &str) -> GreeterResult<&'static Variant> {
        let name = name.trim();
        PRESETS
            .iter()
            .find(|variant| variant.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| GreeterError::UnknownVariant(name.to_string()))
    }

    /// Pick the listening port from a raw `PORT` value.
    ///
    /// Only presets with `port_from_env` look at the value. Anything that is
    /// not a valid port number falls back to `default_port`.
    pub fn resolve_port(&self, raw: Option<&str>) -> u16 {
        if !self.port_from_env {
            return self.default_port;
        }

        match raw.map(str::trim) {
            Some(value) if !value.is_empty() => match value.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    tracing::warn!(
                        "Ignoring invalid PORT {:?}, using {}",
                        value,
                        self.default_port
                    );
                    self.default_port
                }
            },
            _ => self.default_port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_utils::CapturedLogs;

    #[test]
    fn test_default_variant_exists() {
        let variant = Variant::lookup(DEFAULT_VARIANT).unwrap();
        assert_eq!(variant.default_port, 3000);
        assert_eq!(variant.greeting, "Hello Redington application working fine!!!");
        assert!(!variant.health_route);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let variant = Variant::lookup("  Port-8081 ").unwrap();
        assert_eq!(variant.name, "port-8081");
        assert_eq!(variant.default_port, 8081);
    }

    #[test]
    fn test_lookup_unknown() {
        let err = Variant::lookup("jenkins").unwrap_err();
        assert!(matches!(err, GreeterError::UnknownVariant(name) if name == "jenkins"));
    }

    #[test]
    fn test_preset_names_are_unique() {
        let names: HashSet<_> = Variant::all().iter().map(|v| v.name).collect();
        assert_eq!(names.len(), Variant::all().len());
    }

    #[test]
    fn test_only_health_preset_mounts_health_route() {
        let with_health: Vec<_> = Variant::all()
            .iter()
            .filter(|v| v.health_route)
            .map(|v| v.name)
            .collect();
        assert_eq!(with_health, vec!["health"]);
    }

    #[test]
    fn test_env_preset_uses_valid_port() {
        let variant = Variant::lookup("env").unwrap();
        assert_eq!(variant.resolve_port(Some("4567")), 4567);
        assert_eq!(variant.resolve_port(Some(" 8080 ")), 8080);
    }

    #[test]
    fn test_env_preset_falls_back_to_3009() {
        let variant = Variant::lookup("env").unwrap();
        assert_eq!(variant.resolve_port(None), 3009);
        assert_eq!(variant.resolve_port(Some("")), 3009);
        assert_eq!(variant.resolve_port(Some("invalid")), 3009);
        assert_eq!(variant.resolve_port(Some("70000")), 3009);
        assert_eq!(variant.resolve_port(Some("-1")), 3009);
    }

    #[test]
    fn test_fixed_port_presets_ignore_env() {
        for variant in Variant::all().iter().filter(|v| !v.port_from_env) {
            assert_eq!(
                variant.resolve_port(Some("4567")),
                variant.default_port,
                "variant {}",
                variant.name
            );
        }
    }

    #[test]
    fn test_invalid_port_logs_warning() {
        let logs = CapturedLogs::default();
        let variant = Variant::lookup("env").unwrap();

        let port = tracing::subscriber::with_default(logs.subscriber(), || {
            variant.resolve_port(Some("notaport"))
        });

        assert_eq!(port, 3009);
        let output = logs.contents();
        assert!(output.contains("WARN"), "{}", output);
        assert!(output.contains("Ignoring invalid PORT \"notaport\""), "{}", output);
    }

    #[test]
    fn test_valid_port_logs_nothing() {
        let logs = CapturedLogs::default();
        let variant = Variant::lookup("env").unwrap();

        tracing::subscriber::with_default(logs.subscriber(), || {
            variant.resolve_port(Some("4567"))
        });

        assert!(logs.contents().is_empty());
    }
}
