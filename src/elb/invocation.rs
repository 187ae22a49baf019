/// Option values for one run, frozen after argument parsing.
///
/// Presence flags are `false` when they were not given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationConfig {
    pub enable_connection_draining: bool,
    pub disable_connection_draining: bool,
    pub connection_draining_timeout: u32,
    pub enable_cross_zone_balancing: bool,
    pub disable_cross_zone_balancing: bool,
    pub connection_idle_timeout: Option<u32>,
    pub availability_zones: Vec<String>,
    /// Every positional argument; a valid run has exactly one.
    pub load_balancers: Vec<String>,
}

impl InvocationConfig {
    pub fn target(&self) -> Option<&str> {
        match self.load_balancers.as_slice() {
            [name] => Some(name.as_str()),
            _ => None,
        }
    }
}

/// Behaviour that changed between releases of the command, made explicit.
///
/// The default matches the newer behaviour: availability zones are optional and
/// no idle timeout is sent unless one is asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Policy {
    pub require_availability_zone: bool,
    /// Sent as `ConnectionSettings.IdleTimeout` when no idle timeout is given.
    pub default_idle_timeout: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_requires_exactly_one() {
        let mut config = InvocationConfig::default();
        assert_eq!(config.target(), None);

        config.load_balancers = vec!["lb-1".into()];
        assert_eq!(config.target(), Some("lb-1"));

        config.load_balancers.push("lb-2".into());
        assert_eq!(config.target(), None);
    }
}
