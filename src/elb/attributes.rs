use serde::Serialize;

/// Attribute changes sent with a single modify call. Absent entries are left
/// untouched by the remote service.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_draining: Option<ConnectionDraining>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_zone_load_balancing: Option<CrossZoneLoadBalancing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_settings: Option<ConnectionSettings>,
}

impl AttributeUpdatePayload {
    pub fn is_empty(&self) -> bool {
        self.connection_draining.is_none()
            && self.cross_zone_load_balancing.is_none()
            && self.connection_settings.is_none()
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionDraining {
    pub enabled: bool,
    pub timeout: u32,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CrossZoneLoadBalancing {
    pub enabled: bool,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionSettings {
    pub idle_timeout: u32,
}
