use serde::Deserialize;

/// Fingerprint record POSTed by the reporting page. Every field is
/// optional on the wire; missing or null values fall back to the
/// formatter's defaults. Unknown keys are ignored.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceReport {
    pub user_agent: String,
    pub browser_name: Option<String>,
    pub platform: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub screen_width: Option<u32>,
    pub screen_height: Option<u32>,
    pub effective_type: Option<String>,
    pub downlink: Option<f64>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub map_link: Option<String>,
    pub brand: Option<String>,
    pub battery_level: Option<f64>,
    pub is_charging: Option<bool>,
    pub country: Option<String>,
    pub region_code: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub org: Option<String>,
    pub device_type: Option<String>,
}
