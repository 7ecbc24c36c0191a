#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    WindowsPhone,
    Windows,
    MacOs,
    Linux,
    Unknown,
}

impl Platform {
    /// Substring heuristics over the lower-cased user agent. Check order is
    /// a fixed contract: Android before Linux (Android UAs contain both),
    /// iOS before Windows Phone, "windows phone" before "windows".
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        if ua.contains("android") {
            Self::Android
        } else if ua.contains("iphone") || ua.contains("ipad") || ua.contains("ipod") {
            Self::Ios
        } else if ua.contains("windows phone") {
            Self::WindowsPhone
        } else if ua.contains("windows") {
            Self::Windows
        } else if ua.contains("macintosh") || ua.contains("mac os x") {
            Self::MacOs
        } else if ua.contains("linux") {
            Self::Linux
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "Android",
            Self::Ios => "iOS",
            Self::WindowsPhone => "Windows Phone",
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceType {
    Smartphone,
    Tablet,
    Desktop,
}

impl DeviceType {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        if ua.contains("mobile") {
            Self::Smartphone
        } else if ua.contains("tablet") || ua.contains("ipad") {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Smartphone => "Smartphone",
            Self::Tablet => "Tablet",
            Self::Desktop => "Desktop",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Brand {
    Samsung,
    Huawei,
    Xiaomi,
    OnePlus,
    Oppo,
    Vivo,
    Apple,
    GooglePixel,
    Unknown,
}

/// Checklist order is fixed; the first matching substring wins.
const BRAND_CHECKS: &[(&str, Brand)] = &[
    ("samsung", Brand::Samsung),
    ("huawei", Brand::Huawei),
    ("xiaomi", Brand::Xiaomi),
    ("oneplus", Brand::OnePlus),
    ("oppo", Brand::Oppo),
    ("vivo", Brand::Vivo),
    ("iphone", Brand::Apple),
    ("ipad", Brand::Apple),
    ("ipod", Brand::Apple),
    ("macintosh", Brand::Apple),
    ("pixel", Brand::GooglePixel),
];

impl Brand {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        BRAND_CHECKS
            .iter()
            .find(|(needle, _)| ua.contains(needle))
            .map(|(_, brand)| *brand)
            .unwrap_or(Self::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Samsung => "Samsung",
            Self::Huawei => "Huawei",
            Self::Xiaomi => "Xiaomi",
            Self::OnePlus => "OnePlus",
            Self::Oppo => "Oppo",
            Self::Vivo => "Vivo",
            Self::Apple => "Apple",
            Self::GooglePixel => "Google Pixel",
            Self::Unknown => "Unknown",
        }
    }
}
