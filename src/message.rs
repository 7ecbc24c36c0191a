use crate::detect::{Brand, DeviceType, Platform};
use crate::report::DeviceReport;
use crate::utils::{escape_md, escape_md_opt, fmt_number, resolve_or};
use chrono::{DateTime, Local};

fn text_or_unknown(value: Option<&str>) -> String {
    escape_md(resolve_or(value, "Unknown"))
}

/// Builds the notification text for one report. Caller-supplied brand,
/// platform and device type win when present; the user-agent heuristics
/// fill the gaps. Fields the page samples directly (browser, language,
/// timezone, geolocation) interpolate as-is and stay blank when absent;
/// the looked-up geo/ISP block falls back to `Unknown`. Every
/// interpolated value goes through `escape_md` exactly once; the
/// template's own labels and emoji stay literal.
///
/// The clock is passed in so the timestamp line is testable.
pub fn format_report(report: &DeviceReport, now: DateTime<Local>) -> String {
    let ua = report.user_agent.as_str();
    let device_type = escape_md(resolve_or(
        report.device_type.as_deref(),
        DeviceType::from_user_agent(ua).as_str(),
    ));
    let brand = escape_md(resolve_or(
        report.brand.as_deref(),
        Brand::from_user_agent(ua).as_str(),
    ));
    let platform = escape_md(resolve_or(
        report.platform.as_deref(),
        Platform::from_user_agent(ua).as_str(),
    ));

    let screen = match (report.screen_width, report.screen_height) {
        (Some(w), Some(h)) => escape_md(&format!("{w}x{h}")),
        _ => "Unknown".to_string(),
    };
    let speed = match report.downlink {
        Some(d) => escape_md(&format!("{} Mbps", fmt_number(d))),
        None => "Unknown".to_string(),
    };
    let battery = match report.battery_level {
        Some(level) => escape_md(&format!("{}%", fmt_number(level))),
        None => "Unknown".to_string(),
    };
    let charging = if report.is_charging == Some(true) {
        "Yes"
    } else {
        "No"
    };

    format!(
        "📱 *Device Type:* {device_type}\n\
         🏷 *Brand:* {brand}\n\
         💻 *Platform:* {platform}\n\
         🌐 *Browser:* {browser}\n\
         🧾 *User Agent:* {user_agent}\n\
         🗣 *Language:* {language}\n\
         🕑 *Timezone:* {timezone}\n\
         🖥 *Screen:* {screen}\n\
         📶 *Network Type:* {network_type}\n\
         🚀 *Network Speed:* {speed}\n\
         🔋 *Battery:* {battery}\n\
         ⚡ *Charging:* {charging}\n\
         📍 *Latitude:* {latitude}\n\
         📍 *Longitude:* {longitude}\n\
         🗺 *Map:* {map_link}\n\
         🌍 *Country:* {country}\n\
         🔖 *Region Code:* {region_code}\n\
         🏞 *Region:* {region}\n\
         🏙 *City:* {city}\n\
         🏢 *ISP:* {org}\n\
         🕒 *Time:* {time}",
        browser = escape_md_opt(report.browser_name.as_deref()),
        user_agent = escape_md(ua),
        language = escape_md_opt(report.language.as_deref()),
        timezone = escape_md_opt(report.timezone.as_deref()),
        network_type = text_or_unknown(report.effective_type.as_deref()),
        latitude = escape_md_opt(report.latitude.as_deref()),
        longitude = escape_md_opt(report.longitude.as_deref()),
        map_link = escape_md_opt(report.map_link.as_deref()),
        country = text_or_unknown(report.country.as_deref()),
        region_code = text_or_unknown(report.region_code.as_deref()),
        region = text_or_unknown(report.region.as_deref()),
        city = text_or_unknown(report.city.as_deref()),
        org = text_or_unknown(report.org.as_deref()),
        time = escape_md(&now.format("%Y-%m-%d %H:%M:%S").to_string()),
    )
}
