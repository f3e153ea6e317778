use crate::markers::LatLng;
use crate::shared::types::Trend;

/// Thousands separated with commas: 1247 -> "1,247".
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Share in `[0, 1]` as a whole percentage, keeping one decimal when it matters.
pub fn format_share(share: f64) -> String {
    let pct = (share * 100.0).clamp(0.0, 100.0);
    if (pct - pct.round()).abs() < 0.05 {
        format!("{}%", pct.round() as i32)
    } else {
        format!("{:.1}%", pct)
    }
}

pub fn format_trend(trend: Trend, value: u32) -> String {
    match trend {
        Trend::Up => format!("+{}%", value),
        Trend::Down => format!("-{}%", value),
    }
}

pub fn format_lat_lng(p: LatLng) -> String {
    let ns = if p.lat >= 0.0 { 'N' } else { 'S' };
    let ew = if p.lng >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}°{}, {:.4}°{}", p.lat.abs(), ns, p.lng.abs(), ew)
}
