// ============================================================================
// Module : format
// ============================================================================
// Formatage des valeurs pour l'affichage :
// - montants en devise (style en-US, sans décimales)
// - nombres simples (séparateur de milliers)
// - horodatages ISO-8601 en temps relatif ("5m ago")
//
// Toutes les fonctions sont pures : le "maintenant" est passé en paramètre
// pour rester testable.
// ============================================================================

use chrono::{DateTime, NaiveDateTime, Utc};

/// Texte affiché quand un horodatage ne peut pas être parsé
pub const UNKNOWN_TIME: &str = "unknown";

/// Symboles utilisés en en-US ; les autres devises affichent leur code ISO
fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        "CNY" => Some("CN¥"),
        _ => None,
    }
}

/// Insère une virgule tous les trois chiffres : 1234567 → "1,234,567"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formate un montant, sans décimales : (1500.75, "USD") → "$1,501"
///
/// CONCEPT : f64::round arrondit au plus loin de zéro (1500.5 → 1501),
/// comme le formatage monétaire des navigateurs.
///
/// Devise sans symbole connu : "IRR 1,501" (espace insécable).
pub fn format_currency(amount: f64, currency: &str) -> String {
    let code = currency.trim().to_uppercase();
    let rounded = amount.round();
    let digits = group_thousands(rounded.abs() as u64);

    let body = match currency_symbol(&code) {
        Some(symbol) => format!("{}{}", symbol, digits),
        None => format!("{}\u{a0}{}", code, digits),
    };

    // -0.4 arrondit à -0.0 : le signe est conservé ("-$0")
    if rounded.is_sign_negative() && amount < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Formate un nombre sans unité : 3 décimales au plus, zéros finaux retirés
///
/// 1234.5 → "1,234.5", 2.0 → "2", 0.12345 → "0.123"
pub fn format_number(value: f64) -> String {
    let scaled = (value.abs() * 1000.0).round() as u64;
    let integer = scaled / 1000;
    let fraction = scaled % 1000;

    let mut out = group_thousands(integer);
    if fraction > 0 {
        let fraction = format!("{:03}", fraction);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }

    if value < 0.0 && scaled > 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Parse un horodatage ISO-8601
///
/// Accepte RFC 3339 ("2024-05-01T10:00:00Z", "...+02:00") et, à défaut,
/// une date sans fuseau interprétée en UTC.
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    let timestamp = timestamp.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Temps écoulé depuis `timestamp`, par paliers arrondis
///
/// - < 60 secondes : "42s ago"
/// - < 60 minutes  : "5m ago"
/// - < 24 heures   : "3h ago"
/// - sinon         : "2d ago"
///
/// Un horodatage dans le futur est ramené à "0s ago".
pub fn format_relative_time(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(value) = parse_timestamp(timestamp) else {
        return UNKNOWN_TIME.to_string();
    };

    let elapsed_ms = (now - value).num_milliseconds() as f64;
    let seconds = (elapsed_ms / 1000.0).round().max(0.0);
    if seconds < 60.0 {
        return format!("{}s ago", seconds as i64);
    }

    let minutes = (seconds / 60.0).round();
    if minutes < 60.0 {
        return format!("{}m ago", minutes as i64);
    }

    let hours = (minutes / 60.0).round();
    if hours < 24.0 {
        return format!("{}h ago", hours as i64);
    }

    let days = (hours / 24.0).round();
    format!("{}d ago", days as i64)
}

/// Raccourci : temps relatif par rapport à l'heure courante
pub fn format_relative_time_now(timestamp: &str) -> String {
    format_relative_time(timestamp, Utc::now())
}

// ============================================================================
// Tests unitaires
// ============================================================================
