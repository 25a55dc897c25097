use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub currency: Currency,
    pub is_available: bool,
}

impl Country {
    /// Copy of the seed entry with the availability flag taken from the CMS.
    pub fn with_availability(&self, is_available: bool) -> Country {
        Country { is_available, ..self.clone() }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.code)
    }

    pub fn transfer_path(&self, target: &Country) -> String {
        format!("/{}/send-to/{}", self.code, target.code)
    }
}

const fn entry(
    code: &'static str,
    name: &'static str,
    flag: &'static str,
    currency: (&'static str, &'static str, &'static str),
) -> Country {
    Country {
        code,
        name,
        flag,
        currency: Currency { code: currency.0, symbol: currency.1, name: currency.2 },
        is_available: true,
    }
}

pub static COUNTRIES: [Country; 10] = [
    entry("us", "United States", "🇺🇸", ("USD", "$", "US Dollar")),
    entry("in", "India", "🇮🇳", ("INR", "₹", "Indian Rupee")),
    entry("gb", "United Kingdom", "🇬🇧", ("GBP", "£", "British Pound")),
    entry("ca", "Canada", "🇨🇦", ("CAD", "C$", "Canadian Dollar")),
    entry("au", "Australia", "🇦🇺", ("AUD", "A$", "Australian Dollar")),
    entry("eu", "Europe", "🇪🇺", ("EUR", "€", "Euro")),
    entry("mx", "Mexico", "🇲🇽", ("MXN", "Mex$", "Mexican Peso")),
    entry("ph", "Philippines", "🇵🇭", ("PHP", "₱", "Philippine Peso")),
    entry("sg", "Singapore", "🇸🇬", ("SGD", "S$", "Singapore Dollar")),
    entry("ae", "United Arab Emirates", "🇦🇪", ("AED", "د.إ", "UAE Dirham")),
];

pub const DEFAULT_COUNTRY: &str = "us";

pub fn lookup(code: &str) -> Option<&'static Country> {
    let code = code.trim();
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Destination the home page quotes by default: India, or the first other
/// registered country when the visitor is in India.
pub fn default_target(source: &Country) -> &'static Country {
    COUNTRIES
        .iter()
        .filter(|c| c.code != source.code)
        .find(|c| c.code == "in")
        .or_else(|| COUNTRIES.iter().find(|c| c.code != source.code))
        .unwrap_or(&COUNTRIES[0])
}

/// ISO 4217 minor units used when rounding displayed amounts.
pub fn minor_units(currency_code: &str) -> u32 {
    match currency_code.to_ascii_uppercase().as_str() {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" | "UGX" => 0,
        "BHD" | "KWD" | "OMR" | "JOD" | "TND" => 3,
        _ => 2,
    }
}

/// First `Accept-Language` region subtag naming a registered country
/// (`en-GB,en;q=0.8` → `gb`), else the default country.
pub fn from_accept_language(header: Option<&str>) -> &'static Country {
    header
        .into_iter()
        .flat_map(|h| h.split(','))
        .filter_map(|lang| {
            let tag = lang.split(';').next()?.trim();
            let region = tag.split(['-', '_']).nth(1)?;
            lookup(region)
        })
        .next()
        .or_else(|| lookup(DEFAULT_COUNTRY))
        .unwrap_or(&COUNTRIES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(lookup("US"), lookup("us"));
        assert_eq!(lookup("Gb").map(|c| c.name), Some("United Kingdom"));
    }

    #[test]
    fn lookup_unknown_is_none() {
        assert!(lookup("zz").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn minor_units_follow_iso() {
        assert_eq!(minor_units("INR"), 2);
        assert_eq!(minor_units("jpy"), 0);
        assert_eq!(minor_units("KWD"), 3);
    }

    #[test]
    fn accept_language_picks_first_registered_region() {
        assert_eq!(from_accept_language(Some("fr-FR,en-GB;q=0.8")).code, "gb");
        assert_eq!(from_accept_language(Some("en")).code, DEFAULT_COUNTRY);
        assert_eq!(from_accept_language(None).code, DEFAULT_COUNTRY);
    }

    #[test]
    fn default_target_is_never_the_source() {
        assert_eq!(default_target(lookup("us").unwrap()).code, "in");
        assert_eq!(default_target(lookup("gb").unwrap()).code, "in");
        assert_eq!(default_target(lookup("in").unwrap()).code, "us");
        for c in COUNTRIES.iter() {
            assert_ne!(default_target(c).code, c.code);
        }
    }

    #[test]
    fn transfer_paths_use_lowercase_codes() {
        let us = lookup("US").unwrap();
        assert_eq!(us.transfer_path(lookup("IN").unwrap()), "/us/send-to/in");
        assert!(!us.with_availability(false).is_available);
    }
}
