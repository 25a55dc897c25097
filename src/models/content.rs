//! Page documents as served by the CMS.
//!
//! Every section is optional: GROQ projections return `null` for fields an
//! editor never filled in, and the composer decides what to show.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub source_currency: String,
    pub target_currency: String,
    pub rate: Decimal,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub name: String,
    pub quote: String,
    pub rating: Option<f64>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Faq {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Seo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub country: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub hero: Option<Hero>,
    pub features: Option<Vec<Feature>>,
    pub banners: Option<Vec<Banner>>,
    pub exchange_rates: Option<Vec<ExchangeRate>>,
    pub testimonials: Option<Vec<Testimonial>>,
    pub faqs: Option<Vec<Faq>>,
    pub seo: Option<Seo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOption {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub name: String,
    pub duration: Option<String>,
    pub fee: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculator {
    pub default_amount: Option<Decimal>,
    pub fee: Option<Decimal>,
    pub exchange_rate: Option<Decimal>,
    pub delivery_options: Option<Vec<DeliveryOption>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BenefitBanner {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMoneyPage {
    pub source_country: Option<String>,
    pub target_country: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub hero: Option<Hero>,
    pub calculator: Option<Calculator>,
    pub benefit_banners: Option<Vec<BenefitBanner>>,
    pub faqs: Option<Vec<Faq>>,
    pub seo: Option<Seo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Slug {
    pub current: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Option<Slug>,
    pub excerpt: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub categories: Option<Vec<Category>>,
}

/// Icons the page templates know how to draw. Unknown names from the CMS
/// resolve to [`Icon::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    Landmark,
    Shield,
    Clock,
    TrendingUp,
    BadgeCheck,
    CreditCard,
    Percent,
    Default,
}

const ICONS: [(&str, Icon); 7] = [
    ("Landmark", Icon::Landmark),
    ("Shield", Icon::Shield),
    ("Clock", Icon::Clock),
    ("TrendingUp", Icon::TrendingUp),
    ("BadgeCheck", Icon::BadgeCheck),
    ("CreditCard", Icon::CreditCard),
    ("Percent", Icon::Percent),
];

impl Icon {
    pub fn resolve(name: Option<&str>) -> Icon {
        let Some(name) = name else { return Icon::Default };
        ICONS
            .iter()
            .find(|(n, _)| *n == name.trim())
            .map(|(_, icon)| *icon)
            .unwrap_or(Icon::Default)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Landmark => "🏛",
            Icon::Shield => "🛡",
            Icon::Clock => "⏱",
            Icon::TrendingUp => "📈",
            Icon::BadgeCheck => "✅",
            Icon::CreditCard => "💳",
            Icon::Percent => "％",
            Icon::Default => "•",
        }
    }

    pub fn css_name(self) -> &'static str {
        match self {
            Icon::Landmark => "landmark",
            Icon::Shield => "shield",
            Icon::Clock => "clock",
            Icon::TrendingUp => "trending-up",
            Icon::BadgeCheck => "badge-check",
            Icon::CreditCard => "credit-card",
            Icon::Percent => "percent",
            Icon::Default => "default",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_lookup_fails_closed() {
        assert_eq!(Icon::resolve(Some("Shield")), Icon::Shield);
        assert_eq!(Icon::resolve(Some("Rocket")), Icon::Default);
        assert_eq!(Icon::resolve(None), Icon::Default);
    }

    #[test]
    fn home_page_tolerates_nulls_and_unknown_fields() {
        let doc: HomePage = serde_json::from_value(serde_json::json!({
            "country": "us",
            "hero": { "heading": "Hi", "image": { "_type": "image" } },
            "faqs": null,
            "exchangeRates": [
                { "_key": "r1", "sourceCurrency": "USD", "targetCurrency": "INR",
                  "rate": 83.5, "lastUpdated": "2024-05-01T10:00:00Z" }
            ]
        }))
        .unwrap();
        assert_eq!(doc.hero.unwrap().heading.as_deref(), Some("Hi"));
        assert!(doc.faqs.is_none());
        assert_eq!(doc.exchange_rates.unwrap()[0].rate.to_string(), "83.5");
    }

    #[test]
    fn blog_post_reads_sanity_ids() {
        let post: BlogPost = serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "title": "Tips",
            "slug": { "current": "tips" },
            "publishedAt": "2024-05-01T10:00:00Z",
            "categories": [{ "title": "Money" }]
        }))
        .unwrap();
        assert_eq!(post.id, "p1");
        assert_eq!(post.slug.unwrap().current, "tips");
    }
}
