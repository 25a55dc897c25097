//! Built-in content shown when the CMS cannot be reached or has no document.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::content::{
    Banner, BenefitBanner, BlogPost, Calculator, Category, DeliveryOption, ExchangeRate, Faq,
    Feature, Hero, HomePage, Seo, SendMoneyPage, Slug, Testimonial,
};
use crate::models::country::{self, Country};

/// Display rates out of USD shown while the CMS is unavailable.
const USD_RATES: [(&str, &str, Decimal); 4] = [
    ("rate1", "INR", dec!(83.5)),
    ("rate2", "GBP", dec!(0.785)),
    ("rate3", "EUR", dec!(0.92)),
    ("rate4", "PHP", dec!(57.23)),
];

/// Demo rate for a currency pair. Only pairs listed in the demo table have one.
pub fn rate_for(source_currency: &str, target_currency: &str) -> Option<Decimal> {
    if !source_currency.eq_ignore_ascii_case("USD") {
        return None;
    }
    USD_RATES
        .iter()
        .find(|(_, code, _)| code.eq_ignore_ascii_case(target_currency))
        .map(|(_, _, rate)| *rate)
}

fn faq(key: &str, question: &str, answer: &str) -> Faq {
    Faq { key: key.into(), question: question.into(), answer: answer.into() }
}

fn feature(title: &str, description: &str, icon: &str) -> Feature {
    Feature { title: title.into(), description: description.into(), icon: Some(icon.into()) }
}

fn rate(key: &str, target: &str, rate: Decimal, now: DateTime<Utc>) -> ExchangeRate {
    ExchangeRate {
        key: key.into(),
        source_currency: "USD".into(),
        target_currency: target.into(),
        rate,
        last_updated: Some(now),
    }
}

fn testimonial(key: &str, name: &str, quote: &str, rating: f64, location: &str) -> Testimonial {
    Testimonial {
        key: key.into(),
        name: name.into(),
        quote: quote.into(),
        rating: Some(rating),
        location: Some(location.into()),
    }
}

pub fn home_page(country: &Country, now: DateTime<Utc>) -> HomePage {
    let target = country::default_target(country);
    HomePage {
        country: Some(country.code.to_string()),
        title: Some("Fast & Secure Money Transfers | Kyro".into()),
        subtitle: Some("Send money globally with competitive rates and low fees".into()),
        hero: Some(Hero {
            heading: Some("Send Money Abroad Quickly & Securely".into()),
            subheading: Some(
                "Transfer money to friends and family worldwide with great rates and low fees".into(),
            ),
            cta_text: Some("Get Started".into()),
            cta_link: Some(country.transfer_path(target)),
        }),
        features: Some(vec![
            feature(
                "Trusted Worldwide",
                "Over 10 million customers trust us for international transfers",
                "Landmark",
            ),
            feature(
                "Bank-Level Security",
                "Your money and data are protected with advanced encryption",
                "Shield",
            ),
            feature("Fast Transfers", "Money arrives within minutes for most destinations", "Clock"),
            feature(
                "Competitive Rates",
                "Get the best exchange rates with low, transparent fees",
                "TrendingUp",
            ),
        ]),
        banners: Some(vec![
            Banner {
                key: "banner1".into(),
                title: "No Hidden Fees".into(),
                subtitle: "We're transparent about our fees. What you see is what you pay.".into(),
                cta_text: Some("Learn More".into()),
                cta_link: Some("#calculator".into()),
                background_color: Some("blue".into()),
            },
            Banner {
                key: "banner2".into(),
                title: format!("Send Money to {}", target.name),
                subtitle: "Great rates, fast delivery, and multiple payout options.".into(),
                cta_text: Some("Send Now".into()),
                cta_link: Some(country.transfer_path(target)),
                background_color: Some("green".into()),
            },
        ]),
        exchange_rates: Some(USD_RATES.iter().map(|(key, code, r)| rate(key, code, *r, now)).collect()),
        testimonials: Some(vec![
            testimonial(
                "testimonial1",
                "Sarah Johnson",
                "I've been using Kyro for sending money to my family in India for over a year now. The transfers are consistently fast, and the rates are better than my bank.",
                5.0,
                "California, USA",
            ),
            testimonial(
                "testimonial2",
                "David Chen",
                "The app is so easy to use. I can send money to my parents in minutes, and they receive it directly in their bank account. Highly recommend!",
                5.0,
                "New York, USA",
            ),
            testimonial(
                "testimonial3",
                "Maria Rodriguez",
                "Customer service is excellent. When I had an issue with my transfer, they resolved it immediately. The best money transfer service I've used.",
                4.0,
                "Texas, USA",
            ),
        ]),
        faqs: Some(vec![
            faq(
                "faq1",
                "How long does it take to send money?",
                "Most transfers arrive within minutes, though some destinations and payment methods may take 1-2 business days.",
            ),
            faq(
                "faq2",
                "What are the fees for sending money?",
                "Our fees depend on the amount sent, destination country, and payment method. You'll always see the exact fee before confirming your transfer.",
            ),
            faq(
                "faq3",
                "Is Kyro safe to use?",
                "Yes, Kyro uses bank-level encryption and security protocols to protect your data and money. We're also regulated in all countries where we operate.",
            ),
            faq(
                "faq4",
                "What payment methods can I use?",
                "You can pay for transfers using bank transfers, debit cards, credit cards, and digital wallets depending on your country.",
            ),
            faq(
                "faq5",
                "How do I track my transfer?",
                "Once you send money, you'll receive updates via email and SMS. You can also track your transfer in real-time through our app or website.",
            ),
        ]),
        seo: Some(Seo {
            title: Some("Fast & Secure Money Transfers | Kyro".into()),
            description: Some(
                "Send money globally with competitive rates and low fees. Fast, secure international transfers to 100+ countries.".into(),
            ),
            keywords: Some(vec![
                "money transfer".into(),
                "send money".into(),
                "international transfer".into(),
                "remittance".into(),
            ]),
        }),
    }
}

pub fn blog_posts(now: DateTime<Utc>) -> Vec<BlogPost> {
    let post = |id: &str, title: &str, slug: &str, excerpt: &str, age_days: i64, cats: [&str; 2]| {
        BlogPost {
            id: id.into(),
            title: title.into(),
            slug: Some(Slug { current: slug.into() }),
            excerpt: Some(excerpt.into()),
            published_at: Some(now - Duration::days(age_days)),
            categories: Some(cats.iter().map(|c| Category { title: (*c).into() }).collect()),
        }
    };
    vec![
        post(
            "blog1",
            "5 Tips for Saving Money on International Transfers",
            "saving-money-international-transfers",
            "Learn how to reduce fees and get better exchange rates when sending money abroad.",
            0,
            ["Money Tips", "International Transfers"],
        ),
        post(
            "blog2",
            "Understanding Currency Fluctuations: What Affects Your Transfer Rate",
            "understanding-currency-fluctuations",
            "An in-depth look at how global events and market forces impact currency exchange rates.",
            2,
            ["Finance", "Currency Exchange"],
        ),
        post(
            "blog3",
            "The Future of International Money Transfers",
            "future-international-money-transfers",
            "How technology is transforming the way we send money across borders.",
            5,
            ["Technology", "Industry Trends"],
        ),
    ]
}

/// Demo pair page with copy rewritten for the requested countries. The rate
/// comes from the demo table and is absent for pairs it does not list.
pub fn send_money_page(source: &Country, target: &Country) -> SendMoneyPage {
    let route = format!("{} to {}", source.name, target.name);
    SendMoneyPage {
        source_country: Some(source.code.to_string()),
        target_country: Some(target.code.to_string()),
        title: Some(format!("Send Money from {route} | Kyro")),
        subtitle: Some(format!("Fast, secure money transfers from {route}")),
        hero: Some(Hero {
            heading: Some(format!("Send Money from {route}")),
            subheading: Some("Fast transfers with great exchange rates and low fees".into()),
            cta_text: Some("Get Started".into()),
            cta_link: Some("#calculator".into()),
        }),
        calculator: Some(Calculator {
            default_amount: Some(dec!(1000)),
            fee: Some(dec!(3.99)),
            exchange_rate: rate_for(source.currency.code, target.currency.code),
            delivery_options: Some(vec![
                DeliveryOption {
                    key: "option1".into(),
                    name: "Bank Transfer".into(),
                    duration: Some("Within 24 hours".into()),
                    fee: Some(dec!(3.99)),
                },
                DeliveryOption {
                    key: "option2".into(),
                    name: "Cash Pickup".into(),
                    duration: Some("Within 30 minutes".into()),
                    fee: Some(dec!(4.99)),
                },
                DeliveryOption {
                    key: "option3".into(),
                    name: "Mobile Wallet".into(),
                    duration: Some("Instant".into()),
                    fee: Some(dec!(2.99)),
                },
            ]),
        }),
        benefit_banners: Some(vec![
            BenefitBanner {
                key: "benefit1".into(),
                title: "Guaranteed Best Rates".into(),
                description: "We match or beat any competitor's exchange rate".into(),
                icon: Some("Percent".into()),
            },
            BenefitBanner {
                key: "benefit2".into(),
                title: "Fast Delivery".into(),
                description: "Money typically arrives within minutes".into(),
                icon: Some("Clock".into()),
            },
            BenefitBanner {
                key: "benefit3".into(),
                title: "Secure Transfers".into(),
                description: "Bank-level encryption protects your money".into(),
                icon: Some("BadgeCheck".into()),
            },
            BenefitBanner {
                key: "benefit4".into(),
                title: "Multiple Payment Options".into(),
                description: "Pay with bank transfer, card, or digital wallet".into(),
                icon: Some("CreditCard".into()),
            },
        ]),
        faqs: Some(vec![
            faq(
                "faq1",
                &format!("How long does it take to send money from {route}?"),
                "Most transfers arrive within minutes to a few hours. Bank transfers may take up to 24 hours during business days.",
            ),
            faq(
                "faq2",
                "What's the maximum amount I can send?",
                "You can send up to $10,000 per transaction and up to $30,000 per month, depending on verification level.",
            ),
            faq(
                "faq3",
                &format!("What information do I need to send money to {}?", target.name),
                "You'll need your recipient's full name and bank account details for bank transfers, or their mobile number for wallet transfers.",
            ),
            faq("faq4", "Is there a minimum amount I can send?", "The minimum transfer amount is $10 or equivalent."),
            faq(
                "faq5",
                "Are there any documents required to send money?",
                "For amounts over $1,000, you may need to provide ID verification and information about the source of funds.",
            ),
        ]),
        seo: Some(Seo {
            title: Some(format!("Send Money from {route} | Kyro")),
            description: Some(format!(
                "Fast and secure money transfers from {route} with competitive exchange rates and low fees."
            )),
            keywords: None,
        }),
    }
}
