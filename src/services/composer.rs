//! Turns fetched (or demo) documents into the sections a page shows.
//!
//! A section whose list is missing or empty comes out as `None` and the view
//! leaves it out; nothing here fails a page.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::models::content::{
    Banner, BlogPost, DeliveryOption, ExchangeRate, Faq, Hero, HomePage, Icon, SendMoneyPage,
    Testimonial,
};
use crate::models::country::{self, Country, Currency};
use crate::models::demo;
use crate::models::quote::{quote, QuoteError};
use crate::utils::format;

const BRAND: &str = "Kyro";

/// Request-scoped inputs shared by every section of one render.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub source: &'static Country,
    pub now: DateTime<Utc>,
    /// Send amount typed by the visitor, overriding the document default.
    pub amount: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub heading: String,
    pub subheading: String,
    pub cta_text: String,
    pub cta_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconItem {
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateView {
    pub source_currency: String,
    pub target_currency: String,
    pub rate: String,
    pub updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryView {
    pub name: String,
    pub duration: Option<String>,
    pub fee: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogTeaser {
    pub title: String,
    pub href: String,
    pub excerpt: Option<String>,
    pub categories: Vec<String>,
    pub published: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorView {
    pub source: Currency,
    pub target: Currency,
    pub target_country: &'static str,
    pub amount: Decimal,
    pub amount_display: String,
    pub fee_display: String,
    pub rate_label: String,
    /// Formatted receive amount, or the reason none can be shown.
    pub receive: Result<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub title: String,
    pub source: &'static Country,
    pub hero: HeroView,
    pub calculator: CalculatorView,
    pub features: Option<Vec<IconItem>>,
    pub banners: Option<Vec<Banner>>,
    pub exchange_rates: Option<Vec<RateView>>,
    pub testimonials: Option<Vec<Testimonial>>,
    pub faqs: Option<Vec<Faq>>,
    pub blog_posts: Option<Vec<BlogTeaser>>,
    pub demo_content: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendMoneyView {
    pub title: String,
    pub source: &'static Country,
    pub target: &'static Country,
    pub hero: HeroView,
    pub rate_display: String,
    pub calculator: CalculatorView,
    pub benefits: Option<Vec<IconItem>>,
    pub delivery_options: Option<Vec<DeliveryView>>,
    pub faqs: Option<Vec<Faq>>,
    pub demo_content: bool,
}

fn non_empty<T>(items: Option<Vec<T>>) -> Option<Vec<T>> {
    items.filter(|v| !v.is_empty())
}

fn pick(value: Option<String>, default: impl FnOnce() -> String) -> String {
    value.filter(|s| !s.trim().is_empty()).unwrap_or_else(default)
}

fn hero(hero: Option<Hero>, default: HeroView) -> HeroView {
    let hero = hero.unwrap_or_default();
    HeroView {
        heading: pick(hero.heading, || default.heading),
        subheading: pick(hero.subheading, || default.subheading),
        cta_text: pick(hero.cta_text, || default.cta_text),
        cta_link: pick(hero.cta_link, || default.cta_link),
    }
}

/// Calculator figures for one pair. Without a rate no receive amount is shown.
pub fn calculator(
    source: &Country,
    target: &'static Country,
    amount: Decimal,
    rate: Option<Decimal>,
    fee: Decimal,
) -> CalculatorView {
    let src = &source.currency;
    let dst = &target.currency;
    let src_units = country::minor_units(src.code);
    let dst_units = country::minor_units(dst.code);

    let receive = match rate.map(|rate| quote(amount, rate, fee)) {
        None => Err(format!("No {} to {} rate is available right now", src.code, dst.code)),
        Some(Ok(q)) => Ok(format::money(q.receive_rounded(dst_units), dst.symbol, dst_units)),
        Some(Err(QuoteError::FeeExceedsAmount { fee, .. })) => Err(format!(
            "Amount must cover the {} fee",
            format::money(fee, src.symbol, src_units)
        )),
        Some(Err(e)) => Err(format!("Cannot calculate: {e}")),
    };
    let rate_label = match rate {
        Some(rate) => format!("1 {} = {} {}", src.code, format::rate(rate, 2), dst.code),
        None => "Unavailable".to_string(),
    };

    CalculatorView {
        source: src.clone(),
        target: dst.clone(),
        target_country: target.code,
        amount,
        amount_display: format::money(amount, src.symbol, src_units),
        fee_display: format::money(fee, src.symbol, src_units),
        rate_label,
        receive,
    }
}

fn icon_items<T>(items: Option<Vec<T>>, f: impl Fn(T) -> IconItem) -> Option<Vec<IconItem>> {
    non_empty(items).map(|v| v.into_iter().map(f).collect())
}

fn rate_view(r: ExchangeRate, now: DateTime<Utc>) -> RateView {
    RateView {
        source_currency: r.source_currency,
        target_currency: r.target_currency,
        rate: format::rate(r.rate, 4),
        updated: r.last_updated.map(|t| format::time_ago(t, now)),
    }
}

fn blog_teaser(p: BlogPost, now: DateTime<Utc>) -> BlogTeaser {
    BlogTeaser {
        href: p
            .slug
            .map(|s| format!("/blog/{}", s.current))
            .unwrap_or_else(|| format!("/blog/{}", p.id)),
        title: p.title,
        excerpt: p.excerpt,
        categories: p.categories.unwrap_or_default().into_iter().map(|c| c.title).collect(),
        published: p.published_at.map(|t| format::time_ago(t, now)),
    }
}

/// The home calculator quotes the first listed rate out of the visitor's
/// currency into another registered country. Otherwise it uses the default
/// destination with the demo rate for that pair, if there is one.
fn home_calculator(ctx: &PageContext, rates: Option<&[ExchangeRate]>) -> CalculatorView {
    let source = ctx.source;
    let amount = ctx.amount.unwrap_or(dec!(1000));
    let listed = rates.unwrap_or_default().iter().find_map(|r| {
        if !r.source_currency.eq_ignore_ascii_case(source.currency.code) {
            return None;
        }
        country::COUNTRIES
            .iter()
            .find(|c| c.code != source.code && c.currency.code.eq_ignore_ascii_case(&r.target_currency))
            .map(|c| (c, r.rate))
    });
    match listed {
        Some((target, rate)) => calculator(source, target, amount, Some(rate), dec!(3.99)),
        None => {
            let target = country::default_target(source);
            let rate = demo::rate_for(source.currency.code, target.currency.code);
            calculator(source, target, amount, rate, dec!(3.99))
        }
    }
}

pub fn compose_home(
    ctx: &PageContext,
    page: HomePage,
    posts: Vec<BlogPost>,
    demo_content: bool,
) -> HomeView {
    let source = ctx.source;
    let now = ctx.now;
    let title = page
        .seo
        .as_ref()
        .and_then(|s| s.title.clone())
        .or(page.title)
        .unwrap_or_else(|| format!("Send money from {} | {BRAND}", source.name));

    let calc = home_calculator(ctx, page.exchange_rates.as_deref());

    HomeView {
        title,
        source,
        hero: hero(
            page.hero,
            HeroView {
                heading: format!("Send Money from {}", source.name),
                subheading: "Fast, secure, and low fees.".into(),
                cta_text: "Get Started".into(),
                cta_link: format!("/{}/send-to/{}", source.code, calc.target_country),
            },
        ),
        calculator: calc,
        features: icon_items(page.features, |f| IconItem {
            icon: Icon::resolve(f.icon.as_deref()),
            title: f.title,
            description: f.description,
        }),
        banners: non_empty(page.banners),
        exchange_rates: non_empty(page.exchange_rates)
            .map(|v| v.into_iter().map(|r| rate_view(r, now)).collect()),
        testimonials: non_empty(page.testimonials),
        faqs: non_empty(page.faqs),
        blog_posts: non_empty(Some(posts)).map(|v| v.into_iter().map(|p| blog_teaser(p, now)).collect()),
        demo_content,
    }
}

fn delivery_view(o: DeliveryOption, source: &Country) -> DeliveryView {
    let units = country::minor_units(source.currency.code);
    DeliveryView {
        name: o.name,
        duration: o.duration,
        fee: o.fee.map(|f| format::money(f, source.currency.symbol, units)),
    }
}

pub fn compose_send_money(
    ctx: &PageContext,
    target: &'static Country,
    page: SendMoneyPage,
    demo_content: bool,
) -> SendMoneyView {
    let source = ctx.source;
    let calc = page.calculator.unwrap_or_default();
    // Demo content never falls back to a made-up rate.
    let rate = calc
        .exchange_rate
        .filter(|r| *r > Decimal::ZERO)
        .or((!demo_content).then_some(Decimal::ONE));
    let fee = calc.fee.unwrap_or(dec!(5));
    let amount = ctx.amount.or(calc.default_amount).unwrap_or(dec!(1000));

    let title = page
        .seo
        .as_ref()
        .and_then(|s| s.title.clone())
        .or(page.title)
        .unwrap_or_else(|| {
            format!("Send Money from {} to {} | Best Rates | {BRAND}", source.name, target.name)
        });

    SendMoneyView {
        title,
        source,
        target,
        hero: hero(
            page.hero,
            HeroView {
                heading: format!("Send Money to {}", target.name),
                subheading: format!(
                    "Fast and secure money transfers from {} to {}",
                    source.name, target.name
                ),
                cta_text: "Send Money Now".into(),
                cta_link: "#calculator".into(),
            },
        ),
        rate_display: rate.map_or_else(|| "unavailable".to_string(), |r| format::rate(r, 2)),
        calculator: calculator(source, target, amount, rate, fee),
        benefits: icon_items(page.benefit_banners, |b| IconItem {
            icon: Icon::resolve(b.icon.as_deref()),
            title: b.title,
            description: b.description,
        }),
        delivery_options: non_empty(calc.delivery_options)
            .map(|v| v.into_iter().map(|o| delivery_view(o, source)).collect()),
        faqs: non_empty(page.faqs),
        demo_content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::Calculator;
    use crate::models::country::lookup;

    fn ctx(code: &str) -> PageContext {
        PageContext { source: lookup(code).unwrap(), now: Utc::now(), amount: None }
    }

    #[test]
    fn empty_sections_become_none() {
        let page = HomePage { faqs: Some(vec![]), banners: None, ..Default::default() };
        let view = compose_home(&ctx("us"), page, vec![], false);
        assert!(view.faqs.is_none());
        assert!(view.banners.is_none());
        assert!(view.blog_posts.is_none());
        assert!(view.features.is_none());
    }

    #[test]
    fn non_empty_sections_keep_every_entry() {
        let c = ctx("us");
        let view = compose_home(&c, demo::home_page(c.source, c.now), demo::blog_posts(c.now), true);
        assert_eq!(view.faqs.as_ref().map(Vec::len), Some(5));
        assert_eq!(view.features.as_ref().map(Vec::len), Some(4));
        assert_eq!(view.blog_posts.as_ref().map(Vec::len), Some(3));
        assert!(view.demo_content);
    }

    #[test]
    fn hero_defaults_fill_missing_fields() {
        let page = HomePage {
            hero: Some(Hero { heading: Some("Custom".into()), ..Default::default() }),
            ..Default::default()
        };
        let view = compose_home(&ctx("gb"), page, vec![], false);
        assert_eq!(view.hero.heading, "Custom");
        assert_eq!(view.hero.cta_text, "Get Started");
        assert_eq!(view.title, "Send money from United Kingdom | Kyro");
    }

    #[test]
    fn home_calculator_uses_listed_rate() {
        let c = ctx("us");
        let view = compose_home(&c, demo::home_page(c.source, c.now), vec![], true);
        assert_eq!(view.calculator.target_country, "in");
        assert_eq!(view.calculator.rate_label, "1 USD = 83.50 INR");
        assert_eq!(view.calculator.receive, Ok("₹83,166.84".to_string()));
    }

    #[test]
    fn pair_page_quotes_document_figures() {
        let page = SendMoneyPage {
            calculator: Some(Calculator {
                default_amount: Some(dec!(1000)),
                fee: Some(dec!(5)),
                exchange_rate: Some(dec!(83.5)),
                delivery_options: Some(vec![]),
            }),
            ..Default::default()
        };
        let view = compose_send_money(&ctx("us"), lookup("in").unwrap(), page, false);
        assert_eq!(view.calculator.receive, Ok("₹83,057.50".to_string()));
        assert_eq!(view.hero.heading, "Send Money to India");
        assert!(view.delivery_options.is_none());
        assert!(view.benefits.is_none());
    }

    #[test]
    fn amount_below_fee_shows_note_instead_of_negative() {
        let view = calculator(lookup("us").unwrap(), lookup("in").unwrap(), dec!(2), Some(dec!(83.5)), dec!(3.99));
        assert_eq!(view.receive, Err("Amount must cover the $3.99 fee".to_string()));
    }

    #[test]
    fn missing_calculator_uses_defaults() {
        let view = compose_send_money(&ctx("gb"), lookup("eu").unwrap(), SendMoneyPage::default(), false);
        assert_eq!(view.rate_display, "1.00");
        assert_eq!(view.calculator.fee_display, "£5.00");
        assert_eq!(view.calculator.receive, Ok("€995.00".to_string()));
    }

    #[test]
    fn demo_pair_without_listed_rate_shows_no_figure() {
        let (gb, eu) = (lookup("gb").unwrap(), lookup("eu").unwrap());
        let view = compose_send_money(&ctx("gb"), eu, demo::send_money_page(gb, eu), true);
        assert_eq!(view.rate_display, "unavailable");
        assert_eq!(view.calculator.rate_label, "Unavailable");
        assert_eq!(
            view.calculator.receive,
            Err("No GBP to EUR rate is available right now".to_string())
        );
    }

    #[test]
    fn demo_pair_with_listed_rate_uses_it() {
        let (us, gb) = (lookup("us").unwrap(), lookup("gb").unwrap());
        let view = compose_send_money(&ctx("us"), gb, demo::send_money_page(us, gb), true);
        assert_eq!(view.calculator.rate_label, "1 USD = 0.79 GBP");
        assert_eq!(view.calculator.receive, Ok("£781.87".to_string()));
    }

    #[test]
    fn india_home_quotes_another_country() {
        let c = ctx("in");
        let view = compose_home(&c, demo::home_page(c.source, c.now), vec![], true);
        assert_eq!(view.calculator.target_country, "us");
        assert_eq!(view.hero.cta_link, "/in/send-to/us");
        assert!(!view.calculator.rate_label.contains("83.50"));
        assert!(view.calculator.receive.is_err());
    }

    #[test]
    fn home_without_rates_uses_default_destination() {
        let view = compose_home(&ctx("in"), HomePage::default(), vec![], false);
        assert_eq!(view.calculator.target_country, "us");
        assert_eq!(view.hero.cta_link, "/in/send-to/us");

        let view = compose_home(&ctx("us"), HomePage::default(), vec![], false);
        assert_eq!(view.calculator.rate_label, "1 USD = 83.50 INR");
    }
}
