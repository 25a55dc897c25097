use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use crate::models::country::{self, Country};
use crate::models::demo;
use crate::services::availability::{self, Verdict};
use crate::services::composer::{compose_home, compose_send_money, HomeView, PageContext, SendMoneyView};
use crate::services::content::{ContentSource, RECENT_POSTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnavailableReason {
    TargetNotAvailable,
    SourceNotAvailable,
    NoPageData,
    FetchError,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unavailable {
    pub source: &'static Country,
    pub target: &'static Country,
    pub reason: UnavailableReason,
}

impl Unavailable {
    pub fn title(&self) -> String {
        match self.reason {
            UnavailableReason::TargetNotAvailable => format!("{} Not Available", self.target.name),
            UnavailableReason::SourceNotAvailable => format!("{} Not Supported", self.source.name),
            UnavailableReason::NoPageData | UnavailableReason::FetchError => {
                "Service Not Available".to_string()
            }
        }
    }

    pub fn message(&self) -> String {
        match self.reason {
            UnavailableReason::TargetNotAvailable => format!(
                "{} is currently not accepting money transfers through our system.",
                self.target.name
            ),
            UnavailableReason::SourceNotAvailable => {
                format!("We currently don't support sending money from {}.", self.source.name)
            }
            UnavailableReason::NoPageData => format!(
                "Money transfer service from {} to {} is currently not available.",
                self.source.name, self.target.name
            ),
            UnavailableReason::FetchError => {
                "Unable to load transfer information at the moment. Please try again later.".to_string()
            }
        }
    }

    pub fn description(&self) -> String {
        match self.reason {
            UnavailableReason::TargetNotAvailable => format!(
                "{} is currently not accepting money transfers through our system. This could be due to regulatory changes, maintenance, or temporary service suspension.",
                self.target.name
            ),
            UnavailableReason::SourceNotAvailable => format!(
                "We currently don't support sending money from {}. We're working to expand our services to more countries.",
                self.source.name
            ),
            _ => "This service is temporarily unavailable. Please try again later or contact our support team."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HomeOutcome {
    NotFound,
    Rendered(Box<HomeView>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SendMoneyOutcome {
    NotFound,
    Unavailable(Unavailable),
    Rendered(Box<SendMoneyView>),
}

pub async fn home_page(
    content: &dyn ContentSource,
    code: &str,
    amount: Option<Decimal>,
    now: DateTime<Utc>,
) -> HomeOutcome {
    let Some(source) = country::lookup(code) else {
        return HomeOutcome::NotFound;
    };
    let ctx = PageContext { source, now, amount };

    let (page, posts) = tokio::join!(
        content.home_page(source.code),
        content.recent_posts(source.code, RECENT_POSTS)
    );

    let (page, demo_page) = match page {
        Ok(Some(page)) => (page, false),
        Ok(None) => {
            info!(country = source.code, "no home page document, serving demo content");
            (demo::home_page(source, now), true)
        }
        Err(e) => {
            warn!(country = source.code, "home page fetch failed, serving demo content: {}", e);
            (demo::home_page(source, now), true)
        }
    };
    let posts = match posts {
        Ok(posts) => posts,
        Err(e) => {
            warn!(country = source.code, "blog posts fetch failed, serving demo posts: {}", e);
            demo::blog_posts(now)
        }
    };

    HomeOutcome::Rendered(Box::new(compose_home(&ctx, page, posts, demo_page)))
}

pub async fn send_money_page(
    content: &dyn ContentSource,
    source_code: &str,
    target_code: &str,
    amount: Option<Decimal>,
    now: DateTime<Utc>,
) -> SendMoneyOutcome {
    let (Some(source), Some(target)) = (country::lookup(source_code), country::lookup(target_code)) else {
        return SendMoneyOutcome::NotFound;
    };
    if source.code == target.code {
        return SendMoneyOutcome::NotFound;
    }
    let unavailable = |reason: UnavailableReason| {
        info!(source_country = source.code, target_country = target.code, ?reason, "transfer page unavailable");
        SendMoneyOutcome::Unavailable(Unavailable { source, target, reason })
    };

    let availability = availability::resolve(content, source.code, Some(target.code)).await;
    match availability.verdict() {
        Verdict::Unreachable => return unavailable(UnavailableReason::FetchError),
        Verdict::TargetUnavailable => return unavailable(UnavailableReason::TargetNotAvailable),
        Verdict::SourceUnavailable => return unavailable(UnavailableReason::SourceNotAvailable),
        Verdict::Available => {}
    }

    let ctx = PageContext { source, now, amount };
    match content.send_money_page(source.code, target.code).await {
        Ok(Some(page)) => SendMoneyOutcome::Rendered(Box::new(compose_send_money(&ctx, target, page, false))),
        Ok(None) => unavailable(UnavailableReason::NoPageData),
        Err(e) => {
            warn!(
                source_country = source.code,
                target_country = target.code,
                "transfer page fetch failed, serving demo content: {}",
                e
            );
            let page = demo::send_money_page(source, target);
            SendMoneyOutcome::Rendered(Box::new(compose_send_money(&ctx, target, page, true)))
        }
    }
}
