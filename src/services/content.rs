use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::content::{BlogPost, HomePage, SendMoneyPage};
use crate::types::external::{QueryResponse, RemoteCountry};
use crate::utils::error::ContentError;

pub const RECENT_POSTS: usize = 3;

/// Read-only access to the page documents kept in the CMS.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn home_page(&self, country: &str) -> Result<Option<HomePage>, ContentError>;

    async fn send_money_page(
        &self,
        source: &str,
        target: &str,
    ) -> Result<Option<SendMoneyPage>, ContentError>;

    /// All country documents, ordered by name.
    async fn countries(&self) -> Result<Vec<RemoteCountry>, ContentError>;

    /// Newest posts referencing `country`, at most `limit`.
    async fn recent_posts(&self, country: &str, limit: usize) -> Result<Vec<BlogPost>, ContentError>;
}

const HOME_PAGE_QUERY: &str = r#"*[_type == "homePage" && country == $country][0] {
  country, title, subtitle,
  hero { heading, subheading, ctaText, ctaLink },
  features[] { title, description, icon },
  banners[] { _key, title, subtitle, ctaText, ctaLink, backgroundColor },
  exchangeRates[] { _key, sourceCurrency, targetCurrency, rate, lastUpdated },
  testimonials[] { _key, name, quote, rating, location },
  faqs[] { _key, question, answer },
  seo { title, description, keywords }
}"#;

const SEND_MONEY_PAGE_QUERY: &str = r#"*[_type == "sendMoneyPage" && sourceCountry == $sourceCountry && targetCountry == $targetCountry][0] {
  sourceCountry, targetCountry, title, subtitle,
  hero { heading, subheading, ctaText, ctaLink },
  calculator { defaultAmount, fee, exchangeRate, deliveryOptions[] { _key, name, duration, fee } },
  benefitBanners[] { _key, title, description, icon },
  faqs[] { _key, question, answer },
  seo { title, description, keywords }
}"#;

const COUNTRIES_QUERY: &str = r#"*[_type == "country"] | order(name asc) {
  code, name, flag, currency { code, symbol, name }, isAvailable
}"#;

fn blog_posts_query(limit: usize) -> String {
    format!(
        r#"*[_type == "blogPost" && references(*[_type == "country" && code == $country]._id)] | order(publishedAt desc)[0...{limit}] {{
  _id, title, slug, excerpt, publishedAt, categories[]->{{ title }}
}}"#
    )
}

/// Client for the Sanity HTTP query API.
#[derive(Clone)]
pub struct SanityClient {
    http: Client,
    endpoint: String,
}

impl SanityClient {
    /// `api_host` is the scheme and host, e.g. `https://abc123.api.sanity.io`.
    pub fn new(http: Client, api_host: &str, api_version: &str, dataset: &str) -> Self {
        let endpoint = format!(
            "{}/v{}/data/query/{}",
            api_host.trim_end_matches('/'),
            api_version.trim_start_matches('v'),
            dataset
        );
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch<T: DeserializeOwned + Send>(
        &self,
        query: &str,
        params: &[(&str, serde_json::Value)],
    ) -> Result<Option<T>, ContentError> {
        // GROQ parameters travel as `$name=<json>` query pairs.
        let mut pairs: Vec<(String, String)> = vec![("query".into(), query.into())];
        for (name, value) in params {
            pairs.push((format!("${name}"), value.to_string()));
        }

        let resp = self.http.get(&self.endpoint).query(&pairs).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ContentError::Status { status: status.as_u16() });
        }
        let bytes = resp.bytes().await?;
        let body: QueryResponse<T> = serde_json::from_slice(&bytes)?;
        debug!(endpoint = %self.endpoint, found = body.result.is_some(), "content query");
        Ok(body.result)
    }
}

#[async_trait]
impl ContentSource for SanityClient {
    async fn home_page(&self, country: &str) -> Result<Option<HomePage>, ContentError> {
        self.fetch(HOME_PAGE_QUERY, &[("country", country.to_lowercase().into())]).await
    }

    async fn send_money_page(
        &self,
        source: &str,
        target: &str,
    ) -> Result<Option<SendMoneyPage>, ContentError> {
        self.fetch(
            SEND_MONEY_PAGE_QUERY,
            &[
                ("sourceCountry", source.to_lowercase().into()),
                ("targetCountry", target.to_lowercase().into()),
            ],
        )
        .await
    }

    async fn countries(&self) -> Result<Vec<RemoteCountry>, ContentError> {
        Ok(self.fetch(COUNTRIES_QUERY, &[]).await?.unwrap_or_default())
    }

    async fn recent_posts(&self, country: &str, limit: usize) -> Result<Vec<BlogPost>, ContentError> {
        Ok(self
            .fetch(&blog_posts_query(limit), &[("country", country.to_lowercase().into())])
            .await?
            .unwrap_or_default())
    }
}
