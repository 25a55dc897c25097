use serde::{Deserialize, Serialize};

/// Body of a Sanity query response; `result` is `null` when nothing matched.
#[derive(Deserialize)]
pub struct QueryResponse<T> {
    pub result: Option<T>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RemoteCurrency {
    pub code: Option<String>,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

/// Country document from the CMS, carrying the availability switch editors control.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteCountry {
    pub code: String,
    pub name: Option<String>,
    pub flag: Option<String>,
    pub currency: Option<RemoteCurrency>,
    pub is_available: Option<bool>,
}

impl RemoteCountry {
    #[cfg(test)]
    pub fn new(code: &str, is_available: bool) -> Self {
        RemoteCountry {
            code: code.to_string(),
            name: None,
            flag: None,
            currency: None,
            is_available: Some(is_available),
        }
    }
}
