use serde::Serialize;
use url::Url;

const ETF_SCREENER_BASE: &str = "https://finance.yahoo.com/research-hub/screener/etf/";

#[derive(Debug, Clone, Serialize)]
pub struct ScreenerLink {
    pub fund_type: String,
    pub url: String,
}

/// ETF screener search for a recommended fund category.
pub fn etf_screener_url(fund_type: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(ETF_SCREENER_BASE)?;
    url.query_pairs_mut()
        .append_pair("start", "0")
        .append_pair("count", "25")
        .append_pair("query", fund_type.trim());
    Ok(url)
}

pub fn screener_link(fund_type: &str) -> Result<ScreenerLink, url::ParseError> {
    Ok(ScreenerLink {
        fund_type: fund_type.trim().to_string(),
        url: etf_screener_url(fund_type)?.to_string(),
    })
}
