use serde::{Deserialize, Serialize};

/// Thematic group of tickers used to infer an investment style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetCategory {
    pub name: &'static str,
    pub member_tickers: &'static [&'static str],
    /// Seeds for the recommendation sentence: two peers, then the pick.
    pub recommendation_seeds: [&'static str; 3],
}

/// Category catalog in declaration order. Declaration order breaks ties.
pub static ASSET_CATALOG: &[AssetCategory] = &[
    AssetCategory {
        name: "Technology Stocks",
        member_tickers: &[
            "AAPL", "MSFT", "TSLA", "GOOGL", "META", "NVDA", "AMD", "NFLX", "ADBE", "CRM",
            "PYPL", "INTC", "ORCL", "CSCO", "VGT", "ARKK", "ARKW", "ARKF", "ARKQ", "ARKX",
        ],
        recommendation_seeds: ["AMD", "VGT", "ARKK"],
    },
    AssetCategory {
        name: "Cryptocurrencies",
        member_tickers: &[
            "BTC", "ETH", "ADA", "DOT", "MATIC", "LINK", "BNB", "SOL", "AVAX", "XRP", "DOGE",
            "SHIB", "UNI", "LTC",
        ],
        recommendation_seeds: ["DOT", "MATIC", "LINK"],
    },
    AssetCategory {
        name: "Safe Assets",
        member_tickers: &[
            "GOLD", "SILVER", "PLATINUM", "DXY", "T-Bonds", "VIG", "Time Deposit", "USD/TRY",
            "T-Bond 10Y", "Mevduat",
        ],
        recommendation_seeds: ["T-Bonds", "Time Deposit", "VIG"],
    },
    AssetCategory {
        name: "ETFs & Index Funds",
        member_tickers: &[
            "SPY", "QQQ", "DIA", "IWM", "VTI", "VOO", "ARKK", "ARKG", "ARKW", "ARKF", "ARKQ",
            "ARKX", "VGT", "VHT", "VFH", "VNQ", "VYM", "VIG", "SCHD",
        ],
        recommendation_seeds: ["VTI", "SCHD", "VIG"],
    },
    AssetCategory {
        name: "Energy & Commodities",
        member_tickers: &["XOM", "CVX", "OIL", "GOLD", "SILVER", "COPPER"],
        recommendation_seeds: ["COPPER", "OIL", "XOM"],
    },
    AssetCategory {
        name: "Consumer Stocks",
        member_tickers: &["WMT", "KO", "MCD", "SBUX", "TGT"],
        recommendation_seeds: ["KO", "MCD", "WMT"],
    },
    AssetCategory {
        name: "Health Stocks",
        member_tickers: &["PFE", "MRK", "UNH", "ABBV"],
        recommendation_seeds: ["UNH", "ABBV", "MRK"],
    },
    AssetCategory {
        name: "Transportation & Travel",
        member_tickers: &["ABNB", "UBER", "FDX", "DAL", "AAL"],
        recommendation_seeds: ["FDX", "DAL", "ABNB"],
    },
    AssetCategory {
        name: "Emerging Markets",
        member_tickers: &["KWEB", "FXI", "EWZ", "INDA", "TUR", "GREK"],
        recommendation_seeds: ["KWEB", "FXI", "EWZ"],
    },
];

/// Smallest selection the affinity endpoint accepts.
pub const MIN_SELECTION: usize = 3;
/// Largest selection the affinity endpoint accepts.
pub const MAX_SELECTION: usize = 20;

/// A catalog category together with how many selected tickers it contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMatch {
    pub category: &'static AssetCategory,
    pub overlap: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AffinityRequest {
    pub selected: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AffinityResponse {
    pub recommendations: Vec<String>,
}
