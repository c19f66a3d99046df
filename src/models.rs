use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Route list reported by the 404 fallback.
pub const AVAILABLE_ROUTES: [&str; 6] = [
    "/health",
    "/company-quote/:symbol",
    "/company-news/:symbol",
    "/company-intraday/:symbol",
    "/company-search?keywords=",
    "/company-symbols/popular",
];

/// Envelope for operations that relay the upstream body unmodified.
#[derive(Serialize, Debug)]
pub struct MarketDataResponse {
    pub success: bool,
    pub data: Value,
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

/// Envelope for the symbol search operation.
#[derive(Serialize, Debug)]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<SymbolMatch>,
    pub total: usize,
    pub keywords: String,
}

/// Envelope for the static popular-symbols listing.
#[derive(Serialize, Debug)]
pub struct PopularSymbolsResponse {
    pub success: bool,
    pub data: &'static [PopularSymbol],
    pub total: usize,
    pub message: &'static str,
}

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

/// One match record from SYMBOL_SEARCH. Alpha Vantage numbers its keys
/// ("1. symbol", "2. name", ...); callers get plain camelCase fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SymbolMatch {
    #[serde(rename(deserialize = "1. symbol"))]
    pub symbol: String,
    #[serde(rename(deserialize = "2. name"))]
    pub name: String,
    #[serde(rename(deserialize = "3. type", serialize = "type"))]
    pub asset_type: String,
    #[serde(rename(deserialize = "4. region"))]
    pub region: String,
    #[serde(rename(deserialize = "5. marketOpen", serialize = "marketOpen"))]
    pub market_open: String,
    #[serde(rename(deserialize = "6. marketClose", serialize = "marketClose"))]
    pub market_close: String,
    #[serde(rename(deserialize = "7. timezone"))]
    pub timezone: String,
    #[serde(rename(deserialize = "8. currency"))]
    pub currency: String,
    #[serde(rename(deserialize = "9. matchScore", serialize = "matchScore"))]
    pub match_score: String,
}

/// Upstream SYMBOL_SEARCH body. A missing `bestMatches` key means no results.
#[derive(Deserialize, Debug)]
pub struct SearchResults {
    #[serde(rename = "bestMatches", default)]
    pub best_matches: Vec<SymbolMatch>,
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct PopularSymbol {
    pub symbol: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub asset_type: &'static str,
    pub region: &'static str,
}

const fn us_equity(symbol: &'static str, name: &'static str) -> PopularSymbol {
    PopularSymbol {
        symbol,
        name,
        asset_type: "Equity",
        region: "United States",
    }
}

/// Curated list served by /company-symbols/popular without an upstream call.
pub const POPULAR_SYMBOLS: [PopularSymbol; 25] = [
    us_equity("AAPL", "Apple Inc."),
    us_equity("MSFT", "Microsoft Corporation"),
    us_equity("GOOGL", "Alphabet Inc."),
    us_equity("AMZN", "Amazon.com Inc."),
    us_equity("TSLA", "Tesla Inc."),
    us_equity("META", "Meta Platforms Inc."),
    us_equity("NVDA", "NVIDIA Corporation"),
    us_equity("JPM", "JPMorgan Chase & Co."),
    us_equity("JNJ", "Johnson & Johnson"),
    us_equity("V", "Visa Inc."),
    us_equity("PG", "Procter & Gamble Company"),
    us_equity("UNH", "UnitedHealth Group Incorporated"),
    us_equity("HD", "Home Depot Inc."),
    us_equity("MA", "Mastercard Incorporated"),
    us_equity("BAC", "Bank of America Corporation"),
    us_equity("DIS", "Walt Disney Company"),
    us_equity("ADBE", "Adobe Inc."),
    us_equity("NFLX", "Netflix Inc."),
    us_equity("KO", "Coca-Cola Company"),
    us_equity("PFE", "Pfizer Inc."),
    us_equity("XOM", "Exxon Mobil Corporation"),
    us_equity("VZ", "Verizon Communications Inc."),
    us_equity("INTC", "Intel Corporation"),
    us_equity("CSCO", "Cisco Systems Inc."),
    us_equity("CRM", "Salesforce Inc."),
];
