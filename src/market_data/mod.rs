pub mod alpha_vantage;

pub use alpha_vantage::AlphaVantageClient;

use thiserror::Error;

/// Intraday intervals accepted by the upstream provider.
pub const VALID_INTERVALS: [&str; 5] = ["1min", "5min", "15min", "30min", "60min"];

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parsing error: {0}")]
    ParsingError(String),
}

/// Candle spacing for intraday time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interval {
    Min1,
    #[default]
    Min5,
    Min15,
    Min30,
    Min60,
}

impl Interval {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "1min" => Some(Self::Min1),
            "5min" => Some(Self::Min5),
            "15min" => Some(Self::Min15),
            "30min" => Some(Self::Min30),
            "60min" => Some(Self::Min60),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Min1 => "1min",
            Self::Min5 => "5min",
            Self::Min15 => "15min",
            Self::Min30 => "30min",
            Self::Min60 => "60min",
        }
    }
}

/// One validated market data query, ready to be mapped onto an upstream call.
///
/// Symbols must already be normalized (uppercased) by the caller; keywords are
/// carried verbatim. The popular-symbols listing is served from static data
/// and never becomes an `Operation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Quote { symbol: String },
    NewsSentiment { symbol: String },
    Intraday { symbol: String, interval: Interval },
    SymbolSearch { keywords: String },
}

impl Operation {
    /// The upstream `function` selector for this operation.
    pub fn function_code(&self) -> &'static str {
        match self {
            Self::Quote { .. } => "GLOBAL_QUOTE",
            Self::NewsSentiment { .. } => "NEWS_SENTIMENT",
            Self::Intraday { .. } => "TIME_SERIES_INTRADAY",
            Self::SymbolSearch { .. } => "SYMBOL_SEARCH",
        }
    }

    /// Query parameters beyond `function` and `apikey`.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Quote { symbol } => vec![("symbol", symbol.as_str())],
            Self::NewsSentiment { symbol } => vec![("tickers", symbol.as_str())],
            Self::Intraday { symbol, interval } => vec![
                ("symbol", symbol.as_str()),
                ("interval", interval.as_str()),
            ],
            Self::SymbolSearch { keywords } => vec![("keywords", keywords.as_str())],
        }
    }

    /// Short human label used in logs ("Error fetching company quote: ...").
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Quote { .. } => "company quote",
            Self::NewsSentiment { .. } => "company news",
            Self::Intraday { .. } => "company intraday data",
            Self::SymbolSearch { .. } => "company symbols",
        }
    }

    /// The `error` field reported to callers when the upstream call fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Quote { .. } => "Failed to fetch company quote data",
            Self::NewsSentiment { .. } => "Failed to fetch company news data",
            Self::Intraday { .. } => "Failed to fetch company intraday data",
            Self::SymbolSearch { .. } => "Failed to search company symbols",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_parses_the_five_valid_values() {
        for raw in VALID_INTERVALS {
            let interval = Interval::parse(raw).unwrap();
            assert_eq!(interval.as_str(), raw);
        }
        assert!(Interval::parse("2min").is_none());
        assert!(Interval::parse("").is_none());
        assert!(Interval::parse("5MIN").is_none());
    }

    #[test]
    fn interval_defaults_to_five_minutes() {
        assert_eq!(Interval::default(), Interval::Min5);
    }

    #[test]
    fn quote_maps_to_global_quote() {
        let op = Operation::Quote {
            symbol: "IBM".to_string(),
        };
        assert_eq!(op.function_code(), "GLOBAL_QUOTE");
        assert_eq!(op.params(), vec![("symbol", "IBM")]);
    }

    #[test]
    fn news_sentiment_sends_symbol_as_tickers() {
        let op = Operation::NewsSentiment {
            symbol: "AAPL".to_string(),
        };
        assert_eq!(op.function_code(), "NEWS_SENTIMENT");
        assert_eq!(op.params(), vec![("tickers", "AAPL")]);
    }

    #[test]
    fn intraday_carries_symbol_and_interval() {
        let op = Operation::Intraday {
            symbol: "MSFT".to_string(),
            interval: Interval::Min15,
        };
        assert_eq!(op.function_code(), "TIME_SERIES_INTRADAY");
        assert_eq!(
            op.params(),
            vec![("symbol", "MSFT"), ("interval", "15min")]
        );
    }

    #[test]
    fn symbol_search_passes_keywords_verbatim() {
        let op = Operation::SymbolSearch {
            keywords: "MicroSoft inc".to_string(),
        };
        assert_eq!(op.function_code(), "SYMBOL_SEARCH");
        assert_eq!(op.params(), vec![("keywords", "MicroSoft inc")]);
    }

    #[test]
    fn failure_messages_name_the_operation() {
        let op = Operation::Quote {
            symbol: "IBM".to_string(),
        };
        assert_eq!(op.failure_message(), "Failed to fetch company quote data");
        let op = Operation::SymbolSearch {
            keywords: "ibm".to_string(),
        };
        assert_eq!(op.failure_message(), "Failed to search company symbols");
    }
}
