use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::Method,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
    market_data::{Interval, Operation},
    models::{
        HealthResponse, MarketDataResponse, PopularSymbolsResponse, SearchResponse, SearchResults,
        POPULAR_SYMBOLS,
    },
};

/// Reject empty symbols and normalize the rest to uppercase, both for the
/// upstream query and for the echo in the response envelope.
fn require_symbol(raw: &str) -> ApiResult<String> {
    let symbol = raw.trim();
    if symbol.is_empty() {
        return Err(ApiError::MissingSymbol);
    }
    Ok(symbol.to_uppercase())
}

/// Perform the single outbound call for an operation, converting any failure
/// into the caller-facing error envelope. Upstream faults never propagate.
async fn call_upstream(state: &AppState, operation: &Operation) -> ApiResult<Value> {
    state.market_data.execute(operation).await.map_err(|err| {
        tracing::error!("Error fetching {}: {}", operation.describe(), err);
        ApiError::Upstream {
            category: operation.failure_message(),
            message: err.to_string(),
        }
    })
}

async fn company_quote(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MarketDataResponse>> {
    let symbol = require_symbol(&symbol)?;
    let data = call_upstream(&state, &Operation::Quote {
        symbol: symbol.clone(),
    })
    .await?;
    Ok(Json(MarketDataResponse {
        success: true,
        data,
        symbol,
        interval: None,
    }))
}

async fn company_news(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MarketDataResponse>> {
    let symbol = require_symbol(&symbol)?;
    let data = call_upstream(&state, &Operation::NewsSentiment {
        symbol: symbol.clone(),
    })
    .await?;
    Ok(Json(MarketDataResponse {
        success: true,
        data,
        symbol,
        interval: None,
    }))
}

#[derive(Deserialize)]
struct IntradayQuery {
    interval: Option<String>,
}

async fn company_intraday(
    Path(symbol): Path<String>,
    Query(query): Query<IntradayQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MarketDataResponse>> {
    let symbol = require_symbol(&symbol)?;
    let interval = match query.interval.as_deref() {
        Some(raw) => Interval::parse(raw).ok_or(ApiError::InvalidInterval)?,
        None => Interval::default(),
    };
    let data = call_upstream(&state, &Operation::Intraday {
        symbol: symbol.clone(),
        interval,
    })
    .await?;
    Ok(Json(MarketDataResponse {
        success: true,
        data,
        symbol,
        interval: Some(interval.as_str().to_string()),
    }))
}

#[derive(Deserialize)]
struct SearchQuery {
    keywords: Option<String>,
}

async fn company_search(
    Query(query): Query<SearchQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SearchResponse>> {
    let keywords = query
        .keywords
        .filter(|k| !k.trim().is_empty())
        .ok_or(ApiError::MissingKeywords)?;

    let operation = Operation::SymbolSearch {
        keywords: keywords.clone(),
    };
    let body = call_upstream(&state, &operation).await?;
    let results: SearchResults = serde_json::from_value(body).map_err(|err| {
        tracing::error!("Error parsing search results: {}", err);
        ApiError::Upstream {
            category: operation.failure_message(),
            message: err.to_string(),
        }
    })?;

    Ok(Json(SearchResponse {
        success: true,
        total: results.best_matches.len(),
        data: results.best_matches,
        keywords,
    }))
}

async fn popular_symbols() -> Json<PopularSymbolsResponse> {
    Json(PopularSymbolsResponse {
        success: true,
        data: &POPULAR_SYMBOLS,
        total: POPULAR_SYMBOLS.len(),
        message: "Popular US stock symbols",
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Fintra API is running",
        timestamp: Utc::now().to_rfc3339(),
    })
}

async fn api_docs() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Fintra API",
        "version": "1.0.0",
        "endpoints": {
            "/health": "Health check endpoint",
            "/company-quote/:symbol": "Get company quote data (GLOBAL_QUOTE)",
            "/company-news/:symbol": "Get company news sentiment",
            "/company-intraday/:symbol": "Get company intraday time series data",
            "/company-search?keywords=": "Search for company symbols by keywords",
            "/company-symbols/popular": "Get list of popular company symbols"
        },
        "examples": {
            "quote": "/company-quote/IBM",
            "news": "/company-news/IBM",
            "intraday": "/company-intraday/IBM?interval=5min",
            "search": "/company-search?keywords=microsoft",
            "popular": "/company-symbols/popular"
        },
        "note": "Replace :symbol with actual stock symbol (e.g., IBM, AAPL, GOOGL)"
    }))
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };
    let cors = cors
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route("/", get(api_docs))
        .route("/health", get(health))
        .route("/company-quote/{symbol}", get(company_quote))
        .route("/company-news/{symbol}", get(company_news))
        .route("/company-intraday/{symbol}", get(company_intraday))
        .route("/company-search", get(company_search))
        .route("/company-symbols/popular", get(popular_symbols))
        .fallback(route_not_found)
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
