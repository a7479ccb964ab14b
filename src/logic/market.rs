use crate::error::{FarmOpsError, Result};
use crate::models::{
    round_to_tenth, MarketQuote, MarketSummary, PriceTrend, RangeViolation, TrendAnalysis,
};

pub const ALL_CROPS: &str = "All Crops";

/// Derive delta, percentage change and trend from a quote.
///
/// A current price outside the quoted band is reported as a warning on the
/// result, not as an error.
pub fn analyze(quote: &MarketQuote) -> Result<TrendAnalysis> {
    if quote.previous_price <= 0 {
        return Err(FarmOpsError::DivisionByZero {
            crop: quote.crop_name.clone(),
        });
    }
    if quote.current_price <= 0 {
        return Err(FarmOpsError::validation(
            "current_price",
            format!("must be greater than zero, got {}", quote.current_price),
        ));
    }
    if quote.min_price <= 0 {
        return Err(FarmOpsError::validation(
            "min_price",
            format!("must be greater than zero, got {}", quote.min_price),
        ));
    }
    if quote.min_price > quote.max_price {
        return Err(FarmOpsError::validation(
            "min_price",
            format!(
                "minimum {} exceeds maximum {}",
                quote.min_price, quote.max_price
            ),
        ));
    }

    let delta = quote.current_price - quote.previous_price;
    let percentage = round_to_tenth(delta as f64 / quote.previous_price as f64 * 100.0);

    let range_violation = if quote.current_price < quote.min_price
        || quote.current_price > quote.max_price
    {
        let violation = RangeViolation {
            price: quote.current_price,
            min_price: quote.min_price,
            max_price: quote.max_price,
        };
        tracing::warn!("{} at {}: {}", quote.crop_name, quote.market_location, violation);
        Some(violation)
    } else {
        None
    };

    Ok(TrendAnalysis {
        crop_name: quote.crop_name.clone(),
        delta,
        percentage,
        trend: PriceTrend::from_delta(delta),
        range_position: range_position(quote),
        range_violation,
    })
}

fn range_position(quote: &MarketQuote) -> Option<f64> {
    let span = quote.max_price as f64 - quote.min_price as f64;
    if span <= 0.0 {
        return None;
    }
    let position = (quote.current_price as f64 - quote.min_price as f64) / span * 100.0;
    Some(round_to_tenth(position.clamp(0.0, 100.0)))
}

/// Quotes whose crop name contains the filter, case-insensitively.
/// An empty filter or "All Crops" keeps everything.
pub fn filter_quotes<'a>(quotes: &'a [MarketQuote], crop: &str) -> Vec<&'a MarketQuote> {
    let needle = crop.trim().to_lowercase();
    if needle.is_empty() || needle == ALL_CROPS.to_lowercase() {
        return quotes.iter().collect();
    }
    quotes
        .iter()
        .filter(|q| q.crop_name.to_lowercase().contains(&needle))
        .collect()
}

pub fn analyze_all<'a, I>(quotes: I) -> Result<Vec<TrendAnalysis>>
where
    I: IntoIterator<Item = &'a MarketQuote>,
{
    quotes.into_iter().map(analyze).collect()
}

pub fn summarize(analyses: &[TrendAnalysis]) -> MarketSummary {
    analyses
        .iter()
        .fold(MarketSummary::default(), |mut summary, analysis| {
            summary.total += 1;
            match analysis.trend {
                PriceTrend::Up => summary.rising += 1,
                PriceTrend::Down => summary.falling += 1,
                PriceTrend::Stable => summary.stable += 1,
            }
            summary
        })
}
