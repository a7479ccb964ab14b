use crate::models::MarketQuote;

/// Latest reference quotes from regional mandis, ₹/quintal.
static REFERENCE_BOARD: &[(&str, i64, i64, &str, i64, i64)] = &[
    ("Rice (Paddy)", 2850, 2720, "Thanjavur Mandi", 2650, 2950),
    ("Wheat", 2340, 2380, "Delhi Mandi", 2200, 2450),
    ("Cotton", 6420, 6420, "Coimbatore Mandi", 6200, 6650),
    ("Sugarcane", 380, 365, "Thanjavur Mandi", 350, 400),
    ("Turmeric", 14800, 15200, "Erode Mandi", 14200, 15800),
    ("Tomato", 4200, 3850, "Chennai Koyambedu", 3500, 4500),
    ("Maize", 2400, 2000, "Rourkela", 1500, 4000),
];

pub fn reference_quotes() -> Vec<MarketQuote> {
    REFERENCE_BOARD
        .iter()
        .map(|(crop, current, previous, location, min, max)| {
            MarketQuote::new(*crop, *current, *previous)
                .at(*location)
                .with_range(*min, *max)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_board_is_within_bounds() {
        for quote in reference_quotes() {
            assert!(quote.previous_price > 0, "{}", quote.crop_name);
            assert!(quote.min_price <= quote.current_price, "{}", quote.crop_name);
            assert!(quote.current_price <= quote.max_price, "{}", quote.crop_name);
        }
    }

    #[test]
    fn reference_board_size() {
        assert_eq!(reference_quotes().len(), 7);
    }
}
