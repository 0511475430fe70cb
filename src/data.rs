use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// One aggregated order-book sample for the monitored pair, as returned by the
/// collector's table. Immutable once fetched.
#[derive(Debug, Clone)]
pub struct Observation {
    pub recorded_at: DateTime<Utc>,
    pub avg_buy_price: Decimal,
    pub avg_sell_price: Decimal,
    pub best_buy_price: Decimal,
    pub best_sell_price: Decimal,
    /// Quote-currency amount sitting at the best buy offer.
    pub best_buy_volume: Decimal,
    /// Quote-currency amount sitting at the best sell offer.
    pub best_sell_volume: Decimal,
    /// Base-currency volume summed over the top ten buy offers.
    pub total_buy_volume: Decimal,
    /// Base-currency volume summed over the top ten sell offers.
    pub total_sell_volume: Decimal,
}

/// The six displayed metrics, taken from the latest observation of a cycle.
/// `Default` (all zero) is the delta baseline before the first successful cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    pub avg_buy_price: Decimal,
    pub avg_sell_price: Decimal,
    pub best_buy_price: Decimal,
    pub best_sell_price: Decimal,
    pub total_buy_volume: Decimal,
    pub total_sell_volume: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deltas {
    pub avg_buy_price: Decimal,
    pub avg_sell_price: Decimal,
    pub best_buy_price: Decimal,
    pub best_sell_price: Decimal,
    pub total_buy_volume: Decimal,
    pub total_sell_volume: Decimal,
}

impl Metrics {
    pub fn from_observation(row: &Observation) -> Self {
        Self {
            avg_buy_price: row.avg_buy_price,
            avg_sell_price: row.avg_sell_price,
            best_buy_price: row.best_buy_price,
            best_sell_price: row.best_sell_price,
            total_buy_volume: row.total_buy_volume,
            total_sell_volume: row.total_sell_volume,
        }
    }

    /// Movement of each metric since `prev`, the last displayed snapshot.
    pub fn deltas_since(&self, prev: &Metrics) -> Deltas {
        Deltas {
            avg_buy_price: self.avg_buy_price - prev.avg_buy_price,
            avg_sell_price: self.avg_sell_price - prev.avg_sell_price,
            best_buy_price: self.best_buy_price - prev.best_buy_price,
            best_sell_price: self.best_sell_price - prev.best_sell_price,
            total_buy_volume: self.total_buy_volume - prev.total_buy_volume,
            total_sell_volume: self.total_sell_volume - prev.total_sell_volume,
        }
    }
}
