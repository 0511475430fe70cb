use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseCfg;
use crate::data::Observation;
use crate::error::MonitorResult;
use crate::monitor::RateSource;

// The collector writes one row per order-book level; prices and best-offer
// volumes collapse with MAX, the per-level base volumes sum to the top-10 total.
const TODAY_QUERY: &str = r#"
    SELECT recorded_at,
           MAX(avg_buy_price)    AS avg_buy_price,
           MAX(avg_sell_price)   AS avg_sell_price,
           MAX(best_buy_price)   AS best_buy_price,
           MAX(best_sell_price)  AS best_sell_price,
           MAX(best_buy_volume)  AS best_buy_volume,
           MAX(best_sell_volume) AS best_sell_volume,
           SUM(buy_volume)       AS total_buy_volume,
           SUM(sell_volume)      AS total_sell_volume
    FROM exchange_rates
    WHERE DATE(recorded_at) = CURRENT_DATE
    GROUP BY recorded_at
    ORDER BY recorded_at
"#;

type ObservationRow = (
    DateTime<Utc>,
    Decimal,
    Decimal,
    Decimal,
    Decimal,
    Decimal,
    Decimal,
    Decimal,
    Decimal,
);

pub struct Database {
    pub pool: PgPool,
}

impl Database {
    pub async fn new(cfg: &DatabaseCfg) -> MonitorResult<Self> {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(cfg.max_connections)
            .connect(&cfg.url())
            .await?;

        info!("Connected to exchange database at {}:{}", cfg.host, cfg.port);

        Ok(Self { pool })
    }
}

#[async_trait]
impl RateSource for Database {
    async fn fetch_today(&self) -> MonitorResult<Vec<Observation>> {
        let rows = sqlx::query_as::<_, ObservationRow>(TODAY_QUERY)
            .fetch_all(&self.pool)
            .await?;

        let observations = rows
            .into_iter()
            .map(|row| Observation {
                recorded_at: row.0,
                avg_buy_price: row.1,
                avg_sell_price: row.2,
                best_buy_price: row.3,
                best_sell_price: row.4,
                best_buy_volume: row.5,
                best_sell_volume: row.6,
                total_buy_volume: row.7,
                total_sell_volume: row.8,
            })
            .collect();

        Ok(observations)
    }
}
