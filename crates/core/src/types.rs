/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date (orders are dated, not timestamped).
pub type Date = chrono::NaiveDate;

/// Fixed-point money amount. Stored as NUMERIC with two fractional digits.
pub type Money = rust_decimal::Decimal;
