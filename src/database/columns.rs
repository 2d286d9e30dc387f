use std::str::FromStr;

use rusqlite::Row;
use rusqlite::types::Type;
use rust_decimal::Decimal;

use crate::domain::TournamentType;

/// Decimal amounts are stored as text to keep their exact scale
pub fn decimal_at(row: &Row, idx: usize) -> rusqlite::Result<Decimal> {
    let text: String = row.get(idx)?;
    Decimal::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub fn tournament_type_at(row: &Row, idx: usize) -> rusqlite::Result<TournamentType> {
    let code: i64 = row.get(idx)?;
    TournamentType::from_code(code).ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, code))
}
