use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use crate::constants::{DAILY_FIELD, MAX_DAILY_PRECIPITATION_MM};
use crate::error::PipelineError;
use crate::models::{ForecastRow, ForecastTable};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reshapes a forecast body into one row per day, keeping the API's order.
///
/// A body without `daily` (including the API's own error bodies) is reported
/// as missing data so that nothing gets charted.
pub fn normalize(body: &Value) -> Result<ForecastTable, PipelineError> {
    let Some(daily) = body.get("daily") else {
        let reason = body
            .get("reason")
            .and_then(Value::as_str)
            .map(str::to_string);
        return Err(PipelineError::MissingData { reason });
    };

    let dates = list_field(daily, "time")?;
    let amounts = list_field(daily, DAILY_FIELD)?;

    if dates.len() != amounts.len() {
        return Err(PipelineError::MalformedResponse(format!(
            "{} dates but {} precipitation values",
            dates.len(),
            amounts.len()
        )));
    }

    let rows = dates
        .iter()
        .zip(amounts)
        .map(|(date, amount)| {
            Ok(ForecastRow {
                date: parse_date(date)?,
                precipitation: parse_amount(amount)?,
            })
        })
        .collect::<Result<Vec<_>, PipelineError>>()?;

    debug!("Normalized {} forecast days", rows.len());
    Ok(ForecastTable::new(rows))
}

fn list_field<'a>(daily: &'a Value, name: &str) -> Result<&'a Vec<Value>, PipelineError> {
    daily
        .get(name)
        .and_then(Value::as_array)
        .ok_or_else(|| PipelineError::MalformedResponse(format!("daily.{name} is not a list")))
}

fn parse_date(value: &Value) -> Result<NaiveDate, PipelineError> {
    let text = value
        .as_str()
        .ok_or_else(|| PipelineError::MalformedResponse(format!("date is not a string: {value}")))?;
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| PipelineError::MalformedResponse(format!("invalid date '{text}': {e}")))
}

// Open-Meteo reports days without data as null
fn parse_amount(value: &Value) -> Result<f64, PipelineError> {
    let amount = match value {
        Value::Null => return Ok(0.0),
        other => other.as_f64().ok_or_else(|| {
            PipelineError::MalformedResponse(format!("precipitation is not a number: {other}"))
        })?,
    };

    if !amount.is_finite() || !(0.0..=MAX_DAILY_PRECIPITATION_MM).contains(&amount) {
        return Err(PipelineError::MalformedResponse(format!(
            "precipitation out of range: {amount}"
        )));
    }
    Ok(amount)
}
