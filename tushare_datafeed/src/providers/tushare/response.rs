//! Deserialization of the Tushare Pro wire format.
//!
//! Responses are columnar: `data.fields` names the columns and every entry
//! of `data.items` is one row of heterogeneous JSON values in that column
//! order. [`BarColumns`] resolves the columns a bar needs once per table.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::providers::errors::ProviderError;

#[derive(Deserialize, Debug)]
pub struct TushareResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<TushareTable>,
}

#[derive(Deserialize, Debug)]
pub struct TushareTable {
    pub fields: Vec<String>,
    pub items: Vec<Vec<Value>>,
}

impl TushareTable {
    /// Field name → column position, preserving the vendor's column order.
    pub fn column_index(&self) -> IndexMap<&str, usize> {
        self.fields
            .iter()
            .enumerate()
            .map(|(ix, name)| (name.as_str(), ix))
            .collect()
    }
}

/// Resolved positions of the columns a bar record is built from.
#[derive(Debug, Clone, Copy)]
pub struct BarColumns {
    pub trade_date: usize,
    pub open: usize,
    pub high: usize,
    pub low: usize,
    pub close: usize,
    pub amount: usize,
}

impl BarColumns {
    pub fn resolve(table: &TushareTable) -> Result<Self, ProviderError> {
        let index = table.column_index();
        let position = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| ProviderError::Api(format!("response is missing column '{name}'")))
        };

        Ok(Self {
            trade_date: position("trade_date")?,
            open: position("open")?,
            high: position("high")?,
            low: position("low")?,
            close: position("close")?,
            amount: position("amount")?,
        })
    }
}

/// Reads a string cell from a row.
pub fn str_cell<'a>(row: &'a [Value], ix: usize, name: &str) -> Result<&'a str, ProviderError> {
    row.get(ix)
        .and_then(Value::as_str)
        .ok_or_else(|| ProviderError::Api(format!("row cell '{name}' is not a string")))
}

/// Reads a numeric cell from a row.
///
/// Tushare serves prices as JSON numbers but has been observed quoting
/// them in some endpoints, so numeric strings are accepted too.
pub fn f64_cell(row: &[Value], ix: usize, name: &str) -> Result<f64, ProviderError> {
    let cell = row
        .get(ix)
        .ok_or_else(|| ProviderError::Api(format!("row is missing cell '{name}'")))?;

    match cell {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ProviderError::Api(format!("row cell '{name}' is not a float"))),
        Value::String(s) => s
            .parse()
            .map_err(|_| ProviderError::Api(format!("row cell '{name}' is not numeric: {s}"))),
        other => Err(ProviderError::Api(format!(
            "row cell '{name}' has unexpected type: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn table(fields: &[&str], items: serde_json::Value) -> TushareTable {
        serde_json::from_value(json!({ "fields": fields, "items": items })).unwrap()
    }

    #[test]
    fn response_with_absent_data_deserializes() {
        let response: TushareResponse =
            serde_json::from_str(r#"{"code": 0, "msg": null}"#).unwrap();
        assert_eq!(response.code, 0);
        assert!(response.data.is_none());
    }

    #[test]
    fn columns_resolve_in_any_order() {
        let t = table(
            &["close", "amount", "trade_date", "open", "high", "low", "vol"],
            json!([]),
        );
        let columns = BarColumns::resolve(&t).unwrap();
        assert_eq!(columns.trade_date, 2);
        assert_eq!(columns.open, 3);
        assert_eq!(columns.amount, 1);
    }

    #[test]
    fn missing_column_is_an_api_error() {
        let t = table(&["trade_date", "open", "high", "low", "close"], json!([]));
        let err = BarColumns::resolve(&t).unwrap_err();
        assert!(matches!(err, ProviderError::Api(msg) if msg.contains("amount")));
    }

    #[test]
    fn numeric_cells_accept_numbers_and_numeric_strings() {
        let row = vec![json!(10.55), json!("10.61"), json!("x")];
        assert_eq!(f64_cell(&row, 0, "open").unwrap(), 10.55);
        assert_eq!(f64_cell(&row, 1, "close").unwrap(), 10.61);
        assert!(f64_cell(&row, 2, "high").is_err());
        assert!(f64_cell(&row, 3, "low").is_err());
    }
}
