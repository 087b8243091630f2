//! Quote parsing and batch loading
//!
//! One quote per line, comma separated: `FROM,TO,PRICE`. Blank lines and `#`
//! comments are skipped. A malformed field fails the whole load with a parse
//! error; nothing is applied to a graph until the entire input has parsed.

use crate::error::{FxGraphError, Result};
use crate::types::CurrencyPair;
use std::fs;
use std::path::Path;

/// Parse a single `FROM,TO,PRICE` line
pub fn parse_line(line: &str) -> Result<CurrencyPair<String>> {
    let mut fields = line.trim().splitn(3, ',');
    let from = fields.next().unwrap_or("").trim();
    let to = fields.next().unwrap_or("").trim();
    let price_field = fields.next().unwrap_or("").trim();

    if from.is_empty() || to.is_empty() || price_field.is_empty() {
        return Err(FxGraphError::ParseError(format!(
            "expected FROM,TO,PRICE, got {:?}",
            line
        )));
    }

    let price: f64 = price_field.parse().map_err(|e| {
        FxGraphError::ParseError(format!("invalid price {:?}: {}", price_field, e))
    })?;

    Ok(CurrencyPair::new(from.to_string(), to.to_string(), price))
}

/// Parse a multi-line quote listing
pub fn parse_quotes(data: &str) -> Result<Vec<CurrencyPair<String>>> {
    let mut pairs = Vec::new();
    for (line_num, line) in data.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let pair = parse_line(line).map_err(|e| match e {
            FxGraphError::ParseError(msg) => {
                FxGraphError::ParseError(format!("line {}: {}", line_num + 1, msg))
            }
            other => other,
        })?;
        pairs.push(pair);
    }
    Ok(pairs)
}

/// Read and parse a quote file
pub fn parse_quote_file<P: AsRef<Path>>(path: P) -> Result<Vec<CurrencyPair<String>>> {
    let data = fs::read_to_string(path)?;
    parse_quotes(&data)
}
