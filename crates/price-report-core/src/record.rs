//! Line-level record parsing
//!
//! ```text
//! Type,<key>,<displayName>
//! Product,<normalPrice>,<clearancePrice>,<quantity>,<true|false>
//! ```

use std::str::Split;

use crate::error::{ReportError, Result};
use crate::product::Product;

const TYPE_TAG: &str = "Type";
const PRODUCT_TAG: &str = "Product";

#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Category { key: String, display_name: String },
    Product(Product),
}

/// Parse a single input line. `line` is the 1-based line number used in
/// error messages.
///
/// Lines whose first field is neither `Type` nor `Product` yield `Ok(None)`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Record>> {
    let mut fields = Fields {
        line,
        inner: text.split(','),
    };

    match fields.inner.next().unwrap_or_default() {
        TYPE_TAG => {
            let key = fields.text("key")?;
            let display_name = fields.text("display name")?;
            Ok(Some(Record::Category {
                key: key.to_string(),
                display_name: display_name.to_string(),
            }))
        }
        PRODUCT_TAG => {
            let normal_price = fields.number("normal price")?;
            let clearance_price = fields.number("clearance price")?;
            let quantity = fields.number("quantity")?;
            let price_hidden = fields.text("price hidden")?.eq_ignore_ascii_case("true");

            Ok(Some(Record::Product(Product::new(
                normal_price,
                clearance_price,
                quantity,
                price_hidden,
            ))))
        }
        _ => Ok(None),
    }
}

struct Fields<'a> {
    line: usize,
    inner: Split<'a, char>,
}

impl<'a> Fields<'a> {
    fn text(&mut self, field: &'static str) -> Result<&'a str> {
        self.inner.next().ok_or(ReportError::MissingField {
            line: self.line,
            field,
        })
    }

    fn number(&mut self, field: &'static str) -> Result<f64> {
        let raw = self.text(field)?;
        match raw.trim().parse::<f64>() {
            // f64::from_str accepts "NaN" and "inf"
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(self.invalid(field, raw)),
        }
    }

    fn invalid(&self, field: &'static str, raw: &str) -> ReportError {
        ReportError::InvalidNumber {
            line: self.line,
            field,
            value: raw.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type_line() {
        let record = parse_line(1, "Type,normal,Normal Price").unwrap();
        assert_eq!(
            record,
            Some(Record::Category {
                key: "normal".to_string(),
                display_name: "Normal Price".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_product_line() {
        let record = parse_line(2, "Product,20,15,4,true").unwrap();
        assert_eq!(
            record,
            Some(Record::Product(Product::new(20.0, 15.0, 4.0, true)))
        );
    }

    #[test]
    fn test_hidden_flag_is_case_insensitive() {
        let Some(Record::Product(p)) = parse_line(1, "Product,1,1,3,TRUE").unwrap() else {
            panic!("expected product");
        };
        assert!(p.is_price_hidden());

        let Some(Record::Product(p)) = parse_line(1, "Product,1,1,3,yes").unwrap() else {
            panic!("expected product");
        };
        assert!(!p.is_price_hidden());
    }

    #[test]
    fn test_numeric_fields_are_trimmed() {
        let Some(Record::Product(p)) = parse_line(1, "Product, 9.5 ,8, 3 ,false").unwrap() else {
            panic!("expected product");
        };
        assert_eq!(p.normal_price(), 9.5);
        assert_eq!(p.quantity(), 3.0);
    }

    #[test]
    fn test_fractional_quantity_is_numeric() {
        let Some(Record::Product(p)) = parse_line(1, "Product,10,10,3.0,false").unwrap() else {
            panic!("expected product");
        };
        assert_eq!(p.quantity(), 3.0);

        let Some(Record::Product(p)) = parse_line(1, "Product,10,10,2.5,false").unwrap() else {
            panic!("expected product");
        };
        assert_eq!(p.quantity(), 2.5);
    }

    #[test]
    fn test_unknown_and_empty_lines_are_ignored() {
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(parse_line(1, "Discount,10").unwrap(), None);
        assert_eq!(parse_line(1, "type,normal,Normal").unwrap(), None);
    }

    #[test]
    fn test_missing_field() {
        let err = parse_line(5, "Product,10,10,5").unwrap_err();
        assert!(matches!(
            err,
            ReportError::MissingField {
                line: 5,
                field: "price hidden"
            }
        ));

        let err = parse_line(1, "Type,normal").unwrap_err();
        assert!(matches!(err, ReportError::MissingField { field: "display name", .. }));
    }

    #[test]
    fn test_invalid_numbers() {
        let err = parse_line(3, "Product,ten,10,5,false").unwrap_err();
        assert!(matches!(
            err,
            ReportError::InvalidNumber { line: 3, field: "normal price", .. }
        ));

        let err = parse_line(3, "Product,10,NaN,5,false").unwrap_err();
        assert!(matches!(err, ReportError::InvalidNumber { field: "clearance price", .. }));

        let err = parse_line(3, "Product,10,10,many,false").unwrap_err();
        assert!(matches!(err, ReportError::InvalidNumber { field: "quantity", .. }));

        let err = parse_line(3, "Product,10,10,inf,false").unwrap_err();
        assert!(matches!(err, ReportError::InvalidNumber { field: "quantity", .. }));

        let err = parse_line(3, "Product,,10,5,false").unwrap_err();
        assert!(matches!(err, ReportError::InvalidNumber { field: "normal price", .. }));
    }
}
