use crate::currencies::{NewCurrency, NewDenomination};

fn usd() -> NewCurrency {
    NewCurrency {
        code: "USD".to_string(),
        name: "US Dollar".to_string(),
        symbol: "$".to_string(),
        decimal_places: 2,
        is_base: false,
    }
}

#[test]
fn test_new_currency_valid() {
    assert!(usd().validate().is_ok());
}

#[test]
fn test_new_currency_rejects_lowercase_code() {
    let mut c = usd();
    c.code = "usd".to_string();
    assert!(c.validate().is_err());
}

#[test]
fn test_new_currency_rejects_long_code() {
    let mut c = usd();
    c.code = "USDT".to_string();
    assert!(c.validate().is_err());
}

#[test]
fn test_new_currency_rejects_empty_name() {
    let mut c = usd();
    c.name = "  ".to_string();
    assert!(c.validate().is_err());
}

#[test]
fn test_new_currency_rejects_negative_decimals() {
    let mut c = usd();
    c.decimal_places = -1;
    assert!(c.validate().is_err());
}

#[test]
fn test_new_denomination_rejects_non_positive_face_value() {
    let d = NewDenomination {
        currency_code: "USD".to_string(),
        face_value: 0,
    };
    assert!(d.validate().is_err());

    let d = NewDenomination {
        currency_code: "USD".to_string(),
        face_value: -50,
    };
    assert!(d.validate().is_err());
}

#[test]
fn test_new_denomination_valid() {
    let d = NewDenomination {
        currency_code: "USD".to_string(),
        face_value: 100,
    };
    assert!(d.validate().is_ok());
}
