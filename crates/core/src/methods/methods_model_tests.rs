use chrono::NaiveDateTime;
use rust_decimal_macros::dec;

use crate::methods::{
    FinancialMethod, FinancialMethodDetail, DeactivationKind, MethodKind, NewFinancialMethod,
};

fn method(commission: rust_decimal::Decimal) -> FinancialMethod {
    FinancialMethod {
        id: "m-1".to_string(),
        name: "Bank transfer".to_string(),
        kind: MethodKind::BankTransfer,
        commission_pct: commission,
        is_active: true,
        created_at: NaiveDateTime::default(),
        updated_at: NaiveDateTime::default(),
    }
}

fn detail(override_pct: Option<rust_decimal::Decimal>) -> FinancialMethodDetail {
    FinancialMethodDetail {
        id: "d-1".to_string(),
        method_id: "m-1".to_string(),
        owner: "HOUSE".to_string(),
        label: "Main account".to_string(),
        commission_pct: override_pct,
        is_active: true,
        deactivation: DeactivationKind::None,
        created_at: NaiveDateTime::default(),
        updated_at: NaiveDateTime::default(),
    }
}

#[test]
fn test_effective_commission_defaults_to_method() {
    let m = method(dec!(2.5));
    assert_eq!(detail(None).effective_commission(&m), dec!(2.5));
}

#[test]
fn test_effective_commission_prefers_override() {
    let m = method(dec!(2.5));
    assert_eq!(detail(Some(dec!(1))).effective_commission(&m), dec!(1));
}

#[test]
fn test_new_method_rejects_out_of_range_commission() {
    let new = NewFinancialMethod {
        name: "Card".to_string(),
        kind: MethodKind::Card,
        commission_pct: dec!(101),
    };
    assert!(new.validate().is_err());

    let new = NewFinancialMethod {
        name: "Card".to_string(),
        kind: MethodKind::Card,
        commission_pct: dec!(-1),
    };
    assert!(new.validate().is_err());
}

#[test]
fn test_method_kind_round_trip() {
    for kind in [
        MethodKind::BankTransfer,
        MethodKind::DigitalWallet,
        MethodKind::Card,
        MethodKind::Cash,
        MethodKind::Check,
    ] {
        assert_eq!(MethodKind::from_str_loose(kind.as_str()), Some(kind));
    }
    assert_eq!(MethodKind::from_str_loose("WIRE"), None);
}
