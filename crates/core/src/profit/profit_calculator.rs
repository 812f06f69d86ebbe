//! Pure profit calculation.

use rust_decimal::Decimal;

use crate::operations::OperationDirection;

/// Net profit of a completed operation from the house's perspective.
///
/// When the house bought foreign cash it earned the spread below the market
/// rate; when it sold, the spread above it. Either way the margin per foreign
/// unit is multiplied by the foreign-currency amount.
pub fn net_profit(
    house_side: OperationDirection,
    market_rate: Decimal,
    applied_rate: Decimal,
    foreign_amount: Decimal,
) -> Decimal {
    let margin_per_unit = match house_side {
        OperationDirection::Buy => market_rate - applied_rate,
        OperationDirection::Sell => applied_rate - market_rate,
    };
    margin_per_unit * foreign_amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_house_buy_below_market_is_positive() {
        let profit = net_profit(OperationDirection::Buy, dec!(7300), dec!(7250), dec!(100));
        assert_eq!(profit, dec!(5000));
    }

    #[test]
    fn test_house_sell_above_market_is_positive() {
        let profit = net_profit(OperationDirection::Sell, dec!(7300), dec!(7500), dec!(100));
        assert_eq!(profit, dec!(20000));
    }

    #[test]
    fn test_house_buy_above_market_is_negative() {
        let profit = net_profit(OperationDirection::Buy, dec!(7300), dec!(7400), dec!(10));
        assert_eq!(profit, dec!(-1000));
    }

    #[test]
    fn test_zero_margin_is_zero_profit() {
        let profit = net_profit(OperationDirection::Sell, dec!(7300), dec!(7300), dec!(500));
        assert_eq!(profit, dec!(0));
    }
}
