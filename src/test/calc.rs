#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::{app::calc::rebalance, models::Position};

    fn position(name: &str, shares: Decimal, price: Decimal, target_weight: Decimal) -> Position {
        Position::new(
            Uuid::new_v4().to_string(),
            name.to_string(),
            shares,
            price,
            target_weight,
        )
    }

    #[test]
    fn empty_portfolio_yields_no_results() {
        assert!(rebalance(&[]).is_empty());
    }

    #[test]
    fn single_position_at_target_needs_no_trade() {
        let positions = vec![position("ACME", dec!(10), dec!(20), dec!(100))];

        let results = rebalance(&positions);

        assert_eq!(results.len(), 1);
        assert_eq!(*results[0].current_value(), dec!(200));
        assert_eq!(*results[0].target_value(), dec!(200));
        assert_eq!(*results[0].difference(), dec!(0));
        assert_eq!(*results[0].trade_quantity(), Some(dec!(0)));
    }

    #[test]
    fn overweight_position_sells_into_underweight_position() {
        let positions = vec![
            position("A", dec!(10), dec!(10), dec!(50)),
            position("B", dec!(5), dec!(10), dec!(50)),
        ];

        let results = rebalance(&positions);

        assert_eq!(*results[0].current_value(), dec!(100));
        assert_eq!(*results[0].target_value(), dec!(75));
        assert_eq!(*results[0].difference(), dec!(-25));
        assert_eq!(*results[0].trade_quantity(), Some(dec!(-2.5)));

        assert_eq!(*results[1].current_value(), dec!(50));
        assert_eq!(*results[1].target_value(), dec!(75));
        assert_eq!(*results[1].difference(), dec!(25));
        assert_eq!(*results[1].trade_quantity(), Some(dec!(2.5)));
    }

    #[test]
    fn values_sum_to_portfolio_totals() {
        let positions = vec![
            position("A", dec!(3), dec!(7.5), dec!(40)),
            position("B", dec!(12), dec!(2.25), dec!(35)),
        ];

        let results = rebalance(&positions);

        let total_current: Decimal = results.iter().map(|r| *r.current_value()).sum();
        let total_target: Decimal = results.iter().map(|r| *r.target_value()).sum();

        assert_eq!(total_current, dec!(49.5));
        assert_eq!(total_target, dec!(49.5) * dec!(75) / dec!(100));
    }

    #[test]
    fn weights_are_not_renormalized() {
        let positions = vec![position("A", dec!(1), dec!(100), dec!(150))];

        let results = rebalance(&positions);

        assert_eq!(*results[0].target_value(), dec!(150));
        assert_eq!(*results[0].trade_quantity(), Some(dec!(0.5)));
    }

    #[test]
    fn results_keep_input_order() {
        let positions = vec![
            position("C", dec!(1), dec!(1), dec!(10)),
            position("A", dec!(1), dec!(1), dec!(10)),
            position("B", dec!(1), dec!(1), dec!(10)),
        ];

        let results = rebalance(&positions);

        let names: Vec<&str> = results.iter().map(|r| r.position().name().as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn zero_price_yields_no_trade_quantity() {
        let positions = vec![
            position("A", dec!(10), dec!(0), dec!(50)),
            position("B", dec!(5), dec!(10), dec!(50)),
        ];

        let results = rebalance(&positions);

        assert_eq!(*results[0].current_value(), dec!(0));
        assert_eq!(*results[0].target_value(), dec!(25));
        assert_eq!(*results[0].trade_quantity(), None);
        assert_eq!(*results[1].trade_quantity(), Some(dec!(-2.5)));
    }
}
