#[cfg(test)]
mod tests {
    use meal_prep::amount_formatter::format_amount;
    use meal_prep::quantity_parser::{
        detect_quantity_form, parse_ingredient_list, parse_ingredient_quantity, QuantityForm,
    };

    #[test]
    fn test_half_cup_sugar() {
        let parsed = parse_ingredient_quantity("1/2 cup sugar");
        assert_eq!(parsed.amount, 0.5);
        assert_eq!(parsed.unit, "cup");
        assert_eq!(parsed.ingredient_name, "sugar");
    }

    #[test]
    fn test_pattern_priority() {
        assert_eq!(
            detect_quantity_form("1 1/2 cups milk"),
            Some(QuantityForm::MixedFraction)
        );
        assert_eq!(
            detect_quantity_form("3/4 cup rice"),
            Some(QuantityForm::SimpleFraction)
        );
        assert_eq!(
            detect_quantity_form("0.5 kg potatoes"),
            Some(QuantityForm::Decimal)
        );
        assert_eq!(
            detect_quantity_form("250 g spinach"),
            Some(QuantityForm::WholeNumber)
        );
        assert_eq!(
            detect_quantity_form("4 chicken breasts"),
            Some(QuantityForm::BareCount)
        );
        assert_eq!(detect_quantity_form("a handful of basil"), None);
    }

    #[test]
    fn test_volume_units() {
        let cases = [
            ("1 cup water", "cup"),
            ("2 tbsp soy sauce", "tbsp"),
            ("1 tablespoon honey", "tablespoon"),
            ("3 tsp paprika", "tsp"),
            ("2 teaspoons vanilla", "teaspoons"),
            ("8 fl oz broth", "fl oz"),
            ("1 pint cream", "pint"),
            ("2 quarts stock", "quarts"),
            ("1 gallon water", "gallon"),
            ("500 ml milk", "ml"),
            ("2 l water", "l"),
        ];
        for (line, unit) in cases {
            let parsed = parse_ingredient_quantity(line);
            assert_eq!(parsed.unit, unit, "unit for '{}'", line);
            assert!(!parsed.fallback, "'{}' should parse", line);
        }
    }

    #[test]
    fn test_mass_and_count_units() {
        let cases = [
            ("2 lbs chicken", "lbs"),
            ("1 pound pork", "pound"),
            ("6 oz cheese", "oz"),
            ("200 g tofu", "g"),
            ("1 kg rice", "kg"),
            ("4 pieces salmon", "pieces"),
            ("2 items bread", "items"),
            ("1 each lemon", "each"),
            ("1 head broccoli", "head"),
            ("2 bunches kale", "bunches"),
            ("6 cloves garlic", "cloves"),
        ];
        for (line, unit) in cases {
            assert_eq!(parse_ingredient_quantity(line).unit, unit, "unit for '{}'", line);
        }
    }

    #[test]
    fn test_name_keeps_casing() {
        let parsed = parse_ingredient_quantity("2 Cups Greek Yogurt");
        assert_eq!(parsed.unit, "cups");
        assert_eq!(parsed.ingredient_name, "Greek Yogurt");
    }

    #[test]
    fn test_fallback_keeps_whole_line() {
        for line in ["salt and pepper", "a handful of basil", "1.5 avocados"] {
            let parsed = parse_ingredient_quantity(line);
            assert!(parsed.fallback);
            assert_eq!(parsed.amount, 1.0);
            assert_eq!(parsed.unit, "piece");
            assert_eq!(parsed.ingredient_name, line);
        }
    }

    #[test]
    fn test_ingredient_block() {
        let text = r#"
        For the sauce:
        1 1/2 cups tomato puree
        2 cloves garlic

        Garnish:
        fresh basil
        "#;
        let parsed = parse_ingredient_list(text);

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].amount, 1.5);
        assert_eq!(parsed[1].ingredient_name, "garlic");
        assert!(parsed[2].fallback);
    }

    #[test]
    fn test_formatted_amounts_read_like_recipes() {
        assert_eq!(format_amount(3.0), "3");
        assert_eq!(format_amount(0.75), "3/4");
        assert_eq!(format_amount(1.125), "1 1/8");
        assert_eq!(format_amount(4.0 / 3.0), "1 1/3");
        assert_eq!(format_amount(2.45), "2 1/2");
        assert_eq!(format_amount(3.95), "4.0");
    }
}
