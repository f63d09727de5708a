// tests/validation_tests.rs - Draft validation rules
//
// Each rule in isolation, then the order in which they short-circuit.

use item_manager::web_app::model::{
    seed_items, validate, Category, Draft, Item, ItemId, ValidationError,
};
use rust_decimal::Decimal;

fn draft(name: &str, category: Option<Category>, price: &str) -> Draft {
    Draft {
        name: name.to_string(),
        category,
        price: price.to_string(),
    }
}

#[test]
fn test_empty_name_rejected() {
    for name in ["", " ", "\t\n  "] {
        let result = validate(&draft(name, Some(Category::Stationary), "1"), &seed_items());
        assert_eq!(result, Err(ValidationError::EmptyName), "name {:?}", name);
    }
}

#[test]
fn test_duplicate_name_case_insensitive() {
    let names = ["Small Kitty Lamp", "small kitty lamp", "  SMALL KITTY LAMP  "];
    for name in names {
        let result = validate(&draft(name, Some(Category::Appliance), "1"), &seed_items());
        assert_eq!(result, Err(ValidationError::DuplicateName), "name {:?}", name);
    }
}

#[test]
fn test_missing_category_rejected() {
    let result = validate(&draft("Stapler", None, "5"), &seed_items());
    assert_eq!(result, Err(ValidationError::MissingCategory));
}

#[test]
fn test_empty_price_rejected() {
    let result = validate(&draft("Stapler", Some(Category::Stationary), ""), &seed_items());
    assert_eq!(result, Err(ValidationError::NegativePrice));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Price must not be less than 0"
    );
}

#[test]
fn test_negative_price_rejected() {
    for price in ["-1", "-0.01", "-1000"] {
        let result = validate(&draft("Stapler", Some(Category::Stationary), price), &seed_items());
        assert_eq!(result, Err(ValidationError::NegativePrice), "price {:?}", price);
    }
}

#[test]
fn test_non_numeric_price_rejected() {
    for price in ["abc", "5abc", "1.2.3", "NaN"] {
        let result = validate(&draft("Stapler", Some(Category::Stationary), price), &seed_items());
        assert_eq!(result, Err(ValidationError::InvalidPrice), "price {:?}", price);
    }
}

#[test]
fn test_zero_price_accepted() {
    let item = validate(&draft("Freebie", Some(Category::Kitchenware), "0"), &seed_items()).unwrap();
    assert_eq!(item.price, Decimal::ZERO);
}

#[test]
fn test_valid_draft_produces_next_item() {
    let item = validate(
        &draft("Stapler", Some(Category::Stationary), "5.5"),
        &seed_items(),
    )
    .unwrap();

    assert_eq!(
        item,
        Item {
            id: ItemId(4),
            name: "Stapler".to_string(),
            category: Category::Stationary,
            price: Decimal::new(55, 1),
        }
    );
}

#[test]
fn test_valid_name_is_trimmed() {
    let item = validate(
        &draft("  Stapler  ", Some(Category::Stationary), "1"),
        &seed_items(),
    )
    .unwrap();
    assert_eq!(item.name, "Stapler");
}

#[test]
fn test_first_item_gets_id_one() {
    let item = validate(&draft("Stapler", Some(Category::Stationary), "1"), &[]).unwrap();
    assert_eq!(item.id, ItemId(1));
}

#[test]
fn test_rule_order() {
    // Every field is wrong; the earliest rule decides the message
    let items = seed_items();
    let cases = [
        (draft("", None, "-1"), ValidationError::EmptyName),
        (draft("Knife Set 4pcs", None, "-1"), ValidationError::DuplicateName),
        (draft("Stapler", None, "-1"), ValidationError::MissingCategory),
        (draft("Stapler", Some(Category::Appliance), "-1"), ValidationError::NegativePrice),
    ];

    for (draft, expected) in cases {
        assert_eq!(validate(&draft, &items), Err(expected.clone()), "draft {:?}", draft);
    }
}

#[test]
fn test_underscore_separators_rejected() {
    for price in ["1_000", "1_0", "_1", "1e1_0"] {
        let result = validate(&draft("Stapler", Some(Category::Stationary), price), &seed_items());
        assert_eq!(result, Err(ValidationError::InvalidPrice), "price {:?}", price);
    }
}

#[test]
fn test_tiny_exponent_rounds_to_zero() {
    // Same value as a 30-digit plain fraction, which also rounds to 0
    let plain = format!("0.{}1", "0".repeat(29));
    for price in ["1e-40", "1E-29", plain.as_str()] {
        let item = validate(&draft("Dust", Some(Category::Stationary), price), &seed_items()).unwrap();
        assert_eq!(item.price, Decimal::ZERO, "price {:?}", price);
    }
}

#[test]
fn test_negative_tiny_exponent_still_negative() {
    let result = validate(&draft("Dust", Some(Category::Stationary), "-1e-40"), &seed_items());
    assert_eq!(result, Err(ValidationError::NegativePrice));
}

#[test]
fn test_too_large_price_rejected() {
    let plain = format!("1{}", "0".repeat(29));
    for price in ["1e30", "1E+30", plain.as_str(), "99999999999999999999999999999"] {
        let result = validate(&draft("Yacht", Some(Category::Appliance), price), &seed_items());
        assert_eq!(result, Err(ValidationError::PriceTooLarge), "price {:?}", price);
    }
    assert_eq!(
        ValidationError::PriceTooLarge.to_string(),
        "Price is too large"
    );
}

#[test]
fn test_exponent_notation_accepted() {
    let cases = [
        ("1e2", Decimal::new(100, 0)),
        ("2.5E1", Decimal::new(25, 0)),
        ("125e-2", Decimal::new(125, 2)),
        ("7e28", Decimal::from_str_exact("70000000000000000000000000000").unwrap()),
    ];
    for (price, expected) in cases {
        let item = validate(&draft("Gadget", Some(Category::Appliance), price), &seed_items()).unwrap();
        assert_eq!(item.price, expected, "price {:?}", price);
    }
}

#[test]
fn test_ids_exhausted() {
    let items = vec![Item::new(u32::MAX, "Last", Category::Appliance, Decimal::ONE)];
    let result = validate(&draft("Stapler", Some(Category::Stationary), "1"), &items);
    assert_eq!(result, Err(ValidationError::IdsExhausted));
}
