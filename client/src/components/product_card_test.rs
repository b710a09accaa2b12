use super::*;

#[test]
fn whole_prices_have_no_decimals() {
    assert_eq!(format_price(499.0), "₹499");
}

#[test]
fn fractional_prices_keep_their_digits() {
    assert_eq!(format_price(49.99), "₹49.99");
    assert_eq!(format_price(0.5), "₹0.5");
}
