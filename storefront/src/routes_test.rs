use super::*;
use time::macros::datetime;

#[test]
fn category_listing_href_targets_products() {
    assert_eq!(category_listing_href("electronics"), "/products?category=electronics");
}

#[test]
fn receipt_href_carries_id_and_placement_seconds() {
    let confirmation = OrderConfirmation::restore("ORD-08800123".to_owned(), datetime!(2024-01-30 10:00 UTC));
    assert_eq!(receipt_href(&confirmation), "/api/orders/ORD-08800123/receipt?placed_at=1706608800&offset=0");
}

#[test]
fn receipt_href_carries_local_offset() {
    let confirmation = OrderConfirmation::restore("ORD-08800123".to_owned(), datetime!(2024-01-30 21:30 -5));
    assert_eq!(receipt_href(&confirmation), "/api/orders/ORD-08800123/receipt?placed_at=1706668200&offset=-300");
}
