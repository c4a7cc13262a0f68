use super::*;
use storefront::order::from_unix_millis;
use storefront::routes::receipt_href;

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn download_receipt_returns_attachment() {
    let response = download_receipt(
        Path("ORD-08800123".to_owned()),
        Query(ReceiptQuery { placed_at: Some(1_706_608_800), offset: None }),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
    assert_eq!(response.headers()[CONTENT_DISPOSITION], "attachment; filename=\"receipt-ORD-08800123.txt\"");

    let body = body_text(response).await;
    assert!(body.contains("ORD-08800123"));
    assert!(body.contains("Friday, February 2, 2024"));
}

#[tokio::test]
async fn download_receipt_defaults_placement_to_now() {
    let response = download_receipt(Path("ORD-00000001".to_owned()), Query(ReceiptQuery { placed_at: None, offset: None }))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Estimated delivery:"));
}

#[tokio::test]
async fn download_receipt_rejects_malformed_order_id() {
    for bad in ["12345678", "ORD-1234", "ORD-abcdefgh", "ORD-123456789"] {
        let err = download_receipt(Path(bad.to_owned()), Query(ReceiptQuery { placed_at: None, offset: None }))
            .await
            .unwrap_err();
        assert_eq!(err, StatusCode::BAD_REQUEST, "order id {bad}");
    }
}

#[tokio::test]
async fn download_receipt_rejects_out_of_range_timestamp() {
    let err = download_receipt(Path("ORD-00000001".to_owned()), Query(ReceiptQuery { placed_at: Some(i64::MAX), offset: None }))
        .await
        .unwrap_err();
    assert_eq!(err, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn download_receipt_matches_view_for_shopper_west_of_utc() {
    // 2024-01-30 21:30 at UTC-5 is already 2024-01-31 in UTC.
    let confirmed = OrderConfirmation::generate(from_unix_millis(1_706_668_200_000, -300));
    assert_eq!(confirmed.estimated_delivery_label, "Friday, February 2, 2024");

    let href = receipt_href(&confirmed);
    assert!(href.ends_with("placed_at=1706668200&offset=-300"), "{href}");

    let response = download_receipt(
        Path(confirmed.order_id.clone()),
        Query(ReceiptQuery { placed_at: Some(1_706_668_200), offset: Some(-300) }),
    )
    .await
    .unwrap();

    let body = body_text(response).await;
    assert!(body.contains(&confirmed.estimated_delivery_label), "{body}");
    assert!(!body.contains("Saturday, February 3, 2024"));
}

#[tokio::test]
async fn download_receipt_rejects_out_of_range_offset() {
    for minutes in [26 * 60, -26 * 60, i32::MAX] {
        let err = download_receipt(
            Path("ORD-00000001".to_owned()),
            Query(ReceiptQuery { placed_at: Some(1_706_608_800), offset: Some(minutes) }),
        )
        .await
        .unwrap_err();
        assert_eq!(err, StatusCode::BAD_REQUEST, "offset {minutes}");
    }
}
