use super::*;

#[test]
fn progress_has_four_stages_in_fixed_order() {
    let titles: Vec<&str> = PROGRESS_STEPS.iter().map(|s| s.title).collect();
    assert_eq!(titles, ["Order Processing", "Quality Check", "Shipped", "Delivered"]);
    assert!(ACTIVE_STEP < PROGRESS_STEPS.len());
}

#[test]
fn info_panels_cover_email_shipping_and_protection() {
    let titles: Vec<&str> = INFO_PANELS.iter().map(|p| p.title).collect();
    assert_eq!(titles, ["Email Confirmation", "Shipping Timeline", "Purchase Protection"]);
}

#[test]
fn contact_channels_use_host_handlers_for_email_and_phone() {
    let [email, phone, help] = CONTACT_CHANNELS;
    assert_eq!(email.kind, ContactKind::Email);
    assert!(email.href.starts_with("mailto:"));
    assert!(email.href.ends_with(SUPPORT_EMAIL));
    assert!(!email.is_internal());

    assert_eq!(phone.kind, ContactKind::Phone);
    assert!(phone.href.starts_with("tel:"));
    assert!(!phone.is_internal());

    assert_eq!(help.kind, ContactKind::HelpCenter);
    assert_eq!(help.href, crate::routes::HELP);
    assert!(help.is_internal());
}
