//! Fixed copy for the checkout success screen.
//!
//! Kept as data so a backend-sourced version can replace it without touching
//! the views.

use crate::routes;

pub const SUPPORT_EMAIL: &str = "support@example.com";
pub const SUPPORT_PHONE: &str = "+1 (555) 123-4567";

/// One stage of the "what happens next" illustration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressStep {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Informational card shown under the order summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoPanel {
    pub title: &'static str,
    pub body: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    HelpCenter,
}

/// Contact affordance in the help panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ContactKind,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

impl ContactChannel {
    /// Whether the href is handled by the in-app router rather than the host environment.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.href.starts_with('/')
    }
}

/// Index of the stage a freshly placed order is in.
pub const ACTIVE_STEP: usize = 0;

pub const PROGRESS_STEPS: [ProgressStep; 4] = [
    ProgressStep { title: "Order Processing", description: "We're preparing your items", icon: "package" },
    ProgressStep { title: "Quality Check", description: "Every item is inspected", icon: "shield" },
    ProgressStep { title: "Shipped", description: "On its way to you", icon: "truck" },
    ProgressStep { title: "Delivered", description: "Enjoy your purchase", icon: "check" },
];

pub const INFO_PANELS: [InfoPanel; 3] = [
    InfoPanel {
        title: "Email Confirmation",
        body: "A confirmation with your order details has been sent to your email.",
        icon: "mail",
    },
    InfoPanel {
        title: "Shipping Timeline",
        body: "Your order will ship within 1-2 business days with tracking included.",
        icon: "truck",
    },
    InfoPanel {
        title: "Purchase Protection",
        body: "Your purchase is covered by our 30-day money-back guarantee.",
        icon: "shield",
    },
];

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        kind: ContactKind::Email,
        label: "Email Support",
        value: SUPPORT_EMAIL,
        href: "mailto:support@example.com",
    },
    ContactChannel { kind: ContactKind::Phone, label: "Call Us", value: SUPPORT_PHONE, href: "tel:+15551234567" },
    ContactChannel { kind: ContactKind::HelpCenter, label: "Help Center", value: "Browse FAQs", href: routes::HELP },
];

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
