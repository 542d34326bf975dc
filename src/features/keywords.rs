//! Phishing-associated keyword list.
//!
//! The effective list of distinct substrings checked against a lowercased
//! URL. The upstream training list was authored with a few missing
//! separators, which merged adjacent literals into single longer entries
//! (`support-helptransfer`, `.click~.verification`); those merged forms are
//! what the model was trained against, so they are preserved here verbatim
//! rather than split back apart. Plain duplicates from the same authoring
//! pass are collapsed — hit counting is over distinct keywords.

/// Distinct phishing-associated keyword substrings, in original order.
pub const KEYWORDS: [&str; 49] = [
    "login",
    "secure",
    "bank",
    "verify",
    "update",
    "account",
    "password",
    "signin",
    "auth",
    "payment",
    "urgent",
    "alert",
    "confirm",
    "suspend",
    "locked",
    "paypal",
    "credit",
    "billing",
    "invoice",
    "transaction",
    "card",
    "cardholder",
    "cardnumber",
    "cvv",
    "stripe",
    "visa",
    "mastercard",
    "amex",
    "discover",
    "bitcoin",
    "ethereum",
    "litecoin",
    "monero",
    "blockchain",
    "cryptocurrency",
    "wallet",
    "exchange",
    // merged literal: "support-help" + "transfer"
    "support-helptransfer",
    "withdrawal",
    "deposit",
    "refund",
    "reimbursement",
    ".verification",
    ".paypal-security",
    ".login",
    ".verify",
    "verification",
    // merged literal: ".click~" + ".verification"
    ".click~.verification",
    "account.click",
];

/// Counts distinct keywords appearing as substrings of `url_lower`.
///
/// The caller is expected to pass an already-lowercased URL; matching is
/// plain substring containment, so overlapping entries (e.g. `verify` inside
/// `.verify`) each count on their own.
pub fn keyword_hits(url_lower: &str) -> usize {
    KEYWORDS.iter().filter(|kw| url_lower.contains(**kw)).count()
}
