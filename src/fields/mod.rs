//! Per-field extraction cascades.
//!
//! Each submodule resolves one contact field through an ordered set of
//! strategies, from structural DOM lookups down to full-text regex
//! fallbacks. A cascade stops at the first accepted candidate and
//! reports which tier produced it; the scorer turns those tiers into a
//! document confidence.

pub mod company;
pub mod email;
pub mod person;
pub mod phone;
