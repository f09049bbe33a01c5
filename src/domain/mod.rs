//! Domain types shared by the site, the typed prices client, and the proxy.

pub mod entities;
pub mod load_factor;

pub use entities::{start_months, PricingQuery, QuoteRequest, RateOffer, LOAD_FACTORS, UTILITIES};
pub use load_factor::LoadFactor;
