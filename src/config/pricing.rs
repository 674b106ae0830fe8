//! Pricing constants

pub struct PricingConfig {
    /// Charged for the bun alone, whatever goes in it.
    pub base_price: u64,
    /// Appended to every price shown to the user.
    pub currency_suffix: &'static str,
}

pub const PRICING: PricingConfig = PricingConfig {
    base_price: 30,
    currency_suffix: "сом",
};
