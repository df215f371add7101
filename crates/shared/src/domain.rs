use serde::Serialize;

/// A static pricing tier shown below the generator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub const PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Basic",
        price: "$9",
        description: "10 Template Inti",
        features: &["AutoMarket Forge", "Format JSON"],
        popular: false,
    },
    PricingPlan {
        name: "Pro",
        price: "$19",
        description: "50 Template + Panduan",
        features: &["Semua Template", "Notion Guide", "Commercial License"],
        popular: true,
    },
    PricingPlan {
        name: "Premium",
        price: "$39",
        description: "Akses Seumur Hidup",
        features: &["Semua Fitur Pro", "Update Seumur Hidup", "Early Access"],
        popular: false,
    },
];

pub fn pricing_plans() -> &'static [PricingPlan] {
    &PRICING_PLANS
}
