use crate::story::ScreenKind;

pub const SHARE_TITLE_FALLBACK: &str = "Check out my shopping recap!";

/// Fixed share copy for each screen kind.
pub fn share_text(kind: ScreenKind) -> &'static str {
    match kind {
        ScreenKind::Title => "Check out my shopping recap!",
        ScreenKind::PopularProducts => "These were my most-loved products this year!",
        ScreenKind::CarbonFootprint => "Here's the carbon footprint of my shopping this year.",
        ScreenKind::TopBrands => "My top brands of the year!",
        ScreenKind::Palette => "This is the color palette of my shopping year.",
        ScreenKind::SmallBusiness => "Proud to have supported small businesses this year!",
        ScreenKind::ShippingTime => "All the time I spent waiting on deliveries this year.",
        ScreenKind::Aesthetics => "My shopping aesthetic, summed up.",
        ScreenKind::Recommendations => "What I should shop for next!",
        ScreenKind::Share | ScreenKind::Color => SHARE_TITLE_FALLBACK,
    }
}
