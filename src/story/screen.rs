use serde::Deserialize;

/// Discriminant of a [`Screen`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Title,
    PopularProducts,
    CarbonFootprint,
    TopBrands,
    Palette,
    SmallBusiness,
    ShippingTime,
    Aesthetics,
    Recommendations,
    Share,
    Color,
}

impl ScreenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::PopularProducts => "popular-products",
            Self::CarbonFootprint => "carbon-footprint",
            Self::TopBrands => "top-brands",
            Self::Palette => "palette",
            Self::SmallBusiness => "small-business",
            Self::ShippingTime => "shipping-time",
            Self::Aesthetics => "aesthetics",
            Self::Recommendations => "recommendations",
            Self::Share => "share",
            Self::Color => "color",
        }
    }

    /// Whether a screen of this kind may appear in the share carousel.
    pub fn is_shareable(self) -> bool {
        !matches!(self, Self::Share | Self::Color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Screen {
    Title {
        image: String,
        #[serde(default)]
        heading: Option<String>,
    },
    PopularProducts,
    CarbonFootprint,
    TopBrands,
    Palette,
    SmallBusiness,
    ShippingTime,
    Aesthetics,
    Recommendations,
    Share,
    Color {
        value: String,
        text: String,
    },
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::Title { .. } => ScreenKind::Title,
            Self::PopularProducts => ScreenKind::PopularProducts,
            Self::CarbonFootprint => ScreenKind::CarbonFootprint,
            Self::TopBrands => ScreenKind::TopBrands,
            Self::Palette => ScreenKind::Palette,
            Self::SmallBusiness => ScreenKind::SmallBusiness,
            Self::ShippingTime => ScreenKind::ShippingTime,
            Self::Aesthetics => ScreenKind::Aesthetics,
            Self::Recommendations => ScreenKind::Recommendations,
            Self::Share => ScreenKind::Share,
            Self::Color { .. } => ScreenKind::Color,
        }
    }

    pub fn title(image: impl Into<String>) -> Self {
        Self::Title {
            image: image.into(),
            heading: None,
        }
    }

    pub fn color(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Color {
            value: value.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Screen, ScreenKind};

    #[test]
    fn share_and_color_screens_are_not_shareable() {
        assert!(!ScreenKind::Share.is_shareable());
        assert!(!ScreenKind::Color.is_shareable());
        assert!(ScreenKind::Title.is_shareable());
        assert!(ScreenKind::TopBrands.is_shareable());
    }

    #[test]
    fn kind_follows_variant() {
        assert_eq!(Screen::title("hero.png").kind(), ScreenKind::Title);
        assert_eq!(Screen::color("#ff0", "hi").kind(), ScreenKind::Color);
        assert_eq!(Screen::Share.kind().as_str(), "share");
    }
}
