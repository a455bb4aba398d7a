use crate::catalog::CatalogCollection;
use crate::story::ScreenKind;

/// Analyses a screen may request from the content provider.
///
/// The string key doubles as the memo key, so two screens that ask for the
/// same kind share one cached result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    CarbonFootprint,
    TopBrands,
    Palette,
    SmallBusiness,
    ShippingTime,
    Aesthetics,
    Recommendations,
}

impl AnalysisKind {
    pub const ALL: [Self; 7] = [
        Self::CarbonFootprint,
        Self::TopBrands,
        Self::Palette,
        Self::SmallBusiness,
        Self::ShippingTime,
        Self::Aesthetics,
        Self::Recommendations,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::CarbonFootprint => "carbonFootprint",
            Self::TopBrands => "topBrands",
            Self::Palette => "colorPalette",
            Self::SmallBusiness => "smallBusiness",
            Self::ShippingTime => "shippingTime",
            Self::Aesthetics => "aesthetics",
            Self::Recommendations => "recommendations",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn for_screen(kind: ScreenKind) -> Option<Self> {
        match kind {
            ScreenKind::CarbonFootprint => Some(Self::CarbonFootprint),
            ScreenKind::TopBrands => Some(Self::TopBrands),
            ScreenKind::Palette => Some(Self::Palette),
            ScreenKind::SmallBusiness => Some(Self::SmallBusiness),
            ScreenKind::ShippingTime => Some(Self::ShippingTime),
            ScreenKind::Aesthetics => Some(Self::Aesthetics),
            ScreenKind::Recommendations => Some(Self::Recommendations),
            ScreenKind::Title
            | ScreenKind::PopularProducts
            | ScreenKind::Share
            | ScreenKind::Color => None,
        }
    }

    /// Product collection the analysis payload is built from.
    pub fn source(self) -> CatalogCollection {
        match self {
            Self::Recommendations => CatalogCollection::Recommended,
            _ => CatalogCollection::Saved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AnalysisKind;
    use crate::catalog::CatalogCollection;
    use crate::story::ScreenKind;

    #[test]
    fn keys_parse_back_to_their_kind() {
        for kind in AnalysisKind::ALL {
            assert_eq!(AnalysisKind::parse(kind.key()), Some(kind));
        }
        assert_eq!(AnalysisKind::parse("nope"), None);
    }

    #[test]
    fn only_analysis_screens_map_to_a_kind() {
        assert_eq!(
            AnalysisKind::for_screen(ScreenKind::CarbonFootprint),
            Some(AnalysisKind::CarbonFootprint)
        );
        assert_eq!(AnalysisKind::for_screen(ScreenKind::Title), None);
        assert_eq!(AnalysisKind::for_screen(ScreenKind::Share), None);
        assert_eq!(
            AnalysisKind::Recommendations.source(),
            CatalogCollection::Recommended
        );
        assert_eq!(AnalysisKind::TopBrands.source(), CatalogCollection::Saved);
    }
}
