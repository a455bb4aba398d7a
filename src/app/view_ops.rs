use crate::analysis::{AnalysisKind, GuardState};
use crate::cache::CollectionState;
use crate::catalog::{CatalogCollection, Product};
use crate::error::AppResult;
use crate::story::{Screen, ScreenKind};
use crate::ui::{self, CardBody, CardView, DebugStats};

use super::core::App;
use super::terminal_session::TerminalSurface;

const PRODUCT_PREVIEW_LIMIT: usize = 5;

impl App {
    pub(super) fn render_frame(&self, session: &mut impl TerminalSurface) -> AppResult<()> {
        let view = self.card_view();
        let stats = self.debug_stats();
        let story_id = self.playback.current_story().id.as_str();
        session.draw(|frame| {
            let layout = ui::split_layout(frame.area(), self.state.debug_status_visible);
            ui::draw_card(frame, layout.card, &view);
            if let Some(carousel) = self.carousel.as_ref() {
                ui::draw_share_overlay(frame, layout.card, carousel);
            }
            ui::draw_status(frame, layout.status, &self.state, story_id, stats);
        })?;
        Ok(())
    }

    /// Width of the drawable surface, used to split taps into halves.
    pub(super) fn surface_width(session: &impl TerminalSurface) -> u16 {
        session.size().map_or(0, |size| size.width)
    }

    pub fn card_view(&self) -> CardView {
        let position = self.playback.position();
        let story = self.playback.current_story();
        let progress = format!(
            "{}/{} · story {}/{}",
            position.screen_index + 1,
            story.len(),
            position.story_index + 1,
            self.playback.deck().len()
        );

        let screen = self.playback.current_screen();
        let heading = heading_for(screen).to_string();
        let (subtitle, body, accent) = match screen {
            Screen::Title { image, .. } => (
                Some(image.clone()),
                self.products_body(CatalogCollection::Saved),
                None,
            ),
            Screen::PopularProducts => (None, self.products_body(CatalogCollection::Saved), None),
            Screen::Share => {
                let count = self.carousel.as_ref().map_or(0, |carousel| carousel.len());
                (
                    None,
                    CardBody::Lines(vec![format!("{count} screens ready to share")]),
                    None,
                )
            }
            Screen::Color { value, .. } => (None, CardBody::Lines(Vec::new()), Some(value.clone())),
            Screen::CarbonFootprint
            | Screen::TopBrands
            | Screen::Palette
            | Screen::SmallBusiness
            | Screen::ShippingTime
            | Screen::Aesthetics
            | Screen::Recommendations => {
                let body = AnalysisKind::for_screen(screen.kind())
                    .map_or(CardBody::Lines(Vec::new()), |kind| self.analysis_body(kind));
                (None, body, None)
            }
        };

        CardView {
            heading,
            subtitle,
            body,
            accent,
            progress,
        }
    }

    pub fn debug_stats(&self) -> DebugStats {
        DebugStats {
            ready: self.cache.is_ready(),
            memo_hit_rate: self.cache.memo_hit_rate(),
            analyses_in_flight: self.analyses.in_flight(),
        }
    }

    fn products_body(&self, collection: CatalogCollection) -> CardBody {
        match self.cache.collection_state(collection) {
            CollectionState::Loading => CardBody::Loading("loading products...".to_string()),
            CollectionState::Failed(error) => {
                CardBody::Failed(format!("can't load products: {}", error.message))
            }
            CollectionState::Loaded(0) => CardBody::Lines(vec!["no products yet".to_string()]),
            CollectionState::Loaded(_) => {
                let items = self
                    .cache
                    .get(collection, Some(PRODUCT_PREVIEW_LIMIT))
                    .unwrap_or_default();
                CardBody::Lines(items.iter().map(product_line).collect())
            }
        }
    }

    fn analysis_body(&self, kind: AnalysisKind) -> CardBody {
        if let Some(result) = self.cache.peek_analysis(kind.key()) {
            return CardBody::Lines(result.summary_lines());
        }

        match self.analyses.state(kind) {
            GuardState::Failed(error) => {
                CardBody::Failed(format!("analysis unavailable: {}", error.message))
            }
            GuardState::InFlight | GuardState::Done => {
                CardBody::Loading("analyzing your purchases...".to_string())
            }
            GuardState::NotStarted => match self.cache.collection_state(kind.source()) {
                CollectionState::Failed(error) => {
                    CardBody::Failed(format!("can't load products: {}", error.message))
                }
                CollectionState::Loaded(0) => {
                    CardBody::Lines(vec!["not enough products to analyze".to_string()])
                }
                CollectionState::Loading | CollectionState::Loaded(_) => {
                    CardBody::Loading("waiting for products...".to_string())
                }
            },
        }
    }
}

fn product_line(product: &Product) -> String {
    match (product.vendor.is_empty(), product.price) {
        (true, None) => product.title.clone(),
        (false, None) => format!("{} · {}", product.title, product.vendor),
        (true, Some(price)) => format!("{} · {price:.2}", product.title),
        (false, Some(price)) => format!("{} · {} · {price:.2}", product.title, product.vendor),
    }
}

fn heading_for(screen: &Screen) -> &str {
    match screen {
        Screen::Title { heading, .. } => heading.as_deref().unwrap_or("Your shopping recap"),
        Screen::Color { text, .. } => text.as_str(),
        other => match other.kind() {
            ScreenKind::PopularProducts => "Your most-loved products",
            ScreenKind::CarbonFootprint => "Your carbon footprint",
            ScreenKind::TopBrands => "Your top brands",
            ScreenKind::Palette => "Your color palette",
            ScreenKind::SmallBusiness => "Small businesses you supported",
            ScreenKind::ShippingTime => "Time spent waiting on deliveries",
            ScreenKind::Aesthetics => "Your shopping aesthetic",
            ScreenKind::Recommendations => "Picked for you next",
            ScreenKind::Share => "Share your recap",
            ScreenKind::Title | ScreenKind::Color => "",
        },
    }
}
