use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::analysis::{AnalysisKind, ContentProvider};
use crate::catalog::{CatalogProvider, Product};
use crate::error::{AppError, AppResult};

/// Offline catalog and content source backed by a JSON document.
///
/// A missing collection makes its fetch fail, and a missing analysis key
/// makes that analysis unavailable, so failure paths can be exercised
/// without a network.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixtureProvider {
    saved: Option<Vec<Product>>,
    recommended: Option<Vec<Product>>,
    analyses: HashMap<String, Value>,
    latency_ms: u64,
}

impl FixtureProvider {
    pub fn from_json_str(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|source| {
            AppError::invalid_argument(format!("failed to parse catalog fixture: {source}"))
        })
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to read catalog fixture: {}", path.display()),
            )
        })?;
        Self::from_json_str(&raw)
    }

    pub fn sample() -> Self {
        let product = |id: &str, title: &str, vendor: &str, price: f64| Product {
            id: id.to_string(),
            title: title.to_string(),
            vendor: vendor.to_string(),
            price: Some(price),
            currency: Some("USD".to_string()),
            image_url: None,
        };
        let saved = vec![
            product("s1", "Linen Throw Blanket", "Hearth & Loom", 89.0),
            product("s2", "Ceramic Pour-Over Set", "Clay Street", 54.0),
            product("s3", "Merino Crew Socks", "Trailfolk", 22.0),
            product("s4", "Beeswax Candle Trio", "Hearth & Loom", 36.0),
            product("s5", "Recycled Tote", "Second Loop", 28.0),
        ];
        let recommended = vec![
            product("r1", "Stoneware Mug", "Clay Street", 24.0),
            product("r2", "Wool Slippers", "Trailfolk", 68.0),
            product("r3", "Cotton Napkins", "Hearth & Loom", 30.0),
        ];
        let analyses = HashMap::from([
            (
                AnalysisKind::CarbonFootprint.key().to_string(),
                json!({"kgCo2": 41.5, "comparison": "about 160 km by car"}),
            ),
            (
                AnalysisKind::TopBrands.key().to_string(),
                json!({"brands": ["Hearth & Loom", "Clay Street", "Trailfolk"]}),
            ),
            (
                AnalysisKind::Palette.key().to_string(),
                json!({"colors": ["#d8c3a5", "#8e8d8a", "#e98074"]}),
            ),
            (
                AnalysisKind::SmallBusiness.key().to_string(),
                json!({"share": "4 of 5 purchases came from independent shops"}),
            ),
            (
                AnalysisKind::ShippingTime.key().to_string(),
                json!({"averageDays": 3.4}),
            ),
            (
                AnalysisKind::Aesthetics.key().to_string(),
                json!({"aesthetic": "cozy minimalist"}),
            ),
        ]);
        Self {
            saved: Some(saved),
            recommended: Some(recommended),
            analyses,
            latency_ms: 400,
        }
    }

    async fn simulate_latency(&self) {
        if self.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.latency_ms)).await;
        }
    }
}

#[async_trait]
impl CatalogProvider for FixtureProvider {
    async fn fetch_saved(&self, limit: usize) -> AppResult<Vec<Product>> {
        self.simulate_latency().await;
        let items = self
            .saved
            .as_ref()
            .ok_or_else(|| AppError::catalog("saved", "not present in fixture"))?;
        Ok(items.iter().take(limit).cloned().collect())
    }

    async fn fetch_recommended(&self, limit: usize) -> AppResult<Vec<Product>> {
        self.simulate_latency().await;
        let items = self
            .recommended
            .as_ref()
            .ok_or_else(|| AppError::catalog("recommended", "not present in fixture"))?;
        Ok(items.iter().take(limit).cloned().collect())
    }
}

#[async_trait]
impl ContentProvider for FixtureProvider {
    async fn analyze(&self, kind: AnalysisKind, _payload: Value) -> AppResult<Value> {
        self.simulate_latency().await;
        self.analyses
            .get(kind.key())
            .cloned()
            .ok_or_else(|| AppError::analysis(kind.key(), "not present in fixture"))
    }
}
