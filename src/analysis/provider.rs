use async_trait::async_trait;
use serde_json::{Value, json};

use crate::catalog::Product;
use crate::error::AppResult;

use super::kind::AnalysisKind;

/// External producer of structured analysis for a screen.
///
/// Single shot with no retry contract. Any failure shape (an `Err`, an
/// `error` member, a non-object payload) is folded into "unavailable" by
/// the caller.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn analyze(&self, kind: AnalysisKind, payload: Value) -> AppResult<Value>;
}

pub fn build_payload(kind: AnalysisKind, products: &[Product]) -> Value {
    json!({
        "analysis": kind.key(),
        "products": products,
    })
}
