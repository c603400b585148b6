//! Serves a read-only summary of a finished Corpus over HTTP, for use by
//! editor integrations or a documentation dashboard that wants to poll
//! extraction progress without reading output files from disk.

use crate::domain::corpus::Corpus;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Serialize)]
struct SymbolSummary {
    id: String,
    name: String,
    kind: &'static str,
}

#[derive(Serialize)]
struct CorpusSummary {
    symbol_count: usize,
    symbols: Vec<SymbolSummary>,
}

async fn summary(State(corpus): State<Arc<Corpus>>) -> Json<CorpusSummary> {
    let symbols = corpus
        .iter_declaration_order()
        .map(|info| SymbolSummary {
            id: info.core().id.to_hex(),
            name: info.core().name.clone(),
            kind: info.kind_name(),
        })
        .collect();
    Json(CorpusSummary {
        symbol_count: corpus.len(),
        symbols,
    })
}

/// Builds the router; callers serve it with `axum::serve`.
pub fn router(corpus: Arc<Corpus>) -> Router {
    Router::new()
        .route("/corpus", get(summary))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::extraction_mode::ExtractionMode;
    use crate::domain::info::{Access, Core, FunctionClass, FunctionInfo, Info};
    use crate::domain::symbol_id::SymbolId;
    use crate::domain::types::Type;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn corpus_endpoint_reports_symbol_count() {
        let mut corpus = Corpus::new();
        let mut core = Core::new(SymbolId::from_fingerprint("foo", 0), "foo", SymbolId::GLOBAL);
        core.access = Access::Public;
        core.mode = ExtractionMode::Regular;
        corpus.insert(Info::Function(FunctionInfo {
            core,
            class: FunctionClass::Free,
            return_type: Type::Builtin {
                name: "void".into(),
                qual: Default::default(),
            },
            params: vec![],
            is_virtual: false,
            is_override: false,
            is_const: false,
            is_noexcept: false,
            is_deleted: false,
            is_defaulted: false,
            template: None,
            lifted_constraint: None,
        }));
        let app = router(Arc::new(corpus));
        let response = app
            .oneshot(Request::builder().uri("/corpus").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
