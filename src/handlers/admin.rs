use std::sync::Arc;

use axum::extract::State;

use super::{json, ApiResp, Consts, Ctx, Result};
use t9suggest::dictionary::IndexStats;

/// Version and output limits.
pub async fn get_config(State(ctx): State<Arc<Ctx>>) -> Result<ApiResp<Consts>> {
    Ok(json(ctx.consts.clone()))
}

/// Dictionary counters.
pub async fn get_stats(State(ctx): State<Arc<Ctx>>) -> Result<ApiResp<IndexStats>> {
    Ok(json(ctx.engine.index().stats()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_ctx;
    use t9suggest::models::ApiConfig;

    #[tokio::test]
    async fn reports_stats() {
        let ctx = test_ctx(&["dog dog cat 42"], ApiConfig::default());
        let stats = get_stats(State(ctx)).await.unwrap().data.unwrap();
        assert_eq!(stats.words, 2);
        assert_eq!(stats.codes, 2);
        assert_eq!(stats.tokens, 4);
        assert_eq!(stats.dropped, 1);
    }

    #[tokio::test]
    async fn reports_config() {
        let limits = ApiConfig {
            max_exact: 5,
            max_completions: 10,
        };
        let consts = get_config(State(test_ctx(&[], limits)))
            .await
            .unwrap()
            .data
            .unwrap();
        assert_eq!(consts.version, "test");
        assert_eq!(consts.limits.max_exact, 5);
        assert_eq!(consts.limits.max_completions, 10);
    }
}
