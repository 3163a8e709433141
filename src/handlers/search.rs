use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use super::{json, ApiErr, ApiResp, Ctx, Result};
use t9suggest::{keypad, models::SuggestResults};

/// Exact matches and completions for a keypad digit sequence.
pub async fn suggest(
    State(ctx): State<Arc<Ctx>>,
    Path(digits): Path<String>,
) -> Result<ApiResp<SuggestResults>> {
    if !keypad::is_valid_digit_sequence(&digits) {
        return Err(ApiErr::new(
            format!("invalid input sequence: {}", digits),
            StatusCode::BAD_REQUEST,
        ));
    }

    let s = ctx.engine.suggest(&digits);
    Ok(json(SuggestResults::new(&digits, &s, &ctx.consts.limits)))
}

/// Keypad code of a single word.
pub async fn encode(Path(word): Path<String>) -> Result<ApiResp<String>> {
    Ok(json(keypad::encode(&word)?))
}
