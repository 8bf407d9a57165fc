use crate::dto::GameResponse;
use axum::Json;
use getservers_domain::games;

/// The static game catalog the front-end uses for names, platforms and
/// badge colors.
pub async fn list_games() -> Json<Vec<GameResponse>> {
    Json(games::GAMES.iter().map(GameResponse::from).collect())
}
