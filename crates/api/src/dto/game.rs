use getservers_domain::Game;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct GameResponse {
    pub id: &'static str,
    pub name: &'static str,
    pub platform: &'static str,
    pub color: &'static str,
}

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            name: game.name,
            platform: game.platform,
            color: game.color,
        }
    }
}
