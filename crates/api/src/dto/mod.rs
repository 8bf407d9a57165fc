pub mod game;
pub mod health;

pub use game::GameResponse;
pub use health::HealthResponse;
