pub mod games;
pub mod health;
pub mod servers;

pub use games::list_games;
pub use health::health_check;
pub use servers::get_servers;
