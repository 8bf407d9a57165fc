//! Static catalog of the game clients whose servers appear in the directory.
//!
//! Maps short game ids from the upstream payload to a display name, the
//! hosting platform, and the accent color the front-end uses for badges.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    pub id: &'static str,
    pub name: &'static str,
    pub platform: &'static str,
    pub color: &'static str,
}

pub const GAMES: &[Game] = &[
    Game { id: "iw5mp", name: "Modern Warfare 3", platform: "Plutonium", color: "#7ac431" },
    Game { id: "t4mp", name: "World at War", platform: "Plutonium", color: "#6495ed" },
    Game { id: "t4sp", name: "World at War: Zombies", platform: "Plutonium", color: "#6495ed" },
    Game { id: "t5mp", name: "Black Ops", platform: "Plutonium", color: "#e02a14" },
    Game { id: "t5sp", name: "Black Ops: Zombies", platform: "Plutonium", color: "#e02a14" },
    Game { id: "t6mp", name: "Black Ops II", platform: "Plutonium", color: "#ff7c1f" },
    Game { id: "t6zm", name: "Black Ops II: Zombies", platform: "Plutonium", color: "#ec6f14" },
    Game { id: "iw4", name: "Modern Warfare 2", platform: "IW4x", color: "#edd95c" },
    Game { id: "iw6", name: "Ghosts", platform: "AlterWare", color: "#9e9e9e" },
    Game { id: "s1", name: "Advanced Warfare", platform: "AlterWare", color: "#a311ff" },
    Game { id: "t7", name: "Black Ops III", platform: "AlterWare", color: "#aa77dd" },
    Game { id: "h1", name: "Modern Warfare Remastered", platform: "Aurora", color: "#46e682" },
    Game { id: "iw7", name: "Infinite Warfare", platform: "Aurora", color: "#00b4ff" },
    Game { id: "h2m", name: "H2M-Mod", platform: "H2M-Mod", color: "#ffdc32" },
    Game { id: "cod4x", name: "Call of Duty 4", platform: "CoD4x", color: "#1a75ff" },
];

pub fn by_id(id: &str) -> Option<&'static Game> {
    GAMES.iter().find(|g| g.id == id)
}

/// Case-insensitive lookup of a hosting platform's canonical name.
pub fn platform_by_name(name: &str) -> Option<&'static str> {
    GAMES
        .iter()
        .map(|g| g.platform)
        .find(|p| p.eq_ignore_ascii_case(name))
}

/// Display name for a browse filter: platform match first, then game id,
/// then the raw filter unchanged.
pub fn display_name_for_filter(filter: &str) -> &str {
    if let Some(platform) = platform_by_name(filter) {
        return platform;
    }
    match by_id(filter) {
        Some(game) => game.name,
        None => filter,
    }
}
