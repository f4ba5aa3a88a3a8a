#[derive(Clone)]
pub struct GameSettings {
    pub max_guesses: usize,
    pub close_absolute: f64,
    pub close_relative: f64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_guesses: 8,
            close_absolute: 1.0,
            close_relative: 0.10,
        }
    }
}

#[derive(Clone)]
pub struct CatalogSettings {
    pub csv_path: &'static str,
    pub salary_floor: i64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            csv_path: "nba_players.csv",
            salary_floor: 15_000_000,
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub game: GameSettings,
    pub catalog: CatalogSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            game: GameSettings::default(),
            catalog: CatalogSettings::default(),
        }
    }
}
