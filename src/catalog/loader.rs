use std::fs;

use anyhow::{bail, Context, Result};
use log::info;

use super::csv::parse_rows;
use super::normalize::{normalize_name, parse_salary, split_name_and_jersey};
use crate::config::settings::CatalogSettings;
use crate::domain::Player;

/// The immutable set of eligible players. Built once at startup, shared
/// read-only behind an `Arc` for the lifetime of the process.
pub struct Catalog {
    players: Vec<Player>,
    normalized_names: Vec<String>,
}

impl Catalog {
    /// Load the catalog from the roster CSV named in the settings, honoring
    /// a `CATALOG_PATH` environment override.
    pub fn load_default(settings: &CatalogSettings) -> Result<Catalog> {
        let path = std::env::var("CATALOG_PATH")
            .unwrap_or_else(|_| settings.csv_path.to_string());
        Self::load(&path, settings.salary_floor)
    }

    pub fn load(path: &str, salary_floor: i64) -> Result<Catalog> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster dataset: {}", path))?;
        let catalog = Self::from_csv(&text, salary_floor)?;
        info!("Loaded {} eligible players from {}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn from_csv(text: &str, salary_floor: i64) -> Result<Catalog> {
        let mut rows = parse_rows(text);
        if rows.is_empty() {
            bail!("Roster dataset is empty");
        }

        let header = rows.remove(0);
        let columns = resolve_columns(&header)?;

        let mut players = Vec::new();
        for row in &rows {
            if let Some(player) = build_player(row, &columns, salary_floor) {
                players.push(player);
            }
        }

        if players.is_empty() {
            bail!("No players above the salary floor of {}", salary_floor);
        }

        let normalized_names = players.iter().map(|p| normalize_name(&p.name)).collect();
        Ok(Catalog {
            players,
            normalized_names,
        })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    /// Linear scan over normalized names; first match wins. The catalog is
    /// assumed free of normalized-name collisions. A partial guess like
    /// "embiid" falls back to the first name containing it.
    pub fn find_by_normalized_name(&self, input: &str) -> Option<&Player> {
        let wanted = normalize_name(input);
        if wanted.is_empty() {
            return None;
        }

        self.normalized_names
            .iter()
            .position(|name| *name == wanted)
            .or_else(|| {
                self.normalized_names
                    .iter()
                    .position(|name| name.contains(&wanted))
            })
            .map(|idx| &self.players[idx])
    }
}

struct ColumnIndexes {
    name: usize,
    team: usize,
    position: usize,
    age: usize,
    salary: usize,
}

fn resolve_columns(header: &[String]) -> Result<ColumnIndexes> {
    let find = |wanted: &str| -> Result<usize> {
        header
            .iter()
            .position(|h| h.trim() == wanted)
            .with_context(|| format!("Roster dataset is missing column: {}", wanted))
    };

    Ok(ColumnIndexes {
        name: find("Name")?,
        team: find("Team")?,
        position: find("POS")?,
        age: find("Age")?,
        salary: find("Salary")?,
    })
}

fn build_player(row: &[String], columns: &ColumnIndexes, salary_floor: i64) -> Option<Player> {
    let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("").to_string();

    let salary = cell(columns.salary);
    if parse_salary(&salary) <= salary_floor {
        return None;
    }

    let (name, jersey) = split_name_and_jersey(&cell(columns.name));
    if name.is_empty() {
        return None;
    }

    Some(Player {
        name,
        jersey,
        team: cell(columns.team),
        position: cell(columns.position),
        age: cell(columns.age),
        salary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = "\
Name,Team,POS,Age,Salary
Joel Embiid21,PHI,C,29,\"$51,415,938\"
Bench Guy12,PHI,G,24,\"$2,100,000\"
Luka Doncic77,DAL,PG,25,\"$40,064,220\"
,BOS,F,27,\"$30,000,000\"
Mystery Man,TOR,SF,26,n/a
";

    #[test]
    fn test_load_filters_by_salary_floor() {
        let catalog = Catalog::from_csv(ROSTER, 15_000_000).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.players()[0].name, "Joel Embiid");
        assert_eq!(catalog.players()[1].name, "Luka Doncic");
    }

    #[test]
    fn test_load_splits_jersey_from_name() {
        let catalog = Catalog::from_csv(ROSTER, 15_000_000).unwrap();
        let embiid = &catalog.players()[0];
        assert_eq!(embiid.jersey, "21");
        assert_eq!(embiid.team, "PHI");
        assert_eq!(embiid.position, "C");
        assert_eq!(embiid.age, "29");
        assert_eq!(embiid.salary, "$51,415,938");
    }

    #[test]
    fn test_malformed_salary_excludes_row_without_failing() {
        let catalog = Catalog::from_csv(ROSTER, 15_000_000).unwrap();
        assert!(catalog.find_by_normalized_name("Mystery Man").is_none());
    }

    #[test]
    fn test_find_by_normalized_name_variants() {
        let catalog = Catalog::from_csv(ROSTER, 15_000_000).unwrap();
        for input in ["Joel Embiid", "joel-embiid", "JOELEMBIID", "  joel embiid  "] {
            let found = catalog.find_by_normalized_name(input);
            assert_eq!(found.map(|p| p.name.as_str()), Some("Joel Embiid"));
        }
    }

    #[test]
    fn test_find_by_partial_name() {
        let catalog = Catalog::from_csv(ROSTER, 15_000_000).unwrap();
        let found = catalog.find_by_normalized_name("embiid");
        assert_eq!(found.map(|p| p.name.as_str()), Some("Joel Embiid"));
        assert!(catalog.find_by_normalized_name("").is_none());
    }

    #[test]
    fn test_find_unknown_name() {
        let catalog = Catalog::from_csv(ROSTER, 15_000_000).unwrap();
        assert!(catalog.find_by_normalized_name("Michael Jordan").is_none());
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let result = Catalog::from_csv("Name,Team,Age,Salary\nA,B,20,\"$20,000,000\"\n", 15_000_000);
        assert!(result.is_err());
    }
}
