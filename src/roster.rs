use crate::error::PoolError;
use crate::model::RosterEntry;
use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;

/// Player name to drafting owner, plus the sorted set of owners.
#[derive(Debug, Clone, Default)]
pub struct RosterIndex {
    players: HashMap<String, String>,
    owners: BTreeSet<String>,
}

impl RosterIndex {
    /// Index a roster, enumerating owners from the entries themselves.
    ///
    /// # Errors
    /// Returns `PoolError::DuplicatePlayer` if a player is drafted twice.
    pub fn build(entries: &[RosterEntry]) -> Result<Self, PoolError> {
        let owners = entries.iter().map(|e| e.owner_name.clone()).collect();
        Self::index(entries, owners)
    }

    /// Index a roster against an explicit owner list.
    ///
    /// # Errors
    /// Returns `PoolError::DuplicatePlayer` if a player is drafted twice, or
    /// `PoolError::UnknownOwner` if an entry names an owner outside `owners`.
    pub fn build_with_owners(entries: &[RosterEntry], owners: &[String]) -> Result<Self, PoolError> {
        let owners: BTreeSet<String> = owners.iter().cloned().collect();
        if let Some(stray) = entries.iter().find(|e| !owners.contains(&e.owner_name)) {
            return Err(PoolError::UnknownOwner {
                player: stray.player_name.clone(),
                owner: stray.owner_name.clone(),
            });
        }
        Self::index(entries, owners)
    }

    fn index(entries: &[RosterEntry], owners: BTreeSet<String>) -> Result<Self, PoolError> {
        let mut players = HashMap::with_capacity(entries.len());
        for entry in entries {
            if players
                .insert(entry.player_name.clone(), entry.owner_name.clone())
                .is_some()
            {
                return Err(PoolError::DuplicatePlayer {
                    player: entry.player_name.clone(),
                });
            }
        }
        Ok(Self { players, owners })
    }

    #[must_use]
    pub fn owner_of(&self, player_name: &str) -> Option<&str> {
        self.players.get(player_name).map(String::as_str)
    }

    #[must_use]
    pub fn is_owner(&self, owner: &str) -> bool {
        self.owners.contains(owner)
    }

    /// Owners in ascending name order.
    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.owners.iter().map(String::as_str)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

/// Read `player_name,owner` rows from CSV.
///
/// # Errors
/// Returns an error if the CSV is malformed or a row has an empty name.
pub fn read_roster<R: Read>(reader: R) -> Result<Vec<RosterEntry>, PoolError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();
    for (line, record) in rdr.deserialize::<RosterEntry>().enumerate() {
        let entry = record?;
        if entry.player_name.is_empty() || entry.owner_name.is_empty() {
            return Err(PoolError::Config(format!(
                "roster row {} has an empty player or owner",
                line + 1
            )));
        }
        entries.push(entry);
    }
    Ok(entries)
}

/// # Errors
/// Returns an error if the file cannot be opened or parsed.
pub fn load_roster_csv(path: &Path) -> Result<Vec<RosterEntry>, PoolError> {
    let file = std::fs::File::open(path)
        .map_err(|e| PoolError::Io(format!("open roster {}: {e}", path.display())))?;
    let entries = read_roster(file)?;
    log::info!("loaded {} roster entries from {}", entries.len(), path.display());
    Ok(entries)
}
