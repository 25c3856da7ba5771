use crate::{Profile, STARTING_BALANCE};
use serde::{Deserialize, Serialize};

/// On-disk save document.
///
/// A flat key/value JSON object with no schema version. Fields absent from
/// the document fall back to their defaults on load; a document that is not
/// a JSON object fails deserialization outright.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub balance: u64,
    pub spins: u64,
    pub wins: u64,
    pub biggest_win: u64,
    pub hardcore: bool,
    pub total_deposited: u64,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            balance: STARTING_BALANCE,
            spins: 0,
            wins: 0,
            biggest_win: 0,
            hardcore: false,
            total_deposited: 0,
        }
    }
}

impl From<&Profile> for SaveData {
    fn from(profile: &Profile) -> Self {
        Self {
            balance: profile.balance,
            spins: profile.spins,
            wins: profile.wins,
            biggest_win: profile.biggest_win,
            hardcore: profile.hardcore,
            total_deposited: profile.total_deposited,
        }
    }
}

impl SaveData {
    /// Rebuild a profile from saved fields. The hardcore pin is re-applied
    /// immediately, so a hardcore save always loads with the fixed balance
    /// regardless of what the document claims.
    pub fn into_profile(self) -> Profile {
        let mut profile = Profile {
            balance: self.balance,
            spins: self.spins,
            wins: self.wins,
            biggest_win: self.biggest_win,
            total_deposited: self.total_deposited,
            hardcore: self.hardcore,
        };
        profile.apply_hardcore_pin();
        profile
    }
}
