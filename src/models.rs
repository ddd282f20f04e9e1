use crate::grid::Lanes;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub category_id: Option<u64>,
    /// Date keys; stored as plain strings so a corrupt entry survives a load.
    #[serde(default)]
    pub marked_days: BTreeSet<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

/// Habits and categories belonging to one owner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Workspace {
    #[serde(default)]
    pub habits: BTreeMap<u64, Habit>,
    #[serde(default)]
    pub categories: BTreeMap<u64, Category>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Owner {
    Guest,
    Account(String),
}

impl Owner {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Owner::Account(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub accounts: BTreeMap<String, Workspace>,
    /// Never serialized, so guest data lives only as long as the process.
    #[serde(skip)]
    pub guest: Workspace,
}

impl AppData {
    pub fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn workspace(&self, owner: &Owner) -> Option<&Workspace> {
        match owner {
            Owner::Guest => Some(&self.guest),
            Owner::Account(user) => self.accounts.get(user),
        }
    }

    /// Creates the account's workspace on first use; only creation paths call this.
    pub fn workspace_mut(&mut self, owner: &Owner) -> &mut Workspace {
        match owner {
            Owner::Guest => &mut self.guest,
            Owner::Account(user) => self.accounts.entry(user.clone()).or_default(),
        }
    }

    pub fn workspace_existing_mut(&mut self, owner: &Owner) -> Option<&mut Workspace> {
        match owner {
            Owner::Guest => Some(&mut self.guest),
            Owner::Account(user) => self.accounts.get_mut(user),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub title: String,
    #[serde(default)]
    pub category_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct RenameHabitRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct AssignCategoryRequest {
    #[serde(default)]
    pub category_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleDayRequest {
    pub date_key: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HabitView {
    pub id: u64,
    pub title: String,
    pub category_id: Option<u64>,
    pub category_name: Option<String>,
    pub marked_days: Vec<String>,
    pub streak: u32,
    pub marked_today: bool,
}

#[derive(Debug, Serialize)]
pub struct CalendarGridResponse {
    pub epoch: String,
    pub today: String,
    pub today_key: String,
    pub total_days: usize,
    pub lanes: Lanes,
}

#[derive(Debug, Serialize)]
pub struct DecodedKeyResponse {
    pub key: String,
    pub month: u32,
    pub day_of_week: u32,
    pub day: u32,
    pub year: i32,
    pub date: String,
}
