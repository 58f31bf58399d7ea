// Session Settings
//
// Rosters of people the forms validate against. Names are plain strings;
// two rosters exist because the art finisher is chosen at registration
// while the delivery person is chosen at hand-over.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub art_finishers: Vec<String>,
    pub delivery_people: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            art_finishers: vec![
                "Gustavo".to_string(),
                "Gleison".to_string(),
                "Heitor".to_string(),
            ],
            delivery_people: vec![
                "João".to_string(),
                "Maria".to_string(),
                "Pedro".to_string(),
            ],
        }
    }
}

impl Settings {
    /// Build settings from arbitrary rosters, trimming and deduplicating.
    pub fn new<I, J>(art_finishers: I, delivery_people: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        let mut settings = Self {
            art_finishers: Vec::new(),
            delivery_people: Vec::new(),
        };
        for name in art_finishers {
            settings.add_art_finisher(&name);
        }
        for name in delivery_people {
            settings.add_delivery_person(&name);
        }
        settings
    }

    pub fn has_art_finisher(&self, name: &str) -> bool {
        self.art_finishers.iter().any(|n| n == name)
    }

    pub fn has_delivery_person(&self, name: &str) -> bool {
        self.delivery_people.iter().any(|n| n == name)
    }

    /// Add to the art finisher roster. Blank names and duplicates are
    /// ignored; returns whether the roster changed.
    pub fn add_art_finisher(&mut self, name: &str) -> bool {
        Self::add(&mut self.art_finishers, name)
    }

    pub fn remove_art_finisher(&mut self, name: &str) -> bool {
        Self::remove(&mut self.art_finishers, name)
    }

    /// Add to the delivery people roster. Blank names and duplicates are
    /// ignored; returns whether the roster changed.
    pub fn add_delivery_person(&mut self, name: &str) -> bool {
        Self::add(&mut self.delivery_people, name)
    }

    pub fn remove_delivery_person(&mut self, name: &str) -> bool {
        Self::remove(&mut self.delivery_people, name)
    }

    fn add(roster: &mut Vec<String>, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || roster.iter().any(|n| n == name) {
            return false;
        }
        roster.push(name.to_string());
        true
    }

    fn remove(roster: &mut Vec<String>, name: &str) -> bool {
        let before = roster.len();
        roster.retain(|n| n != name);
        roster.len() != before
    }
}
