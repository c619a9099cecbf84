//! Subject catalog
//!
//! The built-in list is the Swedish party catalog. A replacement list can be
//! loaded from a JSON file of `{ "subject": ..., "category": ... }` objects.

use crate::error::{CatalogError, GameError, GameResult};
use crate::types::Subject;
use rand::Rng;
use std::path::Path;

const BUILTIN_SUBJECTS: &[(&str, &str)] = &[
    ("fotboll", "sport"),
    ("golf", "sport"),
    ("hockey", "sport"),
    ("tennis", "sport"),
    ("basket", "sport"),
    ("cykel", "fordon"),
    ("bil", "fordon"),
    ("båt", "fordon"),
    ("kanot", "fordon"),
    ("flygplan", "fordon"),
    ("hus", "saker"),
    ("konsert", "musik"),
    ("fiol", "musik"),
    ("piano", "musik"),
    ("gitarr", "musik"),
    ("äpple", "mat"),
    ("banan", "mat"),
    ("tårta", "mat"),
    ("ägg", "mat"),
    ("eld", "utomhus"),
    ("gran", "utomhus"),
    ("hav", "utomhus"),
    ("sol", "utomhus"),
    ("glass", "sommarlov"),
    ("elefant", "djur"),
    ("ko", "djur"),
    ("häst", "djur"),
    ("gris", "djur"),
    ("mygga", "djur"),
    ("geting", "djur"),
    ("krabba", "djur"),
    ("jultomte", "högtider"),
    ("midsommarstång", "högtider"),
    ("påskägg", "högtider"),
    ("halloween-pumpa", "högtider"),
    ("lampa", "elektronik"),
    ("dator", "elektronik"),
    ("smartphone", "elektronik"),
    ("kaffekopp", "saker"),
    ("stekpanna", "saker"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    subjects: Vec<Subject>,
}

impl Catalog {
    pub fn new(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }

    /// The built-in catalog
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_SUBJECTS
                .iter()
                .map(|(subject, category)| Subject::new(*subject, *category))
                .collect(),
        )
    }

    /// Load a catalog from a JSON file. Entries with a blank subject are dropped.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let subjects: Vec<Subject> = serde_json::from_str(raw)?;
        let subjects: Vec<Subject> = subjects
            .into_iter()
            .filter(|s| !s.subject.trim().is_empty())
            .collect();

        if subjects.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self::new(subjects))
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Uniform pick with replacement
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> GameResult<&Subject> {
        if self.subjects.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        Ok(&self.subjects[rng.random_range(0..self.subjects.len())])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
