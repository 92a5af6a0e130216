//! Project domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use uuid::Uuid;

use crate::error::BoardError;

/// Opaque project identity, assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generate a fresh, never-reused id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Project status (board list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    /// Both statuses, in board order.
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    /// Parse from string (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(BoardError::UnknownStatus(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Heading shown above the list for this status.
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.as_str().to_uppercase())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project on the board.
///
/// Title, description and people are validated at the creation boundary, not here.
/// `status` is only ever changed by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    pub(crate) fn new(title: &str, description: &str, people: u32) -> Self {
        Self {
            id: ProjectId::generate(),
            title: title.to_string(),
            description: description.to_string(),
            people,
            status: ProjectStatus::Active,
        }
    }
}

/// Immutable copy of the full project collection at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Rc<[Project]>);

impl Snapshot {
    pub(crate) fn capture(projects: &[Project]) -> Self {
        Self(Rc::from(projects))
    }

    /// Look up a project by id.
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.0.iter().find(|p| &p.id == id)
    }

    /// Projects with the given status, in collection order.
    pub fn with_status(&self, status: ProjectStatus) -> impl Iterator<Item = &Project> {
        self.0.iter().filter(move |p| p.status == status)
    }

    /// Owned copy of the projects, for handing across threads.
    pub fn to_vec(&self) -> Vec<Project> {
        self.0.to_vec()
    }
}

impl Deref for Snapshot {
    type Target = [Project];

    fn deref(&self) -> &[Project] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(ProjectStatus::parse("active").unwrap(), ProjectStatus::Active);
        assert_eq!(ProjectStatus::parse(" Finished ").unwrap(), ProjectStatus::Finished);
        assert!(matches!(
            ProjectStatus::parse("done"),
            Err(BoardError::UnknownStatus(s)) if s == "done"
        ));
    }

    #[test]
    fn test_status_heading() {
        assert_eq!(ProjectStatus::Active.heading(), "ACTIVE PROJECTS");
        assert_eq!(ProjectStatus::Finished.heading(), "FINISHED PROJECTS");
    }

    #[test]
    fn test_new_project_is_active() {
        let project = Project::new("Learn X", "Build a sample app", 3);
        assert_eq!(project.status, ProjectStatus::Active);
        assert!(!project.id.as_str().is_empty());
    }

    #[test]
    fn test_project_wire_fields() {
        let mut project = Project::new("Learn X", "Build a sample app", 3);
        project.id = ProjectId::from("p1");
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["id"], "p1");
        assert_eq!(json["people"], 3);
        assert_eq!(json["status"], "active");
    }

    #[test]
    fn test_snapshot_filter_keeps_order() {
        let mut a = Project::new("a", "aaaaa", 1);
        let b = Project::new("b", "bbbbb", 2);
        let c = Project::new("c", "ccccc", 3);
        a.status = ProjectStatus::Finished;
        let snapshot = Snapshot::capture(&[a.clone(), b.clone(), c.clone()]);

        let active: Vec<_> = snapshot.with_status(ProjectStatus::Active).collect();
        assert_eq!(active, vec![&b, &c]);
        assert_eq!(snapshot.get(&a.id), Some(&a));
        assert_eq!(snapshot.len(), 3);
    }
}
