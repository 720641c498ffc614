//! In-memory project store
//!
//! Keeps each estimate together with its input and owner. Projects are
//! listed in creation order.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::model::{HarvestResult, RooftopInput};

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("Invalid project ID.")]
    InvalidId(String),

    #[error("Project not found or unauthorized.")]
    NotFound,
}

/// A stored estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: String,
    pub input: RooftopInput,
    pub result: HarvestResult,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct ProjectStore {
    // Insertion order doubles as creation order
    projects: RwLock<Vec<Project>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an estimate under `user_id` and return the new project
    pub fn create(&self, user_id: &str, input: RooftopInput, result: HarvestResult) -> Project {
        let project = Project {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            input,
            result,
            created_at: Utc::now(),
        };

        let mut projects = self.projects.write();
        projects.push(project.clone());
        tracing::debug!("Stored project {} ({} total)", project.id, projects.len());

        project
    }

    /// Look up a project by its string id, visible only to its owner
    pub fn get(&self, project_id: &str, user_id: &str) -> Result<Project, StoreError> {
        let id = parse_project_id(project_id)?;

        self.projects
            .read()
            .iter()
            .find(|p| p.id == id && p.user_id == user_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// All projects, skipping `skip` and returning at most `limit`
    pub fn list(&self, limit: usize, skip: usize) -> Vec<Project> {
        self.projects
            .read()
            .iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Projects owned by `user_id`, with the same paging as `list`
    pub fn list_for_user(&self, user_id: &str, limit: usize, skip: usize) -> Vec<Project> {
        self.projects
            .read()
            .iter()
            .filter(|p| p.user_id == user_id)
            .skip(skip)
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.projects.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.read().is_empty()
    }
}

fn parse_project_id(project_id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(project_id).map_err(|_| StoreError::InvalidId(project_id.to_string()))
}
