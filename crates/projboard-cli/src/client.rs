//! HTTP client for a running board server.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use projboard_core::{Project, ProjectId, ProjectStatus};

/// Default board server URL.
pub const DEFAULT_URL: &str = "http://127.0.0.1:3030";

/// Outcome of submitting a project.
#[derive(Debug)]
pub enum Submission {
    Created(ProjectId),
    /// The server refused the input; carries the alert text.
    Rejected(String),
}

#[derive(Deserialize)]
struct Created {
    id: ProjectId,
}

#[derive(Deserialize)]
struct Lists {
    active: String,
    finished: String,
}

/// Talks to the board's HTTP endpoints.
#[derive(Clone)]
pub struct BoardClient {
    client: reqwest::Client,
    base_url: String,
}

impl BoardClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        debug!(base_url = %base_url, "BoardClient initialized");
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(5))
                .build()
                .context("Failed to build HTTP client")?,
            base_url,
        })
    }

    /// Submit the project form.
    pub async fn add(&self, title: &str, description: &str, people: &str) -> Result<Submission> {
        let url = format!("{}/projects", self.base_url);
        let response = self
            .client
            .post(&url)
            .form(&[("title", title), ("description", description), ("people", people)])
            .send()
            .await
            .with_context(|| format!("Failed to reach board server at {}", self.base_url))?;

        if response.status() == reqwest::StatusCode::UNPROCESSABLE_ENTITY {
            return Ok(Submission::Rejected(response.text().await?));
        }
        let created: Created = response.error_for_status()?.json().await?;
        Ok(Submission::Created(created.id))
    }

    /// Drop a project onto the list for `status`.
    ///
    /// Returns whether the project is in that list afterwards.
    pub async fn move_project(&self, id: &str, status: ProjectStatus) -> Result<bool> {
        let url = format!("{}/lists/{}/drop", self.base_url, status);
        debug!(url = %url, project_id = %id, "Dropping project");
        let lists: Lists = self
            .client
            .post(&url)
            .form(&[("payload", id)])
            .send()
            .await
            .with_context(|| format!("Failed to reach board server at {}", self.base_url))?
            .error_for_status()?
            .json()
            .await?;

        let target = match status {
            ProjectStatus::Active => &lists.active,
            ProjectStatus::Finished => &lists.finished,
        };
        Ok(target.contains(&format!("data-project-id=\"{id}\"")))
    }

    /// Every project, in creation order.
    pub async fn list(&self) -> Result<Vec<Project>> {
        let url = format!("{}/api/projects", self.base_url);
        let projects = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach board server at {}", self.base_url))?
            .error_for_status()?
            .json()
            .await?;
        Ok(projects)
    }
}
