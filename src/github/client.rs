use anyhow::Context;
use octocrab::service::middleware::retry::RetryConfig;

use super::repo::RepoContext;
use crate::assign::AssigneeApi;
use crate::config::{ContentSource, RemoteFile};
use crate::error::Error;

/// Octocrab bound to the repository the run operates on.
pub struct Client {
    octocrab: octocrab::Octocrab,
    repo: RepoContext,
}

impl Client {
    pub fn new(api_url: &str, token: String, repo: RepoContext) -> anyhow::Result<Self> {
        let octocrab = build_github_client(api_url, token)?;
        Ok(Self { octocrab, repo })
    }

    pub(crate) fn repo(&self) -> &RepoContext {
        &self.repo
    }

    fn contents_route(&self, path: &str) -> String {
        let path = path
            .trim_start_matches('/')
            .split('/')
            .map(urlencoding::encode)
            .collect::<Vec<_>>()
            .join("/");
        format!("/repos/{}/{}/contents/{path}", self.repo.owner, self.repo.repo)
    }

    fn assignees_route(&self, issue: u64) -> String {
        format!(
            "/repos/{}/{}/issues/{issue}/assignees",
            self.repo.owner, self.repo.repo
        )
    }
}

fn build_github_client(api_url: &str, token: String) -> anyhow::Result<octocrab::Octocrab> {
    let client = octocrab::Octocrab::builder()
        .base_uri(api_url)
        .context("failed to set base URI")?
        .personal_token(token)
        .add_retry_config(RetryConfig::None)
        .build()
        .context("failed to build GitHub client")?;
    Ok(client)
}

#[derive(Debug, serde::Deserialize)]
struct ContentFile {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct AssigneesBody<'a> {
    assignees: &'a [String],
}

fn is_not_found(err: &octocrab::Error) -> bool {
    matches!(err, octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404)
}

#[async_trait::async_trait]
impl ContentSource for Client {
    async fn fetch_file(&self, path: &str) -> Result<RemoteFile, Error> {
        tracing::debug!(repo = %self.repo, path, "fetching file");
        match self
            .octocrab
            .get::<ContentFile, _, ()>(self.contents_route(path), None)
            .await
        {
            Ok(file) => Ok(RemoteFile::Present {
                content: file.content,
            }),
            Err(err) if is_not_found(&err) => Ok(RemoteFile::NotFound),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait::async_trait]
impl AssigneeApi for Client {
    async fn add(&self, issue: u64, users: &[String]) -> Result<(), Error> {
        let body = AssigneesBody { assignees: users };
        let _: serde_json::Value = self
            .octocrab
            .post(self.assignees_route(issue), Some(&body))
            .await?;
        Ok(())
    }

    async fn remove(&self, issue: u64, users: &[String]) -> Result<(), Error> {
        let body = AssigneesBody { assignees: users };
        let _: serde_json::Value = self
            .octocrab
            .delete(self.assignees_route(issue), Some(&body))
            .await?;
        Ok(())
    }
}
