use std::fmt;
use std::str::FromStr;

/// The repository a run operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepoContext {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if let Some((owner, repo)) = input.split_once('/')
            && !owner.is_empty()
            && !repo.is_empty()
            && !repo.contains('/')
        {
            return Ok(Self {
                owner: owner.to_string(),
                repo: repo.to_string(),
            });
        }

        anyhow::bail!("invalid repository '{input}', expected owner/repo")
    }
}

impl fmt::Display for RepoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
