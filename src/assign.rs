use crate::error::Error;

/// Assignee writes against issues of one repository.
#[async_trait::async_trait]
pub trait AssigneeApi {
    async fn add(&self, issue: u64, users: &[String]) -> Result<(), Error>;
    async fn remove(&self, issue: u64, users: &[String]) -> Result<(), Error>;
}

#[async_trait::async_trait]
impl<T: AssigneeApi + Sync + ?Sized> AssigneeApi for &T {
    async fn add(&self, issue: u64, users: &[String]) -> Result<(), Error> {
        (**self).add(issue, users).await
    }

    async fn remove(&self, issue: u64, users: &[String]) -> Result<(), Error> {
        (**self).remove(issue, users).await
    }
}

/// Wraps an [`AssigneeApi`] so that an empty user list never reaches the API.
pub struct AssignmentClient<A> {
    api: A,
}

impl<A: AssigneeApi> AssignmentClient<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Returns `false` when there was nobody to assign.
    pub async fn add_assignees(&self, issue: u64, users: &[String]) -> Result<bool, Error> {
        if users.is_empty() {
            return Ok(false);
        }
        tracing::debug!(issue, ?users, "adding assignees");
        self.api.add(issue, users).await?;
        Ok(true)
    }

    /// Returns `false` when there was nobody to unassign.
    pub async fn remove_assignees(&self, issue: u64, users: &[String]) -> Result<bool, Error> {
        if users.is_empty() {
            return Ok(false);
        }
        tracing::debug!(issue, ?users, "removing assignees");
        self.api.remove(issue, users).await?;
        Ok(true)
    }
}
