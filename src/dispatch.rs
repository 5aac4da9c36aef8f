use std::fmt;

use crate::assign::{AssigneeApi, AssignmentClient};
use crate::config::Configuration;
use crate::error::Error;
use crate::github::{Action, EventPayload};

/// What a single dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    SkippedBot,
    SkippedNotIssue,
    NoUsers { label: Option<String> },
    Assigned { issue: u64, users: Vec<String> },
    Unassigned { issue: u64, users: Vec<String> },
    Ignored { action: String },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::SkippedBot => f.write_str("skipped: sender is a bot"),
            Outcome::SkippedNotIssue => f.write_str("skipped: event is not about an issue"),
            Outcome::NoUsers { label: Some(label) } => {
                write!(f, "no users configured for label {label:?}")
            }
            Outcome::NoUsers { label: None } => f.write_str("no label in event"),
            Outcome::Assigned { issue, users } => {
                write!(f, "assigned {} to #{issue}", users.join(", "))
            }
            Outcome::Unassigned { issue, users } => {
                write!(f, "unassigned {} from #{issue}", users.join(", "))
            }
            Outcome::Ignored { action } => write!(f, "ignored action {action:?}"),
        }
    }
}

pub struct Dispatcher<A> {
    assignments: AssignmentClient<A>,
    config: Configuration,
}

impl<A: AssigneeApi> Dispatcher<A> {
    pub fn new(api: A, config: Configuration) -> Self {
        Self {
            assignments: AssignmentClient::new(api),
            config,
        }
    }

    pub async fn run(&self, payload: &EventPayload) -> Result<Outcome, Error> {
        if payload.is_bot() {
            return Ok(Outcome::SkippedBot);
        }

        let Some(issue) = payload.issue_number else {
            return Ok(Outcome::SkippedNotIssue);
        };

        let label = payload.label_name.as_deref();
        let users = label
            .map(|label| self.config.users_for(label))
            .unwrap_or_default();

        match &payload.action {
            Action::Labeled => {
                if self.assignments.add_assignees(issue, users).await? {
                    return Ok(Outcome::Assigned {
                        issue,
                        users: users.to_vec(),
                    });
                }
            }
            Action::Unlabeled => {
                if self.assignments.remove_assignees(issue, users).await? {
                    return Ok(Outcome::Unassigned {
                        issue,
                        users: users.to_vec(),
                    });
                }
            }
            Action::Other(action) => {
                return Ok(Outcome::Ignored {
                    action: action.clone(),
                });
            }
        }

        Ok(Outcome::NoUsers {
            label: label.map(str::to_string),
        })
    }
}
