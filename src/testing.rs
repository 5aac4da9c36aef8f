use std::collections::HashMap;
use std::sync::Mutex;

use base64::Engine;

use crate::assign::AssigneeApi;
use crate::config::{ContentSource, RemoteFile};
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Add { issue: u64, users: Vec<String> },
    Remove { issue: u64, users: Vec<String> },
}

/// In-memory repository that records every request made against it.
#[derive(Default)]
pub(crate) struct FakeGitHub {
    files: HashMap<String, Option<String>>,
    fetched: Mutex<Vec<String>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeGitHub {
    pub(crate) fn with_file(mut self, path: &str, content: Option<String>) -> Self {
        self.files.insert(path.to_string(), content);
        self
    }

    pub(crate) fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ContentSource for FakeGitHub {
    async fn fetch_file(&self, path: &str) -> Result<RemoteFile, Error> {
        self.fetched.lock().unwrap().push(path.to_string());
        Ok(match self.files.get(path) {
            Some(content) => RemoteFile::Present {
                content: content.clone(),
            },
            None => RemoteFile::NotFound,
        })
    }
}

#[async_trait::async_trait]
impl AssigneeApi for FakeGitHub {
    async fn add(&self, issue: u64, users: &[String]) -> Result<(), Error> {
        self.calls.lock().unwrap().push(Call::Add {
            issue,
            users: users.to_vec(),
        });
        Ok(())
    }

    async fn remove(&self, issue: u64, users: &[String]) -> Result<(), Error> {
        self.calls.lock().unwrap().push(Call::Remove {
            issue,
            users: users.to_vec(),
        });
        Ok(())
    }
}

pub(crate) fn encode(text: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(text)
}
