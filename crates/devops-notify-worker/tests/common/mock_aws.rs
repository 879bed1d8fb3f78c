/// Mock AWS services for integration testing
use async_trait::async_trait;
use devops_notify_core::error::NotifyError;
use devops_notify_core::models::{CommitDetails, TemplatedEmail};
use devops_notify_core::services::codecommit::CodeCommitService;
use devops_notify_core::services::codepipeline::{ActionExecution, PipelineService};
use devops_notify_core::services::iam::IdentityService;
use devops_notify_core::services::ses::TemplatedEmailSender;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Mock CodeCommit: approval rules per pull request and commits per id
#[derive(Default)]
pub struct MockCodeCommit {
    pub approval_rules: Mutex<HashMap<String, Vec<String>>>,
    pub commits: Mutex<HashMap<String, CommitDetails>>,
    pub failing_commits: Mutex<HashSet<String>>,
    pub calls: Mutex<Vec<String>>,
}

impl MockCodeCommit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_approval_rules(&self, pull_request_id: &str, rules: Vec<String>) {
        self.approval_rules
            .lock()
            .unwrap()
            .insert(pull_request_id.to_string(), rules);
    }

    pub fn put_commit(&self, commit_id: &str, details: CommitDetails) {
        self.commits
            .lock()
            .unwrap()
            .insert(commit_id.to_string(), details);
    }

    pub fn fail_commit(&self, commit_id: &str) {
        self.failing_commits
            .lock()
            .unwrap()
            .insert(commit_id.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn commit_fetches(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| c.strip_prefix("GetCommit:").map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl CodeCommitService for MockCodeCommit {
    async fn get_approval_rule_contents(
        &self,
        pull_request_id: &str,
    ) -> Result<Vec<String>, NotifyError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("GetPullRequest:{}", pull_request_id));

        self.approval_rules
            .lock()
            .unwrap()
            .get(pull_request_id)
            .cloned()
            .ok_or_else(|| {
                NotifyError::CodeCommit(format!("PullRequestDoesNotExist: {}", pull_request_id))
            })
    }

    async fn get_commit(
        &self,
        repository_name: &str,
        commit_id: &str,
    ) -> Result<CommitDetails, NotifyError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("GetCommit:{}", commit_id));

        if self.failing_commits.lock().unwrap().contains(commit_id) {
            return Err(NotifyError::CodeCommit(format!(
                "CommitDoesNotExist: {}@{}",
                repository_name, commit_id
            )));
        }

        Ok(self
            .commits
            .lock()
            .unwrap()
            .get(commit_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Mock CodePipeline returning a fixed list of action executions
#[derive(Default)]
pub struct MockPipeline {
    pub actions: Mutex<Vec<ActionExecution>>,
    pub fail: Mutex<bool>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl MockPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_actions(&self, actions: Vec<ActionExecution>) {
        *self.actions.lock().unwrap() = actions;
    }

    pub fn fail_requests(&self) {
        *self.fail.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PipelineService for MockPipeline {
    async fn list_action_executions(
        &self,
        pipeline_name: &str,
        pipeline_execution_id: &str,
    ) -> Result<Vec<ActionExecution>, NotifyError> {
        self.calls
            .lock()
            .unwrap()
            .push((pipeline_name.to_string(), pipeline_execution_id.to_string()));

        if *self.fail.lock().unwrap() {
            return Err(NotifyError::CodePipeline(format!(
                "PipelineNotFoundException: {}",
                pipeline_name
            )));
        }

        Ok(self.actions.lock().unwrap().clone())
    }
}

/// Mock IAM with tags per user name
#[derive(Default)]
pub struct MockIam {
    pub users: Mutex<HashMap<String, Vec<(String, String)>>>,
    pub calls: Mutex<Vec<String>>,
}

impl MockIam {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_user(&self, user_name: &str, tags: &[(&str, &str)]) {
        self.users.lock().unwrap().insert(
            user_name.to_string(),
            tags.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl IdentityService for MockIam {
    async fn get_user_tags(&self, user_name: &str) -> Result<Vec<(String, String)>, NotifyError> {
        self.calls.lock().unwrap().push(user_name.to_string());

        self.users
            .lock()
            .unwrap()
            .get(user_name)
            .cloned()
            .ok_or_else(|| NotifyError::Iam(format!("NoSuchEntity: {}", user_name)))
    }
}

/// Mock SES recording every send attempt
#[derive(Default)]
pub struct MockSes {
    pub sent: Mutex<Vec<TemplatedEmail>>,
    pub failing_recipients: Mutex<HashSet<String>>,
}

impl MockSes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects every send that includes this recipient
    pub fn fail_for(&self, recipient: &str) {
        self.failing_recipients
            .lock()
            .unwrap()
            .insert(recipient.to_string());
    }

    pub fn sent(&self) -> Vec<TemplatedEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl TemplatedEmailSender for MockSes {
    async fn send_templated_email(&self, email: &TemplatedEmail) -> Result<String, NotifyError> {
        let attempt = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(email.clone());
            sent.len()
        };

        let failing = self.failing_recipients.lock().unwrap();
        if email.to.iter().any(|to| failing.contains(to)) {
            return Err(NotifyError::Ses(
                "MessageRejected: Email address is not verified".to_string(),
            ));
        }

        Ok(format!("ses-message-{}", attempt))
    }
}
