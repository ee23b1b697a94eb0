use std::io::Write;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use invitations::{
    Invitation, InvitationApi, InvitationId, PendingInvitations, RepositoryFullName, UserLogin,
    Whitelist,
};

use super::*;

#[derive(Debug, thiserror::Error)]
#[error("fake API failure: HTTP {status}")]
struct FakeError {
    status: u16,
}

#[derive(Default)]
struct FakeApi {
    listing: Option<PendingInvitations>,
    list_status: Option<u16>,
    failing_accepts: Vec<(InvitationId, u16)>,
    list_calls: Mutex<usize>,
    accepted: Mutex<Vec<InvitationId>>,
}

impl FakeApi {
    fn with_invitations(invitations: Vec<Invitation>) -> Self {
        Self {
            listing: Some(PendingInvitations::Invitations(invitations)),
            ..Self::default()
        }
    }

    fn accepted(&self) -> Vec<InvitationId> {
        self.accepted.lock().unwrap().clone()
    }
}

#[async_trait]
impl InvitationApi for FakeApi {
    type Error = FakeError;

    async fn list_pending_invitations(&self) -> Result<PendingInvitations, FakeError> {
        *self.list_calls.lock().unwrap() += 1;
        if let Some(status) = self.list_status {
            return Err(FakeError { status });
        }
        Ok(self
            .listing
            .clone()
            .unwrap_or(PendingInvitations::Invitations(Vec::new())))
    }

    async fn accept_invitation(&self, id: InvitationId) -> Result<(), FakeError> {
        if let Some((_, status)) = self.failing_accepts.iter().find(|(fid, _)| *fid == id) {
            return Err(FakeError { status: *status });
        }
        self.accepted.lock().unwrap().push(id);
        Ok(())
    }
}

fn invitation(id: u64, repo: &str, inviter: &str) -> Invitation {
    Invitation::new(
        InvitationId::new(id),
        RepositoryFullName::new(repo).unwrap(),
        UserLogin::new(inviter).unwrap(),
    )
}

fn whitelist(entries: &[&str]) -> Whitelist {
    Whitelist::new(
        entries
            .iter()
            .map(|e| RepositoryFullName::new(*e).unwrap()),
    )
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture_logs(level: tracing::Level) -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

#[tokio::test]
async fn accepts_whitelisted_and_ignores_the_rest() {
    let (logs, _guard) = capture_logs(tracing::Level::INFO);
    let api = FakeApi::with_invitations(vec![
        invitation(1, "orgA/repo1", "alice"),
        invitation(2, "orgB/repo2", "bob"),
    ]);
    let whitelist = whitelist(&["orgA/repo1"]);

    let outcome = BatchRunner::new(&api, &whitelist).run().await.unwrap();

    assert_eq!(api.accepted(), vec![InvitationId::new(1)]);
    assert_eq!(outcome.accepted_ids(), vec![InvitationId::new(1)]);
    assert_eq!(
        outcome.decisions()[1],
        Decision::Ignored {
            id: InvitationId::new(2),
            repository: RepositoryFullName::new("orgB/repo2").unwrap(),
            inviter: UserLogin::new("bob").unwrap(),
        }
    );

    let output = logs.contents();
    let accepting = output.find("Accepting orgA/repo1 alice 1").expect("accept line");
    let ignoring = output.find("Ignoring orgB/repo2 bob 2").expect("ignore line");
    assert!(accepting < ignoring);
}

#[tokio::test]
async fn debug_event_carries_invitation_details() {
    let (logs, _guard) = capture_logs(tracing::Level::DEBUG);
    let mut detailed = invitation(9, "orgA/repo9", "alice");
    detailed.permissions = Some("write".to_string());
    detailed.html_url = Some("https://github.com/orgA/repo9/invitations".to_string());
    let api = FakeApi::with_invitations(vec![detailed]);

    BatchRunner::new(&api, &whitelist(&[])).run().await.unwrap();

    let output = logs.contents();
    assert!(output.contains("Evaluating invitation"));
    assert!(output.contains("permissions=\"write\""));
    assert!(output.contains("html_url=\"https://github.com/orgA/repo9/invitations\""));
    assert!(output.contains("Ignoring orgA/repo9 alice 9"));
}

#[tokio::test]
async fn accepts_each_whitelisted_invitation_exactly_once() {
    let api = FakeApi::with_invitations(vec![
        invitation(10, "orgA/repo1", "alice"),
        invitation(11, "orgA/repo2", "alice"),
        invitation(12, "orgA/repo1", "carol"),
    ]);
    let whitelist = whitelist(&["orgA/repo1", "orgA/repo1"]);

    BatchRunner::new(&api, &whitelist).run().await.unwrap();

    assert_eq!(api.accepted(), vec![InvitationId::new(10), InvitationId::new(12)]);
}

#[tokio::test]
async fn membership_is_exact() {
    let api = FakeApi::with_invitations(vec![
        invitation(1, "OrgA/Repo1", "alice"),
        invitation(2, "orgA/repo1-fork", "alice"),
    ]);
    let whitelist = whitelist(&["orgA/repo1"]);

    let outcome = BatchRunner::new(&api, &whitelist).run().await.unwrap();

    assert!(api.accepted().is_empty());
    assert!(outcome.decisions().iter().all(|d| !d.is_accepted()));
}

#[tokio::test]
async fn no_invitations_means_no_calls_and_no_decision_lines() {
    let (logs, _guard) = capture_logs(tracing::Level::INFO);
    let api = FakeApi::default();
    let whitelist = whitelist(&["orgA/repo1"]);

    let outcome = BatchRunner::new(&api, &whitelist).run().await.unwrap();

    assert!(outcome.decisions().is_empty());
    assert!(api.accepted().is_empty());
    assert_eq!(*api.list_calls.lock().unwrap(), 1);
    let output = logs.contents();
    assert!(!output.contains("Accepting"));
    assert!(!output.contains("Ignoring"));
}

#[tokio::test]
async fn accept_failure_aborts_remaining_invitations() {
    let api = FakeApi {
        failing_accepts: vec![(InvitationId::new(2), 404)],
        ..FakeApi::with_invitations(vec![
            invitation(1, "orgA/repo1", "alice"),
            invitation(2, "orgA/repo2", "alice"),
            invitation(3, "orgA/repo3", "alice"),
        ])
    };
    let whitelist = whitelist(&["orgA/repo1", "orgA/repo2", "orgA/repo3"]);

    let err = BatchRunner::new(&api, &whitelist).run().await.unwrap_err();

    match err {
        DriverError::Accept {
            id,
            repository,
            source,
        } => {
            assert_eq!(id, InvitationId::new(2));
            assert_eq!(repository.as_str(), "orgA/repo2");
            assert_eq!(source.status, 404);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(api.accepted(), vec![InvitationId::new(1)]);
}

#[tokio::test]
async fn list_failure_propagates() {
    let api = FakeApi {
        list_status: Some(401),
        ..FakeApi::default()
    };
    let whitelist = whitelist(&["orgA/repo1"]);

    let err = BatchRunner::new(&api, &whitelist).run().await.unwrap_err();

    assert!(matches!(err, DriverError::List(FakeError { status: 401 })));
    assert!(api.accepted().is_empty());
}

#[tokio::test]
async fn unexpected_payload_fails_the_run() {
    let api = FakeApi {
        listing: Some(PendingInvitations::Unexpected(serde_json::json!({
            "message": "Not a list"
        }))),
        ..FakeApi::default()
    };
    let whitelist = whitelist(&["orgA/repo1"]);

    let err = BatchRunner::new(&api, &whitelist).run().await.unwrap_err();

    match err {
        DriverError::UnexpectedPayload { payload } => {
            assert_eq!(payload["message"], "Not a list");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn runner_works_through_a_trait_object() {
    let api = FakeApi::with_invitations(vec![invitation(5, "orgA/repo1", "alice")]);
    let dyn_api: &dyn InvitationApi<Error = FakeError> = &api;
    let whitelist = whitelist(&["orgA/repo1"]);

    let outcome = BatchRunner::new(dyn_api, &whitelist).run().await.unwrap();

    assert_eq!(outcome.accepted_ids(), vec![InvitationId::new(5)]);
}
