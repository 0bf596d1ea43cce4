//! Shared fixtures: real hashing, tokens, cache and repository, plus
//! recording fakes for the outbound email and event ports

use async_trait::async_trait;
use authsvc_application::ports::CodeGenerator;
use authsvc_application::use_cases::{UserServiceDeps, UserServiceImpl};
use authsvc_domain::entities::User;
use authsvc_domain::error::{Error, Result};
use authsvc_domain::events::UserRegisteredEvent;
use authsvc_domain::ports::{EmailSender, UserEventPublisher};
use authsvc_domain::value_objects::{Role, TokenPayload};
use authsvc_infrastructure::crypto::{JwtTokenService, PasswordService};
use authsvc_providers::cache::MokaCodeCache;
use authsvc_providers::repository::InMemoryUserRepository;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const SECRET: &str = "application-tests-secret-0123456789abcdef";
pub const PASSWORD: &str = "correct horse battery staple";

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

#[derive(Default)]
pub struct RecordingEmailSender {
    pub sent: Mutex<Vec<SentEmail>>,
    pub fail: bool,
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<()> {
        if self.fail {
            return Err(Error::network("smtp unreachable"));
        }
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
        });
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

#[derive(Default)]
pub struct RecordingPublisher {
    pub events: Mutex<Vec<UserRegisteredEvent>>,
    pub fail: bool,
}

#[async_trait]
impl UserEventPublisher for RecordingPublisher {
    async fn publish_user_registered(&self, event: &UserRegisteredEvent) -> Result<()> {
        if self.fail {
            return Err(Error::network("event bus unreachable"));
        }
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

/// Hands out the queued codes in order
pub struct ScriptedCodes(Mutex<VecDeque<String>>);

impl ScriptedCodes {
    pub fn new(codes: &[&str]) -> Self {
        Self(Mutex::new(codes.iter().map(|c| (*c).to_string()).collect()))
    }
}

impl CodeGenerator for ScriptedCodes {
    fn generate(&self) -> String {
        self.0.lock().unwrap().pop_front().expect("no scripted code left")
    }
}

pub struct Harness {
    pub service: UserServiceImpl,
    pub users: Arc<InMemoryUserRepository>,
    pub codes: Arc<MokaCodeCache>,
    pub email: Arc<RecordingEmailSender>,
    pub events: Arc<RecordingPublisher>,
}

pub struct HarnessBuilder {
    email: RecordingEmailSender,
    events: RecordingPublisher,
    codes: Option<ScriptedCodes>,
    code_ttl: Duration,
}

impl HarnessBuilder {
    pub fn failing_email(mut self) -> Self {
        self.email.fail = true;
        self
    }

    pub fn failing_events(mut self) -> Self {
        self.events.fail = true;
        self
    }

    pub fn codes(mut self, codes: &[&str]) -> Self {
        self.codes = Some(ScriptedCodes::new(codes));
        self
    }

    pub fn code_ttl(mut self, ttl: Duration) -> Self {
        self.code_ttl = ttl;
        self
    }

    pub fn build(self) -> Harness {
        let users = Arc::new(InMemoryUserRepository::new());
        let codes = Arc::new(MokaCodeCache::new());
        let email = Arc::new(self.email);
        let events = Arc::new(self.events);

        let mut service = UserServiceImpl::new(UserServiceDeps {
            users: users.clone(),
            hasher: Arc::new(PasswordService::bcrypt(4)),
            tokens: Arc::new(JwtTokenService::new(SECRET, Duration::from_secs(3600))),
            codes: codes.clone(),
            email: email.clone(),
            events: events.clone(),
        })
        .with_code_ttl(self.code_ttl);
        if let Some(generator) = self.codes {
            service = service.with_code_generator(Arc::new(generator));
        }

        Harness {
            service,
            users,
            codes,
            email,
            events,
        }
    }
}

pub fn harness() -> HarnessBuilder {
    HarnessBuilder {
        email: RecordingEmailSender::default(),
        events: RecordingPublisher::default(),
        codes: None,
        code_ttl: Duration::from_secs(300),
    }
}

/// Identity of `user` as the auth interceptor would inject it
pub fn actor(user: &User) -> TokenPayload {
    TokenPayload {
        user_id: user.id.clone(),
        email: user.email.clone(),
        role: user.role,
        issued_at: Utc::now(),
        expires_at: Utc::now().timestamp() + 3600,
    }
}

impl Harness {
    pub async fn register(&self, email: &str, role: Role) -> User {
        use authsvc_application::ports::UserServiceInterface;
        self.service
            .register(email, PASSWORD, role)
            .await
            .expect("registration should succeed")
    }

    pub async fn stored(&self, user_id: &str) -> User {
        use authsvc_domain::repositories::UserRepository;
        self.users
            .get_by_id(user_id)
            .await
            .expect("lookup")
            .expect("user should exist")
    }
}
