//! Session Store
//!
//! Holds the signed-in user record and the restore-in-flight flag. All
//! mutation goes through the named transitions below so the resolver rules
//! stay centrally testable.

use leptos::*;

use crate::router::Session;
use crate::storage;

/// The one record persisted to local storage.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub onboarding_complete: bool,
}

impl UserRecord {
    fn mock(id: &str, name: &str, email: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: None,
            onboarding_complete: false,
        }
    }
}

/// Session state provided to all components.
#[derive(Clone, Copy)]
pub struct SessionState {
    pub user: RwSignal<Option<UserRecord>>,
    /// True while the persisted record is being checked at startup.
    pub loading: RwSignal<bool>,
    /// Form-level error from the last auth attempt.
    pub error: RwSignal<Option<String>>,
}

pub fn provide_session_state() {
    let state = SessionState {
        user: create_rw_signal(None),
        loading: create_rw_signal(true),
        error: create_rw_signal(None),
    };
    provide_context(state);
}

impl SessionState {
    /// Reactive snapshot of the flags the navigation resolver depends on.
    pub fn snapshot(&self) -> Session {
        self.user.with(|u| Session {
            authenticated: u.is_some(),
            onboarding_complete: u
                .as_ref()
                .map(|u| u.onboarding_complete)
                .unwrap_or(false),
        })
    }

    /// Restore the session from the persisted record. Malformed records are
    /// logged and treated as "no session".
    pub fn restore(&self) {
        match storage::load_session() {
            Ok(record) => self.user.set(record),
            Err(e) => {
                web_sys::console::error_1(&format!("session restore failed: {}", e).into());
                self.user.set(None);
            }
        }
        self.loading.set(false);
    }

    /// Mock credential login. Resolves after a short simulated delay.
    pub async fn login(&self, email: String, _password: String) -> Result<(), String> {
        self.error.set(None);
        self.loading.set(true);

        gloo_timers::future::TimeoutFuture::new(600).await;

        let record = UserRecord::mock("1", "John Doe", &email);
        let result = storage::save_session(&record)
            .map_err(|e| format!("could not persist session: {}", e));

        match result {
            Ok(()) => {
                self.user.set(Some(record));
                self.loading.set(false);
                Ok(())
            }
            Err(msg) => {
                web_sys::console::error_1(&msg.clone().into());
                self.loading.set(false);
                self.error
                    .set(Some("Authentication failed. Please try again.".to_string()));
                Err(msg)
            }
        }
    }

    /// Mock account creation. Same shape as [`SessionState::login`].
    pub async fn signup(&self, name: String, email: String, _password: String) -> Result<(), String> {
        self.error.set(None);
        self.loading.set(true);

        gloo_timers::future::TimeoutFuture::new(600).await;

        let record = UserRecord::mock("1", &name, &email);
        let result = storage::save_session(&record)
            .map_err(|e| format!("could not persist session: {}", e));

        match result {
            Ok(()) => {
                self.user.set(Some(record));
                self.loading.set(false);
                Ok(())
            }
            Err(msg) => {
                web_sys::console::error_1(&msg.clone().into());
                self.loading.set(false);
                self.error
                    .set(Some("Authentication failed. Please try again.".to_string()));
                Err(msg)
            }
        }
    }

    /// Mark onboarding as finished and persist the updated record.
    pub fn complete_onboarding(&self) {
        self.user.update(|user| {
            if let Some(user) = user {
                user.onboarding_complete = true;
                if let Err(e) = storage::save_session(user) {
                    web_sys::console::error_1(
                        &format!("could not persist session: {}", e).into(),
                    );
                }
            }
        });
    }

    /// Drop the session and its persisted record.
    pub fn logout(&self) {
        self.user.set(None);
        storage::clear_session();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_roundtrip() {
        let record = UserRecord {
            id: "7".to_string(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            avatar: None,
            onboarding_complete: true,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_defaults_for_missing_fields() {
        // Records written before the onboarding flag existed still load.
        let back: UserRecord =
            serde_json::from_str(r#"{"id":"1","name":"J","email":"j@x.com"}"#).unwrap();
        assert!(!back.onboarding_complete);
        assert!(back.avatar.is_none());
    }

    #[test]
    fn test_malformed_record_is_an_error() {
        assert!(serde_json::from_str::<UserRecord>("{not json").is_err());
        assert!(serde_json::from_str::<UserRecord>(r#"{"id":1}"#).is_err());
    }
}
