//! Navigation Resolver
//!
//! Derives the screen to display from the session flags and the current
//! path, and keeps the browser address bar in sync without reloads.
//!
//! The transition rules live in [`resolve_path`] and [`screen_for`] as pure
//! functions so they stay testable without a browser environment; the
//! [`NavigationSource`] trait isolates the history API behind a seam that
//! tests can mock.

use std::rc::Rc;

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Route paths understood by the resolver.
pub mod paths {
    pub const LANDING: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const SIGNUP: &str = "/signup";
    pub const ONBOARDING: &str = "/onboarding";
    pub const DASHBOARD: &str = "/dashboard";
}

/// Snapshot of the authentication state the resolver cares about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub onboarding_complete: bool,
}

/// Which top-level screen to render for a resolved path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Login,
    Signup,
    Onboarding,
    Dashboard,
}

impl Screen {
    /// Screens that render inside the header/footer chrome.
    pub fn has_chrome(self) -> bool {
        matches!(self, Screen::Landing | Screen::Dashboard)
    }
}

/// Forced transition rule, evaluated whenever the session or path changes.
///
/// Returns `Some(target)` when the current path must be rewritten, `None`
/// when the requested path is honored.
pub fn resolve_path(session: Session, path: &str) -> Option<&'static str> {
    if session.authenticated {
        if path == paths::LOGIN || path == paths::SIGNUP {
            return Some(if session.onboarding_complete {
                paths::DASHBOARD
            } else {
                paths::ONBOARDING
            });
        }
    } else if path == paths::DASHBOARD || path == paths::ONBOARDING {
        return Some(paths::LOGIN);
    }
    None
}

/// Screen selection, evaluated after [`resolve_path`] has settled.
pub fn screen_for(session: Session, path: &str) -> Screen {
    if session.authenticated {
        match path {
            paths::ONBOARDING => Screen::Onboarding,
            paths::DASHBOARD => Screen::Dashboard,
            // Logged-in users can still browse the marketing page; the
            // header shows their account chrome instead of auth links.
            paths::LANDING if session.onboarding_complete => Screen::Landing,
            _ if session.onboarding_complete => Screen::Dashboard,
            _ => Screen::Onboarding,
        }
    } else {
        match path {
            paths::LOGIN => Screen::Login,
            paths::SIGNUP => Screen::Signup,
            _ => Screen::Landing,
        }
    }
}

/// Capability the router needs from its environment: read the current
/// path, push a new history entry, and hear about back/forward navigation.
pub trait NavigationSource {
    fn current_path(&self) -> String;
    fn push(&self, path: &str);
    fn subscribe_pop(&self, handler: Box<dyn Fn()>);
}

/// Real browser history backend.
pub struct BrowserHistory;

impl NavigationSource for BrowserHistory {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| paths::LANDING.to_string())
    }

    fn push(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
            }
        }
    }

    fn subscribe_pop(&self, handler: Box<dyn Fn()>) {
        if let Some(window) = web_sys::window() {
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                handler();
            }) as Box<dyn FnMut(web_sys::Event)>);
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            // Listener lives for the lifetime of the page.
            closure.forget();
        }
    }
}

/// Router store: owns the path signal and mirrors changes into the
/// navigation source. Provided via context to the component tree.
#[derive(Clone)]
pub struct Router {
    pub path: RwSignal<String>,
    source: Rc<dyn NavigationSource>,
}

impl Router {
    pub fn new(source: Rc<dyn NavigationSource>) -> Self {
        let path = create_rw_signal(source.current_path());

        let pop_source = source.clone();
        source.subscribe_pop(Box::new(move || {
            path.set(pop_source.current_path());
        }));

        Self { path, source }
    }

    /// Navigate to `to`, pushing a history entry. No-op when already there.
    pub fn navigate(&self, to: &str) {
        if self.path.get_untracked() == to {
            return;
        }
        self.source.push(to);
        self.path.set(to.to_string());
    }
}

/// Provide a browser-backed router to the component tree.
pub fn provide_router() {
    provide_context(Router::new(Rc::new(BrowserHistory)));
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// In-memory history: records pushes and lets tests fire pop events.
    #[derive(Default)]
    struct MockHistory {
        path: RefCell<String>,
        pushes: RefCell<Vec<String>>,
        pop_handler: RefCell<Option<Box<dyn Fn()>>>,
    }

    impl MockHistory {
        fn at(path: &str) -> Rc<Self> {
            let history = Self::default();
            *history.path.borrow_mut() = path.to_string();
            Rc::new(history)
        }

        fn set_path(&self, path: &str) {
            *self.path.borrow_mut() = path.to_string();
        }

        fn fire_pop(&self) {
            let handler = self.pop_handler.borrow();
            if let Some(handler) = handler.as_ref() {
                handler();
            }
        }
    }

    impl NavigationSource for MockHistory {
        fn current_path(&self) -> String {
            self.path.borrow().clone()
        }

        fn push(&self, path: &str) {
            self.pushes.borrow_mut().push(path.to_string());
            *self.path.borrow_mut() = path.to_string();
        }

        fn subscribe_pop(&self, handler: Box<dyn Fn()>) {
            *self.pop_handler.borrow_mut() = Some(handler);
        }
    }

    #[test]
    fn test_router_starts_at_the_source_path() {
        let runtime = create_runtime();
        let history = MockHistory::at(paths::DASHBOARD);
        let router = Router::new(history);
        assert_eq!(router.path.get_untracked(), paths::DASHBOARD);
        runtime.dispose();
    }

    #[test]
    fn test_navigate_pushes_a_history_entry() {
        let runtime = create_runtime();
        let history = MockHistory::at(paths::LANDING);
        let router = Router::new(history.clone());

        router.navigate(paths::LOGIN);

        assert_eq!(router.path.get_untracked(), paths::LOGIN);
        assert_eq!(
            history.pushes.borrow().as_slice(),
            &[paths::LOGIN.to_string()]
        );
        runtime.dispose();
    }

    #[test]
    fn test_navigate_to_current_path_is_a_noop() {
        let runtime = create_runtime();
        let history = MockHistory::at(paths::DASHBOARD);
        let router = Router::new(history.clone());

        router.navigate(paths::DASHBOARD);

        assert!(history.pushes.borrow().is_empty());
        assert_eq!(router.path.get_untracked(), paths::DASHBOARD);
        runtime.dispose();
    }

    #[test]
    fn test_pop_restores_the_source_path() {
        let runtime = create_runtime();
        let history = MockHistory::at(paths::LANDING);
        let router = Router::new(history.clone());
        router.navigate(paths::DASHBOARD);

        // Back button: the source path changes, then a pop event fires.
        history.set_path(paths::LANDING);
        history.fire_pop();

        assert_eq!(router.path.get_untracked(), paths::LANDING);
        assert!(
            history.pushes.borrow().len() == 1,
            "pop must not push a new entry"
        );
        runtime.dispose();
    }

    fn guest() -> Session {
        Session::default()
    }

    fn onboarding_user() -> Session {
        Session {
            authenticated: true,
            onboarding_complete: false,
        }
    }

    fn member() -> Session {
        Session {
            authenticated: true,
            onboarding_complete: true,
        }
    }

    #[test]
    fn test_guest_is_sent_to_login_from_protected_paths() {
        assert_eq!(resolve_path(guest(), paths::DASHBOARD), Some(paths::LOGIN));
        assert_eq!(resolve_path(guest(), paths::ONBOARDING), Some(paths::LOGIN));
    }

    #[test]
    fn test_guest_keeps_public_paths() {
        assert_eq!(resolve_path(guest(), paths::LANDING), None);
        assert_eq!(resolve_path(guest(), paths::LOGIN), None);
        assert_eq!(resolve_path(guest(), paths::SIGNUP), None);
    }

    #[test]
    fn test_member_is_sent_to_dashboard_from_auth_forms() {
        assert_eq!(resolve_path(member(), paths::LOGIN), Some(paths::DASHBOARD));
        assert_eq!(resolve_path(member(), paths::SIGNUP), Some(paths::DASHBOARD));
    }

    #[test]
    fn test_incomplete_user_is_sent_to_onboarding_from_auth_forms() {
        assert_eq!(
            resolve_path(onboarding_user(), paths::LOGIN),
            Some(paths::ONBOARDING)
        );
        assert_eq!(
            resolve_path(onboarding_user(), paths::SIGNUP),
            Some(paths::ONBOARDING)
        );
    }

    #[test]
    fn test_authenticated_paths_are_honored() {
        assert_eq!(resolve_path(member(), paths::DASHBOARD), None);
        assert_eq!(resolve_path(member(), paths::LANDING), None);
        assert_eq!(resolve_path(onboarding_user(), paths::ONBOARDING), None);
    }

    #[test]
    fn test_guest_screens() {
        assert_eq!(screen_for(guest(), paths::LOGIN), Screen::Login);
        assert_eq!(screen_for(guest(), paths::SIGNUP), Screen::Signup);
        assert_eq!(screen_for(guest(), paths::LANDING), Screen::Landing);
        assert_eq!(screen_for(guest(), "/pricing"), Screen::Landing);
    }

    #[test]
    fn test_member_screens() {
        assert_eq!(screen_for(member(), paths::DASHBOARD), Screen::Dashboard);
        assert_eq!(screen_for(member(), paths::ONBOARDING), Screen::Onboarding);
        // Marketing page stays reachable after login, chrome included.
        assert_eq!(screen_for(member(), paths::LANDING), Screen::Landing);
        assert!(screen_for(member(), paths::LANDING).has_chrome());
        assert_eq!(screen_for(member(), "/unknown"), Screen::Dashboard);
    }

    #[test]
    fn test_incomplete_user_falls_back_to_onboarding() {
        assert_eq!(
            screen_for(onboarding_user(), paths::LANDING),
            Screen::Onboarding
        );
        assert_eq!(
            screen_for(onboarding_user(), "/unknown"),
            Screen::Onboarding
        );
        assert_eq!(
            screen_for(onboarding_user(), paths::DASHBOARD),
            Screen::Dashboard
        );
    }

    #[test]
    fn test_end_to_end_guest_onboarding_resolves_to_login_form() {
        let path = resolve_path(guest(), paths::ONBOARDING).unwrap();
        assert_eq!(path, paths::LOGIN);
        assert_eq!(screen_for(guest(), path), Screen::Login);
        assert!(!screen_for(guest(), path).has_chrome());
    }

    #[test]
    fn test_end_to_end_member_landing_is_unchanged() {
        assert_eq!(resolve_path(member(), paths::LANDING), None);
        let screen = screen_for(member(), paths::LANDING);
        assert_eq!(screen, Screen::Landing);
        assert!(screen.has_chrome());
    }

    #[test]
    fn test_chrome_assignment() {
        assert!(Screen::Landing.has_chrome());
        assert!(Screen::Dashboard.has_chrome());
        assert!(!Screen::Login.has_chrome());
        assert!(!Screen::Signup.has_chrome());
        assert!(!Screen::Onboarding.has_chrome());
    }
}
