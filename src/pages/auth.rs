//! Auth Page
//!
//! Login and signup forms over the mock session transitions. Validation is
//! pure; the redirect after success is left entirely to the resolver.

use leptos::*;

use crate::components::link::NavLink;
use crate::components::loading::InlineLoading;
use crate::router::paths;
use crate::state::session::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// Field-level validation errors; empty strings mean "no error".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

fn plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Validate the form for the given mode.
pub fn validate(mode: AuthMode, name: &str, email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if mode == AuthMode::Signup && name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }

    if email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !plausible_email(email.trim()) {
        errors.email = Some("Email is invalid".to_string());
    }

    if password.trim().is_empty() {
        errors.password = Some("Password is required".to_string());
    } else if password.len() < 6 {
        errors.password = Some("Password must be at least 6 characters".to_string());
    }

    errors
}

#[component]
pub fn AuthPage(mode: AuthMode) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let errors = create_rw_signal(FieldErrors::default());

    let submitting = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let checked = validate(mode, &name.get(), &email.get(), &password.get());
        if !checked.is_clean() {
            errors.set(checked);
            return;
        }
        errors.set(FieldErrors::default());

        submitting.set(true);
        spawn_local(async move {
            let result = match mode {
                AuthMode::Login => session.login(email.get_untracked(), password.get_untracked()).await,
                AuthMode::Signup => {
                    session
                        .signup(
                            name.get_untracked(),
                            email.get_untracked(),
                            password.get_untracked(),
                        )
                        .await
                }
            };
            // On success the resolver observes the session change and
            // rewrites the path; nothing to do here.
            if result.is_err() {
                submitting.set(false);
            }
        });
    };

    let (title, subtitle, action, alt_prompt, alt_href, alt_label) = match mode {
        AuthMode::Login => (
            "Welcome Back!",
            "Log in to access your personalized diet plan",
            "Log In",
            "Don't have an account?",
            paths::SIGNUP,
            "Sign up",
        ),
        AuthMode::Signup => (
            "Create Your Account",
            "Sign up to start your nutrition journey",
            "Sign Up",
            "Already have an account?",
            paths::LOGIN,
            "Log in",
        ),
    };

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex items-center justify-center px-4">
            <div class="w-full max-w-md">
                <div class="bg-white dark:bg-gray-800 rounded-2xl shadow-lg p-6 md:p-8">
                    <div class="text-center mb-8">
                        <div class="w-12 h-12 bg-gradient-to-br from-emerald-400 to-emerald-600 rounded-xl mx-auto flex items-center justify-center mb-4">
                            <span class="text-white font-bold text-xl">"NP"</span>
                        </div>
                        <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{title}</h1>
                        <p class="text-gray-600 dark:text-gray-400 mt-2">{subtitle}</p>
                    </div>

                    // Form-level error from the mock auth call.
                    {move || {
                        session.error.get().map(|msg| {
                            view! {
                                <div class="mb-4 p-3 bg-red-100 text-red-700 rounded-lg text-sm">
                                    {msg}
                                </div>
                            }
                        })
                    }}

                    <form on:submit=on_submit class="space-y-4">
                        {(mode == AuthMode::Signup)
                            .then(|| {
                                view! {
                                    <FormField
                                        label="Full Name"
                                        input_type="text"
                                        placeholder="Enter your name"
                                        value=name
                                        error=Signal::derive(move || errors.get().name)
                                    />
                                }
                            })}

                        <FormField
                            label="Email"
                            input_type="email"
                            placeholder="Enter your email"
                            value=email
                            error=Signal::derive(move || errors.get().email)
                        />

                        <FormField
                            label="Password"
                            input_type="password"
                            placeholder="Enter your password"
                            value=password
                            error=Signal::derive(move || errors.get().password)
                        />

                        <button
                            type="submit"
                            class="w-full mt-6 px-4 py-3 rounded-lg bg-emerald-500 hover:bg-emerald-600 \
                                   text-white font-medium transition-colors disabled:opacity-60"
                            disabled=move || submitting.get() && session.loading.get()
                        >
                            {move || {
                                if submitting.get() && session.loading.get() {
                                    view! {
                                        <span class="inline-flex items-center justify-center gap-2">
                                            <InlineLoading />
                                            "Please wait..."
                                        </span>
                                    }
                                        .into_view()
                                } else {
                                    action.into_view()
                                }
                            }}
                        </button>
                    </form>

                    <div class="mt-6 text-center text-sm">
                        <p class="text-gray-600 dark:text-gray-400">
                            {alt_prompt}
                            " "
                            <NavLink
                                href=alt_href
                                class="font-medium text-emerald-600 hover:text-emerald-500 dark:text-emerald-400"
                            >
                                {alt_label}
                            </NavLink>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Labeled input with inline error text.
#[component]
fn FormField(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                {label}
            </label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 \
                       bg-white dark:bg-gray-700 text-gray-900 dark:text-white \
                       focus:ring-2 focus:ring-emerald-500 focus:border-transparent outline-none"
            />
            {move || {
                error.get().map(|msg| {
                    view! { <p class="mt-1 text-xs text-red-600">{msg}</p> }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_does_not_require_name() {
        let errors = validate(AuthMode::Login, "", "a@b.com", "secret123");
        assert!(errors.is_clean());
    }

    #[test]
    fn test_signup_requires_name() {
        let errors = validate(AuthMode::Signup, "  ", "a@b.com", "secret123");
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_email_shape_is_checked() {
        let errors = validate(AuthMode::Login, "", "", "secret123");
        assert_eq!(errors.email.as_deref(), Some("Email is required"));

        for bad in ["plainaddress", "user@", "@host.com", "user@nodot"] {
            let errors = validate(AuthMode::Login, "", bad, "secret123");
            assert_eq!(errors.email.as_deref(), Some("Email is invalid"), "{}", bad);
        }

        let errors = validate(AuthMode::Login, "", "user@example.co", "secret123");
        assert!(errors.email.is_none());
    }

    #[test]
    fn test_password_rules() {
        let errors = validate(AuthMode::Login, "", "a@b.com", "");
        assert_eq!(errors.password.as_deref(), Some("Password is required"));

        let errors = validate(AuthMode::Login, "", "a@b.com", "short");
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 6 characters")
        );

        let errors = validate(AuthMode::Login, "", "a@b.com", "longenough");
        assert!(errors.password.is_none());
    }
}
