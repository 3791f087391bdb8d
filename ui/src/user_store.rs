//! Defines the account store: the reactive, app-wide state that owns the
//! signed-in user, the signup loading flag and the last error.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use api::AccountApiConfig;
use api::AccountBackend;
use api::AccountError;
use api::HttpAccountBackend;
use api::SignUpForm;
use api::User;
use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

/// What the sign-up form needs from an account store.
pub trait AccountStore {
    /// `true` while a signup attempt is in flight.
    fn loading(&self) -> bool;
    /// Starts a signup attempt and returns without waiting for it.
    fn signup(&self, form: SignUpForm);
}

type SignupFuture = Pin<Box<dyn Future<Output = Result<User, AccountError>>>>;

/// Object-safe face of an [`AccountBackend`], so the store can hold any of them.
trait SignupRunner {
    fn run(&self, form: SignUpForm) -> SignupFuture;
}

impl<B: AccountBackend + Clone + 'static> SignupRunner for B {
    fn run(&self, form: SignUpForm) -> SignupFuture {
        let backend = self.clone();
        Box::pin(async move { perform_signup(&backend, form).await })
    }
}

/// A reactive store provided as a Dioxus context.
///
/// Every field is a signal, so components reading them re-render when a
/// signup attempt starts or resolves.
#[derive(Clone, Copy)]
pub struct UserStore {
    /// Set while a signup request is in flight.
    pub loading: Signal<bool>,
    /// The account from the last successful signup.
    pub user: Signal<Option<User>>,
    /// Message of the last failed attempt. Cleared when a new one starts.
    pub error: Signal<Option<String>>,
    backend: CopyValue<Rc<dyn SignupRunner>>,
}

impl UserStore {
    pub fn signed_in(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn clear_error(&self) {
        let mut error = self.error;
        error.set(None);
    }
}

impl AccountStore for UserStore {
    fn loading(&self) -> bool {
        *self.loading.read()
    }

    fn signup(&self, form: SignUpForm) {
        let mut store = *self;
        store.error.set(None);
        store.loading.set(true);

        let attempt = self.backend.cloned().run(form);
        // Owned by the root scope: the screen that submitted may be gone
        // before the request resolves, and loading must still be reset.
        spawn_forever(async move {
            match attempt.await {
                Ok(user) => {
                    info!("signed up as {}", user.email);
                    store.user.set(Some(user));
                }
                Err(e) => {
                    warn!("signup failed: {}", e);
                    store.error.set(Some(e.to_string()));
                }
            }
            store.loading.set(false);
        });
    }
}

/// Runs one signup attempt against `backend`.
///
/// A password that differs from its confirmation fails locally and the
/// backend is never called.
pub async fn perform_signup<B: AccountBackend>(
    backend: &B,
    form: SignUpForm,
) -> Result<User, AccountError> {
    if !form.passwords_match() {
        return Err(AccountError::PasswordMismatch);
    }
    backend.signup(&form).await
}

/// Creates the store backed by the HTTP account service and provides it to
/// every component below the caller. Call once, at the root of the app.
pub fn use_user_store_provider(config: impl FnOnce() -> AccountApiConfig) -> UserStore {
    use_user_store_provider_with(|| HttpAccountBackend::new(config()))
}

/// Like [`use_user_store_provider`], with any backend.
pub fn use_user_store_provider_with<B: AccountBackend + Clone + 'static>(
    backend: impl FnOnce() -> B,
) -> UserStore {
    let loading = use_signal(|| false);
    let user = use_signal(|| None);
    let error = use_signal(|| None);
    let backend = use_hook(|| CopyValue::new(Rc::new(backend()) as Rc<dyn SignupRunner>));

    use_context_provider(|| UserStore {
        loading,
        user,
        error,
        backend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_user_store;
    use api::SignUpField;
    use dioxus::dioxus_core::NoOpMutations;
    use std::cell::RefCell;
    use std::time::Duration;
    use tokio::sync::Notify;

    #[derive(Clone, Default)]
    struct FakeBackend {
        received: Rc<RefCell<Vec<SignUpForm>>>,
        reject_with: Option<&'static str>,
        gate: Option<Rc<Notify>>,
    }

    impl PartialEq for FakeBackend {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.received, &other.received)
        }
    }

    impl AccountBackend for FakeBackend {
        async fn signup(&self, form: &SignUpForm) -> Result<User, AccountError> {
            self.received.borrow_mut().push(form.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            match self.reject_with {
                Some(message) => Err(AccountError::Rejected {
                    status: 400,
                    message: message.to_string(),
                }),
                None => Ok(User {
                    id: "1".into(),
                    name: form.name.clone(),
                    email: form.email.clone(),
                    role: Some("customer".into()),
                }),
            }
        }
    }

    fn filled(password: &str, confirmation: &str) -> SignUpForm {
        SignUpForm::default()
            .with_field(SignUpField::Name, "Ada")
            .with_field(SignUpField::Email, "ada@x.com")
            .with_field(SignUpField::Password, password)
            .with_field(SignUpField::ConfirmPassword, confirmation)
    }

    // --- perform_signup ---

    #[tokio::test]
    async fn mismatched_passwords_never_reach_the_backend() {
        let backend = FakeBackend::default();

        let result = perform_signup(&backend, filled("p1", "p2")).await;

        assert!(matches!(result, Err(AccountError::PasswordMismatch)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Passwords do not match"
        );
        assert!(backend.received.borrow().is_empty());
    }

    #[tokio::test]
    async fn matching_passwords_call_the_backend_once() {
        let backend = FakeBackend::default();
        let form = filled("p1", "p1");

        let user = perform_signup(&backend, form.clone()).await.unwrap();

        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@x.com");
        assert_eq!(*backend.received.borrow(), vec![form]);
    }

    #[tokio::test]
    async fn backend_rejections_are_passed_through() {
        let backend = FakeBackend {
            reject_with: Some("User already exists"),
            ..Default::default()
        };

        let error = perform_signup(&backend, filled("p1", "p1"))
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "User already exists");
        assert_eq!(backend.received.borrow().len(), 1);
    }

    // --- UserStore inside a running app ---

    type Slot = Option<(UserStore, Signal<bool>)>;

    /// Lets the test reach the store and the child toggle created inside the dom.
    #[derive(Clone, Default)]
    struct Handles(Rc<RefCell<Slot>>);

    impl PartialEq for Handles {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    impl Handles {
        fn get(&self) -> (UserStore, Signal<bool>) {
            (*self.0.borrow()).expect("store root rendered")
        }
    }

    #[component]
    fn StoreRoot(
        backend: FakeBackend,
        handles: Handles,
        submit_on_mount: Option<SignUpForm>,
    ) -> Element {
        let store = use_user_store_provider_with(move || backend);
        let show_submitter = use_signal(|| submit_on_mount.is_some());
        handles.0.borrow_mut().get_or_insert((store, show_submitter));

        rsx! {
            if show_submitter() {
                Submitter { form: submit_on_mount.clone().unwrap_or_default() }
            }
        }
    }

    #[component]
    fn Submitter(form: SignUpForm) -> Element {
        let store = use_user_store();
        use_hook(move || store.signup(form));
        rsx! { p { "submitting" } }
    }

    fn mount(backend: FakeBackend, submit_on_mount: Option<SignUpForm>) -> (VirtualDom, Handles) {
        let handles = Handles::default();
        let mut dom = VirtualDom::new_with_props(
            StoreRoot,
            StoreRootProps {
                backend,
                handles: handles.clone(),
                submit_on_mount,
            },
        );
        dom.rebuild_in_place();
        (dom, handles)
    }

    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..10 {
            let _ = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn snapshot(dom: &VirtualDom, store: UserStore) -> (bool, Option<User>, Option<String>) {
        dom.in_runtime(|| {
            (
                store.loading.cloned(),
                store.user.cloned(),
                store.error.cloned(),
            )
        })
    }

    #[tokio::test]
    async fn successful_signup_sets_user_and_resets_loading() {
        let backend = FakeBackend::default();
        let (mut dom, handles) = mount(backend.clone(), None);
        let (store, _) = handles.get();

        dom.in_runtime(|| store.signup(filled("p1", "p1")));
        let (loading, user, _) = snapshot(&dom, store);
        assert!(loading);
        assert_eq!(user, None);

        settle(&mut dom).await;

        let (loading, user, error) = snapshot(&dom, store);
        assert!(!loading);
        assert_eq!(user.map(|u| u.email), Some("ada@x.com".to_string()));
        assert_eq!(error, None);
        assert_eq!(backend.received.borrow().len(), 1);
        assert!(dom.in_runtime(|| store.signed_in()));
    }

    #[tokio::test]
    async fn failed_signup_sets_error_and_next_attempt_clears_it() {
        let backend = FakeBackend {
            reject_with: Some("User already exists"),
            ..Default::default()
        };
        let (mut dom, handles) = mount(backend, None);
        let (store, _) = handles.get();

        dom.in_runtime(|| store.signup(filled("p1", "p1")));
        settle(&mut dom).await;

        let (loading, user, error) = snapshot(&dom, store);
        assert!(!loading);
        assert_eq!(user, None);
        assert_eq!(error.as_deref(), Some("User already exists"));

        dom.in_runtime(|| store.signup(filled("p1", "p1")));
        let (loading, _, error) = snapshot(&dom, store);
        assert!(loading);
        assert_eq!(error, None);

        settle(&mut dom).await;
        assert!(!snapshot(&dom, store).0);
    }

    #[tokio::test]
    async fn mismatch_is_reported_through_the_store() {
        let backend = FakeBackend::default();
        let (mut dom, handles) = mount(backend.clone(), None);
        let (store, _) = handles.get();

        dom.in_runtime(|| store.signup(filled("p1", "p2")));
        settle(&mut dom).await;

        let (loading, _, error) = snapshot(&dom, store);
        assert!(!loading);
        assert_eq!(error.as_deref(), Some("Passwords do not match"));
        assert!(backend.received.borrow().is_empty());
    }

    #[tokio::test]
    async fn signup_outlives_the_component_that_started_it() {
        let gate = Rc::new(Notify::new());
        let backend = FakeBackend {
            gate: Some(gate.clone()),
            ..Default::default()
        };
        let (mut dom, handles) = mount(backend.clone(), Some(filled("p1", "p1")));
        let (store, mut show_submitter) = handles.get();

        settle(&mut dom).await;
        assert!(snapshot(&dom, store).0);
        assert_eq!(backend.received.borrow().len(), 1);

        // the submitting component goes away while the request is pending
        dom.in_runtime(|| show_submitter.set(false));
        dom.render_immediate(&mut NoOpMutations);

        gate.notify_one();
        settle(&mut dom).await;

        let (loading, user, error) = snapshot(&dom, store);
        assert!(!loading);
        assert_eq!(user.map(|u| u.name), Some("Ada".to_string()));
        assert_eq!(error, None);
    }
}
