//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] that owns the
//! dashboard state and runs its effects.

use leptos::prelude::*;
use leptos::task::spawn_local;
use podview_core::{
    DashboardState, Effect, Intent, RootResolver, Session, SessionTransition, execute,
};

use crate::components::Workspace;
use crate::core::{PodClient, session_store};
use crate::models::{ConnectionState, SheetState};
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`.
///
/// Every change to the dashboard goes through its reducer: components call
/// [`AppContext::dispatch`], and remote work is executed here against the
/// [`PodClient`] with the outcome folded back into the same signal.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or unit
/// collaborators.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Dashboard state (path, listing, open file, error).
    pub dashboard: RwSignal<DashboardState>,

    /// Pod connection state.
    pub connection: RwSignal<ConnectionState>,

    /// Create-item sheet.
    pub sheet: RwSignal<SheetState>,

    client: PodClient,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            dashboard: RwSignal::new(DashboardState::default()),
            connection: RwSignal::new(ConnectionState::default()),
            sheet: RwSignal::new(SheetState::default()),
            client: PodClient,
        }
    }

    /// Feed an intent to the reducer and run whatever it asks for.
    pub fn dispatch(&self, intent: Intent) {
        tracing::debug!(?intent, "dispatch");
        let effect = self
            .dashboard
            .try_update(|state| state.handle(intent))
            .unwrap_or_default();
        self.run(effect);
    }

    /// Execute an effect chain until the reducer stops asking for work.
    fn run(&self, effect: Effect) {
        if effect == Effect::None {
            return;
        }

        let ctx = *self;
        spawn_local(async move {
            let mut effect = effect;
            loop {
                if let Effect::Transition(transition) = effect {
                    ctx.on_transition(transition);
                    return;
                }
                let Some(outcome) = execute(&ctx.client, effect).await else {
                    return;
                };
                let Some(next) = ctx.dashboard.try_update(|state| state.apply(outcome)) else {
                    return;
                };
                effect = next;
            }
        });
    }

    fn on_transition(&self, transition: SessionTransition) {
        match transition {
            SessionTransition::LoggedOut => {
                if let Err(err) = session_store::clear() {
                    tracing::warn!(error = %err, "could not forget session");
                }
                self.sheet.set(SheetState::Closed);
                self.connection.set(ConnectionState::Disconnected);
                tracing::info!("logged out");
            }
        }
    }

    /// Remember a session, resolve its pod root and start browsing.
    pub fn connect(&self, session: Session) {
        if let Err(err) = session_store::save(&session) {
            tracing::warn!(error = %err, "could not remember session");
        }

        self.connection.set(ConnectionState::Connecting);
        self.dashboard.set(DashboardState::new(session.clone()));

        let ctx = *self;
        spawn_local(async move {
            let root = ctx.client.resolve_root(&session).await;
            tracing::info!(root = ?root, "pod root resolved");
            ctx.connection.set(ConnectionState::Connected(session));
            ctx.dispatch(Intent::Initialize { root });
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// Creates and provides the [`AppContext`], restores a remembered session
/// and renders the [`Workspace`].
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    if let Some(session) = session_store::load()
        && session.is_active()
    {
        tracing::info!("restoring remembered session");
        ctx.connect(session);
    }

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f6f7f9;
                    color: #1f2933;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #c53030; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #52606d; margin-bottom: 2rem;">
                            "The explorer hit an unexpected error. Reloading usually helps."
                        </p>
                        <details style="
                            text-align: left;
                            background: #ffffff;
                            border: 1px solid #d9e2ec;
                            padding: 1rem;
                            border-radius: 6px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #52606d;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #c53030;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| dom::reload()
                            style="
                                background: #3b82f6;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 6px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <Workspace />
        </ErrorBoundary>
    }
}
