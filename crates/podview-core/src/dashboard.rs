//! Dashboard state machine.
//!
//! User actions arrive as [`Intent`]s. [`DashboardState::handle`] applies the
//! synchronous part and returns an [`Effect`] describing the remote work to
//! do; [`execute`] performs it against a collaborator and yields an
//! [`Outcome`], which [`DashboardState::apply`] folds back into the state.
//!
//! The split keeps the state free of I/O so a UI can hold it in a signal and
//! run effects on its own executor. [`Dashboard`] drives the same loop for
//! callers that just want to `await` an intent.

use serde::{Deserialize, Serialize};

use crate::config::{FILE_TEXT_PREDICATE, STRUCTURED_MARKERS};
use crate::error::PodError;
use crate::navigator::{FolderView, NavigationPath, ResourceNode, list_children};
use crate::pod::{ContainerSource, PodInfo, ResourceCreator, ResourceFetcher};
use crate::render::{RenderedEntity, render_entity};
use crate::session::{Session, SessionTransition};
use crate::turtle;
use crate::url::has_image_extension;

// =============================================================================
// Intents and Effects
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Start browsing at a discovered root; `None` when discovery failed.
    Initialize { root: Option<String> },
    OpenFolder(String),
    Back,
    /// Breadcrumb click.
    JumpTo(usize),
    Refresh,
    OpenFile(ResourceNode),
    CloseFile,
    DismissError,
    Create(CreateRequest),
    Logout,
}

/// Remote work requested by the reducer.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Effect {
    #[default]
    None,
    LoadFolder(String),
    FetchFile(ResourceNode),
    Create(CreateItem),
    Transition(SessionTransition),
}

/// Result of executing an [`Effect`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    FolderLoaded {
        url: String,
        result: Result<FolderView, PodError>,
    },
    FileLoaded {
        node: ResourceNode,
        result: Result<String, PodError>,
    },
    ItemCreated {
        kind: ItemKind,
        result: Result<(), PodError>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Folder,
    File,
}

impl ItemKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
        }
    }
}

/// What the user filled in to create an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRequest {
    pub name: String,
    pub kind: ItemKind,
    /// Text content, used for files only.
    pub content: String,
}

/// A validated creation, ready to hand to a [`ResourceCreator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItem {
    pub url: String,
    pub kind: ItemKind,
    /// Turtle body for files.
    pub body: Option<String>,
}

// =============================================================================
// File Views
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Image,
    Structured,
    Text,
}

/// How an opened file is displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum FileView {
    Image { url: String },
    Structured(Vec<RenderedEntity>),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenFile {
    pub node: ResourceNode,
    pub view: FileView,
}

/// Classify a file by URL extension, then by content markers.
pub fn classify_content(url: &str, content: &str) -> ContentKind {
    if has_image_extension(url) {
        return ContentKind::Image;
    }
    if STRUCTURED_MARKERS.iter().any(|m| content.contains(m)) {
        return ContentKind::Structured;
    }
    ContentKind::Text
}

/// Build the view of an opened file.
///
/// Structured content that yields no entities is shown as text.
pub fn open_file_view(node: &ResourceNode, content: &str) -> FileView {
    match classify_content(&node.url, content) {
        ContentKind::Image => FileView::Image {
            url: node.url.clone(),
        },
        ContentKind::Structured => {
            let entities = turtle::parse(content);
            if entities.is_empty() {
                FileView::Text(content.to_string())
            } else {
                FileView::Structured(entities.iter().map(render_entity).collect())
            }
        }
        ContentKind::Text => FileView::Text(content.to_string()),
    }
}

/// Turtle document stored for a new text file.
pub fn new_file_body(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    format!("<#it> <{FILE_TEXT_PREDICATE}> \"{escaped}\" .\n")
}

// =============================================================================
// Reducer
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub session: Session,
    pub path: Option<NavigationPath>,
    pub folder: Option<FolderView>,
    pub loading: bool,
    pub error: Option<String>,
    pub open_file: Option<OpenFile>,
    pub pod_info: Option<PodInfo>,
}

impl DashboardState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    /// Apply an intent and return the remote work it needs.
    pub fn handle(&mut self, intent: Intent) -> Effect {
        match intent {
            Intent::Initialize { root: None } => {
                tracing::warn!("pod root could not be determined");
                *self = Self::new(self.session.clone());
                Effect::None
            }
            Intent::Initialize { root: Some(root) } => {
                *self = Self::new(self.session.clone());
                self.pod_info = PodInfo::from_root(&root);
                self.path = Some(NavigationPath::new(root.as_str()));
                self.load(root)
            }
            Intent::OpenFolder(url) => match self.path.as_mut() {
                Some(path) => {
                    path.push(url.as_str());
                    self.load(url)
                }
                None => Effect::None,
            },
            Intent::Back => match self.path.as_mut().and_then(|p| p.pop().map(str::to_string)) {
                Some(url) => self.load(url),
                None => Effect::None,
            },
            Intent::JumpTo(index) => {
                match self
                    .path
                    .as_mut()
                    .and_then(|p| p.truncate_to(index).map(str::to_string))
                {
                    Some(url) => self.load(url),
                    None => Effect::None,
                }
            }
            Intent::Refresh => match self.path.as_ref().map(|p| p.current().to_string()) {
                Some(url) => self.load(url),
                None => Effect::None,
            },
            Intent::OpenFile(node) => {
                if has_image_extension(&node.url) {
                    let view = open_file_view(&node, "");
                    self.open_file = Some(OpenFile { node, view });
                    return Effect::None;
                }
                self.loading = true;
                Effect::FetchFile(node)
            }
            Intent::CloseFile => {
                self.open_file = None;
                Effect::None
            }
            Intent::DismissError => {
                self.error = None;
                Effect::None
            }
            Intent::Create(request) => self.create(request),
            Intent::Logout => {
                *self = Self::default();
                Effect::Transition(SessionTransition::LoggedOut)
            }
        }
    }

    /// Fold the result of an executed effect back into the state.
    ///
    /// A successful creation asks for the current folder to be re-listed.
    pub fn apply(&mut self, outcome: Outcome) -> Effect {
        match outcome {
            Outcome::FolderLoaded { url, result } => {
                self.loading = false;
                match result {
                    Ok(view) => self.folder = Some(view),
                    Err(err) => {
                        tracing::warn!(%url, error = %err, "folder listing failed");
                        self.error = Some(format!("Failed to load folder: {err}"));
                    }
                }
                Effect::None
            }
            Outcome::FileLoaded { node, result } => {
                self.loading = false;
                match result {
                    Ok(content) => {
                        let view = open_file_view(&node, &content);
                        self.open_file = Some(OpenFile { node, view });
                    }
                    Err(err) => {
                        tracing::warn!(url = %node.url, error = %err, "file fetch failed");
                        self.error = Some(format!("Failed to open file: {err}"));
                    }
                }
                Effect::None
            }
            Outcome::ItemCreated { kind, result } => {
                self.loading = false;
                match result {
                    Ok(()) => match self.folder.as_ref().map(|f| f.url.clone()) {
                        Some(url) => self.load(url),
                        None => Effect::None,
                    },
                    Err(err) => {
                        self.error = Some(format!("Failed to create {}: {err}", kind.label()));
                        Effect::None
                    }
                }
            }
        }
    }

    pub fn folder_loaded(&mut self, url: &str, result: Result<FolderView, PodError>) -> Effect {
        self.apply(Outcome::FolderLoaded {
            url: url.to_string(),
            result,
        })
    }

    pub fn file_loaded(&mut self, node: ResourceNode, result: Result<String, PodError>) -> Effect {
        self.apply(Outcome::FileLoaded { node, result })
    }

    pub fn item_created(&mut self, kind: ItemKind, result: Result<(), PodError>) -> Effect {
        self.apply(Outcome::ItemCreated { kind, result })
    }

    fn load(&mut self, url: String) -> Effect {
        self.loading = true;
        self.error = None;
        Effect::LoadFolder(url)
    }

    fn create(&mut self, request: CreateRequest) -> Effect {
        let Some(folder) = &self.folder else {
            self.error = Some(PodError::NoActiveFolder.to_string());
            return Effect::None;
        };
        let name = request.name.trim();
        if name.is_empty() {
            self.error = Some(PodError::InvalidName.to_string());
            return Effect::None;
        }

        let item = match request.kind {
            ItemKind::Folder => CreateItem {
                url: format!("{}{}/", folder.url, name),
                kind: ItemKind::Folder,
                body: None,
            },
            ItemKind::File => CreateItem {
                url: format!("{}{}", folder.url, name),
                kind: ItemKind::File,
                body: Some(new_file_body(&request.content)),
            },
        };
        self.loading = true;
        self.error = None;
        Effect::Create(item)
    }
}

// =============================================================================
// Execution
// =============================================================================

/// Perform the remote part of an effect.
///
/// Returns `None` for effects that need no collaborator (`None`,
/// `Transition`); the caller handles those itself.
pub async fn execute<P>(pod: &P, effect: Effect) -> Option<Outcome>
where
    P: ContainerSource + ResourceFetcher + ResourceCreator,
{
    match effect {
        Effect::None | Effect::Transition(_) => None,
        Effect::LoadFolder(url) => {
            let result = list_children(pod, &url).await;
            Some(Outcome::FolderLoaded { url, result })
        }
        Effect::FetchFile(node) => {
            let result = pod.fetch_text(&node.url).await;
            Some(Outcome::FileLoaded { node, result })
        }
        Effect::Create(item) => {
            let result = match &item.body {
                Some(body) => pod.create_file(&item.url, body).await,
                None => pod.create_container(&item.url).await,
            };
            tracing::debug!(url = %item.url, ok = result.is_ok(), "create item");
            Some(Outcome::ItemCreated {
                kind: item.kind,
                result,
            })
        }
    }
}

type TransitionHandler = Box<dyn FnMut(SessionTransition)>;

/// Awaitable driver: owns the state and a collaborator and runs every
/// effect chain to completion.
pub struct Dashboard<P> {
    pod: P,
    state: DashboardState,
    on_transition: Option<TransitionHandler>,
}

impl<P> Dashboard<P>
where
    P: ContainerSource + ResourceFetcher + ResourceCreator,
{
    pub fn new(pod: P, session: Session) -> Self {
        Self {
            pod,
            state: DashboardState::new(session),
            on_transition: None,
        }
    }

    /// Register the callback receiving session transitions (logout).
    pub fn on_transition(mut self, handler: impl FnMut(SessionTransition) + 'static) -> Self {
        self.on_transition = Some(Box::new(handler));
        self
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn pod(&self) -> &P {
        &self.pod
    }

    pub async fn dispatch(&mut self, intent: Intent) {
        let effect = self.state.handle(intent);
        self.run(effect).await;
    }

    async fn run(&mut self, mut effect: Effect) {
        loop {
            if let Effect::Transition(transition) = effect {
                if let Some(handler) = self.on_transition.as_mut() {
                    handler(transition);
                }
                return;
            }
            let Some(outcome) = execute(&self.pod, effect).await else {
                return;
            };
            effect = self.state.apply(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pod::mock::MemoryPod;
    use crate::render::{RenderedValue, Scalar};

    const ROOT: &str = "https://pod.example/";

    fn node(url: &str) -> ResourceNode {
        ResourceNode::from_url(url).unwrap()
    }

    fn started() -> DashboardState {
        let mut state = DashboardState::default();
        state.handle(Intent::Initialize {
            root: Some(ROOT.into()),
        });
        state.folder_loaded(
            ROOT,
            Ok(FolderView {
                name: "Root".into(),
                url: ROOT.into(),
                items: vec![],
            }),
        );
        state
    }

    #[test]
    fn test_initialize() {
        let mut state = DashboardState::default();
        let effect = state.handle(Intent::Initialize {
            root: Some("https://alice.solidcommunity.net/".into()),
        });
        assert_eq!(
            effect,
            Effect::LoadFolder("https://alice.solidcommunity.net/".into())
        );
        assert!(state.loading);
        assert_eq!(state.path.as_ref().unwrap().len(), 1);
        let info = state.pod_info.as_ref().unwrap();
        assert_eq!(info.provider, "Solid Community");
        assert_eq!(info.username, "alice");
    }

    #[test]
    fn test_initialize_without_root() {
        let mut state = DashboardState::default();
        assert_eq!(state.handle(Intent::Initialize { root: None }), Effect::None);
        assert_eq!(state, DashboardState::default());
    }

    #[test]
    fn test_navigation_intents() {
        let mut state = started();
        assert_eq!(state.handle(Intent::Back), Effect::None);

        let effect = state.handle(Intent::OpenFolder("https://pod.example/a/".into()));
        assert_eq!(effect, Effect::LoadFolder("https://pod.example/a/".into()));
        state.handle(Intent::OpenFolder("https://pod.example/a/b/".into()));

        assert_eq!(
            state.handle(Intent::Refresh),
            Effect::LoadFolder("https://pod.example/a/b/".into())
        );
        assert_eq!(state.path.as_ref().unwrap().len(), 3);

        assert_eq!(
            state.handle(Intent::Back),
            Effect::LoadFolder("https://pod.example/a/".into())
        );
        assert_eq!(state.handle(Intent::JumpTo(7)), Effect::None);
        assert_eq!(state.handle(Intent::JumpTo(0)), Effect::LoadFolder(ROOT.into()));
    }

    #[test]
    fn test_folder_failure_sets_error() {
        let mut state = started();
        state.handle(Intent::OpenFolder("https://pod.example/a/".into()));
        state.folder_loaded(
            "https://pod.example/a/",
            Err(PodError::Http { status: 403 }),
        );
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to load folder: HTTP error: 403")
        );

        state.handle(Intent::DismissError);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_open_file_structured() {
        let mut state = started();
        let file = node("https://pod.example/card.ttl");
        assert_eq!(
            state.handle(Intent::OpenFile(file.clone())),
            Effect::FetchFile(file.clone())
        );

        state.file_loaded(
            file,
            Ok("<https://pod.example/card#me> <http://schema.org/name> \"Alice\" .".into()),
        );
        let Some(OpenFile {
            view: FileView::Structured(entities),
            ..
        }) = &state.open_file
        else {
            panic!("expected structured view");
        };
        assert_eq!(entities[0].properties[0].key, "http://schema.org/name");
        assert_eq!(
            entities[0].properties[0].value,
            RenderedValue::Scalar(Scalar::Text("Alice".into()))
        );

        state.handle(Intent::CloseFile);
        assert_eq!(state.open_file, None);
    }

    #[test]
    fn test_open_image_needs_no_fetch() {
        let mut state = started();
        let image = node("https://pod.example/cat.JPG");
        assert_eq!(state.handle(Intent::OpenFile(image)), Effect::None);
        assert_eq!(
            state.open_file.as_ref().map(|f| &f.view),
            Some(&FileView::Image {
                url: "https://pod.example/cat.JPG".into()
            })
        );
    }

    #[test]
    fn test_open_file_failure() {
        let mut state = started();
        let file = node("https://pod.example/notes.txt");
        state.handle(Intent::OpenFile(file.clone()));
        state.file_loaded(file, Err(PodError::Timeout));
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to open file: request timed out")
        );
        assert_eq!(state.open_file, None);
    }

    #[test]
    fn test_classify_content() {
        assert_eq!(classify_content("https://x/a.gif", ""), ContentKind::Image);
        assert_eq!(
            classify_content("https://x/a", "@prefix s: <http://schema.org/> ."),
            ContentKind::Structured
        );
        assert_eq!(
            classify_content("https://x/a", "<http://x> <http://y> \"z\" ."),
            ContentKind::Structured
        );
        assert_eq!(classify_content("https://x/a", "hello"), ContentKind::Text);
    }

    #[test]
    fn test_structured_without_entities_is_text() {
        let view = open_file_view(&node("https://x.example/a"), "see schema:Person");
        assert_eq!(view, FileView::Text("see schema:Person".into()));
    }

    #[test]
    fn test_create_validation() {
        let mut state = DashboardState::default();
        let request = CreateRequest {
            name: "docs".into(),
            ..CreateRequest::default()
        };
        assert_eq!(state.handle(Intent::Create(request)), Effect::None);
        assert_eq!(
            state.error.as_deref(),
            Some("No active session or current folder")
        );

        let mut state = started();
        let blank = CreateRequest {
            name: "   ".into(),
            ..CreateRequest::default()
        };
        assert_eq!(state.handle(Intent::Create(blank)), Effect::None);
        assert_eq!(state.error.as_deref(), Some("Name is required"));
        assert!(!state.loading);
    }

    #[test]
    fn test_create_items() {
        let mut state = started();
        let folder = CreateRequest {
            name: " docs ".into(),
            kind: ItemKind::Folder,
            content: String::new(),
        };
        assert_eq!(
            state.handle(Intent::Create(folder)),
            Effect::Create(CreateItem {
                url: "https://pod.example/docs/".into(),
                kind: ItemKind::Folder,
                body: None,
            })
        );

        assert_eq!(
            state.item_created(ItemKind::Folder, Ok(())),
            Effect::LoadFolder(ROOT.into())
        );

        let file = CreateRequest {
            name: "note.ttl".into(),
            kind: ItemKind::File,
            content: "say \"hi\"".into(),
        };
        let Effect::Create(item) = state.handle(Intent::Create(file)) else {
            panic!("expected create effect");
        };
        assert_eq!(item.url, "https://pod.example/note.ttl");
        assert_eq!(
            item.body.as_deref(),
            Some("<#it> <http://schema.org/text> \"say \\\"hi\\\"\" .\n")
        );

        assert_eq!(
            state.item_created(ItemKind::File, Err(PodError::Http { status: 409 })),
            Effect::None
        );
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to create file: HTTP error: 409")
        );
    }

    #[test]
    fn test_new_file_body_parses_back() {
        let body = new_file_body("line one\nback\\slash \"quoted\"");
        let entities = turtle::parse(&body);
        assert_eq!(entities[0].subject, "#it");
        assert_eq!(
            entities[0].properties.get(FILE_TEXT_PREDICATE),
            Some(&turtle::PropertyValue::Single(
                "line one\nback\\slash \"quoted\"".into()
            ))
        );
    }

    #[test]
    fn test_logout() {
        let mut state = started();
        assert_eq!(
            state.handle(Intent::Logout),
            Effect::Transition(SessionTransition::LoggedOut)
        );
        assert_eq!(state, DashboardState::default());
    }

    fn sample_pod() -> MemoryPod {
        let pod = MemoryPod::new();
        pod.add_container(ROOT);
        pod.put_document("https://pod.example/alpha.txt", "");
        pod.add_container("https://pod.example/archive/");
        pod.add_container("https://pod.example/archive/2023/");
        pod
    }

    async fn browsing(pod: &MemoryPod) -> Dashboard<&MemoryPod> {
        let mut dashboard = Dashboard::new(pod, Session::default());
        dashboard
            .dispatch(Intent::Initialize {
                root: Some(ROOT.into()),
            })
            .await;
        dashboard
    }

    fn path_len(dashboard: &Dashboard<&MemoryPod>) -> usize {
        dashboard.state().path.as_ref().map_or(0, NavigationPath::len)
    }

    #[tokio::test]
    async fn test_driver_walks_folders() {
        let pod = sample_pod();
        let mut dashboard = browsing(&pod).await;
        assert_eq!(dashboard.state().folder.as_ref().unwrap().items.len(), 2);

        dashboard
            .dispatch(Intent::OpenFolder("https://pod.example/archive/".into()))
            .await;
        let archive = dashboard.state().folder.as_ref().unwrap();
        assert_eq!(archive.name, "archive");
        assert_eq!(archive.items[0].name, "2023");

        dashboard
            .dispatch(Intent::OpenFolder("https://pod.example/archive/2023/".into()))
            .await;
        assert_eq!(path_len(&dashboard), 3);

        dashboard.dispatch(Intent::JumpTo(0)).await;
        assert_eq!(dashboard.state().folder.as_ref().unwrap().url, ROOT);
        assert_eq!(path_len(&dashboard), 1);
    }

    #[tokio::test]
    async fn test_back_at_root_lists_nothing() {
        let pod = sample_pod();
        let mut dashboard = browsing(&pod).await;
        let before = pod.listing_count();

        dashboard.dispatch(Intent::Back).await;
        assert_eq!(pod.listing_count(), before);
        assert_eq!(path_len(&dashboard), 1);
        assert!(!dashboard.state().loading);
    }

    #[tokio::test]
    async fn test_jump_out_of_range_lists_nothing() {
        let pod = sample_pod();
        let mut dashboard = browsing(&pod).await;
        let before = pod.listing_count();

        dashboard.dispatch(Intent::JumpTo(3)).await;
        assert_eq!(pod.listing_count(), before);
        assert_eq!(path_len(&dashboard), 1);
    }

    #[tokio::test]
    async fn test_refresh_twice_gives_same_view() {
        let pod = sample_pod();
        let mut dashboard = browsing(&pod).await;
        dashboard
            .dispatch(Intent::OpenFolder("https://pod.example/archive/".into()))
            .await;
        let before = pod.listing_count();

        dashboard.dispatch(Intent::Refresh).await;
        let first = dashboard.state().folder.clone();
        dashboard.dispatch(Intent::Refresh).await;
        let second = dashboard.state().folder.clone();

        assert_eq!(first, second);
        assert_eq!(pod.listing_count(), before + 2);
        assert_eq!(path_len(&dashboard), 2);
    }

    #[tokio::test]
    async fn test_failed_listing_keeps_path_and_view() {
        let pod = sample_pod();
        let mut dashboard = browsing(&pod).await;
        pod.fail("https://pod.example/archive/");

        dashboard
            .dispatch(Intent::OpenFolder("https://pod.example/archive/".into()))
            .await;
        assert_eq!(path_len(&dashboard), 2);
        assert_eq!(dashboard.state().folder.as_ref().unwrap().url, ROOT);
        assert!(dashboard.state().error.is_some());
    }
}
