//! End-to-end dashboard runs against an in-memory pod.

use std::cell::RefCell;
use std::rc::Rc;

use podview_core::pod::mock::MemoryPod;
use podview_core::{
    CreateRequest, Dashboard, FileView, Intent, ItemKind, RenderedValue, ResourceNode,
    RootResolver, Scalar, Session, SessionTransition,
};

const WEB_ID: &str = "https://alice.example/profile/card#me";
const ROOT: &str = "https://alice.example/pod/";

fn seeded_pod() -> MemoryPod {
    let pod = MemoryPod::new();
    pod.put_document(
        "https://alice.example/profile/card",
        &format!("<{WEB_ID}> <http://www.w3.org/ns/pim/space#storage> <{ROOT}> ."),
    );
    pod.add_container(ROOT);
    pod.add_container("https://alice.example/pod/notes/");
    pod.put_document(
        "https://alice.example/pod/notes/order.ttl",
        r#"@prefix schema: <http://schema.org/> .

<https://alice.example/pod/notes/order.ttl#it>
    a <http://schema.org/Order> ;
    schema:orderDate "2024-05-01T09:30:00Z"^^<http://www.w3.org/2001/XMLSchema#dateTime> ;
    schema:orderedItem [ a <http://schema.org/Product> ; schema:name "Pen" ] .
"#,
    );
    pod.put_document("https://alice.example/pod/readme.txt", "plain words");
    pod
}

#[tokio::test]
async fn browse_open_and_create() {
    let pod = seeded_pod();
    let session = Session::new(Some(WEB_ID.into()), None);
    let root = pod.resolve_root(&session).await;
    assert_eq!(root.as_deref(), Some(ROOT));

    let mut dashboard = Dashboard::new(&pod, session);
    dashboard.dispatch(Intent::Initialize { root }).await;

    let state = dashboard.state();
    assert!(!state.loading);
    let names: Vec<&str> = state
        .folder
        .as_ref()
        .unwrap()
        .items
        .iter()
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(names, vec!["notes", "readme.txt"]);

    dashboard
        .dispatch(Intent::OpenFolder("https://alice.example/pod/notes/".into()))
        .await;
    let order = dashboard.state().folder.as_ref().unwrap().items[0].clone();
    assert_eq!(order.name, "order.ttl");

    dashboard.dispatch(Intent::OpenFile(order)).await;
    let Some(FileView::Structured(entities)) =
        dashboard.state().open_file.as_ref().map(|f| &f.view)
    else {
        panic!("expected a structured view");
    };
    assert_eq!(entities[0].types, vec!["Order"]);
    assert!(matches!(
        entities[0].properties[0].value,
        RenderedValue::Scalar(Scalar::DateTime { .. })
    ));
    let RenderedValue::Nested(items) = &entities[0].properties[1].value else {
        panic!("expected nested item");
    };
    assert_eq!(items[0].types, vec!["Product"]);

    dashboard.dispatch(Intent::CloseFile).await;
    dashboard.dispatch(Intent::Back).await;
    assert_eq!(dashboard.state().path.as_ref().unwrap().len(), 1);

    dashboard
        .dispatch(Intent::Create(CreateRequest {
            name: "todo.ttl".into(),
            kind: ItemKind::File,
            content: "buy milk".into(),
        }))
        .await;
    let state = dashboard.state();
    assert_eq!(state.error, None);
    assert!(
        state
            .folder
            .as_ref()
            .unwrap()
            .items
            .iter()
            .any(|n| n.name == "todo.ttl")
    );
    assert!(
        pod.document("https://alice.example/pod/todo.ttl")
            .unwrap()
            .contains("\"buy milk\"")
    );
}

#[tokio::test]
async fn failures_surface_and_recover() {
    let pod = seeded_pod();
    let mut dashboard = Dashboard::new(&pod, Session::default());
    dashboard
        .dispatch(Intent::Initialize {
            root: Some(ROOT.into()),
        })
        .await;

    pod.fail(ROOT);
    dashboard.dispatch(Intent::Refresh).await;
    assert_eq!(
        dashboard.state().error.as_deref(),
        Some("Failed to load folder: HTTP error: 500")
    );

    pod.recover(ROOT);
    dashboard.dispatch(Intent::DismissError).await;
    dashboard.dispatch(Intent::Refresh).await;
    assert_eq!(dashboard.state().error, None);

    let missing = ResourceNode::from_url("https://alice.example/pod/gone.txt").unwrap();
    dashboard.dispatch(Intent::OpenFile(missing)).await;
    assert_eq!(
        dashboard.state().error.as_deref(),
        Some("Failed to open file: HTTP error: 404")
    );

    dashboard
        .dispatch(Intent::Create(CreateRequest::default()))
        .await;
    assert_eq!(dashboard.state().error.as_deref(), Some("Name is required"));
}

#[tokio::test]
async fn logout_reports_transition() {
    let pod = seeded_pod();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut dashboard = Dashboard::new(&pod, Session::new(Some(WEB_ID.into()), None))
        .on_transition(move |t| sink.borrow_mut().push(t));
    dashboard
        .dispatch(Intent::Initialize {
            root: Some(ROOT.into()),
        })
        .await;
    dashboard.dispatch(Intent::Logout).await;

    assert_eq!(*seen.borrow(), vec![SessionTransition::LoggedOut]);
    assert!(dashboard.state().folder.is_none());
    assert!(dashboard.state().session.web_id.is_none());
}

#[tokio::test]
async fn undeterminable_root_leaves_state_empty() {
    let pod = MemoryPod::new();
    let session = Session::new(Some("https://nobody.example/card#me".into()), None);
    let root = pod.resolve_root(&session).await;
    assert_eq!(root, None);

    let mut dashboard = Dashboard::new(&pod, session);
    dashboard.dispatch(Intent::Initialize { root }).await;
    assert!(dashboard.state().path.is_none());
    assert_eq!(pod.listing_count(), 0);
}
