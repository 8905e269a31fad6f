// End-to-end scenarios against the full router.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::make_test_state;

const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

struct TestClient {
    state: AppState,
    app: Router,
}

impl TestClient {
    fn new(state: AppState) -> Self {
        let app = router(state.clone(), STATIC_DIR);
        Self { state, app }
    }

    async fn send(&self, method: Method, uri: &str) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn activities(&self) -> Value {
        let (status, json) = self.send(Method::GET, "/activities").await;
        assert_eq!(status, StatusCode::OK);
        json
    }

    async fn participants(&self, activity: &str) -> Vec<String> {
        serde_json::from_value(self.activities().await[activity]["participants"].clone())
            .unwrap()
    }

    async fn sign_up(&self, activity: &str, email: &str) -> (StatusCode, Value) {
        self.send(Method::POST, &roster_uri(activity, "signup", email))
            .await
    }

    async fn unregister(&self, activity: &str, email: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, &roster_uri(activity, "unregister", email))
            .await
    }
}

fn roster_uri(activity: &str, action: &str, email: &str) -> String {
    format!(
        "/activities/{}/{action}?email={email}",
        activity.replace(' ', "%20")
    )
}

#[fixture]
fn client() -> TestClient {
    TestClient::new(make_test_state())
}

#[rstest]
#[tokio::test]
async fn lists_every_seeded_activity_with_its_fields(client: TestClient) {
    let data = client.activities().await;

    for name in [
        "Chess Club",
        "Programming Class",
        "Gym Class",
        "Soccer Team",
        "Basketball Club",
        "Art Club",
        "Drama Society",
        "Math Olympiad",
        "Science Club",
    ] {
        let activity = &data[name];
        assert!(activity["description"].is_string(), "{name}");
        assert!(activity["schedule"].is_string(), "{name}");
        assert!(activity["max_participants"].is_u64(), "{name}");
        assert!(activity["participants"].is_array(), "{name}");
        assert!(
            activity["participants"].as_array().unwrap().len() as u64
                <= activity["max_participants"].as_u64().unwrap(),
            "{name}"
        );
    }
}

#[rstest]
#[tokio::test]
async fn signs_up_then_unregisters_in_chess_club(client: TestClient) {
    let (status, body) = client
        .sign_up("Chess Club", "newstudent@mergington.edu")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Signed up newstudent@mergington.edu for Chess Club"})
    );
    assert_eq!(
        client.participants("Chess Club").await,
        [
            "michael@mergington.edu",
            "daniel@mergington.edu",
            "newstudent@mergington.edu"
        ]
    );

    let (status, body) = client
        .unregister("Chess Club", "michael@mergington.edu")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Unregistered michael@mergington.edu from Chess Club"})
    );
    assert_eq!(
        client.participants("Chess Club").await,
        ["daniel@mergington.edu", "newstudent@mergington.edu"]
    );
}

#[rstest]
#[tokio::test]
async fn rejects_a_duplicate_signup_without_changing_the_roster(client: TestClient) {
    let before = client.participants("Chess Club").await;

    let (status, body) = client
        .sign_up("Chess Club", "michael@mergington.edu")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"detail": "Student already signed up for this activity"})
    );
    assert_eq!(client.participants("Chess Club").await, before);
}

#[rstest]
#[tokio::test]
async fn fills_math_olympiad_to_capacity_then_rejects(client: TestClient) {
    for i in 0..8 {
        let (status, _) = client
            .sign_up("Math Olympiad", &format!("student{i}@mergington.edu"))
            .await;
        assert_eq!(status, StatusCode::OK, "signup {i}");
    }

    let (status, body) = client
        .sign_up("Math Olympiad", "overflow@mergington.edu")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Activity is at full capacity"}));
    let participants = client.participants("Math Olympiad").await;
    assert_eq!(participants.len(), 10);
    assert!(!participants.contains(&"overflow@mergington.edu".to_string()));
}

#[rstest]
#[tokio::test]
async fn signs_one_student_up_for_several_activities(client: TestClient) {
    let email = "multistudent@mergington.edu";

    for activity in ["Chess Club", "Programming Class"] {
        let (status, _) = client.sign_up(activity, email).await;
        assert_eq!(status, StatusCode::OK);
    }

    assert!(client.participants("Chess Club").await.contains(&email.to_string()));
    assert!(
        client
            .participants("Programming Class")
            .await
            .contains(&email.to_string())
    );
}

#[rstest]
#[case("test@mergington.edu")]
#[case("test.student@mergington.edu")]
#[case("test_student@mergington.edu")]
#[case("test-student@mergington.edu")]
#[case("test123@mergington.edu")]
#[tokio::test]
async fn accepts_varied_email_formats(client: TestClient, #[case] email: &str) {
    let (status, _) = client.sign_up("Programming Class", email).await;
    assert_eq!(status, StatusCode::OK, "failed for email: {email}");
    assert!(
        client
            .participants("Programming Class")
            .await
            .contains(&email.to_string())
    );
}

#[rstest]
#[case("Nonexistent Club")]
#[case("chess club")]
#[case("CHESS CLUB")]
#[tokio::test]
async fn returns_404_for_unknown_or_miscased_activities(client: TestClient, #[case] name: &str) {
    let before = client.activities().await;

    let (status, body) = client.sign_up(name, "student@mergington.edu").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Activity not found"}));

    let (status, body) = client.unregister(name, "michael@mergington.edu").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Activity not found"}));

    assert_eq!(client.activities().await, before);
}

#[rstest]
#[tokio::test]
async fn rejects_unregistering_a_non_participant(client: TestClient) {
    let before = client.participants("Chess Club").await;

    let (status, body) = client
        .unregister("Chess Club", "notregistered@mergington.edu")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"detail": "Student is not registered for this activity"})
    );
    assert_eq!(client.participants("Chess Club").await, before);
}

#[rstest]
#[tokio::test]
async fn restores_membership_after_signup_then_unregister(client: TestClient) {
    let email = "workflow@mergington.edu";
    let before = client.participants("Art Club").await;

    let (status, _) = client.sign_up("Art Club", email).await;
    assert_eq!(status, StatusCode::OK);
    assert!(client.participants("Art Club").await.contains(&email.to_string()));

    let (status, _) = client.unregister("Art Club", email).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(client.participants("Art Club").await, before);
}

#[rstest]
#[tokio::test]
async fn repeating_a_successful_unregister_fails(client: TestClient) {
    let (status, _) = client
        .unregister("Gym Class", "john@mergington.edu")
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = client
        .unregister("Gym Class", "john@mergington.edu")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn reset_restores_the_seeded_rosters(client: TestClient) {
    let seeded = client.activities().await;
    client
        .sign_up("Drama Society", "actor@mergington.edu")
        .await;
    client
        .unregister("Soccer Team", "liam@mergington.edu")
        .await;
    assert_ne!(client.activities().await, seeded);

    client.state.roster.reset().await;

    assert_eq!(client.activities().await, seeded);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_signups_never_exceed_capacity(client: TestClient) {
    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let app = client.app.clone();
            tokio::spawn(async move {
                app.oneshot(
                    Request::post(roster_uri(
                        "Math Olympiad",
                        "signup",
                        &format!("racer{i}@mergington.edu"),
                    ))
                    .body(Body::empty())
                    .unwrap(),
                )
                .await
                .unwrap()
                .status()
            })
        })
        .collect();

    let mut accepted = 0;
    for task in tasks {
        match task.await.unwrap() {
            StatusCode::OK => accepted += 1,
            StatusCode::BAD_REQUEST => {}
            other => panic!("unexpected status: {other}"),
        }
    }

    assert_eq!(accepted, 8);
    assert_eq!(client.participants("Math Olympiad").await.len(), 10);
}
