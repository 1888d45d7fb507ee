use chrono::{Days, NaiveDate, Utc};
use serde_json::{Value, json};
use std::sync::OnceLock;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Kept alive for the whole run: dropping a [MockServer] shuts it down.
static DEMO_BACKEND: OnceLock<MockServer> = OnceLock::new();

/// Start a canned gym backend and return its base URI.
/// Dates are laid out around today so every membership status and
/// checkup urgency shows up somewhere in the dashboard.
pub async fn init_demo() -> String {
    let mock_server = MockServer::start().await;
    let today = Utc::now().date_naive();

    mock_auth(&mock_server).await;
    mock_members(&mock_server, today).await;
    mock_trainers(&mock_server).await;
    mock_plans(&mock_server).await;
    mock_queries(&mock_server).await;
    mock_workouts(&mock_server).await;
    mock_checkups(&mock_server, today).await;

    let uri = mock_server.uri();
    DEMO_BACKEND.get_or_init(|| mock_server);
    uri
}

async fn mock_auth(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "demo-token",
            "token_type": "bearer"
        })))
        .mount(mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(demo_user()))
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(demo_user()))
        .mount(mock_server)
        .await;
}

fn demo_user() -> Value {
    json!({
        "id": 1,
        "name": "Demo Admin",
        "email": "admin@demo.gym",
        "role": "admin",
        "status": "active"
    })
}

async fn mock_members(mock_server: &MockServer, today: NaiveDate) {
    let members = demo_members(today);
    Mock::given(method("GET"))
        .and(path("/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&members))
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/members/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&members[0]))
        .mount(mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/members"))
        .respond_with(ResponseTemplate::new(201).set_body_json(&members[0]))
        .mount(mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path_regex(r"^/members/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&members[0]))
        .mount(mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/members/\d+$"))
        .respond_with(ResponseTemplate::new(204))
        .mount(mock_server)
        .await;
}

fn demo_members(today: NaiveDate) -> Vec<Value> {
    let member = |id: u32, name: &str, end: Option<NaiveDate>, checkup: Option<NaiveDate>| {
        json!({
            "id": id,
            "name": name,
            "phone": "+33 6 12 34 56 78",
            "age": 30,
            "gender": null,
            "address": null,
            "membership_type": "standard",
            "membership_start": end.and_then(|date| date.checked_sub_days(Days::new(365))),
            "membership_end": end,
            "last_fitness_checkup_date": null,
            "next_fitness_checkup_date": checkup,
            "image_url": null,
            "created_at": "2024-01-01T08:00:00Z"
        })
    };

    vec![
        member(
            1,
            "Ada Fortier",
            today.checked_add_days(Days::new(90)),
            today.checked_add_days(Days::new(14)),
        ),
        member(
            2,
            "Bruno Keller",
            today.checked_add_days(Days::new(3)),
            Some(today),
        ),
        member(
            3,
            "Chloé Navarro",
            today.checked_sub_days(Days::new(10)),
            today.checked_sub_days(Days::new(2)),
        ),
        member(4, "Diego Sato", None, None),
    ]
}

async fn mock_trainers(mock_server: &MockServer) {
    let trainer = json!({
        "id": 1,
        "user_id": 7,
        "user_email": "lea@demo.gym",
        "user_name": "Léa Marchand",
        "specialization": "strength",
        "bio": null,
        "experience_years": 6,
        "phone": "+33 6 98 76 54 32",
        "certifications": null,
        "created_at": "2024-01-01T08:00:00Z",
        "updated_at": null
    });
    Mock::given(method("GET"))
        .and(path("/trainers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([trainer])))
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/trainers/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&trainer))
        .mount(mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/trainers"))
        .respond_with(ResponseTemplate::new(201).set_body_json(&trainer))
        .mount(mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path_regex(r"^/trainers/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&trainer))
        .mount(mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/trainers/\d+$"))
        .respond_with(ResponseTemplate::new(204))
        .mount(mock_server)
        .await;
}

async fn mock_plans(mock_server: &MockServer) {
    let plan = json!({
        "id": 1,
        "name": "Quarterly",
        "description": "Three months, all facilities",
        "price": 120.0,
        "discount": 10.0,
        "duration_days": 90,
        "final_price": 108.0,
        "is_active": true,
        "created_at": "2024-01-01T08:00:00Z",
        "updated_at": null
    });
    Mock::given(method("GET"))
        .and(path("/plans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([plan])))
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/plans/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&plan))
        .mount(mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/plans"))
        .respond_with(ResponseTemplate::new(201).set_body_json(&plan))
        .mount(mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path_regex(r"^/plans/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&plan))
        .mount(mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/plans/\d+$"))
        .respond_with(ResponseTemplate::new(204))
        .mount(mock_server)
        .await;
}

async fn mock_queries(mock_server: &MockServer) {
    let query = json!({
        "id": 1,
        "name": "Walk In",
        "mobile": "0612345678",
        "email": null,
        "message": "Interested in a free trial",
        "status": "open",
        "created_at": "2024-01-01T08:00:00Z"
    });
    Mock::given(method("GET"))
        .and(path("/queries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([query])))
        .mount(mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/queries"))
        .respond_with(ResponseTemplate::new(201).set_body_json(&query))
        .mount(mock_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path_regex(r"^/queries/\d+/status$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Status updated"})))
        .mount(mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/queries/\d+$"))
        .respond_with(ResponseTemplate::new(204))
        .mount(mock_server)
        .await;
}

async fn mock_workouts(mock_server: &MockServer) {
    let workout = json!({
        "id": 1,
        "name": "Full body circuit",
        "description": "3 rounds, 8 stations",
        "date": null,
        "duration": 45,
        "calories": 400,
        "notes": null,
        "created_at": "2024-01-01T08:00:00Z"
    });
    Mock::given(method("GET"))
        .and(path("/workouts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([workout])))
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/workouts/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&workout))
        .mount(mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/workouts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(&workout))
        .mount(mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path_regex(r"^/workouts/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&workout))
        .mount(mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/workouts/\d+$"))
        .respond_with(ResponseTemplate::new(204))
        .mount(mock_server)
        .await;
}

async fn mock_checkups(mock_server: &MockServer, today: NaiveDate) {
    let due = demo_members(today)
        .into_iter()
        .filter(|member| {
            member["next_fitness_checkup_date"]
                .as_str()
                .and_then(|date| date.parse::<NaiveDate>().ok())
                .is_some_and(|date| (date - today).num_days() <= 2)
        })
        .collect::<Vec<_>>();
    Mock::given(method("GET"))
        .and(path("/fitness-checkups/due"))
        .respond_with(ResponseTemplate::new(200).set_body_json(due))
        .mount(mock_server)
        .await;

    let mut rescheduled = demo_members(today).remove(2);
    rescheduled["last_fitness_checkup_date"] = json!(today);
    rescheduled["next_fitness_checkup_date"] = json!(today.checked_add_days(Days::new(21)));
    Mock::given(method("POST"))
        .and(path_regex(r"^/fitness-checkups/\d+/mark-done$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rescheduled))
        .mount(mock_server)
        .await;
}
