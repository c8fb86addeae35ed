use fleet_command::utils::validation::Validate;
use fleet_command::{build_router, AppState, CommandOutcome, TomlConfig};
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

const CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 5000
cors_origins = ["https://fleet.example.com"]

[[vehicles]]
name = "Truck Two"
lat = 32.7767
lng = -96.7970
location = "Dallas"

[[vehicles]]
name = "truck 3"
lat = 29.7604
lng = -95.3698
location = "Dallas"
driver = "lee"

[[drivers]]
id = 10
name = "lee"

[[drivers]]
id = 11
name = "kim"
"#;

#[tokio::test]
async fn test_server_seeded_from_config_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(CONFIG.as_bytes()).unwrap();

    let config = TomlConfig::from_file(temp_file.path()).unwrap();
    config.validate().unwrap();

    let app = build_router(AppState::new(config.build_fleet()), &config.server).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    let client = reqwest::Client::new();

    let vehicles: Value = client
        .get(format!("http://{addr}/api/vehicles"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(vehicles["truck 2"]["location"], "Dallas");
    assert_eq!(vehicles["truck 3"]["driver"], "lee");

    let outcome: CommandOutcome = client
        .post(format!("http://{addr}/api/command"))
        .json(&json!({ "transcript": "How many trucks in Dallas?" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(outcome.output, "📊 There are 2 vehicle(s) in Dallas.");

    let outcome: CommandOutcome = client
        .post(format!("http://{addr}/api/command"))
        .json(&json!({ "transcript": "assign lee to truck two" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(outcome.output, "✅ Assigned lee to truck 2. (prev: none)");

    let drivers: Value = client
        .get(format!("http://{addr}/api/drivers"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        drivers,
        json!([
            { "id": 10, "driverName": "lee", "vehicle": "truck 2" },
            { "id": 11, "driverName": "kim", "vehicle": null }
        ])
    );

    let response = client
        .get(format!("http://{addr}/api/vehicles"))
        .header("origin", "https://fleet.example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://fleet.example.com")
    );
}
