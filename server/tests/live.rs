//! End-to-end test over real HTTP.
//!
//! Boots the server on a random port, then exercises every operation and
//! failure mode with ureq, checking the wire status, content type, and body
//! the way an external client would see them.

use serde_json::Value;

/// ureq agent with status-as-error disabled, so 4xx/5xx responses come back
/// as data rather than `Err`.
fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todos_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn read_json(response: &mut ureq::http::Response<ureq::Body>) -> Value {
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .expect("content type header")
            .to_str()
            .unwrap(),
        "application/json"
    );
    let raw = response.body_mut().read_to_string().unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn todos_contract_over_the_wire() {
    let base = spawn_server();
    let agent = agent();

    // list — empty
    let mut resp = agent.get(format!("{base}/todos")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(read_json(&mut resp), serde_json::json!([]));

    // create — missing title
    let mut resp = agent
        .post(format!("{base}/todos"))
        .content_type("application/json")
        .send(b"{}".as_slice())
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);
    let body = read_json(&mut resp);
    assert_eq!(body["errorMsg"], "Missing parameter 'title'");

    // create — null title
    let mut resp = agent
        .post(format!("{base}/todos"))
        .content_type("application/json")
        .send(br#"{"title":null}"#.as_slice())
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body = read_json(&mut resp);
    assert_eq!(body["errorMsg"], "Invalid parameter 'title'");

    // create — success
    let mut resp = agent
        .post(format!("{base}/todos"))
        .content_type("application/json")
        .send(br#"{"title":"Wire test"}"#.as_slice())
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body = read_json(&mut resp);
    let id = body["id"].as_str().expect("created id").to_string();
    assert_eq!(id.len(), 24);

    // list — one record, full rendering
    let mut resp = agent.get(format!("{base}/todos")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let todos = read_json(&mut resp);
    let todos = todos.as_array().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["id"], id.as_str());
    assert_eq!(todos[0]["title"], "Wire test");
    assert_eq!(todos[0]["completed"], false);
    let created_at = todos[0]["createdAt"].as_str().unwrap();
    assert_eq!(created_at.len(), 24);
    assert!(created_at.ends_with('Z'));

    // delete — missing id segment
    let mut resp = agent.delete(format!("{base}/todos")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 422);
    let body = read_json(&mut resp);
    assert_eq!(body["errorMsg"], "Missing parameter 'id'");

    // delete — malformed id
    let mut resp = agent.delete(format!("{base}/todos/a")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body = read_json(&mut resp);
    assert_eq!(body["errorMsg"], "Invalid parameter 'id'");

    // delete — well-formed but unassigned id
    let mut resp = agent
        .delete(format!("{base}/todos/ffffffffffffffffffffffff"))
        .call()
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
    let body = read_json(&mut resp);
    assert_eq!(body["errorMsg"], "Not found 'ffffffffffffffffffffffff'");

    // delete — success
    let mut resp = agent.delete(format!("{base}/todos/{id}")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body = read_json(&mut resp);
    assert_eq!(body["message"], format!("Todo '{id}' deleted"));

    // list — empty again
    let mut resp = agent.get(format!("{base}/todos")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(read_json(&mut resp), serde_json::json!([]));
}
