use super::*;

/// Tests that admin routes admit only the configured API key.
///
/// Expected: 401 without a key and with a wrong key, 200 with the right key
#[tokio::test]
async fn admin_routes_require_matching_api_key() {
    let app = TestApp::new().await;

    let missing = app
        .send(empty_request(Method::GET, "/api/admin/tickets"))
        .await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let mut wrong = empty_request(Method::GET, "/api/admin/tickets");
    wrong
        .headers_mut()
        .insert(API_KEY_HEADER, "not-the-key".parse().unwrap());
    let wrong = app.send(wrong).await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);

    let admitted = app
        .send(with_api_key(empty_request(Method::GET, "/api/admin/tickets")))
        .await;
    assert_eq!(admitted.status, StatusCode::OK);
    assert_eq!(admitted.body["total"], 0);
}

/// Tests that a rejected admin request never reaches the handler.
///
/// Expected: 401 and no horse stored
#[tokio::test]
async fn rejected_admin_request_has_no_effect() {
    let app = TestApp::new().await;

    let response = app
        .send(json_request(
            Method::POST,
            "/api/admin/horses",
            json!({ "name": "Storm", "price": 10 }),
        ))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let list = app.send(empty_request(Method::GET, "/api/horses")).await;
    assert_eq!(list.body["total"], 0);
}

/// Tests the support reply flow.
///
/// Expected: 201 reply marked fromAdmin and the ticket answered
#[tokio::test]
async fn admin_reply_marks_ticket_answered() {
    let app = TestApp::new().await;

    let user = factory::create_user(&app.db).await.unwrap();
    let (ticket, _) = factory::helpers::create_ticket_with_message(&app.db, user.id)
        .await
        .unwrap();

    let reply = app
        .send(with_api_key(json_request(
            Method::POST,
            &format!("/api/admin/tickets/{}/messages", ticket.id),
            json!({ "content": "Your horse ships Monday" }),
        )))
        .await;
    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.body["fromAdmin"], true);

    let detail = app
        .send(with_api_key(empty_request(
            Method::GET,
            &format!("/api/admin/tickets/{}", ticket.id),
        )))
        .await;
    assert_eq!(detail.body["status"], "answered");
    assert_eq!(detail.body["messages"].as_array().unwrap().len(), 2);
}

/// Tests that an empty support reply is rejected by the content pipe.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn admin_reply_requires_content_or_image() {
    let app = TestApp::new().await;

    let user = factory::create_user(&app.db).await.unwrap();
    let ticket = factory::create_ticket(&app.db, user.id).await.unwrap();

    let reply = app
        .send(with_api_key(json_request(
            Method::POST,
            &format!("/api/admin/tickets/{}/messages", ticket.id),
            json!({ "content": "" }),
        )))
        .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
}
