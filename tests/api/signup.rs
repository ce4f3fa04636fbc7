use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::TestApp;

#[tokio::test]
async fn signup_ok() -> Result<()> {
    let app = TestApp::spawn().await?;

    let json_request = json!({
        "firstName": "Ana",
        "email": "ana@x.com",
        "profession": "legal"
    });

    // Setup the mock provider
    Mock::given(path("/lists/test-list/members"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.mailing_server)
        .await;

    let res = app.post_signup(&json_request).await?;

    assert_eq!(
        res.status(),
        StatusCode::OK,
        "Wrong response StatusCode: {}",
        res.status()
    );

    let body: Value = res.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Successfully subscribed!");

    Ok(())
}

#[tokio::test]
async fn signup_relays_mapped_profession_and_fixed_tags() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(path("/lists/test-list/members"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.mailing_server)
        .await;

    let res = app
        .post_signup(&json!({
            "firstName": "Ana",
            "email": "ana@x.com",
            "profession": "healthcare",
            "source": "spring-webinar"
        }))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let requests = app.mailing_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: Value = serde_json::from_slice(&requests[0].body)?;
    assert_eq!(body["email_address"], "ana@x.com");
    assert_eq!(body["status"], "subscribed");
    assert_eq!(body["merge_fields"]["FNAME"], "Ana");
    assert_eq!(body["merge_fields"]["PROFESSION"], "Healthcare_Professional");
    assert_eq!(
        body["tags"],
        json!(["Free_Sampler", "Website_Signup", "Healthcare_Professional", "spring-webinar"])
    );

    Ok(())
}

#[tokio::test]
async fn signup_member_exists_is_welcomed_back() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(path("/lists/test-list/members"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "title": "Member Exists",
            "status": 400,
            "detail": "ana@x.com is already a list member."
        })))
        .expect(1)
        .mount(&app.mailing_server)
        .await;

    let res = app
        .post_signup(&json!({
            "firstName": "Ana",
            "email": "ana@x.com",
            "profession": "legal"
        }))
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Welcome back!");

    Ok(())
}

#[tokio::test]
async fn signup_provider_failure_is_a_generic_500() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(path("/lists/test-list/members"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.mailing_server)
        .await;

    let res = app
        .post_signup(&json!({
            "firstName": "Ana",
            "email": "ana@x.com",
            "profession": "legal"
        }))
        .await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = res.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Subscription failed. Please try again.");

    Ok(())
}

#[tokio::test]
async fn signup_missing_or_empty_fields_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;

    // No mock mounted: validation failures must never reach the provider.
    let tests = [
        (
            json!({
                "firstName": "Ana",
                "profession": "legal"
            }),
            "Missing email",
        ),
        (
            json!({
                "email": "ana@x.com",
                "profession": "legal"
            }),
            "Missing firstName",
        ),
        (
            json!({
                "firstName": "Ana",
                "email": "ana@x.com"
            }),
            "Missing profession",
        ),
        (
            json!({
                "firstName": "",
                "email": "ana@x.com",
                "profession": "legal"
            }),
            "Empty firstName",
        ),
        (json!({}), "Empty json"),
    ];

    for (json_request, params) in tests {
        let res = app.post_signup(&json_request).await?;
        assert_eq!(
            res.status(),
            StatusCode::BAD_REQUEST,
            "Wrong response: ({}), Expected: ({}); for request with: {params}",
            res.status(),
            StatusCode::BAD_REQUEST
        );

        let body: Value = res.json().await?;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "All fields are required");
    }

    assert!(app.mailing_server.received_requests().await.unwrap().is_empty());

    Ok(())
}

#[tokio::test]
async fn signup_twice_succeeds_both_times() -> Result<()> {
    let app = TestApp::spawn().await?;

    // First submission is created, the re-submission conflicts.
    Mock::given(path("/lists/test-list/members"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .up_to_n_times(1)
        .mount(&app.mailing_server)
        .await;
    Mock::given(path("/lists/test-list/members"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "title": "Member Exists",
            "status": 400,
            "detail": "ana@x.com is already a list member."
        })))
        .mount(&app.mailing_server)
        .await;

    let json_request = json!({
        "firstName": "Ana",
        "email": "ana@x.com",
        "profession": "legal"
    });

    let first: Value = app.post_signup(&json_request).await?.json().await?;
    let second: Value = app.post_signup(&json_request).await?.json().await?;

    assert_eq!(first["success"], true);
    assert_eq!(first["message"], "Successfully subscribed!");
    assert_eq!(second["success"], true);
    assert_eq!(second["message"], "Welcome back!");

    Ok(())
}
