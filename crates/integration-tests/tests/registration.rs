//! Integration tests for the registration wizard and seller onboarding.

use axum::http::StatusCode;
use workforge_integration_tests::{MultipartForm, TestClient, TestResponse};

fn step_one(role: &str, email: &str) -> Vec<(&'static str, String)> {
    vec![
        ("role", role.to_string()),
        ("first_name", "Asha".to_string()),
        ("last_name", "Rao".to_string()),
        ("email", email.to_string()),
        ("password", "hunter22".to_string()),
        ("country", "India".to_string()),
    ]
}

async fn submit_step_one(client: &mut TestClient, role: &str, email: &str) -> TestResponse {
    let fields = step_one(role, email);
    let pairs: Vec<(&str, &str)> = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
    client.post_form("/register", &pairs).await
}

// ============================================================================
// Step 1
// ============================================================================

#[tokio::test]
async fn test_register_page_renders() {
    let mut client = TestClient::new();
    let resp = client.get("/register").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Create your account"));
    assert!(resp.body.contains("hiring for a project"));
    assert!(resp.body.contains("By continuing you agree to our Terms and Privacy Policy."));
}

#[tokio::test]
async fn test_buyer_registration_goes_to_explore() {
    let mut client = TestClient::new();
    let resp = submit_step_one(&mut client, "buyer", "buyer@example.com").await;
    assert!(resp.is_redirect_to("/explore"), "got {resp:?}");

    let explore = client.get("/explore").await;
    assert_eq!(explore.status, StatusCode::OK);
    assert!(explore.body.contains("Explore Freelancers"));
    assert!(explore.body.contains("Aarav Patil"));
    // Buyer navigation
    assert!(explore.body.contains(">Messages</a>"));
    assert!(!explore.body.contains("My Business"));
}

#[tokio::test]
async fn test_incomplete_step_one_is_rejected() {
    let mut client = TestClient::new();
    let resp = client
        .post_form("/register", &[("role", "seller"), ("first_name", "Asha")])
        .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("Please fill in"));
    assert!(resp.body.contains("Email Address"));

    // Nothing was stored: still logged out
    let home = client.get("/").await;
    assert!(!home.body.contains("Logout"));
}

#[tokio::test]
async fn test_onboarding_requires_seller_role() {
    let mut client = TestClient::new();
    let resp = client.get("/register/onboarding").await;
    assert!(resp.is_redirect_to("/register"));

    submit_step_one(&mut client, "buyer", "buyer@example.com").await;
    let resp = client.get("/register/onboarding").await;
    assert!(resp.is_redirect_to("/register"));
}

// ============================================================================
// Seller onboarding
// ============================================================================

#[tokio::test]
async fn test_seller_registration_and_onboarding() {
    let mut client = TestClient::new();
    let resp = submit_step_one(&mut client, "seller", "asha@example.com").await;
    assert!(
        resp.is_redirect_to("/register/onboarding?email=asha%40example.com"),
        "got {resp:?}"
    );

    let page = client.get("/register/onboarding?email=asha%40example.com").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Personal Details"));
    assert!(page.body.contains("value=\"asha@example.com\""));
    assert!(page.body.contains("Finish Onboarding"));

    let form = MultipartForm::new()
        .text("full_name", "Asha Rao")
        .text("email", "asha@example.com")
        .text("country", "India")
        .text("occupations", "Designer")
        .text("occupations", "Other")
        .text("other_occupation", "Illustrator")
        .text("experience_years", "4")
        .text("languages", "English")
        .text("skills", "Figma, Branding")
        .text("cert_1_name", "UX Cert")
        .file("seller_docs", "id.pdf", "application/pdf", b"%PDF");
    let resp = client.post_multipart("/register/onboarding", form).await;
    assert!(resp.is_redirect_to("/gigs"), "got {resp:?}");

    // Seller navigation and gig editor open
    let gigs = client.get("/gigs").await;
    assert_eq!(gigs.status, StatusCode::OK);
    assert!(gigs.body.contains("My Business"));
    assert!(gigs.body.contains("No gigs yet. Create your first one above."));

    // The seller is listed first in the directory
    let explore = client.get("/explore").await;
    let me = explore.body.find("Asha Rao").expect("seller listed");
    let sample = explore.body.find("Aarav Patil").expect("samples listed");
    assert!(me < sample);
    assert!(explore.body.contains("Designer"));
}

#[tokio::test]
async fn test_onboarding_requires_name_and_email() {
    let mut client = TestClient::new();
    submit_step_one(&mut client, "seller", "asha@example.com").await;

    let form = MultipartForm::new().text("phone", "12345");
    let resp = client.post_multipart("/register/onboarding", form).await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("Full Name"));
    assert!(resp.body.contains("value=\"12345\""));
}

#[tokio::test]
async fn test_onboarding_post_without_seller_role_redirects() {
    let mut client = TestClient::new();
    let form = MultipartForm::new()
        .text("full_name", "Asha Rao")
        .text("email", "asha@example.com");
    let resp = client.post_multipart("/register/onboarding", form).await;
    assert!(resp.is_redirect_to("/register"));
}
