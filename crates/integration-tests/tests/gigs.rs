//! Integration tests for the seller gig editor and gig pages.

use axum::http::StatusCode;
use workforge_integration_tests::{MultipartForm, TestClient};

fn logo_gig() -> MultipartForm {
    MultipartForm::new()
        .text("title", "Crisp Logo Design")
        .text("category", "Design")
        .text("subcategory", "Logo Design")
        .text("description_html", "<p>Minimal <strong>logos</strong></p>")
        .text("skills", "Illustrator, Branding")
        .text("requirements", "Brand name\nPreferred colours")
        .text("basic_price", "50")
        .text("basic_delivery_days", "3")
        .text("basic_revisions", "2")
        .text("basic_extra_mockup", "on")
        .text("basic_extra_mockup_price", "15")
        .text("premium_price", "250")
        .file("thumbnail", "logo.png", "image/png", &[137, 80, 78, 71])
}

/// Create a gig and return its ID from the redirect.
async fn create_gig(client: &mut TestClient, form: MultipartForm) -> String {
    let resp = client.post_multipart("/gigs", form).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER, "got {resp:?}");
    let location = resp.location.expect("redirect location");
    location
        .strip_prefix("/gigs?edit=")
        .expect("redirect to editor")
        .to_string()
}

// ============================================================================
// Access
// ============================================================================

#[tokio::test]
async fn test_gig_editor_is_seller_only() {
    let mut client = TestClient::new();
    let resp = client.get("/gigs").await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);
    assert!(resp.body.contains("Seller only"));

    client.register_buyer().await;
    let resp = client.get("/gigs").await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);
    assert!(resp.body.contains("Please register as a Freelancer or switch account."));

    let resp = client.post_multipart("/gigs", logo_gig()).await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);
}

// ============================================================================
// Create, update, delete
// ============================================================================

#[tokio::test]
async fn test_create_gig_and_view_details() {
    let mut client = TestClient::new();
    client.register_seller("Asha").await;

    let id = create_gig(&mut client, logo_gig()).await;
    assert!(id.starts_with("g_"));

    let page = client.get(&format!("/gig/{id}")).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Crisp Logo Design"));
    assert!(page.body.contains("Design • Logo Design"));
    // Description is rendered as HTML
    assert!(page.body.contains("<p>Minimal <strong>logos</strong></p>"));
    assert!(page.body.contains("$50"));
    assert!(page.body.contains("3 days • 2 revisions"));
    assert!(page.body.contains("3D Mockup: $15"));
    assert!(page.body.contains("$250"));
    assert!(page.body.contains("Preferred colours"));
    assert!(page.body.contains("data:image/png;base64,"));

    let editor = client.get(&format!("/gigs?edit={id}")).await;
    assert!(editor.body.contains("Update Gig"));
    assert!(editor.body.contains("value=\"Crisp Logo Design\""));
    assert!(editor.body.contains("My Gigs"));
}

#[tokio::test]
async fn test_update_keeps_id_and_seller() {
    let mut client = TestClient::new();
    client.register_seller("Asha").await;
    let id = create_gig(&mut client, logo_gig()).await;

    let update = MultipartForm::new()
        .text("editing_id", &id)
        .text("title", "Premium Logo Design")
        .text("category", "Design")
        .text("subcategory", "Other")
        .text("other_subcategory", "Mascots")
        .text("description_html", "<p>Updated</p>");
    let updated_id = create_gig(&mut client, update).await;
    assert_eq!(updated_id, id);

    let page = client.get(&format!("/gig/{id}")).await;
    assert!(page.body.contains("Premium Logo Design"));
    assert!(page.body.contains("Design • Mascots"));
    // Thumbnail survives an update without a new upload
    assert!(page.body.contains("data:image/png;base64,"));

    let editor = client.get("/gigs").await;
    assert_eq!(editor.body.matches("Premium Logo Design").count(), 1);
    assert!(!editor.body.contains("Crisp Logo Design"));
}

#[tokio::test]
async fn test_missing_title_is_rejected() {
    let mut client = TestClient::new();
    client.register_seller("Asha").await;

    let form = MultipartForm::new().text("title", "   ").text("basic_price", "10");
    let resp = client.post_multipart("/gigs", form).await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("Please add a gig title."));

    let editor = client.get("/gigs").await;
    assert!(editor.body.contains("No gigs yet. Create your first one above."));
}

#[tokio::test]
async fn test_delete_gig() {
    let mut client = TestClient::new();
    client.register_seller("Asha").await;
    let id = create_gig(&mut client, logo_gig()).await;

    let resp = client.post_form(&format!("/gigs/{id}/delete"), &[]).await;
    assert!(resp.is_redirect_to("/gigs"));

    let page = client.get(&format!("/gig/{id}")).await;
    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert!(page.body.contains("Gig not found."));
}

// ============================================================================
// Storage quota
// ============================================================================

fn gig_with_gallery(title: &str, file_bytes: usize) -> MultipartForm {
    let media = vec![0_u8; file_bytes];
    MultipartForm::new()
        .text("title", title)
        .text("basic_price", "40")
        .file("gallery", "one.png", "image/png", &media)
        .file("gallery", "two.png", "image/png", &media)
}

#[tokio::test]
async fn test_storage_quota_rejects_oversized_gigs() {
    let mut client = TestClient::new();
    client.register_seller("Asha").await;

    // Two 2.5 MiB files inline to about 6.7 MiB of data URLs.
    let first = gig_with_gallery("Gallery One", 5 * 512 * 1024);
    create_gig(&mut client, first).await;

    let second = gig_with_gallery("Gallery Two", 5 * 512 * 1024);
    let resp = client.post_multipart("/gigs", second).await;
    assert_eq!(resp.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(resp.body.contains("Storage quota exceeded"));

    let editor = client.get("/gigs").await;
    assert!(editor.body.contains("Gallery One"));
    assert!(!editor.body.contains("Gallery Two"));

    // Small gigs still fit.
    create_gig(&mut client, logo_gig()).await;
}

// ============================================================================
// Profiles
// ============================================================================

#[tokio::test]
async fn test_gig_appears_on_seller_profile() {
    let mut client = TestClient::new();
    client.register_seller("Asha").await;
    let id = create_gig(&mut client, logo_gig()).await;

    let page = client.get(&format!("/gig/{id}")).await;
    let profile_path = page
        .body
        .split("href=\"")
        .find(|s| s.starts_with("/freelancer/"))
        .and_then(|s| s.split('"').next())
        .expect("seller link");

    let profile = client.get(profile_path).await;
    assert_eq!(profile.status, StatusCode::OK);
    assert!(profile.body.contains("Asha"));
    assert!(profile.body.contains("Crisp Logo Design"));
    assert!(profile.body.contains("Connect to Freelancer"));
}
