//! Admin account and session token tests against a real embedded database.

use tempfile::TempDir;

use qr_dine_server::JwtService;
use qr_dine_server::auth::JwtConfig;
use qr_dine_server::db::DbService;
use qr_dine_server::db::models::Admin;
use qr_dine_server::db::repository::{AdminRepository, RepoError};

fn jwt_service() -> JwtService {
    JwtService::with_config(JwtConfig {
        secret: "integration-test-secret-with-enough-length".to_string(),
        expiration_minutes: 60,
        issuer: "qr-dine-server".to_string(),
    })
}

#[tokio::test]
async fn admin_registration_is_unique_by_email() {
    let tmp = TempDir::new().expect("temp dir");
    let db = DbService::new(tmp.path()).await.expect("open database").db;
    let admins = AdminRepository::new(db);

    let hash = Admin::hash_password("correct-horse").expect("hash");
    let admin = admins
        .create("Owner".to_string(), "owner@example.com".to_string(), hash.clone())
        .await
        .expect("create admin");
    assert_eq!(admin.email, "owner@example.com");

    let err = admins
        .create("Owner Again".to_string(), "owner@example.com".to_string(), hash)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(msg) if msg == "Admin already exists"));
}

#[tokio::test]
async fn stored_admin_verifies_its_password_and_token() {
    let tmp = TempDir::new().expect("temp dir");
    let db = DbService::new(tmp.path()).await.expect("open database").db;
    let admins = AdminRepository::new(db);

    let hash = Admin::hash_password("correct-horse").expect("hash");
    let created = admins
        .create("Owner".to_string(), "owner@example.com".to_string(), hash)
        .await
        .expect("create admin");

    let found = admins
        .find_by_email("owner@example.com")
        .await
        .expect("lookup")
        .expect("admin exists");
    assert!(found.verify_password("correct-horse").expect("verify"));
    assert!(!found.verify_password("wrong").expect("verify"));

    // The token subject resolves back to the stored record
    let service = jwt_service();
    let id = created.id.expect("admin id").to_string();
    let token = service
        .generate_token(&id, &created.email)
        .expect("generate token");
    let claims = service.validate_token(&token).expect("validate token");

    let resolved = admins
        .find_by_id(&claims.sub)
        .await
        .expect("lookup by claims")
        .expect("admin resolves");
    assert_eq!(resolved.email, "owner@example.com");
}
