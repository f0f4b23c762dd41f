use std::sync::Arc;
use std::thread;

use anyhow::Result;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::Request;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use tiksign_core::{Params, SignRequest};
use tiksign_tiktok::{Config, ConfigCredentialProvider, ShopSigner};

use super::{init, params, BASE_URL};

fn sign_with(body: &'static str, method: &str, content_type: &str) -> Result<String> {
    let signer = ShopSigner::new("s3cr3t");
    let req = Request::builder()
        .method(method)
        .uri(format!("{BASE_URL}/api/orders/create"))
        .header(CONTENT_TYPE, content_type)
        .body(Bytes::from_static(body.as_bytes()))?;

    let mut p = params(json!({"shop_id": "abc"}));
    let _ = signer.sign(req, &mut p);
    Ok(p["sign"].as_str().expect("sign must be a string").to_string())
}

#[test_case("GET", "application/json", false; "get")]
#[test_case("POST", "application/json", true; "post json")]
#[test_case("POST", "multipart/form-data; boundary=----abc", false; "post multipart")]
#[test_case("PUT", "MULTIPART/FORM-DATA", false; "multipart upper case")]
#[test_case("get", "application/json", true; "method match is case sensitive")]
fn test_body_gating(method: &str, content_type: &str, body_counts: bool) {
    init();

    let a = sign_with(r#"{"order_id":"1"}"#, method, content_type).expect("sign must succeed");
    let b = sign_with(r#"{"order_id":"2"}"#, method, content_type).expect("sign must succeed");

    assert_eq!(a != b, body_counts);
}

#[test]
fn test_end_to_end() -> Result<()> {
    init();

    let signer = ShopSigner::new("s3cr3t");
    let req = Request::get(format!(
        "{BASE_URL}/api/products/search?keyword=shoe&page=1"
    ))
    .body(String::new())?;
    let mut p = params(json!({"keyword": "shoe", "page": 1}));

    let req = signer.sign(req, &mut p);

    assert_eq!(
        p,
        params(json!({
            "keyword": "shoe",
            "page": 1,
            "sign": "b4fc23315e1836bc2a3d8557d5de9c8f8e42b002fb2210421465c688f7b4cba8",
        }))
    );
    assert_eq!(req.uri().query(), Some("keyword=shoe&page=1"));
    Ok(())
}

#[test]
fn test_sign_through_trait_object() -> Result<()> {
    init();

    let signer: Box<dyn SignRequest> = Box::new(ShopSigner::new("s3cr3t"));
    let (mut parts, body) = Request::get(format!("{BASE_URL}/api/products/search"))
        .body(Vec::<u8>::new())?
        .into_parts();
    let mut p = params(json!({"page": 1, "keyword": "shoe", "access_token": "tok"}));

    signer.sign_request(&mut parts, &body, &mut p)?;

    assert_eq!(
        p["sign"],
        json!("b4fc23315e1836bc2a3d8557d5de9c8f8e42b002fb2210421465c688f7b4cba8")
    );
    assert_eq!(p["access_token"], json!("tok"));
    Ok(())
}

#[test]
fn test_signer_from_config() -> Result<()> {
    use tiksign_core::{Context, ProvideCredential};

    let config = Arc::new(Config::new().with_app_secret("s3cr3t"));
    let credential = ConfigCredentialProvider::new(config)
        .provide_credential(&Context::new())?
        .expect("credential must be loaded");
    let signer = ShopSigner::from_credential(credential);

    let mut p = params(json!({"keyword": "shoe", "page": 1}));
    let _ = signer.sign(
        Request::get(format!("{BASE_URL}/api/products/search")).body(Vec::<u8>::new())?,
        &mut p,
    );

    assert_eq!(
        p["sign"],
        json!("b4fc23315e1836bc2a3d8557d5de9c8f8e42b002fb2210421465c688f7b4cba8")
    );
    Ok(())
}

#[test]
fn test_concurrent_signing() {
    init();

    let signer = Arc::new(ShopSigner::new("s3cr3t"));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let signer = signer.clone();
            thread::spawn(move || {
                let mut p: Params = params(json!({"keyword": "shoe", "page": 1}));
                let req = Request::get("/api/products/search")
                    .body(Vec::<u8>::new())
                    .expect("request must be valid");
                let _ = signer.sign(req, &mut p);
                p["sign"].clone()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().expect("thread must not panic"),
            json!("b4fc23315e1836bc2a3d8557d5de9c8f8e42b002fb2210421465c688f7b4cba8")
        );
    }
}
