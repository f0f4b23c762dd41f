use anyhow::Result;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::Request;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use tiksign_core::{Context, Params, ProvideCredential, StaticEnv};
use tiksign_tiktok::{DefaultCredentialProvider, GlobalSigner};

use super::{init, params, BASE_URL};

fn signature(req: &Request<Bytes>) -> &str {
    req.headers()
        .get("x-tt-signature")
        .expect("signature header must be set")
        .to_str()
        .expect("signature must be ascii")
}

fn sign_with(body: &'static str, method: &str, content_type: &str) -> Result<String> {
    let signer = GlobalSigner::new("x");
    let req = Request::builder()
        .method(method)
        .uri(format!("{BASE_URL}/global/orders/list"))
        .header(CONTENT_TYPE, content_type)
        .body(Bytes::from_static(body.as_bytes()))?;

    let req = signer.sign(req, &Params::new(), 1700000000)?;
    Ok(signature(&req).to_string())
}

#[test_case("GET", "application/json", false; "get")]
#[test_case("POST", "application/json", true; "post json")]
#[test_case("POST", "multipart/form-data; boundary=----abc", false; "post multipart")]
fn test_body_gating(method: &str, content_type: &str, body_counts: bool) {
    init();

    let a = sign_with(r#"{"status":"paid"}"#, method, content_type).expect("sign must succeed");
    let b = sign_with(r#"{"status":"unpaid"}"#, method, content_type).expect("sign must succeed");

    assert_eq!(a != b, body_counts);
}

#[test]
fn test_end_to_end() -> Result<()> {
    init();

    let signer = GlobalSigner::new("x");
    let query = Params::new();
    let req = Request::get(format!("{BASE_URL}/global/orders/list")).body(Bytes::new())?;

    let req = signer.sign(req, &query, 1700000000)?;

    assert_eq!(
        signature(&req),
        "7acec63079b89a881e58844760ed9378a8b950c0bd68bd45a8af7c3e5eb3f07a"
    );
    assert!(query.is_empty());
    Ok(())
}

#[test]
fn test_query_is_not_mutated() -> Result<()> {
    init();

    let signer = GlobalSigner::new("x");
    let query = params(json!({"page_size": 20, "ids": [1, 2], "sign": "kept"}));
    let before = query.clone();

    let _ = signer.sign(
        Request::get(format!("{BASE_URL}/global/orders/list")).body(Bytes::new())?,
        &query,
        1700000000,
    )?;

    assert_eq!(query, before);
    Ok(())
}

#[test]
fn test_skips_collections() -> Result<()> {
    init();

    let signer = GlobalSigner::new("x");
    let req = || Request::get(format!("{BASE_URL}/orders/list")).body(Bytes::new());

    let without = signer.sign(req()?, &params(json!({"page_size": 20})), 1700000000)?;
    let with = signer.sign(
        req()?,
        &params(json!({"page_size": 20, "ids": ["1", "2"]})),
        1700000000,
    )?;

    assert_eq!(signature(&without), signature(&with));
    Ok(())
}

#[test]
fn test_signer_from_env() -> Result<()> {
    init();

    let ctx = Context::new().with_env(StaticEnv {
        envs: [("TIKTOK_APP_SECRET".to_string(), "x".to_string())].into(),
    });
    let credential = DefaultCredentialProvider::new()
        .provide_credential(&ctx)?
        .expect("credential must be loaded from env");
    let signer = GlobalSigner::from_credential(credential);

    let req = signer.sign(
        Request::get(format!("{BASE_URL}/global/orders/list")).body(Bytes::new())?,
        &Params::new(),
        1700000000,
    )?;

    assert_eq!(
        signature(&req),
        "7acec63079b89a881e58844760ed9378a8b950c0bd68bd45a8af7c3e5eb3f07a"
    );
    Ok(())
}
