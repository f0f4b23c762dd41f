mod global;
mod shop;

use serde_json::Value;
use tiksign_core::Params;

pub const BASE_URL: &str = "https://open-api.tiktokglobalshop.com";

/// Initialize test logging.
pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build params from a json object.
pub fn params(v: Value) -> Params {
    serde_json::from_value(v).expect("params must be a json object")
}
