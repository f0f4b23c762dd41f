// Env values used in TikTok Shop services.
pub const TIKTOK_APP_KEY: &str = "TIKTOK_APP_KEY";
pub const TIKTOK_APP_SECRET: &str = "TIKTOK_APP_SECRET";

// Shop API family.
pub const SIGN_PARAM: &str = "sign";
/// Please attention: these keys are case sensitive.
pub const SHOP_EXCLUDED_KEYS: &[&str] = &[SIGN_PARAM, "access_token", "x-tts-access-token"];

// Global API family.
pub const GLOBAL_PATH_PREFIX: &str = "/global/";
pub const X_TT_SIGNATURE: &str = "x-tt-signature";
