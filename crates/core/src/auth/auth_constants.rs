/// Secure-storage key of the access token
pub const ACCESS_TOKEN_KEY: &str = "auth_access_token";

/// Secure-storage key of the refresh token
pub const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";

/// Plain-storage key of the cached user record
pub const USER_KEY: &str = "auth_user";
