//! Session token lookup. Signing in happens elsewhere; this only reads the
//! token the login page stored.

pub const TOKEN_KEY: &str = "accessToken";

pub fn access_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?.filter(|t| !t.is_empty())
}
