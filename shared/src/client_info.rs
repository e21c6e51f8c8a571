use serde::{Serialize, Deserialize};

/// Coarse per-request identity used only to key the backend flood limiter.
/// Distinct from the persisted voter id, which travels in the vote body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    pub fingerprint: String,
    pub ip: String,
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fingerprint(ip: &str, user_agent: Option<&str>) -> String {
    use base64::engine::general_purpose::URL_SAFE;
    use base64::Engine;
    use sha2::{Sha256, Digest};

    let mut hasher = Sha256::new();
    hasher.update(ip.as_bytes());
    if let Some(ua) = user_agent {
        hasher.update(ua.as_bytes());
    }
    URL_SAFE.encode(hasher.finalize())
}

#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::request::{FromRequest, Outcome};
    use rocket::Request;

    #[rocket::async_trait]
    impl<'r> FromRequest<'r> for ClientInfo {
        type Error = ();

        async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
            let headers = req.headers();
            let ip = headers.get_one("X-Real-IP")
                .or_else(|| headers.get_one("X-Forwarded-For"))
                .unwrap_or("0.0.0.0")
                .to_string();

            let user_agent = headers.get_one("User-Agent");
            let fingerprint = super::fingerprint(&ip, user_agent);

            Outcome::Success(ClientInfo { fingerprint, ip })
        }
    }
}
