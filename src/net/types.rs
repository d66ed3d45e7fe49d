#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// The signed-in principal as reported by the identity service.
///
/// The shape belongs to the service; the client only cares whether one was
/// returned, so the record is kept as raw JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct UserIdentity(pub serde_json::Value);

/// Body of `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IdentityResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<UserIdentity>,
}

impl IdentityResponse {
    /// The identity, only when the service confirmed an active session.
    pub fn into_identity(self) -> Option<UserIdentity> {
        if self.success { self.data } else { None }
    }
}
