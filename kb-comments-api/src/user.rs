#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct UserId(pub i64);

/// The authenticated user, as answered by the identity service
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: UserId,
    pub login_name: String,
    pub real_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// What an avatar needs to draw itself
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDescriptor {
    pub id: UserId,
    pub login_name: String,
    pub real_name: String,
    pub avatar: Option<String>,
}

impl UserDescriptor {
    /// Text shown when there is no avatar image: the first character of the
    /// real name, falling back to the login name
    pub fn initial(&self) -> String {
        self.real_name
            .chars()
            .chain(self.login_name.chars())
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

impl From<&CurrentUser> for UserDescriptor {
    fn from(u: &CurrentUser) -> UserDescriptor {
        UserDescriptor {
            id: u.id,
            login_name: u.login_name.clone(),
            real_name: u.real_name.clone(),
            avatar: u.image_url.clone(),
        }
    }
}
