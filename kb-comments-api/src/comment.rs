use crate::{kb_date, PageId, Time, UserDescriptor, UserId};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub i64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,

    /// Author of the comment
    pub user_id: UserId,
    #[serde(default)]
    pub login_name: String,
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub user_image_url: Option<String>,

    pub comment: String,

    #[serde(default, with = "kb_date")]
    pub last_update_date: Option<Time>,

    /// Bumped by the store on each edit, used to detect concurrent edits
    pub object_version_number: i64,
}

impl Comment {
    pub fn author(&self) -> UserDescriptor {
        UserDescriptor {
            id: self.user_id,
            login_name: self.login_name.clone(),
            real_name: self.real_name.clone(),
            avatar: self.user_image_url.clone(),
        }
    }

    pub fn is_authored_by(&self, user: UserId) -> bool {
        self.user_id == user
    }
}

/// Body of an edit request
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditComment {
    pub page_id: PageId,
    pub comment: String,
    pub object_version_number: i64,
}

/// Body of a creation request
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub page_id: PageId,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_knowledge_base_payload() {
        let c: Comment = serde_json::from_str(
            r#"{
                "id": 7,
                "userId": 3,
                "loginName": "jdoe",
                "realName": "Jane Doe",
                "userImageUrl": null,
                "comment": "draft plan",
                "lastUpdateDate": "2019-05-06 10:11:12",
                "objectVersionNumber": 2
            }"#,
        )
        .unwrap();
        assert_eq!(c.id, CommentId(7));
        assert_eq!(c.user_id, UserId(3));
        assert_eq!(c.object_version_number, 2);
        assert_eq!(
            c.last_update_date,
            Some(chrono::Utc.with_ymd_and_hms(2019, 5, 6, 10, 11, 12).unwrap())
        );
        assert_eq!(c.author().real_name, "Jane Doe");
        assert!(c.is_authored_by(UserId(3)));
        assert!(!c.is_authored_by(UserId(9)));
    }

    #[test]
    fn missing_optional_fields() {
        let c: Comment = serde_json::from_str(
            r#"{"id": 1, "userId": 2, "comment": "", "objectVersionNumber": 1}"#,
        )
        .unwrap();
        assert_eq!(c.last_update_date, None);
        assert_eq!(c.login_name, "");
        assert_eq!(c.user_image_url, None);
    }

    #[test]
    fn edit_request_is_camel_case() {
        let req = EditComment {
            page_id: PageId(12),
            comment: String::from("final plan"),
            object_version_number: 2,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "pageId": 12,
                "comment": "final plan",
                "objectVersionNumber": 2,
            })
        );
    }
}
