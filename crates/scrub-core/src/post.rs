//! Forum post domain model
//!
//! A `Post` owns its answers and its followup thread. Records are read and
//! written as one JSON object per line, so every field mirrors the key the
//! scraper writes. Keys this model does not know about survive in `extra`.

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// A question or note together with its answers and discussion thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: String,
    #[serde(default)]
    pub post_number: Option<u64>,
    #[serde(rename = "type", default)]
    pub post_type: Option<String>,
    #[serde(default = "default_public")]
    pub is_public: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub subject: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub content: String,
    #[serde(default)]
    pub folders: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub num_favorites: u64,
    #[serde(default)]
    pub unique_views: u64,
    #[serde(default)]
    pub student_answer: Option<Answer>,
    #[serde(default)]
    pub instructor_answer: Option<Answer>,
    #[serde(default)]
    pub followups: Vec<Followup>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub scraped_at: Option<OffsetDateTime>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Post {
    pub fn new(post_id: impl Into<String>, subject: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
            post_number: None,
            post_type: None,
            is_public: true,
            created: None,
            updated: None,
            subject: subject.into(),
            content: content.into(),
            folders: Vec::new(),
            tags: Vec::new(),
            num_favorites: 0,
            unique_views: 0,
            student_answer: None,
            instructor_answer: None,
            followups: Vec::new(),
            scraped_at: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_folders<I, S>(mut self, folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.folders = folders.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_student_answer(mut self, answer: Answer) -> Self {
        self.student_answer = Some(answer);
        self
    }

    pub fn with_instructor_answer(mut self, answer: Answer) -> Self {
        self.instructor_answer = Some(answer);
        self
    }

    pub fn with_followup(mut self, followup: Followup) -> Self {
        self.followups.push(followup);
        self
    }

    /// Case-insensitive folder membership
    pub fn in_folder(&self, folder: &str) -> bool {
        let wanted = folder.to_lowercase();
        self.folders.iter().any(|f| f.to_lowercase() == wanted)
    }
}

/// A student or instructor answer attached to a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub content: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endorsed_by: Option<Vec<String>>,
}

impl Answer {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            created: None,
            updated: None,
            endorsed_by: None,
        }
    }
}

/// A followup discussion on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Followup {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub content: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    #[serde(default)]
    pub author_type: AuthorType,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

impl Followup {
    pub fn new(content: impl Into<String>, author_type: AuthorType) -> Self {
        Self {
            id: None,
            content: content.into(),
            created: None,
            updated: None,
            author_type,
            replies: Vec::new(),
        }
    }

    pub fn with_reply(mut self, reply: Reply) -> Self {
        self.replies.push(reply);
        self
    }
}

/// A reply inside a followup; nested followups carry their own replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: ReplyKind,
    #[serde(default, deserialize_with = "nullable_string")]
    pub content: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    #[serde(default)]
    pub author_type: AuthorType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<Reply>,
}

impl Reply {
    pub fn new(kind: ReplyKind, content: impl Into<String>, author_type: AuthorType) -> Self {
        Self {
            id: None,
            kind,
            content: content.into(),
            created: None,
            updated: None,
            author_type,
            replies: Vec::new(),
        }
    }

    pub fn with_reply(mut self, reply: Reply) -> Self {
        self.replies.push(reply);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorType {
    #[default]
    Student,
    Instructor,
}

impl AuthorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorType::Student => "student",
            AuthorType::Instructor => "instructor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    #[default]
    Feedback,
    Followup,
}

fn default_public() -> bool {
    true
}

/// Scraped text fields are sometimes `null`; treat them as empty
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const SCRAPED: &str = r#"{
        "post_id": "kx1abc",
        "post_number": 42,
        "type": "question",
        "is_public": true,
        "created": "2024-02-01T17:30:00Z",
        "updated": "2024-02-02T09:00:00Z",
        "subject": "Lab 7 question",
        "content": "I&#39;m stuck",
        "folders": ["lab7", "hw"],
        "tags": ["student"],
        "num_favorites": 1,
        "unique_views": 30,
        "student_answer": null,
        "instructor_answer": {
            "id": "a1",
            "content": "Check the handout",
            "created": "2024-02-01T18:00:00Z",
            "updated": null,
            "endorsed_by": ["u9"]
        },
        "followups": [
            {
                "id": "f1",
                "content": null,
                "created": null,
                "updated": null,
                "author_type": "student",
                "replies": [
                    {"id": "r1", "type": "feedback", "content": "thanks", "created": null,
                     "updated": null, "author_type": "instructor"}
                ]
            }
        ],
        "scraped_at": "2024-03-01T00:00:00Z",
        "course": "cs101"
    }"#;

    #[test]
    fn test_parse_scraped_record() {
        let post: Post = serde_json::from_str(SCRAPED).unwrap();

        assert_eq!(post.post_id, "kx1abc");
        assert_eq!(post.post_number, Some(42));
        assert_eq!(post.post_type.as_deref(), Some("question"));
        assert_eq!(post.created, Some(datetime!(2024-02-01 17:30:00 UTC)));
        assert!(post.student_answer.is_none());

        let answer = post.instructor_answer.as_ref().unwrap();
        assert_eq!(answer.endorsed_by, Some(vec!["u9".to_string()]));

        let followup = &post.followups[0];
        assert_eq!(followup.content, "");
        assert_eq!(followup.replies[0].author_type, AuthorType::Instructor);
        assert_eq!(followup.replies[0].kind, ReplyKind::Feedback);

        assert_eq!(post.extra.get("course"), Some(&serde_json::json!("cs101")));
    }

    #[test]
    fn test_serialization_keeps_field_names() {
        let post: Post = serde_json::from_str(SCRAPED).unwrap();
        let value = serde_json::to_value(&post).unwrap();

        assert_eq!(value["type"], "question");
        assert_eq!(value["course"], "cs101");
        assert!(value["student_answer"].is_null());
        assert_eq!(value["instructor_answer"]["endorsed_by"][0], "u9");
        assert!(value["followups"][0]["replies"][0].get("replies").is_none());
    }

    #[test]
    fn test_minimal_record_defaults() {
        let post: Post = serde_json::from_str(r#"{"post_id": "p1"}"#).unwrap();
        assert!(post.is_public);
        assert!(post.subject.is_empty());
        assert!(post.followups.is_empty());
        assert!(post.extra.is_empty());
    }

    #[test]
    fn test_nested_reply_parsing() {
        let json = r#"{"type": "followup", "content": "see below", "author_type": "student",
            "replies": [{"type": "feedback", "content": "deeper"}]}"#;
        let reply: Reply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.kind, ReplyKind::Followup);
        assert_eq!(reply.replies[0].content, "deeper");
    }

    #[test]
    fn test_in_folder_case_insensitive() {
        let post = Post::new("p1", "s", "c").with_folders(["Lab7", "hw"]);
        assert!(post.in_folder("lab7"));
        assert!(post.in_folder("HW"));
        assert!(!post.in_folder("lab8"));
    }
}
