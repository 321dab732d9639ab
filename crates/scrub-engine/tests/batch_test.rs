use std::sync::Arc;

use scrub_core::{
    Answer, AuthorType, Followup, MatchMode, Participant, Post, RedactionPolicy, Reply, ReplyKind,
    Role,
};
use scrub_engine::{PostSanitizer, build_sanitizer};
use scrub_security::recognizer::{EntityLabel, EntityRecognizer, EntitySpan, Result};
use scrub_security::{HeuristicRecognizer, RecognizerError};

const FAULT_MARKER: &str = "#crash#";
const FAIL_MARKER: &str = "#fail#";

/// Tags a fixed vocabulary as PERSON; panics or errors on marker strings
struct ScriptedRecognizer {
    persons: Vec<&'static str>,
}

impl EntityRecognizer for ScriptedRecognizer {
    fn name(&self) -> &str {
        "scripted"
    }

    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>> {
        if text.contains(FAULT_MARKER) {
            panic!("recognizer fault");
        }
        if text.contains(FAIL_MARKER) {
            return Err(RecognizerError::Failed("malformed input".to_string()));
        }

        let mut spans = Vec::new();
        for person in &self.persons {
            for (start, literal) in text.match_indices(person) {
                spans.push(EntitySpan {
                    text: literal.to_string(),
                    label: EntityLabel::Person,
                    start,
                    end: start + literal.len(),
                });
            }
        }
        Ok(spans)
    }
}

fn participants() -> Vec<Participant> {
    vec![
        Participant::new("Sarah Johnson", Role::Student),
        Participant::new("John Smith", Role::Student),
        Participant::new("Will Turner", Role::Ta),
    ]
}

fn scripted(persons: Vec<&'static str>) -> PostSanitizer {
    build_sanitizer(
        RedactionPolicy::default(),
        Arc::new(ScriptedRecognizer { persons }),
        &participants(),
    )
}

fn heuristic() -> PostSanitizer {
    build_sanitizer(
        RedactionPolicy::default(),
        Arc::new(HeuristicRecognizer::new()),
        &participants(),
    )
}

fn thread_post() -> Post {
    Post::new("kx12", "Sarah&#39;s question", "John Smith and John talked.")
        .with_folders(["hw2", "logistics"])
        .with_student_answer(Answer::new("Sarah   answered"))
        .with_followup(
            Followup::new("Thanks Sarah", AuthorType::Student).with_reply(Reply::new(
                ReplyKind::Feedback,
                "John Smith agrees",
                AuthorType::Instructor,
            )),
        )
}

#[test]
fn test_batch_length_and_ids_preserved() {
    let posts = vec![
        thread_post(),
        Post::new("a1", "", ""),
        Post::new("a2", "No names", "Nothing to see"),
    ];

    let cleaned = heuristic().clean_posts_batch(&posts);

    assert_eq!(cleaned.len(), posts.len());
    for (before, after) in posts.iter().zip(&cleaned) {
        assert_eq!(before.post_id, after.post_id);
        assert_eq!(before.folders, after.folders);
    }
}

#[test]
fn test_single_post_batch() {
    let post = thread_post();
    let cleaned = heuristic().clean_posts_batch(std::slice::from_ref(&post));
    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned[0].post_id, post.post_id);
}

#[test]
fn test_thread_fully_redacted() {
    let cleaned = scripted(vec!["John Smith", "John", "Sarah"]).clean_post(&thread_post());

    assert_eq!(cleaned.subject, "[NAME]'s question");
    assert_eq!(cleaned.content, "[NAME] and [NAME] talked.");
    assert_eq!(cleaned.student_answer.as_ref().unwrap().content, "[NAME] answered");
    assert_eq!(cleaned.followups[0].content, "Thanks [NAME]");
    assert_eq!(cleaned.followups[0].replies[0].content, "[NAME] agrees");
}

#[test]
fn test_faulted_post_kept_original() {
    let posts = vec![
        Post::new("ok-1", "Hi", "Sarah helped"),
        Post::new("bad", "Sarah", format!("Sarah {}", FAULT_MARKER)),
        Post::new("ok-2", "Hi", "John helped"),
    ];

    let report = scripted(vec!["Sarah", "John"]).sanitize_batch(&posts);

    assert_eq!(report.len(), 3);
    assert_eq!(report.posts[0].content, "[NAME] helped");
    assert_eq!(report.posts[1], posts[1]);
    assert_eq!(report.posts[2].content, "[NAME] helped");

    assert_eq!(report.degraded.len(), 1);
    assert_eq!(report.degraded[0].index, 1);
    assert_eq!(report.degraded[0].post_id, "bad");
    assert!(report.degraded[0].reason.contains("recognizer fault"));
    assert_eq!(report.redactions, 2);
    assert!(!report.is_clean());
}

#[test]
fn test_detection_failure_counted_not_degraded() {
    let posts = vec![Post::new("p", "Sarah", format!("Sarah {}", FAIL_MARKER))];

    let report = scripted(vec!["Sarah"]).sanitize_batch(&posts);

    assert!(report.degraded.is_empty());
    assert_eq!(report.detection_failures, 1);
    assert_eq!(report.posts[0].subject, "[NAME]");
    assert_eq!(report.posts[0].content, format!("Sarah {}", FAIL_MARKER));
}

#[test]
fn test_common_word_survives() {
    let cleaned = heuristic().clean_post(&Post::new("w", "Will you help me?", "I will."));
    assert_eq!(cleaned.subject, "Will you help me?");
    assert_eq!(cleaned.content, "I will.");
}

#[test]
fn test_second_pass_is_noop() {
    let sanitizer = heuristic();
    let once = sanitizer.clean_post(&thread_post());
    let (twice, stats) = sanitizer.clean_post_with_stats(&once);

    assert_eq!(twice, once);
    assert_eq!(stats.redactions, 0);
}

#[test]
fn test_whole_word_policy() {
    let policy = RedactionPolicy {
        match_mode: MatchMode::WholeWord,
        ..RedactionPolicy::default()
    };
    let sanitizer = build_sanitizer(
        policy,
        Arc::new(ScriptedRecognizer {
            persons: vec!["John"],
        }),
        &participants(),
    );

    let cleaned = sanitizer.clean_post(&Post::new("j", "", "John read Johnson's notes"));
    assert_eq!(cleaned.content, "[NAME] read Johnson's notes");
}

#[test]
fn test_sanitized_post_serializes_same_keys() {
    let raw = serde_json::json!({
        "post_id": "kx12",
        "post_number": 42,
        "type": "question",
        "subject": "Sarah question",
        "content": "ping Sarah",
        "folders": ["hw2"],
        "is_public": true,
        "followups": [],
        "course_id": "cs101"
    });
    let post: Post = serde_json::from_value(raw.clone()).unwrap();

    let cleaned = scripted(vec!["Sarah"]).clean_post(&post);
    let value = serde_json::to_value(&cleaned).unwrap();

    for key in raw.as_object().unwrap().keys() {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(value["content"], "ping [NAME]");
    assert_eq!(value["course_id"], "cs101");
}
