//! Text leaves of a post thread
//!
//! A post is a rooted tree over four node kinds. `TextTree` walks it in
//! document order (subject, content, student answer, instructor answer,
//! followups and their replies depth-first) and hands every text-bearing
//! field to a transform. `map_text` builds a new tree and leaves the
//! original untouched; structural fields are carried over as-is.

use crate::post::{Answer, Followup, Post, Reply};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Post,
    Answer,
    Followup,
    Reply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Subject,
    Content,
}

/// One text field handed to a visitor
#[derive(Debug, Clone, Copy)]
pub struct TextLeaf<'a> {
    pub node: NodeKind,
    pub field: FieldKind,
    /// 0 for the post itself, 1 for answers and followups, +1 per reply level
    pub depth: usize,
    pub text: &'a str,
}

pub trait TextTree: Sized {
    const KIND: NodeKind;

    fn map_text_at<F>(&self, depth: usize, f: &mut F) -> Self
    where
        F: FnMut(TextLeaf<'_>) -> String;

    fn for_each_text_at<F>(&self, depth: usize, f: &mut F)
    where
        F: FnMut(TextLeaf<'_>);

    /// Rebuild this node with every text leaf replaced by `f(leaf)`
    fn map_text<F>(&self, f: &mut F) -> Self
    where
        F: FnMut(TextLeaf<'_>) -> String,
    {
        self.map_text_at(0, f)
    }

    fn for_each_text<F>(&self, f: &mut F)
    where
        F: FnMut(TextLeaf<'_>),
    {
        self.for_each_text_at(0, f)
    }
}

fn leaf(node: NodeKind, field: FieldKind, depth: usize, text: &str) -> TextLeaf<'_> {
    TextLeaf {
        node,
        field,
        depth,
        text,
    }
}

impl TextTree for Post {
    const KIND: NodeKind = NodeKind::Post;

    fn map_text_at<F>(&self, depth: usize, f: &mut F) -> Self
    where
        F: FnMut(TextLeaf<'_>) -> String,
    {
        let mut out = self.clone();
        out.subject = f(leaf(Self::KIND, FieldKind::Subject, depth, &self.subject));
        out.content = f(leaf(Self::KIND, FieldKind::Content, depth, &self.content));
        out.student_answer = self
            .student_answer
            .as_ref()
            .map(|answer| answer.map_text_at(depth + 1, f));
        out.instructor_answer = self
            .instructor_answer
            .as_ref()
            .map(|answer| answer.map_text_at(depth + 1, f));
        out.followups = self
            .followups
            .iter()
            .map(|followup| followup.map_text_at(depth + 1, f))
            .collect();
        out
    }

    fn for_each_text_at<F>(&self, depth: usize, f: &mut F)
    where
        F: FnMut(TextLeaf<'_>),
    {
        f(leaf(Self::KIND, FieldKind::Subject, depth, &self.subject));
        f(leaf(Self::KIND, FieldKind::Content, depth, &self.content));
        if let Some(answer) = &self.student_answer {
            answer.for_each_text_at(depth + 1, f);
        }
        if let Some(answer) = &self.instructor_answer {
            answer.for_each_text_at(depth + 1, f);
        }
        for followup in &self.followups {
            followup.for_each_text_at(depth + 1, f);
        }
    }
}

impl TextTree for Answer {
    const KIND: NodeKind = NodeKind::Answer;

    fn map_text_at<F>(&self, depth: usize, f: &mut F) -> Self
    where
        F: FnMut(TextLeaf<'_>) -> String,
    {
        Answer {
            content: f(leaf(Self::KIND, FieldKind::Content, depth, &self.content)),
            ..self.clone()
        }
    }

    fn for_each_text_at<F>(&self, depth: usize, f: &mut F)
    where
        F: FnMut(TextLeaf<'_>),
    {
        f(leaf(Self::KIND, FieldKind::Content, depth, &self.content));
    }
}

impl TextTree for Followup {
    const KIND: NodeKind = NodeKind::Followup;

    fn map_text_at<F>(&self, depth: usize, f: &mut F) -> Self
    where
        F: FnMut(TextLeaf<'_>) -> String,
    {
        Followup {
            id: self.id.clone(),
            content: f(leaf(Self::KIND, FieldKind::Content, depth, &self.content)),
            created: self.created,
            updated: self.updated,
            author_type: self.author_type,
            replies: self
                .replies
                .iter()
                .map(|reply| reply.map_text_at(depth + 1, f))
                .collect(),
        }
    }

    fn for_each_text_at<F>(&self, depth: usize, f: &mut F)
    where
        F: FnMut(TextLeaf<'_>),
    {
        f(leaf(Self::KIND, FieldKind::Content, depth, &self.content));
        for reply in &self.replies {
            reply.for_each_text_at(depth + 1, f);
        }
    }
}

impl TextTree for Reply {
    const KIND: NodeKind = NodeKind::Reply;

    fn map_text_at<F>(&self, depth: usize, f: &mut F) -> Self
    where
        F: FnMut(TextLeaf<'_>) -> String,
    {
        Reply {
            id: self.id.clone(),
            kind: self.kind,
            content: f(leaf(Self::KIND, FieldKind::Content, depth, &self.content)),
            created: self.created,
            updated: self.updated,
            author_type: self.author_type,
            replies: self
                .replies
                .iter()
                .map(|reply| reply.map_text_at(depth + 1, f))
                .collect(),
        }
    }

    fn for_each_text_at<F>(&self, depth: usize, f: &mut F)
    where
        F: FnMut(TextLeaf<'_>),
    {
        f(leaf(Self::KIND, FieldKind::Content, depth, &self.content));
        for reply in &self.replies {
            reply.for_each_text_at(depth + 1, f);
        }
    }
}
