//! Post graph
//!
//! Posts live in an arena and refer to each other by `PostHandle`, so the
//! question ↔ answer cycle needs no shared ownership:
//! - `sioc:has_reply` on a question holds handles of its answers
//! - `sioc:has_parent` on an answer holds the handle of its question

mod linker;

use crate::post::{Post, PostHandle};
use rustc_hash::FxHashMap;
use tracing::warn;

pub use linker::{link, LinkStats};

/// Arena of posts, partitioned into questions and answers in insertion order
#[derive(Debug, Default)]
pub struct PostGraph {
    posts: Vec<Post>,
    questions: Vec<PostHandle>,
    answers: Vec<PostHandle>,
    /// First post seen for each id
    by_id: FxHashMap<String, PostHandle>,
    duplicate_ids: usize,
}

impl PostGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a post, returning its handle
    pub fn insert(&mut self, post: Post) -> PostHandle {
        let handle = PostHandle(self.posts.len());
        if self.by_id.contains_key(post.id()) {
            self.duplicate_ids += 1;
            warn!("Duplicate post id {}, links keep the first occurrence", post.id());
        } else {
            self.by_id.insert(post.id().to_string(), handle);
        }
        if post.is_question() {
            self.questions.push(handle);
        } else {
            self.answers.push(handle);
        }
        self.posts.push(post);
        handle
    }

    pub fn get(&self, handle: PostHandle) -> Option<&Post> {
        self.posts.get(handle.index())
    }

    pub(crate) fn get_mut(&mut self, handle: PostHandle) -> Option<&mut Post> {
        self.posts.get_mut(handle.index())
    }

    /// Handle of the first post with this id
    pub fn find(&self, id: &str) -> Option<PostHandle> {
        self.by_id.get(id).copied()
    }

    pub fn questions(&self) -> &[PostHandle] {
        &self.questions
    }

    pub fn answers(&self) -> &[PostHandle] {
        &self.answers
    }

    /// Number of posts whose id was already taken
    pub fn duplicate_ids(&self) -> usize {
        self.duplicate_ids
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// All posts with their handles, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (PostHandle, &Post)> {
        self.posts
            .iter()
            .enumerate()
            .map(|(i, post)| (PostHandle(i), post))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::post::{classify, Post, Projector, Record, TopicVocabulary};

    pub fn projector() -> Projector {
        let topics = TopicVocabulary::new(
            "http://vocab.inf.ed.ac.uk/sws#tag_",
            [
                ("arduino", "http://dbpedia.org/resource/Arduino"),
                ("wifi", "http://dbpedia.org/resource/Wi-Fi"),
            ],
        )
        .unwrap();
        Projector::new("http://vocab.inf.ed.ac.uk/sws#post", topics)
    }

    pub fn post(pairs: &[(&str, &str)]) -> Post {
        let record: Record = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        projector().build(classify(&record), &record).unwrap().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::post;
    use super::*;

    #[test]
    fn test_insert_partitions() {
        let mut graph = PostGraph::new();
        let q = graph.insert(post(&[("Id", "1"), ("AnswerCount", "0")]));
        let a = graph.insert(post(&[("Id", "2"), ("ParentId", "1")]));
        let q2 = graph.insert(post(&[("Id", "3"), ("AnswerCount", "0")]));

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.questions(), &[q, q2]);
        assert_eq!(graph.answers(), &[a]);
        assert_eq!(graph.find("2"), Some(a));
        assert_eq!(graph.find("99"), None);
        assert_eq!(graph.get(q2).map(|p| p.id()), Some("3"));
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut graph = PostGraph::new();
        let first = graph.insert(post(&[("Id", "1"), ("AnswerCount", "0")]));
        let second = graph.insert(post(&[("Id", "1"), ("AnswerCount", "0")]));

        assert_ne!(first, second);
        assert_eq!(graph.find("1"), Some(first));
        assert_eq!(graph.duplicate_ids(), 1);
        assert_eq!(graph.iter().count(), 2);
    }

    #[test]
    fn test_empty() {
        let graph = PostGraph::new();
        assert!(graph.is_empty());
        assert!(graph.get(PostHandle(0)).is_none());
    }
}
