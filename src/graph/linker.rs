//! Cross-references between questions and answers
//!
//! Matching is exact string equality on ids. Hash indexes replace the
//! answers × questions scan without changing which pairs match.

use super::PostGraph;
use crate::post::PostHandle;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Outcome of a linking pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Answers attached to a question
    pub replies: usize,
    /// Answers whose parent is not in the graph
    pub orphans: usize,
    /// Answers marked as accepted
    pub best_answers: usize,
    /// Accepted-answer ids that match no answer
    pub unmatched_accepted: usize,
}

/// Link every answer to its parent question and mark accepted answers.
///
/// Must complete before any post is rendered.
pub fn link(graph: &mut PostGraph) -> LinkStats {
    let mut stats = LinkStats::default();

    // Plan first, then mutate: the indexes borrow ids out of the graph.
    let (attachments, accepted) = {
        let questions = index(graph, graph.questions());
        let answers = index(graph, graph.answers());

        let mut attachments = Vec::new();
        for &a in graph.answers() {
            let Some(answer) = graph.get(a) else {
                continue;
            };
            let Some(parent_id) = answer.parent_id() else {
                continue;
            };
            match questions.get(parent_id) {
                Some(&q) => attachments.push((q, a)),
                None => {
                    stats.orphans += 1;
                    debug!("Answer {} has no parent {} in this dump", answer.id(), parent_id);
                }
            }
        }

        let mut accepted = Vec::new();
        for &q in graph.questions() {
            let Some(accepted_id) = graph.get(q).and_then(|p| p.accepted_answer_id()) else {
                continue;
            };
            match answers.get(accepted_id) {
                Some(&a) => accepted.push(a),
                None => stats.unmatched_accepted += 1,
            }
        }

        (attachments, accepted)
    };

    for (q, a) in attachments {
        if let Some(question) = graph.get_mut(q) {
            question.push_reply(a);
        }
        if let Some(answer) = graph.get_mut(a) {
            answer.set_parent(q);
        }
        stats.replies += 1;
    }

    for a in accepted {
        if let Some(answer) = graph.get_mut(a) {
            if !answer.is_best_answer() {
                answer.mark_best_answer();
                stats.best_answers += 1;
            }
        }
    }

    info!(
        "Linked {} replies, {} orphan answers, {} accepted answers",
        stats.replies, stats.orphans, stats.best_answers
    );
    stats
}

/// id → handle for the given posts, first occurrence wins
fn index<'g>(graph: &'g PostGraph, handles: &[PostHandle]) -> FxHashMap<&'g str, PostHandle> {
    let mut map = FxHashMap::default();
    for &h in handles {
        if let Some(post) = graph.get(h) {
            map.entry(post.id()).or_insert(h);
        }
    }
    map
}
