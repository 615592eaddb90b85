//! Comment thread value objects.

use super::{BoardDomainError, CommentId, EmployeeId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Emoji reaction tally: emoji to the set of employees who reacted with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reactions(BTreeMap<String, BTreeSet<EmployeeId>>);

impl Reactions {
    /// Creates an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Toggles a reactor's reaction for an emoji.
    ///
    /// Returns `true` when the reaction is present after the call. An emoji
    /// whose last reactor retracts is removed from the tally entirely.
    pub fn toggle(&mut self, emoji: impl Into<String>, reactor: EmployeeId) -> bool {
        let key = emoji.into();
        let reactors = self.0.entry(key.clone()).or_default();
        let added = if reactors.contains(&reactor) {
            reactors.remove(&reactor);
            false
        } else {
            reactors.insert(reactor);
            true
        };
        if self.0.get(&key).is_some_and(BTreeSet::is_empty) {
            self.0.remove(&key);
        }
        added
    }

    /// Returns the number of reactors for an emoji.
    #[must_use]
    pub fn count(&self, emoji: &str) -> usize {
        self.0.get(emoji).map_or(0, BTreeSet::len)
    }

    /// Returns `true` when no reactions are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over emoji/reactor-set pairs in emoji order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<EmployeeId>)> {
        self.0.iter().map(|(emoji, reactors)| (emoji.as_str(), reactors))
    }
}

/// A single comment in a task's thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    id: CommentId,
    author: EmployeeId,
    content: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    reactions: Reactions,
    #[serde(default)]
    mentions: Vec<EmployeeId>,
}

impl Comment {
    /// Creates a comment authored now.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyCommentBody`] when the content is
    /// empty after trimming.
    pub fn new(
        id: CommentId,
        author: EmployeeId,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(BoardDomainError::EmptyCommentBody);
        }
        Ok(Self {
            id,
            author,
            content,
            created_at: clock.utc(),
            reactions: Reactions::new(),
            mentions: Vec::new(),
        })
    }

    /// Sets the employees @-mentioned in the comment.
    #[must_use]
    pub fn with_mentions(mut self, mentions: impl IntoIterator<Item = EmployeeId>) -> Self {
        self.mentions = mentions.into_iter().collect();
        self
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> &CommentId {
        &self.id
    }

    /// Returns the author's employee identifier.
    #[must_use]
    pub const fn author(&self) -> &EmployeeId {
        &self.author
    }

    /// Returns the comment body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the reaction tally.
    #[must_use]
    pub const fn reactions(&self) -> &Reactions {
        &self.reactions
    }

    /// Returns the mentioned employees.
    #[must_use]
    pub fn mentions(&self) -> &[EmployeeId] {
        &self.mentions
    }

    /// Toggles a reaction on this comment.
    ///
    /// Returns `true` when the reaction is present after the call.
    pub fn toggle_reaction(&mut self, emoji: impl Into<String>, reactor: EmployeeId) -> bool {
        self.reactions.toggle(emoji, reactor)
    }
}
