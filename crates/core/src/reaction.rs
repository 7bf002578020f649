//! Reaction targets and vote intents

use crate::config::FrontendConfig;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of votable entity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Post,
    Comment,
}

impl ReactionKind {
    /// Interpret a `data-type` attribute.
    ///
    /// Only the literal `post` selects posts; every other value, including a
    /// missing attribute, is routed to the comment endpoint and left to the
    /// server to reject.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("post") => Self::Post,
            _ => Self::Comment,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }

    /// Endpoint path the vote for this kind is sent to
    pub fn endpoint(self, config: &FrontendConfig) -> &str {
        match self {
            Self::Post => &config.like_post_path,
            Self::Comment => &config.like_comment_path,
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A post or comment rendered with a pair of reaction controls
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReactionTarget {
    pub kind: ReactionKind,
    /// Opaque identifier, forwarded to the server untouched
    pub id: String,
}

impl ReactionTarget {
    pub fn new(kind: ReactionKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

/// Server-confirmed counter values for one target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub likes: i64,
    pub dislikes: i64,
}

impl Counters {
    pub const fn new(likes: i64, dislikes: i64) -> Self {
        Self { likes, dislikes }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteDirection {
    Like,
    Dislike,
}

/// A single click on a reaction control.
///
/// The `like` flag is kept as the literal attribute value so malformed input
/// reaches the server unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteIntent {
    pub target: ReactionTarget,
    pub like: String,
}

impl VoteIntent {
    pub fn new(target: ReactionTarget, like: impl Into<String>) -> Self {
        Self {
            target,
            like: like.into(),
        }
    }

    /// Build an intent from the control's `data-type`, `data-id` and
    /// `data-like` attributes as read at click time.
    pub fn from_attributes(
        kind: Option<&str>,
        id: Option<&str>,
        like: Option<&str>,
    ) -> CoreResult<Self> {
        let id = id.ok_or_else(|| CoreError::missing_attribute("data-id"))?;
        let like = like.ok_or_else(|| CoreError::missing_attribute("data-like"))?;

        Ok(Self::new(
            ReactionTarget::new(ReactionKind::from_attribute(kind), id),
            like,
        ))
    }

    /// How the server reads the flag: `"1"` likes, anything else dislikes.
    /// The flag itself is still sent unchanged.
    pub fn direction(&self) -> VoteDirection {
        if self.like == "1" {
            VoteDirection::Like
        } else {
            VoteDirection::Dislike
        }
    }

    /// Query parameters in request order
    pub fn query(&self) -> [(&'static str, &str); 2] {
        [("id", self.target.id.as_str()), ("like", self.like.as_str())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_routes_only_literal_post_to_posts() {
        let config = FrontendConfig::default();

        assert_eq!(ReactionKind::from_attribute(Some("post")), ReactionKind::Post);
        assert_eq!(
            ReactionKind::from_attribute(Some("comment")),
            ReactionKind::Comment
        );
        assert_eq!(ReactionKind::from_attribute(Some("Post")), ReactionKind::Comment);
        assert_eq!(ReactionKind::from_attribute(None), ReactionKind::Comment);

        assert_eq!(ReactionKind::Post.endpoint(&config), "/like_post");
        assert_eq!(ReactionKind::Comment.endpoint(&config), "/like_comment");
    }

    #[test]
    fn test_intent_requires_id_and_flag() {
        let err = VoteIntent::from_attributes(Some("post"), None, Some("1")).unwrap_err();
        assert_eq!(err, CoreError::missing_attribute("data-id"));

        let err = VoteIntent::from_attributes(Some("post"), Some("42"), None).unwrap_err();
        assert_eq!(err, CoreError::missing_attribute("data-like"));
    }

    #[test]
    fn test_intent_forwards_values_verbatim() {
        let intent = VoteIntent::from_attributes(Some("post"), Some("42"), Some("yes")).unwrap();

        assert_eq!(intent.target, ReactionTarget::new(ReactionKind::Post, "42"));
        assert_eq!(intent.query(), [("id", "42"), ("like", "yes")]);
        assert_eq!(intent.direction(), VoteDirection::Dislike);

        let like = VoteIntent::from_attributes(Some("comment"), Some("7"), Some("1")).unwrap();
        assert_eq!(like.direction(), VoteDirection::Like);
    }
}
