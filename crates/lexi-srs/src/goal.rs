//! Goal kinds consumed by the daily-goal and weekly-challenge bookkeeping.
//!
//! The scheduler only emits [`GoalType::LearnNew`] and [`GoalType::ReviewSrs`];
//! the remaining kinds belong to other activities and are listed so the whole
//! set is closed and checked at compile time.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    LearnNew,
    ReviewSrs,
    CompleteQuiz,
    CompleteListening,
    CompleteConversation,
    CompletePronunciation,
    CompleteStory,
    CompleteAdvGrammar,
    CompleteReading,
    CompleteWriting,
    CompleteRoleplay,
    CompleteChallenge,
    CompleteVideoLesson,
    PostInForum,
}

impl GoalType {
    pub const ALL: [Self; 14] = [
        Self::LearnNew,
        Self::ReviewSrs,
        Self::CompleteQuiz,
        Self::CompleteListening,
        Self::CompleteConversation,
        Self::CompletePronunciation,
        Self::CompleteStory,
        Self::CompleteAdvGrammar,
        Self::CompleteReading,
        Self::CompleteWriting,
        Self::CompleteRoleplay,
        Self::CompleteChallenge,
        Self::CompleteVideoLesson,
        Self::PostInForum,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LearnNew => "learn_new",
            Self::ReviewSrs => "review_srs",
            Self::CompleteQuiz => "complete_quiz",
            Self::CompleteListening => "complete_listening",
            Self::CompleteConversation => "complete_conversation",
            Self::CompletePronunciation => "complete_pronunciation",
            Self::CompleteStory => "complete_story",
            Self::CompleteAdvGrammar => "complete_adv_grammar",
            Self::CompleteReading => "complete_reading",
            Self::CompleteWriting => "complete_writing",
            Self::CompleteRoleplay => "complete_roleplay",
            Self::CompleteChallenge => "complete_challenge",
            Self::CompleteVideoLesson => "complete_video_lesson",
            Self::PostInForum => "post_in_forum",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known goal kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown goal type '{0}'")]
pub struct UnknownGoalType(pub String);

impl FromStr for GoalType {
    type Err = UnknownGoalType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == s)
            .ok_or_else(|| UnknownGoalType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_name_matches_as_str() {
        for goal in GoalType::ALL {
            let json = serde_json::to_string(&goal).unwrap();
            assert_eq!(json, format!("\"{}\"", goal.as_str()));
            assert_eq!(goal.as_str().parse::<GoalType>(), Ok(goal));
        }
    }

    #[test]
    fn test_unknown_goal_type_is_rejected() {
        assert!(serde_json::from_str::<GoalType>("\"complete_homework\"").is_err());
        assert_eq!(
            "learnNew".parse::<GoalType>(),
            Err(UnknownGoalType("learnNew".to_string()))
        );
    }
}
