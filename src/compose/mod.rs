use crate::errors::ComposeError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Relationship being coached on in a next-step request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipType {
    Customer,
    Funder,
    Candidate,
    Champion,
}

impl RelationshipType {
    /// Human-readable label shown in the composed message
    pub fn label(&self) -> &str {
        match self {
            RelationshipType::Customer => "Customer",
            RelationshipType::Funder => "Funder / Investor",
            RelationshipType::Candidate => "Candidate",
            RelationshipType::Champion => "Champion / Advisor",
        }
    }
}

/// Call-feedback coaching request assembled from a transcript and optional notes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallFeedbackRequest {
    pub transcript: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CallFeedbackRequest {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Render the chat-message payload handed to the conversation agent
    ///
    /// The transcript is required; whitespace-only notes are omitted from
    /// the message rather than rendered as an empty section.
    pub fn to_message(&self) -> Result<String, ComposeError> {
        let transcript = self.transcript.trim();
        if transcript.is_empty() {
            return Err(ComposeError::new("Call transcript must not be empty"));
        }

        let mut message = format!("**CALL TRANSCRIPT:**\n{}", transcript);

        if let Some(notes) = self.notes.as_deref() {
            let notes = notes.trim();
            if !notes.is_empty() {
                message.push_str("\n\n**ADDITIONAL NOTES:**\n");
                message.push_str(notes);
            }
        }

        debug!("Composed call feedback message ({} chars)", message.len());
        Ok(message)
    }
}

/// Next-step coaching request describing a networking interaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextStepRequest {
    pub relationship: RelationshipType,
    pub goal: String,
    pub context: String,
}

impl NextStepRequest {
    pub fn new(
        relationship: RelationshipType,
        goal: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            relationship,
            goal: goal.into(),
            context: context.into(),
        }
    }

    /// Render the chat-message payload handed to the conversation agent
    pub fn to_message(&self) -> Result<String, ComposeError> {
        let goal = self.goal.trim();
        if goal.is_empty() {
            return Err(ComposeError::new("Goal must not be empty"));
        }

        let context = self.context.trim();
        if context.is_empty() {
            return Err(ComposeError::new("Context must not be empty"));
        }

        Ok(format!(
            "**RELATIONSHIP TYPE:** {}\n\n**MY GOAL:** {}\n\n**WHAT HAPPENED:**\n{}",
            self.relationship.label(),
            goal,
            context
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_feedback_without_notes() {
        let request = CallFeedbackRequest::new("Rep: Hi there.\nCustomer: Hello.");
        let message = request.to_message().unwrap();
        assert_eq!(
            message,
            "**CALL TRANSCRIPT:**\nRep: Hi there.\nCustomer: Hello."
        );
    }

    #[test]
    fn test_call_feedback_with_notes() {
        let request = CallFeedbackRequest::new("Rep: Hi there.")
            .with_notes("  Focus on the pricing objection.  ");
        let message = request.to_message().unwrap();
        assert_eq!(
            message,
            "**CALL TRANSCRIPT:**\nRep: Hi there.\n\n**ADDITIONAL NOTES:**\nFocus on the pricing objection."
        );
    }

    #[test]
    fn test_call_feedback_whitespace_notes_are_omitted() {
        let request = CallFeedbackRequest::new("Rep: Hi there.").with_notes("   ");
        let message = request.to_message().unwrap();
        assert!(!message.contains("ADDITIONAL NOTES"));
    }

    #[test]
    fn test_call_feedback_requires_transcript() {
        let request = CallFeedbackRequest::new("   ");
        assert!(request.to_message().is_err());
    }

    #[test]
    fn test_next_step_message_layout() {
        let request = NextStepRequest::new(
            RelationshipType::Funder,
            "Close the seed round",
            "Met at the partner dinner, they asked for our deck.",
        );
        let message = request.to_message().unwrap();
        assert_eq!(
            message,
            "**RELATIONSHIP TYPE:** Funder / Investor\n\n**MY GOAL:** Close the seed round\n\n**WHAT HAPPENED:**\nMet at the partner dinner, they asked for our deck."
        );
    }

    #[test]
    fn test_next_step_requires_goal_and_context() {
        let missing_goal = NextStepRequest::new(RelationshipType::Customer, " ", "Context.");
        assert!(missing_goal.to_message().is_err());

        let missing_context = NextStepRequest::new(RelationshipType::Customer, "Goal.", "\n");
        assert!(missing_context.to_message().is_err());
    }

    #[test]
    fn test_relationship_labels() {
        assert_eq!(RelationshipType::Customer.label(), "Customer");
        assert_eq!(RelationshipType::Champion.label(), "Champion / Advisor");
    }
}
