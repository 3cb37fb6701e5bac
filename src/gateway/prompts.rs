//! Prompt templates
//!
//! Each prompt ends with an example of the exact JSON shape expected back,
//! since responses are parsed strictly.

use crate::types::{Flashcard, MasteryScore};

/// Ask for a JSON array of skill names derived from the reference content
pub fn skills_prompt(reference: &str) -> String {
    format!(
        r#"Based on the following content, suggest a list of skills that can be mastered. Format the response as a JSON array.
Content:
{}

Example response:
[
  "Skill 1",
  "Skill 2",
  "Skill 3"
]"#,
        reference
    )
}

/// Ask for `count` flashcards calibrated to the mastery context
pub fn flashcards_prompt(mastery: &MasteryScore, count: usize, topic: &str) -> String {
    let context = serde_json::to_string(mastery).unwrap_or_else(|_| "{}".to_string());
    format!(
        r#"Generate {} flashcards for learning {}. Use the following concepts and their mastery levels to adjust the difficulty of the questions: {}. Each flashcard should have a question and the associated skills. Format them as a JSON array of objects with "question" and "skills" fields.

Example response:
[
  {{
    "question": "What is a closure?",
    "skills": ["Functions"]
  }},
  {{
    "question": "Explain how the event loop schedules callbacks.",
    "skills": ["Event Loop", "Callbacks"]
  }}
]"#,
        count, topic, context
    )
}

/// Ask for a judgment of `answer` against the card
pub fn feedback_prompt(answer: &str, card: &Flashcard) -> String {
    let skills = serde_json::to_string(&card.skills).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"Evaluate the user's answer to the following question and provide a JSON object with the following fields: "feedback" (string), "isCorrect" (boolean), and "correctAnswer" (string). Additionally, confirm the associated skills.
Question: "{}"
User's answer: "{}"
Skills: {}
Respond in JSON format.

Example response:
{{
  "feedback": "Good job! You correctly identified the main purpose of the function.",
  "isCorrect": true,
  "correctAnswer": "It returns a new array with every element transformed.",
  "skills": ["Functions"]
}}"#,
        card.question, answer, skills
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Skill;

    #[test]
    fn test_skills_prompt_embeds_content() {
        let prompt = skills_prompt("# Ownership\nEvery value has one owner.");
        assert!(prompt.contains("Every value has one owner."));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn test_flashcards_prompt_embeds_context() {
        let mastery: MasteryScore = [(Skill::from("Traits"), 3)].into_iter().collect();
        let prompt = flashcards_prompt(&mastery, 10, "Rust");
        assert!(prompt.starts_with("Generate 10 flashcards for learning Rust."));
        assert!(prompt.contains(r#"{"Traits":3}"#));
    }

    #[test]
    fn test_feedback_prompt_embeds_answer_and_skills() {
        let card = Flashcard::new("What is a trait?", vec![Skill::from("Traits")]);
        let prompt = feedback_prompt("An interface", &card);
        assert!(prompt.contains(r#"Question: "What is a trait?""#));
        assert!(prompt.contains(r#"User's answer: "An interface""#));
        assert!(prompt.contains(r#"Skills: ["Traits"]"#));
    }
}
