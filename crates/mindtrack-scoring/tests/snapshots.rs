//! Serialized result records as handed to the results view.

use mindtrack_model::AssessmentAnswers;
use mindtrack_scoring::{calculate_results, fallback_result};

#[test]
fn midpoint_result_record() {
    let result = calculate_results(&AssessmentAnswers::new().with("appetite", "Normal"));
    insta::assert_json_snapshot!(result, @r#"
    {
      "stressLevel": 5,
      "anxietyLevel": 5,
      "depressionRisk": 5,
      "wellnessScore": 5,
      "suggestions": [
        "Maintain a balanced diet rich in vegetables, fruits, and whole grains",
        "Practice gratitude by noting three positive things each day"
      ],
      "summary": "Your responses indicate moderate challenges with your mental wellbeing. You may be experiencing stress, mood changes, or difficulties with sleep or energy. Consider implementing the suggested strategies and monitoring your progress."
    }
    "#);
}

#[test]
fn fallback_result_record() {
    insta::assert_json_snapshot!(fallback_result(), @r#"
    {
      "stressLevel": 5,
      "anxietyLevel": 5,
      "depressionRisk": 4,
      "wellnessScore": 6,
      "suggestions": [
        "Practice regular mindfulness meditation",
        "Ensure you're getting 7-9 hours of sleep",
        "Stay physically active with regular exercise",
        "Consider talking to a mental health professional"
      ],
      "summary": "We had trouble analyzing your specific responses, but we've provided some general wellness recommendations that may be helpful."
    }
    "#);
}
