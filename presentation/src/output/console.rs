//! Console output formatter for quiz replies and profiles

use bender_application::SaveOutcome;
use bender_domain::{AnswerOutcome, AppTheme, Profile, Prompt, Question, Reply, Rgb, Status};
use colored::Colorize;
use serde::Serialize;

/// One reply as written in JSON output
#[derive(Debug, Serialize)]
struct ReplyView<'a> {
    text: &'a str,
    color: Rgb,
    outcome: AnswerOutcome,
    status: Status,
    question: Question,
}

/// Formats quiz and profile output for the terminal
#[derive(Debug, Clone, Copy)]
pub struct ConsoleFormatter {
    color: bool,
}

impl ConsoleFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, rgb: Rgb) -> String {
        if self.color {
            text.truecolor(rgb.r, rgb.g, rgb.b).to_string()
        } else {
            text.to_string()
        }
    }

    fn label(&self, text: &str) -> String {
        if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Bender's reply in the reply colour, one painted line per text line
    pub fn format_reply(&self, reply: &Reply) -> String {
        self.format_lines(&reply.text, reply.color)
    }

    pub fn format_prompt(&self, prompt: &Prompt) -> String {
        self.format_lines(&prompt.text, prompt.color)
    }

    fn format_lines(&self, text: &str, rgb: Rgb) -> String {
        let body = text
            .lines()
            .map(|line| self.paint(line, rgb))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{} {}", self.label("Bender:"), body)
    }

    /// Single-line JSON for scripted output
    pub fn format_reply_json(&self, reply: &Reply, status: Status, question: Question) -> String {
        let view = ReplyView {
            text: &reply.text,
            color: reply.color,
            outcome: reply.outcome,
            status,
            question,
        };
        serde_json::to_string(&view).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
    }

    pub fn format_status(&self, status: Status, question: Question) -> String {
        format!(
            "{} {}\n{} {}",
            self.label("Status:"),
            self.paint(status.as_str(), status.color()),
            self.label("Question:"),
            question
        )
    }

    /// Profile fields in screen order, followed by initials and theme
    pub fn format_profile(&self, profile: &Profile, theme: AppTheme, outcome: &SaveOutcome) -> String {
        let mut output = String::new();

        for (key, value) in profile.to_map() {
            let value = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            output.push_str(&format!("{} {}\n", self.label(&format!("{}:", key)), value));
        }

        output.push_str(&format!(
            "{} {}\n",
            self.label("initials:"),
            profile.initials().unwrap_or_default()
        ));
        output.push_str(&format!("{} {}\n", self.label("theme:"), theme));

        if let SaveOutcome::RepositoryDropped(url) = outcome {
            let warning = format!("Repository dropped, not a GitHub account URL: {}", url);
            if self.color {
                output.push_str(&warning.yellow().to_string());
            } else {
                output.push_str(&warning);
            }
            output.push('\n');
        }

        output
    }

    pub fn format_profile_json(&self, profile: &Profile, theme: AppTheme, outcome: &SaveOutcome) -> String {
        let mut map: serde_json::Map<String, serde_json::Value> = profile
            .to_map()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        map.insert("initials".to_string(), profile.initials().into());
        map.insert("theme".to_string(), theme.as_str().into());
        if let SaveOutcome::RepositoryDropped(url) = outcome {
            map.insert("droppedRepository".to_string(), url.as_str().into());
        }
        serde_json::Value::Object(map).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bender_domain::Bender;

    fn plain() -> ConsoleFormatter {
        ConsoleFormatter::new(false)
    }

    #[test]
    fn test_format_reply_plain() {
        let mut bender = Bender::new();
        let reply = bender.listen_answer("Robot");
        assert_eq!(
            plain().format_reply(&reply),
            "Bender: Это неправильный ответ\nКак меня зовут?"
        );
    }

    #[test]
    fn test_format_reply_json() {
        let mut bender = Bender::new();
        let reply = bender.listen_answer("Bender");
        let line = plain().format_reply_json(&reply, bender.status(), bender.question());
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["text"], "Отлично - ты справился\nНазови мою профессию?");
        assert_eq!(value["color"], serde_json::json!([255, 255, 255]));
        assert_eq!(value["outcome"]["kind"], "accepted");
        assert_eq!(value["status"], "normal");
        assert_eq!(value["question"], "profession");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_format_status() {
        assert_eq!(
            plain().format_status(Status::Danger, Question::Bday),
            "Status: danger\nQuestion: bday"
        );
    }

    #[test]
    fn test_format_profile_plain() {
        let profile = Profile::new("Иван", "Петров");
        let text = plain().format_profile(&profile, AppTheme::Night, &SaveOutcome::Saved);
        assert!(text.starts_with("nickName: Ivan_Petrov\nrank: Junior Android Developer\n"));
        assert!(text.contains("rating: 0\n"));
        assert!(text.contains("initials: ИП\n"));
        assert!(text.contains("theme: night\n"));
        assert!(!text.contains("dropped"));
    }

    #[test]
    fn test_format_profile_reports_dropped_repository() {
        let profile = Profile::new("A", "B");
        let outcome = SaveOutcome::RepositoryDropped("github.com/join".to_string());
        let text = plain().format_profile(&profile, AppTheme::Day, &outcome);
        assert!(text.contains("github.com/join"));

        let json = plain().format_profile_json(&profile, AppTheme::Day, &outcome);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["droppedRepository"], "github.com/join");
        assert_eq!(value["initials"], "AB");
        assert_eq!(value["nickName"], "A_B");
    }
}
