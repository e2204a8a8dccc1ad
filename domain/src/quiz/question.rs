//! Question value object - one step of the quiz

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason an answer was rejected before checking whether it is correct
///
/// The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatError {
    #[error("Имя должно начинаться с заглавной буквы")]
    NameNotCapitalized,

    #[error("Профессия должна начинаться со строчной буквы")]
    ProfessionNotLowercase,

    #[error("Материал не должен содержать цифр")]
    MaterialHasDigits,

    #[error("Год моего рождения должен содержать только цифры")]
    BirthdayNotNumeric,

    #[error("Серийный номер содержит только цифры, и их 7")]
    SerialNotSevenDigits,
}

/// A quiz question (Value Object)
///
/// Every variant carries a fixed prompt, the set of accepted answers, a
/// format rule and a fixed successor. [`Question::Idle`] is terminal: it
/// accepts nothing and is its own successor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Question {
    #[default]
    Name,
    Profession,
    Material,
    Bday,
    Serial,
    Idle,
}

impl Question {
    /// All questions, in quiz order
    pub const ALL: [Question; 6] = [
        Question::Name,
        Question::Profession,
        Question::Material,
        Question::Bday,
        Question::Serial,
        Question::Idle,
    ];

    /// Text Bender asks
    pub fn prompt(&self) -> &'static str {
        match self {
            Question::Name => "Как меня зовут?",
            Question::Profession => "Назови мою профессию?",
            Question::Material => "Из чего я сделан?",
            Question::Bday => "Когда меня создали?",
            Question::Serial => "Мой серийный номер?",
            Question::Idle => "На этом все, вопросов больше нет",
        }
    }

    /// Accepted answers; matching is exact and case-sensitive.
    pub fn answers(&self) -> &'static [&'static str] {
        match self {
            Question::Name => &["Бендер", "Bender"],
            Question::Profession => &["сгибальщик", "bender"],
            Question::Material => &["металл", "дерево", "metal", "iron", "wood"],
            Question::Bday => &["2993"],
            Question::Serial => &["2716057"],
            Question::Idle => &[],
        }
    }

    pub fn accepts(&self, answer: &str) -> bool {
        self.answers().contains(&answer)
    }

    /// Check the answer's format for this question.
    pub fn validate(&self, answer: &str) -> Result<(), FormatError> {
        match self {
            Question::Name => {
                if starts_with(answer, |c| c.is_ascii_uppercase() || ('А'..='Я').contains(&c)) {
                    Ok(())
                } else {
                    Err(FormatError::NameNotCapitalized)
                }
            }
            Question::Profession => {
                if starts_with(answer, |c| c.is_ascii_lowercase() || ('а'..='я').contains(&c)) {
                    Ok(())
                } else {
                    Err(FormatError::ProfessionNotLowercase)
                }
            }
            Question::Material => {
                if answer.chars().any(|c| c.is_ascii_digit()) {
                    Err(FormatError::MaterialHasDigits)
                } else {
                    Ok(())
                }
            }
            Question::Bday => {
                if is_integer(answer) {
                    Ok(())
                } else {
                    Err(FormatError::BirthdayNotNumeric)
                }
            }
            Question::Serial => {
                if is_integer(answer) && answer.chars().count() == 7 {
                    Ok(())
                } else {
                    Err(FormatError::SerialNotSevenDigits)
                }
            }
            Question::Idle => Ok(()),
        }
    }

    /// The question asked after this one is answered correctly
    pub fn next(&self) -> Question {
        match self {
            Question::Name => Question::Profession,
            Question::Profession => Question::Material,
            Question::Material => Question::Bday,
            Question::Bday => Question::Serial,
            Question::Serial | Question::Idle => Question::Idle,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Question::Idle)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Question::Name => "name",
            Question::Profession => "profession",
            Question::Material => "material",
            Question::Bday => "bday",
            Question::Serial => "serial",
            Question::Idle => "idle",
        }
    }
}

fn starts_with(answer: &str, pred: impl Fn(char) -> bool) -> bool {
    answer.chars().next().is_some_and(pred)
}

/// Non-empty and fits a signed 64-bit integer (an optional leading sign is allowed).
fn is_integer(answer: &str) -> bool {
    answer.parse::<i64>().is_ok()
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Question {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Question::ALL
            .into_iter()
            .find(|q| q.as_str() == s)
            .ok_or_else(|| DomainError::UnknownQuestion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successor_chain_ends_in_idle() {
        let mut q = Question::default();
        let mut visited = vec![q];
        while !q.is_terminal() {
            q = q.next();
            visited.push(q);
        }
        assert_eq!(visited, Question::ALL.to_vec());
        assert_eq!(Question::Idle.next(), Question::Idle);
    }

    #[test]
    fn test_name_rule() {
        assert!(Question::Name.validate("Bender").is_ok());
        assert!(Question::Name.validate("Бендер").is_ok());
        assert!(Question::Name.validate("Zoidberg").is_ok());
        assert_eq!(
            Question::Name.validate("bender"),
            Err(FormatError::NameNotCapitalized)
        );
        assert_eq!(Question::Name.validate(""), Err(FormatError::NameNotCapitalized));
        assert_eq!(Question::Name.validate("1Bender"), Err(FormatError::NameNotCapitalized));
    }

    #[test]
    fn test_name_rule_excludes_yo() {
        // Ё sits outside the contiguous А..Я block
        assert_eq!(Question::Name.validate("Ёжик"), Err(FormatError::NameNotCapitalized));
    }

    #[test]
    fn test_profession_rule() {
        assert!(Question::Profession.validate("bender").is_ok());
        assert!(Question::Profession.validate("сгибальщик").is_ok());
        assert_eq!(
            Question::Profession.validate("Bender"),
            Err(FormatError::ProfessionNotLowercase)
        );
        assert_eq!(
            Question::Profession.validate(""),
            Err(FormatError::ProfessionNotLowercase)
        );
    }

    #[test]
    fn test_material_rule() {
        assert!(Question::Material.validate("metal").is_ok());
        assert!(Question::Material.validate("").is_ok());
        assert_eq!(
            Question::Material.validate("metal2"),
            Err(FormatError::MaterialHasDigits)
        );
        // a digit on any line counts
        assert_eq!(
            Question::Material.validate("a\n1"),
            Err(FormatError::MaterialHasDigits)
        );
    }

    #[test]
    fn test_bday_rule() {
        assert!(Question::Bday.validate("2993").is_ok());
        assert!(Question::Bday.validate("-1").is_ok());
        assert_eq!(Question::Bday.validate(""), Err(FormatError::BirthdayNotNumeric));
        assert_eq!(Question::Bday.validate("2993г"), Err(FormatError::BirthdayNotNumeric));
    }

    #[test]
    fn test_serial_rule() {
        assert!(Question::Serial.validate("2716057").is_ok());
        assert!(Question::Serial.validate("0000000").is_ok());
        assert_eq!(
            Question::Serial.validate("271605"),
            Err(FormatError::SerialNotSevenDigits)
        );
        assert_eq!(
            Question::Serial.validate("27160571"),
            Err(FormatError::SerialNotSevenDigits)
        );
        assert_eq!(
            Question::Serial.validate("27160a7"),
            Err(FormatError::SerialNotSevenDigits)
        );
        assert_eq!(Question::Serial.validate(""), Err(FormatError::SerialNotSevenDigits));
    }

    #[test]
    fn test_idle_accepts_any_format_but_no_answer() {
        assert!(Question::Idle.validate("").is_ok());
        assert!(Question::Idle.validate("whatever 123").is_ok());
        assert!(Question::Idle.answers().is_empty());
    }

    #[test]
    fn test_accepts_is_case_sensitive() {
        assert!(Question::Name.accepts("Bender"));
        assert!(!Question::Name.accepts("BENDER"));
        assert!(Question::Material.accepts("iron"));
        assert!(!Question::Material.accepts("Iron"));
    }

    #[test]
    fn test_format_error_message() {
        assert_eq!(
            FormatError::SerialNotSevenDigits.to_string(),
            "Серийный номер содержит только цифры, и их 7"
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("serial".parse::<Question>().unwrap(), Question::Serial);
        assert!("age".parse::<Question>().is_err());
    }
}
