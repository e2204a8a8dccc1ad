//! Profile entity

use super::translit::transliterate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rank shown on every profile
pub const RANK: &str = "Junior Android Developer";

const NICK_DIVIDER: &str = "_";
/// Divider used when only one name is set
const WORD_DIVIDER: &str = " ";

/// A user profile (Entity)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub about: String,
    pub repository: String,
    pub rating: i32,
    pub respect: i32,
}

impl Profile {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn with_about(mut self, about: impl Into<String>) -> Self {
        self.about = about.into();
        self
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }

    pub fn rank(&self) -> &'static str {
        RANK
    }

    /// Latin nickname derived from the names, e.g. `Zhenya_Stereotipov`
    pub fn nickname(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (true, true) => String::new(),
            (true, false) => transliterate(&self.last_name, WORD_DIVIDER),
            (false, true) => transliterate(&self.first_name, WORD_DIVIDER),
            (false, false) => transliterate(
                &format!("{}{}{}", self.first_name, NICK_DIVIDER, self.last_name),
                NICK_DIVIDER,
            ),
        }
    }

    /// Upper-cased first letters of the names; `None` when both are blank.
    pub fn initials(&self) -> Option<String> {
        let initial = |name: &str| {
            name.trim()
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect::<String>())
        };

        match (initial(&self.first_name), initial(&self.last_name)) {
            (None, None) => None,
            (first, last) => Some(format!(
                "{}{}",
                first.unwrap_or_default(),
                last.unwrap_or_default()
            )),
        }
    }

    /// Display fields in screen order
    pub fn to_map(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("nickName", Value::from(self.nickname())),
            ("rank", Value::from(RANK)),
            ("firstName", Value::from(self.first_name.as_str())),
            ("lastName", Value::from(self.last_name.as_str())),
            ("about", Value::from(self.about.as_str())),
            ("repository", Value::from(self.repository.as_str())),
            ("rating", Value::from(self.rating)),
            ("respect", Value::from(self.respect)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nickname_from_both_names() {
        let profile = Profile::new("Женя", "Стереотипов");
        assert_eq!(profile.nickname(), "Zhenya_Stereotipov");
    }

    #[test]
    fn test_nickname_from_one_name() {
        assert_eq!(Profile::new("", "Петров").nickname(), "Petrov");
        assert_eq!(Profile::new("Иван", "").nickname(), "Ivan");
        assert_eq!(Profile::new("", "").nickname(), "");
    }

    #[test]
    fn test_nickname_replaces_inner_spaces() {
        assert_eq!(Profile::new("Анна Мария", "Ли").nickname(), "Anna_Mariya_Li");
    }

    #[test]
    fn test_single_name_keeps_inner_spaces() {
        assert_eq!(Profile::new("Анна Мария", "").nickname(), "Anna Mariya");
        assert_eq!(Profile::new("", "Ван Дейк").nickname(), "Van Deik");
    }

    #[test]
    fn test_initials() {
        assert_eq!(Profile::new("john", "doe").initials(), Some("JD".to_string()));
        assert_eq!(Profile::new("John", "").initials(), Some("J".to_string()));
        assert_eq!(Profile::new(" ", "").initials(), None);
        assert_eq!(Profile::new("", "").initials(), None);
    }

    #[test]
    fn test_to_map_order_and_values() {
        let profile = Profile::new("Иван", "Петров").with_about("hi");
        let map = profile.to_map();
        let keys: Vec<_> = map.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "nickName",
                "rank",
                "firstName",
                "lastName",
                "about",
                "repository",
                "rating",
                "respect"
            ]
        );
        assert_eq!(map[0].1, "Ivan_Petrov");
        assert_eq!(map[1].1, RANK);
        assert_eq!(map[6].1, 0);
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let profile: Profile =
            serde_json::from_str(r#"{"firstName":"Ivan","lastName":"Petrov"}"#).unwrap();
        assert_eq!(profile, Profile::new("Ivan", "Petrov"));
    }
}
