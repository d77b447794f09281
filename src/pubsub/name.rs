use std::fmt;

use newsstand_error::ValidationError;

/// Отображаемое имя издания или подписчика.
///
/// Всегда непустое и без пробелов по краям. Сравнение по имени не
/// используется для идентичности подписчиков, см.
/// [`SubscriberId`](super::SubscriberId).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

/// Заголовок выпуска, проверенный и обрезанный на время одного `publish`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTitle(String);

impl DisplayName {
    /// Обрезает пробелы и проверяет, что имя не пустое.
    ///
    /// `entity` попадает в текст ошибки: `"Reader name cannot be empty"`.
    pub fn parse(
        entity: &'static str,
        raw: &str,
    ) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_name(entity));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl IssueTitle {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyIssueTitle);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IssueTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for IssueTitle {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    /// Тест проверяет, что имя обрезается по краям.
    #[test]
    fn test_display_name_is_trimmed() {
        let name = DisplayName::parse("Reader", "  John \t").unwrap();
        assert_eq!(name.as_str(), "John");
        assert_eq!(name.to_string(), "John");
    }

    /// Тест проверяет, что внутренние пробелы сохраняются.
    #[test]
    fn test_inner_whitespace_kept() {
        let name = DisplayName::parse("Library", " City  Library ").unwrap();
        assert_eq!(name.as_str(), "City  Library");
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n  ")]
    fn test_blank_names_rejected(#[case] raw: &str) {
        assert_eq!(
            DisplayName::parse("Magazine", raw),
            Err(ValidationError::empty_name("Magazine"))
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_blank_issue_title_rejected(#[case] raw: &str) {
        assert_eq!(IssueTitle::parse(raw), Err(ValidationError::EmptyIssueTitle));
    }

    #[test]
    fn test_issue_title_is_trimmed() {
        let title = IssueTitle::parse("  Issue 1  ").unwrap();
        assert_eq!(title.as_str(), "Issue 1");
    }
}
