//! # ユーザー
//!
//! 新規登録ユーザーの連絡先を表す値オブジェクトを定義する。
//! ユーザー本体の永続化は登録ワークフロー側の責務であり、ここでは扱わない。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use codetracker_domain::user::Email;
//!
//! let email = Email::new("user@example.com")?;
//! assert_eq!(email.to_string(), "user@example.com");
//! # Ok(())
//! # }
//! ```

use crate::DomainError;

/// メールアドレス（値オブジェクト）
///
/// `local@domain` の形式を要求する。
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
/// RFC 5322 の厳密な検証は送信時に SMTP トランスポート側が行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - `@` を含む
    /// - 最大 255 文字
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスは必須です".to_string(),
            ));
        }

        // 基本的な構造検証: local@domain の形式であること
        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        };

        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        }

        if value.len() > 255 {
            return Err(DomainError::Validation(
                "メールアドレスは255文字以内である必要があります".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("user@example.com")]
    #[case("dev.pavangollapalli@gmail.com")]
    #[case("a@b")]
    fn test_メールアドレスは正しい形式を受け入れる(#[case] input: &str) {
        let email = Email::new(input).unwrap();
        assert_eq!(email.as_str(), input);
    }

    #[rstest]
    fn test_メールアドレスは前後の空白を除去する() {
        let email = Email::new("  user@example.com \n").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[rstest]
    #[case("", "空文字列")]
    #[case("   ", "空白のみ")]
    #[case("no-at-sign", "@記号なし")]
    #[case("@", "@のみ")]
    #[case("@example.com", "ローカル部分が空")]
    #[case("user@", "ドメイン部分が空")]
    #[case(&format!("{}@example.com", "a".repeat(256)), "255文字超過")]
    fn test_メールアドレスは不正な形式を拒否する(
        #[case] input: &str,
        #[case] _reason: &str,
    ) {
        assert!(Email::new(input).is_err());
    }

    #[rstest]
    fn test_文字列からの変換でもバリデーションされる() {
        assert!(Email::try_from("not-an-email".to_string()).is_err());

        let email = Email::try_from("user@example.com".to_string()).unwrap();
        assert_eq!(String::from(email), "user@example.com");
    }
}
