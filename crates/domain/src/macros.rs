/// 登録通知の識別子型を定義する宣言型マクロ
///
/// `uuid::Uuid` をラップし、生成時に UUID v7 を採番する。
/// 値はログの相関（`event.entity_id`）にのみ使うため、`Display` と比較だけを提供する。
///
/// ```rust
/// use codetracker_domain::notification::NoticeId;
///
/// let first = NoticeId::new();
/// let second = NoticeId::new();
/// assert_ne!(first, second);
/// assert_eq!(first.to_string().len(), 36);
/// ```
macro_rules! define_uuid_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
        #[display("{_0}")]
        $vis struct $Name(uuid::Uuid);

        impl $Name {
            /// 新しい ID を採番する（UUID v7）
            pub fn new() -> Self {
                Self(uuid::Uuid::now_v7())
            }
        }

        impl Default for $Name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// 通知本文に差し込む文字列フィールドを定義する宣言型マクロ
///
/// 登録ワークフローから受け取った値を加工せずに保持する。
/// 空文字列と空白のみの値だけを拒否し、前後の空白も含めて本文にそのまま出す。
///
/// `pii: true` を指定した型は Debug 出力を `[REDACTED]` にマスクする。
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use codetracker_domain::value_objects::DisplayName;
///
/// let name = DisplayName::new("山田太郎")?;
/// assert_eq!(name.as_str(), "山田太郎");
/// assert!(format!("{:?}", name).contains("[REDACTED]"));
/// # Ok(())
/// # }
/// ```
macro_rules! define_notice_field {
    (@impl $Name:ident, $label:expr) => {
        impl $Name {
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は必須です",
                        $label
                    )));
                }
                Ok(Self(value))
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr,
            pii: true $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        $vis struct $Name(String);

        impl std::fmt::Debug for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($Name)).field(&"[REDACTED]").finish()
            }
        }

        define_notice_field!(@impl $Name, $label);
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $Name(String);

        define_notice_field!(@impl $Name, $label);
    };
}
