//! # 共通値オブジェクト
//!
//! 登録通知で扱う文字列値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: 宛名と ID を取り違えないよう型で区別する
//! - **値は加工しない**: 登録ワークフローが渡した文字列をそのまま本文に出す（長さ制限なし）
//! - **不変性**: 一度作成したら変更不可
//!
//! ## 含まれる型
//!
//! | 型 | ラップ対象 | 用途 |
//! |---|-----------|------|
//! | [`DisplayName`] | `String` | 受信者の表示名（PII） |
//! | [`IssuedId`] | `String` | 発行されたログイン ID（学籍番号・職員番号） |

// =========================================================================
// DisplayName（受信者表示名）
// =========================================================================

define_notice_field! {
    /// 受信者表示名
    ///
    /// メール本文の宛名に使う。PII のため Debug 出力はマスクされる。
    pub struct DisplayName {
        label: "表示名",
        pii: true,
    }
}

// =========================================================================
// IssuedId（発行 ID）
// =========================================================================

define_notice_field! {
    /// 発行 ID
    ///
    /// 登録時に発行されたログイン ID。学籍番号（例: `22A91A6182`）や職員番号が入る。
    pub struct IssuedId {
        label: "発行 ID",
    }
}
