//! 선언 순서를 보존하는 필드 규칙 평가기
//!
//! 규칙은 `(field, predicate, message)` 세 쌍의 목록으로 선언합니다.
//! `validator` derive가 돌려주는 `HashMap` 기반 결과와 달리 위반 항목이
//! 규칙을 선언한 순서 그대로 보고됩니다.

use serde::{Deserialize, Serialize};

/// 위반된 규칙 하나를 나타내는 `(field, message)` 쌍
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 레코드 `T`의 한 필드에 대한 검증 규칙
///
/// `check`가 `false`를 반환하면 `message`로 위반이 보고됩니다.
pub struct FieldRule<T> {
    pub field: &'static str,
    pub check: fn(&T) -> bool,
    pub message: &'static str,
}

impl<T> FieldRule<T> {
    pub const fn new(field: &'static str, check: fn(&T) -> bool, message: &'static str) -> Self {
        Self { field, check, message }
    }
}

/// 규칙 목록을 순서대로 평가합니다.
///
/// 한 필드에서 처음 실패한 규칙만 보고하고 같은 필드의 나머지 규칙은
/// 건너뜁니다. 따라서 필드당 위반은 최대 하나입니다.
/// 같은 필드의 규칙은 목록 안에서 연속으로 선언되어 있어야 합니다.
pub fn evaluate<T>(record: &T, rules: &[FieldRule<T>]) -> Vec<FieldError> {
    let mut errors: Vec<FieldError> = Vec::new();

    for rule in rules {
        if errors.last().is_some_and(|e| e.field == rule.field) {
            continue;
        }
        if !(rule.check)(record) {
            errors.push(FieldError::new(rule.field, rule.message));
        }
    }

    errors
}
