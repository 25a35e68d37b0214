//! 이메일 주소 형식 검사
//!
//! 주소를 마지막 `@` 기준으로 나누어 검사합니다.
//!
//! - 로컬 파트: RFC 5322 atom 문자와 U+0080 이상의 유니코드 문자,
//!   큰따옴표로 감싼 문자열(`"john doe"`)을 `.`으로 이어 붙인 형태
//! - 도메인 파트: `validator::ValidateEmail`의 도메인 규칙 (IDN, IP 리터럴 포함)
//!
//! 빈 문자열은 여기서 판단하지 않습니다. 필수 여부는 별도 규칙이 담당합니다.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

const MAX_LOCAL_PART_LENGTH: usize = 64;

const ATOM: &str = r"[a-z0-9!#$%&'*+/=?^_`{|}~\x{80}-\x{10FFFF}-]";
const QUOTED_ATOM: &str = r#"(?:[a-z0-9!#$%&'*.(),<>\[\]:; @+/=?^_`{|}~\x{80}-\x{10FFFF}-]|\\\\|\\")"#;

static LOCAL_PART: Lazy<Regex> = Lazy::new(|| {
    let word = format!(r#"(?:{ATOM}+|"{QUOTED_ATOM}+")"#);
    Regex::new(&format!(r"^(?i){word}(?:\.{word})*$")).expect("local part pattern must compile")
});

/// 주소가 이메일 형식이면 `true`
pub fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    local.chars().count() <= MAX_LOCAL_PART_LENGTH
        && LOCAL_PART.is_match(local)
        && format!("user@{domain}").validate_email()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.com")]
    #[case("a@b")]
    #[case("first.last+tag@example.co.kr")]
    #[case("한글@example.com")]
    #[case("a@ünicode.com")]
    #[case(r#""john doe"@example.com"#)]
    #[case(r#""a@b"@example.com"#)]
    #[case(r#"john."quoted part"@example.com"#)]
    fn test_accepts(#[case] email: &str) {
        assert!(is_well_formed_email(email), "{email} should be accepted");
    }

    #[rstest]
    #[case("jdfad")]
    #[case(" ")]
    #[case("user@")]
    #[case("@example.com")]
    #[case("two@@example.com")]
    #[case(".leading@example.com")]
    #[case("double..dot@example.com")]
    #[case("john doe@example.com")]
    #[case(r#""unterminated@example.com"#)]
    #[case("user@-example.com")]
    fn test_rejects(#[case] email: &str) {
        assert!(!is_well_formed_email(email), "{email} should be rejected");
    }

    #[test]
    fn test_local_part_length_limit() {
        let at_limit = format!("{}@example.com", "a".repeat(MAX_LOCAL_PART_LENGTH));
        let over_limit = format!("{}@example.com", "a".repeat(MAX_LOCAL_PART_LENGTH + 1));

        assert!(is_well_formed_email(&at_limit));
        assert!(!is_well_formed_email(&over_limit));
    }
}
