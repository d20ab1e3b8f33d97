//! Shared parsing helpers for inbound HTTP adapters.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::domain::{CommentId, Error, GroupId, PostId};

/// Parse a numeric path segment, reporting malformed ids as a missing
/// resource of the given kind.
fn parse_path_id<T: FromStr>(raw: &str, resource: &str) -> Result<T, Error> {
    raw.parse()
        .map_err(|_| Error::not_found(format!("{resource} not found")))
}

pub(crate) fn parse_group_id(raw: &str) -> Result<GroupId, Error> {
    parse_path_id(raw, "group")
}

pub(crate) fn parse_post_id(raw: &str) -> Result<PostId, Error> {
    parse_path_id(raw, "post")
}

pub(crate) fn parse_comment_id(raw: &str) -> Result<CommentId, Error> {
    parse_path_id(raw, "comment")
}

/// Deserialize a field that may be absent, explicitly `null`, or a value.
///
/// Use together with `#[serde(default)]`: an absent field stays `None`, an
/// explicit `null` becomes `Some(None)`.
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;
    use serde::Deserialize;

    #[rstest]
    #[case("7", Some(7))]
    #[case("0", Some(0))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("1.5", None)]
    fn post_ids_parse_or_report_not_found(#[case] raw: &str, #[case] expected: Option<i64>) {
        match (parse_post_id(raw), expected) {
            (Ok(id), Some(value)) => assert_eq!(id.get(), value),
            (Err(err), None) => {
                assert_eq!(err.code(), ErrorCode::NotFound);
                assert_eq!(err.message(), "post not found");
            }
            (other, _) => panic!("unexpected parse outcome: {other:?}"),
        }
    }

    #[rstest]
    fn comment_and_group_errors_name_the_resource() {
        let comment = parse_comment_id("x").expect_err("non-numeric id");
        assert_eq!(comment.message(), "comment not found");
        let group = parse_group_id("x").expect_err("non-numeric id");
        assert_eq!(group.message(), "group not found");
    }

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        image: Option<Option<String>>,
    }

    #[rstest]
    #[case(r#"{}"#, None)]
    #[case(r#"{"image":null}"#, Some(None))]
    #[case(r#"{"image":"a.png"}"#, Some(Some("a.png".to_owned())))]
    fn double_option_distinguishes_absent_from_null(
        #[case] body: &str,
        #[case] expected: Option<Option<String>>,
    ) {
        let patch: Patch = serde_json::from_str(body).expect("valid patch body");
        assert_eq!(patch.image, expected);
    }
}
