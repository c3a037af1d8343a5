//! Property tests for frontmatter formatting and parsing.

use plugbridge_core::{FieldValue, Frontmatter, format_frontmatter, parse_frontmatter};
use proptest::prelude::*;

fn field_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        any::<String>().prop_map(FieldValue::Text),
        prop::collection::vec(any::<String>(), 0..4).prop_map(FieldValue::List),
    ]
}

fn header() -> impl Strategy<Value = Frontmatter> {
    prop::collection::vec((any::<String>(), field_value()), 0..6).prop_map(|fields| {
        let mut header = Frontmatter::new();
        for (key, value) in fields {
            header.insert(key, value);
        }
        header
    })
}

proptest! {
    #[test]
    fn parse_inverts_format(header in header(), body in any::<String>()) {
        prop_assume!(!body.starts_with("---"));

        let doc = format_frontmatter(&header, &body);
        let (parsed, parsed_body) = parse_frontmatter(&doc)
            .map_err(|e| TestCaseError::fail(format!("{e} in {doc:?}")))?;
        prop_assert_eq!(parsed, header);
        prop_assert_eq!(parsed_body, body);
    }
}
