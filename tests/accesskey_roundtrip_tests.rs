use langcodec_accesskey::{
    AccessKeySyntax, DEFAULT_ACCESSKEY_MARKER, MarkerPolicy, combine, extract,
};
use proptest::prelude::*;

fn label_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ]{1,24}").expect("valid label regex")
}

/// A label plus one of its characters that occurs exactly once and is not a space.
fn label_with_unique_key() -> impl Strategy<Value = (String, char)> {
    label_strategy()
        .prop_flat_map(|label| {
            let len = label.chars().count();
            (Just(label), 0..len)
        })
        .prop_filter_map("key must be unique and not a space", |(label, pos)| {
            let key = label.chars().nth(pos)?;
            let unique = label.chars().filter(|&c| c == key).count() == 1;
            (key != ' ' && unique).then_some((label, key))
        })
}

proptest! {
    #[test]
    fn combine_then_extract_roundtrips((label, key) in label_with_unique_key()) {
        let combined = combine(&label, &key.to_string(), DEFAULT_ACCESSKEY_MARKER)
            .expect("key occurs in label");
        prop_assert_eq!(combined.chars().count(), label.chars().count() + 1);
        prop_assert_eq!(extract(&combined, DEFAULT_ACCESSKEY_MARKER), (label, Some(key)));
    }

    #[test]
    fn roundtrip_ignores_leading_entity((label, key) in label_with_unique_key()) {
        let label = format!("&amp; {label}");
        let combined = combine(&label, &key.to_string(), DEFAULT_ACCESSKEY_MARKER)
            .expect("key occurs outside the entity");
        prop_assert_eq!(extract(&combined, DEFAULT_ACCESSKEY_MARKER), (label, Some(key)));
    }

    #[test]
    fn roundtrip_with_custom_marker((label, key) in label_with_unique_key()) {
        let combined = combine(&label, &key.to_string(), '_').expect("key occurs in label");
        prop_assert_eq!(extract(&combined, '_'), (label, Some(key)));
    }

    #[test]
    fn policies_agree_on_single_marker((label, key) in label_with_unique_key()) {
        let syntax = AccessKeySyntax::default();
        let combined = syntax.combine(&label, &key.to_string()).expect("key occurs in label");
        let first = syntax.clone().with_policy(MarkerPolicy::FirstMatch);
        prop_assert_eq!(first.extract(&combined), syntax.extract(&combined));
    }

    #[test]
    fn extract_without_marker_is_identity(label in label_strategy()) {
        prop_assert_eq!(extract(&label, DEFAULT_ACCESSKEY_MARKER), (label, None));
    }

    #[test]
    fn extract_removes_at_most_one_marker(text in "[A-Za-z &;#]{0,30}") {
        let (label, key) = extract(&text, DEFAULT_ACCESSKEY_MARKER);
        match key {
            Some(_) => {
                prop_assert_eq!(label.len() + 1, text.len());
            }
            None => {
                prop_assert_eq!(label, text);
            }
        }
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(extract("&File", '&'), ("File".to_string(), Some('F')));
    assert_eq!(extract("File", '&'), ("File".to_string(), None));
    assert_eq!(extract("", '&'), (String::new(), None));
    assert_eq!(extract("&amp;File", '&'), ("&amp;File".to_string(), None));
    assert_eq!(extract("Sa&ve &As", '&'), ("Sa&ve As".to_string(), Some('A')));

    assert_eq!(combine("File", "F", '&'), Some("&File".to_string()));
    assert_eq!(combine("File", "f", '&'), Some("&File".to_string()));
    assert_eq!(combine("File", "z", '&'), None);
    assert_eq!(
        combine("Nice &amp; File", "F", '&'),
        Some("Nice &amp; &File".to_string())
    );
}
