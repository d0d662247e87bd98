use proptest::prelude::*;
use small_tasks::is_palindrome;

#[test]
fn test_if_string_is_palindrome() {
    for (input, expect) in [("asd", false), ("ada", true), ("saippuakivikauppias", true)] {
        assert_eq!(is_palindrome(input), expect, "input: {}", input);
    }
}

#[test]
fn test_empty_and_single_character() {
    assert!(is_palindrome(""));
    assert!(is_palindrome("a"));
}

proptest! {
    #[test]
    fn test_symmetry(text in "\\PC{0,32}") {
        let reversed: String = text.chars().rev().collect();
        prop_assert_eq!(is_palindrome(&text), is_palindrome(&reversed));
    }

    #[test]
    fn test_mirrored_strings_are_palindromes(half in "\\PC{0,16}", middle in proptest::option::of(any::<char>())) {
        let mut text = half.clone();
        if let Some(c) = middle {
            text.push(c);
        }
        text.extend(half.chars().rev());
        prop_assert!(is_palindrome(&text));
    }

    #[test]
    fn test_repeated_calls_agree(text in "\\PC{0,32}") {
        let first = is_palindrome(&text);
        prop_assert_eq!(is_palindrome(&text), first);
        prop_assert_eq!(is_palindrome(&text), first);
    }
}
