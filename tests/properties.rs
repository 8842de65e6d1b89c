use charpass::{
    Alphabet, CharacterClass, ClassSet, Error, GenerationRequest, generate, pass::charset,
};
use proptest::prelude::*;

fn classes() -> impl Strategy<Value = Vec<CharacterClass>> {
    proptest::sample::subsequence(CharacterClass::ALL.to_vec(), 0..=4).prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn alphabet_is_union_of_selected_classes(selected in classes()) {
        let set: ClassSet = selected.iter().copied().collect();
        match charset::build(set) {
            Ok(alphabet) => {
                let expected: usize = selected.iter().map(|c| c.chars().len()).sum();
                prop_assert_eq!(alphabet.len(), expected);
                for class in CharacterClass::ALL {
                    let included = class.chars().iter().all(|&b| alphabet.contains(b as char));
                    prop_assert_eq!(included, selected.contains(&class));
                }
            }
            Err(e) => {
                prop_assert!(selected.is_empty());
                prop_assert!(matches!(e, Error::NoClassSelected));
            }
        }
    }

    #[test]
    fn supply_order_is_irrelevant(selected in classes()) {
        let forward: ClassSet = selected.iter().copied().collect();
        let backward: ClassSet = selected.iter().rev().copied().collect();
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(charset::build(forward).ok(), charset::build(backward).ok());
    }

    #[test]
    fn password_has_requested_length(selected in classes(), length in 0usize..=256) {
        let request = GenerationRequest::new(length, selected.iter().copied().collect());
        match request.generate() {
            Ok(password) => {
                let alphabet = charset::build(request.classes).unwrap();
                prop_assert_eq!(password.chars().count(), length);
                prop_assert!(password.chars().all(|c| alphabet.contains(c)));
            }
            Err(e) => {
                prop_assert!(selected.is_empty());
                prop_assert!(matches!(e, Error::NoClassSelected));
            }
        }
    }

    #[test]
    fn empty_alphabet_only_allows_empty_password(length in 0usize..64) {
        let result = generate(length, &Alphabet::default());
        if length == 0 {
            prop_assert_eq!(result.unwrap(), "");
        } else {
            prop_assert!(matches!(result, Err(Error::EmptyAlphabet)));
        }
    }
}

#[test]
fn twelve_chars_from_lowercase_and_digits() {
    let classes = ClassSet::from([CharacterClass::Digit, CharacterClass::Lowercase]);
    let alphabet = charset::build(classes).unwrap();
    assert_eq!(alphabet.to_string(), "abcdefghijklmnopqrstuvwxyz0123456789");

    let password = GenerationRequest::new(12, classes).generate().unwrap();
    assert_eq!(password.len(), 12);
    assert!(password.chars().all(|c| alphabet.contains(c)));
}

#[test]
fn eight_chars_without_classes_fails() {
    let result = GenerationRequest::new(8, ClassSet::EMPTY).generate();
    assert!(matches!(result, Err(Error::NoClassSelected)));
}
