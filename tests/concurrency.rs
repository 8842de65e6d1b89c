use std::collections::HashSet;
use std::thread;

use charpass::{ClassSet, GenerationRequest};

#[test]
fn concurrent_callers_get_independent_passwords() {
    let request = GenerationRequest::new(32, ClassSet::ALL);

    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(move || (0..50).map(|_| request.generate()).collect::<Vec<_>>()))
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for password in handle.join().unwrap() {
            let password = password.unwrap();
            assert_eq!(password.len(), 32);
            // 89^32 possibilities: a repeat means shared generator state.
            assert!(seen.insert(password));
        }
    }
    assert_eq!(seen.len(), 400);
}
