#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must decode to a valid tree or an error, never panic
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(tree) = id3::serialization::from_json(json) {
        assert!(!tree.cases.is_empty());
        assert!(tree.depth() >= 1);
        let encoded = id3::serialization::to_json(&tree, false).expect("valid trees encode");
        let decoded = id3::serialization::from_json(&encoded).expect("encoded trees decode");
        assert_eq!(decoded, tree);
    }
});
