#![no_main]
use libfuzzer_sys::fuzz_target;
use wordlist::{parse_word_list, write_word_list};

fuzz_target!(|input: &str| {
    if let Ok(words) = parse_word_list(input) {
        assert!(words.iter().all(|w| !w.is_empty() && !w.contains(char::is_whitespace)));
        // a leading byte order mark is dropped on the way back in
        if words.iter().next().map_or(false, |w| w.starts_with('\u{feff}')) {
            return;
        }
        let mut ser = String::new();
        write_word_list(&words, &mut ser).unwrap();
        assert_eq!(parse_word_list(&ser).unwrap(), words);
    }
});
