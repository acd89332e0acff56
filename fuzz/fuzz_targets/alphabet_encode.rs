#![no_main]

use libfuzzer_sys::fuzz_target;
use novault_core::alphabet::{encode, ALPHABET, PASSWORD_LEN};

fuzz_target!(|data: &[u8]| {
    // The mapping step must hold its format invariant for any derived bytes:
    // exactly PASSWORD_LEN characters, all inside the fixed alphabet.
    if data.len() >= PASSWORD_LEN {
        let password = encode(data);
        assert_eq!(password.len(), PASSWORD_LEN);
        assert!(password.chars().all(|c| ALPHABET.contains(c)));
    }
});
