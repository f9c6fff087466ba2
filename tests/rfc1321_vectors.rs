//! End-to-end checks of the binary against the RFC 1321 test suite.

use assert_cmd::Command;
use predicates::prelude::*;
use test_support::write_temp_file;

const VECTORS: &[(&str, &str)] = &[
    ("", "d41d8cd98f00b204e9800998ecf8427e"),
    ("a", "0cc175b9c0f1b6a831c399e269772661"),
    ("abc", "900150983cd24fb0d6963f7d28e17f72"),
    ("message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
    (
        "abcdefghijklmnopqrstuvwxyz",
        "c3fcd3d76192e4007dfb496cca67e13b",
    ),
    (
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        "d174ab98d277d9f5a5611c2c9f419d9f",
    ),
    (
        "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        "57edf4a22be3c955ac49da2e2107b67a",
    ),
];

fn oc_md5() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_oc-md5"));
    command.env_remove(cli::LOG_ENV);
    command
}

#[test]
fn string_inputs_match_rfc_vectors() {
    for (input, expected) in VECTORS {
        oc_md5()
            .arg(input)
            .assert()
            .success()
            .stdout(format!("MD5 Hash: {expected}\n"))
            .stderr("");
    }
}

#[test]
fn file_inputs_match_rfc_vectors() {
    for (input, expected) in VECTORS {
        let file = write_temp_file(input.as_bytes());
        oc_md5()
            .arg("--file")
            .arg(file.path())
            .assert()
            .success()
            .stdout(format!("MD5 Hash: {expected}\n"));
    }
}

#[test]
fn string_and_file_agree_for_the_same_bytes() {
    let text = "The quick brown fox jumps over the lazy dog";
    let file = write_temp_file(text.as_bytes());

    let from_string = oc_md5().arg(text).output().unwrap().stdout;
    let from_file = oc_md5().arg("-f").arg(file.path()).output().unwrap().stdout;
    assert_eq!(from_string, from_file);
    assert_eq!(
        from_string,
        b"MD5 Hash: 9e107d9d372bb6826bd81d3542a419d6\n"
    );
}

#[test]
fn small_chunks_do_not_change_the_digest() {
    let data = "1234567890".repeat(1000);
    let file = write_temp_file(data.as_bytes());
    let expected = checksums::digest_bytes(data.as_bytes()).to_hex();

    for chunk in ["64", "100", "4096", "1048576"] {
        oc_md5()
            .args(["--chunk-size", chunk, "-f"])
            .arg(file.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(expected.as_str()));
    }
}
