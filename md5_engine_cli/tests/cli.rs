use assert_cmd::Command;
use md5_engine_test_utils::{RFC1321_VECTORS, all_vectors};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// Every invocation gets its own config directory so a developer's real
// configuration never leaks into the assertions.
fn md5digest(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("md5digest").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("MD5DIGEST_INPUT__CHUNK_SIZE")
        .env_remove("MD5DIGEST_INPUT__DEFAULT_TEXT")
        .env_remove("MD5DIGEST_OUTPUT__DEFAULT_FORMAT")
        .env_remove("MD5DIGEST_OUTPUT__UPPERCASE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_prints_alphabet_digest() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .assert()
        .success()
        .stdout("c3fcd3d76192e4007dfb496cca67e13b\n");
}

#[test]
fn test_text_argument() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .arg("abc")
        .assert()
        .success()
        .stdout("900150983cd24fb0d6963f7d28e17f72\n");
}

#[test]
fn test_empty_text_argument() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .arg("")
        .assert()
        .success()
        .stdout("d41d8cd98f00b204e9800998ecf8427e\n");
}

#[test]
fn test_stdin_input() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .arg("--stdin")
        .write_stdin("message digest")
        .assert()
        .success()
        .stdout("f96b697d7cb7938d525a2f31aaf161d0\n");
}

#[test]
fn test_rfc_vectors_through_stdin() {
    let home = TempDir::new().unwrap();
    for vector in RFC1321_VECTORS {
        md5digest(&home)
            .args(["--stdin", "--chunk-size", "7"])
            .write_stdin(vector.input)
            .assert()
            .success()
            .stdout(predicate::str::diff(format!("{}\n", vector.expected_hex)));
    }
}

#[test]
fn test_all_vectors_pass_check() {
    let home = TempDir::new().unwrap();
    for vector in all_vectors() {
        md5digest(&home)
            .args([vector.input, "--check", vector.expected_hex])
            .assert()
            .success();
    }
}

#[test]
fn test_text_and_stdin_conflict() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .args(["abc", "--stdin"])
        .assert()
        .failure();
}

#[test]
fn test_chunk_size_one_gives_same_digest() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .args(["--chunk-size", "1"])
        .assert()
        .success()
        .stdout("c3fcd3d76192e4007dfb496cca67e13b\n");
}

#[test]
fn test_chunk_size_zero_is_rejected() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .args(["--chunk-size", "0"])
        .assert()
        .failure();
}

#[test]
fn test_uppercase() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .arg("--uppercase")
        .assert()
        .success()
        .stdout("C3FCD3D76192E4007DFB496CCA67E13B\n");
}

#[test]
fn test_json_format() {
    let home = TempDir::new().unwrap();
    let output = md5digest(&home)
        .args(["abc", "--format", "json", "--chunk-size", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["algorithm"], "MD5");
    assert_eq!(value["hash"], "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(value["input_size"], 3);
    assert_eq!(value["chunk_count"], 2);
}

#[test]
fn test_check_match() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .args(["abc", "--check", "900150983cd24fb0d6963f7d28e17f72"])
        .assert()
        .success()
        .stdout("900150983cd24fb0d6963f7d28e17f72\n");
}

#[test]
fn test_check_mismatch() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .args(["abc", "--check", "d41d8cd98f00b204e9800998ecf8427e"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Digest mismatch"));
}

#[test]
fn test_config_file_changes_defaults() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("md5digest");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[input]\ndefault_text = \"abc\"\n\n[output]\nuppercase = true\n",
    )
    .unwrap();

    md5digest(&home)
        .assert()
        .success()
        .stdout("900150983CD24FB0D6963F7D28E17F72\n");
}

#[test]
fn test_environment_overrides_config_file() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("md5digest");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[input]\ndefault_text = \"abc\"\n\n[output]\nuppercase = false\n",
    )
    .unwrap();

    // File values apply on their own
    md5digest(&home)
        .assert()
        .success()
        .stdout("900150983cd24fb0d6963f7d28e17f72\n");

    // Environment beats the file, untouched keys still come from it
    md5digest(&home)
        .env("MD5DIGEST_OUTPUT__UPPERCASE", "true")
        .assert()
        .success()
        .stdout("900150983CD24FB0D6963F7D28E17F72\n");
}

#[test]
fn test_environment_default_text_may_look_numeric() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .env("MD5DIGEST_INPUT__DEFAULT_TEXT", "123")
        .assert()
        .success()
        .stdout("202cb962ac59075b964b07152d234b70\n");

    md5digest(&home)
        .env("MD5DIGEST_INPUT__DEFAULT_TEXT", "abc")
        .assert()
        .success()
        .stdout("900150983cd24fb0d6963f7d28e17f72\n");
}

#[test]
fn test_invalid_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("md5digest");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[input]\nchunk_size = 0\n").unwrap();

    md5digest(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("chunk_size"))
        .stderr(predicate::str::contains("Failed to load configuration").count(1));
}

#[test]
fn test_config_set_then_get() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .args(["config", "set", "output.default_format", "json"])
        .assert()
        .success();

    md5digest(&home)
        .args(["config", "get", "output.default_format"])
        .assert()
        .success()
        .stdout("json\n");

    assert!(home.path().join("md5digest/config.toml").exists());
}

#[test]
fn test_config_set_rejects_invalid_value() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .args(["config", "set", "input.chunk_size", "0"])
        .assert()
        .failure();
}

#[test]
fn test_config_path() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("md5digest").and(predicate::str::contains("config.toml")),
        );
}

#[test]
fn test_config_list() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("chunk_size").and(predicate::str::contains("65536")),
        );
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    md5digest(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("md5digest"));
}
