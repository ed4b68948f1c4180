use std::io::Write;

use tempfile::NamedTempFile;

use swapdesk::config::{Config, KEYSTORE_PASSWORD_ENV, KEYSTORE_PASSWORD_FILE_ENV, PRIVATE_KEY_ENV};
use swapdesk::error::{ConfigError, Error};

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn config_loads_from_file() {
    let file = write_temp_config(
        r#"
[network]
rpc_url = "http://localhost:9545"

[contracts.token_a]
symbol = "AAA"
address = "0x00000000000000000000000000000000000000aa"

[logging]
level = "info"
"#,
    );

    let config = Config::load(file.path()).unwrap();
    let pair = config.token_pair();

    assert_eq!(config.network.rpc_url, "http://localhost:9545");
    assert_eq!(pair.token_a.symbol, "AAA");
    // Untouched entries keep their defaults.
    assert_eq!(pair.token_b.symbol, "CTK2");
    assert_eq!(config.logging.format, "pretty");
}

#[test]
fn explicit_missing_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let result = Config::load_or_default(Some(&missing));

    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn pool_must_differ_from_tokens() {
    let file = write_temp_config(
        r#"
[contracts]
pool = "0x00000000000000000000000000000000000000aa"
token_a = { symbol = "AAA", address = "0x00000000000000000000000000000000000000aa" }
token_b = { symbol = "BBB", address = "0x00000000000000000000000000000000000000bb" }
"#,
    );

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "contracts.pool",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid pool error, got {err}"),
        Ok(_) => panic!("Expected invalid pool error, got a config"),
    }
}

#[test]
fn blank_symbol_is_rejected() {
    let file = write_temp_config(
        r#"
[contracts]
token_a = { symbol = " ", address = "0x00000000000000000000000000000000000000aa" }
"#,
    );

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::MissingField { .. }))
    ));
}

#[test]
fn malformed_address_is_a_parse_error() {
    let file = write_temp_config("[contracts]\npool = \"0x1234\"\n");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn keystore_without_password_is_rejected() {
    let ambient = [PRIVATE_KEY_ENV, KEYSTORE_PASSWORD_ENV, KEYSTORE_PASSWORD_FILE_ENV];
    if ambient.iter().any(|name| std::env::var_os(name).is_some()) {
        // A key or password in the environment changes resolution.
        return;
    }

    let result = Config::parse_toml("[wallet]\nkeystore_path = \"/nonexistent/keystore.json\"\n");

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MissingField {
            field: KEYSTORE_PASSWORD_ENV
        }))
    ));
}
