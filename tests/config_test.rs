use stackrdf::{convert, ConfigError, Converter, ConverterConfig, Record};
use std::io::Write;

fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn write_config(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_config_file_overrides() {
    let file = write_config(
        r#"
base_uri: "http://example.org/forum/post/"
tag_base_uri: "http://example.org/forum/tag/"
extra_topics:
  stm32: "http://dbpedia.org/resource/STM32"
limit_per_kind: 10
"#,
    );
    let config = ConverterConfig::from_file(file.path()).unwrap();
    assert_eq!(config.limit_per_kind, Some(10));
    assert!(!config.parallel);
    assert!(config.topics.contains_key("arduino"));

    let converter = Converter::new(config).unwrap();
    let mut out = String::new();
    converter
        .convert(
            vec![record(&[
                ("Id", "7"),
                ("AnswerCount", "0"),
                ("Tags", "<stm32><arduino><gpio-expander>"),
            ])],
            &mut out,
        )
        .unwrap();

    assert!(out.contains("<http://example.org/forum/post/7> a tsioc:Question ."));
    assert!(out.contains("sioc:topic <http://dbpedia.org/resource/STM32> ."));
    assert!(out.contains("sioc:topic <http://dbpedia.org/resource/Arduino> ."));
    assert!(out.contains("sioc:topic <http://example.org/forum/tag/gpio-expander> ."));
}

#[test]
fn test_config_replaces_topic_table() {
    let file = write_config(
        r#"
topics:
  arduino: "http://example.org/topics/arduino"
"#,
    );
    let config = ConverterConfig::from_file(file.path()).unwrap();
    assert_eq!(config.topics.len(), 1);

    let converter = Converter::new(config).unwrap();
    let mut out = String::new();
    converter
        .convert(
            vec![record(&[("Id", "1"), ("AnswerCount", "0"), ("Tags", "<arduino><wifi>")])],
            &mut out,
        )
        .unwrap();
    assert!(out.contains("sioc:topic <http://example.org/topics/arduino> ."));
    assert!(out.contains("sioc:topic <http://vocab.inf.ed.ac.uk/sws#tag_wifi> ."));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConverterConfig::from_file(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_bad_yaml_and_bad_uri() {
    let file = write_config("limit_per_kind: [1, 2]\n");
    assert!(matches!(
        ConverterConfig::from_file(file.path()),
        Err(ConfigError::Yaml(_))
    ));

    let file = write_config("extra_topics:\n  broken: \"not an iri\"\n");
    assert!(matches!(
        ConverterConfig::from_file(file.path()),
        Err(ConfigError::InvalidUri { field: "topics", .. })
    ));
}

#[test]
fn test_default_config_round_trips_through_yaml() {
    let yaml = serde_yaml::to_string(&ConverterConfig::default()).unwrap();
    let parsed = ConverterConfig::from_yaml_str(&yaml).unwrap();
    assert_eq!(parsed, ConverterConfig::default());

    let mut a = String::new();
    let mut b = String::new();
    convert(vec![record(&[("Id", "1"), ("AnswerCount", "0")])], &mut a).unwrap();
    Converter::new(parsed)
        .unwrap()
        .convert(vec![record(&[("Id", "1"), ("AnswerCount", "0")])], &mut b)
        .unwrap();
    assert_eq!(a, b);
}
