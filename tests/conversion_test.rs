use stackrdf::rdf::{check_turtle, NamespaceManager};
use stackrdf::{classify, convert, Converter, ConverterConfig, Record, RecordKind};

const Q1: &str = "<http://vocab.inf.ed.ac.uk/sws#post1>";
const A2: &str = "<http://vocab.inf.ed.ac.uk/sws#post2>";

fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn moby_dick() -> Vec<Record> {
    vec![
        record(&[
            ("Id", "1"),
            ("PostTypeId", "1"),
            ("AcceptedAnswerId", "2"),
            ("CreationDate", "2014-02-11T23:08:01.390"),
            ("Title", "Moby Dick"),
            ("Body", "A whale."),
            ("Tags", "<arduino><wifi>"),
            ("AnswerCount", "1"),
        ]),
        record(&[
            ("Id", "2"),
            ("PostTypeId", "2"),
            ("ParentId", "1"),
            ("CreationDate", "2014-02-12T01:00:13.120"),
            ("Body", "Call me Ishmael."),
        ]),
    ]
}

fn to_turtle(records: Vec<Record>) -> String {
    let mut out = String::new();
    convert(records, &mut out).unwrap();
    out
}

#[test]
fn test_moby_dick_document() {
    let out = to_turtle(moby_dick());

    let expected = format!(
        "{header}\n\
         {q} a sioc:Post .\n\
         {q} a tsioc:Question .\n\
         {q} dc:title \"Moby Dick\" .\n\
         {q} sioc:content \"A whale.\" .\n\
         {q} dc:date \"2014-02-11T23:08:01\"^^xsd:dateTime .\n\
         {q} sioc:topic <http://dbpedia.org/resource/Arduino> .\n\
         {q} sioc:topic <http://dbpedia.org/resource/Wi-Fi> .\n\
         {q} sioc:has_reply {a} .\n\
         \n\
         {a} a sioc:Post .\n\
         {a} a tsioc:Answer .\n\
         {a} a tsioc:BestAnswer .\n\
         {a} sioc:content \"Call me Ishmael.\" .\n\
         {a} sioc:has_parent {q} .\n\
         {a} dc:date \"2014-02-12T01:00:13\"^^xsd:dateTime .\n\
         \n",
        header = NamespaceManager::new().header(),
        q = Q1,
        a = A2,
    );
    assert_eq!(out, expected);
}

#[test]
fn test_header_prefix_order() {
    let out = to_turtle(Vec::new());
    let prefixes: Vec<&str> = out
        .lines()
        .filter_map(|l| l.strip_prefix("@prefix "))
        .filter_map(|l| l.split(':').next())
        .collect();
    assert_eq!(prefixes, vec!["dc", "sioc", "tsioc", "xsd"]);
    assert!(out.ends_with(" .\n\n"));
    assert_eq!(check_turtle(&out).unwrap(), 0);
}

#[test]
fn test_questions_rendered_before_answers() {
    let records = vec![
        record(&[("Id", "10"), ("ParentId", "11"), ("Body", "early answer")]),
        record(&[("Id", "11"), ("AnswerCount", "1"), ("Title", "late question")]),
    ];
    let out = to_turtle(records);

    let question = out.find("sws#post11> a tsioc:Question .").unwrap();
    let answer = out.find("sws#post10> a tsioc:Answer .").unwrap();
    assert!(question < answer);
    // the link does not depend on input order
    assert!(out.contains(
        "<http://vocab.inf.ed.ac.uk/sws#post11> sioc:has_reply <http://vocab.inf.ed.ac.uk/sws#post10> ."
    ));
}

#[test]
fn test_unknown_tags_get_generated_uri() {
    let records = vec![record(&[
        ("Id", "1"),
        ("AnswerCount", "0"),
        ("Tags", "<Arduino>< motor-driver ><c++><arduino>"),
    ])];
    let out = to_turtle(records);

    let topics: Vec<&str> = out.lines().filter(|l| l.contains("sioc:topic")).collect();
    assert_eq!(
        topics,
        vec![
            format!("{} sioc:topic <http://dbpedia.org/resource/Arduino> .", Q1),
            format!("{} sioc:topic <http://vocab.inf.ed.ac.uk/sws#tag_motor-driver> .", Q1),
            format!("{} sioc:topic <http://dbpedia.org/resource/C++> .", Q1),
        ]
    );
}

#[test]
fn test_orphan_answer_has_no_parent() {
    let records = vec![record(&[("Id", "5"), ("ParentId", "404"), ("Body", "lost")])];
    let mut out = String::new();
    let report = convert(records, &mut out).unwrap();

    assert_eq!(report.answers, 1);
    assert_eq!(report.links.orphans, 1);
    assert!(out.contains("sws#post5> a tsioc:Answer ."));
    assert!(!out.contains("has_parent"));
    assert!(check_turtle(&out).is_ok());
}

#[test]
fn test_classification() {
    assert_eq!(classify(&record(&[("Id", "1"), ("AnswerCount", "0")])), RecordKind::Question);
    assert_eq!(classify(&record(&[("Id", "2"), ("ParentId", "1")])), RecordKind::Answer);
    assert_eq!(classify(&record(&[("Id", "3"), ("Body", "wiki")])), RecordKind::Discard);
    assert_eq!(
        classify(&record(&[("Id", "4"), ("AnswerCount", "2"), ("ParentId", "1")])),
        RecordKind::Question
    );
}

#[test]
fn test_discarded_records_leave_no_trace() {
    let mut records = moby_dick();
    records.push(record(&[("Id", "3"), ("PostTypeId", "5"), ("Body", "tag wiki")]));
    let out = to_turtle(records);

    assert!(!out.contains("sws#post3>"));
    assert_eq!(out, to_turtle(moby_dick()));
}

#[test]
fn test_link_symmetry() {
    let records = vec![
        record(&[("Id", "1"), ("AnswerCount", "2"), ("AcceptedAnswerId", "3")]),
        record(&[("Id", "2"), ("ParentId", "1")]),
        record(&[("Id", "3"), ("ParentId", "1")]),
        record(&[("Id", "4"), ("AnswerCount", "0")]),
    ];
    let converter = Converter::new(ConverterConfig::default()).unwrap();
    let (graph, report) = converter.build_graph(records).unwrap();

    assert_eq!(report.links.replies, 2);
    assert_eq!(report.links.best_answers, 1);
    for (handle, post) in graph.iter() {
        for reply in post.replies() {
            assert_eq!(graph.get(reply).unwrap().parent(), Some(handle));
        }
        if let Some(parent) = post.parent() {
            assert!(graph.get(parent).unwrap().replies().contains(&handle));
        }
    }

    let q = graph.find("1").unwrap();
    let replies: Vec<&str> = graph
        .get(q)
        .unwrap()
        .replies()
        .into_iter()
        .map(|h| graph.get(h).unwrap().id())
        .collect();
    assert_eq!(replies, vec!["2", "3"]);
    assert!(!graph.get(graph.find("2").unwrap()).unwrap().is_best_answer());
    assert!(graph.get(graph.find("3").unwrap()).unwrap().is_best_answer());
    assert!(graph.get(graph.find("4").unwrap()).unwrap().replies().is_empty());
}

#[test]
fn test_conversion_is_deterministic() {
    assert_eq!(to_turtle(moby_dick()), to_turtle(moby_dick()));
}

#[test]
fn test_parallel_matches_sequential() {
    let mut records = Vec::new();
    for i in 0..200 {
        let id = (i * 2 + 1).to_string();
        let answer_id = (i * 2 + 2).to_string();
        records.push(record(&[
            ("Id", id.as_str()),
            ("AnswerCount", "1"),
            ("AcceptedAnswerId", answer_id.as_str()),
            ("Title", "parallel"),
            ("Tags", "<esp8266><sensor-fusion>"),
        ]));
        records.push(record(&[
            ("Id", answer_id.as_str()),
            ("ParentId", id.as_str()),
            ("Body", "an answer"),
            ("CreationDate", "2015-06-01T10:00:00.000"),
        ]));
    }

    let sequential = Converter::new(ConverterConfig::default()).unwrap();
    let parallel = Converter::new(ConverterConfig {
        parallel: true,
        ..ConverterConfig::default()
    })
    .unwrap();

    let mut seq_out = String::new();
    let mut par_out = String::new();
    let seq_report = sequential.convert(records.clone(), &mut seq_out).unwrap();
    let par_report = parallel.convert(records, &mut par_out).unwrap();

    assert_eq!(seq_out, par_out);
    assert_eq!(seq_report, par_report);
    assert_eq!(seq_report.posts_written, 400);
}
