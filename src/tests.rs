use rocket::fs::relative;
use rocket::http::Status;
use rocket::local::blocking::Client;
use serde_json::{json, Value};
use crate::static_vars::LOAD_FAILURE_MESSAGE;

fn client_for(source: &str) -> Client {
    Client::tracked(crate::rocket(json!({"source": source}))).expect("valid rocket instance")
}

fn get_json(client: &Client, uri: &str) -> (Status, Value) {
    let response = client.get(uri.to_string()).dispatch();
    let status = response.status();
    let body: Value = serde_json::from_str(&response.into_string().unwrap_or_default()).unwrap();
    (status, body)
}

#[test]
fn status_reports_loaded_corpus() {
    let client = client_for(relative!("test_data/gita_raw.json"));
    let (status, body) = get_json(&client, "/status");
    assert_eq!(status, Status::Ok);
    assert_eq!(body["is_loaded"], true);
    assert_eq!(body["verse_count"], 5);
    assert_eq!(body["reason"], "");
}

#[test]
fn random_verse_comes_from_the_corpus() {
    let client = client_for(relative!("test_data/gita_raw.json"));
    for _ in 0..10 {
        let (status, body) = get_json(&client, "/verses/random");
        assert_eq!(status, Status::Ok);
        let chapter = body["chapter"].as_u64().unwrap();
        let verse = body["verse"].as_u64().unwrap();
        assert!([(1, 1), (1, 2), (2, 11), (2, 47), (18, 78)].contains(&(chapter, verse)));
        assert_eq!(
            body["reference"],
            format!("Chapter {} • Verse {}", chapter, verse)
        );
        assert!(!body["translation_text"].as_str().unwrap().is_empty());
    }
}

#[test]
fn chapter_index_lists_eighteen_titles() {
    let client = client_for(relative!("test_data/gita_raw.json"));
    let (status, body) = get_json(&client, "/chapters");
    assert_eq!(status, Status::Ok);
    let chapters = body.as_array().unwrap();
    assert_eq!(chapters.len(), 18);
    assert_eq!(chapters[1]["number"], 2);
    assert_eq!(chapters[1]["original_title"], "सांख्ययोग");
    assert_eq!(chapters[1]["translated_title"], "The Path of Knowledge");
}

#[test]
fn chapter_reader_returns_sorted_verses_of_one_chapter() {
    let client = client_for(relative!("test_data/gita_raw.json"));
    let (status, body) = get_json(&client, "/chapters/1");
    assert_eq!(status, Status::Ok);
    assert_eq!(body["number"], 1);
    assert_eq!(body["translated_title"], "The Distress of Arjuna");
    let verses = body["verses"].as_array().unwrap();
    let numbers: Vec<u64> = verses.iter().map(|v| v["verse"].as_u64().unwrap()).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert!(verses.iter().all(|v| v["chapter"] == 1));
    assert!(verses[0]["original_text"].as_str().unwrap().ends_with(" ।।"));
}

#[test]
fn chapter_without_loaded_verses_is_still_listed() {
    let client = client_for(relative!("test_data/gita_raw.json"));
    let (status, body) = get_json(&client, "/chapters/7");
    assert_eq!(status, Status::Ok);
    assert_eq!(body["verses"].as_array().unwrap().len(), 0);
}

#[test]
fn unknown_chapter_is_not_found() {
    let client = client_for(relative!("test_data/gita_raw.json"));
    for uri in ["/chapters/19", "/chapters/0"] {
        let (status, body) = get_json(&client, uri);
        assert_eq!(status, Status::NotFound);
        assert_eq!(body["is_good"], false);
    }
}

#[test]
fn unknown_route_uses_json_catcher() {
    let client = client_for(relative!("test_data/gita_raw.json"));
    let (status, body) = get_json(&client, "/nowhere");
    assert_eq!(status, Status::NotFound);
    assert_eq!(body["reason"], "Resource /nowhere was not found");
}

#[test]
fn failed_ingestion_leaves_no_data() {
    let client = client_for(relative!("test_data/no_such_file.json"));
    let (status, body) = get_json(&client, "/status");
    assert_eq!(status, Status::Ok);
    assert_eq!(body["is_loaded"], false);
    assert_eq!(body["verse_count"], 0);
    assert_eq!(body["reason"], LOAD_FAILURE_MESSAGE);
    for uri in ["/verses/random", "/chapters", "/chapters/1"] {
        let (status, body) = get_json(&client, uri);
        assert_eq!(status, Status::ServiceUnavailable);
        assert_eq!(body["reason"], LOAD_FAILURE_MESSAGE);
    }
}

#[test]
fn malformed_document_is_a_failed_ingestion() {
    let client = client_for(relative!("test_data/malformed.json"));
    let (_, body) = get_json(&client, "/status");
    assert_eq!(body["is_loaded"], false);
}

#[test]
fn empty_document_loads_but_has_no_random_verse() {
    let client = client_for(relative!("test_data/empty.json"));
    let (_, body) = get_json(&client, "/status");
    assert_eq!(body["is_loaded"], true);
    let (status, _) = get_json(&client, "/verses/random");
    assert_eq!(status, Status::NotFound);
}

#[test]
fn version_is_reported() {
    let client = client_for(relative!("test_data/gita_cleaned.json"));
    let (status, body) = get_json(&client, "/version");
    assert_eq!(status, Status::Ok);
    assert_eq!(body["pkg_version"], env!("CARGO_PKG_VERSION"));
}
