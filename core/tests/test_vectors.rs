//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and either an expected parse result or an expected error kind. Bodies are
//! compared as parsed JSON so field order does not matter.

use serde_json::Value;
use todo_core::{
    ApiError, CreateTodo, HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoItem, UpdateTodo,
};

const BASE_URL: &str = "http://localhost:8080";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Compare a built request with the case's `expected_request`.
fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(
        req.method,
        parse_method(expected["method"].as_str().unwrap()),
        "{name}: method"
    );
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );

    match expected.get("body") {
        Some(body) => {
            let actual: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&actual, body, "{name}: body");
            assert_eq!(
                req.headers,
                vec![("content-type".to_string(), "application/json".to_string())],
                "{name}: headers"
            );
        }
        None => {
            assert!(req.body.is_none(), "{name}: body should be None");
            assert!(req.headers.is_empty(), "{name}: headers should be empty");
        }
    }
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn check_error(name: &str, err: ApiError, expected: &str) {
    match expected {
        "NotFound" => assert!(
            matches!(err, ApiError::NotFound),
            "{name}: expected NotFound, got {err:?}"
        ),
        "BadRequest" => assert!(
            matches!(err, ApiError::BadRequest { .. }),
            "{name}: expected BadRequest, got {err:?}"
        ),
        "HttpError" => assert!(
            matches!(err, ApiError::HttpError { .. }),
            "{name}: expected HttpError, got {err:?}"
        ),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

/// Check a parse result against `expected_error` or `expected_result`.
fn check_result<T>(name: &str, case: &Value, result: Result<T, ApiError>)
where
    T: PartialEq + std::fmt::Debug + serde::de::DeserializeOwned,
{
    if let Some(expected_error) = case.get("expected_error") {
        check_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
    } else {
        let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(result.unwrap(), expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        check_request(name, &c.build_list_todos(), &case["expected_request"]);

        let result: Result<Vec<TodoItem>, _> = c.parse_list_todos(simulated_response(&case));
        check_result(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: CreateTodo = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_create_todo(&input).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result: Result<TodoItem, _> = c.parse_create_todo(simulated_response(&case));
        check_result(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        let input: UpdateTodo = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_update_todo(id, &input).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result: Result<TodoItem, _> = c.parse_update_todo(simulated_response(&case));
        check_result(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        check_request(name, &c.build_delete_todo(id), &case["expected_request"]);

        let result = c.parse_delete_todo(simulated_response(&case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}
