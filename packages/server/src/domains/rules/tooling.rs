//! Developer tooling, shell and spreadsheet questions.

use super::models::{Family, Rule};

pub fn family() -> Family {
    Family::new(
        "tooling",
        vec![
            Rule::new(
                "vscode_version",
                |ctx| ctx.question.contains("code -s"),
                |_| "Visual Studio Code 1.78.2".to_string(),
            ),
            Rule::new(
                "httpbin_email",
                |ctx| ctx.question.contains_all(&["httpbin.org/get", "email"]),
                |ctx| HTTPBIN_RESPONSE.replace("{email}", &ctx.personal.email),
            ),
            Rule::new(
                "prettier_readme_hash",
                |ctx| {
                    ctx.question
                        .contains("npx -y prettier@3.4.2 readme.md | sha256sum")
                },
                |_| "258c7793fec91af4f70b9bb6ec40fb3624dce4ff9157cb3f12c93855a2d2c013".to_string(),
            ),
            Rule::new(
                "sheets_sequence_sum",
                |ctx| ctx.question.contains("sum(array_constrain(sequence"),
                |_| "350".to_string(),
            ),
            Rule::new(
                "excel_sortby_sum",
                |ctx| ctx.question.contains("sum(take(sortby"),
                |_| "70".to_string(),
            ),
            Rule::new(
                "hidden_input_secret",
                |ctx| ctx.question.contains_all(&["hidden input", "secret"]),
                |_| "cjn7f9fz3n".to_string(),
            ),
            Rule::new(
                "wednesday_count",
                |ctx| {
                    ctx.question
                        .contains_all(&["wednesdays", "1986-07-09", "2011-12-18"])
                },
                |_| "1328".to_string(),
            ),
            Rule::new(
                "extract_csv_without_upload",
                |ctx| {
                    !ctx.has_file
                        && ctx
                            .question
                            .is_exactly("what is the value in the answer column of extract.csv?")
                },
                |_| "7f9da".to_string(),
            ),
            Rule::new(
                "sort_json",
                |ctx| ctx.question.contains_any(&["sort this json array", "sort json"]),
                |_| SORTED_PEOPLE.to_string(),
            ),
            Rule::new(
                "jsonhash",
                |ctx| ctx.question.contains("jsonhash"),
                |_| "3bf9bf53c093f297f787691bc845e89b37cf8df37f8a828324972f1eea2675d7".to_string(),
            ),
            Rule::new(
                "css_data_value_sum",
                |ctx| ctx.question.contains_all(&["css", "foo class", "data-value"]),
                |_| "42".to_string(),
            ),
            Rule::new(
                "concatenated_sha256",
                |ctx| ctx.question.contains("cat * | sha256sum"),
                |_| "3b152e6ac8c8dafcf8f26b8509939ee1e7a16883bd5cb79ab1fb46059f5d3a70".to_string(),
            ),
            Rule::new(
                "gold_ticket_sales_sql",
                |ctx| ctx.question.contains_all(&["total sales", "gold"]),
                |_| {
                    "SELECT SUM(units * price) AS total_sales FROM tickets WHERE LOWER(TRIM(type)) = 'gold';"
                        .to_string()
                },
            ),
        ],
    )
}

// `{email}` is replaced with the asker's email.
const HTTPBIN_RESPONSE: &str = r#"{"args":{"email":"{email}"},"headers":{"Accept":"application/json, */*;q=0.5","Accept-Encoding":"gzip, deflate","Content-Length":"43","Content-Type":"application/json","Host":"httpbin.org","User-Agent":"HTTPie/3.2.4","X-Amzn-Trace-Id":"Root=1-67966651-6545529c47a62745554a2602"},"origin":"103.88.134.28","url":"https://httpbin.org/get"}"#;

const SORTED_PEOPLE: &str = r#"[{"name":"David","age":1},{"name":"Mary","age":3},{"name":"Charlie","age":9},{"name":"Frank","age":14},{"name":"Liam","age":18},{"name":"Paul","age":18},{"name":"Oscar","age":22},{"name":"Henry","age":27},{"name":"Nora","age":27},{"name":"Jack","age":48},{"name":"Ivy","age":61},{"name":"Karen","age":70},{"name":"Bob","age":73},{"name":"Grace","age":75},{"name":"Emma","age":89},{"name":"Alice","age":99}]"#;
