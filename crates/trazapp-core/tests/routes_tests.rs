// Integration tests for client-side route resolution.

use trazapp_core::*;

#[test]
fn parses_known_paths() {
    assert_eq!(Route::parse("/", ""), Route::Landing);
    assert_eq!(Route::parse("", ""), Route::Landing);
    assert_eq!(Route::parse("/login", ""), Route::Login);
    assert_eq!(Route::parse("/login/", "?x=1"), Route::Login);
    assert_eq!(Route::parse("/register", ""), Route::Register { plan: None });
    assert_eq!(Route::parse("/nope", ""), Route::Landing);
}

#[test]
fn register_reads_plan_query() {
    assert_eq!(
        Route::parse("/register", "?plan=team"),
        Route::Register {
            plan: Some("team".to_string())
        }
    );
    assert_eq!(
        Route::parse("/register", "utm=a&plan=ONG%20Club"),
        Route::Register {
            plan: Some("ONG Club".to_string())
        }
    );
    assert_eq!(Route::parse("/register", "?plan="), Route::Register { plan: None });
}

#[test]
fn href_round_trips_through_parse() {
    let routes = [
        Route::Landing,
        Route::Login,
        Route::Register { plan: None },
        Route::Register {
            plan: Some("a b&c".to_string()),
        },
    ];
    for r in routes {
        let href = r.href();
        let (path, query) = href.split_once('?').unwrap_or((href.as_str(), ""));
        assert_eq!(Route::parse(path, query), r);
    }
}

#[test]
fn query_parsing_decodes_and_tolerates_junk() {
    let q = parse_query("?a=1&b=hello+world&c&d=%zz&e=%41");
    assert_eq!(q["a"], "1");
    assert_eq!(q["b"], "hello world");
    assert_eq!(q["c"], "");
    assert_eq!(q["d"], "%zz");
    assert_eq!(q["e"], "A");
    assert!(parse_query("").is_empty());
}

#[test]
fn signed_percent_escape_stays_literal() {
    let q = parse_query("plan=%+1team&x=%-f&y=%2b");
    assert_eq!(q["plan"], "%+1team");
    assert_eq!(q["x"], "%-f");
    assert_eq!(q["y"], "+");
    assert_eq!(
        Route::parse("/register", "?plan=%+1team"),
        Route::Register {
            plan: Some("%+1team".to_string())
        }
    );
}
