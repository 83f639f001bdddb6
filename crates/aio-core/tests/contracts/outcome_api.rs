//! Outcome 公开 API 契约测试：构造、访问器、组合子、相等性与 `()` 特化。

use std::panic::catch_unwind;

use aio_core::{
    BadOutcomeAccess, Failure, Outcome, fail, fail_from, success, success_void,
};
use tracing_test::traced_test;

#[derive(Debug, PartialEq, Eq)]
struct HttpError {
    status: u16,
    reason: String,
}

impl From<(u16, &str)> for HttpError {
    fn from((status, reason): (u16, &str)) -> Self {
        Self {
            status,
            reason: reason.to_owned(),
        }
    }
}

/// 场景：`success(5).and_then(|x| success(x + 1)) == success(6)`。
#[test]
fn and_then_chains_success() {
    let r: Outcome<i32, String> = success(5);
    assert_eq!(r.and_then(|x| success(x + 1)), success(6));
}

/// 场景：失败的 `Outcome<i32, String>` 经 `transform` 后仍为失败且错误不变。
#[test]
fn transform_on_failure_keeps_error() {
    let r: Outcome<i32, String> = fail(String::from("boom")).into();
    let mut invoked = false;

    let mapped = r.transform(|x| {
        invoked = true;
        x * 2
    });

    assert!(!mapped.has_value());
    assert_eq!(mapped.error(), "boom");
    assert!(!invoked);
}

#[test]
fn helpers_build_expected_states() {
    let ok: Outcome<u8, &str> = success(1);
    assert!(ok.has_value());
    assert_eq!(*ok.value(), 1);

    let err: Outcome<u8, &str> = fail("bad").into();
    assert!(err.is_failure());
    assert_eq!(*err.error(), "bad");

    let in_place: Outcome<(), HttpError> = fail_from::<HttpError, _>((503, "unavailable")).into();
    assert_eq!(in_place.error().status, 503);
    assert_eq!(in_place.error().reason, "unavailable");
}

#[test]
fn value_or_and_error_or_never_panic() {
    let ok: Outcome<String, u8> = success(String::from("v"));
    let err: Outcome<String, u8> = fail(4).into();

    assert_eq!(ok.value_or("fallback"), "v");
    assert_eq!(err.value_or("fallback"), "fallback");
    assert_eq!(ok.error_or(0), 0);
    assert_eq!(err.error_or(0), 4);
    assert_eq!(err.into_value_or("moved"), "moved");
}

#[test]
fn equality_covers_outcomes_values_and_failures() {
    let ok: Outcome<i32, String> = success(3);
    let err: Outcome<i32, String> = fail(String::from("x")).into();

    assert_eq!(ok, success(3));
    assert_ne!(ok, err);
    assert!(ok.value_eq(&3));
    assert!(!err.value_eq(&3));
    assert!(err == fail("x"));
    assert!(ok != fail("x"));
    assert!(err.error_eq("x"));
}

#[test]
fn outcomes_of_different_payload_types_compare_by_live_side() {
    let owned: Outcome<u32, String> = fail(String::from("x")).into();
    let borrowed: Outcome<u32, &str> = fail("x").into();
    let ok: Outcome<u32, &str> = success(1);

    assert!(owned.outcome_eq(&borrowed));
    assert!(!owned.outcome_eq(&ok));
    assert!(success::<u32, String>(1).outcome_eq(&ok));
    assert!(!success::<u32, String>(2).outcome_eq(&ok));
}

#[test]
fn void_value_on_failure_panics_and_check_keeps_the_error() {
    let err: Outcome<(), String> = fail(String::from("denied")).into();

    let payload = catch_unwind(|| *err.value()).expect_err("value() must panic on failure");

    assert!(payload.downcast_ref::<BadOutcomeAccess<String>>().is_none());
    assert_eq!(err.check(), Err(BadOutcomeAccess::new(String::from("denied"))));
}

#[test]
fn converting_construction_preserves_live_side() {
    let src: Outcome<u8, &str> = success(7);
    let widened: Outcome<u64, String> = Outcome::convert_from(src);
    assert!(widened.value_eq(&7));

    let src: Outcome<u8, &str> = fail("e").into();
    let widened: Outcome<u64, String> = Outcome::convert_from(src);
    assert!(widened.error_eq("e"));

    let narrowed = Outcome::<u8, String>::try_convert_from(success::<u32, String>(256));
    assert!(narrowed.is_err_and(|e| e.is_value_side()));
}

#[test]
fn reference_and_mutable_combinators_leave_source_usable() {
    let mut r: Outcome<Vec<u8>, String> = success(vec![1, 2]);

    let len = r.transform_ref(Vec::len);
    let doubled = r.and_then_ref(|v| success(v.iter().map(|b| b * 2).collect::<Vec<_>>()));
    r.transform_mut(|v| v.push(3)).into_value();

    assert!(len.value_eq(&2));
    assert_eq!(doubled.value(), &vec![2, 4]);
    assert_eq!(r.value(), &vec![1, 2, 3]);
}

#[test]
fn or_else_and_transform_error_work_on_failure_side() {
    let r: Outcome<u8, &str> = fail("retry").into();

    let recovered = r.or_else_ref(|e| {
        if *e == "retry" {
            success::<u8, ()>(1)
        } else {
            fail(()).into()
        }
    });
    let wrapped = r.transform_error(|e| format!("wrapped: {e}"));

    assert!(recovered.value_eq(&1));
    assert!(wrapped.error_eq("wrapped: retry"));
}

#[test]
fn result_interop_allows_question_mark() {
    fn parse(input: &str) -> Outcome<u8, String> {
        input.parse::<u8>().map_err(|e| e.to_string()).into()
    }

    fn sum(a: &str, b: &str) -> Result<u8, String> {
        Ok(parse(a).into_result()? + parse(b).into_result()?)
    }

    assert_eq!(sum("1", "2"), Ok(3));
    assert!(sum("1", "x").is_err());
}

#[test]
fn failure_wrapper_compares_by_payload() {
    assert_eq!(Failure::new(String::from("a")), fail("a"));
    let mut a = fail(1);
    let mut b = fail(2);
    a.swap(&mut b);
    assert_eq!((*a.error(), *b.error()), (2, 1));
}

#[test]
fn default_builds_success_of_default_payload() {
    let r: Outcome<Vec<u8>, String> = Outcome::default();
    assert!(r.value_eq(&Vec::<u8>::new()));
}

#[test]
fn void_outcome_check_returns_stored_error() {
    let ok: Outcome<(), &str> = success_void();
    assert_eq!(ok.check(), Ok(()));

    let err: Outcome<(), &str> = fail("denied").into();
    assert_eq!(err.check(), Err(BadOutcomeAccess::new("denied")));
}

#[test]
fn void_outcome_raise_surfaces_error_as_panic_payload() {
    let err: Outcome<(), String> = fail(String::from("denied")).into();

    let payload = catch_unwind(move || err.raise()).expect_err("raise must panic on failure");
    let bad = payload
        .downcast::<BadOutcomeAccess<String>>()
        .expect("panic payload is BadOutcomeAccess<String>");

    assert_eq!(bad.error(), "denied");
    success_void::<String>().raise();
}

#[test]
#[traced_test]
fn rejected_converting_assignment_is_logged() {
    let mut dst: Outcome<u8, String> = success(1);

    let _ = dst.try_assign(success::<i64, String>(-1));

    assert!(dst.value_eq(&1));
    assert!(logs_contain("converting assignment rejected"));
}
