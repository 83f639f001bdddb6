//! Outcome 存储语义契约测试
//!
//! # 教案级注释概览
//!
//! - **核心目标 (Why)**：验证复制赋值、移动赋值、转换式赋值与交换在（源状态，目标状态）的全部组合下
//!   都只留下一个存活载荷，且每个载荷恰好析构一次；构造失败（panic 或 `TryFrom` 拒绝）时目标保持原状。
//! - **设计手法 (How)**：`Probe` 载荷把析构与克隆事件写入共享日志，`PanickyClone` 在克隆时 panic，
//!   用以模拟“构造新载荷失败”。
//! - **合同与边界 (What)**：全部用例只经由公开 API 观察状态，不依赖存储层内部表示。

use std::{
    cell::RefCell,
    panic::{AssertUnwindSafe, catch_unwind},
    rc::Rc,
};

use aio_core::{ConversionError, Outcome, fail, success};

type Log = Rc<RefCell<Vec<String>>>;

#[derive(Debug)]
struct Probe {
    name: &'static str,
    log: Log,
}

impl Probe {
    fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: Rc::clone(log),
        }
    }
}

impl Clone for Probe {
    fn clone(&self) -> Self {
        self.log.borrow_mut().push(format!("clone {}", self.name));
        Self {
            name: self.name,
            log: Rc::clone(&self.log),
        }
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("drop {}", self.name));
    }
}

#[derive(Debug, PartialEq)]
struct PanickyClone(u8);

impl Clone for PanickyClone {
    fn clone(&self) -> Self {
        panic!("clone of PanickyClone({}) refused", self.0);
    }
}

fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

/// 四种赋值情形：双方成功、双方失败、目标成功源失败、目标失败源成功。
#[test]
fn move_assignment_covers_all_four_state_pairs() {
    let log = new_log();

    let mut both_ok: Outcome<Probe, Probe> = success(Probe::new("dst-v", &log));
    both_ok.assign(success(Probe::new("src-v", &log)));
    assert_eq!(both_ok.value().name, "src-v");

    let mut both_err: Outcome<Probe, Probe> = fail(Probe::new("dst-e", &log)).into();
    both_err.assign(fail(Probe::new("src-e", &log)).into());
    assert_eq!(both_err.error().name, "src-e");

    let mut ok_then_err: Outcome<Probe, Probe> = success(Probe::new("old-v", &log));
    ok_then_err.assign(fail(Probe::new("new-e", &log)).into());
    assert!(ok_then_err.is_failure());

    let mut err_then_ok: Outcome<Probe, Probe> = fail(Probe::new("old-e", &log)).into();
    err_then_ok.assign(success(Probe::new("new-v", &log)));
    assert!(err_then_ok.has_value());

    assert_eq!(
        entries(&log),
        vec!["drop dst-v", "drop dst-e", "drop old-v", "drop old-e"],
        "每个被覆盖的载荷恰好析构一次"
    );
}

/// 复制赋值的四种情形：新载荷总是先克隆出来，旧载荷随后析构一次，源保持不变。
#[test]
fn clone_from_covers_all_four_state_pairs() {
    let log = new_log();

    let mut both_ok: Outcome<Probe, Probe> = success(Probe::new("dst-v", &log));
    let src_ok: Outcome<Probe, Probe> = success(Probe::new("src-v", &log));
    both_ok.clone_from(&src_ok);
    assert_eq!(both_ok.value().name, "src-v");

    let mut both_err: Outcome<Probe, Probe> = fail(Probe::new("dst-e", &log)).into();
    let src_err: Outcome<Probe, Probe> = fail(Probe::new("src-e", &log)).into();
    both_err.clone_from(&src_err);
    assert_eq!(both_err.error().name, "src-e");

    let mut ok_then_err: Outcome<Probe, Probe> = success(Probe::new("old-v", &log));
    let new_err: Outcome<Probe, Probe> = fail(Probe::new("new-e", &log)).into();
    ok_then_err.clone_from(&new_err);
    assert_eq!(ok_then_err.error().name, "new-e");

    let mut err_then_ok: Outcome<Probe, Probe> = fail(Probe::new("old-e", &log)).into();
    let new_ok: Outcome<Probe, Probe> = success(Probe::new("new-v", &log));
    err_then_ok.clone_from(&new_ok);
    assert_eq!(err_then_ok.value().name, "new-v");

    assert_eq!(
        entries(&log),
        vec![
            "clone src-v",
            "drop dst-v",
            "clone src-e",
            "drop dst-e",
            "clone new-e",
            "drop old-v",
            "clone new-v",
            "drop old-e",
        ]
    );
    assert_eq!(src_ok.value().name, "src-v");
    assert_eq!(src_err.error().name, "src-e");
    assert_eq!(new_err.error().name, "new-e");
    assert_eq!(new_ok.value().name, "new-v");
}

#[test]
fn clone_from_stages_cross_kind_payload_before_dropping_old_one() {
    let log = new_log();
    let mut dst: Outcome<Probe, Probe> = success(Probe::new("v", &log));
    let src: Outcome<Probe, Probe> = fail(Probe::new("e", &log)).into();

    dst.clone_from(&src);

    assert_eq!(entries(&log), vec!["clone e", "drop v"]);
    assert_eq!(dst.error().name, "e");
}

#[test]
fn panicking_clone_leaves_destination_untouched() {
    let mut dst: Outcome<u8, PanickyClone> = success(9);
    let src: Outcome<u8, PanickyClone> = fail(PanickyClone(1)).into();

    let outcome = catch_unwind(AssertUnwindSafe(|| dst.clone_from(&src)));

    assert!(outcome.is_err(), "克隆失败必须以 panic 形式传播");
    assert!(dst.value_eq(&9), "目标仍持有原始成功载荷");
}

#[test]
fn panicking_clone_into_failure_destination_leaves_it_untouched() {
    let mut dst: Outcome<PanickyClone, u8> = fail(3).into();
    let src: Outcome<PanickyClone, u8> = success(PanickyClone(1));

    let outcome = catch_unwind(AssertUnwindSafe(|| dst.clone_from(&src)));

    assert!(outcome.is_err());
    assert!(dst.error_eq(&3), "目标仍持有原始失败载荷");
}

#[test]
fn panicking_clone_between_failures_keeps_destination_error() {
    let mut dst: Outcome<u8, PanickyClone> = fail(PanickyClone(2)).into();
    let src: Outcome<u8, PanickyClone> = fail(PanickyClone(1)).into();

    let outcome = catch_unwind(AssertUnwindSafe(|| dst.clone_from(&src)));

    assert!(outcome.is_err());
    assert!(dst.error_eq(&PanickyClone(2)));
}

#[test]
fn try_assign_rejection_keeps_destination() {
    let mut dst: Outcome<u8, String> = fail(String::from("original")).into();

    let rejected = dst.try_assign(success::<u32, String>(1_000));

    assert!(matches!(rejected, Err(ConversionError::Value(_))));
    assert!(dst.error_eq("original"));
}

#[test]
fn try_assign_commits_converted_payload() {
    let mut dst: Outcome<u8, String> = fail(String::from("original")).into();

    dst.try_assign(success::<u32, String>(200))
        .expect("200 fits in u8");

    assert!(dst.value_eq(&200));
}

#[test]
fn swap_mixed_states_exchanges_without_drops() {
    let log = new_log();
    let mut a: Outcome<Probe, Probe> = success(Probe::new("v", &log));
    let mut b: Outcome<Probe, Probe> = fail(Probe::new("e", &log)).into();

    a.swap(&mut b);

    assert!(entries(&log).is_empty());
    assert_eq!(a.error().name, "e");
    assert_eq!(b.value().name, "v");
}

#[test]
fn emplace_with_panicking_builder_keeps_old_state() {
    let mut r: Outcome<String, u8> = fail(3).into();

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        r.emplace_with(|| panic!("builder failed"));
    }));

    assert!(outcome.is_err());
    assert!(r.error_eq(&3));
}

#[test]
fn emplace_replaces_any_state_and_returns_slot() {
    let mut r: Outcome<Vec<u8>, &str> = fail("boom").into();
    r.emplace(vec![1]).push(2);
    assert_eq!(r.value(), &vec![1, 2]);
}
