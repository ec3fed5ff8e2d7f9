//! Property-based invariant tests for reactive bounded values.
//!
//! These tests drive random write sequences through a `ReactiveBoundedValue`
//! and check the notification contract against a plain `BoundedValue` model:
//!
//! 1. State always matches the model (forwarding is exact).
//! 2. Every combined snapshot satisfies `min <= value <= max`.
//! 3. Each emission on a field channel is followed by exactly one combined
//!    emission carrying the same field value.
//! 4. Unforced writes emit iff the touched field changed.
//! 5. Forced successful writes always emit; rejected writes never do.
//! 6. The value channel's first item is the value at subscription time.
//! 7. After disposal nothing emits and writes are rejected.

use std::cell::RefCell;
use std::rc::Rc;

use bounded_reactive::{
    AnyChangeEvent, BoundedValue, Notify, ReactiveBoundedValue, ReactiveError, ReadBounded,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Op {
    SetValue(i32, bool),
    SetMin(i32, bool),
    SetMax(i32, bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Emission {
    Value(i32),
    Min(i32),
    Max(i32),
    Any(AnyChangeEvent<i32>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-200i32..=200, any::<bool>()).prop_map(|(v, f)| Op::SetValue(v, f)),
        (-200i32..=200, any::<bool>()).prop_map(|(v, f)| Op::SetMin(v, f)),
        (-200i32..=200, any::<bool>()).prop_map(|(v, f)| Op::SetMax(v, f)),
    ]
}

fn start_strategy() -> impl Strategy<Value = (i32, i32, i32)> {
    (-100i32..=100, 0i32..=100, 0i32..=100)
        .prop_map(|(min, span, offset)| (min + offset.min(span), min, min + span))
}

struct Harness {
    subject: ReactiveBoundedValue<i32>,
    log: Rc<RefCell<Vec<Emission>>>,
    _subs: Vec<bounded_reactive::Subscription>,
}

fn harness(value: i32, min: i32, max: i32) -> Harness {
    let subject = ReactiveBoundedValue::new(value, min, max).expect("valid start");
    let log = Rc::new(RefCell::new(Vec::new()));

    let l = Rc::clone(&log);
    let sv = subject.subscribe_value(move |v| l.borrow_mut().push(Emission::Value(*v)));
    let l = Rc::clone(&log);
    let smin = subject
        .observe_min()
        .subscribe(move |v| l.borrow_mut().push(Emission::Min(*v)));
    let l = Rc::clone(&log);
    let smax = subject
        .observe_max()
        .subscribe(move |v| l.borrow_mut().push(Emission::Max(*v)));
    let l = Rc::clone(&log);
    let sany = subject
        .observe_any()
        .subscribe(move |e| l.borrow_mut().push(Emission::Any(*e)));

    // Drop the replayed value so the log only holds reactions to writes.
    log.borrow_mut().clear();
    Harness {
        subject,
        log,
        _subs: vec![sv, smin, smax, sany],
    }
}

fn apply(h: &mut Harness, model: &mut BoundedValue<i32>, op: Op) -> (bool, bool, bool) {
    // Returns (accepted, field_changed, forced).
    match op {
        Op::SetValue(v, force) => {
            let before = *model.value();
            model.set_value(v);
            h.subject
                .set_value_with(v, Notify::from(force))
                .expect("value writes succeed while active");
            (true, before != *model.value(), force)
        }
        Op::SetMin(m, force) => {
            let before = *model.min();
            let accepted = model.try_set_min(m).is_ok();
            let got = h.subject.try_set_min_with(m, Notify::from(force));
            assert_eq!(got.is_ok(), accepted);
            (accepted, before != *model.min(), force)
        }
        Op::SetMax(m, force) => {
            let before = *model.max();
            let accepted = model.try_set_max(m).is_ok();
            let got = h.subject.try_set_max_with(m, Notify::from(force));
            assert_eq!(got.is_ok(), accepted);
            (accepted, before != *model.max(), force)
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1-5. Write sequences against the model
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn notifications_match_model(
        (value, min, max) in start_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..48),
    ) {
        let mut h = harness(value, min, max);
        let mut model = BoundedValue::new(value, min, max).expect("valid start");

        for op in ops {
            h.log.borrow_mut().clear();
            let (accepted, changed, forced) = apply(&mut h, &mut model, op);

            prop_assert_eq!(h.subject.bounded(), &model);

            let log = h.log.borrow().clone();
            let should_emit = accepted && (changed || forced);
            if !should_emit {
                prop_assert!(log.is_empty(), "unexpected emissions {:?} for {:?}", log, op);
                continue;
            }

            prop_assert_eq!(log.len(), 2, "expected field + combined for {:?}", op);
            let snapshot = AnyChangeEvent::new(*model.value(), *model.min(), *model.max());
            prop_assert_eq!(&log[1], &Emission::Any(snapshot));
            prop_assert!(snapshot.min <= snapshot.value && snapshot.value <= snapshot.max);

            let expected_field = match op {
                Op::SetValue(..) => Emission::Value(snapshot.value),
                Op::SetMin(..) => Emission::Min(snapshot.min),
                Op::SetMax(..) => Emission::Max(snapshot.max),
            };
            prop_assert_eq!(&log[0], &expected_field);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Replay-latest
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn late_subscriber_sees_current_value_first(
        (value, min, max) in start_strategy(),
        writes in proptest::collection::vec(-200i32..=200, 0..16),
    ) {
        let mut subject = ReactiveBoundedValue::new(value, min, max).expect("valid start");
        for w in writes {
            subject.set_value(w).expect("active");
        }

        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _sub = subject.subscribe_value(move |v| s.borrow_mut().push(*v));
        let seen = seen.borrow().clone();
        prop_assert_eq!(seen, vec![*subject.value()]);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Disposal is terminal
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nothing_emits_after_dispose(
        (value, min, max) in start_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..16),
    ) {
        let mut h = harness(value, min, max);
        h.subject.dispose();
        h.log.borrow_mut().clear();
        let before = h.subject.snapshot();

        for op in ops {
            let result = match op {
                Op::SetValue(v, f) => h.subject.set_value_with(v, Notify::from(f)),
                Op::SetMin(m, f) => h.subject.try_set_min_with(m, Notify::from(f)),
                Op::SetMax(m, f) => h.subject.try_set_max_with(m, Notify::from(f)),
            };
            prop_assert_eq!(result, Err(ReactiveError::Disposed));
        }

        prop_assert!(h.log.borrow().is_empty());
        prop_assert_eq!(h.subject.snapshot(), before);
    }
}
