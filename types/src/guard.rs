//! Predicate-guarded event handlers.
//!
//! A raw event stream (key presses, say) is rarely interesting on its own;
//! what the application wants is "the `s` key was pressed". `guarded` turns a
//! predicate and an action into a single handler that fires the action only
//! when the predicate holds, so the condition and the behavior stay separate
//! and can vary independently.

/// Wrap `predicate` and `action` into one handler.
///
/// The returned handler evaluates `predicate` on each incoming event and
/// invokes `action` exactly when it returns true; otherwise the event is
/// dropped. Side effects are entirely the action's business.
pub fn guarded<E, P, A>(predicate: P, mut action: A) -> impl FnMut(&E)
where
    P: Fn(&E) -> bool,
    A: FnMut(&E),
{
    move |event| {
        if predicate(event) {
            action(event);
        }
    }
}

/// Like [`guarded`], but with a branch for the failing case.
///
/// Exactly one of `on_true`/`on_false` runs per event.
pub fn fork<E, P, A, B>(predicate: P, mut on_true: A, mut on_false: B) -> impl FnMut(&E)
where
    P: Fn(&E) -> bool,
    A: FnMut(&E),
    B: FnMut(&E),
{
    move |event| {
        if predicate(event) {
            on_true(event);
        } else {
            on_false(event);
        }
    }
}
