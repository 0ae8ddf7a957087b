use std::fmt::Debug;

/// A guard that runs a function at most once and remembers what it returned.
///
/// The first [`call()`](JustOnce::call) runs the function with its argument.
/// Later calls ignore their argument and hand back the remembered result.
///
/// # Examples
///
/// ```
/// use groupwise::func::JustOnce;
///
/// let mut runs = 0;
/// let mut init = JustOnce::new(|seed: u32| {
///     runs += 1;
///     seed * 10
/// });
///
/// assert_eq!(init.call(4), Some(&40));
/// assert_eq!(init.call(7), Some(&40));
/// drop(init);
///
/// assert_eq!(runs, 1);
/// ```
pub struct JustOnce<F, R> {
    f: Option<F>,
    result: Option<R>,
}

impl<F, R> JustOnce<F, R> {
    /// Wraps `f`. Nothing runs until the first call.
    #[inline]
    pub const fn new(f: F) -> Self {
        Self {
            f: Some(f),
            result: None,
        }
    }

    /// Runs the wrapped function if it has never run, then returns its result.
    ///
    /// Returns `None` only if the first run panicked and the panic was caught:
    /// the function is gone and there is no result to hand back.
    pub fn call<A>(&mut self, arg: A) -> Option<&R>
    where
        F: FnOnce(A) -> R,
    {
        if let Some(f) = self.f.take() {
            self.result = Some(f(arg));
        }

        self.result.as_ref()
    }

    /// Whether the wrapped function has been consumed.
    #[inline]
    pub fn has_run(&self) -> bool {
        self.f.is_none()
    }

    /// Returns the remembered result, if the function has run.
    #[inline]
    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    /// Consumes the guard and returns the remembered result, if any.
    #[inline]
    pub fn into_result(self) -> Option<R> {
        self.result
    }
}

impl<F, R: Debug> Debug for JustOnce<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JustOnce")
            .field("has_run", &self.has_run())
            .field("result", &self.result)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::JustOnce;

    #[test]
    fn runs_once() {
        let mut calls = Vec::new();
        let mut guard = JustOnce::new(|tag: &str| {
            calls.push(tag.to_owned());
            tag.len()
        });

        assert!(!guard.has_run());
        assert_eq!(guard.result(), None);
        assert_eq!(guard.call("first"), Some(&5));
        assert_eq!(guard.call("second call"), Some(&5));
        assert!(guard.has_run());
        assert_eq!(guard.into_result(), Some(5));

        assert_eq!(calls, ["first"]);
    }

    #[test]
    fn separate_guards_do_not_share_state() {
        let mut left = JustOnce::new(|num: i32| num);
        let mut right = JustOnce::new(|num: i32| num);

        assert_eq!(left.call(1), Some(&1));
        assert_eq!(right.call(2), Some(&2));
    }

    #[test]
    fn panicked_run_is_not_retried() {
        let mut guard = JustOnce::new(|fail: bool| {
            assert!(!fail, "asked to fail");
            1
        });

        let outcome = catch_unwind(AssertUnwindSafe(|| guard.call(true).copied()));
        assert!(outcome.is_err());

        assert!(guard.has_run());
        assert_eq!(guard.call(false), None);
    }
}
