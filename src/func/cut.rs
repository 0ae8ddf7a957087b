use std::fmt::Debug;

/// A barrier that fires a callback once it has been called `limit` times.
///
/// Every [`call()`](Cut::call) bumps the counter. The callback runs exactly once,
/// on the call that brings the counter to `limit`. Calls past the limit keep
/// counting but never run it again. A limit of zero is never reached.
///
/// # Examples
///
/// ```
/// use groupwise::func::Cut;
///
/// let mut done = false;
/// let mut barrier = Cut::new(3, || done = true);
///
/// assert!(!barrier.call());
/// assert!(!barrier.call());
/// assert!(barrier.call());
/// assert!(!barrier.call());
/// assert_eq!(barrier.count(), 4);
/// drop(barrier);
///
/// assert!(done);
/// ```
pub struct Cut<F> {
    limit: usize,
    count: usize,
    on_limit: Option<F>,
}

impl<F: FnOnce()> Cut<F> {
    /// Creates a barrier that runs `on_limit` on the `limit`-th call.
    #[inline]
    pub const fn new(limit: usize, on_limit: F) -> Self {
        Self {
            limit,
            count: 0,
            on_limit: Some(on_limit),
        }
    }

    /// Records one call. Returns `true` if this call ran the callback.
    pub fn call(&mut self) -> bool {
        // Saturate rather than wrap so an old barrier can never hit `limit` a second time.
        self.count = self.count.saturating_add(1);

        if self.count == self.limit
            && let Some(on_limit) = self.on_limit.take()
        {
            on_limit();
            true
        } else {
            false
        }
    }
}

impl<F> Cut<F> {
    /// How many times [`call()`](Cut::call) has run.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The call count at which the callback runs.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether the callback has run.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.on_limit.is_none()
    }
}

impl<F> Debug for Cut<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cut")
            .field("limit", &self.limit)
            .field("count", &self.count)
            .field("is_done", &self.is_done())
            .finish()
    }
}
